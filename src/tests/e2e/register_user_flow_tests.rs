// End to end flows over the real wiring: handler, in memory store, queries.

use crate::modules::users::use_cases::check_user_registration::queries_port::UserQueries;
use crate::modules::users::use_cases::register_user::decision::DecideError;
use crate::modules::users::use_cases::register_user::handler::{
    ApplicationError, RegisterUserHandler,
};
use crate::shared::infrastructure::user_store::UserStore;
use crate::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
use crate::tests::fixtures::commands::register_user::RegisterUserBuilder;
use std::sync::Arc;

fn make_handler() -> (RegisterUserHandler<InMemoryUserStore>, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    (RegisterUserHandler::new(store.clone()), store)
}

#[tokio::test]
async fn registers_a_user_and_rejects_the_duplicate() {
    let (handler, store) = make_handler();

    handler
        .handle(RegisterUserBuilder::new().build())
        .await
        .unwrap();

    let retry = RegisterUserBuilder::new()
        .password("newpassword456")
        .email("john2@example.com")
        .build();
    let result = handler.handle(retry).await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DecideError::UsernameTaken))
    ));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn rejects_a_short_password_without_storing_anything() {
    let (handler, store) = make_handler();

    let result = handler
        .handle(RegisterUserBuilder::new().password("short").build())
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DecideError::PasswordTooShort))
    ));
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn rejects_a_malformed_email_without_storing_anything() {
    let (handler, store) = make_handler();

    for email in ["invalid-email", "john@.com", "user@domain."] {
        let result = handler
            .handle(RegisterUserBuilder::new().email(email).build())
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::InvalidEmail))
        ));
    }
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn answers_the_registration_query_only_for_stored_users() {
    let (handler, store) = make_handler();

    handler
        .handle(RegisterUserBuilder::new().build())
        .await
        .unwrap();

    assert!(store.is_registered("john_doe").await.unwrap());
    assert!(!store.is_registered("nobody").await.unwrap());
    assert!(!store.is_registered("").await.unwrap());
}

#[tokio::test]
async fn a_failed_registration_does_not_make_the_user_queryable() {
    let (handler, store) = make_handler();

    let result = handler
        .handle(
            RegisterUserBuilder::new()
                .username("jane_doe")
                .password("short")
                .build(),
        )
        .await;

    assert!(result.is_err());
    assert!(!store.is_registered("jane_doe").await.unwrap());
}

#[tokio::test]
async fn accepts_usernames_with_unrestricted_charset() {
    let (handler, store) = make_handler();

    handler
        .handle(RegisterUserBuilder::new().username("john_doe$123").build())
        .await
        .unwrap();

    assert!(store.is_registered("john_doe$123").await.unwrap());
}

#[tokio::test]
async fn stores_the_password_exactly_as_given() {
    let (handler, store) = make_handler();

    handler
        .handle(RegisterUserBuilder::new().password("päss word 123").build())
        .await
        .unwrap();

    let stored = store.find_by_username("john_doe").await.unwrap().unwrap();
    assert_eq!(stored.password, "päss word 123");
}

// The username charset is unrestricted, so the empty string is a valid key.
#[tokio::test]
async fn registers_the_empty_username() {
    let (handler, store) = make_handler();

    handler
        .handle(RegisterUserBuilder::new().username("").build())
        .await
        .unwrap();

    assert!(store.is_registered("").await.unwrap());
}

#[tokio::test]
async fn produces_an_outcome_for_extreme_inputs() {
    let (handler, store) = make_handler();

    let long = "x".repeat(100_000);
    handler
        .handle(
            RegisterUserBuilder::new()
                .username(long.clone())
                .password(long.clone())
                .email(format!("{long}@example.com"))
                .build(),
        )
        .await
        .unwrap();

    let result = handler
        .handle(RegisterUserBuilder::new().email(long).build())
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DecideError::InvalidEmail))
    ));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn registers_many_distinct_users() {
    let (handler, store) = make_handler();

    for i in 0..25 {
        handler
            .handle(
                RegisterUserBuilder::new()
                    .username(format!("user_{i}"))
                    .email(format!("user{i}@example.com"))
                    .build(),
            )
            .await
            .unwrap();
    }

    assert_eq!(store.len().await, 25);
    assert!(store.is_registered("user_0").await.unwrap());
    assert!(store.is_registered("user_24").await.unwrap());
}
