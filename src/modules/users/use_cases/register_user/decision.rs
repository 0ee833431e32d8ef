use crate::modules::users::core::record::UserRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("username already taken")]
    UsernameTaken,

    #[error("password is too short")]
    PasswordTooShort,

    #[error("invalid email")]
    InvalidEmail,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { record: UserRecord },
    Rejected { reason: DecideError },
}
