// Command data type for registering a user.
//
// Purpose
// - Express the intent to create an account with username, password, and email.
//
// Responsibilities
// - Carry input data for the decider to validate and convert into a record.
// - Be independent of transport layer details (not tied to HTTP).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub email: String,
}
