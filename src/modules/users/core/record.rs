// UserRecord is the canonical domain state for one registered user.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free.
//
// Notes
// - The password is held exactly as it was supplied. Hashing is out of scope
//   for this service; no serde derives here so a record never crosses the
//   transport boundary by accident.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub email: String,
}
