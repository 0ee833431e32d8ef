// Validation predicates for registration input.
//
// Purpose
// - Keep the accepted/rejected boundary for emails and passwords in one place.
//
// Boundaries
// - Pure functions over string slices. No input or output.
//
// Notes
// - The email shape is deliberately simple and not RFC compliant: one or more
//   of [a-zA-Z0-9_.+-], a literal '@', one or more of [a-zA-Z0-9-], a literal
//   '.', then one or more of [a-zA-Z0-9-.]. The whole string must match.
//   Consecutive dots after the domain dot are therefore accepted, while
//   "user@.com" and "user@domain." are rejected.
// - Password length is counted in characters, not bytes.

use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

pub fn meets_password_minimum(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}
