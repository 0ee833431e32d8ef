// Pure decision function for registration.
//
// Purpose
// - Validate the command against the current state and produce a record on success.
//
// Responsibilities
// - Enforce rules in order: username uniqueness, then password length, then
//   email shape. The first failing rule wins.
// - Never perform input or output; the caller looks up the existing record.

use crate::modules::users::core::record::UserRecord;
use crate::modules::users::core::validation::{is_valid_email, meets_password_minimum};
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::modules::users::use_cases::register_user::decision::{DecideError, Decision};

pub fn decide_register(existing: Option<&UserRecord>, command: RegisterUser) -> Decision {
    if existing.is_some() {
        return Decision::Rejected {
            reason: DecideError::UsernameTaken,
        };
    }
    if !meets_password_minimum(&command.password) {
        return Decision::Rejected {
            reason: DecideError::PasswordTooShort,
        };
    }
    if !is_valid_email(&command.email) {
        return Decision::Rejected {
            reason: DecideError::InvalidEmail,
        };
    }
    Decision::Accepted {
        record: UserRecord {
            username: command.username,
            password: command.password,
            email: command.email,
        },
    }
}
