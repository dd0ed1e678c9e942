// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Names, ids, and message texts shared by the rendered account forms and the client-side validators.

pub const EMAIL: &str = "email";
pub const FIRSTNAME: &str = "firstname";
pub const SURNAME: &str = "surname";
pub const PASSWORD: &str = "password";
pub const PASSWORD_CONFIRM: &str = "password-confirm";

/// Suffix appended to an input's id to get the id of its feedback element
pub const INVALID_FEEDBACK_SUFFIX: &str = "-invalid-feedback";

/// Class marking an input as invalid
pub const INVALID_CLASS: &str = "is-invalid";

/// Custom validity message used to veto submission; browsers don't show it since the feedback element is used instead.
pub const CUSTOM_VALIDITY_INVALID: &str = "Invalid";

pub const EMAIL_TAKEN_MESSAGE: &str = "Email already taken.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Password does not match.";

/// Gets the id of the feedback element belonging to the input with the given id
pub fn invalid_feedback_id(input_id: &str) -> String {
	format!("{}{}", input_id, INVALID_FEEDBACK_SUFFIX)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn feedback_id_follows_input_id() {
		assert_eq!(invalid_feedback_id(EMAIL), "email-invalid-feedback");
		assert_eq!(
			invalid_feedback_id(PASSWORD_CONFIRM),
			"password-confirm-invalid-feedback"
		);
	}
}
