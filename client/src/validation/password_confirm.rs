// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{InputValue, ValidatedInput};
use account_forms_shared::fields::{CUSTOM_VALIDITY_INVALID, PASSWORD_MISMATCH_MESSAGE};

/// Keeps the password confirmation field invalid while it differs from the password field
pub struct PasswordConfirmation<P, F> {
	password: P,
	confirm: F,
	default_feedback: String,
}

impl<P: InputValue, F: ValidatedInput> PasswordConfirmation<P, F> {
	pub fn new(password: P, confirm: F) -> Self {
		let default_feedback = confirm.feedback();
		Self {
			password,
			confirm,
			default_feedback,
		}
	}

	pub fn confirm_field(&self) -> &F {
		&self.confirm
	}

	/// Compares the two fields and updates the confirmation field's state. Returns whether they match.
	pub fn check(&self) -> bool {
		let matches = self.password.value() == self.confirm.value();
		if matches {
			self.confirm.set_feedback(&self.default_feedback);
			self.confirm.set_custom_error(None);
			self.confirm.set_invalid_marker(false);
		} else {
			self.confirm.set_feedback(PASSWORD_MISMATCH_MESSAGE);
			self.confirm.set_custom_error(Some(CUSTOM_VALIDITY_INVALID));
			self.confirm.set_invalid_marker(true);
		}
		matches
	}
}
