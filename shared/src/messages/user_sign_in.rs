// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::user::is_valid_email;
use super::FormErrors;
use crate::fields;
use serde::{Deserialize, Serialize};

/// Data submitted by the sign-in form
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserSignIn {
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub password: String,
}

impl UserSignIn {
	/// Checks the submitted values, returning an error for each field that can't be used to sign in
	pub fn validate(&self) -> FormErrors {
		let mut errors = FormErrors::new();
		if let Some(message) = email_error(&self.email) {
			errors.insert(fields::EMAIL, message);
		}
		if self.password.is_empty() {
			errors.insert(fields::PASSWORD, "Require password.");
		}
		errors
	}
}

/// Error for an email field that's missing or malformed
pub(crate) fn email_error(email: &str) -> Option<&'static str> {
	if email.is_empty() {
		Some("Require email.")
	} else if !is_valid_email(email) {
		Some("Invalid email.")
	} else {
		None
	}
}
