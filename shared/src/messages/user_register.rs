// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::user_sign_in::email_error;
use super::FormErrors;
use crate::fields;
use serde::{Deserialize, Serialize};

pub const NAME_LETTERS_MIN: usize = 2;
pub const NAME_LETTERS_MAX: usize = 32;
pub const PASSWORD_LENGTH_MIN: usize = 8;
pub const PASSWORD_LENGTH_MAX: usize = 32;

/// Data submitted by the sign-up form
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserRegistration {
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub firstname: String,
	#[serde(default)]
	pub surname: String,
	#[serde(default)]
	pub password: String,
	#[serde(default, rename = "password-confirm")]
	pub password_confirm: String,
}

impl UserRegistration {
	/// Checks the submitted values, returning an error for each field that can't be used to register.
	///
	/// `email_taken` is only asked about emails that are otherwise valid.
	pub fn validate(&self, email_taken: impl FnOnce(&str) -> bool) -> FormErrors {
		let mut errors = FormErrors::new();

		if let Some(message) = email_error(&self.email) {
			errors.insert(fields::EMAIL, message);
		} else if email_taken(&self.email) {
			errors.insert(fields::EMAIL, fields::EMAIL_TAKEN_MESSAGE);
		}

		if self.firstname.is_empty() {
			errors.insert(fields::FIRSTNAME, "Require firstname.");
		} else if !is_valid_name(&self.firstname) {
			errors.insert(fields::FIRSTNAME, "Invalid firstname.");
		}
		if self.surname.is_empty() {
			errors.insert(fields::SURNAME, "Require surname.");
		} else if !is_valid_name(&self.surname) {
			errors.insert(fields::SURNAME, "Invalid surname.");
		}

		if self.password.is_empty() {
			errors.insert(fields::PASSWORD, "Require password.");
		} else if !(PASSWORD_LENGTH_MIN..=PASSWORD_LENGTH_MAX).contains(&self.password.len()) {
			errors.insert(fields::PASSWORD, "Invalid password.");
		} else if self.password_confirm.is_empty() {
			errors.insert(fields::PASSWORD_CONFIRM, "Please confirm password.");
		} else if self.password_confirm != self.password {
			errors.insert(fields::PASSWORD_CONFIRM, fields::PASSWORD_MISMATCH_MESSAGE);
		}

		errors
	}
}

/// Names are ASCII letters, possibly separated or surrounded by spaces
fn is_valid_name(name: &str) -> bool {
	if !name.chars().all(|c| c == ' ' || c.is_ascii_alphabetic()) {
		return false;
	}
	let letters = name.chars().filter(char::is_ascii_alphabetic).count();
	(NAME_LETTERS_MIN..=NAME_LETTERS_MAX).contains(&letters)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registration() -> UserRegistration {
		UserRegistration {
			email: String::from("new.user@fakemail.com"),
			firstname: String::from("Mary Ann"),
			surname: String::from("Smith"),
			password: String::from("8p3qzh6w"),
			password_confirm: String::from("8p3qzh6w"),
		}
	}

	#[test]
	fn valid_registration() {
		assert!(registration().validate(|_| false).is_empty());
	}

	#[test]
	fn taken_email() {
		let errors = registration().validate(|email| email == "new.user@fakemail.com");
		assert_eq!(errors.get(fields::EMAIL), Some(fields::EMAIL_TAKEN_MESSAGE));
		assert_eq!(errors.len(), 1);
	}

	#[test]
	fn malformed_email_skips_taken_check() {
		let mut data = registration();
		data.email = String::from("not-an-email");
		let errors = data.validate(|_| panic!("taken check on malformed email"));
		assert_eq!(errors.get(fields::EMAIL), Some("Invalid email."));
	}

	#[test]
	fn names() {
		assert!(is_valid_name("Jo"));
		assert!(is_valid_name(" J o "));
		assert!(!is_valid_name("J"));
		assert!(!is_valid_name("Jo3"));
		assert!(!is_valid_name("Zoë"));
		assert!(is_valid_name(&"a".repeat(32)));
		assert!(!is_valid_name(&"a".repeat(33)));

		let mut data = registration();
		data.firstname = String::new();
		data.surname = String::from("O'Neil");
		let errors = data.validate(|_| false);
		assert_eq!(errors.get(fields::FIRSTNAME), Some("Require firstname."));
		assert_eq!(errors.get(fields::SURNAME), Some("Invalid surname."));
	}

	#[test]
	fn password_checks_stop_at_first_problem() {
		let mut data = registration();
		data.password = String::from("short");
		data.password_confirm = String::new();
		let errors = data.validate(|_| false);
		assert_eq!(errors.get(fields::PASSWORD), Some("Invalid password."));
		assert!(!errors.contains(fields::PASSWORD_CONFIRM));

		let mut data = registration();
		data.password_confirm = String::new();
		assert_eq!(
			data.validate(|_| false).get(fields::PASSWORD_CONFIRM),
			Some("Please confirm password.")
		);

		let mut data = registration();
		data.password_confirm = String::from("8p3qzh6x");
		assert_eq!(
			data.validate(|_| false).get(fields::PASSWORD_CONFIRM),
			Some(fields::PASSWORD_MISMATCH_MESSAGE)
		);
	}

	#[test]
	fn form_field_names() {
		let data: UserRegistration = serde_json::from_str(r#"{"email":"a@b.c","password-confirm":"x"}"#).unwrap();
		assert_eq!(data.password_confirm, "x");
		assert!(data.firstname.is_empty());
	}
}
