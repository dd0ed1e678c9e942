// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Public information about a user account
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct UserData {
	pub id: u64,
	pub email: String,
	pub firstname: String,
	pub surname: String,
}

/// Response body of the user listing endpoint (`GET /users?email=...`).
///
/// When queried by email, a non-empty list means the email belongs to an existing account.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct UserListResponse {
	pub users: Vec<UserData>,
}

impl UserListResponse {
	pub fn email_taken(&self) -> bool {
		!self.users.is_empty()
	}
}

/// Checks whether a string is shaped like an email address.
///
/// This is deliberately loose: one `@`, a local part and a domain, no whitespace or address delimiters
/// (`<>()[],;:\"`), and domain labels that are neither empty nor start or end with `-`. Only bare addresses are
/// accepted; display-name forms like `John <a@b.c>` and quoted local parts aren't.
pub fn is_valid_email(email: &str) -> bool {
	if email.chars().any(|c| c.is_whitespace() || "<>()[],;:\\\"".contains(c)) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.is_empty() || domain.contains('@') {
		return false;
	}
	domain
		.split('.')
		.all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_list_wire_shape() {
		let response: UserListResponse = serde_json::from_str(
			r#"{"users":[{"id":1,"email":"john.doe@fakemail.com","firstname":"John","surname":"Doe"}]}"#,
		)
		.unwrap();
		assert!(response.email_taken());
		assert_eq!(response.users[0].firstname, "John");

		let empty = UserListResponse::default();
		assert!(!empty.email_taken());
		assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"users":[]}"#);
	}

	#[test]
	fn email_shapes() {
		assert!(is_valid_email("a@example.com"));
		assert!(is_valid_email("jane.doe@localhost"));
		assert!(!is_valid_email("example.com"));
		assert!(!is_valid_email("@example.com"));
		assert!(!is_valid_email("a@"));
		assert!(!is_valid_email("a@b@c"));
		assert!(!is_valid_email("a b@example.com"));
		assert!(!is_valid_email("a@example..com"));
		assert!(!is_valid_email("a@-.x"));
		assert!(!is_valid_email("a@example-.com"));
		assert!(is_valid_email("a@my-example.com"));
	}

	#[test]
	fn display_name_forms_are_rejected() {
		assert!(!is_valid_email("John <a@b.c>"));
		assert!(!is_valid_email("<a@b.c>"));
		assert!(!is_valid_email("\"John\"@b.c"));
		assert!(is_valid_email("a@b.c"));
	}
}
