// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod user;
pub mod user_register;
pub mod user_sign_in;

/// Field errors found by the server while processing a submitted form, keyed by the field's `name`.
///
/// Pages carry these to the client, which shows each message in place of the field's own feedback until the user
/// edits the field or resubmits.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an error for a field. Empty messages aren't errors and are ignored.
	pub fn insert(&mut self, name: impl Into<String>, message: impl Into<String>) {
		let message = message.into();
		if !message.is_empty() {
			self.0.insert(name.into(), message);
		}
	}

	/// Gets the error message for the named field, if there is one
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(|message| message.as_str()).filter(|message| !message.is_empty())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Iterates over the fields that have errors, in name order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0
			.iter()
			.filter(|(_, message)| !message.is_empty())
			.map(|(name, message)| (name.as_str(), message.as_str()))
	}

	pub fn is_empty(&self) -> bool {
		self.iter().next().is_none()
	}

	pub fn len(&self) -> usize {
		self.iter().count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_messages_are_not_errors() {
		let errors: FormErrors = serde_json::from_str(r#"{"email":"","password":"Require password."}"#).unwrap();
		assert_eq!(errors.get("email"), None);
		assert_eq!(errors.get("password"), Some("Require password."));
		assert_eq!(errors.len(), 1);

		let mut errors = FormErrors::new();
		errors.insert("surname", "");
		assert!(errors.is_empty());
	}

	#[test]
	fn serializes_as_plain_object() {
		let mut errors = FormErrors::new();
		errors.insert("surname", "Invalid surname.");
		errors.insert("email", "Invalid email.");
		assert_eq!(
			serde_json::to_string(&errors).unwrap(),
			r#"{"email":"Invalid email.","surname":"Invalid surname."}"#
		);
		let names: Vec<&str> = errors.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["email", "surname"]);
	}
}
