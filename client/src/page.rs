// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SetupError;
use crate::js_def::page_form_errors;
use crate::users_api::users_endpoint;
use account_forms_shared::messages::FormErrors;
use log::warn;
use serde_json::{Map, Value};
use web_sys::Window;

/// The account pages validators are attached to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormPage {
	SignIn,
	SignUp,
	/// Any other page with a form; only server errors and (when present) password confirmation are handled
	Other,
}

impl FormPage {
	pub fn from_path(path: &str) -> Self {
		let path = path.trim_end_matches('/');
		if path.ends_with("/sign-up") {
			Self::SignUp
		} else if path.ends_with("/sign-in") {
			Self::SignIn
		} else {
			Self::Other
		}
	}
}

/// Everything the validators need to know about the current page, gathered once at start-up
#[derive(Clone, Debug)]
pub struct PageConfig {
	pub page: FormPage,
	pub users_endpoint: String,
	pub form_errors: FormErrors,
}

impl PageConfig {
	pub fn load() -> Result<Self, SetupError> {
		let window = web_sys::window().ok_or(SetupError::NoWindow)?;
		Self::from_window(&window)
	}

	pub fn from_window(window: &Window) -> Result<Self, SetupError> {
		let location = window.location();
		let page = FormPage::from_path(&location.pathname()?);
		let users_endpoint = users_endpoint(&location)?;
		let form_errors = read_form_errors().unwrap_or_else(|error| {
			warn!("Ignoring server form errors: {}", error);
			FormErrors::new()
		});
		Ok(Self {
			page,
			users_endpoint,
			form_errors,
		})
	}
}

/// Reads the server's field errors from the page, treating a missing or null `formError` as no errors
pub fn read_form_errors() -> Result<FormErrors, SetupError> {
	let value = page_form_errors();
	if value.is_undefined() || value.is_null() {
		return Ok(FormErrors::new());
	}
	let json: String = js_sys::JSON::stringify(&value)?.into();
	parse_form_errors(&json)
}

/// Parses the page's field errors. Entries that aren't non-empty strings are skipped so they don't hide the others.
pub fn parse_form_errors(json: &str) -> Result<FormErrors, SetupError> {
	let entries: Map<String, Value> = serde_json::from_str(json)?;
	let mut errors = FormErrors::new();
	for (name, message) in entries {
		match message {
			Value::String(message) => errors.insert(name, message),
			Value::Null => {}
			other => warn!("Ignoring server error for \"{}\": expected a string, got {}", name, other),
		}
	}
	Ok(errors)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pages_from_paths() {
		assert_eq!(FormPage::from_path("/users/sign-up"), FormPage::SignUp);
		assert_eq!(FormPage::from_path("/users/sign-up/"), FormPage::SignUp);
		assert_eq!(FormPage::from_path("/app/users/sign-in"), FormPage::SignIn);
		assert_eq!(FormPage::from_path("/users/1"), FormPage::Other);
		assert_eq!(FormPage::from_path("/"), FormPage::Other);
	}

	#[test]
	fn form_errors_payload() {
		let errors = parse_form_errors(r#"{"email":"Already registered"}"#).unwrap();
		assert_eq!(errors.get("email"), Some("Already registered"));
		assert!(parse_form_errors("{}").unwrap().is_empty());
		assert!(matches!(parse_form_errors(r#"["email"]"#), Err(SetupError::FormErrors(_))));
		assert!(matches!(parse_form_errors("not json"), Err(SetupError::FormErrors(_))));
	}

	#[test]
	fn bad_entries_do_not_hide_good_ones() {
		let errors = parse_form_errors(
			r#"{"email":"Already registered","password":null,"firstname":1,"surname":"","password-confirm":{"a":1}}"#,
		)
		.unwrap();
		assert_eq!(errors.get("email"), Some("Already registered"));
		assert_eq!(errors.len(), 1);
	}
}
