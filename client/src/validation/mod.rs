// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validation state machines for the account forms.
//!
//! The validators only talk to their inputs through [`InputValue`] and [`ValidatedInput`], so they run the same
//! against page elements and against in-memory fields.

pub mod email_unique;
pub mod password_confirm;
pub mod server_errors;

#[cfg(test)]
pub(crate) mod test_fields;

/// Something with a current text value
pub trait InputValue {
	fn value(&self) -> String;
}

/// An input paired with the element showing its validation feedback
pub trait ValidatedInput: InputValue {
	/// The custom validity message set on the input, if there is one
	fn custom_error(&self) -> Option<String>;

	/// Sets or clears the custom validity message. A set message blocks form submission.
	fn set_custom_error(&self, message: Option<&str>);

	/// Whether the input passes all of its constraints, custom validity included
	fn is_valid(&self) -> bool;

	fn feedback(&self) -> String;

	fn set_feedback(&self, text: &str);

	/// Adds or removes the class showing the input as invalid
	fn set_invalid_marker(&self, invalid: bool);
}

/// Events the email field reacts to
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldEvent {
	Blur,
	Change,
	KeyUp,
	/// Pasted text, read from the clipboard since the input doesn't hold it yet when the event fires
	Paste(Option<String>),
}

impl FieldEvent {
	pub const TYPES: [&'static str; 4] = ["blur", "change", "keyup", "paste"];

	/// Maps a DOM event type to the event, with the pasted text for paste events
	pub fn from_type(event_type: &str, pasted: impl FnOnce() -> Option<String>) -> Option<Self> {
		match event_type {
			"blur" => Some(Self::Blur),
			"change" => Some(Self::Change),
			"keyup" => Some(Self::KeyUp),
			"paste" => Some(Self::Paste(pasted())),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn event_types() {
		for event_type in FieldEvent::TYPES {
			assert!(FieldEvent::from_type(event_type, || None).is_some());
		}
		assert_eq!(
			FieldEvent::from_type("paste", || Some(String::from("dup@example.com"))),
			Some(FieldEvent::Paste(Some(String::from("dup@example.com"))))
		);
		assert_eq!(FieldEvent::from_type("input", || None), None);
	}
}
