// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::ValidatedInput;
use account_forms_shared::fields::CUSTOM_VALIDITY_INVALID;
use log::debug;
use std::cell::Cell;

/// Shows an error reported by the server on a field until the user first interacts with the field or resubmits.
///
/// The reset is one-shot: after the first [`reset`](Self::reset) the field is left alone, even if the feedback
/// text changed in between.
pub struct ServerErrorReset<F> {
	name: String,
	field: F,
	server_error: String,
	default_feedback: String,
	armed: Cell<bool>,
}

impl<F: ValidatedInput> ServerErrorReset<F> {
	/// Captures the field's own feedback text. Nothing is shown until [`apply`](Self::apply).
	pub fn new(name: impl Into<String>, field: F, server_error: impl Into<String>) -> Self {
		let default_feedback = field.feedback();
		Self {
			name: name.into(),
			field,
			server_error: server_error.into(),
			default_feedback,
			armed: Cell::new(true),
		}
	}

	pub fn field(&self) -> &F {
		&self.field
	}

	pub fn is_armed(&self) -> bool {
		self.armed.get()
	}

	/// Replaces the field's feedback with the server error and marks the field invalid
	pub fn apply(&self) {
		debug!("{}: set server error \"{}\"", self.name, self.server_error);
		self.field.set_feedback(&self.server_error);
		self.field.set_custom_error(Some(CUSTOM_VALIDITY_INVALID));
		self.field.set_invalid_marker(true);
	}

	/// Puts back the field's own feedback and clears the invalid state, if the server error is still showing.
	/// Only the first call does anything; returns whether this call was it.
	pub fn reset(&self) -> bool {
		if !self.armed.replace(false) {
			return false;
		}
		if self.field.feedback() == self.server_error {
			debug!("{}: remove server error \"{}\"", self.name, self.server_error);
			self.field.set_feedback(&self.default_feedback);
			self.field.set_custom_error(None);
			self.field.set_invalid_marker(false);
		}
		true
	}
}
