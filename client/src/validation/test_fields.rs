// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{InputValue, ValidatedInput};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory stand-in for an input and its feedback element. Clones share state, so a test can keep a handle to a
/// field it gave to a validator.
#[derive(Clone, Default)]
pub struct TestField {
	state: Rc<TestFieldState>,
}

#[derive(Default)]
struct TestFieldState {
	value: RefCell<String>,
	custom_error: RefCell<Option<String>>,
	/// Whether the value fails the input's own constraints (type, pattern, required, ...)
	constraint_failure: Cell<bool>,
	feedback: RefCell<String>,
	invalid_marker: Cell<bool>,
}

impl TestField {
	pub fn new(value: &str, feedback: &str) -> Self {
		let field = Self::default();
		field.set_value(value);
		field.set_feedback(feedback);
		field
	}

	pub fn set_value(&self, value: &str) {
		*self.state.value.borrow_mut() = String::from(value);
	}

	pub fn set_constraint_failure(&self, failing: bool) {
		self.state.constraint_failure.set(failing);
	}

	pub fn has_invalid_marker(&self) -> bool {
		self.state.invalid_marker.get()
	}
}

impl InputValue for TestField {
	fn value(&self) -> String {
		self.state.value.borrow().clone()
	}
}

impl ValidatedInput for TestField {
	fn custom_error(&self) -> Option<String> {
		self.state.custom_error.borrow().clone()
	}

	fn set_custom_error(&self, message: Option<&str>) {
		*self.state.custom_error.borrow_mut() = message.filter(|message| !message.is_empty()).map(String::from);
	}

	fn is_valid(&self) -> bool {
		!self.state.constraint_failure.get() && self.state.custom_error.borrow().is_none()
	}

	fn feedback(&self) -> String {
		self.state.feedback.borrow().clone()
	}

	fn set_feedback(&self, text: &str) {
		*self.state.feedback.borrow_mut() = String::from(text);
	}

	fn set_invalid_marker(&self, invalid: bool) {
		self.state.invalid_marker.set(invalid);
	}
}
