// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SetupError;
use crate::validation::{FieldEvent, InputValue, ValidatedInput};
use account_forms_shared::fields::{invalid_feedback_id, INVALID_CLASS};
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{ClipboardEvent, Document, Element, Event, EventTarget, HtmlInputElement};

pub fn document() -> Result<Document, SetupError> {
	let window = web_sys::window().ok_or(SetupError::NoWindow)?;
	window.document().ok_or(SetupError::NoDocument)
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, SetupError> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| SetupError::MissingElement(format!("element with id \"{}\"", id)))
}

pub fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, SetupError> {
	element_by_id(document, id)?
		.dyn_into()
		.map_err(|_| SetupError::WrongElementType(format!("Element with id \"{}\"", id)))
}

pub fn input_by_name(document: &Document, name: &str) -> Result<HtmlInputElement, SetupError> {
	document
		.get_elements_by_name(name)
		.get(0)
		.ok_or_else(|| SetupError::MissingElement(format!("input element with name \"{}\"", name)))?
		.dyn_into()
		.map_err(|_| SetupError::WrongElementType(format!("Element with name \"{}\"", name)))
}

/// Registers an event handler that stays attached for the lifetime of the page
pub fn add_listener(
	target: &EventTarget,
	event_type: &str,
	handler: impl FnMut(Event) + 'static,
) -> Result<(), SetupError> {
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Converts a DOM event into a [`FieldEvent`], reading the pasted text out of paste events
pub fn field_event(event: &Event) -> Option<FieldEvent> {
	FieldEvent::from_type(&event.type_(), || {
		event
			.dyn_ref::<ClipboardEvent>()
			.and_then(|event| event.clipboard_data())
			.and_then(|data| data.get_data("text").ok())
	})
}

impl InputValue for HtmlInputElement {
	fn value(&self) -> String {
		HtmlInputElement::value(self)
	}
}

/// A page input and its `{id}-invalid-feedback` element
#[derive(Clone)]
pub struct DomField {
	input: HtmlInputElement,
	feedback: Element,
}

impl DomField {
	pub fn new(document: &Document, input: HtmlInputElement) -> Result<Self, SetupError> {
		let feedback = element_by_id(document, &invalid_feedback_id(&input.id()))?;
		Ok(Self { input, feedback })
	}

	pub fn by_id(document: &Document, id: &str) -> Result<Self, SetupError> {
		Self::new(document, input_by_id(document, id)?)
	}

	pub fn by_name(document: &Document, name: &str) -> Result<Self, SetupError> {
		Self::new(document, input_by_name(document, name)?)
	}

	pub fn input(&self) -> &HtmlInputElement {
		&self.input
	}
}

impl InputValue for DomField {
	fn value(&self) -> String {
		self.input.value()
	}
}

impl ValidatedInput for DomField {
	fn custom_error(&self) -> Option<String> {
		if self.input.validity().custom_error() {
			Some(self.input.validation_message().unwrap_or_default())
		} else {
			None
		}
	}

	fn set_custom_error(&self, message: Option<&str>) {
		self.input.set_custom_validity(message.unwrap_or(""));
	}

	fn is_valid(&self) -> bool {
		self.input.validity().valid()
	}

	fn feedback(&self) -> String {
		self.feedback.text_content().unwrap_or_default()
	}

	fn set_feedback(&self, text: &str) {
		self.feedback.set_text_content(Some(text));
	}

	fn set_invalid_marker(&self, invalid: bool) {
		let class_list = self.input.class_list();
		let result = if invalid {
			class_list.add_1(INVALID_CLASS)
		} else {
			class_list.remove_1(INVALID_CLASS)
		};
		if let Err(error) = result {
			warn!("Failed to update the invalid marker of \"{}\": {:?}", self.input.id(), error);
		}
	}
}
