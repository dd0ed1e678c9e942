// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{FieldEvent, InputValue, ValidatedInput};
use crate::users_api::LookupError;
use account_forms_shared::fields::EMAIL_TAKEN_MESSAGE;
use log::{debug, error};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// Answers whether an email address already belongs to an account
#[allow(async_fn_in_trait)]
pub trait EmailLookup {
	async fn email_taken(&self, email: &str) -> Result<bool, LookupError>;
}

/// Marks the email field invalid when the entered address is already taken.
///
/// Addresses the server confirmed as taken are remembered for the lifetime of the page. Available addresses aren't,
/// so they're checked again on each blur. Lookup failures leave the field as it was.
pub struct EmailUniquenessValidator<F, L> {
	field: F,
	lookup: L,
	default_feedback: String,
	known_taken: RefCell<HashSet<String>>,
	latest_check: Cell<u64>,
}

impl<F: ValidatedInput, L: EmailLookup> EmailUniquenessValidator<F, L> {
	pub fn new(field: F, lookup: L) -> Self {
		let default_feedback = field.feedback();
		Self {
			field,
			lookup,
			default_feedback,
			known_taken: RefCell::new(HashSet::new()),
			latest_check: Cell::new(0),
		}
	}

	pub fn field(&self) -> &F {
		&self.field
	}

	pub fn is_known_taken(&self, email: &str) -> bool {
		self.known_taken.borrow().contains(email)
	}

	pub async fn handle_event(&self, event: FieldEvent) {
		let is_blur = event == FieldEvent::Blur;
		let email = match event {
			FieldEvent::Paste(Some(pasted)) => pasted,
			_ => self.field.value(),
		};

		match self.field.custom_error() {
			Some(message) if message == EMAIL_TAKEN_MESSAGE => {
				if !self.is_known_taken(&email) {
					self.clear_taken();
				}
			}
			Some(_) => return,
			None => {
				if self.is_known_taken(&email) {
					self.mark_taken();
				}
			}
		}

		// Only check the server when the user leaves a field that's otherwise valid
		if !is_blur {
			return;
		}
		if self.field.custom_error().is_none() && !self.field.is_valid() {
			return;
		}
		if self.is_known_taken(&email) {
			return;
		}

		let check = self.latest_check.get() + 1;
		self.latest_check.set(check);
		debug!("Checking whether email \"{}\" is taken", email);
		let taken = match self.lookup.email_taken(&email).await {
			Ok(taken) => taken,
			Err(error) => {
				error!("Failed to check whether email \"{}\" is taken: {}", email, error);
				return;
			}
		};
		if taken {
			self.known_taken.borrow_mut().insert(email.clone());
		}

		if check != self.latest_check.get() || self.field.value() != email {
			debug!("Discarding outdated result for email \"{}\"", email);
			return;
		}
		if taken && self.field.custom_error().is_none() {
			self.mark_taken();
		}
	}

	fn mark_taken(&self) {
		self.field.set_custom_error(Some(EMAIL_TAKEN_MESSAGE));
		self.field.set_feedback(EMAIL_TAKEN_MESSAGE);
		self.field.set_invalid_marker(true);
	}

	fn clear_taken(&self) {
		self.field.set_custom_error(None);
		self.field.set_feedback(&self.default_feedback);
		self.field.set_invalid_marker(false);
	}
}
