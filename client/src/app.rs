// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{add_listener, field_event, input_by_id, DomField};
use crate::error::SetupError;
use crate::page::{FormPage, PageConfig};
use crate::users_api::UsersApi;
use crate::validation::email_unique::{EmailLookup, EmailUniquenessValidator};
use crate::validation::password_confirm::PasswordConfirmation;
use crate::validation::server_errors::ServerErrorReset;
use crate::validation::FieldEvent;
use account_forms_shared::fields::{EMAIL, PASSWORD, PASSWORD_CONFIRM};
use account_forms_shared::messages::FormErrors;
use log::warn;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlInputElement};

type DomPasswordConfirmation = PasswordConfirmation<HtmlInputElement, DomField>;

/// Attaches the validators the configured page needs
pub fn attach_validators(document: &Document, config: &PageConfig) {
	let lookup = UsersApi::new(config.users_endpoint.clone());
	attach_validators_with_lookup(document, config.page, &config.form_errors, lookup);
}

/// Attaches the validators the page needs, checking emails through the given lookup
pub fn attach_validators_with_lookup<L: EmailLookup + 'static>(
	document: &Document,
	page: FormPage,
	form_errors: &FormErrors,
	lookup: L,
) {
	// Every validator captures its field's feedback text before any server error replaces it.
	let server_errors = prepare_server_errors(document, form_errors);
	let password_confirmation = match page {
		FormPage::SignUp => prepare_password_confirmation(document, true),
		FormPage::Other => prepare_password_confirmation(document, false),
		FormPage::SignIn => None,
	};
	let email_uniqueness = match page {
		FormPage::SignUp => prepare_email_uniqueness(document, lookup),
		FormPage::SignIn | FormPage::Other => None,
	};

	// Server error handlers go first so a shared event clears the server error before other checks run.
	for server_error in server_errors {
		if let Err(error) = attach_server_error(server_error) {
			warn!("Failed to attach server error handling: {}", error);
		}
	}
	if let Some(confirmation) = password_confirmation {
		if let Err(error) = attach_password_confirmation(confirmation) {
			warn!("Failed to attach password confirmation: {}", error);
		}
	}
	if let Some(validator) = email_uniqueness {
		if let Err(error) = attach_email_uniqueness(validator) {
			warn!("Failed to attach email availability check: {}", error);
		}
	}
}

fn prepare_server_errors(document: &Document, form_errors: &FormErrors) -> Vec<Rc<ServerErrorReset<DomField>>> {
	form_errors
		.iter()
		.filter_map(|(name, message)| match DomField::by_name(document, name) {
			Ok(field) => Some(Rc::new(ServerErrorReset::new(name, field, message))),
			Err(error) => {
				warn!("Cannot show server error for \"{}\": {}", name, error);
				None
			}
		})
		.collect()
}

fn attach_server_error(server_error: Rc<ServerErrorReset<DomField>>) -> Result<(), SetupError> {
	server_error.apply();

	let input = server_error.field().input().clone();
	for event_type in ["keyup", "change"] {
		let server_error = Rc::clone(&server_error);
		add_listener(&input, event_type, move |_| {
			server_error.reset();
		})?;
	}
	if let Some(form) = input.form() {
		add_listener(&form, "submit", move |_| {
			server_error.reset();
		})?;
	}
	Ok(())
}

/// Finds the password confirmation fields. Pages without a confirmation field only get a log entry when `required`.
fn prepare_password_confirmation(document: &Document, required: bool) -> Option<Rc<DomPasswordConfirmation>> {
	let fields = input_by_id(document, PASSWORD_CONFIRM).and_then(|confirm| {
		let password = input_by_id(document, PASSWORD)?;
		let confirm = DomField::new(document, confirm)?;
		Ok((password, confirm))
	});
	match fields {
		Ok((password, confirm)) => Some(Rc::new(PasswordConfirmation::new(password, confirm))),
		Err(SetupError::MissingElement(_)) if !required && document.get_element_by_id(PASSWORD_CONFIRM).is_none() => None,
		Err(error) => {
			warn!("Cannot check password confirmation: {}", error);
			None
		}
	}
}

fn attach_password_confirmation(confirmation: Rc<DomPasswordConfirmation>) -> Result<(), SetupError> {
	let input = confirmation.confirm_field().input().clone();
	for event_type in ["keyup", "change"] {
		let confirmation = Rc::clone(&confirmation);
		add_listener(&input, event_type, move |_| {
			confirmation.check();
		})?;
	}
	if let Some(form) = input.form() {
		add_listener(&form, "submit", move |_| {
			confirmation.check();
		})?;
	}
	Ok(())
}

fn prepare_email_uniqueness<L: EmailLookup>(
	document: &Document,
	lookup: L,
) -> Option<Rc<EmailUniquenessValidator<DomField, L>>> {
	match DomField::by_id(document, EMAIL) {
		Ok(field) => Some(Rc::new(EmailUniquenessValidator::new(field, lookup))),
		Err(error) => {
			warn!("Cannot check email availability: {}", error);
			None
		}
	}
}

fn attach_email_uniqueness<L: EmailLookup + 'static>(
	validator: Rc<EmailUniquenessValidator<DomField, L>>,
) -> Result<(), SetupError> {
	let input = validator.field().input().clone();
	for event_type in FieldEvent::TYPES {
		let validator = Rc::clone(&validator);
		add_listener(&input, event_type, move |event| {
			let Some(event) = field_event(&event) else {
				return;
			};
			let validator = Rc::clone(&validator);
			spawn_local(async move {
				validator.handle_event(event).await;
			});
		})?;
	}
	Ok(())
}
