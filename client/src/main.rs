// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use account_forms_client::app::attach_validators;
use account_forms_client::dom::document;
use account_forms_client::page::PageConfig;
use log::{debug, warn};

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let config = match PageConfig::load() {
		Ok(config) => config,
		Err(error) => {
			warn!("Form validation is unavailable: {}", error);
			return;
		}
	};
	debug!("Form errors: {:?}", config.form_errors);

	let document = match document() {
		Ok(document) => document,
		Err(error) => {
			warn!("Form validation is unavailable: {}", error);
			return;
		}
	};
	attach_validators(&document, &config);
}
