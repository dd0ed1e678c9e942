// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use wasm_bindgen::JsValue;

/// Problems attaching validators to the page. None of them stop the page from working; the affected validator just
/// isn't attached.
#[derive(Debug)]
pub enum SetupError {
	NoWindow,
	NoDocument,
	MissingElement(String),
	WrongElementType(String),
	Js(JsValue),
	FormErrors(serde_json::Error),
}

impl From<JsValue> for SetupError {
	fn from(error: JsValue) -> Self {
		Self::Js(error)
	}
}

impl From<serde_json::Error> for SetupError {
	fn from(error: serde_json::Error) -> Self {
		Self::FormErrors(error)
	}
}

impl fmt::Display for SetupError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "Failed to get browser window context"),
			Self::NoDocument => write!(f, "Failed to get the page document"),
			Self::MissingElement(element) => write!(f, "Cannot find {}", element),
			Self::WrongElementType(element) => write!(f, "{} is not an input element", element),
			Self::Js(error) => write!(f, "A browser operation failed: {:?}", error),
			Self::FormErrors(error) => write!(f, "The page's form errors are malformed: {}", error),
		}
	}
}
