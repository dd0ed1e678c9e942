// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::prelude::*;

// `formError` may be a `const` in a page script, which isn't reachable as a property of `window`.
#[wasm_bindgen(inline_js = "export function page_form_errors() { return typeof formError === 'undefined' ? null : formError; }")]
extern "C" {
	/// The page's `formError` object, or null when the page doesn't declare one
	pub fn page_form_errors() -> JsValue;
}
