// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client-side validation for the account pages: password confirmation, server-reported field errors, and a check
//! for emails that already belong to an account.

pub mod app;
pub mod dom;
pub mod error;
mod js_def;
pub mod page;
pub mod users_api;
pub mod validation;
