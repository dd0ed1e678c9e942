// © 2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SetupError;
use crate::validation::email_unique::EmailLookup;
use gloo_net::http::Request;
use serde_json::Value;
use std::fmt;
use web_sys::{Location, Url};

/// Errors that can occur when asking the server about an email address
#[derive(Debug)]
pub enum LookupError {
	Network(gloo_net::Error),
	/// The server answered with a status outside of 200-399
	Status(u16),
	/// The body was JSON, but not shaped like a user list
	Schema(&'static str),
	Json(serde_json::Error),
}

impl fmt::Display for LookupError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "{}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
			Self::Schema(problem) => write!(f, "Unexpected response: {}", problem),
			Self::Json(error) => write!(f, "The response isn't valid JSON: {}", error),
		}
	}
}

impl From<gloo_net::Error> for LookupError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl From<serde_json::Error> for LookupError {
	fn from(error: serde_json::Error) -> Self {
		Self::Json(error)
	}
}

/// Gets the URL of the user listing endpoint on the server that served the current page, keeping whatever path
/// prefix the application is hosted under
pub fn users_endpoint(location: &Location) -> Result<String, SetupError> {
	let url = Url::new(&location.href()?)?;
	url.set_search("");
	url.set_hash("");
	url.set_pathname(&users_path(&url.pathname()));
	Ok(url.to_string().into())
}

/// Gets the path of the user listing endpoint from the path of an account page (`<prefix>/users/sign-up` and the
/// like). Pages outside of `/users/` are taken to sit directly under the prefix.
pub fn users_path(page_path: &str) -> String {
	let prefix = match page_path.rfind("/users/") {
		Some(index) => &page_path[..index],
		None => page_path.rsplit_once('/').map(|(directory, _)| directory).unwrap_or(""),
	};
	format!("{}/users", prefix)
}

/// Reads a user listing response body, returning whether it lists any users.
///
/// Only the `users` array itself is required; its entries aren't inspected.
pub fn users_listed(body: &str) -> Result<bool, LookupError> {
	let body: Value = serde_json::from_str(body)?;
	match body.get("users") {
		Some(Value::Array(users)) => Ok(!users.is_empty()),
		Some(_) => Err(LookupError::Schema("`users` is not an array")),
		None => Err(LookupError::Schema("`users` is missing")),
	}
}

/// Looks up emails through the server's user listing endpoint
pub struct UsersApi {
	endpoint: String,
}

impl UsersApi {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
		}
	}
}

impl EmailLookup for UsersApi {
	async fn email_taken(&self, email: &str) -> Result<bool, LookupError> {
		let response = Request::get(&self.endpoint).query([("email", email)]).send().await?;
		let status = response.status();
		if !(200..400).contains(&status) {
			return Err(LookupError::Status(status));
		}
		let body = response.text().await?;
		users_listed(&body)
	}
}
