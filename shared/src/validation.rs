// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::{FormData, FormField};
use regex::Regex;
use std::collections::btree_map::{BTreeMap, Iter};
use std::error::Error;
use std::fmt;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
	EMAIL_PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("Email pattern is a valid regex"))
}

/// A problem with the value entered in a single field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldError {
	NameRequired,
	EmailRequired,
	EmailInvalid,
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NameRequired => write!(f, "Name is required"),
			Self::EmailRequired => write!(f, "Email is required"),
			Self::EmailInvalid => write!(f, "Please enter a valid email address"),
		}
	}
}

impl Error for FieldError {}

/// Validation problems keyed by the field they belong to. An empty map means the form is valid.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorMap(BTreeMap<FormField, FieldError>);

impl ErrorMap {
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn get(&self, field: FormField) -> Option<FieldError> {
		self.0.get(&field).copied()
	}

	pub fn insert(&mut self, field: FormField, error: FieldError) {
		self.0.insert(field, error);
	}

	/// Removes the error for the field, returning whether there was one
	pub fn clear(&mut self, field: FormField) -> bool {
		self.0.remove(&field).is_some()
	}

	pub fn iter(&self) -> Iter<'_, FormField, FieldError> {
		self.0.iter()
	}
}

/// Checks the form data, producing the full set of errors for it.
pub fn validate_form(form: &FormData) -> ErrorMap {
	let mut errors = ErrorMap::default();

	if form.name.trim().is_empty() {
		errors.insert(FormField::Name, FieldError::NameRequired);
	}

	if form.email.trim().is_empty() {
		errors.insert(FormField::Email, FieldError::EmailRequired);
	} else if !email_pattern().is_match(&form.email) {
		errors.insert(FormField::Email, FieldError::EmailInvalid);
	}

	errors
}
