// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::interests::InterestSelection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The values currently entered in the signup form
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FormData {
	pub name: String,
	pub email: String,
	pub interests: InterestSelection,
}

impl FormData {
	pub fn field(&self, field: FormField) -> &str {
		match field {
			FormField::Name => &self.name,
			FormField::Email => &self.email,
		}
	}

	pub fn field_mut(&mut self, field: FormField) -> &mut String {
		match field {
			FormField::Name => &mut self.name,
			FormField::Email => &mut self.email,
		}
	}
}

/// A text field of the signup form
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FormField {
	Name,
	Email,
}

impl FormField {
	/// Gets the name used for the field's input element
	pub fn input_name(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
		}
	}
}

impl fmt::Display for FormField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.input_name())
	}
}
