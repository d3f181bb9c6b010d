// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::{FormData, FormField};
use crate::interests::Interest;
use crate::validation::{validate_form, ErrorMap};

/// All state of the signup form: the entered data, the errors from the last validation pass, and whether the
/// signup has been submitted.
///
/// Once submitted, the form data is frozen until [`SignupState::reset`] is called, so the confirmation always
/// reflects what was submitted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignupState {
	form: FormData,
	errors: ErrorMap,
	submitted: bool,
}

impl SignupState {
	pub fn form(&self) -> &FormData {
		&self.form
	}

	pub fn errors(&self) -> &ErrorMap {
		&self.errors
	}

	pub fn is_submitted(&self) -> bool {
		self.submitted
	}

	/// Overwrites a text field and clears any error shown for it.
	///
	/// Returns false if the change was ignored because the form was already submitted.
	pub fn update_field(&mut self, field: FormField, value: String) -> bool {
		if self.submitted {
			return false;
		}
		*self.form.field_mut(field) = value;
		self.errors.clear(field);
		true
	}

	/// Flips the selection of an interest. Returns whether the interest is selected afterward.
	pub fn toggle_interest(&mut self, interest: Interest) -> bool {
		if self.submitted {
			return self.form.interests.contains(interest);
		}
		self.form.interests.toggle(interest)
	}

	/// Sets whether an interest is selected. Returns false if the change was ignored because the form was already
	/// submitted.
	pub fn set_interest(&mut self, interest: Interest, selected: bool) -> bool {
		if self.submitted {
			return false;
		}
		self.form.interests.set(interest, selected);
		true
	}

	/// Validates the form, replacing the current errors with the result.
	///
	/// # Errors
	///
	/// When validation fails, the form stays unsubmitted and the errors found are returned.
	pub fn submit(&mut self) -> Result<&FormData, &ErrorMap> {
		if self.submitted {
			return Ok(&self.form);
		}

		self.errors = validate_form(&self.form);
		if self.errors.is_empty() {
			self.submitted = true;
			Ok(&self.form)
		} else {
			Err(&self.errors)
		}
	}

	/// Returns the submitted data, if the form has been submitted.
	pub fn confirmation(&self) -> Option<&FormData> {
		if self.submitted {
			Some(&self.form)
		} else {
			None
		}
	}

	/// Returns everything to the state of a fresh form.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}
