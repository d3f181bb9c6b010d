// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A topic a subscriber can ask to hear about
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Interest {
	WebDevelopment,
	DataScience,
	MobileDevelopment,
	Design,
}

impl Interest {
	/// Every interest, in the order the checkboxes are shown
	pub const ALL: [Interest; 4] = [
		Self::WebDevelopment,
		Self::DataScience,
		Self::MobileDevelopment,
		Self::Design,
	];

	pub fn label(&self) -> &'static str {
		match self {
			Self::WebDevelopment => "Web Development",
			Self::DataScience => "Data Science",
			Self::MobileDevelopment => "Mobile Development",
			Self::Design => "Design",
		}
	}

	/// Gets the ID used for the interest's checkbox element and its label's `for` attribute.
	pub fn element_id(&self) -> String {
		self.label().to_lowercase().replace(' ', "-")
	}
}

impl fmt::Display for Interest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// The set of interests a subscriber has selected.
///
/// Each interest appears at most once. Interests are kept in the order they were selected.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InterestSelection(Vec<Interest>);

impl InterestSelection {
	pub fn contains(&self, interest: Interest) -> bool {
		self.0.contains(&interest)
	}

	/// Flips whether the interest is selected. Returns whether it's selected afterward.
	pub fn toggle(&mut self, interest: Interest) -> bool {
		let selected = !self.contains(interest);
		self.set(interest, selected);
		selected
	}

	/// Marks the interest as selected or not. Setting the state it's already in changes nothing.
	pub fn set(&mut self, interest: Interest, selected: bool) {
		if selected {
			if !self.contains(interest) {
				self.0.push(interest);
			}
		} else {
			self.0.retain(|selected_interest| *selected_interest != interest);
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = Interest> + '_ {
		self.0.iter().copied()
	}
}

impl FromIterator<Interest> for InterestSelection {
	fn from_iter<T: IntoIterator<Item = Interest>>(iter: T) -> Self {
		let mut selection = Self::default();
		for interest in iter {
			selection.set(interest, true);
		}
		selection
	}
}
