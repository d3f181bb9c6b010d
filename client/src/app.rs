// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::confirmation::ConfirmationView;
use crate::components::signup_form::SignupFormView;
use newsletter_signup_shared::signup::SignupState;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct NewsletterSignupProps<'a> {
	state: &'a Signal<SignupState>,
}

/// Shows the signup form or, once it's been submitted, the confirmation.
#[component]
pub fn NewsletterSignup<'a, G: Html>(ctx: Scope<'a>, props: NewsletterSignupProps<'a>) -> View<G> {
	let state = props.state;
	// Only the submission state switches views; the form isn't rebuilt on each keystroke
	let submitted = create_selector(ctx, move || state.get().is_submitted());

	view! {
		ctx,
		div(class="App") {
			(if *submitted.get() {
				view! { ctx, ConfirmationView(state=state) }
			} else {
				view! { ctx, SignupFormView(state=state) }
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use newsletter_signup_shared::form::FormField;
	use newsletter_signup_shared::interests::Interest;
	use pretty_assertions::assert_eq;

	fn render(state: SignupState) -> String {
		sycamore::render_to_string(|ctx| {
			let state = create_signal(ctx, state);
			view! {
				ctx,
				NewsletterSignup(state=state)
			}
		})
	}

	fn filled(name: &str, email: &str) -> SignupState {
		let mut state = SignupState::default();
		state.update_field(FormField::Name, name.to_string());
		state.update_field(FormField::Email, email.to_string());
		state
	}

	#[test]
	fn fresh_state_renders_form() {
		let html = render(SignupState::default());
		assert!(html.contains("Newsletter Signup"));
		assert!(html.contains("Stay updated with the latest news and trends in tech!"));
		assert!(html.contains("Enter your name"));
		assert!(html.contains("Enter your email"));
		assert!(html.contains("Select your interests:"));
		for interest in Interest::ALL {
			assert!(html.contains(interest.label()), "{interest}");
			assert!(html.contains(&interest.element_id()), "{interest}");
		}
		assert!(!html.contains("error-message"));
		assert!(!html.contains("Thank You!"));
	}

	#[test]
	fn failed_submission_shows_inline_errors() {
		let mut state = SignupState::default();
		assert!(state.submit().is_err());

		let html = render(state);
		assert!(html.contains("Name is required"));
		assert!(html.contains("Email is required"));
		assert_eq!(html.matches("error-message").count(), 2);
		assert!(html.contains("Newsletter Signup"));
	}

	#[test]
	fn invalid_email_shows_format_error_only() {
		let mut state = filled("Test User", "invalid-email");
		assert!(state.submit().is_err());

		let html = render(state);
		assert!(html.contains("Please enter a valid email address"));
		assert!(!html.contains("Name is required"));
		assert_eq!(html.matches("error-message").count(), 1);
	}

	#[test]
	fn submitted_state_renders_confirmation() {
		let mut state = filled("Bob Johnson", "bob@example.com");
		state.toggle_interest(Interest::DataScience);
		state.toggle_interest(Interest::MobileDevelopment);
		assert!(state.submit().is_ok());

		let html = render(state);
		assert!(html.contains("Thank You!"));
		assert!(html.contains("Bob Johnson"));
		assert!(html.contains("bob@example.com"));
		assert!(html.contains("selected interests:"));
		assert!(html.contains("Data Science"));
		assert!(html.contains("Mobile Development"));
		assert!(!html.contains("Web Development"));
		assert!(!html.contains("Design"));
		assert!(html.contains("Sign Up Again"));
		assert!(!html.contains("Enter your name"));
	}

	#[test]
	fn confirmation_without_interests_omits_list() {
		let mut state = filled("Jane Smith", "jane@example.com");
		assert!(state.submit().is_ok());

		let html = render(state);
		assert!(html.contains("Jane Smith"));
		assert!(!html.contains("selected interests:"));
		assert!(!html.contains("<ul"));
	}

	#[test]
	fn reset_state_renders_blank_form() {
		let mut state = filled("First User", "first@example.com");
		assert!(state.submit().is_ok());
		state.reset();

		let html = render(state);
		assert!(html.contains("Newsletter Signup"));
		assert!(!html.contains("First User"));
		assert!(!html.contains("first@example.com"));
	}
}
