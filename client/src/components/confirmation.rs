// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use newsletter_signup_shared::signup::SignupState;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct ConfirmationProps<'a> {
	state: &'a Signal<SignupState>,
}

#[component]
pub fn ConfirmationView<'a, G: Html>(ctx: Scope<'a>, props: ConfirmationProps<'a>) -> View<G> {
	log::debug!("Activating newsletter signup confirmation view");
	let state = props.state;

	let submission = match state.get_untracked().confirmation() {
		Some(submission) => submission.clone(),
		None => {
			log::warn!("Confirmation view activated for a form that wasn't submitted");
			return view! { ctx, };
		}
	};

	let interests_view = if submission.interests.is_empty() {
		view! { ctx, }
	} else {
		let interest_items = View::new_fragment(
			submission
				.interests
				.iter()
				.map(|interest| view! { ctx, li { (interest.label()) } })
				.collect(),
		);
		view! {
			ctx,
			div {
				p { "We'll send you updates about your selected interests:" }
				ul { (interest_items) }
			}
		}
	};

	let reset_handler = move |_event: WebEvent| {
		log::debug!("Resetting newsletter signup form");
		state.modify().reset();
	};

	let name = submission.name;
	let email = submission.email;
	view! {
		ctx,
		section(class="newsletter-success") {
			h2 { "Thank You!" }
			p {
				"Thank you, "
				strong { (name) }
				", for signing up for our newsletter!"
			}
			p {
				"We've sent a confirmation email to "
				strong { (email) }
				"."
			}
			(interests_view)
			button(class="signup-button", on:click=reset_handler) { "Sign Up Again" }
		}
	}
}
