// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use newsletter_signup_shared::interests::Interest;
use newsletter_signup_shared::signup::SignupState;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct InterestCheckboxesProps<'a> {
	state: &'a Signal<SignupState>,
}

#[component]
pub fn InterestCheckboxes<'a, G: Html>(ctx: Scope<'a>, props: InterestCheckboxesProps<'a>) -> View<G> {
	let state = props.state;

	let checkbox_views = View::new_fragment(
		Interest::ALL
			.iter()
			.map(|interest| {
				let interest = *interest;
				let checked_signal = create_signal(ctx, state.get_untracked().form().interests.contains(interest));
				create_effect(ctx, move || {
					let selected = *checked_signal.get();
					if state.get_untracked().form().interests.contains(interest) != selected {
						state.modify().set_interest(interest, selected);
					}
				});

				let checkbox_id = interest.element_id();
				let label_for = checkbox_id.clone();
				view! {
					ctx,
					div(class="checkbox-group") {
						input(type="checkbox", id=checkbox_id, bind:checked=checked_signal)
						label(for=label_for) { (interest.label()) }
					}
				}
			})
			.collect(),
	);

	view! {
		ctx,
		fieldset {
			legend { "Select your interests:" }
			(checkbox_views)
		}
	}
}
