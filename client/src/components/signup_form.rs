// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::interest_checkboxes::InterestCheckboxes;
use newsletter_signup_shared::form::FormField;
use newsletter_signup_shared::signup::SignupState;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct SignupFormProps<'a> {
	state: &'a Signal<SignupState>,
}

#[component]
pub fn SignupFormView<'a, G: Html>(ctx: Scope<'a>, props: SignupFormProps<'a>) -> View<G> {
	log::debug!("Activating newsletter signup form view");
	let state = props.state;

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		match state.modify().submit() {
			Ok(submission) => match serde_json::to_string(submission) {
				Ok(submission_json) => log::info!("Newsletter signup submitted: {}", submission_json),
				Err(error) => log::warn!("Newsletter signup submitted, but it couldn't be serialized: {}", error),
			},
			Err(errors) => log::debug!("Newsletter signup rejected with {} field errors", errors.len()),
		}
	};

	view! {
		ctx,
		section(class="newsletter-section") {
			h2 { "Newsletter Signup" }
			p { "Stay updated with the latest news and trends in tech!" }
			form(class="newsletter-form", novalidate=true, on:submit=form_submission_handler) {
				TextField(state=state, field=FormField::Name, label="Name:", input_type="text", placeholder="Enter your name")
				TextField(state=state, field=FormField::Email, label="Email:", input_type="email", placeholder="Enter your email")
				div(class="form-group") {
					InterestCheckboxes(state=state)
				}
				button(type="submit", class="signup-button") { "Sign Up" }
			}
		}
	}
}

#[derive(Prop)]
pub struct TextFieldProps<'a> {
	state: &'a Signal<SignupState>,
	field: FormField,
	label: &'static str,
	input_type: &'static str,
	placeholder: &'static str,
}

/// A labelled text input bound to one field of the form, with the field's error shown beside it.
#[component]
pub fn TextField<'a, G: Html>(ctx: Scope<'a>, props: TextFieldProps<'a>) -> View<G> {
	let state = props.state;
	let field = props.field;

	let value_signal = create_signal(ctx, String::from(state.get_untracked().form().field(field)));
	create_effect(ctx, move || {
		let value = value_signal.get();
		if state.get_untracked().form().field(field) != value.as_str() {
			state.modify().update_field(field, (*value).clone());
		}
	});

	let error_signal = create_selector(ctx, move || state.get().errors().get(field));
	let error_class_signal = create_memo(ctx, || if error_signal.get().is_some() { "error" } else { "" });

	let input_id = field.input_name();
	view! {
		ctx,
		div(class="form-group") {
			label(for=input_id) { (props.label) }
			input(
				type=props.input_type,
				id=input_id,
				name=input_id,
				placeholder=props.placeholder,
				class=*error_class_signal.get(),
				bind:value=value_signal
			)
			(if let Some(error) = *error_signal.get() {
				view! {
					ctx,
					span(class="error-message") { (error.to_string()) }
				}
			} else {
				view! { ctx, }
			})
		}
	}
}
