// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use newsletter_signup_shared::signup::SignupState;
use sycamore::prelude::*;

mod app;
mod components;
use app::NewsletterSignup;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log_level()));

	sycamore::render(|ctx| {
		let state = create_signal(ctx, SignupState::default());
		view! {
			ctx,
			NewsletterSignup(state=state)
		}
	});
}

fn log_level() -> log::Level {
	if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	}
}
