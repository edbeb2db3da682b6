/*
 * Copyright 2026 Cyvance Security
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Contact form. Client-side only: a valid submission is logged and the
//! form flips to a confirmation panel. There is no backend to send to.

use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::sound::UiSounds;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Required-field checks. Returns the first problem found.
pub fn validate(msg: &ContactMessage) -> Result<(), &'static str> {
    if msg.name.trim().is_empty() {
        return Err("Please tell us your name.");
    }
    let email = msg.email.trim();
    if email.is_empty() || !email.contains('@') || !email.contains('.') {
        return Err("That email address doesn't look right.");
    }
    if msg.message.trim().is_empty() {
        return Err("Tell us a little about what you need.");
    }
    Ok(())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let draft = use_state(ContactMessage::default);
    let error = use_state(|| None::<&'static str>);
    let submitted = use_state(|| false);
    let sounds = use_mut_ref(UiSounds::new);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            draft.set(ContactMessage {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_email = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            draft.set(ContactMessage {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };
    let on_message = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            draft.set(ContactMessage {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        let sounds = sounds.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match validate(&draft) {
                Ok(()) => {
                    match serde_json::to_string(&*draft) {
                        Ok(payload) => log::info!("contact request captured: {payload}"),
                        Err(err) => log::warn!("failed to serialize contact request: {err}"),
                    }
                    sounds.borrow().play_confirm();
                    error.set(None);
                    submitted.set(true);
                }
                Err(problem) => error.set(Some(problem)),
            }
        })
    };

    let body = if *submitted {
        html! {
            <div class="contact-confirmation">
                <h3>{ "Thanks — we're on it." }</h3>
                <p>{ "An analyst will reach out within one business day." }</p>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" {onsubmit}>
                <label>
                    { "Name" }
                    <input type="text" value={draft.name.clone()} oninput={on_name} />
                </label>
                <label>
                    { "Work email" }
                    <input type="email" value={draft.email.clone()} oninput={on_email} />
                </label>
                <label>
                    { "How can we help?" }
                    <textarea rows="4" value={draft.message.clone()} oninput={on_message} />
                </label>
                if let Some(problem) = *error {
                    <p class="form-error">{ problem }</p>
                }
                <button type="submit" class="cta-button">{ "Request a Consultation" }</button>
            </form>
        }
    };

    html! {
        <section id="contact" class="section section-contact">
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-title">{ "Put us on the clock" }</h2>
                    <p class="section-lede">
                        { "Tell us what keeps you up at night. We'll come back with a plan, \
                           not a sales deck." }
                    </p>
                </Reveal>
                <Reveal class="contact-form-slot">
                    { body }
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, ContactMessage};

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "We need a pentest.".into(),
        }
    }

    #[test]
    fn complete_message_passes() {
        assert!(validate(&filled()).is_ok());
    }

    #[test]
    fn missing_fields_are_rejected_in_order() {
        let mut msg = filled();
        msg.name = "  ".into();
        assert!(validate(&msg).is_err());

        let mut msg = filled();
        msg.email = "not-an-email".into();
        assert!(validate(&msg).is_err());

        let mut msg = filled();
        msg.message = String::new();
        assert!(validate(&msg).is_err());
    }
}
