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

use yew::prelude::*;

use crate::components::threat_globe::ThreatGlobe;
use crate::constants::{HEADER_HEIGHT_PX, SMOOTH_SCROLL_MS};
use crate::scroll::{scroll_to_section, SmoothScroll};

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroller = use_mut_ref(SmoothScroll::new);

    let jump = |id: &'static str| {
        let scroller = scroller.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_section(&scroller.borrow(), id, HEADER_HEIGHT_PX, SMOOTH_SCROLL_MS);
        })
    };

    html! {
        <section class="hero">
            <ThreatGlobe />
            <div class="hero-content">
                <p class="hero-kicker">{ "Managed security, measured in minutes" }</p>
                <h1 class="hero-title">
                    { "Attackers work around the clock." }
                    <br />
                    { "So do we." }
                </h1>
                <p class="hero-subtitle">
                    { "Cyvance pairs a 24/7 detection floor with responders who pick up the phone \
                       four minutes after an alert fires. No ticket queues, no triage roulette." }
                </p>
                <div class="hero-cta-group">
                    <a href="#contact" class="cta-button" onclick={jump("contact")}>
                        { "Talk to an Analyst" }
                    </a>
                    <a href="#services" class="cta-button cta-secondary" onclick={jump("services")}>
                        { "Explore Services" }
                    </a>
                </div>
            </div>
        </section>
    }
}
