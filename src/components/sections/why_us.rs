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

use crate::components::particle_field::ParticleField;
use crate::components::reveal::Reveal;

const REASONS: [(&str, &str); 4] = [
    (
        "Analysts, not alert forwarding",
        "Every detection is triaged by a human before it reaches you. We page you with a finding, not a firehose.",
    ),
    (
        "Response time in the contract",
        "Four-minute median time-to-first-action, written into the SLA and reported against every month.",
    ),
    (
        "Your stack, not ours",
        "We plug into the EDR, SIEM, and cloud tooling you already run instead of forcing a rip-and-replace.",
    ),
    (
        "Evidence you can hand to auditors",
        "Timelines, artifacts, and remediation records exported in the shape your compliance program expects.",
    ),
];

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let reasons: Html = REASONS
        .iter()
        .enumerate()
        .map(|(i, &(title, body))| {
            html! {
                <Reveal stagger_index={i as u32} class="reason-slot">
                    <div class="reason-card">
                        <h3>{ title }</h3>
                        <p>{ body }</p>
                    </div>
                </Reveal>
            }
        })
        .collect();

    html! {
        <section id="why-us" class="section section-why-us">
            <ParticleField />
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-title">{ "Why teams switch to Cyvance" }</h2>
                </Reveal>
                <div class="reason-grid">
                    { reasons }
                </div>
            </div>
        </section>
    }
}
