// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::SiteHeader;
use crate::components::reveal::Reveal;

const STEPS: [(&str, &str); 4] = [
    (
        "01 — Map",
        "Two weeks of discovery: asset inventory, tooling audit, and a baseline of what normal looks like on your network.",
    ),
    (
        "02 — Wire",
        "We connect your EDR, SIEM, identity provider, and cloud accounts into our detection floor. No agents of our own unless you want them.",
    ),
    (
        "03 — Watch",
        "Analysts triage every detection around the clock. You hear from a human within minutes, with the evidence attached.",
    ),
    (
        "04 — Harden",
        "Each incident feeds a monthly hardening plan: detections tuned, misconfigurations closed, playbooks rehearsed.",
    ),
];

#[function_component(OurProcess)]
pub fn our_process() -> Html {
    use_effect_with((), |_| {
        gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    let steps: Html = STEPS
        .iter()
        .enumerate()
        .map(|(i, &(step, body))| {
            html! {
                <Reveal stagger_index={i as u32} class="process-step-slot">
                    <div class="process-step">
                        <h2>{ step }</h2>
                        <p>{ body }</p>
                    </div>
                </Reveal>
            }
        })
        .collect();

    html! {
        <>
            <SiteHeader />
            <main class="subpage">
                <Reveal>
                    <h1 class="page-title">{ "How an engagement runs" }</h1>
                </Reveal>
                <div class="process-steps">
                    { steps }
                </div>
            </main>
            <Footer />
        </>
    }
}
