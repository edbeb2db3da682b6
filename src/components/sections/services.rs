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

use crate::components::reveal::Reveal;
use crate::model::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    let cards: Html = SERVICES
        .iter()
        .enumerate()
        .map(|(i, service)| {
            html! {
                <Reveal stagger_index={i as u32} class="service-card-slot">
                    <div class="service-card">
                        <h3>{ service.title }</h3>
                        <p>{ service.blurb }</p>
                    </div>
                </Reveal>
            }
        })
        .collect();

    html! {
        <section id="services" class="section section-services">
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-title">{ "What we take off your plate" }</h2>
                    <p class="section-lede">
                        { "Six practice areas, one accountable team. Every engagement ships with \
                           named analysts and a response-time commitment in the contract." }
                    </p>
                </Reveal>
                <div class="service-grid">
                    { cards }
                </div>
            </div>
        </section>
    }
}
