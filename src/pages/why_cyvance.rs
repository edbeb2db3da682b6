// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::footer::Footer;
use crate::components::header::SiteHeader;
use crate::components::reveal::Reveal;
use crate::model::metrics::STAT_TILES;

#[function_component(WhyCyvance)]
pub fn why_cyvance() -> Html {
    use_effect_with((), |_| {
        gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    let tiles: Html = STAT_TILES
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            html! {
                <Reveal stagger_index={i as u32} class="stat-tile-slot">
                    <div class="stat-tile">
                        <AnimatedCounter
                            target={tile.value}
                            suffix={tile.suffix}
                            decimals={tile.decimals}
                        />
                        <span class="stat-label">{ tile.label }</span>
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
                    <h1 class="page-title">{ "Why Cyvance" }</h1>
                    <p class="page-lede">
                        { "Most providers sell software and hope you read the alerts. We sell \
                           outcomes: a contained incident, a passed audit, a quiet quarter. \
                           The numbers below are this year's, not our best year's." }
                    </p>
                </Reveal>
                <div class="stat-grid">
                    { tiles }
                </div>
            </main>
            <Footer />
        </>
    }
}
