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

use crate::components::animated_counter::AnimatedCounter;
use crate::components::reveal::Reveal;
use crate::model::metrics::STAT_TILES;

#[function_component(Stats)]
pub fn stats() -> Html {
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
        <section id="stats" class="section section-stats">
            <div class="section-inner">
                <div class="stat-grid">
                    { tiles }
                </div>
            </div>
        </section>
    }
}
