// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::SiteHeader;
use crate::components::reveal::Reveal;

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    // Secondary routes always start at the top of the page.
    use_effect_with((), |_| {
        gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    html! {
        <>
            <SiteHeader />
            <main class="subpage">
                <Reveal>
                    <h1 class="page-title">{ "About Cyvance" }</h1>
                    <p class="page-lede">
                        { "Cyvance was founded in 2019 by incident responders who were tired of \
                           watching breaches fester in ticket queues. Today our detection floor \
                           watches over fifty thousand endpoints for teams in healthcare, \
                           logistics, and finance." }
                    </p>
                </Reveal>
                <Reveal stagger_index={1}>
                    <p>
                        { "We stay deliberately small: senior analysts only, no tier-one \
                           outsourcing, and every client knows the people on their account by \
                           name. Growth comes from renewals, not logos on a slide." }
                    </p>
                </Reveal>
            </main>
            <Footer />
        </>
    }
}
