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

//! Landing page. Owns the scroll spy and feeds its active section id to
//! the header; everything below is a stack of anchored sections.

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::SiteHeader;
use crate::components::sections::blogs::Blogs;
use crate::components::sections::contact::Contact;
use crate::components::sections::dashboard::Dashboard;
use crate::components::sections::hero::Hero;
use crate::components::sections::services::Services;
use crate::components::sections::stats::Stats;
use crate::components::sections::testimonials::Testimonials;
use crate::components::sections::why_us::WhyUs;
use crate::constants::{SECTION_IDS, SPY_LOOKAHEAD_PX};
use crate::scroll::ScrollSpy;

#[function_component(Home)]
pub fn home() -> Html {
    let active = use_state(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let spy = ScrollSpy::new(
                &SECTION_IDS,
                SPY_LOOKAHEAD_PX,
                Callback::from(move |id| active.set(id)),
            );
            move || drop(spy)
        });
    }

    let active_id = (*active).clone().map(AttrValue::from);

    html! {
        <>
            <SiteHeader {active_id} />
            <main class="home-page">
                <Hero />
                <Services />
                <Stats />
                <WhyUs />
                <Dashboard />
                <Testimonials />
                <Blogs />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
