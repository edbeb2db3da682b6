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
use yew_router::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::icons::shield::ShieldIcon;
use crate::routing::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <ShieldIcon />
                    <span class="brand-name">{ "Cyvance" }</span>
                    <p class="footer-tagline">
                        { "Detection, response, and resilience for teams that can't afford downtime." }
                    </p>
                </div>
                <nav class="footer-nav">
                    <Link<Route> to={Route::AboutUs} classes="footer-link">{ "About Us" }</Link<Route>>
                    <Link<Route> to={Route::OurProcess} classes="footer-link">{ "Our Process" }</Link<Route>>
                    <Link<Route> to={Route::WhyCyvance} classes="footer-link">{ "Why Cyvance" }</Link<Route>>
                </nav>
                <div class="footer-meta">
                    <span>{ "© 2026 Cyvance Security" }</span>
                </div>
            </div>
            <BackToTop />
        </footer>
    }
}
