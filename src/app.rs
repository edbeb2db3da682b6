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

//! Application root: router plus the route switch.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::SiteHeader;
use crate::pages::about_us::AboutUs;
use crate::pages::home::Home;
use crate::pages::our_process::OurProcess;
use crate::pages::why_cyvance::WhyCyvance;
use crate::routing::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::AboutUs => html! { <AboutUs /> },
        Route::OurProcess => html! { <OurProcess /> },
        Route::WhyCyvance => html! { <WhyCyvance /> },
        Route::NotFound => html! {
            <>
                <SiteHeader />
                <main class="subpage">
                    <h1 class="page-title">{ "404" }</h1>
                    <p>{ "That page doesn't exist. The navigation above will get you home." }</p>
                </main>
                <Footer />
            </>
        },
    }
}

#[function_component(AppRoot)]
pub fn app_root() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
