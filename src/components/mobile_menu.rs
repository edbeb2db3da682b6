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

//! Full-screen navigation overlay for small viewports.
//!
//! The overlay only exists while open; the header mounts it on toggle and
//! removes it on close. Page scroll is locked by a [`ScrollLock`] held as a
//! struct field, so every exit path — close button, link click, or plain
//! unmount — releases the lock through the same drop.

use yew::prelude::*;

use crate::components::icons::menu::CloseIcon;
use crate::constants::NAV_SECTIONS;
use crate::routing::Route;
use crate::scroll::ScrollLock;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    #[prop_or_default]
    pub active_id: Option<AttrValue>,
    pub on_close: Callback<()>,
    /// Section navigation is delegated to the header, which owns the
    /// smooth-scroll driver.
    pub on_nav: Callback<String>,
}

pub struct MobileMenu {
    _lock: Option<ScrollLock>,
}

impl Component for MobileMenu {
    type Message = ();
    type Properties = MobileMenuProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            _lock: ScrollLock::engage(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let section_links: Html = NAV_SECTIONS
            .iter()
            .map(|&(id, label)| {
                let is_active = props.active_id.as_deref() == Some(id);
                let on_nav = props.on_nav.clone();
                let onclick = Callback::from(move |event: MouseEvent| {
                    event.prevent_default();
                    on_nav.emit(id.to_string());
                });
                html! {
                    <a
                        href={format!("#{id}")}
                        class={classes!("mobile-nav-link", is_active.then_some("is-active"))}
                        {onclick}
                    >
                        { label }
                    </a>
                }
            })
            .collect();

        let close = props.on_close.reform(|_: MouseEvent| ());
        let close_on_route = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="mobile-menu-overlay" data-testid="mobile-menu">
                <button class="mobile-menu-close" aria-label="Close navigation menu" onclick={close}>
                    <CloseIcon />
                </button>
                <nav class="mobile-nav" onclick={close_on_route}>
                    { section_links }
                    <Link<Route> to={Route::AboutUs} classes="mobile-nav-link">{ "About Us" }</Link<Route>>
                    <Link<Route> to={Route::OurProcess} classes="mobile-nav-link">{ "Our Process" }</Link<Route>>
                    <Link<Route> to={Route::WhyCyvance} classes="mobile-nav-link">{ "Why Cyvance" }</Link<Route>>
                </nav>
            </div>
        }
    }
}
