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

//! Fixed site header.
//!
//! Past a small scroll threshold the header restyles as "scrolled"; it
//! slides out of view while the user scrolls down and returns on the first
//! upward scroll. Hash links route through the anchor resolver so sections
//! land below the header instead of under it; the active link comes from
//! the scroll spy owned by the home page.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icons::menu::MenuIcon;
use crate::components::icons::shield::ShieldIcon;
use crate::components::mobile_menu::MobileMenu;
use crate::constants::{
    HEADER_HEIGHT_PX, HEADER_SCROLL_THRESHOLD_PX, NAV_SECTIONS, SMOOTH_SCROLL_MS,
};
use crate::routing::Route;
use crate::scroll::smooth::current_scroll_y;
use crate::scroll::{scroll_to_section, SmoothScroll};
use crate::sound::UiSounds;

/// Visual state of the header at a given scroll offset.
/// `last_y` is the offset seen on the previous scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderVisual {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderVisual {
    pub fn at(last_y: f64, y: f64, threshold: f64) -> Self {
        let scrolled = y > threshold;
        Self {
            scrolled,
            hidden: scrolled && y > last_y,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    /// Section id currently highlighted in the nav, from the scroll spy.
    #[prop_or_default]
    pub active_id: Option<AttrValue>,
}

pub enum HeaderMsg {
    Scrolled(f64),
    NavTo(String),
    ToggleMenu,
    CloseMenu,
}

pub struct SiteHeader {
    visual: HeaderVisual,
    last_y: f64,
    menu_open: bool,
    scroller: SmoothScroll,
    sounds: UiSounds,
    scroll_listener: Option<Closure<dyn FnMut()>>,
}

impl Component for SiteHeader {
    type Message = HeaderMsg;
    type Properties = SiteHeaderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let listener = Closure::wrap(Box::new(move || {
            link.send_message(HeaderMsg::Scrolled(current_scroll_y()));
        }) as Box<dyn FnMut()>);
        let _ = gloo_utils::window()
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());

        Self {
            visual: HeaderVisual::default(),
            last_y: current_scroll_y(),
            menu_open: false,
            scroller: SmoothScroll::new(),
            sounds: UiSounds::new(),
            scroll_listener: Some(listener),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HeaderMsg::Scrolled(y) => {
                let next = HeaderVisual::at(self.last_y, y, HEADER_SCROLL_THRESHOLD_PX);
                self.last_y = y;
                if next != self.visual {
                    self.visual = next;
                    return true;
                }
                false
            }
            HeaderMsg::NavTo(id) => {
                self.sounds.play_tick();
                scroll_to_section(&self.scroller, &id, HEADER_HEIGHT_PX, SMOOTH_SCROLL_MS);
                if self.menu_open {
                    self.menu_open = false;
                    return true;
                }
                false
            }
            HeaderMsg::ToggleMenu => {
                self.sounds.play_tick();
                self.menu_open = !self.menu_open;
                true
            }
            HeaderMsg::CloseMenu => {
                self.menu_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active_id = ctx.props().active_id.clone();

        let mut class = classes!("site-header");
        if self.visual.scrolled {
            class.push("is-scrolled");
        }
        if self.visual.hidden && !self.menu_open {
            class.push("is-hidden");
        }

        let section_links: Html = NAV_SECTIONS
            .iter()
            .map(|&(id, label)| {
                let is_active = active_id.as_deref() == Some(id);
                let onclick = ctx.link().callback(move |event: MouseEvent| {
                    event.prevent_default();
                    HeaderMsg::NavTo(id.to_string())
                });
                html! {
                    <a
                        href={format!("#{id}")}
                        class={classes!("nav-link", is_active.then_some("is-active"))}
                        {onclick}
                    >
                        { label }
                    </a>
                }
            })
            .collect();

        html! {
            <header {class} data-testid="site-header">
                <div class="header-inner">
                    <Link<Route> to={Route::Home} classes="brand">
                        <ShieldIcon />
                        <span class="brand-name">{ "Cyvance" }</span>
                    </Link<Route>>
                    <nav class="header-nav">
                        { section_links }
                        <Link<Route> to={Route::AboutUs} classes="nav-link">{ "About Us" }</Link<Route>>
                        <Link<Route> to={Route::OurProcess} classes="nav-link">{ "Our Process" }</Link<Route>>
                        <Link<Route> to={Route::WhyCyvance} classes="nav-link nav-link-cta">{ "Why Cyvance" }</Link<Route>>
                    </nav>
                    <button
                        class="menu-toggle"
                        aria-label="Open navigation menu"
                        onclick={ctx.link().callback(|_| HeaderMsg::ToggleMenu)}
                    >
                        <MenuIcon />
                    </button>
                </div>
                if self.menu_open {
                    <MobileMenu
                        active_id={active_id}
                        on_close={ctx.link().callback(|_| HeaderMsg::CloseMenu)}
                        on_nav={ctx.link().callback(HeaderMsg::NavTo)}
                    />
                }
            </header>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(listener) = self.scroll_listener.take() {
            let _ = gloo_utils::window()
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderVisual;

    #[test]
    fn transparent_near_top() {
        let v = HeaderVisual::at(0.0, 10.0, 24.0);
        assert!(!v.scrolled);
        assert!(!v.hidden);
    }

    #[test]
    fn hides_scrolling_down_past_threshold() {
        let v = HeaderVisual::at(100.0, 160.0, 24.0);
        assert!(v.scrolled);
        assert!(v.hidden);
    }

    #[test]
    fn reappears_on_upward_scroll() {
        let v = HeaderVisual::at(400.0, 340.0, 24.0);
        assert!(v.scrolled);
        assert!(!v.hidden);
    }

    #[test]
    fn never_hidden_near_top() {
        // Below the threshold the header stays put regardless of direction.
        let v = HeaderVisual::at(0.0, 20.0, 24.0);
        assert!(!v.hidden);
    }
}
