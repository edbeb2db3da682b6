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

//! Wrapper that reveals its children the first time they scroll into view.
//!
//! Renders a `div.reveal` that gains `is-visible` once the element
//! intersects the viewport. Sibling cards pass increasing `stagger_index`
//! values to cascade their reveals. The observer, and any pending stagger
//! timeout, die with the component.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::constants::REVEAL_STAGGER_STEP_MS;
use crate::scroll::{RevealObserver, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Position among simultaneously-revealing siblings; each step delays
    /// the visible class by a fixed amount.
    #[prop_or_default]
    pub stagger_index: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub options: RevealOptions,
}

pub enum RevealMsg {
    Intersected,
    Show,
}

pub struct Reveal {
    node: NodeRef,
    visible: bool,
    observer: Option<RevealObserver>,
    pending_show: Option<Timeout>,
}

impl Component for Reveal {
    type Message = RevealMsg;
    type Properties = RevealProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node: NodeRef::default(),
            visible: false,
            observer: None,
            pending_show: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(element) = self.node.cast::<web_sys::Element>() {
            let link = ctx.link().clone();
            self.observer = RevealObserver::observe(
                &element,
                &ctx.props().options,
                Callback::from(move |_| link.send_message(RevealMsg::Intersected)),
            );
        }
        if self.observer.is_none() {
            // No observer means no trigger will ever come; show the content
            // rather than hiding it forever.
            ctx.link().send_message(RevealMsg::Show);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RevealMsg::Intersected => {
                let delay_ms = ctx.props().stagger_index * REVEAL_STAGGER_STEP_MS;
                if delay_ms == 0 {
                    self.visible = true;
                    return true;
                }
                let link = ctx.link().clone();
                self.pending_show = Some(Timeout::new(delay_ms, move || {
                    link.send_message(RevealMsg::Show);
                }));
                false
            }
            RevealMsg::Show => {
                self.pending_show = None;
                self.visible = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let mut class = classes!("reveal", ctx.props().class.clone());
        if self.visible {
            class.push("is-visible");
        }
        html! {
            <div ref={self.node.clone()} {class}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}
