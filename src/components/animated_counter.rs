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

//! Counter that ticks up from zero the first time it becomes visible.
//!
//! Self-contained in the style of the call timer: the counter owns its own
//! visibility observer and animation-frame loop, so parents re-render only
//! when they choose to.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::scroll::easing::ease_out_cubic;
use crate::scroll::{RevealObserver, RevealOptions, Tween};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: f64,
    #[prop_or(1400.0)]
    pub duration_ms: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(0)]
    pub decimals: usize,
}

pub enum CounterMsg {
    Visible,
    Frame(f64),
}

pub struct AnimatedCounter {
    node: NodeRef,
    shown: f64,
    started_at_ms: Option<f64>,
    observer: Option<RevealObserver>,
    tick: Option<Closure<dyn FnMut(f64)>>,
    raf_id: Option<i32>,
}

impl Component for AnimatedCounter {
    type Message = CounterMsg;
    type Properties = AnimatedCounterProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            node: NodeRef::default(),
            shown: 0.0,
            started_at_ms: None,
            observer: None,
            tick: Some(Closure::wrap(Box::new(move |now: f64| {
                link.send_message(CounterMsg::Frame(now));
            }) as Box<dyn FnMut(f64)>)),
            raf_id: None,
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
                &RevealOptions::default(),
                Callback::from(move |_| link.send_message(CounterMsg::Visible)),
            );
        }
        if self.observer.is_none() {
            // No observer means no trigger will ever come; count up anyway.
            ctx.link().send_message(CounterMsg::Visible);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CounterMsg::Visible => {
                self.schedule_frame();
                false
            }
            CounterMsg::Frame(now_ms) => {
                let started = *self.started_at_ms.get_or_insert(now_ms);
                let tween = Tween::new(
                    0.0,
                    ctx.props().target,
                    ctx.props().duration_ms,
                    ease_out_cubic,
                );
                let (value, done) = tween.sample(now_ms - started);
                self.shown = value;
                if done {
                    self.raf_id = None;
                } else {
                    self.schedule_frame();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <span ref={self.node.clone()} class="stat-value">
                { props.prefix.clone() }
                { format_count(self.shown, props.decimals) }
                { props.suffix.clone() }
            </span>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(id) = self.raf_id.take() {
            let _ = gloo_utils::window().cancel_animation_frame(id);
        }
        self.tick = None;
    }
}

impl AnimatedCounter {
    fn schedule_frame(&mut self) {
        if let Some(tick) = self.tick.as_ref() {
            self.raf_id = gloo_utils::window()
                .request_animation_frame(tick.as_ref().unchecked_ref())
                .ok();
        }
    }
}

/// Format a value with thousands separators on the integer part.
fn format_count(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(12847.0, 0), "12,847");
        assert_eq!(format_count(52000.0, 0), "52,000");
        assert_eq!(format_count(999.0, 0), "999");
        assert_eq!(format_count(1000000.0, 0), "1,000,000");
    }

    #[test]
    fn keeps_requested_decimals() {
        assert_eq!(format_count(99.7, 1), "99.7");
        assert_eq!(format_count(4.25, 1), "4.2");
        assert_eq!(format_count(1234.5, 1), "1,234.5");
    }

    #[test]
    fn rounds_rather_than_truncates() {
        assert_eq!(format_count(99.96, 1), "100.0");
        assert_eq!(format_count(12846.6, 0), "12,847");
    }
}
