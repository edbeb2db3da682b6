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

//! Auto-advancing testimonial carousel. The interval lives in an effect
//! and dies with the component.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::icons::arrows::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::reveal::Reveal;
use crate::model::content::TESTIMONIALS;

const ADVANCE_EVERY_MS: u32 = 6000;

enum CarouselAction {
    Next,
    Prev,
    Jump(usize),
}

#[derive(PartialEq)]
struct CarouselState {
    index: usize,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let len = TESTIMONIALS.len();
        let index = match action {
            CarouselAction::Next => (self.index + 1) % len,
            CarouselAction::Prev => (self.index + len - 1) % len,
            CarouselAction::Jump(i) => i % len,
        };
        Rc::new(Self { index })
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let state = use_reducer(|| CarouselState { index: 0 });

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(ADVANCE_EVERY_MS, move || {
                dispatcher.dispatch(CarouselAction::Next);
            });
            move || drop(interval)
        });
    }

    let current = &TESTIMONIALS[state.index];

    let dots: Html = (0..TESTIMONIALS.len())
        .map(|i| {
            let onclick = {
                let state = state.clone();
                Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Jump(i)))
            };
            html! {
                <button
                    class={classes!("carousel-dot", (i == state.index).then_some("is-active"))}
                    aria-label={format!("Show testimonial {}", i + 1)}
                    {onclick}
                />
            }
        })
        .collect();

    let prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Prev))
    };
    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Next))
    };

    html! {
        <section id="testimonials" class="section section-testimonials">
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-title">{ "What our clients say" }</h2>
                </Reveal>
                <Reveal class="carousel-slot">
                    <div class="carousel">
                        <button class="carousel-arrow" aria-label="Previous testimonial" onclick={prev}>
                            <ChevronLeftIcon />
                        </button>
                        <figure class="testimonial">
                            <blockquote>{ current.quote }</blockquote>
                            <figcaption>
                                <span class="testimonial-author">{ current.author }</span>
                                <span class="testimonial-role">{ current.role }</span>
                            </figcaption>
                        </figure>
                        <button class="carousel-arrow" aria-label="Next testimonial" onclick={next}>
                            <ChevronRightIcon />
                        </button>
                    </div>
                    <div class="carousel-dots">{ dots }</div>
                </Reveal>
            </div>
        </section>
    }
}
