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

use crate::components::reveal::Reveal;
use crate::model::content::BLOG_POSTS;

#[function_component(Blogs)]
pub fn blogs() -> Html {
    let cards: Html = BLOG_POSTS
        .iter()
        .enumerate()
        .map(|(i, post)| {
            html! {
                <Reveal stagger_index={i as u32} class="blog-card-slot">
                    <article class="blog-card">
                        <div class="blog-meta">
                            <span>{ post.date }</span>
                            <span>{ format!("{} min read", post.read_minutes) }</span>
                        </div>
                        <h3>{ post.title }</h3>
                        <p>{ post.excerpt }</p>
                    </article>
                </Reveal>
            }
        })
        .collect();

    html! {
        <section id="blogs" class="section section-blogs">
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-title">{ "From the research desk" }</h2>
                </Reveal>
                <div class="blog-grid">
                    { cards }
                </div>
            </div>
        </section>
    }
}
