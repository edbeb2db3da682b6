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

//! Demo SOC dashboard. Every number on it is a literal from the mock
//! metrics table.

use yew::prelude::*;

use crate::components::dashboard_chart::{ChartConfig, ChartSeries, DashboardChart};
use crate::components::reveal::Reveal;
use crate::model::metrics::THREAT_SERIES;

fn detections_chart() -> ChartConfig {
    ChartConfig {
        title: "Detections over 24h",
        y_axis_label: "events / hour",
        series: vec![
            ChartSeries {
                data_points: THREAT_SERIES.iter().map(|s| s.detected as f64).collect(),
                color: "#56ccf2",
                label: "detected",
            },
            ChartSeries {
                data_points: THREAT_SERIES.iter().map(|s| s.blocked as f64).collect(),
                color: "#6fcf97",
                label: "blocked",
            },
        ],
        max_value: 200.0,
    }
}

fn response_chart() -> ChartConfig {
    ChartConfig {
        title: "Mean response time",
        y_axis_label: "minutes",
        series: vec![ChartSeries {
            data_points: THREAT_SERIES.iter().map(|s| s.response_min as f64).collect(),
            color: "#f2c94c",
            label: "time-to-respond",
        }],
        max_value: 8.0,
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <section id="dashboard" class="section section-dashboard">
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-title">{ "The view from our detection floor" }</h2>
                    <p class="section-lede">
                        { "A sample of what your weekly report looks like: detection volume, \
                           block rate, and how fast a human was on the case." }
                    </p>
                </Reveal>
                <div class="chart-grid">
                    <Reveal stagger_index={0}>
                        <DashboardChart config={detections_chart()} />
                    </Reveal>
                    <Reveal stagger_index={1}>
                        <DashboardChart config={response_chart()} />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
