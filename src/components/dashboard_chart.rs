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

//! Hand-rolled SVG line charts for the mock SOC dashboard.
//!
//! No chart library: each series becomes one `<polyline>` inside a fixed
//! viewBox with axis lines, ticks, and a small legend.

use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ChartSeries {
    pub data_points: Vec<f64>,
    pub color: &'static str,
    pub label: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct ChartConfig {
    pub title: &'static str,
    pub y_axis_label: &'static str,
    pub series: Vec<ChartSeries>,
    pub max_value: f64,
}

#[derive(Properties, PartialEq)]
pub struct DashboardChartProps {
    pub config: ChartConfig,
    #[prop_or(460)]
    pub width: u32,
    #[prop_or(240)]
    pub height: u32,
}

/// Map `data_points` into an SVG polyline `points` attribute within the
/// given plot box. Values are clamped at zero; an empty series yields an
/// empty string.
fn polyline_points(
    data: &[f64],
    max_value: f64,
    origin: (f64, f64),
    plot: (f64, f64),
) -> String {
    let (left, top) = origin;
    let (plot_w, plot_h) = plot;
    let last = (data.len().saturating_sub(1)).max(1) as f64;
    data.iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = left + i as f64 / last * plot_w;
            let y = top + plot_h - (value.max(0.0) / max_value * plot_h).min(plot_h);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[function_component(DashboardChart)]
pub fn dashboard_chart(props: &DashboardChartProps) -> Html {
    let DashboardChartProps {
        config,
        width,
        height,
    } = props;

    let chart_w = *width as f64;
    let chart_h = *height as f64;
    let margin_left = 48.0;
    let margin_right = 16.0;
    let margin_top = 28.0;
    let margin_bottom = 32.0;
    let plot_w = chart_w - margin_left - margin_right;
    let plot_h = chart_h - margin_top - margin_bottom;

    let data_len = config
        .series
        .first()
        .map(|s| s.data_points.len())
        .unwrap_or(0);
    if data_len == 0 {
        return html! {
            <div class="dashboard-chart">
                <div class="chart-title">{ config.title }</div>
                <div class="chart-empty">{ "No data" }</div>
            </div>
        };
    }

    let series_elements: Html = config
        .series
        .iter()
        .map(|series| {
            let points = polyline_points(
                &series.data_points,
                config.max_value,
                (margin_left, margin_top),
                (plot_w, plot_h),
            );
            html! {
                <polyline {points} fill="none" stroke={series.color} stroke-width="2" />
            }
        })
        .collect();

    let legend_elements: Html = config
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let y = 14 + (i as i32) * 14;
            html! {
                <text x={(margin_left + 6.0).to_string()} y={y.to_string()} fill={series.color} font-size="10">
                    { series.label }
                </text>
            }
        })
        .collect();

    let baseline = margin_top + plot_h;
    html! {
        <div class="dashboard-chart">
            <svg
                width={width.to_string()}
                height={height.to_string()}
                viewBox={format!("0 0 {width} {height}")}
                role="img"
                aria-label={config.title}
            >
                // Axes
                <line x1={margin_left.to_string()} y1={margin_top.to_string()}
                    x2={margin_left.to_string()} y2={baseline.to_string()}
                    stroke="#3a4455" stroke-width="1" />
                <line x1={margin_left.to_string()} y1={baseline.to_string()}
                    x2={(chart_w - margin_right).to_string()} y2={baseline.to_string()}
                    stroke="#3a4455" stroke-width="1" />

                { series_elements }
                { legend_elements }

                // Y-axis labels: zero, midpoint, max
                <text x={(margin_left - 8.0).to_string()} y={(baseline + 4.0).to_string()}
                    fill="#8a94a6" font-size="10" text-anchor="end">{ "0" }</text>
                <text x={(margin_left - 8.0).to_string()} y={(margin_top + plot_h / 2.0 + 4.0).to_string()}
                    fill="#8a94a6" font-size="10" text-anchor="end">
                    { format!("{:.0}", config.max_value / 2.0) }
                </text>
                <text x={(margin_left - 8.0).to_string()} y={(margin_top + 4.0).to_string()}
                    fill="#8a94a6" font-size="10" text-anchor="end">
                    { format!("{:.0}", config.max_value) }
                </text>

                // X-axis hour labels
                <text x={margin_left.to_string()} y={(chart_h - 8.0).to_string()}
                    fill="#8a94a6" font-size="10" text-anchor="middle">{ "00:00" }</text>
                <text x={(margin_left + plot_w / 2.0).to_string()} y={(chart_h - 8.0).to_string()}
                    fill="#8a94a6" font-size="10" text-anchor="middle">{ "12:00" }</text>
                <text x={(margin_left + plot_w).to_string()} y={(chart_h - 8.0).to_string()}
                    fill="#8a94a6" font-size="10" text-anchor="middle">{ "23:00" }</text>

                <text x="10" y={(margin_top + plot_h / 2.0).to_string()} fill="#8a94a6" font-size="10"
                    transform={format!("rotate(-90, 10, {})", margin_top + plot_h / 2.0)}>
                    { config.y_axis_label }
                </text>
                <text x={(chart_w / 2.0).to_string()} y="14" fill="#dfe6f1" font-size="12"
                    text-anchor="middle" font-weight="bold">{ config.title }</text>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::polyline_points;

    #[test]
    fn points_span_the_plot_box() {
        let pts = polyline_points(&[0.0, 50.0, 100.0], 100.0, (40.0, 20.0), (200.0, 100.0));
        let coords: Vec<&str> = pts.split(' ').collect();
        assert_eq!(coords.len(), 3);
        // First point: x at left margin, y at baseline (value 0).
        assert_eq!(coords[0], "40.0,120.0");
        // Last point: x at right edge, y at top (value == max).
        assert_eq!(coords[2], "240.0,20.0");
    }

    #[test]
    fn values_above_max_clamp_to_plot_top() {
        let pts = polyline_points(&[250.0], 100.0, (0.0, 10.0), (100.0, 80.0));
        assert_eq!(pts, "0.0,10.0");
    }

    #[test]
    fn empty_series_yields_empty_points() {
        assert_eq!(polyline_points(&[], 10.0, (0.0, 0.0), (10.0, 10.0)), "");
    }
}
