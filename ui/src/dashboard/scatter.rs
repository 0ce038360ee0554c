use dioxus::prelude::*;

use crate::core::format;
use crate::core::scores::RenderState;

use super::{category_color, DetailSelection};

const CHART_WIDTH: f64 = 920.0;
const CHART_HEIGHT: f64 = 420.0;
const PADDING: f64 = 56.0;

/// Ranked scatter plot: x is the sorted rank, y the metric value, color the
/// sample's category. Clicking a point raises the detail payload.
#[component]
pub fn ScatterCard(state: RenderState, on_select: EventHandler<DetailSelection>) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let title = state.title();
    let axis_label = state.metric.kind.to_string();
    let sample_count = format::format_count(state.entries.len());

    let max_value = state
        .entries
        .iter()
        .map(|entry| entry.metric)
        .fold(f64::EPSILON, f64::max);

    let num_entries = state.entries.len();
    let x_of = move |rank: usize| {
        PADDING + (CHART_WIDTH - 2.0 * PADDING) * (rank as f64 / (num_entries - 1).max(1) as f64)
    };
    let y_of = move |value: f64| {
        PADDING + (CHART_HEIGHT - 2.0 * PADDING) * (1.0 - value / max_value)
    };

    rsx! {
        section { class: "results-card scatter-card",
            div { class: "results-card__header",
                h2 { "{title}" }
                span { class: "results-card__meta", "{sample_count}" }
            }

            if state.entries.is_empty() {
                p { class: "results-card__placeholder",
                    "The selected scorecard has no entries to plot."
                }
            } else {
                div {
                    class: "scatter-card__plot",
                    onmouseleave: move |_| hovered.set(None),

                    svg {
                        class: "scatter-card__svg",
                        view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                        "preserveAspectRatio": "xMidYMid meet",

                        for i in 0..5 {
                            line {
                                x1: "{PADDING}",
                                y1: "{PADDING + (CHART_HEIGHT - 2.0 * PADDING) * (i as f64 / 4.0)}",
                                x2: "{CHART_WIDTH - PADDING}",
                                y2: "{PADDING + (CHART_HEIGHT - 2.0 * PADDING) * (i as f64 / 4.0)}",
                                class: "scatter-card__gridline",
                            }
                        }

                        for i in 0..5 {
                            text {
                                x: "{PADDING - 6.0}",
                                y: "{PADDING + (CHART_HEIGHT - 2.0 * PADDING) * (i as f64 / 4.0) + 4.0}",
                                class: "scatter-card__axis-text",
                                "text-anchor": "end",
                                "{format::format_metric(max_value * (1.0 - i as f64 / 4.0))}"
                            }
                        }

                        text {
                            x: "{CHART_WIDTH / 2.0}",
                            y: "{CHART_HEIGHT - 10.0}",
                            class: "scatter-card__axis-text",
                            "text-anchor": "middle",
                            "Sorted Index"
                        }
                        text {
                            x: "14.0",
                            y: "{CHART_HEIGHT / 2.0}",
                            class: "scatter-card__axis-text",
                            "text-anchor": "middle",
                            transform: "rotate(-90 14 {CHART_HEIGHT / 2.0})",
                            "{axis_label}"
                        }

                        for (rank, entry) in state.entries.iter().enumerate() {
                            {
                                let color_index = state
                                    .categories
                                    .index_of(&entry.category)
                                    .unwrap_or_default();
                                let color = category_color(color_index);
                                let cx = x_of(rank);
                                let cy = y_of(entry.metric);
                                let radius = if hovered() == Some(rank) { 7.0 } else { 5.0 };
                                let payload = DetailSelection {
                                    generated_id: entry.generated_id.clone(),
                                    ref_id: entry.ref_id.clone(),
                                    description: entry.description.clone(),
                                    asset_root: state.metric.asset_root.to_string(),
                                };
                                rsx! {
                                    circle {
                                        key: "{entry.generated_id}",
                                        cx: "{cx}",
                                        cy: "{cy}",
                                        r: "{radius}",
                                        fill: "{color}",
                                        class: "scatter-card__point",
                                        onmouseenter: move |_| hovered.set(Some(rank)),
                                        onclick: move |_| on_select.call(payload.clone()),
                                    }
                                }
                            }
                        }
                    }

                    if let Some(rank) = hovered() {
                        if let Some(entry) = state.entries.get(rank) {
                            {
                                let fraction = rank as f64 / (num_entries - 1).max(1) as f64;
                                let tooltip_left = if fraction < 0.5 {
                                    format!("calc({}% + 24px)", (fraction * 100.0).max(5.0))
                                } else {
                                    format!("calc({}% - 240px)", (fraction * 100.0).min(95.0))
                                };
                                rsx! {
                                    div {
                                        class: "scatter-card__tooltip",
                                        style: "top: 12px; left: {tooltip_left};",
                                        div { class: "scatter-card__tooltip-row",
                                            span { "Index: {rank}" }
                                        }
                                        div { class: "scatter-card__tooltip-row",
                                            span { "{axis_label}: {format::format_metric(entry.metric)}" }
                                        }
                                        div { class: "scatter-card__tooltip-row",
                                            span { "Category: {entry.category}" }
                                        }
                                        div { class: "scatter-card__tooltip-row",
                                            span { "Description: {entry.description}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                p { class: "scatter-card__hint",
                    "Click a point to inspect the generated and reference clouds."
                }
            }
        }
    }
}
