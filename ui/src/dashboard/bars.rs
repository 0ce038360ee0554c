use dioxus::prelude::*;

use crate::core::format;
use crate::core::scores::RenderState;

use super::category_color;

/// Horizontal bars of per-category mean metric values, best category first.
#[component]
pub fn CategoryBarsCard(state: RenderState) -> Element {
    let axis_label = state.metric.kind.to_string();
    let max_mean = state
        .averages
        .iter()
        .map(|avg| avg.mean)
        .fold(f64::EPSILON, f64::max);

    rsx! {
        section { class: "results-card category-bars",
            div { class: "results-card__header",
                h2 { "Average {axis_label} by category" }
                if !state.averages.is_empty() {
                    span { class: "results-card__meta", "{state.averages.len()} categories" }
                }
            }

            if state.averages.is_empty() {
                p { class: "results-card__placeholder", "No categories to aggregate yet." }
            } else {
                ul { class: "category-bars__rows",
                    for average in state.averages.iter() {
                        {
                            let color_index = state
                                .categories
                                .index_of(&average.category)
                                .unwrap_or_default();
                            let color = category_color(color_index);
                            let width_pct = (average.mean / max_mean * 100.0).clamp(0.0, 100.0);
                            rsx! {
                                li { key: "{average.category}", class: "category-bars__row",
                                    span { class: "category-bars__label", "{average.category}" }
                                    div { class: "category-bars__track",
                                        div {
                                            class: "category-bars__fill",
                                            style: "width: {width_pct}%; background: {color};",
                                        }
                                    }
                                    span { class: "category-bars__value",
                                        "{format::format_metric(average.mean)}"
                                    }
                                    span { class: "category-bars__count",
                                        "{format::format_count(average.count)}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
