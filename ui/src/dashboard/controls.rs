use dioxus::prelude::*;

use crate::core::catalog;

use super::Selection;

/// Model and metric selectors. Metric options are re-derived from the catalog
/// on every render, so switching models repopulates them and snaps the
/// selection back to that model's first metric.
#[component]
pub fn SelectorBar(mut selection: Signal<Selection>) -> Element {
    let current = selection();
    let metrics = catalog::metrics_for(&current.model).unwrap_or_default();

    rsx! {
        div { class: "selector-bar",
            div { class: "selector-bar__field",
                label { class: "selector-bar__label", r#for: "model-select", "Model" }
                select {
                    id: "model-select",
                    class: "selector-bar__select",
                    value: "{current.model}",
                    oninput: move |evt| {
                        if let Some(next) = Selection::for_model(evt.value()) {
                            selection.set(next);
                        }
                    },
                    for name in catalog::model_names() {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: current.model == name,
                            "{name}"
                        }
                    }
                }
            }

            div { class: "selector-bar__field",
                label { class: "selector-bar__label", r#for: "metric-select", "Metric" }
                select {
                    id: "metric-select",
                    class: "selector-bar__select",
                    value: "{current.metric_file}",
                    oninput: move |evt| {
                        let mut next = selection();
                        next.metric_file = evt.value();
                        selection.set(next);
                    },
                    for metric in metrics.iter() {
                        option {
                            key: "{metric.file}",
                            value: "{metric.file}",
                            selected: current.metric_file == metric.file,
                            "{metric.name}"
                        }
                    }
                }
            }
        }
    }
}
