use dioxus::prelude::*;
use tracing::debug;

use crate::core::error::DataError;
use crate::core::scores::{self, RenderState};
use crate::core::{catalog, fetch};
use crate::dashboard::{
    CategoryBarsCard, DetailSelection, SampleDetailPanel, ScatterCard, Selection, SelectorBar,
};

/// The evaluation dashboard: selection state plus the fetch→transform→render
/// cycle. Each cycle is tagged with a generation; a cycle whose generation has
/// been superseded by the time its fetches settle is discarded, so a slow
/// response can never overwrite a newer selection's charts.
#[component]
pub fn Dashboard() -> Element {
    let selection = use_signal(Selection::default);
    let mut render = use_signal(|| None::<RenderState>);
    let mut detail = use_signal(|| None::<DetailSelection>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let current = selection();
        let cycle = generation.peek().wrapping_add(1);
        generation.set(cycle);
        loading.set(true);

        spawn(async move {
            let outcome = load_cycle(&current).await;
            if *generation.peek() != cycle {
                debug!(cycle, "discarding superseded load cycle");
                return;
            }
            match outcome {
                Ok(state) => {
                    debug!(cycle, entries = state.entries.len(), "load cycle committed");
                    render.set(Some(state));
                    detail.set(None);
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Evaluation dashboard" }
            p {
                "Rank every generated sample under the selected metric, compare category averages, and inspect any sample's point clouds side by side."
            }

            SelectorBar { selection }

            if let Some(message) = error() {
                div { class: "dashboard__error",
                    strong { "Couldn't load scores: " }
                    "{message}"
                }
            }

            if loading() && render().is_none() {
                div { class: "results-card dashboard__loading", "Loading scorecard…" }
            }

            if let Some(state) = render() {
                ScatterCard {
                    state: state.clone(),
                    on_select: move |payload| detail.set(Some(payload)),
                }
                CategoryBarsCard { state }
                SampleDetailPanel { selection: detail() }
            }
        }
    }
}

async fn load_cycle(selection: &Selection) -> Result<RenderState, DataError> {
    let metric = selection
        .descriptor()
        .ok_or_else(|| DataError::UnknownSelection {
            model: selection.model.clone(),
            file: selection.metric_file.clone(),
        })?;

    let metadata_csv = fetch::fetch_text(&catalog::metadata_path(&selection.model)).await?;
    let scores_json =
        fetch::fetch_text(&catalog::scores_path(&selection.model, &selection.metric_file)).await?;

    scores::build_render_state(&selection.model, metric, &scores_json, &metadata_csv)
}
