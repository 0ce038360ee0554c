use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Shapescore" }
            p { "Side-by-side evaluation for text-to-3D generative models." }
            p {
                "Shapescore loads precomputed scorecards for each model run, ranks every generated sample, and lets you drill into any sample's point clouds without leaving the browser."
            }

            ul { class: "page-home__features",
                li { "Rank samples by ULIP similarity or Chamfer distance" }
                li { "Compare average quality across prompt categories" }
                li { "Inspect generated and reference clouds side by side" }
            }
            p { class: "page-home__cta",
                "Open the dashboard and pick a model to get started."
            }
        }
    }
}
