use dioxus::prelude::*;

use super::{viewer_url, DetailSelection};

/// Side-by-side 3D viewers for the clicked sample, plus its prompt.
#[component]
pub fn SampleDetailPanel(selection: Option<DetailSelection>) -> Element {
    rsx! {
        section { class: "results-card sample-detail",
            div { class: "results-card__header",
                h2 { "Sample detail" }
                if let Some(detail) = selection.as_ref() {
                    span { class: "results-card__meta", "{detail.generated_id}" }
                }
            }

            match selection {
                Some(detail) => render_detail(&detail),
                None => rsx! {
                    p { class: "results-card__placeholder",
                        "Select a point in the scatter chart to compare the generated cloud against its reference."
                    }
                },
            }
        }
    }
}

fn render_detail(detail: &DetailSelection) -> Element {
    let generated_src = viewer_url(&detail.generated_path());
    let reference_src = viewer_url(&detail.reference_path());

    rsx! {
        div { class: "sample-detail__viewers",
            figure { class: "sample-detail__viewer",
                figcaption { "Generated" }
                iframe {
                    class: "sample-detail__frame",
                    title: "Generated point cloud",
                    src: "{generated_src}",
                }
            }
            figure { class: "sample-detail__viewer",
                figcaption { "Reference" }
                iframe {
                    class: "sample-detail__frame",
                    title: "Reference point cloud",
                    src: "{reference_src}",
                }
            }
        }

        p { class: "sample-detail__prompt",
            strong { "Prompt: " }
            "{detail.description}"
        }
    }
}
