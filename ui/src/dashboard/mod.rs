mod controls;
pub use controls::SelectorBar;

mod scatter;
pub use scatter::ScatterCard;

mod bars;
pub use bars::CategoryBarsCard;

mod detail;
pub use detail::SampleDetailPanel;

use crate::core::catalog::{self, MetricDescriptor};

/// Point colors, cycled by category index. The d3 "Category10" values the
/// scorecards were originally plotted with.
pub(crate) const CHART_COLORS: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub(crate) fn category_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// The currently selected (model, metric file) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub model: String,
    pub metric_file: String,
}

impl Selection {
    pub fn descriptor(&self) -> Option<&'static MetricDescriptor> {
        catalog::descriptor(&self.model, &self.metric_file)
    }

    /// Reset the metric to the model's first descriptor, as the selector does
    /// when the model changes.
    pub fn for_model(model: String) -> Option<Self> {
        let first = catalog::metrics_for(&model)?.first()?;
        Some(Self {
            metric_file: first.file.to_string(),
            model,
        })
    }
}

impl Default for Selection {
    fn default() -> Self {
        let entry = catalog::MODEL_CATALOG
            .first()
            .expect("catalog has at least one model");
        Self {
            model: entry.name.to_string(),
            metric_file: entry.metrics[0].file.to_string(),
        }
    }
}

/// Payload of a clicked scatter point, enough to assemble the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSelection {
    pub generated_id: String,
    pub ref_id: String,
    pub description: String,
    pub asset_root: String,
}

impl DetailSelection {
    pub fn generated_path(&self) -> String {
        format!(
            "{}{}/generated/points_normalize.ply",
            self.asset_root, self.generated_id
        )
    }

    /// The reference cloud lives under the generated sample's own directory
    /// (`<gen>/rank_1/`); `ref_id` names the matched reference but does not
    /// appear in the path.
    pub fn reference_path(&self) -> String {
        format!(
            "{}{}/rank_1/points_normalize.ply",
            self.asset_root, self.generated_id
        )
    }
}

/// URL of the embedded point-cloud viewer page for one asset.
pub(crate) fn viewer_url(asset_path: &str) -> String {
    format!("assets/viewer.html?model={asset_path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_the_catalog_head() {
        let selection = Selection::default();
        assert_eq!(selection.model, "SDFusion");
        assert_eq!(selection.metric_file, "ULIP_similarity.json");
        assert!(selection.descriptor().is_some());
    }

    #[test]
    fn model_switch_resets_to_first_metric() {
        let selection = Selection::for_model("Michelangelo".to_string()).expect("known model");
        assert_eq!(selection.metric_file, "ULIP_similarity.json");
        assert!(Selection::for_model("PointE".to_string()).is_none());
    }

    #[test]
    fn viewer_paths_are_both_keyed_by_the_generated_id() {
        let detail = DetailSelection {
            generated_id: "gen1".to_string(),
            ref_id: "ref1".to_string(),
            description: "a chair".to_string(),
            asset_root: "source/SDFusion/models/ULIP/".to_string(),
        };
        assert_eq!(
            detail.generated_path(),
            "source/SDFusion/models/ULIP/gen1/generated/points_normalize.ply"
        );
        assert_eq!(
            detail.reference_path(),
            "source/SDFusion/models/ULIP/gen1/rank_1/points_normalize.ply"
        );
    }

    #[test]
    fn viewer_url_carries_the_asset_as_query() {
        assert_eq!(
            viewer_url("source/SDFusion/models/ULIP/gen1/generated/points_normalize.ply"),
            "assets/viewer.html?model=source/SDFusion/models/ULIP/gen1/generated/points_normalize.ply"
        );
    }
}
