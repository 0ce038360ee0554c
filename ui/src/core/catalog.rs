//! Compiled-in catalog of evaluated models and their metric files.

use std::fmt;

/// Whether larger or smaller values of a metric mean a better sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Similarity,
    Distance,
}

impl MetricKind {
    /// JSON field carrying this kind's value in a score file.
    pub fn field(self) -> &'static str {
        match self {
            MetricKind::Similarity => "similarity",
            MetricKind::Distance => "distance",
        }
    }

    /// Ranking convention: similarity ranks high-to-low, distance low-to-high.
    pub fn better_is_higher(self) -> bool {
        matches!(self, MetricKind::Similarity)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// One selectable metric for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub name: &'static str,
    /// File name of the precomputed scorecard under the model's data directory.
    pub file: &'static str,
    pub kind: MetricKind,
    /// Root under which every sample's point-cloud assets live.
    pub asset_root: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelEntry {
    pub name: &'static str,
    pub metrics: &'static [MetricDescriptor],
}

pub const MODEL_CATALOG: &[ModelEntry] = &[
    ModelEntry {
        name: "SDFusion",
        metrics: &[
            MetricDescriptor {
                name: "ULIP Similarity",
                file: "ULIP_similarity.json",
                kind: MetricKind::Similarity,
                asset_root: "source/SDFusion/models/ULIP/",
            },
            MetricDescriptor {
                name: "CD Distance",
                file: "CD_distance.json",
                kind: MetricKind::Distance,
                asset_root: "source/SDFusion/models/CD/",
            },
        ],
    },
    ModelEntry {
        name: "Michelangelo",
        metrics: &[
            MetricDescriptor {
                name: "ULIP Similarity",
                file: "ULIP_similarity.json",
                kind: MetricKind::Similarity,
                asset_root: "source/Michelangelo/models/ULIP/",
            },
            MetricDescriptor {
                name: "CD Distance",
                file: "CD_distance.json",
                kind: MetricKind::Distance,
                asset_root: "source/Michelangelo/models/CD/",
            },
        ],
    },
];

pub fn model_names() -> impl Iterator<Item = &'static str> {
    MODEL_CATALOG.iter().map(|entry| entry.name)
}

pub fn metrics_for(model: &str) -> Option<&'static [MetricDescriptor]> {
    MODEL_CATALOG
        .iter()
        .find(|entry| entry.name == model)
        .map(|entry| entry.metrics)
}

/// Resolve a (model, metric file) selection to its descriptor.
pub fn descriptor(model: &str, file: &str) -> Option<&'static MetricDescriptor> {
    metrics_for(model)?.iter().find(|metric| metric.file == file)
}

/// Sampled-prompt metadata table for a model.
pub fn metadata_path(model: &str) -> String {
    format!("source/{model}/data/sampled_metadata.csv")
}

/// Precomputed scorecard for a (model, metric file) pair.
pub fn scores_path(model: &str, file: &str) -> String {
    format!("source/{model}/data/{file}")
}
