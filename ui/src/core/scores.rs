//! Scorecard decoding and the pure transform pipeline behind the dashboard.
//!
//! Everything in here is plain data-in data-out so the join, ranking, color
//! assignment, and aggregation can be exercised without a webview. The Dioxus
//! components only draw what a [`RenderState`] already decided.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use super::catalog::{MetricDescriptor, MetricKind};
use super::error::DataError;
use super::metadata::{self, MetadataMap};

/// Placeholder category for samples absent from the metadata table.
pub const UNKNOWN_CATEGORY: &str = "unknown";
/// Placeholder prompt for samples absent from the metadata table.
pub const MISSING_DESCRIPTION: &str = "N/A";

/// One value object of the score file, keyed by generated-sample id.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScoreRow {
    #[serde(default)]
    pub similarity: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(rename = "ref_modelId", default)]
    pub ref_model_id: String,
}

impl ScoreRow {
    fn value(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Similarity => self.similarity,
            MetricKind::Distance => self.distance,
        }
    }
}

/// A score row joined with its metadata record, ready to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub metric: f64,
    pub generated_id: String,
    pub ref_id: String,
    pub category: String,
    pub description: String,
}

/// Category names in first-seen order over the ranked entries. The position
/// of a category is its color index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    order: Vec<String>,
}

impl CategoryIndex {
    pub fn assign(entries: &[ScoredEntry]) -> Self {
        let mut order: Vec<String> = Vec::new();
        for entry in entries {
            if !order.iter().any(|known| known == &entry.category) {
                order.push(entry.category.clone());
            }
        }
        Self { order }
    }

    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.order.iter().position(|known| known == category)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Mean metric value over one category's entries.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAverage {
    pub category: String,
    pub mean: f64,
    pub count: usize,
}

/// Immutable product of one load cycle. Each cycle builds a fresh value;
/// nothing is patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub model: String,
    pub metric: &'static MetricDescriptor,
    pub entries: Vec<ScoredEntry>,
    pub categories: CategoryIndex,
    pub averages: Vec<CategoryAverage>,
}

impl RenderState {
    pub fn title(&self) -> String {
        format!("{} ({})", self.metric.name, self.model)
    }
}

/// Decode a score file: a JSON object keyed by generated-sample id.
pub fn parse_scores(json: &str) -> Result<BTreeMap<String, ScoreRow>, DataError> {
    Ok(serde_json::from_str(json)?)
}

/// Join score rows against the metadata map. Samples without a metadata
/// record fall back to the placeholder category and description; rows without
/// the active kind's value are skipped.
pub fn join_entries(
    scores: &BTreeMap<String, ScoreRow>,
    metadata: &MetadataMap,
    kind: MetricKind,
) -> Vec<ScoredEntry> {
    let mut entries = Vec::with_capacity(scores.len());
    for (generated_id, row) in scores {
        let Some(metric) = row.value(kind) else {
            warn!(sample = %generated_id, field = kind.field(), "score row has no value for the active metric; skipping");
            continue;
        };

        let (category, description) = match metadata.get(generated_id) {
            Some(record) => (record.category.clone(), record.description.clone()),
            None => (
                UNKNOWN_CATEGORY.to_string(),
                MISSING_DESCRIPTION.to_string(),
            ),
        };

        entries.push(ScoredEntry {
            metric,
            generated_id: generated_id.clone(),
            ref_id: row.ref_model_id.clone(),
            category,
            description,
        });
    }
    entries
}

/// Order entries best-first: descending for similarity, ascending for
/// distance.
pub fn rank_entries(entries: &mut [ScoredEntry], kind: MetricKind) {
    if kind.better_is_higher() {
        entries.sort_by(|a, b| b.metric.total_cmp(&a.metric));
    } else {
        entries.sort_by(|a, b| a.metric.total_cmp(&b.metric));
    }
}

/// Arithmetic mean per category, presented in the same best-first order as
/// the ranked entries.
pub fn category_averages(
    entries: &[ScoredEntry],
    categories: &CategoryIndex,
    kind: MetricKind,
) -> Vec<CategoryAverage> {
    let mut sums = vec![(0.0f64, 0usize); categories.len()];
    for entry in entries {
        if let Some(idx) = categories.index_of(&entry.category) {
            sums[idx].0 += entry.metric;
            sums[idx].1 += 1;
        }
    }

    let mut averages: Vec<CategoryAverage> = categories
        .iter()
        .zip(sums)
        .filter(|(_, (_, count))| *count > 0)
        .map(|(category, (sum, count))| CategoryAverage {
            category: category.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect();

    if kind.better_is_higher() {
        averages.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    } else {
        averages.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    }
    averages
}

/// The whole fetch→transform step as one pure function over fetched text.
pub fn build_render_state(
    model: &str,
    metric: &'static MetricDescriptor,
    scores_json: &str,
    metadata_csv: &str,
) -> Result<RenderState, DataError> {
    let scores = parse_scores(scores_json)?;
    let metadata = metadata::parse_metadata(metadata_csv);

    let mut entries = join_entries(&scores, &metadata, metric.kind);
    rank_entries(&mut entries, metric.kind);

    let categories = CategoryIndex::assign(&entries);
    let averages = category_averages(&entries, &categories, metric.kind);

    Ok(RenderState {
        model: model.to_string(),
        metric,
        entries,
        categories,
        averages,
    })
}
