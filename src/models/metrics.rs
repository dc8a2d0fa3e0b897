use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::utils::window;

use super::chart::ChartSeries;

/// Every metric the service reports. Declaration order doubles as the chart colour index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MetricField {
    Accuracy,
    Precision,
    Recall,
    #[strum(serialize = "F1")]
    F1,
    #[strum(serialize = "MSE")]
    Mse,
    #[strum(serialize = "MAE")]
    Mae,
    #[strum(serialize = "EVS")]
    Evs,
}

impl MetricField {
    pub fn color_index(self) -> usize {
        self as usize
    }
}

/// A single immutable metric snapshot as stored in the history collections.
pub trait MetricRecord {
    const FIELDS: &'static [MetricField];

    fn value(&self, field: MetricField) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    /// Only the production evaluation reports F1.
    #[serde(default)]
    pub f1: Option<f64>,
}

impl MetricRecord for ClassificationMetrics {
    const FIELDS: &'static [MetricField] = &[
        MetricField::Accuracy,
        MetricField::Precision,
        MetricField::Recall,
        MetricField::F1,
    ];

    fn value(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Accuracy => Some(self.accuracy),
            MetricField::Precision => Some(self.precision),
            MetricField::Recall => Some(self.recall),
            MetricField::F1 => self.f1,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub mae: f64,
    pub evs: f64,
}

impl MetricRecord for RegressionMetrics {
    const FIELDS: &'static [MetricField] = &[MetricField::Mse, MetricField::Mae, MetricField::Evs];

    fn value(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Mse => Some(self.mse),
            MetricField::Mae => Some(self.mae),
            MetricField::Evs => Some(self.evs),
            _ => None,
        }
    }
}

/// Rolling evaluation history, oldest first.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MetricHistory {
    #[serde(default)]
    pub classification: Vec<ClassificationMetrics>,
    #[serde(default)]
    pub regression: Vec<RegressionMetrics>,
}

impl MetricHistory {
    /// Keep only the `limit` most recent entries of each family.
    pub fn windowed(&self, limit: usize) -> Self {
        Self {
            classification: window(&self.classification, limit).to_vec(),
            regression: window(&self.regression, limit).to_vec(),
        }
    }
}

/// Metrics of the model currently serving predictions. Never windowed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProductionMetrics {
    #[serde(default)]
    pub classification: Vec<ClassificationMetrics>,
}

/// One line per field, x = 1-based position in the series.
/// Fields with no value anywhere in `records` get no line at all.
pub fn metric_series<R: MetricRecord>(records: &[R]) -> Vec<ChartSeries> {
    R::FIELDS
        .iter()
        .filter_map(|&field| {
            let points: Vec<[f64; 2]> = records
                .iter()
                .enumerate()
                .filter_map(|(idx, record)| record.value(field).map(|v| [(idx + 1) as f64, v]))
                .collect();

            if points.is_empty() {
                None
            } else {
                Some(ChartSeries::for_metric(field, points))
            }
        })
        .collect()
}

/// Chart-ready view of a windowed [`MetricHistory`]. Rebuilt whenever the history changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricCharts {
    pub classification: Vec<ChartSeries>,
    pub regression: Vec<ChartSeries>,
}

impl MetricCharts {
    pub fn from_history(history: &MetricHistory) -> Self {
        Self {
            classification: metric_series(&history.classification),
            regression: metric_series(&history.regression),
        }
    }
}
