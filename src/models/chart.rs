use crate::utils::format_date;
use crate::utils::maths_utils::{get_min_max, padded_range};

use super::metrics::MetricField;
use super::prices::HistoricalPrice;

/// A named line, ready for egui_plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub field: Option<MetricField>,
    pub points: Vec<[f64; 2]>,
}

impl ChartSeries {
    pub fn for_metric(field: MetricField, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: field.to_string(),
            field: Some(field),
            points,
        }
    }
}

/// Close-price history: x = index into `labels`, y = close.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    pub series: ChartSeries,
    /// `DD.MM.YYYY` per point, for axis/hover labels
    pub labels: Vec<String>,
    pub y_range: Option<(f64, f64)>,
}

impl PriceChart {
    pub fn from_prices(prices: &[HistoricalPrice], padding_pct: f64) -> Self {
        let points: Vec<[f64; 2]> = prices
            .iter()
            .enumerate()
            .map(|(idx, price)| [idx as f64, price.close])
            .collect();
        let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();

        Self {
            series: ChartSeries {
                name: "Close".to_string(),
                field: None,
                points,
            },
            labels: prices.iter().map(|p| format_date(&p.date)).collect(),
            y_range: get_min_max(&closes).map(|(lo, hi)| padded_range(lo, hi, padding_pct)),
        }
    }

    /// Label of the point nearest to `x`, if any.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        if self.labels.is_empty() || !x.is_finite() {
            return None;
        }
        let idx = x.round().clamp(0.0, (self.labels.len() - 1) as f64) as usize;
        self.labels.get(idx).map(String::as_str)
    }
}
