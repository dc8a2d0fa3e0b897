use serde::{Deserialize, Serialize};

/// One daily close of the index, as delivered by the service (pandas column names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Close")]
    pub close: f64,
}
