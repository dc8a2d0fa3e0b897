// Domain types consumed by the pages
pub mod chart;
pub mod metrics;
pub mod prediction;
pub mod prices;
pub mod validation;

// Re-export commonly used types
pub use chart::{ChartSeries, PriceChart};
pub use metrics::{
    ClassificationMetrics, MetricCharts, MetricField, MetricHistory, MetricRecord,
    ProductionMetrics, RegressionMetrics,
};
pub use prediction::Direction;
pub use prices::HistoricalPrice;
pub use validation::ValidationResult;
