pub mod chart;
pub mod commands;
pub mod contract;
pub mod theme;
pub mod types;

pub use chart::{ChartConfig, ChartData, ChartDataset, ChartKind, ChartOptions};
pub use commands::PageCommand;
pub use types::Target;
