// Render pass output consumed by the UI and the headless printer
pub mod report;

pub use report::{
    ChartData, ChartPoint, ChartSeries, DisplayRow, DisplayTable, HistoricalInfo, SeriesKind,
    ViewerReport,
};
