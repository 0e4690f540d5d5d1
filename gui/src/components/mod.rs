// GUI components module
pub mod chart;
pub mod data_table;
pub mod metrics;
pub mod sidebar;
pub mod watchlist;

pub use chart::ChartView;
pub use data_table::{IndicatorTable, PriceTable};
pub use metrics::MetricsPanel;
pub use sidebar::Sidebar;
pub use watchlist::WatchlistPanel;
