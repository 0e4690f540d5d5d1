// Engine library root
pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod metrics;
pub mod services;

pub use error::EngineError;
pub use services::DashboardService;
