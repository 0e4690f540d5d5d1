// Application services exposed to the binaries
pub mod dashboard_service;

pub use dashboard_service::DashboardService;
