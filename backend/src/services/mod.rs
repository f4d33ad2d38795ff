//! Business logic services for the early warning platform

pub mod disaster;
pub mod district;
pub mod export;
pub mod risk;
pub mod task;
pub mod weather;

pub use disaster::DisasterService;
pub use district::DistrictService;
pub use risk::RiskService;
pub use task::TaskService;
pub use weather::WeatherService;
