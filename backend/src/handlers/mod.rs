//! HTTP handlers for the early warning platform

pub mod disaster;
pub mod district;
pub mod health;
pub mod risk;
pub mod task;
pub mod weather;

pub use disaster::*;
pub use district::*;
pub use health::*;
pub use risk::*;
pub use task::*;
pub use weather::*;
