//! Domain models for the early warning platform

mod disaster;
mod district;
mod risk;
mod task;
mod weather;

pub use disaster::*;
pub use district::*;
pub use risk::*;
pub use task::*;
pub use weather::*;
