pub mod engine;
pub mod faults;
pub mod register;

pub use engine::Broker;
pub use faults::{FaultCounts, FaultStats};
