pub mod config;
pub mod prioritizer;
pub mod projector;
pub mod simulator;

pub use config::EngineConfig;
pub use prioritizer::{prioritize, SpendPlan};
pub use projector::project;
pub use simulator::{simulate, ForecastResult};
