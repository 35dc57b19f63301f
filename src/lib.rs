pub mod config;
pub mod domain_age;
pub mod domain_utils;
pub mod engine;
pub mod features;
pub mod header_auth;
pub mod machine_learning;
pub mod target;
pub mod text_triggers;
pub mod verdict;

pub use config::ScoringConfig;
pub use engine::{RiskEngine, RiskResult};
pub use features::ExtractedFeatures;
pub use target::TargetKind;
pub use verdict::RiskStatus;
