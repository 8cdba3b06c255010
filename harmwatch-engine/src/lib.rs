pub mod classifier;
pub mod error;
pub mod normalize;
pub mod result;
pub mod rules;

pub use classifier::Classifier;
pub use error::EngineError;
pub use result::{Classification, RecordResult};
pub use rules::{Category, CategoryRule, RiskLevel, RuleSet};
