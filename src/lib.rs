pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{EngineConfig, MatchingConfig};
pub use crate::core::engine::{RecommendationEngine, Request};
pub use crate::domain::model::{
    ContentRecommendation, Dashboard, EligibilityResult, Goal, GrowthPlan, Listing,
    ListingProfile, VendorMatch, VendorProfile,
};
pub use crate::utils::error::{GrowthError, Result};
