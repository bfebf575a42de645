use crate::config::EngineConfig;
use crate::core::{content, dashboard, expansion, growth_plan, matching, matchmaking};
use crate::domain::model::{
    ContentRecommendation, Dashboard, EligibilityResult, GrowthPlan, Listing, ListingProfile,
    VendorMatch, VendorProfile,
};
use crate::utils::error::Result;
use serde_json::Value;

/// One call into the rules engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    GrowthPlan(VendorProfile),
    Content(VendorProfile),
    MatchScore(VendorProfile, VendorProfile),
    Expansion {
        vendor: VendorProfile,
        collaborations_count: u32,
    },
    Dashboard(ListingProfile),
    FindMatches {
        target: Listing,
        candidates: Vec<Listing>,
    },
}

impl Request {
    pub fn operation(&self) -> &'static str {
        match self {
            Request::GrowthPlan(_) => "growth_plan",
            Request::Content(_) => "content",
            Request::MatchScore(..) => "match_score",
            Request::Expansion { .. } => "expansion",
            Request::Dashboard(_) => "dashboard",
            Request::FindMatches { .. } => "find_matches",
        }
    }
}

/// Facade over the rule functions. Holds configuration only, no state.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn growth_plan(&self, vendor: &VendorProfile) -> GrowthPlan {
        tracing::debug!(goal = %vendor.goal, "generating growth plan");
        growth_plan::generate(vendor)
    }

    pub fn content(&self, vendor: &VendorProfile) -> ContentRecommendation {
        tracing::debug!(category = %vendor.category, "recommending content");
        content::recommend(vendor)
    }

    pub fn match_score(&self, vendor_a: &VendorProfile, vendor_b: &VendorProfile) -> u32 {
        let score = matching::score(vendor_a, vendor_b);
        tracing::debug!(score, "scored vendor pair");
        score
    }

    pub fn expansion(
        &self,
        vendor: &VendorProfile,
        collaborations_count: u32,
    ) -> EligibilityResult {
        let result = expansion::check(vendor, collaborations_count);
        tracing::debug!(
            eligible = result.eligible,
            reason = %result.reason,
            "checked expansion eligibility"
        );
        result
    }

    pub fn dashboard(&self, listing: &ListingProfile) -> Dashboard {
        tracing::debug!(business = %listing.business_name, "building dashboard");
        dashboard::dashboard(listing)
    }

    pub fn find_matches(&self, target: &Listing, candidates: &[Listing]) -> Vec<VendorMatch> {
        matchmaking::find_matches(target, candidates, &self.config.matching)
    }

    /// Dispatch a request and serialize the response to plain JSON.
    pub fn handle(&self, request: &Request) -> Result<Value> {
        tracing::info!("⚙️  Running {}", request.operation());

        let response = match request {
            Request::GrowthPlan(vendor) => serde_json::to_value(self.growth_plan(vendor))?,
            Request::Content(vendor) => serde_json::to_value(self.content(vendor))?,
            Request::MatchScore(a, b) => Value::from(self.match_score(a, b)),
            Request::Expansion {
                vendor,
                collaborations_count,
            } => serde_json::to_value(self.expansion(vendor, *collaborations_count))?,
            Request::Dashboard(listing) => serde_json::to_value(self.dashboard(listing))?,
            Request::FindMatches { target, candidates } => {
                serde_json::to_value(self.find_matches(target, candidates))?
            }
        };

        Ok(response)
    }
}
