use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_BUDGET: f64 = 0.0;
pub const DEFAULT_TIME_PER_WEEK: f64 = 0.0;
pub const DEFAULT_CATEGORY: &str = "business";

/// Growth goal. Unknown values are kept verbatim and match no goal rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    #[default]
    Visibility,
    Sales,
    Other(String),
}

impl Goal {
    pub fn as_str(&self) -> &str {
        match self {
            Goal::Visibility => "visibility",
            Goal::Sales => "sales",
            Goal::Other(s) => s,
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        match value.as_str() {
            "visibility" => Goal::Visibility,
            "sales" => Goal::Sales,
            _ => Goal::Other(value),
        }
    }
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        Goal::from(value.to_string())
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vendor profile with every default already applied.
///
/// Build one from loose JSON with [`VendorProfile::from_map`] or
/// [`VendorProfile::from_value`]; the rule functions never look at raw input.
/// Deserializing goes through the same path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct VendorProfile {
    pub budget: f64,
    pub time_per_week: f64,
    pub goal: Goal,
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for VendorProfile {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            time_per_week: DEFAULT_TIME_PER_WEEK,
            goal: Goal::default(),
            category: default_category(),
        }
    }
}

impl VendorProfile {
    pub fn new(budget: f64, time_per_week: f64, goal: impl Into<Goal>, category: &str) -> Self {
        Self {
            budget,
            time_per_week,
            goal: goal.into(),
            category: category.to_string(),
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_time_per_week(mut self, hours: f64) -> Self {
        self.time_per_week = hours;
        self
    }

    pub fn with_goal(mut self, goal: impl Into<Goal>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPlan {
    pub r#do: Vec<String>,
    pub avoid: Vec<String>,
    pub platform: Vec<String>,
    pub content: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecommendation {
    pub frequency: String,
    pub r#type: String,
    pub caption_idea: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub reason: String,
    pub recommended_support: Vec<String>,
}

/// Marketplace listing record used by the dashboard and matchmaking rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingProfile {
    pub business_name: String,
    pub category: String,
    /// local, young, general
    pub target_audience: String,
    /// zero, low, medium
    pub budget_tier: String,
    /// "< 5 hrs", "5-10 hrs", "> 10 hrs"
    pub time_availability: String,
    pub goal: Goal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    #[serde(flatten)]
    pub profile: ListingProfile,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceScore {
    pub budget_score: u32,
    pub time_score: u32,
    pub growth_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyAction {
    pub action: String,
    pub avoid: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthStrategy {
    pub strategy_name: String,
    pub actions: Vec<StrategyAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRecommendation {
    pub platform: String,
    pub reason: String,
    pub suitability_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub resource_score: ResourceScore,
    pub growth_strategy: GrowthStrategy,
    pub platform_recommendations: Vec<PlatformRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorMatch {
    pub vendor_id: u64,
    pub business_name: String,
    pub match_score: u32,
    pub reasons: Vec<String>,
}
