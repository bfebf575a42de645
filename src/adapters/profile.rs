use crate::domain::model::{
    Goal, VendorProfile, DEFAULT_BUDGET, DEFAULT_CATEGORY, DEFAULT_TIME_PER_WEEK,
};
use crate::utils::error::{GrowthError, Result};
use crate::utils::validation::{non_negative_number, string_field};
use serde_json::{Map, Value};

impl VendorProfile {
    /// Build a profile from a loose key/value record.
    ///
    /// Absent keys and `null` fall back to the documented defaults. Wrongly
    /// typed or negative values are rejected here so the rules stay total.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let budget = non_negative_number("budget", map.get("budget"), DEFAULT_BUDGET)?;
        let time_per_week = non_negative_number(
            "time_per_week",
            map.get("time_per_week"),
            DEFAULT_TIME_PER_WEEK,
        )?;
        let goal = string_field("goal", map.get("goal"), Goal::Visibility.as_str())?;
        let category = string_field("category", map.get("category"), DEFAULT_CATEGORY)?;

        let profile = VendorProfile {
            budget,
            time_per_week,
            goal: Goal::from(goal),
            category,
        };
        tracing::trace!(?profile, "resolved vendor profile");
        Ok(profile)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(GrowthError::invalid_field(
                "profile",
                other,
                "expected a JSON object",
            )),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }
}

impl TryFrom<Map<String, Value>> for VendorProfile {
    type Error = GrowthError;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        Self::from_map(&map)
    }
}
