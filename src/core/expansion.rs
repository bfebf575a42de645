use crate::domain::model::{EligibilityResult, VendorProfile};

/// Decide expansion eligibility. Guards short-circuit in order.
pub fn check(vendor: &VendorProfile, collaborations_count: u32) -> EligibilityResult {
    if vendor.time_per_week < 3.0 {
        return EligibilityResult {
            eligible: false,
            reason: "Insufficient time capacity".to_string(),
            recommended_support: Vec::new(),
        };
    }

    if vendor.budget == 0.0 && collaborations_count == 0 {
        return EligibilityResult {
            eligible: false,
            reason: "No budget or active collaborations".to_string(),
            recommended_support: vec![
                "Collaboration-based promotion".to_string(),
                "Organic content strategy".to_string(),
            ],
        };
    }

    let mut result = EligibilityResult {
        eligible: true,
        reason: "Meets minimum expansion criteria".to_string(),
        recommended_support: Vec::new(),
    };

    if vendor.budget > 0.0 {
        result.recommended_support.push("Paid advertising".to_string());
    }
    if collaborations_count > 0 {
        result
            .recommended_support
            .push("Cross-vendor campaigns".to_string());
    }

    result
}
