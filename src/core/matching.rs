use crate::domain::model::VendorProfile;

/// Budgets within this many raw units count as aligned.
pub const BUDGET_TOLERANCE: f64 = 1.0;

/// Pairwise compatibility score in `1..=5`. Symmetric in its arguments.
pub fn score(vendor_a: &VendorProfile, vendor_b: &VendorProfile) -> u32 {
    let mut score = 0;

    if vendor_a.goal == vendor_b.goal {
        score += 2;
    }

    if vendor_a.category == vendor_b.category {
        score += 2;
    } else {
        // complementary category
        score += 1;
    }

    if (vendor_a.budget - vendor_b.budget).abs() <= BUDGET_TOLERANCE {
        score += 1;
    }

    score
}
