use crate::domain::model::{Goal, GrowthPlan, VendorProfile};

/// Build the categorized action plan. Every rule group runs; none returns early.
pub fn generate(vendor: &VendorProfile) -> GrowthPlan {
    let mut plan = GrowthPlan::default();

    // 預算
    if vendor.budget == 0.0 {
        plan.avoid.push("Paid advertisements".to_string());
        plan.r#do.push("Collaborate with local vendors".to_string());
    } else {
        plan.r#do.push("Boost best performing content".to_string());
    }

    // 時間
    if vendor.time_per_week < 3.0 {
        plan.r#do.push("Post twice a week".to_string());
    } else {
        plan.r#do.push("Post 4–5 times a week".to_string());
    }

    // 目標
    match vendor.goal {
        Goal::Visibility => {
            plan.platform.push("Instagram".to_string());
            plan.content.push("Short reels showcasing your product".to_string());
        }
        Goal::Sales => {
            plan.platform.push("WhatsApp".to_string());
            plan.content.push("Offer-based product posts".to_string());
        }
        Goal::Other(_) => {}
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_low_time_sales() {
        let vendor = VendorProfile::default()
            .with_time_per_week(2.0)
            .with_goal("sales");

        let plan = generate(&vendor);
        assert_eq!(
            plan.r#do,
            vec!["Collaborate with local vendors", "Post twice a week"]
        );
        assert_eq!(plan.avoid, vec!["Paid advertisements"]);
        assert_eq!(plan.platform, vec!["WhatsApp"]);
        assert_eq!(plan.content, vec!["Offer-based product posts"]);
    }

    #[test]
    fn test_budget_and_three_hours() {
        let vendor = VendorProfile::default()
            .with_budget(50.0)
            .with_time_per_week(3.0);

        let plan = generate(&vendor);
        assert_eq!(
            plan.r#do,
            vec!["Boost best performing content", "Post 4–5 times a week"]
        );
        assert!(plan.avoid.is_empty());
        assert_eq!(plan.platform, vec!["Instagram"]);
        assert_eq!(plan.content, vec!["Short reels showcasing your product"]);
    }

    #[test]
    fn test_unknown_goal_leaves_platform_empty() {
        let vendor = VendorProfile::default().with_goal("expansion");

        let plan = generate(&vendor);
        assert!(plan.platform.is_empty());
        assert!(plan.content.is_empty());
        assert_eq!(plan.r#do.len(), 2);
    }

    #[test]
    fn test_zero_budget_never_boosts() {
        for hours in [0.0, 2.9, 3.0, 10.0] {
            let plan = generate(&VendorProfile::default().with_time_per_week(hours));
            assert!(plan.avoid.contains(&"Paid advertisements".to_string()));
            assert!(plan.r#do.contains(&"Collaborate with local vendors".to_string()));
            assert!(!plan.r#do.contains(&"Boost best performing content".to_string()));
        }
    }
}
