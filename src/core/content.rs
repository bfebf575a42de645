use crate::domain::model::{ContentRecommendation, Goal, VendorProfile};

const ORGANIC_SUFFIX: &str = " (organic reach focused)";

pub fn recommend(vendor: &VendorProfile) -> ContentRecommendation {
    let mut content = ContentRecommendation::default();

    content.frequency = if vendor.time_per_week < 3.0 {
        "2 posts per week"
    } else if vendor.time_per_week <= 6.0 {
        "3–4 posts per week"
    } else {
        "Daily posting"
    }
    .to_string();

    match vendor.goal {
        Goal::Visibility => {
            content.r#type = "Reels & Stories".to_string();
            content.caption_idea =
                "A behind-the-scenes look at how we create our products".to_string();
        }
        Goal::Sales => {
            content.r#type = "Product posts".to_string();
            content.caption_idea = "Limited-time offer on our best-selling product".to_string();
        }
        Goal::Other(_) => {}
    }

    // 零預算時，即使 caption 為空也加上後綴
    if vendor.budget == 0.0 {
        content.caption_idea.push_str(ORGANIC_SUFFIX);
    }

    content.hashtags = vec![
        "#smallbusiness".to_string(),
        "#localvendor".to_string(),
        format!("#{}", vendor.category.to_lowercase()),
    ];

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_bands() {
        let cases = [
            (0.0, "2 posts per week"),
            (2.5, "2 posts per week"),
            (3.0, "3–4 posts per week"),
            (6.0, "3–4 posts per week"),
            (6.5, "Daily posting"),
        ];
        for (hours, expected) in cases {
            let content = recommend(&VendorProfile::default().with_time_per_week(hours));
            assert_eq!(content.frequency, expected, "hours = {}", hours);
        }
    }

    #[test]
    fn test_sales_with_budget() {
        let vendor = VendorProfile::new(20.0, 4.0, "sales", "Bakery");

        let content = recommend(&vendor);
        assert_eq!(content.r#type, "Product posts");
        assert_eq!(
            content.caption_idea,
            "Limited-time offer on our best-selling product"
        );
        assert_eq!(
            content.hashtags,
            vec!["#smallbusiness", "#localvendor", "#bakery"]
        );
    }

    #[test]
    fn test_visibility_zero_budget_suffix() {
        let content = recommend(&VendorProfile::default());
        assert_eq!(content.r#type, "Reels & Stories");
        assert_eq!(
            content.caption_idea,
            "A behind-the-scenes look at how we create our products (organic reach focused)"
        );
        assert_eq!(content.hashtags[2], "#business");
    }

    #[test]
    fn test_unknown_goal_zero_budget_only_suffix() {
        let content = recommend(&VendorProfile::default().with_goal("expansion"));
        assert_eq!(content.r#type, "");
        assert_eq!(content.caption_idea, " (organic reach focused)");
    }

    #[test]
    fn test_unknown_goal_with_budget_stays_empty() {
        let content = recommend(&VendorProfile::default().with_goal("expansion").with_budget(5.0));
        assert_eq!(content.r#type, "");
        assert_eq!(content.caption_idea, "");
    }

    #[test]
    fn test_category_not_sanitized() {
        let content = recommend(&VendorProfile::default().with_category("Street Food!"));
        assert_eq!(content.hashtags.len(), 3);
        assert_eq!(content.hashtags[2], "#street food!");
    }
}
