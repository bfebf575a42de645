//! Resource scoring, strategy selection and platform ranking for a listing.

use crate::domain::model::{
    Dashboard, GrowthStrategy, ListingProfile, PlatformRecommendation, ResourceScore,
    StrategyAction,
};

pub fn resource_score(budget_tier: &str, time_availability: &str) -> ResourceScore {
    let budget_score = match budget_tier {
        "low" => 1,
        "medium" => 2,
        _ => 0,
    };
    let time_score = match time_availability {
        "5-10 hrs" => 1,
        "> 10 hrs" => 2,
        _ => 0,
    };

    ResourceScore {
        budget_score,
        time_score,
        growth_capacity: budget_score + time_score,
    }
}

fn action(action: &str, avoid: &str, reason: &str) -> StrategyAction {
    StrategyAction {
        action: action.to_string(),
        avoid: avoid.to_string(),
        reason: reason.to_string(),
    }
}

pub fn growth_strategy(growth_capacity: u32) -> GrowthStrategy {
    let (name, actions) = if growth_capacity <= 1 {
        (
            "Lean Growth & Collaboration",
            vec![
                action(
                    "Focus on organic posting (2 posts/week)",
                    "Paid ads",
                    "Budget/Time is tight. Consistency > Frequency.",
                ),
                action(
                    "Seek collaborations",
                    "Solo paid campaigns",
                    "Leverage other's audiences for free.",
                ),
            ],
        )
    } else if growth_capacity <= 3 {
        (
            "Consistent Organic Growth",
            vec![
                action(
                    "Post 3-5 times/week",
                    "Sporadic posting",
                    "You have time to build momentum.",
                ),
                action(
                    "Engage with community daily",
                    "Automated bots",
                    "Authentic engagement drives retention.",
                ),
            ],
        )
    } else {
        (
            "Aggressive Hybrid Growth",
            vec![
                action(
                    "Combine Paid Ads + Organic",
                    "Relying solely on organic",
                    "You have resources to scale faster.",
                ),
                action(
                    "Experiment with video content",
                    "Low quality images",
                    "High effort content yields high reward.",
                ),
            ],
        )
    };

    GrowthStrategy {
        strategy_name: name.to_string(),
        actions,
    }
}

/// Rank platforms by suitability, highest first. Ties keep declaration order.
pub fn recommend_platforms(
    audience: &str,
    category: &str,
    time_availability: &str,
) -> Vec<PlatformRecommendation> {
    let mut instagram = 0;
    if matches!(audience, "young" | "general") {
        instagram += 2;
    }
    if matches!(category, "clothing" | "food") {
        instagram += 2;
    }
    if time_availability != "< 5 hrs" {
        instagram += 1;
    }

    let mut whatsapp = 0;
    if audience == "local" {
        whatsapp += 3;
    }
    if matches!(category, "services" | "food") {
        whatsapp += 2;
    }

    let mut marketplace = 0;
    if matches!(category, "clothing" | "electronics") {
        marketplace += 3;
    }
    if audience == "general" {
        marketplace += 1;
    }

    let mut recommendations = vec![
        PlatformRecommendation {
            platform: "Instagram".to_string(),
            reason: "Visual & Audience fit".to_string(),
            suitability_score: instagram,
        },
        PlatformRecommendation {
            platform: "WhatsApp Business".to_string(),
            reason: "Direct local retention".to_string(),
            suitability_score: whatsapp,
        },
        PlatformRecommendation {
            platform: "Online Marketplace".to_string(),
            reason: "Product discovery".to_string(),
            suitability_score: marketplace,
        },
    ];
    // sort_by is stable
    recommendations.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
    recommendations
}

pub fn dashboard(listing: &ListingProfile) -> Dashboard {
    let resource_score = resource_score(&listing.budget_tier, &listing.time_availability);
    Dashboard {
        resource_score,
        growth_strategy: growth_strategy(resource_score.growth_capacity),
        platform_recommendations: recommend_platforms(
            &listing.target_audience,
            &listing.category,
            &listing.time_availability,
        ),
    }
}
