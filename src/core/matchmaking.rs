use crate::config::MatchingConfig;
use crate::domain::model::{Listing, VendorMatch};

/// Rank candidate partners for `target`, best first.
pub fn find_matches(
    target: &Listing,
    candidates: &[Listing],
    config: &MatchingConfig,
) -> Vec<VendorMatch> {
    let mut matches: Vec<VendorMatch> = candidates
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .map(|candidate| {
            let mut score = 0;
            let mut reasons = Vec::new();

            if candidate.profile.target_audience == target.profile.target_audience {
                score += 1;
                reasons.push("Shares same target audience".to_string());
            }
            if candidate.profile.category != target.profile.category {
                score += 1;
                reasons.push("Complementary business category".to_string());
            }
            if candidate.profile.goal == target.profile.goal {
                score += 1;
                reasons.push("Aligned growth goals".to_string());
            }

            VendorMatch {
                vendor_id: candidate.id,
                business_name: candidate.profile.business_name.clone(),
                match_score: score,
                reasons,
            }
        })
        .filter(|m| m.match_score >= config.min_score)
        .collect();

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(config.limit);

    tracing::debug!(
        "🤝 {} matches for vendor {} out of {} candidates",
        matches.len(),
        target.id,
        candidates.len()
    );
    matches
}
