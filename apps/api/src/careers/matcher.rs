//! Career Matcher — pluggable, trait-based ranking of the career catalog
//! against a user's trait profile.
//!
//! Default: `DistanceCareerMatcher` (mean absolute deviation, deterministic).
//!
//! `AppState` holds an `Arc<dyn CareerMatcher>`, chosen at startup.

use crate::models::career::{Career, CareerMatch};
use crate::models::quiz::{ProfileScores, TraitCategory};

/// Implement this to swap ranking backends without touching handlers or the
/// quiz session flow.
pub trait CareerMatcher: Send + Sync {
    fn rank(&self, profile: &ProfileScores, catalog: &[Career]) -> Vec<CareerMatch>;
}

/// Scores each career as `100 − mean |profile − requirement|` over the six traits.
pub struct DistanceCareerMatcher;

impl CareerMatcher for DistanceCareerMatcher {
    fn rank(&self, profile: &ProfileScores, catalog: &[Career]) -> Vec<CareerMatch> {
        match_careers(profile, catalog)
    }
}

/// Returns every career annotated with its match score, best first.
/// Ties keep catalog order.
pub fn match_careers(profile: &ProfileScores, catalog: &[Career]) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = catalog
        .iter()
        .map(|career| CareerMatch {
            match_score: match_score(profile, &career.requirements),
            career: career.clone(),
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}

fn match_score(profile: &ProfileScores, requirements: &ProfileScores) -> u32 {
    let total: u32 = profile
        .iter()
        .map(|(trait_, value)| 100 - value.abs_diff(requirements.get(trait_)))
        .sum();

    (f64::from(total) / TraitCategory::ALL.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::Rating;

    fn make_career(title: &str, requirements: &[(TraitCategory, u32)]) -> Career {
        Career {
            title: title.to_string(),
            description: format!("{title} description"),
            requirements: ProfileScores::from_pairs(requirements),
            salary: "₹5-10 LPA".to_string(),
            market_demand: Rating::High,
            work_life_balance: Rating::Moderate,
            job_security: Rating::High,
        }
    }

    #[test]
    fn test_closer_technical_requirement_ranks_first() {
        let catalog = vec![
            make_career("B", &[(TraitCategory::Technical, 40)]),
            make_career("A", &[(TraitCategory::Technical, 90)]),
        ];
        let profile = ProfileScores::from_pairs(&[(TraitCategory::Technical, 90)]);

        let ranked = match_careers(&profile, &catalog);

        assert_eq!(ranked[0].career.title, "A");
        assert_eq!(ranked[0].match_score, 100);
        // (50 + 5 × 100) / 6 = 91.67
        assert_eq!(ranked[1].match_score, 92);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            make_career("First", &[(TraitCategory::Creative, 50)]),
            make_career("Second", &[(TraitCategory::Analytical, 50)]),
            make_career("Third", &[(TraitCategory::Leadership, 50)]),
        ];

        let ranked = match_careers(&ProfileScores::zeroed(), &catalog);

        let titles: Vec<_> = ranked.iter().map(|m| m.career.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_all_careers_returned_and_bounded() {
        let catalog = vec![
            make_career("X", &[(TraitCategory::Technical, 100), (TraitCategory::Creative, 100)]),
            make_career("Y", &[]),
        ];
        let profile = ProfileScores::from_pairs(&[(TraitCategory::RegionalImpact, 100)]);

        let ranked = match_careers(&profile, &catalog);

        assert_eq!(ranked.len(), catalog.len());
        assert!(ranked.iter().all(|m| m.match_score <= 100));
    }

    #[test]
    fn test_opposite_profile_scores_zero() {
        let all_max: Vec<_> = TraitCategory::ALL.iter().map(|&c| (c, 100)).collect();
        let catalog = vec![make_career("Max", &all_max)];

        let ranked = match_careers(&ProfileScores::zeroed(), &catalog);

        assert_eq!(ranked[0].match_score, 0);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let catalog = vec![
            make_career("A", &[(TraitCategory::Technical, 70)]),
            make_career("B", &[(TraitCategory::Communication, 30)]),
        ];
        let profile = ProfileScores::from_pairs(&[(TraitCategory::Technical, 50)]);

        assert_eq!(
            match_careers(&profile, &catalog),
            match_careers(&profile, &catalog)
        );
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        assert!(DistanceCareerMatcher
            .rank(&ProfileScores::zeroed(), &[])
            .is_empty());
    }
}
