use crate::models::career::{Career, Rating};
use crate::models::quiz::{ProfileScores, TraitCategory::*};

/// The built-in career catalog. Order matters: it breaks ties when ranking.
pub fn default_catalog() -> Vec<Career> {
    vec![
        Career {
            title: "Software Engineer".to_string(),
            description: "Designs, builds and maintains applications and systems used by \
                          businesses and the public."
                .to_string(),
            requirements: ProfileScores::from_pairs(&[
                (Technical, 90),
                (Creative, 60),
                (Analytical, 85),
                (Leadership, 50),
                (Communication, 60),
                (RegionalImpact, 30),
            ]),
            salary: "₹6-25 LPA".to_string(),
            market_demand: Rating::VeryHigh,
            work_life_balance: Rating::Moderate,
            job_security: Rating::High,
        },
        Career {
            title: "Graphic Designer".to_string(),
            description: "Creates visual concepts for brands, publications and digital media."
                .to_string(),
            requirements: ProfileScores::from_pairs(&[
                (Technical, 50),
                (Creative, 95),
                (Analytical, 40),
                (Leadership, 40),
                (Communication, 70),
                (RegionalImpact, 30),
            ]),
            salary: "₹3-12 LPA".to_string(),
            market_demand: Rating::High,
            work_life_balance: Rating::High,
            job_security: Rating::Low,
        },
        Career {
            title: "Data Scientist".to_string(),
            description: "Turns raw data into insights and predictive models that guide \
                          decisions."
                .to_string(),
            requirements: ProfileScores::from_pairs(&[
                (Technical, 80),
                (Creative, 50),
                (Analytical, 95),
                (Leadership, 45),
                (Communication, 65),
                (RegionalImpact, 35),
            ]),
            salary: "₹8-30 LPA".to_string(),
            market_demand: Rating::VeryHigh,
            work_life_balance: Rating::Moderate,
            job_security: Rating::High,
        },
        Career {
            title: "Civil Services Officer".to_string(),
            description: "Administers public programmes and shapes policy at district, state \
                          or national level."
                .to_string(),
            requirements: ProfileScores::from_pairs(&[
                (Technical, 30),
                (Creative, 40),
                (Analytical, 75),
                (Leadership, 90),
                (Communication, 85),
                (RegionalImpact, 95),
            ]),
            salary: "₹7-18 LPA".to_string(),
            market_demand: Rating::Moderate,
            work_life_balance: Rating::Moderate,
            job_security: Rating::VeryHigh,
        },
    ]
}
