use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The six fixed trait labels shared by questions and career requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TraitCategory {
    Technical,
    Creative,
    Analytical,
    Leadership,
    Communication,
    RegionalImpact,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; 6] = [
        TraitCategory::Technical,
        TraitCategory::Creative,
        TraitCategory::Analytical,
        TraitCategory::Leadership,
        TraitCategory::Communication,
        TraitCategory::RegionalImpact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraitCategory::Technical => "Technical",
            TraitCategory::Creative => "Creative",
            TraitCategory::Analytical => "Analytical",
            TraitCategory::Leadership => "Leadership",
            TraitCategory::Communication => "Communication",
            TraitCategory::RegionalImpact => "RegionalImpact",
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraitCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        TraitCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ValidationError::UnknownCategory(label.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: String,
    pub category: TraitCategory,
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub selected_option: String,
}

/// Answers keyed by question id. Recording a second answer for the same
/// question replaces the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, answer: Answer) {
        self.0.insert(answer.question_id, answer.selected_option);
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    #[cfg(test)]
    pub fn selected(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.record(answer);
        }
        set
    }
}

/// Percentage per trait category. Always holds all six categories, each in 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfileScores(BTreeMap<TraitCategory, u32>);

impl ProfileScores {
    pub fn zeroed() -> Self {
        Self(TraitCategory::ALL.into_iter().map(|c| (c, 0)).collect())
    }

    /// Builds a profile from explicit pairs; unlisted categories stay at 0.
    pub fn from_pairs(pairs: &[(TraitCategory, u32)]) -> Self {
        let mut scores = Self::zeroed();
        for &(category, value) in pairs {
            scores.set(category, value);
        }
        scores
    }

    /// Builds a profile from caller-supplied labels. Unknown labels are
    /// skipped unless `strict` is set.
    pub fn from_raw(raw: &BTreeMap<String, u32>, strict: bool) -> Result<Self, ValidationError> {
        let mut scores = Self::zeroed();
        for (label, &value) in raw {
            match label.parse::<TraitCategory>() {
                Ok(category) => scores.set(category, value),
                Err(e) if strict => return Err(e),
                Err(_) => tracing::debug!(label = %label, "Ignoring unknown trait category"),
            }
        }
        Ok(scores)
    }

    pub fn get(&self, category: TraitCategory) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn set(&mut self, category: TraitCategory, value: u32) {
        self.0.insert(category, value.min(100));
    }

    pub fn iter(&self) -> impl Iterator<Item = (TraitCategory, u32)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }
}
