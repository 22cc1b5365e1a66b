use crate::models::quiz::{AnswerSet, ProfileScores, Question, TraitCategory};

/// Converts the sampled questions and the answers collected so far into a profile.
///
/// Per category: `round(100 × answered / sampled)`, or 0 when nothing was sampled.
/// Only the presence of an answer counts; every option of a question weighs the
/// same. Answers for questions outside `questions` are ignored.
pub fn score(questions: &[Question], answers: &AnswerSet) -> ProfileScores {
    let mut profile = ProfileScores::zeroed();

    for category in TraitCategory::ALL {
        let (sampled, answered) = questions
            .iter()
            .filter(|q| q.category == category)
            .fold((0u32, 0u32), |(sampled, answered), q| {
                (sampled + 1, answered + u32::from(answers.contains(&q.id)))
            });

        let percentage = if sampled == 0 {
            0
        } else {
            (100.0 * f64::from(answered) / f64::from(sampled)).round() as u32
        };
        profile.set(category, percentage);
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::Answer;

    fn question(id: &str, category: TraitCategory) -> Question {
        Question {
            id: id.to_string(),
            category,
            text: format!("Question {id}"),
            options: vec!["Yes".to_string(), "No".to_string()],
        }
    }

    fn answer(id: &str) -> Answer {
        Answer {
            question_id: id.to_string(),
            selected_option: "Yes".to_string(),
        }
    }

    #[test]
    fn test_no_answers_over_technical_questions_is_all_zero() {
        let questions = vec![
            question("t1", TraitCategory::Technical),
            question("t2", TraitCategory::Technical),
            question("t3", TraitCategory::Technical),
        ];

        let profile = score(&questions, &AnswerSet::new());

        assert_eq!(profile, ProfileScores::zeroed());
    }

    #[test]
    fn test_empty_questions_is_all_zero() {
        let answers: AnswerSet = vec![answer("t1")].into_iter().collect();
        assert_eq!(score(&[], &answers), ProfileScores::zeroed());
    }

    #[test]
    fn test_partial_category_rounds_to_nearest() {
        let questions = vec![
            question("t1", TraitCategory::Technical),
            question("t2", TraitCategory::Technical),
            question("t3", TraitCategory::Technical),
            question("c1", TraitCategory::Creative),
        ];
        let answers: AnswerSet = vec![answer("t1"), answer("t2"), answer("c1")]
            .into_iter()
            .collect();

        let profile = score(&questions, &answers);

        assert_eq!(profile.get(TraitCategory::Technical), 67);
        assert_eq!(profile.get(TraitCategory::Creative), 100);
        assert_eq!(profile.get(TraitCategory::Leadership), 0);
    }

    #[test]
    fn test_unknown_question_answers_are_ignored() {
        let questions = vec![question("t1", TraitCategory::Technical)];
        let answers: AnswerSet = vec![answer("ghost")].into_iter().collect();

        let profile = score(&questions, &answers);

        assert_eq!(profile.get(TraitCategory::Technical), 0);
    }

    #[test]
    fn test_chosen_option_does_not_change_score() {
        let questions = vec![question("t1", TraitCategory::Technical)];
        let yes: AnswerSet = vec![answer("t1")].into_iter().collect();
        let no: AnswerSet = vec![Answer {
            question_id: "t1".to_string(),
            selected_option: "No".to_string(),
        }]
        .into_iter()
        .collect();

        assert_eq!(score(&questions, &yes), score(&questions, &no));
    }

    #[test]
    fn test_every_value_within_bounds() {
        let questions: Vec<_> = TraitCategory::ALL
            .iter()
            .enumerate()
            .map(|(i, &c)| question(&format!("q{i}"), c))
            .collect();
        let answers: AnswerSet = questions.iter().map(|q| answer(&q.id)).collect();

        let profile = score(&questions, &answers);

        assert_eq!(profile.iter().count(), 6);
        assert!(profile.iter().all(|(_, v)| v == 100));
    }
}
