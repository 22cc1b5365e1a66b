use crate::models::quiz::{Question, TraitCategory};

use TraitCategory::*;

const AGREEMENT: &[&str] = &["Strongly agree", "Agree", "Neutral", "Disagree"];

const QUESTION_BANK: &[(&str, TraitCategory, &str, &[&str])] = &[
    (
        "tech-1",
        Technical,
        "Do you enjoy figuring out how apps and websites work behind the scenes?",
        AGREEMENT,
    ),
    (
        "tech-2",
        Technical,
        "Which would you rather build in a free afternoon?",
        &["A small game or app", "A robot kit", "A poster", "Nothing, I'd rather read"],
    ),
    (
        "tech-3",
        Technical,
        "I like fixing gadgets or computers when they stop working.",
        AGREEMENT,
    ),
    (
        "tech-4",
        Technical,
        "How comfortable are you learning a new software tool on your own?",
        &["Very comfortable", "Somewhat", "I need guidance", "Not comfortable"],
    ),
    (
        "creative-1",
        Creative,
        "I often come up with new ideas for school projects or events.",
        AGREEMENT,
    ),
    (
        "creative-2",
        Creative,
        "Which activity sounds most fun?",
        &["Designing a logo", "Writing a story", "Composing music", "Editing a video"],
    ),
    (
        "creative-3",
        Creative,
        "I notice colours, layouts and design details that others miss.",
        AGREEMENT,
    ),
    (
        "creative-4",
        Creative,
        "How often do you make art, music or writing outside of class?",
        &["Every day", "Every week", "Sometimes", "Rarely"],
    ),
    (
        "analytical-1",
        Analytical,
        "I enjoy solving puzzles, riddles or maths problems.",
        AGREEMENT,
    ),
    (
        "analytical-2",
        Analytical,
        "When you face a hard problem, what do you do first?",
        &[
            "Break it into smaller parts",
            "Look for patterns",
            "Ask someone",
            "Try something and see",
        ],
    ),
    (
        "analytical-3",
        Analytical,
        "I like comparing facts and figures before making a decision.",
        AGREEMENT,
    ),
    (
        "analytical-4",
        Analytical,
        "Which subject do you find most satisfying?",
        &["Mathematics", "Physics", "Economics", "Statistics"],
    ),
    (
        "leadership-1",
        Leadership,
        "In group projects I usually end up organising the team.",
        AGREEMENT,
    ),
    (
        "leadership-2",
        Leadership,
        "Have you led a club, team or event at school?",
        &["Yes, several times", "Once", "I helped lead one", "Not yet"],
    ),
    (
        "leadership-3",
        Leadership,
        "I am comfortable making decisions that affect other people.",
        AGREEMENT,
    ),
    (
        "leadership-4",
        Leadership,
        "When a team disagrees, what role do you take?",
        &["I decide", "I mediate", "I follow the majority", "I stay out of it"],
    ),
    (
        "communication-1",
        Communication,
        "I enjoy explaining ideas to classmates or younger students.",
        AGREEMENT,
    ),
    (
        "communication-2",
        Communication,
        "Which would you volunteer for?",
        &["A debate", "Anchoring an event", "Writing the newsletter", "None of these"],
    ),
    (
        "communication-3",
        Communication,
        "I feel confident speaking in front of a large group.",
        AGREEMENT,
    ),
    (
        "communication-4",
        Communication,
        "How many languages can you comfortably converse in?",
        &["Four or more", "Three", "Two", "One"],
    ),
    (
        "regional-1",
        RegionalImpact,
        "I want my work to improve life in my own town or district.",
        AGREEMENT,
    ),
    (
        "regional-2",
        RegionalImpact,
        "Which local issue would you most like to work on?",
        &["Agriculture", "Public health", "Education access", "Local infrastructure"],
    ),
    (
        "regional-3",
        RegionalImpact,
        "I would consider a career in public service or local government.",
        AGREEMENT,
    ),
    (
        "regional-4",
        RegionalImpact,
        "How often do you take part in community or social service activities?",
        &["Regularly", "A few times a year", "Once or twice", "Never"],
    ),
];

/// The built-in question bank, four questions per trait category.
pub fn default_bank() -> Vec<Question> {
    QUESTION_BANK
        .iter()
        .map(|(id, category, text, options)| Question {
            id: id.to_string(),
            category: *category,
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        })
        .collect()
}
