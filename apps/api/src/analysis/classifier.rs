//! Content Classifier: guesses a user's profession and strength from their
//! onboarding answers.
//!
//! Pure keyword scoring over [`KEYWORD_DICTIONARY`]: every keyword adds one
//! point per non-overlapping occurrence in the lowercased answer text.
//! Matching is plain substring matching, so `ui` also scores inside `build`.
//! The highest-scoring `(profession, strength)` pair wins; ties go to the
//! pair declared first. With no matches at all the result is
//! [`DEFAULT_CLASSIFICATION`].

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::{Profession, Strength, KEYWORD_DICTIONARY};
use crate::models::answers::AnswersBundle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub profession: Profession,
    pub strength: Strength,
}

pub const DEFAULT_CLASSIFICATION: Classification = Classification {
    profession: Profession::Developer,
    strength: Strength::Impl,
};

/// Score of one dictionary pair against the answer text.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub profession: Profession,
    pub strength: Strength,
    pub score: usize,
}

/// Classifies an answer bundle. `None` means there was nothing to classify.
pub fn classify(answers: Option<&AnswersBundle>) -> Option<Classification> {
    let answers = answers?;
    let scores = score_categories(&assemble_text(answers));
    Some(select_best(&scores))
}

/// Builds the lowercased text the dictionary is matched against:
/// intro, career summary, then every project's title/desc/description.
pub fn assemble_text(answers: &AnswersBundle) -> String {
    let projects_text = answers
        .projects
        .iter()
        .map(|p| p.joined_text())
        .collect::<Vec<_>>()
        .join(" ");

    [
        answers.intro.as_deref().unwrap_or(""),
        answers.career_summary.as_deref().unwrap_or(""),
        projects_text.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Scores every dictionary pair, in declaration order.
pub fn score_categories(text: &str) -> Vec<CategoryScore> {
    KEYWORD_DICTIONARY
        .iter()
        .flat_map(|entry| {
            entry.strengths.iter().map(move |s| CategoryScore {
                profession: entry.profession,
                strength: s.strength,
                score: s.keywords.iter().map(|kw| count_occurrences(text, kw)).sum(),
            })
        })
        .collect()
}

/// Strictly-greater scan: an equal score never displaces an earlier pair.
pub fn select_best(scores: &[CategoryScore]) -> Classification {
    let mut best = DEFAULT_CLASSIFICATION;
    let mut max_score = 0;
    for s in scores {
        if s.score > max_score {
            max_score = s.score;
            best = Classification {
                profession: s.profession,
                strength: s.strength,
            };
        }
    }
    best
}

/// Non-overlapping substring occurrences of `keyword` in `text`.
pub fn count_occurrences(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    text.matches(keyword).count()
}
