use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::lenient;

/// Onboarding answers as posted by the survey form.
///
/// Every field is optional. Unknown keys (mood tags, BGM choice, etc.) are
/// ignored; malformed values read as absent rather than failing the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswersBundle {
    #[serde(default, deserialize_with = "lenient::text")]
    pub intro: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub career_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub projects: Vec<Project>,
}

/// A single portfolio project. `desc` and `description` are both accepted
/// because older drafts used the long name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tech_stack: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    /// Image URL or uploaded file descriptor; only its presence matters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value>,
}

impl Project {
    /// `title desc description`, missing parts as empty strings.
    pub fn joined_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title.as_deref().unwrap_or(""),
            self.desc.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
    }

    /// The short description, falling back to the long one when blank.
    pub fn summary(&self) -> &str {
        match self.desc.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => self.description.as_deref().unwrap_or(""),
        }
    }

    pub fn has_attachment(&self) -> bool {
        [&self.image, &self.file]
            .into_iter()
            .flatten()
            .any(lenient::is_truthy)
    }

    /// Title, description, role, and some stack information are all filled in.
    pub fn is_complete(&self) -> bool {
        lenient::has_text(&self.title)
            && lenient::has_text(&self.desc)
            && (lenient::has_text(&self.tech_stack) || !self.tags.is_empty())
            && lenient::has_text(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projects_object_reads_as_empty() {
        let answers: AnswersBundle =
            serde_json::from_value(json!({ "intro": "hi", "projects": { "title": "x" } })).unwrap();
        assert!(answers.projects.is_empty());
        assert_eq!(answers.intro.as_deref(), Some("hi"));
    }

    #[test]
    fn test_projects_string_reads_as_empty() {
        let answers: AnswersBundle =
            serde_json::from_value(json!({ "projects": "my project" })).unwrap();
        assert!(answers.projects.is_empty());
    }

    #[test]
    fn test_non_object_project_keeps_its_slot() {
        let answers: AnswersBundle =
            serde_json::from_value(json!({ "projects": [null, { "title": "API" }] })).unwrap();
        assert_eq!(answers.projects.len(), 2);
        assert_eq!(answers.projects[0], Project::default());
        assert_eq!(answers.projects[1].title.as_deref(), Some("API"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let answers: AnswersBundle =
            serde_json::from_value(json!({ "moods": ["#차분한"], "job": "designer" })).unwrap();
        assert_eq!(answers, AnswersBundle::default());
    }

    #[test]
    fn test_joined_text_fills_gaps() {
        let p = Project {
            title: Some("API build".to_string()),
            ..Default::default()
        };
        assert_eq!(p.joined_text(), "API build  ");
    }

    #[test]
    fn test_summary_falls_back_to_description() {
        let p = Project {
            desc: Some(String::new()),
            description: Some("long form".to_string()),
            ..Default::default()
        };
        assert_eq!(p.summary(), "long form");
    }

    #[test]
    fn test_attachment_presence() {
        let p: Project = serde_json::from_value(json!({ "image": "" })).unwrap();
        assert!(!p.has_attachment());
        let p: Project = serde_json::from_value(json!({ "file": { "name": "deck.pdf" } })).unwrap();
        assert!(p.has_attachment());
    }

    #[test]
    fn test_complete_project_needs_stack_or_tags() {
        let mut p: Project = serde_json::from_value(json!({
            "title": "Shop", "desc": "Online store", "role": "Backend"
        }))
        .unwrap();
        assert!(!p.is_complete());
        p.tags = vec!["rust".to_string()];
        assert!(p.is_complete());
    }
}
