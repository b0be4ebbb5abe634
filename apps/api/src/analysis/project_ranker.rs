//! Project Ranker: picks the projects to feature for a target profession.
//!
//! Scores each project by keyword hits against the profession's list, plus
//! small bonuses for attachments and detailed descriptions, then keeps the
//! top [`FEATURED_LIMIT`]. Ties keep submission order.

use serde::Serialize;

use crate::analysis::classifier::count_occurrences;
use crate::analysis::keywords::Profession;
use crate::models::answers::Project;

pub const FEATURED_LIMIT: usize = 6;
const MATCHED_KEYWORD_LIMIT: usize = 5;

const ATTACHMENT_BONUS: usize = 2;
const DETAIL_THRESHOLDS: [usize; 2] = [100, 300];

const DEVELOPER_KEYWORDS: &[&str] = &[
    "react", "vue", "angular", "node", "python", "java", "api", "backend", "frontend",
    "database", "sql", "mongodb", "typescript", "javascript", "aws", "docker", "kubernetes",
    "개발", "구현", "최적화", "성능", "알고리즘", "아키텍처", "배포",
];

const DESIGNER_KEYWORDS: &[&str] = &[
    "figma", "sketch", "adobe", "ui", "ux", "design", "prototype", "wireframe", "branding",
    "visual", "typography", "color", "layout", "responsive", "mobile", "web",
    "디자인", "사용자", "경험", "인터페이스", "프로토타입", "브랜딩", "비주얼",
];

const MARKETER_KEYWORDS: &[&str] = &[
    "marketing", "campaign", "analytics", "ga4", "seo", "sem", "social", "content",
    "conversion", "roi", "ctr", "engagement", "funnel", "growth", "retention",
    "마케팅", "캠페인", "분석", "성과", "전환", "유입", "광고", "콘텐츠",
];

const SERVICE_KEYWORDS: &[&str] = &[
    "planning", "strategy", "roadmap", "requirements", "stakeholder", "agile", "scrum",
    "jira", "notion", "documentation", "process", "workflow", "coordination", "analysis",
    "기획", "전략", "요구사항", "분석", "프로세스", "협업", "문서화", "로드맵",
];

pub fn keywords_for(profession: Profession) -> &'static [&'static str] {
    match profession {
        Profession::Developer => DEVELOPER_KEYWORDS,
        Profession::Designer => DESIGNER_KEYWORDS,
        Profession::Marketer => MARKETER_KEYWORDS,
        Profession::Service => SERVICE_KEYWORDS,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectScore {
    pub index: usize,
    pub title: Option<String>,
    pub score: usize,
    pub matched_keywords: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecommendation {
    pub featured_project_ids: Vec<usize>,
    pub details: Vec<ProjectScore>,
    pub total_projects: usize,
    pub job_type: String,
}

/// Ranks `projects` for `job_type`. Unknown job types use the developer list.
pub fn recommend_projects(projects: &[Project], job_type: &str) -> ProjectRecommendation {
    let profession = Profession::from_key(job_type).unwrap_or(Profession::Developer);
    let keywords = keywords_for(profession);

    let mut scored: Vec<ProjectScore> = projects
        .iter()
        .enumerate()
        .map(|(index, project)| score_project(index, project, keywords))
        .collect();

    // stable: equal scores keep submission order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(FEATURED_LIMIT);

    ProjectRecommendation {
        featured_project_ids: scored.iter().map(|s| s.index).collect(),
        details: scored,
        total_projects: projects.len(),
        job_type: job_type.to_string(),
    }
}

fn score_project(index: usize, project: &Project, keywords: &[&'static str]) -> ProjectScore {
    let text = project.joined_text().to_lowercase();

    let mut score: usize = keywords.iter().map(|kw| count_occurrences(&text, kw)).sum();

    if project.has_attachment() {
        score += ATTACHMENT_BONUS;
    }

    let detail_len = project.summary().chars().count();
    score += DETAIL_THRESHOLDS
        .iter()
        .filter(|&&threshold| detail_len > threshold)
        .count();

    let matched_keywords = keywords
        .iter()
        .copied()
        .filter(|kw| text.contains(kw))
        .take(MATCHED_KEYWORD_LIMIT)
        .collect();

    ProjectScore {
        index,
        title: project.title.clone(),
        score,
        matched_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(title: &str, desc: &str) -> Project {
        Project {
            title: Some(title.to_string()),
            desc: Some(desc.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_keyword_hits_rank_projects() {
        let projects = vec![
            project("Recipe blog", "personal writing"),
            project("Shop backend", "React frontend with a Node API and SQL database"),
        ];
        let rec = recommend_projects(&projects, "developer");
        assert_eq!(rec.featured_project_ids, vec![1, 0]);
        assert_eq!(rec.total_projects, 2);
        assert_eq!(rec.job_type, "developer");
        assert!(rec.details[0].score > rec.details[1].score);
    }

    #[test]
    fn test_attachment_and_detail_bonuses() {
        let mut p: Project = serde_json::from_value(json!({ "image": "shot.png" })).unwrap();
        p.desc = Some("x".repeat(301));
        let rec = recommend_projects(&[p], "developer");
        // 2 for the image, 1 each for passing 100 and 300 chars
        assert_eq!(rec.details[0].score, 4);
    }

    #[test]
    fn test_description_used_when_desc_missing() {
        let p = Project {
            description: Some("y".repeat(150)),
            ..Default::default()
        };
        assert_eq!(recommend_projects(&[p], "designer").details[0].score, 1);
    }

    #[test]
    fn test_keeps_top_six_in_stable_order() {
        let projects: Vec<Project> = (0..8).map(|i| project(&format!("p{i}"), "")).collect();
        let rec = recommend_projects(&projects, "marketer");
        assert_eq!(rec.featured_project_ids, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(rec.details.len(), FEATURED_LIMIT);
        assert_eq!(rec.total_projects, 8);
    }

    #[test]
    fn test_matched_keywords_capped_at_five() {
        let p = project(
            "stack",
            "react vue angular node python java api backend",
        );
        let rec = recommend_projects(&[p], "developer");
        assert_eq!(
            rec.details[0].matched_keywords,
            vec!["react", "vue", "angular", "node", "python"]
        );
    }

    #[test]
    fn test_unknown_job_type_uses_developer_keywords() {
        let p = project("docker", "");
        let rec = recommend_projects(&[p], "astronaut");
        assert_eq!(rec.details[0].score, 1);
        assert_eq!(rec.job_type, "astronaut");
    }

    #[test]
    fn test_empty_project_list() {
        let rec = recommend_projects(&[], "service");
        assert!(rec.featured_project_ids.is_empty());
        assert_eq!(rec.total_projects, 0);
    }
}
