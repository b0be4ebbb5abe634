use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::lenient::has_text;
use crate::models::profile::ProfileData;

pub const MAX_SCORE: f64 = 100.0;
pub const MINIMUM_PROFILE_PERCENTAGE: u32 = 25;
pub const DEFAULT_NEXT_STEPS: usize = 3;

const INTRO_MIN_CHARS: usize = 10;
const CAREER_SUMMARY_MIN_CHARS: usize = 20;

/// Per-field weights. Sum is [`MAX_SCORE`].
mod weight {
    pub const NAME: f64 = 5.0;
    pub const EMAIL: f64 = 5.0;
    pub const PHONE: f64 = 5.0;
    pub const PROFILE_IMAGE: f64 = 5.0;
    pub const INTRO: f64 = 10.0;
    pub const JOB: f64 = 10.0;
    pub const STRENGTH: f64 = 10.0;
    pub const CAREER_SUMMARY: f64 = 10.0;
    pub const PROJECTS_COUNT: f64 = 10.0;
    pub const PROJECTS_COMPLETE: f64 = 15.0;
    pub const SKILLS: f64 = 10.0;
    pub const GITHUB: f64 = 2.5;
    pub const LINKEDIN: f64 = 2.5;
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MissingField {
    pub field: &'static str,
    pub label: &'static str,
    pub weight: f64,
    /// 1 is most urgent.
    pub priority: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletenessReport {
    pub percentage: u32,
    pub score: f64,
    pub max_score: f64,
    pub breakdown: BTreeMap<&'static str, f64>,
    pub missing: Vec<MissingField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionLevel {
    pub level: Level,
    pub label: &'static str,
    pub icon: &'static str,
    pub message: &'static str,
}

#[derive(Default)]
struct Tally {
    score: f64,
    breakdown: BTreeMap<&'static str, f64>,
    missing: Vec<MissingField>,
}

impl Tally {
    fn award(&mut self, field: &'static str, points: f64) {
        self.score += points;
        self.breakdown.insert(field, points);
    }

    fn miss(&mut self, field: &'static str, label: &'static str, weight: f64, priority: u8) {
        self.missing.push(MissingField {
            field,
            label,
            weight,
            priority,
        });
    }

    fn check(
        &mut self,
        filled: bool,
        field: &'static str,
        label: &'static str,
        weight: f64,
        priority: u8,
    ) {
        if filled {
            self.award(field, weight);
        } else {
            self.miss(field, label, weight, priority);
        }
    }
}

/// Weighted completeness of a profile. A missing profile scores zero with
/// nothing listed as missing.
pub fn calculate_completeness(profile: Option<&ProfileData>) -> CompletenessReport {
    let Some(p) = profile else {
        return CompletenessReport {
            percentage: 0,
            score: 0.0,
            max_score: MAX_SCORE,
            breakdown: BTreeMap::new(),
            missing: Vec::new(),
        };
    };

    let mut t = Tally::default();

    t.check(has_text(&p.name), "name", "이름", weight::NAME, 1);
    t.check(has_text(&p.email), "email", "이메일", weight::EMAIL, 1);
    t.check(has_text(&p.phone), "phone", "전화번호", weight::PHONE, 2);
    t.check(
        has_text(&p.profile_image),
        "profile_image",
        "프로필 사진",
        weight::PROFILE_IMAGE,
        1,
    );
    t.check(
        longer_than(&p.intro, INTRO_MIN_CHARS),
        "intro",
        "자기소개",
        weight::INTRO,
        1,
    );

    t.check(
        has_text(&p.job) || has_text(&p.default_job),
        "job",
        "직무",
        weight::JOB,
        1,
    );
    t.check(
        has_text(&p.strength) || has_text(&p.default_strength),
        "strength",
        "강점/전문분야",
        weight::STRENGTH,
        2,
    );
    t.check(
        longer_than(&p.career_summary, CAREER_SUMMARY_MIN_CHARS),
        "career_summary",
        "경력 요약",
        weight::CAREER_SUMMARY,
        2,
    );

    if p.projects.is_empty() {
        t.miss("projects_count", "프로젝트 추가", weight::PROJECTS_COUNT, 1);
        t.miss(
            "projects_complete",
            "프로젝트 상세 정보",
            weight::PROJECTS_COMPLETE,
            1,
        );
    } else {
        t.award("projects_count", weight::PROJECTS_COUNT);

        let complete = p.projects.iter().filter(|pr| pr.is_complete()).count();
        if complete > 0 {
            let ratio = complete as f64 / p.projects.len() as f64;
            t.award("projects_complete", weight::PROJECTS_COMPLETE * ratio);
        } else {
            t.miss(
                "projects_complete",
                "프로젝트 상세 정보 (역할, 기술 스택)",
                weight::PROJECTS_COMPLETE,
                1,
            );
        }
    }

    t.check(p.skills.is_filled(), "skills", "보유 기술", weight::SKILLS, 2);

    t.check(has_text(&p.github), "github", "GitHub 링크", weight::GITHUB, 3);
    t.check(
        has_text(&p.linkedin),
        "linkedin",
        "LinkedIn 링크",
        weight::LINKEDIN,
        3,
    );

    // priority ascending, then heavier items first
    t.missing.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then(b.weight.total_cmp(&a.weight))
    });

    CompletenessReport {
        percentage: t.score.round() as u32,
        score: t.score,
        max_score: MAX_SCORE,
        breakdown: t.breakdown,
        missing: t.missing,
    }
}

/// The `limit` most urgent missing items.
pub fn next_steps(profile: Option<&ProfileData>, limit: usize) -> Vec<MissingField> {
    let mut missing = calculate_completeness(profile).missing;
    missing.truncate(limit);
    missing
}

pub fn completion_level(percentage: u32) -> CompletionLevel {
    match percentage {
        90..=u32::MAX => CompletionLevel {
            level: Level::Expert,
            label: "완벽!",
            icon: "🏆",
            message: "완벽한 프로필! 채용담당자가 좋아할 거예요!",
        },
        70..=89 => CompletionLevel {
            level: Level::Advanced,
            label: "거의 완성",
            icon: "🌟",
            message: "거의 다 왔어요! 조금만 더!",
        },
        40..=69 => CompletionLevel {
            level: Level::Intermediate,
            label: "진행 중",
            icon: "🟡",
            message: "좋아요! 계속 진행하세요!",
        },
        _ => CompletionLevel {
            level: Level::Beginner,
            label: "시작 단계",
            icon: "🔴",
            message: "프로필을 완성하여 더 많은 기회를 얻으세요!",
        },
    }
}

/// Celebration text when an edit crosses a milestone or adds 10+ points.
pub fn progress_message(old_percentage: u32, new_percentage: u32) -> Option<String> {
    const MILESTONES: [(u32, &str); 4] = [
        (50, "🎊 절반 완성! 계속 진행하세요!"),
        (75, "🌟 75% 달성! 거의 다 왔어요!"),
        (90, "🏆 90% 달성! 완벽한 프로필이 눈앞에!"),
        (100, "🎉 100% 완성! 완벽한 프로필입니다!"),
    ];

    if let Some((_, msg)) = MILESTONES
        .iter()
        .find(|(mark, _)| old_percentage < *mark && new_percentage >= *mark)
    {
        return Some(msg.to_string());
    }

    let diff = new_percentage.saturating_sub(old_percentage);
    (diff >= 10).then(|| format!("✨ +{diff}% 증가! 잘하고 있어요!"))
}

pub fn has_minimum_profile(profile: Option<&ProfileData>) -> bool {
    calculate_completeness(profile).percentage >= MINIMUM_PROFILE_PERCENTAGE
}

fn longer_than(field: &Option<String>, min_chars: usize) -> bool {
    has_text(field) && field.as_deref().map(|s| s.chars().count()).unwrap_or(0) > min_chars
}
