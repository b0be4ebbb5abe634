//! Keyword dictionary for content classification.
//!
//! Declaration order is significant: the classifier scans professions and
//! their strengths in exactly this order and the first-declared pair wins a
//! tie. Keywords are stored lowercase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    Developer,
    Designer,
    Marketer,
    Service,
}

impl Profession {
    pub const ALL: [Profession; 4] = [
        Profession::Developer,
        Profession::Designer,
        Profession::Marketer,
        Profession::Service,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Profession::Developer => "developer",
            Profession::Designer => "designer",
            Profession::Marketer => "marketer",
            Profession::Service => "service",
        }
    }

    /// Exact key lookup, as the front-end sends it.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Profession::Developer => "개발자",
            Profession::Designer => "디자이너",
            Profession::Marketer => "마케터",
            Profession::Service => "기획자",
        }
    }

    /// The three strengths of this profession, in declaration order.
    pub fn strengths(self) -> [Strength; 3] {
        match self {
            Profession::Developer => [Strength::Problem, Strength::Impl, Strength::Tech],
            Profession::Designer => [Strength::Visual, Strength::Brand, Strength::Ux],
            Profession::Marketer => [Strength::Data, Strength::Strategy, Strength::Creative],
            Profession::Service => [Strength::Revenue, Strength::Ops, Strength::Comm],
        }
    }
}

/// Narrative angle a portfolio emphasises. Each belongs to exactly one profession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Problem,
    Impl,
    Tech,
    Visual,
    Brand,
    Ux,
    Data,
    Strategy,
    Creative,
    Revenue,
    Ops,
    Comm,
}

impl Strength {
    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Problem => "problem",
            Strength::Impl => "impl",
            Strength::Tech => "tech",
            Strength::Visual => "visual",
            Strength::Brand => "brand",
            Strength::Ux => "ux",
            Strength::Data => "data",
            Strength::Strategy => "strategy",
            Strength::Creative => "creative",
            Strength::Revenue => "revenue",
            Strength::Ops => "ops",
            Strength::Comm => "comm",
        }
    }

    pub fn profession(self) -> Profession {
        match self {
            Strength::Problem | Strength::Impl | Strength::Tech => Profession::Developer,
            Strength::Visual | Strength::Brand | Strength::Ux => Profession::Designer,
            Strength::Data | Strength::Strategy | Strength::Creative => Profession::Marketer,
            Strength::Revenue | Strength::Ops | Strength::Comm => Profession::Service,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Profession::ALL
            .into_iter()
            .flat_map(Profession::strengths)
            .find(|s| s.as_str() == key)
    }
}

pub struct StrengthKeywords {
    pub strength: Strength,
    pub keywords: &'static [&'static str],
}

pub struct ProfessionKeywords {
    pub profession: Profession,
    pub strengths: &'static [StrengthKeywords],
}

pub static KEYWORD_DICTIONARY: &[ProfessionKeywords] = &[
    ProfessionKeywords {
        profession: Profession::Developer,
        strengths: &[
            StrengthKeywords {
                strength: Strength::Problem,
                keywords: &[
                    "해결", "오류", "버그", "최적화", "개선", "error", "fix", "issue", "solved",
                ],
            },
            StrengthKeywords {
                strength: Strength::Impl,
                keywords: &[
                    "구현", "개발", "배포", "스택", "api", "react", "next", "build", "deploy",
                ],
            },
            StrengthKeywords {
                strength: Strength::Tech,
                keywords: &[
                    "분석", "연구", "아키텍처", "알고리즘", "deep", "study", "docs", "structure",
                ],
            },
        ],
    },
    ProfessionKeywords {
        profession: Profession::Designer,
        strengths: &[
            StrengthKeywords {
                strength: Strength::Visual,
                keywords: &[
                    "그래픽", "비주얼", "로고", "컬러", "graphic", "logo", "brand", "visual",
                ],
            },
            StrengthKeywords {
                strength: Strength::Brand,
                keywords: &["스토리", "컨셉", "철학", "브랜딩", "story", "concept", "mood"],
            },
            StrengthKeywords {
                strength: Strength::Ux,
                keywords: &["사용자", "경험", "리서치", "테스트", "ux", "ui", "user", "flow"],
            },
        ],
    },
    ProfessionKeywords {
        profession: Profession::Marketer,
        strengths: &[
            StrengthKeywords {
                strength: Strength::Data,
                keywords: &["데이터", "성과", "수치", "도달", "data", "kpi", "roas", "result"],
            },
            StrengthKeywords {
                strength: Strength::Strategy,
                keywords: &["전략", "기획", "제안", "시장", "strategy", "plan", "market"],
            },
            StrengthKeywords {
                strength: Strength::Creative,
                keywords: &["콘텐츠", "제작", "카피", "소재", "content", "creative", "copy"],
            },
        ],
    },
    ProfessionKeywords {
        profession: Profession::Service,
        strengths: &[
            StrengthKeywords {
                strength: Strength::Revenue,
                keywords: &["매출", "비즈니스", "사업", "수익", "business", "revenue", "sales"],
            },
            StrengthKeywords {
                strength: Strength::Ops,
                keywords: &["운영", "효율", "관리", "프로세스", "operation", "manage", "process"],
            },
            StrengthKeywords {
                strength: Strength::Comm,
                keywords: &["소통", "협업", "문서", "조율", "communication", "coop", "docs"],
            },
        ],
    },
];
