//! Portfolio template catalog: one layout variant per `(profession, strength)` pair.

use serde::Serialize;

use crate::analysis::classifier::Classification;
use crate::analysis::keywords::{Profession, Strength};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateVariant {
    pub profession: Profession,
    pub strength: Strength,
    pub name: &'static str,
    pub description: &'static str,
}

const fn variant(
    profession: Profession,
    strength: Strength,
    name: &'static str,
    description: &'static str,
) -> TemplateVariant {
    TemplateVariant {
        profession,
        strength,
        name,
        description,
    }
}

pub static TEMPLATE_CATALOG: [TemplateVariant; 12] = [
    variant(Profession::Developer, Strength::Problem, "Timeline", "문제 해결 과정 (타임라인)"),
    variant(Profession::Developer, Strength::Impl, "Bento", "구현 결과물 (그리드)"),
    variant(Profession::Developer, Strength::Tech, "Docs", "기술 깊이 (문서)"),
    variant(Profession::Designer, Strength::Visual, "Gallery", "비주얼 임팩트 (갤러리)"),
    variant(Profession::Designer, Strength::Brand, "Magazine", "브랜드 스토리 (매거진)"),
    variant(Profession::Designer, Strength::Ux, "Case Study", "논리적 흐름 (케이스)"),
    variant(Profession::Marketer, Strength::Data, "Dashboard", "성과 데이터 (대시보드)"),
    variant(Profession::Marketer, Strength::Strategy, "Deck", "전략 제안 (슬라이드)"),
    variant(Profession::Marketer, Strength::Creative, "Feed", "콘텐츠 (피드)"),
    variant(Profession::Service, Strength::Revenue, "Journey", "비즈니스 임팩트 (여정)"),
    variant(Profession::Service, Strength::Ops, "Roadmap", "운영 효율화 (로드맵)"),
    variant(Profession::Service, Strength::Comm, "Wiki", "협업 문서화 (위키)"),
];

/// Every strength belongs to exactly one profession, so the strength alone
/// identifies the variant.
pub fn template_for(strength: Strength) -> &'static TemplateVariant {
    TEMPLATE_CATALOG
        .iter()
        .find(|t| t.strength == strength)
        .unwrap_or(&TEMPLATE_CATALOG[1])
}

pub fn template_for_classification(c: &Classification) -> &'static TemplateVariant {
    template_for(c.strength)
}

/// Looks up a variant by its wire keys. `None` when the strength does not
/// belong to the profession.
pub fn lookup(profession: &str, strength: &str) -> Option<&'static TemplateVariant> {
    let profession = Profession::from_key(profession)?;
    let strength = Strength::from_key(strength)?;
    (strength.profession() == profession).then(|| template_for(strength))
}

pub fn templates_for(profession: Profession) -> impl Iterator<Item = &'static TemplateVariant> {
    TEMPLATE_CATALOG
        .iter()
        .filter(move |t| t.profession == profession)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::DEFAULT_CLASSIFICATION;

    #[test]
    fn test_one_template_per_pair() {
        for p in Profession::ALL {
            let strengths: Vec<Strength> = templates_for(p).map(|t| t.strength).collect();
            assert_eq!(strengths, p.strengths().to_vec());
        }
    }

    #[test]
    fn test_default_classification_maps_to_bento() {
        assert_eq!(template_for_classification(&DEFAULT_CLASSIFICATION).name, "Bento");
    }

    #[test]
    fn test_lookup_by_keys() {
        assert_eq!(lookup("designer", "ux").map(|t| t.name), Some("Case Study"));
        assert_eq!(lookup("service", "comm").map(|t| t.name), Some("Wiki"));
    }

    #[test]
    fn test_lookup_rejects_mismatched_pair() {
        assert!(lookup("developer", "ux").is_none());
        assert!(lookup("pilot", "impl").is_none());
        assert!(lookup("developer", "speed").is_none());
    }
}
