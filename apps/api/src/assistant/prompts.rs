// Prompt constants for drafting recruiter-question answers.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for answer drafting.
pub const CHAT_ANSWERS_SYSTEM: &str = "\
    당신은 지원자의 포트폴리오 데이터를 분석하여 채용 담당자의 예상 질문에 대한 \
    핵심 답변 초안을 작성하는 전문가입니다. \
    지원자가 직접 말하는 것처럼 1인칭 시점('-했습니다', '-입니다')으로 작성하세요. \
    각 답변은 3-4문장 이내로 명확하고 설득력 있게 작성하세요. \
    마크다운 형식이나 이모지를 사용하지 말고 순수 텍스트로만 작성하세요.";

/// Drafting prompt. Replace `{profession_hint}` and `{portfolio_context}` before sending.
pub const CHAT_ANSWERS_PROMPT_TEMPLATE: &str = r#"다음 질문들에 대해 지원자의 입장에서 전문적인 답변 초안을 작성해주세요.

[1. 핵심 역량 및 기술 요약]
1-1. 지원자의 핵심 역량 3가지를 요약한다면?
1-2. 이 포트폴리오에서 가장 주력으로 사용한 '기술 스택(Main Skill)'은 무엇인가요?
1-3. 기술적으로 가장 깊이 있게 파고들거나 연구해 본 분야는 어디인가요?
1-4. 코드 작성 외에 설계 문서(API 명세, 기획서 등)도 작성할 줄 아나요?

[2. 역할 및 기여도 검증]
2-1. 각 프로젝트에서의 지원자의 구체적인 역할과 기여도는 어땠나요?
2-2. 팀 프로젝트에서 동료들과의 협업(코드 리뷰, 일정 관리)은 어떻게 진행했나요?
2-3. 기획부터 배포/운영까지 '전체 사이클'을 경험해 본 프로젝트가 있나요?
2-4. 실제 작성한 소스 코드나 디자인 원본 파일(Figma 등)을 볼 수 있나요?

[3. 문제 해결 및 성과]
3-1. 포트폴리오 중 가장 자신 있는 프로젝트 하나를 소개한다면?
3-2. 개발(또는 진행) 중 발생한 가장 치명적인 문제와 해결 과정은 무엇인가요?
3-3. 해당 기술(또는 디자인 컨셉)을 선정하게 된 특별한 이유나 논리가 있나요?
3-4. 프로젝트를 통해 얻은 구체적인 수치 성과(사용자 수, 성능 개선율 등)가 있나요?

Return a JSON object with exactly these keys, one answer per question in order:
{
  "core_skills": "...",
  "main_stack": "...",
  "tech_depth": "...",
  "documentation": "...",
  "role_contribution": "...",
  "collaboration": "...",
  "cycle": "...",
  "artifacts": "...",
  "best_project": "...",
  "troubleshooting": "...",
  "decision_making": "...",
  "quantitative_performance": "..."
}
{profession_hint}
포트폴리오 데이터:
{portfolio_context}"#;

/// Framing hint appended when the applicant's answers were classified.
/// Replace `{profession}`, `{strength}`, and `{template}`.
pub const PROFESSION_HINT_TEMPLATE: &str = "\n[작성 방향]\n\
    지원자의 직군은 '{profession}', 강조할 강점은 '{strength}'입니다. \
    포트폴리오 템플릿은 '{template}' 형식이므로 이 관점을 중심으로 답변을 구성하세요.\n";

/// Back-fill for required keys the model left out.
pub const MISSING_ANSWER_PLACEHOLDER: &str =
    "정보를 바탕으로 답변을 작성하지 못했습니다. 직접 입력해 주세요.";
