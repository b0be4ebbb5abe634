use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const PASSWORD_MIN_CHARS: usize = 8;
const STRONG_PASSWORD_MIN_CHARS: usize = 12;
const NAME_MIN_CHARS: usize = 2;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn message(self) -> &'static str {
        match self {
            PasswordStrength::Weak => {
                "비밀번호가 너무 약합니다. 8자 이상, 영문/숫자/특수문자를 포함하세요."
            }
            PasswordStrength::Medium => "적절한 비밀번호입니다.",
            PasswordStrength::Strong => "강력한 비밀번호입니다!",
        }
    }
}

/// ASCII-only `local@domain.tld`. Korean or other non-ASCII input is rejected outright.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

    email.is_ascii() && EMAIL_RE.is_match(email)
}

/// Strong needs 12+ chars and all four character classes; medium needs any three.
pub fn check_password_strength(password: &str) -> PasswordStrength {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return PasswordStrength::Weak;
    }

    let classes = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    if password.chars().count() >= STRONG_PASSWORD_MIN_CHARS && classes == 4 {
        PasswordStrength::Strong
    } else if classes >= 3 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    }
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= NAME_MIN_CHARS
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupValidation {
    pub valid: bool,
    pub email_valid: bool,
    pub name_valid: bool,
    pub password_strength: PasswordStrength,
    pub password_message: &'static str,
}

/// Sign-up passes with a valid email, a valid name, and a non-weak password.
pub fn validate_signup(email: &str, password: &str, name: &str) -> SignupValidation {
    let email_valid = is_valid_email(email);
    let name_valid = is_valid_name(name);
    let password_strength = check_password_strength(password);

    SignupValidation {
        valid: email_valid && name_valid && password_strength != PasswordStrength::Weak,
        email_valid,
        name_valid,
        password_strength,
        password_message: password_strength.message(),
    }
}
