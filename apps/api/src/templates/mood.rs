//! Mood tags picked during onboarding and the colour theme each one selects.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoodTheme {
    pub mood: &'static str,
    pub header_gradient: &'static str,
    pub text_highlight: &'static str,
    pub accent_ring: &'static str,
    pub pill: &'static str,
    pub glow_color: &'static str,
    pub dot: &'static str,
}

pub const DEFAULT_MOOD: &str = "#신뢰감있는";

pub static MOOD_THEMES: [MoodTheme; 7] = [
    MoodTheme {
        mood: "#차분한",
        header_gradient: "from-slate-600 to-gray-800",
        text_highlight: "text-slate-700 dark:text-slate-300",
        accent_ring: "ring-slate-500",
        pill: "border-slate-500 text-slate-700 bg-slate-100 dark:bg-slate-800 dark:text-slate-300",
        glow_color: "#64748b",
        dot: "bg-slate-600",
    },
    MoodTheme {
        mood: "#열정적인",
        header_gradient: "from-red-600 to-orange-600",
        text_highlight: "text-red-700 dark:text-red-400",
        accent_ring: "ring-red-500",
        pill: "border-red-500 text-red-700 bg-red-50 dark:bg-red-900/30 dark:text-red-300",
        glow_color: "#dc2626",
        dot: "bg-red-600",
    },
    MoodTheme {
        mood: "#신뢰감있는",
        header_gradient: "from-blue-700 to-cyan-600",
        text_highlight: "text-blue-700 dark:text-blue-400",
        accent_ring: "ring-blue-500",
        pill: "border-blue-500 text-blue-700 bg-blue-50 dark:bg-blue-900/30 dark:text-blue-300",
        glow_color: "#2563eb",
        dot: "bg-blue-600",
    },
    MoodTheme {
        mood: "#힙한(Hip)",
        header_gradient: "from-purple-600 to-pink-600",
        text_highlight: "text-purple-700 dark:text-purple-400",
        accent_ring: "ring-purple-500",
        pill: "border-purple-500 text-purple-700 bg-purple-50 dark:bg-purple-900/30 dark:text-purple-300",
        glow_color: "#9333ea",
        dot: "bg-purple-600",
    },
    MoodTheme {
        mood: "#창의적인",
        header_gradient: "from-yellow-500 to-orange-500",
        text_highlight: "text-orange-700 dark:text-yellow-400",
        accent_ring: "ring-yellow-500",
        pill: "border-yellow-500 text-orange-700 bg-yellow-50 dark:bg-yellow-900/30 dark:text-yellow-300",
        glow_color: "#f59e0b",
        dot: "bg-yellow-600",
    },
    MoodTheme {
        mood: "#미니멀한",
        header_gradient: "from-gray-400 to-gray-600",
        text_highlight: "text-gray-800 dark:text-gray-200",
        accent_ring: "ring-gray-400",
        pill: "border-gray-400 text-gray-700 bg-gray-50 dark:bg-gray-800 dark:text-gray-300",
        glow_color: "#9ca3af",
        dot: "bg-gray-500",
    },
    MoodTheme {
        mood: "#클래식한",
        header_gradient: "from-amber-800 to-amber-900",
        text_highlight: "text-amber-900 dark:text-amber-200",
        accent_ring: "ring-amber-700",
        pill: "border-amber-700 text-amber-900 bg-amber-50 dark:bg-amber-900/30 dark:text-amber-200",
        glow_color: "#b45309",
        dot: "bg-amber-800",
    },
];

fn find(mood: &str) -> Option<&'static MoodTheme> {
    MOOD_THEMES.iter().find(|t| t.mood == mood)
}

fn default_theme() -> &'static MoodTheme {
    // DEFAULT_MOOD is the third entry of MOOD_THEMES
    find(DEFAULT_MOOD).unwrap_or(&MOOD_THEMES[2])
}

/// Only the first selected mood drives the theme; an unknown first mood
/// falls back to the default rather than trying later ones.
pub fn theme_for_moods<S: AsRef<str>>(moods: &[S]) -> &'static MoodTheme {
    moods
        .first()
        .and_then(|m| find(m.as_ref()))
        .unwrap_or_else(default_theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_moods_use_default() {
        let none: [&str; 0] = [];
        assert_eq!(theme_for_moods(&none).mood, DEFAULT_MOOD);
    }

    #[test]
    fn test_first_mood_wins() {
        assert_eq!(theme_for_moods(&["#열정적인", "#차분한"]).mood, "#열정적인");
    }

    #[test]
    fn test_unknown_first_mood_falls_back() {
        assert_eq!(theme_for_moods(&["#없는무드", "#차분한"]).mood, DEFAULT_MOOD);
    }

    #[test]
    fn test_default_theme_is_blue() {
        assert_eq!(default_theme().glow_color, "#2563eb");
    }
}
