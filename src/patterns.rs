use std::sync::OnceLock;

use regex::Regex;

use crate::model::Language;

/// Glyphs models emit to flag the correct option.
pub const CHECKMARK_GLYPHS: [char; 5] = ['✓', '✔', '✅', '☑', '🗹'];

/// Per-language parsing tables, compiled once and shared.
pub struct LanguagePatternSet {
    pub language: Language,
    /// Matches a leading answer-option marker such as "a)", "B.", "(c)".
    pub option_marker: Regex,
    /// Option-letter glyphs valid for this language, lowercase.
    pub option_letters: &'static str,
    /// Lowercase match forms for "true", most common first.
    pub true_words: &'static [&'static str],
    /// Lowercase match forms for "false", most common first.
    pub false_words: &'static [&'static str],
    /// The display pair injected as default true/false options.
    pub true_false: [&'static str; 2],
}

fn build_pattern_set(
    language: Language,
    option_letters: &'static str,
    true_words: &'static [&'static str],
    false_words: &'static [&'static str],
    true_false: [&'static str; 2],
) -> LanguagePatternSet {
    let marker = format!(r"(?i)^\(?[{option_letters}][.)\]:]\s*");
    LanguagePatternSet {
        language,
        option_marker: Regex::new(&marker).expect("valid option marker regex"),
        option_letters,
        true_words,
        false_words,
        true_false,
    }
}

fn build_registry() -> Vec<LanguagePatternSet> {
    vec![
        build_pattern_set(
            Language::English,
            "a-d",
            &["true"],
            &["false"],
            ["True", "False"],
        ),
        build_pattern_set(
            Language::Hindi,
            "a-dकखगघ",
            &["सत्य", "सही"],
            &["असत्य", "गलत"],
            ["सत्य", "असत्य"],
        ),
        build_pattern_set(
            Language::Bangla,
            "a-dকখগঘ",
            &["সত্য", "ঠিক"],
            &["মিথ্যা", "ভুল"],
            ["সত্য", "মিথ্যা"],
        ),
        build_pattern_set(
            Language::French,
            "a-dàâ",
            &["vrai"],
            &["faux"],
            ["Vrai", "Faux"],
        ),
    ]
}

/// Returns the pattern set for `language`. The registry always resolves;
/// English is the first entry and the fallback.
pub fn get_patterns(language: Language) -> &'static LanguagePatternSet {
    static REGISTRY: OnceLock<Vec<LanguagePatternSet>> = OnceLock::new();
    let registry = REGISTRY.get_or_init(build_registry);
    registry
        .iter()
        .find(|set| set.language == language)
        .unwrap_or(&registry[0])
}

/// The localized True/False word pair, default `["True", "False"]`.
pub fn true_false_options(language: Language) -> [&'static str; 2] {
    get_patterns(language).true_false
}

/// Matches an "answer/correct" cue followed (within the same sentence) by a
/// true/false word in any supported language. Capture 1 is the word.
pub fn correct_cue() -> &'static Regex {
    static CUE: OnceLock<Regex> = OnceLock::new();
    CUE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:correct|answer|सही|उत्तर|ঠিক|উত্তর|réponse)[^.!?\n]{0,40}?\b(true|false|vrai|faux|सत्य|असत्य|सही|गलत|সত্য|মিথ্যা|ঠিক|ভুল)\b",
        )
        .expect("valid correct cue regex")
    })
}

/// Classifies a matched word as true/false across all supported languages.
pub fn classify_truth_word(word: &str) -> Option<bool> {
    let lower = word.trim().to_lowercase();
    for language in [
        Language::English,
        Language::Hindi,
        Language::Bangla,
        Language::French,
    ] {
        let set = get_patterns(language);
        if set.true_words.contains(&lower.as_str()) {
            return Some(true);
        }
        if set.false_words.contains(&lower.as_str()) {
            return Some(false);
        }
    }
    None
}
