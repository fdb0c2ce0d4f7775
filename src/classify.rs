use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Language, QuestionFormat};
use crate::patterns;
use crate::patterns::CHECKMARK_GLYPHS;

/// Whether `text` reads as an answer option: it starts with the active
/// language's option marker, or (true/false format only) with a localized
/// true/false word.
pub fn is_option(text: &str, format: QuestionFormat, language: Language) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let set = patterns::get_patterns(language);
    if set.option_marker.is_match(trimmed) {
        return true;
    }

    format.is_true_false()
        && (starts_with_word(trimmed, set.true_words) || starts_with_word(trimmed, set.false_words))
}

fn starts_with_word(text: &str, words: &[&str]) -> bool {
    let lower = text.to_lowercase();
    words.iter().any(|word| {
        lower.starts_with(word)
            && lower[word.len()..]
                .chars()
                .next()
                .map(|ch| !ch.is_alphanumeric())
                .unwrap_or(true)
    })
}

fn correct_word() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"(?i)\b(?:correct|right)\b").expect("valid correct word regex"))
}

/// Whether a list element is flagged as the correct answer: a checkmark
/// glyph or "correct"/"right" in its text, a "correct" class, or a truthy
/// correct attribute. The caller records the option text when this is true.
pub fn is_correct_marker(text: &str, class_attr: Option<&str>, correct_attr: Option<&str>) -> bool {
    if text.chars().any(|ch| CHECKMARK_GLYPHS.contains(&ch)) {
        return true;
    }

    if correct_word().is_match(text) {
        return true;
    }

    if class_attr
        .map(|value| value.to_lowercase().contains("correct"))
        .unwrap_or(false)
    {
        return true;
    }

    match correct_attr {
        Some(value) => !value.eq_ignore_ascii_case("false"),
        None => false,
    }
}
