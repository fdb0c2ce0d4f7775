use std::sync::OnceLock;

use regex::Regex;

use crate::model::Language;
use crate::patterns;
use crate::patterns::CHECKMARK_GLYPHS;

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn markdown_noise() -> &'static Regex {
    static NOISE: OnceLock<Regex> = OnceLock::new();
    NOISE.get_or_init(|| Regex::new(r"\*{1,2}|__|`+|~~|^#{1,6}\s+").expect("valid markdown regex"))
}

fn bullet_prefix() -> &'static Regex {
    static BULLET: OnceLock<Regex> = OnceLock::new();
    BULLET.get_or_init(|| Regex::new(r"^[\s•‣▪●◦·–—-]+\s*").expect("valid bullet regex"))
}

/// Strips markdown artifacts and bullet glyphs and collapses whitespace.
pub fn clean_markdown(text: &str) -> String {
    let stripped = markdown_noise().replace_all(text, "");
    let stripped = bullet_prefix().replace(&stripped, "");
    collapse_whitespace(&stripped)
}

fn leading_stem_markers() -> &'static [Regex] {
    static MARKERS: OnceLock<Vec<Regex>> = OnceLock::new();
    MARKERS.get_or_init(|| {
        [
            r"(?i)^question\s*\d*\s*[:.)\-]\s*",
            r"(?i)^q\s*\d+\s*[:.)\-]\s*",
            r"^\d+\s*[.)]\s*",
            r"^[A-Za-z][.)]\s+",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid stem marker regex"))
        .collect()
    })
}

fn trailing_true_false_suffix() -> &'static Regex {
    static SUFFIX: OnceLock<Regex> = OnceLock::new();
    // The closing paren and the second word are optional so truncated model
    // output like "(True/Fals" is still stripped.
    SUFFIX.get_or_init(|| {
        Regex::new(r"(?i)\(\s*(?:true|vrai|सत्य|सही|সত্য|ঠিক)\s*[/|\\-]\s*[^\s()]*\s*\)?\s*$")
            .expect("valid true/false suffix regex")
    })
}

fn trailing_letter_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"\(\s*[A-Da-d]\s*\)\s*$").expect("valid trailing letter regex")
    })
}

/// Normalizes a question stem: removes leading numbering and question
/// markers, then trailing "(True/False)"-style indicators and trailing
/// single-letter markers. Idempotent.
pub fn normalize_stem(text: &str) -> String {
    let mut value = collapse_whitespace(text);

    loop {
        let mut changed = false;
        for marker in leading_stem_markers() {
            let next = marker.replace(&value, "");
            if next != value {
                value = next.trim_start().to_string();
                changed = true;
            }
        }

        let next = trailing_true_false_suffix().replace(&value, "");
        if next != value {
            value = next.trim_end().to_string();
            changed = true;
        }

        let next = trailing_letter_marker().replace(&value, "");
        if next != value {
            value = next.trim_end().to_string();
            changed = true;
        }

        if !changed {
            break;
        }
    }

    value.trim().to_string()
}

fn repeated_punctuation() -> &'static Regex {
    static REPEATED: OnceLock<Regex> = OnceLock::new();
    REPEATED.get_or_init(|| Regex::new(r"[.,;:!?]{2,}").expect("valid punctuation regex"))
}

fn correct_annotation() -> &'static Regex {
    static ANNOTATION: OnceLock<Regex> = OnceLock::new();
    ANNOTATION.get_or_init(|| {
        Regex::new(r"(?i)\(\s*(?:correct|right)\s*(?:answer)?\s*\)").expect("valid annotation regex")
    })
}

/// Cleans a single answer option: strips markdown, duplicated and single
/// leading option markers for the active language, checkmark glyphs,
/// "(correct)" annotations, repeated punctuation, and surrounding
/// bracket/punctuation noise.
///
/// French gets its doubled accented markers ("à. à. ...") handled by the same
/// loop because its marker letters include à/â; other languages share the
/// Latin a-d set plus their own glyphs.
pub fn clean_option(text: &str, language: Language) -> String {
    let set = patterns::get_patterns(language);
    let mut value: String = clean_markdown(text)
        .chars()
        .filter(|ch| !CHECKMARK_GLYPHS.contains(ch))
        .collect();
    value = correct_annotation().replace_all(&value, "").to_string();
    value = repeated_punctuation()
        .replace_all(&value, |caps: &regex::Captures| caps[0][..1].to_string())
        .to_string();

    // Marker stripping and bracket trimming can expose each other (duplicated
    // prefixes like "a. a.", or "[a) ...]"), so run both to a fixpoint.
    loop {
        let before = value.clone();
        value = set
            .option_marker
            .replace(&value, "")
            .trim_start()
            .to_string();
        value = value
            .trim_matches(|ch: char| {
                matches!(ch, '(' | ')' | '[' | ']' | '{' | '}' | ',' | ';' | ':' | '-')
                    || ch.is_whitespace()
            })
            .trim_end_matches('.')
            .trim()
            .to_string();
        if value == before {
            break;
        }
    }

    value
}
