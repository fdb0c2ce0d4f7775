use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::candidate::CandidateDraft;
use crate::classify;
use crate::model::{Language, ParsedQuestion, QuestionFormat};
use crate::normalize;

const PASSAGE_MIN_CHARS: usize = 50;

/// Best-effort line scan used when structural parsing found nothing. Single
/// pass over the non-blank lines of the tag-stripped text.
pub fn parse_fallback(
    text: &str,
    format: QuestionFormat,
    language: Language,
) -> Vec<ParsedQuestion> {
    let plain = strip_tags(text);
    let mut candidates = Vec::new();
    let mut draft = CandidateDraft::default();

    for raw_line in plain.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if is_question_line(line, language) {
            flush(&mut draft, &mut candidates, format, language);
            draft.stem = line.to_string();
            push_raw(&mut draft, line);
            continue;
        }

        push_raw(&mut draft, line);

        if classify::is_option(line, format, language) {
            let marked_correct = classify::is_correct_marker(line, None, None);
            let option = normalize::clean_option(line, language);
            if option.is_empty() {
                continue;
            }
            if marked_correct && draft.correct_answer.is_empty() {
                draft.correct_answer = option.clone();
            }
            draft.options.push(option);
            continue;
        }

        if let Some(rest) = explanation_line(line) {
            if draft.explanation.is_empty() {
                draft.explanation = rest;
            }
            continue;
        }

        if let Some(rest) = answer_line(line) {
            if draft.correct_answer.is_empty() {
                draft.correct_answer = normalize::clean_option(&rest, language);
            }
            continue;
        }

        if !draft.stem.trim().is_empty()
            && draft.options.is_empty()
            && line.chars().count() > PASSAGE_MIN_CHARS
        {
            if !draft.passage.is_empty() {
                draft.passage.push(' ');
            }
            draft.passage.push_str(line);
        }
    }

    flush(&mut draft, &mut candidates, format, language);
    debug!(candidates = candidates.len(), "fallback parse complete");
    candidates
}

fn push_raw(draft: &mut CandidateDraft, line: &str) {
    if !draft.raw_text.is_empty() {
        draft.raw_text.push('\n');
    }
    draft.raw_text.push_str(line);
}

fn flush(
    draft: &mut CandidateDraft,
    candidates: &mut Vec<ParsedQuestion>,
    format: QuestionFormat,
    language: Language,
) {
    let finished = std::mem::take(draft);
    if finished.is_empty() {
        return;
    }
    if let Some(parsed) = finished.finalize(candidates.len(), format, language) {
        candidates.push(parsed);
    }
}

fn interrogative_start() -> &'static Regex {
    static START: OnceLock<Regex> = OnceLock::new();
    START.get_or_init(|| {
        Regex::new(r"(?i)^(?:what|how|why|when|where|which|who)\b")
            .expect("valid interrogative regex")
    })
}

fn question_keyword() -> &'static Regex {
    static KEYWORD: OnceLock<Regex> = OnceLock::new();
    KEYWORD.get_or_init(|| Regex::new(r"(?i)\bquestion\b").expect("valid question keyword regex"))
}

fn is_question_line(line: &str, language: Language) -> bool {
    if line.contains('?') || interrogative_start().is_match(line) {
        return true;
    }

    let localized = match language {
        Language::Hindi => line.contains("प्रश्न") || line.contains("सवाल"),
        Language::Bangla => line.contains("প্রশ্ন") || line.contains("জিজ্ঞাসা"),
        Language::English | Language::French => false,
    };

    localized || question_keyword().is_match(line)
}

fn explanation_cue() -> &'static Regex {
    static CUE: OnceLock<Regex> = OnceLock::new();
    CUE.get_or_init(|| {
        Regex::new(r"(?i)^(?:explanation|explication|व्याख्या|ব্যাখ্যা)\s*[:：\-–]?\s*")
            .expect("valid explanation cue regex")
    })
}

fn explanation_line(line: &str) -> Option<String> {
    let rest = explanation_cue().replace(line, "");
    if rest == line {
        return None;
    }
    Some(rest.trim().to_string())
}

fn answer_cue() -> &'static Regex {
    static CUE: OnceLock<Regex> = OnceLock::new();
    CUE.get_or_init(|| {
        Regex::new(r"(?i)^(?:correct\s+answer|answer|réponse|उत्तर|উত্তর)\s*[:：\-–]?\s*")
            .expect("valid answer cue regex")
    })
}

fn answer_line(line: &str) -> Option<String> {
    let rest = answer_cue().replace(line, "");
    if rest == line {
        return None;
    }
    Some(rest.trim().to_string())
}

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag regex"))
}

/// Replaces markup with line breaks and decodes the common entities so the
/// line heuristics see human text.
fn strip_tags(text: &str) -> String {
    let stripped = tag_pattern().replace_all(text, "\n");
    stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
