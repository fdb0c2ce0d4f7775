use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Language, ParsedQuestion, QuestionFormat};
use crate::normalize;
use crate::patterns;

/// A question candidate under construction. Both parsers accumulate into a
/// draft and run the same finalization.
#[derive(Debug, Default, Clone)]
pub(crate) struct CandidateDraft {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub passage: String,
    pub explanation: String,
    /// The element's (or text block's) full visible text, used for
    /// correct-answer cue detection when no option carried the marker.
    pub raw_text: String,
}

impl CandidateDraft {
    pub fn is_empty(&self) -> bool {
        self.stem.trim().is_empty()
            && self.options.is_empty()
            && self.passage.trim().is_empty()
    }

    /// Normalizes the draft into a `ParsedQuestion`, synthesizing the stem
    /// from the passage and injecting localized true/false defaults where
    /// the format calls for it. Returns `None` when no usable stem/options
    /// pair remains.
    pub fn finalize(
        self,
        source_index: usize,
        format: QuestionFormat,
        language: Language,
    ) -> Option<ParsedQuestion> {
        let passage = normalize::clean_markdown(&self.passage);
        let mut stem = normalize::normalize_stem(&normalize::clean_markdown(&self.stem));
        if stem.is_empty() && !passage.is_empty() {
            stem = first_sentence(&passage);
        }

        let mut options = self.options;
        let mut correct_answer = self.correct_answer;

        if format.is_true_false() && !stem.is_empty() && options.is_empty() {
            let pair = patterns::true_false_options(language);
            options = vec![pair[0].to_string(), pair[1].to_string()];
            if correct_answer.is_empty() {
                if let Some(truth) = detect_correct_truth(&self.raw_text) {
                    correct_answer = if truth {
                        options[0].clone()
                    } else {
                        options[1].clone()
                    };
                }
            }
        }

        if stem.is_empty() || options.is_empty() {
            return None;
        }

        Some(ParsedQuestion {
            stem,
            options,
            correct_answer,
            passage,
            explanation: self.explanation,
            source_index,
        })
    }
}

/// Scans free text for an "answer/correct" cue followed by a true/false word.
fn detect_correct_truth(text: &str) -> Option<bool> {
    let captures = patterns::correct_cue().captures(text)?;
    patterns::classify_truth_word(&captures[1])
}

fn sentence_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"(?s)^(.*?[.!?])\s").expect("valid sentence regex"))
}

fn first_sentence(passage: &str) -> String {
    match sentence_boundary().captures(passage) {
        Some(captures) => captures[1].trim().to_string(),
        None => passage.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(stem: &str, options: &[&str]) -> CandidateDraft {
        CandidateDraft {
            stem: stem.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            ..CandidateDraft::default()
        }
    }

    #[test]
    fn finalize_keeps_stem_and_options() {
        let parsed = draft("What is 2+2?", &["3", "4"])
            .finalize(0, QuestionFormat::MultipleChoice, Language::English)
            .unwrap();
        assert_eq!(parsed.stem, "What is 2+2?");
        assert_eq!(parsed.options, vec!["3", "4"]);
        assert_eq!(parsed.source_index, 0);
    }

    #[test]
    fn finalize_discards_optionless_candidates() {
        let parsed = draft("What is 2+2?", &[]).finalize(
            0,
            QuestionFormat::MultipleChoice,
            Language::English,
        );
        assert!(parsed.is_none());
    }

    #[test]
    fn finalize_discards_stemless_candidates_without_passage() {
        let parsed =
            draft("", &["3", "4"]).finalize(0, QuestionFormat::MultipleChoice, Language::English);
        assert!(parsed.is_none());
    }

    #[test]
    fn finalize_synthesizes_stem_from_passage_first_sentence() {
        let mut candidate = draft("", &["3", "4"]);
        candidate.passage = "Water covers most of Earth. It is everywhere!".to_string();
        let parsed = candidate
            .finalize(2, QuestionFormat::MultipleChoice, Language::English)
            .unwrap();
        assert_eq!(parsed.stem, "Water covers most of Earth.");
        assert_eq!(parsed.source_index, 2);
    }

    #[test]
    fn finalize_injects_localized_true_false_options() {
        let parsed = draft("Is water wet?", &[])
            .finalize(0, QuestionFormat::TrueFalse, Language::Hindi)
            .unwrap();
        assert_eq!(parsed.options, vec!["सत्य", "असत्य"]);
        assert!(parsed.correct_answer.is_empty());
    }

    #[test]
    fn finalize_detects_correct_truth_from_raw_text() {
        let mut candidate = draft("Water is wet. (True/False)", &[]);
        candidate.raw_text = "Water is wet. The correct answer is True.".to_string();
        let parsed = candidate
            .finalize(0, QuestionFormat::TrueFalse, Language::English)
            .unwrap();
        assert_eq!(parsed.stem, "Water is wet.");
        assert_eq!(parsed.options, vec!["True", "False"]);
        assert_eq!(parsed.correct_answer, "True");
    }
}
