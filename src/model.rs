use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    English,
    Hindi,
    Bangla,
    French,
}

impl Language {
    /// Unknown names resolve to English so parsing stays best-effort.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "hindi" => Self::Hindi,
            "bangla" => Self::Bangla,
            "french" => Self::French,
            _ => Self::English,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Bangla => "bangla",
            Self::French => "french",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum QuestionFormat {
    MultipleChoice,
    MultipleResponse,
    TrueFalse,
}

impl QuestionFormat {
    /// Unknown names resolve to multiple-choice handling.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "multiple response question" => Self::MultipleResponse,
            "true/false" | "true or false" => Self::TrueFalse,
            _ => Self::MultipleChoice,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::MultipleResponse => "multiple-response",
            Self::TrueFalse => "true-false",
        }
    }

    pub fn is_true_false(self) -> bool {
        matches!(self, Self::TrueFalse)
    }
}

/// One entry of the originally uploaded question list.
#[derive(Debug, Clone, Deserialize)]
pub struct OriginalQuestion {
    #[serde(alias = "questionNo")]
    pub question_no: u32,

    #[serde(default)]
    pub passage: String,

    #[serde(alias = "question", alias = "questionText")]
    pub question_text: String,
}

/// A list item lifted out of the DOM, with its correct-answer signal resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub text: String,
    pub correct: bool,
}

/// A candidate element found while walking the response HTML. Ephemeral:
/// produced by element collection, consumed by candidate building.
#[derive(Debug, Clone)]
pub enum RawElement {
    TableRow {
        cells: Vec<String>,
        items: Vec<ListEntry>,
        full_text: String,
    },
    StandaloneList {
        items: Vec<ListEntry>,
        context: Option<String>,
        full_text: String,
    },
}

/// A question reconstructed by either parser.
///
/// `source_index` is the document-order index of the element (or text block)
/// the candidate came from; elements that produce no candidate still consume
/// an index so positional merging stays aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuestion {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub passage: String,
    pub explanation: String,
    pub source_index: usize,
}

/// Final output record. Serialized field names are fixed by downstream
/// exporters and must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRecord {
    #[serde(rename = "questionNo")]
    pub question_no: u32,

    pub passage: String,

    #[serde(rename = "question")]
    pub original_question: String,

    #[serde(rename = "rewrittenQuestion")]
    pub rewritten_stem: String,

    pub options: Vec<String>,

    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,

    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_from_name_is_case_insensitive_and_defaults_to_english() {
        assert_eq!(Language::from_name("Hindi"), Language::Hindi);
        assert_eq!(Language::from_name("  FRENCH "), Language::French);
        assert_eq!(Language::from_name("bangla"), Language::Bangla);
        assert_eq!(Language::from_name("klingon"), Language::English);
        assert_eq!(Language::from_name(""), Language::English);
    }

    #[test]
    fn format_from_name_handles_upload_values() {
        assert_eq!(
            QuestionFormat::from_name("Multiple Choice Question"),
            QuestionFormat::MultipleChoice
        );
        assert_eq!(
            QuestionFormat::from_name("Multiple Response Question"),
            QuestionFormat::MultipleResponse
        );
        assert_eq!(
            QuestionFormat::from_name("True/False"),
            QuestionFormat::TrueFalse
        );
        assert_eq!(
            QuestionFormat::from_name("Essay"),
            QuestionFormat::MultipleChoice
        );
    }

    #[test]
    fn original_question_accepts_camel_case_aliases() {
        let raw = r#"{"questionNo": 3, "question": "What is water?", "passage": ""}"#;
        let parsed: OriginalQuestion = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.question_no, 3);
        assert_eq!(parsed.question_text, "What is water?");
        assert!(parsed.passage.is_empty());
    }

    #[test]
    fn question_record_serializes_with_exporter_field_names() {
        let record = QuestionRecord {
            question_no: 1,
            passage: String::new(),
            original_question: "old".to_string(),
            rewritten_stem: "new".to_string(),
            options: vec!["a".to_string()],
            correct_answer: "a".to_string(),
            explanation: String::new(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["questionNo"], 1);
        assert_eq!(json["question"], "old");
        assert_eq!(json["rewrittenQuestion"], "new");
        assert_eq!(json["correctAnswer"], "a");
        assert!(json.get("rewritten_stem").is_none());
    }
}
