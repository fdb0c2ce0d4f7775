use crate::model::{Language, OriginalQuestion, ParsedQuestion, QuestionFormat, QuestionRecord};
use crate::patterns;

/// Merge knobs for the assembler.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleOptions {
    /// Index offset tried first when matching true/false candidates to
    /// original questions. The legacy pipeline shifted by 6 against one
    /// specific backend response shape; that looks like a defect, so the
    /// shift is opt-in and defaults to 0. Pending product confirmation.
    pub true_false_offset: usize,
}

/// Merges parsed candidates against the original upload, one record per
/// original question in order. Records where both the rewritten stem and the
/// original question text are empty are dropped; ordering is otherwise
/// preserved.
pub fn assemble(
    parsed: &[ParsedQuestion],
    originals: &[OriginalQuestion],
    format: QuestionFormat,
    language: Language,
    options: AssembleOptions,
) -> Vec<QuestionRecord> {
    let mut records = Vec::with_capacity(originals.len());

    for (index, original) in originals.iter().enumerate() {
        let candidate = select_candidate(parsed, index, format, options);

        let rewritten_stem = candidate
            .map(|parsed| parsed.stem.trim().to_string())
            .unwrap_or_default();

        let mut record_options = candidate
            .map(|parsed| parsed.options.clone())
            .unwrap_or_default();
        if record_options.is_empty() && format.is_true_false() {
            record_options = patterns::true_false_options(language)
                .iter()
                .map(ToString::to_string)
                .collect();
        }

        let passage = candidate
            .map(|parsed| parsed.passage.clone())
            .filter(|passage| !passage.is_empty())
            .unwrap_or_else(|| original.passage.clone());

        let record = QuestionRecord {
            question_no: original.question_no,
            passage,
            original_question: original.question_text.clone(),
            rewritten_stem,
            options: record_options,
            correct_answer: candidate
                .map(|parsed| parsed.correct_answer.clone())
                .unwrap_or_default(),
            explanation: candidate
                .map(|parsed| parsed.explanation.clone())
                .unwrap_or_default(),
        };

        if record.rewritten_stem.is_empty() && record.original_question.is_empty() {
            continue;
        }

        records.push(record);
    }

    records
}

/// Candidates are matched by `source_index`, so elements that produced no
/// candidate leave a gap instead of shifting later questions.
fn select_candidate(
    parsed: &[ParsedQuestion],
    index: usize,
    format: QuestionFormat,
    options: AssembleOptions,
) -> Option<&ParsedQuestion> {
    if format.is_true_false() && options.true_false_offset > 0 {
        let shifted = parsed
            .iter()
            .find(|candidate| candidate.source_index == index + options.true_false_offset);
        if shifted.is_some() {
            return shifted;
        }
    }

    parsed
        .iter()
        .find(|candidate| candidate.source_index == index)
}
