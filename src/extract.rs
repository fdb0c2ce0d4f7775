use tracing::{debug, info};

use crate::assemble::{self, AssembleOptions};
use crate::error::ExtractError;
use crate::fallback;
use crate::model::{Language, OriginalQuestion, QuestionFormat, QuestionRecord};
use crate::structural;

const UNFORMATTED_MARKER: &str = "[unformatted question]";

/// Converts a raw AI response (HTML fragment or plain text) into one
/// normalized record per original question. Pure and synchronous; safe to
/// call concurrently.
///
/// Fails only when the response carries the generator's own
/// `[unformatted question]` marker. Everything else degrades: structural
/// parsing falls back to line heuristics, and an unparseable response yields
/// records with empty rewritten stems for the caller to detect.
pub fn extract_questions(
    response_text: &str,
    format: QuestionFormat,
    language: Language,
    originals: &[OriginalQuestion],
    options: AssembleOptions,
) -> Result<Vec<QuestionRecord>, ExtractError> {
    if response_text.to_lowercase().contains(UNFORMATTED_MARKER) {
        return Err(ExtractError::UnformattedResponse);
    }

    let mut parsed = structural::parse_structural(response_text, format, language);
    if parsed.is_empty() {
        debug!("no structural candidates, trying text fallback");
        parsed = fallback::parse_fallback(response_text, format, language);
    }

    info!(
        candidates = parsed.len(),
        originals = originals.len(),
        format = format.as_str(),
        language = language.as_str(),
        "question extraction complete"
    );

    Ok(assemble::assemble(&parsed, originals, format, language, options))
}
