use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::assemble::AssembleOptions;
use crate::cli::ExtractArgs;
use crate::extract::extract_questions;
use crate::model::{Language, OriginalQuestion, QuestionFormat};
use crate::util::write_json_pretty;

pub fn run(args: ExtractArgs) -> Result<()> {
    let response = fs::read_to_string(&args.response_path)
        .with_context(|| format!("failed to read {}", args.response_path.display()))?;

    let raw = fs::read(&args.questions_path)
        .with_context(|| format!("failed to read {}", args.questions_path.display()))?;
    let originals: Vec<OriginalQuestion> = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", args.questions_path.display()))?;

    let format = QuestionFormat::from_name(&args.format);
    let language = Language::from_name(&args.language);

    let known_formats = [
        "multiple choice question",
        "multiple response question",
        "true/false",
        "true or false",
    ];
    if !known_formats.contains(&args.format.trim().to_lowercase().as_str()) {
        warn!(format = %args.format, "unrecognized format, using multiple-choice handling");
    }
    let known_languages = ["english", "hindi", "bangla", "french"];
    if !known_languages.contains(&args.language.trim().to_lowercase().as_str()) {
        warn!(language = %args.language, "unrecognized language, using english patterns");
    }

    info!(
        format = format.as_str(),
        language = language.as_str(),
        questions = originals.len(),
        "starting extraction"
    );

    let records = extract_questions(
        &response,
        format,
        language,
        &originals,
        AssembleOptions {
            true_false_offset: args.true_false_offset,
        },
    )?;

    if records.iter().all(|record| record.rewritten_stem.is_empty()) {
        warn!("no questions could be extracted from the response");
    }

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &records)?;
            info!(path = %path.display(), records = records.len(), "wrote extraction output");
        }
        None => {
            let json =
                serde_json::to_string_pretty(&records).context("failed to serialize records")?;
            println!("{json}");
        }
    }

    Ok(())
}
