use quizextract::{
    AssembleOptions, ExtractError, Language, OriginalQuestion, QuestionFormat, extract_questions,
    true_false_options,
};

fn originals(texts: &[&str]) -> Vec<OriginalQuestion> {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| OriginalQuestion {
            question_no: index as u32 + 1,
            passage: String::new(),
            question_text: text.to_string(),
        })
        .collect()
}

#[test]
fn html_table_with_nested_options_is_extracted() {
    let html = r#"
        <table>
          <tr><td>What is 2+2?
            <ul><li>A) 3</li><li>B) 4</li><li>C) 5</li></ul>
          </td></tr>
        </table>
    "#;

    let records = extract_questions(
        html,
        QuestionFormat::MultipleChoice,
        Language::English,
        &originals(&["What does 2+2 equal?"]),
        AssembleOptions::default(),
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].question_no, 1);
    assert_eq!(records[0].original_question, "What does 2+2 equal?");
    assert_eq!(records[0].rewritten_stem, "What is 2+2?");
    assert_eq!(records[0].options, vec!["3", "4", "5"]);
}

#[test]
fn plain_text_true_false_gets_localized_defaults() {
    let text = "Is water wet?\n(सत्य/असत्य)";

    let records = extract_questions(
        text,
        QuestionFormat::TrueFalse,
        Language::Hindi,
        &originals(&["original hindi question"]),
        AssembleOptions::default(),
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rewritten_stem, "Is water wet?");
    assert_eq!(records[0].options, vec!["सत्य", "असत्य"]);
    assert_eq!(
        records[0].options,
        true_false_options(Language::Hindi).to_vec()
    );
}

#[test]
fn unformatted_marker_is_a_hard_failure() {
    for (format, language) in [
        (QuestionFormat::MultipleChoice, Language::English),
        (QuestionFormat::TrueFalse, Language::Bangla),
        (QuestionFormat::MultipleResponse, Language::French),
    ] {
        let err = extract_questions(
            "leading text ...[Unformatted Question]... trailing",
            format,
            language,
            &originals(&["q"]),
            AssembleOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ExtractError::UnformattedResponse);
    }
}

#[test]
fn structural_gaps_keep_original_questions_in_place() {
    let html = r#"
        <table>
          <tr><td>Rewritten first? <ul><li>a) yes</li><li>b) no</li></ul></td></tr>
          <tr><td></td></tr>
          <tr><td>Rewritten third? <ul><li>a) up</li><li>b) down</li></ul></td></tr>
        </table>
    "#;

    let records = extract_questions(
        html,
        QuestionFormat::MultipleChoice,
        Language::English,
        &originals(&["first", "second", "third"]),
        AssembleOptions::default(),
    )
    .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].rewritten_stem, "Rewritten first?");
    assert!(records[1].rewritten_stem.is_empty());
    assert!(records[1].options.is_empty());
    assert_eq!(records[1].original_question, "second");
    assert_eq!(records[2].rewritten_stem, "Rewritten third?");
}

#[test]
fn gap_records_with_no_original_text_are_dropped() {
    let html = r#"
        <table>
          <tr><td>Rewritten first? <ul><li>a) yes</li><li>b) no</li></ul></td></tr>
          <tr><td></td></tr>
          <tr><td>Rewritten third? <ul><li>a) up</li><li>b) down</li></ul></td></tr>
        </table>
    "#;

    let records = extract_questions(
        html,
        QuestionFormat::MultipleChoice,
        Language::English,
        &originals(&["first", "", "third"]),
        AssembleOptions::default(),
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].question_no, 1);
    assert_eq!(records[1].question_no, 3);
}

#[test]
fn full_structural_coverage_preserves_count_and_order() {
    let html = r#"
        <table>
          <tr><td>Q one? <ul><li>a) 1</li><li>b) 2</li></ul></td></tr>
          <tr><td>Q two? <ul><li>a) 3</li><li>b) 4</li></ul></td></tr>
          <tr><td>Q three? <ul><li>a) 5</li><li>b) 6</li></ul></td></tr>
        </table>
    "#;
    let uploaded = originals(&["one", "two", "three"]);

    let records = extract_questions(
        html,
        QuestionFormat::MultipleChoice,
        Language::English,
        &uploaded,
        AssembleOptions::default(),
    )
    .unwrap();

    assert_eq!(records.len(), uploaded.len());
    for (record, original) in records.iter().zip(&uploaded) {
        assert_eq!(record.question_no, original.question_no);
    }
}

#[test]
fn records_serialize_with_stable_exporter_names() {
    let records = extract_questions(
        "What is 2+2?\na) 3\nb) 4 ✓",
        QuestionFormat::MultipleChoice,
        Language::English,
        &originals(&["orig"]),
        AssembleOptions::default(),
    )
    .unwrap();

    let json = serde_json::to_value(&records).unwrap();
    let record = &json[0];
    for key in [
        "questionNo",
        "passage",
        "question",
        "rewrittenQuestion",
        "options",
        "correctAnswer",
        "explanation",
    ] {
        assert!(record.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(record["correctAnswer"], "4");
}

#[test]
fn extraction_is_safe_to_run_concurrently() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                extract_questions(
                    "What is 2+2?\na) 3\nb) 4",
                    QuestionFormat::MultipleChoice,
                    Language::English,
                    &originals(&["orig"]),
                    AssembleOptions::default(),
                )
                .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let records = handle.join().unwrap();
        assert_eq!(records[0].options, vec!["3", "4"]);
    }
}
