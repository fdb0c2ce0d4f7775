use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::candidate::CandidateDraft;
use crate::classify;
use crate::model::{Language, ListEntry, ParsedQuestion, QuestionFormat, RawElement};
use crate::normalize;

/// Reconstructs question candidates from the response HTML. Table rows are
/// considered first, then lists that stand outside any table row. Returns an
/// empty vector when the markup yields nothing; the caller falls back to the
/// text parser.
pub fn parse_structural(
    html: &str,
    format: QuestionFormat,
    language: Language,
) -> Vec<ParsedQuestion> {
    let elements = collect_elements(html);
    let element_count = elements.len();

    let candidates: Vec<ParsedQuestion> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| build_candidate(&element, index, format, language))
        .collect();

    debug!(
        elements = element_count,
        candidates = candidates.len(),
        "structural parse complete"
    );

    candidates
}

/// Lifts candidate elements out of the DOM. All `scraper` access is confined
/// here; candidate building downstream is pure.
fn collect_elements(html: &str) -> Vec<RawElement> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("tr").expect("valid row selector");
    let cell_selector = Selector::parse("td, th").expect("valid cell selector");
    let item_selector = Selector::parse("li").expect("valid item selector");
    let list_selector = Selector::parse("ul, ol").expect("valid list selector");

    let mut elements = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(text_without_lists)
            .collect();
        let items: Vec<ListEntry> = row.select(&item_selector).map(list_entry).collect();

        if cells.is_empty() && items.is_empty() {
            continue;
        }

        elements.push(RawElement::TableRow {
            cells,
            items,
            full_text: element_text(row),
        });
    }

    for list in document.select(&list_selector) {
        if has_ancestor(list, &["tr", "ul", "ol"]) {
            continue;
        }

        let items: Vec<ListEntry> = list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "li")
            .map(list_entry)
            .collect();

        if items.is_empty() {
            continue;
        }

        let context = surrounding_context(list);
        let full_text = match &context {
            Some(text) => format!("{text} {}", element_text(list)),
            None => element_text(list),
        };

        elements.push(RawElement::StandaloneList {
            items,
            context,
            full_text,
        });
    }

    elements
}

fn build_candidate(
    element: &RawElement,
    source_index: usize,
    format: QuestionFormat,
    language: Language,
) -> Option<ParsedQuestion> {
    let mut draft = CandidateDraft::default();

    match element {
        RawElement::TableRow {
            cells,
            items,
            full_text,
        } => {
            draft.passage = cells.get(1).cloned().unwrap_or_default();
            draft.raw_text = full_text.clone();
            accumulate_items(&mut draft, items, format, language);
            if draft.stem.trim().is_empty() {
                draft.stem = cells.first().cloned().unwrap_or_default();
            }
        }
        RawElement::StandaloneList {
            items,
            context,
            full_text,
        } => {
            draft.raw_text = full_text.clone();
            accumulate_items(&mut draft, items, format, language);
            if draft.stem.trim().is_empty() {
                draft.stem = context.clone().unwrap_or_default();
            }
        }
    }

    draft.finalize(source_index, format, language)
}

/// Classifies each list item as option or stem. The first non-option item
/// becomes the stem; the option carrying the correct marker is recorded.
fn accumulate_items(
    draft: &mut CandidateDraft,
    items: &[ListEntry],
    format: QuestionFormat,
    language: Language,
) {
    for item in items {
        if classify::is_option(&item.text, format, language) {
            let option = normalize::clean_option(&item.text, language);
            if option.is_empty() {
                continue;
            }
            if item.correct && draft.correct_answer.is_empty() {
                draft.correct_answer = option.clone();
            }
            draft.options.push(option);
        } else if draft.stem.trim().is_empty() {
            draft.stem = item.text.clone();
        }
    }
}

fn list_entry(element: ElementRef) -> ListEntry {
    let text = element_text(element);
    let correct = classify::is_correct_marker(
        &text,
        element.value().attr("class"),
        element
            .value()
            .attr("data-correct")
            .or_else(|| element.value().attr("correct")),
    );
    ListEntry { text, correct }
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Visible text of an element with any nested ul/ol subtrees excluded.
fn text_without_lists(element: ElementRef) -> String {
    let mut parts = Vec::new();
    collect_text_without_lists(element, &mut parts);
    parts.join(" ")
}

fn collect_text_without_lists(element: ElementRef, parts: &mut Vec<String>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if !matches!(child_element.value().name(), "ul" | "ol") {
                collect_text_without_lists(child_element, parts);
            }
        } else if let Some(text) = child.value().as_text() {
            let trimmed = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
    }
}

fn has_ancestor(element: ElementRef, names: &[&str]) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| names.contains(&ancestor.value().name()))
}

/// Stem source for a standalone list: the previous sibling element's text,
/// else the parent's text with the list itself removed.
fn surrounding_context(list: ElementRef) -> Option<String> {
    let previous = list
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty());
    if previous.is_some() {
        return previous;
    }

    list.parent()
        .and_then(ElementRef::wrap)
        .map(text_without_lists)
        .filter(|text| !text.is_empty())
}
