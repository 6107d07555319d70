use crate::utils::text::preview;
use scraper::{ElementRef, Html};
use tracing::{debug, info};

/// Direct text must be longer than this to be emitted
const MIN_TEXT_CHARS: usize = 5;

/// Dump the text of nested `<div>` containers, depth-first, starting at `<body>`
///
/// Each container whose own text nodes amount to more than five characters yields one
/// `"{indent}Level {depth}: {text}"` line. Lines are separated by a blank line.
pub fn extract_div_content(document: &Html) -> String {
    let root = document.root_element();
    let start = root
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "body")
        .unwrap_or(root);

    let mut lines = Vec::new();
    let mut stack = vec![(start, 0usize)];

    while let Some((element, depth)) = stack.pop() {
        let text = direct_text(element);
        if text.chars().count() > MIN_TEXT_CHARS {
            let indent = "  ".repeat(depth);
            debug!("{}Level {} content: {}...", indent, depth, preview(&text, 200));
            lines.push(format!("{}Level {}: {}", indent, depth, text));
        }

        // Reversed so the first child is visited next
        let children: Vec<_> = element
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "div")
            .collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }

    info!("Extracted content from {} div levels", lines.len());

    let combined = lines.join("\n\n");
    info!("Combined nested div content length: {} chars", combined.len());
    info!("Combined content preview: {}...", preview(&combined, 500));

    combined
}

/// Text nodes that are immediate children of `element`, trimmed and space-joined
fn direct_text(element: ElementRef<'_>) -> String {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
