use scraper::Html;
use tracing::info;

/// Elements whose text never reaches the context
const SKIPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Flatten the visible text of a website into one labeled block
pub fn extract_website_data(html: &str) -> String {
    let document = Html::parse_document(html);

    let page_text = document
        .tree
        .root()
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
            })
        })
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let clean_text = page_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    info!("Website data length: {} characters", clean_text.len());

    format!("\nOFFICIAL WEBSITE INFORMATION:\n{}\n", clean_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_and_styles() {
        let html = r#"<html><head><title>Code &amp; Coffee</title>
            <style>body { color: red; }</style>
            <script>var tracking = true;</script></head>
            <body><h1>Welcome</h1><p>Meet every
            Saturday morning</p><script>alert('x')</script></body></html>"#;

        assert_eq!(
            extract_website_data(html),
            "\nOFFICIAL WEBSITE INFORMATION:\nCode & Coffee Welcome Meet every Saturday morning\n"
        );
    }

    #[test]
    fn empty_page_yields_empty_block() {
        assert_eq!(
            extract_website_data("<html><body></body></html>"),
            "\nOFFICIAL WEBSITE INFORMATION:\n\n"
        );
    }
}
