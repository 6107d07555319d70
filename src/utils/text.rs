/// Single-line, length-limited copy of `text` for log output
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Replace line breaks so user-supplied text cannot forge log lines
pub fn sanitize(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}
