/// Maximum characters Discord accepts in one message
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Split `text` into chunks of at most `limit` characters
///
/// Breaks on line boundaries where possible; a single line longer than `limit` is cut
/// into `limit`-sized pieces. Whitespace-only chunks are dropped.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        let needed = if current.is_empty() {
            line_len
        } else {
            current_len + 1 + line_len
        };

        if needed <= limit {
            if !current.is_empty() {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(line);
            current_len += line_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len <= limit {
            current.push_str(line);
            current_len = line_len;
        } else {
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(limit) {
                let piece: String = piece.iter().collect();
                if piece.chars().count() == limit {
                    chunks.push(piece);
                } else {
                    current_len = piece.chars().count();
                    current = piece;
                }
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks.retain(|chunk| !chunk.trim().is_empty());
    chunks
}
