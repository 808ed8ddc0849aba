//! Pull a JSON object out of free-form model output.
//!
//! Models wrap JSON in markdown fences, with or without a language tag, or add
//! a sentence before it. Rather than matching fence prefixes we take the whole
//! text when it parses, and otherwise the first balanced `{...}` block.

/// Return the slice holding the first complete JSON object in `text`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') && serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return Some(trimmed);
    }

    let mut search_from = 0;
    while let Some(offset) = trimmed[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_end(&trimmed[start..]) {
            let candidate = &trimmed[start..start + end];
            if serde_json::from_str::<serde_json::Value>(candidate).is_ok() {
                return Some(candidate);
            }
        }
        search_from = start + 1;
    }

    None
}

/// Byte length of the brace-balanced prefix of `text`, which starts with `{`.
/// Braces inside string literals are ignored.
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}
