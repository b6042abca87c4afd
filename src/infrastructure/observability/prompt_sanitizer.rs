const MAX_VISIBLE_CHARS: usize = 100;

/// Credential markers whose value is masked up to the next delimiter.
const SECRET_MARKERS: &[&str] = &["Bearer ", "api_key=", "api-key=", "password=", "token="];

/// Shortens prompt or advice text and masks credentials before it reaches the logs.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    SECRET_MARKERS
        .iter()
        .fold(visible, |text, marker| mask_after(&text, marker))
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '&' | '"' | '\'' | ',')
}

/// Masks the value following every occurrence of `marker`.
fn mask_after(text: &str, marker: &str) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find(marker) {
        let value_start = idx + marker.len();
        masked.push_str(&rest[..value_start]);
        masked.push_str("[REDACTED]");
        let value_len = rest[value_start..]
            .find(is_delimiter)
            .unwrap_or(rest.len() - value_start);
        rest = &rest[value_start + value_len..];
    }
    masked.push_str(rest);
    masked
}
