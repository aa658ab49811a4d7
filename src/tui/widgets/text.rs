/// Wrap `line` at word boundaries so no piece is wider than `width` characters.
/// Words longer than `width` are split.
pub fn wrap_text(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    if line.chars().count() <= width {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut offset = 0;

    while offset < chars.len() {
        let remaining = chars.len() - offset;
        if remaining <= width {
            wrapped.push(chars[offset..].iter().collect());
            break;
        }

        // Break after the last space that still fits
        let mut break_pos = width;
        let search_end = (offset + width + 1).min(chars.len());
        for i in (offset..search_end).rev() {
            if chars[i].is_whitespace() {
                break_pos = i - offset + 1;
                break;
            }
        }

        let end = offset + break_pos;
        let piece: String = chars[offset..end].iter().collect();
        wrapped.push(piece.trim_end().to_string());
        offset = end;

        while offset < chars.len() && chars[offset].is_whitespace() {
            offset += 1;
        }
    }

    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    wrapped
}

/// Truncate to `max` characters, ending with "..." when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max.saturating_sub(3)).collect::<String>() + "..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_spaces() {
        assert_eq!(
            wrap_text("plan your day with ease", 10),
            vec!["plan your", "day with", "ease"]
        );
    }

    #[test]
    fn splits_long_words_and_keeps_short_lines() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("short", 10), vec!["short"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(wrap_text("Привет мир", 6), vec!["Привет", "мир"]);
        assert_eq!(truncate("Задача создана", 8), "Задач...");
        assert_eq!(truncate("ok", 8), "ok");
    }
}
