//! Text operations of the notepad editor.
//!
//! Positions are char indices, matching the cursor model of the editor
//! widget. Selections are half-open `start..end` ranges.

use std::ops::Range;

pub const DIVIDER_CHAR: char = '─';

/// Symbols insertable with Ctrl+Shift+<key>.
pub const SYMBOLS: [(char, &str); 7] = [
    ('A', "→"),
    ('C', "√"),
    ('I', "■"),
    ('O', "□"),
    ('R', "※"),
    ('Z', "✅"),
    ('X', "❎"),
];

pub fn symbol_for_key(key: char) -> Option<&'static str> {
    let key = key.to_ascii_uppercase();
    SYMBOLS
        .iter()
        .find(|(shortcut, _)| *shortcut == key)
        .map(|(_, symbol)| *symbol)
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

fn char_index(text: &str, byte_index: usize) -> usize {
    text[..byte_index].chars().count()
}

/// Replace `selection` with `insert`. Returns the collapsed cursor after it.
pub fn replace_selection(text: &mut String, selection: Range<usize>, insert: &str) -> usize {
    let start = byte_index(text, selection.start);
    let end = byte_index(text, selection.end.max(selection.start));
    text.replace_range(start..end, insert);
    selection.start + insert.chars().count()
}

/// Insert a divider line of `length` box-drawing chars in place of the
/// selection, adding line breaks only where the neighbouring text needs them.
pub fn insert_divider(text: &mut String, selection: Range<usize>, length: usize) -> usize {
    let start = byte_index(text, selection.start);
    let end = byte_index(text, selection.end.max(selection.start));
    let before = &text[..start];
    let after = &text[end..];

    let prefix = if !before.is_empty() && !before.ends_with('\n') { "\n" } else { "" };
    let suffix = if !after.is_empty() && !after.starts_with('\n') { "\n" } else { "" };
    let divider: String = std::iter::repeat(DIVIDER_CHAR).take(length).collect();

    replace_selection(text, selection, &format!("{}{}{}", prefix, divider, suffix))
}

/// Next occurrence of `query` starting at or after `from`, wrapping to the
/// start of the text once.
pub fn find_next(text: &str, query: &str, from: usize) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }
    let from_byte = byte_index(text, from);
    let found = text[from_byte..]
        .find(query)
        .map(|idx| idx + from_byte)
        .or_else(|| if from_byte > 0 { text.find(query) } else { None })?;

    let start = char_index(text, found);
    Some(start..start + query.chars().count())
}

/// Last occurrence of `query` that begins at or before `selection_start - 1`,
/// wrapping to the end of the text once. A cursor at the very start searches
/// nothing.
pub fn find_prev(text: &str, query: &str, selection_start: usize) -> Option<Range<usize>> {
    if query.is_empty() || selection_start == 0 {
        return None;
    }
    let limit = selection_start - 1;
    let starts: Vec<(usize, usize)> = text
        .char_indices()
        .enumerate()
        .filter(|(_, (byte, _))| text[*byte..].starts_with(query))
        .map(|(chars, (byte, _))| (chars, byte))
        .collect();

    let (start, _) = starts
        .iter()
        .rev()
        .find(|(chars, _)| *chars <= limit)
        .or_else(|| starts.last())?;

    Some(*start..*start + query.chars().count())
}

pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// URL to open for a selected fragment, if it looks like one.
pub fn url_from_selection(selected: &str) -> Option<String> {
    let selected = selected.trim();
    let lower = selected.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(selected.to_string())
    } else if lower.starts_with("www.") {
        Some(format!("https://{}", selected))
    } else {
        None
    }
}

/// Substring of `text` covered by the char range.
pub fn selected_text(text: &str, selection: Range<usize>) -> &str {
    let start = byte_index(text, selection.start);
    let end = byte_index(text, selection.end.max(selection.start));
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_divider_on_empty_text() {
        let mut text = String::new();
        let cursor = insert_divider(&mut text, 0..0, 5);
        assert_eq!(text, "─────");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn test_divider_mid_line_gets_breaks() {
        let mut text = "abcdef".to_string();
        let cursor = insert_divider(&mut text, 3..3, 3);
        assert_eq!(text, "abc\n───\ndef");
        assert_eq!(cursor, 8);
    }

    #[test]
    fn test_divider_between_lines_adds_nothing() {
        let mut text = "abc\n\ndef".to_string();
        insert_divider(&mut text, 4..4, 2);
        assert_eq!(text, "abc\n──\ndef");
    }

    #[test]
    fn test_divider_replaces_selection() {
        let mut text = "abc\nXYZ\ndef".to_string();
        insert_divider(&mut text, 4..7, 2);
        assert_eq!(text, "abc\n──\ndef");
    }

    #[test]
    fn test_symbol_replaces_selection() {
        let mut text = "왼쪽 x 오른쪽".to_string();
        let cursor = replace_selection(&mut text, 3..4, "→");
        assert_eq!(text, "왼쪽 → 오른쪽");
        assert_eq!(cursor, 4);
    }

    #[test_case('a' => Some("→"))]
    #[test_case('C' => Some("√"))]
    #[test_case('z' => Some("✅"))]
    #[test_case('x' => Some("❎"))]
    #[test_case('q' => None)]
    fn test_symbol_keys(key: char) -> Option<&'static str> {
        symbol_for_key(key)
    }

    #[test]
    fn test_find_next_wraps() {
        let text = "one two one two";
        assert_eq!(find_next(text, "two", 0), Some(4..7));
        assert_eq!(find_next(text, "two", 7), Some(12..15));
        assert_eq!(find_next(text, "two", 15), Some(4..7));
        assert_eq!(find_next(text, "three", 3), None);
        assert_eq!(find_next(text, "", 0), None);
    }

    #[test]
    fn test_find_next_counts_chars() {
        let text = "일정 확인 일정";
        assert_eq!(find_next(text, "일정", 1), Some(6..8));
    }

    #[test]
    fn test_find_prev_wraps_to_end() {
        let text = "one two one two";
        // selection on the second "one" (8..11): previous is the first "one"
        assert_eq!(find_prev(text, "one", 8), Some(0..3));
        // a match may begin exactly at selection_start - 1
        assert_eq!(find_prev(text, "one", 1), Some(0..3));
        assert_eq!(find_prev(text, "two", 4), Some(12..15));
    }

    #[test]
    fn test_find_prev_at_start_is_noop() {
        assert_eq!(find_prev("abc abc", "abc", 0), None);
    }

    #[test]
    fn test_counts() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a\nb\n"), 3);
        assert_eq!(char_count("설날 ✅"), 4);
    }

    #[test_case("https://example.com" => Some("https://example.com".to_string()))]
    #[test_case("  HTTP://x.org " => Some("HTTP://x.org".to_string()))]
    #[test_case("www.rust-lang.org" => Some("https://www.rust-lang.org".to_string()))]
    #[test_case("ftp://files" => None)]
    #[test_case("see www.x.com" => None)]
    fn test_url_detection(selected: &str) -> Option<String> {
        url_from_selection(selected)
    }
}
