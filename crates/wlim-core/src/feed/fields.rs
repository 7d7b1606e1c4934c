//! Tolerant field extraction over the compositor's JSON-ish geometry feed.
//!
//! None of these functions fail: a missing key, a wrong type or a truncated
//! record yields the caller's default. The feed is treated as best effort.

/// Return the text directly after `"key":`, if the key occurs.
fn value_after<'a>(blob: &'a str, key: &str) -> Option<&'a str> {
    let pattern = format!("\"{}\":", key);
    blob.find(&pattern)
        .map(|idx| blob[idx + pattern.len()..].trim_start_matches([' ', '\t']))
}

/// Parse a leading integer (optional sign, then digits), ignoring anything after it.
fn parse_leading_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Read an integer field, falling back to `default` when absent or unparseable.
pub fn int_field(blob: &str, key: &str, default: i32) -> i32 {
    value_after(blob, key)
        .and_then(parse_leading_int)
        .unwrap_or(default)
}

/// Read a quoted string field, keeping at most `max_chars` characters.
///
/// `\"`, `\\`, `\/`, `\n` and `\t` are unescaped; any other escaped character
/// is passed through literally. Returns an empty string when the key is
/// absent or its value is not a string.
pub fn str_field(blob: &str, key: &str, max_chars: usize) -> String {
    let mut out = String::new();
    let Some(rest) = value_after(blob, key) else {
        return out;
    };
    let Some(body) = rest.strip_prefix('"') else {
        return out;
    };

    let mut chars = body.chars();
    let mut kept = 0;
    while kept < max_chars {
        let Some(c) = chars.next() else { break };
        let decoded = match c {
            '"' => break,
            '\\' => match chars.next() {
                Some('n') => '\n',
                Some('t') => '\t',
                Some(other) => other,
                // Trailing backslash: keep it, nothing follows
                None => '\\',
            },
            other => other,
        };
        out.push(decoded);
        kept += 1;
    }
    out
}

/// Read a two-element integer array such as `"at": [120, 45]`.
///
/// A missing key yields `(0, 0)`; a missing or unparseable element yields 0
/// in its position.
pub fn int_pair_field(blob: &str, key: &str) -> (i32, i32) {
    let Some(rest) = value_after(blob, key) else {
        return (0, 0);
    };
    let Some(open) = rest.find('[') else {
        return (0, 0);
    };

    let array = &rest[open + 1..];
    let array = match array.find(']') {
        Some(close) => &array[..close],
        None => array,
    };

    let first = parse_leading_int(array).unwrap_or(0);
    let second = array
        .find(',')
        .and_then(|comma| parse_leading_int(&array[comma + 1..]))
        .unwrap_or(0);
    (first, second)
}

/// Byte range of the first brace-delimited object at or after `start`.
fn block_range(text: &str, start: usize) -> Option<(usize, usize)> {
    let open = start + text.get(start..)?.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[open..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if *byte == b'\\' {
                escaped = true;
            } else if *byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some((open, open + offset + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Return the first brace-delimited object starting at or after `start`,
/// including both braces.
///
/// Braces inside quoted strings are ignored, as are escaped characters
/// inside strings. Returns `None` when there is no `{` or it is never closed.
pub fn block_at(text: &str, start: usize) -> Option<&str> {
    block_range(text, start).map(|(open, end)| &text[open..end])
}

/// Iterator over successive top-level objects of a feed, e.g. each entry of
/// a JSON array of windows. Stops at the first unterminated object.
pub struct Blocks<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (open, end) = block_range(self.text, self.position)?;
        self.position = end;
        Some(&self.text[open..end])
    }
}

pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks { text, position: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT: &str = r#"{
        "address": "0x55d0c2e0",
        "at": [1280, 45],
        "size": [1270, 1380],
        "workspace": {"id": 2, "name": "2"},
        "title": "Inbox \"work\" é a\/b\tc \q",
        "pid": 4242
    }"#;

    #[test]
    fn test_int_field_present() {
        assert_eq!(int_field(CLIENT, "pid", -1), 4242);
        assert_eq!(int_field(r#"{"x":-200}"#, "x", 0), -200);
    }

    #[test]
    fn test_int_field_missing_uses_default() {
        assert_eq!(int_field(CLIENT, "missing", -1), -1);
    }

    #[test]
    fn test_int_field_unparseable_uses_default() {
        assert_eq!(int_field(r#"{"pid":"abc"}"#, "pid", 7), 7);
        assert_eq!(int_field(r#"{"pid":}"#, "pid", 7), 7);
        assert_eq!(int_field(r#"{"pid":99999999999}"#, "pid", 7), 7);
    }

    #[test]
    fn test_str_field_unescapes() {
        let title = str_field(CLIENT, "title", 255);
        // \q is not a recognized escape, so 'q' passes through
        assert_eq!(title, "Inbox \"work\" é a/b\tc q");
    }

    #[test]
    fn test_str_field_newline_and_backslash() {
        assert_eq!(str_field(r#"{"t":"a\nb\\c"}"#, "t", 255), "a\nb\\c");
    }

    #[test]
    fn test_str_field_bounded() {
        assert_eq!(str_field(r#"{"t":"abcdef"}"#, "t", 3), "abc");
    }

    #[test]
    fn test_str_field_non_string_is_empty() {
        assert_eq!(str_field(r#"{"t": 12}"#, "t", 255), "");
        assert_eq!(str_field(r#"{"u":"x"}"#, "t", 255), "");
    }

    #[test]
    fn test_int_pair_field() {
        assert_eq!(int_pair_field(CLIENT, "at"), (1280, 45));
        assert_eq!(int_pair_field(CLIENT, "size"), (1270, 1380));
    }

    #[test]
    fn test_int_pair_field_missing() {
        assert_eq!(int_pair_field(CLIENT, "origin"), (0, 0));
        assert_eq!(int_pair_field(r#"{"at": 5}"#, "at"), (0, 0));
    }

    #[test]
    fn test_int_pair_field_single_element() {
        assert_eq!(int_pair_field(r#"{"at":[7], "b":[1,2]}"#, "at"), (7, 0));
    }

    #[test]
    fn test_block_at_nested() {
        let text = r#"[{"a":{"b":1}},{"c":2}]"#;
        assert_eq!(block_at(text, 0), Some(r#"{"a":{"b":1}}"#));
        assert_eq!(block_at(text, 2), Some(r#"{"b":1}"#));
    }

    #[test]
    fn test_block_at_ignores_braces_in_strings() {
        let text = r#"{"title":"a } b { \" }"} tail"#;
        assert_eq!(block_at(text, 0), Some(r#"{"title":"a } b { \" }"}"#));
    }

    #[test]
    fn test_block_at_unterminated() {
        assert_eq!(block_at(r#"{"a":{"b":1}"#, 0), None);
        assert_eq!(block_at("no braces here", 0), None);
        assert_eq!(block_at("{}", 10), None);
    }

    #[test]
    fn test_blocks_iterates_top_level() {
        let text = r#"[{"pid":1,"w":{"id":9}}, {"pid":2}, {"pid":3"#;
        let pids: Vec<i32> = blocks(text).map(|b| int_field(b, "pid", -1)).collect();
        assert_eq!(pids, vec![1, 2]);
    }
}
