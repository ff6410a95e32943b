//! Bounded search for a JSON array embedded in model output.
//!
//! Models asked for "a bare JSON array" often wrap it in prose or a code
//! fence. [`find_array_span`] returns the first `[`..`]` span whose brackets
//! balance, ignoring brackets that appear inside JSON string literals.

/// Return the first balanced array span in `text`, or `None`.
pub fn find_array_span(text: &str) -> Option<&str> {
    array_spans(text).next()
}

/// Iterate over balanced array spans, left to right.
///
/// Each candidate starts at a `[` that lies after the end of the previous
/// candidate's opening bracket, so nested arrays are also offered if the
/// enclosing span does not parse.
pub fn array_spans(text: &str) -> ArraySpans<'_> {
    ArraySpans { text, cursor: 0 }
}

/// Iterator returned by [`array_spans`].
pub struct ArraySpans<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for ArraySpans<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.text.len() {
            let offset = self.text[self.cursor..].find('[')?;
            let start = self.cursor + offset;
            self.cursor = start + 1;

            if let Some(end) = balanced_end(self.text, start) {
                return Some(&self.text[start..=end]);
            }
        }
        None
    }
}

/// Byte index of the `]` closing the `[` at `start`, if the brackets balance.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, byte) in text[start..].bytes().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        assert_eq!(find_array_span(r#"[{"a":1}]"#), Some(r#"[{"a":1}]"#));
    }

    #[test]
    fn test_array_inside_code_fence() {
        let text = "```json\n[{\"front\":\"Q\",\"back\":\"A\"}]\n```";
        assert_eq!(find_array_span(text), Some(r#"[{"front":"Q","back":"A"}]"#));
    }

    #[test]
    fn test_array_surrounded_by_prose() {
        let text = "Here are your cards: [1, 2, 3] Enjoy!";
        assert_eq!(find_array_span(text), Some("[1, 2, 3]"));
    }

    #[test]
    fn test_nested_arrays_return_outer_span() {
        let text = r#"x [{"options":["a","b"]},{"options":[]}] y"#;
        assert_eq!(
            find_array_span(text),
            Some(r#"[{"options":["a","b"]},{"options":[]}]"#)
        );
    }

    #[test]
    fn test_brackets_inside_strings_are_ignored() {
        let text = r#"[{"front":"What is ] here?","back":"a [bracket"}] trailing"#;
        assert_eq!(
            find_array_span(text),
            Some(r#"[{"front":"What is ] here?","back":"a [bracket"}]"#)
        );
    }

    #[test]
    fn test_escaped_quotes_inside_strings() {
        let text = r#"[{"front":"say \"]\" now","back":"ok"}]"#;
        assert_eq!(find_array_span(text), Some(text));
    }

    #[test]
    fn test_no_array() {
        assert_eq!(find_array_span("Just some prose, no brackets."), None);
        assert_eq!(find_array_span(""), None);
    }

    #[test]
    fn test_truncated_array() {
        assert_eq!(find_array_span(r#"[{"front":"Q","back":"A"},{"front":"#), None);
    }

    #[test]
    fn test_unbalanced_prefix_falls_through_to_later_span() {
        let text = r#"[ broken start then [{"a":1}]"#;
        let spans: Vec<_> = array_spans(text).collect();
        assert_eq!(spans, vec![r#"[{"a":1}]"#]);
    }

    #[test]
    fn test_multiple_candidates_in_order() {
        let text = r#"See [note] then [{"a":1}]"#;
        let spans: Vec<_> = array_spans(text).collect();
        assert_eq!(spans, vec!["[note]", r#"[{"a":1}]"#]);
    }

    #[test]
    fn test_multibyte_text_around_array() {
        let text = "Voilà les cartes — [{\"front\":\"été\",\"back\":\"summer\"}] ✓";
        assert_eq!(
            find_array_span(text),
            Some("[{\"front\":\"été\",\"back\":\"summer\"}]")
        );
    }
}
