#![forbid(unsafe_code)]

//! Line-oriented event source
//!
//! The scanner makes a single pass over a file's text and produces the two
//! independent streams the checks consume: the physical lines, and the
//! ordered events that end with `file_end`.

use crate::rules::Event;

/// Output of scanning one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Physical lines, each keeping its `\n` terminator if it had one
    pub lines: Vec<String>,
    /// Events in emission order; the last one is always `file_end`
    pub events: Vec<Event>,
}

/// Splits text into lines and events
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanner;

impl LineScanner {
    pub fn new() -> Self {
        LineScanner
    }

    pub fn scan(&self, content: &str) -> ScannedFile {
        let mut lines = Vec::new();
        let mut events = Vec::new();
        let mut indent = 0usize;

        for (index, line) in content.split_inclusive('\n').enumerate() {
            let line_number = (index + 1) as u32;
            let body = line.strip_suffix('\n').unwrap_or(line);
            let body = body.strip_suffix('\r').unwrap_or(body);

            if !body.trim().is_empty() {
                let current = leading_spaces(body);
                if current != indent {
                    events.push(Event::indent_change(line_number, indent, current));
                    indent = current;
                }
            }

            if line.ends_with('\n') {
                let column = body.chars().count() as u32 + 1;
                events.push(Event::newline(line_number, column));
            }

            lines.push(line.to_string());
        }

        events.push(Event::file_end(trailing_newline_count(content)));

        ScannedFile { lines, events }
    }
}

fn leading_spaces(text: &str) -> usize {
    text.chars().take_while(|c| *c == ' ').count()
}

/// Number of consecutive line terminators (`\n` or `\r\n`) ending the text
pub fn trailing_newline_count(content: &str) -> usize {
    let mut rest = content;
    let mut count = 0;
    while let Some(stripped) = rest.strip_suffix('\n') {
        rest = stripped.strip_suffix('\r').unwrap_or(stripped);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Payload;
    use crate::types::EventKind;

    fn kinds(scanned: &ScannedFile) -> Vec<EventKind> {
        scanned.events.iter().map(|event| event.kind()).collect()
    }

    #[test]
    fn test_trailing_newline_count() {
        assert_eq!(trailing_newline_count(""), 0);
        assert_eq!(trailing_newline_count("foo"), 0);
        assert_eq!(trailing_newline_count("foo\n"), 1);
        assert_eq!(trailing_newline_count("foo\n\n\n"), 3);
        assert_eq!(trailing_newline_count("foo\r\n\r\n"), 2);
        assert_eq!(trailing_newline_count("\n"), 1);
        assert_eq!(trailing_newline_count("foo\n  \n"), 1);
    }

    #[test]
    fn test_empty_content() {
        let scanned = LineScanner::new().scan("");
        assert!(scanned.lines.is_empty());
        assert_eq!(scanned.events, vec![Event::file_end(0)]);
    }

    #[test]
    fn test_lines_keep_terminators() {
        let scanned = LineScanner::new().scan("a\nb\nc");
        assert_eq!(scanned.lines, vec!["a\n", "b\n", "c"]);
    }

    #[test]
    fn test_newline_events_carry_position() {
        let scanned = LineScanner::new().scan("ab\nxyz\n");
        assert_eq!(
            scanned.events,
            vec![
                Event::newline(1, 3),
                Event::newline(2, 4),
                Event::file_end(1),
            ]
        );
    }

    #[test]
    fn test_indent_changes() {
        let scanned = LineScanner::new().scan("def a\n  b\n\n  c\nend\n");
        assert_eq!(
            kinds(&scanned),
            vec![
                EventKind::Newline,
                EventKind::IndentChange,
                EventKind::Newline,
                EventKind::Newline,
                EventKind::Newline,
                EventKind::IndentChange,
                EventKind::Newline,
                EventKind::FileEnd,
            ]
        );

        let indents: Vec<&Payload> = scanned
            .events
            .iter()
            .filter(|event| event.kind() == EventKind::IndentChange)
            .map(|event| event.payload())
            .collect();
        assert_eq!(
            indents,
            vec![
                &Payload::Indent { line: 2, previous: 0, current: 2 },
                &Payload::Indent { line: 5, previous: 2, current: 0 },
            ]
        );
    }

    #[test]
    fn test_file_end_is_last() {
        let scanned = LineScanner::new().scan("x\n\n\n");
        assert_eq!(scanned.events.last(), Some(&Event::file_end(3)));
    }
}
