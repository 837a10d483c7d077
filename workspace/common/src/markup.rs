//! Minimal inline markup used by assistant replies: `**bold**` spans and line breaks.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

/// Splits `text` into lines, each a run of plain and bold spans.
/// An unterminated `**` is kept as literal text.
pub fn parse(text: &str) -> Vec<Vec<Span>> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        if open > 0 {
            spans.push(Span::Plain(rest[..open].to_string()));
        }
        spans.push(Span::Bold(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        spans.push(Span::Plain(rest.to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_spans() {
        assert_eq!(
            parse("Hey! I'm **Stash AI** and **you** rock"),
            vec![vec![
                Span::Plain("Hey! I'm ".to_string()),
                Span::Bold("Stash AI".to_string()),
                Span::Plain(" and ".to_string()),
                Span::Bold("you".to_string()),
                Span::Plain(" rock".to_string()),
            ]]
        );
    }

    #[test]
    fn test_lines_and_empty_lines() {
        let lines = parse("one\n\n**two**");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2], vec![Span::Bold("two".to_string())]);
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        assert_eq!(parse("5 ** 2"), vec![vec![Span::Plain("5 ** 2".to_string())]]);
    }
}
