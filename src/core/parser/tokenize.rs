/// Splits a line on runs of whitespace.
///
/// A blank line produces a single empty token rather than no tokens, so the
/// first token can always be taken as the command name.
pub fn tokenize(line: &str) -> Vec<String> {
    let tokens: Vec<String> = line.split_whitespace().map(String::from).collect();
    if tokens.is_empty() {
        vec![String::new()]
    } else {
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_runs() {
        assert_eq!(tokenize("cat  a\tb   c"), vec!["cat", "a", "b", "c"]);
    }

    #[test]
    fn test_blank_line_yields_one_empty_token() {
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("   \t "), vec![""]);
    }

    #[test]
    fn test_redirect_operators_are_plain_tokens() {
        assert_eq!(tokenize("cat a >> b"), vec!["cat", "a", ">>", "b"]);
    }
}
