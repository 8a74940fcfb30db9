//! Whitespace tokenizer for address lists.

/// Split `input` into address tokens.
///
/// Any run of Unicode whitespace separates tokens; leading and trailing
/// whitespace is dropped and no token is ever empty. The iterator is lazy and
/// yields tokens in input order, borrowing from `input`.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> + '_
{
    input.split_whitespace()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_tokenize_collapses_whitespace_runs()
    {
        let tokens: Vec<_> = tokenize("  0x1  \t\n 0x2\r\n\n0x3   ").collect();
        assert_eq!(tokens, vec!["0x1", "0x2", "0x3"]);
    }

    #[test]
    fn test_tokenize_empty_and_blank_input()
    {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \t\r\n ").count(), 0);
    }

    #[test]
    fn test_tokenize_unicode_whitespace()
    {
        // NO-BREAK SPACE and IDEOGRAPHIC SPACE are whitespace too.
        let tokens: Vec<_> = tokenize("0x1\u{a0}0x2\u{3000}0x3").collect();
        assert_eq!(tokens, vec!["0x1", "0x2", "0x3"]);
    }

    #[test]
    fn test_tokenize_keeps_punctuation_inside_tokens()
    {
        let tokens: Vec<_> = tokenize("0x10, [0x20]").collect();
        assert_eq!(tokens, vec!["0x10,", "[0x20]"]);
    }
}
