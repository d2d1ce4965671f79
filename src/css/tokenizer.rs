//! logos-based tokenizer for CSS property values.
//!
//! Only values are tokenized, never selectors or rule blocks. Token priority in
//! logos is decided by longest match first, then declaration order, so:
//! - `20px` matches [`Token::Dimension`], not `Number` + `Ident`
//! - `50%` matches [`Token::Percentage`], not `Number` + `%`
//! - `#ff00aa` matches [`Token::HexColor`]

use logos::Logos;

/// CSS value token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// `!important` flag.
    #[token("!important")]
    Important,

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Percentage: `50%`, `-12.5%`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?%")]
    Percentage,

    /// Number with a unit suffix: `20px`, `1.5em`, `10pt`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?[a-zA-Z]+")]
    Dimension,

    /// Unitless number: `0`, `-5`, `3.14`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Keyword or font name: `auto`, `bold`, `sans-serif`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `,`
    #[token(",")]
    Comma,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,
}

/// Tokenize a value that must consist of exactly one token.
///
/// Returns `None` when the input is empty, holds several tokens, or contains
/// anything the lexer rejects.
pub fn single_token(input: &str) -> Option<(Token, &str)> {
    let mut lexer = Token::lexer(input).spanned();
    let (first, span) = lexer.next()?;
    let token = first.ok()?;
    if lexer.next().is_some() {
        return None;
    }
    Some((token, &input[span]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<(Token, String)> {
        Token::lexer(input)
            .spanned()
            .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
            .collect()
    }

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_numbers() {
        let result = tokenize("10 -5 3.14 0");
        assert_eq!(result[0], (Token::Number, "10".into()));
        assert_eq!(result[1], (Token::Number, "-5".into()));
        assert_eq!(result[2], (Token::Number, "3.14".into()));
        assert_eq!(result[3], (Token::Number, "0".into()));
    }

    #[test]
    fn test_dimensions() {
        let result = tokenize("20px 1.5em 10pt");
        assert_eq!(result[0], (Token::Dimension, "20px".into()));
        assert_eq!(result[1], (Token::Dimension, "1.5em".into()));
        assert_eq!(result[2], (Token::Dimension, "10pt".into()));
    }

    #[test]
    fn test_percentages() {
        let result = tokenize("50% -12.5%");
        assert_eq!(result[0], (Token::Percentage, "50%".into()));
        assert_eq!(result[1], (Token::Percentage, "-12.5%".into()));
    }

    #[test]
    fn test_shorthand_value() {
        assert_eq!(
            tokens("12px 24px"),
            vec![Token::Dimension, Token::Dimension]
        );
        assert_eq!(
            tokens("1px solid #e0e0e0"),
            vec![Token::Dimension, Token::Ident, Token::HexColor]
        );
    }

    #[test]
    fn test_font_stack() {
        assert_eq!(
            tokens("Arial, sans-serif"),
            vec![Token::Ident, Token::Comma, Token::Ident]
        );
    }

    #[test]
    fn test_important() {
        assert_eq!(tokens("0 !important"), vec![Token::Number, Token::Important]);
    }

    #[test]
    fn test_function_call() {
        // A lone `-` does not lex and is skipped.
        assert_eq!(
            tokens("calc(100% - 20px)"),
            vec![
                Token::Ident,
                Token::ParenOpen,
                Token::Percentage,
                Token::Dimension,
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_single_token() {
        assert_eq!(single_token("600px"), Some((Token::Dimension, "600px")));
        assert_eq!(single_token(" auto "), Some((Token::Ident, "auto")));
        assert_eq!(single_token("12px 24px"), None);
        assert_eq!(single_token(""), None);
    }
}
