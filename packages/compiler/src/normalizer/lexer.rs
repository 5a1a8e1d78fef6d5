//! Value lexer using logos
//!
//! Whitespace is skipped; the printer recovers it from the gaps between
//! token spans.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    #[regex(r"[+-]?([0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    Number(&'src str),

    #[regex(r"[+-]?([0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?([a-zA-Z]+|%)", |lex| lex.slice())]
    Dimension(&'src str),

    #[regex(r"#[a-zA-Z0-9_-]+", |lex| lex.slice())]
    Hash(&'src str),

    /// Function name including the opening parenthesis
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*\(", |lex| lex.slice())]
    Function(&'src str),

    #[regex(r#"url\([^)"']*\)"#, |lex| lex.slice())]
    Url(&'src str),

    #[regex(r"-?-?[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice())]
    DoubleQuoted(&'src str),

    #[regex(r"'([^'\\]|\\.)*'", |lex| lex.slice())]
    SingleQuoted(&'src str),

    #[regex(r"![ \t]*important")]
    Important,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("/")]
    Slash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token(":")]
    Colon,

    #[regex(r"[=<>.?&|^~%]", |lex| lex.slice())]
    Delim(&'src str),
}

impl Token<'_> {
    /// Arithmetic operators that get one space on each side inside math
    /// functions
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Star | Token::Slash)
    }

    pub fn opens(&self) -> bool {
        matches!(self, Token::Function(_) | Token::LParen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpannedToken<'src> {
    pub token: Token<'src>,
    pub start: usize,
    pub end: usize,
}

/// Lex a value; `Err` carries the byte offset of the first unrecognised
/// input
pub fn lex(source: &str) -> Result<Vec<SpannedToken<'_>>, usize> {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok(SpannedToken {
                token,
                start: span.start,
                end: span.end,
            }),
            Err(_) => Err(span.start),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token<'_>> {
        lex(source).unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_lex_dimensions_and_numbers() {
        assert_eq!(
            tokens("16px -1.5rem .5 100%"),
            vec![
                Token::Dimension("16px"),
                Token::Dimension("-1.5rem"),
                Token::Number(".5"),
                Token::Dimension("100%"),
            ]
        );
    }

    #[test]
    fn test_lex_functions() {
        assert_eq!(
            tokens("translate3d( 0 , 0 )"),
            vec![
                Token::Function("translate3d("),
                Token::Number("0"),
                Token::Comma,
                Token::Number("0"),
                Token::RParen,
            ]
        );
        assert_eq!(tokens("url(a.png)"), vec![Token::Url("url(a.png)")]);
    }

    #[test]
    fn test_lex_operators_and_idents() {
        assert_eq!(
            tokens("100% - -webkit-box !important"),
            vec![
                Token::Dimension("100%"),
                Token::Minus,
                Token::Ident("-webkit-box"),
                Token::Important,
            ]
        );
        assert_eq!(tokens("var(--x)")[1], Token::Ident("--x"));
    }

    #[test]
    fn test_lex_strings() {
        assert_eq!(tokens(r#""a b""#), vec![Token::DoubleQuoted(r#""a b""#)]);
        assert_eq!(tokens("''"), vec![Token::SingleQuoted("''")]);
        assert!(lex("'unterminated").is_err());
    }

    #[test]
    fn test_spans_expose_whitespace() {
        let spanned = lex("a  b").unwrap();
        assert_eq!(spanned[0].end, 1);
        assert_eq!(spanned[1].start, 3);
    }
}
