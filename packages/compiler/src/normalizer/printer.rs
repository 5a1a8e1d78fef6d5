//! Canonical printing of a lexed value: spacing, numbers and units

use super::lexer::{lex, SpannedToken, Token};
use crate::error::NormalizationError;
use crate::options::CompilerOptions;
use crate::properties::keeps_zero_units;

const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "ch", "cap", "ic", "lh", "rlh", "vw", "vh", "vi", "vb", "vmin",
    "vmax", "svw", "svh", "lvw", "lvh", "dvw", "dvh", "cm", "mm", "q", "in", "pt", "pc", "cqw",
    "cqh", "cqi", "cqb", "cqmin", "cqmax",
];

const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];

const OTHER_UNITS: &[&str] = &["%", "s", "ms", "fr", "hz", "khz", "dpi", "dpcm", "dppx", "x"];

const MATH_FUNCTIONS: &[&str] = &["calc", "min", "max", "clamp"];

/// Round to four decimals and print without a leading zero
/// (`0.5` → `.5`, `-0.25` → `-.25`, `100 / 3` → `33.3333`)
pub fn format_number(value: f64) -> String {
    let rounded = round(value);
    let text = if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    };

    if let Some(rest) = text.strip_prefix("0.") {
        format!(".{}", rest)
    } else if let Some(rest) = text.strip_prefix("-0.") {
        format!("-.{}", rest)
    } else {
        text
    }
}

fn round(value: f64) -> f64 {
    let scaled = value * 10000.0;
    // Magnitudes this large carry no fractional digits to round away
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 10000.0
}

/// Split `1.5e3px` into `1.5e3` and `px`; an `e` only starts an exponent
/// when digits follow it
fn split_dimension(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut index = 0;
    while index < bytes.len() && (bytes[index].is_ascii_digit() || matches!(bytes[index], b'.' | b'+' | b'-')) {
        index += 1;
    }

    if index < bytes.len() && matches!(bytes[index], b'e' | b'E') {
        let mut exponent = index + 1;
        if exponent < bytes.len() && matches!(bytes[exponent], b'+' | b'-') {
            exponent += 1;
        }
        if exponent < bytes.len() && bytes[exponent].is_ascii_digit() {
            while exponent < bytes.len() && bytes[exponent].is_ascii_digit() {
                exponent += 1;
            }
            index = exponent;
        }
    }

    text.split_at(index)
}

fn is_math_function(name: &str) -> bool {
    let name = name.trim_end_matches('(').to_ascii_lowercase();
    let name = name
        .strip_prefix("-webkit-")
        .or_else(|| name.strip_prefix("-moz-"))
        .unwrap_or(&name);
    MATH_FUNCTIONS.contains(&name)
}

pub(crate) struct Printer<'a> {
    property: &'a str,
    source: &'a str,
    options: &'a CompilerOptions,
}

impl<'a> Printer<'a> {
    pub fn new(property: &'a str, source: &'a str, options: &'a CompilerOptions) -> Self {
        Self {
            property,
            source,
            options,
        }
    }

    pub fn print(&self) -> Result<String, NormalizationError> {
        let tokens = lex(self.source)
            .map_err(|pos| NormalizationError::unexpected_input(self.property, self.source, pos))?;

        let mut out = String::with_capacity(self.source.len());
        // One entry per open parenthesis: whether it is a math context
        let mut frames: Vec<bool> = Vec::new();
        let mut prev: Option<Token<'_>> = None;
        let mut prev_end = 0;

        for SpannedToken { token, start, end } in tokens {
            let spaced = start > prev_end;
            prev_end = end;
            let in_math = frames.last().copied().unwrap_or(false);

            if let Some(prev) = &prev {
                out.push_str(separator(prev, &token, spaced, in_math));
            }

            match token {
                Token::Function(name) => {
                    frames.push(is_math_function(name));
                    out.push_str(&name.to_ascii_lowercase());
                }
                Token::LParen => {
                    frames.push(in_math);
                    out.push('(');
                }
                Token::RParen => {
                    if frames.pop().is_none() {
                        return Err(NormalizationError::unbalanced_parenthesis(
                            self.property,
                            self.source,
                        ));
                    }
                    out.push(')');
                }
                Token::Number(text) => out.push_str(&format_number(self.parse_number(text)?)),
                Token::Dimension(text) => {
                    let inside_math = frames.iter().any(|math| *math);
                    out.push_str(&self.dimension(text, inside_math)?);
                }
                Token::SingleQuoted(text) => out.push_str(&requote(text)),
                Token::Important => out.push_str("!important"),
                Token::Ident(text)
                | Token::Hash(text)
                | Token::Url(text)
                | Token::DoubleQuoted(text)
                | Token::Delim(text) => out.push_str(text),
                Token::Comma => out.push(','),
                Token::Slash => out.push('/'),
                Token::Plus => out.push('+'),
                Token::Minus => out.push('-'),
                Token::Star => out.push('*'),
                Token::Colon => out.push(':'),
            }

            prev = Some(token);
        }

        if !frames.is_empty() {
            return Err(NormalizationError::unclosed_function(self.property, self.source));
        }

        Ok(out)
    }

    fn parse_number(&self, text: &str) -> Result<f64, NormalizationError> {
        let value = text
            .parse::<f64>()
            .map_err(|_| NormalizationError::expected_number(self.property, self.source))?;
        if !value.is_finite() {
            return Err(NormalizationError::NonFiniteNumber {
                property: self.property.to_string(),
            });
        }
        Ok(value)
    }

    fn dimension(&self, text: &str, inside_math: bool) -> Result<String, NormalizationError> {
        let (number, unit) = split_dimension(text);
        let value = round(self.parse_number(number)?);
        let unit = unit.to_ascii_lowercase();

        if ANGLE_UNITS.contains(&unit.as_str()) {
            if value == 0.0 {
                return Ok("0deg".to_string());
            }
            return Ok(format!("{}{}", format_number(value), unit));
        }

        match unit.as_str() {
            "ms" if value == 0.0 => return Ok("0s".to_string()),
            "ms" if value.abs() < 10.0 => return Ok(format!("{}ms", format_number(value))),
            "ms" => return Ok(format!("{}s", format_number(value / 1000.0))),
            "s" if value == 0.0 => return Ok("0s".to_string()),
            _ => {}
        }

        if !LENGTH_UNITS.contains(&unit.as_str()) && !OTHER_UNITS.contains(&unit.as_str()) {
            return Err(NormalizationError::unknown_unit(self.property, self.source, &unit));
        }

        let (value, unit) = if unit == "px"
            && self.property == "font-size"
            && self.options.legacy_font_size_px_to_rem
        {
            (round(value / self.options.rem_base), "rem".to_string())
        } else {
            (value, unit)
        };

        if value == 0.0
            && LENGTH_UNITS.contains(&unit.as_str())
            && !inside_math
            && !keeps_zero_units(self.property)
        {
            return Ok("0".to_string());
        }

        Ok(format!("{}{}", format_number(value), unit))
    }
}

fn separator(prev: &Token<'_>, next: &Token<'_>, spaced: bool, in_math: bool) -> &'static str {
    if prev.opens()
        || matches!(prev, Token::Comma)
        || matches!(next, Token::RParen | Token::Comma | Token::Important)
    {
        return "";
    }
    if in_math && (prev.is_operator() || next.is_operator()) {
        return " ";
    }
    if matches!(prev, Token::Slash) || matches!(next, Token::Slash) {
        return "";
    }
    if spaced {
        " "
    } else {
        ""
    }
}

/// Rewrite a single-quoted string with double quotes
fn requote(text: &str) -> String {
    let inner = &text[1..text.len() - 1];
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');

    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }

    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print(property: &str, source: &str) -> String {
        Printer::new(property, source, &CompilerOptions::default())
            .print()
            .unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.5), ".5");
        assert_eq!(format_number(-0.25), "-.25");
        assert_eq!(format_number(100.0 / 3.0), "33.3333");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(1e305), "1".to_string() + &"0".repeat(305));
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(print("width", "1e3px"), "1000px");
        assert_eq!(print("width", "2.5E-1em"), ".25em");
        assert_eq!(print("opacity", "5e-1"), ".5");
        assert_eq!(print("width", "1em"), "1em");
        assert_eq!(split_dimension("1e3px"), ("1e3", "px"));
        assert_eq!(split_dimension("-1.5e+2%"), ("-1.5e+2", "%"));
        assert_eq!(split_dimension("3ex"), ("3", "ex"));
    }

    #[test]
    fn test_overflowing_numbers_rejected() {
        let options = CompilerOptions::default();
        let err = Printer::new("height", "1e400px", &options).print().unwrap_err();
        assert!(matches!(err, NormalizationError::NonFiniteNumber { .. }));

        let printed = print("height", "1e305px");
        assert!(printed.ends_with("0px"));
        assert!(!printed.contains("inf"));
    }

    #[test]
    fn test_separators() {
        assert_eq!(print("transform", "rotate(10deg)   translate3d( 0 , 0 , 0 )"), "rotate(10deg) translate3d(0,0,0)");
        assert_eq!(print("font", "16px / 1.5 serif"), "16px/1.5 serif");
        assert_eq!(print("width", "calc( 100%/3 - 2*1em )"), "calc(100% / 3 - 2 * 1em)");
        assert_eq!(print("color", "red  !important"), "red!important");
    }

    #[test]
    fn test_math_context_keeps_zero_units() {
        assert_eq!(print("width", "calc(0px + 1em)"), "calc(0px + 1em)");
        assert_eq!(print("width", "max(0px, min(1em, 0px))"), "max(0px,min(1em,0px))");
        assert_eq!(print("transform", "translate(0px, 0%)"), "translate(0,0%)");
    }

    #[test]
    fn test_requote() {
        assert_eq!(requote("''"), "\"\"");
        assert_eq!(requote(r"'it\'s'"), "\"it's\"");
        assert_eq!(requote(r#"'say "hi"'"#), r#""say \"hi\"""#);
    }

    #[test]
    fn test_unbalanced_parentheses() {
        let options = CompilerOptions::default();
        let err = Printer::new("width", "calc(1px + 2px", &options).print().unwrap_err();
        assert!(matches!(err, NormalizationError::UnclosedFunction { .. }));

        let err = Printer::new("width", "1px)", &options).print().unwrap_err();
        assert!(matches!(err, NormalizationError::UnbalancedParenthesis { .. }));
    }
}
