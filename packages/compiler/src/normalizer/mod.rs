//! Value normalizer
//!
//! Canonicalizes authored values so that CSS-equivalent input hashes to the
//! same class. Normalizing an already normalized value is a no-op.

pub mod lexer;
mod printer;

pub use printer::format_number;

use crate::error::NormalizationError;
use crate::input::{RawValue, Scalar};
use crate::options::CompilerOptions;
use crate::properties::{is_time_property, is_unitless, numeric_keywords, GLOBAL_KEYWORDS};
use lexer::{lex, Token};
use printer::Printer;

/// Separator between fallback values in the canonical declaration string
const VALUE_SEPARATOR: char = '\u{1e}';

/// Keywords `content` and `quotes` accept without quoting
const CONTENT_KEYWORDS: &[&str] = &[
    "none",
    "normal",
    "auto",
    "open-quote",
    "close-quote",
    "no-open-quote",
    "no-close-quote",
];

/// Canonical form of a property value; one entry per fallback value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedValue(Vec<String>);

impl NormalizedValue {
    pub fn single(value: impl Into<String>) -> Self {
        Self(vec![value.into()])
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn as_single(&self) -> Option<&str> {
        match self.0.as_slice() {
            [value] => Some(value.as_str()),
            _ => None,
        }
    }

    /// Declaration block body (`width:100%;width:fit-content`)
    pub fn declarations(&self, property: &str) -> String {
        self.0
            .iter()
            .map(|value| format!("{}:{}", property, value))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// String form used for hashing
    pub fn canonical(&self) -> String {
        let mut canonical = String::new();
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                canonical.push(VALUE_SEPARATOR);
            }
            canonical.push_str(value);
        }
        canonical
    }

    /// Feed back into [`normalize`], which must reproduce `self`
    pub fn to_raw(&self) -> RawValue {
        match self.as_single() {
            Some(value) => RawValue::from(value),
            None => RawValue::List(self.0.iter().cloned().map(Scalar::String).collect()),
        }
    }
}

/// Normalize with default options. `property` is the CSS property name.
pub fn normalize(property: &str, raw: &RawValue) -> Result<NormalizedValue, NormalizationError> {
    normalize_with_options(property, raw, &CompilerOptions::default())
}

pub fn normalize_with_options(
    property: &str,
    raw: &RawValue,
    options: &CompilerOptions,
) -> Result<NormalizedValue, NormalizationError> {
    raw.scalars()
        .iter()
        .map(|scalar| normalize_scalar(property, scalar, options))
        .collect::<Result<Vec<_>, _>>()
        .map(NormalizedValue)
}

pub fn normalize_scalar(
    property: &str,
    scalar: &Scalar,
    options: &CompilerOptions,
) -> Result<String, NormalizationError> {
    let source = match scalar {
        Scalar::Number(number) if !number.is_finite() => {
            return Err(NormalizationError::NonFiniteNumber {
                property: property.to_string(),
            });
        }
        Scalar::Number(number) if is_quoted_property(property) => quote_content(&format_number(*number)),
        Scalar::Number(number) if is_unitless(property) => return Ok(format_number(*number)),
        Scalar::Number(number) if is_time_property(property) => format!("{}ms", format_number(*number)),
        Scalar::Number(number) => format!("{}px", format_number(*number)),
        Scalar::String(text) if is_quoted_property(property) => quote_content(text),
        Scalar::String(text) => text.trim().to_string(),
    };

    if source.is_empty() {
        return Err(NormalizationError::EmptyValue {
            property: property.to_string(),
        });
    }

    let printed = Printer::new(property, &source, options).print()?;
    check_numeric(property, &printed)?;
    Ok(printed)
}

fn is_quoted_property(property: &str) -> bool {
    property == "content" || property == "quotes"
}

/// Wrap bare `content` strings in double quotes; quoted strings, keywords and
/// functions are left alone
fn quote_content(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "\"\"".to_string();
    }

    let is_keyword = CONTENT_KEYWORDS.contains(&trimmed) || GLOBAL_KEYWORDS.contains(&trimmed);
    if trimmed.starts_with('"') || trimmed.starts_with('\'') || is_keyword || starts_with_function(trimmed) {
        return trimmed.to_string();
    }

    format!("\"{}\"", trimmed.replace('\\', "\\\\").replace('"', "\\\""))
}

/// `attr(title)`, `counter(item) ". "`, `url(icon.svg)`
fn starts_with_function(text: &str) -> bool {
    matches!(
        lex(text).ok().and_then(|tokens| tokens.first().map(|spanned| spanned.token)),
        Some(Token::Function(_) | Token::Url(_))
    )
}

/// Numbers-only properties accept a bare number, one of their keywords, or
/// a function such as `var()` or `calc()`
fn check_numeric(property: &str, printed: &str) -> Result<(), NormalizationError> {
    let Some(keywords) = numeric_keywords(property) else {
        return Ok(());
    };

    let tokens = lex(printed)
        .map_err(|pos| NormalizationError::unexpected_input(property, printed, pos))?;
    let tokens: Vec<Token<'_>> = tokens
        .into_iter()
        .map(|spanned| spanned.token)
        .filter(|token| *token != Token::Important)
        .collect();

    let accepted = match tokens.as_slice() {
        [Token::Number(_)] => true,
        [Token::Ident(word)] => {
            let word = word.to_ascii_lowercase();
            keywords.contains(&word.as_str()) || GLOBAL_KEYWORDS.contains(&word.as_str())
        }
        [Token::Function(_), ..] => true,
        _ => false,
    };

    if accepted {
        Ok(())
    } else {
        Err(NormalizationError::expected_number(property, printed))
    }
}

/// Canonical keyframes step selector and its sort key (`from` → `0%`,
/// `to` → `100%`)
pub fn normalize_keyframe_selector(selector: &str) -> Result<(f64, String), NormalizationError> {
    let invalid = || NormalizationError::InvalidKeyframeSelector {
        selector: selector.to_string(),
    };

    let mut percentages = Vec::new();
    for part in selector.split(',') {
        let part = part.trim().to_ascii_lowercase();
        let percentage = match part.as_str() {
            "from" => 0.0,
            "to" => 100.0,
            other => other
                .strip_suffix('%')
                .and_then(|number| number.trim().parse::<f64>().ok())
                .filter(|value| (0.0..=100.0).contains(value))
                .ok_or_else(invalid)?,
        };
        percentages.push(percentage);
    }

    let sort_key = percentages.first().copied().ok_or_else(invalid)?;
    let text = percentages
        .iter()
        .map(|value| format!("{}%", format_number(*value)))
        .collect::<Vec<_>>()
        .join(",");
    Ok((sort_key, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(property: &str, value: impl Into<RawValue>) -> String {
        normalize(property, &value.into())
            .unwrap()
            .values()
            .join(";")
    }

    fn legacy(property: &str, value: impl Into<RawValue>) -> String {
        let options = CompilerOptions::default().with_legacy_font_size();
        normalize_with_options(property, &value.into(), &options)
            .unwrap()
            .values()
            .join(";")
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(
            norm("transform", "  rotate(10deg)  translate3d( 0 , 0 , 0 )  "),
            "rotate(10deg) translate3d(0,0,0)"
        );
        assert_eq!(norm("color", "rgba( 1, 222,  33 , 0.5)"), "rgba(1,222,33,.5)");
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(norm("margin", "0px"), "0");
        assert_eq!(norm("margin-left", "1px"), "1px");
        assert_eq!(norm("flex-basis", "0px"), "0px");
        assert_eq!(norm("transform", "0rad"), "0deg");
        assert_eq!(norm("transform", "0turn"), "0deg");
        assert_eq!(norm("transform", "0grad"), "0deg");
    }

    #[test]
    fn test_timings() {
        assert_eq!(norm("transition-duration", "500ms"), ".5s");
        assert_eq!(norm("transition-duration", "1234ms"), "1.234s");
        assert_eq!(norm("transition-duration", "10ms"), ".01s");
        assert_eq!(norm("transition-duration", "1ms"), "1ms");
        assert_eq!(norm("transition-duration", "0ms"), "0s");
        assert_eq!(norm("transition-duration", "0.01s"), ".01s");
        assert_eq!(norm("transition-duration", 500), ".5s");
    }

    #[test]
    fn test_calc_keeps_operator_spaces() {
        assert_eq!(
            norm("width", "calc((100% + 3% -   100px) / 7)"),
            "calc((100% + 3% - 100px) / 7)"
        );
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(
            norm("transition-timing-function", "cubic-bezier(0.08,.52,.52,1)"),
            "cubic-bezier(.08,.52,.52,1)"
        );
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(norm("height", 500), "500px");
        assert_eq!(norm("margin", 10), "10px");
        assert_eq!(norm("font-weight", 500), "500");
        assert_eq!(norm("line-height", 1.5), "1.5");
        assert_eq!(norm("opacity", 0.5), ".5");
        assert_eq!(norm("height", 100.0 / 3.0), "33.3333px");
        assert_eq!(norm("--gap", 4), "4");
    }

    #[test]
    fn test_content_quoting() {
        assert_eq!(norm("content", ""), "\"\"");
        assert_eq!(norm("content", "next"), "\"next\"");
        assert_eq!(norm("content", "\"prev\""), "\"prev\"");
        assert_eq!(norm("content", "attr(title)"), "attr(title)");
        assert_eq!(norm("content", "none"), "none");
        assert_eq!(norm("content", "(note)"), "\"(note)\"");
        assert_eq!(norm("content", "see (1)"), "\"see (1)\"");
        assert_eq!(norm("content", "counter(item) \". \""), "counter(item) \". \"");
        assert_eq!(norm("content", "url(icon.svg)"), "url(icon.svg)");
        assert_eq!(norm("quotes", "''"), "\"\"");
    }

    #[test]
    fn test_legacy_font_size_to_rem() {
        assert_eq!(legacy("font-size", "24px"), "1.5rem");
        assert_eq!(legacy("font-size", 18), "1.125rem");
        assert_eq!(legacy("font-size", "1.25rem"), "1.25rem");
        assert_eq!(legacy("font-size", "inherit"), "inherit");
        assert_eq!(legacy("font-size", "calc(100% - 24px)"), "calc(100% - 1.5rem)");
        assert_eq!(norm("font-size", "24px"), "24px");
    }

    #[test]
    fn test_important() {
        assert_eq!(norm("color", "red !important"), "red!important");
    }

    #[test]
    fn test_fallback_lists() {
        let value = normalize("width", &RawValue::from(vec!["100%", " fit-content "])).unwrap();
        assert_eq!(value.values(), ["100%", "fit-content"]);
        assert_eq!(value.declarations("width"), "width:100%;width:fit-content");
    }

    #[test]
    fn test_idempotent() {
        let cases: Vec<(&str, RawValue)> = vec![
            ("transform", "  rotate(10deg)  translate3d( 0 , 0 , 0 )  ".into()),
            ("width", "calc((100% + 3% -   100px) / 7)".into()),
            ("transition-duration", "1234ms".into()),
            ("transition-duration", "9.99999ms".into()),
            ("content", "next".into()),
            ("quotes", "'it\\'s'".into()),
            ("height", (100.0 / 3.0).into()),
            ("color", "red   !important".into()),
            ("font", "italic 16px / 1.5 'Helvetica Neue', serif".into()),
            ("width", vec!["100%", "fit-content"].into()),
        ];

        for (property, raw) in cases {
            let once = normalize(property, &raw).unwrap();
            let twice = normalize(property, &once.to_raw()).unwrap();
            assert_eq!(once, twice, "{} not idempotent", property);
        }
    }

    #[test]
    fn test_grammar_errors() {
        let err = normalize("width", &"10pz".into()).unwrap_err();
        assert!(matches!(err, NormalizationError::UnknownUnit { ref unit, .. } if unit == "pz"));

        let err = normalize("transform", &"rotate(10deg".into()).unwrap_err();
        assert!(matches!(err, NormalizationError::UnclosedFunction { .. }));

        let err = normalize("opacity", &"half".into()).unwrap_err();
        assert!(matches!(err, NormalizationError::ExpectedNumber { .. }));

        let err = normalize("color", &"   ".into()).unwrap_err();
        assert!(matches!(err, NormalizationError::EmptyValue { .. }));

        let err = normalize("height", &f64::NAN.into()).unwrap_err();
        assert!(matches!(err, NormalizationError::NonFiniteNumber { .. }));

        let err = normalize("font-family", &"'unterminated".into()).unwrap_err();
        assert!(matches!(err, NormalizationError::UnexpectedInput { pos: 0, .. }));

        let err = normalize("width", &"1e999px".into()).unwrap_err();
        assert!(matches!(err, NormalizationError::NonFiniteNumber { .. }));
    }

    #[test]
    fn test_huge_numbers_stay_finite() {
        let printed = norm("height", 1e305);
        assert_eq!(printed, format!("1{}px", "0".repeat(305)));
        assert_eq!(norm("width", printed.as_str()), printed);
        assert_eq!(norm("width", "1e3px"), "1000px");
    }

    #[test]
    fn test_numeric_keywords_accepted() {
        assert_eq!(norm("font-weight", "bold"), "bold");
        assert_eq!(norm("z-index", "auto"), "auto");
        assert_eq!(norm("opacity", "var(--o)"), "var(--o)");
        assert_eq!(norm("opacity", "inherit"), "inherit");
    }

    #[test]
    fn test_keyframe_selectors() {
        assert_eq!(normalize_keyframe_selector("from").unwrap(), (0.0, "0%".to_string()));
        assert_eq!(normalize_keyframe_selector(" TO ").unwrap(), (100.0, "100%".to_string()));
        assert_eq!(normalize_keyframe_selector("0%, 50.0%").unwrap(), (0.0, "0%,50%".to_string()));
        assert!(normalize_keyframe_selector("halfway").is_err());
        assert!(normalize_keyframe_selector("120%").is_err());
    }
}
