//! Literales numéricos escritos con cifras
//!
//! En español la coma separa decimales y el punto agrupa millares:
//! "1.234.567,89" es un millón doscientos treinta y cuatro mil...
//! El punto decimal ("2.5") se admite solo cuando no puede leerse como
//! agrupación de millares.

use tracing::debug;

use crate::error::{NumeralError, NumeralResult};
use crate::grammar::{Node, NumericToken};
use crate::MAX_INTEGER_DIGITS;

/// Entero de 1 a 18 cifras
pub const INTEGER_PATTERN: &str = r"[0-9]{1,18}";
/// Millares con punto y parte decimal con coma: "1.234.567,89"
pub const GROUPED_DECIMAL_PATTERN: &str = r"[0-9]+(?:\.[0-9]{3})+,[0-9]+";
/// Millares con punto sin parte decimal: "1.234", "12.345.678"
pub const GROUPED_INTEGER_PATTERN: &str = r"[0-9]{1,3}(?:\.[0-9]{3}){1,5}";
/// Decimal con coma: "3,5", ",5"
pub const DECIMAL_PATTERN: &str = r"[0-9]*,[0-9]+";
/// Decimal con punto: "2.5", ".75"
pub const POINT_DECIMAL_PATTERN: &str = r"([0-9]*)\.([0-9]+)";

/// La cifra no continúa tras la coincidencia
pub fn not_followed_by_digit(rest: &str) -> bool {
    !rest.starts_with(|c: char| c.is_ascii_digit())
}

/// Ni cifras ni un separador seguido de cifra: "1.234" no es entero agrupado
/// dentro de "1.234,5" ni de "1.234.5"
pub fn not_followed_by_number(rest: &str) -> bool {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), _) if c.is_ascii_digit() => false,
        (Some('.' | ','), Some(d)) if d.is_ascii_digit() => false,
        _ => true,
    }
}

fn capture_text(window: &[Node]) -> Option<&str> {
    window.first()?.as_capture().map(|c| c.text())
}

fn parse_integer(digits: &str) -> NumeralResult<f64> {
    if digits.len() > MAX_INTEGER_DIGITS {
        return Err(NumeralError::DigitOverflow(digits.len()));
    }
    digits
        .parse::<i64>()
        .map(|v| v as f64)
        .map_err(|_| NumeralError::Format(digits.to_string()))
}

/// Quita los puntos de millar y convierte la coma decimal en punto
pub fn normalize_spanish_number(text: &str) -> String {
    let normalized: String = text
        .chars()
        .filter(|&c| c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.starts_with('.') {
        format!("0{}", normalized)
    } else {
        normalized
    }
}

fn parse_float(text: &str) -> NumeralResult<f64> {
    let value = text
        .parse::<f64>()
        .map_err(|_| NumeralError::Format(text.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumeralError::NonFinite)
    }
}

fn into_token(literal: &str, parsed: NumeralResult<f64>) -> Option<NumericToken> {
    match parsed.and_then(|v| NumericToken::try_new(v, None)) {
        Ok(token) => Some(token),
        Err(err) => {
            debug!(literal, "literal descartado: {}", err);
            None
        }
    }
}

pub fn produce_integer(window: &[Node]) -> Option<NumericToken> {
    let text = capture_text(window)?;
    into_token(text, parse_integer(text))
}

pub fn produce_grouped_decimal(window: &[Node]) -> Option<NumericToken> {
    let text = capture_text(window)?;
    into_token(text, parse_float(&normalize_spanish_number(text)))
}

pub fn produce_grouped_integer(window: &[Node]) -> Option<NumericToken> {
    let text = capture_text(window)?;
    into_token(text, parse_float(&text.replace('.', "")))
}

pub fn produce_decimal(window: &[Node]) -> Option<NumericToken> {
    let text = capture_text(window)?;
    into_token(text, parse_float(&normalize_spanish_number(text)))
}

/// "2.5" → 2.5; rechaza "1.234", que es un entero agrupado
pub fn produce_point_decimal(window: &[Node]) -> Option<NumericToken> {
    let capture = window.first()?.as_capture()?;
    let int_part = capture.group(1).unwrap_or("");
    let frac_part = capture.group(2)?;
    if frac_part.len() == 3 && (1..=3).contains(&int_part.len()) {
        return None;
    }

    let text = if int_part.is_empty() {
        format!("0.{}", frac_part)
    } else {
        format!("{}.{}", int_part, frac_part)
    };
    into_token(capture.text(), parse_float(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Capture;
    use regex::Regex;

    fn literal(text: &str) -> Vec<Node> {
        vec![Node::Capture(Capture::literal(text))]
    }

    fn point_decimal(int_part: &str, frac_part: &str) -> Vec<Node> {
        let text = format!("{}.{}", int_part, frac_part);
        let int_group = if int_part.is_empty() {
            None
        } else {
            Some(int_part.to_string())
        };
        vec![Node::Capture(Capture::new(
            text,
            vec![int_group, Some(frac_part.to_string())],
        ))]
    }

    fn value(token: Option<NumericToken>) -> Option<f64> {
        token.map(|t| t.value())
    }

    fn full_match(pattern: &str, text: &str) -> bool {
        Regex::new(&format!("^(?:{})$", pattern)).unwrap().is_match(text)
    }

    #[test]
    fn test_integer_literal() {
        assert_eq!(value(produce_integer(&literal("42"))), Some(42.0));
        assert_eq!(value(produce_integer(&literal("007"))), Some(7.0));
        assert_eq!(
            value(produce_integer(&literal("999999999999999999"))),
            Some(999_999_999_999_999_999.0)
        );
    }

    #[test]
    fn test_integer_literal_rejects_19_digits() {
        assert!(!full_match(INTEGER_PATTERN, "1234567890123456789"));
        assert!(produce_integer(&literal("1234567890123456789")).is_none());
        assert_eq!(
            parse_integer("1234567890123456789"),
            Err(NumeralError::DigitOverflow(19))
        );
    }

    #[test]
    fn test_grouped_decimal() {
        assert_eq!(
            value(produce_grouped_decimal(&literal("1.234.567,89"))),
            Some(1234567.89)
        );
        assert!(full_match(GROUPED_DECIMAL_PATTERN, "1.234.567,89"));
        assert!(!full_match(GROUPED_DECIMAL_PATTERN, "1.23,5"));
    }

    #[test]
    fn test_grouped_integer() {
        assert_eq!(value(produce_grouped_integer(&literal("1.234"))), Some(1234.0));
        assert_eq!(
            value(produce_grouped_integer(&literal("12.345.678"))),
            Some(12345678.0)
        );
        assert!(full_match(GROUPED_INTEGER_PATTERN, "1.234"));
        assert!(!full_match(GROUPED_INTEGER_PATTERN, "1234.567"));
        assert!(!full_match(GROUPED_INTEGER_PATTERN, "1.234.567,89"));
    }

    #[test]
    fn test_grouped_integer_defers_to_grouped_decimal() {
        assert!(!not_followed_by_number(",89"));
        assert!(!not_followed_by_number(".5"));
        assert!(!not_followed_by_number("5"));
        assert!(not_followed_by_number(" euros"));
        assert!(not_followed_by_number("."));
        assert!(not_followed_by_number(""));
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(value(produce_decimal(&literal("3,5"))), Some(3.5));
        assert_eq!(value(produce_decimal(&literal(",5"))), Some(0.5));
        assert!(full_match(DECIMAL_PATTERN, ",5"));
        assert!(!full_match(DECIMAL_PATTERN, "3,"));
    }

    #[test]
    fn test_point_decimal() {
        assert_eq!(value(produce_point_decimal(&point_decimal("2", "5"))), Some(2.5));
        assert_eq!(value(produce_point_decimal(&point_decimal("", "75"))), Some(0.75));
        assert_eq!(
            value(produce_point_decimal(&point_decimal("1234", "567"))),
            Some(1234.567)
        );
        // Tres cifras tras el punto: agrupación de millares, no decimal
        assert!(produce_point_decimal(&point_decimal("1", "234")).is_none());
    }

    #[test]
    fn test_normalize_spanish_number() {
        assert_eq!(normalize_spanish_number("1.234.567,89"), "1234567.89");
        assert_eq!(normalize_spanish_number(",5"), "0.5");
        assert_eq!(normalize_spanish_number("3,5"), "3.5");
    }

    #[test]
    fn test_not_followed_by_digit() {
        assert!(not_followed_by_digit(""));
        assert!(not_followed_by_digit("k"));
        assert!(!not_followed_by_digit("9"));
    }
}
