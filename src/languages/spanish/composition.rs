//! Producciones de composición de numerales
//!
//! Cada función recibe la ventana ya validada contra el patrón de su regla
//! (ver `rules.rs`) y calcula el token resultante. Si la ventana no tiene la
//! forma esperada devuelven `None`; nunca adivinan.

use crate::grammar::{Node, NumericToken};

use super::lexicon::HUNDREDS;

/// Valores de las decenas que admiten "y" + unidad
pub const TENS_VALUES: &[f64] = &[20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];
/// Centenas escritas en una sola palabra
pub const HUNDREDS_VALUES: &[f64] = &[
    100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0,
];

/// Interpreta las cifras de `x` como decimales: 5 → 0.5, 25 → 0.25, 10 → 0.1.
/// Divide por la primera potencia de diez (1 a 1e9) mayor que `x`; a partir de
/// 1e9 el resultado es 0.
pub fn decimal_expansion(x: f64) -> f64 {
    (0..10)
        .map(|exp| 10f64.powi(exp))
        .find(|&multiplier| x < multiplier)
        .map_or(0.0, |multiplier| x / multiplier)
}

fn sum_pair(a: &NumericToken, b: &NumericToken) -> Option<NumericToken> {
    NumericToken::new(a.value() + b.value())
}

/// "diez y seis" → 16
pub fn produce_compound_teens(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Number(ten), Node::Capture(_), Node::Number(unit)] => sum_pair(ten, unit),
        _ => None,
    }
}

/// "treinta y siete" → 37
pub fn produce_compound_tens(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Number(tens), Node::Capture(_), Node::Number(unit)] => sum_pair(tens, unit),
        _ => None,
    }
}

/// "tres cientos veinte" → 320
pub fn produce_hundreds_aggregation(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Number(multiplier), Node::Number(_), Node::Number(remainder)] => {
            NumericToken::new(100.0 * multiplier.value() + remainder.value())
        }
        _ => None,
    }
}

/// "tres punto cinco" → 3.5, "cinco punto veinticinco" → 5.25
pub fn produce_decimal_join(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Number(int), Node::Capture(_), Node::Number(frac)] => {
            NumericToken::new(int.value() + decimal_expansion(frac.value()))
        }
        _ => None,
    }
}

/// Multiplicador y escala de un sufijo de magnitud
pub fn suffix_scale(suffix: &str) -> Option<(f64, u8)> {
    match suffix.to_lowercase().as_str() {
        "k" => Some((1e3, 3)),
        "m" => Some((1e6, 6)),
        "g" => Some((1e9, 9)),
        _ => None,
    }
}

/// El sufijo debe ir seguido de fin de texto o de un carácter que no forme
/// palabra (espacio, puntuación, símbolo de moneda como $ € ¢ £)
pub fn suffix_boundary(rest: &str) -> bool {
    rest.chars()
        .next()
        .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
}

/// "2k" → 2000, "2.5m" → 2 500 000
pub fn produce_magnitude_suffix(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Number(base), Node::Capture(suffix)] => {
            let letter = suffix.group(1).unwrap_or(suffix.text());
            let (multiplier, grain) = suffix_scale(letter)?;
            NumericToken::with_grain(base.value() * multiplier, grain)
        }
        _ => None,
    }
}

/// "-5", "menos cinco" → -5
pub fn produce_negation(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Capture(_), Node::Number(token)] => {
            NumericToken::try_new(token.value() * -1.0, token.grain()).ok()
        }
        _ => None,
    }
}

/// "ciento veinte" → 120, "doscientos cinco" → 205. La centena tiene que ser
/// una palabra: "100 20" son dos números.
pub fn produce_hundreds_remainder(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Capture(word), Node::Number(remainder)] => {
            let hundreds = HUNDREDS.lookup(word.text()).ok()? as f64;
            if !HUNDREDS_VALUES.contains(&hundreds) {
                return None;
            }
            NumericToken::new(hundreds + remainder.value())
        }
        _ => None,
    }
}

/// "dos mil" → 2000
pub fn produce_thousands(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Number(multiplier), Node::Capture(_)] => {
            NumericToken::with_grain(multiplier.value() * 1000.0, 3)
        }
        _ => None,
    }
}

/// "dos mil quinientos" → 2500, "mil cien" → 1100
pub fn produce_thousands_remainder(window: &[Node]) -> Option<NumericToken> {
    match window {
        [Node::Number(multiplier), Node::Capture(_), Node::Number(remainder)] => {
            NumericToken::new(multiplier.value() * 1000.0 + remainder.value())
        }
        [Node::Capture(_), Node::Number(remainder)] => {
            NumericToken::new(1000.0 + remainder.value())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Capture;

    fn num(value: f64) -> Node {
        Node::Number(NumericToken::new(value).unwrap())
    }

    fn scaled(value: f64, grain: u8) -> Node {
        Node::Number(NumericToken::with_grain(value, grain).unwrap())
    }

    fn word(text: &str) -> Node {
        Node::Capture(Capture::literal(text))
    }

    fn suffix(letter: &str) -> Node {
        Node::Capture(Capture::new(letter, vec![Some(letter.to_string())]))
    }

    fn value(token: Option<NumericToken>) -> Option<f64> {
        token.map(|t| t.value())
    }

    #[test]
    fn test_decimal_expansion_uses_place_value() {
        assert_eq!(decimal_expansion(5.0), 0.5);
        assert_eq!(decimal_expansion(25.0), 0.25);
        assert_eq!(decimal_expansion(10.0), 0.1);
        assert_eq!(decimal_expansion(0.0), 0.0);
        assert_eq!(decimal_expansion(1e9), 0.0);
    }

    #[test]
    fn test_compound_teens() {
        assert_eq!(
            value(produce_compound_teens(&[num(10.0), word("y"), num(7.0)])),
            Some(17.0)
        );
    }

    #[test]
    fn test_compound_tens() {
        assert_eq!(
            value(produce_compound_tens(&[num(30.0), word("y"), num(7.0)])),
            Some(37.0)
        );
        assert!(produce_compound_tens(&[num(30.0), num(7.0)]).is_none());
    }

    #[test]
    fn test_hundreds_aggregation() {
        assert_eq!(
            value(produce_hundreds_aggregation(&[num(3.0), num(100.0), num(20.0)])),
            Some(320.0)
        );
        assert_eq!(
            value(produce_hundreds_aggregation(&[num(9.0), num(100.0), num(0.0)])),
            Some(900.0)
        );
    }

    #[test]
    fn test_decimal_join() {
        assert_eq!(
            value(produce_decimal_join(&[num(3.0), word("punto"), num(5.0)])),
            Some(3.5)
        );
        assert_eq!(
            value(produce_decimal_join(&[num(5.0), word("punto"), num(25.0)])),
            Some(5.25)
        );
        // Suma sin más: el signo lo pone la negación aplicada después
        assert_eq!(
            value(produce_decimal_join(&[num(-3.0), word("punto"), num(5.0)])),
            Some(-2.5)
        );
    }

    #[test]
    fn test_magnitude_suffix() {
        assert_eq!(value(produce_magnitude_suffix(&[num(2.0), suffix("k")])), Some(2000.0));
        assert_eq!(
            value(produce_magnitude_suffix(&[num(2.5), suffix("M")])),
            Some(2_500_000.0)
        );
        let giga = produce_magnitude_suffix(&[num(3.0), suffix("g")]).unwrap();
        assert_eq!(giga.value(), 3e9);
        assert_eq!(giga.grain(), Some(9));
        assert!(produce_magnitude_suffix(&[num(3.0), suffix("x")]).is_none());
    }

    #[test]
    fn test_suffix_boundary() {
        assert!(suffix_boundary(""));
        assert!(suffix_boundary(" euros"));
        assert!(suffix_boundary("$"));
        assert!(suffix_boundary("€"));
        assert!(suffix_boundary(","));
        assert!(!suffix_boundary("ing"));
        assert!(!suffix_boundary("2"));
        assert!(!suffix_boundary("_"));
    }

    #[test]
    fn test_negation() {
        assert_eq!(value(produce_negation(&[word("-"), num(5.0)])), Some(-5.0));
        assert_eq!(value(produce_negation(&[word("menos"), num(5.0)])), Some(-5.0));
        let negated = produce_negation(&[word("menos"), scaled(2000.0, 3)]).unwrap();
        assert_eq!(negated.grain(), Some(3));
    }

    #[test]
    fn test_hundreds_remainder() {
        assert_eq!(
            value(produce_hundreds_remainder(&[word("ciento"), num(20.0)])),
            Some(120.0)
        );
        assert_eq!(
            value(produce_hundreds_remainder(&[word("Doscientos"), num(5.0)])),
            Some(205.0)
        );
        // "mil" está en la tabla pero no es una centena
        assert!(produce_hundreds_remainder(&[word("mil"), num(20.0)]).is_none());
        assert!(produce_hundreds_remainder(&[num(100.0), num(20.0)]).is_none());
    }

    #[test]
    fn test_thousands() {
        let two_thousand = produce_thousands(&[num(2.0), word("mil")]).unwrap();
        assert_eq!(two_thousand.value(), 2000.0);
        assert_eq!(two_thousand.grain(), Some(3));
        assert!(produce_thousands(&[num(2.0), num(1000.0)]).is_none());

        assert_eq!(
            value(produce_thousands_remainder(&[num(2.0), word("mil"), num(500.0)])),
            Some(2500.0)
        );
        assert_eq!(
            value(produce_thousands_remainder(&[word("mil"), num(100.0)])),
            Some(1100.0)
        );
        assert!(produce_thousands_remainder(&[num(1000.0), num(5.0)]).is_none());
        assert!(produce_thousands_remainder(&[scaled(2000.0, 3), num(500.0)]).is_none());
    }

    #[test]
    fn test_productions_are_deterministic() {
        let window = [num(5.0), word("punto"), num(25.0)];
        let first = produce_decimal_join(&window);
        for _ in 0..10 {
            assert_eq!(produce_decimal_join(&window), first);
        }
    }
}
