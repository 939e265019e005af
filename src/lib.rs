//! Numerales - Reconocimiento de numerales en español
//!
//! Tablas léxicas y reglas de composición que convierten expresiones como
//! "treinta y siete", "1.234,5" o "menos 2k" en valores numéricos.

pub mod config;
pub mod error;
pub mod grammar;
pub mod languages;

/// Máximo de cifras de un entero literal
pub const MAX_INTEGER_DIGITS: usize = 18;

pub use config::Config;
pub use error::NumeralError;
pub use grammar::{Entity, NumeralAnalyzer, NumericToken};
pub use languages::spanish::numeral_rules;

/// Reconoce los números de un texto en español
pub fn parse_numerals(text: &str) -> Vec<Entity> {
    NumeralAnalyzer::new(numeral_rules()).analyze(text)
}
