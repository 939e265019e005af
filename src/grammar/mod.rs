//! Motor de reglas
//!
//! Tipos de token, patrones y reglas de composición, más un analizador de
//! referencia que aplica un registro de reglas sobre texto.

pub mod analyzer;
pub mod rules;
pub mod tokenizer;

pub use analyzer::{Entity, NumeralAnalyzer};
pub use rules::{PatternElement, Predicate, Rule, RuleRegistry, TextPattern};
pub use tokenizer::{Capture, Dimension, Node, NumericToken, Tokenizer};
