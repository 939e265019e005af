//! Tablas léxicas de numerales del español
//!
//! Cada tabla asocia grafías a su valor. Las variantes con y sin tilde y las
//! faltas frecuentes ("diesiseis") se mantienen como entradas propias: no se
//! eliminan diacríticos antes de buscar. La expresión regular de cada regla se
//! genera a partir de las claves de su tabla, así que ambas no pueden divergir.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::warn;

use crate::error::{NumeralError, NumeralResult};
use crate::grammar::{Node, NumericToken};

/// Cero a quince
const ONES_ENTRIES: &[(&str, i64)] = &[
    ("cero", 0),
    ("zero", 0),
    ("un", 1),
    ("uno", 1),
    ("una", 1),
    ("dos", 2),
    ("tres", 3),
    ("trés", 3),
    ("cuatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("séis", 6),
    ("siete", 7),
    ("ocho", 8),
    ("nueve", 9),
    ("diez", 10),
    ("dies", 10),
    ("once", 11),
    ("doce", 12),
    ("trece", 13),
    ("catorce", 14),
    ("quince", 15),
];

/// Dieciséis a diecinueve y veintiuno a veintinueve
const TEENS_ENTRIES: &[(&str, i64)] = &[
    ("dieciséis", 16),
    ("dieciseis", 16),
    ("diesiseis", 16),
    ("diesiséis", 16),
    ("diecisiete", 17),
    ("diesisiete", 17),
    ("dieciocho", 18),
    ("diesiocho", 18),
    ("diecinueve", 19),
    ("diesinueve", 19),
    ("veintiuno", 21),
    ("veintiuna", 21),
    ("veintiún", 21),
    ("veintidós", 22),
    ("veintidos", 22),
    ("veintitrés", 23),
    ("veintitres", 23),
    ("veinticuatro", 24),
    ("veinticinco", 25),
    ("veintiséis", 26),
    ("veintiseis", 26),
    ("veintisiete", 27),
    ("veintiocho", 28),
    ("veintinueve", 29),
];

const TENS_ENTRIES: &[(&str, i64)] = &[
    ("veinte", 20),
    ("treinta", 30),
    ("cuarenta", 40),
    ("cincuenta", 50),
    ("sesenta", 60),
    ("setenta", 70),
    ("ochenta", 80),
    ("noventa", 90),
];

const HUNDREDS_ENTRIES: &[(&str, i64)] = &[
    ("cien", 100),
    ("cientos", 100),
    ("ciento", 100),
    ("doscientos", 200),
    ("trescientos", 300),
    ("cuatrocientos", 400),
    ("quinientos", 500),
    ("seiscientos", 600),
    ("setecientos", 700),
    ("ochocientos", 800),
    ("novecientos", 900),
    ("mil", 1000),
];

/// Tabla inmutable grafía → valor
#[derive(Debug)]
pub struct LexicalTable {
    name: &'static str,
    entries: &'static [(&'static str, i64)],
    index: HashMap<&'static str, i64>,
}

impl LexicalTable {
    fn new(name: &'static str, entries: &'static [(&'static str, i64)]) -> Self {
        Self {
            name,
            entries,
            index: entries.iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [(&'static str, i64)] {
        self.entries
    }

    /// Busca una grafía tras pasarla a minúsculas
    pub fn lookup(&self, spelling: &str) -> NumeralResult<i64> {
        let lower = spelling.to_lowercase();
        self.index
            .get(lower.as_str())
            .copied()
            .ok_or(NumeralError::LookupMiss(lower))
    }

    /// Alternancia regex (sin distinguir mayúsculas) con todas las grafías.
    /// Las más largas van primero para que "uno" no se corte en "un".
    pub fn alternation(&self) -> String {
        let mut spellings: Vec<&str> = self.entries.iter().map(|(s, _)| *s).collect();
        spellings.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        let escaped: Vec<String> = spellings.into_iter().map(regex::escape).collect();
        format!("(?i)(?:{})", escaped.join("|"))
    }
}

pub static ONES: LazyLock<LexicalTable> =
    LazyLock::new(|| LexicalTable::new("ones", ONES_ENTRIES));
pub static TEENS: LazyLock<LexicalTable> =
    LazyLock::new(|| LexicalTable::new("teens", TEENS_ENTRIES));
pub static TENS: LazyLock<LexicalTable> =
    LazyLock::new(|| LexicalTable::new("tens", TENS_ENTRIES));
pub static HUNDREDS: LazyLock<LexicalTable> =
    LazyLock::new(|| LexicalTable::new("hundreds", HUNDREDS_ENTRIES));

/// Convierte la palabra capturada en token usando la tabla indicada
fn lookup_word(table: &LexicalTable, window: &[Node]) -> Option<NumericToken> {
    let capture = window.first()?.as_capture()?;
    match table.lookup(capture.text()) {
        Ok(value) => NumericToken::new(value as f64),
        Err(err) => {
            warn!(table = table.name(), "{}", err);
            None
        }
    }
}

pub fn produce_ones(window: &[Node]) -> Option<NumericToken> {
    lookup_word(&ONES, window)
}

pub fn produce_teens(window: &[Node]) -> Option<NumericToken> {
    lookup_word(&TEENS, window)
}

pub fn produce_tens(window: &[Node]) -> Option<NumericToken> {
    lookup_word(&TENS, window)
}

pub fn produce_hundreds(window: &[Node]) -> Option<NumericToken> {
    lookup_word(&HUNDREDS, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Capture;
    use regex::Regex;

    fn word(text: &str) -> Vec<Node> {
        vec![Node::Capture(Capture::literal(text))]
    }

    fn all_tables() -> [&'static LexicalTable; 4] {
        [&*ONES, &*TEENS, &*TENS, &*HUNDREDS]
    }

    #[test]
    fn test_table_ranges() {
        assert!(ONES.entries().iter().all(|(_, v)| (0..=15).contains(v)));
        assert!(TEENS.entries().iter().all(|(_, v)| (16..=29).contains(v) && *v != 20));
        assert!(TENS.entries().iter().all(|(_, v)| *v % 10 == 0 && (20..=90).contains(v)));
        assert!(HUNDREDS.entries().iter().all(|(_, v)| (100..=1000).contains(v)));
    }

    #[test]
    fn test_alternation_matches_every_key_whole() {
        for table in all_tables() {
            let re = Regex::new(&format!("^(?:{})", table.alternation())).unwrap();
            for (spelling, value) in table.entries() {
                let m = re.find(spelling).unwrap();
                assert_eq!(
                    m.as_str(),
                    *spelling,
                    "La alternancia de '{}' corta la grafía '{}'",
                    table.name(),
                    spelling
                );
                assert_eq!(table.lookup(m.as_str()), Ok(*value));
            }
        }
    }

    #[test]
    fn test_sixteen_spelling_variants() {
        for spelling in ["dieciséis", "diesiseis", "diesiséis", "dieciseis"] {
            assert_eq!(TEENS.lookup(spelling), Ok(16), "'{}' debe valer 16", spelling);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(ONES.lookup("TRÉS"), Ok(3));
        assert_eq!(TENS.lookup("Treinta"), Ok(30));
        assert_eq!(HUNDREDS.lookup("MIL"), Ok(1000));
    }

    #[test]
    fn test_hundred_spellings() {
        for spelling in ["cien", "ciento", "cientos"] {
            assert_eq!(HUNDREDS.lookup(spelling), Ok(100));
        }
        assert_eq!(HUNDREDS.lookup("quinientos"), Ok(500));
    }

    #[test]
    fn test_lookup_miss_produces_no_token() {
        assert_eq!(
            ONES.lookup("veinte"),
            Err(NumeralError::LookupMiss("veinte".to_string()))
        );
        assert!(produce_ones(&word("veinte")).is_none());
        assert!(produce_ones(&[]).is_none());
    }

    #[test]
    fn test_word_productions() {
        assert_eq!(produce_ones(&word("Quince")).map(|t| t.value()), Some(15.0));
        assert_eq!(produce_teens(&word("veintiún")).map(|t| t.value()), Some(21.0));
        assert_eq!(produce_tens(&word("noventa")).map(|t| t.value()), Some(90.0));
        assert_eq!(produce_hundreds(&word("mil")).map(|t| t.grain()), Some(None));
    }
}
