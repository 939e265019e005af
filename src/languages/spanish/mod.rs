//! Numerales del español

pub mod composition;
pub mod lexicon;
pub mod literals;
pub mod rules;

pub use rules::numeral_rules;

use crate::grammar::RuleRegistry;
use crate::languages::Language;

pub struct Spanish;

impl Spanish {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Spanish {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Spanish {
    fn code(&self) -> &str {
        "es"
    }

    fn name(&self) -> &str {
        "Español"
    }

    fn rules(&self) -> &'static RuleRegistry {
        numeral_rules()
    }
}
