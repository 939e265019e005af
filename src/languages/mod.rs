//! Soporte de idiomas
//!
//! Cada idioma expone su registro de reglas de numerales.

pub mod spanish;

use crate::grammar::{Dimension, RuleRegistry};

/// Capacidades que debe ofrecer un idioma
pub trait Language: Send + Sync {
    /// Código del idioma (ej: "es")
    fn code(&self) -> &str;

    /// Nombre del idioma
    fn name(&self) -> &str;

    /// Registro ordenado de reglas, construido una sola vez
    fn rules(&self) -> &'static RuleRegistry;

    /// Dimensión con la que se etiquetan los tokens producidos
    fn dimension(&self) -> Dimension {
        Dimension::Number
    }
}

/// Crea una instancia del idioma especificado
pub fn get_language(code: &str) -> Option<Box<dyn Language>> {
    match code {
        "es" | "spanish" | "español" => Some(Box::new(spanish::Spanish::new())),
        _ => None,
    }
}
