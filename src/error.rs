//! Errores internos del módulo de numerales
//!
//! Ninguno de estos errores llega al llamador: las reglas los convierten en
//! "sin token" (`None`) tras registrarlos con `tracing`.

use thiserror::Error;

/// Motivo por el que una producción no genera token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// La grafía reconocida no está en su tabla léxica (tabla y regex desincronizadas)
    #[error("la grafía '{0}' no figura en la tabla léxica")]
    LookupMiss(String),
    /// Secuencia de dígitos más larga que el máximo admitido
    #[error("secuencia de {0} dígitos (máximo {max})", max = crate::MAX_INTEGER_DIGITS)]
    DigitOverflow(usize),
    /// El literal normalizado no se pudo interpretar como número
    #[error("literal numérico mal formado: '{0}'")]
    Format(String),
    /// El cálculo produjo un valor infinito o NaN
    #[error("el valor calculado no es finito")]
    NonFinite,
}

pub type NumeralResult<T> = Result<T, NumeralError>;
