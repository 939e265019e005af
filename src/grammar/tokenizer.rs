//! Tokens numéricos y utilidades de segmentación del texto de entrada

use std::fmt;

use crate::error::{NumeralError, NumeralResult};

/// Dimensión semántica de un token producido
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Number,
}

impl Dimension {
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Number => "number",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Valor numérico reconocido sobre un tramo de texto.
///
/// `value` siempre es finito. `grain` es el exponente de diez que el valor ya
/// representa (3 para "2k"); su ausencia indica que no hay escala declarada.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericToken {
    value: f64,
    grain: Option<u8>,
}

impl NumericToken {
    /// Crea un token sin escala; `None` si el valor no es finito
    pub fn new(value: f64) -> Option<Self> {
        Self::try_new(value, None).ok()
    }

    pub fn with_grain(value: f64, grain: u8) -> Option<Self> {
        Self::try_new(value, Some(grain)).ok()
    }

    pub fn try_new(value: f64, grain: Option<u8>) -> NumeralResult<Self> {
        if value.is_finite() {
            Ok(Self { value, grain })
        } else {
            Err(NumeralError::NonFinite)
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grain(&self) -> Option<u8> {
        self.grain
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::Number
    }
}

impl fmt::Display for NumericToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.grain {
            Some(grain) => write!(f, "{} (grain {})", self.value, grain),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Texto capturado por un patrón, con sus subgrupos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    text: String,
    groups: Vec<Option<String>>,
}

impl Capture {
    pub fn new(text: impl Into<String>, groups: Vec<Option<String>>) -> Self {
        Self {
            text: text.into(),
            groups,
        }
    }

    /// Captura sin subgrupos
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Subgrupo `index` (1 = primer paréntesis), si participó en la coincidencia
    pub fn group(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i))
            .and_then(|g| g.as_deref())
    }
}

/// Elemento de la ventana que recibe una producción
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Capture(Capture),
    Number(NumericToken),
}

impl Node {
    pub fn as_number(&self) -> Option<&NumericToken> {
        match self {
            Node::Number(token) => Some(token),
            Node::Capture(_) => None,
        }
    }

    pub fn as_capture(&self) -> Option<&Capture> {
        match self {
            Node::Capture(capture) => Some(capture),
            Node::Number(_) => None,
        }
    }
}

/// Clase de carácter usada para decidir fronteras entre tramos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Whitespace,
    Other,
}

pub fn classify(ch: char) -> CharClass {
    if ch.is_alphabetic() {
        CharClass::Letter
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Other
    }
}

/// Dos caracteres contiguos pueden pertenecer a tramos distintos salvo que
/// ambos sean letras o ambos dígitos. El inicio/fin de texto siempre es frontera.
pub fn is_boundary(before: Option<char>, after: Option<char>) -> bool {
    match (before, after) {
        (Some(a), Some(b)) => {
            let (ca, cb) = (classify(a), classify(b));
            !(ca == cb && matches!(ca, CharClass::Letter | CharClass::Digit))
        }
        _ => true,
    }
}

/// Segmentador del texto de entrada
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Posiciones (en bytes) donde puede empezar un tramo: inicio del texto y
    /// cada carácter no blanco que sigue a una frontera
    pub fn segment_starts(&self, text: &str) -> Vec<usize> {
        let mut starts = Vec::new();
        let mut prev: Option<char> = None;

        for (pos, ch) in text.char_indices() {
            if classify(ch) != CharClass::Whitespace && is_boundary(prev, Some(ch)) {
                starts.push(pos);
            }
            prev = Some(ch);
        }

        starts
    }

    /// Avanza sobre los espacios en blanco a partir de `pos`
    pub fn skip_whitespace(&self, text: &str, pos: usize) -> usize {
        text.get(pos..)
            .map(|rest| {
                rest.char_indices()
                    .find(|(_, ch)| !ch.is_whitespace())
                    .map_or(text.len(), |(offset, _)| pos + offset)
            })
            .unwrap_or(pos)
    }

    /// Carácter inmediatamente anterior a `pos`
    pub fn char_before(&self, text: &str, pos: usize) -> Option<char> {
        text.get(..pos).and_then(|head| head.chars().next_back())
    }

    /// Carácter que empieza en `pos`
    pub fn char_at(&self, text: &str, pos: usize) -> Option<char> {
        text.get(pos..).and_then(|tail| tail.chars().next())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
