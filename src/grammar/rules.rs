//! Sistema de reglas de composición
//!
//! Una regla es un patrón (secuencia de elementos) más una producción pura que
//! calcula el token resultante a partir de la ventana reconocida.

use std::fmt;

use regex::Regex;

use super::tokenizer::{Capture, Node, NumericToken};

/// Función de producción de una regla
pub type Production = fn(&[Node]) -> Option<NumericToken>;

/// Filtro opcional sobre el texto que sigue a una coincidencia
pub type FollowGuard = fn(&str) -> bool;

/// Patrón de texto anclado en la posición de búsqueda
#[derive(Clone)]
pub struct TextPattern {
    regex: Regex,
    followed_by: Option<FollowGuard>,
}

impl TextPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{})", pattern))?,
            followed_by: None,
        })
    }

    /// Exige que el resto del texto tras la coincidencia cumpla `guard`
    pub fn followed_by(mut self, guard: FollowGuard) -> Self {
        self.followed_by = Some(guard);
        self
    }

    /// Busca el patrón empezando exactamente en `pos`. Devuelve el fin de la
    /// coincidencia (en bytes) y la captura.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<(usize, Capture)> {
        let rest = text.get(pos..)?;
        let caps = self.regex.captures(rest)?;
        let whole = caps.get(0)?;
        if whole.as_str().is_empty() {
            return None;
        }

        let end = pos + whole.end();
        if let Some(guard) = self.followed_by {
            if !guard(&text[end..]) {
                return None;
            }
        }

        let groups = caps
            .iter()
            .skip(1)
            .map(|g| g.map(|m| m.as_str().to_string()))
            .collect();
        Some((end, Capture::new(whole.as_str(), groups)))
    }
}

impl fmt::Debug for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextPattern")
            .field("regex", &self.regex.as_str())
            .field("guarded", &self.followed_by.is_some())
            .finish()
    }
}

/// Condición sobre un token numérico previo
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Any,
    /// Valor exactamente igual
    Equals(f64),
    /// `min <= valor < max`
    Between { min: f64, max: f64 },
    OneOf(&'static [f64]),
    /// Valor entero (sin parte fraccionaria)
    Integer,
    GrainAbsent,
    All(Vec<Predicate>),
}

impl Predicate {
    pub fn between(min: f64, max: f64) -> Self {
        Predicate::Between { min, max }
    }

    pub fn matches(&self, token: &NumericToken) -> bool {
        let value = token.value();
        match self {
            Predicate::Any => true,
            Predicate::Equals(expected) => value == *expected,
            Predicate::Between { min, max } => *min <= value && value < *max,
            Predicate::OneOf(values) => values.contains(&value),
            Predicate::Integer => value.fract() == 0.0,
            Predicate::GrainAbsent => token.grain().is_none(),
            Predicate::All(preds) => preds.iter().all(|p| p.matches(token)),
        }
    }
}

/// Elemento de un patrón
#[derive(Debug, Clone)]
pub enum PatternElement {
    /// Texto literal o expresión regular
    Text(TextPattern),
    /// Token numérico ya producido que cumple el predicado
    Number(Predicate),
}

impl PatternElement {
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        TextPattern::new(pattern).map(PatternElement::Text)
    }

    pub fn number(predicate: Predicate) -> Self {
        PatternElement::Number(predicate)
    }

    /// ¿Acepta este elemento el nodo dado?
    pub fn accepts(&self, node: &Node) -> bool {
        match (self, node) {
            (PatternElement::Text(_), Node::Capture(_)) => true,
            (PatternElement::Number(pred), Node::Number(token)) => pred.matches(token),
            _ => false,
        }
    }
}

/// Regla de composición
#[derive(Clone)]
pub struct Rule {
    pub name: &'static str,
    pub description: String,
    pub pattern: Vec<PatternElement>,
    produce: Production,
}

impl Rule {
    pub fn new(name: &'static str, pattern: Vec<PatternElement>, produce: Production) -> Self {
        Self {
            name,
            description: String::new(),
            pattern,
            produce,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Aplica la producción si la ventana encaja elemento a elemento con el patrón
    pub fn apply(&self, window: &[Node]) -> Option<NumericToken> {
        if window.len() != self.pattern.len() {
            return None;
        }
        if !self.pattern.iter().zip(window).all(|(el, node)| el.accepts(node)) {
            return None;
        }
        (self.produce)(window)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Lista ordenada de reglas expuesta al planificador
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn add_rules(&mut self, rules: Vec<Rule>) {
        self.rules.extend(rules);
    }

    pub fn get_rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
