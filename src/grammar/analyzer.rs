//! Analizador de numerales
//!
//! Aplica las reglas de un registro sobre el texto de abajo arriba hasta que
//! ninguna produce tokens nuevos, y después resuelve los solapamientos
//! quedándose con los tramos más largos.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::rules::{PatternElement, Rule, RuleRegistry, TextPattern};
use super::tokenizer::{is_boundary, Capture, Dimension, Node, NumericToken, Tokenizer};

/// Límite de pasadas de saturación por defecto
pub const DEFAULT_MAX_PASSES: usize = 32;

/// Número reconocido en el texto
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub dimension: Dimension,
    pub value: NumericToken,
    pub rule: &'static str,
}

impl Entity {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Coincidencia parcial de un patrón: tramo cubierto y nodos reconocidos
struct Partial {
    start: usize,
    end: usize,
    nodes: Vec<Node>,
}

type StashKey = (usize, usize, u64, Option<u8>);

fn stash_key(start: usize, end: usize, token: &NumericToken) -> StashKey {
    (start, end, token.value().to_bits(), token.grain())
}

/// Analizador que hace de planificador para un registro de reglas
pub struct NumeralAnalyzer<'a> {
    registry: &'a RuleRegistry,
    tokenizer: Tokenizer,
    max_passes: usize,
}

impl<'a> NumeralAnalyzer<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self {
            registry,
            tokenizer: Tokenizer::new(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// Números reconocidos, sin solapamientos y ordenados por posición
    pub fn analyze(&self, text: &str) -> Vec<Entity> {
        let candidates = self.candidates(text);
        self.resolve(candidates)
    }

    /// Todos los tokens producidos durante la saturación, en orden de producción
    pub fn candidates(&self, text: &str) -> Vec<Entity> {
        let starts = self.tokenizer.segment_starts(text);
        let mut stash: Vec<Entity> = Vec::new();
        let mut seen: HashSet<StashKey> = HashSet::new();

        for pass in 0..self.max_passes {
            let mut produced = Vec::new();

            for rule in self.registry.get_rules() {
                // Las reglas solo de texto no cambian entre pasadas
                if pass > 0 && !has_number_element(rule) {
                    continue;
                }
                for partial in self.match_rule(rule, text, &starts, &stash) {
                    let Some(token) = rule.apply(&partial.nodes) else {
                        continue;
                    };
                    if seen.insert(stash_key(partial.start, partial.end, &token)) {
                        trace!(
                            rule = rule.name,
                            start = partial.start,
                            end = partial.end,
                            value = %token,
                            "regla aplicada"
                        );
                        produced.push(Entity {
                            start: partial.start,
                            end: partial.end,
                            text: text[partial.start..partial.end].to_string(),
                            dimension: token.dimension(),
                            value: token,
                            rule: rule.name,
                        });
                    }
                }
            }

            if produced.is_empty() {
                return stash;
            }
            stash.extend(produced);
        }

        debug!(
            max_passes = self.max_passes,
            "saturación interrumpida por límite de pasadas"
        );
        stash
    }

    /// Elige los tramos más largos sin solapamiento; a igual longitud gana el
    /// producido antes
    fn resolve(&self, candidates: Vec<Entity>) -> Vec<Entity> {
        let mut ordered: Vec<(usize, Entity)> = candidates.into_iter().enumerate().collect();
        ordered.sort_by(|(ia, a), (ib, b)| b.len().cmp(&a.len()).then(ia.cmp(ib)));

        let mut chosen: Vec<Entity> = Vec::new();
        for (_, entity) in ordered {
            if !chosen.iter().any(|c| c.overlaps(&entity)) {
                chosen.push(entity);
            }
        }
        chosen.sort_by_key(|e| e.start);
        chosen
    }

    fn match_rule(
        &self,
        rule: &Rule,
        text: &str,
        starts: &[usize],
        stash: &[Entity],
    ) -> Vec<Partial> {
        let Some((first, rest)) = rule.pattern.split_first() else {
            return Vec::new();
        };

        let mut partials: Vec<Partial> = match first {
            PatternElement::Text(pattern) => starts
                .iter()
                .filter_map(|&pos| self.match_text(pattern, text, pos))
                .map(|(start, end, capture)| Partial {
                    start,
                    end,
                    nodes: vec![Node::Capture(capture)],
                })
                .collect(),
            PatternElement::Number(predicate) => stash
                .iter()
                .filter(|e| predicate.matches(&e.value))
                .map(|e| Partial {
                    start: e.start,
                    end: e.end,
                    nodes: vec![Node::Number(e.value)],
                })
                .collect(),
        };

        for element in rest {
            let mut extended = Vec::new();
            for partial in partials {
                let pos = self.tokenizer.skip_whitespace(text, partial.end);
                match element {
                    PatternElement::Text(pattern) => {
                        if let Some((_, end, capture)) = self.match_text(pattern, text, pos) {
                            let mut nodes = partial.nodes;
                            nodes.push(Node::Capture(capture));
                            extended.push(Partial {
                                start: partial.start,
                                end,
                                nodes,
                            });
                        }
                    }
                    PatternElement::Number(predicate) => {
                        for entity in stash
                            .iter()
                            .filter(|e| e.start == pos && predicate.matches(&e.value))
                        {
                            let mut nodes = partial.nodes.clone();
                            nodes.push(Node::Number(entity.value));
                            extended.push(Partial {
                                start: partial.start,
                                end: entity.end,
                                nodes,
                            });
                        }
                    }
                }
            }
            if extended.is_empty() {
                return extended;
            }
            partials = extended;
        }

        partials
    }

    /// Coincidencia de texto en `pos` que respeta las fronteras a ambos lados
    fn match_text(
        &self,
        pattern: &TextPattern,
        text: &str,
        pos: usize,
    ) -> Option<(usize, usize, Capture)> {
        let first = self.tokenizer.char_at(text, pos);
        if !is_boundary(self.tokenizer.char_before(text, pos), first) {
            return None;
        }
        let (end, capture) = pattern.match_at(text, pos)?;
        let last = self.tokenizer.char_before(text, end);
        if !is_boundary(last, self.tokenizer.char_at(text, end)) {
            return None;
        }
        Some((pos, end, capture))
    }
}

fn has_number_element(rule: &Rule) -> bool {
    rule.pattern
        .iter()
        .any(|e| matches!(e, PatternElement::Number(_)))
}
