//! Reglas de numerales del español

use std::sync::LazyLock;

use crate::grammar::{PatternElement, Predicate, Rule, RuleRegistry, TextPattern};

use super::composition::{self, TENS_VALUES};
use super::lexicon::{self, HUNDREDS, ONES, TEENS, TENS};
use super::literals;

static SPANISH_RULES: LazyLock<RuleRegistry> = LazyLock::new(|| {
    build_spanish_rules().expect("las expresiones regulares de numerales son válidas")
});

/// Reglas de numerales del español, en el orden en que se registran
pub fn numeral_rules() -> &'static RuleRegistry {
    &SPANISH_RULES
}

fn text(pattern: &str) -> Result<PatternElement, regex::Error> {
    PatternElement::regex(pattern)
}

fn guarded(
    pattern: &str,
    guard: fn(&str) -> bool,
) -> Result<PatternElement, regex::Error> {
    Ok(PatternElement::Text(TextPattern::new(pattern)?.followed_by(guard)))
}

fn number(predicate: Predicate) -> PatternElement {
    PatternElement::number(predicate)
}

const MIL: &str = "(?i)mil";

/// Multiplicador de "mil": entero sin escala entre 2 y 999
fn thousands_multiplier() -> Predicate {
    Predicate::All(vec![
        Predicate::between(2.0, 1000.0),
        Predicate::Integer,
        Predicate::GrainAbsent,
    ])
}

/// Resto que sigue a una centena o a "mil"
fn remainder_below(max: f64) -> Predicate {
    Predicate::All(vec![
        Predicate::between(1.0, max),
        Predicate::Integer,
        Predicate::GrainAbsent,
    ])
}

/// Construye el registro completo
pub fn build_spanish_rules() -> Result<RuleRegistry, regex::Error> {
    let mut registry = RuleRegistry::new();

    // Literales con cifras
    registry.add_rules(vec![
        Rule::new(
            "integer (numeric)",
            vec![guarded(literals::INTEGER_PATTERN, literals::not_followed_by_digit)?],
            literals::produce_integer,
        )
        .with_description("Entero de 1 a 18 cifras"),
        Rule::new(
            "decimal with thousands separator",
            vec![guarded(
                literals::GROUPED_DECIMAL_PATTERN,
                literals::not_followed_by_digit,
            )?],
            literals::produce_grouped_decimal,
        )
        .with_description("Millares con punto y decimales con coma: 1.234.567,89"),
        Rule::new(
            "integer with thousands separator .",
            vec![guarded(
                literals::GROUPED_INTEGER_PATTERN,
                literals::not_followed_by_number,
            )?],
            literals::produce_grouped_integer,
        )
        .with_description("Millares con punto sin decimales: 1.234"),
        Rule::new(
            "decimal number",
            vec![guarded(literals::DECIMAL_PATTERN, literals::not_followed_by_digit)?],
            literals::produce_decimal,
        )
        .with_description("Decimal con coma: 3,5 o ,5"),
        Rule::new(
            "decimal number with point",
            vec![guarded(
                literals::POINT_DECIMAL_PATTERN,
                literals::not_followed_by_number,
            )?],
            literals::produce_point_decimal,
        )
        .with_description("Decimal con punto cuando no es agrupación de millares: 2.5"),
    ]);

    // Palabras
    registry.add_rules(vec![
        Rule::new(
            "number (0..15)",
            vec![text(&ONES.alternation())?],
            lexicon::produce_ones,
        ),
        Rule::new(
            "number (16..19 21..29)",
            vec![text(&TEENS.alternation())?],
            lexicon::produce_teens,
        ),
        Rule::new(
            "number (20..90)",
            vec![text(&TENS.alternation())?],
            lexicon::produce_tens,
        ),
        Rule::new(
            "number (100..1000)",
            vec![text(&HUNDREDS.alternation())?],
            lexicon::produce_hundreds,
        ),
    ]);

    // Composición
    registry.add_rules(vec![
        Rule::new(
            "number (16..19)",
            vec![
                number(Predicate::Equals(10.0)),
                text("(?i)y")?,
                number(Predicate::between(6.0, 10.0)),
            ],
            composition::produce_compound_teens,
        )
        .with_description("diez y seis → 16"),
        Rule::new(
            "number (21..29 31..39 .. 91..99)",
            vec![
                number(Predicate::OneOf(TENS_VALUES)),
                text("(?i)y")?,
                number(Predicate::between(1.0, 10.0)),
            ],
            composition::produce_compound_tens,
        )
        .with_description("treinta y siete → 37"),
        Rule::new(
            "numbers 200..999",
            vec![
                number(Predicate::between(2.0, 10.0)),
                number(Predicate::Equals(100.0)),
                number(Predicate::between(0.0, 100.0)),
            ],
            composition::produce_hundreds_aggregation,
        )
        .with_description("tres cientos veinte → 320"),
        // Antes que la unión decimal: a igual tramo gana la primera producida,
        // y "menos tres punto cinco" debe negar 3.5 y no sumar 0.5 a -3
        Rule::new(
            "numbers prefix with -, negative or minus",
            vec![text("(?i)(?:-|menos)")?, number(Predicate::Any)],
            composition::produce_negation,
        )
        .with_description("menos cinco → -5"),
        Rule::new(
            "number dot number",
            vec![
                number(Predicate::Any),
                text("(?i)punto")?,
                number(Predicate::GrainAbsent),
            ],
            composition::produce_decimal_join,
        )
        .with_description("tres punto cinco → 3.5"),
        Rule::new(
            "numbers suffixes (K, M, G)",
            vec![
                number(Predicate::Any),
                guarded("(?i)([kmg])", composition::suffix_boundary)?,
            ],
            composition::produce_magnitude_suffix,
        )
        .with_description("2k → 2000"),
        Rule::new(
            "hundreds plus remainder",
            vec![text(&HUNDREDS.alternation())?, number(remainder_below(100.0))],
            composition::produce_hundreds_remainder,
        )
        .with_description("ciento veinte → 120"),
        Rule::new(
            "thousands",
            vec![number(thousands_multiplier()), text(MIL)?],
            composition::produce_thousands,
        )
        .with_description("dos mil → 2000"),
        Rule::new(
            "thousands plus remainder",
            vec![
                number(thousands_multiplier()),
                text(MIL)?,
                number(remainder_below(1000.0)),
            ],
            composition::produce_thousands_remainder,
        )
        .with_description("dos mil quinientos → 2500"),
        Rule::new(
            "mil plus remainder",
            vec![text(MIL)?, number(remainder_below(1000.0))],
            composition::produce_thousands_remainder,
        )
        .with_description("mil cien → 1100"),
    ]);

    Ok(registry)
}
