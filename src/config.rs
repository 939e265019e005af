//! Configuración y argumentos CLI

use thiserror::Error;

/// Error al interpretar los argumentos
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} requiere un valor")]
    MissingValue(&'static str),
    #[error("Opción desconocida: {0}")]
    UnknownOption(String),
    #[error("Idioma no soportado: {0}")]
    UnsupportedLanguage(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Idioma a usar (default: "es")
    pub language: String,
    /// Archivo de entrada
    pub input_file: Option<String>,
    /// Texto a analizar (argumento posicional)
    pub text: Option<String>,
    /// Mostrar todos los candidatos de la saturación, no solo los resueltos
    pub show_candidates: bool,
    /// Trazas de depuración
    pub verbose: bool,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "es".to_string(),
            input_file: None,
            text: None,
            show_candidates: false,
            verbose: false,
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-l" | "--lang" => {
                    config.language = args_iter
                        .next()
                        .ok_or(ConfigError::MissingValue("--lang"))?;
                }
                "-i" | "--input" => {
                    config.input_file = Some(
                        args_iter
                            .next()
                            .ok_or(ConfigError::MissingValue("--input"))?,
                    );
                }
                "-c" | "--candidates" => config.show_candidates = true,
                "-v" | "--verbose" => config.verbose = true,
                _ => {
                    if arg.starts_with('-') && arg.len() > 1 && !starts_with_digit(&arg[1..]) {
                        return Err(ConfigError::UnknownOption(arg));
                    }
                    // Argumento posicional = texto a analizar ("-5" también)
                    config.text = Some(arg);
                }
            }
        }

        config.language = Self::canonicalize_language(&config.language)?;
        Ok(config)
    }

    fn canonicalize_language(language: &str) -> Result<String, ConfigError> {
        let normalized = language.trim().to_lowercase();
        match normalized.as_str() {
            "es" | "spanish" | "espanol" | "español" => Ok("es".to_string()),
            _ => Err(ConfigError::UnsupportedLanguage(normalized)),
        }
    }

    pub fn print_help() {
        println!(
            r#"Numerales - Reconocimiento de numerales en español

USO:
    numerales [OPCIONES] [TEXTO]

ARGUMENTOS:
    [TEXTO]    Texto a analizar

OPCIONES:
    -h, --help                  Muestra esta ayuda
    -l, --lang <IDIOMA>         Idioma a usar (default: es)
    -i, --input <ARCHIVO>       Archivo de entrada
    -c, --candidates            Muestra todos los candidatos, no solo los resueltos
    -v, --verbose               Trazas de depuración (o RUST_LOG=debug)

EJEMPLOS:
    numerales "treinta y siete"
    numerales "cuesta 2.5m o 1.234.567,89"
    numerales --input archivo.txt"#
        );
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_digit() || c == ',' || c == '.')
}
