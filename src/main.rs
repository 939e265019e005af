use std::fs;
use std::process;

use tracing_subscriber::EnvFilter;

use numerales::languages::get_language;
use numerales::{Config, Entity, NumeralAnalyzer};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_entity(entity: &Entity) {
    println!(
        "{}..{}\t{}\t{}\t{}",
        entity.start, entity.end, entity.text, entity.value, entity.rule
    );
}

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    init_logging(config.verbose);

    let Some(language) = get_language(&config.language) else {
        eprintln!("Error: idioma no soportado '{}'", config.language);
        process::exit(1);
    };

    // Obtener texto a analizar
    let text = if let Some(ref input_file) = config.input_file {
        match fs::read_to_string(input_file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error leyendo archivo '{}': {}", input_file, e);
                process::exit(1);
            }
        }
    } else if let Some(ref text) = config.text {
        text.clone()
    } else {
        eprintln!("Error: No se proporcionó texto para analizar.");
        eprintln!();
        Config::print_help();
        process::exit(1);
    };

    let analyzer = NumeralAnalyzer::new(language.rules());
    let entities = if config.show_candidates {
        analyzer.candidates(&text)
    } else {
        analyzer.analyze(&text)
    };

    if entities.is_empty() {
        eprintln!("No se reconoció ningún número.");
    }
    for entity in &entities {
        print_entity(entity);
    }
}
