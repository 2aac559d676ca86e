use std::env;
use std::path::PathBuf;
use std::process;

use tuak_vectors::error::VectorResult;
use tuak_vectors::{generate, GeneratorConfig};

fn run() -> VectorResult<()> {
    // Repository root from the first argument, otherwise search upwards
    let config = match env::args_os().nth(1) {
        Some(root) => GeneratorConfig::new(PathBuf::from(root)),
        None => GeneratorConfig::discover(&env::current_dir()?)?,
    };

    println!("Generating fixtures under {}", config.root.display());

    let report = generate(&config)?;

    println!(
        "Extracted {} Keccak-f[1600] vectors and {} TUAK vectors",
        report.keccak_vectors, report.tuak_vectors
    );
    for path in &report.written {
        println!("  wrote {}", path.display());
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error [{}]: {}", err.error_code(), err);
        eprintln!("{}", err.user_friendly_message());
        if let Some(remediation) = err.suggested_remediation() {
            eprintln!("hint: {}", remediation);
        }
        process::exit(1);
    }
}
