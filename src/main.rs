//! idshift CLI - batch sanitize/desanitize identifier columns.
//!
//! The only interface is one question on stdin:
//!
//! ```text
//! Want to sanitize data? (y/n)
//! ```
//!
//! `y` sanitizes everything under the sanitize input directory, `n`
//! desanitizes the desanitize input directory. There are no flags and
//! no behavior-changing environment variables; `RUST_LOG` only adjusts
//! log verbosity. The process exits 0 once the batch has been
//! attempted, whatever happened to individual files.

use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use idshift::{batch, BatchOptions, Config, Direction};

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env).init();

    let stdin = io::stdin();
    let Some(direction) = prompt_direction(&mut stdin.lock()) else {
        info!("no mode selected; nothing to do");
        return;
    };

    let config = Config::load_or_default();
    let options = BatchOptions::from_config(&config, direction);

    info!(
        "{} {} -> {}",
        direction.mode_name(),
        options.input_dir.display(),
        options.output_dir.display()
    );

    let start = Instant::now();
    let report = batch::run(&options);

    for failure in &report.failures {
        error!(
            "failed: {} ({})",
            failure.path.display(),
            failure.error.kind()
        );
    }
    info!("{} in {:.2?}", report.summary(), start.elapsed());
}

/// Ask for the mode until the answer is recognizable.
///
/// `y`/`yes` selects sanitize, `n`/`no` desanitize, case-insensitive
/// with surrounding whitespace ignored; anything else re-prompts.
/// Returns `None` when stdin is exhausted before a valid answer.
fn prompt_direction(input: &mut impl BufRead) -> Option<Direction> {
    loop {
        print!("Want to sanitize data? (y/n) ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Some(Direction::Forward),
            "n" | "no" => return Some(Direction::Backward),
            other => println!("Unrecognized answer '{other}', please enter 'y' or 'n'."),
        }
    }
}
