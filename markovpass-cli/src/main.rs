use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use markovpass_core::corpus::Corpus;
use markovpass_core::model::constraints::{GenerationConstraints, sampled_order};
use markovpass_core::model::generator::ConstrainedGenerator;
use markovpass_core::model::passphrase::PassphraseBuilder;

/// Generate pronounceable passphrases from a Markov chain trained on a
/// word list.
#[derive(Parser)]
#[command(
    name = "markovpass",
    version,
    about = "Generate pronounceable passphrases from a word list",
    after_help = "Unspecified order and length bounds are drawn at random \
                  from small reference ranges at each invocation."
)]
struct Cli {
    /// Generate N hyphen-delimited tokens
    #[arg(long, default_value_t = 2)]
    count: usize,

    /// Chain order (default: 3 or 4)
    #[arg(long)]
    order: Option<usize>,

    /// Minimum token length (default: 3 or 4)
    #[arg(long)]
    min_length: Option<usize>,

    /// Maximum token length (default: 6 or 7)
    #[arg(long)]
    max_length: Option<usize>,

    /// Give up on a token after N rejected draws
    #[arg(long, default_value_t = 100)]
    max_attempts: usize,

    /// Accept tokens that are literal dictionary words
    #[arg(long)]
    allow_duplicates: bool,

    /// Word list to train on, one word per line
    #[arg(long, default_value = "/usr/share/dict/words")]
    wordlist: PathBuf,

    /// Print the full result object as JSON
    #[arg(long)]
    json: bool,
}

/// Keeps only words usable as training material: 3 to 9 characters,
/// strictly alphabetic. Possessives, hyphenated entries, and abbreviations
/// common in system dictionaries are dropped.
fn usable_word(word: &str) -> bool {
    (3..=9).contains(&word.chars().count()) && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Loads a word list file and curates it into a corpus.
fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let mut contents = String::new();
    File::open(&path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .with_context(|| format!("failed to read word list {}", path.as_ref().display()))?;

    Ok(Corpus::new(contents.lines().map(str::trim).filter(|word| usable_word(word))))
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut rng = rand::rng();
    let order = cli.order.unwrap_or_else(|| sampled_order(&mut rng));
    let defaults = GenerationConstraints::sampled(&mut rng);
    let constraints = GenerationConstraints {
        min_length: cli.min_length.unwrap_or(defaults.min_length),
        max_length: cli.max_length.unwrap_or(defaults.max_length),
        max_attempts: cli.max_attempts,
        allow_duplicates: cli.allow_duplicates,
    };

    let corpus = load_corpus(&cli.wordlist)?;
    log::debug!("trained on {} words, order {order}", corpus.len());

    let generator = ConstrainedGenerator::new(corpus, order)?;
    let outcome = PassphraseBuilder::new(generator, constraints).build(cli.count, &mut rng);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_complete() {
        println!("{}", outcome.join("-"));
    }

    if outcome.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "markovpass: unable to generate {} tokens with the given constraints (got {})",
            outcome.options.count,
            outcome.result.len()
        );
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::usable_word;

    #[test]
    fn curation_keeps_plain_short_words() {
        assert!(usable_word("cat"));
        assert!(usable_word("Zephyr"));
        assert!(usable_word("abandoned"));
    }

    #[test]
    fn curation_drops_unusable_entries() {
        assert!(!usable_word("it"));
        assert!(!usable_word("encyclopedia"));
        assert!(!usable_word("aaron's"));
        assert!(!usable_word("mother-in-law"));
        assert!(!usable_word(""));
    }
}
