use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use crate::expander::SentenceExpander;
use crate::source::{RandomSource, rng_from_seed};
use crate::utils::{Result, SentenceValidator};

pub const TITLE: &str = "Context-Free Grammar Sentence Generator";
pub const COMPLETION_MESSAGE: &str = "Program completed successfully.";
pub const SEPARATOR_WIDTH: usize = 70;

/// How generated sentences are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Numbered console listing between separator lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Configuration options for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of sentences to derive
    pub count: usize,
    /// Seed for the random source; `None` seeds from OS entropy
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 5,
            seed: None,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    count: usize,
    seed: Option<u64>,
    sentences: &'a [String],
}

/// Derive `count` independent sentences, checking each against the grammar.
pub fn generate_sentences<R: RandomSource>(
    expander: &mut SentenceExpander<R>,
    validator: &SentenceValidator,
    count: usize,
) -> Result<Vec<String>> {
    let mut sentences = Vec::with_capacity(count);
    for i in 1..=count {
        let sentence = expander.sentence();
        debug!(index = i, sentence = %sentence, "derived sentence");
        validator.check(&sentence)?;
        sentences.push(sentence);
    }
    Ok(sentences)
}

/// The full-width `=` rule printed above and below the report
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Write the console report for already generated sentences.
pub fn write_text<W: Write>(out: &mut W, sentences: &[String]) -> Result<()> {
    let rule = separator();

    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;

    for (i, sentence) in sentences.iter().enumerate() {
        writeln!(out, "Sentence {}:", i + 1)?;
        writeln!(out, " {}", sentence)?;
        writeln!(out)?;
    }

    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", COMPLETION_MESSAGE)?;
    out.flush()?;
    Ok(())
}

/// Write the sentences as one pretty-printed JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    seed: Option<u64>,
    sentences: &[String],
) -> Result<()> {
    let report = JsonReport {
        count: sentences.len(),
        seed,
        sentences,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Run a full generation with the given configuration, writing the report
/// to `out`. Returns the sentences that were written.
pub fn run<W: Write>(config: &GeneratorConfig, out: &mut W) -> Result<Vec<String>> {
    let expander = SentenceExpander::new(rng_from_seed(config.seed));
    run_with(config, expander, out)
}

/// Like [`run`], but with a caller supplied expander.
pub fn run_with<R: RandomSource, W: Write>(
    config: &GeneratorConfig,
    mut expander: SentenceExpander<R>,
    out: &mut W,
) -> Result<Vec<String>> {
    info!(
        count = config.count,
        seed = ?config.seed,
        format = ?config.format,
        "generating sentences"
    );

    let validator = SentenceValidator::new()?;
    let sentences = generate_sentences(&mut expander, &validator, config.count)?;

    match config.format {
        OutputFormat::Text => write_text(out, &sentences)?,
        OutputFormat::Json => write_json(out, config.seed, &sentences)?,
    }

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;
    use pretty_assertions::assert_eq;

    fn minimal_expander() -> SentenceExpander<ScriptedSource> {
        SentenceExpander::new(ScriptedSource::constant(0))
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.count, 5);
        assert_eq!(config.seed, None);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_text_report_layout() {
        let config = GeneratorConfig {
            count: 2,
            ..GeneratorConfig::default()
        };
        let mut out = Vec::new();
        run_with(&config, minimal_expander(), &mut out).unwrap();

        let rule = "=".repeat(70);
        let expected = format!(
            "{rule}\n{TITLE}\n{rule}\n\n\
             Sentence 1:\n a boy touches\n\n\
             Sentence 2:\n a boy touches\n\n\
             {rule}\n{COMPLETION_MESSAGE}\n"
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_json_report() {
        let config = GeneratorConfig {
            count: 1,
            seed: Some(9),
            format: OutputFormat::Json,
        };
        let mut out = Vec::new();
        run_with(&config, minimal_expander(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "count": 1, "seed": 9, "sentences": ["a boy touches"] })
        );
    }

    #[test]
    fn test_zero_count_prints_frame_only() {
        let config = GeneratorConfig {
            count: 0,
            ..GeneratorConfig::default()
        };
        let mut out = Vec::new();
        let sentences = run_with(&config, minimal_expander(), &mut out).unwrap();

        assert!(sentences.is_empty());
        let rule = separator();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{rule}\n{TITLE}\n{rule}\n\n{rule}\n{COMPLETION_MESSAGE}\n")
        );
    }

    #[test]
    fn test_seeded_runs_match() {
        let config = GeneratorConfig {
            count: 10,
            seed: Some(2024),
            format: OutputFormat::Text,
        };
        let first = run(&config, &mut Vec::new()).unwrap();
        let second = run(&config, &mut Vec::new()).unwrap();
        assert_eq!(first, second);
    }
}
