use std::io;

use regex::Regex;
use thiserror::Error;

use crate::grammar::{ARTICLES, NOUNS, PREPOSITION, VERBS};

/// Error types for the sentence generator
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Sentence does not match the grammar: {0:?}")]
    Malformed(String),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Checks that a string belongs to the language the sentence grammar derives.
#[derive(Debug, Clone)]
pub struct SentenceValidator {
    pattern: Regex,
}

impl SentenceValidator {
    /// Compile the sentence pattern
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(&sentence_pattern())?;
        Ok(SentenceValidator { pattern })
    }

    /// Whether `sentence` is derivable from `<SENTENCE>`
    pub fn is_well_formed(&self, sentence: &str) -> bool {
        self.pattern.is_match(sentence)
    }

    /// Like [`is_well_formed`](Self::is_well_formed), but as a `Result`
    pub fn check(&self, sentence: &str) -> Result<()> {
        if self.is_well_formed(sentence) {
            Ok(())
        } else {
            Err(GrammarError::Malformed(sentence.to_string()))
        }
    }
}

fn alternation(set: &[&str]) -> String {
    let escaped: Vec<String> = set.iter().map(|t| regex::escape(t)).collect();
    format!("(?:{})", escaped.join("|"))
}

/// Build the anchored pattern for a whole sentence.
///
/// NOUN-PHRASE is `CN( with CN)?` and VERB-PHRASE is `VERB( NP)?( with CN)?`,
/// so the object noun-phrase and the verb phrase's own prep-phrase can both
/// be present.
pub fn sentence_pattern() -> String {
    let complex_noun = format!("{} {}", alternation(ARTICLES), alternation(NOUNS));
    let prep_phrase = format!("{} {}", regex::escape(PREPOSITION), complex_noun);
    let noun_phrase = format!("{cn}(?: {pp})?", cn = complex_noun, pp = prep_phrase);

    format!(
        "^{np} {verb}(?: {np})?(?: {pp})?$",
        np = noun_phrase,
        verb = alternation(VERBS),
        pp = prep_phrase
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_grammar_sentences() {
        let validator = SentenceValidator::new().unwrap();

        for sentence in [
            "a boy touches",
            "the girl with a flower sees",
            "a bird likes the boy",
            "the flower sees with a girl",
            "a boy likes the girl with the bird",
            "a boy with a boy touches a boy with a boy with a boy",
        ] {
            assert!(validator.is_well_formed(sentence), "{}", sentence);
            assert!(validator.check(sentence).is_ok());
        }
    }

    #[test]
    fn test_rejects_malformed_sentences() {
        let validator = SentenceValidator::new().unwrap();

        for sentence in [
            "",
            "boy touches",
            "a boy",
            " a boy touches",
            "a boy touches ",
            "a  boy touches",
            "a dog touches",
            "a boy touches with",
            "a boy touches with a boy with a boy",
            "a boy touches a girl a bird",
        ] {
            assert!(!validator.is_well_formed(sentence), "{:?}", sentence);
        }
    }

    #[test]
    fn test_check_reports_sentence() {
        let validator = SentenceValidator::new().unwrap();
        let err = validator.check("the boy").unwrap_err();

        assert!(matches!(err, GrammarError::Malformed(ref s) if s == "the boy"));
        assert_eq!(
            err.to_string(),
            "Sentence does not match the grammar: \"the boy\""
        );
    }
}
