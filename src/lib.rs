//! Sentence-Gen derives random English-like sentences from a small, fixed
//! context-free grammar.
//!
//! ```text
//! <SENTENCE>    -> <NOUN-PHRASE> <VERB-PHRASE>
//! <NOUN-PHRASE> -> <CMPLX-NOUN> | <CMPLX-NOUN> <PREP-PHRASE>
//! <VERB-PHRASE> -> <CMPLX-VERB> | <CMPLX-VERB> <PREP-PHRASE>
//! <PREP-PHRASE> -> <PREP> <CMPLX-NOUN>
//! <CMPLX-NOUN>  -> <ARTICLE> <NOUN>
//! <CMPLX-VERB>  -> <VERB> | <VERB> <NOUN-PHRASE>
//! ```
//!
//! Two-way productions are taken with equal probability and terminals are
//! chosen uniformly.
//!
//! # Example
//!
//! ```rust
//! use sentence_gen::{SentenceExpander, SentenceValidator, ScriptedSource};
//!
//! // Always take the first alternative and the first terminal
//! let mut expander = SentenceExpander::new(ScriptedSource::constant(0));
//! assert_eq!(expander.sentence(), "a boy touches");
//!
//! // Any random source works too
//! let mut expander = SentenceExpander::new(sentence_gen::rng_from_seed(Some(7)));
//! let validator = SentenceValidator::new().unwrap();
//! assert!(validator.is_well_formed(&expander.sentence()));
//! ```

pub mod driver;
pub mod expander;
pub mod grammar;
pub mod source;
pub mod utils;

pub use driver::{GeneratorConfig, OutputFormat};
pub use expander::{
    Branch, SentenceExpander, append_optional, choose_branch, choose_terminal, join_words,
};
pub use grammar::{Element, NonTerminal, describe_grammar};
pub use source::{RandomSource, ScriptedSource, rng_from_seed};
pub use utils::{GrammarError, Result, SentenceValidator};
