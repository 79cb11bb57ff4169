use crate::grammar::{ARTICLES, NOUNS, PREPOSITION, VERBS};
use crate::source::RandomSource;

/// Which side of a two-way production was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// `A`
    Base,
    /// `A B`
    Extended,
}

/// Draw one of two equally likely branches. A draw of 0 selects
/// [`Branch::Base`], a draw of 1 selects [`Branch::Extended`].
pub fn choose_branch<S: RandomSource + ?Sized>(source: &mut S) -> Branch {
    match source.below(2) {
        0 => Branch::Base,
        _ => Branch::Extended,
    }
}

/// Pick one element of a non-empty terminal set with probability 1/len.
pub fn choose_terminal<S: RandomSource + ?Sized>(
    source: &mut S,
    set: &'static [&'static str],
) -> &'static str {
    set[source.below(set.len())]
}

/// Join already produced parts with single spaces.
///
/// Parts are trimmed and empty parts are dropped, so the result never has a
/// leading, trailing or doubled space.
pub fn join_words<I, T>(parts: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut result = String::new();
    for part in parts {
        let part = part.as_ref().trim();
        if part.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(part);
    }
    result
}

/// The `A | A B` combinator.
///
/// `base` is always expanded first; then a branch is drawn and `extra` is
/// expanded only on [`Branch::Extended`].
pub fn append_optional<S, B, E>(source: &mut S, base: B, extra: E) -> String
where
    S: RandomSource + ?Sized,
    B: FnOnce(&mut S) -> String,
    E: FnOnce(&mut S) -> String,
{
    let base_text = base(source);
    match choose_branch(source) {
        Branch::Base => base_text,
        Branch::Extended => {
            let extra_text = extra(source);
            join_words([base_text, extra_text])
        }
    }
}

/// Expands the sentence grammar, one method per non-terminal.
///
/// The expander owns its random source; every draw goes through
/// [`choose_branch`] or [`choose_terminal`].
#[derive(Debug, Clone)]
pub struct SentenceExpander<R> {
    source: R,
}

impl<R: RandomSource> SentenceExpander<R> {
    /// Create an expander that draws from `source`
    pub fn new(source: R) -> Self {
        SentenceExpander { source }
    }

    /// The underlying random source
    pub fn source(&self) -> &R {
        &self.source
    }

    /// `<SENTENCE> -> <NOUN-PHRASE> <VERB-PHRASE>`
    pub fn sentence(&mut self) -> String {
        let noun_phrase = self.noun_phrase();
        let verb_phrase = self.verb_phrase();
        join_words([noun_phrase, verb_phrase])
    }

    /// `<NOUN-PHRASE> -> <CMPLX-NOUN> | <CMPLX-NOUN> <PREP-PHRASE>`
    pub fn noun_phrase(&mut self) -> String {
        append_optional(self, Self::complex_noun, Self::prep_phrase)
    }

    /// `<VERB-PHRASE> -> <CMPLX-VERB> | <CMPLX-VERB> <PREP-PHRASE>`
    pub fn verb_phrase(&mut self) -> String {
        append_optional(self, Self::complex_verb, Self::prep_phrase)
    }

    /// `<PREP-PHRASE> -> <PREP> <CMPLX-NOUN>`
    pub fn prep_phrase(&mut self) -> String {
        let prep = self.preposition();
        let noun = self.complex_noun();
        join_words([prep, noun.as_str()])
    }

    /// `<CMPLX-NOUN> -> <ARTICLE> <NOUN>`
    pub fn complex_noun(&mut self) -> String {
        let article = self.article();
        let noun = self.noun();
        join_words([article, noun])
    }

    /// `<CMPLX-VERB> -> <VERB> | <VERB> <NOUN-PHRASE>`
    pub fn complex_verb(&mut self) -> String {
        append_optional(self, |e| e.verb().to_string(), Self::noun_phrase)
    }

    /// `<ARTICLE> -> a | the`
    pub fn article(&mut self) -> &'static str {
        choose_terminal(&mut self.source, ARTICLES)
    }

    /// `<NOUN> -> boy | girl | flower | bird`
    pub fn noun(&mut self) -> &'static str {
        choose_terminal(&mut self.source, NOUNS)
    }

    /// `<VERB> -> touches | likes | sees`
    pub fn verb(&mut self) -> &'static str {
        choose_terminal(&mut self.source, VERBS)
    }

    /// `<PREP> -> with`, no draw
    pub fn preposition(&self) -> &'static str {
        PREPOSITION
    }
}

/// Lets the expansion methods pass `self` to [`append_optional`]; draws are
/// forwarded to the owned source.
impl<R: RandomSource> RandomSource for SentenceExpander<R> {
    fn below(&mut self, bound: usize) -> usize {
        self.source.below(bound)
    }
}
