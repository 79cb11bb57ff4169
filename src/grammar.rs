use std::fmt;

/// `<ARTICLE> -> a | the`
pub const ARTICLES: &[&str] = &["a", "the"];
/// `<NOUN> -> boy | girl | flower | bird`
pub const NOUNS: &[&str] = &["boy", "girl", "flower", "bird"];
/// `<VERB> -> touches | likes | sees`
pub const VERBS: &[&str] = &["touches", "likes", "sees"];
/// `<PREP> -> with`
pub const PREPOSITION: &str = "with";

/// An element on the right-hand side of a production
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Literal output text
    Terminal(&'static str),
    /// Reference to another rule
    NonTerminal(NonTerminal),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Terminal(text) => f.write_str(text),
            Element::NonTerminal(symbol) => write!(f, "<{}>", symbol.name()),
        }
    }
}

/// The symbols of the sentence grammar, in dependency order from the start
/// symbol down to the terminal categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Sentence,
    NounPhrase,
    VerbPhrase,
    PrepPhrase,
    ComplexNoun,
    ComplexVerb,
    Article,
    Noun,
    Verb,
    Prep,
}

impl NonTerminal {
    /// Every symbol, start symbol first
    pub const ALL: [NonTerminal; 10] = [
        NonTerminal::Sentence,
        NonTerminal::NounPhrase,
        NonTerminal::VerbPhrase,
        NonTerminal::PrepPhrase,
        NonTerminal::ComplexNoun,
        NonTerminal::ComplexVerb,
        NonTerminal::Article,
        NonTerminal::Noun,
        NonTerminal::Verb,
        NonTerminal::Prep,
    ];

    /// The symbol as written in the grammar, e.g. `NOUN-PHRASE`
    pub fn name(self) -> &'static str {
        match self {
            NonTerminal::Sentence => "SENTENCE",
            NonTerminal::NounPhrase => "NOUN-PHRASE",
            NonTerminal::VerbPhrase => "VERB-PHRASE",
            NonTerminal::PrepPhrase => "PREP-PHRASE",
            NonTerminal::ComplexNoun => "CMPLX-NOUN",
            NonTerminal::ComplexVerb => "CMPLX-VERB",
            NonTerminal::Article => "ARTICLE",
            NonTerminal::Noun => "NOUN",
            NonTerminal::Verb => "VERB",
            NonTerminal::Prep => "PREP",
        }
    }

    /// The right-hand sides of this symbol's productions, in the order the
    /// expander numbers its branches.
    pub fn alternatives(self) -> Vec<Vec<Element>> {
        use Element::NonTerminal as N;
        use NonTerminal::*;

        match self {
            Sentence => vec![vec![N(NounPhrase), N(VerbPhrase)]],
            NounPhrase => vec![vec![N(ComplexNoun)], vec![N(ComplexNoun), N(PrepPhrase)]],
            VerbPhrase => vec![vec![N(ComplexVerb)], vec![N(ComplexVerb), N(PrepPhrase)]],
            PrepPhrase => vec![vec![N(Prep), N(ComplexNoun)]],
            ComplexNoun => vec![vec![N(Article), N(Noun)]],
            ComplexVerb => vec![vec![N(Verb)], vec![N(Verb), N(NounPhrase)]],
            Article => terminals(ARTICLES),
            Noun => terminals(NOUNS),
            Verb => terminals(VERBS),
            Prep => vec![vec![Element::Terminal(PREPOSITION)]],
        }
    }

    /// Whether every alternative of this symbol is a single terminal
    pub fn is_terminal_category(self) -> bool {
        matches!(
            self,
            NonTerminal::Article | NonTerminal::Noun | NonTerminal::Verb | NonTerminal::Prep
        )
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn terminals(set: &'static [&'static str]) -> Vec<Vec<Element>> {
    set.iter().map(|&t| vec![Element::Terminal(t)]).collect()
}

/// Render the grammar one rule per line, e.g.
/// `<NOUN-PHRASE> -> <CMPLX-NOUN> | <CMPLX-NOUN> <PREP-PHRASE>`.
pub fn describe_grammar() -> String {
    NonTerminal::ALL
        .iter()
        .map(|symbol| {
            let rhs = symbol
                .alternatives()
                .iter()
                .map(|alt| {
                    alt.iter()
                        .map(Element::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join(" | ");
            format!("<{}> -> {}", symbol.name(), rhs)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
