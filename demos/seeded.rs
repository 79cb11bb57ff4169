use sentence_gen::{NonTerminal, SentenceExpander, describe_grammar, rng_from_seed};
use std::error::Error;

/// Example of driving the expander directly with a fixed seed
fn main() -> Result<(), Box<dyn Error>> {
    println!("Grammar:");
    println!("{}\n", describe_grammar());

    let mut expander = SentenceExpander::new(rng_from_seed(Some(42)));

    println!("Seeded sentences:");
    for i in 1..=5 {
        println!("{}. {}", i, expander.sentence());
    }

    // Individual non-terminals can be expanded on their own
    println!("\nPieces:");
    println!("<{}>: {}", NonTerminal::NounPhrase, expander.noun_phrase());
    println!("<{}>: {}", NonTerminal::VerbPhrase, expander.verb_phrase());
    println!("<{}>: {}", NonTerminal::PrepPhrase, expander.prep_phrase());

    Ok(())
}
