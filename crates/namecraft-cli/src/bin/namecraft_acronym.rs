// namecraft-acronym: Print acronym forms for a phrase.
//
// Usage:
//   namecraft-acronym [WORD...]
//
// The phrase is given as arguments, or read from stdin (one phrase per
// line) when no words are given. A phrase without any word of three or
// more characters has no acronym; that is reported, not an error.

use std::io::{self, BufRead};

use namecraft_gen::acronym_forms;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if namecraft_cli::wants_help(&args) {
        println!("namecraft-acronym: Print acronym forms for a phrase.");
        println!();
        println!("Usage: namecraft-acronym [WORD...]");
        println!();
        println!("If WORD arguments are given, they form the phrase.");
        println!("Otherwise phrases are read from stdin (one per line).");
        return;
    }

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-')) {
        namecraft_cli::fatal(&format!("unknown option {unknown}"));
    }

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let phrase = line.trim();
            if phrase.is_empty() {
                continue;
            }
            print_acronyms(phrase);
        }
    } else {
        print_acronyms(&args.join(" "));
    }
}

fn print_acronyms(phrase: &str) {
    match acronym_forms(phrase) {
        Ok(forms) => {
            println!("{phrase}:");
            println!("  simple:     {}", forms.simple);
            println!("  two-letter: {}", forms.two_letter);
            println!("  consonants: {}", forms.consonants);
            println!("  variations: {}", forms.variations.join(", "));
        }
        Err(e) => println!("{phrase}: {e}"),
    }
}
