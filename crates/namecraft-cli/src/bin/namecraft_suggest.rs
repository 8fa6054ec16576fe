// namecraft-suggest: Generate creative word suggestions for a topic.
//
// The topic is given as arguments, or read from stdin (one topic per line)
// when no words are given.
//
// Usage:
//   namecraft-suggest [OPTIONS] [WORD...]
//
// Options:
//   -n, --count N   Maximum suggestions per category (default: 20)
//       --seed S    Seed the random source for reproducible output
//       --json      Print the result as a JSON object
//   -h, --help      Print help

use std::io::{self, BufRead};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use namecraft_gen::{Category, creative_suggestions_with};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if namecraft_cli::wants_help(&args) {
        println!("namecraft-suggest: Generate creative word suggestions.");
        println!();
        println!("Usage: namecraft-suggest [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, they form the topic phrase.");
        println!("Otherwise topics are read from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -n, --count N   Maximum suggestions per category (default: 20)");
        println!("      --seed S    Seed the random source for reproducible output");
        println!("      --json      Print the result as a JSON object");
        println!("  -h, --help      Print this help");
        return;
    }

    let (count_arg, args) = namecraft_cli::take_flag_value(&args, "--count", "-n");
    let (seed_arg, args) = namecraft_cli::take_flag_value(&args, "--seed", "--seed");
    let count: usize = count_arg
        .map(|v| namecraft_cli::parse_number(&v, "--count"))
        .unwrap_or(20);
    let seed: Option<u64> = seed_arg.map(|v| namecraft_cli::parse_number(&v, "--seed"));

    let mut json = false;
    let mut words: Vec<String> = Vec::new();
    for arg in &args {
        if arg == "--json" {
            json = true;
        } else if arg.starts_with('-') {
            namecraft_cli::fatal(&format!("unknown option {arg}"));
        } else {
            words.push(arg.clone());
        }
    }

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let topic = line.trim();
            if topic.is_empty() {
                continue;
            }
            print_suggestions(topic, count, rng.as_mut(), json);
        }
    } else {
        print_suggestions(&words.join(" "), count, rng.as_mut(), json);
    }
}

fn print_suggestions(topic: &str, count: usize, rng: &mut dyn RngCore, json: bool) {
    let suggestions = creative_suggestions_with(topic, count, rng);

    if json {
        match serde_json::to_string_pretty(&suggestions) {
            Ok(out) => println!("{out}"),
            Err(e) => namecraft_cli::fatal(&format!("failed to serialize result: {e}")),
        }
        return;
    }

    println!("{topic}:");
    for category in Category::ALL {
        let items = suggestions.category(category);
        if items.is_empty() {
            continue;
        }
        println!("  {}: {}", category.name(), items.join(", "));
    }
}
