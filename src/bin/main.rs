use affinity_core::{logging, AffinityEngine, Analysis, EngineConfig, Word};
use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};

const INVALID_INPUT: &str =
    "Invalid input. A word must not be empty or contain special chars, digits or spaces.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init()?;

    let engine = AffinityEngine::with_config(EngineConfig::from_env()?);

    println!("Word Affinity Engine. Type a word, ':stats' for corpus size, 'exit' to quit.");
    println!("---------------------------------------------------------------------------");

    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            ":stats" => {
                let stats = engine.stats();
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
            raw => match Word::parse(raw) {
                Ok(word) => {
                    let analysis = engine.analyze(&word);
                    print_analysis(&word, &analysis);
                }
                Err(e) => {
                    println!("{} ({})", INVALID_INPUT.red(), e);
                }
            },
        }
    }

    let stats = engine.stats();
    println!("\nSeen {} distinct words across {} scores.", stats.words, stats.buckets);
    Ok(())
}

fn print_analysis(word: &Word, analysis: &Analysis) {
    println!("Score of '{}': {}", word, affinity_core::core::value::score(word));
    let show = |found: &Option<Word>| match found {
        Some(w) => w.to_string().green().to_string(),
        None => "not found".dark_grey().to_string(),
    };
    println!("  value   -> {}", show(&analysis.value));
    println!("  lexical -> {}", show(&analysis.lexical));
    if let Ok(json) = serde_json::to_string_pretty(analysis) {
        println!("{}", json);
    }
}
