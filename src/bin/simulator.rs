use affinity_core::{logging, AffinityEngine, EngineConfig, Word};
use log::{info, warn};
use serde_json::{json, Value};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

const DEFAULT_WORKERS: usize = 4;

struct Args {
    workers: usize,
    input: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args { workers: DEFAULT_WORKERS, input: None };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--workers" | "-w" => {
                let n = iter.next().ok_or("--workers needs a value")?;
                args.workers = n
                    .parse()
                    .ok()
                    .filter(|&n: &usize| n > 0)
                    .ok_or_else(|| format!("invalid worker count '{}'", n))?;
            }
            path if args.input.is_none() => args.input = Some(path.to_string()),
            other => return Err(format!("unexpected argument '{}'", other)),
        }
    }
    Ok(args)
}

fn read_lines(input: Option<&str>) -> io::Result<Vec<String>> {
    match input {
        Some(path) => BufReader::new(File::open(path)?).lines().collect(),
        None => io::stdin().lock().lines().collect(),
    }
}

/// Writes one JSON line; a failed write is logged and the batch carries on.
fn emit<W: Write>(sink: &mut W, line: usize, out: &Value) -> bool {
    match writeln!(sink, "{}", out) {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to write output for line {}: {}", line, e);
            false
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init()?;

    let args = parse_args()?;
    let engine = AffinityEngine::with_config(EngineConfig::from_env()?);
    let lines = read_lines(args.input.as_deref())?;
    info!("analyzing {} lines with {} workers", lines.len(), args.workers);

    let next = AtomicUsize::new(0);
    let stdout = io::stdout();
    let stderr = io::stderr();

    thread::scope(|scope| {
        for _ in 0..args.workers {
            scope.spawn(|| loop {
                let i = next.fetch_add(1, Ordering::Relaxed);
                let Some(line) = lines.get(i) else { break };
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }

                match Word::parse(text) {
                    Ok(word) => {
                        let analysis = engine.analyze(&word);
                        let out = json!({
                            "text": word,
                            "value": analysis.value,
                            "lexical": analysis.lexical,
                        });
                        emit(&mut stdout.lock(), i + 1, &out);
                    }
                    Err(e) => {
                        let out = json!({ "line": i + 1, "error": e.to_string() });
                        emit(&mut stderr.lock(), i + 1, &out);
                    }
                }
            });
        }
    });

    let stats = engine.stats();
    info!(
        "done: {} distinct words, {} scores, max score {:?}",
        stats.words, stats.buckets, stats.max_score
    );
    Ok(())
}
