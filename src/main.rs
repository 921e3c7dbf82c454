use std::process::ExitCode;

use anyhow::Context;

pub mod partition;
pub mod report;
pub mod run;
pub mod scan;
pub mod table;

fn try_main(path: &str) -> anyhow::Result<()> {
    let input = std::fs::read(path).with_context(|| format!("reading {path}"))?;
    anyhow::ensure!(!input.is_empty(), "{path} is empty");

    let begin = std::time::Instant::now();
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let merged = run::aggregate(&input, workers);
    println!("{}", report::render(&merged));
    println!("elapsed: {}ms", begin.elapsed().as_millis());
    Ok(())
}

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "onebrc".to_string());
    let Some(path) = args.next() else {
        eprintln!("Usage: {program} <file>");
        return ExitCode::FAILURE;
    };
    if let Err(err) = try_main(&path) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
