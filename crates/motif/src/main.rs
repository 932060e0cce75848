//! Motif CLI
//!
//! Matches inputs against the `root/{a}/{b}-{c}.mp3` template.

use motif::config::RunConfig;
use motif::demo::{self, DEMO_INPUTS};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    let mut config = match RunConfig::from_env(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let positional = match config.apply_args(&args) {
        Ok(positional) => positional,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    motif::init_tracing(config.log_tree);

    let inputs: Vec<&str> = match positional.first().map(String::as_str) {
        None | Some("demo") => DEMO_INPUTS.to_vec(),
        Some("match") => {
            if positional.len() < 2 {
                eprintln!("Usage: motif match <input>... [--max-branches=N]");
                std::process::exit(1);
            }
            positional[1..].iter().map(String::as_str).collect()
        }
        Some("help") => {
            print_usage();
            return;
        }
        Some(other) => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let pattern = demo::song_pattern();
    println!("pattern: {pattern}");
    for input in inputs {
        match demo::run(&pattern, input, &config) {
            Ok(outcome) => print!("{}", outcome.render(config.verbose)),
            Err(e) => {
                eprintln!("error: {input}: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Motif - string pattern matcher");
    println!();
    println!("Usage: motif [command] [options]");
    println!();
    println!("Commands:");
    println!("  demo                Match the built-in sample paths (default)");
    println!("  match <input>...    Match the given inputs");
    println!("  help                Show this help message");
    println!();
    println!("Options:");
    println!("  --max-branches=N    Abort a match after N explored branches");
    println!("  -v, --verbose       Report branches explored per input");
    println!();
    println!("Environment:");
    println!("  MOTIF_MAX_BRANCHES  Default for --max-branches");
    println!("  MOTIF_LOG_TREE      Render RUST_LOG traces as a tree");
}
