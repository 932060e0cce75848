//! The demonstration: one path template matched against sample inputs.

use std::fmt::Write as _;

use motif_bindings::MapBindings;
use motif_patterns::{Pattern, PatternResult};

use crate::config::RunConfig;

/// Binding environment used by the driver.
pub type Env = MapBindings<&'static str>;

/// Inputs matched when no others are given.
pub const DEMO_INPUTS: [&str; 3] = [
    "root/greetings/hello-world.mp3",
    "root/text.txt",
    "root/a/b/c/d-e-f.mp3",
];

/// `root/{a}/{b}-{c}.mp3`
pub fn song_pattern() -> Pattern<&'static str, String> {
    Pattern::concat([
        Pattern::text("root/"),
        Pattern::variable("a"),
        Pattern::text("/"),
        Pattern::variable("b"),
        Pattern::text("-"),
        Pattern::variable("c"),
        Pattern::text(".mp3"),
    ])
}

/// Result of matching one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub input: String,
    pub matches: Vec<Env>,
    /// Branches explored by the search.
    pub branches: usize,
}

/// Match `input` against `pattern` under the configured budget.
#[tracing::instrument(level = "debug", skip(pattern, config))]
pub fn run(
    pattern: &Pattern<&'static str, String>,
    input: &str,
    config: &RunConfig,
) -> PatternResult<Outcome> {
    let mut budget = config.budget();
    let matches = pattern.matches_within(Env::new(), &input.to_string(), &mut budget)?;
    Ok(Outcome {
        input: input.to_string(),
        matches,
        branches: budget.spent(),
    })
}

impl Outcome {
    /// Human-readable report: a header line, then one line per binding set.
    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = match self.matches.len() {
            0 => write!(out, "{}: no match", self.input),
            1 => write!(out, "{}: 1 match", self.input),
            n => write!(out, "{}: {n} matches", self.input),
        };
        if verbose {
            let _ = write!(out, " ({} branches)", self.branches);
        }
        out.push('\n');
        for env in &self.matches {
            let _ = writeln!(out, "  {}", format_bindings(env));
        }
        out
    }
}

/// `{a = "x", b = "y"}`, keys sorted.
pub fn format_bindings(env: &Env) -> String {
    let pairs: Vec<String> = env
        .sorted()
        .into_iter()
        .map(|(key, value)| format!("{key} = {value}"))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
