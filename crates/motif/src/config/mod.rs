//! Run configuration for the `motif` binary.
//!
//! Settings come from the environment first and are then overridden by
//! command-line flags:
//!
//! | Flag                 | Environment          | Meaning                          |
//! |----------------------|----------------------|----------------------------------|
//! | `--max-branches=N`   | `MOTIF_MAX_BRANCHES` | Search budget per input          |
//! | `-v`, `--verbose`    |                      | Report branches explored         |
//! |                      | `MOTIF_LOG_TREE`     | Hierarchical trace output        |

use motif_patterns::MatchBudget;

/// Environment variable holding the default branch limit.
pub const MAX_BRANCHES_VAR: &str = "MOTIF_MAX_BRANCHES";

/// Environment variable selecting the hierarchical trace layer.
pub const LOG_TREE_VAR: &str = "MOTIF_LOG_TREE";

/// Configuration for a run of the driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Branch limit per matched input; `None` searches exhaustively.
    pub max_branches: Option<usize>,
    /// Report the number of explored branches alongside each result.
    pub verbose: bool,
    /// Render traces as an indented tree rather than flat lines.
    pub log_tree: bool,
}

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid branch limit `{0}`: expected a non-negative integer")]
    InvalidLimit(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

impl RunConfig {
    /// Read settings from the environment through `lookup`.
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_branches = match lookup(MAX_BRANCHES_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_limit(&raw)?),
            _ => None,
        };
        Ok(RunConfig {
            max_branches,
            verbose: false,
            log_tree: lookup(LOG_TREE_VAR).is_some(),
        })
    }

    /// Apply flags from `args`, returning the positional arguments in order.
    pub fn apply_args(&mut self, args: &[String]) -> Result<Vec<String>, ConfigError> {
        let mut positional = Vec::new();
        for arg in args {
            if let Some(raw) = arg.strip_prefix("--max-branches=") {
                self.max_branches = Some(parse_limit(raw)?);
            } else if arg == "-v" || arg == "--verbose" {
                self.verbose = true;
            } else if arg.starts_with('-') {
                return Err(ConfigError::UnknownOption(arg.clone()));
            } else {
                positional.push(arg.clone());
            }
        }
        Ok(positional)
    }

    /// A fresh search budget for one input.
    pub fn budget(&self) -> MatchBudget {
        match self.max_branches {
            Some(limit) => MatchBudget::with_limit(limit),
            None => MatchBudget::unlimited(),
        }
    }
}

fn parse_limit(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLimit(raw.to_string()))
}
