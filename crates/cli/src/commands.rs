//! Subcommands and their results.

use clap::builder::RangedU64ValueParser;
use clap::Subcommand;
use corelib::{
    normalize, split_for_parallelism, RowBounds, Token, TokenBounds, MAX_SPLIT_PARTS,
};
use serde_json::{json, Value};
use tracing::info;

use crate::parse::parse_bounds;

/// One operation of the range algebra, applied to bounds given as text.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Report which of the given tokens the bounds contains.
    Contains {
        /// Bounds such as `(10,5]`.
        bounds: String,
        /// Tokens to test.
        #[arg(required = true)]
        tokens: Vec<u64>,
    },
    /// Split the bounds at a token.
    Split { bounds: String, token: u64 },
    /// Decompose the bounds into non-wrapping pieces.
    Unwrap { bounds: String },
    /// Reduce a set of bounds to the minimal covering set.
    Normalize {
        #[arg(required = true)]
        bounds: Vec<String>,
    },
    /// Cut the bounds into sub-ranges for parallel scans.
    SplitScan {
        bounds: String,
        /// Sub-ranges per non-wrapping piece.
        #[arg(
            long,
            default_value_t = 4,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_SPLIT_PARTS as u64)
        )]
        parts: usize,
    },
    /// Show the row-space form of the bounds.
    Rows { bounds: String },
}

/// Outcome of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Bounds(Vec<TokenBounds>),
    Rows(RowBounds),
    Membership(Vec<(Token, bool)>),
    NothingToSplit,
}

impl Command {
    pub fn execute(&self) -> anyhow::Result<CommandResult> {
        let result = match self {
            Command::Contains { bounds, tokens } => {
                let bounds = parse_bounds(bounds)?;
                CommandResult::Membership(
                    tokens
                        .iter()
                        .map(|&t| (Token(t), bounds.contains(&Token(t))))
                        .collect(),
                )
            }
            Command::Split { bounds, token } => {
                match parse_bounds(bounds)?.split(&Token(*token))? {
                    Some((lo, hi)) => CommandResult::Bounds(vec![lo, hi]),
                    None => CommandResult::NothingToSplit,
                }
            }
            Command::Unwrap { bounds } => CommandResult::Bounds(parse_bounds(bounds)?.unwrap()),
            Command::Normalize { bounds } => {
                let parsed = bounds
                    .iter()
                    .map(|b| parse_bounds(b))
                    .collect::<anyhow::Result<Vec<_>>>()?;
                CommandResult::Bounds(normalize(parsed))
            }
            Command::SplitScan { bounds, parts } => {
                CommandResult::Bounds(split_for_parallelism(&parse_bounds(bounds)?, *parts)?)
            }
            Command::Rows { bounds } => CommandResult::Rows(parse_bounds(bounds)?.to_row_bounds()),
        };
        info!(command = ?self, "executed");
        Ok(result)
    }
}

impl CommandResult {
    /// One line per item.
    pub fn to_text(&self) -> String {
        match self {
            CommandResult::Bounds(bounds) => bounds
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            CommandResult::Rows(rows) => rows.to_string(),
            CommandResult::Membership(members) => members
                .iter()
                .map(|(t, inside)| format!("{t}\t{inside}"))
                .collect::<Vec<_>>()
                .join("\n"),
            CommandResult::NothingToSplit => "nothing to split".to_string(),
        }
    }

    /// The wire form of the result.
    pub fn to_json(&self) -> anyhow::Result<Value> {
        Ok(match self {
            CommandResult::Bounds(bounds) => serde_json::to_value(bounds)?,
            CommandResult::Rows(rows) => serde_json::to_value(rows)?,
            CommandResult::Membership(members) => Value::Array(
                members
                    .iter()
                    .map(|(t, inside)| json!({ "token": t, "contained": inside }))
                    .collect(),
            ),
            CommandResult::NothingToSplit => Value::Array(Vec::new()),
        })
    }
}
