//! Command Module
//!
//! Line-oriented commands for the stdin driver and their JSON responses.
//!
//! # Commands
//! - `put <key> <value...>` - the value is the rest of the line
//! - `get <key>` - lookup that refreshes recency
//! - `peek <key>` - lookup that leaves recency untouched
//! - `keys` - resident keys, most recently used first
//! - `len` - resident count and capacity
//! - `stats` - cache statistics

use serde::Serialize;
use tracing::warn;

use crate::cache::CacheStats;
use crate::error::{CacheError, Result};
use crate::shared::SharedCache;

// == Command ==
/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get { key: String },
    Peek { key: String },
    Keys,
    Len,
    Stats,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim_start()))
            .unwrap_or((line, ""));

        let command = match verb.to_ascii_lowercase().as_str() {
            "put" => {
                let (key, value) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    CacheError::InvalidCommand("put requires a key and a value".to_string())
                })?;
                Command::Put {
                    key: key.to_string(),
                    value: value.trim_start().to_string(),
                }
            }
            "get" => Command::Get {
                key: single_key("get", rest)?,
            },
            "peek" => Command::Peek {
                key: single_key("peek", rest)?,
            },
            "keys" => no_arguments("keys", rest, Command::Keys)?,
            "len" => no_arguments("len", rest, Command::Len)?,
            "stats" => no_arguments("stats", rest, Command::Stats)?,
            other => {
                return Err(CacheError::InvalidCommand(format!(
                    "unknown command '{}'",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn single_key(verb: &str, rest: &str) -> Result<String> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(CacheError::InvalidCommand(format!(
            "{} requires exactly one key",
            verb
        )));
    }
    Ok(rest.to_string())
}

fn no_arguments(verb: &str, rest: &str, command: Command) -> Result<Command> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CacheError::InvalidCommand(format!(
            "{} takes no arguments",
            verb
        )))
    }
}

// == Response ==
/// JSON body written for each executed command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Response {
    Put {
        key: String,
        previous: Option<String>,
    },
    Get {
        key: String,
        value: Option<String>,
    },
    Peek {
        key: String,
        value: Option<String>,
    },
    Keys {
        keys: Vec<String>,
    },
    Len {
        len: usize,
        capacity: usize,
    },
    Stats {
        stats: CacheStats,
        hit_rate: f64,
    },
}

/// JSON body written for a line that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// == Execute ==
/// Runs a command against the shared cache.
pub async fn execute(cache: &SharedCache<String, String>, command: Command) -> Response {
    match command {
        Command::Put { key, value } => {
            let previous = cache.put(key.clone(), value).await;
            Response::Put { key, previous }
        }
        Command::Get { key } => {
            let value = cache.get(&key).await;
            Response::Get { key, value }
        }
        Command::Peek { key } => {
            let value = cache.peek(&key).await;
            Response::Peek { key, value }
        }
        Command::Keys => Response::Keys {
            keys: cache.keys().await,
        },
        Command::Len => Response::Len {
            len: cache.len().await,
            capacity: cache.capacity().await,
        },
        Command::Stats => {
            let stats = cache.stats().await;
            let hit_rate = stats.hit_rate();
            Response::Stats { stats, hit_rate }
        }
    }
}

// == Handle Line ==
/// Parses and executes one input line, returning the JSON to print.
///
/// Returns `Ok(None)` for lines that produce no output.
pub async fn handle_line(
    cache: &SharedCache<String, String>,
    line: &str,
) -> serde_json::Result<Option<String>> {
    match Command::parse(line) {
        Ok(Some(command)) => {
            let response = execute(cache, command).await;
            serde_json::to_string(&response).map(Some)
        }
        Ok(None) => Ok(None),
        Err(err) => {
            warn!("Rejected input line: {}", err);
            serde_json::to_string(&ErrorResponse::new(err.to_string())).map(Some)
        }
    }
}
