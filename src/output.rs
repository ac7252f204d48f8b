use serde::Serialize;
use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("SETLIST_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

/// Build the JSON envelope for a successful command
pub fn success_envelope<T: Serialize>(command: &str, data: &T) -> serde_json::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "ok": true,
        "command": command,
        "data": serde_json::to_value(data)?,
    }))
}

/// Build the JSON envelope for a failed command
pub fn error_envelope(command: &str, error: &str) -> serde_json::Value {
    serde_json::json!({
        "ok": false,
        "command": command,
        "error": error,
    })
}

pub fn emit_success<T: Serialize>(output_mode: OutputMode, command: &str, data: &T) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&success_envelope(command, data)?)?);
    }
    Ok(())
}

pub fn emit_error(output_mode: OutputMode, command: &str, error: &str) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&error_envelope(command, error))?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreStats;

    #[test]
    fn test_success_envelope() {
        let stats = StoreStats { songs: 4, artists: 3 };
        let value = success_envelope("stats", &stats).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["command"], "stats");
        assert_eq!(value["data"]["songs"], 4);
        assert_eq!(value["data"]["artists"], 3);
    }

    #[test]
    fn test_error_envelope() {
        let value = error_envelope("songs show", "Song not found: 9");
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"], "Song not found: 9");
    }
}
