//! tsconfig.json parsing
//!
//! tsconfig files are routinely written with comments and trailing commas,
//! so anything strict JSON rejects gets a second pass through JSON5.

use crate::error::{read_file, Result, UnimportedError};
use crate::models::package::TsConfig;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

pub struct TsConfigParser;

impl TsConfigParser {
    pub fn parse(content: &str) -> Result<TsConfig> {
        let json_value =
            parse_tsconfig_value(content).map_err(|e| UnimportedError::json_parse_error("tsconfig.json", e))?;

        let mut config = TsConfig::default();
        let Some(options) = json_value.get("compilerOptions").and_then(Value::as_object) else {
            return Ok(config);
        };

        config.base_url = options.get("baseUrl").and_then(Value::as_str).map(str::to_string);

        if let Some(Value::Object(paths)) = options.get("paths") {
            let mut table = IndexMap::new();
            for (pattern, targets) in paths {
                let targets = match targets {
                    Value::Array(items) => items.iter().filter_map(Value::as_str).map(str::to_string).collect(),
                    Value::String(single) => vec![single.clone()],
                    _ => Vec::new(),
                };
                table.insert(pattern.clone(), targets);
            }
            config.paths = table;
        }

        Ok(config)
    }

    pub fn parse_file(path: &Path) -> Result<TsConfig> {
        let content = read_file(path)?;

        Self::parse(&content).map_err(|e| match e {
            UnimportedError::JsonParse { source, .. } => UnimportedError::JsonParse {
                file: path.to_path_buf(),
                source,
            },
            _ => e,
        })
    }
}

/// Strict JSON first, then JSON5 for commented files
fn parse_tsconfig_value(content: &str) -> std::result::Result<Value, serde_json::Error> {
    serde_json::from_str(content).or_else(|strict_err| json_five::from_str::<Value>(content).map_err(|_| strict_err))
}
