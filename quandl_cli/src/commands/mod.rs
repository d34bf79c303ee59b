//! CLI subcommand implementations.

pub mod data;
pub mod database;
pub mod metadata;
pub mod search;

use std::str::FromStr;

use anyhow::{anyhow, Result};

/// Parses a flag value through its wire-value `FromStr`, naming the accepted
/// values on failure.
pub fn parse_choice<T: FromStr<Err = ()>>(value: &str, flag: &str, expected: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("Invalid {} '{}', expected one of: {}", flag, value, expected))
}

#[cfg(test)]
mod tests {
    use quandl_api::{DownloadType, Format};

    use super::*;

    #[test]
    fn parse_choice_accepts_wire_values() {
        assert_eq!(
            parse_choice::<Format>("csv", "format", "csv, json, xml").unwrap(),
            Format::Csv
        );
        assert_eq!(
            parse_choice::<DownloadType>("complete", "download type", "partial, complete").unwrap(),
            DownloadType::Complete
        );
    }

    #[test]
    fn parse_choice_names_expected_values() {
        let err = parse_choice::<Format>("yaml", "format", "csv, json, xml").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("yaml"));
        assert!(msg.contains("csv, json, xml"));
    }
}
