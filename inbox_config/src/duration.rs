use std::{ops::Deref, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// A duration written as whitespace separated parts like `1m 30s` or
/// `5000ms`.
///
/// Supported units are `ms`, `s`, `m`, `h` and `d`. A part without a unit is
/// read as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid duration")]
pub struct ParseDurationError;

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |total, part| {
                let unit_start = part
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(part.len());
                let (value, unit) = part.split_at(unit_start);
                let value = value.parse::<u64>().map_err(|_| ParseDurationError)?;

                let part = match unit {
                    "ms" => std::time::Duration::from_millis(value),
                    "" | "s" => std::time::Duration::from_secs(value),
                    "m" => from_secs_scaled(value, 60)?,
                    "h" => from_secs_scaled(value, 60 * 60)?,
                    "d" => from_secs_scaled(value, 24 * 60 * 60)?,
                    _ => return Err(ParseDurationError),
                };

                total.checked_add(part).ok_or(ParseDurationError)
            })
            .map(Self)
    }
}

fn from_secs_scaled(value: u64, scale: u64) -> Result<std::time::Duration, ParseDurationError> {
    value
        .checked_mul(scale)
        .map(std::time::Duration::from_secs)
        .ok_or(ParseDurationError)
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13_000)),
            ("42m", Some(42 * 60 * 1000)),
            ("7h", Some(7 * 60 * 60 * 1000)),
            ("20d", Some(20 * 24 * 60 * 60 * 1000)),
            ("5000ms", Some(5000)),
            ("90", Some(90_000)),
            ("", Some(0)),
            ("1d 2h 3m 4s 5ms", Some((((24 + 2) * 60 + 3) * 60 + 4) * 1000 + 5)),
            ("xyz", None),
            ("7dd", None),
            ("s", None),
            ("-3s", None),
            ("99999999999999999999d", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.as_millis());
            assert_eq!(output, expected);
        }
    }
}
