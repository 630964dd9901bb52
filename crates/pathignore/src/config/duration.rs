// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings for the combinator deadline: a number (fractions
//! allowed) followed by `ms`, `s`, or `m`.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// `(suffix, multiplier, divisor)` applied to the number read as seconds.
/// `ms` is listed before `s`.
const UNITS: [(&str, u32, u32); 3] = [("ms", 1, 1000), ("s", 1, 1), ("m", 60, 1)];

pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (number, mul, div) = UNITS
        .iter()
        .find_map(|&(suffix, mul, div)| s.strip_suffix(suffix).map(|n| (n.trim(), mul, div)))
        .ok_or_else(|| format!("invalid duration format: {s} (use 500ms, 1.5s, or 2m)"))?;

    let n: f64 = number
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
        .ok_or_else(|| format!("invalid duration: {s}"))?;
    if n < 0.0 {
        return Err(format!("negative duration: {s}"));
    }

    Duration::try_from_secs_f64(n)
        .ok()
        .and_then(|d| d.checked_mul(mul))
        .map(|d| d / div)
        .ok_or_else(|| format!("duration too large: {s}"))
}

/// Deserialize an optional duration string.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse_duration(&s))
        .transpose()
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
