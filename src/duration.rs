//! Human-friendly durations for `--timeout` and the `timeout` setting.

use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Parse `<number><unit>`, e.g. `10s`, `1.5m`, `250ms`, `750µs`.
///
/// Units: `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`. A unit is required.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    let nanos_per_unit = match unit.trim() {
        "ns" => 1.0,
        "us" | "µs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        "h" => 3600e9,
        "" => bail!("Missing unit in duration '{s}'"),
        other => bail!("Unknown unit '{other}' in duration '{s}'"),
    };
    let value: f64 = number
        .parse()
        .with_context(|| format!("Invalid number in duration '{s}'"))?;

    let nanos = (value * nanos_per_unit).round();
    if !nanos.is_finite() || nanos > u64::MAX as f64 {
        bail!("Duration '{s}' is out of range");
    }
    Ok(Duration::from_nanos(nanos as u64))
}
