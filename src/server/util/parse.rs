use std::time::Duration;

/// Parses a duration written as `500ms`, `15s`, `5m`, `1h` or a bare number of seconds.
///
/// # Arguments
/// - `value` - The string to parse, surrounding whitespace ignored
///
/// # Returns
/// - `Ok(Duration)` - Successfully parsed duration
/// - `Err(String)` - Reason the value is not a duration
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);

    let amount: u64 = amount
        .parse()
        .map_err(|_| format!("expected a number followed by a unit, got '{}'", value))?;

    let secs = |factor: u64| {
        amount
            .checked_mul(factor)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration '{}' is too large", value))
    };

    match unit {
        "" | "s" => secs(1),
        "ms" => Ok(Duration::from_millis(amount)),
        "m" => secs(60),
        "h" => secs(60 * 60),
        other => Err(format!("unknown duration unit '{}'", other)),
    }
}
