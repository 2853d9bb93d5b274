//! Duration text for the `Execution time:` line.
//!
//! `Duration`'s `Debug` output stays in one unit (`123.25s`) and rounds at
//! large magnitudes. This renders `812.4ms`, `2m3.25s` or `1h0m5s` instead:
//! hours and minutes split out, every significant digit kept.

use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;

/// Renders a duration in the compact form used for the timing line, picking
/// the largest unit below one second (`ns`, `µs`, `ms`) and `h`/`m`/`s`
/// components above it. Fractions keep full precision without trailing zeros.
pub fn format_duration(d: Duration) -> String {
    let ns = d.as_nanos();

    if ns == 0 {
        return "0s".to_string();
    }
    if ns < NANOS_PER_MICRO {
        return format!("{ns}ns");
    }
    if ns < NANOS_PER_MILLI {
        return format!("{}µs", decimal(ns, 3));
    }
    if ns < NANOS_PER_SEC {
        return format!("{}ms", decimal(ns, 6));
    }

    let total_secs = ns / NANOS_PER_SEC;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = decimal(ns % NANOS_PER_MIN, 9);

    if hours > 0 {
        format!("{hours}h{minutes}m{secs}s")
    } else if minutes > 0 {
        format!("{minutes}m{secs}s")
    } else {
        format!("{secs}s")
    }
}

// `value` scaled down by 10^scale, as a decimal string.
fn decimal(value: u128, scale: u32) -> String {
    let unit = 10u128.pow(scale);
    let whole = value / unit;
    let frac = value % unit;

    if frac == 0 {
        return whole.to_string();
    }

    let digits = format!("{:0width$}", frac, width = scale as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}
