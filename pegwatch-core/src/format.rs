//! Number and date formatting shared by every dashboard widget.
//!
//! Values are USD unless a function says otherwise. Negative amounts keep
//! their minus sign after the currency symbol is placed, e.g. `$-1.2B`.

use chrono::DateTime;

/// Format a USD amount as `$x.xB`, `$xM` or `$x`.
#[must_use]
pub fn format_billions(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.0}M", value / 1e6)
    } else {
        format!("${value:.0}")
    }
}

/// Like [`format_billions`], with a leading `+` for positive amounts.
#[must_use]
pub fn format_signed_billions(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{}", format_billions(value))
}

/// Format a USD amount down to thousands: `$x.xB`, `$xM`, `$xK` or `$x`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    if value.abs() >= 1e3 && value.abs() < 1e6 {
        format!("${:.0}K", value / 1e3)
    } else {
        format_billions(value)
    }
}

/// Format an amount given in USD millions: `$x.xT`, `$xB` or `$xM`.
#[must_use]
pub fn format_weight_millions(millions: f64) -> String {
    if millions >= 1e6 {
        format!("${:.1}T", millions / 1e6)
    } else if millions >= 1e3 {
        format!("${:.0}B", millions / 1e3)
    } else {
        format!("${millions:.0}M")
    }
}

/// Format an amount given in USD billions: `$x.xxT` from a thousand up, `$x.xB` below.
#[must_use]
pub fn format_holdings_billions(billions: f64) -> String {
    if billions >= 1000.0 {
        format!("${:.2}T", billions / 1000.0)
    } else {
        format!("${billions:.1}B")
    }
}

/// Tooltip date, e.g. `Jul 15, 2025`. Out-of-range timestamps format as "".
#[must_use]
pub fn format_date_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map_or_else(String::new, |dt| dt.format("%b %-d, %Y").to_string())
}

/// Axis tick date, e.g. `Jul 25`.
#[must_use]
pub fn format_axis_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map_or_else(String::new, |dt| dt.format("%b %y").to_string())
}
