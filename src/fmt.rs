const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Format an amount as a pound figure, abbreviating large magnitudes:
/// £2.43B, £243M, £243,000. Values at or above 999.5 million display at
/// billion scale so nothing rounds up to "£1000M". Non-finite input renders
/// as an em-dash placeholder, matching how missing cells display.
pub fn amount(val: f64) -> String {
    if !val.is_finite() {
        return "\u{2014}".to_string();
    }
    let negative = val < 0.0;
    let abs = val.abs();

    let body = if abs >= BILLION || abs >= 999.5 * MILLION {
        format!("£{}B", scaled(abs / BILLION))
    } else if abs >= MILLION {
        format!("£{}M", scaled(abs / MILLION))
    } else {
        format!("£{}", group_thousands(abs.round() as u64))
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Grouped whole number without a currency symbol, for table cells whose
/// column header already carries the £.
pub fn grouped(val: f64) -> String {
    let negative = val < 0.0;
    let body = group_thousands(val.abs().round() as u64);
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Render a scale quotient to at most 2 decimals: 1.00 -> "1", 2.40 -> "2.4".
fn scaled(quotient: f64) -> String {
    let s = format!("{quotient:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut with_commas = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    with_commas.chars().rev().collect()
}

/// Trim an ISO/RFC3339 timestamp down to its date for display.
/// Unparseable input passes through unchanged.
pub fn short_date(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Some(prefix) = raw.get(..10) {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return d.format("%Y-%m-%d").to_string();
        }
    }
    raw.to_string()
}
