use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::DEFAULT_CURRENCY;
use crate::core::catalogs::{tax_name_label, usage_label};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a decimal amount for display in `currency`.
///
/// Rounds half away from zero to two places and groups thousands with
/// commas: `$1,234.50` for MXN, `USD 1,234.50` for anything else.
/// Text that is not a decimal number is returned unchanged.
pub fn format_amount(text: &str, currency: &str) -> String {
    let Ok(value) = text.trim().parse::<Decimal>() else {
        return text.to_string();
    };
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let symbol = if currency.is_empty() || currency == DEFAULT_CURRENCY {
        "$".to_string()
    } else {
        format!("{currency} ")
    };
    format!("{sign}{symbol}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a `TasaOCuota` value as a percentage: `"0.160000"` → `"16%"`.
pub fn format_rate(text: &str) -> Option<String> {
    let rate = text.trim().parse::<Decimal>().ok()?;
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();
    Some(format!("{percent}%"))
}

/// Format a CFDI timestamp (`2024-06-15T10:30:00`) in long Spanish form:
/// `15 de junio de 2024, 10:30`. Unparseable text is returned unchanged.
pub fn format_timestamp(text: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_local())
        });
    match parsed {
        Some(dt) => format!(
            "{} de {} de {}, {:02}:{:02}",
            dt.day(),
            MONTHS[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => text.to_string(),
    }
}

/// `"002"` → `"IVA"`; unknown codes are shown as-is.
pub fn tax_display(code: &str) -> String {
    tax_name_label(code).unwrap_or(code).to_string()
}

/// `"G03"` → `"G03 - Gastos en general"`; unknown codes are shown as-is.
pub fn usage_display(code: &str) -> String {
    match usage_label(code) {
        Some(label) => format!("{code} - {label}"),
        None => code.to_string(),
    }
}
