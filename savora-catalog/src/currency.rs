//! Rand display helpers. Prices are carried as integer cents everywhere;
//! formatting happens only at the presentation edge.

#[derive(Debug, thiserror::Error)]
pub enum CurrencyError {
    #[error("not a currency amount: {0}")]
    Unparseable(String),
}

/// Format integer cents as South African Rand, e.g. `R 89.99`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("R {}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a displayed amount (`R 89.99`, `89.99`, `R1,250.50`) back to cents.
pub fn parse_cents(input: &str) -> Result<i64, CurrencyError> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return Err(CurrencyError::Unparseable(input.to_string()));
    }

    let negative = cleaned.starts_with('-');
    let digits = cleaned.trim_start_matches('-');
    let (whole, frac) = match digits.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (digits, ""),
    };

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| CurrencyError::Unparseable(input.to_string()))?
    };
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => {
            frac.parse::<i64>()
                .map_err(|_| CurrencyError::Unparseable(input.to_string()))?
                * 10
        }
        _ => frac[..2]
            .parse()
            .map_err(|_| CurrencyError::Unparseable(input.to_string()))?,
    };

    let cents = whole * 100 + frac;
    Ok(if negative { -cents } else { cents })
}
