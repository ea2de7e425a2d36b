//! Currency formatting. Every amount crossing the RPC boundary is an integer
//! number of cents; formatting is the only place dollars exist.

/// Format an amount in cents as a USD string: `format_usd(500)` is `"$5.00"`.
/// Two decimal places always, thousands separators on the dollar part.
pub fn format_usd(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let rem = abs % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}.{rem:02}")
    } else {
        format!("${grouped}.{rem:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic() {
        assert_eq!(format_usd(500), "$5.00");
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(1), "$0.01");
        assert_eq!(format_usd(99), "$0.99");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_usd(-500), "-$5.00");
        assert_eq!(format_usd(-1), "-$0.01");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_usd(123_456), "$1,234.56");
        assert_eq!(format_usd(100_000_000), "$1,000,000.00");
        assert_eq!(format_usd(i64::MAX), "$92,233,720,368,547,758.07");
    }
}
