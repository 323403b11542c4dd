//! Amount formatting

/// Format an amount with a currency symbol, two decimals and thousands
/// separators, e.g. `$1,850.00` or `-$42.10`
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let frac = cents - whole * 100.0;

    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{}{}{}.{:02.0}", sign, symbol, grouped, frac)
}
