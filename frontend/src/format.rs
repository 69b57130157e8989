fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Grouped thousands with at most three fraction digits and no trailing
/// zeros: `1234.5` renders as `1,234.5`, `600.0` as `600`.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let scaled = (amount.abs() * 1000.0).round() as u64;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
    let mut out = format!("{}{}", sign, format_with_commas(whole));
    if fraction > 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

pub fn format_currency(amount: f64, code: &str) -> String {
    format!("{} {}", code, format_amount(amount))
}
