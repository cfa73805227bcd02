/// Format an amount as Indonesian Rupiah with no fractional digits,
/// e.g. `15000.0` becomes `Rp15.000`.
///
/// Rounds half away from zero. Non-finite amounts render as `Rp0`.
pub fn format_rupiah(price: f64) -> String {
    if !price.is_finite() {
        return "Rp0".to_string();
    }

    let rounded = price.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits, '.');

    if rounded < 0.0 {
        format!("-Rp{}", grouped)
    } else {
        format!("Rp{}", grouped)
    }
}

/// Rating exactly as given: `4.8` stays `4.8`, `5.0` shows as `5`.
pub fn format_rating(rating: f64) -> String {
    format!("{}", rating)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}
