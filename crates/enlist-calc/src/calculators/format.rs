//! Value and presentation helpers shared by both calculators.

/// Won per 만원, the unit contribution amounts are entered in.
pub const WON_PER_MANWON: u64 = 10_000;

pub fn manwon_to_won(manwon: u32) -> u64 {
    u64::from(manwon) * WON_PER_MANWON
}

/// Render an amount as `12,345,678원`.
pub fn format_won(amount: u64) -> String {
    format!("{}원", group_thousands(amount))
}

/// Render an amount in 만원 (`55만원`), the way contribution sliders label it.
pub fn format_manwon(manwon: u32) -> String {
    format!("{}만원", group_thousands(u64::from(manwon)))
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-number share of `max`, rounded half up and clamped to 0..=100.
pub fn percent_of(score: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let percent = (score * 100 + max / 2) / max;
    percent.min(100) as u8
}

/// Render an annual rate held in basis points (`550` -> `5.50%`).
pub fn format_rate(basis_points: u32) -> String {
    format!("{}.{:02}%", basis_points / 100, basis_points % 100)
}
