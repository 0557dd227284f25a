//! pt-BR currency display

/// Format as Brazilian reais with two decimals: `R$ 3.500,34`.
///
/// Negative values keep the sign after the symbol (`R$ -12,50`).
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$ -".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let int_part = (cents / 100).to_string();
    let frac_part = cents % 100;

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("R$ {}{},{:02}", sign, grouped, frac_part)
}
