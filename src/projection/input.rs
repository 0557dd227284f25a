//! Projection inputs and coercion of raw form values
//!
//! Form values arrive as free text. Parsing follows browser number parsing:
//! the longest numeric prefix is taken and trailing text is ignored, so
//! `"12abc"` reads as 12 and `"12.7"` reads as 12 months.

use serde::{Deserialize, Deserializer, Serialize};

use super::{
    DEFAULT_INITIAL_AMOUNT, DEFAULT_MONTHLY_CONTRIBUTION, DEFAULT_MONTHS,
    DEFAULT_PERIODIC_RATE_PERCENT,
};

/// Numeric inputs to a single projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting amount in currency units
    pub initial_amount: f64,
    /// Duration in months
    pub months: u32,
    /// Monthly growth in percentage points (0.8 = 0.8%)
    pub periodic_rate_percent: f64,
    /// Amount added every month, never compounded
    pub monthly_contribution: f64,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        ProjectionDefaults::default().as_input()
    }
}

/// Fallback values used when a form field cannot be read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionDefaults {
    #[serde(default = "default_initial_amount")]
    pub initial_amount: f64,

    #[serde(default = "default_months")]
    pub months: u32,

    /// Monthly rate in percent
    #[serde(default = "default_rate")]
    pub periodic_rate_percent: f64,

    #[serde(default = "default_contribution")]
    pub monthly_contribution: f64,
}

fn default_initial_amount() -> f64 { DEFAULT_INITIAL_AMOUNT }
fn default_months() -> u32 { DEFAULT_MONTHS }
fn default_rate() -> f64 { DEFAULT_PERIODIC_RATE_PERCENT }
fn default_contribution() -> f64 { DEFAULT_MONTHLY_CONTRIBUTION }

impl Default for ProjectionDefaults {
    fn default() -> Self {
        Self {
            initial_amount: DEFAULT_INITIAL_AMOUNT,
            months: DEFAULT_MONTHS,
            periodic_rate_percent: DEFAULT_PERIODIC_RATE_PERCENT,
            monthly_contribution: DEFAULT_MONTHLY_CONTRIBUTION,
        }
    }
}

impl ProjectionDefaults {
    pub fn as_input(&self) -> ProjectionInput {
        ProjectionInput {
            initial_amount: self.initial_amount,
            months: self.months,
            periodic_rate_percent: self.periodic_rate_percent,
            monthly_contribution: self.monthly_contribution,
        }
    }
}

/// Raw simulator form fields as typed by the user
///
/// JSON bodies may carry either strings or numbers, and accept the camelCase
/// names used by the web client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionForm {
    #[serde(default, alias = "initialAmount", deserialize_with = "lenient_field")]
    pub initial_amount: Option<String>,

    #[serde(default, deserialize_with = "lenient_field")]
    pub months: Option<String>,

    #[serde(default, alias = "periodicRatePercent", deserialize_with = "lenient_field")]
    pub periodic_rate_percent: Option<String>,

    #[serde(default, alias = "monthlyContribution", deserialize_with = "lenient_field")]
    pub monthly_contribution: Option<String>,
}

impl ProjectionForm {
    /// Build a form from optional string slices
    pub fn new(
        initial_amount: Option<&str>,
        months: Option<&str>,
        periodic_rate_percent: Option<&str>,
        monthly_contribution: Option<&str>,
    ) -> Self {
        Self {
            initial_amount: initial_amount.map(str::to_owned),
            months: months.map(str::to_owned),
            periodic_rate_percent: periodic_rate_percent.map(str::to_owned),
            monthly_contribution: monthly_contribution.map(str::to_owned),
        }
    }

    /// Coerce every field, falling back to `defaults` field by field.
    /// Never fails.
    pub fn to_input(&self, defaults: &ProjectionDefaults) -> ProjectionInput {
        ProjectionInput {
            initial_amount: amount_or(self.initial_amount.as_deref(), defaults.initial_amount),
            months: months_or(self.months.as_deref(), defaults.months),
            periodic_rate_percent: amount_or(
                self.periodic_rate_percent.as_deref(),
                defaults.periodic_rate_percent,
            ),
            monthly_contribution: amount_or(
                self.monthly_contribution.as_deref(),
                defaults.monthly_contribution,
            ),
        }
    }

    /// True when the field holds something other than whitespace
    pub fn is_filled(field: &Option<String>) -> bool {
        field.as_deref().map_or(false, |s| !s.trim().is_empty())
    }
}

fn lenient_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn amount_or(raw: Option<&str>, fallback: f64) -> f64 {
    match raw.and_then(parse_float_prefix) {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => fallback,
    }
}

fn months_or(raw: Option<&str>, fallback: u32) -> u32 {
    raw.and_then(parse_int_prefix)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(fallback)
}

/// Length of the run of ASCII digits at the start of `bytes`
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse the longest `[+-]digits[.digits][e[+-]digits]` prefix
fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse the longest `[+-]digits` prefix
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerce(a: Option<&str>, m: Option<&str>, r: Option<&str>, c: Option<&str>) -> ProjectionInput {
        ProjectionForm::new(a, m, r, c).to_input(&ProjectionDefaults::default())
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let input = coerce(None, None, None, None);
        assert_eq!(input.initial_amount, 1000.0);
        assert_eq!(input.months, 12);
        assert_eq!(input.periodic_rate_percent, 0.8);
        assert_eq!(input.monthly_contribution, 200.0);
    }

    #[test]
    fn test_empty_and_garbage_use_defaults() {
        let input = coerce(Some(""), Some("   "), Some("abc"), Some("R$ 50"));
        assert_eq!(input, ProjectionInput::default());
    }

    #[test]
    fn test_negative_values_use_defaults() {
        let input = coerce(Some("-500"), Some("-3"), Some("-0.5"), Some("-1"));
        assert_eq!(input, ProjectionInput::default());
    }

    #[test]
    fn test_zero_is_kept() {
        let input = coerce(Some("0"), Some("0"), Some("0"), Some("0"));
        assert_eq!(input.initial_amount, 0.0);
        assert_eq!(input.months, 0);
        assert_eq!(input.periodic_rate_percent, 0.0);
        assert_eq!(input.monthly_contribution, 0.0);
    }

    #[test]
    fn test_numeric_prefix_parsing() {
        let input = coerce(Some(" 2500.75xyz"), Some("24.9"), Some("1.2e0%"), Some(".5"));
        assert_eq!(input.initial_amount, 2500.75);
        assert_eq!(input.months, 24);
        assert_eq!(input.periodic_rate_percent, 1.2);
        assert_eq!(input.monthly_contribution, 0.5);

        // Dangling dot or exponent marker is not part of the number
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("3e"), Some(3.0));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    #[test]
    fn test_months_overflow_uses_default() {
        let input = coerce(None, Some("99999999999"), None, None);
        assert_eq!(input.months, 12);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults: ProjectionDefaults =
            serde_json::from_str(r#"{"months": 36}"#).expect("valid defaults");
        assert_eq!(defaults.months, 36);
        assert_eq!(defaults.initial_amount, 1000.0);

        let input = ProjectionForm::default().to_input(&defaults);
        assert_eq!(input.months, 36);
    }

    #[test]
    fn test_form_accepts_numbers_and_camel_case() {
        let form: ProjectionForm = serde_json::from_str(
            r#"{"initialAmount": 1500, "months": "6", "periodicRatePercent": null}"#,
        )
        .expect("valid form");
        assert_eq!(form.initial_amount.as_deref(), Some("1500"));
        assert_eq!(form.months.as_deref(), Some("6"));
        assert_eq!(form.periodic_rate_percent, None);
        assert_eq!(form.monthly_contribution, None);
    }
}
