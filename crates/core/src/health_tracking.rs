//! Daily health log constants and validation.

use crate::error::CoreError;

/// Accepted systolic blood pressure range (mmHg).
pub const SYSTOLIC_RANGE: (i32, i32) = (60, 250);
/// Accepted diastolic blood pressure range (mmHg).
pub const DIASTOLIC_RANGE: (i32, i32) = (30, 150);
/// Accepted body weight range (kg).
pub const WEIGHT_KG_RANGE: (f64, f64) = (25.0, 300.0);
/// Maximum number of symptoms on one entry.
pub const MAX_SYMPTOMS: usize = 20;

/// History window used when the client does not ask for one.
pub const DEFAULT_HISTORY_DAYS: i64 = 30;
/// Largest history window served in one request.
pub const MAX_HISTORY_DAYS: i64 = 365;

fn check_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    (min, max): (T, T),
    label: &str,
) -> Result<(), CoreError> {
    if value < min || value > max {
        return Err(CoreError::Validation(format!(
            "{label} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Validate a blood pressure reading. Either side may be omitted.
pub fn validate_blood_pressure(
    systolic: Option<i32>,
    diastolic: Option<i32>,
) -> Result<(), CoreError> {
    if let Some(s) = systolic {
        check_range(s, SYSTOLIC_RANGE, "Systolic pressure")?;
    }
    if let Some(d) = diastolic {
        check_range(d, DIASTOLIC_RANGE, "Diastolic pressure")?;
    }
    if let (Some(s), Some(d)) = (systolic, diastolic) {
        if d >= s {
            return Err(CoreError::Validation(format!(
                "Diastolic pressure ({d}) must be lower than systolic pressure ({s})"
            )));
        }
    }
    Ok(())
}

pub fn validate_weight(weight_kg: Option<f64>) -> Result<(), CoreError> {
    match weight_kg {
        Some(w) if !w.is_finite() => Err(CoreError::Validation(
            "Weight must be a finite number".to_string(),
        )),
        Some(w) => check_range(w, WEIGHT_KG_RANGE, "Weight (kg)"),
        None => Ok(()),
    }
}

/// Trim, drop blanks and duplicates, then enforce [`MAX_SYMPTOMS`].
pub fn normalise_symptoms(symptoms: &[String]) -> Result<Vec<String>, CoreError> {
    let mut cleaned: Vec<String> = Vec::with_capacity(symptoms.len());
    for symptom in symptoms {
        let trimmed = symptom.trim();
        if !trimmed.is_empty() && !cleaned.iter().any(|s| s == trimmed) {
            cleaned.push(trimmed.to_string());
        }
    }
    if cleaned.len() > MAX_SYMPTOMS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_SYMPTOMS} symptoms may be logged per day, got {}",
            cleaned.len()
        )));
    }
    Ok(cleaned)
}

/// Clamp a requested history window to `1..=MAX_HISTORY_DAYS`.
pub fn clamp_history_days(days: Option<i64>) -> i64 {
    days.unwrap_or(DEFAULT_HISTORY_DAYS).clamp(1, MAX_HISTORY_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_blood_pressure_passes() {
        assert!(validate_blood_pressure(Some(118), Some(76)).is_ok());
        assert!(validate_blood_pressure(None, Some(80)).is_ok());
        assert!(validate_blood_pressure(None, None).is_ok());
    }

    #[test]
    fn out_of_range_blood_pressure_fails() {
        assert!(validate_blood_pressure(Some(300), None).is_err());
        assert!(validate_blood_pressure(None, Some(10)).is_err());
    }

    #[test]
    fn inverted_blood_pressure_fails() {
        assert!(validate_blood_pressure(Some(90), Some(95)).is_err());
    }

    #[test]
    fn weight_bounds() {
        assert!(validate_weight(Some(64.5)).is_ok());
        assert!(validate_weight(Some(3.0)).is_err());
        assert!(validate_weight(Some(f64::NAN)).is_err());
        assert!(validate_weight(None).is_ok());
    }

    #[test]
    fn symptoms_are_trimmed_and_deduplicated() {
        let input = vec![" nausea".to_string(), "nausea ".to_string(), "".to_string(), "fatigue".to_string()];
        assert_eq!(normalise_symptoms(&input).unwrap(), vec!["nausea", "fatigue"]);
    }

    #[test]
    fn too_many_symptoms_fail() {
        let input: Vec<String> = (0..=MAX_SYMPTOMS).map(|i| format!("symptom {i}")).collect();
        assert!(normalise_symptoms(&input).is_err());
    }

    #[test]
    fn history_days_are_clamped() {
        assert_eq!(clamp_history_days(None), DEFAULT_HISTORY_DAYS);
        assert_eq!(clamp_history_days(Some(0)), 1);
        assert_eq!(clamp_history_days(Some(7)), 7);
        assert_eq!(clamp_history_days(Some(10_000)), MAX_HISTORY_DAYS);
    }
}
