//! Form Validation
//!
//! Rule-based checks for form fields. Rules never mutate their input and never
//! panic; anything they cannot make sense of simply fails.

use std::collections::BTreeMap;

/// Minimum trimmed length of a feedback text
pub const FEEDBACK_MIN_CHARS: usize = 10;
/// Maximum trimmed length of a feedback text
pub const FEEDBACK_MAX_CHARS: usize = 1000;

const PASSWORD_MIN_CHARS: usize = 8;

/// Outcome of a single rule
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// A named field rule
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Empty or whitespace-only values are absent
    Required { label: String },
    /// Feedback text length bounds, on the trimmed text
    FeedbackLength,
    Email,
    PasswordStrength,
}

impl Rule {
    pub fn required(label: impl Into<String>) -> Self {
        Rule::Required { label: label.into() }
    }

    pub fn check(&self, value: &str) -> Validation {
        match self {
            Rule::Required { label } => {
                if value.trim().is_empty() {
                    Validation::from_errors(vec![format!("{} is required", label)])
                } else {
                    Validation::from_errors(Vec::new())
                }
            }
            Rule::FeedbackLength => check_feedback_length(value),
            Rule::Email => {
                if is_email(value) {
                    Validation::from_errors(Vec::new())
                } else {
                    Validation::from_errors(vec!["Enter a valid email address".to_string()])
                }
            }
            Rule::PasswordStrength => check_password(value),
        }
    }
}

fn check_feedback_length(text: &str) -> Validation {
    let len = text.trim().chars().count();
    let mut errors = Vec::new();
    if len < FEEDBACK_MIN_CHARS {
        errors.push(format!(
            "Feedback must be at least {} characters",
            FEEDBACK_MIN_CHARS
        ));
    }
    if len > FEEDBACK_MAX_CHARS {
        errors.push(format!(
            "Feedback may be at most {} characters",
            FEEDBACK_MAX_CHARS
        ));
    }
    Validation::from_errors(errors)
}

/// `local@domain.tld`, no whitespace anywhere
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn check_password(password: &str) -> Validation {
    let mut errors = Vec::new();
    if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.push(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_CHARS
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain an uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain a lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain a digit".to_string());
    }
    Validation::from_errors(errors)
}

/// Aggregated result of a form-level validation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValidation {
    pub is_valid: bool,
    /// Field name -> messages, only for fields that failed
    pub errors: BTreeMap<String, Vec<String>>,
}

impl FormValidation {
    pub fn field(&self, name: &str) -> &[String] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Ordered rules per field
#[derive(Debug, Clone, Default)]
pub struct FormRules {
    fields: Vec<(String, Vec<Rule>)>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name.into(), rules.into_iter().collect()));
        self
    }

    /// Run every field's rules in order. Values for fields without rules are
    /// ignored; ruled fields missing from `values` are checked as `""`.
    pub fn validate(&self, values: &[(&str, &str)]) -> FormValidation {
        let mut errors = BTreeMap::new();
        for (name, rules) in &self.fields {
            let value = values
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| *value)
                .unwrap_or("");
            let messages: Vec<String> = rules
                .iter()
                .flat_map(|rule| rule.check(value).errors)
                .collect();
            if !messages.is_empty() {
                errors.insert(name.clone(), messages);
            }
        }
        FormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Rules for the feedback draft form
pub fn feedback_rules() -> FormRules {
    FormRules::new()
        .field("text", [Rule::required("Feedback text"), Rule::FeedbackLength])
        .field("category_id", [Rule::required("Category")])
        .field("subject_id", [Rule::required("Subject")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_length_bounds() {
        for len in [10usize, 11, 500, 999, 1000] {
            let text = "a".repeat(len);
            assert!(Rule::FeedbackLength.check(&text).is_valid, "len {}", len);
        }
        for len in [0usize, 1, 9, 1001, 1500] {
            let result = Rule::FeedbackLength.check(&"a".repeat(len));
            assert!(!result.is_valid, "len {}", len);
            assert_eq!(result.errors.len(), 1);
        }
    }

    #[test]
    fn test_feedback_length_trims_whitespace() {
        // 9 visible characters padded with spaces still fail
        let padded = format!("   {}   ", "b".repeat(9));
        let result = Rule::FeedbackLength.check(&padded);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("at least 10"));

        let long = format!("  {}\n", "c".repeat(1001));
        assert!(Rule::FeedbackLength.check(&long).errors[0].contains("at most 1000"));

        let exact = format!("\t{}  ", "d".repeat(1000));
        assert!(Rule::FeedbackLength.check(&exact).is_valid);
    }

    #[test]
    fn test_feedback_length_counts_chars_not_bytes() {
        assert!(Rule::FeedbackLength.check("éééééééééé").is_valid);
    }

    #[test]
    fn test_required() {
        let rule = Rule::required("Category");
        for blank in ["", " ", "\t\n", "   "] {
            let result = rule.check(blank);
            assert!(!result.is_valid);
            assert_eq!(result.errors, vec!["Category is required".to_string()]);
        }
        for value in ["1", " x ", "0"] {
            assert!(rule.check(value).is_valid);
        }
    }

    #[test]
    fn test_email() {
        assert!(Rule::Email.check("teacher@school.com").is_valid);
        for bad in ["", "no-at.com", "@school.com", "a@b", "a b@c.com", "a@@b.com", "a@.com"] {
            assert!(!Rule::Email.check(bad).is_valid, "{}", bad);
        }
    }

    #[test]
    fn test_password_strength() {
        assert!(Rule::PasswordStrength.check("Password123").is_valid);
        let weak = Rule::PasswordStrength.check("abc");
        // too short, no uppercase, no digit
        assert_eq!(weak.errors.len(), 3);
    }

    #[test]
    fn test_feedback_form_aggregates_per_field() {
        let result = feedback_rules().validate(&[
            ("text", ""),
            ("category_id", "2"),
            ("subject_id", " "),
        ]);
        assert!(!result.is_valid);
        assert_eq!(result.field("text").len(), 2);
        assert!(result.field("category_id").is_empty());
        assert_eq!(result.field("subject_id"), ["Subject is required".to_string()]);
    }

    #[test]
    fn test_feedback_form_passes() {
        let result = feedback_rules().validate(&[
            ("text", "Great lesson today!!"),
            ("category_id", "2"),
            ("subject_id", "5"),
            ("unrelated", ""),
        ]);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_field_checked_as_empty() {
        let result = feedback_rules().validate(&[("text", "Long enough text here")]);
        assert_eq!(result.errors.len(), 2);
    }
}
