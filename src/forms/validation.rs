//! Declarative field constraints and the pure validator that checks them.
//!
//! A form describes itself as a list of [`Field`]s. Conditional fields are
//! handled by the form building a different schema for its current values.
//! Checks that span several fields (date order, age) are plain functions
//! returning extra [`FieldError`]s.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    Text(&'a str),
    Flag(bool),
    Files(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    Digits {
        min: usize,
        max: usize,
        message: &'static str,
    },
    Checked(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl Field {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.rules.push(Rule::Required(message));
        self
    }

    pub fn email(mut self, message: &'static str) -> Self {
        self.rules.push(Rule::Email(message));
        self
    }

    pub fn digits(mut self, min: usize, max: usize, message: &'static str) -> Self {
        self.rules.push(Rule::Digits { min, max, message });
        self
    }

    pub fn checked(mut self, message: &'static str) -> Self {
        self.rules.push(Rule::Checked(message));
        self
    }
}

/// Anything a schema can be checked against.
pub trait FormValues {
    fn value(&self, field: &str) -> Value<'_>;
}

/// Checks every field and reports at most one error per field, the first
/// failing rule in declaration order.
pub fn validate(schema: &[Field], values: &impl FormValues) -> Vec<FieldError> {
    schema
        .iter()
        .filter_map(|field| {
            let value = values.value(field.name);
            field
                .rules
                .iter()
                .find_map(|rule| check(rule, value))
                .map(|message| FieldError::new(field.name, message))
        })
        .collect()
}

fn check(rule: &Rule, value: Value<'_>) -> Option<&'static str> {
    match (*rule, value) {
        (Rule::Required(msg), Value::Text(s)) => s.trim().is_empty().then_some(msg),
        (Rule::Required(msg), Value::Files(n)) => (n == 0).then_some(msg),
        (Rule::Required(msg), Value::Flag(b)) | (Rule::Checked(msg), Value::Flag(b)) => {
            (!b).then_some(msg)
        }
        // Format rules only judge what was typed; emptiness is Required's job.
        (Rule::Email(msg), Value::Text(s)) => {
            let s = s.trim();
            (!s.is_empty() && !looks_like_email(s)).then_some(msg)
        }
        (Rule::Digits { min, max, message }, Value::Text(s)) => {
            let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
            let ok = digits.chars().all(|c| c.is_ascii_digit())
                && (min..=max).contains(&digits.len());
            (!digits.is_empty() && !ok).then_some(message)
        }
        _ => None,
    }
}

pub fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Map(HashMap<&'static str, Value<'static>>);

    impl FormValues for Map {
        fn value(&self, field: &str) -> Value<'_> {
            self.0.get(field).copied().unwrap_or(Value::Text(""))
        }
    }

    #[test]
    fn first_failing_rule_wins() {
        let schema = vec![Field::new("email")
            .required("Please enter your email")
            .email("Invalid email")];

        let empty = Map(HashMap::new());
        assert_eq!(
            validate(&schema, &empty),
            vec![FieldError::new("email", "Please enter your email")]
        );

        let bad = Map(HashMap::from([("email", Value::Text("nope"))]));
        assert_eq!(
            validate(&schema, &bad),
            vec![FieldError::new("email", "Invalid email")]
        );

        let good = Map(HashMap::from([("email", Value::Text("a@b.co"))]));
        assert!(validate(&schema, &good).is_empty());
    }

    #[test]
    fn files_and_flags() {
        let schema = vec![
            Field::new("upload").required("Upload a file"),
            Field::new("terms").checked("Agree to terms"),
        ];
        let values = Map(HashMap::from([
            ("upload", Value::Files(0)),
            ("terms", Value::Flag(false)),
        ]));
        let errors = validate(&schema, &values);
        assert_eq!(error_for(&errors, "upload"), Some("Upload a file"));
        assert_eq!(error_for(&errors, "terms"), Some("Agree to terms"));
    }

    #[test]
    fn digit_rule_ignores_spaces() {
        let schema = vec![Field::new("phone").digits(10, 10, "Enter a 10 digit number")];
        let ok = Map(HashMap::from([("phone", Value::Text("097 700 0000"))]));
        assert!(validate(&schema, &ok).is_empty());
        let short = Map(HashMap::from([("phone", Value::Text("0977"))]));
        assert_eq!(validate(&schema, &short).len(), 1);
        let letters = Map(HashMap::from([("phone", Value::Text("09770000ab"))]));
        assert_eq!(validate(&schema, &letters).len(), 1);
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("pumulo@example.com"));
        assert!(!looks_like_email("pumulo@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a b@example.com"));
        assert!(!looks_like_email("a@@example.com"));
    }
}
