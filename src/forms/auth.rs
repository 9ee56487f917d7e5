use chrono::NaiveDate;
use serde::Serialize;

use crate::forms::validation::{validate, Field, FieldError, FormValues, Value};
use crate::models::{Role, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    SignUp,
    Forgot,
}

impl AuthTab {
    pub const ALL: [AuthTab; 3] = [AuthTab::Login, AuthTab::SignUp, AuthTab::Forgot];

    pub fn label(self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::SignUp => "Sign Up",
            AuthTab::Forgot => "Reset",
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormValues for LoginForm {
    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "email" => Value::Text(&self.email),
            "password" => Value::Text(&self.password),
            _ => Value::Text(""),
        }
    }
}

impl LoginForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let schema = [
            Field::new("email").required("Please enter your email"),
            Field::new("password").required("Please enter your password"),
        ];
        validate(&schema, self)
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nationality {
    Zambian,
    Other,
}

impl Nationality {
    pub const ALL: [Nationality; 2] = [Nationality::Zambian, Nationality::Other];

    pub fn label(self) -> &'static str {
        match self {
            Nationality::Zambian => "Zambian",
            Nationality::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.label() == label)
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub nrc: String,
    pub occupation: String,
    pub nationality: Option<Nationality>,
    pub dob: String,
    pub add_card: bool,
    pub card_number: String,
    pub terms: bool,
    pub newsletter: bool,
}

/// Text inputs of the signup tab with their labels, in display order.
pub const SIGNUP_TEXT_FIELDS: [(&str, &str); 6] = [
    ("first_name", "First Name"),
    ("last_name", "Last Name"),
    ("email", "Email"),
    ("phone", "Phone"),
    ("nrc", "NRC"),
    ("occupation", "Occupation"),
];

impl FormValues for SignupForm {
    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "first_name" => Value::Text(&self.first_name),
            "last_name" => Value::Text(&self.last_name),
            "email" => Value::Text(&self.email),
            "phone" => Value::Text(&self.phone),
            "nrc" => Value::Text(&self.nrc),
            "occupation" => Value::Text(&self.occupation),
            "nationality" => Value::Text(self.nationality.map_or("", Nationality::label)),
            "dob" => Value::Text(&self.dob),
            "card_number" => Value::Text(&self.card_number),
            "terms" => Value::Flag(self.terms),
            _ => Value::Text(""),
        }
    }
}

/// Whole years between `dob` and `today`, counting a birthday only once reached.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(dob).unwrap_or(0)
}

impl SignupForm {
    pub fn text(&self, field: &str) -> &str {
        match self.value(field) {
            Value::Text(s) => s,
            _ => "",
        }
    }

    pub fn set_text(&mut self, field: &str, value: String) {
        match field {
            "first_name" => self.first_name = value,
            "last_name" => self.last_name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "nrc" => self.nrc = value,
            "occupation" => self.occupation = value,
            "dob" => self.dob = value,
            "card_number" => self.card_number = value,
            _ => {}
        }
    }

    pub fn schema(&self) -> Vec<Field> {
        let mut schema: Vec<Field> = SIGNUP_TEXT_FIELDS
            .into_iter()
            .map(|(name, _)| Field::new(name).required("This field is required"))
            .collect();
        schema.push(Field::new("nationality").required("Please select a nationality"));
        schema.push(Field::new("dob").required("Must be 18+"));
        if self.add_card {
            schema.push(Field::new("card_number").required("Please enter a card number"));
        }
        schema.push(Field::new("terms").checked("Agree to terms"));
        schema
    }

    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = validate(&self.schema(), self);
        if !self.dob.trim().is_empty() {
            let adult = NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d")
                .map(|dob| age_on(dob, today) >= 18)
                .unwrap_or(false);
            if !adult {
                errors.push(FieldError::new("dob", "Must be 18+"));
            }
        }
        errors
    }

    /// The record handed to the shell once signup completes.
    pub fn to_user(&self) -> User {
        User {
            name: format!("{} {}", self.first_name.trim(), self.last_name.trim())
                .trim()
                .to_string(),
            role: Role::User,
            avatar_url: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub email: String,
}

impl FormValues for ResetForm {
    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "email" => Value::Text(&self.email),
            _ => Value::Text(""),
        }
    }
}

impl ResetForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let schema = [Field::new("email")
            .required("Please enter your email")
            .email("Invalid email")];
        validate(&schema, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::error_for;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn signup() -> SignupForm {
        SignupForm {
            first_name: "Rachel".into(),
            last_name: "Banda".into(),
            email: "rachel@example.com".into(),
            phone: "0977000000".into(),
            nrc: "123456/78/1".into(),
            occupation: "Engineer".into(),
            nationality: Some(Nationality::Zambian),
            dob: "1990-05-04".into(),
            add_card: false,
            card_number: String::new(),
            terms: true,
            newsletter: false,
        }
    }

    #[test]
    fn eighteenth_birthday_is_the_cutoff() {
        let birthday = NaiveDate::from_ymd_opt(2008, 10, 19).unwrap();
        let day_after = NaiveDate::from_ymd_opt(2008, 10, 20).unwrap();
        assert_eq!(age_on(birthday, today()), 18);
        assert_eq!(age_on(day_after, today()), 17);

        let mut form = signup();
        form.dob = "2008-10-19".into();
        assert!(form.validate(today()).is_empty());
        form.dob = "2008-10-20".into();
        assert_eq!(error_for(&form.validate(today()), "dob"), Some("Must be 18+"));
    }

    #[test]
    fn terms_must_be_accepted() {
        let mut form = signup();
        form.terms = false;
        assert_eq!(error_for(&form.validate(today()), "terms"), Some("Agree to terms"));
    }

    #[test]
    fn card_number_required_only_when_adding_card() {
        let mut form = signup();
        assert!(form.validate(today()).is_empty());
        form.add_card = true;
        assert_eq!(
            error_for(&form.validate(today()), "card_number"),
            Some("Please enter a card number")
        );
    }

    #[test]
    fn signup_synthesizes_plain_user() {
        let user = signup().to_user();
        assert_eq!(user.name, "Rachel Banda");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.avatar_url, None);
    }

    #[test]
    fn login_and_reset_need_email() {
        assert_eq!(LoginForm::default().validate().len(), 2);
        assert_eq!(
            error_for(&ResetForm { email: "x".into() }.validate(), "email"),
            Some("Invalid email")
        );
    }

    #[test]
    fn text_fields_round_trip_through_setters() {
        let mut form = SignupForm::default();
        for (name, _) in SIGNUP_TEXT_FIELDS {
            form.set_text(name, format!("v-{name}"));
        }
        assert_eq!(form.text("nrc"), "v-nrc");
        assert_eq!(form.occupation, "v-occupation");
    }
}
