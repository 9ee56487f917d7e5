//! Values and rules of the quote request form.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::forms::card::{self, detect_card_type, CardType};
use crate::forms::validation::{validate, Field, FieldError, FormValues, Value};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Airtel,
    Mtn,
    Card,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Airtel, PaymentMethod::Mtn, PaymentMethod::Card];

    pub fn value(self) -> &'static str {
        match self {
            PaymentMethod::Airtel => "airtel",
            PaymentMethod::Mtn => "mtn",
            PaymentMethod::Card => "card",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Airtel => "Airtel Money",
            PaymentMethod::Mtn => "MTN Mobile Money",
            PaymentMethod::Card => "Debit/Credit Card",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == value)
    }

    pub fn is_mobile_money(self) -> bool {
        matches!(self, PaymentMethod::Airtel | PaymentMethod::Mtn)
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub holder: String,
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    pub fn card_type(&self) -> Option<CardType> {
        detect_card_type(&self.number)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub full_name: String,
    pub email: String,
    pub car_make: String,
    pub car_model: String,
    pub year: String,
    pub payment_method: Option<PaymentMethod>,
    pub mobile_number: String,
    pub card: CardDetails,
    pub cover_start: String,
    pub cover_end: String,
    pub vehicle_images: Vec<String>,
    pub id_documents: Vec<String>,
}

/// What gets handed to the backend once the form is valid.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct QuoteRequest {
    pub full_name: String,
    pub email: String,
    pub car_make: String,
    pub car_model: String,
    pub year: i32,
    pub payment_method: PaymentMethod,
    pub mobile_number: Option<String>,
    pub card: Option<CardDetails>,
    pub cover_start: NaiveDate,
    pub cover_end: NaiveDate,
    pub vehicle_images: Vec<String>,
    pub id_documents: Vec<String>,
}

impl FormValues for QuoteForm {
    fn value(&self, field: &str) -> Value<'_> {
        match field {
            "full_name" => Value::Text(&self.full_name),
            "email" => Value::Text(&self.email),
            "car_make" => Value::Text(&self.car_make),
            "car_model" => Value::Text(&self.car_model),
            "year" => Value::Text(&self.year),
            "payment_method" => Value::Text(self.payment_method.map_or("", PaymentMethod::value)),
            "mobile_number" => Value::Text(&self.mobile_number),
            "card_holder" => Value::Text(&self.card.holder),
            "card_number" => Value::Text(&self.card.number),
            "card_expiry" => Value::Text(&self.card.expiry),
            "card_cvv" => Value::Text(&self.card.cvv),
            "cover_start" => Value::Text(&self.cover_start),
            "cover_end" => Value::Text(&self.cover_end),
            "vehicle_image" => Value::Files(self.vehicle_images.len()),
            "id_document" => Value::Files(self.id_documents.len()),
            _ => Value::Text(""),
        }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Neither date may lie before today, and the end must be strictly after the start.
pub fn cover_date_errors(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(start) = start {
        if start < today {
            errors.push(FieldError::new("cover_start", "Start date cannot be in the past"));
        }
    }
    if let Some(end) = end {
        if end < today {
            errors.push(FieldError::new("cover_end", "End date cannot be in the past"));
        } else if let Some(start) = start {
            if end <= start {
                errors.push(FieldError::new("cover_end", "End date must be after start date"));
            }
        }
    }
    errors
}

impl QuoteForm {
    /// Field rules for the current values; the payment method decides which
    /// of the mobile-money and card fields take part.
    pub fn schema(&self) -> Vec<Field> {
        let mut schema = vec![
            Field::new("full_name").required("Please enter your full name"),
            Field::new("email")
                .required("Please enter your email")
                .email("Invalid email"),
            Field::new("car_make").required("Please enter car make"),
            Field::new("car_model").required("Please enter car model"),
            Field::new("year")
                .required("Enter the car year")
                .digits(4, 4, "Enter a four digit year"),
            Field::new("payment_method").required("Select payment method"),
        ];
        match self.payment_method {
            Some(method) if method.is_mobile_money() => {
                schema.push(
                    Field::new("mobile_number")
                        .required("Enter your mobile money number")
                        .digits(10, 10, "Mobile number must be 10 digits"),
                );
            }
            Some(PaymentMethod::Card) => {
                schema.push(Field::new("card_holder").required("Enter the cardholder name"));
                schema.push(Field::new("card_number").required("Enter the card number"));
                schema.push(Field::new("card_expiry").required("Enter the expiry date"));
                schema.push(Field::new("card_cvv").required("Enter the CVV"));
            }
            _ => {}
        }
        schema.extend([
            Field::new("cover_start").required("Select start date"),
            Field::new("cover_end").required("Select end date"),
            Field::new("vehicle_image").required("Upload vehicle image"),
            Field::new("id_document").required("Upload NRC or license"),
        ]);
        schema
    }

    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = validate(&self.schema(), self);
        let has_error = |errors: &[FieldError], field: &str| errors.iter().any(|e| e.field == field);

        if !has_error(&errors, "year") {
            if let Ok(year) = self.year.trim().parse::<i32>() {
                if !(1900..=today.year() + 1).contains(&year) {
                    errors.push(FieldError::new("year", "Enter a valid car year"));
                }
            }
        }

        if self.payment_method == Some(PaymentMethod::Card) {
            let card_type = self.card.card_type();
            let extra = [
                ("card_number", card::card_number_error(&self.card.number)),
                ("card_expiry", card::expiry_error(&self.card.expiry, today)),
                ("card_cvv", card::cvv_error(&self.card.cvv, card_type)),
            ];
            for (field, message) in extra {
                if let Some(message) = message {
                    if !has_error(&errors, field) {
                        errors.push(FieldError::new(field, message));
                    }
                }
            }
        }

        let start = self.date_field(&mut errors, "cover_start", &self.cover_start);
        let end = self.date_field(&mut errors, "cover_end", &self.cover_end);
        errors.extend(cover_date_errors(start, end, today));
        errors
    }

    fn date_field(&self, errors: &mut Vec<FieldError>, field: &'static str, raw: &str) -> Option<NaiveDate> {
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse_date(raw);
        if parsed.is_none() {
            errors.push(FieldError::new(field, "Invalid date"));
        }
        parsed
    }

    /// Builds the request, or returns the validation errors that block it.
    pub fn to_request(&self, today: NaiveDate) -> Result<QuoteRequest, Vec<FieldError>> {
        let errors = self.validate(today);
        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(payment_method), Some(cover_start), Some(cover_end), Ok(year)) = (
            self.payment_method,
            parse_date(&self.cover_start),
            parse_date(&self.cover_end),
            self.year.trim().parse::<i32>(),
        ) else {
            return Err(vec![FieldError::new("form", "Form is incomplete")]);
        };
        Ok(QuoteRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            car_make: self.car_make.trim().to_string(),
            car_model: self.car_model.trim().to_string(),
            year,
            payment_method,
            mobile_number: payment_method
                .is_mobile_money()
                .then(|| self.mobile_number.split_whitespace().collect()),
            card: (payment_method == PaymentMethod::Card).then(|| self.card.clone()),
            cover_start,
            cover_end,
            vehicle_images: self.vehicle_images.clone(),
            id_documents: self.id_documents.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::error_for;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn filled() -> QuoteForm {
        QuoteForm {
            full_name: "Pumulo Mubiana".into(),
            email: "pumulomubiana@example.com".into(),
            car_make: "Toyota".into(),
            car_model: "Corolla".into(),
            year: "2022".into(),
            payment_method: Some(PaymentMethod::Airtel),
            mobile_number: "0977 000 000".into(),
            card: CardDetails::default(),
            cover_start: "2026-11-01".into(),
            cover_end: "2027-11-01".into(),
            vehicle_images: vec!["car.jpg".into()],
            id_documents: vec!["nrc.png".into()],
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = QuoteForm::default().validate(today());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                "full_name",
                "email",
                "car_make",
                "car_model",
                "year",
                "payment_method",
                "cover_start",
                "cover_end",
                "vehicle_image",
                "id_document",
            ]
        );
    }

    #[test]
    fn filled_form_builds_request() {
        let request = filled().to_request(today()).unwrap();
        assert_eq!(request.year, 2022);
        assert_eq!(request.mobile_number.as_deref(), Some("0977000000"));
        assert_eq!(request.card, None);
    }

    #[test]
    fn payment_method_switches_conditional_fields() {
        let mut form = filled();
        form.payment_method = Some(PaymentMethod::Card);
        let errors = form.validate(today());
        assert_eq!(error_for(&errors, "card_holder"), Some("Enter the cardholder name"));
        assert_eq!(error_for(&errors, "card_number"), Some("Enter the card number"));
        assert_eq!(error_for(&errors, "mobile_number"), None);

        form.card = CardDetails {
            holder: "P Mubiana".into(),
            number: card::format_card_number("4111111111111111"),
            expiry: "12/27".into(),
            cvv: "123".into(),
        };
        assert!(form.validate(today()).is_empty());
        let request = form.to_request(today()).unwrap();
        assert_eq!(request.mobile_number, None);
        assert!(request.card.is_some());

        form.payment_method = Some(PaymentMethod::Mtn);
        form.mobile_number.clear();
        let errors = form.validate(today());
        assert_eq!(error_for(&errors, "mobile_number"), Some("Enter your mobile money number"));
        assert_eq!(error_for(&errors, "card_number"), None);
    }

    #[test]
    fn end_date_must_follow_start_date() {
        let start = NaiveDate::from_ymd_opt(2026, 11, 1);
        let later = NaiveDate::from_ymd_opt(2026, 11, 2);
        let earlier = NaiveDate::from_ymd_opt(2026, 10, 31);

        assert!(cover_date_errors(start, later, today()).is_empty());
        assert_eq!(cover_date_errors(start, start, today()).len(), 1);
        assert_eq!(cover_date_errors(start, earlier, today()).len(), 1);
    }

    #[test]
    fn dates_before_today_are_rejected() {
        let yesterday = NaiveDate::from_ymd_opt(2026, 10, 18);
        let errors = cover_date_errors(yesterday, NaiveDate::from_ymd_opt(2026, 10, 20), today());
        assert_eq!(error_for(&errors, "cover_start"), Some("Start date cannot be in the past"));
        assert!(cover_date_errors(Some(today()), NaiveDate::from_ymd_opt(2026, 10, 20), today()).is_empty());
    }

    #[test]
    fn year_must_be_plausible() {
        let mut form = filled();
        form.year = "1850".into();
        assert_eq!(error_for(&form.validate(today()), "year"), Some("Enter a valid car year"));
        form.year = "20x2".into();
        assert_eq!(error_for(&form.validate(today()), "year"), Some("Enter a four digit year"));
    }

    #[test]
    fn payment_method_round_trips_select_value() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_value(method.value()), Some(method));
        }
        assert_eq!(PaymentMethod::from_value(""), None);
    }
}
