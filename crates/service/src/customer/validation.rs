//! Field constraints for incoming customer payloads.
//!
//! Constraints are a flat table of `(field, check, message)` rules. Every field
//! is checked; within one field the first failing rule supplies its message, so
//! the result holds at most one message per field.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::domain::{CustomerFields, CustomerInput};

/// Field name -> human-readable violation. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn single(field: &str, message: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(field.to_string(), message.to_string());
        Self(map)
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, field: &str) -> Option<&str> { self.0.get(field).map(String::as_str) }

    pub fn fields(&self) -> impl Iterator<Item = &str> { self.0.keys().map(String::as_str) }

    /// Combine two reports; on a shared field the message already in `self` wins.
    pub fn merge(mut self, other: Self) -> Self {
        for (k, v) in other.0 {
            self.0.entry(k).or_insert(v);
        }
        self
    }

    fn insert_first(&mut self, field: &str, message: &str) {
        self.0.entry(field.to_string()).or_insert_with(|| message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

/// A payload that passed every rule. Only this module can build one, so the
/// write service never sees unchecked data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCustomer(CustomerFields);

impl ValidCustomer {
    pub fn fields(&self) -> &CustomerFields { &self.0 }

    pub fn into_fields(self) -> CustomerFields { self.0 }
}

#[derive(Debug, Clone, Copy)]
enum Check {
    /// Present and, for text, non-empty.
    Required,
    /// Whole value matches the pattern.
    Pattern(&'static Lazy<Regex>),
    MinLen(usize),
    MaxLen(usize),
    Min(i64),
    Max(i64),
    IsoDate,
    NotFuture,
}

struct Rule {
    field: &'static str,
    check: Check,
    message: &'static str,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("customer regex {pattern} failed to compile: {e}"))
}

static ALPHABETIC: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z]+$"));
static DIGITS: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+$"));
static EMAIL: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

const fn rule(field: &'static str, check: Check, message: &'static str) -> Rule {
    Rule { field, check, message }
}

static RULES: &[Rule] = &[
    rule("firstName", Check::Required, "First name cannot be empty."),
    rule("firstName", Check::Pattern(&ALPHABETIC), "First name must contain only alphabets."),
    rule("firstName", Check::MinLen(2), "First name must be at least 2 characters long."),
    rule("firstName", Check::MaxLen(30), "First name cannot be longer than 30 characters."),
    rule("lastName", Check::Required, "Last name cannot be empty."),
    rule("lastName", Check::Pattern(&ALPHABETIC), "Last name must contain only alphabets."),
    rule("lastName", Check::MinLen(2), "Last name must be at least 2 characters long."),
    rule("lastName", Check::MaxLen(30), "Last name cannot be longer than 30 characters."),
    rule("dateOfBirth", Check::Required, "Date of birth cannot be empty."),
    rule("dateOfBirth", Check::IsoDate, "Date of birth must be a valid date (YYYY-MM-DD)."),
    rule("dateOfBirth", Check::NotFuture, "Date of birth cannot be in the future."),
    rule("mobileNo", Check::Required, "Mobile number cannot be empty."),
    rule("mobileNo", Check::Pattern(&DIGITS), "Mobile number must contain only digits."),
    rule("mobileNo", Check::MinLen(10), "Mobile number must be at least 10 characters long."),
    rule("mobileNo", Check::MaxLen(17), "Mobile number cannot be longer than 17 characters."),
    rule("addressLineOne", Check::Required, "Address line one cannot be empty."),
    rule("addressLineOne", Check::MinLen(4), "Address must be at least 4 characters long."),
    rule("addressLineOne", Check::MaxLen(50), "Address cannot be longer than 50 characters."),
    rule("addressLineTwo", Check::Required, "Address line two cannot be empty."),
    rule("addressLineTwo", Check::MinLen(4), "Address must be at least 4 characters long."),
    rule("addressLineTwo", Check::MaxLen(50), "Address cannot be longer than 50 characters."),
    rule("age", Check::Required, "Age cannot be empty."),
    rule("age", Check::Min(1), "Age must be at least 1 year."),
    rule("age", Check::Max(150), "Age cannot be greater than 150 years."),
    rule("gender", Check::Required, "Gender cannot be empty."),
    rule("gender", Check::Min(0), "Gender must be 0 for male."),
    rule("gender", Check::Max(1), "Gender must be 1 for female."),
    rule("email", Check::Required, "Email cannot be empty."),
    rule("email", Check::MinLen(4), "Email must be at least 4 characters long."),
    rule("email", Check::Pattern(&EMAIL), "Invalid email."),
    rule("email", Check::MaxLen(30), "Email cannot be longer than 30 characters."),
];

#[derive(Clone, Copy)]
enum Value<'a> {
    Text(Option<&'a str>),
    Int(Option<i64>),
}

fn value_of<'a>(input: &'a CustomerInput, field: &str) -> Value<'a> {
    match field {
        "firstName" => Value::Text(input.first_name.as_deref()),
        "lastName" => Value::Text(input.last_name.as_deref()),
        "dateOfBirth" => Value::Text(input.date_of_birth.as_deref()),
        "mobileNo" => Value::Text(input.mobile_no.as_deref()),
        "addressLineOne" => Value::Text(input.address_line_one.as_deref()),
        "addressLineTwo" => Value::Text(input.address_line_two.as_deref()),
        "email" => Value::Text(input.email.as_deref()),
        "age" => Value::Int(input.age),
        "gender" => Value::Int(input.gender),
        _ => Value::Text(None),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Whether `value` passes `check`. Checks other than `Required` pass on absent values.
fn passes(check: Check, value: Value<'_>, today: NaiveDate) -> bool {
    match (check, value) {
        (Check::Required, Value::Text(v)) => v.is_some_and(|s| !s.is_empty()),
        (Check::Required, Value::Int(v)) => v.is_some(),
        (_, Value::Text(None)) | (_, Value::Int(None)) => true,
        (Check::Pattern(re), Value::Text(Some(s))) => re.is_match(s),
        (Check::MinLen(n), Value::Text(Some(s))) => s.chars().count() >= n,
        (Check::MaxLen(n), Value::Text(Some(s))) => s.chars().count() <= n,
        (Check::IsoDate, Value::Text(Some(s))) => parse_date(s).is_some(),
        // An unparsable date is already reported by `IsoDate`.
        (Check::NotFuture, Value::Text(Some(s))) => parse_date(s).map_or(true, |d| d <= today),
        (Check::Min(n), Value::Int(Some(v))) => v >= n,
        (Check::Max(n), Value::Int(Some(v))) => v <= n,
        // Numeric checks on text and text checks on numbers do not occur in the table.
        _ => true,
    }
}

/// Validate against today's date (UTC).
pub fn validate(input: &CustomerInput) -> Result<ValidCustomer, ValidationErrors> {
    validate_at(input, chrono::Utc::now().date_naive())
}

/// Validate every field, collecting all violations rather than stopping at the first.
pub fn validate_at(input: &CustomerInput, today: NaiveDate) -> Result<ValidCustomer, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for r in RULES {
        if errors.get(r.field).is_some() {
            continue;
        }
        if !passes(r.check, value_of(input, r.field), today) {
            errors.insert_first(r.field, r.message);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    build(input).ok_or_else(|| ValidationErrors::single("customer", "Customer data is incomplete."))
}

fn build(input: &CustomerInput) -> Option<ValidCustomer> {
    // Ranges were checked above, so the narrowing casts below are lossless.
    Some(ValidCustomer(CustomerFields {
        first_name: input.first_name.clone()?,
        last_name: input.last_name.clone()?,
        date_of_birth: parse_date(input.date_of_birth.as_deref()?)?,
        mobile_no: input.mobile_no.clone()?,
        address_line_one: input.address_line_one.clone()?,
        address_line_two: input.address_line_two.clone()?,
        age: input.age? as i32,
        gender: input.gender? as i16,
        email: input.email.clone()?,
    }))
}

/// The update variant without a path id must carry a positive `id` in the body.
pub fn require_id(input: &CustomerInput) -> Result<i64, ValidationErrors> {
    match input.id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ValidationErrors::single("id", "Customer id is required for update.")),
    }
}
