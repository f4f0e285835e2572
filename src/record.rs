//! Applicant intake data: the raw form and the validated record.

use serde::{Deserialize, Serialize};

/// The intake form fields, in the order they are collected and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Age,
    EducationLevel,
    Course,
    Income,
    Category,
    State,
    Percentage,
    Aadhar,
    Email,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FullName,
        Field::Age,
        Field::EducationLevel,
        Field::Course,
        Field::Income,
        Field::Category,
        Field::State,
        Field::Percentage,
        Field::Aadhar,
        Field::Email,
    ];

    /// JSON key used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Age => "age",
            Field::EducationLevel => "educationLevel",
            Field::Course => "course",
            Field::Income => "income",
            Field::Category => "category",
            Field::State => "state",
            Field::Percentage => "percentage",
            Field::Aadhar => "aadhar",
            Field::Email => "email",
        }
    }

    /// Human-facing label for prompts and the submitted summary.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Age => "Age",
            Field::EducationLevel => "Education Level",
            Field::Course => "Course",
            Field::Income => "Annual Family Income",
            Field::Category => "Category",
            Field::State => "State",
            Field::Percentage => "Previous Year Percentage",
            Field::Aadhar => "Aadhar Number",
            Field::Email => "Email Address",
        }
    }

    /// Name used in "please fill in" errors: the key split at capitals and
    /// lowercased, so `fullName` becomes `full name`.
    pub fn error_name(self) -> String {
        let mut name = String::new();
        for c in self.key().chars() {
            if c.is_ascii_uppercase() {
                name.push(' ');
            }
            name.push(c.to_ascii_lowercase());
        }
        name
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Age | Field::Income | Field::Percentage)
    }

    /// Select-style fields are taken verbatim; typed fields are trimmed.
    pub fn is_trimmed(self) -> bool {
        matches!(
            self,
            Field::FullName | Field::Course | Field::Aadhar | Field::Email
        )
    }
}

/// Raw form input exactly as typed, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantForm {
    pub full_name: String,
    pub age: String,
    pub education_level: String,
    pub course: String,
    pub income: String,
    pub category: String,
    pub state: String,
    pub percentage: String,
    pub aadhar: String,
    pub email: String,
}

impl ApplicantForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Age => &self.age,
            Field::EducationLevel => &self.education_level,
            Field::Course => &self.course,
            Field::Income => &self.income,
            Field::Category => &self.category,
            Field::State => &self.state,
            Field::Percentage => &self.percentage,
            Field::Aadhar => &self.aadhar,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Age => self.age = value,
            Field::EducationLevel => self.education_level = value,
            Field::Course => self.course = value,
            Field::Income => self.income = value,
            Field::Category => self.category = value,
            Field::State => self.state = value,
            Field::Percentage => self.percentage = value,
            Field::Aadhar => self.aadhar = value,
            Field::Email => self.email = value,
        }
    }

    /// Builder-style setter, handy for tests and scripted input.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// A validated applicant record. Created once per session and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    pub full_name: String,
    pub age: i64,
    pub education_level: String,
    pub course: String,
    pub income: i64,
    pub category: String,
    pub state: String,
    pub percentage: f64,
    pub aadhar: String,
    pub email: String,
}

impl ApplicantRecord {
    /// Display value of a field, formatted the way the summary shows it.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::FullName => self.full_name.clone(),
            Field::Age => self.age.to_string(),
            Field::EducationLevel => self.education_level.clone(),
            Field::Course => self.course.clone(),
            Field::Income => format!("₹{}", self.income),
            Field::Category => self.category.clone(),
            Field::State => self.state.clone(),
            Field::Percentage => format!("{}%", self.percentage),
            Field::Aadhar => self.aadhar.clone(),
            Field::Email => self.email.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_form() -> ApplicantForm {
    ApplicantForm::new()
        .with(Field::FullName, "Asha Verma")
        .with(Field::Age, "19")
        .with(Field::EducationLevel, "Undergraduate")
        .with(Field::Course, "B.Sc Physics")
        .with(Field::Income, "250000")
        .with(Field::Category, "OBC")
        .with(Field::State, "Kerala")
        .with(Field::Percentage, "86.5")
        .with(Field::Aadhar, "1234 5678 9012")
        .with(Field::Email, "asha@example.com")
}
