use std::collections::BTreeMap;

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

pub const NAME_MAX: u64 = 100;
pub const EMAIL_MAX: u64 = 255;
pub const SUBJECT_MAX: u64 = 200;
pub const MESSAGE_MAX: u64 = 1000;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn max_len(&self) -> u64 {
        match self {
            Field::Name => NAME_MAX,
            Field::Email => EMAIL_MAX,
            Field::Subject => SUBJECT_MAX,
            Field::Message => MESSAGE_MAX,
        }
    }
}

/// One message per offending field, keyed in form order.
pub type FieldErrors = BTreeMap<Field, String>;

/// Raw form state as typed by the visitor.
#[derive(Default, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// A submission whose four fields passed validation together.
#[derive(Validate, Clone, Debug, PartialEq, Eq)]
pub struct ValidSubmission {
    #[validate(length(min = 1, max = NAME_MAX))]
    pub name: String,
    #[validate(email, length(min = 1, max = EMAIL_MAX))]
    pub email: String,
    #[validate(length(min = 1, max = SUBJECT_MAX))]
    pub subject: String,
    #[validate(length(min = 1, max = MESSAGE_MAX))]
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }

    /// Validates the trimmed fields and returns them only if all four pass.
    pub fn validate(&self) -> Result<ValidSubmission, FieldErrors> {
        let trimmed = ValidSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };

        match trimmed.validate() {
            Ok(()) => Ok(trimmed),
            Err(errors) => Err(field_errors(self, &errors)),
        }
    }
}

fn field_errors(submission: &ContactSubmission, errors: &ValidationErrors) -> FieldErrors {
    let kinds = errors.errors();

    Field::VARIANTS
        .iter()
        .filter_map(|field| {
            let ValidationErrorsKind::Field(list) = kinds.get(field.as_ref())? else {
                return None;
            };

            let value = submission.get(*field).trim();
            let message = if value.is_empty() {
                format!("{} is required", field.label())
            } else if list.iter().any(|e| e.code == "length") {
                format!(
                    "{} must be at most {} characters",
                    field.label(),
                    field.max_len()
                )
            } else {
                "Please enter a valid email address".to_owned()
            };

            Some((*field, message))
        })
        .collect()
}
