//! Credential form state and presence validation.
//!
//! DESIGN
//! ======
//! Login and registration share one `CredentialForm` trait so validation and
//! submission are written once. Each form declares its endpoint and the
//! ordered set of required fields; serde derives the exact request body.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::net::auth_api::AuthEndpoint;

/// A named credential input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    /// JSON key and HTML `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Human-readable label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

/// A form whose fields are all required and posted as one JSON object.
pub trait CredentialForm: Serialize {
    /// Remote endpoint this form submits to.
    const ENDPOINT: AuthEndpoint;
    /// Required fields in display order.
    const FIELDS: &'static [Field];

    /// Current value of `field`, or `""` if the form has no such field.
    fn value(&self, field: Field) -> &str;

    /// Replace the value of `field`. Fields the form does not carry are ignored.
    fn set_value(&mut self, field: Field, value: String);
}

/// Login credentials posted to `/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl CredentialForm for LoginForm {
    const ENDPOINT: AuthEndpoint = AuthEndpoint::Login;
    const FIELDS: &'static [Field] = &[Field::Email, Field::Password];

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Username => "",
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Username => {}
        }
    }
}

/// Registration details posted to `/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CredentialForm for RegisterForm {
    const ENDPOINT: AuthEndpoint = AuthEndpoint::Register;
    const FIELDS: &'static [Field] = &[Field::Username, Field::Email, Field::Password];

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Per-field validation messages. Any entry means the form is invalid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if it failed validation.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }
}

/// Check that every required field has a non-blank value.
pub fn validate<F: CredentialForm>(form: &F) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for &field in F::FIELDS {
        if form.value(field).trim().is_empty() {
            errors.insert(field, required_message(field));
        }
    }
    errors
}

fn required_message(field: Field) -> String {
    format!("{} is required", field.label())
}
