use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{self, FieldErrors};

/// Account entity - a registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub profile_picture: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl Account {
    /// Create a new active account with generated ID and join timestamp.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            first_name: String::new(),
            last_name: String::new(),
            password_hash,
            profile_picture: None,
            description: String::new(),
            is_active: true,
            date_joined: Utc::now(),
            last_login: None,
        }
    }

    pub fn with_names(mut self, first_name: String, last_name: String) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }
}

/// Counters derived from related rows, computed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountStats {
    pub posts: u64,
    pub followers: u64,
    pub following: u64,
}

/// Registration input before uniqueness checks.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

impl Registration {
    /// Checks that need no storage access.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        validation::require_non_blank(&mut errors, "username", &self.username);
        if validation::require_non_blank(&mut errors, "email", &self.email)
            && !looks_like_email(self.email.trim())
        {
            errors.add("email", "Enter a valid email address.");
        }
        validation::require_non_blank(&mut errors, "password", &self.password);

        if self.password != self.password_confirm {
            errors.add("password_confirm", "Passwords do not match.");
        }

        errors
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(' ')
        }
        None => false,
    }
}
