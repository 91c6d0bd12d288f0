use std::fmt;

use serde::{Deserialize, Serialize};

pub use models::customer::{CustomerFields, Model as Customer};

/// Raw customer payload as received; nothing is trusted until validated.
///
/// Every field is optional so a missing value is reported as a field
/// violation instead of a body rejection. `dateOfBirth` is kept as text
/// (`YYYY-MM-DD`) for the same reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInput {
    /// Only read by the update variant that carries the id in the body.
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub mobile_no: Option<String>,
    pub address_line_one: Option<String>,
    pub address_line_two: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<i64>,
    pub email: Option<String>,
}

/// Why a create/update was refused by the uniqueness checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateConflict {
    Mobile,
    Email,
    MobileAndEmail,
}

impl DuplicateConflict {
    /// Decision table over the two existence checks; `None` means the write may proceed.
    pub fn from_flags(mobile_taken: bool, email_taken: bool) -> Option<Self> {
        match (mobile_taken, email_taken) {
            (true, true) => Some(Self::MobileAndEmail),
            (true, false) => Some(Self::Mobile),
            (false, true) => Some(Self::Email),
            (false, false) => None,
        }
    }

    /// Recover the conflicting field from a unique-index violation message.
    pub fn from_index_message(msg: &str) -> Option<Self> {
        if msg.contains(models::customer::UNIQ_MOBILE_NO) {
            Some(Self::Mobile)
        } else if msg.contains(models::customer::UNIQ_EMAIL) {
            Some(Self::Email)
        } else {
            None
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Self::Mobile => "mobile already exists",
            Self::Email => "email already exists",
            Self::MobileAndEmail => "mobile and email already exist",
        }
    }
}

impl fmt::Display for DuplicateConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Result of a delete; a missing id is an ordinary outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Deleted => "Data deleted.",
            Self::NotFound => "Customer data not found.",
        }
    }
}
