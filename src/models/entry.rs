use super::{register_type::RegisterType, return_status::ReturnStatus};
use serde::{Deserialize, Serialize};

/// One sign-in record, colleague or visitor.
///
/// Field names follow the message contract (`firstName`, `lastName`, `type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64, // ⇔ entries.id (INTEGER PRIMARY KEY, ms timestamp)
    #[serde(rename = "type")]
    pub register: RegisterType, // ⇔ entries.type
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub card: String,
    pub date: String, // ⇔ entries.date (TEXT, e.g. "15/03/2024")
    pub hour: String, // ⇔ entries.hour (TEXT, e.g. "09:41")
    #[serde(default)]
    pub returned: Option<ReturnStatus>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Entry {
    /// Build a freshly signed-in entry.
    /// Colleagues start as `Not Returned`, visitors carry no status.
    pub fn sign_in(
        id: i64,
        register: RegisterType,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        card: impl Into<String>,
        date: impl Into<String>,
        hour: impl Into<String>,
    ) -> Self {
        let returned = if register.is_colleagues() {
            Some(ReturnStatus::NotReturned)
        } else {
            None
        };

        Self {
            id,
            register,
            first_name: first_name.into(),
            last_name: last_name.into(),
            card: card.into(),
            date: date.into(),
            hour: hour.into(),
            returned,
            note: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Same record with a new return status and note.
    pub fn with_status(&self, returned: Option<ReturnStatus>, note: Option<String>) -> Self {
        Self {
            returned,
            note,
            ..self.clone()
        }
    }
}
