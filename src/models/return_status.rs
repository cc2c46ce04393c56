use serde::{Deserialize, Serialize};

/// Whether a colleague handed the temporary card back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReturnStatus {
    Returned,
    #[serde(rename = "Not Returned")]
    NotReturned,
}

impl ReturnStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReturnStatus::Returned => "Returned",
            ReturnStatus::NotReturned => "Not Returned",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Returned" => Some(ReturnStatus::Returned),
            "Not Returned" => Some(ReturnStatus::NotReturned),
            _ => None,
        }
    }
}
