use crate::models::Entry;
use serde::Serialize;

/// Flat export row; optional fields become empty cells.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    #[serde(rename = "type")]
    pub register: String,
    pub first_name: String,
    pub last_name: String,
    pub card: String,
    pub date: String,
    pub hour: String,
    pub returned: String,
    pub note: String,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id,
            register: e.register.to_db_str().to_string(),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            card: e.card.clone(),
            date: e.date.clone(),
            hour: e.hour.clone(),
            returned: e
                .returned
                .map(|r| r.to_db_str().to_string())
                .unwrap_or_default(),
            note: e.note.clone().unwrap_or_default(),
        }
    }
}
