//! Request and notification messages exchanged with the host/UI layer.
//!
//! Shapes follow the desktop contract: requests are tagged by `kind`
//! (`loadListColleagues`, `findItem`, …), payload fields are camelCase.

use crate::core::resolver::FilterRequest;
use crate::models::{Entry, RegisterType, ReturnStatus};
use serde::{Deserialize, Serialize};

/// Payload of `loadListColleagues` / `loadListVisitors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyListing {
    #[serde(rename = "type")]
    pub register: RegisterType,
    pub today: String,
    pub yesterday: String,
}

/// Wrapper used by every message that targets one stored entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub item: Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Request {
    LoadListColleagues(DailyListing),
    LoadListVisitors(DailyListing),
    AddItem {
        item: Entry,
    },
    ClearAll,
    DeleteItem(ItemRef),
    #[serde(rename_all = "camelCase")]
    DeleteOld {
        six_ago_formatted_month: String,
    },
    /// Replace the stored record with `item`, status forced to `Returned`.
    /// The record keeps the `type` it carries; it is not rewritten to
    /// `colleagues`.
    #[serde(rename_all = "camelCase")]
    UpdateItemReturned {
        item: Entry,
        #[serde(default)]
        note_content: Option<String>,
    },
    /// As `updateItemReturned`, status forced to `Not Returned`.
    #[serde(rename_all = "camelCase")]
    UpdateItemNotReturned {
        item: Entry,
        #[serde(default)]
        note_content: Option<String>,
    },
    /// Replace the stored record with `item`, `note` set to `noteValue` and
    /// `returned` to `returnedStatus`. The record keeps its own `type`, so a
    /// visitor stays a visitor; it is not rewritten to `colleagues`.
    #[serde(rename_all = "camelCase")]
    UpdateNote {
        item: Entry,
        #[serde(default)]
        note_value: Option<String>,
        #[serde(default)]
        returned_status: Option<ReturnStatus>,
    },
    FindItem(FilterRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notification {
    LoadedColleagues { docs: Vec<Entry> },
    LoadedVisitors { docs: Vec<Entry> },
    Cleared,
    DeletedOld { count: usize },
    Found { docs: Vec<Entry> },
}

/// A notification tagged with the id of the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: u64,
    #[serde(flatten)]
    pub notification: Notification,
}

/// A request tagged with a caller-chosen correlation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: u64,
    #[serde(flatten)]
    pub request: Request,
}
