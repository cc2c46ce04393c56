use serde::{Deserialize, Serialize};
use std::fmt;

/// The two logical sub-registers sharing the `entries` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RegisterType {
    Colleagues,
    Visitors,
}

impl RegisterType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RegisterType::Colleagues => "colleagues",
            RegisterType::Visitors => "visitors",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "colleagues" => Some(RegisterType::Colleagues),
            "visitors" => Some(RegisterType::Visitors),
            _ => None,
        }
    }

    pub fn is_colleagues(&self) -> bool {
        matches!(self, RegisterType::Colleagues)
    }
}

impl fmt::Display for RegisterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
