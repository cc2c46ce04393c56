//! Store predicates: a conjunction of clauses rendered into a SQL `WHERE`.
//!
//! Substring tests use `instr(col, ?) > 0` rather than `LIKE` so that the
//! needle is matched literally and case-sensitively (`%`, `_` in a name are
//! plain characters).

use crate::models::RegisterType;

/// Columns a predicate may test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Register,
    FirstName,
    LastName,
    Card,
    Date,
}

impl Field {
    fn column(&self) -> &'static str {
        match self {
            Field::Register => "type",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Card => "card",
            Field::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Exact match.
    Eq(Field, String),
    /// Substring containment.
    Contains(Field, String),
    /// Exact match against any of the values.
    AnyOf(Field, Vec<String>),
}

/// All clauses must hold. An empty predicate matches every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut for the clause every listing starts from.
    pub fn register(register: RegisterType) -> Self {
        Self::new().eq(Field::Register, register.to_db_str())
    }

    pub fn eq(mut self, field: Field, value: impl Into<String>) -> Self {
        self.clauses.push(Clause::Eq(field, value.into()));
        self
    }

    pub fn contains(mut self, field: Field, needle: impl Into<String>) -> Self {
        self.clauses.push(Clause::Contains(field, needle.into()));
        self
    }

    pub fn any_of<I, S>(mut self, field: Field, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clauses
            .push(Clause::AnyOf(field, values.into_iter().map(Into::into).collect()));
        self
    }

    /// Render to `(where_sql, params)`; parameters are positional `?`.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        if self.clauses.is_empty() {
            return ("1 = 1".to_string(), Vec::new());
        }

        let mut parts = Vec::with_capacity(self.clauses.len());
        let mut params = Vec::new();

        for clause in &self.clauses {
            match clause {
                Clause::Eq(field, value) => {
                    parts.push(format!("{} = ?", field.column()));
                    params.push(value.clone());
                }
                Clause::Contains(field, needle) => {
                    parts.push(format!("instr({}, ?) > 0", field.column()));
                    params.push(needle.clone());
                }
                Clause::AnyOf(_, values) if values.is_empty() => {
                    // empty disjunction
                    parts.push("0 = 1".to_string());
                }
                Clause::AnyOf(field, values) => {
                    let placeholders = vec!["?"; values.len()].join(", ");
                    parts.push(format!("{} IN ({})", field.column(), placeholders));
                    params.extend(values.iter().cloned());
                }
            }
        }

        (parts.join(" AND "), params)
    }
}
