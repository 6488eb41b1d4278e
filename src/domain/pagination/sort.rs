//! Sort query parsing
//!
//! A sort query is a comma-separated list of `column:direction` entries,
//! e.g. `name:asc,started_at:desc`. Directions are case-insensitive on input
//! and canonicalised to `ASC` / `DESC`. The whitespace form `column DIRECTION`
//! is accepted too, which is what the default `created_at DESC` uses.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PaginationError;

/// Ordering applied to a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Desc)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(())
        }
    }
}

/// One parsed `column:direction` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// A parsed sort query.
///
/// `columns` answers "how is this column currently sorted?" for the view layer
/// (columns that were not requested are absent, never defaulted), while
/// `keys` keeps the requested precedence for the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Sort {
    /// Raw sort string as received
    pub query: String,
    /// Column name → `ASC` / `DESC`
    pub columns: BTreeMap<String, SortDirection>,
    /// Entries in the order they were given
    #[serde(skip)]
    pub keys: Vec<SortKey>,
}

impl Sort {
    pub fn parse(query: &str) -> Result<Self, PaginationError> {
        let mut keys = Vec::new();
        let mut columns = BTreeMap::new();

        if !query.trim().is_empty() {
            for entry in query.split(',') {
                let key = parse_entry(entry)?;
                if columns.insert(key.column.clone(), key.direction).is_some() {
                    return Err(PaginationError::DuplicateSortColumn(key.column));
                }
                keys.push(key);
            }
        }

        Ok(Self {
            query: query.to_string(),
            columns,
            keys,
        })
    }

    /// Current direction of `column`, if it takes part in the sort.
    pub fn direction(&self, column: &str) -> Option<SortDirection> {
        self.columns.get(column).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Normalised `col:ASC,col2:DESC` form.
    pub fn canonical(&self) -> String {
        self.keys
            .iter()
            .map(|k| format!("{}:{}", k.column, k.direction))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for Sort {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sort::parse(s)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

fn parse_entry(entry: &str) -> Result<SortKey, PaginationError> {
    let trimmed = entry.trim();
    let malformed = || PaginationError::MalformedSort {
        entry: trimmed.to_string(),
    };

    let (column, direction) = match trimmed.split_once(':') {
        Some((column, direction)) => (column.trim(), direction.trim()),
        None => {
            let mut parts = trimmed.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(column), Some(direction), None) => (column, direction),
                _ => return Err(malformed()),
            }
        }
    };

    if column.is_empty() || direction.is_empty() {
        return Err(malformed());
    }
    if !column
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return Err(PaginationError::InvalidColumn(column.to_string()));
    }

    let direction = direction
        .parse::<SortDirection>()
        .map_err(|_| PaginationError::UnknownDirection {
            column: column.to_string(),
            direction: direction.to_string(),
        })?;

    Ok(SortKey {
        column: column.to_string(),
        direction,
    })
}
