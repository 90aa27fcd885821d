//! Semantic column roles and the schema produced by resolving them.
//!
//! Roster files do not follow a fixed header layout, so each column the
//! analytics need is located by keyword. The keyword table lives here as
//! data so the matching policy can be inspected and tested on its own.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// A semantic category a roster column may represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Name,
    City,
    State,
    Phone,
    Email,
    Website,
    ZipCode,
}

impl Role {
    /// Every role, in resolution order.
    pub const ALL: [Role; 7] = [
        Role::City,
        Role::State,
        Role::Name,
        Role::Phone,
        Role::Email,
        Role::Website,
        Role::ZipCode,
    ];

    /// Lower-case keywords; a header matches when it contains any of them.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Role::Name => &["name"],
            Role::City => &["city"],
            Role::State => &["state"],
            Role::Phone => &["phone", "mobile"],
            Role::Email => &["email"],
            Role::Website => &["website", "url"],
            Role::ZipCode => &["zip", "postal"],
        }
    }

    /// Whether the role falls back to the first column when nothing matches.
    pub fn falls_back_to_first_column(self) -> bool {
        matches!(self, Role::Name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Name => "name",
            Role::City => "city",
            Role::State => "state",
            Role::Phone => "phone",
            Role::Email => "email",
            Role::Website => "website",
            Role::ZipCode => "zip_code",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| RosterError::UnknownRole(s.to_string()))
    }
}

/// Mapping from role to the concrete column chosen for it.
///
/// At most one column per role. Once a role is assigned it is never
/// replaced; later candidates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSchema {
    columns: BTreeMap<Role, String>,
}

impl ResolvedSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `column` to `role` unless the role already has a column.
    ///
    /// Returns `true` when the assignment took effect.
    pub fn assign(&mut self, role: Role, column: impl Into<String>) -> bool {
        if self.columns.contains_key(&role) {
            return false;
        }
        self.columns.insert(role, column.into());
        true
    }

    /// The column resolved for `role`, if any.
    pub fn column(&self, role: Role) -> Option<&str> {
        self.columns.get(&role).map(String::as_str)
    }

    pub fn is_resolved(&self, role: Role) -> bool {
        self.columns.contains_key(&role)
    }

    /// Roles in resolution order with their column, if resolved.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Option<&str>)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.column(role)))
    }

    pub fn resolved_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_keeps_first_column() {
        let mut schema = ResolvedSchema::new();
        assert!(schema.assign(Role::City, "City"));
        assert!(!schema.assign(Role::City, "Billing City"));
        assert_eq!(schema.column(Role::City), Some("City"));
        assert_eq!(schema.resolved_count(), 1);
    }

    #[test]
    fn role_parses_from_cli_spelling() {
        assert_eq!("zip-code".parse::<Role>().unwrap(), Role::ZipCode);
        assert_eq!(" Email ".parse::<Role>().unwrap(), Role::Email);
        assert!("country".parse::<Role>().is_err());
    }

    #[test]
    fn only_name_has_a_fallback() {
        let with_fallback: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|role| role.falls_back_to_first_column())
            .collect();
        assert_eq!(with_fallback, vec![Role::Name]);
    }
}
