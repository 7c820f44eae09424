//! The contact entry value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::error::{ContactError, ContactResult};

/// Fold a name or query to its ordering key.
///
/// Each character is lower-cased on its own, so the fold of a prefix is always a
/// prefix of the fold of the whole name.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Which name an ordering is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    /// Keyed by the lower-cased first name.
    First,
    /// Keyed by the lower-cased last name.
    Last,
}

impl NameField {
    /// Return a human-readable name for this field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }

    /// Parse a field from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "first" | "first_name" => Some(Self::First),
            "last" | "last_name" => Some(Self::Last),
            _ => None,
        }
    }

    /// The ordering key of `entry` under this field.
    pub fn key(&self, entry: &Entry) -> String {
        match self {
            Self::First => entry.first_key(),
            Self::Last => entry.last_key(),
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single contact record.
///
/// Equality is structural and case-sensitive across all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Given name. May be empty if `last_name` is not.
    #[serde(default)]
    pub first_name: String,
    /// Family name. May be empty if `first_name` is not.
    #[serde(default)]
    pub last_name: String,
    /// Phone number, stored as given.
    #[serde(default)]
    pub phone_number: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Whether this entry can be stored (at least one name present).
    pub fn is_valid(&self) -> bool {
        !(self.first_name.is_empty() && self.last_name.is_empty())
    }

    /// Validate this entry's fields.
    pub fn validate(&self) -> ContactResult<()> {
        if !self.is_valid() {
            return Err(ContactError::InvalidEntry);
        }
        Ok(())
    }

    /// Lower-cased first name.
    pub fn first_key(&self) -> String {
        fold_case(&self.first_name)
    }

    /// Lower-cased last name.
    pub fn last_key(&self) -> String {
        fold_case(&self.last_name)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first_name, self.last_name, self.phone_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_all_fields() {
        let entry = Entry::new("Sally", "Graham", "+44 7700 900297");
        assert_eq!(entry.to_string(), "Sally Graham +44 7700 900297");
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let a = Entry::new("Sally", "Graham", "1");
        let b = Entry::new("sally", "Graham", "1");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_validate() {
        assert!(Entry::new("", "", "123").validate().is_err());
        assert!(Entry::new("Cher", "", "").validate().is_ok());
        assert!(Entry::new("", "Bo", "").validate().is_ok());
    }

    #[test]
    fn test_fold_case_is_position_independent() {
        assert_eq!(fold_case("ΣΑΣ"), "σασ");
        assert!(fold_case("ΣΑΣΑ").starts_with(&fold_case("ΣΑΣ")));
        assert_eq!(fold_case("GRAHAM"), "graham");
    }

    #[test]
    fn test_name_field_keys() {
        let entry = Entry::new("HaMzA", "BO", "");
        assert_eq!(NameField::First.key(&entry), "hamza");
        assert_eq!(NameField::Last.key(&entry), "bo");
        assert_eq!(NameField::from_name("Last"), Some(NameField::Last));
        assert_eq!(NameField::from_name("middle"), None);
    }
}
