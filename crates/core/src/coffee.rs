//! Coffee entries submitted through the add-coffee form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when checking a submitted [`CoffeeEntry`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoffeeError {
    /// A required field was empty or whitespace.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// A coffee record, stored exactly as the visitor typed it.
///
/// Entries have no identity: submitting the same values twice yields two
/// entries. Fields absent from a submission deserialize as empty so that
/// [`CoffeeEntry::validate`] can name them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoffeeEntry {
    pub name: String,
    pub chef: String,
    pub supplier: String,
    pub taste: String,
    pub category: String,
    pub details: String,
    /// Photo URL. Not checked for well-formedness.
    pub photo: String,
}

impl CoffeeEntry {
    /// Field names paired with their values, in form order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("chef", self.chef.as_str()),
            ("supplier", self.supplier.as_str()),
            ("taste", self.taste.as_str()),
            ("category", self.category.as_str()),
            ("details", self.details.as_str()),
            ("photo", self.photo.as_str()),
        ]
    }

    /// Check that every field is present.
    ///
    /// # Errors
    ///
    /// Returns `CoffeeError::MissingField` naming the first blank field.
    pub fn validate(&self) -> Result<(), CoffeeError> {
        match self
            .fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((field, _)) => Err(CoffeeError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// Append-only list of coffee entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoffeeList {
    entries: Vec<CoffeeEntry>,
}

impl CoffeeList {
    /// Append `entry` to the end of the list.
    #[must_use]
    pub fn add(mut self, entry: CoffeeEntry) -> Self {
        self.entries.push(entry);
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[CoffeeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn espresso() -> CoffeeEntry {
        CoffeeEntry {
            name: "Espresso".to_string(),
            chef: "Luca".to_string(),
            supplier: "Lavazza".to_string(),
            taste: "Bitter".to_string(),
            category: "Hot".to_string(),
            details: "Short and strong".to_string(),
            photo: "https://example.com/espresso.jpg".to_string(),
        }
    }

    #[test]
    fn test_complete_entry_is_valid() {
        assert!(espresso().validate().is_ok());
    }

    #[test]
    fn test_blank_field_reported_by_name() {
        let entry = CoffeeEntry {
            supplier: "   ".to_string(),
            ..espresso()
        };
        assert_eq!(
            entry.validate().unwrap_err(),
            CoffeeError::MissingField("supplier")
        );
    }

    #[test]
    fn test_first_missing_field_wins() {
        let entry = CoffeeEntry {
            chef: String::new(),
            photo: String::new(),
            ..espresso()
        };
        assert_eq!(
            entry.validate().unwrap_err().to_string(),
            "chef is required"
        );
    }

    #[test]
    fn test_add_appends_verbatim() {
        let entry = CoffeeEntry {
            name: "  Flat White ".to_string(),
            ..espresso()
        };
        let list = CoffeeList::default().add(espresso()).add(entry.clone());

        assert_eq!(list.len(), 2);
        assert_eq!(list.entries().last().unwrap(), &entry);
        assert_eq!(list.entries().last().unwrap().name, "  Flat White ");
    }

    #[test]
    fn test_duplicates_permitted() {
        let list = CoffeeList::default().add(espresso()).add(espresso());
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries().first(), list.entries().last());
    }
}
