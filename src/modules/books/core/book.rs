use serde::{Deserialize, Serialize};

use crate::modules::books::core::failure::BookFailure;

/// A book that passed the blank checks. Only constructible through
/// [`Book::new`] or `TryFrom<&UncheckedBook>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: String,
    name: String,
}

impl Book {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, BookFailure> {
        Self::try_from(&UncheckedBook::new(id, name))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Inbound payload shape. Fields may be missing, `null` or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncheckedBook {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl UncheckedBook {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl TryFrom<&UncheckedBook> for Book {
    type Error = BookFailure;

    fn try_from(unchecked: &UncheckedBook) -> Result<Self, Self::Error> {
        let id = unchecked
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(BookFailure::IdBlank)?;
        let name = unchecked
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(BookFailure::NameBlank)?;
        Ok(Self {
            id: id.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl From<Book> for UncheckedBook {
    fn from(book: Book) -> Self {
        Self {
            id: Some(book.id),
            name: Some(book.name),
        }
    }
}
