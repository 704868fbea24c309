// Shared test fixtures for books.

use crate::modules::books::core::book::{Book, UncheckedBook};

pub fn book(id: &str, name: &str) -> Book {
    Book::new(id, name).expect("fixture book must be valid")
}

pub struct UncheckedBookBuilder {
    inner: UncheckedBook,
}

impl Default for UncheckedBookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UncheckedBookBuilder {
    pub fn new() -> Self {
        Self {
            inner: UncheckedBook::new("123", "Quarkus cookbook"),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = Some(v.into());
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn without_id(mut self) -> Self {
        self.inner.id = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.inner.name = None;
        self
    }

    pub fn build(self) -> UncheckedBook {
        self.inner
    }

    pub fn some(self) -> Option<UncheckedBook> {
        Some(self.inner)
    }
}

#[cfg(test)]
mod unchecked_book_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_a_valid_book() {
        let built = UncheckedBookBuilder::default().build();
        assert_eq!(Book::try_from(&built), Ok(book("123", "Quarkus cookbook")));
    }

    #[rstest]
    fn setters_override_fields() {
        let built = UncheckedBookBuilder::new().id("9").without_name().build();
        assert_eq!(built.id.as_deref(), Some("9"));
        assert_eq!(built.name, None);
    }
}
