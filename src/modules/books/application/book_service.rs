// Application service for the book catalogue.
//
// Purpose
// - Single entry point for reading and mutating the store.
//
// Responsibilities
// - Validate every write before it reaches the store and report the first broken rule.
// - Split batch saves into saved books and refused books with their reason.
// - Run each check-then-write sequence under one lock so concurrent requests cannot interleave.

use crate::modules::books::core::book::{Book, UncheckedBook, is_blank};
use crate::modules::books::core::failure::BookFailure;
use crate::modules::books::core::ports::BookStore;
use crate::modules::books::core::validation::{Purpose, Validation, is_valid_id};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedBook {
    pub book: Option<UncheckedBook>,
    pub reason: BookFailure,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooksRecord {
    pub saved_books: Vec<Book>,
    pub unsaved_books: Vec<UnsavedBook>,
}

pub struct BookService<TStore>
where
    TStore: BookStore + 'static,
{
    store: Arc<TStore>,
    writes: Mutex<()>,
}

impl<TStore> BookService<TStore>
where
    TStore: BookStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            writes: Mutex::new(()),
        }
    }

    pub async fn validate_for_save(&self, candidate: Option<UncheckedBook>) -> Validation {
        let exists = self.is_stored(candidate.as_ref()).await;
        Validation::check(Purpose::Save, candidate, exists)
    }

    pub async fn validate_for_update(&self, candidate: Option<UncheckedBook>) -> Validation {
        let exists = self.is_stored(candidate.as_ref()).await;
        Validation::check(Purpose::Update, candidate, exists)
    }

    pub async fn save_one(&self, candidate: Option<UncheckedBook>) -> Result<Book, BookFailure> {
        let _writes = self.writes.lock().await;
        match self.validate_for_save(candidate).await {
            Validation::Valid(book) => {
                let saved = self.store.insert_one(book).await;
                tracing::info!(id = saved.id(), "book saved");
                Ok(saved)
            }
            Validation::Invalid { reason, .. } => {
                tracing::warn!(kind = reason.kind(), "book not saved");
                Err(reason)
            }
        }
    }

    /// Validates every candidate against the store as it was before the batch,
    /// then inserts the accepted ones in a single call. A repeated id inside the
    /// batch is refused after its first occurrence.
    pub async fn save_all(&self, candidates: Vec<Option<UncheckedBook>>) -> BooksRecord {
        let _writes = self.writes.lock().await;
        let mut accepted_ids = HashSet::new();
        let mut accepted = Vec::new();
        let mut unsaved_books = Vec::new();

        for candidate in candidates {
            match self.validate_for_save(candidate).await {
                Validation::Valid(book) if accepted_ids.insert(book.id().to_owned()) => {
                    accepted.push(book)
                }
                Validation::Valid(book) => unsaved_books.push(UnsavedBook {
                    book: Some(book.into()),
                    reason: BookFailure::AlreadyExists,
                }),
                Validation::Invalid { candidate, reason } => unsaved_books.push(UnsavedBook {
                    book: candidate,
                    reason,
                }),
            }
        }

        let saved_books = self.store.insert_many(accepted).await;
        tracing::info!(
            saved = saved_books.len(),
            unsaved = unsaved_books.len(),
            "book batch processed"
        );
        BooksRecord {
            saved_books,
            unsaved_books,
        }
    }

    pub async fn find_one_by_id(&self, id: &str) -> Result<Book, BookFailure> {
        if let Some(failure) = is_valid_id(Some(id)) {
            return Err(failure);
        }
        tracing::debug!(id, "looking up book");
        self.store.find_by_id(id).await.ok_or(BookFailure::NotFound)
    }

    pub async fn find_all(&self) -> Vec<Book> {
        self.store.find_all().await
    }

    pub async fn update_one(&self, candidate: Option<UncheckedBook>) -> Result<Book, BookFailure> {
        let _writes = self.writes.lock().await;
        match self.validate_for_update(candidate).await {
            Validation::Valid(book) => {
                let updated = self.store.replace_by_id(book).await.ok_or_else(|| {
                    tracing::error!("store lost a book between validation and update");
                    BookFailure::Generic("Unknown book exception!".to_string())
                })?;
                tracing::info!(id = updated.id(), "book updated");
                Ok(updated)
            }
            Validation::Invalid { reason, .. } => {
                tracing::warn!(kind = reason.kind(), "book not updated");
                Err(reason)
            }
        }
    }

    /// Removes the book from the store and returns it.
    pub async fn delete_one_by_id(&self, id: &str) -> Result<Book, BookFailure> {
        if let Some(failure) = is_valid_id(Some(id)) {
            return Err(failure);
        }
        let _writes = self.writes.lock().await;
        let deleted = self.store.remove_by_id(id).await.ok_or(BookFailure::NotFound)?;
        tracing::info!(id, "book deleted");
        Ok(deleted)
    }

    pub async fn delete_all(&self) {
        let _writes = self.writes.lock().await;
        self.store.clear().await;
        tracing::info!("all books deleted");
    }

    pub async fn is_exist(&self, id: &str) -> bool {
        self.store.exists(id).await
    }

    async fn is_stored(&self, candidate: Option<&UncheckedBook>) -> bool {
        match candidate.and_then(|book| book.id.as_deref()) {
            Some(id) if !is_blank(Some(id)) => self.store.exists(id).await,
            _ => false,
        }
    }
}
