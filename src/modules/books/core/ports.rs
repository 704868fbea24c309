// Ports define what the books core needs from storage, without implementing it.
//
// Boundaries
// - The store does no validation. Uniqueness of ids is the caller's job.
// - Adapters implement this trait in adapters/outbound.

use async_trait::async_trait;

use crate::modules::books::core::book::Book;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// Appends the book and hands it back unchanged.
    async fn insert_one(&self, book: Book) -> Book;

    /// Appends all books in order and hands them back unchanged.
    async fn insert_many(&self, books: Vec<Book>) -> Vec<Book>;

    async fn find_by_id(&self, id: &str) -> Option<Book>;

    /// Snapshot of every stored book, in insertion order.
    async fn find_all(&self) -> Vec<Book>;

    /// Removes the stored book with the same id and appends `book`.
    /// Returns `None`, and inserts nothing, when no such book was stored.
    async fn replace_by_id(&self, book: Book) -> Option<Book>;

    async fn remove_by_id(&self, id: &str) -> Option<Book>;

    async fn clear(&self);

    async fn exists(&self, id: &str) -> bool;
}
