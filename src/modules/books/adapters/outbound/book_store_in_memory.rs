// In memory implementation of the BookStore port.
//
// Purpose
// - Hold the whole catalogue for the running process. Nothing survives a restart.
//
// Responsibilities
// - Keep books in insertion order; lookups are linear scans.
// - Serialize every mutation behind a single lock.

use crate::modules::books::core::book::Book;
use crate::modules::books::core::ports::BookStore;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl BookStore for InMemoryBookStore {
    async fn insert_one(&self, book: Book) -> Book {
        self.books.write().await.push(book.clone());
        book
    }

    async fn insert_many(&self, books: Vec<Book>) -> Vec<Book> {
        self.books.write().await.extend_from_slice(&books);
        books
    }

    async fn find_by_id(&self, id: &str) -> Option<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id() == id)
            .cloned()
    }

    async fn find_all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    async fn replace_by_id(&self, book: Book) -> Option<Book> {
        let mut guard = self.books.write().await;
        let position = guard.iter().position(|stored| stored.id() == book.id())?;
        guard.remove(position);
        guard.push(book.clone());
        Some(book)
    }

    async fn remove_by_id(&self, id: &str) -> Option<Book> {
        let mut guard = self.books.write().await;
        let position = guard.iter().position(|book| book.id() == id)?;
        Some(guard.remove(position))
    }

    async fn clear(&self) {
        self.books.write().await.clear();
    }

    async fn exists(&self, id: &str) -> bool {
        self.books.read().await.iter().any(|book| book.id() == id)
    }
}

#[cfg(test)]
mod book_in_memory_store_tests {
    use super::*;
    use crate::tests::fixtures::books::book;
    use rstest::{fixture, rstest};

    #[fixture]
    async fn seeded() -> InMemoryBookStore {
        let store = InMemoryBookStore::new();
        store
            .insert_many(vec![book("123", "A"), book("234", "B")])
            .await;
        store
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_insert_one_book_and_return_it() {
        let store = InMemoryBookStore::new();
        let inserted = store.insert_one(book("123", "A")).await;
        assert_eq!(inserted, book("123", "A"));
        assert_eq!(store.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_check_uniqueness_on_insert() {
        let store = InMemoryBookStore::new();
        store.insert_one(book("123", "A")).await;
        store.insert_one(book("123", "A")).await;
        assert_eq!(store.len().await, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_books_in_insertion_order(#[future] seeded: InMemoryBookStore) {
        let store = seeded.await;
        assert_eq!(
            store.find_all().await,
            vec![book("123", "A"), book("234", "B")]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_find_a_book_by_id(#[future] seeded: InMemoryBookStore) {
        let store = seeded.await;
        assert_eq!(store.find_by_id("234").await, Some(book("234", "B")));
        assert_eq!(store.find_by_id("999").await, None);
        assert!(store.exists("123").await);
        assert!(!store.exists("999").await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_an_existing_book_at_the_end(#[future] seeded: InMemoryBookStore) {
        let store = seeded.await;
        let replaced = store.replace_by_id(book("123", "C")).await;
        assert_eq!(replaced, Some(book("123", "C")));
        assert_eq!(
            store.find_all().await,
            vec![book("234", "B"), book("123", "C")]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_insert_when_replacing_an_unknown_book(
        #[future] seeded: InMemoryBookStore,
    ) {
        let store = seeded.await;
        assert_eq!(store.replace_by_id(book("999", "Z")).await, None);
        assert_eq!(store.len().await, 2);
        assert!(!store.exists("999").await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_a_book_by_id(#[future] seeded: InMemoryBookStore) {
        let store = seeded.await;
        assert_eq!(store.remove_by_id("123").await, Some(book("123", "A")));
        assert_eq!(store.remove_by_id("123").await, None);
        assert_eq!(store.find_all().await, vec![book("234", "B")]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_the_store(#[future] seeded: InMemoryBookStore) {
        let store = seeded.await;
        store.clear().await;
        assert!(store.is_empty().await);
        store.clear().await;
        assert!(store.is_empty().await);
    }
}
