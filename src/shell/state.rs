use crate::modules::books::adapters::outbound::book_store_in_memory::InMemoryBookStore;
use crate::modules::books::application::book_service::BookService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<InMemoryBookStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryBookStore>) -> Self {
        Self {
            book_service: Arc::new(BookService::new(store)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBookStore::new()))
    }
}
