use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::books::adapters::inbound::http::ALL_DELETED_MESSAGE;
use crate::modules::books::application::book_service::{BooksRecord, UnsavedBook};
use crate::modules::books::core::book::{Book, UncheckedBook};
use crate::modules::books::core::failure::BookFailure;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Book")]
pub struct GqlBook {
    pub id: String,
    pub name: String,
}

impl From<Book> for GqlBook {
    fn from(book: Book) -> Self {
        Self {
            id: book.id().to_owned(),
            name: book.name().to_owned(),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "BookPayload")]
pub struct GqlBookPayload {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "UnsavedBook")]
pub struct GqlUnsavedBook {
    pub book: Option<GqlBookPayload>,
    pub reason: String,
}

impl From<UnsavedBook> for GqlUnsavedBook {
    fn from(unsaved: UnsavedBook) -> Self {
        Self {
            book: unsaved.book.map(|book| GqlBookPayload {
                id: book.id,
                name: book.name,
            }),
            reason: unsaved.reason.to_string(),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "SavedBooks")]
pub struct GqlSavedBooks {
    pub saved_books: Vec<GqlBook>,
    pub unsaved_books: Vec<GqlUnsavedBook>,
}

impl From<BooksRecord> for GqlSavedBooks {
    fn from(record: BooksRecord) -> Self {
        Self {
            saved_books: record.saved_books.into_iter().map(Into::into).collect(),
            unsaved_books: record.unsaved_books.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "BookInput")]
pub struct GqlBookInput {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl From<GqlBookInput> for UncheckedBook {
    fn from(input: GqlBookInput) -> Self {
        Self {
            id: input.id,
            name: input.name,
        }
    }
}

fn into_gql_error(failure: BookFailure) -> async_graphql::Error {
    let kind = failure.kind().to_string();
    async_graphql::Error::new(failure.to_string())
        .extend_with(|_, extensions| extensions.set("kind", kind))
}

fn into_gql_result(result: Result<Book, BookFailure>) -> GqlResult<GqlBook> {
    result.map(Into::into).map_err(into_gql_error)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn book(&self, context: &Context<'_>, id: String) -> GqlResult<GqlBook> {
        let state = context.data_unchecked::<AppState>();
        into_gql_result(state.book_service.find_one_by_id(&id).await)
    }

    async fn books(&self, context: &Context<'_>) -> Vec<GqlBook> {
        let state = context.data_unchecked::<AppState>();
        state
            .book_service
            .find_all()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn save_book(
        &self,
        context: &Context<'_>,
        book: Option<GqlBookInput>,
    ) -> GqlResult<GqlBook> {
        let state = context.data_unchecked::<AppState>();
        into_gql_result(state.book_service.save_one(book.map(Into::into)).await)
    }

    async fn save_books(
        &self,
        context: &Context<'_>,
        books: Vec<Option<GqlBookInput>>,
    ) -> GqlSavedBooks {
        let state = context.data_unchecked::<AppState>();
        let candidates = books.into_iter().map(|book| book.map(Into::into)).collect();
        state.book_service.save_all(candidates).await.into()
    }

    async fn update_book(
        &self,
        context: &Context<'_>,
        book: Option<GqlBookInput>,
    ) -> GqlResult<GqlBook> {
        let state = context.data_unchecked::<AppState>();
        into_gql_result(state.book_service.update_one(book.map(Into::into)).await)
    }

    async fn delete_book(&self, context: &Context<'_>, id: String) -> GqlResult<GqlBook> {
        let state = context.data_unchecked::<AppState>();
        into_gql_result(state.book_service.delete_one_by_id(&id).await)
    }

    async fn delete_books(&self, context: &Context<'_>) -> String {
        let state = context.data_unchecked::<AppState>();
        state.book_service.delete_all().await;
        ALL_DELETED_MESSAGE.to_string()
    }
}
