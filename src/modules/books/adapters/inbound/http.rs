use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::books::application::book_service::{BooksRecord, UnsavedBook};
use crate::modules::books::core::book::{Book, UncheckedBook};
use crate::modules::books::core::failure::BookFailure;
use crate::shell::state::AppState;

pub const ERROR_HEADER: &str = "error";
pub const ALL_DELETED_MESSAGE: &str = "All the Books are successfully deleted!";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBooksResponse {
    pub saved_books: Vec<Book>,
    pub unsaved_books: Vec<UnsavedBookResponse>,
}

#[derive(Debug, Serialize)]
pub struct UnsavedBookResponse {
    pub book: Option<UncheckedBook>,
    pub reason: String,
}

impl From<UnsavedBook> for UnsavedBookResponse {
    fn from(unsaved: UnsavedBook) -> Self {
        Self {
            book: unsaved.book,
            reason: unsaved.reason.to_string(),
        }
    }
}

impl From<BooksRecord> for SavedBooksResponse {
    fn from(record: BooksRecord) -> Self {
        Self {
            saved_books: record.saved_books,
            unsaved_books: record.unsaved_books.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoResponse for BookFailure {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, [(ERROR_HEADER, self.to_string())]).into_response()
    }
}

fn respond(result: Result<Book, BookFailure>) -> Response {
    match result {
        Ok(book) => Json(book).into_response(),
        Err(failure) => failure.into_response(),
    }
}

pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(state.book_service.find_one_by_id(&id).await)
}

pub async fn get_books(State(state): State<AppState>) -> Response {
    Json(state.book_service.find_all().await).into_response()
}

pub async fn save_book(
    State(state): State<AppState>,
    body: Result<Json<Option<UncheckedBook>>, JsonRejection>,
) -> Response {
    let Json(candidate) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.book_service.save_one(candidate).await)
}

pub async fn save_books(
    State(state): State<AppState>,
    body: Result<Json<Vec<Option<UncheckedBook>>>, JsonRejection>,
) -> Response {
    let Json(candidates) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let record = state.book_service.save_all(candidates).await;
    Json(SavedBooksResponse::from(record)).into_response()
}

pub async fn update_book(
    State(state): State<AppState>,
    body: Result<Json<Option<UncheckedBook>>, JsonRejection>,
) -> Response {
    let Json(candidate) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    respond(state.book_service.update_one(candidate).await)
}

pub async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(state.book_service.delete_one_by_id(&id).await)
}

pub async fn delete_books(State(state): State<AppState>) -> Response {
    state.book_service.delete_all().await;
    ALL_DELETED_MESSAGE.into_response()
}
