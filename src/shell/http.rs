use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::Html,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::books::adapters::inbound::http as books_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(books_http::get_books))
        .route("/books/{id}", get(books_http::get_book))
        .route("/books/save", post(books_http::save_book))
        .route("/books/savebooks", post(books_http::save_books))
        .route("/books/update", post(books_http::update_book))
        .route("/books/delete", delete(books_http::delete_books))
        .route("/books/delete/{id}", delete(books_http::delete_book))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, wrapped in tracing and CORS.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
