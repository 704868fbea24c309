// Composition root for the books service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory store and wire it into the book service.
// - Expose the HTTP router and the GraphQL schema over the same state.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
