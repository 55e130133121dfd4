// Auth and persistence layer
// Everything below the context: storage, the two identity backends and the flow that picks between them

pub mod types;
pub mod storage;
pub mod mock_auth;
pub mod backend_client;
pub mod auth_store;
