//! Downstream collaborator clients.

mod vector_store_client;

pub use vector_store_client::VectorStoreClient;
