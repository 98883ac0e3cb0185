// HTTP module: outbound client.

#[path = "client/hyper_client.rs"]
pub mod client;

pub use client::{create_client, HyperClient};
