mod client;
mod models;

pub use client::ApiClient;
pub use models::ApiConfig;
