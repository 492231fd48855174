pub mod api;
pub mod client;

pub use api::RepositoryApi;
pub use client::GitHubClient;
