pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod election;
pub mod report;

pub use config::{Config, View};
pub use error::{Error, Result};
pub use github::{GitHubClient, RepositoryApi};
pub use election::VoteFilter;
pub use report::{Confirmer, Reporter, StdinConfirmer};
