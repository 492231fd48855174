pub mod comment;
pub mod repository;

pub use comment::*;
pub use repository::*;
