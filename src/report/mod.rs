pub mod confirm;
pub mod format;
pub mod views;

pub use confirm::{Confirmer, StdinConfirmer};
pub use views::{Reporter, NO_VOTES_MESSAGE};
