pub mod deleter;
pub mod filter;
pub mod roster;
pub mod tally;

pub use deleter::delete_votes;
pub use filter::VoteFilter;
pub use roster::{absent_voters, restrict_collaborators};
pub use tally::{count_votes_by_users, count_votes_on_issues, voters_by_issue, MAX_WINNERS};
