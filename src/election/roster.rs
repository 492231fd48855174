use std::collections::BTreeSet;

use crate::models::Vote;

/// Narrows the collaborator list to the `users` allow-list, when one is set.
pub fn restrict_collaborators(
    collaborators: Vec<String>,
    users: Option<&[String]>,
) -> BTreeSet<String> {
    collaborators
        .into_iter()
        .filter(|login| users.map_or(true, |users| users.contains(login)))
        .collect()
}

/// Collaborators who cast no vote, in alphabetical order.
pub fn absent_voters(collaborators: &BTreeSet<String>, votes: &[Vote]) -> BTreeSet<String> {
    let voters: BTreeSet<&str> = votes.iter().map(|v| v.user.as_str()).collect();
    collaborators
        .iter()
        .filter(|login| !voters.contains(login.as_str()))
        .cloned()
        .collect()
}
