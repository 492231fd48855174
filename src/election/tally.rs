use std::collections::HashMap;

use crate::models::Vote;

/// How many issues the winners view ranks.
pub const MAX_WINNERS: usize = 10;

/// Counts `key` occurrences, keeping the order in which each key first appears.
fn count_in_order<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match positions.get(key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    counts
}

/// Top issues by vote count, most voted first. Ties keep encounter order.
pub fn count_votes_on_issues(votes: &[Vote]) -> Vec<(String, usize)> {
    let mut counts = count_in_order(votes.iter().map(|v| v.issue.as_str()));
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_WINNERS);
    counts
}

/// Votes per user in first-vote order, or by count descending when `sorted`.
pub fn count_votes_by_users(votes: &[Vote], sorted: bool) -> Vec<(String, usize)> {
    let mut counts = count_in_order(votes.iter().map(|v| v.user.as_str()));
    if sorted {
        counts.sort_by(|a, b| b.1.cmp(&a.1));
    }
    counts
}

/// Distinct voters of each issue, in the order their first vote appears.
pub fn voters_by_issue(votes: &[Vote]) -> HashMap<String, Vec<String>> {
    let mut voters: HashMap<String, Vec<String>> = HashMap::new();
    for vote in votes {
        let names = voters.entry(vote.issue.clone()).or_default();
        if !names.contains(&vote.user) {
            names.push(vote.user.clone());
        }
    }
    voters
}
