//! Sentence builders for the report views.

use std::collections::BTreeSet;

pub const ALL_VOTED_MESSAGE: &str = "All active users voted the present election.";

/// Plural suffix: singular only for exactly one.
pub fn plural(count: u64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Joins names as prose: `a`, `a and b`, `a, b and c`.
pub fn stringify_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|n| n.as_ref()).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

pub fn stringify_winner(
    title: &str,
    issue: &str,
    vote_count: usize,
    issue_url: &str,
    voters: Option<&[String]>,
) -> String {
    let short_result = format!(
        "{} (#{}) has received {} votes. ({})",
        title, issue, vote_count, issue_url
    );
    match voters {
        Some(voters) if !voters.is_empty() => {
            format!("{}\n\tVoters are {}.", short_result, stringify_names(voters))
        }
        _ => short_result,
    }
}

fn papers(vote_count: usize) -> String {
    format!("{} paper{}", vote_count, plural(vote_count as u64))
}

fn votes(count: u64) -> String {
    format!("{} vote{}", count, plural(count))
}

/// Describes one voter's count relative to the `max_user_votes` threshold.
pub fn stringify_voter(user: &str, vote_count: usize, max_user_votes: u32) -> String {
    let max = max_user_votes as usize;
    if vote_count > max {
        let extra = (vote_count - max) as u64;
        format!(
            "{} voted on {} ({} could be removed)",
            user,
            papers(vote_count),
            votes(extra)
        )
    } else if vote_count < max {
        let remaining = (max - vote_count) as u64;
        format!(
            "{} voted on {} only (is eligible for {} more vote{})",
            user,
            papers(vote_count),
            remaining,
            plural(remaining)
        )
    } else {
        format!("{} voted on {}", user, papers(vote_count))
    }
}

pub fn stringify_absent_voters(absent: &BTreeSet<String>) -> String {
    if absent.is_empty() {
        return ALL_VOTED_MESSAGE.to_string();
    }
    let names: Vec<&String> = absent.iter().collect();
    let verb = if names.len() == 1 { "has" } else { "have" };
    format!("Also, {} {} not voted yet.", stringify_names(&names), verb)
}

/// Summary line printed before the clear confirmation.
pub fn stringify_deletion(
    vote_count: usize,
    issues: Option<&[String]>,
    users: Option<&[String]>,
) -> String {
    let scope = match issues {
        Some(issues) if !issues.is_empty() => {
            let ids: Vec<String> = issues.iter().map(|id| format!("#{}", id)).collect();
            format!(
                "votes on issue{} {}",
                plural(ids.len() as u64),
                stringify_names(&ids)
            )
        }
        _ => "all votes".to_string(),
    };
    let who = match users {
        Some(users) if !users.is_empty() => stringify_names(users),
        _ => "all users".to_string(),
    };
    format!(
        "{} will be deleted ({} for {}).",
        votes(vote_count as u64),
        scope,
        who
    )
}
