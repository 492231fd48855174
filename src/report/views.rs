use std::io::Write;

use crate::config::{Config, View};
use crate::election::{
    absent_voters, count_votes_by_users, count_votes_on_issues, delete_votes,
    restrict_collaborators, voters_by_issue, VoteFilter,
};
use crate::error::{Error, Result};
use crate::github::RepositoryApi;
use crate::models::Vote;
use crate::report::confirm::{is_confirmed, Confirmer};
use crate::report::format::{
    plural, stringify_absent_voters, stringify_deletion, stringify_voter, stringify_winner,
};

pub const NO_VOTES_MESSAGE: &str = "There are no votes at the moment.";

pub const DELETE_PROMPT: &str = "Deleting votes cannot be undone! Are you sure? (y) ";

/// Runs one election report: fetch, filter, then render the configured view.
pub struct Reporter<'a, W: Write> {
    config: &'a Config,
    api: &'a dyn RepositoryApi,
    out: W,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(config: &'a Config, api: &'a dyn RepositoryApi, out: W) -> Self {
        Self { config, api, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub async fn run(&mut self, confirmer: &mut dyn Confirmer) -> Result<()> {
        let comments = self.api.list_comments().await?;
        let votes = VoteFilter::from_config(self.config).apply(&comments);
        tracing::info!(
            "{} of {} comments are votes",
            votes.len(),
            comments.len()
        );

        if votes.is_empty() {
            writeln!(self.out, "{}", NO_VOTES_MESSAGE)?;
            return Ok(());
        }

        match self.config.view {
            View::Winners => self.winners_view(&votes).await,
            View::Voters => self.voters_view(&votes).await,
            View::Clear => self.clear_view(&votes, confirmer).await,
        }
    }

    async fn winners_view(&mut self, votes: &[Vote]) -> Result<()> {
        let voters = self.config.show_voters.then(|| voters_by_issue(votes));

        for (issue_id, vote_count) in count_votes_on_issues(votes) {
            let issue = self.api.get_issue(&issue_id).await?;
            let issue_voters = voters
                .as_ref()
                .and_then(|voters| voters.get(&issue_id))
                .map(|names| names.as_slice());

            writeln!(
                self.out,
                "{}",
                stringify_winner(
                    &issue.title,
                    &issue_id,
                    vote_count,
                    &self.config.issue_url(&issue_id),
                    issue_voters,
                )
            )?;
        }

        Ok(())
    }

    async fn voters_view(&mut self, votes: &[Vote]) -> Result<()> {
        for (user, vote_count) in count_votes_by_users(votes, self.config.sort_voters) {
            writeln!(
                self.out,
                "{}",
                stringify_voter(&user, vote_count, self.config.max_user_votes)
            )?;
        }

        let collaborators = restrict_collaborators(
            self.api.list_collaborators().await?,
            self.config.users.as_deref(),
        );
        let absent = absent_voters(&collaborators, votes);
        tracing::debug!(
            "{} of {} collaborators have not voted",
            absent.len(),
            collaborators.len()
        );

        writeln!(self.out, "{}", stringify_absent_voters(&absent))?;
        Ok(())
    }

    async fn clear_view(&mut self, votes: &[Vote], confirmer: &mut dyn Confirmer) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            stringify_deletion(
                votes.len(),
                self.config.issues.as_deref(),
                self.config.users.as_deref(),
            )
        )?;
        self.out.flush()?;

        let answer = confirmer.ask(DELETE_PROMPT)?;
        if !is_confirmed(&answer) {
            return Err(Error::UserAbort);
        }

        let deleted = delete_votes(self.api, votes).await?;
        writeln!(self.out, "Deleted {} vote{}.", deleted, plural(deleted as u64))?;
        Ok(())
    }
}
