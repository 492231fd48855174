use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::github::RepositoryApi;
use crate::models::Vote;

/// Deletes each vote comment in turn.
///
/// The first failed request aborts the batch. Comments deleted before the
/// failure stay deleted.
pub async fn delete_votes(api: &dyn RepositoryApi, votes: &[Vote]) -> Result<usize> {
    let pb = ProgressBar::new(votes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} votes")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    for vote in votes {
        if let Err(e) = api.delete_comment(&vote.url).await {
            pb.abandon_with_message("Deletion aborted");
            tracing::warn!(
                "Deleting vote {} by {} on #{} failed after {} deletions",
                vote.id,
                vote.user,
                vote.issue,
                pb.position()
            );
            return Err(e);
        }
        tracing::debug!("Deleted vote {} by {} on #{}", vote.id, vote.user, vote.issue);
        pb.inc(1);
    }

    pb.finish_with_message("Votes deleted");
    Ok(votes.len())
}
