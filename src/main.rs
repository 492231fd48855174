use clap::Parser;
use tracing_subscriber::EnvFilter;

use election_helper::config::{
    DEFAULT_API_URL, DEFAULT_GITHUB_URL, DEFAULT_MAX_USER_VOTES, DEFAULT_TOKEN_ENV_VARIABLE,
    DEFAULT_VOTE_BODY,
};
use election_helper::{Config, GitHubClient, Reporter, StdinConfirmer, View};

#[derive(Parser, Debug)]
#[command(name = "election-helper")]
#[command(version)]
#[command(about = "Count votes cast as issue comments in a GitHub repository")]
struct Args {
    /// Selects how election votes must be seen
    #[arg(long, value_enum, default_value_t = View::Voters)]
    view: View,

    /// Comment body that counts as a vote
    #[arg(long, default_value = DEFAULT_VOTE_BODY)]
    vote_body: String,

    /// User names to be considered when iterating over votes
    #[arg(long, num_args = 1..)]
    users: Option<Vec<String>>,

    /// Issue ids to be considered when iterating over votes
    #[arg(long, num_args = 1..)]
    issues: Option<Vec<String>>,

    /// How many papers a user can vote for by election
    #[arg(long, default_value_t = DEFAULT_MAX_USER_VOTES)]
    max_user_votes: u32,

    #[arg(long, default_value = "unico-labs")]
    organization: String,

    #[arg(long, default_value = "ml-reading-club")]
    repository: String,

    /// Environment variable holding the GitHub access token
    #[arg(long, default_value = DEFAULT_TOKEN_ENV_VARIABLE)]
    token_env_variable: String,

    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, default_value = DEFAULT_GITHUB_URL)]
    github_url: String,

    /// List voter names under each winner
    #[arg(long)]
    show_voters: bool,

    /// Order the voters view by vote count
    #[arg(long)]
    sort_voters: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            view: args.view,
            vote_body: args.vote_body,
            users: args.users,
            issues: args.issues,
            max_user_votes: args.max_user_votes,
            organization: args.organization,
            repository: args.repository,
            token_env_variable: args.token_env_variable,
            api_url: args.api_url,
            github_url: args.github_url,
            show_voters: args.show_voters,
            sort_voters: args.sort_voters,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging on stderr, stdout carries the report
    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("election_helper={}", level).parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from(args).validate()?;
    let token = config.token_from_env()?;
    let github = GitHubClient::new(&config, &token)?;

    tracing::info!(
        "Counting votes in {}/{}",
        config.organization,
        config.repository
    );

    let mut reporter = Reporter::new(&config, &github, std::io::stdout());
    match reporter.run(&mut StdinConfirmer).await {
        Err(e) if e.is_abort() => {
            tracing::info!("{}", e);
            Ok(())
        }
        result => Ok(result?),
    }
}
