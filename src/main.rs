use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use release_tags::config::Config;
use release_tags::logging;
use release_tags::notes::{RenderStyle, render};
use release_tags::version::resolver::ReleaseResolver;
use release_tags::version::sources::GitHubSource;

#[derive(Parser)]
#[command(name = "release-tags")]
#[command(version, about = "Resolve the latest release and pre-release tags of a project")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/release-tags/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GitHub repository to query
    #[arg(long, global = true, value_name = "OWNER/REPO")]
    repo: Option<String>,

    /// Tag line to resolve, e.g. v2
    #[arg(long, global = true, value_name = "PREFIX")]
    line: Option<String>,

    /// GitHub API base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every version on the line, newest first
    List,
    /// Print the latest stable release
    Latest,
    /// Print the latest pre-release
    LatestPre,
    /// Print whether TAG is a published tag on the line
    Validate { tag: String },
    /// Print the release notes of TAG
    Notes {
        tag: String,
        /// Print undecorated text
        #[arg(long)]
        plain: bool,
    },
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(repo) = &self.repo {
            config.source.repository = repo.clone();
        }
        if let Some(line) = &self.line {
            config.line_prefix = line.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply_overrides(&mut config);

    let _guard = logging::init(&config.log, cli.verbose)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    let source = Arc::new(
        GitHubSource::new(&config.source.base_url, &config.source.repository)?
            .with_token(config.source.token.clone())
            .with_max_pages(config.source.max_pages),
    );
    let resolver = ReleaseResolver::new(source.clone(), source, &config.line_prefix);
    debug!(
        "Resolving line {} of {}",
        resolver.line_prefix(),
        config.source.repository
    );

    match command {
        Command::List => {
            let versions = resolver
                .list_versions_descending()
                .await
                .context("Failed to list versions")?;
            for version in versions {
                println!("{}", version);
            }
        }
        Command::Latest => {
            let version = resolver
                .latest_stable()
                .await
                .context("Failed to resolve latest release")?;
            println!("{}", version);
        }
        Command::LatestPre => {
            let version = resolver
                .latest_pre_release()
                .await
                .context("Failed to resolve latest pre-release")?;
            println!("{}", version);
        }
        Command::Validate { tag } => {
            let valid = resolver
                .is_valid_tag(&tag)
                .await
                .with_context(|| format!("Failed to validate tag {}", tag))?;
            println!("{}", valid);
        }
        Command::Notes { tag, plain } => {
            let notes = resolver
                .release_notes(&tag)
                .await
                .with_context(|| format!("Failed to fetch release notes for {}", tag))?;
            let style = if plain {
                RenderStyle::Plain
            } else {
                RenderStyle::for_host()
            };
            print!("{}", render(&notes, style));
        }
    }

    Ok(())
}
