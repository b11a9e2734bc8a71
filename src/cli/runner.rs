//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::github::{GithubClient, Query};
use crate::pagination::PageResult;
use serde::Serialize;
use std::fmt::Display;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(url) = &self.cli.api_url {
            config.api_url.clone_from(url);
        }
        if self.cli.max_pages.is_some() {
            config.max_pages = self.cli.max_pages;
        }
        config.validate()?;
        Ok(config)
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = GithubClient::new(&self.client_config()?)?;

        match &self.cli.command {
            Commands::Issues {
                repo,
                state,
                labels,
                query,
            } => {
                let mut query: Query = query.iter().cloned().collect();
                if let Some(state) = state {
                    query.push("state", state);
                }
                if let Some(labels) = labels {
                    query.push("labels", labels);
                }
                self.emit_list(client.list_issues(repo, Some(&query)).await)
            }
            Commands::Milestones { repo, state, query } => {
                let mut query: Query = query.iter().cloned().collect();
                if let Some(state) = state {
                    query.push("state", state);
                }
                self.emit_list(client.list_milestones(repo, Some(&query)).await)
            }
            Commands::Releases { repo } => self.emit_list(client.list_releases(repo).await),
            Commands::Teams { org } => self.emit_list(client.list_teams(org).await),
            Commands::Members { team_id } => {
                self.emit_list(client.list_team_members(*team_id).await)
            }
            Commands::Notifications => self.emit_list(client.list_notifications().await),
            Commands::User { login } => {
                let user = client.get_user(login).await?;
                self.print_one(&user)
            }
            Commands::Email { login } => match client.get_user_email(login).await? {
                Some(email) => {
                    println!("{email}");
                    Ok(())
                }
                None => {
                    info!("{} has no public email", login);
                    Ok(())
                }
            },
        }
    }

    /// Print whatever was fetched, then surface the failure if there was one
    fn emit_list<T: Serialize + Display>(&self, result: PageResult<T>) -> Result<()> {
        match result {
            Ok(items) => {
                info!("Fetched {} item(s)", items.len());
                self.print(&items)
            }
            Err(partial) => {
                let (items, error) = partial.into_parts();
                warn!("Incomplete result: {} item(s) before failure", items.len());
                self.print(&items)?;
                Err(error)
            }
        }
    }

    fn print_one<T: Serialize + Display>(&self, item: &T) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
            OutputFormat::Pretty => println!("{item}"),
        }
        Ok(())
    }

    fn print<T: Serialize + Display>(&self, items: &[T]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(items)?);
            }
            OutputFormat::Pretty => {
                for item in items {
                    println!("{item}");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "ghload",
            "--api-url",
            "http://localhost:9999",
            "--max-pages",
            "4",
            "notifications",
        ]);
        let config = Runner::new(cli).client_config().unwrap();
        assert_eq!(config.api_url, "http://localhost:9999");
        assert_eq!(config.max_pages, Some(4));
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let cli = Cli::parse_from(["ghload", "--api-url", "nope", "notifications"]);
        assert!(Runner::new(cli).client_config().is_err());
    }
}
