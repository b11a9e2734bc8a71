//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read-only GitHub REST client
#[derive(Parser, Debug)]
#[command(name = "ghload")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Stop paginated calls after this many pages
    #[arg(long, global = true)]
    pub max_pages: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List issues and pull requests of a repository
    Issues {
        /// Repository as owner/name
        repo: String,

        /// open, closed or all
        #[arg(long)]
        state: Option<String>,

        /// Comma-separated label names
        #[arg(long)]
        labels: Option<String>,

        /// Extra query parameter (key=value), repeatable
        #[arg(short, long = "query", value_parser = parse_key_val)]
        query: Vec<(String, String)>,
    },

    /// List milestones of a repository
    Milestones {
        /// Repository as owner/name
        repo: String,

        /// open, closed or all
        #[arg(long)]
        state: Option<String>,

        /// Extra query parameter (key=value), repeatable
        #[arg(short, long = "query", value_parser = parse_key_val)]
        query: Vec<(String, String)>,
    },

    /// List releases of a repository
    Releases {
        /// Repository as owner/name
        repo: String,
    },

    /// List teams of an organization
    Teams {
        /// Organization login
        org: String,
    },

    /// List members of a team
    Members {
        /// Numeric team id
        team_id: u64,
    },

    /// List notifications of the authenticated user
    Notifications,

    /// Show a single user
    User {
        /// Login handle
        login: String,
    },

    /// Print a user's public email
    Email {
        /// Login handle
        login: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One human-readable line per item
    Pretty,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issues_command() {
        let cli = Cli::parse_from([
            "ghload", "--max-pages", "3", "issues", "octocat/hello", "--state", "closed", "-q",
            "sort=updated", "-q", "direction=asc",
        ]);

        assert_eq!(cli.max_pages, Some(3));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Issues {
                repo, state, query, ..
            } => {
                assert_eq!(repo, "octocat/hello");
                assert_eq!(state.as_deref(), Some("closed"));
                assert_eq!(
                    query,
                    vec![
                        ("sort".to_string(), "updated".to_string()),
                        ("direction".to_string(), "asc".to_string())
                    ]
                );
            }
            other => panic!("Expected Issues, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_members_requires_numeric_id() {
        assert!(Cli::try_parse_from(["ghload", "members", "core"]).is_err());

        let cli = Cli::parse_from(["ghload", "members", "42", "--format", "pretty"]);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Members { team_id: 42 }));
    }

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("since=2024-01-01T00:00:00Z"),
            Ok(("since".to_string(), "2024-01-01T00:00:00Z".to_string()))
        );
        assert_eq!(parse_key_val("a="), Ok(("a".to_string(), String::new())));
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("=x").is_err());
    }
}
