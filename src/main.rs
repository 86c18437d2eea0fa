use clap::{Parser, Subcommand};
use corpus_sim::Result;
use corpus_sim::commands::{run_check, run_report, run_search};
use corpus_sim::config::{Config, show_config};

#[derive(Parser)]
#[command(name = "corpus-sim")]
#[command(about = "Semantic similarity reports and search over a small text corpus")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed the corpus, print the neighbor report, and persist the vectors
    Report,
    /// Rank every stored document against a free-text query
    Search {
        /// Query text to embed and compare against the stored corpus
        query: String,
    },
    /// Smoke-test the embedder with a few built-in sentences
    Check,
    /// Show the current configuration
    Config {
        /// Write the active configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Report => run_report(&config)?,
        Commands::Search { query } => run_search(&config, &query)?,
        Commands::Check => run_check(&config)?,
        Commands::Config { init } => {
            if init {
                config.save()?;
                let path = Config::config_file_path()
                    .map_err(|e| corpus_sim::SimError::Config(e.to_string()))?;
                println!("Configuration written to {}", path.display());
            } else {
                show_config(&config);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn cli_parsing() {
        let cli = Cli::try_parse_from(["corpus-sim", "report"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            matches!(parsed.command, Commands::Report);
        }
    }

    #[test]
    fn search_command_with_query() {
        let cli = Cli::try_parse_from(["corpus-sim", "search", "freedom and duty"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Search { query } = parsed.command {
                assert_eq!(query, "freedom and duty");
            }
        }
    }

    #[test]
    fn search_requires_a_query() {
        let cli = Cli::try_parse_from(["corpus-sim", "search"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn check_command() {
        let cli = Cli::try_parse_from(["corpus-sim", "check"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            matches!(parsed.command, Commands::Check);
        }
    }

    #[test]
    fn config_init_flag() {
        let cli = Cli::try_parse_from(["corpus-sim", "config", "--init"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Config { init } = parsed.command {
                assert!(init);
            }
        }
    }

    #[test]
    fn invalid_command() {
        let cli = Cli::try_parse_from(["corpus-sim", "invalid"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        }
    }

    #[test]
    fn help_message() {
        let cli = Cli::try_parse_from(["corpus-sim", "--help"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
