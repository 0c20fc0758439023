use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "reading-log")]
#[command(about = "Terminal client for the reading log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against a reading-log-api server (default)
    Run,
    /// Run with local in-memory sample data
    Dev,
    /// Write the entry list to an HTML file
    Export {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
        /// Only export entries whose title or author matches
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["reading-log"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn export_takes_output_and_query() {
        let cli =
            Cli::try_parse_from(["reading-log", "export", "-o", "log.html", "--query", "dune"])
                .unwrap();

        match cli.command {
            Some(Commands::Export { output, query }) => {
                assert_eq!(output, PathBuf::from("log.html"));
                assert_eq!(query.as_deref(), Some("dune"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
