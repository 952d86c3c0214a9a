use clap::Parser;

/// Top-level CLI parser for the `cap` binary.
///
/// There are no subcommands: a bare invocation runs one full sync, which is
/// what the external scheduler calls. Flags only tune logging and override
/// config values for ad-hoc runs.
#[derive(Debug, Parser)]
#[command(name = "cap", version, about = "capitol-sync - legislator mirror updater")]
pub struct Cli {
    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the upstream dataset URL
    #[arg(long)]
    pub url: Option<String>,

    /// Override the local database path
    #[arg(long)]
    pub db: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_parses() {
        let cli = Cli::try_parse_from(["cap"]).expect("cli should parse");
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert!(cli.url.is_none());
        assert!(cli.db.is_none());
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::try_parse_from([
            "cap",
            "--verbose",
            "--url",
            "https://example.test/members.json",
            "--db",
            "/tmp/mirror.db",
        ])
        .expect("cli should parse");
        assert!(cli.verbose);
        assert_eq!(cli.url.as_deref(), Some("https://example.test/members.json"));
        assert_eq!(cli.db.as_deref(), Some("/tmp/mirror.db"));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["cap", "sync"]).is_err());
    }
}
