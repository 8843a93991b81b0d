// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Random password generator with strength scoring", long_about = None)]
pub struct Args {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a reproducible seeded generator (NOT for real passwords)
    #[arg(long, global = true, env = "PASSFORGE_SEED")]
    pub seed: Option<u64>,

    /// Command to execute (interactive generator when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_command_means_interactive() {
        let args = Args::try_parse_from(["passforge"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn parses_generate_flags() {
        let args = Args::try_parse_from([
            "passforge", "generate", "-l", "20", "--no-symbols", "-c", "3", "--json", "--seed", "5",
        ])
        .unwrap();

        assert!(args.json);
        assert_eq!(args.seed, Some(5));
        match args.command {
            Some(CliCommand::Generate { length, no_uppercase, no_numbers, no_symbols, count }) => {
                assert_eq!(length, Some(20));
                assert!(!no_uppercase && !no_numbers && no_symbols);
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn score_requires_a_password() {
        assert!(Args::try_parse_from(["passforge", "score"]).is_err());
        let args = Args::try_parse_from(["passforge", "score", "Abcdefghijk1!"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Score { ref password }) if password == "Abcdefghijk1!"));
    }
}
