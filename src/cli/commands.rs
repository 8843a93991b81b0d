// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (any positive value; the interactive slider allows 8-32)
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out numbers
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// How many passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Rate the strength of a password
    Score {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides WEB_ADDRESS)
        #[arg(long)]
        address: Option<String>,

        /// Port to bind (overrides WEB_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Open the interactive generator
    Interactive,
}
