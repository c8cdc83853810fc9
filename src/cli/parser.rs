use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// CLI application to track attendance: sign in, clock in/out, daily hours
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time clock CLI: sign in, clock in and out, and review worked hours per day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Create an account and sign it in
    Register {
        #[arg(long, help = "Email address used to sign in")]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Clock in: open a new time entry at the current time
    In,

    /// Clock out: close the open entry and print the worked hours
    Out,

    /// Show the current tracking status
    Status {
        #[arg(long, help = "Keep running and redraw the wall clock every second")]
        watch: bool,
    },

    /// Per-day summary of worked hours
    List {
        #[arg(long, help = "Only show the given date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Emit JSON instead of a table")]
        json: bool,
    },
}
