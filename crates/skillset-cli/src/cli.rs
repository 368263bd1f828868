use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillset", about = "Helpers invoked by the agent skills", version)]
pub struct Cli {
    /// Project root holding skills-configs.json [default: current directory]
    #[arg(long, env = "SKILLSET_ROOT", global = true)]
    pub root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Resolve the project configuration and print it as JSON
    Config,

    /// Print the ticket tracker base URL (empty if not configured)
    BaseUrl,

    /// Render ticket links for a PR description
    Tickets {
        /// Ticket identifiers (comma or space separated)
        ids: Vec<String>,
    },

    /// Print OS type and architecture
    System,

    /// Print the current username
    Whoami,

    /// Validate every SKILL.md in a skills directory
    Check {
        /// Skills directory [default: settings skills.dir]
        dir: Option<PathBuf>,
    },
}
