use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "Registered users and session login for the stock reader")]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage registered users
    #[command(subcommand)]
    Users(UsersCommand),
    /// Check credentials against the current session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    List,
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Generated when omitted
        #[arg(long)]
        id: Option<uuid::Uuid>,
    },
}
