pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "clinic-api")]
#[command(about = "Clinic API - appointments, treatments and monitoring service")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides CLINIC_API_PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Issue a signed development token")]
    Token {
        #[arg(long, help = "User id placed in the token subject")]
        user_id: i64,
        #[arg(long, help = "Role code: ADMIN, DOCTOR, PATIENT or LAB_OPERATOR")]
        role: String,
        #[arg(long, default_value = "dev@clinica.local", help = "Email claim")]
        email: String,
        #[arg(long, help = "Token lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        hours: Option<u64>,
    },

    #[command(about = "List route policies: allowed roles and success messages")]
    Routes,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(port).await,
        Commands::Token { user_id, role, email, hours } => {
            commands::token::handle(user_id, &role, email, hours, output_format)
        }
        Commands::Routes => commands::routes::handle(output_format),
    }
}
