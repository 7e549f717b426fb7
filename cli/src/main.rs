mod login;

use std::process::ExitCode;

use clap::Parser;
use portal_auth::Role;
use tracing_subscriber::EnvFilter;

use crate::login::{CliError, PortalClient};

#[derive(Parser, Debug)]
#[command(name = "portal-login", about = "Sign in to the internship portal from a terminal")]
struct Cli {
    #[arg(long, env = "PORTAL_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Portal persona: student, guide or admin.
    #[arg(long, default_value_t = Role::Student)]
    role: Role,

    #[arg(long, env = "PORTAL_USERNAME")]
    username: String,

    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    password: String,

    /// Log request details to stderr.
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = PortalClient::new(&cli.base_url)?;
    let signed_in = login::sign_in(&client, cli.role, &cli.username, &cli.password).await?;
    println!("signed in as {}", cli.role);
    println!("dashboard: {}", signed_in.dashboard_url);
    if !signed_in.cookies.is_empty() {
        println!("cookies: {}", signed_in.cookies.join(", "));
    }
    Ok(())
}
