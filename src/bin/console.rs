//! Command-line client for the admin console login flow.
//!
//! Runs the same login redirect, code exchange and route guard as the web
//! console, with the session token kept in a local file instead of a cookie.
//!
//! # Usage
//!
//! ```bash
//! # Print the identity provider login URL
//! cargo run --bin console -- login-url
//!
//! # Exchange the code from the callback redirect
//! cargo run --bin console -- exchange --code 01HZX...
//!
//! # Check whether a session token is stored
//! cargo run --bin console -- status
//!
//! # Forget the stored token
//! cargo run --bin console -- logout
//! ```
//!
//! # Environment Variables
//!
//! - `IDP_CLIENT_ID`, `IDP_REDIRECT_URI`, `GRAPHQL_URL` (required for
//!   `login-url` and `exchange`): see [`admin_console::config`]
//! - `CONSOLE_TOKEN_FILE` (optional): token file path (default: `.console-token`)

use admin_console::application::services::{
    AuthCallbackService, GuardDecision, RouteGuard, logout,
};
use admin_console::config;
use admin_console::domain::CallbackState;
use admin_console::infrastructure::token_store::FileTokenStore;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI client for the admin console.
#[derive(Parser)]
#[command(name = "console")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File holding the session token
    #[arg(long, env = "CONSOLE_TOKEN_FILE", default_value = ".console-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Console commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the identity provider login URL
    LoginUrl,

    /// Exchange an authorization code for a session token
    Exchange {
        /// Authorization code from the callback redirect (prompted if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show whether a session token is stored
    Status,

    /// Remove the stored session token
    Logout {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut store = FileTokenStore::new(cli.token_file);

    match cli.command {
        Commands::LoginUrl => print_login_url()?,
        Commands::Exchange { code } => exchange(code, &mut store).await?,
        Commands::Status => status(&store),
        Commands::Logout { yes } => handle_logout(yes, &mut store)?,
    }

    Ok(())
}

/// Prints the authorization URL to open in a browser.
fn print_login_url() -> Result<()> {
    let config = config::load_from_env()?;
    let url = config.login_redirector()?.authorization_url();

    println!("{}", "🔗 Login URL".bright_blue().bold());
    println!();
    println!("  {}", url.as_str().bright_cyan());
    println!();
    println!(
        "Open it in a browser, then run {} with the {} from the redirect.",
        "console exchange".bright_white(),
        "code".bright_yellow()
    );

    Ok(())
}

/// Exchanges an authorization code and stores the session token.
///
/// # Flow
///
/// 1. Prompt for the code (or use provided)
/// 2. Run the login mutation once
/// 3. On success write the token to the token file
/// 4. On failure print the same message the web callback shows
async fn exchange(code: Option<String>, store: &mut FileTokenStore) -> Result<()> {
    let config = config::load_from_env()?;
    let service = AuthCallbackService::new(Arc::new(config.graphql_client()?));

    println!("{}", "🔑 Exchange Authorization Code".bright_blue().bold());
    println!();

    let code = match code {
        Some(c) => c,
        None => Input::new()
            .with_prompt("Authorization code")
            .allow_empty(true)
            .interact_text()?,
    };

    match service.complete(Some(code.as_str()), store).await {
        CallbackState::Success => {
            println!("{}", "✅ Login successful!".green().bold());
            println!(
                "  Token saved to {}",
                store.path().display().to_string().cyan()
            );
        }
        CallbackState::Failed(failure) => {
            println!("{}", "❌ Authentication Error".red().bold());
            println!("  {}", failure.to_string().red());
            println!();
            println!(
                "  Try again with: {}",
                "console login-url".bright_cyan()
            );
        }
        CallbackState::Pending => {
            println!("{}", "⏳ Completing login...".yellow());
        }
    }
    println!();

    Ok(())
}

/// Reports what the route guard would decide for the stored token.
fn status(store: &FileTokenStore) {
    println!("{}", "📋 Session Status".bright_blue().bold());
    println!();
    println!(
        "  Token file: {}",
        store.path().display().to_string().bright_black()
    );

    match RouteGuard::check(store) {
        GuardDecision::Allow => {
            println!("  Status:     {}", "SIGNED IN".green().bold());
        }
        GuardDecision::Redirect(route) => {
            println!("  Status:     {}", "SIGNED OUT".red().bold());
            println!();
            println!("  Sign in via {} first.", route.path().bright_cyan());
        }
    }
    println!();
}

/// Clears the token file with confirmation prompt.
fn handle_logout(skip_confirm: bool, store: &mut FileTokenStore) -> Result<()> {
    println!("{}", "🔒 Logout".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove the stored session token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    logout(store);

    println!("{}", "✅ Logged out".green().bold());
    println!();

    Ok(())
}
