//! Terminal front end for the shortlink dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Store the token issued by the sign-in page
//! shortlink login --token "$TOKEN" --name alice
//!
//! # List your links with their remaining validity
//! shortlink list
//!
//! # Create a link valid for one day, with a custom name
//! shortlink shorten https://example.com/launch --name launch --validity 1day
//!
//! # Forget the session
//! shortlink logout
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_API_URL` (required): base address of the shortening API
//! - `SESSION_FILE`, `REQUEST_TIMEOUT_SECONDS`, `RUST_LOG`, `LOG_FORMAT` (optional)

use shortlink_dashboard::bootstrap::build_state;
use shortlink_dashboard::config::{self, Config};
use shortlink_dashboard::domain::entities::{
    CreationForm, CreationResult, Credentials, LinkCollection, ValidityPeriod,
};
use shortlink_dashboard::domain::expiry::UrgencyTier;
use shortlink_dashboard::application::services::SessionState;
use shortlink_dashboard::{Activation, AppState};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use tracing_subscriber::EnvFilter;

/// Client dashboard for your short links.
#[derive(Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the session token issued by the sign-in page
    Login {
        /// Bearer token (prompted for if omitted)
        #[arg(short, long)]
        token: Option<String>,

        /// Name shown as the signed-in identity
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Forget the stored session
    Logout {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show who is signed in
    Whoami,

    /// List your links and their remaining validity
    List,

    /// Create a short link
    Shorten {
        /// URL to shorten
        url: String,

        /// Custom name for the short link
        #[arg(short, long, default_value = "")]
        name: String,

        /// Lifetime: 1day, 7days or 1month
        #[arg(short, long, default_value_t = ValidityPeriod::default())]
        validity: ValidityPeriod,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let state = build_state(&config)?;

    match cli.command {
        Commands::Login { token, name } => login(&state, token, name).await?,
        Commands::Logout { yes } => logout(&state, yes).await?,
        Commands::Whoami => whoami(&state).await,
        Commands::List => list(&state).await,
        Commands::Shorten {
            url,
            name,
            validity,
        } => shorten(&state, CreationForm::new(url, name, validity)).await?,
    }

    Ok(())
}

/// Installs the subscriber. Logs go to stderr so stdout stays clean for output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn login(state: &AppState, token: Option<String>, name: Option<String>) -> Result<()> {
    println!("{}", "🔑 Sign in".bright_blue().bold());
    println!();

    let token = match token {
        Some(t) => t,
        None => Password::new().with_prompt("Session token").interact()?,
    };

    let identity_label = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Display name")
            .allow_empty(true)
            .interact_text()?,
    };

    state
        .session_gate
        .establish(Credentials {
            token,
            identity_label: identity_label.clone(),
        })
        .await?;

    println!(
        "{} {}",
        "✅ Signed in as".green().bold(),
        identity_label.cyan()
    );
    Ok(())
}

async fn logout(state: &AppState, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Forget the stored session?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state.logout().await?;
    println!("{}", "👋 Signed out".green().bold());
    Ok(())
}

async fn whoami(state: &AppState) {
    match state.session_gate.acquire().await {
        SessionState::Authenticated(session) => {
            let label = if session.identity_label().is_empty() {
                "(unnamed)"
            } else {
                session.identity_label()
            };
            println!("Signed in as {}", label.cyan().bold());
        }
        SessionState::Unauthenticated => redirect_to_entry(),
    }
}

async fn list(state: &AppState) {
    match state.activate().await {
        Activation::Ready { session, .. } => {
            println!(
                "{} {}",
                "🔗 Links of".bright_blue().bold(),
                session.identity_label().cyan()
            );
            println!();
            print_links(&state.links.links().await);
        }
        Activation::RedirectToEntry => redirect_to_entry(),
    }
}

async fn shorten(state: &AppState, form: CreationForm) -> Result<()> {
    let session = match state.activate().await {
        Activation::Ready { session, .. } => session,
        Activation::RedirectToEntry => {
            redirect_to_entry();
            return Ok(());
        }
    };

    state.creation.set_form(form);

    match state.creation.submit(Some(&session)).await {
        Ok(_) => {
            if let Some(result) = state.presentation.current() {
                print_result(&result);
                state.presentation.dismiss();
            }
            print_links(&state.links.links().await);
            Ok(())
        }
        Err(e) if e.requires_login() => {
            redirect_to_entry();
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.user_message().red().bold());
            Err(anyhow::Error::new(e).context("Link was not created"))
        }
    }
}

fn redirect_to_entry() {
    println!("{}", "⚠️  Not signed in".yellow());
    println!(
        "  Sign in with: {}",
        "shortlink login --token <TOKEN>".bright_cyan()
    );
}

fn print_result(result: &CreationResult) {
    println!("{}", format!("✅ {}", result.message).green().bold());
    println!();
    println!("  Short URL:   {}", result.short_url.bright_yellow().bold());
    if !result.custom_name.is_empty() {
        println!("  Custom name: {}", result.custom_name.cyan());
    }
    println!("  Validity:    {}", result.validity_period);
    println!(
        "  Expires:     {}",
        result.expiry_date.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
}

/// Prints the collection as a table, newest first.
///
/// ```text
///   Short URL                      Original                                 Validity
///   ───────────────────────────────────────────────────────────────────────────────
///   https://sho.rt/abc123          https://example.com/very/long/path       6 days left
///   https://sho.rt/launch          https://example.com/launch               Expired
/// ```
fn print_links(links: &LinkCollection) {
    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!(
            "  Create one with: {}",
            "shortlink shorten <URL>".bright_cyan()
        );
        return;
    }

    let now = Utc::now();

    println!(
        "  {:<30} {:<40} {}",
        "Short URL".bright_white().bold(),
        "Original".bright_white().bold(),
        "Validity".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for link in links.sorted_newest_first() {
        let status = link.validity(now);
        let label = match status.urgency {
            UrgencyTier::Expired => status.label.red(),
            UrgencyTier::Urgent => status.label.yellow(),
            UrgencyTier::Normal => status.label.green(),
        };

        println!(
            "  {:<30} {:<40} {}",
            link.display_url().cyan(),
            truncate(&link.original_url, 40).bright_black(),
            label
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}
