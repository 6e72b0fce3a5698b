use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use uuid::Uuid;

use tally_auth::{create_session_token, sign_invoice_token};
use tally_cli::seeder::{self, SeedConfig};
use tally_config::{
    EdgeConfigSettings, GateConfig, I18nConfig, InvoiceTokenConfig, ServerConfig, SessionConfig,
};
use tally_edge_config::{EdgeConfigStore, RedisEdgeConfig, add_to_list, remove_from_list};

#[derive(Parser)]
#[command(name = "tally-cli")]
#[command(about = "Tally CLI - Administrative tools for Tally", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign an invoice token and print the public invoice URL
    SignToken {
        /// Invoice ID
        #[arg(short = 'i', long)]
        id: Uuid,

        /// Token lifetime in seconds (defaults to INVOICE_TOKEN_EXPIRY, or no expiry)
        #[arg(short = 'e', long)]
        expires_in: Option<i64>,
    },
    /// Create a local session token for development
    SessionToken {
        /// User ID (token subject)
        #[arg(short = 'u', long)]
        user_id: String,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Token lifetime in seconds
        #[arg(long, default_value = "3600")]
        ttl: i64,
    },
    /// Manage the beta allowlist
    Beta {
        #[command(subcommand)]
        action: BetaAction,
    },
    /// Seed the database with a fake team, customers and invoices
    Seed {
        /// Number of invoices to create
        #[arg(short = 'n', long, default_value = "10")]
        invoices: usize,

        /// Number of customers to spread the invoices over
        #[arg(short = 'c', long, default_value = "3")]
        customers: usize,
    },
    /// Delete all seeded teams (cascades to customers and invoices)
    ClearSeed,
    /// Apply database migrations
    Migrate,
}

#[derive(Subcommand)]
enum BetaAction {
    /// List user IDs on the allowlist
    List,
    /// Add a user ID to the allowlist
    Add {
        /// User ID
        user_id: String,
    },
    /// Remove a user ID from the allowlist
    Remove {
        /// User ID
        user_id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::SignToken { id, expires_in } => handle_sign_token(id, expires_in),
        Commands::SessionToken {
            user_id,
            email,
            ttl,
        } => handle_session_token(&user_id, email.as_deref(), ttl),
        Commands::Beta { action } => handle_beta(action).await,
        Commands::Seed {
            invoices,
            customers,
        } => handle_seed(invoices, customers).await,
        Commands::ClearSeed => handle_clear_seed().await,
        Commands::Migrate => handle_migrate().await,
    }
}

fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, error);
    std::process::exit(1);
}

/// Public URL of an invoice page. The locale prefix is left to the gate.
fn invoice_url(public_url: &str, token: &str) -> String {
    format!("{}/i/{}", public_url.trim_end_matches('/'), token)
}

fn handle_sign_token(id: Uuid, expires_in: Option<i64>) {
    let mut config = InvoiceTokenConfig::from_env();
    if expires_in.is_some() {
        config.expiry = expires_in;
    }

    let server = ServerConfig::from_env();

    match sign_invoice_token(id, &config) {
        Ok(token) => {
            println!("\n✅ Invoice token signed");
            println!("   Invoice: {}", id);
            match config.expiry {
                Some(secs) => println!("   Expires in: {}s", secs),
                None => println!("   Expires: never"),
            }
            println!("   Token: {}", token);
            println!("   URL: {}", invoice_url(&server.public_url, &token));
        }
        Err(e) => fail("Error signing token", e),
    }
}

fn handle_session_token(user_id: &str, email: Option<&str>, ttl: i64) {
    let config = SessionConfig::from_env();

    match create_session_token(user_id, email, ttl, &config) {
        Ok(token) => {
            println!("\n✅ Session token created");
            println!("   User: {}", user_id);
            println!("   Cookie: {}={}", config.cookie_name, token);
        }
        Err(e) => fail("Error creating session token", e),
    }
}

async fn connect_edge_config() -> RedisEdgeConfig {
    let settings = EdgeConfigSettings::from_env();

    let Some(redis_url) = settings.redis_url else {
        fail(
            "Edge config unavailable",
            "EDGE_CONFIG_REDIS_URL must be set to manage the allowlist",
        );
    };

    match RedisEdgeConfig::new(&redis_url, &settings.key_prefix).await {
        Ok(store) => store,
        Err(e) => fail("Error connecting to edge config", e),
    }
}

async fn handle_beta(action: BetaAction) {
    let store = connect_edge_config().await;
    let key = GateConfig::from_env().beta_key;

    match action {
        BetaAction::List => match store.get_list(&key).await {
            Ok(Some(users)) if !users.is_empty() => {
                println!("🧪 {} user(s) on the beta allowlist:", users.len());
                for user in users {
                    println!("   • {}", user);
                }
            }
            Ok(_) => println!("🧪 The beta allowlist is empty"),
            Err(e) => fail("Error reading allowlist", e),
        },
        BetaAction::Add { user_id } => match add_to_list(&store, &key, &user_id).await {
            Ok(true) => println!("✅ Added {} to the beta allowlist", user_id),
            Ok(false) => println!("ℹ️  {} is already on the beta allowlist", user_id),
            Err(e) => fail("Error updating allowlist", e),
        },
        BetaAction::Remove { user_id, yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Remove {} from the beta allowlist?", user_id))
                    .default(false)
                    .interact()
                    .unwrap_or(false);

            if !confirmed {
                println!("Aborted");
                return;
            }

            match remove_from_list(&store, &key, &user_id).await {
                Ok(true) => println!("✅ Removed {} from the beta allowlist", user_id),
                Ok(false) => println!("ℹ️  {} was not on the beta allowlist", user_id),
                Err(e) => fail("Error updating allowlist", e),
            }
        }
    }
}

async fn connect_db() -> sqlx::PgPool {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => fail("Configuration error", "DATABASE_URL must be set"),
    };

    match tally_db::connect(&database_url, 5).await {
        Ok(pool) => pool,
        Err(e) => fail("Error connecting to database", e),
    }
}

async fn handle_seed(invoices: usize, customers: usize) {
    let pool = connect_db().await;
    let token_config = InvoiceTokenConfig::from_env();
    let server = ServerConfig::from_env();
    let locale = I18nConfig::from_env().default_locale;

    let config = SeedConfig::new(invoices).with_customers(customers);

    match seeder::seed_all(&pool, config).await {
        Ok(seeded) => {
            println!("\n🔗 Public links:");
            for invoice in seeded {
                match sign_invoice_token(invoice.id.into_inner(), &token_config) {
                    Ok(token) => println!(
                        "   {}  {}/{}/i/{}",
                        invoice.invoice_number,
                        server.public_url.trim_end_matches('/'),
                        locale,
                        token
                    ),
                    Err(e) => eprintln!("   {}  ❌ {}", invoice.invoice_number, e),
                }
            }
        }
        Err(e) => fail("Error seeding database", e),
    }
}

async fn handle_clear_seed() {
    let pool = connect_db().await;

    if let Err(e) = seeder::clear_all(&pool).await {
        fail("Error clearing seeded data", e);
    }
}

async fn handle_migrate() {
    let pool = connect_db().await;

    match tally_db::run_migrations(&pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => fail("Error applying migrations", e),
    }
}
