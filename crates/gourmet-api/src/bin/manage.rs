//! Management commands
//!
//! ```bash
//! cargo run -p gourmet-api --bin gourmet-manage -- migrate
//! gourmet-manage migrate --dir /srv/gourmet/migrations   # or MIGRATIONS_DIR
//! cargo run -p gourmet-api --bin gourmet-manage -- createsuperuser --email admin@example.com --password ...
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gourmet_common::{try_init_tracing, AppConfig, TracingConfig};
use gourmet_db::{create_pool, run_migrations_from, PoolConfig, MIGRATIONS_DIR};
use gourmet_service::UserService;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "gourmet-manage", about = "Administrative tasks for the gourmet API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate {
        /// Directory holding the SQL migration files
        #[arg(long, env = "MIGRATIONS_DIR", default_value = MIGRATIONS_DIR)]
        dir: PathBuf,
    },
    /// Create a user with staff and superuser rights
    Createsuperuser {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SUPERUSER_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before tracing and clap read the environment
    let _ = dotenvy::dotenv();

    if let Err(e) = try_init_tracing(&TracingConfig::from_env()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        error!("Command failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    match command {
        Command::Migrate { dir } => {
            let pool = create_pool(&PoolConfig::from(&config.database))
                .await
                .context("Failed to connect to PostgreSQL")?;
            run_migrations_from(&pool, &dir)
                .await
                .with_context(|| format!("Failed to apply migrations from {}", dir.display()))?;
            info!("Migrations applied");
        }
        Command::Createsuperuser { email, password } => {
            let state = gourmet_api::create_app_state(config).await?;
            let user = UserService::new(state.service_context())
                .create_superuser(&email, &password)
                .await?;
            info!(user_id = %user.id, email = %user.email, "Superuser created");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_directory_can_be_overridden() {
        let cli = Cli::try_parse_from(["gourmet-manage", "migrate", "--dir", "/srv/gourmet/migrations"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Migrate { dir } if dir == PathBuf::from("/srv/gourmet/migrations")
        ));
    }

    #[test]
    fn test_createsuperuser_takes_email_and_password() {
        let cli = Cli::try_parse_from([
            "gourmet-manage",
            "createsuperuser",
            "--email",
            "admin@example.com",
            "--password",
            "grilled-eel-over-rice",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Createsuperuser { ref email, .. } if email == "admin@example.com"
        ));
    }
}
