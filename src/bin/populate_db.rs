//! Seed a running Postboard service with demo data.
//!
//! ```bash
//! cargo run --bin populate_db -- \
//!   --base-url http://localhost:8080 \
//!   --users 5 \
//!   --posts-per-user 15
//! ```

use clap::Parser;
use postboard_backend::seed::{self, SeedConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Populate the database through the public API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the running service
    #[arg(long, env = "POSTBOARD_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Number of users to create
    #[arg(long, default_value_t = seed::DEFAULT_USERS)]
    users: usize,

    /// Posts written by each user
    #[arg(long, default_value_t = seed::DEFAULT_POSTS_PER_USER)]
    posts_per_user: usize,

    /// Chance that a given user likes a given post
    #[arg(long, default_value_t = seed::DEFAULT_LIKE_PROBABILITY)]
    like_probability: f64,

    /// Chance that a given user comments on a given post
    #[arg(long, default_value_t = seed::DEFAULT_COMMENT_PROBABILITY)]
    comment_probability: f64,

    /// RNG seed for reproducible content
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for SeedConfig {
    fn from(args: Args) -> Self {
        Self {
            base_url: args.base_url,
            users: args.users,
            posts_per_user: args.posts_per_user,
            like_probability: args.like_probability,
            comment_probability: args.comment_probability,
            seed: args.seed,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "populate_db=info,postboard_backend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SeedConfig::from(Args::parse());
    config.validate()?;

    println!("Populating database via {}", config.base_url);
    let summary = seed::run(&config).await?;
    println!("Successfully populated database: {}", summary);

    Ok(())
}
