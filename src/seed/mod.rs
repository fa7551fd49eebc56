//! Populate a running service with users, posts, likes and comments by
//! driving its public HTTP API.

pub mod client;
pub mod text;

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::domain::shared::ObjectId;
use client::SeedUser;

pub const DEFAULT_USERS: usize = 5;
pub const DEFAULT_POSTS_PER_USER: usize = 15;
pub const DEFAULT_LIKE_PROBABILITY: f64 = 0.345;
pub const DEFAULT_COMMENT_PROBABILITY: f64 = 0.123;

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub base_url: String,
    pub users: usize,
    pub posts_per_user: usize,
    pub like_probability: f64,
    pub comment_probability: f64,
    /// Fixed RNG seed for reproducible content
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            users: DEFAULT_USERS,
            posts_per_user: DEFAULT_POSTS_PER_USER,
            like_probability: DEFAULT_LIKE_PROBABILITY,
            comment_probability: DEFAULT_COMMENT_PROBABILITY,
            seed: None,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.like_probability),
            "like probability must be within [0, 1], got {}",
            self.like_probability
        );
        ensure!(
            (0.0..=1.0).contains(&self.comment_probability),
            "comment probability must be within [0, 1], got {}",
            self.comment_probability
        );
        ensure!(!self.base_url.trim().is_empty(), "base url must not be empty");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub posts: usize,
    pub likes: usize,
    pub comments: usize,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} users, {} posts, {} likes, {} comments",
            self.users, self.posts, self.likes, self.comments
        )
    }
}

/// Run the seeding plan against `config.base_url`. Stops at the first
/// unexpected response.
pub async fn run(config: &SeedConfig) -> Result<SeedSummary> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut summary = SeedSummary::default();

    let mut users = Vec::with_capacity(config.users);
    for _ in 0..config.users {
        let user = SeedUser::new(
            &config.base_url,
            unique_username(&mut rng),
            text::password(&mut rng),
        )?;
        user.register(&format!("{}@example.com", user.username))
            .await?;
        user.login().await?;
        user.update_profile(&text::display_name(&mut rng), &text::paragraph(&mut rng))
            .await?;

        tracing::info!(username = %user.username, "Seed user ready");
        summary.users += 1;
        users.push(user);
    }

    let mut post_ids = Vec::with_capacity(config.users * config.posts_per_user);
    for user in &users {
        for _ in 0..config.posts_per_user {
            let post_id = user.create_post(&text::paragraph(&mut rng)).await?;
            post_ids.push(post_id);
            summary.posts += 1;
        }
    }
    tracing::info!(posts = summary.posts, "Seed posts created");

    for post_id in &post_ids {
        for user in &users {
            if rng.gen_bool(config.like_probability) && user.like_post(post_id).await? {
                summary.likes += 1;
            }
            if rng.gen_bool(config.comment_probability) {
                user.comment_on_post(post_id, &text::sentence(&mut rng))
                    .await?;
                summary.comments += 1;
            }
        }
    }

    tracing::info!(%summary, "Seeding finished");
    Ok(summary)
}

/// Random stem plus the tail of a fresh object id, unique across runs
fn unique_username(rng: &mut StdRng) -> String {
    let id = ObjectId::new();
    format!("{}_{}", text::username_stem(rng), &id.as_str()[14..])
}
