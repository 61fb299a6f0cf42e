//! # LearnHub CLI
//!
//! Administrative commands and database seeding for LearnHub.
//!
//! ## Usage
//!
//! ```ignore
//! use learnhub_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig { categories: 5, teachers: 10, courses: 20 };
//! seed_all(&pool, config, 12).await?;
//! ```

pub mod admin;
pub mod seeder;
