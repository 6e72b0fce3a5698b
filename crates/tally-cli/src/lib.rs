//! # Tally CLI
//!
//! Administrative utilities for Tally: minting invoice links, managing the
//! beta allowlist and seeding a development database.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use tally_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10); // 10 invoices for one fake team
//! let seeded = seed_all(&pool, config).await?;
//! ```

pub mod seeder;
