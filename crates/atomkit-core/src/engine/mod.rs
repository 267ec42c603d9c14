//! # Engine Module
//!
//! Queries over collections of atoms: distance-based bond detection and
//! element-type lookups, plus the configuration that parameterizes them.
//!
//! - **Configuration** ([`config`]) - Bond length defaults, TOML loading, builder
//! - **Bond Detection** ([`bonds`]) - [`bonds::BondFinder`] and default-length helpers
//! - **Lookups** ([`query`]) - Filtering atoms by element or id
//!
//! Every query is a pure function of its inputs; nothing is cached between calls.

pub mod bonds;
pub mod config;
pub mod query;
