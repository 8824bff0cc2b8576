//! # Config Crate
//!
//! Centralized numeric tolerances for the 2D vector math crates. Every
//! comparison epsilon used by the vector library or its tests is defined here
//! so that callers and tests agree on what "approximately equal" means.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, VECTOR_TOLERANCE};
//!
//! let length: f32 = 1.000_001;
//! assert!((length - 1.0).abs() <= VECTOR_TOLERANCE);
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.tolerance, VECTOR_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: tolerances are defined once
//! - **Validated Overrides**: custom tolerances go through `GlobalConfig::new`

pub mod constants;
