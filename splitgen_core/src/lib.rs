#![forbid(unsafe_code)]

//! Core domain model and plan generation for splitgen.
//!
//! This crate provides:
//! - Domain types (exercises, prescriptions, sessions, weekly plans)
//! - Exercise catalog and query interface
//! - Style configuration and session templates
//! - Candidate selection, session assembly and weekly composition
//! - Exercise substitution on generated plans

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod style;
pub mod selector;
pub mod assembler;
pub mod composer;
pub mod substitution;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog, ExerciseCatalog, ExerciseFilter};
pub use config::Config;
pub use style::{resolve_style, SplitRole};
pub use composer::{
    generate_weekly_plan, generate_weekly_plan_with_rng, generate_weekly_plan_with_seed,
    split_structure,
};
