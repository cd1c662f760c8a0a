//! # Chibi
//!
//! A tiny Vue-style template compiler and vnode runtime written in Rust.
//!
//! This crate re-exports all chibi sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Arena allocation, compact strings and shape flags
//! - [`relief`] - Template AST consumed by code generation
//! - [`atelier_core`] - Render function code generation
//! - [`maquette`] - VNode model and factory

pub mod config;

/// Arena allocation, compact strings and shape flags.
pub use chibi_carton as carton;

/// Template AST consumed by code generation.
pub use chibi_relief as relief;

/// Render function code generation.
pub use chibi_atelier_core as atelier_core;

/// VNode model and factory.
pub use chibi_maquette as maquette;

pub use config::{load_config, load_config_or_default, ChibiConfig, ConfigError};

use chibi_atelier_core::{generate, CodegenResult};
use chibi_relief::RootNode;

/// Generate the render function for a transformed template with the
/// compiler settings of `config`.
pub fn compile(root: &RootNode<'_>, config: &ChibiConfig) -> CodegenResult {
    generate(root, config.compiler.clone())
}
