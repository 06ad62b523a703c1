//! Playground Module Map Core Library
//!
//! This library builds the static module map that the plugin-loading
//! playground uses to hand plugins their dependencies at runtime. It reads
//! the host application's package configuration to learn which singleton
//! packages are available, folds in a configured set of extra packages,
//! drops ignored ones, and renders the result as a TypeScript source file.
//!
//! # Features
//!
//! - Read singleton package names from a `package.json`-style registry file
//! - Combine core, extra, and ignored sets as `(core ∪ extra) − ignored`
//! - Render a lazy map (dynamic `import()` expressions) or an eager map
//!   (static `import * as` bindings)
//! - Deterministic output: same inputs always produce byte-identical text
//!
//! # Example
//!
//! ```no_run
//! use modulemap_core::{Generator, GeneratorConfig, ImportStrategy};
//! use std::path::PathBuf;
//!
//! let config = GeneratorConfig::new(PathBuf::from("package.json"))
//!     .with_strategy(ImportStrategy::Lazy);
//! let generator = Generator::new(config);
//! let map = generator.generate().unwrap();
//! println!("{}", map.source);
//! ```

pub mod config;
pub mod generator;
pub mod models;
pub mod registry;
pub mod render;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use generator::{GenerateError, GeneratedMap, Generator};
pub use models::{ImportStrategy, ModuleSelection};
pub use registry::{CoreRegistry, RegistryError};
pub use render::{local_ident, render};
