//! # Creational Design Patterns
//!
//! Small, self-contained pattern samples. Each module holds one pattern and
//! each binary in `src/bin/` prints a short transcript showing it in action.
//!
//! ## Patterns Covered
//!
//! 1. **Singleton** - lazily initialized, process-wide shared record
//!    (`OnceLock` + `RwLock`, safe under concurrent first access)
//! 2. **Abstract Factory** - families of related products behind trait objects
//! 3. **Factory Method** - creators that decide which product to build
//! 4. **Builder** - director-driven, step-by-step phone assembly,
//!    including builders driven by TOML profiles
//! 5. **Prototype** - cloning boxed trait objects, plus a prototype registry
//! 6. **Adapter** - exposing a meters-only type through a feet interface
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin singleton
//! cargo run --bin abstract_factory
//! cargo run --bin factory_method
//! cargo run --bin builder
//! cargo run --bin prototype
//! cargo run --bin adapter
//! ```

pub mod abstract_factory;
pub mod adapter;
pub mod builder;
pub mod config;
pub mod console;
pub mod error;
pub mod factory_method;
pub mod product;
pub mod prototype;
pub mod singleton;

pub use error::{PatternError, Result};
