//! Type inference core for the log-processing VM expression language
//!
//! Assigns types to expressions built from literals, regular-expression capture
//! groups and builtin functions, using Hindley-Milner style unification with a
//! generic/non-generic distinction.
//!
//! # Example
//!
//! ```rust
//! use logvm_types::capture::parse_pattern;
//! use logvm_types::check::{BinOp, Checker, Expr};
//! use logvm_types::{Type, TypeArena};
//!
//! let arena = TypeArena::new();
//! let mut checker = Checker::new(&arena);
//! let pattern = checker.add_pattern(parse_pattern(r"latency=(\d+\.\d+)").unwrap());
//!
//! let expr = Expr::binary(BinOp::Mul, Expr::capture(pattern, 1), Expr::FloatLit(1000.0));
//! assert_eq!(checker.check(&expr).unwrap(), Type::float());
//! ```

#![warn(rust_2018_idioms)]

pub mod builtins;
pub mod capture;
pub mod check;
pub mod types;

// Utility modules
pub mod util;

// Re-exports
pub use types::{Type, TypeArena, TypeError, TypeOperator, TypeVar, UnifyError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "logvm-types";
