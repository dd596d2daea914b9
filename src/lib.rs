//! # cptnet
//!
//! Binary Bayesian networks whose conditional probability tables are written
//! row by row: every `(parent, "0" | "1")` pair carries one probability.
//! A [`NetworkModel`] validates its specification once, exposes a compact
//! factorization such as `P(A)P(B|AA)`, and answers point queries by
//! enumerating the target's unobserved parents.
//!
//! ```rust
//! use cptnet::{NetworkBuilder, Query, State};
//!
//! let model = NetworkBuilder::new()
//!     .prior("A", &[0.3, 0.7])
//!     .conditional("B", &[("A", State::Zero), ("A", State::One)], &[0.2, 0.8])
//!     .build()
//!     .unwrap();
//!
//! let p = model.infer(&Query::new("B").given("A", State::One)).unwrap();
//! assert!((p - 0.8).abs() < 1e-12);
//! ```

pub mod common;
pub mod network;
pub mod scenarios;

pub use network::{
    CptEntry, NetworkBuilder, NetworkModel, NetworkSpec, ParentRef, Query, QueryError, State,
    ValidationError,
};
