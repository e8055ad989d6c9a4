//! # Object-Oriented and Generic Patterns in Rust
//!
//! This crate ports three classic OOP teaching demos to Rust:
//!
//! ## Pattern 1: Multicast Callbacks
//! - An ordered list of boxed closures
//! - `+=` appends, invocation runs every callback in registration order
//! - Reassignment replaces the whole list
//!
//! ## Pattern 2: Generic Containers and Bounds
//! - Fixed-capacity `Stack<T, N>` with overflow/underflow errors
//! - `Pair<A, B>` with a `Default`-filled second slot
//! - `max` bounded by `Ord`, `contains` bounded by `PartialEq`
//!
//! ## Pattern 3: Override vs Hide
//! - Trait default methods play the role of virtual base methods
//! - Trait impls override (dispatch by runtime type through `dyn`)
//! - Inherent methods hide (dispatch by the static type of the receiver)
//!
//! Run demos with: `cargo run --bin <name>_demo [config.toml]`

pub mod config;
pub mod delegates;
pub mod error;
pub mod generics;
pub mod inheritance;
pub mod logging;

pub use config::DemoConfig;
pub use delegates::Multicast;
pub use error::{ConfigError, DemoError, StackError};
pub use generics::{Pair, Stack};
pub use inheritance::{Czech, Greeter, Person, Slovak};
