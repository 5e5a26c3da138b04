//! Validated enumeration value sets.
//!
//! An enum is declared as an ordered list of [`Entry`] values, each mapping one or more alias
//! names to a single value. Building it yields an [`EnumSet`]: the ordered value list, the
//! name-to-value map, a value-to-index map, a membership test, and derivations (orderings,
//! subsets, complements) that return new sets sharing the same names.
//!
//! [`EnumOneToOneMapper`] validates bijections between the values of two enums and computes
//! their inverse.
//!
//! Every malformed input is rejected with a typed error. The `create_enum!` macro (feature
//! `macros`, on by default) additionally rejects malformed literal configurations at compile
//! time.
//!
//! ```
//! use enumkit::{Entry, EnumBuilder};
//!
//! let colors = EnumBuilder::new("colors")
//! 	.with(Entry::new("Red", "red").alias("Crimson"))
//! 	.with(Entry::new("Green", "green"))
//! 	.with(Entry::new("Blue", "blue"))
//! 	.build()?;
//!
//! assert_eq!(colors.list(), ["red", "green", "blue"]);
//! assert_eq!(colors.get("Crimson"), Some(&"red"));
//!
//! let warm = colors.create_complement_subset(["green", "blue"])?;
//! assert_eq!(warm.list(), ["red"]);
//! assert!(!warm.type_guard("blue"));
//! # Ok::<(), enumkit::Error>(())
//! ```

/// Enum construction and validation.
pub mod build;
/// Authoring-side entries and configurations.
pub mod entry;
/// Error types.
pub mod error;
/// Primitive identities usable as values.
pub mod key;
pub mod mapper;
pub mod set;
mod subtract;
mod table;

#[cfg(test)]
mod invariants;

pub use build::EnumBuilder;
pub use entry::{Entry, EnumConfig};
pub use error::{ConfigError, DeriveError, Derivation, Error, MapperSide, MappingError};
pub use key::{EnumValue, Key, Symbol};
pub use mapper::{EnumOneToOneMapper, OneToOneMapping, ValueMap};
pub use set::{EnumMap, EnumSet, IndexByValue};
pub use subtract::subtract;

#[cfg(feature = "macros")]
pub use enumkit_macros::create_enum;
