//! Procedural macros for enumkit.
//!
//! Provides:
//! * `create_enum!` - builds an enum from literal entries, rejecting malformed
//!   configurations at compile time

use proc_macro::TokenStream;

/// `create_enum!` parsing and expansion.
mod create_enum;
/// Compile-time configuration checks.
mod validate;

/// Builds an `enumkit::EnumSet` from entries written like object literals.
///
/// ```ignore
/// let colors = enumkit::create_enum!(
///     { Red: "red", Crimson: "red" },
///     { Green: "green" },
///     { Blue: "blue" },
/// )?;
/// ```
///
/// Names are identifiers or string literals; values are expressions. The following are
/// compile errors:
/// * an entry without names
/// * a name declared twice
/// * two different literal values inside one entry
/// * the same literal value (or the same constant path) in two entries
///
/// Values that cannot be compared from their tokens are checked when the enum is built.
/// The macro evaluates to `Result<enumkit::EnumSet<_>, enumkit::ConfigError>`, labelled
/// with the calling module path.
#[proc_macro]
pub fn create_enum(input: TokenStream) -> TokenStream {
	create_enum::create_enum(input)
}
