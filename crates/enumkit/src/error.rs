use std::fmt;

/// The derivation that rejected its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
	/// [`crate::EnumSet::create_ordering`].
	Ordering,
	/// [`crate::EnumSet::create_subset`].
	Subset,
	/// [`crate::EnumSet::create_complement_subset`].
	ComplementSubset,
}

impl fmt::Display for Derivation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ordering => write!(f, "ordering"),
			Self::Subset => write!(f, "subset"),
			Self::ComplementSubset => write!(f, "complement subset"),
		}
	}
}

/// Which list of a one-to-one mapper an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperSide {
	/// The key list (A).
	Keys,
	/// The value list (B).
	Values,
}

impl fmt::Display for MapperSide {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Keys => write!(f, "key"),
			Self::Values => write!(f, "value"),
		}
	}
}

/// Malformed enum configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	/// An entry declares no names.
	#[error("entry {entry} declares no names")]
	EmptyEntry { entry: usize },
	/// Two names of one entry map to different values.
	#[error("entry {entry}: alias {name:?} maps to {found} but the entry value is {expected}")]
	AliasMismatch {
		entry: usize,
		name: String,
		expected: String,
		found: String,
	},
	/// A name is declared more than once.
	#[error("duplicate name {name:?}: first declared in entry {first}, repeated in entry {entry}")]
	DuplicateName {
		name: String,
		first: usize,
		entry: usize,
	},
	/// Two entries share a value.
	#[error("duplicate value {value}: first used by entry {first}, repeated in entry {entry}")]
	DuplicateValue {
		value: String,
		first: usize,
		entry: usize,
	},
}

/// Invalid arguments to a derivation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeriveError {
	/// An argument is not a member of the handle's value set.
	#[error("{op}: {value} is not a member of this set")]
	ForeignValue { op: Derivation, value: String },
	/// An argument is given more than once.
	#[error("{op}: {value} is given more than once")]
	DuplicateValue { op: Derivation, value: String },
	/// An ordering omits members of the value set.
	#[error("{op}: expected all {expected} values, got {found} (missing {missing})")]
	Incomplete {
		op: Derivation,
		expected: usize,
		found: usize,
		missing: String,
	},
}

/// Invalid one-to-one mapper input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
	/// The two value lists differ in length.
	#[error("cannot map {left} values one-to-one onto {right} values")]
	LengthMismatch { left: usize, right: usize },
	/// A value list repeats a value.
	#[error("{side} list repeats {value}")]
	DuplicateListValue { side: MapperSide, value: String },
	/// A mapping key is not in the key list.
	#[error("unrecognized key {key}")]
	ForeignKey { key: String },
	/// A mapping value is not in the value list.
	#[error("key {key} maps to unrecognized value {value}")]
	ForeignValue { key: String, value: String },
	/// A key is mapped more than once.
	#[error("key {key} is mapped more than once")]
	DuplicateKey { key: String },
	/// A value is the target of more than one key.
	#[error("value {value} is already the target of key {first_key}, cannot also map key {key}")]
	DuplicateValue {
		value: String,
		first_key: String,
		key: String,
	},
	/// A key of the key list has no mapping.
	#[error("key {key} is not mapped")]
	MissingKey { key: String },
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid enum configuration: {0}")]
	Config(#[from] ConfigError),

	#[error("invalid derivation: {0}")]
	Derive(#[from] DeriveError),

	#[error("invalid one-to-one mapping: {0}")]
	Mapping(#[from] MappingError),
}

/// Renders a value for an error message.
pub(crate) fn render<V: fmt::Debug>(value: &V) -> String {
	format!("{value:?}")
}
