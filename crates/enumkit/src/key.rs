//! Primitive identities usable as enum values.
//!
//! Any `Clone + Eq + Hash + Debug` type can back an enum (see [`EnumValue`]). [`Key`] is the
//! ready-made choice when an enum mixes strings, integers and opaque tokens.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Bound satisfied by every type that can be stored as an enum value.
pub trait EnumValue: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> EnumValue for T {}

static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(0);

/// Opaque token equal only to itself and its clones.
///
/// Two symbols created with the same description are still distinct values.
#[derive(Clone)]
pub struct Symbol {
	id: u64,
	description: Arc<str>,
}

impl Symbol {
	/// Creates a fresh, globally unique symbol.
	pub fn new(description: impl Into<Arc<str>>) -> Self {
		Self {
			id: NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed),
			description: description.into(),
		}
	}

	/// Returns the human-readable description given at creation.
	pub fn description(&self) -> &str {
		&self.description
	}
}

impl PartialEq for Symbol {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Symbol {}

impl Hash for Symbol {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl PartialOrd for Symbol {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Symbol {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.id.cmp(&other.id)
	}
}

impl fmt::Debug for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Symbol({}#{})", self.description, self.id)
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Symbol({})", self.description)
	}
}

/// A primitive identity: string, integer, or opaque symbol.
///
/// Integers are never coerced to strings, so `Key::Int(1)` and `Key::from("1")` are
/// different values.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
	/// String identity.
	Str(Arc<str>),
	/// Integer identity.
	Int(i64),
	/// Opaque token identity.
	Symbol(Symbol),
}

impl Key {
	/// Returns the string if this is a `Str` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Key::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the integer if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Key::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the symbol if this is a `Symbol` variant.
	pub fn as_symbol(&self) -> Option<&Symbol> {
		match self {
			Key::Symbol(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the kind name of this key.
	pub fn type_name(&self) -> &'static str {
		match self {
			Key::Str(_) => "string",
			Key::Int(_) => "int",
			Key::Symbol(_) => "symbol",
		}
	}
}

impl fmt::Debug for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Str(s) => write!(f, "{s:?}"),
			Key::Int(v) => write!(f, "{v}"),
			Key::Symbol(s) => write!(f, "{s:?}"),
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Str(s) => f.write_str(s),
			Key::Int(v) => write!(f, "{v}"),
			Key::Symbol(s) => write!(f, "{s}"),
		}
	}
}

impl From<&str> for Key {
	fn from(v: &str) -> Self {
		Key::Str(Arc::from(v))
	}
}

impl From<String> for Key {
	fn from(v: String) -> Self {
		Key::Str(Arc::from(v))
	}
}

impl From<Arc<str>> for Key {
	fn from(v: Arc<str>) -> Self {
		Key::Str(v)
	}
}

impl From<i64> for Key {
	fn from(v: i64) -> Self {
		Key::Int(v)
	}
}

impl From<i32> for Key {
	fn from(v: i32) -> Self {
		Key::Int(i64::from(v))
	}
}

impl From<u32> for Key {
	fn from(v: u32) -> Self {
		Key::Int(i64::from(v))
	}
}

impl From<Symbol> for Key {
	fn from(v: Symbol) -> Self {
		Key::Symbol(v)
	}
}

impl From<&Symbol> for Key {
	fn from(v: &Symbol) -> Self {
		Key::Symbol(v.clone())
	}
}

impl PartialEq<str> for Key {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == Some(other)
	}
}

impl PartialEq<&str> for Key {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == Some(*other)
	}
}

impl PartialEq<i64> for Key {
	fn eq(&self, other: &i64) -> bool {
		self.as_int() == Some(*other)
	}
}

#[cfg(feature = "serde")]
mod serde_impl {
	use std::fmt;

	use serde::de::{self, Visitor};
	use serde::ser::Error as _;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::Key;

	impl Serialize for Key {
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			match self {
				Key::Str(s) => serializer.serialize_str(s),
				Key::Int(v) => serializer.serialize_i64(*v),
				Key::Symbol(s) => Err(S::Error::custom(format_args!(
					"{s:?} has no serialized form"
				))),
			}
		}
	}

	struct KeyVisitor;

	impl Visitor<'_> for KeyVisitor {
		type Value = Key;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("a string or an integer")
		}

		fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
			Ok(Key::from(v))
		}

		fn visit_string<E: de::Error>(self, v: String) -> Result<Key, E> {
			Ok(Key::from(v))
		}

		fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
			Ok(Key::Int(v))
		}

		fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
			i64::try_from(v)
				.map(Key::Int)
				.map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
		}
	}

	impl<'de> Deserialize<'de> for Key {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			deserializer.deserialize_any(KeyVisitor)
		}
	}
}
