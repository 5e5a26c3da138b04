use std::collections::hash_map::Entry as MapEntry;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::entry::{EnumConfig, Entry};
use crate::error::{ConfigError, render};
use crate::key::EnumValue;
use crate::set::EnumSet;
use crate::table::NameTable;

/// Builder for the root [`EnumSet`] of an enum.
///
/// Entries are validated in order when [`build`](Self::build) runs; the first violation is
/// returned and nothing is built.
#[derive(Debug, Clone)]
pub struct EnumBuilder<V> {
	label: &'static str,
	entries: Vec<Entry<V>>,
}

impl<V: EnumValue> EnumBuilder<V> {
	/// Creates a new builder with the given label for log events.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			entries: Vec::new(),
		}
	}

	/// Creates a builder pre-populated with `config`.
	pub fn from_config(label: &'static str, config: EnumConfig<V>) -> Self {
		Self {
			label,
			entries: config,
		}
	}

	/// Returns the number of entries that have been added so far.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no entries have been added so far.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Adds a single entry.
	pub fn push(&mut self, entry: Entry<V>) {
		self.entries.push(entry);
	}

	/// Adds multiple entries.
	pub fn extend<I: IntoIterator<Item = Entry<V>>>(&mut self, entries: I) {
		self.entries.extend(entries);
	}

	/// Adds a single entry, returning the builder.
	pub fn with(mut self, entry: Entry<V>) -> Self {
		self.entries.push(entry);
		self
	}

	/// Validates the configuration and builds the root handle.
	pub fn build(self) -> Result<EnumSet<V>, ConfigError> {
		let label = self.label;
		match build_table(label, self.entries) {
			Ok((table, list)) => {
				tracing::trace!(label, values = list.len(), names = table.slot_by_name.len(), "enum built");
				Ok(EnumSet::from_parts(Arc::new(table), list))
			}
			Err(error) => {
				tracing::debug!(label, %error, "enum configuration rejected");
				Err(error)
			}
		}
	}
}

fn build_table<V: EnumValue>(
	label: &'static str,
	entries: Vec<Entry<V>>,
) -> Result<(NameTable<V>, Vec<V>), ConfigError> {
	let mut slot_by_name: HashMap<Arc<str>, usize> =
		HashMap::with_capacity_and_hasher(entries.len(), Default::default());
	let mut slot_by_value: HashMap<V, usize> =
		HashMap::with_capacity_and_hasher(entries.len(), Default::default());
	let mut table = Vec::with_capacity(entries.len());
	let mut list = Vec::with_capacity(entries.len());

	for (slot, entry) in entries.into_iter().enumerate() {
		let Some((_, value)) = entry.pairs.first() else {
			return Err(ConfigError::EmptyEntry { entry: slot });
		};
		let value = value.clone();

		for (name, alias_value) in &entry.pairs {
			if *alias_value != value {
				return Err(ConfigError::AliasMismatch {
					entry: slot,
					name: name.to_string(),
					expected: render(&value),
					found: render(alias_value),
				});
			}
		}

		let mut names = Vec::with_capacity(entry.pairs.len());
		for (name, _) in entry.pairs {
			match slot_by_name.entry(name.clone()) {
				MapEntry::Occupied(o) => {
					return Err(ConfigError::DuplicateName {
						name: name.to_string(),
						first: *o.get(),
						entry: slot,
					});
				}
				MapEntry::Vacant(v) => {
					v.insert(slot);
				}
			}
			names.push(name);
		}

		match slot_by_value.entry(value.clone()) {
			MapEntry::Occupied(o) => {
				return Err(ConfigError::DuplicateValue {
					value: render(&value),
					first: *o.get(),
					entry: slot,
				});
			}
			MapEntry::Vacant(v) => {
				v.insert(slot);
			}
		}

		list.push(value.clone());
		table.push((names.into_boxed_slice(), value));
	}

	Ok((
		NameTable {
			label,
			entries: table.into_boxed_slice(),
			slot_by_value,
			slot_by_name,
		},
		list,
	))
}
