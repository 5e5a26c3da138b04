use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::EnumSet;
use crate::error::{DeriveError, Derivation};
use crate::{Entry, EnumBuilder, Key, Symbol};

fn basic() -> EnumSet<&'static str> {
	EnumBuilder::new("basic")
		.with(Entry::new("A", "a"))
		.with(Entry::new("B", "b"))
		.with(Entry::new("C", "c"))
		.build()
		.expect("basic enum is valid")
}

fn names(set: &EnumSet<&'static str>) -> Vec<(String, &'static str)> {
	set.enum_map()
		.iter()
		.map(|(name, value)| (name.to_string(), *value))
		.collect()
}

fn pairs(items: &[(&str, &'static str)]) -> Vec<(String, &'static str)> {
	items.iter().map(|(n, v)| (n.to_string(), *v)).collect()
}

#[test]
fn test_enum_map_reflects_config() {
	let set = basic();
	assert_eq!(names(&set), pairs(&[("A", "a"), ("B", "b"), ("C", "c")]));
	assert_eq!(set.get("B"), Some(&"b"));
	assert_eq!(set.get("Z"), None);
}

#[test]
fn test_enum_map_includes_aliases() {
	let set = EnumBuilder::new("aliases")
		.with(Entry::new("A", "a").alias("A2"))
		.with(Entry::new("B", "b"))
		.build()
		.unwrap();
	assert_eq!(names(&set), pairs(&[("A", "a"), ("A2", "a"), ("B", "b")]));
	assert_eq!(set.list(), ["a", "b"]);
	let aliases: Vec<&str> = set.names_of(&"a").unwrap().iter().map(|n| n.as_ref()).collect();
	assert_eq!(aliases, ["A", "A2"]);
}

#[test]
fn test_index_by_value_matches_list() {
	let set = basic();
	assert_eq!(set.index_by_value().len(), 3);
	assert_eq!(set.index_of("a"), Some(0));
	assert_eq!(set.index_of("b"), Some(1));
	assert_eq!(set.index_of("c"), Some(2));
	assert_eq!(set.index_of("d"), None);
}

#[test]
fn test_enum_map_is_cached() {
	let set = basic();
	let first: *const _ = set.enum_map();
	let second: *const _ = set.enum_map();
	assert!(std::ptr::eq(first, second));
}

#[test]
fn test_subset_full_same_order() {
	let sub = basic().create_subset(["a", "b", "c"]).unwrap();
	assert_eq!(sub.list(), ["a", "b", "c"]);
	assert_eq!(names(&sub), pairs(&[("A", "a"), ("B", "b"), ("C", "c")]));
}

#[test]
fn test_subset_full_alternate_order() {
	let sub = basic().create_subset(["c", "a", "b"]).unwrap();
	assert_eq!(sub.list(), ["c", "a", "b"]);
	assert_eq!(sub.index_of("c"), Some(0));
	// Names keep declaration order regardless of list order.
	assert_eq!(names(&sub), pairs(&[("A", "a"), ("B", "b"), ("C", "c")]));
}

#[test]
fn test_subset_enum_map_is_restricted() {
	let set = basic();
	let partial = set.create_subset(["c", "a"]).unwrap();
	assert_eq!(names(&partial), pairs(&[("A", "a"), ("C", "c")]));
	assert_eq!(partial.get("B"), None);
	assert_eq!(partial.names_of(&"b"), None);

	let single = set.create_subset(["b"]).unwrap();
	assert_eq!(single.list(), ["b"]);
	assert_eq!(names(&single), pairs(&[("B", "b")]));

	let empty = set.create_subset(Vec::<&str>::new()).unwrap();
	assert!(empty.is_empty());
	assert!(empty.enum_map().is_empty());
	assert!(empty.index_by_value().is_empty());
}

#[test]
fn test_subset_rejects_foreign_value() {
	let err = basic().create_subset(["a", "d"]).unwrap_err();
	assert_eq!(
		err,
		DeriveError::ForeignValue {
			op: Derivation::Subset,
			value: "\"d\"".into(),
		}
	);
}

#[test]
fn test_subset_rejects_duplicate_value() {
	let err = basic().create_subset(["a", "b", "a"]).unwrap_err();
	assert_eq!(
		err,
		DeriveError::DuplicateValue {
			op: Derivation::Subset,
			value: "\"a\"".into(),
		}
	);
}

#[test]
fn test_subset_of_subset_rejects_excluded_values() {
	let sub = basic().create_subset(["a", "b"]).unwrap();
	let err = sub.create_subset(["c"]).unwrap_err();
	assert!(matches!(err, DeriveError::ForeignValue { .. }));

	let nested = sub.create_subset(["b", "a"]).unwrap();
	assert_eq!(nested.list(), ["b", "a"]);
	let nested = sub.create_subset(["b"]).unwrap();
	assert_eq!(nested.list(), ["b"]);
}

#[test]
fn test_complement_subset_of_subset() {
	let sub = basic().create_subset(["c", "a", "b"]).unwrap();
	assert_eq!(sub.create_complement_subset(["a"]).unwrap().list(), ["c", "b"]);
	assert_eq!(sub.create_complement_subset(Vec::<&str>::new()).unwrap().list(), ["c", "a", "b"]);
	let err = sub.create_subset(["a"]).unwrap().create_complement_subset(["b"]).unwrap_err();
	assert!(matches!(err, DeriveError::ForeignValue { op: Derivation::ComplementSubset, .. }));
}

#[test]
fn test_complement_subset_cases() {
	let set = basic();
	assert_eq!(set.create_complement_subset(Vec::<&str>::new()).unwrap().list(), ["a", "b", "c"]);
	assert_eq!(set.create_complement_subset(["a", "b"]).unwrap().list(), ["c"]);
	assert_eq!(set.create_complement_subset(["c", "a"]).unwrap().list(), ["b"]);
	assert!(set.create_complement_subset(["b", "c", "a"]).unwrap().is_empty());
}

#[test]
fn test_complement_subset_rejects_duplicates() {
	let err = basic().create_complement_subset(["a", "a"]).unwrap_err();
	assert_eq!(
		err,
		DeriveError::DuplicateValue {
			op: Derivation::ComplementSubset,
			value: "\"a\"".into(),
		}
	);
}

#[test]
fn test_ordering_same_and_alternate_order() {
	let set = basic();
	assert_eq!(set.create_ordering(["a", "b", "c"]).unwrap().list(), ["a", "b", "c"]);
	let reordered = set.create_ordering(["b", "a", "c"]).unwrap();
	assert_eq!(reordered.list(), ["b", "a", "c"]);
	assert_eq!(reordered.index_of("b"), Some(0));
	assert_eq!(names(&reordered), names(&set));
}

#[test]
fn test_ordering_rejects_omission() {
	let err = basic().create_ordering(["c", "a"]).unwrap_err();
	assert_eq!(
		err,
		DeriveError::Incomplete {
			op: Derivation::Ordering,
			expected: 3,
			found: 2,
			missing: "\"b\"".into(),
		}
	);
}

#[test]
fn test_ordering_rejects_foreign_and_duplicate() {
	let set = basic();
	assert!(matches!(
		set.create_ordering(["a", "b", "c", "d"]).unwrap_err(),
		DeriveError::ForeignValue { op: Derivation::Ordering, .. }
	));
	assert!(matches!(
		set.create_ordering(["a", "b", "b"]).unwrap_err(),
		DeriveError::DuplicateValue { op: Derivation::Ordering, .. }
	));
	assert!(matches!(
		set.create_ordering(["a", "b", "c", "a"]).unwrap_err(),
		DeriveError::DuplicateValue { .. }
	));
}

#[test]
fn test_ordering_of_subset() {
	let sub = basic().create_subset(["a", "c"]).unwrap();
	assert_eq!(sub.create_ordering(["c", "a"]).unwrap().list(), ["c", "a"]);
	assert!(sub.create_ordering(["c", "a", "b"]).is_err());
}

#[test]
fn test_type_guard_tracks_current_set() {
	let set = basic();
	assert!(set.type_guard("a"));
	assert!(!set.type_guard("d"));

	let sub = set.create_subset(["a", "b"]).unwrap();
	assert!(sub.type_guard("a"));
	assert!(!sub.type_guard("c"), "excluded by the subset even though the parent knows it");
	assert!(set.contains("c"));
}

#[test]
fn test_type_guard_accepts_any_key() {
	let token = Symbol::new("token");
	let set = EnumBuilder::new("keys")
		.with(Entry::new("Zero", Key::from(0)))
		.with(Entry::new("Token", Key::from(&token)))
		.with(Entry::new("Name", Key::from("name")))
		.build()
		.unwrap();
	assert!(set.type_guard(&Key::from(0)));
	assert!(set.type_guard(&Key::from(token)));
	assert!(!set.type_guard(&Key::from(Symbol::new("token"))));
	assert!(!set.type_guard(&Key::from("0")));
	assert!(!set.type_guard(&Key::from(1234)));
}

#[test]
fn test_derivation_leaves_parent_untouched() {
	let set = basic();
	let _ = set.create_complement_subset(["a"]).unwrap();
	let _ = set.create_ordering(["c", "b", "a"]).unwrap();
	assert_eq!(set.list(), ["a", "b", "c"]);
	assert_eq!(set.index_of("a"), Some(0));
}

#[test]
fn test_derived_handles_share_name_table() {
	let set = basic();
	let sub = set.create_subset(["b"]).unwrap();
	let deeper = sub.create_complement_subset(["b"]).unwrap();
	assert!(sub.shares_table_with(&set));
	assert!(deeper.shares_table_with(&set));
	assert!(!basic().shares_table_with(&set));
	assert_eq!(deeper.label(), "basic");
}

#[test]
fn test_handle_equality_requires_same_origin() {
	let set = basic();
	assert_eq!(set.create_subset(["a", "b"]).unwrap(), set.create_complement_subset(["c"]).unwrap());
	assert_ne!(set, basic());
	assert_ne!(set, set.create_ordering(["c", "b", "a"]).unwrap());
}

#[test]
fn test_handles_cross_threads() {
	let set = Arc::new(basic());
	let workers: Vec<_> = (0..4)
		.map(|_| {
			let set = Arc::clone(&set);
			std::thread::spawn(move || {
				let sub = set.create_complement_subset(["b"]).unwrap();
				(sub.list().to_vec(), sub.enum_map().len())
			})
		})
		.collect();
	for worker in workers {
		let (list, names) = worker.join().unwrap();
		assert_eq!(list, ["a", "c"]);
		assert_eq!(names, 2);
	}
	assert_eq!(set.enum_map().len(), 3);
}

#[test]
fn test_iteration_follows_list() {
	let set = basic().create_ordering(["c", "a", "b"]).unwrap();
	let collected: Vec<_> = (&set).into_iter().copied().collect();
	assert_eq!(collected, ["c", "a", "b"]);
	assert_eq!(set.iter().count(), 3);
}
