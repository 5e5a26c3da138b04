//! Property suites for the invariants documented on [`crate::set`] and [`crate::mapper`].

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::{Entry, EnumBuilder, EnumOneToOneMapper, EnumSet, subtract};

fn arb_values() -> impl Strategy<Value = Vec<u16>> {
	prop::collection::hash_set(any::<u16>(), 0..24).prop_map(|set| set.into_iter().collect())
}

fn build(values: &[u16]) -> EnumSet<u16> {
	let mut builder = EnumBuilder::new("prop");
	builder.extend(values.iter().map(|v| Entry::new(format!("V{v}"), *v)));
	builder.build().expect("distinct values and names")
}

proptest! {
	#[test]
	fn prop_list_matches_entries(values in arb_values()) {
		let set = build(&values);
		prop_assert_eq!(set.list(), values.as_slice());
		prop_assert_eq!(set.enum_map().len(), values.len());
	}

	#[test]
	fn prop_index_matches_list_position(values in arb_values()) {
		let set = build(&values);
		prop_assert_eq!(set.index_by_value().len(), set.len());
		for (pos, value) in set.list().iter().enumerate() {
			prop_assert_eq!(set.index_of(value), Some(pos));
		}
	}

	#[test]
	fn prop_subset_keeps_argument_order(
		(values, picked) in arb_values().prop_flat_map(|values| {
			let len = values.len();
			(Just(values.clone()), subsequence(values, 0..=len).prop_shuffle())
		})
	) {
		let set = build(&values);
		let sub = set.create_subset(picked.iter().copied()).unwrap();
		prop_assert_eq!(sub.list(), picked.as_slice());
		for value in &values {
			prop_assert_eq!(sub.type_guard(value), picked.contains(value));
		}
		for (pos, value) in sub.list().iter().enumerate() {
			prop_assert_eq!(sub.index_of(value), Some(pos));
		}
	}

	#[test]
	fn prop_complement_of_complement_restores_parent(
		(values, picked) in arb_values().prop_flat_map(|values| {
			let len = values.len();
			(Just(values.clone()), subsequence(values, 0..=len).prop_shuffle())
		})
	) {
		let set = build(&values);
		let complement = set.create_complement_subset(picked.iter().copied()).unwrap();
		let expected = subtract(&values, picked.iter().copied());
		prop_assert_eq!(complement.list(), expected.as_slice());
		let picked_in_order = set.create_complement_subset(complement.list().iter().copied()).unwrap();
		let back = set.create_complement_subset(picked_in_order.list().iter().copied()).unwrap();
		prop_assert_eq!(back.list(), complement.list());
		let full = set
			.create_complement_subset(Vec::<u16>::new())
			.unwrap();
		prop_assert_eq!(full.list(), set.list());
	}

	#[test]
	fn prop_ordering_accepts_any_permutation(
		(values, order) in arb_values().prop_flat_map(|values| {
			(Just(values.clone()), Just(values).prop_shuffle())
		})
	) {
		let set = build(&values);
		let ordered = set.create_ordering(order.iter().copied()).unwrap();
		prop_assert_eq!(ordered.list(), order.as_slice());
		if let Some((_, rest)) = order.split_first() {
			prop_assert!(set.create_ordering(rest.iter().copied()).is_err());
		}
	}

	#[test]
	fn prop_inverse_undoes_mapping(
		(values, targets) in arb_values().prop_flat_map(|values| {
			(Just(values.clone()), Just(values).prop_shuffle())
		})
	) {
		let keys: Vec<u32> = values.iter().map(|v| u32::from(*v)).collect();
		let mapper = EnumOneToOneMapper::new(keys.iter().copied(), targets.iter().copied()).unwrap();
		let result = mapper
			.create(keys.iter().copied().zip(targets.iter().copied()))
			.unwrap();
		for key in &keys {
			let target = result.get(key).unwrap();
			prop_assert_eq!(result.get_inverse(target), Some(key));
		}
		let given: Vec<(u32, u16)> = keys.iter().copied().zip(targets.iter().copied()).collect();
		let kept: Vec<(u32, u16)> = result.mapping().iter().map(|(k, v)| (*k, *v)).collect();
		prop_assert_eq!(kept, given);
	}
}
