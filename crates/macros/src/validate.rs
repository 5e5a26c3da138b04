//! Compile-time checks for `create_enum!`.
//!
//! Mirrors the runtime checks of `EnumBuilder::build` for everything decidable from
//! tokens. Literal values are compared by value; a constant path is only known to equal
//! itself. Anything else is left to the runtime check.

use std::collections::HashMap;

use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{Expr, Lit, UnOp};

use crate::create_enum::EnumInput;

/// What can be told about a value expression from its tokens alone.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ValueToken {
	Str(String),
	Int(i128),
	Char(char),
	Bool(bool),
	Path(String),
	Opaque,
}

impl ValueToken {
	fn of(expr: &Expr) -> Self {
		match expr {
			Expr::Lit(lit) => Self::of_lit(&lit.lit, false),
			Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => match &*unary.expr {
				Expr::Lit(lit) => Self::of_lit(&lit.lit, true),
				_ => Self::Opaque,
			},
			Expr::Paren(inner) => Self::of(&inner.expr),
			Expr::Group(inner) => Self::of(&inner.expr),
			Expr::Path(path) if path.qself.is_none() => {
				Self::Path(path.path.to_token_stream().to_string())
			}
			_ => Self::Opaque,
		}
	}

	fn of_lit(lit: &Lit, negative: bool) -> Self {
		match lit {
			Lit::Int(int) => match int.base10_parse::<i128>() {
				Ok(v) if negative => Self::Int(-v),
				Ok(v) => Self::Int(v),
				Err(_) => Self::Opaque,
			},
			Lit::Str(s) if !negative => Self::Str(s.value()),
			Lit::Char(c) if !negative => Self::Char(c.value()),
			Lit::Bool(b) if !negative => Self::Bool(b.value),
			_ => Self::Opaque,
		}
	}

	fn is_literal(&self) -> bool {
		!matches!(self, Self::Path(_) | Self::Opaque)
	}

	/// Returns true only when both tokens certainly denote the same value.
	fn certainly_equal(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Opaque, _) | (_, Self::Opaque) => false,
			(a, b) => a == b,
		}
	}

	/// Returns true only when both tokens certainly denote different values.
	fn certainly_differs(&self, other: &Self) -> bool {
		self.is_literal() && other.is_literal() && self != other
	}
}

/// Validates the whole input, combining every violation into one error.
pub(crate) fn validate(input: &EnumInput) -> syn::Result<()> {
	let mut errors: Option<syn::Error> = None;
	let mut report = |error: syn::Error| {
		if let Some(existing) = errors.as_mut() {
			existing.combine(error);
		} else {
			errors = Some(error);
		}
	};

	let mut name_owner: HashMap<&str, usize> = HashMap::new();
	let mut value_owner: Vec<(ValueToken, usize)> = Vec::new();

	for (idx, entry) in input.entries.iter().enumerate() {
		let Some(first) = entry.pairs.first() else {
			report(syn::Error::new(entry.brace_span, "an entry needs at least one name"));
			continue;
		};
		let value = ValueToken::of(&first.value);

		for pair in &entry.pairs[1..] {
			if ValueToken::of(&pair.value).certainly_differs(&value) {
				report(syn::Error::new(
					pair.value.span(),
					format!(
						"alias `{}` must have the same value as `{}`",
						pair.name.value, first.name.value
					),
				));
			}
		}

		for pair in &entry.pairs {
			if let Some(owner) = name_owner.insert(&pair.name.value, idx) {
				name_owner.insert(&pair.name.value, owner);
				report(syn::Error::new(
					pair.name.span,
					format!(
						"name `{}` is already declared in entry {owner}",
						pair.name.value
					),
				));
			}
		}

		if let Some((_, owner)) = value_owner.iter().find(|(seen, _)| seen.certainly_equal(&value)) {
			report(syn::Error::new(
				first.value.span(),
				format!("value is already used by entry {owner}"),
			));
		} else {
			value_owner.push((value, idx));
		}
	}

	match errors {
		Some(error) => Err(error),
		None => Ok(()),
	}
}
