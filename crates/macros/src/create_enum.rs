//! `create_enum!` input grammar and expansion.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Token, braced, parse_macro_input};

/// A name on the left of `:`, either `Ident` or `"string"`.
pub(crate) struct EntryName {
	pub value: String,
	pub span: Span,
}

impl Parse for EntryName {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		if input.peek(syn::LitStr) {
			let lit: syn::LitStr = input.parse()?;
			return Ok(EntryName {
				value: lit.value(),
				span: lit.span(),
			});
		}
		let ident = input.call(syn::Ident::parse_any)?;
		Ok(EntryName {
			value: ident.unraw().to_string(),
			span: ident.span(),
		})
	}
}

/// `Name: expr`.
pub(crate) struct EntryPair {
	pub name: EntryName,
	pub value: syn::Expr,
}

impl Parse for EntryPair {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let name: EntryName = input.parse()?;
		input.parse::<Token![:]>()?;
		let value: syn::Expr = input.parse()?;
		Ok(EntryPair { name, value })
	}
}

/// `{ Name: expr, Alias: expr }`.
pub(crate) struct EntryInput {
	pub brace_span: Span,
	pub pairs: Vec<EntryPair>,
}

impl Parse for EntryInput {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let content;
		let brace = braced!(content in input);
		let pairs = Punctuated::<EntryPair, Token![,]>::parse_terminated(&content)?;
		Ok(EntryInput {
			brace_span: brace.span.join(),
			pairs: pairs.into_iter().collect(),
		})
	}
}

/// The whole macro input: comma-separated entries.
pub(crate) struct EnumInput {
	pub entries: Vec<EntryInput>,
}

impl Parse for EnumInput {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let entries = Punctuated::<EntryInput, Token![,]>::parse_terminated(input)?;
		Ok(EnumInput {
			entries: entries.into_iter().collect(),
		})
	}
}

/// Entry point for the `create_enum!` macro.
pub fn create_enum(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as EnumInput);
	if let Err(e) = crate::validate::validate(&input) {
		return e.to_compile_error().into();
	}
	expand(&input).into()
}

fn expand(input: &EnumInput) -> TokenStream2 {
	let entries = input.entries.iter().map(|entry| {
		let pairs = entry.pairs.iter().map(|pair| {
			let name = &pair.name.value;
			let value = &pair.value;
			quote! { (#name, #value) }
		});
		quote! {
			__enumkit_builder.push(::enumkit::Entry::from_pairs([#(#pairs),*]));
		}
	});

	quote! {
		{
			let mut __enumkit_builder = ::enumkit::EnumBuilder::new(::core::module_path!());
			#(#entries)*
			__enumkit_builder.build()
		}
	}
}
