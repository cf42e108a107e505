/*!
# Tartan: Named Options.
*/

use crate::{
	arg::Binding,
	Converter,
	Names,
	ParseError,
	Validator,
	Value,
	ValueKind,
};
use std::{
	fmt,
	sync::Arc,
};



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Option Requirement.
///
/// Governs how many times the option itself may occur on the command line.
pub enum Requirement {
	/// # Required (Exactly Once).
	Required,

	#[default]
	/// # Optional (At Most Once).
	Optional,

	/// # Optional, Unlimited Occurrences.
	OptionalUnlimited,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Parameter Arity.
///
/// Governs how many parameter values each occurrence of the option carries.
pub enum Arity {
	#[default]
	/// # No Parameters.
	Flag,

	/// # Exactly One Parameter.
	Single,

	/// # Any Number of Parameters.
	Unlimited,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Storage Shape.
///
/// Derived from [`Requirement`] × [`Arity`]; determines how the option's
/// resolved value is stored in the [`ParseResult`](crate::ParseResult).
pub enum ValueShape {
	/// # Boolean Presence.
	Flag,

	/// # Occurrence Count.
	///
	/// A repeatable flag, e.g. `-v -v -v`.
	Count,

	/// # Single Scalar.
	Scalar,

	/// # List of Values.
	List,
}



#[derive(Clone)]
/// # Named Option.
///
/// A named option declaration: a [`Names`] set, an occurrence
/// [`Requirement`], a parameter [`Arity`], and the usual value binding bits
/// (kind, converter, formatter, default, validators).
///
/// ## Examples
///
/// ```
/// use tartan::{Arity, Opt, Requirement, ValueShape};
///
/// let opt = Opt::new("exclude-dir").unwrap()
///     .with_alias("e").unwrap()
///     .with_requirement(Requirement::OptionalUnlimited)
///     .with_arity(Arity::Single);
/// assert_eq!(opt.shape(), ValueShape::List);
/// ```
pub struct Opt {
	/// # Names.
	names: Names,

	/// # Occurrence Requirement.
	requirement: Requirement,

	/// # Parameter Arity.
	arity: Arity,

	/// # Shared Binding.
	binding: Binding,
}

impl fmt::Debug for Opt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Opt")
			.field("names", &self.names)
			.field("requirement", &self.requirement)
			.field("arity", &self.arity)
			.finish_non_exhaustive()
	}
}

/// ## Construction.
impl Opt {
	/// # New.
	///
	/// The default is an optional, zero-parameter flag.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::InvalidName`] if the name is empty or contains
	/// invalid characters.
	pub fn new(name: &str) -> Result<Self, ParseError> {
		Ok(Self {
			names: Names::new(name)?,
			requirement: Requirement::Optional,
			arity: Arity::Flag,
			binding: Binding::default(),
		})
	}

	/// # With an Alias.
	///
	/// ## Errors
	///
	/// Returns an error if the alias is invalid or already taken.
	pub fn with_alias(mut self, alias: &str) -> Result<Self, ParseError> {
		self.names.push_alias(alias)?;
		Ok(self)
	}

	#[must_use]
	/// # With Case Sensitivity.
	pub fn with_case_sensitivity(mut self, yes: bool) -> Self {
		self.names.set_case_sensitive(yes);
		self
	}

	#[must_use]
	/// # With an Occurrence Requirement.
	pub const fn with_requirement(mut self, requirement: Requirement) -> Self {
		self.requirement = requirement;
		self
	}

	#[must_use]
	/// # With a Parameter Arity.
	pub const fn with_arity(mut self, arity: Arity) -> Self {
		self.arity = arity;
		self
	}

	#[must_use]
	/// # With a Declared Value Kind.
	pub const fn with_kind(mut self, kind: ValueKind) -> Self {
		self.binding.kind = kind;
		self
	}

	#[must_use]
	/// # With an Explicit Converter.
	pub fn with_converter(mut self, converter: Converter) -> Self {
		self.binding.converter = Some(converter);
		self
	}

	#[must_use]
	/// # With a Formatter.
	pub fn with_formatter<F>(mut self, cb: F) -> Self
	where F: Fn(&str) -> String + Send + Sync + 'static {
		self.binding.formatter = Some(Arc::new(cb));
		self
	}

	#[must_use]
	/// # With a Lazy Default.
	pub fn with_default<F>(mut self, cb: F) -> Self
	where F: Fn() -> Value + Send + Sync + 'static {
		self.binding.default = Some(Arc::new(cb));
		self
	}

	#[must_use]
	/// # With a Validator.
	pub fn with_validator(mut self, validator: Validator) -> Self {
		self.binding.validators.push(validator);
		self
	}
}

/// ## Queries.
impl Opt {
	#[must_use]
	#[inline]
	/// # Primary Name.
	pub fn name(&self) -> &str { self.names.primary() }

	#[must_use]
	#[inline]
	/// # Names.
	pub const fn names(&self) -> &Names { &self.names }

	#[must_use]
	#[inline]
	/// # Occurrence Requirement.
	pub const fn requirement(&self) -> Requirement { self.requirement }

	#[must_use]
	#[inline]
	/// # Parameter Arity.
	pub const fn arity(&self) -> Arity { self.arity }

	#[must_use]
	/// # Storage Shape.
	///
	/// Flags repeat into counts; anything open-ended stores as a list.
	pub const fn shape(&self) -> ValueShape {
		match (self.requirement, self.arity) {
			(Requirement::OptionalUnlimited, Arity::Flag) => ValueShape::Count,
			(_, Arity::Flag) => ValueShape::Flag,
			(Requirement::OptionalUnlimited, _) | (_, Arity::Unlimited) => ValueShape::List,
			(_, Arity::Single) => ValueShape::Scalar,
		}
	}

	#[inline]
	/// # Shared Binding.
	pub(crate) const fn binding(&self) -> &Binding { &self.binding }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_shapes() {
		for (req, arity, expected) in [
			(Requirement::Optional, Arity::Flag, ValueShape::Flag),
			(Requirement::Required, Arity::Flag, ValueShape::Flag),
			(Requirement::OptionalUnlimited, Arity::Flag, ValueShape::Count),
			(Requirement::Optional, Arity::Single, ValueShape::Scalar),
			(Requirement::Required, Arity::Single, ValueShape::Scalar),
			(Requirement::OptionalUnlimited, Arity::Single, ValueShape::List),
			(Requirement::Optional, Arity::Unlimited, ValueShape::List),
			(Requirement::Required, Arity::Unlimited, ValueShape::List),
			(Requirement::OptionalUnlimited, Arity::Unlimited, ValueShape::List),
		] {
			let opt = Opt::new("x").unwrap()
				.with_requirement(req)
				.with_arity(arity);
			assert_eq!(opt.shape(), expected, "Shape mismatch for {req:?}/{arity:?}.");
		}
	}

	#[test]
	fn t_defaults() {
		let opt = Opt::new("verbose").unwrap();
		assert_eq!(opt.requirement(), Requirement::Optional);
		assert_eq!(opt.arity(), Arity::Flag);
		assert_eq!(opt.shape(), ValueShape::Flag);
	}
}
