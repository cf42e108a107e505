/*!
# Tartan: Positional Arguments.
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



#[derive(Clone)]
/// # Positional Argument.
///
/// A positional argument declaration. Arguments are assigned tokens in the
/// order they were attached to their [`Command`](crate::Command); the last
/// one may be declared variadic via [`Argument::with_max_occurrences`] to
/// greedily absorb the remaining trailing tokens.
///
/// ## Examples
///
/// ```
/// use tartan::{Argument, Validator};
///
/// let arg = Argument::new("package").unwrap()
///     .with_validator(Validator::regex(r"^\w+$").unwrap());
/// assert_eq!(arg.name(), "package");
/// assert!(! arg.is_optional());
/// ```
pub struct Argument {
	/// # Names.
	names: Names,

	/// # Optional?
	optional: bool,

	/// # Maximum Occurrences.
	///
	/// Anything above one makes the argument variadic.
	max_occurrences: usize,

	/// # Shared Binding.
	binding: Binding,
}

impl fmt::Debug for Argument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Argument")
			.field("names", &self.names)
			.field("optional", &self.optional)
			.field("max_occurrences", &self.max_occurrences)
			.finish_non_exhaustive()
	}
}

/// ## Construction.
impl Argument {
	/// # New.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::InvalidName`] if the name is empty or contains
	/// invalid characters.
	pub fn new(name: &str) -> Result<Self, ParseError> {
		Ok(Self {
			names: Names::new(name)?,
			optional: false,
			max_occurrences: 1,
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
	/// # Mark Optional.
	pub const fn optional(mut self) -> Self {
		self.optional = true;
		self
	}

	#[must_use]
	/// # With Maximum Occurrences.
	///
	/// Values above one make this a variadic trailing argument. Zero is
	/// bumped to one.
	pub const fn with_max_occurrences(mut self, max: usize) -> Self {
		self.max_occurrences = if max == 0 { 1 } else { max };
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
	///
	/// The formatter is applied to the raw token before validation and
	/// conversion.
	pub fn with_formatter<F>(mut self, cb: F) -> Self
	where F: Fn(&str) -> String + Send + Sync + 'static {
		self.binding.formatter = Some(Arc::new(cb));
		self
	}

	#[must_use]
	/// # With a Lazy Default.
	///
	/// Only meaningful for optional arguments; the factory is invoked when
	/// the argument is omitted from the input.
	pub fn with_default<F>(mut self, cb: F) -> Self
	where F: Fn() -> Value + Send + Sync + 'static {
		self.binding.default = Some(Arc::new(cb));
		self
	}

	#[must_use]
	/// # With a Validator.
	///
	/// Validators run in declaration order against each (formatted) raw
	/// token; the first failure aborts the parse.
	pub fn with_validator(mut self, validator: Validator) -> Self {
		self.binding.validators.push(validator);
		self
	}
}

/// ## Queries.
impl Argument {
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
	/// # Optional?
	pub const fn is_optional(&self) -> bool { self.optional }

	#[must_use]
	#[inline]
	/// # Variadic?
	pub const fn is_variadic(&self) -> bool { 1 < self.max_occurrences }

	#[must_use]
	#[inline]
	/// # Maximum Occurrences.
	pub const fn max_occurrences(&self) -> usize { self.max_occurrences }

	#[inline]
	/// # Shared Binding.
	pub(crate) const fn binding(&self) -> &Binding { &self.binding }
}
