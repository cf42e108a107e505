/*!
# Tartan: Shared Declaration Bits.
*/

use crate::{
	Converter,
	ParseError,
	Validator,
	Value,
	ValueKind,
};
use std::{
	fmt,
	sync::Arc,
};



/// # Formatter Callback.
///
/// A pre-conversion string transform applied to each raw parameter.
pub(crate) type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// # Default Setter Callback.
///
/// A lazy default value factory for omitted optional arguments/options.
pub(crate) type DefaultSetter = Arc<dyn Fn() -> Value + Send + Sync>;



#[derive(Clone, Default)]
/// # Value Binding.
///
/// The declaration bits shared by [`Argument`](crate::Argument) and
/// [`Opt`](crate::Opt): target type, converter, formatter, default factory,
/// and validators. The parsing engine funnels every raw parameter string
/// through [`Binding::resolve`].
pub(crate) struct Binding {
	/// # Declared Value Kind.
	pub(crate) kind: ValueKind,

	/// # Explicit Converter.
	pub(crate) converter: Option<Converter>,

	/// # Pre-Conversion Formatter.
	pub(crate) formatter: Option<Formatter>,

	/// # Lazy Default.
	pub(crate) default: Option<DefaultSetter>,

	/// # Validators.
	pub(crate) validators: Vec<Validator>,
}

impl fmt::Debug for Binding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Binding")
			.field("kind", &self.kind)
			.field("validators", &self.validators.len())
			.finish_non_exhaustive()
	}
}

impl Binding {
	/// # Check Declaration.
	///
	/// Called when the owning argument/option is attached to a command.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::NoConverter`] if a custom kind was declared
	/// without a converter.
	pub(crate) fn check(&self, name: &str) -> Result<(), ParseError> {
		if matches!(self.kind, ValueKind::Custom) && self.converter.is_none() {
			Err(ParseError::NoConverter(name.to_owned()))
		}
		else { Ok(()) }
	}

	/// # Resolve One Raw Parameter.
	///
	/// Formatter first, then validators against the formatted string, then
	/// conversion (explicit converter, else the kind's standard one).
	///
	/// ## Errors
	///
	/// Returns [`ParseError::ValidationFailed`] or
	/// [`ParseError::ConversionFailed`], whichever strikes first.
	pub(crate) fn resolve(&self, name: &str, raw: &str) -> Result<Value, ParseError> {
		let raw: std::borrow::Cow<'_, str> = self.formatter.as_deref().map_or_else(
			|| std::borrow::Cow::Borrowed(raw),
			|cb| std::borrow::Cow::Owned(cb(raw)),
		);

		for v in &self.validators {
			if let Err(message) = v.check(&raw) {
				return Err(ParseError::ValidationFailed {
					name: name.to_owned(),
					value: raw.into_owned(),
					message,
				});
			}
		}

		let converted = match self.converter.as_ref() {
			Some(c) => c.convert(&raw),
			None => self.kind.convert(&raw),
		};
		converted.map_err(|message| ParseError::ConversionFailed {
			name: name.to_owned(),
			value: raw.into_owned(),
			message,
		})
	}

	/// # Default Value, If Any.
	pub(crate) fn default_value(&self) -> Option<Value> {
		self.default.as_deref().map(|d| d())
	}
}
