/*!
# Tartan: Errors.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Parse Error.
///
/// Every failure the framework can produce, configuration mistakes and user
/// input problems alike. Each variant carries a stable numeric code — see
/// [`ParseError::code`] — so hosting programs can map errors without string
/// matching.
///
/// Configuration errors (bad declarations) indicate a bug in the hosting
/// program's own CLI surface and are raised at declaration time, before any
/// parse happens. Use [`ParseError::is_configuration`] to tell the two
/// families apart.
pub enum ParseError {
	/// # Invalid Name.
	///
	/// Names must start with an ASCII alphanumeric and may otherwise only
	/// contain ASCII alphanumerics, `-`, and `_`.
	#[error("invalid name: {0:?}")]
	InvalidName(String),

	/// # Duplicate Name.
	///
	/// A name or alias collided with one already declared on the same parent.
	#[error("duplicate name: {0:?}")]
	DuplicateName(String),

	/// # Optional Argument Before Required.
	///
	/// Within a command, all required arguments must precede optional ones.
	#[error("required argument {0:?} declared after an optional one")]
	OptionalBeforeRequired(String),

	/// # Variadic Argument Not Last.
	///
	/// Only the last argument of a command may consume multiple tokens.
	#[error("argument {0:?} declared after a variadic argument")]
	VariadicNotLast(String),

	/// # No Converter.
	///
	/// A custom value kind was declared without an accompanying converter.
	#[error("no converter declared for {0:?}")]
	NoConverter(String),

	/// # Invalid Pattern.
	///
	/// A regex validator was built from an unparseable pattern.
	#[error("invalid pattern: {0}")]
	InvalidPattern(String),

	/// # Unknown Option.
	#[error("unknown option: {0}")]
	InvalidOptionSpecified(String),

	/// # Malformed Option Parameters.
	///
	/// (Windows style.) Something other than `:` followed the option name.
	#[error("malformed option parameter specifier: {0}")]
	InvalidOptionParameterSpecifier(String),

	/// # Option Found After Argument.
	///
	/// The command requires options strictly before positional arguments.
	#[error("options must come before arguments: {0}")]
	OptionsBeforeParameters(String),

	/// # Argument Found After Option.
	///
	/// The command requires options strictly after positional arguments.
	#[error("options must come after arguments: {0}")]
	OptionsAfterParameters(String),

	/// # Insufficient Arguments.
	#[error("missing required argument(s)")]
	InsufficientArguments,

	/// # Too Many Arguments.
	#[error("unexpected argument: {0}")]
	TooManyArguments(String),

	/// # Invalid Number of Occurrences.
	#[error("option {name:?} given {found} time(s)")]
	InvalidNumberOfOccurrences {
		/// # Option Name.
		name: String,

		/// # Occurrences Found.
		found: usize,
	},

	/// # Invalid Number of Parameters.
	#[error("option {name:?} given {found} parameter(s)")]
	InvalidNumberOfParameters {
		/// # Option Name.
		name: String,

		/// # Parameters Found.
		found: usize,
	},

	/// # Validation Failed.
	#[error("invalid value {value:?} for {name}: {message}")]
	ValidationFailed {
		/// # Argument/Option Name.
		name: String,

		/// # Offending Value.
		value: String,

		/// # Validator Message.
		message: String,
	},

	/// # Conversion Failed.
	#[error("unable to convert {value:?} for {name}: {message}")]
	ConversionFailed {
		/// # Argument/Option Name.
		name: String,

		/// # Offending Value.
		value: String,

		/// # Converter Message.
		message: String,
	},

	/// # Custom (Command-Level) Failure.
	///
	/// Returned by a command's cross-argument validation hook.
	#[error("{0}")]
	Custom(String),
}

impl ParseError {
	#[must_use]
	/// # Stable Error Code.
	///
	/// Codes are grouped by family: `1..=9` configuration, `10..=19`
	/// classification, `20..=29` arity, `30..=39` value, `40` custom.
	pub const fn code(&self) -> u16 {
		match self {
			Self::InvalidName(_) => 1,
			Self::DuplicateName(_) => 2,
			Self::OptionalBeforeRequired(_) => 3,
			Self::VariadicNotLast(_) => 4,
			Self::NoConverter(_) => 5,
			Self::InvalidPattern(_) => 6,
			Self::InvalidOptionSpecified(_) => 10,
			Self::InvalidOptionParameterSpecifier(_) => 11,
			Self::OptionsBeforeParameters(_) => 12,
			Self::OptionsAfterParameters(_) => 13,
			Self::InsufficientArguments => 20,
			Self::TooManyArguments(_) => 21,
			Self::InvalidNumberOfOccurrences { .. } => 22,
			Self::InvalidNumberOfParameters { .. } => 23,
			Self::ValidationFailed { .. } => 30,
			Self::ConversionFailed { .. } => 31,
			Self::Custom(_) => 40,
		}
	}

	#[must_use]
	/// # Configuration Error?
	///
	/// Returns `true` for errors caused by the hosting program's own
	/// declarations rather than user input.
	pub const fn is_configuration(&self) -> bool { self.code() < 10 }

	#[must_use]
	/// # Suggested Exit Code.
	///
	/// The core never terminates the process itself; this is merely a
	/// convenience for hosts that want a conventional mapping:
	/// configuration bugs exit `2`, user-input problems exit `1`.
	pub const fn exit_code(&self) -> i32 {
		if self.is_configuration() { 2 }
		else { 1 }
	}
}
