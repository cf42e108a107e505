/*!
# Tartan: Validators.

Validators are value-checking units attached to argument/option
declarations. Each one answers a single question about a raw (formatted)
parameter string and reports failure as a plain message; the parser engine
wraps the first failure into
[`ParseError::ValidationFailed`](crate::ParseError::ValidationFailed) and
aborts.
*/

use crate::ParseError;
use regex::Regex;
use std::{
	fmt,
	path::Path,
	sync::Arc,
};
use url::Url;
use uuid::Uuid;



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # URI Kind.
///
/// Which flavor of well-formedness a [`Validator::uri`] demands.
pub enum UriKind {
	#[default]
	/// # Absolute or Relative.
	Any,

	/// # Absolute Only.
	Absolute,

	/// # Relative Only.
	Relative,
}



#[derive(Clone)]
/// # Validator.
///
/// A single pass/fail rule plus an optional custom message template. The
/// template's `{}` placeholder, if any, is replaced with the offending
/// value.
///
/// ## Examples
///
/// ```
/// use tartan::Validator;
///
/// let v = Validator::enumeration(["fast", "slow"])
///     .with_message("speed must be fast or slow, not {}");
///
/// assert!(v.check("FAST").is_ok()); // Enumerations are case-insensitive.
/// assert_eq!(
///     v.check("medium"),
///     Err("speed must be fast or slow, not medium".to_owned()),
/// );
/// ```
pub struct Validator {
	/// # The Rule.
	rule: Rule,

	/// # Custom Message Template.
	message: Option<String>,
}

#[derive(Clone)]
/// # Validation Rule.
///
/// The closed set of built-in checks, with a catch-all [`Rule::Custom`]
/// escape hatch.
enum Rule {
	/// # Regex Match.
	Regex(Regex),

	/// # Set Membership.
	Lookup {
		/// # Allowed Values.
		allowed: Vec<String>,

		/// # Case-Sensitive Comparison?
		case_sensitive: bool,
	},

	/// # String Length Bounds (In Characters).
	Length {
		/// # Minimum.
		min: usize,

		/// # Maximum.
		max: usize,
	},

	/// # Numeric Range (Inclusive).
	Range {
		/// # Minimum.
		min: f64,

		/// # Maximum.
		max: f64,
	},

	/// # Existing File, Optionally Extension-Checked.
	File {
		/// # Allowed Extensions (Dotless, Case-Insensitive).
		///
		/// An empty set allows anything.
		extensions: Vec<String>,
	},

	/// # Existing Directory.
	Dir,

	/// # Well-Formed URI.
	Uri(UriKind),

	/// # GUID/UUID Format.
	Guid,

	/// # Boolean Token.
	Boolean {
		/// # Truthy Tokens.
		truthy: Vec<String>,

		/// # Falsy Tokens.
		falsy: Vec<String>,

		/// # Case-Sensitive Comparison?
		case_sensitive: bool,
	},

	/// # Composite: Any Sub-Validator Passes.
	AnyOf(Vec<Validator>),

	/// # User-Supplied Predicate.
	Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl fmt::Debug for Validator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let kind = match &self.rule {
			Rule::Regex(_) => "Regex",
			Rule::Lookup { .. } => "Lookup",
			Rule::Length { .. } => "Length",
			Rule::Range { .. } => "Range",
			Rule::File { .. } => "File",
			Rule::Dir => "Dir",
			Rule::Uri(_) => "Uri",
			Rule::Guid => "Guid",
			Rule::Boolean { .. } => "Boolean",
			Rule::AnyOf(_) => "AnyOf",
			Rule::Custom(_) => "Custom",
		};
		f.debug_struct("Validator").field("rule", &kind).finish_non_exhaustive()
	}
}

/// ## Construction.
impl Validator {
	/// # Regex Match.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::InvalidPattern`] if the pattern doesn't
	/// compile. (A configuration error, raised at declaration time.)
	pub fn regex(pattern: &str) -> Result<Self, ParseError> {
		Regex::new(pattern)
			.map(|re| Self::from(Rule::Regex(re)))
			.map_err(|e| ParseError::InvalidPattern(e.to_string()))
	}

	/// # Set Membership.
	pub fn lookup<I, T>(allowed: I, case_sensitive: bool) -> Self
	where I: IntoIterator<Item = T>, T: Into<String> {
		Self::from(Rule::Lookup {
			allowed: allowed.into_iter().map(Into::into).collect(),
			case_sensitive,
		})
	}

	/// # Enumeration Membership.
	///
	/// Like [`Validator::lookup`], but case-insensitive, matching the usual
	/// enum-by-name expectations.
	pub fn enumeration<I, T>(allowed: I) -> Self
	where I: IntoIterator<Item = T>, T: Into<String> {
		Self::lookup(allowed, false)
	}

	#[must_use]
	/// # String Length Bounds.
	pub fn length(min: usize, max: usize) -> Self {
		Self::from(Rule::Length { min, max })
	}

	#[must_use]
	/// # Numeric Range (Inclusive).
	pub fn range(min: f64, max: f64) -> Self {
		Self::from(Rule::Range { min, max })
	}

	/// # Existing File.
	///
	/// `extensions` are compared case-insensitively, without their dots; an
	/// empty set allows any extension (or none).
	pub fn file<I, T>(extensions: I) -> Self
	where I: IntoIterator<Item = T>, T: Into<String> {
		Self::from(Rule::File {
			extensions: extensions.into_iter().map(Into::into).collect(),
		})
	}

	#[must_use]
	/// # Existing Directory.
	pub fn dir() -> Self { Self::from(Rule::Dir) }

	#[must_use]
	/// # Well-Formed URI.
	pub fn uri(kind: UriKind) -> Self { Self::from(Rule::Uri(kind)) }

	#[must_use]
	/// # GUID/UUID Format.
	pub fn guid() -> Self { Self::from(Rule::Guid) }

	#[must_use]
	/// # Boolean Token.
	///
	/// The default token sets are `true`/`yes`/`1` and `false`/`no`/`0`,
	/// compared case-insensitively; use [`Validator::boolean_with`] to
	/// change them.
	pub fn boolean() -> Self {
		Self::boolean_with(
			["true", "yes", "1"],
			["false", "no", "0"],
			false,
		)
	}

	/// # Boolean Token, Custom Sets.
	pub fn boolean_with<I, T>(truthy: I, falsy: I, case_sensitive: bool) -> Self
	where I: IntoIterator<Item = T>, T: Into<String> {
		Self::from(Rule::Boolean {
			truthy: truthy.into_iter().map(Into::into).collect(),
			falsy: falsy.into_iter().map(Into::into).collect(),
			case_sensitive,
		})
	}

	#[must_use]
	/// # Composite: Any Passes.
	///
	/// Passes if _any_ sub-validator accepts the value; fails — with a
	/// message referencing the composite, not an individual member — only
	/// when all of them reject it.
	pub fn any_of<I>(validators: I) -> Self
	where I: IntoIterator<Item = Validator> {
		Self::from(Rule::AnyOf(validators.into_iter().collect()))
	}

	/// # User-Supplied Predicate.
	pub fn custom<F>(cb: F) -> Self
	where F: Fn(&str) -> bool + Send + Sync + 'static {
		Self::from(Rule::Custom(Arc::new(cb)))
	}

	#[must_use]
	/// # With a Custom Message Template.
	///
	/// Any `{}` in the template is replaced with the offending value.
	pub fn with_message<T: Into<String>>(mut self, template: T) -> Self {
		self.message = Some(template.into());
		self
	}
}

impl From<Rule> for Validator {
	#[inline]
	fn from(rule: Rule) -> Self {
		Self {
			rule,
			message: None,
		}
	}
}

/// ## Checking.
impl Validator {
	/// # Check a Raw Value.
	///
	/// ## Errors
	///
	/// Returns the formatted failure message. The engine attaches the
	/// argument/option context and raises the typed error; validators
	/// themselves never panic or throw.
	pub fn check(&self, raw: &str) -> Result<(), String> {
		if self.passes(raw) { Ok(()) }
		else { Err(self.fail_message(raw)) }
	}

	/// # Passes?
	fn passes(&self, raw: &str) -> bool {
		match &self.rule {
			Rule::Regex(re) => re.is_match(raw),
			Rule::Lookup { allowed, case_sensitive } =>
				if *case_sensitive { allowed.iter().any(|a| a == raw) }
				else { allowed.iter().any(|a| a.eq_ignore_ascii_case(raw)) },
			Rule::Length { min, max } => {
				let len = raw.chars().count();
				*min <= len && len <= *max
			},
			Rule::Range { min, max } => raw.parse::<f64>()
				.is_ok_and(|n| *min <= n && n <= *max),
			Rule::File { extensions } => {
				let path = Path::new(raw);
				path.is_file() && (
					extensions.is_empty() ||
					path.extension()
						.and_then(std::ffi::OsStr::to_str)
						.is_some_and(|ext|
							extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
						)
				)
			},
			Rule::Dir => Path::new(raw).is_dir(),
			Rule::Uri(kind) => match kind {
				UriKind::Absolute => Url::parse(raw).is_ok(),
				UriKind::Relative => is_relative_uri(raw),
				UriKind::Any => Url::parse(raw).is_ok() || is_relative_uri(raw),
			},
			Rule::Guid => Uuid::parse_str(raw).is_ok(),
			Rule::Boolean { truthy, falsy, case_sensitive } => {
				let hit = |set: &[String]|
					if *case_sensitive { set.iter().any(|t| t == raw) }
					else { set.iter().any(|t| t.eq_ignore_ascii_case(raw)) };
				hit(truthy) || hit(falsy)
			},
			Rule::AnyOf(subs) => subs.iter().any(|v| v.passes(raw)),
			Rule::Custom(cb) => cb(raw),
		}
	}

	/// # Failure Message.
	fn fail_message(&self, raw: &str) -> String {
		if let Some(template) = self.message.as_deref() {
			return template.replace("{}", raw);
		}

		match &self.rule {
			Rule::Regex(re) => format!("{raw:?} does not match {}", re.as_str()),
			Rule::Lookup { allowed, .. } =>
				format!("{raw:?} is not one of: {}", allowed.join(", ")),
			Rule::Length { min, max } =>
				format!("{raw:?} must be {min}-{max} characters"),
			Rule::Range { min, max } =>
				format!("{raw:?} must be a number between {min} and {max}"),
			Rule::File { .. } => format!("{raw:?} is not a usable file"),
			Rule::Dir => format!("{raw:?} is not a directory"),
			Rule::Uri(kind) => match kind {
				UriKind::Absolute => format!("{raw:?} is not an absolute URI"),
				UriKind::Relative => format!("{raw:?} is not a relative URI"),
				UriKind::Any => format!("{raw:?} is not a URI"),
			},
			Rule::Guid => format!("{raw:?} is not a GUID"),
			Rule::Boolean { .. } => format!("{raw:?} is not a boolean"),
			Rule::AnyOf(subs) =>
				format!("{raw:?} failed all {} allowed forms", subs.len()),
			Rule::Custom(_) => format!("{raw:?} is not allowed"),
		}
	}
}



/// # Relative URI?
///
/// The `url` crate refuses to parse relative references without a base;
/// that exact refusal is what marks a non-empty value as relative.
fn is_relative_uri(raw: &str) -> bool {
	! raw.is_empty() &&
	matches!(Url::parse(raw), Err(url::ParseError::RelativeUrlWithoutBase))
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_regex() {
		let v = Validator::regex(r"^\d+\.\d+$").unwrap();
		assert!(v.check("1.2").is_ok());
		assert!(v.check("abc").is_err());

		// Garbage patterns fail at declaration time.
		assert!(matches!(
			Validator::regex("(unclosed"),
			Err(ParseError::InvalidPattern(_)),
		));
	}

	#[test]
	fn t_lookup() {
		let strict = Validator::lookup(["Debug", "Release"], true);
		assert!(strict.check("Debug").is_ok());
		assert!(strict.check("debug").is_err());

		let loose = Validator::enumeration(["Debug", "Release"]);
		assert!(loose.check("debug").is_ok());
	}

	#[test]
	fn t_length_range() {
		let v = Validator::length(2, 4);
		assert!(v.check("ab").is_ok());
		assert!(v.check("abcd").is_ok());
		assert!(v.check("a").is_err());
		assert!(v.check("abcde").is_err());

		let v = Validator::range(1.0, 10.0);
		assert!(v.check("5").is_ok());
		assert!(v.check("10").is_ok());
		assert!(v.check("10.5").is_err());
		assert!(v.check("nope").is_err());
	}

	#[test]
	fn t_uri() {
		let v = Validator::uri(UriKind::Absolute);
		assert!(v.check("https://example.com/x").is_ok());
		assert!(v.check("foo/bar").is_err());

		let v = Validator::uri(UriKind::Relative);
		assert!(v.check("foo/bar").is_ok());
		assert!(v.check("https://example.com/x").is_err());
		assert!(v.check("").is_err());

		let v = Validator::uri(UriKind::Any);
		assert!(v.check("https://example.com/x").is_ok());
		assert!(v.check("foo/bar").is_ok());
	}

	#[test]
	fn t_guid() {
		let v = Validator::guid();
		assert!(v.check("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
		assert!(v.check("not-a-guid").is_err());
	}

	#[test]
	fn t_boolean() {
		let v = Validator::boolean();
		assert!(v.check("TRUE").is_ok());
		assert!(v.check("no").is_ok());
		assert!(v.check("maybe").is_err());

		let v = Validator::boolean_with(["on"], ["off"], true);
		assert!(v.check("on").is_ok());
		assert!(v.check("ON").is_err());
	}

	#[test]
	fn t_any_of() {
		let v = Validator::any_of([
			Validator::regex(r"^\d+$").unwrap(),
			Validator::enumeration(["all"]),
		]);

		// Either branch will do.
		assert!(v.check("123").is_ok());
		assert!(v.check("all").is_ok());

		// Total failure references the composite, not a member.
		let err = v.check("some").unwrap_err();
		assert!(err.contains("2 allowed forms"), "Unexpected message: {err}");
	}

	#[test]
	fn t_custom_message() {
		let v = Validator::guid().with_message("expected a GUID, found {}");
		assert_eq!(
			v.check("nope"),
			Err("expected a GUID, found nope".to_owned()),
		);
	}

	#[test]
	fn t_custom_predicate() {
		let v = Validator::custom(|raw| raw.len() % 2 == 0);
		assert!(v.check("ab").is_ok());
		assert!(v.check("abc").is_err());
	}

	#[test]
	fn t_file_dir() {
		// The manifest definitely exists; give it some slack on extension.
		let v = Validator::file(["toml"]);
		assert!(v.check(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).is_ok());

		let v = Validator::file(["png"]);
		assert!(v.check(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).is_err());

		let v = Validator::dir();
		assert!(v.check(env!("CARGO_MANIFEST_DIR")).is_ok());
		assert!(v.check(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).is_err());
	}
}
