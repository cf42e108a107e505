/*!
# Tartan: Values & Conversion.
*/

use std::{
	fmt,
	path::PathBuf,
	str::FromStr,
	sync::Arc,
};



#[derive(Debug, Clone, PartialEq)]
/// # Resolved Value.
///
/// The typed result of parsing a single argument or option, as exposed by
/// [`ParseResult`](crate::ParseResult).
pub enum Value {
	/// # Boolean (Flag Presence).
	Bool(bool),

	/// # Occurrence Count.
	Count(usize),

	/// # Signed Integer.
	Int(i64),

	/// # Float.
	Float(f64),

	/// # String.
	Str(String),

	/// # Filesystem Path.
	Path(PathBuf),

	/// # List of Values.
	///
	/// Variadic arguments and repeatable/multi-parameter options resolve to
	/// this.
	List(Vec<Value>),
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(v) => write!(f, "{v}"),
			Self::Count(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Str(v) => f.write_str(v),
			Self::Path(v) => write!(f, "{}", v.display()),
			Self::List(v) => {
				let mut first = true;
				for entry in v {
					if first { first = false; }
					else { f.write_str(", ")?; }
					write!(f, "{entry}")?;
				}
				Ok(())
			},
		}
	}
}

/// ## Queries.
impl Value {
	#[must_use]
	/// # As Bool.
	pub const fn as_bool(&self) -> Option<bool> {
		if let Self::Bool(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As Count.
	pub const fn as_count(&self) -> Option<usize> {
		if let Self::Count(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As Integer.
	pub const fn as_int(&self) -> Option<i64> {
		if let Self::Int(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As Float.
	pub const fn as_float(&self) -> Option<f64> {
		if let Self::Float(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As String Slice.
	pub fn as_str(&self) -> Option<&str> {
		if let Self::Str(v) = self { Some(v) } else { None }
	}

	#[must_use]
	/// # As Path.
	pub fn as_path(&self) -> Option<&std::path::Path> {
		if let Self::Path(v) = self { Some(v) } else { None }
	}

	#[must_use]
	/// # As List.
	pub fn as_list(&self) -> Option<&[Value]> {
		if let Self::List(v) = self { Some(v) } else { None }
	}
}

impl From<bool> for Value {
	#[inline]
	fn from(src: bool) -> Self { Self::Bool(src) }
}

impl From<i64> for Value {
	#[inline]
	fn from(src: i64) -> Self { Self::Int(src) }
}

impl From<f64> for Value {
	#[inline]
	fn from(src: f64) -> Self { Self::Float(src) }
}

impl From<String> for Value {
	#[inline]
	fn from(src: String) -> Self { Self::Str(src) }
}

impl From<&str> for Value {
	#[inline]
	fn from(src: &str) -> Self { Self::Str(src.to_owned()) }
}

impl From<PathBuf> for Value {
	#[inline]
	fn from(src: PathBuf) -> Self { Self::Path(src) }
}

impl From<Vec<Value>> for Value {
	#[inline]
	fn from(src: Vec<Value>) -> Self { Self::List(src) }
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Declared Value Kind.
///
/// The target type an argument's or option's raw parameter strings should be
/// converted into. Each built-in kind has a standard converter; [`Custom`]
/// requires an explicit [`Converter`] at declaration time.
///
/// [`Custom`]: ValueKind::Custom
pub enum ValueKind {
	#[default]
	/// # String (Pass-Through).
	Str,

	/// # Boolean.
	///
	/// Accepts `true`/`false`, `yes`/`no`, and `1`/`0`, case-insensitively.
	Bool,

	/// # Signed Integer.
	Int,

	/// # Float.
	Float,

	/// # Filesystem Path.
	Path,

	/// # Custom.
	///
	/// Conversion is wholly delegated to the declared [`Converter`];
	/// declaring this kind without one is a configuration error
	/// ([`ParseError::NoConverter`](crate::ParseError::NoConverter)).
	Custom,
}

impl ValueKind {
	/// # Standard Conversion.
	///
	/// ## Errors
	///
	/// Returns the converter's complaint as a plain message; the parser
	/// engine wraps it into a typed
	/// [`ParseError::ConversionFailed`](crate::ParseError::ConversionFailed).
	pub(crate) fn convert(self, raw: &str) -> Result<Value, String> {
		match self {
			Self::Str => Ok(Value::Str(raw.to_owned())),
			Self::Bool =>
				if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes") || raw == "1" {
					Ok(Value::Bool(true))
				}
				else if raw.eq_ignore_ascii_case("false") || raw.eq_ignore_ascii_case("no") || raw == "0" {
					Ok(Value::Bool(false))
				}
				else { Err(format!("expected a boolean, found {raw:?}")) },
			Self::Int => raw.parse::<i64>()
				.map(Value::Int)
				.map_err(|e| e.to_string()),
			Self::Float => raw.parse::<f64>()
				.map(Value::Float)
				.map_err(|e| e.to_string()),
			Self::Path => Ok(Value::Path(PathBuf::from(raw))),
			// Unreachable in practice; Custom declarations are required to
			// carry their own converter.
			Self::Custom => Err("no standard converter".to_owned()),
		}
	}
}



#[derive(Clone)]
/// # Value Converter.
///
/// A plain function value mapping a raw parameter string to a typed
/// [`Value`]. Converters are attached at declaration time; the parsing core
/// only ever invokes them blindly.
pub struct Converter(Arc<dyn Fn(&str) -> Result<Value, String> + Send + Sync>);

impl fmt::Debug for Converter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Converter")
	}
}

impl Converter {
	/// # New.
	///
	/// Wrap an arbitrary conversion closure. Failure messages should describe
	/// the problem without naming the argument; the engine adds that context.
	pub fn new<F>(cb: F) -> Self
	where F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static {
		Self(Arc::new(cb))
	}

	#[must_use]
	/// # From `FromStr`.
	///
	/// Build a converter from any type implementing [`FromStr`] whose output
	/// maps into a [`Value`].
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::{Converter, Value};
	///
	/// let conv = Converter::from_str::<i64>();
	/// assert_eq!(conv.convert("42"), Ok(Value::Int(42)));
	/// assert!(conv.convert("forty-two").is_err());
	/// ```
	pub fn from_str<T>() -> Self
	where
		T: FromStr + 'static,
		T::Err: fmt::Display,
		Value: From<T>,
	{
		Self::new(|raw| raw.parse::<T>()
			.map(Value::from)
			.map_err(|e| e.to_string())
		)
	}

	/// # Convert.
	///
	/// ## Errors
	///
	/// Bubbles the closure's failure message.
	pub fn convert(&self, raw: &str) -> Result<Value, String> { (self.0)(raw) }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_standard_convert() {
		assert_eq!(ValueKind::Str.convert("hey"), Ok(Value::Str("hey".to_owned())));
		assert_eq!(ValueKind::Bool.convert("YES"), Ok(Value::Bool(true)));
		assert_eq!(ValueKind::Bool.convert("0"), Ok(Value::Bool(false)));
		assert!(ValueKind::Bool.convert("maybe").is_err());
		assert_eq!(ValueKind::Int.convert("-3"), Ok(Value::Int(-3)));
		assert!(ValueKind::Int.convert("3.5").is_err());
		assert_eq!(ValueKind::Float.convert("3.5"), Ok(Value::Float(3.5)));
		assert_eq!(
			ValueKind::Path.convert("/foo/bar"),
			Ok(Value::Path(PathBuf::from("/foo/bar"))),
		);
	}

	#[test]
	fn t_custom_convert() {
		let conv = Converter::new(|raw| {
			let (a, b) = raw.split_once('x')
				.ok_or_else(|| "expected WxH".to_owned())?;
			let a: i64 = a.parse().map_err(|_| "bad width".to_owned())?;
			let b: i64 = b.parse().map_err(|_| "bad height".to_owned())?;
			Ok(Value::List(vec![Value::Int(a), Value::Int(b)]))
		});

		assert_eq!(
			conv.convert("1920x1080"),
			Ok(Value::List(vec![Value::Int(1920), Value::Int(1080)])),
		);
		assert_eq!(conv.convert("1920"), Err("expected WxH".to_owned()));
	}

	#[test]
	fn t_display() {
		assert_eq!(Value::Bool(true).to_string(), "true");
		assert_eq!(
			Value::List(vec![Value::Str("obj".to_owned()), Value::Str("bin".to_owned())]).to_string(),
			"obj, bin",
		);
	}
}
