/*!
# Tartan: Parse Results.
*/

use crate::{
	Command,
	Value,
};
use std::collections::BTreeMap;



#[derive(Debug, Clone)]
/// # Parse Result.
///
/// The immutable output of one parse call: the resolved command path, the
/// argument values in declaration order, and a (primary-)name→value map for
/// options. Owned by the caller; nothing here mutates after return.
///
/// ## Examples
///
/// ```
/// use tartan::{Argument, Command, Opt, Parser};
///
/// let root = Command::new("greet").unwrap()
///     .with_arg(Argument::new("name").unwrap()).unwrap()
///     .with_opt(Opt::new("loud").unwrap()).unwrap();
///
/// let tokens = vec!["world".to_owned(), "--loud".to_owned()];
/// let res = Parser::unix().parse(&root, &tokens).unwrap();
///
/// assert_eq!(res.arg(0).and_then(|v| v.as_str()), Some("world"));
/// assert!(res.switch("loud"));
/// assert!(! res.switch("quiet"));
/// ```
pub struct ParseResult<'a> {
	/// # Resolved Command Path.
	///
	/// Root first, target last; never empty.
	path: Vec<&'a Command>,

	/// # Resolved Argument Values (In Declaration Order).
	///
	/// One slot per declared argument; an omitted optional without a default
	/// leaves its slot empty.
	args: Vec<Option<Value>>,

	/// # Resolved Option Values, Keyed by Primary Name.
	options: BTreeMap<String, Value>,
}

impl<'a> ParseResult<'a> {
	/// # New.
	pub(crate) const fn new(
		path: Vec<&'a Command>,
		args: Vec<Option<Value>>,
		options: BTreeMap<String, Value>,
	) -> Self {
		Self { path, args, options }
	}

	#[must_use]
	#[inline]
	/// # Resolved Command.
	///
	/// The deepest command matched during resolution, or the root if no
	/// subcommand tokens were present.
	pub fn command(&self) -> &'a Command { self.path[self.path.len() - 1] }

	#[must_use]
	#[inline]
	/// # Resolved Command Path.
	///
	/// Every command matched during resolution, root first, target last.
	pub fn path(&self) -> &[&'a Command] { &self.path }

	#[must_use]
	#[inline]
	/// # Argument Values.
	///
	/// One slot per declared argument, in declaration order.
	pub fn args(&self) -> &[Option<Value>] { &self.args }

	#[must_use]
	#[inline]
	/// # Argument Value at Index.
	///
	/// Indices follow the declaration order, so an omitted optional earlier
	/// in the list never shifts a later argument's position.
	pub fn arg(&self, idx: usize) -> Option<&Value> {
		self.args.get(idx).and_then(Option::as_ref)
	}

	#[must_use]
	#[inline]
	/// # Option Value.
	///
	/// Lookup is by the option's _primary_ name; aliases matter during
	/// classification, not afterwards.
	pub fn option(&self, name: &str) -> Option<&Value> { self.options.get(name) }

	#[must_use]
	/// # Switch.
	///
	/// Returns `true` if the named flag option was present.
	pub fn switch(&self, name: &str) -> bool {
		matches!(self.options.get(name), Some(Value::Bool(true)))
	}

	#[must_use]
	/// # Occurrence Count.
	///
	/// For repeatable flags this is the number of occurrences; plain flags
	/// count as one when present. Anything else is zero.
	pub fn count(&self, name: &str) -> usize {
		match self.options.get(name) {
			Some(Value::Count(n)) => *n,
			Some(Value::Bool(true)) => 1,
			_ => 0,
		}
	}

	#[must_use]
	/// # All Option Values.
	pub const fn options(&self) -> &BTreeMap<String, Value> { &self.options }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_queries() {
		let cmd = Command::new("app").unwrap();
		let mut options = BTreeMap::new();
		options.insert("loud".to_owned(), Value::Bool(true));
		options.insert("level".to_owned(), Value::Count(2));

		let res = ParseResult::new(
			vec![&cmd],
			vec![Some(Value::Str("first".to_owned())), None],
			options,
		);

		assert_eq!(res.command().name(), "app");
		assert_eq!(res.path().len(), 1);
		assert_eq!(res.args().len(), 2);
		assert_eq!(res.arg(0).and_then(Value::as_str), Some("first"));
		assert!(res.arg(1).is_none()); // An empty slot reads as absent.
		assert!(res.arg(2).is_none());

		assert!(res.switch("loud"));
		assert!(! res.switch("level")); // Counts aren't switches.
		assert_eq!(res.count("loud"), 1);
		assert_eq!(res.count("level"), 2);
		assert_eq!(res.count("missing"), 0);
	}
}
