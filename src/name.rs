/*!
# Tartan: Names.
*/

use crate::ParseError;



#[derive(Debug, Clone)]
/// # Keyword Names.
///
/// Every declared command, option, and argument carries a primary name plus
/// any number of aliases, along with a case-sensitivity flag governing how
/// raw tokens are matched against them.
///
/// Names are _bare_ — `verbose`, not `--verbose` — because prefix syntax
/// belongs to the active [`Style`](crate::Style), not the declaration.
///
/// Names may only contain ASCII alphanumeric characters, `-`, and `_`, and
/// must start with an alphanumeric. The set is immutable once the owning
/// declaration has been handed to a parent; the only mutation point is
/// [`Names::push_alias`] during construction.
pub struct Names {
	/// # All Names.
	///
	/// The primary name always occupies the first slot.
	all: Vec<String>,

	/// # Case-Sensitive Matching?
	case_sensitive: bool,
}

impl Names {
	/// # New.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::InvalidName`] if the name is empty or contains
	/// invalid characters.
	pub fn new(primary: &str) -> Result<Self, ParseError> {
		let primary = primary.trim();
		if valid_name(primary.as_bytes()) {
			Ok(Self {
				all: vec![primary.to_owned()],
				case_sensitive: false,
			})
		}
		else { Err(ParseError::InvalidName(primary.to_owned())) }
	}

	/// # Add an Alias.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::InvalidName`] for invalid characters, or
	/// [`ParseError::DuplicateName`] if the alias is already present.
	pub fn push_alias(&mut self, alias: &str) -> Result<(), ParseError> {
		let alias = alias.trim();
		if ! valid_name(alias.as_bytes()) {
			return Err(ParseError::InvalidName(alias.to_owned()));
		}
		if self.matches(alias) {
			return Err(ParseError::DuplicateName(alias.to_owned()));
		}
		self.all.push(alias.to_owned());
		Ok(())
	}

	/// # Set Case Sensitivity.
	pub(crate) fn set_case_sensitive(&mut self, yes: bool) {
		self.case_sensitive = yes;
	}
}

impl Names {
	#[must_use]
	#[inline]
	/// # Primary Name.
	pub fn primary(&self) -> &str { &self.all[0] }

	#[must_use]
	#[inline]
	/// # Case-Sensitive Matching?
	pub const fn case_sensitive(&self) -> bool { self.case_sensitive }

	/// # All Names.
	///
	/// Iterate the primary name followed by any aliases.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.all.iter().map(String::as_str)
	}

	#[must_use]
	/// # Matches?
	///
	/// Compare `raw` against the primary name and aliases, honoring the
	/// case-sensitivity flag.
	pub fn matches(&self, raw: &str) -> bool {
		if self.case_sensitive {
			self.all.iter().any(|n| n == raw)
		}
		else {
			self.all.iter().any(|n| n.eq_ignore_ascii_case(raw))
		}
	}

	#[must_use]
	/// # Collides With?
	///
	/// Two name sets collide if any pair of their names would match the same
	/// token. Case-insensitive comparison applies if either side is
	/// case-insensitive.
	pub fn collides(&self, other: &Self) -> bool {
		let loose = ! (self.case_sensitive && other.case_sensitive);
		self.all.iter().any(|a| other.all.iter().any(|b|
			if loose { a.eq_ignore_ascii_case(b) }
			else { a == b }
		))
	}
}



/// # Valid Name?
///
/// The first byte must be ASCII alphanumeric; the rest may also be `-` or
/// `_`.
const fn valid_name(mut bytes: &[u8]) -> bool {
	let [b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes else {
		return false;
	};
	bytes = rest;

	while let [a, rest @ ..] = bytes {
		if ! matches!(*a, b'-' | b'_' | b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9') {
			return false;
		}
		bytes = rest;
	}

	true
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_valid_name() {
		for good in ["v", "verbose", "exclude-dir", "dry_run", "2fast"] {
			assert!(valid_name(good.as_bytes()), "Bug: {good:?} should be valid.");
		}

		for bad in ["", "-v", "--verbose", "/slash", "björk", "_lead", "a b"] {
			assert!(! valid_name(bad.as_bytes()), "Bug: {bad:?} shouldn't be valid.");
		}
	}

	#[test]
	fn t_matching() {
		let mut names = Names::new("verbose").unwrap();
		names.push_alias("v").unwrap();

		assert!(names.matches("verbose"));
		assert!(names.matches("VERBOSE")); // Insensitive by default.
		assert!(names.matches("v"));
		assert!(! names.matches("ver"));

		names.set_case_sensitive(true);
		assert!(names.matches("verbose"));
		assert!(! names.matches("VERBOSE"));
	}

	#[test]
	fn t_aliases() {
		let mut names = Names::new("install").unwrap();
		names.push_alias("i").unwrap();

		// Dupes and junk should be rejected.
		assert_eq!(
			names.push_alias("I"),
			Err(ParseError::DuplicateName("I".to_owned())),
		);
		assert_eq!(
			names.push_alias("--i"),
			Err(ParseError::InvalidName("--i".to_owned())),
		);

		assert_eq!(names.iter().collect::<Vec<_>>(), vec!["install", "i"]);
	}

	#[test]
	fn t_collides() {
		let a = Names::new("install").unwrap();
		let mut b = Names::new("insert").unwrap();
		assert!(! a.collides(&b));

		b.push_alias("INSTALL").unwrap();
		assert!(a.collides(&b));
	}
}
