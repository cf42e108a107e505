/*!
# Tartan: Style Strategies.

A [`Style`] turns a flat token stream into option occurrences (recorded on
the per-parse [`OptRun`]s) and leftover positional tokens. Two conventions
ship with the crate — [`UnixStyle`] and [`WindowsStyle`] — but the trait is
the seam: anything implementing it can drive a
[`Parser`](crate::Parser).
*/

mod unix;
mod windows;

pub use unix::UnixStyle;
pub use windows::WindowsStyle;

use crate::{
	Opt,
	ParseError,
};



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Token Grouping.
///
/// The required relative ordering of option tokens vs. positional-argument
/// tokens on the command line.
pub enum Grouping {
	#[default]
	/// # Any Order.
	DoesNotMatter,

	/// # Options Strictly Before Arguments.
	OptionsBeforeArguments,

	/// # Options Strictly After Arguments.
	OptionsAfterArguments,
}



#[derive(Debug)]
/// # Option Run.
///
/// Ephemeral per-parse state pairing a declared [`Opt`] with everything
/// accumulated for it during one classification pass: one raw-parameter
/// vector per occurrence. Runs are built fresh for every parse call and
/// discarded afterwards, which is what makes declarations reusable across
/// (even concurrent) parses.
pub struct OptRun<'a> {
	/// # The Declaration.
	opt: &'a Opt,

	/// # Raw Parameters, Grouped by Occurrence.
	occurrences: Vec<Vec<String>>,
}

impl<'a> OptRun<'a> {
	#[must_use]
	/// # New.
	pub(crate) const fn new(opt: &'a Opt) -> Self {
		Self {
			opt,
			occurrences: Vec::new(),
		}
	}

	#[must_use]
	#[inline]
	/// # The Declaration.
	pub const fn opt(&self) -> &'a Opt { self.opt }

	#[must_use]
	#[inline]
	/// # Occurrence Count.
	pub fn occurrences(&self) -> usize { self.occurrences.len() }

	/// # Record an Occurrence.
	pub fn record(&mut self) { self.occurrences.push(Vec::new()); }

	/// # Append a Parameter to the Latest Occurrence.
	///
	/// A no-op if no occurrence has been recorded yet; styles always
	/// [`record`](OptRun::record) before pushing parameters.
	pub fn param(&mut self, raw: String) {
		if let Some(last) = self.occurrences.last_mut() { last.push(raw); }
	}

	#[inline]
	/// # Parameters, Grouped by Occurrence.
	pub(crate) fn params(&self) -> &[Vec<String>] { &self.occurrences }
}



/// # Style Strategy.
///
/// The tokenizer/classifier contract: walk `tokens`, mutate the matching
/// [`OptRun`]s as option occurrences and parameters are recognized, and
/// return the positional tokens in their original order.
pub trait Style {
	/// # Identify Tokens.
	///
	/// ## Errors
	///
	/// Classification fails fast: unknown options, malformed parameter
	/// specifiers, and grouping-order violations abort with the matching
	/// [`ParseError`].
	fn identify_tokens(
		&self,
		tokens: &[String],
		runs: &mut [OptRun<'_>],
		grouping: Grouping,
	) -> Result<Vec<String>, ParseError>;
}



/// # Find the Run Matching a (Bare) Option Name.
///
/// `token` is only used for error context.
pub(crate) fn find_run(
	runs: &[OptRun<'_>],
	name: &str,
	token: &str,
) -> Result<usize, ParseError> {
	runs.iter()
		.position(|r| r.opt.names().matches(name))
		.ok_or_else(|| ParseError::InvalidOptionSpecified(token.to_owned()))
}



#[derive(Debug, Clone, Copy)]
/// # Ordering Guard.
///
/// Tracks whether option and positional tokens have been seen so far and
/// fails the instant the declared grouping is violated. `DoesNotMatter`
/// grouping skips the check entirely.
pub(crate) struct OrderGuard {
	/// # Active Grouping.
	grouping: Grouping,

	/// # Seen an Option Token?
	seen_opt: bool,

	/// # Seen a Positional Token?
	seen_arg: bool,
}

impl OrderGuard {
	/// # New.
	pub(crate) const fn new(grouping: Grouping) -> Self {
		Self {
			grouping,
			seen_opt: false,
			seen_arg: false,
		}
	}

	/// # Note an Option Token.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::OptionsBeforeParameters`] if options were
	/// required to come first but a positional already appeared.
	pub(crate) fn saw_option(&mut self, token: &str) -> Result<(), ParseError> {
		if matches!(self.grouping, Grouping::OptionsBeforeArguments) && self.seen_arg {
			return Err(ParseError::OptionsBeforeParameters(token.to_owned()));
		}
		self.seen_opt = true;
		Ok(())
	}

	/// # Note a Positional Token.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::OptionsAfterParameters`] if options were
	/// required to come last but one already appeared.
	pub(crate) fn saw_positional(&mut self, token: &str) -> Result<(), ParseError> {
		if matches!(self.grouping, Grouping::OptionsAfterArguments) && self.seen_opt {
			return Err(ParseError::OptionsAfterParameters(token.to_owned()));
		}
		self.seen_arg = true;
		Ok(())
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_order_guard() {
		// Options-first: argument then option trips.
		let mut guard = OrderGuard::new(Grouping::OptionsBeforeArguments);
		guard.saw_positional("file").unwrap();
		assert!(matches!(
			guard.saw_option("--verbose"),
			Err(ParseError::OptionsBeforeParameters(_)),
		));

		// Options-last: option then argument trips.
		let mut guard = OrderGuard::new(Grouping::OptionsAfterArguments);
		guard.saw_option("--verbose").unwrap();
		assert!(matches!(
			guard.saw_positional("file"),
			Err(ParseError::OptionsAfterParameters(_)),
		));

		// Agnostic: anything goes.
		let mut guard = OrderGuard::new(Grouping::DoesNotMatter);
		guard.saw_positional("file").unwrap();
		guard.saw_option("--verbose").unwrap();
		guard.saw_positional("file2").unwrap();
	}
}
