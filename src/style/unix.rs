/*!
# Tartan: Unix Style.
*/

use crate::{
	Arity,
	Grouping,
	ParseError,
	style::{
		find_run,
		OptRun,
		OrderGuard,
	},
	Style,
};



#[derive(Debug, Clone, Copy, Default)]
/// # Unix-Style Tokenizer.
///
/// Recognizes `-x` (short, one character) and `--xxx` (long) option tokens,
/// optionally glued to a value with `=`.
///
/// A glued `=value` is the occurrence's sole parameter and closes the option
/// immediately. Without one, an option expecting parameters stays _open_:
/// subsequent tokens that don't themselves look like options are absorbed
/// one per parameter until the declared maximum is reached or a new option
/// token shows up.
///
/// Tokens that don't fit the option pattern at all — `-` alone, `-abc`,
/// `a-file` — pass through as positionals.
pub struct UnixStyle;

impl Style for UnixStyle {
	fn identify_tokens(
		&self,
		tokens: &[String],
		runs: &mut [OptRun<'_>],
		grouping: Grouping,
	) -> Result<Vec<String>, ParseError> {
		let mut guard = OrderGuard::new(effective_grouping(runs, grouping));
		let mut out = Vec::new();

		// The classification cursor: which run is open for parameters, and
		// how many more it can take.
		let mut open: Option<(usize, usize)> = None;

		for token in tokens {
			if let Some((name, glued)) = split_token(token) {
				guard.saw_option(token)?;
				let idx = find_run(runs, name, token)?;
				runs[idx].record();
				open = None;

				if let Some(v) = glued { runs[idx].param(v.to_owned()); }
				else {
					let cap = match runs[idx].opt().arity() {
						Arity::Flag => 0,
						Arity::Single => 1,
						Arity::Unlimited => usize::MAX,
					};
					if 0 < cap { open = Some((idx, cap)); }
				}
			}
			else if let Some((idx, cap)) = open {
				runs[idx].param(token.clone());
				open = if cap == 1 { None } else { Some((idx, cap - 1)) };
			}
			else {
				guard.saw_positional(token)?;
				out.push(token.clone());
			}
		}

		Ok(out)
	}
}



/// # Effective Grouping.
///
/// An open-ended option would swallow every following token, so any declared
/// unlimited-arity option forces options to come after arguments. Otherwise
/// an options-first preference is relaxed when any option's parameter intake
/// varies by token shape (glued vs. trailing).
fn effective_grouping(runs: &[OptRun<'_>], preferred: Grouping) -> Grouping {
	if runs.iter().any(|r| matches!(r.opt().arity(), Arity::Unlimited)) {
		Grouping::OptionsAfterArguments
	}
	else if
		matches!(preferred, Grouping::OptionsBeforeArguments) &&
		runs.iter().any(|r| matches!(r.opt().arity(), Arity::Single))
	{
		Grouping::DoesNotMatter
	}
	else { preferred }
}

/// # Split an Option-Looking Token.
///
/// Returns the bare name and the glued `=value`, if the token matches the
/// Unix option pattern; `None` means positional.
fn split_token(token: &str) -> Option<(&str, Option<&str>)> {
	let bytes = token.as_bytes();

	// Long: two dashes, alphanumeric start, optional =value.
	if let Some(rest) = token.strip_prefix("--") {
		if ! rest.as_bytes().first().is_some_and(u8::is_ascii_alphanumeric) {
			return None;
		}
		return Some(match rest.split_once('=') {
			Some((k, v)) => (k, Some(v)),
			None => (rest, None),
		});
	}

	// Short: one dash, exactly one alphanumeric, optional =value.
	if bytes.len() >= 2 && bytes[0] == b'-' && bytes[1].is_ascii_alphanumeric() {
		if bytes.len() == 2 { return Some((&token[1..], None)); }
		if bytes[2] == b'=' { return Some((&token[1..2], Some(&token[3..]))); }
	}

	None
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Opt,
		Requirement,
	};

	/// # String Tokens.
	fn toks(src: &[&str]) -> Vec<String> {
		src.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn t_split_token() {
		assert_eq!(split_token("-v"), Some(("v", None)));
		assert_eq!(split_token("-v=5"), Some(("v", Some("5"))));
		assert_eq!(split_token("--verbose"), Some(("verbose", None)));
		assert_eq!(split_token("--key=val"), Some(("key", Some("val"))));
		assert_eq!(split_token("--key="), Some(("key", Some(""))));

		// Not options.
		assert_eq!(split_token("-"), None);
		assert_eq!(split_token("--"), None);
		assert_eq!(split_token("-abc"), None);
		assert_eq!(split_token("---x"), None);
		assert_eq!(split_token("/srcdir"), None);
		assert_eq!(split_token("plain"), None);
	}

	#[test]
	fn t_open_option() {
		let exclude = Opt::new("exclude-dir").unwrap()
			.with_alias("e").unwrap()
			.with_requirement(Requirement::OptionalUnlimited)
			.with_arity(Arity::Single);
		let mut runs = vec![OptRun::new(&exclude)];

		let tokens = toks(&["/srcdir", "--exclude-dir", "obj", "--exclude-dir", "bin"]);
		let out = UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter).unwrap();

		assert_eq!(out, vec!["/srcdir".to_owned()]);
		assert_eq!(runs[0].occurrences(), 2);
		assert_eq!(runs[0].params(), &[vec!["obj".to_owned()], vec!["bin".to_owned()]]);
	}

	#[test]
	fn t_glued_value_closes() {
		let key = Opt::new("key").unwrap().with_arity(Arity::Single);
		let mut runs = vec![OptRun::new(&key)];

		// "val2" must not attach to the already-closed occurrence.
		let tokens = toks(&["--key=val", "val2"]);
		let out = UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter).unwrap();

		assert_eq!(out, vec!["val2".to_owned()]);
		assert_eq!(runs[0].params(), &[vec!["val".to_owned()]]);
	}

	#[test]
	fn t_unlimited_absorbs() {
		let incl = Opt::new("include").unwrap().with_arity(Arity::Unlimited);
		let mut runs = vec![OptRun::new(&incl)];

		let tokens = toks(&["one", "--include", "a", "b", "c"]);
		let out = UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter).unwrap();

		assert_eq!(out, vec!["one".to_owned()]);
		assert_eq!(runs[0].params(), &[toks(&["a", "b", "c"])]);
	}

	#[test]
	fn t_unknown_option() {
		let verbose = Opt::new("verbose").unwrap();
		let mut runs = vec![OptRun::new(&verbose)];

		let tokens = toks(&["--nope"]);
		assert!(matches!(
			UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter),
			Err(ParseError::InvalidOptionSpecified(s)) if s == "--nope",
		));
	}

	#[test]
	fn t_case_sensitivity() {
		let verbose = Opt::new("verbose").unwrap().with_case_sensitivity(true);
		let loose = Opt::new("quiet").unwrap();
		let mut runs = vec![OptRun::new(&verbose), OptRun::new(&loose)];

		// Case-insensitive declarations match loosely…
		let tokens = toks(&["--QUIET"]);
		assert!(UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter).is_ok());

		// …case-sensitive ones do not.
		let tokens = toks(&["--Verbose"]);
		assert!(matches!(
			UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter),
			Err(ParseError::InvalidOptionSpecified(_)),
		));
	}

	#[test]
	fn t_grouping() {
		let verbose = Opt::new("verbose").unwrap();

		// Flag-only declarations leave the preference alone: options first
		// means options first.
		let mut runs = vec![OptRun::new(&verbose)];
		let tokens = toks(&["file", "--verbose"]);
		assert!(matches!(
			UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::OptionsBeforeArguments),
			Err(ParseError::OptionsBeforeParameters(_)),
		));

		// The right order is fine.
		let mut runs = vec![OptRun::new(&verbose)];
		let tokens = toks(&["--verbose", "file"]);
		let out = UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::OptionsBeforeArguments).unwrap();
		assert_eq!(out, vec!["file".to_owned()]);
	}

	#[test]
	fn t_grouping_override() {
		// An unlimited-arity option forces options-last, overriding the
		// declared preference entirely.
		let incl = Opt::new("include").unwrap().with_arity(Arity::Unlimited);
		let mut runs = vec![OptRun::new(&incl)];
		assert_eq!(
			effective_grouping(&runs, Grouping::OptionsBeforeArguments),
			Grouping::OptionsAfterArguments,
		);

		let tokens = toks(&["--include", "a", "stray"]);
		// "stray" lands in the open option, not in positionals, so this
		// still classifies cleanly.
		let out = UnixStyle.identify_tokens(&tokens, &mut runs, Grouping::OptionsBeforeArguments).unwrap();
		assert!(out.is_empty());

		// A single-parameter option merely relaxes an options-first
		// preference.
		let ver = Opt::new("version").unwrap().with_arity(Arity::Single);
		let runs = vec![OptRun::new(&ver)];
		assert_eq!(
			effective_grouping(&runs, Grouping::OptionsBeforeArguments),
			Grouping::DoesNotMatter,
		);
		assert_eq!(
			effective_grouping(&runs, Grouping::OptionsAfterArguments),
			Grouping::OptionsAfterArguments,
		);
	}
}
