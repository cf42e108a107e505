/*!
# Tartan: Windows Style.
*/

use crate::{
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
/// # Windows-Style Tokenizer.
///
/// Recognizes `/name` and `-name` option tokens. Parameters, if any, are
/// glued to the same token with `:` and split on unescaped commas (`\,`
/// escapes a literal one, and a leading comma is stripped); this style never
/// consumes subsequent standalone tokens as parameters.
///
/// * `/verbose` — present, zero parameters;
/// * `/ver:1.2` — one parameter, `1.2`;
/// * `/ex:obj,bin` — two parameters;
/// * `/verbose!` — [`ParseError::InvalidOptionParameterSpecifier`];
/// * `/bogus` — [`ParseError::InvalidOptionSpecified`].
pub struct WindowsStyle;

impl Style for WindowsStyle {
	fn identify_tokens(
		&self,
		tokens: &[String],
		runs: &mut [OptRun<'_>],
		grouping: Grouping,
	) -> Result<Vec<String>, ParseError> {
		let mut guard = OrderGuard::new(grouping);
		let mut out = Vec::new();

		for token in tokens {
			let Some((name, tail)) = split_token(token) else {
				guard.saw_positional(token)?;
				out.push(token.clone());
				continue;
			};

			guard.saw_option(token)?;
			let idx = find_run(runs, name, token)?;

			if tail.is_empty() {
				runs[idx].record();
			}
			else if let Some(raw) = tail.strip_prefix(':') {
				runs[idx].record();
				for p in split_params(raw) { runs[idx].param(p); }
			}
			else {
				return Err(ParseError::InvalidOptionParameterSpecifier(token.clone()));
			}
		}

		Ok(out)
	}
}



/// # Split an Option-Looking Token.
///
/// Returns the bare name and whatever trails it (empty, `:params`, or junk)
/// if the token starts with `/` or `-` plus a name character; `None` means
/// positional.
fn split_token(token: &str) -> Option<(&str, &str)> {
	let rest = token.strip_prefix(&['/', '-'][..])?;
	if ! rest.as_bytes().first().is_some_and(u8::is_ascii_alphanumeric) {
		return None;
	}

	let end = rest.find(|c: char|
		! (c.is_ascii_alphanumeric() || c == '-' || c == '_')
	).unwrap_or(rest.len());

	Some(rest.split_at(end))
}

/// # Split `:`-Glued Parameters.
///
/// Unescaped commas separate parameters; `\,` produces a literal comma; a
/// leading separator is stripped. An empty string yields no parameters.
fn split_params(raw: &str) -> Vec<String> {
	let raw = raw.strip_prefix(',').unwrap_or(raw);
	if raw.is_empty() { return Vec::new(); }

	let mut out = Vec::new();
	let mut buf = String::new();
	let mut esc = false;

	for c in raw.chars() {
		if esc {
			if c != ',' { buf.push('\\'); }
			buf.push(c);
			esc = false;
		}
		else if c == '\\' { esc = true; }
		else if c == ',' { out.push(std::mem::take(&mut buf)); }
		else { buf.push(c); }
	}

	if esc { buf.push('\\'); }
	out.push(buf);
	out
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Arity,
		Opt,
		Requirement,
	};

	/// # String Tokens.
	fn toks(src: &[&str]) -> Vec<String> {
		src.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn t_split_params() {
		assert_eq!(split_params(""), Vec::<String>::new());
		assert_eq!(split_params("1.2"), vec!["1.2".to_owned()]);
		assert_eq!(split_params("obj,bin"), toks(&["obj", "bin"]));
		assert_eq!(split_params(",obj,bin"), toks(&["obj", "bin"]));
		assert_eq!(split_params(r"a\,b,c"), toks(&["a,b", "c"]));
		assert_eq!(split_params("a,"), toks(&["a", ""]));
	}

	#[test]
	fn t_classify() {
		let verbose = Opt::new("verbose").unwrap().with_alias("v").unwrap();
		let version = Opt::new("version").unwrap()
			.with_alias("ver").unwrap()
			.with_arity(Arity::Single);
		let mut runs = vec![OptRun::new(&verbose), OptRun::new(&version)];

		let tokens = toks(&["packageName", "/verbose", "/ver:1.2"]);
		let out = WindowsStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter).unwrap();

		assert_eq!(out, vec!["packageName".to_owned()]);
		assert_eq!(runs[0].occurrences(), 1);
		assert!(runs[0].params()[0].is_empty());
		assert_eq!(runs[1].params(), &[vec!["1.2".to_owned()]]);
	}

	#[test]
	fn t_never_consumes_next_token() {
		let version = Opt::new("version").unwrap().with_arity(Arity::Single);
		let mut runs = vec![OptRun::new(&version)];

		// Unlike Unix style, "1.2" stays positional here.
		let tokens = toks(&["/version", "1.2"]);
		let out = WindowsStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter).unwrap();

		assert_eq!(out, vec!["1.2".to_owned()]);
		assert!(runs[0].params()[0].is_empty());
	}

	#[test]
	fn t_multi_params() {
		let ex = Opt::new("exclude").unwrap()
			.with_requirement(Requirement::OptionalUnlimited)
			.with_arity(Arity::Unlimited);
		let mut runs = vec![OptRun::new(&ex)];

		let tokens = toks(&["/exclude:obj,bin", "/exclude:target"]);
		WindowsStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter).unwrap();

		assert_eq!(runs[0].occurrences(), 2);
		assert_eq!(runs[0].params(), &[toks(&["obj", "bin"]), toks(&["target"])]);
	}

	#[test]
	fn t_bad_tokens() {
		let verbose = Opt::new("verbose").unwrap();
		let mut runs = vec![OptRun::new(&verbose)];

		// Unknown name.
		let tokens = toks(&["/bogus"]);
		assert!(matches!(
			WindowsStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter),
			Err(ParseError::InvalidOptionSpecified(s)) if s == "/bogus",
		));

		// Junk after a known name.
		let tokens = toks(&["/verbose!now"]);
		assert!(matches!(
			WindowsStyle.identify_tokens(&tokens, &mut runs, Grouping::DoesNotMatter),
			Err(ParseError::InvalidOptionParameterSpecifier(s)) if s == "/verbose!now",
		));
	}

	#[test]
	fn t_grouping() {
		let verbose = Opt::new("verbose").unwrap();
		let mut runs = vec![OptRun::new(&verbose)];

		let tokens = toks(&["/verbose", "file"]);
		assert!(matches!(
			WindowsStyle.identify_tokens(&tokens, &mut runs, Grouping::OptionsAfterArguments),
			Err(ParseError::OptionsAfterParameters(s)) if s == "file",
		));
	}
}
