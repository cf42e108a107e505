/*!
# Tartan: Command-Line Splitting.
*/



#[must_use]
/// # Split a Raw Command Line.
///
/// Split `raw` into tokens on whitespace, honoring double-quoted substrings
/// as single tokens. Quotes themselves are consumed; an unterminated quoted
/// section still yields the partial token up to end-of-input; empty input
/// yields an empty set.
///
/// ## Examples
///
/// ```
/// use tartan::split;
///
/// assert_eq!(
///     split(r#"command exec "dir *.* /ad" --verbose"#),
///     vec!["command", "exec", "dir *.* /ad", "--verbose"],
/// );
/// ```
pub fn split(raw: &str) -> Vec<String> {
	let mut out = Vec::new();
	let mut buf = String::new();
	let mut quoted = false;     // Inside a quoted section?
	let mut had_quote = false;  // Did the current token involve quotes at all?

	for c in raw.chars() {
		if c == '"' {
			quoted = ! quoted;
			had_quote = true;
		}
		else if c.is_whitespace() && ! quoted {
			if ! buf.is_empty() || had_quote {
				out.push(std::mem::take(&mut buf));
			}
			had_quote = false;
		}
		else { buf.push(c); }
	}

	if ! buf.is_empty() || had_quote { out.push(buf); }

	out
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_split() {
		assert_eq!(
			split(r#"command exec "dir *.* /ad" --verbose"#),
			vec!["command", "exec", "dir *.* /ad", "--verbose"],
		);

		// Plain splitting, with whitespace runs collapsed.
		assert_eq!(split("a  b\tc"), vec!["a", "b", "c"]);

		// Quotes glued mid-token.
		assert_eq!(split(r#"--key="a b""#), vec!["--key=a b"]);
	}

	#[test]
	fn t_split_unterminated() {
		assert_eq!(
			split(r#"command exec "dir *.* /ad"#),
			vec!["command", "exec", "dir *.* /ad"],
		);
	}

	#[test]
	fn t_split_empty() {
		assert!(split("").is_empty());
		assert!(split("   \t ").is_empty());

		// An explicitly-quoted empty token survives, though.
		assert_eq!(split(r#"a "" b"#), vec!["a", "", "b"]);
	}
}
