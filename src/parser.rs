/*!
# Tartan: Parser Engine.
*/

use crate::{
	Argument,
	Arity,
	Command,
	Opt,
	OptRun,
	ParseError,
	ParseResult,
	Requirement,
	Style,
	UnixStyle,
	Value,
	ValueShape,
	WindowsStyle,
};
use std::collections::BTreeMap;



#[derive(Debug)]
/// # Argument Run.
///
/// Ephemeral per-parse state pairing a declared [`Argument`] with the raw
/// tokens assigned to it. Like [`OptRun`], these are built fresh for every
/// parse call and dropped at the end.
struct ArgumentRun<'a> {
	/// # The Declaration.
	arg: &'a Argument,

	/// # Assigned Raw Tokens.
	raw: Vec<String>,
}



#[derive(Debug, Clone, Copy)]
/// # Parser.
///
/// The orchestration layer: resolves the target command, runs the style
/// strategy over the remaining tokens, enforces occurrence/arity rules,
/// converts and validates values, and assembles the [`ParseResult`].
///
/// A parse call is a pure computation over fresh per-call state; the same
/// parser and the same [`Command`] tree can serve any number of calls,
/// concurrent ones included.
///
/// ## Examples
///
/// ```
/// use tartan::{Command, Opt, Parser};
///
/// let root = Command::new("app").unwrap()
///     .with_opt(Opt::new("verbose").unwrap()).unwrap();
///
/// let tokens = vec!["--verbose".to_owned()];
/// let res = Parser::unix().parse(&root, &tokens).unwrap();
/// assert!(res.switch("verbose"));
/// ```
pub struct Parser<S> {
	/// # Active Style Strategy.
	style: S,
}

impl Parser<UnixStyle> {
	#[must_use]
	/// # Unix-Style Parser.
	pub const fn unix() -> Self { Self { style: UnixStyle } }
}

impl Parser<WindowsStyle> {
	#[must_use]
	/// # Windows-Style Parser.
	pub const fn windows() -> Self { Self { style: WindowsStyle } }
}

impl<S: Style> Parser<S> {
	#[must_use]
	/// # With a Custom Style.
	pub const fn with_style(style: S) -> Self { Self { style } }

	/// # Parse a Token List.
	///
	/// Run the whole pipeline against `root`: command resolution, token
	/// classification, occurrence/arity checks, conversion, validation, and
	/// the command-level check hook.
	///
	/// ## Errors
	///
	/// The first failure at any stage aborts the parse; there is no partial
	/// result.
	pub fn parse<'a>(&self, root: &'a Command, tokens: &[String])
	-> Result<ParseResult<'a>, ParseError> {
		// Step one: find the target command.
		let (path, rest) = root.resolve(tokens);
		let target = path[path.len() - 1];

		// Step two: fresh runs. Options are inherited down the resolved
		// path, nearest declaration winning on a name clash.
		let opts = scoped_opts(&path);
		let mut opt_runs: Vec<OptRun<'_>> = opts.iter().copied().map(OptRun::new).collect();
		let mut arg_runs: Vec<ArgumentRun<'_>> = target.arguments().iter()
			.map(|arg| ArgumentRun { arg, raw: Vec::new() })
			.collect();

		// Step three: classification.
		let positionals = self.style.identify_tokens(rest, &mut opt_runs, target.grouping())?;

		// Step four: positional assignment.
		assign_positionals(&mut arg_runs, positionals)?;

		// Steps five and six: occurrence and per-occurrence parameter
		// checks.
		for run in &opt_runs { check_occurrences(run)?; }

		// Step seven: value resolution.
		let args = resolve_arguments(&arg_runs)?;
		let options = resolve_options(&opt_runs)?;

		// Step eight: the cross-argument hook gets the assembled result.
		let out = ParseResult::new(path, args, options);
		if let Some(message) = target.run_check(&out) {
			return Err(ParseError::Custom(message));
		}

		Ok(out)
	}

	/// # Parse a Raw Command Line.
	///
	/// Convenience wrapper: [`split`](crate::split) the line into tokens,
	/// then [`parse`](Parser::parse) them.
	///
	/// ## Errors
	///
	/// Same as [`Parser::parse`].
	pub fn parse_line<'a>(&self, root: &'a Command, line: &str)
	-> Result<ParseResult<'a>, ParseError> {
		self.parse(root, &crate::split(line))
	}
}



/// # Options In Scope.
///
/// The target command's own options plus everything inherited from its
/// ancestors, nearest-first so shadowing falls out of the collision check.
fn scoped_opts<'a>(path: &[&'a Command]) -> Vec<&'a Opt> {
	let mut out: Vec<&Opt> = Vec::new();
	for cmd in path.iter().rev() {
		for opt in cmd.opts() {
			if ! out.iter().any(|o| o.names().collides(opt.names())) {
				out.push(opt);
			}
		}
	}
	out
}

/// # Assign Positional Tokens.
///
/// Declaration order, one token per argument, except a trailing variadic
/// argument absorbs up to its maximum.
fn assign_positionals(runs: &mut [ArgumentRun<'_>], positionals: Vec<String>)
-> Result<(), ParseError> {
	let mut iter = positionals.into_iter();
	let last = runs.len().saturating_sub(1);

	for (i, run) in runs.iter_mut().enumerate() {
		let cap = if i == last { run.arg.max_occurrences() } else { 1 };
		while run.raw.len() < cap {
			let Some(token) = iter.next() else { break; };
			run.raw.push(token);
		}
	}

	// Leftovers mean the declaration ran out of room.
	if let Some(extra) = iter.next() {
		return Err(ParseError::TooManyArguments(extra));
	}

	// Required arguments precede optional ones, so an empty required run
	// can only mean the supply fell short.
	if runs.iter().any(|run| ! run.arg.is_optional() && run.raw.is_empty()) {
		return Err(ParseError::InsufficientArguments);
	}

	Ok(())
}

/// # Occurrence/Arity Checks.
fn check_occurrences(run: &OptRun<'_>) -> Result<(), ParseError> {
	let name = run.opt().name();
	let found = run.occurrences();

	let bad = match run.opt().requirement() {
		Requirement::Required => found != 1,
		Requirement::Optional => 1 < found,
		Requirement::OptionalUnlimited => false,
	};
	if bad {
		return Err(ParseError::InvalidNumberOfOccurrences {
			name: name.to_owned(),
			found,
		});
	}

	for occurrence in run.params() {
		let bad = match run.opt().arity() {
			Arity::Flag => ! occurrence.is_empty(),
			Arity::Single => occurrence.len() != 1,
			Arity::Unlimited => false,
		};
		if bad {
			return Err(ParseError::InvalidNumberOfParameters {
				name: name.to_owned(),
				found: occurrence.len(),
			});
		}
	}

	Ok(())
}

/// # Resolve Argument Values.
///
/// One slot per declared argument, in declaration order; an omitted optional
/// without a default leaves its slot empty rather than shifting everything
/// after it.
fn resolve_arguments(runs: &[ArgumentRun<'_>]) -> Result<Vec<Option<Value>>, ParseError> {
	let mut out = Vec::with_capacity(runs.len());

	for run in runs {
		if run.raw.is_empty() {
			// Optional and omitted; a default fills in if declared.
			out.push(run.arg.binding().default_value());
			continue;
		}

		let name = run.arg.name();
		let mut values = Vec::with_capacity(run.raw.len());
		for raw in &run.raw {
			values.push(run.arg.binding().resolve(name, raw)?);
		}

		if run.arg.is_variadic() { out.push(Some(Value::List(values))); }
		else { out.push(values.pop()); }
	}

	Ok(out)
}

/// # Resolve Option Values.
fn resolve_options(runs: &[OptRun<'_>]) -> Result<BTreeMap<String, Value>, ParseError> {
	let mut out = BTreeMap::new();

	for run in runs {
		let name = run.opt().name();

		if run.occurrences() == 0 {
			// Omitted; a default fills in if declared.
			if let Some(v) = run.opt().binding().default_value() {
				out.insert(name.to_owned(), v);
			}
			continue;
		}

		let value = match run.opt().shape() {
			ValueShape::Flag => Value::Bool(true),
			ValueShape::Count => Value::Count(run.occurrences()),
			ValueShape::Scalar => {
				// Occurrence and parameter counts were validated already;
				// exactly one raw parameter exists.
				let raw = run.params().iter().flatten().next()
					.ok_or_else(|| ParseError::InvalidNumberOfParameters {
						name: name.to_owned(),
						found: 0,
					})?;
				run.opt().binding().resolve(name, raw)?
			},
			ValueShape::List => {
				let mut values = Vec::new();
				for raw in run.params().iter().flatten() {
					values.push(run.opt().binding().resolve(name, raw)?);
				}
				Value::List(values)
			},
		};

		out.insert(name.to_owned(), value);
	}

	Ok(out)
}
