/*!
# Tartan: Commands.
*/

use crate::{
	Argument,
	Grouping,
	Names,
	Opt,
	ParseError,
	ParseResult,
};
use std::{
	fmt,
	sync::Arc,
};



/// # Cross-Argument Check Callback.
///
/// Invoked with the assembled result just before it is returned; a `Some`
/// message fails the parse with [`ParseError::Custom`].
type Check = Arc<dyn Fn(&ParseResult<'_>) -> Option<String> + Send + Sync>;



#[derive(Clone)]
/// # Command.
///
/// A named, nestable container owning its own positional [`Argument`]s,
/// named [`Opt`]ions, and child `Command`s. The tree is acyclic by
/// construction: children are only ever added, never re-parented.
///
/// Declaration mistakes — duplicate names, a required argument after an
/// optional one, a non-trailing variadic — are caught here, at build time,
/// rather than surfacing mid-parse.
///
/// ## Examples
///
/// ```
/// use tartan::{Command, Opt};
///
/// let root = Command::new("pkg").unwrap()
///     .with_opt(Opt::new("verbose").unwrap()).unwrap()
///     .with_child(Command::new("install").unwrap()).unwrap();
///
/// assert_eq!(root.name(), "pkg");
/// assert_eq!(root.children().len(), 1);
/// ```
pub struct Command {
	/// # Names.
	names: Names,

	/// # Positional Arguments (In Order).
	arguments: Vec<Argument>,

	/// # Named Options.
	opts: Vec<Opt>,

	/// # Child Commands.
	children: Vec<Command>,

	/// # Preferred Token Grouping.
	grouping: Grouping,

	/// # Cross-Argument Check.
	check: Option<Check>,
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Command")
			.field("names", &self.names)
			.field("arguments", &self.arguments)
			.field("opts", &self.opts)
			.field("children", &self.children)
			.field("grouping", &self.grouping)
			.finish_non_exhaustive()
	}
}

/// ## Construction.
impl Command {
	/// # New.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::InvalidName`] if the name is empty or contains
	/// invalid characters.
	pub fn new(name: &str) -> Result<Self, ParseError> {
		Ok(Self {
			names: Names::new(name)?,
			arguments: Vec::new(),
			opts: Vec::new(),
			children: Vec::new(),
			grouping: Grouping::DoesNotMatter,
			check: None,
		})
	}

	/// # With an Alias.
	///
	/// ## Errors
	///
	/// Returns an error if the alias is invalid or already taken.
	pub fn with_alias(mut self, alias: &str) -> Result<Self, ParseError> {
		self.names.push_alias(alias)?;
		Ok(self)
	}

	#[must_use]
	/// # With Case Sensitivity.
	pub fn with_case_sensitivity(mut self, yes: bool) -> Self {
		self.names.set_case_sensitive(yes);
		self
	}

	/// # With a Positional Argument.
	///
	/// Arguments are positional in the order added.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::DuplicateName`] if the name collides with an
	/// existing argument or option, [`ParseError::OptionalBeforeRequired`]
	/// if a required argument would follow an optional one,
	/// [`ParseError::VariadicNotLast`] if any argument would follow a
	/// variadic one, or [`ParseError::NoConverter`] for a custom value kind
	/// without a converter.
	pub fn with_arg(mut self, arg: Argument) -> Result<Self, ParseError> {
		arg.binding().check(arg.name())?;
		self.check_unique(arg.names())?;

		if self.arguments.iter().any(Argument::is_variadic) {
			return Err(ParseError::VariadicNotLast(arg.name().to_owned()));
		}
		if ! arg.is_optional() && self.arguments.iter().any(Argument::is_optional) {
			return Err(ParseError::OptionalBeforeRequired(arg.name().to_owned()));
		}

		self.arguments.push(arg);
		Ok(self)
	}

	/// # With a Named Option.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::DuplicateName`] if the name collides with an
	/// existing argument or option, or [`ParseError::NoConverter`] for a
	/// custom value kind without a converter.
	pub fn with_opt(mut self, opt: Opt) -> Result<Self, ParseError> {
		opt.binding().check(opt.name())?;
		self.check_unique(opt.names())?;
		self.opts.push(opt);
		Ok(self)
	}

	/// # With a Child Command.
	///
	/// ## Errors
	///
	/// Returns [`ParseError::DuplicateName`] if the child's name collides
	/// with an existing child's.
	pub fn with_child(mut self, child: Command) -> Result<Self, ParseError> {
		if self.children.iter().any(|c| c.names.collides(child.names())) {
			return Err(ParseError::DuplicateName(child.name().to_owned()));
		}
		self.children.push(child);
		Ok(self)
	}

	#[must_use]
	/// # With a Preferred Grouping.
	pub const fn with_grouping(mut self, grouping: Grouping) -> Self {
		self.grouping = grouping;
		self
	}

	#[must_use]
	/// # With a Cross-Argument Check.
	///
	/// The hook runs last, against the fully-assembled result, making it the
	/// place for constraints spanning several arguments/options, like mutual
	/// exclusion. Return `Some(message)` to fail the parse.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::{Command, Opt};
	///
	/// let cmd = Command::new("serve").unwrap()
	///     .with_opt(Opt::new("http").unwrap()).unwrap()
	///     .with_opt(Opt::new("https").unwrap()).unwrap()
	///     .with_check(|res|
	///         if res.switch("http") && res.switch("https") {
	///             Some("http and https are mutually exclusive".to_owned())
	///         }
	///         else { None }
	///     );
	/// ```
	pub fn with_check<F>(mut self, cb: F) -> Self
	where F: Fn(&ParseResult<'_>) -> Option<String> + Send + Sync + 'static {
		self.check = Some(Arc::new(cb));
		self
	}

	/// # Duplicate Name Check.
	///
	/// Verify `names` doesn't collide with any existing argument or option.
	fn check_unique(&self, names: &Names) -> Result<(), ParseError> {
		if
			self.arguments.iter().any(|a| a.names().collides(names)) ||
			self.opts.iter().any(|o| o.names().collides(names))
		{
			Err(ParseError::DuplicateName(names.primary().to_owned()))
		}
		else { Ok(()) }
	}
}

/// ## Queries.
impl Command {
	#[must_use]
	#[inline]
	/// # Primary Name.
	pub fn name(&self) -> &str { self.names.primary() }

	#[must_use]
	#[inline]
	/// # Names.
	pub const fn names(&self) -> &Names { &self.names }

	#[must_use]
	#[inline]
	/// # Positional Arguments.
	pub fn arguments(&self) -> &[Argument] { &self.arguments }

	#[must_use]
	#[inline]
	/// # Named Options.
	pub fn opts(&self) -> &[Opt] { &self.opts }

	#[must_use]
	#[inline]
	/// # Child Commands.
	pub fn children(&self) -> &[Command] { &self.children }

	#[must_use]
	#[inline]
	/// # Preferred Grouping.
	pub const fn grouping(&self) -> Grouping { self.grouping }

	#[inline]
	/// # Cross-Argument Check.
	pub(crate) fn run_check(&self, res: &ParseResult<'_>) -> Option<String> {
		self.check.as_deref().and_then(|cb| cb(res))
	}
}

/// ## Resolution.
impl Command {
	#[must_use]
	/// # Resolve a Command Path.
	///
	/// Peel leading tokens that match the name of a child command,
	/// descending recursively. Matching is first-match-wins among each
	/// command's children with no backtracking: once a command has matched,
	/// any subsequent failure to parse its tokens is a parse error, not a
	/// cue to re-resolve.
	///
	/// Returns the matched path — `self` always comes first — and the
	/// remaining unconsumed tokens.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::Command;
	///
	/// let root = Command::new("pkg").unwrap()
	///     .with_child(Command::new("install").unwrap()).unwrap();
	///
	/// let tokens: Vec<String> = ["install", "serde"]
	///     .iter().map(|s| (*s).to_owned()).collect();
	/// let (path, rest) = root.resolve(&tokens);
	///
	/// assert_eq!(path.len(), 2);
	/// assert_eq!(path[1].name(), "install");
	/// assert_eq!(rest, &["serde".to_owned()]);
	/// ```
	pub fn resolve<'a, 't>(&'a self, tokens: &'t [String])
	-> (Vec<&'a Command>, &'t [String]) {
		let mut path = vec![self];
		let mut rest = tokens;

		loop {
			let current = path[path.len() - 1];
			let Some(token) = rest.first() else { break; };
			let Some(child) = current.children.iter().find(|c| c.names.matches(token))
			else { break; };

			path.push(child);
			rest = &rest[1..];
		}

		(path, rest)
	}
}
