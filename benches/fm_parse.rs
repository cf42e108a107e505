/*!
# Benchmark: `tartan::Parser`
*/

use brunch::{
	Bench,
	benches,
};
use tartan::{
	Argument,
	Arity,
	Command,
	Opt,
	Parser,
	Requirement,
};

/// # A Representative Command Tree.
fn tree() -> Command {
	Command::new("pkg").unwrap()
		.with_opt(
			Opt::new("verbose").unwrap().with_alias("v").unwrap()
		).unwrap()
		.with_child(
			Command::new("install").unwrap()
				.with_arg(Argument::new("package").unwrap()).unwrap()
				.with_opt(
					Opt::new("exclude").unwrap()
						.with_alias("e").unwrap()
						.with_requirement(Requirement::OptionalUnlimited)
						.with_arity(Arity::Single)
				).unwrap()
		).unwrap()
}

/// # String Tokens.
fn toks(src: &[&str]) -> Vec<String> {
	src.iter().map(|s| (*s).to_owned()).collect()
}

benches!(
	Bench::new("tartan::Parser::unix().parse()")
		.run_seeded_with(
			|| (tree(), toks(&["install", "serde", "--verbose", "-e", "obj", "-e", "bin"])),
			|(root, tokens)| Parser::unix().parse(&root, &tokens).is_ok(),
		),

	Bench::spacer(),

	Bench::new("tartan::split()")
		.run(|| tartan::split(r#"command exec "dir *.* /ad" --verbose"#)),
);
