/*!
# Tartan

This crate provides a small declarative CLI parsing framework. You describe
the shape of your program — nested [`Command`]s, named [`Opt`]ions, positional
[`Argument`]s, validators, converters — and a [`Parser`] turns raw invocation
tokens into a typed, validated [`ParseResult`].

Two token syntaxes are supported out of the box:

* [`UnixStyle`]: `-x`, `--xxx`, `--xxx=value`, with open options absorbing
  subsequent tokens as parameters;
* [`WindowsStyle`]: `/xxx` or `-xxx`, with `:`-glued, comma-separated
  parameters consumed from the same token.

The core is a pure, synchronous pipeline: it raises typed errors and never
prints, prompts, or exits on its own. Declarations are immutable once built,
so a single [`Command`] tree is safely reusable across any number of parse
calls.

## Example

```
use tartan::{Argument, Command, Opt, Parser, Requirement, Arity, Validator};

let root = Command::new("pkg").unwrap()
    .with_opt(
        Opt::new("verbose").unwrap()
            .with_alias("v").unwrap()
    ).unwrap()
    .with_child(
        Command::new("install").unwrap()
            .with_arg(
                Argument::new("package").unwrap()
                    .with_validator(Validator::regex(r"^\w+$").unwrap())
            ).unwrap()
            .with_opt(
                Opt::new("version").unwrap()
                    .with_alias("ver").unwrap()
                    .with_requirement(Requirement::Optional)
                    .with_arity(Arity::Single)
            ).unwrap()
    ).unwrap();

let tokens: Vec<String> = ["install", "serde", "/verbose", "/ver:1.2"]
    .iter().map(|s| (*s).to_owned()).collect();

let res = Parser::windows().parse(&root, &tokens).unwrap();
assert_eq!(res.command().name(), "install");
assert!(res.switch("verbose"));
assert_eq!(res.option("version").and_then(|v| v.as_str()), Some("1.2"));
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

mod arg;
mod argument;
mod command;
mod error;
mod name;
mod opt;
mod parser;
mod result;
mod style;
mod token;
mod validate;
mod value;

pub use argument::Argument;
pub use command::Command;
pub use error::ParseError;
pub use name::Names;
pub use opt::{
	Arity,
	Opt,
	Requirement,
	ValueShape,
};
pub use parser::Parser;
pub use result::ParseResult;
pub use style::{
	Grouping,
	OptRun,
	Style,
	UnixStyle,
	WindowsStyle,
};
pub use token::split;
pub use validate::{
	UriKind,
	Validator,
};
pub use value::{
	Converter,
	Value,
	ValueKind,
};
