//! A GraphQL language front end: lexing, parsing, AST traversal, and
//! printing.
//!
//! - [`parse`] (and [`parse_value`], [`parse_const_value`],
//!   [`parse_type`]) turn source text into an immutable [`ast`] tree.
//! - [`visitor::visit`] walks a tree without recursion, optionally
//!   producing an edited copy that shares every untouched subtree.
//! - [`print`] renders any node back to canonical GraphQL text, such that
//!   re-parsing the output yields the same tree.
//!
//! Every failure is a [`GraphQLError`], which knows the [`Source`] and
//! position(s) it refers to and can render an excerpt of the offending
//! line(s) via [`GraphQLError::format_detailed`].
//!
//! ```
//! use libgraphql_language::parse;
//! use libgraphql_language::print;
//! use libgraphql_language::ParseOptions;
//!
//! let doc = parse("query { hero(episode: JEDI) { name } }", ParseOptions::default())
//!     .unwrap();
//! assert_eq!(print(doc), "{\n  hero(episode: JEDI) {\n    name\n  }\n}");
//! ```

pub mod ast;
mod block_string;
mod graphql_error;
mod graphql_error_category;
mod graphql_error_kind;
mod graphql_lexer;
mod graphql_parser;
mod parse_options;
mod print_location;
pub mod printer;
mod source;
mod source_location;
mod split_lines;
pub mod token;
pub mod visitor;

pub use block_string::dedent_block_string_lines;
pub use block_string::is_printable_as_block_string;
pub use block_string::print_block_string;
pub use graphql_error::GraphQLError;
pub use graphql_error_category::GraphQLErrorCategory;
pub use graphql_error_kind::GraphQLErrorKind;
pub use graphql_lexer::GraphQLLexer;
pub use graphql_parser::parse;
pub use graphql_parser::parse_const_value;
pub use graphql_parser::parse_type;
pub use graphql_parser::parse_value;
pub use graphql_parser::GraphQLParser;
pub use parse_options::ParseOptions;
pub use print_location::print_location;
pub use print_location::print_source_location;
pub use printer::print;
pub use printer::print_string;
pub use source::IntoSource;
pub use source::Source;
pub use source_location::SourceLocation;

#[cfg(test)]
mod tests;
