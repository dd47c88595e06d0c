//! Immutable AST types for parsed GraphQL documents.
//!
//! Every node kind is a plain struct whose child nodes are held behind
//! [`Arc`](std::sync::Arc)s, so that transforming a tree (see
//! [`crate::visitor`]) rebuilds only the path from the root to each edited
//! node and shares every untouched subtree with the original.
//!
//! The set of node kinds is closed: [`Node`] is the tagged union of all of
//! them and [`Kind`] the matching field-less enum. Which fields of a kind
//! hold child nodes (and in which order they are traversed) is recorded in
//! a static child-key table, exposed as [`Kind::child_keys`].
//!
//! Nodes optionally carry a [`Location`] (`loc`) spanning the first to the
//! last token they were parsed from.
//!
//! # Example
//!
//! ```
//! use libgraphql_language::ast::Definition;
//! use libgraphql_language::ast::Selection;
//! use libgraphql_language::parse;
//! use libgraphql_language::ParseOptions;
//!
//! let doc = parse("{ hero { name } }", ParseOptions::default()).unwrap();
//! let Definition::OperationDefinition(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! let Selection::Field(hero) = &op.selection_set.selections[0] else {
//!     panic!("expected a field");
//! };
//! assert_eq!(hero.name.value, "hero");
//! ```

#[macro_use]
mod macros;

mod argument;
mod ast_node;
mod boolean_value;
mod child;
mod definition;
mod directive;
mod directive_definition;
mod directive_location;
mod document;
mod enum_type_definition;
mod enum_type_extension;
mod enum_value;
mod enum_value_definition;
mod field;
mod field_definition;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_object_type_definition;
mod input_object_type_extension;
mod input_value_definition;
mod int_value;
mod interface_type_definition;
mod interface_type_extension;
mod list_type;
mod list_value;
mod location;
mod name;
mod named_type;
mod node;
mod non_null_type;
mod null_value;
mod object_field;
mod object_type_definition;
mod object_type_extension;
mod object_value;
mod operation_definition;
mod operation_type;
mod operation_type_definition;
mod scalar_type_definition;
mod scalar_type_extension;
mod schema_definition;
mod schema_extension;
mod selection;
mod selection_set;
mod string_value;
mod type_annotation;
mod union_type_definition;
mod union_type_extension;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use boolean_value::BooleanValue;
pub use child::Child;
pub(crate) use child::NodeSlot;
pub use definition::Definition;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use directive_location::DirectiveLocation;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_type_extension::EnumTypeExtension;
pub use enum_value::EnumValue;
pub use enum_value_definition::EnumValueDefinition;
pub use field::Field;
pub use field_definition::FieldDefinition;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_object_type_extension::InputObjectTypeExtension;
pub use input_value_definition::InputValueDefinition;
pub use int_value::IntValue;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use interface_type_extension::InterfaceTypeExtension;
pub use list_type::ListType;
pub use list_value::ListValue;
pub use location::Location;
pub use name::Name;
pub use named_type::NamedType;
pub use node::Kind;
pub use node::Node;
pub use non_null_type::NonNullType;
pub use null_value::NullValue;
pub use object_field::ObjectField;
pub use object_type_definition::ObjectTypeDefinition;
pub use object_type_extension::ObjectTypeExtension;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use operation_type_definition::OperationTypeDefinition;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use scalar_type_extension::ScalarTypeExtension;
pub use schema_definition::SchemaDefinition;
pub use schema_extension::SchemaExtension;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_annotation::Type;
pub use union_type_definition::UnionTypeDefinition;
pub use union_type_extension::UnionTypeExtension;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
