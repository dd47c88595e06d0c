use crate::ast::Kind;
use crate::ast::Name;
use crate::ast::Node;
use crate::parse;
use crate::ParseOptions;
use std::collections::HashSet;

/// Every kind with its child keys, in traversal order.
const CHILD_KEYS: &[(Kind, &[&str])] = &[
    (Kind::Name, &[]),
    (Kind::Document, &["definitions"]),
    (
        Kind::OperationDefinition,
        &["name", "variable_definitions", "directives", "selection_set"],
    ),
    (
        Kind::VariableDefinition,
        &["variable", "type", "default_value", "directives"],
    ),
    (Kind::Variable, &["name"]),
    (Kind::SelectionSet, &["selections"]),
    (
        Kind::Field,
        &["alias", "name", "arguments", "directives", "selection_set"],
    ),
    (Kind::Argument, &["name", "value"]),
    (Kind::FragmentSpread, &["name", "directives"]),
    (
        Kind::InlineFragment,
        &["type_condition", "directives", "selection_set"],
    ),
    (
        Kind::FragmentDefinition,
        &[
            "name",
            "variable_definitions",
            "type_condition",
            "directives",
            "selection_set",
        ],
    ),
    (Kind::IntValue, &[]),
    (Kind::FloatValue, &[]),
    (Kind::StringValue, &[]),
    (Kind::BooleanValue, &[]),
    (Kind::NullValue, &[]),
    (Kind::EnumValue, &[]),
    (Kind::ListValue, &["values"]),
    (Kind::ObjectValue, &["fields"]),
    (Kind::ObjectField, &["name", "value"]),
    (Kind::Directive, &["name", "arguments"]),
    (Kind::NamedType, &["name"]),
    (Kind::ListType, &["type"]),
    (Kind::NonNullType, &["type"]),
    (
        Kind::SchemaDefinition,
        &["description", "directives", "operation_types"],
    ),
    (Kind::OperationTypeDefinition, &["type"]),
    (Kind::ScalarTypeDefinition, &["description", "name", "directives"]),
    (
        Kind::ObjectTypeDefinition,
        &["description", "name", "interfaces", "directives", "fields"],
    ),
    (
        Kind::FieldDefinition,
        &["description", "name", "arguments", "type", "directives"],
    ),
    (
        Kind::InputValueDefinition,
        &["description", "name", "type", "default_value", "directives"],
    ),
    (
        Kind::InterfaceTypeDefinition,
        &["description", "name", "interfaces", "directives", "fields"],
    ),
    (
        Kind::UnionTypeDefinition,
        &["description", "name", "directives", "types"],
    ),
    (
        Kind::EnumTypeDefinition,
        &["description", "name", "directives", "values"],
    ),
    (Kind::EnumValueDefinition, &["description", "name", "directives"]),
    (
        Kind::InputObjectTypeDefinition,
        &["description", "name", "directives", "fields"],
    ),
    (
        Kind::DirectiveDefinition,
        &["description", "name", "arguments", "locations"],
    ),
    (Kind::SchemaExtension, &["directives", "operation_types"]),
    (Kind::ScalarTypeExtension, &["name", "directives"]),
    (
        Kind::ObjectTypeExtension,
        &["name", "interfaces", "directives", "fields"],
    ),
    (
        Kind::InterfaceTypeExtension,
        &["name", "interfaces", "directives", "fields"],
    ),
    (Kind::UnionTypeExtension, &["name", "directives", "types"]),
    (Kind::EnumTypeExtension, &["name", "directives", "values"]),
    (Kind::InputObjectTypeExtension, &["name", "directives", "fields"]),
];

/// Verifies that there are exactly 43 distinct node kinds.
#[test]
fn has_43_kinds() {
    assert_eq!(Kind::ALL.len(), 43);
    let distinct: HashSet<Kind> = Kind::ALL.iter().copied().collect();
    assert_eq!(distinct.len(), 43);
}

/// Verifies the child-key table for every kind.
#[test]
fn child_key_table_covers_every_kind() {
    assert_eq!(CHILD_KEYS.len(), Kind::ALL.len());
    for (kind, keys) in CHILD_KEYS {
        assert_eq!(kind.child_keys(), *keys, "child keys of {kind}");
    }
}

/// Verifies that kinds display as their type names.
#[test]
fn kind_names() {
    assert_eq!(Kind::OperationDefinition.as_str(), "OperationDefinition");
    assert_eq!(Kind::NonNullType.to_string(), "NonNullType");
    for kind in Kind::ALL {
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

/// Verifies that every child a node reports can be read back by key, and
/// that unknown keys read as absent.
#[test]
fn children_are_readable_by_key() {
    let doc = parse(
        "query Q($v: Int = 1) @d { a: f(x: [1]) { ...F ... on T { g } } }",
        ParseOptions::default(),
    )
    .unwrap();
    let node = Node::from(doc);
    assert!(node.child("definitions").is_some());
    assert!(node.child("nonsense").is_none());
    assert!(Node::from(Name::new("n")).child("value").is_none());
}

/// Verifies the JSON shape of a serialized tree.
#[test]
fn serializes_to_json() {
    let doc = parse("{ a }", ParseOptions::default().no_location(true)).unwrap();
    assert_eq!(
        serde_json::to_value(Node::from(doc)).unwrap(),
        serde_json::json!({
            "kind": "Document",
            "definitions": [{
                "kind": "OperationDefinition",
                "operation": "query",
                "name": null,
                "variableDefinitions": [],
                "directives": [],
                "selectionSet": {
                    "selections": [{
                        "kind": "Field",
                        "alias": null,
                        "name": { "value": "a" },
                        "arguments": [],
                        "directives": [],
                        "selectionSet": null,
                    }],
                },
            }],
        }),
    );
}

/// Verifies that serialized locations carry only their offsets.
#[test]
fn serializes_locations_as_offsets() {
    let doc = parse("{ a }", ParseOptions::default()).unwrap();
    let json = serde_json::to_value(&doc.loc).unwrap();
    assert_eq!(json, serde_json::json!({ "start": 0, "end": 5 }));
}
