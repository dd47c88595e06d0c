//! Tests for `print`: canonical formatting of documents and of
//! individual nodes.

use crate::ast::Definition;
use crate::parse;
use crate::parse_type;
use crate::parse_value;
use crate::print;
use crate::print_string;
use crate::tests::utils::parse_ok;
use crate::ParseOptions;
use indoc::indoc;

/// Parses and prints `source`.
fn reprint(source: &str) -> String {
    print(parse_ok(source))
}

// =============================================================================
// Executable documents
// =============================================================================

/// Verifies that an anonymous query with nothing but a selection set
/// prints in shorthand form.
#[test]
fn prints_query_shorthand() {
    assert_eq!(reprint("query { id, name }"), "{\n  id\n  name\n}");
    assert_eq!(reprint("{ id, name }"), "{\n  id\n  name\n}");
}

/// Verifies that anything beyond the selection set keeps the `query`
/// keyword.
#[test]
fn prints_query_keyword_when_needed() {
    assert_eq!(reprint("query Q { a }"), "query Q {\n  a\n}");
    assert_eq!(reprint("query @d { a }"), "query @d {\n  a\n}");
    assert_eq!(reprint("query ($v: Int) { a }"), "query ($v: Int) {\n  a\n}");
    assert_eq!(
        reprint("query ($foo: TestType) @testDirective { id, name }"),
        "query ($foo: TestType) @testDirective {\n  id\n  name\n}",
    );
}

/// Verifies that mutations and subscriptions always print their keyword.
#[test]
fn prints_mutation_and_subscription() {
    assert_eq!(reprint("mutation { id, name }"), "mutation {\n  id\n  name\n}");
    assert_eq!(
        reprint("subscription S($v: ID!) { onEvent(id: $v) { id } }"),
        "subscription S($v: ID!) {\n  onEvent(id: $v) {\n    id\n  }\n}",
    );
}

/// Verifies variable definitions with default values and directives.
#[test]
fn prints_variable_definitions() {
    assert_eq!(
        reprint(
            "query ($foo: TestType = {a: 123} @testDirective(if: true) @test) { id }",
        ),
        "query ($foo: TestType = {a: 123} @testDirective(if: true) @test) {\n  id\n}",
    );
}

/// Verifies aliases, arguments, directives, and nested selections.
#[test]
fn prints_fields() {
    assert_eq!(
        reprint("{ pic: profilePic(size: 64, crop: true) @include(if: $big) { url } }"),
        indoc! {"
            {
              pic: profilePic(size: 64, crop: true) @include(if: $big) {
                url
              }
            }"},
    );
}

/// Verifies that arguments stay on one line while the field fits in 80
/// columns.
#[test]
fn keeps_short_arguments_on_one_line() {
    assert_eq!(
        reprint("{trip(wheelchair:false arriveBy:false){dateTime}}"),
        indoc! {"
            {
              trip(wheelchair: false, arriveBy: false) {
                dateTime
              }
            }"},
    );
}

/// Verifies that arguments go one per line once the field exceeds 80
/// columns.
#[test]
fn wraps_long_arguments() {
    assert_eq!(
        reprint(
            "{trip(wheelchair:false arriveBy:false includePlannedCancellations:true \
             transitDistanceReluctance:2000){dateTime}}",
        ),
        indoc! {"
            {
              trip(
                wheelchair: false
                arriveBy: false
                includePlannedCancellations: true
                transitDistanceReluctance: 2000
              ) {
                dateTime
              }
            }"},
    );
}

/// Verifies fragment spreads, inline fragments, and fragment
/// definitions.
#[test]
fn prints_fragments() {
    assert_eq!(
        reprint(
            "{ ...F @d ... on User @d2 { id } ... @include(if: $x) { a } ... { b } } \
             fragment F on User { name }",
        ),
        indoc! {"
            {
              ...F @d
              ... on User @d2 {
                id
              }
              ... @include(if: $x) {
                a
              }
              ... {
                b
              }
            }

            fragment F on User {
              name
            }"},
    );
}

/// Verifies legacy fragment variables.
#[test]
fn prints_fragment_variables() {
    let doc = parse(
        "fragment Foo($a: ComplexType, $b: Boolean = false) on TestType { id }",
        ParseOptions::default().allow_legacy_fragment_variables(true),
    )
    .unwrap();
    assert_eq!(
        print(doc),
        "fragment Foo($a: ComplexType, $b: Boolean = false) on TestType {\n  id\n}",
    );
}

/// Verifies that comments, commas, and extra whitespace are dropped.
#[test]
fn drops_ignored_tokens() {
    assert_eq!(
        reprint("# comment\n{\n\n  a,,, # trailing\n  b\n}\n"),
        "{\n  a\n  b\n}",
    );
}

// =============================================================================
// Values
// =============================================================================

/// Verifies every kind of value literal.
#[test]
fn prints_values() {
    let value = parse_value(
        "{a: [1, -2.5e3, \"s\", true, false, null, ENUM, $v], b: {}, c: []}",
        ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(
        print(value),
        "{a: [1, -2.5e3, \"s\", true, false, null, ENUM, $v], b: {}, c: []}",
    );
}

/// Verifies that strings are re-escaped.
#[test]
fn prints_escaped_strings() {
    assert_eq!(
        reprint(r#"{ f(a: "\u0007 \" \\ \/ \n é") }"#),
        "{\n  f(a: \"\\u0007 \\\" \\\\ / \\n é\")\n}",
    );
}

/// Verifies `print_string` escapes.
#[test]
fn print_string_escapes() {
    assert_eq!(print_string(""), "\"\"");
    assert_eq!(print_string("plain"), "\"plain\"");
    assert_eq!(print_string("\"\\"), "\"\\\"\\\\\"");
    assert_eq!(
        print_string("\u{8}\t\n\u{C}\r"),
        "\"\\b\\t\\n\\f\\r\"",
    );
    assert_eq!(print_string("\u{0}\u{1F}\u{7F}\u{9F}"), "\"\\u0000\\u001F\\u007F\\u009F\"");
    assert_eq!(print_string("\u{A0}é\u{1F600}"), "\"\u{A0}é\u{1F600}\"");
}

/// Verifies that block strings keep their form, re-indented to their
/// position.
#[test]
fn prints_block_strings() {
    assert_eq!(
        reprint("{ f(a: \"\"\"\n    multi\n      line\n  \"\"\") }"),
        "{\n  f(a: \"\"\"\n  multi\n    line\n  \"\"\")\n}",
    );
    assert_eq!(reprint("{ f(a: \"\"\"one\"\"\") }"), "{\n  f(a: \"\"\"one\"\"\")\n}");
}

// =============================================================================
// Types
// =============================================================================

/// Verifies type references printed on their own.
#[test]
fn prints_types() {
    for source in ["Int", "[Int]", "Int!", "[Int!]!", "[[String]!]"] {
        let ty = parse_type(source, ParseOptions::default()).unwrap();
        assert_eq!(print(ty), source);
    }
}

// =============================================================================
// Type system
// =============================================================================

/// Verifies object type definitions with descriptions, interfaces,
/// arguments, default values, and directives.
#[test]
fn prints_object_type_definition() {
    let source = indoc! {r#"
        """
        Desc
        """
        type Foo implements Bar & Baz @d {
          "field desc"
          one: Type
          two(argument: InputType!): Type
          three(argument: InputType, other: String): Int
          four(argument: String = "string"): String
          five(argument: [String] = ["string", "string"]): String @deprecated
        }"#};
    assert_eq!(
        reprint(source),
        indoc! {r#"
            """Desc"""
            type Foo implements Bar & Baz @d {
              "field desc"
              one: Type
              two(argument: InputType!): Type
              three(argument: InputType, other: String): Int
              four(argument: String = "string"): String
              five(argument: [String] = ["string", "string"]): String @deprecated
            }"#},
    );
}

/// Verifies that argument definitions go one per line when any of them
/// spans several lines.
#[test]
fn wraps_described_argument_definitions() {
    assert_eq!(
        reprint("type T { f(\"Arg desc\" a: Int, b: String): Int }"),
        indoc! {r#"
            type T {
              f(
                "Arg desc"
                a: Int
                b: String
              ): Int
            }"#},
    );
}

/// Verifies the remaining type definitions.
#[test]
fn prints_type_definitions() {
    let source = indoc! {r#"
        schema @d { query: Q mutation: M }
        scalar Date @specifiedBy(url: "https://example.com")
        interface Node implements Entity { id: ID! }
        union U @d = | A | B
        enum E { A B @deprecated(reason: "no") }
        input I { a: Int = 1, b: [String!]! @d }
        directive @cached(ttl: Int = 60) repeatable on FIELD | QUERY
    "#};
    assert_eq!(
        reprint(source),
        indoc! {r#"
            schema @d {
              query: Q
              mutation: M
            }

            scalar Date @specifiedBy(url: "https://example.com")

            interface Node implements Entity {
              id: ID!
            }

            union U @d = A | B

            enum E {
              A
              B @deprecated(reason: "no")
            }

            input I {
              a: Int = 1
              b: [String!]! @d
            }

            directive @cached(ttl: Int = 60) repeatable on FIELD | QUERY"#},
    );
}

/// Verifies bodiless definitions.
#[test]
fn prints_bodiless_definitions() {
    assert_eq!(
        reprint("type T interface I union U enum E input In"),
        "type T\n\ninterface I\n\nunion U\n\nenum E\n\ninput In",
    );
}

/// Verifies every extension form.
#[test]
fn prints_type_system_extensions() {
    let source = indoc! {"
        extend schema @d
        extend schema { subscription: S }
        extend scalar S @d
        extend type T implements I
        extend interface I @d { f: Int }
        extend union U = C
        extend enum E { C }
        extend input In @d
    "};
    assert_eq!(
        reprint(source),
        indoc! {"
            extend schema @d

            extend schema {
              subscription: S
            }

            extend scalar S @d

            extend type T implements I

            extend interface I @d {
              f: Int
            }

            extend union U = C

            extend enum E {
              C
            }

            extend input In @d"},
    );
}

/// Verifies that any node, not just a document, can be printed.
#[test]
fn prints_individual_nodes() {
    let doc = parse_ok("type T { f(a: Int = 1): [T!] } { a { b } }");
    let Definition::ObjectTypeDefinition(object) = &doc.definitions[0] else {
        panic!("expected an object type definition");
    };
    assert_eq!(print(&object.fields[0]), "f(a: Int = 1): [T!]");
    assert_eq!(print(&object.fields[0].arguments[0]), "a: Int = 1");
    assert_eq!(print(&object.name), "T");

    let Definition::OperationDefinition(op) = &doc.definitions[1] else {
        panic!("expected an operation");
    };
    assert_eq!(print(&op.selection_set), "{\n  a {\n    b\n  }\n}");
    assert_eq!(print(&op.selection_set.selections[0]), "a {\n  b\n}");
}
