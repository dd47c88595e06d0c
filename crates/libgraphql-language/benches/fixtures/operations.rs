use std::fmt::Write;

/// A query whose selection sets nest `depth` levels deep.
///
/// Levels alternate between aliased fields with arguments and inline
/// fragments, so that every level exercises a different printer path.
/// The depth must stay within the parser's nesting limit.
pub fn nested_query(depth: usize) -> String {
    let mut out = String::from("query Nested($first: Int = 10) ");
    for level in 0..depth {
        if level % 2 == 0 {
            write!(out, "{{ id l{level}: child(first: $first, level: {level}) ").unwrap();
        } else {
            write!(out, "{{ __typename ... on Node @include(if: true) ").unwrap();
        }
    }
    out.push_str("{ name }");
    out.push_str(&" }".repeat(depth));
    out
}

/// `count` operations sharing one fragment, each taking variables with
/// defaults, passing object and list arguments, and carrying a block
/// string argument.
pub fn operation_set(count: usize) -> String {
    let mut out = String::with_capacity(count * 260);
    out.push_str("fragment NodeFields on Node { id ... on Named { name } }\n\n");
    for i in 0..count {
        writeln!(
            out,
            "query Operation{i}($id: ID!, $tags: [String!] = [\"a\", \"b\"]) @cached(ttl: {i}) {{",
        )
        .unwrap();
        writeln!(
            out,
            "  node(id: $id, filter: {{ tags: $tags, limit: {i}, score: 0.{i} }}) {{",
        )
        .unwrap();
        writeln!(out, "    ...NodeFields").unwrap();
        writeln!(out, "    note(text: \"\"\"\n      Operation {i}\n        indented\n    \"\"\")").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}
