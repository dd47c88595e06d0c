use std::fmt::Write;

/// Generates a schema with `count` object types, each carrying a
/// description, a handful of scalar and list fields (some with
/// arguments), plus one enum and one input type per ten objects.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 220);
    for i in 0..count {
        writeln!(out, "\"\"\"\nObject number {i}.\n\"\"\"").unwrap();
        writeln!(out, "type Object{i} implements Node {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  name: String @deprecated(reason: \"old\")").unwrap();
        writeln!(out, "  tags(first: Int = 10, after: String): [String!]!").unwrap();
        writeln!(out, "  next: Object{}", (i + 1) % count).unwrap();
        writeln!(out, "}}\n").unwrap();
        if i % 10 == 0 {
            writeln!(out, "enum Kind{i} {{ A B C D }}\n").unwrap();
            writeln!(
                out,
                "input Filter{i} {{ kind: Kind{i} = A, limit: Int! = 20, ids: [ID!] }}\n",
            )
            .unwrap();
        }
    }
    out
}
