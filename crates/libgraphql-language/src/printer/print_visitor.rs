use crate::ast::Node;
use crate::block_string::print_block_string;
use crate::printer::print_string;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;
use crate::GraphQLError;
use indexmap::IndexMap;

/// Field arguments are wrapped one per line once the single-line form of
/// the field (alias, name and arguments) is longer than this.
const MAX_LINE_LENGTH: usize = 80;

/// The printed form of one child key of a node.
enum Printed {
    One(String),
    Many(Vec<String>),
}

/// Printed children of the node being left, by child key.
#[derive(Default)]
struct PrintedChildren(IndexMap<&'static str, Printed>);

impl PrintedChildren {
    /// The printed single child under `key`, or `""` if absent.
    fn one(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(Printed::One(text)) => text,
            _ => "",
        }
    }

    /// The printed list under `key`, or `&[]` if empty.
    fn many(&self, key: &str) -> &[String] {
        match self.0.get(key) {
            Some(Printed::Many(texts)) => texts,
            _ => &[],
        }
    }

    fn add(&mut self, key: &'static str, is_list_item: bool, text: String) {
        if !is_list_item {
            self.0.insert(key, Printed::One(text));
            return;
        }
        match self.0.entry(key).or_insert_with(|| Printed::Many(Vec::new())) {
            Printed::Many(texts) => texts.push(text),
            slot @ Printed::One(_) => *slot = Printed::Many(vec![text]),
        }
    }
}

/// Renders a tree bottom-up: each node's text is built on `leave` from
/// the already-printed text of its children.
#[derive(Default)]
pub(crate) struct PrintVisitor {
    /// One entry per node currently entered but not yet left.
    frames: Vec<PrintedChildren>,
    output: String,
}

impl PrintVisitor {
    pub(crate) fn into_output(self) -> String {
        self.output
    }
}

impl Visitor for PrintVisitor {
    fn enter(
        &mut self,
        _node: &Node,
        _context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        self.frames.push(PrintedChildren::default());
        Ok(VisitAction::Continue)
    }

    fn leave(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        let children = self.frames.pop().unwrap_or_default();
        let text = print_node(node, &children);
        match (self.frames.last_mut(), context.field_key()) {
            (Some(parent), Some(key)) => parent.add(key, context.index().is_some(), text),
            _ => self.output = text,
        }
        Ok(VisitAction::Continue)
    }
}

fn print_node(node: &Node, c: &PrintedChildren) -> String {
    match node {
        Node::Name(name) => name.value.clone(),
        Node::Variable(_) => format!("${}", c.one("name")),

        // Document
        Node::Document(_) => join(c.many("definitions"), "\n\n"),
        Node::OperationDefinition(operation) => {
            let variable_definitions =
                wrap("(", &join(c.many("variable_definitions"), ", "), ")");
            let prefix = join(
                [
                    operation.operation.as_str(),
                    &join([c.one("name"), &variable_definitions], ""),
                    &join(c.many("directives"), " "),
                ],
                " ",
            );
            // An anonymous query with no variables or directives prints
            // in the shorthand form.
            if prefix == "query" {
                c.one("selection_set").to_string()
            } else {
                format!("{prefix} {}", c.one("selection_set"))
            }
        },
        Node::VariableDefinition(_) => format!(
            "{}: {}{}{}",
            c.one("variable"),
            c.one("type"),
            wrap(" = ", c.one("default_value"), ""),
            wrap(" ", &join(c.many("directives"), " "), ""),
        ),
        Node::SelectionSet(_) => block(c.many("selections")),
        Node::Field(_) => {
            let prefix = format!("{}{}", wrap("", c.one("alias"), ": "), c.one("name"));
            let mut args_line = format!(
                "{prefix}{}",
                wrap("(", &join(c.many("arguments"), ", "), ")"),
            );
            if args_line.chars().count() > MAX_LINE_LENGTH {
                args_line = format!(
                    "{prefix}{}",
                    wrap("(\n", &indent(&join(c.many("arguments"), "\n")), "\n)"),
                );
            }
            join(
                [
                    args_line.as_str(),
                    &join(c.many("directives"), " "),
                    c.one("selection_set"),
                ],
                " ",
            )
        },
        Node::Argument(_) | Node::ObjectField(_) => {
            format!("{}: {}", c.one("name"), c.one("value"))
        },

        // Fragments
        Node::FragmentSpread(_) => format!(
            "...{}{}",
            c.one("name"),
            wrap(" ", &join(c.many("directives"), " "), ""),
        ),
        Node::InlineFragment(_) => join(
            [
                "...",
                &wrap("on ", c.one("type_condition"), ""),
                &join(c.many("directives"), " "),
                c.one("selection_set"),
            ],
            " ",
        ),
        Node::FragmentDefinition(_) => format!(
            "fragment {}{} on {} {}{}",
            c.one("name"),
            wrap("(", &join(c.many("variable_definitions"), ", "), ")"),
            c.one("type_condition"),
            wrap("", &join(c.many("directives"), " "), " "),
            c.one("selection_set"),
        ),

        // Values
        Node::IntValue(value) => value.value.clone(),
        Node::FloatValue(value) => value.value.clone(),
        Node::StringValue(value) => print_string_value(&value.value, value.block),
        Node::BooleanValue(value) => value.value.to_string(),
        Node::NullValue(_) => "null".to_string(),
        Node::EnumValue(value) => value.value.clone(),
        Node::ListValue(_) => format!("[{}]", join(c.many("values"), ", ")),
        Node::ObjectValue(_) => format!("{{{}}}", join(c.many("fields"), ", ")),

        // Directives
        Node::Directive(_) => format!(
            "@{}{}",
            c.one("name"),
            wrap("(", &join(c.many("arguments"), ", "), ")"),
        ),

        // Types
        Node::NamedType(_) => c.one("name").to_string(),
        Node::ListType(_) => format!("[{}]", c.one("type")),
        Node::NonNullType(_) => format!("{}!", c.one("type")),

        // Type system definitions
        Node::SchemaDefinition(_) => with_description(
            c,
            join(
                [
                    "schema",
                    &join(c.many("directives"), " "),
                    &block(c.many("operation_types")),
                ],
                " ",
            ),
        ),
        Node::OperationTypeDefinition(definition) => {
            format!("{}: {}", definition.operation.as_str(), c.one("type"))
        },
        Node::ScalarTypeDefinition(_) => with_description(
            c,
            join(["scalar", c.one("name"), &join(c.many("directives"), " ")], " "),
        ),
        Node::ObjectTypeDefinition(_) => with_description(c, print_object_like("type", c)),
        Node::FieldDefinition(_) => with_description(
            c,
            format!(
                "{}{}: {}{}",
                c.one("name"),
                print_argument_definitions(c.many("arguments")),
                c.one("type"),
                wrap(" ", &join(c.many("directives"), " "), ""),
            ),
        ),
        Node::InputValueDefinition(_) => with_description(
            c,
            join(
                [
                    format!("{}: {}", c.one("name"), c.one("type")).as_str(),
                    &wrap("= ", c.one("default_value"), ""),
                    &join(c.many("directives"), " "),
                ],
                " ",
            ),
        ),
        Node::InterfaceTypeDefinition(_) => {
            with_description(c, print_object_like("interface", c))
        },
        Node::UnionTypeDefinition(_) => with_description(c, print_union("union", c)),
        Node::EnumTypeDefinition(_) => with_description(c, print_block_type("enum", "values", c)),
        Node::EnumValueDefinition(_) => with_description(
            c,
            join([c.one("name"), &join(c.many("directives"), " ")], " "),
        ),
        Node::InputObjectTypeDefinition(_) => {
            with_description(c, print_block_type("input", "fields", c))
        },
        Node::DirectiveDefinition(definition) => with_description(
            c,
            format!(
                "directive @{}{}{} on {}",
                c.one("name"),
                print_argument_definitions(c.many("arguments")),
                if definition.repeatable { " repeatable" } else { "" },
                join(c.many("locations"), " | "),
            ),
        ),

        // Type system extensions
        Node::SchemaExtension(_) => join(
            [
                "extend schema",
                &join(c.many("directives"), " "),
                &block(c.many("operation_types")),
            ],
            " ",
        ),
        Node::ScalarTypeExtension(_) => join(
            ["extend scalar", c.one("name"), &join(c.many("directives"), " ")],
            " ",
        ),
        Node::ObjectTypeExtension(_) => print_object_like("extend type", c),
        Node::InterfaceTypeExtension(_) => print_object_like("extend interface", c),
        Node::UnionTypeExtension(_) => print_union("extend union", c),
        Node::EnumTypeExtension(_) => print_block_type("extend enum", "values", c),
        Node::InputObjectTypeExtension(_) => print_block_type("extend input", "fields", c),
    }
}

fn print_string_value(value: &str, block: bool) -> String {
    if block {
        print_block_string(value, false)
    } else {
        print_string(value)
    }
}

/// `type`/`interface` definitions and extensions.
fn print_object_like(keyword: &str, c: &PrintedChildren) -> String {
    join(
        [
            keyword,
            c.one("name"),
            &wrap("implements ", &join(c.many("interfaces"), " & "), ""),
            &join(c.many("directives"), " "),
            &block(c.many("fields")),
        ],
        " ",
    )
}

/// `union` definitions and extensions.
fn print_union(keyword: &str, c: &PrintedChildren) -> String {
    join(
        [
            keyword,
            c.one("name"),
            &join(c.many("directives"), " "),
            &wrap("= ", &join(c.many("types"), " | "), ""),
        ],
        " ",
    )
}

/// `enum`/`input` definitions and extensions, whose members under
/// `members_key` print as a block.
fn print_block_type(keyword: &str, members_key: &str, c: &PrintedChildren) -> String {
    join(
        [
            keyword,
            c.one("name"),
            &join(c.many("directives"), " "),
            &block(c.many(members_key)),
        ],
        " ",
    )
}

/// Argument definitions go one per line if any of them spans several
/// lines (e.g. because it has a block-string description).
fn print_argument_definitions(arguments: &[String]) -> String {
    if arguments.iter().any(|argument| argument.contains('\n')) {
        wrap("(\n", &indent(&join(arguments, "\n")), "\n)")
    } else {
        wrap("(", &join(arguments, ", "), ")")
    }
}

fn with_description(c: &PrintedChildren, definition: String) -> String {
    format!("{}{definition}", wrap("", c.one("description"), "\n"))
}

/// Joins the non-empty `parts` with `separator`.
fn join<S: AsRef<str>>(parts: impl IntoIterator<Item = S>, separator: &str) -> String {
    let mut joined = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(separator);
        }
        joined.push_str(part);
    }
    joined
}

/// `start + text + end`, or `""` when `text` is empty.
fn wrap(start: &str, text: &str, end: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{start}{text}{end}")
    }
}

/// Indents every line of `text` by two spaces.
fn indent(text: &str) -> String {
    wrap("  ", &text.replace('\n', "\n  "), "")
}

/// `{`, the items one per line and indented, `}`; or `""` with no items.
fn block(items: &[String]) -> String {
    wrap("{\n", &indent(&join(items, "\n")), "\n}")
}
