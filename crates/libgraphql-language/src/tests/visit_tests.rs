//! Tests for `visit`: traversal order, context, flow control, edits,
//! structural sharing, custom key tables, and errors.

use crate::ast::Definition;
use crate::ast::Field;
use crate::ast::IntValue;
use crate::ast::Kind;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::print;
use crate::tests::utils::parse_ok;
use crate::visitor::visit;
use crate::visitor::visit_with_key_table;
use crate::visitor::PathSegment;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;
use crate::visitor::VisitorFns;
use crate::GraphQLError;
use crate::GraphQLErrorKind;
use indexmap::IndexMap;
use std::sync::Arc;

/// Records every callback as `(event, kind, name-if-any)`.
#[derive(Default)]
struct Recorder {
    events: Vec<(&'static str, Kind, Option<String>)>,
}

fn name_of(node: &Node) -> Option<String> {
    match node {
        Node::Name(name) => Some(name.value.clone()),
        _ => None,
    }
}

impl Visitor for Recorder {
    fn enter(
        &mut self,
        node: &Node,
        _context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        self.events.push(("enter", node.kind(), name_of(node)));
        Ok(VisitAction::Continue)
    }

    fn leave(
        &mut self,
        node: &Node,
        _context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        self.events.push(("leave", node.kind(), name_of(node)));
        Ok(VisitAction::Continue)
    }
}

/// Names entered during a traversal of `root`, in order, with
/// `on_field` deciding what to do on entering each field.
fn entered_names(
    root: impl Into<Node>,
    mut on_field: impl FnMut(&Field) -> VisitAction,
) -> (Vec<String>, Result<Option<Node>, VisitError>) {
    let mut names = Vec::new();
    let mut visitor = VisitorFns::new()
        .on_enter(Kind::Name, |node, _| {
            names.extend(name_of(node));
            Ok(VisitAction::Continue)
        })
        .on_enter(Kind::Field, |node, _| {
            Ok(match node {
                Node::Field(field) => on_field(field),
                _ => VisitAction::Continue,
            })
        });
    let result = visit(root, &mut visitor);
    drop(visitor);
    (names, result)
}

fn field_named(node: &Field, name: &str) -> bool {
    node.name.value == name
}

fn new_name(value: &str) -> Node {
    Node::from(Name {
        value: value.to_string(),
        loc: None,
    })
}

// =============================================================================
// Order and context
// =============================================================================

/// Verifies depth-first enter/leave order, with absent and empty children
/// skipped.
#[test]
fn visits_in_depth_first_order() {
    let mut recorder = Recorder::default();
    visit(parse_ok("{ a }"), &mut recorder).unwrap();
    let a = Some("a".to_string());
    assert_eq!(
        recorder.events,
        vec![
            ("enter", Kind::Document, None),
            ("enter", Kind::OperationDefinition, None),
            ("enter", Kind::SelectionSet, None),
            ("enter", Kind::Field, None),
            ("enter", Kind::Name, a.clone()),
            ("leave", Kind::Name, a),
            ("leave", Kind::Field, None),
            ("leave", Kind::SelectionSet, None),
            ("leave", Kind::OperationDefinition, None),
            ("leave", Kind::Document, None),
        ],
    );
}

/// Verifies that children are visited in child-key order: alias before
/// name, arguments before directives, and so on.
#[test]
fn visits_children_in_key_order() {
    let (names, _) = entered_names(
        parse_ok("query Q($v: T) @opDir { al: f(arg: $v) @fieldDir { sub } }"),
        |_| VisitAction::Continue,
    );
    assert_eq!(
        names,
        vec!["Q", "v", "T", "opDir", "al", "f", "arg", "v", "fieldDir", "sub"],
    );
}

/// Verifies key, path, parent, and ancestors reported to callbacks.
#[test]
fn reports_context() {
    let mut seen = Vec::new();
    let mut visitor = VisitorFns::new().on_enter(Kind::Name, |node, context| {
        seen.push((
            name_of(node),
            context.key,
            context.path.to_vec(),
            context.parent.map(Node::kind),
            context.ancestors.iter().map(Node::kind).collect::<Vec<_>>(),
            context.field_key(),
            context.index(),
        ));
        Ok(VisitAction::Continue)
    });
    visit(parse_ok("{ a }"), &mut visitor).unwrap();
    drop(visitor);

    assert_eq!(
        seen,
        vec![(
            Some("a".to_string()),
            Some(PathSegment::Key("name")),
            vec![
                PathSegment::Key("definitions"),
                PathSegment::Index(0),
                PathSegment::Key("selection_set"),
                PathSegment::Key("selections"),
                PathSegment::Index(0),
                PathSegment::Key("name"),
            ],
            Some(Kind::Field),
            vec![Kind::Document, Kind::OperationDefinition, Kind::SelectionSet],
            Some("name"),
            None,
        )],
    );
}

/// Verifies that list elements report their index and the key of their
/// list.
#[test]
fn reports_list_element_context() {
    let mut seen = Vec::new();
    let mut visitor = VisitorFns::new().on_leave(Kind::Field, |_, context| {
        seen.push((context.key, context.field_key(), context.index()));
        Ok(VisitAction::Continue)
    });
    visit(parse_ok("{ a b }"), &mut visitor).unwrap();
    drop(visitor);
    assert_eq!(
        seen,
        vec![
            (Some(PathSegment::Index(0)), Some("selections"), Some(0)),
            (Some(PathSegment::Index(1)), Some("selections"), Some(1)),
        ],
    );
}

/// Verifies that the root has no key, parent, or path.
#[test]
fn root_has_empty_context() {
    let mut checked = false;
    let mut visitor = VisitorFns::new().on_enter(Kind::Document, |_, context| {
        assert_eq!(context.key, None);
        assert!(context.parent.is_none());
        assert!(context.path.is_empty());
        assert!(context.ancestors.is_empty());
        checked = true;
        Ok(VisitAction::Continue)
    });
    visit(parse_ok("{ a }"), &mut visitor).unwrap();
    drop(visitor);
    assert!(checked);
}

/// Verifies that kind-specific callbacks take precedence over `*_any`
/// callbacks for their kind only.
#[test]
fn kind_callbacks_override_any_callbacks() {
    let mut specific = 0;
    let mut any = Vec::new();
    let mut visitor = VisitorFns::new()
        .on_enter(Kind::Name, |_, _| {
            specific += 1;
            Ok(VisitAction::Continue)
        })
        .on_enter_any(|node, _| {
            any.push(node.kind());
            Ok(VisitAction::Continue)
        });
    visit(parse_ok("{ a b }"), &mut visitor).unwrap();
    drop(visitor);
    assert_eq!(specific, 2);
    assert!(!any.contains(&Kind::Name));
    assert_eq!(any.iter().filter(|kind| **kind == Kind::Field).count(), 2);
}

// =============================================================================
// Flow control
// =============================================================================

/// Verifies that `Skip` on enter skips the subtree and its `leave`.
#[test]
fn skip_skips_subtree() {
    let mut left = Vec::new();
    let mut visitor = VisitorFns::new()
        .on_enter(Kind::Field, |node, _| {
            Ok(match node {
                Node::Field(field) if field_named(field, "b") => VisitAction::Skip,
                _ => VisitAction::Continue,
            })
        })
        .on_leave(Kind::Field, |node, _| {
            if let Node::Field(field) = node {
                left.push(field.name.value.clone());
            }
            Ok(VisitAction::Continue)
        });
    visit(parse_ok("{ a { x } b { y } c }"), &mut visitor).unwrap();
    drop(visitor);
    assert_eq!(left, vec!["x", "a", "c"]);

    let (names, _) = entered_names(parse_ok("{ a { x } b { y } c }"), |field| {
        if field_named(field, "b") {
            VisitAction::Skip
        } else {
            VisitAction::Continue
        }
    });
    assert_eq!(names, vec!["a", "x", "c"]);
}

/// Verifies that `Break` stops the traversal at once.
#[test]
fn break_stops_traversal() {
    let root = Node::from(parse_ok("{ a { x } b { y } c }"));
    let (names, result) = entered_names(root.clone(), |field| {
        if field_named(field, "b") {
            VisitAction::Break
        } else {
            VisitAction::Continue
        }
    });
    assert_eq!(names, vec!["a", "x"]);
    assert!(result.unwrap().unwrap().ptr_eq(&root));
}

/// Verifies that edits recorded before a `Break` are kept.
#[test]
fn break_keeps_earlier_edits() {
    let (_, result) = entered_names(parse_ok("{ a b c }"), |field| {
        match field.name.value.as_str() {
            "a" => VisitAction::Remove,
            "b" => VisitAction::Break,
            _ => VisitAction::Continue,
        }
    });
    assert_eq!(print(result.unwrap().unwrap()), "{\n  b\n  c\n}");
}

/// Verifies that `Break` on leave also keeps edits made below.
#[test]
fn break_on_leave_keeps_edits() {
    let mut visitor = VisitorFns::new()
        .on_enter(Kind::Field, |node, _| {
            Ok(match node {
                Node::Field(field) if field_named(field, "x") => VisitAction::Remove,
                _ => VisitAction::Continue,
            })
        })
        .on_leave(Kind::SelectionSet, |_, context| {
            Ok(if context.path.len() > 3 {
                VisitAction::Break
            } else {
                VisitAction::Continue
            })
        });
    let result = visit(parse_ok("{ a { x y } b }"), &mut visitor).unwrap().unwrap();
    drop(visitor);
    assert_eq!(print(result), "{\n  a {\n    y\n  }\n  b\n}");
}

// =============================================================================
// Edits
// =============================================================================

/// Verifies that removing a list element drops it from the result while
/// leaving the original tree untouched.
#[test]
fn remove_deletes_list_element() {
    let doc = parse_ok("{ a { x } b { y } c }");
    let original = print(&doc.definitions[0]);
    let (_, result) = entered_names(doc.clone(), |field| {
        if field_named(field, "b") {
            VisitAction::Remove
        } else {
            VisitAction::Continue
        }
    });
    assert_eq!(print(result.unwrap().unwrap()), "{\n  a {\n    x\n  }\n  c\n}");
    assert_eq!(print(&doc.definitions[0]), original);
}

/// Verifies that removal on leave works like removal on enter.
#[test]
fn remove_on_leave() {
    let mut visitor = VisitorFns::new().on_leave(Kind::Field, |node, _| {
        Ok(match node {
            Node::Field(field) if field.selection_set.is_none() => VisitAction::Remove,
            _ => VisitAction::Continue,
        })
    });
    let result = visit(parse_ok("{ a { x y { z } } b }"), &mut visitor).unwrap().unwrap();
    drop(visitor);
    // `y` keeps its selection set, now empty, and so is not removed.
    assert_eq!(print(result), "{\n  a {\n    y\n  }\n}");
}

/// Verifies that several edits in one list are all applied.
#[test]
fn applies_multiple_list_edits() {
    let (_, result) = entered_names(parse_ok("{ a b c d }"), |field| {
        match field.name.value.as_str() {
            "a" | "c" => VisitAction::Remove,
            "d" => VisitAction::Replace(Node::from(Field {
                alias: None,
                name: Arc::new(Name {
                    value: "renamed".to_string(),
                    loc: None,
                }),
                arguments: Vec::new(),
                directives: Vec::new(),
                selection_set: None,
                loc: None,
            })),
            _ => VisitAction::Continue,
        }
    });
    assert_eq!(print(result.unwrap().unwrap()), "{\n  b\n  renamed\n}");
}

/// Verifies that a replacement on enter is traversed in place of the
/// original.
#[test]
fn replacement_on_enter_is_traversed() {
    let replacement = {
        let doc = parse_ok("{ inner { deeper } }");
        let Definition::OperationDefinition(op) = &doc.definitions[0] else {
            panic!("expected an operation");
        };
        let Selection::Field(field) = &op.selection_set.selections[0] else {
            panic!("expected a field");
        };
        Arc::clone(field)
    };
    let (names, result) = entered_names(parse_ok("{ a b }"), |field| {
        if field_named(field, "a") {
            VisitAction::Replace(Node::from(&replacement))
        } else {
            VisitAction::Continue
        }
    });
    assert_eq!(names, vec!["inner", "deeper", "b"]);
    assert_eq!(
        print(result.unwrap().unwrap()),
        "{\n  inner {\n    deeper\n  }\n  b\n}",
    );
}

/// Verifies replacements on leave, including swapping one value kind for
/// another.
#[test]
fn replacement_on_leave() {
    let mut visitor = VisitorFns::new().on_leave(Kind::IntValue, |node, _| {
        let Node::IntValue(int) = node else {
            return Ok(VisitAction::Continue);
        };
        Ok(VisitAction::Replace(if int.value == "0" {
            Node::from(StringValue {
                value: "zero".to_string(),
                block: false,
                loc: None,
            })
        } else {
            Node::from(IntValue {
                value: format!("{}0", int.value),
                loc: None,
            })
        }))
    });
    let result = visit(parse_ok("{ f(a: 1, b: [0, 2]) }"), &mut visitor)
        .unwrap()
        .unwrap();
    drop(visitor);
    assert_eq!(print(result), "{\n  f(a: 10, b: [\"zero\", 20])\n}");
}

/// Verifies that names can be replaced wherever they appear.
#[test]
fn replaces_names() {
    let mut visitor = VisitorFns::new().on_enter(Kind::Name, |node, _| {
        Ok(match node {
            Node::Name(name) if name.value == "old" => VisitAction::Replace(new_name("new")),
            _ => VisitAction::Continue,
        })
    });
    let result = visit(
        parse_ok("query old($old: old) { old(old: $old) @old { ...old } }"),
        &mut visitor,
    )
    .unwrap()
    .unwrap();
    drop(visitor);
    assert_eq!(
        print(result),
        "query new($new: new) {\n  new(new: $new) @new {\n    ...new\n  }\n}",
    );
}

/// Verifies that removing an optional child clears it.
#[test]
fn removes_optional_child() {
    let mut visitor = VisitorFns::new().on_enter(Kind::Name, |_, context| {
        Ok(if context.key == Some(PathSegment::Key("alias")) {
            VisitAction::Remove
        } else {
            VisitAction::Continue
        })
    });
    let result = visit(parse_ok("{ x: a { y: b } }"), &mut visitor).unwrap().unwrap();
    drop(visitor);
    assert_eq!(print(result), "{\n  a {\n    b\n  }\n}");
}

/// Verifies that removing the root yields `None`.
#[test]
fn removing_root_yields_none() {
    let mut visitor = VisitorFns::new().on_enter(Kind::Document, |_, _| Ok(VisitAction::Remove));
    assert_eq!(visit(parse_ok("{ a }"), &mut visitor).unwrap(), None);

    let mut visitor = VisitorFns::new().on_leave(Kind::Document, |_, _| Ok(VisitAction::Remove));
    assert_eq!(visit(parse_ok("{ a }"), &mut visitor).unwrap(), None);
}

/// Verifies that replacing the root yields the replacement.
#[test]
fn replacing_root_yields_replacement() {
    let mut visitor =
        VisitorFns::new().on_leave(Kind::Name, |_, _| Ok(VisitAction::Replace(new_name("b"))));
    let result = visit(new_name("a"), &mut visitor).unwrap().unwrap();
    drop(visitor);
    assert_eq!(print(result), "b");
}

// =============================================================================
// Structural sharing
// =============================================================================

/// Verifies that a visit without edits returns the root itself.
#[test]
fn no_edits_returns_same_root() {
    let root = Node::from(parse_ok("{ a { b } }"));
    let mut recorder = Recorder::default();
    let result = visit(root.clone(), &mut recorder).unwrap().unwrap();
    assert!(result.ptr_eq(&root));
}

/// Verifies that only the path to an edit is rebuilt.
#[test]
fn shares_unedited_subtrees() {
    let doc = parse_ok("{ a { x } b { y z } } { c }");
    let (_, result) = entered_names(doc.clone(), |field| {
        if field_named(field, "y") {
            VisitAction::Remove
        } else {
            VisitAction::Continue
        }
    });
    let Some(Node::Document(edited)) = result.unwrap() else {
        panic!("expected a document");
    };

    // The untouched second operation is shared.
    assert!(Node::from(&edited.definitions[1]).ptr_eq(&Node::from(&doc.definitions[1])));

    let (Definition::OperationDefinition(old_op), Definition::OperationDefinition(new_op)) =
        (&doc.definitions[0], &edited.definitions[0])
    else {
        panic!("expected operations");
    };
    assert!(!Arc::ptr_eq(old_op, new_op));

    // `a` is a sibling of the edited `b` and is shared; `b` is rebuilt
    // but keeps sharing `z`.
    let old = &old_op.selection_set.selections;
    let new = &new_op.selection_set.selections;
    assert!(Node::from(&old[0]).ptr_eq(&Node::from(&new[0])));
    assert!(!Node::from(&old[1]).ptr_eq(&Node::from(&new[1])));
    let (Selection::Field(old_b), Selection::Field(new_b)) = (&old[1], &new[1]) else {
        panic!("expected fields");
    };
    let old_b_selections = &old_b.selection_set.as_ref().unwrap().selections;
    let new_b_selections = &new_b.selection_set.as_ref().unwrap().selections;
    assert_eq!(new_b_selections.len(), 1);
    assert!(Node::from(&old_b_selections[1]).ptr_eq(&Node::from(&new_b_selections[0])));
    assert!(Arc::ptr_eq(&old_b.name, &new_b.name));
}

// =============================================================================
// Key tables
// =============================================================================

/// Verifies that a custom key table limits and orders the walk.
#[test]
fn custom_key_table_limits_traversal() {
    let mut table: IndexMap<Kind, Vec<&'static str>> = IndexMap::new();
    table.insert(Kind::Document, vec!["definitions"]);
    table.insert(Kind::OperationDefinition, vec!["selection_set"]);
    table.insert(Kind::SelectionSet, vec!["selections"]);
    table.insert(Kind::Field, vec!["selection_set", "name"]);

    let mut recorder = Recorder::default();
    visit_with_key_table(
        parse_ok("query Q { a(x: 1) @d { b } }"),
        &mut recorder,
        &table,
    )
    .unwrap();
    let entered: Vec<(Kind, Option<String>)> = recorder
        .events
        .into_iter()
        .filter(|(event, _, _)| *event == "enter")
        .map(|(_, kind, name)| (kind, name))
        .collect();
    assert_eq!(
        entered,
        vec![
            (Kind::Document, None),
            (Kind::OperationDefinition, None),
            (Kind::SelectionSet, None),
            (Kind::Field, None),
            (Kind::SelectionSet, None),
            (Kind::Field, None),
            (Kind::Name, Some("b".to_string())),
            (Kind::Name, Some("a".to_string())),
        ],
    );
}

/// Verifies that a table naming keys a kind lacks is harmless.
#[test]
fn custom_key_table_ignores_unknown_keys() {
    let mut table: IndexMap<Kind, Vec<&'static str>> = IndexMap::new();
    table.insert(Kind::Document, vec!["definitions", "nonsense"]);
    let mut recorder = Recorder::default();
    visit_with_key_table(parse_ok("{ a }"), &mut recorder, &table).unwrap();
    assert_eq!(recorder.events.len(), 4);
}

// =============================================================================
// Errors
// =============================================================================

/// Verifies that removing a required child is an error.
#[test]
fn removing_required_child_fails() {
    let mut visitor = VisitorFns::new().on_enter(Kind::Name, |_, _| Ok(VisitAction::Remove));
    let error = visit(parse_ok("{ a }"), &mut visitor).unwrap_err();
    assert_eq!(
        error,
        VisitError::RequiredChildRemoved {
            parent: Kind::Field,
            key: "name",
        },
    );
}

/// Verifies that a replacement of the wrong kind is an error.
#[test]
fn replacing_with_wrong_kind_fails() {
    let mut visitor = VisitorFns::new()
        .on_enter(Kind::SelectionSet, |_, _| Ok(VisitAction::Replace(new_name("oops"))));
    let error = visit(parse_ok("{ a }"), &mut visitor).unwrap_err();
    assert_eq!(
        error,
        VisitError::InvalidReplacement {
            parent: Kind::OperationDefinition,
            key: "selection_set",
            found: Kind::Name,
        },
    );
}

/// Verifies that a callback error aborts the traversal.
#[test]
fn callback_error_aborts() {
    let mut after_error = 0;
    let mut visitor = VisitorFns::new()
        .on_enter(Kind::Field, |node, _| match node {
            Node::Field(field) if field_named(field, "bad") => Err(GraphQLError::new(
                "Field `bad` is not allowed.",
                GraphQLErrorKind::Other,
            )
            .with_nodes([node.clone()])),
            _ => Ok(VisitAction::Continue),
        })
        .on_leave(Kind::Document, |_, _| {
            after_error += 1;
            Ok(VisitAction::Continue)
        });
    let error = visit(parse_ok("{ ok bad }"), &mut visitor).unwrap_err();
    drop(visitor);
    assert_eq!(after_error, 0);
    let VisitError::Callback(error) = error else {
        panic!("expected a callback error");
    };
    assert_eq!(
        error.format_oneline(),
        "GraphQL request:1:6: Field `bad` is not allowed.",
    );
}

// =============================================================================
// Deep trees
// =============================================================================

/// `{ f { f { ... { f } ... } } }`, `depth` fields deep, built directly.
fn deep_selection_set(depth: usize) -> Arc<SelectionSet> {
    let mut selection_set: Option<Arc<SelectionSet>> = None;
    for _ in 0..depth {
        let field = Field {
            alias: None,
            name: Arc::new(Name {
                value: "f".to_string(),
                loc: None,
            }),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection_set: selection_set.take(),
            loc: None,
        };
        selection_set = Some(Arc::new(SelectionSet {
            selections: vec![Selection::from(field)],
            loc: None,
        }));
    }
    selection_set.unwrap()
}

/// Verifies that traversal depth is not bounded by the call stack: a
/// tree many thousands of levels deep is visited on a thread with a
/// small stack.
#[test]
fn visits_deep_trees_without_recursion() {
    const DEPTH: usize = 20_000;

    // Building and dropping the tree recurses, so it gets a large stack.
    let builder = std::thread::Builder::new().stack_size(256 << 20);
    let handle = builder
        .spawn(|| {
            let root = deep_selection_set(DEPTH);
            let count = std::thread::scope(|scope| {
                std::thread::Builder::new()
                    .stack_size(256 << 10)
                    .spawn_scoped(scope, || {
                        let mut fields = 0;
                        let mut max_path = 0;
                        let mut visitor = VisitorFns::new().on_leave(Kind::Field, |_, context| {
                            fields += 1;
                            max_path = max_path.max(context.path.len());
                            Ok(VisitAction::Continue)
                        });
                        let result = visit(&root, &mut visitor).unwrap().unwrap();
                        drop(visitor);
                        assert!(result.ptr_eq(&Node::from(&root)));
                        (fields, max_path)
                    })
                    .unwrap()
                    .join()
                    .unwrap()
            });
            drop(root);
            count
        })
        .unwrap();
    let (fields, max_path) = handle.join().unwrap();
    assert_eq!(fields, DEPTH);
    assert_eq!(max_path, DEPTH * 3 - 1);
}
