use crate::ast::Child;
use crate::ast::Node;
use crate::visitor::ChildKeyTable;
use crate::visitor::DefaultChildKeys;
use crate::visitor::PathSegment;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;

/// Walks `root` depth-first, calling `visitor` on entry to and exit from
/// every node, and returns the resulting tree.
///
/// The returned tree is `root` itself when no callback asked for an edit.
/// Otherwise only the nodes on the path from the root to each edit are
/// rebuilt; every other subtree is shared with `root`. `Ok(None)` means
/// the root itself was removed.
///
/// Traversal uses an explicit heap-allocated stack, so arbitrarily deep
/// trees do not exhaust the call stack.
///
/// # Example
///
/// ```
/// use libgraphql_language::ast::Kind;
/// use libgraphql_language::ast::Node;
/// use libgraphql_language::parse;
/// use libgraphql_language::print;
/// use libgraphql_language::visitor::visit;
/// use libgraphql_language::visitor::VisitAction;
/// use libgraphql_language::visitor::VisitorFns;
/// use libgraphql_language::ParseOptions;
///
/// let doc = parse("{ user { name password } }", ParseOptions::default()).unwrap();
/// let mut strip_passwords = VisitorFns::new().on_enter(Kind::Field, |node, _| {
///     Ok(match node {
///         Node::Field(field) if field.name.value == "password" => VisitAction::Remove,
///         _ => VisitAction::Continue,
///     })
/// });
/// let stripped = visit(doc, &mut strip_passwords).unwrap().unwrap();
/// assert_eq!(print(stripped), "{\n  user {\n    name\n  }\n}");
/// ```
pub fn visit<V>(root: impl Into<Node>, visitor: &mut V) -> Result<Option<Node>, VisitError>
where
    V: Visitor + ?Sized,
{
    visit_with_key_table(root, visitor, &DefaultChildKeys)
}

/// Like [`visit`], but descends only into the child keys that `table`
/// lists for each node kind.
pub fn visit_with_key_table<V, T>(
    root: impl Into<Node>,
    visitor: &mut V,
    table: &T,
) -> Result<Option<Node>, VisitError>
where
    V: Visitor + ?Sized,
    T: ChildKeyTable + ?Sized,
{
    let root = root.into();
    let mut traversal = Traversal {
        table,
        stack: Vec::new(),
        path: Vec::new(),
        lineage: Vec::new(),
        result: Some(root.clone()),
    };
    traversal.run(root, visitor)
}

/// A node or list whose children are being visited.
enum Frame<'t> {
    Node {
        node: Node,
        key: Option<PathSegment>,
        keys: &'t [&'static str],

        /// Cursor into `keys`; the child being visited is at `index - 1`.
        index: usize,

        /// Pending replacements (`None` = removal) of this node's
        /// children, applied when the node is left.
        edits: Vec<(&'static str, Option<Child>)>,

        /// Whether `node` was substituted on enter, so that it must be
        /// reported to the parent even without child edits.
        replaced: bool,
    },
    List {
        key: &'static str,
        items: Vec<Node>,

        /// Cursor into `items`; the item being visited is at `index - 1`.
        index: usize,

        edits: Vec<(usize, Option<Node>)>,
    },
}

/// The next thing to do for the frame on top of the stack.
enum Step {
    Enter(Node, PathSegment),
    OpenList(&'static str, Vec<Node>),
    Absent,
    Finish,
}

#[derive(PartialEq)]
enum Flow {
    Continue,
    Break,
}

struct Traversal<'t, T: ?Sized> {
    table: &'t T,
    stack: Vec<Frame<'t>>,
    path: Vec<PathSegment>,

    /// The nodes of every `Frame::Node` on the stack, outermost first.
    lineage: Vec<Node>,

    /// The root as it stands after the edits recorded against it.
    result: Option<Node>,
}

impl<'t, T: ChildKeyTable + ?Sized> Traversal<'t, T> {
    fn run<V: Visitor + ?Sized>(
        &mut self,
        root: Node,
        visitor: &mut V,
    ) -> Result<Option<Node>, VisitError> {
        if self.enter(root, None, visitor)? == Flow::Break {
            return self.unwind();
        }

        while let Some(frame) = self.stack.last_mut() {
            let step = match frame {
                Frame::Node { node, keys, index, .. } => match keys.get(*index) {
                    Some(&key) => {
                        *index += 1;
                        match node.child(key) {
                            Some(Child::Node(child)) => Step::Enter(child, PathSegment::Key(key)),
                            Some(Child::List(items)) => Step::OpenList(key, items),
                            None => Step::Absent,
                        }
                    },
                    None => Step::Finish,
                },
                Frame::List { items, index, .. } => match items.get(*index) {
                    Some(item) => {
                        let item = item.clone();
                        *index += 1;
                        Step::Enter(item, PathSegment::Index(*index - 1))
                    },
                    None => Step::Finish,
                },
            };

            let flow = match step {
                Step::Enter(child, key) => {
                    self.path.push(key);
                    self.enter(child, Some(key), visitor)?
                },
                Step::OpenList(key, items) => {
                    self.path.push(PathSegment::Key(key));
                    self.stack.push(Frame::List {
                        key,
                        items,
                        index: 0,
                        edits: Vec::new(),
                    });
                    Flow::Continue
                },
                Step::Absent => Flow::Continue,
                Step::Finish => self.finish(visitor)?,
            };

            if flow == Flow::Break {
                log::trace!("visit stopped by Break at depth {}", self.path.len());
                return self.unwind();
            }
        }

        Ok(self.result.take())
    }

    fn context(&self, key: Option<PathSegment>) -> VisitContext<'_> {
        let (parent, ancestors) = match self.lineage.split_last() {
            Some((parent, ancestors)) => (Some(parent), ancestors),
            None => (None, &[][..]),
        };
        VisitContext {
            key,
            parent,
            path: &self.path,
            ancestors,
        }
    }

    fn enter<V: Visitor + ?Sized>(
        &mut self,
        node: Node,
        key: Option<PathSegment>,
        visitor: &mut V,
    ) -> Result<Flow, VisitError> {
        let action = visitor.enter(&node, &self.context(key))?;
        match action {
            VisitAction::Continue => self.descend(node, key, false),
            VisitAction::Replace(replacement) => self.descend(replacement, key, true),
            VisitAction::Skip => {
                self.pop_path(key);
            },
            VisitAction::Remove => {
                self.pop_path(key);
                self.record(None);
            },
            VisitAction::Break => return Ok(Flow::Break),
        }
        Ok(Flow::Continue)
    }

    fn descend(&mut self, node: Node, key: Option<PathSegment>, replaced: bool) {
        let table = self.table;
        let keys = table.child_keys(node.kind());
        self.lineage.push(node.clone());
        self.stack.push(Frame::Node {
            node,
            key,
            keys,
            index: 0,
            edits: Vec::new(),
            replaced,
        });
    }

    /// Pops the exhausted frame on top of the stack, applying its edits
    /// and (for nodes) calling `leave`.
    fn finish<V: Visitor + ?Sized>(&mut self, visitor: &mut V) -> Result<Flow, VisitError> {
        match self.stack.pop() {
            Some(Frame::Node { node, key, edits, replaced, .. }) => {
                self.lineage.pop();
                let edited = !edits.is_empty();
                let node = if edited {
                    node.with_children(edits)?
                } else {
                    node
                };

                let action = visitor.leave(&node, &self.context(key))?;
                self.pop_path(key);
                match action {
                    VisitAction::Continue | VisitAction::Skip => {
                        if edited || replaced {
                            self.record(Some(node));
                        }
                    },
                    VisitAction::Remove => self.record(None),
                    VisitAction::Replace(replacement) => self.record(Some(replacement)),
                    VisitAction::Break => {
                        if edited || replaced {
                            self.record(Some(node));
                        }
                        return Ok(Flow::Break);
                    },
                }
            },
            Some(Frame::List { key, items, edits, .. }) => {
                self.path.pop();
                self.close_list(key, items, edits);
            },
            None => (),
        }
        Ok(Flow::Continue)
    }

    /// Folds the edits of every open frame into its parent without
    /// calling any more callbacks, and returns the resulting root.
    fn unwind(&mut self) -> Result<Option<Node>, VisitError> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Node { node, edits, replaced, .. } => {
                    if !edits.is_empty() {
                        let node = node.with_children(edits)?;
                        self.record(Some(node));
                    } else if replaced {
                        self.record(Some(node));
                    }
                },
                Frame::List { key, items, edits, .. } => self.close_list(key, items, edits),
            }
        }
        Ok(self.result.take())
    }

    fn close_list(&mut self, key: &'static str, items: Vec<Node>, edits: Vec<(usize, Option<Node>)>) {
        if edits.is_empty() {
            return;
        }
        let items = apply_list_edits(items, edits);
        if let Some(Frame::Node { edits, .. }) = self.stack.last_mut() {
            edits.push((key, Some(Child::List(items))));
        }
    }

    /// Records an edit of the child currently being visited by the frame
    /// on top of the stack (or of the root, when the stack is empty).
    fn record(&mut self, value: Option<Node>) {
        match self.stack.last_mut() {
            Some(Frame::Node { keys, index, edits, .. }) => {
                edits.push((keys[*index - 1], value.map(Child::Node)));
            },
            Some(Frame::List { index, edits, .. }) => edits.push((*index - 1, value)),
            None => self.result = value,
        }
    }

    fn pop_path(&mut self, key: Option<PathSegment>) {
        if key.is_some() {
            self.path.pop();
        }
    }
}

/// Applies index-ordered edits to a list. A later edit of the same index
/// wins.
fn apply_list_edits(items: Vec<Node>, edits: Vec<(usize, Option<Node>)>) -> Vec<Node> {
    let mut edits = edits.into_iter().peekable();
    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let mut slot = Some(item);
        while let Some((_, value)) = edits.next_if(|(edit_index, _)| *edit_index == index) {
            slot = value;
        }
        result.extend(slot);
    }
    result
}
