use crate::ast::Kind;
use crate::ast::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;
use crate::GraphQLError;
use indexmap::IndexMap;

type VisitFn<'a> =
    Box<dyn FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, GraphQLError> + 'a>;

/// A [`Visitor`] assembled from closures, registered per node [`Kind`]
/// and/or for every kind.
///
/// A kind with at least one kind-specific callback uses only its
/// kind-specific callbacks; the `*_any` callbacks apply to every other
/// kind.
///
/// # Example
///
/// ```
/// use libgraphql_language::ast::Kind;
/// use libgraphql_language::parse;
/// use libgraphql_language::visitor::visit;
/// use libgraphql_language::visitor::VisitAction;
/// use libgraphql_language::visitor::VisitorFns;
/// use libgraphql_language::ParseOptions;
///
/// let doc = parse("{ a b { c } }", ParseOptions::default()).unwrap();
/// let mut fields = 0;
/// let mut visitor = VisitorFns::new().on_enter(Kind::Field, |_, _| {
///     fields += 1;
///     Ok(VisitAction::Continue)
/// });
/// visit(doc, &mut visitor).unwrap();
/// drop(visitor);
/// assert_eq!(fields, 3);
/// ```
#[derive(Default)]
pub struct VisitorFns<'a> {
    enter: IndexMap<Kind, VisitFn<'a>>,
    leave: IndexMap<Kind, VisitFn<'a>>,
    enter_any: Option<VisitFn<'a>>,
    leave_any: Option<VisitFn<'a>>,
}

impl<'a> VisitorFns<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(
        mut self,
        kind: Kind,
        callback: impl FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, GraphQLError> + 'a,
    ) -> Self {
        self.enter.insert(kind, Box::new(callback));
        self
    }

    pub fn on_leave(
        mut self,
        kind: Kind,
        callback: impl FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, GraphQLError> + 'a,
    ) -> Self {
        self.leave.insert(kind, Box::new(callback));
        self
    }

    /// Called on entering any node whose kind has no specific callbacks.
    pub fn on_enter_any(
        mut self,
        callback: impl FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, GraphQLError> + 'a,
    ) -> Self {
        self.enter_any = Some(Box::new(callback));
        self
    }

    /// Called on leaving any node whose kind has no specific callbacks.
    pub fn on_leave_any(
        mut self,
        callback: impl FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, GraphQLError> + 'a,
    ) -> Self {
        self.leave_any = Some(Box::new(callback));
        self
    }

    fn has_kind_callbacks(&self, kind: Kind) -> bool {
        self.enter.contains_key(&kind) || self.leave.contains_key(&kind)
    }
}

impl Visitor for VisitorFns<'_> {
    fn enter(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        let kind = node.kind();
        let callback = if self.has_kind_callbacks(kind) {
            self.enter.get_mut(&kind)
        } else {
            self.enter_any.as_mut()
        };
        match callback {
            Some(callback) => callback(node, context),
            None => Ok(VisitAction::Continue),
        }
    }

    fn leave(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        let kind = node.kind();
        let callback = if self.has_kind_callbacks(kind) {
            self.leave.get_mut(&kind)
        } else {
            self.leave_any.as_mut()
        };
        match callback {
            Some(callback) => callback(node, context),
            None => Ok(VisitAction::Continue),
        }
    }
}
