use crate::ast::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::GraphQLError;

/// Callbacks invoked by [`visit`](crate::visitor::visit) as it walks a
/// tree, in depth-first order: `enter` before a node's children, `leave`
/// after them.
///
/// Both methods default to [`VisitAction::Continue`], so an implementor
/// only overrides what it needs. Returning an `Err` aborts the traversal.
pub trait Visitor {
    fn enter(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        let _ = (node, context);
        Ok(VisitAction::Continue)
    }

    fn leave(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        let _ = (node, context);
        Ok(VisitAction::Continue)
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn enter(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        (**self).enter(node, context)
    }

    fn leave(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        (**self).leave(node, context)
    }
}

impl<V: Visitor + ?Sized> Visitor for Box<V> {
    fn enter(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        (**self).enter(node, context)
    }

    fn leave(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        (**self).leave(node, context)
    }
}
