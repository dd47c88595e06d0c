use crate::ast::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::Visitor;
use crate::GraphQLError;

/// Per-visitor state of a [`ParallelVisitor`].
#[derive(Clone, Copy, Debug, PartialEq)]
enum Skipping {
    No,

    /// The visitor skipped the node at this path depth; it resumes after
    /// that node's `leave`.
    Subtree(usize),

    /// The visitor returned `Break` and receives no further callbacks.
    Stopped,
}

/// Runs several visitors in a single traversal.
///
/// Each visitor sees the same nodes in the same order. `Skip` and `Break`
/// returned by one visitor only affect that visitor: the others keep
/// going. For edits (`Remove`/`Replace`) the first visitor to ask wins,
/// and visitors after it are not called for that node.
///
/// The traversal as a whole stops once every visitor has returned
/// `Break`.
pub struct ParallelVisitor<'a> {
    visitors: Vec<Box<dyn Visitor + 'a>>,
    skipping: Vec<Skipping>,
}

impl<'a> ParallelVisitor<'a> {
    pub fn new(visitors: Vec<Box<dyn Visitor + 'a>>) -> Self {
        let skipping = vec![Skipping::No; visitors.len()];
        Self {
            visitors,
            skipping,
        }
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    fn all_stopped(&self) -> bool {
        self.skipping.iter().all(|state| *state == Skipping::Stopped)
    }
}

/// Composes `visitors` into one [`ParallelVisitor`].
pub fn visit_in_parallel<'a>(visitors: Vec<Box<dyn Visitor + 'a>>) -> ParallelVisitor<'a> {
    ParallelVisitor::new(visitors)
}

impl Visitor for ParallelVisitor<'_> {
    fn enter(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        let depth = context.path.len();
        let mut outcome = VisitAction::Continue;
        for (visitor, skipping) in self.visitors.iter_mut().zip(self.skipping.iter_mut()) {
            if *skipping != Skipping::No {
                continue;
            }
            match visitor.enter(node, context)? {
                VisitAction::Continue => (),
                VisitAction::Skip => *skipping = Skipping::Subtree(depth),
                VisitAction::Break => *skipping = Skipping::Stopped,
                edit => {
                    outcome = edit;
                    break;
                },
            }
        }

        // A removed node is never descended into nor left, so skips that
        // began here end here.
        if outcome == VisitAction::Remove {
            for skipping in &mut self.skipping {
                if *skipping == Skipping::Subtree(depth) {
                    *skipping = Skipping::No;
                }
            }
        }

        if outcome == VisitAction::Continue && self.all_stopped() {
            return Ok(VisitAction::Break);
        }
        Ok(outcome)
    }

    fn leave(
        &mut self,
        node: &Node,
        context: &VisitContext<'_>,
    ) -> Result<VisitAction, GraphQLError> {
        let depth = context.path.len();
        let mut outcome = VisitAction::Continue;
        for (visitor, skipping) in self.visitors.iter_mut().zip(self.skipping.iter_mut()) {
            match *skipping {
                Skipping::No if outcome == VisitAction::Continue => {
                    match visitor.leave(node, context)? {
                        VisitAction::Continue | VisitAction::Skip => (),
                        VisitAction::Break => *skipping = Skipping::Stopped,
                        edit => outcome = edit,
                    }
                },
                Skipping::Subtree(skipped_depth) if skipped_depth == depth => {
                    *skipping = Skipping::No;
                },
                _ => (),
            }
        }

        if outcome != VisitAction::Continue {
            return Ok(outcome);
        }
        if self.all_stopped() {
            return Ok(VisitAction::Break);
        }
        Ok(VisitAction::Continue)
    }
}

impl std::fmt::Debug for ParallelVisitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelVisitor")
            .field("visitors", &self.visitors.len())
            .field("skipping", &self.skipping)
            .finish()
    }
}

