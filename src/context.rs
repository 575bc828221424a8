use std::any::Any;

use tracing::{debug, trace};

use crate::error::Error;
use crate::frame::Frame;
use crate::guard_options::GuardOptions;
use crate::stack::ViewStack;

/// Per-request owner of the view stack.
///
/// One `RenderContext` accompanies one request through its render chain and
/// is mutated synchronously as renders nest. It must not be shared between
/// requests or threads; a request that fans out into parallel sub-renders
/// gives each branch its own [`fork`](RenderContext::fork).
#[derive(Debug, Default, Clone)]
pub struct RenderContext {
    stack: ViewStack,
    options: GuardOptions,
}

impl RenderContext {
    pub fn new(options: Option<GuardOptions>) -> Self {
        Self {
            stack: ViewStack::with_default_capacity(),
            options: options.unwrap_or_default(),
        }
    }

    /// Number of render invocations currently active.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True once every entered frame has been left again. A context whose
    /// outermost render has completed but which is not idle leaked a frame.
    pub fn is_idle(&self) -> bool {
        self.stack.is_empty()
    }

    /// Snapshot for a parallel sub-render branch. The fork carries the
    /// frames active at the split, so recursion through the branch point is
    /// still caught, while sibling branches cannot see each other's frames.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Records that `content` is about to be rendered with `view`.
    ///
    /// Fails with [`Error::RecursionDetected`] if an equal frame is already
    /// active anywhere on the stack, leaving the stack unmodified. Every
    /// call, successful or not, must be matched by exactly one
    /// [`leave`](RenderContext::leave).
    pub fn enter(&mut self, content: &dyn Any, view: &str) -> crate::Result<()> {
        if !self.options.enabled {
            return Ok(());
        }
        let frame = Frame::of(content, view);
        match self.stack.find(&frame) {
            None => {
                trace!("enter {}", frame);
                self.stack.push(frame);
                Ok(())
            }
            Some(i) => {
                let backtrace = self.stack.iter().skip(i).map(ToString::to_string).collect();
                debug!("recursion detected at {}", frame);
                Err(Error::RecursionDetected {
                    content: frame.content,
                    view: frame.view,
                    backtrace,
                })
            }
        }
    }

    /// Releases the frame recorded for `(content, view)`, if any.
    ///
    /// A no-op when no such frame is active, so it is safe to call from the
    /// cleanup path of a failed `enter`.
    pub fn leave(&mut self, content: &dyn Any, view: &str) {
        if !self.options.enabled {
            return;
        }
        let frame = Frame::of(content, view);
        if let Some(i) = self.stack.find(&frame) {
            trace!("leave {}", frame);
            self.stack.remove(i);
        }
    }
}
