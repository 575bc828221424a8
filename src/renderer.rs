use std::any::Any;

use derive_more::Constructor;
use tracing::{Level, span};

use crate::context::RenderContext;

/// A named view applied to a content object.
///
/// This is the single seam between the guard and the host framework. Output
/// channels (text, markup, streaming) are the implementor's concern; the
/// guard only needs to sit in front of the call.
pub trait Renderer {
    fn render(&self, content: &dyn Any, view: &str, ctx: &mut RenderContext) -> crate::Result<()>;
}

impl<F> Renderer for F
where
    F: Fn(&dyn Any, &str, &mut RenderContext) -> crate::Result<()>,
{
    fn render(&self, content: &dyn Any, view: &str, ctx: &mut RenderContext) -> crate::Result<()> {
        self(content, view, ctx)
    }
}

/// Middleware that wraps any [`Renderer`] with re-entry detection.
///
/// Before delegating, the wrapper records the (content, view) pair on the
/// context's stack; rendering the same pair again while it is still active
/// fails with [`Error::RecursionDetected`](crate::error::Error) instead of
/// looping. The frame is released afterwards whether the delegate succeeded
/// or not. Errors of the delegate itself pass through unchanged.
#[derive(Debug, Clone, Constructor)]
pub struct GuardedRenderer<R> {
    inner: R,
}

impl<R: Renderer> Renderer for GuardedRenderer<R> {
    fn render(&self, content: &dyn Any, view: &str, ctx: &mut RenderContext) -> crate::Result<()> {
        let span = span!(Level::TRACE, "render", view);
        let _enter = span.enter();
        let outcome = match ctx.enter(content, view) {
            Ok(()) => self.inner.render(content, view, ctx),
            Err(recursion) => Err(recursion),
        };
        ctx.leave(content, view);
        outcome
    }
}

/// Wraps `renderer` with re-entry detection.
pub fn guarded<R: Renderer>(renderer: R) -> GuardedRenderer<R> {
    GuardedRenderer::new(renderer)
}
