use derive_more::{Deref, DerefMut};

use crate::frame::Frame;
use crate::guard_options::STACK_CAPACITY;

/// Ordered record of the render invocations active within one request.
/// Insertion order is nesting order. No two equal frames may coexist; the
/// enter operation enforces this, not the container.
#[derive(Debug, Clone, Default, Deref, DerefMut)]
pub(crate) struct ViewStack(Vec<Frame>);

impl ViewStack {
    pub(crate) fn with_default_capacity() -> Self {
        Self(Vec::with_capacity(STACK_CAPACITY))
    }

    /// Position of the first frame equal to `frame`. Linear scan; render
    /// nesting rarely goes past a few dozen levels.
    pub(crate) fn find(&self, frame: &Frame) -> Option<usize> {
        self.iter().position(|f| f == frame)
    }
}
