use std::any::{Any, TypeId};
use std::fmt::{Display, Formatter};

use derive_more::Constructor;

/// Identity of a content object, taken from its address and concrete type.
///
/// Two ids are equal only when they were captured from the same live object.
/// Value equality plays no part: two distinct objects with identical fields
/// produce different ids. The `TypeId` keeps objects of different types that
/// happen to share an address (a struct and its first field) apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContentId {
    addr: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    ty: TypeId,
}

impl ContentId {
    pub fn of(content: &dyn Any) -> Self {
        Self {
            addr: std::ptr::from_ref(content) as *const () as usize,
            ty: content.type_id(),
        }
    }
}

impl Display for ContentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.addr)
    }
}

/// One active render invocation: a content identity plus the view name it is
/// being rendered with. Frames are equal iff both parts match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Constructor)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    pub content: ContentId,
    pub view: String,
}

impl Frame {
    pub fn of(content: &dyn Any, view: impl Into<String>) -> Self {
        Self::new(ContentId::of(content), view.into())
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "view `{}` on {}", self.view, self.content)
    }
}
