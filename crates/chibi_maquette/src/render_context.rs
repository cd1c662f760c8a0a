//! The component instance currently rendering.
//!
//! The scheduler marks an instance as current around each render call, and
//! every vnode created during that call records it as its `ctx`. The slot is
//! thread-local, so renders on different threads never observe each other.

use std::cell::RefCell;

use crate::instance::InstanceHandle;

thread_local! {
    static CURRENT_RENDERING_INSTANCE: RefCell<Option<InstanceHandle>> = const { RefCell::new(None) };
}

/// The instance currently rendering on this thread
pub fn current_rendering_instance() -> Option<InstanceHandle> {
    CURRENT_RENDERING_INSTANCE.with(|current| current.borrow().clone())
}

/// Replace the current rendering instance, returning the previous one so the
/// caller can restore it when a nested render finishes.
pub fn set_current_rendering_instance(instance: Option<InstanceHandle>) -> Option<InstanceHandle> {
    tracing::trace!(instance = ?instance, "set current rendering instance");
    CURRENT_RENDERING_INSTANCE.with(|current| current.replace(instance))
}

/// Marks an instance as rendering until dropped, then restores whatever was
/// rendering before.
///
/// # Example
///
/// ```
/// use chibi_maquette::{current_rendering_instance, InstanceHandle, RenderingInstanceGuard};
///
/// let instance = InstanceHandle::new("App");
/// {
///     let _guard = RenderingInstanceGuard::enter(instance.clone());
///     assert_eq!(current_rendering_instance(), Some(instance));
/// }
/// assert_eq!(current_rendering_instance(), None);
/// ```
#[must_use = "the instance stops rendering as soon as the guard is dropped"]
pub struct RenderingInstanceGuard {
    prev: Option<InstanceHandle>,
}

impl RenderingInstanceGuard {
    pub fn enter(instance: InstanceHandle) -> Self {
        Self {
            prev: set_current_rendering_instance(Some(instance)),
        }
    }
}

impl Drop for RenderingInstanceGuard {
    fn drop(&mut self) {
        tracing::trace!("restore previous rendering instance");
        set_current_rendering_instance(self.prev.take());
    }
}
