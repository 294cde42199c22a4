use std::ptr::NonNull;

/// A node in a singly linked list.
///
/// `Node`s are heap allocated by [`Node::new`] and released by [`Node::free`]; the
/// links between them are raw so that the list can also hold a pointer to its last
/// `Node` without invalidating the chain.
pub struct Node<T,> {
    /// The value inside this [`Node`].
    pub value: T,
    /// The [`Node`] after this one, owned by this one.
    pub next: Option<NonNull<Node<T,>,>,>,
}

impl<T,> Node<T,> {
    /// Allocates a new, unlinked [`Node`].
    ///
    /// # Params
    ///
    /// value --- The value to populate the [`Node`] with.
    #[inline]
    pub fn new(value: T,) -> NonNull<Self,> {
        NonNull::from(Box::leak(Box::new(Self { value, next: None, },),),)
    }
    /// Releases `node`, returning its value.
    ///
    /// # Unsafe
    ///
    /// `node` must have come from [`Node::new`], must not be reachable from any list
    /// and must not have been freed already.
    #[inline]
    pub unsafe fn free(node: NonNull<Self,>,) -> T {
        let node = Box::from_raw(node.as_ptr(),);

        node.value
    }
    /// Links `node` directly after `prev`, taking the old successor of `prev` as
    /// `node`s successor.
    ///
    /// # Unsafe
    ///
    /// Both `Node`s must be live and `node` must be unlinked.
    ///
    /// # Params
    ///
    /// prev --- The [`Node`] to splice after.
    /// node --- The [`Node`] to splice in.
    pub unsafe fn splice_after(prev: NonNull<Self,>, node: NonNull<Self,>,) {
        debug_assert!((*node.as_ptr()).next.is_none(), "Memory Leak");

        (*node.as_ptr()).next = (*prev.as_ptr()).next;
        (*prev.as_ptr()).next = Some(node);
    }
    /// Unlinks the successor of `prev`, reconnecting its successor to `prev`.
    ///
    /// # Unsafe
    ///
    /// `prev` and every `Node` reachable from it must be live.
    pub unsafe fn unlink_next(prev: NonNull<Self,>,) -> Option<NonNull<Self,>,> {
        let next = (*prev.as_ptr()).next?;

        (*prev.as_ptr()).next = (*next.as_ptr()).next.take();
        Some(next)
    }
}
