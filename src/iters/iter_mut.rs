use crate::node::Node;
use std::{iter::*, marker::PhantomData, ptr::NonNull,};

/// Creates a new `IterMut` from parts.
///
/// # Params
///
/// head --- The first `Node` to yield.
/// len --- The number of `Node`s reachable from `head`.
#[inline]
pub(crate) fn new_iter_mut<'t, T: 't,>(head: Option<NonNull<Node<T,>,>,>, len: usize,) -> IterMut<'t, T,> {
    IterMut { cursor: head, len, marker: PhantomData, }
}

/// A mutable iterator over a `SeqList`.
pub struct IterMut<'t, T: 't,> {
    /// The next `Node` to yield.
    cursor: Option<NonNull<Node<T,>,>,>,
    /// The number of values left to yield.
    len: usize,
    marker: PhantomData<&'t mut Node<T,>,>,
}

impl<'t, T: 't,> Iterator for IterMut<'t, T,> {
    type Item = &'t mut T;

    fn next(&mut self) -> Option<Self::Item,> {
        self.cursor.map(|node| {
            let node = node.as_ptr();

            // SAFETY: the list is uniquely borrowed for `'t` and each value is yielded once.
            unsafe {
                //Advance the cursor.
                self.cursor = (*node).next;
                self.len -= 1;

                &mut (*node).value
            }
        })
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> ExactSizeIterator for IterMut<'t, T,> {}

impl<'t, T: 't,> FusedIterator for IterMut<'t, T,> {}
