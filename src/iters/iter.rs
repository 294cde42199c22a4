use crate::{node::Node, Error,};
use std::{iter::*, marker::PhantomData, ptr::NonNull,};

#[inline]
pub(crate) fn new_iter<'t, T: 't,>(head: Option<NonNull<Node<T,>,>,>, len: usize,) -> Iter<'t, T,> {
    Iter { cursor: head, len, marker: PhantomData, }
}

/// A forward only iterator over the values of a [`SeqList`](../struct.SeqList.html).
///
/// The iterator walks the chain as it was when iteration started and cannot be
/// restarted. It borrows the list, so the list cannot be modified until the
/// iterator is dropped.
pub struct Iter<'t, T: 't,> {
    /// The next `Node` to yield.
    cursor: Option<NonNull<Node<T,>,>,>,
    /// The number of values left to yield.
    len: usize,
    marker: PhantomData<&'t Node<T,>,>,
}

impl<'t, T: 't,> Iter<'t, T,> {
    /// `true` if there are more values to yield.
    #[inline]
    pub fn has_next(&self,) -> bool { self.cursor.is_some() }
    /// Yields the next value, failing with [`Error::Exhausted`] once the end is reached.
    pub fn try_next(&mut self,) -> Result<&'t T, Error,> {
        self.next().ok_or(Error::Exhausted,)
    }
}

impl<'t, T: 't,> Iterator for Iter<'t, T,> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item,> {
        self.cursor.map(|node| {
            // SAFETY: the list is borrowed for `'t`, keeping every `Node` live.
            let node = unsafe { &*node.as_ptr() };

            self.cursor = node.next;
            self.len -= 1;

            &node.value
        })
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.len, Some(self.len),) }
}

impl<'t, T: 't,> Clone for Iter<'t, T,> {
    #[inline]
    fn clone(&self) -> Self { Self { cursor: self.cursor, len: self.len, marker: PhantomData, } }
}

impl<'t, T: 't,> ExactSizeIterator for Iter<'t, T,> {}

impl<'t, T: 't,> FusedIterator for Iter<'t, T,> {}
