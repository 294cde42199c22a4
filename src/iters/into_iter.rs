use crate::SeqList;
use std::iter::*;

#[inline]
pub(crate) fn new_into_iter<T,>(list: SeqList<T,>,) -> IntoIter<T,> {
    IntoIter { list, }
}

/// An iterator which moves the values out of a `SeqList` front to back.
pub struct IntoIter<T,> {
    /// The remaining values.
    list: SeqList<T,>,
}

impl<T,> Iterator for IntoIter<T,> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item,> { self.list.pop_front() }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize,>,) { (self.list.len(), Some(self.list.len()),) }
}

impl<T,> ExactSizeIterator for IntoIter<T,> {}

impl<T,> FusedIterator for IntoIter<T,> {}
