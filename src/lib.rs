//! [`seq-list`] is an implementation of a Singly-Linked-List addressed by index.
//!
//! Each [`SeqList`] owns its first node and every node owns its successor; a
//! non-owning pointer to the last node keeps appends constant time.
//!
//! # Hazards
//!
//! A [`SeqList`] performs no synchronisation of its own. The borrow checker stops a
//! list being modified while one of its iterators is alive; code which sidesteps it
//! (through `unsafe` or interior mutability around the list) gets unspecified
//! results.
//!
//! Author --- daniel.bechaz@gmail.com
//! Last Moddified --- 2026-10-16

use log::trace;
use std::{
    any::Any,
    hash::{Hash, Hasher,},
    iter::{FromIterator, Extend,},
    ops::{Index, IndexMut,},
    fmt::{self, Debug, Display,},
    marker::PhantomData,
    mem,
    ptr::{self, NonNull,},
};

mod node;
mod iters;
mod error;
mod element;
#[cfg(feature = "serialize",)]
mod serialize;

use self::node::Node;
pub use self::iters::{Iter, IterMut, IntoIter,};
pub use self::error::Error;
pub use self::element::{Element, NULL,};

/// Builds an [`Error::IndexOutOfRange`] for `index`.
///
/// # Params
///
/// index --- The rejected index.
/// len --- The length of the list which rejected it.
#[inline]
fn out_of_range(index: usize, len: usize,) -> Error {
    trace!("rejected index {} for a list of length {}", index, len,);

    Error::IndexOutOfRange { index, len, }
}

/// An implementation of a singly-linked-list which can be addressed by index.
pub struct SeqList<T,> {
    /// The first [`Node`](struct.Node.html) of the [`SeqList`], owned by the [`SeqList`].
    head: Option<NonNull<Node<T,>,>,>,
    /// The last [`Node`](struct.Node.html) of the [`SeqList`], owned through `head`.
    tail: Option<NonNull<Node<T,>,>,>,
    /// The number of [`Node`](struct.Node.html)s in the [`SeqList`].
    len: usize,
    /// The [`SeqList`] owns its `Node`s.
    marker: PhantomData<Box<Node<T,>,>,>,
}

// SAFETY: the `Node`s are owned exclusively by the list, as if it held `Box`es.
unsafe impl<T: Send,> Send for SeqList<T,> {}

unsafe impl<T: Sync,> Sync for SeqList<T,> {}

impl<T,> SeqList<T,> {
    /// Validates that `index` addresses an existing value.
    ///
    /// # Params
    ///
    /// index --- The index to check.
    #[inline]
    fn check_index(&self, index: usize,) -> Result<(), Error,> {
        if index < self.len { Ok(()) }
        else { Err(out_of_range(index, self.len,)) }
    }
    /// Returns the [`Node`](struct.Node.html) at `index`.
    ///
    /// # Params
    ///
    /// index --- The index in the linked-list to find.
    fn node(&self, index: usize,) -> Result<NonNull<Node<T,>,>, Error,> {
        self.check_index(index,)?;

        let mut node = self.head;
        // SAFETY: every link reachable from `head` points to a live `Node` of this list.
        for _ in 0..index { node = node.and_then(|node| unsafe { (*node.as_ptr()).next }) }

        node.ok_or_else(|| out_of_range(index, self.len,))
    }
    /// Links an unlinked [`Node`](struct.Node.html) onto the end of the [`SeqList`].
    ///
    /// # Params
    ///
    /// node --- The [`Node`](struct.Node.html) to link.
    fn link_back(&mut self, node: NonNull<Node<T,>,>,) {
        match self.tail {
            //The list was empty, `node` is also the head.
            None => self.head = Some(node),
            // SAFETY: `tail` is the live last `Node` while `len > 0`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
        }

        self.tail = Some(node);
        self.len += 1;
    }
}

impl<T,> SeqList<T,> {
    /// Returns a new empty [`SeqList`].
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, tail: None, len: 0, marker: PhantomData, }
    }
    /// Returns the number of values in this [`SeqList`].
    #[inline]
    pub const fn len(&self) -> usize { self.len }
    /// `true` if this [`SeqList`] is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.len() == 0 }
    /// Clear the [`SeqList`], releasing every value front to back.
    pub fn clear(&mut self) {
        trace!("clearing a list of length {}", self.len,);

        self.tail = None;
        self.len = 0;

        let mut next = self.head.take();
        while let Some(node) = next {
            // SAFETY: `node` was reachable from `head`, which no longer links to it.
            unsafe {
                next = (*node.as_ptr()).next.take();
                drop(Node::free(node,),);
            }
        }
    }
    /// Returns the value at `index`.
    ///
    /// # Params
    ///
    /// index --- The index of the value.
    ///
    /// # Errors
    ///
    /// * If `index` is greater than or equal to the length of the [`SeqList`].
    #[inline]
    pub fn get(&self, index: usize,) -> Result<&T, Error,> {
        // SAFETY: the `Node` lives as long as the borrow of `self`.
        self.node(index,).map(|node| unsafe { &(*node.as_ptr()).value })
    }
    /// Returns the value at `index` mutably.
    ///
    /// # Params
    ///
    /// index --- The index of the value.
    ///
    /// # Errors
    ///
    /// * If `index` is greater than or equal to the length of the [`SeqList`].
    #[inline]
    pub fn get_mut(&mut self, index: usize,) -> Result<&mut T, Error,> {
        // SAFETY: the `Node` lives as long as the unique borrow of `self`.
        self.node(index,).map(|node| unsafe { &mut (*node.as_ptr()).value })
    }
    /// Replaces the value at `index`, returning the previous value.
    ///
    /// # Params
    ///
    /// index --- The index of the value to replace.
    /// value --- The new value.
    ///
    /// # Errors
    ///
    /// * If `index` is greater than or equal to the length of the [`SeqList`].
    pub fn set(&mut self, index: usize, value: T,) -> Result<T, Error,> {
        self.get_mut(index,).map(|slot| mem::replace(slot, value,))
    }
    /// Returns the first value.
    #[inline]
    pub fn front(&self) -> Option<&T,> {
        // SAFETY: `head` is live while it is set.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }
    /// Returns the first value.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T,> {
        // SAFETY: `head` is live while it is set.
        self.head.map(|head| unsafe { &mut (*head.as_ptr()).value })
    }
    /// Returns the last value.
    #[inline]
    pub fn back(&self) -> Option<&T,> {
        // SAFETY: `tail` is live while it is set.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }
    /// Returns the last value.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T,> {
        // SAFETY: `tail` is live while it is set.
        self.tail.map(|tail| unsafe { &mut (*tail.as_ptr()).value })
    }
    /// Pushes a value onto the front of the [`SeqList`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub fn push_front(&mut self, value: T,) {
        let node = Node::new(value,);

        // SAFETY: `node` is freshly allocated and not yet shared.
        unsafe { (*node.as_ptr()).next = self.head }
        if self.tail.is_none() { self.tail = Some(node) }

        self.head = Some(node);
        self.len += 1;
    }
    /// Pops the first value off the front of the [`SeqList`].
    pub fn pop_front(&mut self,) -> Option<T,> {
        let head = self.head?;

        // SAFETY: `head` is live and is unlinked from the list before it is freed.
        unsafe {
            self.head = (*head.as_ptr()).next.take();
            if self.head.is_none() { self.tail = None }
            self.len -= 1;

            Some(Node::free(head,),)
        }
    }
    /// Pushes a value onto the back of the [`SeqList`] in constant time.
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    #[inline]
    pub fn push_back(&mut self, value: T,) { self.link_back(Node::new(value,)) }
    /// Pops the last value off the back of the [`SeqList`].
    ///
    /// This walks the whole list to find the new last value.
    pub fn pop_back(&mut self,) -> Option<T,> {
        if self.is_empty() { return None }

        self.remove(self.len - 1,).ok()
    }
    /// Inserts `value` so that it ends up at `index`, shifting later values back.
    ///
    /// # Params
    ///
    /// index --- The index to insert at, `len` appends.
    /// value --- The value to insert.
    ///
    /// # Errors
    ///
    /// * If `index` is greater than the length of the [`SeqList`].
    pub fn insert(&mut self, index: usize, value: T,) -> Result<(), Error,> {
        if index > self.len { return Err(out_of_range(index, self.len,)) }

        if index == 0 { self.push_front(value,) }
        else if index == self.len { self.push_back(value,) }
        else {
            let prev = self.node(index - 1,)?;

            // SAFETY: `prev` is a live `Node` of this list and is not the tail.
            unsafe { Node::splice_after(prev, Node::new(value,),) }
            self.len += 1;
        }

        Ok(())
    }
    /// Removes the value at `index`, shifting later values forward.
    ///
    /// # Params
    ///
    /// index --- The index of the value to remove.
    ///
    /// # Errors
    ///
    /// * If `index` is greater than or equal to the length of the [`SeqList`].
    pub fn remove(&mut self, index: usize,) -> Result<T, Error,> {
        self.check_index(index,)?;

        let len = self.len;
        if index == 0 {
            return self.pop_front().ok_or_else(|| out_of_range(index, len,));
        }

        let prev = self.node(index - 1,)?;
        // SAFETY: `prev` is a live `Node` of this list; the unlinked `Node` is no longer
        // reachable from `head` when it is freed.
        unsafe {
            let removed = Node::unlink_next(prev,).ok_or_else(|| out_of_range(index, len,))?;

            //Removing the last `Node` makes its predecessor the tail.
            if (*prev.as_ptr()).next.is_none() { self.tail = Some(prev) }
            self.len -= 1;

            Ok(Node::free(removed,))
        }
    }
    /// Removes all values that don't pass the `pred` filter.
    ///
    /// # Params
    ///
    /// pred --- The filter function values need to pass to be retained.
    pub fn retain(&mut self, mut pred: impl FnMut(&T) -> bool,) {
        let mut next = self.head.take();

        self.tail = None;
        self.len = 0;
        //Relink the retained `Node`s in order.
        while let Some(node) = next {
            // SAFETY: `node` was reachable from the old `head` and is either relinked or
            // freed exactly once.
            unsafe {
                next = (*node.as_ptr()).next.take();

                if pred(&(*node.as_ptr()).value) { self.link_back(node) }
                else { drop(Node::free(node,),) }
            }
        }
    }
    /// Returns an iterator over all values in the [`SeqList`].
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        iters::new_iter(self.head, self.len,)
    }
    /// Returns a mutable iterator over all values in the [`SeqList`].
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        iters::new_iter_mut(self.head, self.len,)
    }
}

impl<T: PartialEq,> SeqList<T,> {
    /// Returns the index of the first value equal to `x`.
    ///
    /// # Params
    ///
    /// x --- The value to search for.
    pub fn index_of(&self, x: &T,) -> Option<usize,> {
        self.iter().position(|y| x == y)
    }
    /// Returns `true` if the `x` is found in the [`SeqList`].
    ///
    /// # Params
    ///
    /// x --- The value to search for.
    #[inline]
    pub fn contains(&self, x: &T,) -> bool {
        self.index_of(x,).is_some()
    }
}

impl<T: PartialEq + 'static,> SeqList<T,> {
    /// Compares against a value of unknown type; anything which is not a `SeqList<T>`
    /// is unequal.
    ///
    /// # Params
    ///
    /// other --- The value to compare against.
    pub fn equals(&self, other: &dyn Any,) -> bool {
        other.downcast_ref::<Self>().map_or(false, |other| self == other,)
    }
}

impl<T: Element,> SeqList<T,> {
    /// Combines the [`Element::element_hash`] of every value in order, with empty slots
    /// contributing `0`.
    pub fn hash_code(&self) -> u64 {
        self.iter().fold(1, |hash: u64, value| hash.wrapping_mul(31,).wrapping_add(value.element_hash(),),)
    }
}

impl<T,> Default for SeqList<T,> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T: Clone,> Clone for SeqList<T,> {
    fn clone(&self) -> Self { self.iter().cloned().collect() }
}

impl<T,> Index<usize,> for SeqList<T,> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize,) -> &Self::Output {
        self.get(index,).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T,> IndexMut<usize,> for SeqList<T,> {
    #[inline]
    fn index_mut(&mut self, index: usize,) -> &mut Self::Output {
        self.get_mut(index,).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T, A: Into<T,>,> Extend<A,> for SeqList<T,> {
    fn extend<I,>(&mut self, iter: I)
        where I: IntoIterator<Item = A>, {
        iter.into_iter().for_each(|item| self.push_back(item.into()))
    }
}

impl<T, A: Into<T>,> FromIterator<A,> for SeqList<T,> {
    fn from_iter<I,>(iter: I) -> Self
        where I: IntoIterator<Item = A>, {
        let mut list = SeqList::new();

        list.extend(iter); list
    }
}

impl<T,> IntoIterator for SeqList<T,> {
    type Item = T;
    type IntoIter = IntoIter<T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { iters::new_into_iter(self,) }
}

impl<'t, T: 't,> IntoIterator for &'t SeqList<T,> {
    type Item = &'t T;
    type IntoIter = Iter<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'t, T: 't,> IntoIterator for &'t mut SeqList<T,> {
    type Item = &'t mut T;
    type IntoIter = IterMut<'t, T,>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T: PartialEq,> PartialEq for SeqList<T,> {
    fn eq(&self, rhs: &Self) -> bool {
        ptr::eq(self, rhs,)
        || (self.len() == rhs.len() && self.iter().eq(rhs.iter()))
    }
}

impl<T: Eq,> Eq for SeqList<T,> {}

impl<T: Hash,> Hash for SeqList<T,> {
    fn hash<H: Hasher,>(&self, state: &mut H,) {
        self.len().hash(state,);
        self.iter().for_each(|value| value.hash(state,))
    }
}

impl<T: Element,> Display for SeqList<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.write_str("[",)?;
        for (index, value,) in self.iter().enumerate() {
            if index > 0 { fmt.write_str(", ",)? }
            value.fmt_element(fmt,)?;
        }
        fmt.write_str("]",)
    }
}

impl<T: Debug,> Debug for SeqList<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T,> Drop for SeqList<T,> {
    #[inline]
    fn drop(&mut self,) { self.clear() }
}
