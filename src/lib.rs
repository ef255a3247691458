//! A binary min-heap backed by a growable contiguous array.
//!
//! Besides the usual priority queue operations, [`MinHeap`] can test for
//! membership and remove arbitrary values. Both use a search that walks the
//! tree from the root and skips every subtree whose root is already greater
//! than the value looked for.

use core::cmp::Ordering;
use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;

use std::slice;
use std::vec::{self, Vec};

use log::trace;

mod error;

pub use error::{HeapError, Result};

/// A key with an attached value, compared by `key` alone.
///
/// Lets a [`MinHeap`] order payloads that have no ordering of their own. Two
/// nodes with equal keys are equal, whatever their values, so
/// [`MinHeap::contains`] and [`MinHeap::remove`] look nodes up by key.
///
/// ```
/// use min_heap::{HeapNode, MinHeap};
///
/// let mut heap = MinHeap::new();
/// heap.insert(HeapNode::new(3, "c"));
/// heap.insert(HeapNode::new(1, "a"));
/// heap.insert(HeapNode::new(2, "b"));
///
/// assert_eq!(heap.extract().map(|node| node.value), Ok("a"));
/// assert!(heap.contains(&HeapNode::new(3, "")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeapNode<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> HeapNode<K, V> {
    pub fn new(key: K, value: V) -> Self {
        HeapNode { key, value }
    }
}

impl<K, V> From<(K, V)> for HeapNode<K, V> {
    fn from((key, value): (K, V)) -> Self {
        HeapNode { key, value }
    }
}

impl<K: PartialEq, V> PartialEq for HeapNode<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key.eq(&other.key)
    }
}

impl<K: Eq, V> Eq for HeapNode<K, V> {}

impl<K: PartialOrd, V> PartialOrd for HeapNode<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, V> Ord for HeapNode<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// A priority queue implemented with a binary min-heap.
///
/// The smallest element is always at the root, and every node is smaller
/// than or equal to its children.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the [`Ord`]
/// trait, changes while it is in the heap, unless the item is the root and
/// the change goes through [`peek_mut`] or is followed by [`peek_update`].
/// The behavior resulting from such a logic error is not specified, but will
/// not be undefined behavior.
///
/// # Examples
///
/// ```
/// use min_heap::{HeapError, MinHeap};
///
/// let mut heap = MinHeap::new();
///
/// // Nothing to look at yet.
/// assert_eq!(heap.peek(), Err(HeapError::EmptyContainer));
///
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.len(), 3);
/// assert!(heap.contains(&2));
///
/// assert_eq!(heap.extract(), Ok(1));
/// assert_eq!(heap.extract(), Ok(2));
/// assert_eq!(heap.extract(), Ok(3));
/// assert_eq!(heap.extract(), Err(HeapError::EmptyContainer));
/// ```
///
/// ## Max-heap
///
/// Wrap the values in [`core::cmp::Reverse`] to get the greatest value first.
///
/// ```
/// use min_heap::MinHeap;
/// use std::cmp::Reverse;
///
/// let mut heap = MinHeap::new();
/// heap.insert(Reverse(1));
/// heap.insert(Reverse(5));
/// heap.insert(Reverse(2));
///
/// assert_eq!(heap.extract(), Ok(Reverse(5)));
/// assert_eq!(heap.extract(), Ok(Reverse(2)));
/// assert_eq!(heap.extract(), Ok(Reverse(1)));
/// ```
///
/// # Time complexity
///
/// | [insert]        | [extract]     | [peek] | [contains]/[remove] |
/// |-----------------|---------------|--------|---------------------|
/// | *O*(log(*n*))~  | *O*(log(*n*)) | *O*(1) | *O*(*n*)            |
///
/// `contains` and `remove` prune every subtree whose root is greater than
/// the value looked for, so they usually visit far fewer than *n* nodes, but
/// nothing better than *O*(*n*) is guaranteed.
///
/// [`peek_mut`]: MinHeap::peek_mut
/// [`peek_update`]: MinHeap::peek_update
/// [insert]: MinHeap::insert
/// [extract]: MinHeap::extract
/// [peek]: MinHeap::peek
/// [contains]: MinHeap::contains
/// [remove]: MinHeap::remove
pub struct MinHeap<T> {
    data: Vec<T>,
}

/// Structure wrapping a mutable reference to the smallest item on a
/// `MinHeap`.
///
/// This `struct` is created by the [`peek_mut`] method on [`MinHeap`]. If the
/// root was mutably dereferenced, heap order is restored when the guard is
/// dropped.
///
/// [`peek_mut`]: MinHeap::peek_mut
pub struct PeekMut<'a, T: 'a + Ord> {
    heap: &'a mut MinHeap<T>,
    sift: bool,
}

impl<T: Ord + fmt::Debug> fmt::Debug for PeekMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&self.heap.data[0]).finish()
    }
}

impl<T: Ord> Drop for PeekMut<'_, T> {
    fn drop(&mut self) {
        if self.sift {
            self.heap.peek_update();
        }
    }
}

impl<T: Ord> Deref for PeekMut<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        debug_assert!(!self.heap.is_empty());
        // SAFE: PeekMut is only instantiated for non-empty heaps
        unsafe { self.heap.data.get_unchecked(0) }
    }
}

impl<T: Ord> DerefMut for PeekMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        debug_assert!(!self.heap.is_empty());
        self.sift = true;
        // SAFE: PeekMut is only instantiated for non-empty heaps
        unsafe { self.heap.data.get_unchecked_mut(0) }
    }
}

impl<'a, T: Ord> PeekMut<'a, T> {
    /// Removes the peeked value from the heap and returns it.
    pub fn pop(mut this: PeekMut<'a, T>) -> T {
        this.sift = false;
        let heap = &mut *this.heap;
        let item = heap.data.swap_remove(0);
        heap.peek_update();
        item
    }
}

impl<T: Clone> Clone for MinHeap<T> {
    /// Copies the live elements into storage sized for them, but never
    /// smaller than [`MinHeap::INITIAL_CAPACITY`].
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.len().max(Self::INITIAL_CAPACITY));
        data.extend_from_slice(&self.data);
        MinHeap { data }
    }

    /// Same as `*self = source.clone()`. The old storage is released rather
    /// than reused, so the capacity fits `source`.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T: Ord> Default for MinHeap<T> {
    /// Creates an empty `MinHeap<T>`.
    #[inline]
    fn default() -> MinHeap<T> {
        MinHeap::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[allow(unused_unsafe)]
impl<T: Ord> MinHeap<T> {
    /// Creates an empty `MinHeap` with room for
    /// [`INITIAL_CAPACITY`](MinHeap::INITIAL_CAPACITY) elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// assert!(heap.capacity() >= MinHeap::<i32>::INITIAL_CAPACITY);
    /// heap.insert(4);
    /// ```
    #[must_use]
    pub fn new() -> MinHeap<T> {
        MinHeap {
            data: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Creates an empty `MinHeap` with room for at least `capacity` elements
    /// before it has to reallocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::with_capacity(100);
    /// assert!(heap.capacity() >= 100);
    /// heap.insert(4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> MinHeap<T> {
        MinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the smallest item in the heap.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::{HeapError, MinHeap};
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.peek(), Err(HeapError::EmptyContainer));
    ///
    /// heap.insert(5);
    /// heap.insert(1);
    /// heap.insert(2);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    /// Returns a mutable reference to the smallest item in the heap.
    ///
    /// If the item is modified through the guard, heap order is restored
    /// when the guard goes out of scope.
    ///
    /// Note: If the `PeekMut` value is leaked, the heap may be in an
    /// inconsistent state until [`peek_update`](MinHeap::peek_update) is called.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from([1, 5, 2]);
    /// {
    ///     let mut top = heap.peek_mut().unwrap();
    ///     *top = 10;
    /// }
    /// assert_eq!(heap.peek(), Ok(&2));
    /// ```
    ///
    /// # Time complexity
    ///
    /// If the item is modified then the worst case time complexity is *O*(log(*n*)),
    /// otherwise it's *O*(1).
    pub fn peek_mut(&mut self) -> Result<PeekMut<'_, T>> {
        if self.is_empty() {
            Err(HeapError::EmptyContainer)
        } else {
            Ok(PeekMut {
                heap: self,
                sift: false,
            })
        }
    }

    /// Restores heap order after the root was changed in place.
    ///
    /// This runs a single sift-down from the root. It repairs the heap only
    /// if the root is the one element out of place. Does nothing on an
    /// empty heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// use std::cell::Cell;
    ///
    /// let mut heap = MinHeap::new();
    /// heap.insert(Cell::new(1));
    /// heap.insert(Cell::new(2));
    ///
    /// heap.peek().unwrap().set(5);
    /// heap.peek_update();
    /// assert_eq!(heap.peek().unwrap().get(), 2);
    /// ```
    pub fn peek_update(&mut self) {
        if !self.is_empty() {
            // SAFETY: the heap is not empty, so 0 < self.len().
            unsafe { self.sift_down(0) };
        }
    }

    /// Replaces the smallest item with `value` and returns the old one.
    ///
    /// This is cheaper than an [`extract`](MinHeap::extract) followed by an
    /// [`insert`](MinHeap::insert).
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty. `value`
    /// is dropped in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from([3, 1, 2]);
    /// assert_eq!(heap.replace_root(5), Ok(1));
    /// assert_eq!(heap.into_sorted_vec(), [2, 3, 5]);
    /// ```
    pub fn replace_root(&mut self, value: T) -> Result<T> {
        let root = self.data.first_mut().ok_or(HeapError::EmptyContainer)?;
        let old = mem::replace(root, value);
        // SAFETY: the root exists, so 0 < self.len().
        unsafe { self.sift_down(0) };
        Ok(old)
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// The last element takes the place of the root and is sifted down.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty. The heap
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::{HeapError, MinHeap};
    /// let mut heap = MinHeap::from([3, 1]);
    ///
    /// assert_eq!(heap.extract(), Ok(1));
    /// assert_eq!(heap.extract(), Ok(3));
    /// assert_eq!(heap.extract(), Err(HeapError::EmptyContainer));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `extract` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn extract(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        let item = self.data.swap_remove(0);
        self.peek_update();
        Ok(item)
    }

    /// Pushes an item onto the heap.
    ///
    /// When the storage is full it is first grown to twice its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// heap.insert(3);
    /// heap.insert(5);
    /// heap.insert(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of a *single* call to `insert` is *O*(*n*), when
    /// the storage has to be reallocated. Amortized over many inserts the
    /// cost is *O*(log(*n*)).
    pub fn insert(&mut self, value: T) {
        if self.data.len() == self.data.capacity() {
            self.grow();
        }
        let old_len = self.len();
        self.data.push(value);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(old_len) };
    }

    /// Returns `true` if the heap holds an item equal to `value`.
    ///
    /// The search starts at the root and does not descend below any node
    /// that is greater than `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([9, 8, 1, 5]);
    /// assert!(heap.contains(&5));
    /// assert!(!heap.contains(&0));
    /// assert!(!heap.contains(&7));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n*) in the worst case.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes one item equal to `value`, returning whether one was found.
    ///
    /// The item removed is the first match in the search order of
    /// [`contains`](MinHeap::contains), which is not necessarily the one
    /// inserted first. The last element fills the freed slot and is sifted
    /// up or down from there. Does nothing if no item matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from([9, 8, 1, 5]);
    ///
    /// assert!(heap.remove(&5));
    /// assert!(!heap.contains(&5));
    /// assert!(!heap.remove(&5));
    /// assert_eq!(heap.into_sorted_vec(), [1, 8, 9]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let index = match self.find(value) {
            Some(index) => index,
            None => return false,
        };
        trace!("removing heap element at index {} of {}", index, self.len());

        self.data.swap_remove(index);
        if index < self.len() {
            // SAFETY: index < self.len() was checked above.
            if index > 0 && self.data[index] < self.data[(index - 1) / 2] {
                unsafe { self.sift_up(index) };
            } else {
                unsafe { self.sift_down(index) };
            }
        }
        true
    }

    /// Checks that every element is greater than or equal to its parent.
    #[must_use]
    pub fn check_integrity(&self) -> bool {
        (1..self.len()).all(|i| self.data[i] >= self.data[(i - 1) / 2])
    }

    /// Consumes the `MinHeap` and returns a vector in sorted
    /// (ascending) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from([1, 2, 4, 5, 7]);
    /// heap.insert(6);
    /// heap.insert(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // The root is the smallest of data[..=end]; park it behind the heap.
            self.data.swap(0, end);
            // SAFETY: 0 < 1 <= end < self.len()
            unsafe { self.sift_down_range(0, end) };
        }
        self.data.reverse();
        self.data
    }

    // The implementations of sift_up and sift_down use unsafe blocks in
    // order to move an element out of the vector (leaving behind a
    // hole), shift along the others and move the removed element back into the
    // vector at the final location of the hole.
    // The `Hole` type is used to represent this, and make sure
    // the hole is filled back at the end of its scope, even on panic.
    // The final layout is the same as swapping the element step by step.

    /// Moves the element at `pos` towards the root while it is strictly
    /// smaller than its parent.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, pos: usize) {
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > 0 {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > 0, so parent < hole.pos() is a valid
            //  index distinct from the hole.
            if hole.element() >= unsafe { hole.get(parent) } {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }
    }

    /// Take an element at `pos` and move it down the heap while one of its
    /// children within `end` is strictly smaller. The smaller child is
    /// followed; on a tie the left child is.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data[..end], pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child < end {
            // SAFETY: child < end and, when checked, child + 1 < end. Both
            //  are children of hole.pos(), so neither equals it.
            if child + 1 < end && unsafe { hole.get(child + 1) < hole.get(child) } {
                child += 1;
            }

            // if we are already in order, stop.
            // SAFETY: child is a valid index distinct from hole.pos().
            if hole.element() <= unsafe { hole.get(child) } {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller.
        unsafe { self.sift_down_range(pos, len) };
    }

    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
    }

    /// Pre-order search for `value`, visiting the left subtree before the
    /// right one and skipping subtrees rooted above `value`.
    ///
    /// Matches use `==`. A node that orders equal to `value` without being
    /// `==` to it does not prune; its subtrees are still searched.
    fn find(&self, value: &T) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let mut pending = vec![0];
        while let Some(i) = pending.pop() {
            let node = match self.data.get(i) {
                Some(node) => node,
                None => continue,
            };
            if value == node {
                return Some(i);
            }
            if value < node {
                continue;
            }
            pending.push(2 * i + 2);
            pending.push(2 * i + 1);
        }
        None
    }

    fn grow(&mut self) {
        let old_capacity = self.data.capacity();
        let new_capacity = old_capacity.saturating_mul(2).max(Self::INITIAL_CAPACITY);
        self.data.reserve_exact(new_capacity - self.data.len());
        trace!(
            "grew heap storage from {} to {} slots",
            old_capacity,
            self.data.capacity()
        );
    }
}

impl<T> MinHeap<T> {
    /// Capacity of a heap created by [`MinHeap::new`].
    pub const INITIAL_CAPACITY: usize = 8;

    /// Returns an iterator visiting all values in the underlying vector, in
    /// array order. The first value is the smallest; the rest follow no
    /// sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([1, 2, 3, 4]);
    ///
    /// assert_eq!(heap.iter().next(), Some(&1));
    /// assert_eq!(heap.iter().count(), 4);
    /// ```
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator which retrieves elements in ascending order.
    /// This method consumes the original heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { inner: self }
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Consumes the `MinHeap` and returns the underlying vector
    /// in array order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the heap, returning an iterator over the removed elements
    /// in array order. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.drain().count(), 2);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> vec::Drain<'_, T> {
        self.data.drain(..)
    }

    /// Drops all items from the heap. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from([1, 3]);
    /// let capacity = heap.capacity();
    ///
    /// heap.clear();
    ///
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Compares the two heaps slot by slot. Heaps holding the same values in a
/// different layout are not equal.
impl<T: PartialEq> PartialEq for MinHeap<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        for (lhs, rhs) in self.data.iter().zip(&other.data) {
            if *lhs != *rhs {
                return false;
            }
        }

        true
    }
}

impl<T: Eq> Eq for MinHeap<T> {}


/// A slot of `data` whose value has been read out during a sift.
///
/// Other values are copied into the slot as it moves through the slice, and
/// the read-out value is written back at its last position on drop, even
/// while unwinding from a panicking comparison.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

#[allow(unused_unsafe)]
impl<'a, T> Hole<'a, T> {
    /// # Safety
    ///
    /// `pos` must be in bounds of `data`.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFETY: in bounds per the caller; the copy left behind is never
        //  dropped, it is overwritten by `move_to` or by `drop`.
        let elt = ManuallyDrop::new(unsafe { ptr::read(data.as_ptr().add(pos)) });
        Hole { data, elt, pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// The value being sifted.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// # Safety
    ///
    /// `index` must be in bounds and must not be the hole itself.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos && index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Copies `data[index]` into the hole, which then sits at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and must not be the hole itself.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos && index < self.data.len());
        let base = self.data.as_mut_ptr();
        unsafe { ptr::copy_nonoverlapping(base.add(index), base.add(self.pos), 1) };
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: pos is in bounds and currently holds a stale copy.
        unsafe {
            let slot = self.data.as_mut_ptr().add(self.pos);
            ptr::copy_nonoverlapping(&*self.elt, slot, 1);
        }
    }
}

/// An owning iterator yielding the elements of a `MinHeap` in ascending
/// order.
///
/// This `struct` is created by [`MinHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T> {
    inner: MinHeap<T>,
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.extract().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}

impl<T: Ord> FusedIterator for IntoIterSorted<T> {}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Converts a `Vec<T>` into a `MinHeap<T>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> MinHeap<T> {
        let mut heap = MinHeap { data: vec };
        heap.rebuild();
        heap
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinHeap<T> {
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let mut h1 = MinHeap::from([1, 4, 2, 3]);
    /// let mut h2: MinHeap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.extract().ok().zip(h2.extract().ok()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T> From<MinHeap<T>> for Vec<T> {
    /// Converts a `MinHeap<T>` into a `Vec<T>` in array order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: MinHeap<T>) -> Vec<T> {
        heap.data
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinHeap<T> {
        MinHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Moves every value out of the heap in array order.
    fn into_iter(self) -> vec::IntoIter<T> {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |value| self.insert(value));
    }
}
