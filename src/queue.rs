use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// helper linked list node. Owned by its predecessor, or by the queue for the head.
struct Node<E> {
    item: E,
    next: Option<NonNull<Node<E>>>,
}

/// First-in first-out queue over a singly linked chain.
///
/// Items leave in the order they were enqueued. `peek` and `dequeue` on an
/// empty queue return `None`.
pub struct Queue<E> {
    /// beginning of queue. Every node is allocated by `enqueue` and freed by `dequeue`.
    first: Option<NonNull<Node<E>>>,
    /// end of queue, `None` iff `first` is
    last: Option<NonNull<Node<E>>>,
    count: usize,
    marker: PhantomData<Box<Node<E>>>,
}

// SAFETY: the nodes are owned by the queue alone, as if held in `Box`es.
unsafe impl<E: Send> Send for Queue<E> {}
// SAFETY: `&Queue` only hands out `&E`.
unsafe impl<E: Sync> Sync for Queue<E> {}

impl<E> Queue<E> {
    pub fn new() -> Self {
        Queue {
            first: None,
            last: None,
            count: 0,
            marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Number of items held: enqueues minus dequeues.
    pub fn len(&self) -> usize {
        self.count
    }

    /// The item least recently added, without removing it.
    pub fn peek(&self) -> Option<&E> {
        // SAFETY: `first` is a live node of this queue, borrowed as long as `self`.
        self.first.map(|node| unsafe { &(*node.as_ptr()).item })
    }

    /// Adds the item at the end of this queue.
    pub fn enqueue(&mut self, item: E) {
        let node = NonNull::from(Box::leak(Box::new(Node { item, next: None })));

        match self.last {
            // SAFETY: `last` is a live node of this queue and `&mut self`
            // excludes any outstanding borrow of it.
            Some(old_last) => unsafe { (*old_last.as_ptr()).next = Some(node) },
            None => self.first = Some(node),
        }
        self.last = Some(node);
        self.count += 1;
    }

    /// Removes and returns the item least recently added.
    pub fn dequeue(&mut self) -> Option<E> {
        self.first.map(|first| {
            // SAFETY: `first` came from `Box::leak` in `enqueue` and is
            // unlinked here, so it is reclaimed exactly once.
            let node = unsafe { Box::from_raw(first.as_ptr()) };
            self.first = node.next;
            self.count -= 1;
            // don't keep pointing at the node we are about to free
            if self.first.is_none() {
                self.last = None;
            }
            node.item
        })
    }

    /// Iterates over the items from head to tail. Every call starts over at
    /// the current head.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            current: self.first,
            remaining: self.count,
            marker: PhantomData,
        }
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<E> Drop for Queue<E> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

impl<E: Clone> Clone for Queue<E> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// Items in FIFO order, each followed by a space.
impl<E: fmt::Display> fmt::Display for Queue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self {
            write!(f, "{} ", item)?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug> fmt::Debug for Queue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<E> FromIterator<E> for Queue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<E> Extend<E> for Queue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

/// Borrowing iterator, see [`Queue::iter`].
pub struct Iter<'a, E> {
    current: Option<NonNull<Node<E>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        self.current.map(|node| {
            // SAFETY: the queue is borrowed for 'a, so no node is freed or
            // relinked while this iterator lives.
            let node = unsafe { &*node.as_ptr() };
            self.current = node.next;
            self.remaining -= 1;
            &node.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}
impl<E> FusedIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<'a, E> IntoIterator for &'a Queue<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Iter<'a, E> {
        self.iter()
    }
}

/// Draining iterator: dequeues until empty.
pub struct IntoIter<E>(Queue<E>);

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.0.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}
impl<E> FusedIterator for IntoIter<E> {}

impl<E> IntoIterator for Queue<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> IntoIter<E> {
        IntoIter(self)
    }
}
