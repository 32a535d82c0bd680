//! Recency List Module
//!
//! Doubly linked access ordering stored as an index arena.

// == Sentinels ==
/// Arena position of the head sentinel (before the most recently used slot).
const HEAD: usize = 0;
/// Arena position of the tail sentinel (after the least recently used slot).
const TAIL: usize = 1;
/// Number of sentinel positions preceding the first real slot.
const SENTINELS: usize = 2;

// == Link ==
/// Neighbor positions of one node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Tracks access order for LRU eviction in O(1).
///
/// Slots are numbered `0..len()` and are never freed: the cache recycles the
/// least recently used slot instead of releasing it. Internally each slot
/// sits two positions into the arena, after the head and tail sentinels,
/// which lets `attach`/`detach` rewire neighbors without null checks.
///
/// - Front (after head sentinel) = Most recently used
/// - Back (before tail sentinel) = Least recently used
#[derive(Debug, Clone)]
pub struct RecencyList {
    links: Vec<Link>,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut links = Vec::with_capacity(capacity.saturating_add(SENTINELS));
        links.push(Link {
            prev: HEAD,
            next: TAIL,
        });
        links.push(Link {
            prev: HEAD,
            next: TAIL,
        });
        Self { links }
    }

    // == Push Front ==
    /// Allocates a new slot and links it as most recently used.
    ///
    /// Returns the slot number, which always equals the previous `len()`.
    pub fn push_front(&mut self) -> usize {
        let node = self.links.len();
        self.links.push(Link {
            prev: HEAD,
            next: TAIL,
        });
        self.attach_front(node);
        node - SENTINELS
    }

    // == Move To Front ==
    /// Marks a slot as most recently used.
    pub fn move_to_front(&mut self, slot: usize) {
        let node = slot + SENTINELS;
        if self.links[HEAD].next == node {
            return;
        }
        self.detach(node);
        self.attach_front(node);
    }

    // == Front ==
    /// Returns the most recently used slot.
    pub fn front(&self) -> Option<usize> {
        Self::slot_of(self.links[HEAD].next)
    }

    // == Back ==
    /// Returns the least recently used slot without unlinking it.
    pub fn back(&self) -> Option<usize> {
        Self::slot_of(self.links[TAIL].prev)
    }

    // == Length ==
    /// Returns the number of linked slots.
    pub fn len(&self) -> usize {
        self.links.len() - SENTINELS
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Iter ==
    /// Iterates slots from most to least recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            links: &self.links,
            cursor: self.links[HEAD].next,
            remaining: self.len(),
        }
    }

    fn slot_of(node: usize) -> Option<usize> {
        if node < SENTINELS {
            None
        } else {
            Some(node - SENTINELS)
        }
    }

    fn detach(&mut self, node: usize) {
        let Link { prev, next } = self.links[node];
        self.links[prev].next = next;
        self.links[next].prev = prev;
    }

    fn attach_front(&mut self, node: usize) {
        let first = self.links[HEAD].next;
        self.links[node] = Link {
            prev: HEAD,
            next: first,
        };
        self.links[first].prev = node;
        self.links[HEAD].next = node;
    }
}

// == Iterator ==
/// Slot iterator returned by [`RecencyList::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    links: &'a [Link],
    cursor: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let slot = RecencyList::slot_of(self.cursor)?;
        self.cursor = self.links[self.cursor].next;
        self.remaining -= 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
