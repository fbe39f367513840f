//! Subtree representation and the LLRB insertion algorithm.
//!
//! A [`Subtree`] is a tagged variant over the sentinel and an owned node.
//! Both shapes answer the same questions (color, lookup, insert, height),
//! selected by pattern match.

use std::cmp::Ordering;
use std::mem;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of the link into a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

// =============================================================================
// Subtree Definition
// =============================================================================

/// Either the sentinel or a node owning its two children.
///
/// The sentinel is always black, carries no entry and is never mutated.
#[derive(Debug)]
pub(crate) enum Subtree<V> {
    Sentinel,
    Node(Box<Node<V>>),
}

impl<V> Default for Subtree<V> {
    fn default() -> Self {
        Self::Sentinel
    }
}

/// A single entry together with its color and owned children.
#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: Subtree<V>,
    pub(crate) right: Subtree<V>,
}

impl<V> Subtree<V> {
    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Sentinel)
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        match self {
            Self::Sentinel => Color::Black,
            Self::Node(node) => node.color,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        matches!(self.color(), Color::Red)
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.color().is_black()
    }

    /// Recolors the node at the top of this subtree. The sentinel stays black.
    pub(crate) fn paint(&mut self, color: Color) {
        if let Self::Node(node) = self {
            node.color = color;
        }
    }

    /// Returns `true` if the top of this subtree is a node whose left child is red.
    fn has_red_left(&self) -> bool {
        matches!(self, Self::Node(node) if node.left.is_red())
    }

    /// Looks up `key` by iterative descent. Never restructures.
    pub(crate) fn retrieve(&self, key: &str) -> Option<&V> {
        let mut cursor = self;
        while let Self::Node(node) = cursor {
            match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => cursor = &node.left,
                Ordering::Greater => cursor = &node.right,
            }
        }
        None
    }

    /// Mutable counterpart of [`Subtree::retrieve`].
    pub(crate) fn retrieve_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut cursor = self;
        while let Self::Node(node) = cursor {
            match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
            }
        }
        None
    }

    /// Inserts `key` and returns the subtree that replaces `self`.
    ///
    /// The sentinel turns into a fresh red leaf. If `key` is already present
    /// its value is overwritten and the previous one is stored in `replaced`.
    pub(crate) fn insert(self, key: String, value: V, replaced: &mut Option<V>) -> Self {
        match self {
            Self::Sentinel => Self::Node(Box::new(Node::new(key, value))),
            Self::Node(node) => Self::Node(node.insert(key, value, replaced)),
        }
    }

    /// Number of black nodes on the leftmost spine.
    ///
    /// This is a diagnostic only. It looks at a single path, so it is not a
    /// check of black balance.
    pub(crate) fn height(&self) -> usize {
        match self {
            Self::Sentinel => 0,
            Self::Node(node) => node.left.height() + usize::from(node.color.is_black()),
        }
    }
}

// =============================================================================
// Node Operations
// =============================================================================

impl<V> Node<V> {
    /// Creates a red node with two sentinel children.
    const fn new(key: String, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: Subtree::Sentinel,
            right: Subtree::Sentinel,
        }
    }

    /// Recursive insert on a subtree root. Returns the new subtree root.
    ///
    /// The three fixes run on every return path, including an overwrite of an
    /// existing key.
    fn insert(
        mut self: Box<Self>,
        key: String,
        value: V,
        replaced: &mut Option<V>,
    ) -> Box<Self> {
        match key.as_str().cmp(self.key.as_str()) {
            Ordering::Equal => *replaced = Some(mem::replace(&mut self.value, value)),
            Ordering::Less => {
                self.left = mem::take(&mut self.left).insert(key, value, replaced);
            }
            Ordering::Greater => {
                self.right = mem::take(&mut self.right).insert(key, value, replaced);
            }
        }

        self.lean_left().resolve_double_red().split()
    }

    fn lean_left(self: Box<Self>) -> Box<Self> {
        if self.left.is_black() && self.right.is_red() {
            self.rotate_left()
        } else {
            self
        }
    }

    fn resolve_double_red(self: Box<Self>) -> Box<Self> {
        if self.left.is_red() && self.left.has_red_left() {
            self.rotate_right()
        } else {
            self
        }
    }

    fn split(mut self: Box<Self>) -> Box<Self> {
        if self.left.is_red() && self.right.is_red() {
            self.left.paint(Color::Black);
            self.right.paint(Color::Black);
            self.color = Color::Red;
        }
        self
    }

    /// Promotes the right child. The two nodes exchange colors.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        match mem::take(&mut self.right) {
            Subtree::Node(mut promoted) => {
                self.right = mem::take(&mut promoted.left);
                mem::swap(&mut self.color, &mut promoted.color);
                promoted.left = Subtree::Node(self);
                promoted
            }
            Subtree::Sentinel => self,
        }
    }

    /// Promotes the left child. The two nodes exchange colors.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        match mem::take(&mut self.left) {
            Subtree::Node(mut promoted) => {
                self.left = mem::take(&mut promoted.right);
                mem::swap(&mut self.color, &mut promoted.color);
                promoted.right = Subtree::Node(self);
                promoted
            }
            Subtree::Sentinel => self,
        }
    }
}
