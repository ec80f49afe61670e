//! Tree handle and the lookup API.

use super::insert;
use super::iter::Keys;
use super::node::Node;
use super::query;

/// The result of a longest-prefix lookup.
///
/// `key` is the longest stored key that is a literal prefix of the query and `tail`
/// is everything after it, so `key ++ tail` is always the original query. Both
/// borrow from the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixMatch<'q> {
    /// The matched stored key.
    pub key: &'q [u8],
    /// The unconsumed remainder of the query.
    pub tail: &'q [u8],
}

impl<'q> PrefixMatch<'q> {
    /// Splits `query` where `tail`, one of its suffixes, begins.
    fn split(query: &'q [u8], tail: &'q [u8]) -> Self {
        let (key, tail) = query.split_at(query.len() - tail.len());
        Self { key, tail }
    }

    /// Returns `true` if the whole query matched a stored key.
    pub fn is_exact(&self) -> bool {
        self.tail.is_empty()
    }
}

/// A compressed prefix tree over a fixed set of byte-string keys.
///
/// The tree is assembled once with [`RadixTree::build`], [`RadixTree::insert`],
/// `collect()` or `extend()`, then queried any number of times. Queries take `&self`
/// and never mutate, so a finished tree can be shared across threads without locks.
///
/// Keys and queries are anything implementing `AsRef<[u8]>`.
///
/// # Example
///
/// ```rust
/// use radix_lookup::RadixTree;
///
/// let tree = RadixTree::build(["in", "input", "out", "output"]);
///
/// assert_eq!(tree.lookup_exact("input"), Some(&b"input"[..]));
/// assert_eq!(tree.lookup_exact("inp"), None);
///
/// let found = tree.lookup_prefix("input-file").unwrap();
/// assert_eq!(found.key, b"input");
/// assert_eq!(found.tail, b"-file");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RadixTree {
    /// Root node. Its label is always empty.
    root: Node,
    /// Number of stored keys.
    len: usize,
}

impl RadixTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            len: 0,
        }
    }

    /// Builds a tree holding every key in `keys`.
    ///
    /// Order does not affect the resulting shape, and repeated keys are stored once.
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut tree = Self::new();
        tree.extend(keys);
        trace_event!(
            debug,
            keys = tree.len,
            nodes = tree.root.node_count(),
            "radix tree built"
        );
        tree
    }

    /// Inserts a key.
    /// Returns whether the key was newly inserted.
    pub fn insert<K>(&mut self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        let added = insert::insert(&mut self.root, key.as_ref());
        if added {
            self.len += 1;
        }
        added
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root.dismantle();
        self.root = Node::root();
        self.len = 0;
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Returns `true` if `query` is a stored key.
    pub fn contains<Q>(&self, query: &Q) -> bool
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        query::visit(&self.root, query.as_ref())
    }

    /// Looks up `query` as a whole.
    ///
    /// On a hit the matched key is byte-for-byte the query, so it is handed back as
    /// a borrow of the query rather than rebuilt from node labels.
    pub fn lookup_exact<'q, Q>(&self, query: &'q Q) -> Option<&'q [u8]>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let query = query.as_ref();
        query::visit(&self.root, query).then_some(query)
    }

    /// Finds the longest stored key that is a prefix of `query`.
    pub fn lookup_prefix<'q, Q>(&self, query: &'q Q) -> Option<PrefixMatch<'q>>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let query = query.as_ref();
        query::traverse(&self.root, query).map(|tail| PrefixMatch::split(query, tail))
    }

    /// Calls `f` with the matched key if `query` is stored.
    /// Returns whether `f` was called.
    pub fn visit<Q, F>(&self, query: &Q, f: F) -> bool
    where
        Q: AsRef<[u8]> + ?Sized,
        F: FnOnce(&[u8]),
    {
        match self.lookup_exact(query) {
            Some(key) => {
                f(key);
                true
            }
            None => false,
        }
    }

    /// Calls `f` with the longest matching key and the remaining tail of `query`.
    /// Returns whether `f` was called.
    pub fn traverse<Q, F>(&self, query: &Q, f: F) -> bool
    where
        Q: AsRef<[u8]> + ?Sized,
        F: FnOnce(&[u8], &[u8]),
    {
        match self.lookup_prefix(query) {
            Some(found) => {
                f(found.key, found.tail);
                true
            }
            None => false,
        }
    }

    /// Iterates over the stored keys in ascending byte order.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self)
    }
}

// Depth grows with key length; nodes are freed from a work stack.
impl Drop for RadixTree {
    fn drop(&mut self) {
        self.root.dismantle();
    }
}

impl<K> FromIterator<K> for RadixTree
where
    K: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K> Extend<K> for RadixTree
where
    K: AsRef<[u8]>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a RadixTree {
    type Item = Vec<u8>;
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}
