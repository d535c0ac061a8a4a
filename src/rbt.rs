use std::{
    borrow::Borrow,
    cell::Cell,
    cmp::Ordering,
    mem,
};

use tracing::{debug, trace};

use crate::config::{Config, GteMode};
use crate::depth::Depth;
use crate::error::RbtError;
use crate::node::{Node, NodeId};

/// Rbt manage a single instance of in-memory index using
/// [red-black][rbt] tree.
///
/// Nodes live in an arena owned by the index, child and parent links are
/// arena handles. Handles to the minimum and maximum entries are cached for
/// constant time extremal access, a cache is dropped when its entry is
/// deleted and recomputed on next read.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    name: String,
    config: Config,
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
    min: Cell<Option<NodeId>>,
    max: Cell<Option<NodeId>>,
}

/// Different ways to construct a new Rbt instance.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Create an empty instance of Rbt, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Rbt<K, V>
    where
        S: AsRef<str>,
    {
        Rbt::with_config(name, Default::default())
    }

    /// Create an empty instance of Rbt with custom configuration.
    pub fn with_config<S>(name: S, config: Config) -> Rbt<K, V>
    where
        S: AsRef<str>,
    {
        Rbt {
            name: name.as_ref().to_string(),
            config,
            nodes: Default::default(),
            root: Default::default(),
            min: Default::default(),
            max: Default::default(),
        }
    }

    /// Create a new instance of Rbt tree and load it with entries
    /// from `iter`. Note that iterator should return (key, value) tuples,
    /// where key must be ``unique``.
    pub fn load_from<S, I>(name: S, iter: I) -> Result<Rbt<K, V>, RbtError<K>>
    where
        S: AsRef<str>,
        I: Iterator<Item = (K, V)>,
    {
        let mut rbt = Rbt::new(name);
        for (key, value) in iter {
            if !rbt.insert(key.clone(), value) {
                debug!(index = %rbt.name, "load aborted on duplicate key");
                return Err(RbtError::DuplicateKey(key));
            }
        }
        debug!(index = %rbt.name, entries = rbt.len(), "loaded");
        Ok(rbt)
    }
}

/// Maintenance API.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating Rbt instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return the configuration this instance was created with.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return quickly with basic statisics, only entries() method is valid
    /// with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), mem::size_of::<Node<K, V>>())
    }

    /// Validate red-black tree with following rules:
    ///
    /// * Root node is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Parent links mirror the child links.
    /// * Cached min and max entries are the real extremes.
    /// * Every allocated node is reachable from root.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, RbtError<K>> {
        let res = self.do_validate();
        if res.is_err() {
            debug!(index = %self.name, "validation failed");
        }
        res
    }

    fn do_validate(&self) -> Result<Stats, RbtError<K>> {
        if self.is_red(self.root) {
            return Err(RbtError::RedRoot);
        }
        if let Some(root) = self.root {
            if self.nodes[root].parent.is_some() {
                return Err(RbtError::BrokenParentLink(self.nodes[root].key.clone()));
            }
        }

        let mut stats = Stats::new(self.len(), mem::size_of::<Node<K, V>>());
        let mut depths = Depth::new();
        let mut reachable = 0;
        let blacks = self.validate_tree(self.root, false, 0, 0, &mut depths, &mut reachable)?;
        if reachable != self.len() {
            let allocated = self.len();
            return Err(RbtError::Unreachable { reachable, allocated });
        }

        let (leftmost, rightmost) = (self.leftmost(self.root), self.rightmost(self.root));
        if let Some(id) = self.min.get() {
            if Some(id) != leftmost {
                return Err(RbtError::StaleCache("min"));
            }
        }
        if let Some(id) = self.max.get() {
            if Some(id) != rightmost {
                return Err(RbtError::StaleCache("max"));
            }
        }

        stats.set_blacks(blacks);
        stats.set_depths(depths);
        Ok(stats)
    }

    fn validate_tree(
        &self,
        node: Option<NodeId>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        depths: &mut Depth,
        reachable: &mut usize,
    ) -> Result<usize, RbtError<K>> {
        let id = match node {
            None => {
                depths.sample(depth);
                return Ok(nb);
            }
            Some(id) => id,
        };
        *reachable += 1;

        let node = &self.nodes[id];
        if fromred && node.is_red() {
            return Err(RbtError::ConsecutiveReds);
        }
        if node.is_black() {
            nb += 1;
        }
        for child in [node.left, node.right].iter().flatten() {
            if self.nodes[*child].parent != Some(id) {
                return Err(RbtError::BrokenParentLink(self.nodes[*child].key.clone()));
            }
        }
        if let Some(left) = node.left {
            let lkey = &self.nodes[self.rightmost(Some(left)).unwrap_or(left)].key;
            if lkey.ge(&node.key) {
                return Err(RbtError::SortError(lkey.clone(), node.key.clone()));
            }
        }
        if let Some(right) = node.right {
            let rkey = &self.nodes[self.leftmost(Some(right)).unwrap_or(right)].key;
            if rkey.le(&node.key) {
                return Err(RbtError::SortError(rkey.clone(), node.key.clone()));
            }
        }

        let red = node.is_red();
        let (left, right) = (node.left, node.right);
        let lblacks = self.validate_tree(left, red, nb, depth + 1, depths, reachable)?;
        let rblacks = self.validate_tree(right, red, nb, depth + 1, depths, reachable)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(RbtError::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }
}

/// Write operations on Rbt instance.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Create a new {key, value} entry in the index. If key is already
    /// present the index is left untouched and return false, use
    /// [`Rbt::update`] to overwrite.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let (mut parent, mut ord) = (None, Ordering::Equal);
        let mut cur = self.root;
        while let Some(id) = cur {
            parent = Some(id);
            ord = key.cmp(&self.nodes[id].key);
            cur = match ord {
                Ordering::Less => self.nodes[id].left,
                Ordering::Greater => self.nodes[id].right,
                Ordering::Equal => {
                    trace!(index = %self.name, "insert rejected, key exists");
                    return false;
                }
            };
        }

        let id = self.nodes.len();
        self.nodes.push(Node::new(key, value, parent));
        match parent {
            None => {
                self.root = Some(id);
                self.nodes[id].set_black();
            }
            Some(p) => {
                match ord {
                    Ordering::Less => self.nodes[p].left = Some(id),
                    _ => self.nodes[p].right = Some(id),
                }
                self.fix_insert(id);
            }
        }
        self.cache_extremes(id);
        true
    }

    /// Replace the value for an existing key and return the old value.
    /// If key is not present, update is a no-op and return None.
    pub fn update(&mut self, key: K, value: V) -> Option<V> {
        match self.find_node(&key) {
            Some(id) => Some(mem::replace(&mut self.nodes[id].value, value)),
            None => {
                trace!(index = %self.name, "update missed");
                None
            }
        }
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then delete is effectively a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = match self.find_node(key) {
            Some(id) => id,
            None => {
                trace!(index = %self.name, "delete missed");
                return None;
            }
        };

        self.delete_node(id);
        if self.min.get() == Some(id) {
            trace!(index = %self.name, "min cache invalidated");
            self.min.set(None);
        }
        if self.max.get() == Some(id) {
            trace!(index = %self.name, "max cache invalidated");
            self.max.set(None);
        }
        Some(self.free(id).value)
    }

    // new node becomes a cached extreme only when it beats the cached
    // one, or when it is the only entry. An unknown cache on a populated
    // tree is left for min_node()/max_node() to recompute.
    fn cache_extremes(&mut self, id: NodeId) {
        let only = self.nodes.len() == 1;
        let key = &self.nodes[id].key;
        match self.min.get() {
            Some(min) if key.lt(&self.nodes[min].key) => self.min.set(Some(id)),
            None if only => self.min.set(Some(id)),
            _ => (),
        }
        match self.max.get() {
            Some(max) if key.gt(&self.nodes[max].key) => self.max.set(Some(id)),
            None if only => self.max.set(Some(id)),
            _ => (),
        }
    }

    // restore red-black rules after attaching red node `n`.
    fn fix_insert(&mut self, mut n: NodeId) {
        while let Some(p) = self.nodes[n].parent {
            if self.nodes[p].is_black() {
                break;
            }
            // red parent is never root, so grandparent exists.
            let g = match self.nodes[p].parent {
                Some(g) => g,
                None => break,
            };
            let parent_is_left = self.nodes[g].left == Some(p);
            let uncle = if parent_is_left {
                self.nodes[g].right
            } else {
                self.nodes[g].left
            };

            if self.is_red(uncle) {
                // recolor and move up two levels.
                self.nodes[p].set_black();
                if let Some(u) = uncle {
                    self.nodes[u].set_black();
                }
                self.nodes[g].set_red();
                n = g;
                continue;
            }

            // zig-zag is first straightened into a line.
            let mut p = p;
            if parent_is_left && self.nodes[p].right == Some(n) {
                self.rotate_left(p);
                mem::swap(&mut n, &mut p);
            } else if !parent_is_left && self.nodes[p].left == Some(n) {
                self.rotate_right(p);
                mem::swap(&mut n, &mut p);
            }

            self.nodes[p].set_black();
            self.nodes[g].set_red();
            if parent_is_left {
                self.rotate_right(g)
            } else {
                self.rotate_left(g)
            }
        }

        if let Some(root) = self.root {
            self.nodes[root].set_black();
        }
    }

    // unlink node `z` from the tree, rebalancing as needed. The node
    // stays in the arena, caller shall free it.
    fn delete_node(&mut self, z: NodeId) {
        let mut removed_black = self.nodes[z].is_black();
        // `x` takes the removed position, `xp` is its parent so that an
        // absent `x` can still be located during fix-up.
        let (x, xp) = match (self.nodes[z].left, self.nodes[z].right) {
            (None, right) => {
                let xp = self.nodes[z].parent;
                self.transplant(z, right);
                (right, xp)
            }
            (left @ Some(_), None) => {
                let xp = self.nodes[z].parent;
                self.transplant(z, left);
                (left, xp)
            }
            (Some(l), Some(r)) => {
                // in-order successor, it has no left child.
                let y = self.leftmost(Some(r)).unwrap_or(r);
                removed_black = self.nodes[y].is_black();
                let x = self.nodes[y].right;
                let xp = if y == r {
                    Some(y)
                } else {
                    let xp = self.nodes[y].parent;
                    self.transplant(y, x);
                    self.nodes[y].right = Some(r);
                    self.nodes[r].parent = Some(y);
                    xp
                };
                self.transplant(z, Some(y));
                self.nodes[y].left = Some(l);
                self.nodes[l].parent = Some(y);
                let black = self.nodes[z].is_black();
                self.nodes[y].set_color(black);
                (x, xp)
            }
        };

        if removed_black {
            self.fix_delete(x, xp);
        }
    }

    // restore black-height on the path through `x`, which has lost one
    // black node. Absent `x` counts as black.
    fn fix_delete(&mut self, mut x: Option<NodeId>, mut xp: Option<NodeId>) {
        while x != self.root && self.is_black(x) {
            let p = match xp {
                Some(p) => p,
                None => break,
            };

            if self.nodes[p].left == x {
                let mut w = self.nodes[p].right;
                if self.is_red(w) {
                    self.set_black(w);
                    self.nodes[p].set_red();
                    self.rotate_left(p);
                    w = self.nodes[p].right;
                }
                let s = match w {
                    Some(s) => s,
                    None => {
                        x = Some(p);
                        xp = self.nodes[p].parent;
                        continue;
                    }
                };
                let (near, far) = (self.nodes[s].left, self.nodes[s].right);
                if self.is_black(near) && self.is_black(far) {
                    self.nodes[s].set_red();
                    x = Some(p);
                    xp = self.nodes[p].parent;
                    continue;
                }
                let s = if self.is_black(far) {
                    self.set_black(near);
                    self.nodes[s].set_red();
                    self.rotate_right(s);
                    self.nodes[p].right.unwrap_or(s)
                } else {
                    s
                };
                let black = self.nodes[p].is_black();
                self.nodes[s].set_color(black);
                self.nodes[p].set_black();
                self.set_black(self.nodes[s].right);
                self.rotate_left(p);
            } else {
                let mut w = self.nodes[p].left;
                if self.is_red(w) {
                    self.set_black(w);
                    self.nodes[p].set_red();
                    self.rotate_right(p);
                    w = self.nodes[p].left;
                }
                let s = match w {
                    Some(s) => s,
                    None => {
                        x = Some(p);
                        xp = self.nodes[p].parent;
                        continue;
                    }
                };
                let (near, far) = (self.nodes[s].right, self.nodes[s].left);
                if self.is_black(near) && self.is_black(far) {
                    self.nodes[s].set_red();
                    x = Some(p);
                    xp = self.nodes[p].parent;
                    continue;
                }
                let s = if self.is_black(far) {
                    self.set_black(near);
                    self.nodes[s].set_red();
                    self.rotate_left(s);
                    self.nodes[p].left.unwrap_or(s)
                } else {
                    s
                };
                let black = self.nodes[p].is_black();
                self.nodes[s].set_color(black);
                self.nodes[p].set_black();
                self.set_black(self.nodes[s].left);
                self.rotate_right(p);
            }
            x = self.root;
            xp = None;
        }
        self.set_black(x);
    }

    // remove unlinked node from the arena. Last node in the arena is
    // moved into the vacated slot and every link to it is patched.
    fn free(&mut self, id: NodeId) -> Node<K, V> {
        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(id);
        if id == last {
            return node;
        }

        let (parent, left, right) = {
            let moved = &self.nodes[id];
            (moved.parent, moved.left, moved.right)
        };
        match parent {
            None => self.root = Some(id),
            Some(p) if self.nodes[p].left == Some(last) => self.nodes[p].left = Some(id),
            Some(p) => self.nodes[p].right = Some(id),
        }
        for child in [left, right].iter().flatten() {
            self.nodes[*child].parent = Some(id);
        }
        if self.min.get() == Some(last) {
            self.min.set(Some(id));
        }
        if self.max.get() == Some(last) {
            self.max.set(Some(id));
        }
        node
    }

    //--------- link primitives ----------------

    //              (i)                       (i)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             /   \                     /   \
    //            a     y         =>        x     c
    //                 / \                 / \
    //                b   c               a   b
    //
    fn rotate_left(&mut self, x: NodeId) {
        let y = match self.nodes[x].right {
            Some(y) => y,
            None => panic!("rotate_left(): missing right child, call the programmer"),
        };
        let b = self.nodes[y].left;
        self.nodes[x].right = b;
        if let Some(b) = b {
            self.nodes[b].parent = Some(x);
        }
        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, Some(y));
        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    //              (i)                       (i)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             /   \                     /   \
    //            y     c         =>        a     x
    //           / \                             / \
    //          a   b                           b   c
    //
    fn rotate_right(&mut self, x: NodeId) {
        let y = match self.nodes[x].left {
            Some(y) => y,
            None => panic!("rotate_right(): missing left child, call the programmer"),
        };
        let b = self.nodes[y].right;
        self.nodes[x].left = b;
        if let Some(b) = b {
            self.nodes[b].parent = Some(x);
        }
        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, Some(y));
        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    // put `v` in the position held by `u`, `u`'s children are untouched.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.nodes[u].parent;
        self.replace_child(parent, u, v);
        if let Some(v) = v {
            self.nodes[v].parent = parent;
        }
    }

    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = new,
            Some(p) => self.nodes[p].right = new,
        }
    }

    #[inline]
    fn set_black(&mut self, id: Option<NodeId>) {
        if let Some(id) = id {
            self.nodes[id].set_black()
        }
    }
}

/// Read operations on Rbt instance.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Get the value for key.
    pub fn find<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|id| self.nodes[id].value.clone())
    }

    /// Return the entry with smallest key, None if index is empty.
    pub fn min(&self) -> Option<(K, V)> {
        self.min_node().map(|id| self.entry(id))
    }

    /// Return the entry with largest key, None if index is empty.
    pub fn max(&self) -> Option<(K, V)> {
        self.max_node().map(|id| self.entry(id))
    }

    /// Return values for keys between `lb` and `ub`, both inclusive, in
    /// ascending order of keys.
    pub fn find_range<Q>(&self, lb: &Q, ub: &Q) -> Vec<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut acc, mut stack) = (vec![], vec![]);
        let mut cur = self.root;
        loop {
            if let Some(id) = cur {
                // left subtree of a key below `lb` is entirely out of range.
                if self.nodes[id].key.borrow().lt(lb) {
                    cur = self.nodes[id].right;
                } else {
                    stack.push(id);
                    cur = self.nodes[id].left;
                }
                continue;
            }
            let id = match stack.pop() {
                Some(id) => id,
                None => break,
            };
            let node = &self.nodes[id];
            if node.key.borrow().gt(ub) {
                break;
            }
            if node.key.borrow().ge(lb) {
                acc.push(node.value.clone());
            }
            cur = node.right;
        }
        acc
    }

    /// Return values for keys less than or equal to `ub`, in descending
    /// order of keys.
    pub fn lte<Q>(&self, ub: &Q) -> Vec<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut acc, mut stack) = (vec![], vec![]);

        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if node.key.borrow().le(ub) {
                stack.push(id);
                cur = node.right;
            } else {
                cur = node.left;
            }
        }

        while let Some(id) = stack.pop() {
            acc.push(self.nodes[id].value.clone());
            let mut cur = self.nodes[id].left;
            while let Some(id) = cur {
                stack.push(id);
                cur = self.nodes[id].right;
            }
        }
        acc
    }

    /// Return values for keys greater than or equal to `lb`, in ascending
    /// order of keys.
    ///
    /// With [`GteMode::Compat`], which is the default, a lower bound equal
    /// to the largest key returns an empty list. Configure
    /// [`GteMode::Inclusive`] to get the maximum entry in that case.
    pub fn gte<Q>(&self, lb: &Q) -> Vec<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut acc = vec![];
        let max: &Q = match self.max_node() {
            Some(id) => self.nodes[id].key.borrow(),
            None => return acc,
        };
        let skip = match self.config.gte_mode {
            GteMode::Compat => lb.ge(max),
            GteMode::Inclusive => lb.gt(max),
        };
        if skip {
            return acc;
        }

        let mut stack = vec![];
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if node.key.borrow().ge(lb) {
                stack.push(id);
                cur = node.left;
            } else {
                cur = node.right;
            }
        }

        while let Some(id) = stack.pop() {
            acc.push(self.nodes[id].value.clone());
            let mut cur = self.nodes[id].right;
            while let Some(id) = cur {
                stack.push(id);
                cur = self.nodes[id].left;
            }
        }
        acc
    }

    /// Return all entries in ascending order of keys.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        let (mut acc, mut stack) = (Vec::with_capacity(self.len()), vec![]);
        let mut cur = self.root;
        loop {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.nodes[id].left;
            }
            match stack.pop() {
                Some(id) => {
                    acc.push(self.entry(id));
                    cur = self.nodes[id].right;
                }
                None => break acc,
            }
        }
    }
}

impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn find_node<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // hits on cached extremes skip the descent.
        for id in [self.min.get(), self.max.get()].iter().flatten() {
            if self.nodes[*id].key.borrow().eq(key) {
                return Some(*id);
            }
        }

        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            cur = match node.key.borrow().cmp(key) {
                Ordering::Less => node.right,
                Ordering::Greater => node.left,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    fn min_node(&self) -> Option<NodeId> {
        match self.min.get() {
            id @ Some(_) => id,
            None => {
                let id = self.leftmost(self.root);
                self.min.set(id);
                id
            }
        }
    }

    fn max_node(&self) -> Option<NodeId> {
        match self.max.get() {
            id @ Some(_) => id,
            None => {
                let id = self.rightmost(self.root);
                self.max.set(id);
                id
            }
        }
    }

    fn leftmost(&self, mut node: Option<NodeId>) -> Option<NodeId> {
        let mut found = None;
        while let Some(id) = node {
            found = Some(id);
            node = self.nodes[id].left;
        }
        found
    }

    fn rightmost(&self, mut node: Option<NodeId>) -> Option<NodeId> {
        let mut found = None;
        while let Some(id) = node {
            found = Some(id);
            node = self.nodes[id].right;
        }
        found
    }

    #[inline]
    fn entry(&self, id: NodeId) -> (K, V) {
        let node = &self.nodes[id];
        (node.key.clone(), node.value.clone())
    }

    #[inline]
    fn is_red(&self, node: Option<NodeId>) -> bool {
        node.map_or(false, |id| self.nodes[id].is_red())
    }

    #[inline]
    fn is_black(&self, node: Option<NodeId>) -> bool {
        !self.is_red(node)
    }
}

/// Statistics on [`Rbt`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Rbt::stats`] method.
/// * To get full statisics via [`Rbt::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Rbt`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Rbt<k,V>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key and value types. EG:
    ///
    /// ```
    /// use rbt_index::Rbt;
    /// let rbt: Rbt<u64, i128> = Rbt::new("myinstance");
    ///
    /// // size of key: 8 bytes
    /// // size of value: 16 bytes
    /// // overhead is 56 bytes
    /// assert_eq!(rbt.stats().node_size(), 80);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics, None for an empty tree or when the
    /// statistics was computed by [`Rbt::stats`].
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 1 => Some(depths.clone()),
            _ => None,
        }
    }
}
