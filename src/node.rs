/// Handle into the node arena owned by [`Rbt`](crate::Rbt).
pub(crate) type NodeId = usize;

/// Node corresponds to a single entry in Rbt instance. Child links are
/// owning slots in the arena, parent is a back-reference used only while
/// walking up for rotations and fix-ups.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    black: bool,                          // store: black or red
    pub(crate) left: Option<NodeId>,      // store: left child
    pub(crate) right: Option<NodeId>,     // store: right child
    pub(crate) parent: Option<NodeId>,    // back-reference, non-owning
}

impl<K, V> Node<K, V> {
    // new nodes are always red, insert decides otherwise.
    pub(crate) fn new(key: K, value: V, parent: Option<NodeId>) -> Node<K, V> {
        Node {
            key,
            value,
            black: false,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub(crate) fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    pub(crate) fn set_color(&mut self, black: bool) {
        self.black = black
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.black
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        !self.black
    }
}
