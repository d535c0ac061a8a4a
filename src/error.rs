use thiserror::Error;

/// RbtError enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq, Error)]
pub enum RbtError<K> {
    /// Returned by load_from() API when the same key shows up twice.
    #[error("duplicate key {0:?}")]
    DuplicateKey(K),
    /// Fatal case, root of a non-empty tree must be black.
    #[error("root node is red")]
    RedRoot,
    /// Fatal case, a red node has a red child.
    #[error("consecutive red nodes")]
    ConsecutiveReds,
    /// Fatal case, black-height differs between left and right subtree.
    /// The String component of this variant can be used for debugging.
    #[error("unbalanced blacks {0}")]
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order.
    #[error("sort error {0:?} against {1:?}")]
    SortError(K, K),
    /// Fatal case, child's parent link does not point back to its parent.
    #[error("broken parent link at {0:?}")]
    BrokenParentLink(K),
    /// Fatal case, cached min or max entry is not the tree's extreme.
    #[error("stale {0} cache")]
    StaleCache(&'static str),
    /// Fatal case, arena holds nodes that are not reachable from root.
    #[error("reachable {reachable} nodes, allocated {allocated}")]
    Unreachable { reachable: usize, allocated: usize },
}
