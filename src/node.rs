/*!
# Node Representation

We choose `Node = u32` as the labelled graphs handled here are tiny compared to `2^32` nodes.
Ids are dense (`0..n`) and assigned in ascending order of the node labels, so comparing two
nodes by id is the same as comparing their labels.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, always sized to the number of nodes of the graph it belongs to
pub type NodeBitSet = FixedBitSet;

/// Node-indexed access to a [`NodeBitSet`].
///
/// Mirrors the `get/set/clear` vocabulary used throughout the algorithms and hides the
/// `usize`-conversions of the underlying bitset.
pub trait NodeBits {
    /// Creates an empty bitset with one entry per node
    fn for_nodes(n: NumNodes) -> Self;

    /// Returns *true* if bit `u` is set.
    /// ** Panics if `u >= n` **
    fn get_bit(&self, u: Node) -> bool;

    /// Sets bit `u` and returns its previous value.
    /// ** Panics if `u >= n` **
    fn set_bit(&mut self, u: Node) -> bool;

    /// Clears bit `u`.
    /// ** Panics if `u >= n` **
    fn clear_bit(&mut self, u: Node);

    /// Sets every node of the iterator
    fn set_bits<I: IntoIterator<Item = Node>>(&mut self, nodes: I) {
        for u in nodes {
            self.set_bit(u);
        }
    }
}

impl NodeBits for NodeBitSet {
    fn for_nodes(n: NumNodes) -> Self {
        FixedBitSet::with_capacity(n as usize)
    }

    #[inline]
    fn get_bit(&self, u: Node) -> bool {
        assert!((u as usize) < self.len(), "node {u} out of range");
        self.contains(u as usize)
    }

    #[inline]
    fn set_bit(&mut self, u: Node) -> bool {
        self.put(u as usize)
    }

    #[inline]
    fn clear_bit(&mut self, u: Node) {
        self.remove(u as usize);
    }
}
