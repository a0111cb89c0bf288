/*!
A dynamic path data structure: a mutable representation of a simple path
(vertices connected by weighted edges) supporting logarithmic-time range
queries and updates, plus structural split/concatenate.

The path is stored as a height-balanced binary tree whose leaves, read in
in-order, enumerate the path's vertices; each internal node represents one
edge and carries a cost, based on
[\[ST83\]](https://doi.org/10.1145/800076.802464) "A data structure for
dynamic trees" by D. D. Sleator and R. E. Tarjan. Edge costs are encoded
*relatively* (each internal node holds `netmin`/`netcost`; the real cost is
recovered by accumulating along the root-to-node path), which is what makes a
single additive update over a sub-path an O(1) field write rather than an
O(sub-path length) walk.

This crate implements only the core tree (construction, rotation, balance,
query, split/concatenate). Index-addressed façades, command-line demos, and
benchmark harnesses are deliberately out of scope; see [`tree::PathTree`] for
the operations such a façade would be built from.

# Examples

```
use dynpath::tree::PathTree;
use dynpath::VertexId;

let mut t: PathTree<f64> = PathTree::new();
let leaves: Vec<_> = (0..5i64).map( |i| t.gen_new_node( i ) ).collect();

let mut root = leaves[0];
for (i, &leaf) in leaves.iter().enumerate().skip( 1 ) {
	root = t.concatenate( Some( root ), Some( leaf ), ( i - 1 ) as f64 ).unwrap();
}

assert_eq!( t.vectorize_edges( root ), vec![ 0.0, 1.0, 2.0, 3.0 ] );
assert_eq!(
	t.vectorize_vertices( root ),
	( 0..5i64 ).map( VertexId::from ).collect::<Vec<_>>()
);

// Add 5 to every edge cost in the whole path.
t.pupdate( root, 5.0 );
assert_eq!( t.vectorize_edges( root ), vec![ 5.0, 6.0, 7.0, 8.0 ] );
```

# Crate feature flags

* `space_efficient_nodes`
	* Optional, requires the `nonmax` crate.
	* Shrink [`Handle`] by disallowing the maximum arena index `usize::MAX`, at
	  a small runtime cost to check that this index is never used.
* `generate`
	* Optional, requires the `rand` crate.
	* Enables [`generate`] functionality to randomly build paths and cost
	  sequences. Used by property tests.
* `verbose`
	* Optional. WARNING: slow.
	* Print detailed information about rotations and rebalances.
* `verify`
	* Optional. WARNING: slow.
	* Check tree invariants after every structural operation.
* `unsafe_node_access`
	* Access arena slots without bounds checking.

# Literature

\[ST83\] Daniel D. Sleator and Robert Endre Tarjan. A Data Structure for Dynamic
Trees. Journal of Computer and System Sciences, 26(3):362–391, 1983.
doi:[10.1145/800076.802464](https://doi.org/10.1145/800076.802464)
*/

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::fmt::{Display, Formatter};

#[cfg( feature = "space_efficient_nodes" )]
use nonmax::NonMaxUsize;

pub mod arena;
pub mod cost;
pub mod tree;

#[cfg( feature = "generate" )]
pub mod generate;

pub use cost::PathCost;

/// An opaque handle into a [`tree::PathTree`]'s node arena.
///
/// Handles are stable for the lifetime of the node they refer to: a leaf's
/// handle never changes, even as the leaf moves between trees via
/// `concatenate`/`split_*`. Internal-node handles are only ever read by the
/// tree itself; callers only ever hold leaf handles.
#[cfg( not( feature = "space_efficient_nodes" ) )]
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Handle {
	raw_idx: usize
}

#[cfg( not( feature = "space_efficient_nodes" ) )]
impl Handle {
	/// Convert a raw arena index into a `Handle`.
	///
	/// Use with care, as this can circumvent the arena's bounds checking.
	pub fn new( idx : usize ) -> Handle {
		Handle { raw_idx: idx }
	}

	/// Convert this into a raw arena index.
	#[inline]
	pub fn index( &self ) -> usize {
		self.raw_idx
	}
}

/// An opaque handle into a [`tree::PathTree`]'s node arena.
#[cfg( feature = "space_efficient_nodes" )]
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Handle {
	raw_idx : NonMaxUsize
}

#[cfg( feature = "space_efficient_nodes" )]
impl Handle {
	/// Convert a raw arena index into a `Handle`.
	///
	/// Use with care, as this can circumvent the arena's bounds checking.
	pub fn new( idx : usize ) -> Handle {
		Handle { raw_idx : NonMaxUsize::new( idx ).unwrap() }
	}

	/// Convert this into a raw arena index.
	#[inline]
	pub fn index( &self ) -> usize {
		self.raw_idx.get()
	}
}

impl Display for Handle {
	fn fmt( &self, f: &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "#{}", self.index() )
	}
}

/// A caller-assigned integer identifying one vertex of a path.
///
/// Distinct from [`Handle`]: a `VertexId` is payload the caller chose (e.g. an
/// index into its own vertex array), carried on external (leaf) nodes only,
/// whereas a `Handle` addresses an arena slot that may hold either an
/// external or an internal node.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId {
	raw : i64
}

impl VertexId {
	/// Construct a `VertexId` wrapping the given caller-assigned integer.
	pub fn new( raw : i64 ) -> VertexId {
		VertexId { raw }
	}

	/// Convert this back into the caller-assigned integer.
	#[inline]
	pub fn raw( &self ) -> i64 {
		self.raw
	}
}

impl Display for VertexId {
	fn fmt( &self, f: &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.raw )
	}
}

impl From<i64> for VertexId {
	fn from( raw : i64 ) -> VertexId {
		VertexId::new( raw )
	}
}

impl From<usize> for VertexId {
	fn from( raw : usize ) -> VertexId {
		VertexId::new( raw as i64 )
	}
}
