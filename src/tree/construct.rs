//! Structural primitives: `construct` and `destroy` (`spec.md` §4.2).
//!
//! These are mutual inverses up to the identity of the freshly
//! allocated/freed internal node, and are the only place new internal nodes
//! are created or internal nodes (other than via `split_*`'s repeated calls
//! to `destroy`) are freed.

use crate::cost::PathCost;
use crate::tree::{Node, NodeKind, PathTree};
use crate::Handle;

impl<C : PathCost> PathTree<C> {
	/// Join `v` and `w` (roots of non-empty subtrees, `w` following `v` on
	/// the path) under a fresh internal node representing an edge of gross
	/// cost `x`. Returns the new root.
	pub(crate) fn construct( &mut self, v : Handle, w : Handle, x : C ) -> Handle {
		let mut g = x;
		if !self.is_external( v ) {
			let vm = self.netmin( v );
			if vm < g { g = vm; }
		}
		if !self.is_external( w ) {
			let wm = self.netmin( w );
			if wm < g { g = wm; }
		}

		let bhead = self.bhead( v );
		let btail = self.btail( w );
		let height = 1 + self.height( v ).max( self.height( w ) );

		let r = self.arena.alloc( Node {
			parent : None,
			height,
			kind : NodeKind::Internal { left : v, right : w, bhead, btail, netmin : g, netcost : x - g }
		} );

		self.node_mut( v ).parent = Some( r );
		if !self.is_external( v ) {
			let vm = self.netmin( v );
			self.set_netmin( v, vm - g );
		}
		self.node_mut( w ).parent = Some( r );
		if !self.is_external( w ) {
			let wm = self.netmin( w );
			self.set_netmin( w, wm - g );
		}

		r
	}

	/// Split `r` (a non-external root) back into its two children, each now a
	/// root, plus the gross cost of the edge `r` represented. Frees `r`.
	pub(crate) fn destroy( &mut self, r : Handle ) -> ( Handle, Handle, C ) {
		debug_assert!( !self.is_external( r ), "destroy(): node must be internal" );

		let ( left, right, netmin, netcost ) = match self.node( r ).kind {
			NodeKind::Internal { left, right, netmin, netcost, .. } => ( left, right, netmin, netcost ),
			NodeKind::External { .. } => unreachable!()
		};

		self.node_mut( left ).parent = None;
		if !self.is_external( left ) {
			self.add_netmin( left, netmin );
		}

		self.node_mut( right ).parent = None;
		if !self.is_external( right ) {
			self.add_netmin( right, netmin );
		}

		let x = netcost + netmin;
		self.arena.free( r );

		( left, right, x )
	}
}
