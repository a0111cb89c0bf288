//! Traversal utilities: `vectorize_edges`, `vectorize_vertices`, `clearall`
//! (`spec.md` §6).

use num_traits::Zero;

use crate::cost::PathCost;
use crate::tree::PathTree;
use crate::{Handle, VertexId};

impl<C : PathCost> PathTree<C> {
	/// Collect the gross costs of every edge on the path rooted at `p`, in
	/// left-to-right (head-to-tail) order.
	pub fn vectorize_edges( &self, p : Handle ) -> Vec<C> {
		let mut out = Vec::new();
		self.vectorize_edges_into( p, C::zero(), &mut out );
		out
	}

	fn vectorize_edges_into( &self, p : Handle, basemin : C, out : &mut Vec<C> ) {
		if self.is_external( p ) {
			return;
		}
		let grossmin = self.netmin( p ) + basemin;
		self.vectorize_edges_into( self.left( p ), grossmin, out );
		out.push( self.netcost( p ) + grossmin );
		self.vectorize_edges_into( self.right( p ), grossmin, out );
	}

	/// Collect every vertex on the path rooted at `p`, in left-to-right
	/// (head-to-tail) order.
	pub fn vectorize_vertices( &self, p : Handle ) -> Vec<VertexId> {
		let mut out = Vec::new();
		self.vectorize_vertices_into( p, &mut out );
		out
	}

	fn vectorize_vertices_into( &self, p : Handle, out : &mut Vec<VertexId> ) {
		if self.is_external( p ) {
			out.push( self.vertex( p ) );
			return;
		}
		self.vectorize_vertices_into( self.left( p ), out );
		self.vectorize_vertices_into( self.right( p ), out );
	}

	/// Free every node reachable from `p` (the whole tree it roots). `p`
	/// itself becomes an invalid handle; do not use it again.
	pub fn clearall( &mut self, p : Handle ) {
		if self.is_external( p ) {
			self.arena.free( p );
			return;
		}
		let ( left, right ) = match self.node( p ).kind {
			crate::tree::NodeKind::Internal { left, right, .. } => ( left, right ),
			crate::tree::NodeKind::External { .. } => unreachable!()
		};
		self.clearall( left );
		self.clearall( right );
		self.arena.free( p );
	}
}
