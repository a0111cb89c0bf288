//! Rotations (`spec.md` §4.3).
//!
//! Standard BST rotations restricted to the case where the rotated child is
//! internal, with the `netmin`/`netcost` of the two nodes that change
//! position recomputed from gross costs and the three affected subtrees
//! (`p`, `q`, `r`, following the Sleator–Tarjan figures) re-relativized.
//!
//! **Caller contract.** `root`'s `netmin` must already be its absolute gross
//! value (the caller promotes it before calling, if `root` is not actually
//! the tree's root) and the returned node's `netmin` is likewise left as an
//! absolute gross value — the caller must demote it back to relative once its
//! true parent (if any) is known. The [`crate::tree::balance`] module is the
//! only caller and honors this contract.

use crate::cost::PathCost;
use crate::tree::PathTree;
use crate::Handle;

impl<C : PathCost> PathTree<C> {
	/// Returns the gross value of `h`'s `netmin`, relative to `base` (the
	/// gross value of the enclosing node), or `None` if `h` is external.
	fn grossmin_if_internal( &self, h : Handle, base : C ) -> Option<C> {
		if self.is_external( h ) {
			None
		}
		else {
			Some( base + self.netmin( h ) )
		}
	}

	/// Rotate `root`'s internal right child up to take `root`'s place.
	/// `root` must have a non-external right child.
	pub(crate) fn rotate_left( &mut self, root : Handle ) -> Handle {
		debug_assert!( !self.is_external( self.right( root ) ), "rotate_left: right child must be internal" );

		let new_root = self.right( root );
		let p = self.left( root );
		let q = self.left( new_root );
		let r = self.right( new_root );

		let root_grossmin = self.netmin( root );
		let root_grosscost = self.netcost( root ) + root_grossmin;
		let new_root_grossmin = root_grossmin + self.netmin( new_root );
		let new_root_grosscost = self.netcost( new_root ) + new_root_grossmin;

		let p_gm = self.grossmin_if_internal( p, root_grossmin );
		let q_gm = self.grossmin_if_internal( q, new_root_grossmin );
		let r_gm = self.grossmin_if_internal( r, new_root_grossmin );

		let mut root_grossmin_new = root_grosscost;
		if let Some( g ) = p_gm { if g < root_grossmin_new { root_grossmin_new = g; } }
		if let Some( g ) = q_gm { if g < root_grossmin_new { root_grossmin_new = g; } }

		let new_root_grossmin_new =
			if root_grossmin_new < new_root_grossmin { root_grossmin_new } else { new_root_grossmin };

		// Shape
		self.set_right( root, q );
		self.set_left( new_root, root );
		self.node_mut( root ).parent = Some( new_root );
		self.node_mut( new_root ).parent = None;
		self.node_mut( q ).parent = Some( root );

		// netmin/netcost
		self.set_netmin( new_root, new_root_grossmin_new );
		self.set_netcost( new_root, new_root_grosscost - new_root_grossmin_new );
		self.set_netmin( root, root_grossmin_new - new_root_grossmin_new );
		self.set_netcost( root, root_grosscost - root_grossmin_new );
		if let Some( g ) = p_gm { self.set_netmin( p, g - root_grossmin_new ); }
		if let Some( g ) = q_gm { self.set_netmin( q, g - root_grossmin_new ); }
		if let Some( g ) = r_gm { self.set_netmin( r, g - new_root_grossmin_new ); }

		// bhead/btail
		self.set_btail( root, if self.is_external( q ) { q } else { self.btail( q ) } );
		self.set_bhead( new_root, if self.is_external( p ) { p } else { self.bhead( p ) } );

		// height
		let root_height = 1 + self.height( p ).max( self.height( q ) );
		self.set_height( root, root_height );
		self.set_height( new_root, 1 + root_height.max( self.height( r ) ) );

		#[cfg( feature = "verbose" )]
		eprintln!( "rotate_left({root}): new root {new_root}, grosscost {new_root_grosscost}" );

		new_root
	}

	/// Rotate `root`'s internal left child up to take `root`'s place.
	/// `root` must have a non-external left child.
	pub(crate) fn rotate_right( &mut self, root : Handle ) -> Handle {
		debug_assert!( !self.is_external( self.left( root ) ), "rotate_right: left child must be internal" );

		let new_root = self.left( root );
		let p = self.left( new_root );
		let q = self.right( new_root );
		let r = self.right( root );

		let root_grossmin = self.netmin( root );
		let root_grosscost = self.netcost( root ) + root_grossmin;
		let new_root_grossmin = root_grossmin + self.netmin( new_root );
		let new_root_grosscost = self.netcost( new_root ) + new_root_grossmin;

		let p_gm = self.grossmin_if_internal( p, new_root_grossmin );
		let q_gm = self.grossmin_if_internal( q, new_root_grossmin );
		let r_gm = self.grossmin_if_internal( r, root_grossmin );

		let mut root_grossmin_new = root_grosscost;
		if let Some( g ) = q_gm { if g < root_grossmin_new { root_grossmin_new = g; } }
		if let Some( g ) = r_gm { if g < root_grossmin_new { root_grossmin_new = g; } }

		let new_root_grossmin_new =
			if root_grossmin_new < new_root_grossmin { root_grossmin_new } else { new_root_grossmin };

		// Shape
		self.set_left( root, q );
		self.set_right( new_root, root );
		self.node_mut( root ).parent = Some( new_root );
		self.node_mut( new_root ).parent = None;
		self.node_mut( q ).parent = Some( root );

		// netmin/netcost
		self.set_netmin( new_root, new_root_grossmin_new );
		self.set_netcost( new_root, new_root_grosscost - new_root_grossmin_new );
		self.set_netmin( root, root_grossmin_new - new_root_grossmin_new );
		self.set_netcost( root, root_grosscost - root_grossmin_new );
		if let Some( g ) = p_gm { self.set_netmin( p, g - new_root_grossmin_new ); }
		if let Some( g ) = q_gm { self.set_netmin( q, g - root_grossmin_new ); }
		if let Some( g ) = r_gm { self.set_netmin( r, g - root_grossmin_new ); }

		// bhead/btail
		self.set_bhead( root, if self.is_external( q ) { q } else { self.bhead( q ) } );
		self.set_btail( new_root, if self.is_external( r ) { r } else { self.btail( r ) } );

		// height
		let root_height = 1 + self.height( q ).max( self.height( r ) );
		self.set_height( root, root_height );
		self.set_height( new_root, 1 + self.height( p ).max( root_height ) );

		#[cfg( feature = "verbose" )]
		eprintln!( "rotate_right({root}): new root {new_root}, grosscost {new_root_grosscost}" );

		new_root
	}

	fn set_left( &mut self, h : Handle, left : Handle ) {
		match &mut self.node_mut( h ).kind {
			crate::tree::NodeKind::Internal { left : l, .. } => *l = left,
			crate::tree::NodeKind::External { .. } => panic!( "set_left(): node is external" )
		}
	}

	fn set_right( &mut self, h : Handle, right : Handle ) {
		match &mut self.node_mut( h ).kind {
			crate::tree::NodeKind::Internal { right : r, .. } => *r = right,
			crate::tree::NodeKind::External { .. } => panic!( "set_right(): node is external" )
		}
	}

	fn set_bhead( &mut self, h : Handle, bhead : Handle ) {
		match &mut self.node_mut( h ).kind {
			crate::tree::NodeKind::Internal { bhead : b, .. } => *b = bhead,
			crate::tree::NodeKind::External { .. } => panic!( "set_bhead(): node is external" )
		}
	}

	fn set_btail( &mut self, h : Handle, btail : Handle ) {
		match &mut self.node_mut( h ).kind {
			crate::tree::NodeKind::Internal { btail : b, .. } => *b = btail,
			crate::tree::NodeKind::External { .. } => panic!( "set_btail(): node is external" )
		}
	}

	fn set_height( &mut self, h : Handle, height : u32 ) {
		self.node_mut( h ).height = height;
	}
}
