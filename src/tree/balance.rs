//! Top-down height rebalancing (`spec.md` §4.4).
//!
//! Invoked after every structural change (`concatenate`, and each
//! reattachment performed while reassembling `split_before`/`split_after`).
//! Maintains `|left.height - right.height| <= 1` at every internal node,
//! giving an AVL-like height bound.

use crate::cost::PathCost;
use crate::tree::PathTree;
use crate::Handle;

impl<C : PathCost> PathTree<C> {
	fn promote( &mut self, h : Handle, root_netmin : C ) {
		if !self.is_external( h ) {
			let v = self.netmin( h );
			self.set_netmin( h, v + root_netmin );
		}
	}

	fn demote( &mut self, h : Handle, root_netmin : C ) {
		if !self.is_external( h ) {
			let v = self.netmin( h );
			self.set_netmin( h, v - root_netmin );
		}
	}

	fn height_diff( &self, a : Handle, b : Handle ) -> i64 {
		self.height( a ) as i64 - self.height( b ) as i64
	}

	/// Rebalance the subtree rooted at `root`. `root` must currently be an
	/// actual tree root (no parent), so that its `netmin` is already its
	/// absolute gross value — see [`crate::tree::rotate`]'s caller contract.
	/// Returns the (possibly different) new root.
	pub(crate) fn top_down_balance( &mut self, root : Handle ) -> Handle {
		if self.is_external( root ) {
			return root;
		}

		let mut p = self.left( root );
		let mut q = self.right( root );

		if self.height_diff( p, q ).abs() <= 1 {
			if crate::tree::verify::VERIFY {
				self.debug_check_invariants( root );
			}
			return root;
		}

		let root_netmin = self.netmin( root );

		if !self.is_external( p ) {
			self.promote( p, root_netmin );
			p = self.top_down_balance( p );
			self.node_mut( p ).parent = Some( root );
			self.set_left_child( root, p );
			self.demote( p, root_netmin );
		}

		if !self.is_external( q ) {
			self.promote( q, root_netmin );
			q = self.top_down_balance( q );
			self.node_mut( q ).parent = Some( root );
			self.set_right_child( root, q );
			self.demote( q, root_netmin );
		}

		if self.height( p ) >= self.height( q ) + 2 {
			let p_left = self.left( p );
			let p_right = self.right( p );
			if self.height( p_left ) < self.height( p_right ) {
				self.promote( p, root_netmin );
				let new_p = self.rotate_left( p );
				self.node_mut( new_p ).parent = Some( root );
				self.set_left_child( root, new_p );
				self.demote( new_p, root_netmin );
			}
			#[cfg( feature = "verbose" )]
			eprintln!( "top_down_balance({root}): right-heavy, rotate_right" );
			let new_root = self.rotate_right( root );
			if crate::tree::verify::VERIFY {
				self.debug_check_invariants( new_root );
			}
			return new_root;
		}

		if self.height( q ) >= self.height( p ) + 2 {
			let q_right = self.right( q );
			let q_left = self.left( q );
			if self.height( q_right ) < self.height( q_left ) {
				self.promote( q, root_netmin );
				let new_q = self.rotate_right( q );
				self.node_mut( new_q ).parent = Some( root );
				self.set_right_child( root, new_q );
				self.demote( new_q, root_netmin );
			}
			#[cfg( feature = "verbose" )]
			eprintln!( "top_down_balance({root}): left-heavy, rotate_left" );
			let new_root = self.rotate_left( root );
			if crate::tree::verify::VERIFY {
				self.debug_check_invariants( new_root );
			}
			return new_root;
		}

		if crate::tree::verify::VERIFY {
			self.debug_check_invariants( root );
		}

		root
	}

	fn set_left_child( &mut self, h : Handle, left : Handle ) {
		match &mut self.node_mut( h ).kind {
			crate::tree::NodeKind::Internal { left : l, .. } => *l = left,
			crate::tree::NodeKind::External { .. } => panic!( "set_left_child(): node is external" )
		}
	}

	fn set_right_child( &mut self, h : Handle, right : Handle ) {
		match &mut self.node_mut( h ).kind {
			crate::tree::NodeKind::Internal { right : r, .. } => *r = right,
			crate::tree::NodeKind::External { .. } => panic!( "set_right_child(): node is external" )
		}
	}
}
