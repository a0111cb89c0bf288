//! Invariant checking, enabled by the `verify` feature. Mirrors the
//! `cfg!(feature = "...")`-const-plus-`if` pattern the teacher uses for its
//! own (link-cut tree) invariant checks, rather than `#[cfg]`-gating the call
//! sites: the checking code stays type-checked regardless of which features
//! are enabled, only its execution is skipped.

use num_traits::Zero;

use crate::cost::PathCost;
use crate::tree::PathTree;
use crate::Handle;

/// Whether [`PathTree::debug_check_invariants`] calls actually run. `false`
/// (and hence a no-op) unless the crate is built with `--features verify`.
pub(crate) const VERIFY : bool = cfg!( feature = "verify" );

impl<C : PathCost> PathTree<C> {
	/// Recursively check the structural and relative-cost invariants of the
	/// subtree rooted at `h` (panics via `assert!` on violation). Only
	/// meaningful for a genuine subtree root, since `grossmin` is accumulated
	/// from `h` down rather than from the true tree root.
	pub(crate) fn debug_check_invariants( &self, h : Handle ) -> u32 {
		if self.is_external( h ) {
			assert_eq!( self.height( h ), 1, "external node height must be 1" );
			return 1;
		}

		let left = self.left( h );
		let right = self.right( h );

		let left_height = self.debug_check_invariants( left );
		let right_height = self.debug_check_invariants( right );

		assert!(
			( left_height as i64 - right_height as i64 ).abs() <= 1,
			"height imbalance at {h}: left={left_height} right={right_height}"
		);
		assert_eq!( self.height( h ), 1 + left_height.max( right_height ), "height field stale at {h}" );

		assert!( !( self.netcost( h ) < C::zero() ), "netcost must be non-negative at {h}" );
		if !self.is_external( left ) {
			assert!( !( self.netmin( left ) < C::zero() ), "child netmin must be non-negative at {left}" );
		}
		if !self.is_external( right ) {
			assert!( !( self.netmin( right ) < C::zero() ), "child netmin must be non-negative at {right}" );
		}

		let expected_bhead = if self.is_external( left ) { left } else { self.bhead( left ) };
		assert_eq!( self.bhead( h ), expected_bhead, "bhead shortcut stale at {h}" );
		let expected_btail = if self.is_external( right ) { right } else { self.btail( right ) };
		assert_eq!( self.btail( h ), expected_btail, "btail shortcut stale at {h}" );

		1 + left_height.max( right_height )
	}
}
