//! Queries: `path`, `head`, `tail`, `before`, `after`, `pcost_before/after`,
//! `pmincost_before/after` (`spec.md` §4.5).
//!
//! None of these mutate the tree. The `Option<Handle>`-returning functions
//! use `None` where `dynamic_path.cpp` returns a null pointer (no such
//! vertex/edge); the cost-returning functions use `None` where it returns
//! `NAN` (no such edge).

use num_traits::Zero;

use crate::cost::PathCost;
use crate::tree::PathTree;
use crate::Handle;

impl<C : PathCost> PathTree<C> {
	/// The root of the path containing `v` (follows parent links to the top).
	pub fn path( &self, v : Handle ) -> Handle {
		let mut v = v;
		while let Some( p ) = self.parent( v ) {
			v = p;
		}
		v
	}

	/// The first vertex of the path rooted at `p`. `p` must have no parent.
	pub fn head( &self, p : Handle ) -> Handle {
		debug_assert!( self.parent( p ).is_none(), "head(): p must be a root" );
		self.bhead( p )
	}

	/// The last vertex of the path rooted at `p`. `p` must have no parent.
	pub fn tail( &self, p : Handle ) -> Handle {
		debug_assert!( self.parent( p ).is_none(), "tail(): p must be a root" );
		self.btail( p )
	}

	/// The vertex immediately before `v` on its path, or `None` if `v` is the
	/// head of its path. `v` must be an external (vertex) node.
	pub fn before( &self, v : Handle ) -> Option<Handle> {
		debug_assert!( self.is_external( v ), "before(): v must be external" );

		let mut w = v;
		loop {
			let w_parent = match self.parent( w ) {
				Some( p ) => p,
				None => return None
			};
			if self.right( w_parent ) == w {
				let u = self.left( w_parent );
				return Some( self.btail( u ) );
			}
			w = w_parent;
		}
	}

	/// The vertex immediately after `v` on its path, or `None` if `v` is the
	/// tail of its path. `v` must be an external (vertex) node.
	pub fn after( &self, v : Handle ) -> Option<Handle> {
		debug_assert!( self.is_external( v ), "after(): v must be external" );

		let mut w = v;
		loop {
			let w_parent = match self.parent( w ) {
				Some( p ) => p,
				None => return None
			};
			if self.left( w_parent ) == w {
				let u = self.right( w_parent );
				return Some( self.bhead( u ) );
			}
			w = w_parent;
		}
	}

	// Walk from `v` up to its path's root, returning the chain (v first, root
	// last) alongside each node's grossmin (the root's grossmin is its own
	// netmin; every other ancestor's grossmin is its parent's grossmin plus
	// its own netmin).
	fn ancestor_chain_with_grossmin( &self, v : Handle ) -> ( Vec<Handle>, Vec<C> ) {
		let mut chain = vec![ v ];
		let mut cur = v;
		while let Some( p ) = self.parent( cur ) {
			chain.push( p );
			cur = p;
		}

		let n = chain.len();
		let mut grossmin = vec![ C::zero(); n ];
		grossmin[ n - 1 ] = self.netmin( chain[ n - 1 ] );
		for i in ( 1..n - 1 ).rev() {
			grossmin[ i ] = grossmin[ i + 1 ] + self.netmin( chain[ i ] );
		}
		( chain, grossmin )
	}

	/// The gross cost of the edge `[before(v), v]`, or `None` if `v` is the
	/// head of its path. `v` must be an external (vertex) node.
	pub fn pcost_before( &self, v : Handle ) -> Option<C> {
		debug_assert!( self.is_external( v ), "pcost_before(): v must be external" );

		if v == self.head( self.path( v ) ) {
			return None;
		}

		let ( chain, grossmin ) = self.ancestor_chain_with_grossmin( v );
		for i in 0..chain.len() - 1 {
			if self.right( chain[ i + 1 ] ) == chain[ i ] {
				return Some( self.netcost( chain[ i + 1 ] ) + grossmin[ i + 1 ] );
			}
		}
		unreachable!( "pcost_before(): no right-child ancestor found despite v not being head" )
	}

	/// The gross cost of the edge `[v, after(v)]`, or `None` if `v` is the
	/// tail of its path. `v` must be an external (vertex) node.
	pub fn pcost_after( &self, v : Handle ) -> Option<C> {
		debug_assert!( self.is_external( v ), "pcost_after(): v must be external" );

		if v == self.tail( self.path( v ) ) {
			return None;
		}

		let ( chain, grossmin ) = self.ancestor_chain_with_grossmin( v );
		for i in 0..chain.len() - 1 {
			if self.left( chain[ i + 1 ] ) == chain[ i ] {
				return Some( self.netcost( chain[ i + 1 ] ) + grossmin[ i + 1 ] );
			}
		}
		unreachable!( "pcost_after(): no left-child ancestor found despite v not being tail" )
	}

	fn pmincost_condition_before( &self, u : Handle ) -> bool {
		if !self.netcost( u ).is_close_to_zero() {
			return false;
		}
		let left = self.left( u );
		self.is_external( left ) || self.netmin( left ) > C::zero()
	}

	/// The last vertex `u` along the path rooted at `p` such that
	/// `pcost_before(after(u))` (equivalently the edge entering `u` from the
	/// left) attains the path's minimum gross cost — i.e. the rightmost
	/// minimum-cost edge's right endpoint. `p` must be internal and a root.
	pub fn pmincost_before( &self, p : Handle ) -> Option<Handle> {
		if self.is_external( p ) {
			return None;
		}
		debug_assert!( self.parent( p ).is_none(), "pmincost_before(): p must be a root" );

		let mut u = p;
		while !self.pmincost_condition_before( u ) {
			let left = self.left( u );
			if !self.is_external( left ) && self.netmin( left ).is_close_to_zero() {
				u = left;
			}
			else {
				debug_assert!( !self.netcost( u ).is_close_to_zero() );
				u = self.right( u );
			}
		}

		let right = self.right( u );
		if self.is_external( right ) {
			Some( self.btail( u ) )
		}
		else {
			Some( self.bhead( right ) )
		}
	}

	fn pmincost_condition_after( &self, u : Handle ) -> bool {
		if !self.netcost( u ).is_close_to_zero() {
			return false;
		}
		let right = self.right( u );
		self.is_external( right ) || self.netmin( right ) > C::zero()
	}

	/// The mirror of [`Self::pmincost_before`]: the leftmost minimum-cost
	/// edge's left endpoint. `p` must be internal and a root.
	pub fn pmincost_after( &self, p : Handle ) -> Option<Handle> {
		if self.is_external( p ) {
			return None;
		}
		debug_assert!( self.parent( p ).is_none(), "pmincost_after(): p must be a root" );

		let mut u = p;
		while !self.pmincost_condition_after( u ) {
			let right = self.right( u );
			if !self.is_external( right ) && self.netmin( right ).is_close_to_zero() {
				u = right;
			}
			else {
				debug_assert!( !self.netcost( u ).is_close_to_zero() );
				u = self.left( u );
			}
		}

		let left = self.left( u );
		if self.is_external( left ) {
			Some( self.bhead( u ) )
		}
		else {
			Some( self.btail( left ) )
		}
	}
}
