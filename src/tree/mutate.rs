//! Mutators: `pupdate`, `concatenate`, `split_before`, `split_after`
//! (`spec.md` §4.6).

use crate::cost::PathCost;
use crate::tree::PathTree;
use crate::Handle;

impl<C : PathCost> PathTree<C> {
	/// Add `x` to the cost of every edge on the path rooted at `p`. `p` must
	/// be a root and must be internal (a single-vertex path has no edges to
	/// update).
	pub fn pupdate( &mut self, p : Handle, x : C ) {
		debug_assert!( self.parent( p ).is_none(), "pupdate(): p must be a root" );
		debug_assert!( !self.is_external( p ), "pupdate(): p must not be external" );
		self.add_netmin( p, x );
	}

	/// Join the path rooted at `p` to the path rooted at `q` with a new edge
	/// of gross cost `x` between `p`'s tail and `q`'s head. Either side may be
	/// `None` (an empty path), in which case the other side is returned
	/// unchanged. Returns `None` only if both `p` and `q` are `None`.
	pub fn concatenate( &mut self, p : Option<Handle>, q : Option<Handle>, x : C ) -> Option<Handle> {
		let ( p, q ) = match ( p, q ) {
			( None, q ) => return q,
			( p, None ) => return p,
			( Some( p ), Some( q ) ) => ( p, q )
		};

		let root = self.construct( p, q, x );
		Some( self.top_down_balance( root ) )
	}

	/// Split the path containing `v` into the portion before `v` (not
	/// including `v`) and the portion from `v` onward, plus the gross cost of
	/// the edge `[before(v), v]`. If `v` is the head of its path, the first
	/// portion is `None` and the cost is `None`. `v` must be an external
	/// (vertex) node.
	pub fn split_before( &mut self, v : Handle ) -> ( Option<Handle>, Handle, Option<C> ) {
		debug_assert!( self.is_external( v ), "split_before(): v must be external" );

		let path_root = self.path( v );
		if v == self.head( path_root ) {
			return ( None, path_root, None );
		}

		let mut chain = vec![ v ];
		let mut cur = v;
		while let Some( p ) = self.parent( cur ) {
			chain.push( p );
			cur = p;
		}

		let mut edge_index = 0;
		for i in 0..chain.len() - 1 {
			if self.right( chain[ i + 1 ] ) == chain[ i ] {
				edge_index = i + 1;
				break;
			}
		}
		debug_assert!( edge_index > 0 );

		let mut p_list : Vec<Handle> = Vec::new();
		let mut p_cost : Vec<C> = Vec::new();
		let mut q_list : Vec<Handle> = Vec::new();
		let mut q_cost : Vec<C> = Vec::new();

		for i in ( edge_index + 1..chain.len() ).rev() {
			let ( left, right, cost ) = self.destroy( chain[ i ] );
			if left == chain[ i - 1 ] {
				q_list.push( right );
				q_cost.push( cost );
			}
			else {
				p_list.push( left );
				p_cost.push( cost );
			}
		}

		let ( left, right, x ) = self.destroy( chain[ edge_index ] );
		p_list.push( left );
		q_list.push( right );

		let mut p_root = p_list[ 0 ];
		for i in 1..p_list.len() {
			p_root = self.concatenate( Some( p_root ), Some( p_list[ i ] ), p_cost[ i - 1 ] ).unwrap();
		}

		let mut q_root = *q_list.last().unwrap();
		for i in ( 0..q_list.len() - 1 ).rev() {
			q_root = self.concatenate( Some( q_root ), Some( q_list[ i ] ), q_cost[ i ] ).unwrap();
		}

		( Some( p_root ), q_root, Some( x ) )
	}

	/// Split the path containing `v` into the portion up to and including `v`
	/// and the portion after `v`, plus the gross cost of the edge
	/// `[v, after(v)]`. If `v` is the tail of its path, the second portion is
	/// `None` and the cost is `None`. `v` must be an external (vertex) node.
	pub fn split_after( &mut self, v : Handle ) -> ( Handle, Option<Handle>, Option<C> ) {
		debug_assert!( self.is_external( v ), "split_after(): v must be external" );

		let path_root = self.path( v );
		if v == self.tail( path_root ) {
			return ( path_root, None, None );
		}

		let mut chain = vec![ v ];
		let mut cur = v;
		while let Some( p ) = self.parent( cur ) {
			chain.push( p );
			cur = p;
		}

		let mut edge_index = 0;
		for i in 0..chain.len() - 1 {
			if self.left( chain[ i + 1 ] ) == chain[ i ] {
				edge_index = i + 1;
				break;
			}
		}
		debug_assert!( edge_index > 0 );

		let mut p_list : Vec<Handle> = Vec::new();
		let mut p_cost : Vec<C> = Vec::new();
		let mut q_list : Vec<Handle> = Vec::new();
		let mut q_cost : Vec<C> = Vec::new();

		for i in ( edge_index + 1..chain.len() ).rev() {
			let ( left, right, cost ) = self.destroy( chain[ i ] );
			if left == chain[ i - 1 ] {
				q_list.push( right );
				q_cost.push( cost );
			}
			else {
				p_list.push( left );
				p_cost.push( cost );
			}
		}

		let ( left, right, y ) = self.destroy( chain[ edge_index ] );
		p_list.push( left );
		q_list.push( right );

		let mut p_root = p_list[ 0 ];
		for i in 1..p_list.len() {
			p_root = self.concatenate( Some( p_root ), Some( p_list[ i ] ), p_cost[ i - 1 ] ).unwrap();
		}

		let mut q_root = *q_list.last().unwrap();
		for i in ( 0..q_list.len() - 1 ).rev() {
			q_root = self.concatenate( Some( q_root ), Some( q_list[ i ] ), q_cost[ i ] ).unwrap();
		}

		( p_root, Some( q_root ), Some( y ) )
	}
}
