//! Random generation helpers for property tests, gated behind the
//! `generate` feature (optional `rand` dependency).

use rand::Rng;

use crate::cost::PathCost;

/// A cost type that has a default way of being randomly generated.
pub trait GeneratableCost : PathCost {
	/// Generate a value in this type's default range.
	fn generate( rng : &mut impl Rng ) -> Self;
}

impl GeneratableCost for f64 {
	fn generate( rng : &mut impl Rng ) -> f64 {
		rng.gen_range( -1000.0..1000.0 )
	}
}

impl GeneratableCost for f32 {
	fn generate( rng : &mut impl Rng ) -> f32 {
		rng.gen_range( -1000.0..1000.0 )
	}
}

impl GeneratableCost for i32 {
	fn generate( rng : &mut impl Rng ) -> i32 {
		rng.gen_range( -1000..1000 )
	}
}

impl GeneratableCost for i64 {
	fn generate( rng : &mut impl Rng ) -> i64 {
		rng.gen_range( -1000..1000 )
	}
}

impl GeneratableCost for isize {
	fn generate( rng : &mut impl Rng ) -> isize {
		rng.gen_range( -1000..1000 )
	}
}

impl GeneratableCost for u32 {
	fn generate( rng : &mut impl Rng ) -> u32 {
		rng.gen_range( 0..1000 )
	}
}

impl GeneratableCost for u64 {
	fn generate( rng : &mut impl Rng ) -> u64 {
		rng.gen_range( 0..1000 )
	}
}

impl GeneratableCost for usize {
	fn generate( rng : &mut impl Rng ) -> usize {
		rng.gen_range( 0..1000 )
	}
}

/// Build a random path of `num_vertices` singleton leaves (vertex ids
/// `0..num_vertices`), concatenated left-to-right with random edge costs.
/// Returns the path's root and the edge costs actually used, in order.
pub fn generate_path<C : GeneratableCost>(
	tree : &mut crate::tree::PathTree<C>,
	num_vertices : usize,
	rng : &mut impl Rng
) -> ( crate::Handle, Vec<C> ) {
	assert!( num_vertices > 0, "generate_path: need at least one vertex" );

	let mut root = tree.gen_new_node( 0usize );
	let mut costs = Vec::with_capacity( num_vertices.saturating_sub( 1 ) );
	for i in 1..num_vertices {
		let leaf = tree.gen_new_node( i );
		let cost = C::generate( rng );
		costs.push( cost );
		root = tree.concatenate( Some( root ), Some( leaf ), cost ).unwrap();
	}
	( root, costs )
}

/// Pick a uniformly random vertex handle among the `num_vertices` vertices of
/// a path built by [`generate_path`], identified by in-order position
/// `0..num_vertices`.
pub fn random_position( num_vertices : usize, rng : &mut impl Rng ) -> usize {
	rng.gen_range( 0..num_vertices )
}
