//! Property tests checking `PathTree<f64>` against a plain `Vec<f64>` oracle,
//! driven by the `generate` feature's random helpers.

use dynpath::generate::generate_path;
use dynpath::tree::PathTree;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand::Rng;

fn rng_for( seed : u64 ) -> StdRng {
	StdRng::seed_from_u64( seed )
}

#[test]
fn vectorize_round_trips_the_generating_sequence() {
	for seed in 0..20u64 {
		let mut rng = rng_for( seed );
		let n = rng.gen_range( 1..40 );
		let mut t : PathTree<f64> = PathTree::new();
		let ( root, costs ) = generate_path( &mut t, n, &mut rng );

		assert_eq!( t.vectorize_edges( root ), costs );
		assert_eq!( t.vectorize_vertices( root ).len(), n );

		let bound = if n <= 1 { 1 } else { ( 2.0 * ( n as f64 ).log2() ).ceil() as u32 + 1 };
		assert!( t.height( root ) <= bound, "seed {seed}: height {} exceeds bound {bound}", t.height( root ) );
	}
}

#[test]
fn split_before_then_concatenate_is_identity_on_vectorize() {
	for seed in 0..20u64 {
		let mut rng = rng_for( seed );
		let n = rng.gen_range( 2..40 );
		let mut t : PathTree<f64> = PathTree::new();
		let ( root, costs ) = generate_path( &mut t, n, &mut rng );

		let k = rng.gen_range( 1..n );
		let mut leaf_k = t.head( root );
		for _ in 0..k {
			leaf_k = t.after( leaf_k ).unwrap();
		}

		let ( p, q, x ) = t.split_before( leaf_k );
		let p = p.unwrap();
		let x = x.unwrap();

		assert_eq!( t.vectorize_edges( p ), costs[ ..k - 1 ] );
		assert_eq!( t.vectorize_edges( q ), costs[ k.. ] );
		assert_eq!( x, costs[ k - 1 ] );

		let rejoined = t.concatenate( Some( p ), Some( q ), x ).unwrap();
		assert_eq!( t.vectorize_edges( rejoined ), costs, "seed {seed}" );
	}
}

#[test]
fn split_after_then_concatenate_is_identity_on_vectorize() {
	for seed in 0..20u64 {
		let mut rng = rng_for( seed );
		let n = rng.gen_range( 2..40 );
		let mut t : PathTree<f64> = PathTree::new();
		let ( root, costs ) = generate_path( &mut t, n, &mut rng );

		let k = rng.gen_range( 0..n - 1 );
		let mut leaf_k = t.head( root );
		for _ in 0..k {
			leaf_k = t.after( leaf_k ).unwrap();
		}

		let ( p, q, y ) = t.split_after( leaf_k );
		let q = q.unwrap();
		let y = y.unwrap();

		assert_eq!( t.vectorize_edges( p ), costs[ ..k ] );
		assert_eq!( t.vectorize_edges( q ), costs[ k + 1.. ] );
		assert_eq!( y, costs[ k ] );

		let rejoined = t.concatenate( Some( p ), Some( q ), y ).unwrap();
		assert_eq!( t.vectorize_edges( rejoined ), costs, "seed {seed}" );
	}
}

#[test]
fn pmincost_before_and_after_agree_on_the_minimum() {
	for seed in 0..20u64 {
		let mut rng = rng_for( seed );
		let n = rng.gen_range( 2..40 );
		let mut t : PathTree<f64> = PathTree::new();
		let ( root, costs ) = generate_path( &mut t, n, &mut rng );

		let expected_min = costs.iter().cloned().fold( f64::INFINITY, f64::min );

		let before = t.pmincost_before( root ).unwrap();
		let after = t.pmincost_after( root ).unwrap();

		assert_eq!( t.pcost_before( before ), Some( expected_min ) );
		assert_eq!( t.pcost_after( after ), Some( expected_min ) );
	}
}

#[test]
fn pupdate_shifts_exactly_the_updated_slice() {
	for seed in 0..20u64 {
		let mut rng = rng_for( seed );
		let n = rng.gen_range( 3..40 );
		let mut t : PathTree<f64> = PathTree::new();
		let ( root, costs ) = generate_path( &mut t, n, &mut rng );

		let s = rng.gen_range( 0..n - 1 );
		let e = rng.gen_range( s + 1..n );
		let delta = rng.gen_range( -50.0..50.0 );

		let mut leaf_s = t.head( root );
		for _ in 0..s {
			leaf_s = t.after( leaf_s ).unwrap();
		}
		let mut leaf_e = t.head( root );
		for _ in 0..e {
			leaf_e = t.after( leaf_e ).unwrap();
		}

		let ( before_s, rest, cost_s ) = t.split_before( leaf_s );
		let ( mid, after_e, cost_e ) = t.split_after( leaf_e );
		let _ = rest;

		t.pupdate( mid, delta );

		let mut rejoined = mid;
		if let Some( ae ) = after_e {
			rejoined = t.concatenate( Some( rejoined ), Some( ae ), cost_e.unwrap() ).unwrap();
		}
		if let Some( bs ) = before_s {
			rejoined = t.concatenate( Some( bs ), Some( rejoined ), cost_s.unwrap() ).unwrap();
		}

		// `mid` spans vertices s..=e, i.e. edges s..e (exclusive of e).
		let mut expected = costs.clone();
		for c in &mut expected[ s..e ] {
			*c += delta;
		}

		let got = t.vectorize_edges( rejoined );
		assert_eq!( got.len(), expected.len(), "seed {seed}" );
		for ( g, e ) in got.iter().zip( expected.iter() ) {
			assert!( ( g - e ).abs() < 1e-6, "seed {seed}: {g} vs {e}" );
		}
	}
}

#[test]
fn neighbor_consistency_holds_for_every_vertex() {
	let mut rng = rng_for( 7 );
	let n = 30;
	let mut t : PathTree<f64> = PathTree::new();
	let ( root, _costs ) = generate_path( &mut t, n, &mut rng );

	let mut v = t.head( root );
	loop {
		if let Some( b ) = t.before( v ) {
			assert_eq!( t.after( b ), Some( v ) );
		}
		match t.after( v ) {
			Some( next ) => v = next,
			None => break
		}
	}
}
