//! Literal end-to-end scenarios built directly against `PathTree<f64>`.

use dynpath::tree::PathTree;
use dynpath::VertexId;

fn build( costs : &[ f64 ] ) -> ( PathTree<f64>, dynpath::Handle ) {
	let mut t : PathTree<f64> = PathTree::new();
	let mut root = t.gen_new_node( 0usize );
	for ( i, &c ) in costs.iter().enumerate() {
		let leaf = t.gen_new_node( i + 1 );
		root = t.concatenate( Some( root ), Some( leaf ), c ).unwrap();
	}
	( t, root )
}

#[test]
fn construction_and_read_back() {
	let costs : Vec<f64> = ( 0..20 ).map( |i| i as f64 ).collect();
	let ( t, root ) = build( &costs );

	let expected_vertices : Vec<VertexId> = ( 0..=20usize ).map( VertexId::from ).collect();
	assert_eq!( t.vectorize_vertices( root ), expected_vertices );

	let head = t.head( root );
	let tail = t.tail( root );
	assert_eq!( t.vertex( head ), VertexId::from( 0usize ) );
	assert_eq!( t.vertex( tail ), VertexId::from( 20usize ) );

	let leaf0 = head;
	let leaf20 = tail;
	assert_eq!( t.pcost_after( leaf0 ), Some( 0.0 ) );
	assert_eq!( t.pcost_before( leaf20 ), Some( 19.0 ) );

	let before_min = t.pmincost_before( root ).unwrap();
	assert_eq!( t.vertex( before_min ), VertexId::from( 1usize ) );

	let after_min = t.pmincost_after( root ).unwrap();
	assert_eq!( t.vertex( after_min ), VertexId::from( 0usize ) );
}

#[test]
fn range_add_plus_five_on_prefix() {
	let costs : Vec<f64> = ( 0..20 ).map( |i| i as f64 ).collect();
	let ( mut t, root ) = build( &costs );

	let leaf0 = t.head( root );
	let ( p0, q0, x0 ) = t.split_before( leaf0 );
	assert_eq!( p0, None );
	assert_eq!( x0, None );
	let root = q0;

	// find leaf 15 by walking `after` fifteen times from the head
	let mut leaf15 = t.head( root );
	for _ in 0..15 {
		leaf15 = t.after( leaf15 ).unwrap();
	}

	let ( mid, tail_part, split_cost ) = t.split_after( leaf15 );
	let tail_part = tail_part.unwrap();
	let split_cost = split_cost.unwrap();

	t.pupdate( mid, 5.0 );

	let rejoined = t.concatenate( Some( mid ), Some( tail_part ), split_cost ).unwrap();

	let mut expected : Vec<f64> = ( 0..15 ).map( |i| i as f64 + 5.0 ).collect();
	expected.extend( ( 15..20 ).map( |i| i as f64 ) );
	assert_eq!( t.vectorize_edges( rejoined ), expected );
}

#[test]
fn range_add_minus_six_on_suffix_of_previous_state() {
	let costs : Vec<f64> = ( 0..20 ).map( |i| i as f64 ).collect();
	let ( mut t, root ) = build( &costs );

	// Reproduce the +5 on [0,15) state from the previous scenario inline.
	let leaf0 = t.head( root );
	let ( _, root, _ ) = t.split_before( leaf0 );
	let mut leaf15 = t.head( root );
	for _ in 0..15 {
		leaf15 = t.after( leaf15 ).unwrap();
	}
	let ( mid, tail_part, split_cost ) = t.split_after( leaf15 );
	let tail_part = tail_part.unwrap();
	let split_cost = split_cost.unwrap();
	t.pupdate( mid, 5.0 );
	let root = t.concatenate( Some( mid ), Some( tail_part ), split_cost ).unwrap();

	// Now split around leaves 5 and 20 (20 is the tail, so the second split is a no-op).
	let mut leaf5 = t.head( root );
	for _ in 0..5 {
		leaf5 = t.after( leaf5 ).unwrap();
	}
	let ( prefix, root, split_cost2 ) = t.split_before( leaf5 );
	let prefix = prefix.unwrap();
	let split_cost2 = split_cost2.unwrap();

	let tail_leaf = t.tail( root );
	let ( mid2, suffix, x3 ) = t.split_after( tail_leaf );
	assert_eq!( suffix, None );
	assert_eq!( x3, None );

	t.pupdate( mid2, -6.0 );

	let rejoined = t.concatenate( Some( prefix ), Some( mid2 ), split_cost2 ).unwrap();

	// Positions [0,5): only the +5 from the first range-add applies.
	// Positions [5,15): both the +5 and the -6 apply.
	// Positions [15,20): only the -6 applies.
	let mut expected : Vec<f64> = ( 0..5 ).map( |i| i as f64 + 5.0 ).collect();
	expected.extend( ( 5..15 ).map( |i| i as f64 + 5.0 - 6.0 ) );
	expected.extend( ( 15..20 ).map( |i| i as f64 - 6.0 ) );
	assert_eq!( t.vectorize_edges( rejoined ), expected );
}

#[test]
fn tied_minimum_resolves_to_head_and_tail_closest_occurrences() {
	let mut costs = vec![ 0.0; 20 ];
	for ( i, c ) in costs.iter_mut().enumerate() {
		*c = if ( 6..=11 ).contains( &i ) { 3.14 } else { 100.0 + i as f64 };
	}
	let ( mut t, root ) = build( &costs );

	let mut leaf6 = t.head( root );
	for _ in 0..6 {
		leaf6 = t.after( leaf6 ).unwrap();
	}
	let ( _, root, _ ) = t.split_before( leaf6 );

	let mut leaf12 = t.head( root );
	for _ in 0..6 {
		leaf12 = t.after( leaf12 ).unwrap();
	}
	let ( mid, _, _ ) = t.split_after( leaf12 );

	let before = t.pmincost_before( mid ).unwrap();
	assert_eq!( t.vertex( before ), VertexId::from( 7usize ) );
	assert_eq!( t.pcost_before( before ), Some( 3.14 ) );

	let after = t.pmincost_after( mid ).unwrap();
	assert_eq!( t.vertex( after ), VertexId::from( 11usize ) );
	assert_eq!( t.pcost_after( after ), Some( 3.14 ) );
}

#[test]
fn singleton_midsection_has_no_mincost() {
	let costs : Vec<f64> = ( 0..10 ).map( |i| i as f64 + 1.0 ).collect();
	let ( mut t, root ) = build( &costs );

	let mut leaf_i = t.head( root );
	for _ in 0..4 {
		leaf_i = t.after( leaf_i ).unwrap();
	}

	let ( prefix, rest, x1 ) = t.split_before( leaf_i );
	let prefix = prefix.unwrap();
	let x1 = x1.unwrap();

	let ( mid, suffix, x2 ) = t.split_after( leaf_i );
	let suffix = suffix.unwrap();
	let x2 = x2.unwrap();
	// `leaf_i` still belongs to `rest`'s tree at this point; `split_after`
	// must be called against that path, which it is since handles are
	// stable across `split_before`.
	let _ = rest;

	assert!( t.is_external( mid ) );
	assert_eq!( t.pmincost_before( mid ), None );
	assert_eq!( t.pmincost_after( mid ), None );

	let left = t.concatenate( Some( prefix ), Some( mid ), x1 ).unwrap();
	let rejoined = t.concatenate( Some( left ), Some( suffix ), x2 ).unwrap();

	assert_eq!( t.vectorize_edges( rejoined ), costs );
}

#[test]
fn head_and_tail_split_edge_cases() {
	let costs : Vec<f64> = ( 0..5 ).map( |i| i as f64 ).collect();
	let ( mut t, root ) = build( &costs );

	let head = t.head( root );
	let ( p, q, x ) = t.split_before( head );
	assert_eq!( p, None );
	assert_eq!( q, root );
	assert_eq!( x, None );

	let tail = t.tail( root );
	let ( p2, q2, y ) = t.split_after( tail );
	assert_eq!( p2, root );
	assert_eq!( q2, None );
	assert_eq!( y, None );
}
