//! The generic edge-cost type.
//!
//! An edge cost must support addition, subtraction and a total order; the
//! relative-cost arithmetic in [`crate::tree`] additionally needs an
//! equality-to-zero test, which for floating-point instantiations is tolerant
//! of a small epsilon and for integral instantiations is exact (see
//! `spec.md` §4.1 and §9).

use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

use num_traits::Zero;

/// Tolerance used by [`PathCost::is_close_to_zero`] for floating-point types.
pub const EPSILON : f64 = 1e-6;

/// A path edge cost: a totally ordered additive group supplied by the caller.
///
/// Implemented directly for the primitive numeric types the original data
/// structure was instantiated with (`f64`, `f32`, `u32`, `i32`) plus the
/// additional integer widths `spec.md` calls out as tested (`i64`, `isize`,
/// `u64`, `usize`). Each impl is written out concretely, rather than via a
/// blanket impl over a floating/integer marker trait, because `f64`/`f32` and
/// the integer types are otherwise unrelated from the type system's point of
/// view and a pair of overlapping blanket impls would conflict.
pub trait PathCost : Copy + PartialOrd + Add<Self, Output = Self> + Sub<Self, Output = Self> + Zero + Debug + Display {
	/// Whether this value is close enough to zero to be treated as the
	/// minimum of its subtree (floating types) or is exactly zero (integral
	/// types). See `spec.md` §4.1 ("Epsilon").
	fn is_close_to_zero( &self ) -> bool;
}

macro_rules! impl_path_cost_float {
	( $t:ty ) => {
		impl PathCost for $t {
			fn is_close_to_zero( &self ) -> bool {
				( *self as f64 ).abs() < EPSILON
			}
		}
	};
}

macro_rules! impl_path_cost_int {
	( $t:ty ) => {
		impl PathCost for $t {
			fn is_close_to_zero( &self ) -> bool {
				self.is_zero()
			}
		}
	};
}

impl_path_cost_float!( f64 );
impl_path_cost_float!( f32 );

impl_path_cost_int!( i32 );
impl_path_cost_int!( i64 );
impl_path_cost_int!( isize );
impl_path_cost_int!( u32 );
impl_path_cost_int!( u64 );
impl_path_cost_int!( usize );
