use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::{Bounded, CheckedAdd, One, Zero};

/// A trait representing an edge capacity type which is typically an integer.
///
/// Termination of the augmenting loop relies on capacities being integral;
/// the classic Ford-Fulkerson method is not guaranteed to terminate on
/// irrational capacities, so only integer impls are provided.
pub trait Capacity:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + One
    + Bounded
    + CheckedAdd
    + Debug
    + Display
    + Default
{
}

impl Capacity for i32 {}

impl Capacity for i64 {}

impl Capacity for u32 {}

impl Capacity for u64 {}
