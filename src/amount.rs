use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Zero};

/// A trait representing a quantity or unit cost, which is typically a signed integer.
///
/// Supply, demand, allocations and costs all share one type so that `cost * quantity` and the
/// reduced costs of Russell's method stay exact. The checked operations let the validator prove
/// up front that none of those values overflow.
pub trait Amount:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + Zero
    + Debug
    + Display
    + Default
{
}

impl Amount for i32 {}

impl Amount for i64 {}
