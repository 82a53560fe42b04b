//! Four-operation calculator with zero-safe division.

use num_traits::{Num, ToPrimitive};
use serde::Serialize;

use crate::error::CalcError;

/// Numeric operand accepted by [`calculate`].
///
/// Integer operands use checked arithmetic so overflow surfaces as an error
/// instead of a panic; float operands follow IEEE 754 and never fail.
pub trait Operand: Num + Copy + ToPrimitive {
    /// `self + rhs`, or `None` on overflow.
    fn checked_sum(self, rhs: Self) -> Option<Self>;
    /// `self - rhs`, or `None` on overflow.
    fn checked_difference(self, rhs: Self) -> Option<Self>;
    /// `self * rhs`, or `None` on overflow.
    fn checked_product(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_operand {
    ($($t:ty),*) => {$(
        impl Operand for $t {
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
            fn checked_difference(self, rhs: Self) -> Option<Self> {
                self.checked_sub(rhs)
            }
            fn checked_product(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }
        }
    )*};
}

macro_rules! impl_float_operand {
    ($($t:ty),*) => {$(
        impl Operand for $t {
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
            fn checked_difference(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }
            fn checked_product(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

impl_integer_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_operand!(f32, f64);

/// Sum, difference, product and quotient of an operand pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation<T> {
    /// `x + y`.
    pub sum: T,
    /// `x - y`.
    pub difference: T,
    /// `x * y`.
    pub product: T,
    /// `x / y` as a real number, or `None` when `y` is zero.
    pub quotient: Option<f64>,
}

impl<T> Calculation<T> {
    /// Whether the quotient slot holds a value.
    #[must_use]
    pub fn is_division_defined(&self) -> bool {
        self.quotient.is_some()
    }
}

/// Compute all four arithmetic results of `x` and `y` in one call.
///
/// Division is true division carried out in `f64`, so integer operands still
/// produce a fractional quotient. A zero divisor leaves the quotient undefined
/// without affecting the other three results. An integer sum, difference or
/// product that overflows `T` returns [`CalcError::ArithmeticOverflow`].
///
/// # Example
/// ```
/// use numkit_core::calculate;
///
/// let r = calculate(10, 3).unwrap();
/// assert_eq!((r.sum, r.difference, r.product), (13, 7, 30));
/// assert!((r.quotient.unwrap() - 3.333).abs() < 1e-3);
///
/// assert_eq!(calculate(10, 0).unwrap().quotient, None);
/// assert!(calculate(i64::MAX, 2).is_err());
/// ```
pub fn calculate<T: Operand>(x: T, y: T) -> Result<Calculation<T>, CalcError> {
    let sum = x
        .checked_sum(y)
        .ok_or(CalcError::ArithmeticOverflow("sum"))?;
    let difference = x
        .checked_difference(y)
        .ok_or(CalcError::ArithmeticOverflow("difference"))?;
    let product = x
        .checked_product(y)
        .ok_or(CalcError::ArithmeticOverflow("product"))?;
    let quotient = if y.is_zero() {
        None
    } else {
        x.to_f64().zip(y.to_f64()).map(|(a, b)| a / b)
    };
    Ok(Calculation {
        sum,
        difference,
        product,
        quotient,
    })
}
