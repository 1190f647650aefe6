//! Fixed-range integer types built on the exact arithmetic core.

//	Arithmetic here is on unbounded values, and every result is then range
//	checked before it is returned, so the lint would only flag the exact
//	operations the range checks rely on.
#![allow(clippy::arithmetic_side_effects, reason = "Range checks are applied to every result explicitly")]



//		Modules																											

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::{ArithmeticError, ConversionError},
	integer::Integer,
};
use core::{
	fmt::{Display, Formatter, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	str::FromStr,
};
use num_bigint::{BigInt, Sign};
use num_traits::One;



//		Type aliases																									

/// Type alias for signed integers, for convenience.
pub type SInt<const BITS: u64> = Int<BITS, true>;

/// Type alias for unsigned integers, for convenience.
pub type UInt<const BITS: u64> = Int<BITS, false>;

/// A signed integer with a magnitude of at most 255 bits, i.e. within
/// `-(2^255 - 1)..=2^255 - 1`.
pub type I256 = SInt<255>;

/// An unsigned integer of at most 256 bits, i.e. within `0..=2^256 - 1`.
pub type U256 = UInt<256>;



//		Macros																											

/// Implements a binary operator, its by-reference form, and its assigning
/// form in terms of the matching `checked_*` method.
macro_rules! impl_binary_op {
	($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident) => {
		//󰭅		$trait															
		impl<const BITS: u64, const SIGNED: bool> $trait for Int<BITS, SIGNED> {
			type Output = Self;
			
			#[expect(clippy::panic, reason = "Out of range is a caller logic error")]
			fn $method(self, rhs: Self) -> Self::Output {
				self.$checked(&rhs).unwrap_or_else(|err| panic!("{err}"))
			}
		}
		
		//󰭅		$trait<&>														
		impl<const BITS: u64, const SIGNED: bool> $trait for &Int<BITS, SIGNED> {
			type Output = Int<BITS, SIGNED>;
			
			#[expect(clippy::panic, reason = "Out of range is a caller logic error")]
			fn $method(self, rhs: Self) -> Self::Output {
				self.$checked(rhs).unwrap_or_else(|err| panic!("{err}"))
			}
		}
		
		//󰭅		$assign_trait													
		impl<const BITS: u64, const SIGNED: bool> $assign_trait for Int<BITS, SIGNED> {
			#[expect(clippy::panic, reason = "Out of range is a caller logic error")]
			fn $assign_method(&mut self, rhs: Self) {
				*self = self.$checked(&rhs).unwrap_or_else(|err| panic!("{err}"));
			}
		}
	};
}

/// Implements fallible conversions between [`Int`] and a primitive integer.
macro_rules! impl_primitive_conversions {
	($($primitive:ty),* $(,)?) => {$(
		//󰭅		TryFrom: $primitive -> Int										
		impl<const BITS: u64, const SIGNED: bool> TryFrom<$primitive> for Int<BITS, SIGNED> {
			type Error = ConversionError;
			
			fn try_from(v: $primitive) -> Result<Self, Self::Error> {
				Self::new(BigInt::from(v))
			}
		}
		
		//󰭅		TryFrom: &Int -> $primitive										
		impl<const BITS: u64, const SIGNED: bool> TryFrom<&Int<BITS, SIGNED>> for $primitive {
			type Error = ConversionError;
			
			fn try_from(v: &Int<BITS, SIGNED>) -> Result<Self, Self::Error> {
				<$primitive>::try_from(v.0.as_bigint()).map_err(|_err| {
					if v.is_negative() && <$primitive>::MIN == 0 {
						ConversionError::ValueIsNegative
					} else {
						ConversionError::ValueTooLarge
					}
				})
			}
		}
		
		//󰭅		TryFrom: Int -> $primitive										
		impl<const BITS: u64, const SIGNED: bool> TryFrom<Int<BITS, SIGNED>> for $primitive {
			type Error = ConversionError;
			
			fn try_from(v: Int<BITS, SIGNED>) -> Result<Self, Self::Error> {
				<$primitive>::try_from(&v)
			}
		}
	)*};
}



//		Structs																											

//		Int																		
/// A fixed-range integer backed by arbitrary-precision arithmetic.
///
/// Every operation computes its exact result first, and then decides whether
/// that result still fits the declared range. A value outside the range is
/// never returned.
///
/// # Type parameters
///
/// * `BITS`   - The maximum number of bits the magnitude may occupy.
/// * `SIGNED` - Whether the integer is signed (`true`) or unsigned (`false`).
///
/// # Range
///
/// The range is expressed as a limit on the bit length of the magnitude, not
/// as a two's-complement width. A signed `Int<255, true>` therefore covers
/// `-(2^255 - 1)..=2^255 - 1`, which is symmetric and one value narrower on
/// the negative side than a conventional 256-bit signed integer. An unsigned
/// `Int<256, false>` covers `0..=2^256 - 1`.
///
/// # Failure
///
/// There are two distinct failure channels:
///
///   1. Constructing a value from external input (text, a [`BigInt`], a
///      scaled literal, a primitive) is fallible and returns a
///      [`ConversionError`].
///   2. Arithmetic that leaves the range panics with the relevant
///      [`ArithmeticError`]. The `checked_*` methods return that error
///      instead, for callers that want to handle it.
///
/// # Division by zero
///
/// Signed and unsigned types deliberately differ here. Dividing a signed
/// value by zero panics with [`ArithmeticError::DivisionByZero`], whereas
/// dividing an unsigned value by zero returns zero. The remainder follows the
/// same rule. Division is Euclidean, as described for [`Integer`].
///
/// # Multiplication
///
/// Multiplication is rejected up front when the bit lengths of the operands
/// add up to more than `BITS`. This is conservative: some products that
/// would fit are refused. Products that pass are still checked exactly.
///
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Int<const BITS: u64, const SIGNED: bool>(Integer);

//󰭅		Int																		
impl<const BITS: u64, const SIGNED: bool> Int<BITS, SIGNED> {
	//		Public constants													
	/// Maximum number of bits the magnitude may occupy.
	pub const BITS:   u64  = BITS;
	
	/// Whether negative values are representable.
	pub const SIGNED: bool = SIGNED;
	
	//		Constructors														
	
	//		new																	
	/// Creates a new [`Int`] from a [`BigInt`].
	///
	/// # Parameters
	///
	/// * `value` - The value to create the [`Int`] from.
	///
	/// # Errors
	///
	/// Returns an error if the value is outside the range of the type.
	///
	pub fn new(value: BigInt) -> Result<Self, ConversionError> {
		Self::bounded(Integer::from(value))
	}
	
	//		one																	
	/// The value of `1` as an [`Int`].
	#[must_use]
	pub fn one() -> Self {
		Self(Integer::one())
	}
	
	//		parse																
	/// Parses a string into an [`Int`].
	///
	/// Accepts the same syntax as [`Integer::parse()`].
	///
	/// # Parameters
	///
	/// * `s` - The string to parse.
	///
	/// # Errors
	///
	/// If the text is malformed, or the number is outside the range of the
	/// type, an error will be returned.
	///
	pub fn parse(s: &str) -> Result<Self, ConversionError> {
		Self::bounded(Integer::parse(s)?)
	}
	
	//		with_decimal														
	/// Creates a new [`Int`] with the value `n × 10^dec`.
	///
	/// A negative `dec` produces zero, as described for
	/// [`Integer::with_decimal()`].
	///
	/// # Parameters
	///
	/// * `n`   - The coefficient.
	/// * `dec` - The power of ten to scale `n` by.
	///
	/// # Errors
	///
	/// Returns an error if the scaled value is outside the range of the type.
	///
	pub fn with_decimal(n: i64, dec: i32) -> Result<Self, ConversionError> {
		//	10^dec > 2^dec, so any non-zero n already exceeds the range here
		if n != 0 && dec > 0 && u64::from(dec.unsigned_abs()) > BITS {
			return Err(if !SIGNED && n < 0 {
				ConversionError::ValueIsNegative
			} else {
				ConversionError::ValueTooLarge
			});
		}
		Self::bounded(Integer::with_decimal(n, dec))
	}
	
	//		zero																
	/// The value of `0` as an [`Int`].
	#[must_use]
	pub fn zero() -> Self {
		Self(Integer::zero())
	}
	
	//		max_value															
	/// The maximum value for an [`Int`], i.e. `2^BITS - 1`.
	#[must_use]
	pub fn max_value() -> Self {
		Self(Integer::from((BigInt::one() << BITS) - BigInt::one()))
	}
	
	//		min_value															
	/// The minimum value for an [`Int`].
	///
	/// For signed types this is the negation of [`max_value()`](Int::max_value()),
	/// and for unsigned types it is zero.
	///
	#[must_use]
	pub fn min_value() -> Self {
		if SIGNED {
			Self(-&Self::max_value().0)
		} else {
			Self::zero()
		}
	}
	
	//		Public methods														
	
	//		as_integer															
	/// Borrows the underlying [`Integer`].
	#[must_use]
	pub const fn as_integer(&self) -> &Integer {
		&self.0
	}
	
	//		bits																
	/// The number of bits occupied by the magnitude, excluding sign.
	#[must_use]
	pub fn bits(&self) -> u64 {
		self.0.bits()
	}
	
	//		checked_add															
	/// Checked addition.
	///
	/// Computes `self + rhs`, returning an error if the result is outside the
	/// range of the type.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the result is too large, or
	/// [`ArithmeticError::Underflow`] if an unsigned result would be negative.
	///
	pub fn checked_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		Self::checked(&self.0 + &rhs.0)
	}
	
	//		checked_div															
	/// Checked division.
	///
	/// Computes `self / rhs`. For unsigned types, division by zero yields
	/// zero rather than an error.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero and the
	/// type is signed.
	///
	pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if rhs.is_zero() {
			return Self::divided_by_zero();
		}
		Self::checked(&self.0 / &rhs.0)
	}
	
	//		checked_mul															
	/// Checked multiplication.
	///
	/// Computes `self * rhs`, returning an error if the sum of the operands'
	/// bit lengths exceeds `BITS`, or if the exact product is outside the
	/// range of the type.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if either check fails.
	///
	pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if self.0.bits().saturating_add(rhs.0.bits()) > BITS {
			return Err(ArithmeticError::Overflow);
		}
		Self::checked(&self.0 * &rhs.0)
	}
	
	//		checked_rem															
	/// Checked Euclidean remainder.
	///
	/// Computes `self % rhs`. For unsigned types, a zero divisor yields zero
	/// rather than an error.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero and the
	/// type is signed.
	///
	pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		if rhs.is_zero() {
			return Self::divided_by_zero();
		}
		Self::checked(&self.0 % &rhs.0)
	}
	
	//		checked_sub															
	/// Checked subtraction.
	///
	/// Computes `self - rhs`, returning an error if the result is outside the
	/// range of the type.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	/// # Errors
	///
	/// Returns [`ArithmeticError::Overflow`] if the result is too large, or
	/// [`ArithmeticError::Underflow`] if an unsigned result would be negative.
	///
	pub fn checked_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		Self::checked(&self.0 - &rhs.0)
	}
	
	//		add_raw																
	/// Adds a primitive integer to `self`.
	///
	/// The operand must itself be a value of this type. For an unsigned type
	/// a negative `rhs` is therefore refused, even where adding it would give
	/// an in-range result, so `U256::from_u64(5).add_raw(-1)` panics.
	///
	/// # Panics
	///
	/// Panics with [`ArithmeticError::Underflow`] if `rhs` is negative and the
	/// type is unsigned, or with [`ArithmeticError::Overflow`] if `rhs` is too
	/// large for the type or the result is outside the range of the type.
	///
	#[expect(clippy::panic, reason = "Out of range is a caller logic error")]
	#[must_use]
	pub fn add_raw<T>(&self, rhs: T) -> Self
	where
		Self: TryFrom<T, Error = ConversionError>,
	{
		self.checked_add(&Self::from_raw(rhs)).unwrap_or_else(|err| panic!("{err}"))
	}
	
	//		div_raw																
	/// Divides `self` by a primitive integer.
	///
	/// # Panics
	///
	/// Panics if `rhs` cannot be represented by this type, or if `rhs` is zero
	/// and the type is signed.
	///
	#[expect(clippy::panic, reason = "Out of range is a caller logic error")]
	#[must_use]
	pub fn div_raw<T>(&self, rhs: T) -> Self
	where
		Self: TryFrom<T, Error = ConversionError>,
	{
		self.checked_div(&Self::from_raw(rhs)).unwrap_or_else(|err| panic!("{err}"))
	}
	
	//		mul_raw																
	/// Multiplies `self` by a primitive integer.
	///
	/// # Panics
	///
	/// Panics if `rhs` cannot be represented by this type, or if the
	/// multiplication overflows.
	///
	#[expect(clippy::panic, reason = "Out of range is a caller logic error")]
	#[must_use]
	pub fn mul_raw<T>(&self, rhs: T) -> Self
	where
		Self: TryFrom<T, Error = ConversionError>,
	{
		self.checked_mul(&Self::from_raw(rhs)).unwrap_or_else(|err| panic!("{err}"))
	}
	
	//		sub_raw																
	/// Subtracts a primitive integer from `self`.
	///
	/// As with [`add_raw()`](Int::add_raw()), a negative `rhs` is refused for
	/// an unsigned type rather than being added.
	///
	/// # Panics
	///
	/// Panics with [`ArithmeticError::Underflow`] if `rhs` is negative and the
	/// type is unsigned, or if the result would be negative. Panics with
	/// [`ArithmeticError::Overflow`] if `rhs` is too large for the type or the
	/// result is too large.
	///
	#[expect(clippy::panic, reason = "Out of range is a caller logic error")]
	#[must_use]
	pub fn sub_raw<T>(&self, rhs: T) -> Self
	where
		Self: TryFrom<T, Error = ConversionError>,
	{
		self.checked_sub(&Self::from_raw(rhs)).unwrap_or_else(|err| panic!("{err}"))
	}
	
	//		into_bigint															
	/// Consumes the [`Int`] and returns the value as a [`BigInt`].
	#[must_use]
	pub fn into_bigint(self) -> BigInt {
		self.0.into_bigint()
	}
	
	//		is_negative															
	/// Determines if the value is negative.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.0.sign() == Sign::Minus
	}
	
	//		is_zero																
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}
	
	//		sign																
	/// The sign of the value.
	#[must_use]
	pub fn sign(&self) -> Sign {
		self.0.sign()
	}
	
	//		to_bigint															
	/// Returns a copy of the value as a [`BigInt`].
	#[must_use]
	pub fn to_bigint(&self) -> BigInt {
		self.0.as_bigint().clone()
	}
	
	//		to_i64																
	/// Converts the value to a native [`i64`].
	///
	/// # Panics
	///
	/// Panics if the value does not fit in an [`i64`], even though it is
	/// within the range of the type. Use [`TryFrom`] to avoid this.
	///
	#[must_use]
	pub fn to_i64(&self) -> i64 {
		self.0.to_i64()
	}
	
	//		to_u64																
	/// Converts the value to a native [`u64`].
	///
	/// # Panics
	///
	/// Panics if the value is negative or does not fit in a [`u64`]. Use
	/// [`TryFrom`] to avoid this.
	///
	#[must_use]
	pub fn to_u64(&self) -> u64 {
		self.0.to_u64()
	}
	
	//		Private methods														
	
	//		bounded																
	/// Admits a value from outside, mapping range failures onto conversion
	/// errors.
	pub(crate) fn bounded(value: Integer) -> Result<Self, ConversionError> {
		match Self::check(&value) {
			Ok(())                          => Ok(Self(value)),
			Err(ArithmeticError::Underflow) => Err(ConversionError::ValueIsNegative),
			Err(_)                          => Err(ConversionError::ValueTooLarge),
		}
	}
	
	//		check																
	/// Verifies that a value lies within the range of the type.
	fn check(value: &Integer) -> Result<(), ArithmeticError> {
		if !SIGNED && value.sign() == Sign::Minus {
			return Err(ArithmeticError::Underflow);
		}
		if value.bits() > BITS {
			return Err(ArithmeticError::Overflow);
		}
		Ok(())
	}
	
	//		checked																
	/// Admits the result of an arithmetic operation.
	fn checked(value: Integer) -> Result<Self, ArithmeticError> {
		Self::check(&value).map(|()| Self(value))
	}
	
	//		divided_by_zero														
	/// The outcome of dividing by zero, which depends on signedness.
	fn divided_by_zero() -> Result<Self, ArithmeticError> {
		if SIGNED {
			Err(ArithmeticError::DivisionByZero)
		} else {
			Ok(Self::zero())
		}
	}
	
	//		from_raw															
	/// Converts a raw operand, panicking with the arithmetic error it
	/// represents if it does not fit.
	#[expect(clippy::panic, reason = "Out of range is a caller logic error")]
	fn from_raw<T>(value: T) -> Self
	where
		Self: TryFrom<T, Error = ConversionError>,
	{
		Self::try_from(value).unwrap_or_else(|err| panic!("{}", ArithmeticError::from(err)))
	}
}

//󰭅		I256																	
impl I256 {
	//		from_i64															
	/// Creates a new [`I256`] from an [`i64`], which always fits.
	#[must_use]
	pub fn from_i64(n: i64) -> Self {
		Self(Integer::from_i64(n))
	}
}

//󰭅		U256																	
impl U256 {
	//		from_u64															
	/// Creates a new [`U256`] from a [`u64`], which always fits.
	#[must_use]
	pub fn from_u64(n: u64) -> Self {
		Self(Integer::from(BigInt::from(n)))
	}
}

impl_binary_op!(Add, add, AddAssign, add_assign, checked_add);
impl_binary_op!(Div, div, DivAssign, div_assign, checked_div);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, checked_rem);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, checked_sub);

//󰭅		Display																	
impl<const BITS: u64, const SIGNED: bool> Display for Int<BITS, SIGNED> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

//󰭅		From: Int -> BigInt														
impl<const BITS: u64, const SIGNED: bool> From<Int<BITS, SIGNED>> for BigInt {
	//		from																
	fn from(v: Int<BITS, SIGNED>) -> Self {
		v.into_bigint()
	}
}

//󰭅		FromStr																	
impl<const BITS: u64, const SIGNED: bool> FromStr for Int<BITS, SIGNED> {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

//󰭅		Neg																		
impl<const BITS: u64> Neg for Int<BITS, true> {
	type Output = Self;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		//	The range is symmetric, so the magnitude always still fits
		Self(-&self.0)
	}
}

//󰭅		Neg<&>																	
impl<const BITS: u64> Neg for &Int<BITS, true> {
	type Output = Int<BITS, true>;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		Int(-&self.0)
	}
}

//󰭅		Product																	
impl<const BITS: u64, const SIGNED: bool> Product for Int<BITS, SIGNED> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| acc * x)
	}
}

//󰭅		Product<&>																
impl<'a, const BITS: u64, const SIGNED: bool> Product<&'a Self> for Int<BITS, SIGNED> {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, x| &acc * x)
	}
}

//󰭅		Sum																		
impl<const BITS: u64, const SIGNED: bool> Sum for Int<BITS, SIGNED> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>																	
impl<'a, const BITS: u64, const SIGNED: bool> Sum<&'a Self> for Int<BITS, SIGNED> {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, x| &acc + x)
	}
}

//󰭅		TryFrom: BigInt -> Int													
impl<const BITS: u64, const SIGNED: bool> TryFrom<BigInt> for Int<BITS, SIGNED> {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		Self::new(v)
	}
}

impl_primitive_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
