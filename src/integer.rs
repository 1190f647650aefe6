//! Exact arbitrary-precision integer used as the arithmetic core.

//	This lint check is unnecessary in this module because the operands are
//	unbounded, so the operations cannot overflow or wrap.
#![allow(clippy::arithmetic_side_effects, reason = "Exact arithmetic cannot overflow")]



//		Modules																											

#[cfg(test)]
#[path = "tests/integer.rs"]
mod tests;



//		Packages																										

use crate::errors::ConversionError;
use core::{
	fmt::{Display, Formatter, self},
	ops::{Add, Div, Mul, Neg, Rem, Sub},
	str::FromStr,
};
use num_bigint::{BigInt, Sign};
use num_traits::{Euclid, Num, One, ToPrimitive, Zero};



//		Structs																											

//		Integer																	
/// An exact integer of arbitrary magnitude and sign.
///
/// This is a thin layer over [`BigInt`] that provides the surface the bounded
/// [`Int`](crate::Int) types are built on. It applies no range checks of its
/// own: every operation produces the exact result, however large.
///
/// Operations are implemented on references and always return a new value,
/// so an existing [`Integer`] is never changed by arithmetic.
///
/// # Division
///
/// Division and remainder are Euclidean, i.e. the remainder is never
/// negative, and `a == (a / b) * b + a % b` always holds. This only differs
/// from truncating division when an operand is negative. Dividing by zero
/// panics, and callers are expected to guard against it.
///
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Integer(BigInt);

//󰭅		Integer																	
impl Integer {
	//		Constructors														
	
	//		from_i64															
	/// Creates a new [`Integer`] from a native signed integer.
	#[must_use]
	pub fn from_i64(n: i64) -> Self {
		Self(BigInt::from(n))
	}
	
	//		one																	
	/// The value of `1` as an [`Integer`].
	#[must_use]
	pub fn one() -> Self {
		Self(BigInt::one())
	}
	
	//		parse																
	/// Parses an [`Integer`] from text.
	///
	/// The text may start with a single `+` or `-`, followed by an optional
	/// base prefix (`0x`, `0o`, or `0b`, in either case) and then the digits.
	/// A leading `0` followed by further digits also marks octal, so `"010"`
	/// is eight. Underscores are permitted between digits. No surrounding
	/// whitespace is accepted.
	///
	/// # Parameters
	///
	/// * `s` - The string to parse.
	///
	/// # Errors
	///
	/// Returns an error if the text is empty or contains anything that is not
	/// a digit of the detected base.
	///
	pub fn parse(s: &str) -> Result<Self, ConversionError> {
		if s.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		
		let (without_sign, is_negative) = match s.strip_prefix('-') {
			Some(rest) => (rest, true),
			None       => (s.strip_prefix('+').unwrap_or(s), false),
		};
		
		let (without_base, radix) =
			if        let Some(rest) = without_sign.strip_prefix("0x").or_else(|| without_sign.strip_prefix("0X")) {
				(rest, 16_u8)
			} else if let Some(rest) = without_sign.strip_prefix("0b").or_else(|| without_sign.strip_prefix("0B")) {
				(rest, 2)
			} else if let Some(rest) = without_sign.strip_prefix("0o").or_else(|| without_sign.strip_prefix("0O")) {
				(rest, 8)
			} else if let Some(rest) = without_sign.strip_prefix('0').filter(|rest| !rest.is_empty()) {
				//	A bare leading zero marks octal
				(rest, 8)
			} else {
				(without_sign, 10)
			}
		;
		
		//	Validate ourselves so that the error names the offending character
		let mut digits    = String::with_capacity(without_base.len());
		//	An underscore may follow a base prefix, but may not lead otherwise
		let mut separated = radix == 10;
		for c in without_base.chars() {
			if c == '_' {
				if separated {
					return Err(ConversionError::InvalidDigit(c));
				}
				separated = true;
				continue;
			}
			if c.to_digit(16).is_none() {
				return Err(ConversionError::InvalidDigit(c));
			}
			if c.to_digit(u32::from(radix)).is_none() {
				return Err(ConversionError::InvalidRadix(c, radix));
			}
			digits.push(c);
			separated = false;
		}
		
		if digits.is_empty() {
			return Err(ConversionError::EmptyValue);
		}
		if separated {
			return Err(ConversionError::InvalidDigit('_'));
		}
		
		let magnitude = BigInt::from_str_radix(&digits, u32::from(radix))?;
		Ok(Self(if is_negative { -magnitude } else { magnitude }))
	}
	
	//		with_decimal														
	/// Creates a new [`Integer`] with the value `n × 10^dec`.
	///
	/// A negative `dec` produces zero rather than a fraction or an error.
	/// A zero `n` produces zero without computing the power.
	///
	/// # Parameters
	///
	/// * `n`   - The coefficient.
	/// * `dec` - The power of ten to scale `n` by.
	///
	#[must_use]
	pub fn with_decimal(n: i64, dec: i32) -> Self {
		if dec < 0 || n == 0 {
			return Self::zero();
		}
		Self(BigInt::from(n) * BigInt::from(10_u8).pow(dec.unsigned_abs()))
	}
	
	//		zero																
	/// The value of `0` as an [`Integer`].
	#[must_use]
	pub fn zero() -> Self {
		Self(BigInt::zero())
	}
	
	//		Public methods														
	
	//		as_bigint															
	/// Borrows the underlying [`BigInt`].
	#[must_use]
	pub const fn as_bigint(&self) -> &BigInt {
		&self.0
	}
	
	//		bits																
	/// The number of bits needed to represent the magnitude, excluding sign.
	#[must_use]
	pub fn bits(&self) -> u64 {
		self.0.bits()
	}
	
	//		into_bigint															
	/// Consumes the [`Integer`] and returns the underlying [`BigInt`].
	#[must_use]
	pub fn into_bigint(self) -> BigInt {
		self.0
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
	
	//		to_i64																
	/// Converts the value to a native [`i64`].
	///
	/// # Panics
	///
	/// Panics if the value does not fit in an [`i64`]. This is independent of
	/// any range a bounded type may declare.
	///
	#[expect(clippy::panic, reason = "Out of native range is a caller logic error")]
	#[must_use]
	pub fn to_i64(&self) -> i64 {
		self.0.to_i64().unwrap_or_else(|| panic!("Out of bound in to_i64()"))
	}
	
	//		to_u64																
	/// Converts the value to a native [`u64`].
	///
	/// # Panics
	///
	/// Panics if the value is negative or does not fit in a [`u64`].
	///
	#[expect(clippy::panic, reason = "Out of native range is a caller logic error")]
	#[must_use]
	pub fn to_u64(&self) -> u64 {
		self.0.to_u64().unwrap_or_else(|| panic!("Out of bound in to_u64()"))
	}
}

//󰭅		Add																		
impl Add for &Integer {
	type Output = Integer;
	
	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		Integer(&self.0 + &rhs.0)
	}
}

//󰭅		Display																	
impl Display for Integer {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

//󰭅		Div																		
impl Div for &Integer {
	type Output = Integer;
	
	//		div																	
	fn div(self, rhs: Self) -> Self::Output {
		Integer(self.0.div_euclid(&rhs.0))
	}
}

//󰭅		From: BigInt -> Integer													
impl From<BigInt> for Integer {
	//		from																
	fn from(v: BigInt) -> Self {
		Self(v)
	}
}

//󰭅		From: Integer -> BigInt													
impl From<Integer> for BigInt {
	//		from																
	fn from(v: Integer) -> Self {
		v.0
	}
}

//󰭅		FromStr																	
impl FromStr for Integer {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

//󰭅		Mul																		
impl Mul for &Integer {
	type Output = Integer;
	
	//		mul																	
	fn mul(self, rhs: Self) -> Self::Output {
		Integer(&self.0 * &rhs.0)
	}
}

//󰭅		Neg																		
impl Neg for &Integer {
	type Output = Integer;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		Integer(-&self.0)
	}
}

//󰭅		Rem																		
impl Rem for &Integer {
	type Output = Integer;
	
	//		rem																	
	fn rem(self, rhs: Self) -> Self::Output {
		Integer(self.0.rem_euclid(&rhs.0))
	}
}

//󰭅		Sub																		
impl Sub for &Integer {
	type Output = Integer;
	
	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		Integer(&self.0 - &rhs.0)
	}
}
