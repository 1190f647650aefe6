//! Contains error types used throughout the library.



//		Packages																										

use num_bigint::ParseBigIntError;
use thiserror::Error as ThisError;



//		Enums																											

//		ArithmeticError															
/// Represents the fatal outcomes of bounded arithmetic.
///
/// The `checked_*` methods return these as values. The operator traits and
/// the `*_raw` convenience methods panic with the [`Display`](core::fmt::Display)
/// text of the error instead, as a result outside the range is a logic error
/// on the part of the caller and must not be clamped or wrapped.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor is zero. Only raised by signed types; unsigned types
	/// return zero instead.
	#[error("Attempt to divide by zero")]
	DivisionByZero,
	
	/// The result does not fit within the declared bit length.
	#[error("Integer overflow")]
	Overflow,
	
	/// The result is negative, which an unsigned type cannot represent.
	#[error("Integer underflow")]
	Underflow,
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value is not a valid integer.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming value is not a valid integer.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),
	
	/// The incoming value could not be parsed by the arbitrary-precision
	/// backend.
	#[error("Invalid integer: {0}")]
	ParseBigIntError(#[from] ParseBigIntError),
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}

//󰭅		ArithmeticError															
impl From<ConversionError> for ArithmeticError {
	//		from																
	/// Maps a failed conversion of a raw operand onto the arithmetic outcome
	/// it stands for.
	fn from(err: ConversionError) -> Self {
		match err {
			ConversionError::ValueIsNegative => Self::Underflow,
			_                                => Self::Overflow,
		}
	}
}
