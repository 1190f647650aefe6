//! The Boundint crate is a library of fixed-range, overflow-checked big
//! integers, for ledger-style arithmetic where silent wraparound or unbounded
//! growth would corrupt balances.
//!
//! The two types of interest are [`I256`], a signed integer whose magnitude
//! is limited to 255 bits, and [`U256`], an unsigned integer limited to 256
//! bits. Both are instances of the generic [`Int`], and both survive storage
//! and transfer as decimal text.



//		Global configuration

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod codec;
mod errors;
mod int;
mod integer;



//		Packages

pub use errors::{ArithmeticError, ConversionError};
pub use int::{I256, Int, SInt, U256, UInt};
pub use integer::Integer;
pub use num_bigint::{BigInt, Sign};
