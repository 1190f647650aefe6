//		Packages																										

use super::*;
use claims::{assert_err_eq, assert_ok_eq};
use rubedo::sugar::s;



//		Tests																											

mod constructors {
	use super::*;
	
	//		from_i64															
	#[test]
	fn from_i64__normal() {
		assert_eq!(Integer::from_i64(42).to_string(),  s!("42"));
		assert_eq!(Integer::from_i64(-42).to_string(), s!("-42"));
	}
	#[test]
	fn from_i64__extremes() {
		assert_eq!(Integer::from_i64(i64::MAX).to_i64(), i64::MAX);
		assert_eq!(Integer::from_i64(i64::MIN).to_i64(), i64::MIN);
	}
	
	//		one																	
	#[test]
	fn one() {
		assert_eq!(Integer::one(), Integer::from_i64(1));
		assert!(!Integer::one().is_zero());
	}
	
	//		parse																
	#[test]
	fn parse__decimal() {
		assert_ok_eq!(Integer::parse("0"),     Integer::zero());
		assert_ok_eq!(Integer::parse("42"),    Integer::from_i64(42));
		assert_ok_eq!(Integer::parse("+42"),   Integer::from_i64(42));
		assert_ok_eq!(Integer::parse("-42"),   Integer::from_i64(-42));
		assert_ok_eq!(Integer::parse("1_000"), Integer::from_i64(1_000));
	}
	#[test]
	fn parse__prefixed() {
		assert_ok_eq!(Integer::parse("0xff"),   Integer::from_i64(255));
		assert_ok_eq!(Integer::parse("0XFF"),   Integer::from_i64(255));
		assert_ok_eq!(Integer::parse("0o17"),   Integer::from_i64(15));
		assert_ok_eq!(Integer::parse("-0b101"), Integer::from_i64(-5));
		assert_ok_eq!(Integer::parse("0x_ff"),  Integer::from_i64(255));
	}
	#[test]
	fn parse__leading_zero_octal() {
		assert_ok_eq!(Integer::parse("010"),  Integer::from_i64(8));
		assert_ok_eq!(Integer::parse("-010"), Integer::from_i64(-8));
		assert_ok_eq!(Integer::parse("0_17"), Integer::from_i64(15));
		assert_ok_eq!(Integer::parse("00"),   Integer::zero());
		assert_err_eq!(Integer::parse("09"),  ConversionError::InvalidRadix('9', 8));
	}
	#[test]
	fn parse__huge() {
		let text = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
		assert_eq!(Integer::parse(text).unwrap().to_string(), text);
		assert_eq!(Integer::parse(text).unwrap().bits(),       256);
	}
	#[test]
	fn parse__empty() {
		assert_err_eq!(Integer::parse(""),   ConversionError::EmptyValue);
		assert_err_eq!(Integer::parse("-"),  ConversionError::EmptyValue);
		assert_err_eq!(Integer::parse("0x"), ConversionError::EmptyValue);
	}
	#[test]
	fn parse__invalid_digit() {
		assert_err_eq!(Integer::parse("12.5"), ConversionError::InvalidDigit('.'));
		assert_err_eq!(Integer::parse(" 1"),   ConversionError::InvalidDigit(' '));
		assert_err_eq!(Integer::parse("1 "),   ConversionError::InvalidDigit(' '));
		assert_err_eq!(Integer::parse("--1"),  ConversionError::InvalidDigit('-'));
		assert_err_eq!(Integer::parse("xyz"),  ConversionError::InvalidDigit('x'));
	}
	#[test]
	fn parse__invalid_radix() {
		assert_err_eq!(Integer::parse("abc"),  ConversionError::InvalidRadix('a', 10));
		assert_err_eq!(Integer::parse("0o8"),  ConversionError::InvalidRadix('8', 8));
		assert_err_eq!(Integer::parse("0b12"), ConversionError::InvalidRadix('2', 2));
	}
	#[test]
	fn parse__misplaced_underscores() {
		assert_err_eq!(Integer::parse("_1"),   ConversionError::InvalidDigit('_'));
		assert_err_eq!(Integer::parse("1__0"), ConversionError::InvalidDigit('_'));
		assert_err_eq!(Integer::parse("1_"),   ConversionError::InvalidDigit('_'));
	}
	
	//		with_decimal														
	#[test]
	fn with_decimal__normal() {
		assert_eq!(Integer::with_decimal(5, 0),  Integer::from_i64(5));
		assert_eq!(Integer::with_decimal(5, 3),  Integer::from_i64(5_000));
		assert_eq!(Integer::with_decimal(-5, 3), Integer::from_i64(-5_000));
	}
	#[test]
	fn with_decimal__large() {
		let value = Integer::with_decimal(1, 76);
		assert_eq!(value.to_string(), format!("1{}", "0".repeat(76)));
	}
	#[test]
	fn with_decimal__negative_exponent() {
		assert_eq!(Integer::with_decimal(5, -1),   Integer::zero());
		assert_eq!(Integer::with_decimal(-5, -10), Integer::zero());
	}
	
	//		zero																
	#[test]
	fn zero() {
		assert!(Integer::zero().is_zero());
		assert_eq!(Integer::zero().sign(), Sign::NoSign);
		assert_eq!(Integer::zero().bits(), 0);
	}
}

mod public_methods {
	use super::*;
	
	//		bits																
	#[test]
	fn bits() {
		assert_eq!(Integer::from_i64(1).bits(),    1);
		assert_eq!(Integer::from_i64(255).bits(),  8);
		assert_eq!(Integer::from_i64(256).bits(),  9);
		assert_eq!(Integer::from_i64(-255).bits(), 8);
	}
	
	//		into_bigint															
	#[test]
	fn into_bigint() {
		assert_eq!(Integer::from_i64(-7).into_bigint(), BigInt::from(-7));
		assert_eq!(Integer::from_i64(-7).as_bigint(),   &BigInt::from(-7));
	}
	
	//		sign																
	#[test]
	fn sign() {
		assert_eq!(Integer::from_i64(-3).sign(), Sign::Minus);
		assert_eq!(Integer::from_i64(0).sign(),  Sign::NoSign);
		assert_eq!(Integer::from_i64(3).sign(),  Sign::Plus);
	}
	
	//		to_i64																
	#[test]
	fn to_i64__normal() {
		assert_eq!(Integer::from_i64(-42).to_i64(), -42);
	}
	#[test]
	#[should_panic(expected = "Out of bound in to_i64()")]
	fn to_i64__too_large() {
		let _ = Integer::with_decimal(1, 20).to_i64();
	}
	
	//		to_u64																
	#[test]
	fn to_u64__normal() {
		assert_eq!(Integer::with_decimal(1, 19).to_u64(), 10_000_000_000_000_000_000);
	}
	#[test]
	#[should_panic(expected = "Out of bound in to_u64()")]
	fn to_u64__negative() {
		let _ = Integer::from_i64(-1).to_u64();
	}
}

mod traits {
	use super::*;
	
	//		Add																	
	#[test]
	fn add() {
		let a = Integer::from_i64(i64::MAX);
		let b = Integer::from_i64(1);
		assert_eq!((&a + &b).to_string(), s!("9223372036854775808"));
		//	Operands are left untouched
		assert_eq!(a, Integer::from_i64(i64::MAX));
	}
	
	//		Div																	
	#[test]
	fn div__euclidean() {
		let seven     = Integer::from_i64(7);
		let neg_seven = Integer::from_i64(-7);
		let two       = Integer::from_i64(2);
		let neg_two   = Integer::from_i64(-2);
		assert_eq!(&seven     / &two,     Integer::from_i64(3));
		assert_eq!(&neg_seven / &two,     Integer::from_i64(-4));
		assert_eq!(&seven     / &neg_two, Integer::from_i64(-3));
	}
	
	//		FromStr																
	#[test]
	fn from_str() {
		assert_ok_eq!("123".parse::<Integer>(), Integer::from_i64(123));
		assert_err_eq!("".parse::<Integer>(),   ConversionError::EmptyValue);
	}
	
	//		Mul																	
	#[test]
	fn mul() {
		let a = Integer::with_decimal(1, 76);
		assert_eq!((&a * &a).to_string(), format!("1{}", "0".repeat(152)));
	}
	
	//		Neg																	
	#[test]
	fn neg() {
		assert_eq!(-&Integer::from_i64(5), Integer::from_i64(-5));
		assert_eq!(-&Integer::zero(),      Integer::zero());
	}
	
	//		Ord																	
	#[test]
	fn ord() {
		assert!(Integer::from_i64(-1) < Integer::zero());
		assert!(Integer::with_decimal(1, 30) > Integer::from_i64(i64::MAX));
	}
	
	//		Rem																	
	#[test]
	fn rem__euclidean() {
		let two = Integer::from_i64(2);
		assert_eq!(&Integer::from_i64(7)  % &two, Integer::from_i64(1));
		assert_eq!(&Integer::from_i64(-7) % &two, Integer::from_i64(1));
	}
	
	//		Sub																	
	#[test]
	fn sub() {
		assert_eq!(&Integer::zero() - &Integer::one(), Integer::from_i64(-1));
	}
}
