//! Decimal-text encodings of [`Int`] for storage and transfer.
//!
//! Every encoding carries the same payload: the value as base-10 text, with
//! no range metadata. The range is implied by the type doing the decoding.
//!
//! Decoding re-checks that range. A payload that parses but lies outside the
//! type is refused with [`ConversionError::ValueTooLarge`] or
//! [`ConversionError::ValueIsNegative`], in the same way as malformed text,
//! so that a corrupted or foreign payload cannot produce an out-of-range
//! value.



//		Modules																											

#[cfg(test)]
#[path = "tests/codec.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::ConversionError,
	int::Int,
	integer::Integer,
};
use bytes::BytesMut;
use core::{
	error::Error,
	fmt::{Formatter, self},
	str,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, MapAccess, Unexpected, Visitor, value::MapAccessDeserializer},
};
use serde_json::{Error as JsonError, Number as JsonNumber};
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use tracing::warn;



//		Structs																											

//		IntVisitor																
/// A visitor for decoding integers from strings or numbers.
struct IntVisitor<const BITS: u64, const SIGNED: bool>;



//󰭅		Int																		
impl<const BITS: u64, const SIGNED: bool> Int<BITS, SIGNED> {
	//		from_json															
	/// Deserialises a JSON string into this integer type.
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is invalid
	/// or out of range, then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		from_text															
	/// Decodes the compact text form produced by [`to_text()`](Int::to_text()).
	///
	/// # Parameters
	///
	/// * `text` - The decimal text to decode.
	///
	/// # Errors
	///
	/// If the text is malformed, or the number is outside the range of the
	/// type, an error will be returned.
	///
	pub fn from_text(text: &str) -> Result<Self, ConversionError> {
		Self::decode(text)
	}
	
	//		to_json																
	/// Serialises this integer to a JSON string containing the decimal text.
	///
	/// # Errors
	///
	/// If the number cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		to_text																
	/// Encodes the value in the compact text form, i.e. as decimal text.
	#[must_use]
	pub fn to_text(&self) -> String {
		self.to_string()
	}
	
	//		decode																
	/// Decodes a payload, logging any that parse but are out of range.
	fn decode(text: &str) -> Result<Self, ConversionError> {
		let value = Integer::parse(text)?;
		Self::bounded(value).inspect_err(|err| {
			warn!(bits = BITS, signed = SIGNED, %err, "Refused out-of-range integer payload");
		})
	}
}

//󰭅		Deserialize																
impl<'de, const BITS: u64, const SIGNED: bool> Deserialize<'de> for Int<BITS, SIGNED> {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	Accept both numbers and strings
			deserializer.deserialize_any(IntVisitor::<BITS, SIGNED>)
		} else {
			deserializer.deserialize_str(IntVisitor::<BITS, SIGNED>)
		}
	}
}

//󰭅		FromSql																	
impl<'a, const BITS: u64, const SIGNED: bool> FromSql<'a> for Int<BITS, SIGNED> {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT8                  => Ok(Self::try_from(i64::from_sql(ty, raw)?)?),
			&Type::TEXT | &Type::VARCHAR => Ok(Self::decode(<&str>::from_sql(ty, raw)?)?),
			unknown                      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Int<{BITS}, {SIGNED}>: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		Serialize																
impl<const BITS: u64, const SIGNED: bool> Serialize for Int<BITS, SIGNED> {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		//	Always text, as most values exceed what formats hold as numbers
		serializer.serialize_str(&self.to_text())
	}
}

//󰭅		ToSql																	
impl<const BITS: u64, const SIGNED: bool> ToSql for Int<BITS, SIGNED> {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT8                  => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT | &Type::VARCHAR => self.to_text().to_sql(ty, out),
			unknown                      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for Int<{BITS}, {SIGNED}>: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
	
	to_sql_checked!();
}

//󰭅		Visitor																	
impl<'de, const BITS: u64, const SIGNED: bool> Visitor<'de> for IntVisitor<BITS, SIGNED> {
	type Value = Int<BITS, SIGNED>;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "{} integer of at most {BITS} bits as decimal text", if SIGNED { "a signed" } else { "an unsigned" })
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from(v).map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from(v).map_err(E::custom)
	}
	
	//		visit_map															
	fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		//	JSON numbers arrive here as their exact text, whatever their size
		let number = JsonNumber::deserialize(MapAccessDeserializer::new(map))?;
		Int::decode(&number.to_string()).map_err(A::Error::custom)
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::decode(v).map_err(E::custom)
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		let text = str::from_utf8(v).map_err(|_err| E::invalid_value(Unexpected::Bytes(v), &self))?;
		self.visit_str(text)
	}
}
