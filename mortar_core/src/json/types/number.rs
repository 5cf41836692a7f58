//! `From` conversions from Rust numbers into `JsonValue::Number`.

use super::JsonValue;

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

macro_rules! impl_from_number {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(f64::from(input))
				}
			}
		)+
	};
}

impl_from_number!(f32, u8, u16, u32, i8, i16, i32);

#[allow(clippy::cast_precision_loss)]
impl From<usize> for JsonValue {
	fn from(input: usize) -> Self {
		JsonValue::Number(input as f64)
	}
}
