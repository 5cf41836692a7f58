use std::fmt;

/// Failures raised by the geometry codec and the geometry builder.
///
/// They travel inside [`anyhow::Error`] and can be recovered with
/// `error.downcast_ref::<CodecError>()`.
#[derive(Clone, Debug, PartialEq)]
pub enum CodecError {
	/// The value handed to the encoder is not one of the seven geometry kinds,
	/// e.g. an absent member of a geometry collection.
	UnsupportedVariant(String),
	/// A field the decoder cannot do without is missing.
	MissingField(&'static str),
	/// A coordinate component could not be read as a number.
	MalformedNumeric { field: &'static str, value: String },
	/// The builder rejected the coordinates, e.g. an unclosed ring.
	GeometryInvariant(String),
}

impl fmt::Display for CodecError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CodecError::UnsupportedVariant(what) => write!(f, "unsupported geometry variant: {what}"),
			CodecError::MissingField(field) => write!(f, "missing field '{field}'"),
			CodecError::MalformedNumeric { field, value } => {
				write!(f, "field '{field}' is not a number: {value}")
			}
			CodecError::GeometryInvariant(message) => write!(f, "invalid geometry: {message}"),
		}
	}
}

impl std::error::Error for CodecError {}
