//! Response shaping: restrict a record to an allowed field set at the
//! serialization boundary.
//!
//! Three interchangeable strategies are provided. They must agree on every
//! input; the tests below hold them to that.
//!
//! - [`render_as`]: re-read the returned value through a declared model, so
//!   fields the model does not declare are dropped.
//! - [`Extends`]: the input shape extends the output shape and only the base
//!   view is serialized.
//! - [`serialize_excluding`]: serialize the full shape and remove a named set
//!   of fields from the resulting mapping.
//!
//! None of them mutate the input; each borrows it and builds a fresh mapping.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::ShapeError;
use crate::user::{Extends, PASSWORD_FIELD, UserIn, UserIn2, UserOut};

/// A serialized record: field name to JSON value.
pub type ShapedRecord = Map<String, Value>;

/// Strategy used to derive the output shape from an input record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeStrategy {
    DeclaredModel,
    StructuralSubtype,
    ExplicitExclusion,
}

impl ShapeStrategy {
    pub const ALL: [ShapeStrategy; 3] = [
        ShapeStrategy::DeclaredModel,
        ShapeStrategy::StructuralSubtype,
        ShapeStrategy::ExplicitExclusion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeclaredModel => "return_model",
            Self::StructuralSubtype => "type_annotation",
            Self::ExplicitExclusion => "explicit_exclusion",
        }
    }
}

/// Fields excluded from user responses under [`ShapeStrategy::ExplicitExclusion`].
pub const USER_EXCLUDE: &[&str] = &[PASSWORD_FIELD];

/// Shape a user record into its public mapping.
pub fn shape(input: &UserIn, strategy: ShapeStrategy) -> Result<ShapedRecord, ShapeError> {
    let shaped = match strategy {
        ShapeStrategy::DeclaredModel => {
            let declared: UserOut = render_as(input)?;
            to_object(&declared)?
        }
        ShapeStrategy::StructuralSubtype => {
            let extended = UserIn2::from(input);
            to_object(extended.base())?
        }
        ShapeStrategy::ExplicitExclusion => serialize_excluding(input, USER_EXCLUDE)?,
    };

    tracing::trace!(strategy = strategy.as_str(), fields = shaped.len(), "shaped record");
    Ok(shaped)
}

/// Re-read `value` through the declared model `M`.
///
/// Unknown fields are ignored by deserialization, so anything `M` does not
/// declare is dropped; defaults declared by `M` are applied.
pub fn render_as<M>(value: &impl Serialize) -> Result<M, ShapeError>
where
    M: DeserializeOwned,
{
    let raw = serde_json::to_value(value)?;
    Ok(serde_json::from_value(raw)?)
}

/// Serialize `value` and drop every field named in `exclude`.
pub fn serialize_excluding(
    value: &impl Serialize,
    exclude: &[&str],
) -> Result<ShapedRecord, ShapeError> {
    let mut map = to_object(value)?;
    map.retain(|key, _| !exclude.contains(&key.as_str()));
    Ok(map)
}

/// Serialize `value`, requiring a JSON object.
pub fn to_object(value: &impl Serialize) -> Result<ShapedRecord, ShapeError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ShapeError::NotAnObject("null")),
        Value::Bool(_) => Err(ShapeError::NotAnObject("bool")),
        Value::Number(_) => Err(ShapeError::NotAnObject("number")),
        Value::String(_) => Err(ShapeError::NotAnObject("string")),
        Value::Array(_) => Err(ShapeError::NotAnObject("array")),
    }
}
