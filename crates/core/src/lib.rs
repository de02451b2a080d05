//! `shaper-core`: record shapes, response shaping and input binding.
//!
//! This crate contains **pure domain** logic (no HTTP concerns).

pub mod binding;
pub mod body;
pub mod error;
pub mod shape;
pub mod transport;
pub mod user;

pub use binding::{Source, USER_ID_MAX_LEN, bind_bounded_str, bind_int, bind_transport};
pub use body::BodyRecord;
pub use error::{BindResult, ShapeError, ValidationError, ValidationKind};
pub use shape::{ShapeStrategy, ShapedRecord, render_as, serialize_excluding, shape, to_object};
pub use transport::{TransportKind, UnknownTransport, classify};
pub use user::{DEFAULT_AGE, Extends, PASSWORD_FIELD, UserIn, UserIn2, UserOut};
