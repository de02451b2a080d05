//! User shapes: the full input record and its credential-free output view.

use serde::{Deserialize, Serialize};

/// Age applied when the caller omits it.
pub const DEFAULT_AGE: i64 = 18;

/// Wire name of the credential field. Never part of any output shape.
pub const PASSWORD_FIELD: &str = "password";

fn default_age() -> i64 {
    DEFAULT_AGE
}

/// Input record as supplied by the caller, credential included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIn {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_age")]
    pub age: i64,
    pub password: String,
}

/// Output record: [`UserIn`] minus the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOut {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_age")]
    pub age: i64,
}

/// Input record declared as a structural extension of [`UserOut`].
///
/// The wire shape is identical to [`UserIn`]; the base fields are flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIn2 {
    #[serde(flatten)]
    pub profile: UserOut,
    pub password: String,
}

/// A shape that adds fields on top of `Base`.
///
/// Implementors expose the base view without copying, so a handler can hold
/// the extended record and hand only the base to the serializer.
pub trait Extends<Base> {
    fn base(&self) -> &Base;

    fn into_base(self) -> Base;
}

impl Extends<UserOut> for UserIn2 {
    fn base(&self) -> &UserOut {
        &self.profile
    }

    fn into_base(self) -> UserOut {
        self.profile
    }
}

impl From<&UserIn> for UserIn2 {
    fn from(user: &UserIn) -> Self {
        Self {
            profile: UserOut {
                id: user.id.clone(),
                name: user.name.clone(),
                age: user.age,
            },
            password: user.password.clone(),
        }
    }
}
