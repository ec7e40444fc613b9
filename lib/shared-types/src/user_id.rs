use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::{impl_display, impls_for_seaorm_newtype};

/// Opaque subject identifier issued by the external auth provider.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct UserId(String);

#[derive(Debug, Error)]
#[error("user id must not be empty")]
pub struct UserIdParseError;

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UserIdParseError);
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_display!(UserId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(UserId);
