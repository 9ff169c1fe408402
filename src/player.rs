use std::fmt;

use serde::{Deserialize, Serialize};


// Opaque player identifier assigned by the host. The ledger never inspects it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self { Self(id.to_owned()) }
}
impl From<String> for PlayerId {
    fn from(id: String) -> Self { Self(id) }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}
