use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Architectural tier an exception was raised from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layer {
    /// Entities, value objects and domain rules
    Domain,
    /// Use cases and application services
    Application,
    /// Adapters: databases, caches, plugins, environment
    Infra,
    /// Invariants broken inside the library itself
    Internal,
}
