pub mod articles;
pub mod comments;
pub mod profiles;
pub mod tags;
pub mod users;

use serde::{Deserialize, Deserializer};

/// Lets `Option<Option<T>>` tell an absent key (`None`) from an explicit
/// `null` (`Some(None)`). Pair with `#[serde(default)]`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Query-string integers that fall back to "absent" when unparseable.
pub(crate) fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}
