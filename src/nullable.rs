use serde::{Deserialize, Deserializer};

/// Deserializes a value where JSON `null` stands for the type's
/// default. Pair with `#[serde(default)]` so that missing fields are
/// also defaulted.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where D: Deserializer<'de>, T: Deserialize<'de> + Default {
    let o: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(o.unwrap_or_default())
}
