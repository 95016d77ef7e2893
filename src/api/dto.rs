use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// One element of a `POST /data` batch.
///
/// Every field is optional: a missing field, or an explicit `null`, takes the
/// zero value of its type. Unknown fields are ignored. A field that is
/// present with the wrong JSON type fails the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SensorReading {
    /// Name of the reporting sensor, e.g. `"SHT4x"`.
    #[serde(deserialize_with = "null_as_default")]
    pub sensor: String,
    /// Degrees Celsius
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    /// Relative humidity percentage
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,
    /// Raw visible-light count
    #[serde(deserialize_with = "null_as_default")]
    pub luminosity: u16,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
