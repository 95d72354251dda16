use chrono::NaiveDateTime;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer,
};

/// Format of every timestamp returned by the API, e.g. `2018-10-31 01:23:10`.
const API_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn api_time_from_json<'de, D>(de: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(de)?;
    NaiveDateTime::parse_from_str(&s, API_TIME_FORMAT).map_err(de::Error::custom)
}

/// Some flags come as `0`/`1` instead of `false`/`true`.
pub fn bool_from_json<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntBoolVisitor;

    impl<'de> Visitor<'de> for IntBoolVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a boolean, 0 or 1")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
            }
        }
    }

    de.deserialize_any(IntBoolVisitor)
}
