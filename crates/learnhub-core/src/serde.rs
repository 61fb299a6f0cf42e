use std::str::FromStr;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

fn parse_numeric<'de, D, T>(raw: NumberOrString<T>) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse::<T>().map_err(serde::de::Error::custom),
    }
}

/// Accepts `5` as well as `"5"`.
pub fn deserialize_numeric<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: std::fmt::Display,
{
    let raw = NumberOrString::<T>::deserialize(deserializer)?;
    parse_numeric::<D, T>(raw)
}

pub fn deserialize_optional_numeric<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: std::fmt::Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        Some(raw) => parse_numeric::<D, T>(raw).map(Some),
        None => Ok(None),
    }
}
