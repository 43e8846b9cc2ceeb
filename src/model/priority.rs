use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Task priority.
///
/// Persisted as the upper-case canonical name (`"HIGH"`). Reading never
/// fails: an unknown name, `null`, a number or any other non-string value
/// resolves to [`Priority::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::None,
        Priority::Low,
        Priority::Medium,
        Priority::High,
    ];

    /// Canonical stored name
    pub fn name(self) -> &'static str {
        match self {
            Priority::None => "NONE",
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    /// Name shown in option lists
    pub fn label(self) -> &'static str {
        match self {
            Priority::None => "None",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Resolve an option name to a priority, falling back to the default.
    ///
    /// Matching ignores case and surrounding whitespace, so both the stored
    /// name and the option label resolve.
    pub fn from_name(name: &str) -> Priority {
        let name = name.trim();
        Priority::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Option labels in display order
    pub fn options() -> Vec<&'static str> {
        Priority::ALL.iter().map(|p| p.label()).collect()
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = deserializer.deserialize_any(AnyName)?;
        Ok(name.map(|n| Priority::from_name(&n)).unwrap_or_default())
    }
}

/// Read a stored option name, accepting any value in its place.
///
/// Non-string values come back as an empty string.
pub fn deserialize_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(deserializer.deserialize_any(AnyName)?.unwrap_or_default())
}

/// Yields the string if the value is one, `None` for everything else.
struct AnyName;

impl<'de> Visitor<'de> for AnyName {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an option name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(AnyName)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two choices the flag selector offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlagOption {
    On,
    #[default]
    Off,
}

impl FlagOption {
    pub const ALL: [FlagOption; 2] = [FlagOption::On, FlagOption::Off];

    pub fn name(self) -> &'static str {
        match self {
            FlagOption::On => "On",
            FlagOption::Off => "Off",
        }
    }

    /// Resolve an option name; anything unrecognized is `Off`.
    pub fn from_name(name: &str) -> FlagOption {
        let name = name.trim();
        FlagOption::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn from_checked(checked: bool) -> FlagOption {
        if checked { FlagOption::On } else { FlagOption::Off }
    }

    pub fn is_checked(self) -> bool {
        self == FlagOption::On
    }

    pub fn options() -> Vec<&'static str> {
        FlagOption::ALL.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Display for FlagOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
