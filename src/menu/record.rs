use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Enabled/disabled flag of a menu record.
///
/// The menu service encodes it as a number where `10` means enabled; booleans and the
/// names `enabled`/`disabled` are accepted as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuStatus {
    #[default]
    Enabled,
    Disabled,
}

impl MenuStatus {
    pub const ENABLED_CODE: i64 = 10;
    pub const DISABLED_CODE: i64 = 20;

    pub fn from_code(code: i64) -> Self {
        if code == Self::ENABLED_CODE {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Enabled => Self::ENABLED_CODE,
            Self::Disabled => Self::DISABLED_CODE,
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "enabled" | "enable" | "on" => Ok(Self::Enabled),
            "disabled" | "disable" | "off" => Ok(Self::Disabled),
            other => other
                .parse::<i64>()
                .map(Self::from_code)
                .map_err(|_| "status must be `enabled`, `disabled` or a numeric code".to_string()),
        }
    }
}

impl std::fmt::Display for MenuStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

impl Serialize for MenuStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Code(i64),
    Flag(bool),
    Name(String),
}

impl<'de> Deserialize<'de> for MenuStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawStatus::deserialize(deserializer)? {
            RawStatus::Code(code) => Ok(Self::from_code(code)),
            RawStatus::Flag(true) => Ok(Self::Enabled),
            RawStatus::Flag(false) => Ok(Self::Disabled),
            RawStatus::Name(name) => Self::parse(&name)
                .map_err(|err| D::Error::custom(format!("invalid menu status `{name}`: {err}"))),
        }
    }
}

fn nullable_parent_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// One flat menu entry as supplied by a menu source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: u64,
    /// `0` marks a root.
    #[serde(
        default,
        alias = "pid",
        alias = "parentId",
        deserialize_with = "nullable_parent_id"
    )]
    pub parent_id: u64,
    pub title: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(
        default,
        alias = "component_path",
        alias = "componentRef",
        skip_serializing_if = "Option::is_none"
    )]
    pub component_ref: Option<String>,
    #[serde(
        default,
        alias = "sort_num",
        alias = "sortOrder",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort_order: Option<i64>,
    #[serde(default)]
    pub status: MenuStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<u64>,
}

impl MenuRecord {
    pub fn new(id: u64, parent_id: u64, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id,
            parent_id,
            title: title.into(),
            path: path.into(),
            icon: None,
            component_ref: None,
            sort_order: None,
            status: MenuStatus::Enabled,
            model_id: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_component(mut self, component_ref: impl Into<String>) -> Self {
        self.component_ref = Some(component_ref.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn with_status(mut self, status: MenuStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_root_reference(&self) -> bool {
        self.parent_id == 0
    }

    /// The explicit view pointer, ignoring blank values.
    pub fn component_ref(&self) -> Option<&str> {
        self.component_ref
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
