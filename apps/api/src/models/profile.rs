use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::answers::Project;
use crate::models::lenient;

/// A user's profile as stored by the front-end between edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub profile_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub intro: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub default_job: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub strength: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub default_strength: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub career_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "skills")]
    pub skills: Skills,
    #[serde(default, deserialize_with = "lenient::text")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub linkedin: Option<String>,
}

/// Skills arrive either as a tag list or as a free-form comma string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Skills {
    #[default]
    None,
    List(Vec<Value>),
    Text(String),
}

impl Skills {
    pub fn is_filled(&self) -> bool {
        match self {
            Skills::None => false,
            Skills::List(items) => !items.is_empty(),
            Skills::Text(s) => !s.trim().is_empty(),
        }
    }
}

fn skills<'de, D>(deserializer: D) -> Result<Skills, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Skills::List(items),
        Some(Value::String(s)) => Skills::Text(s),
        _ => Skills::None,
    })
}
