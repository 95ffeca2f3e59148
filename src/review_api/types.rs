use serde::Deserialize;

/// One reviewed homework item as reported by the API.
/// Fields default to empty strings so a half-formed record surfaces as an
/// unknown status instead of a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde(rename = "homework_name", default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}
