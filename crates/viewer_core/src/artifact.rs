use serde_json::Value;

/// Build identifier of the running viewer, baked in at compile time.
pub const BUILD_ID: &str = match option_env!("VIEWER_GIT_HASH") {
    Some(hash) => hash,
    None => "unknown",
};

/// A deserialized simulation output.
///
/// Only `GitInfo.Hash` is interpreted here; everything else is payload for the
/// visualisation views.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact(Value);

impl Artifact {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parse the textual content of an uploaded file.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    /// The commit the output was produced on, if the artifact carries a
    /// string at `GitInfo.Hash`.
    pub fn build_id(&self) -> Option<&str> {
        self.0.get("GitInfo")?.get("Hash")?.as_str()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Identifier compared against `GitInfo.Hash` of every accepted artifact.
    pub build_id: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            build_id: BUILD_ID.to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn with_build_id(build_id: impl Into<String>) -> Self {
        Self {
            build_id: build_id.into(),
        }
    }
}
