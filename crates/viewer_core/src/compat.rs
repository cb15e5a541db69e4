use crate::Artifact;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    Compatible,
    Mismatch { ours: String, theirs: String },
    /// `GitInfo.Hash` could not be read; the artifact must not reach the views.
    Unreadable,
}

/// Compare the artifact's build identifier with ours (exact, case-sensitive).
pub fn check_compatibility(own_build_id: &str, artifact: &Artifact) -> Compatibility {
    match artifact.build_id() {
        None => Compatibility::Unreadable,
        Some(theirs) if theirs == own_build_id => Compatibility::Compatible,
        Some(theirs) => Compatibility::Mismatch {
            ours: own_build_id.to_string(),
            theirs: theirs.to_string(),
        },
    }
}

pub fn mismatch_warning(ours: &str, theirs: &str) -> String {
    format!(
        "This viewer was built on commit \"{ours}\", and the output you're trying to visualise \
         was produced on commit \"{theirs}\". There may be incompatibilities!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artifact_with_hash(hash: &str) -> Artifact {
        Artifact::from_value(json!({ "GitInfo": { "Hash": hash } }))
    }

    #[test]
    fn equal_ids_are_compatible() {
        assert_eq!(
            check_compatibility("def456", &artifact_with_hash("def456")),
            Compatibility::Compatible
        );
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(
            check_compatibility("def456", &artifact_with_hash("DEF456")),
            Compatibility::Mismatch {
                ours: "def456".into(),
                theirs: "DEF456".into()
            }
        );
    }

    #[test]
    fn missing_hash_is_unreadable() {
        let artifact = Artifact::from_value(json!({ "GitInfo": null }));
        assert_eq!(check_compatibility("def456", &artifact), Compatibility::Unreadable);
    }

    #[test]
    fn warning_names_both_commits() {
        let text = mismatch_warning("def456", "abc123");
        assert!(text.contains("\"def456\""));
        assert!(text.contains("\"abc123\""));
    }
}
