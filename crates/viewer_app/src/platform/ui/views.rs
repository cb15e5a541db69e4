use serde_json::Value;
use viewer_core::{Artifact, SubView};

/// A sub-view consumes the whole artifact read-only and produces its text.
pub trait Visualisation {
    fn render(&self, artifact: &Artifact) -> Vec<String>;
}

/// Text stand-in for a sub-view: the parts of the output it is built from,
/// summarised by shape.
struct Summary {
    sources: &'static [(&'static str, &'static str)],
}

impl Visualisation for Summary {
    fn render(&self, artifact: &Artifact) -> Vec<String> {
        self.sources
            .iter()
            .map(|(label, pointer)| {
                let shape = artifact
                    .as_value()
                    .pointer(pointer)
                    .map(describe)
                    .unwrap_or_else(|| "not present".to_string());
                format!("{label}: {shape}")
            })
            .collect()
    }
}

static GAME: Summary = Summary {
    sources: &[
        ("Seasons", "/Config/MaxSeasons"),
        ("Turns", "/Config/MaxTurns"),
        ("Game states", "/GameStates"),
    ],
};
static IIGO: Summary = Summary {
    sources: &[
        ("IIGO config", "/Config/IIGOConfig"),
        ("Game states", "/GameStates"),
    ],
};
static IITO: Summary = Summary {
    sources: &[("Game states", "/GameStates")],
};
static IIFO: Summary = Summary {
    sources: &[
        ("Foraging config", "/Config/ForagingConfig"),
        ("Disaster config", "/Config/DisasterConfig"),
    ],
};
static RESOURCES: Summary = Summary {
    sources: &[
        ("Initial resources", "/Config/InitialResources"),
        ("Cost of living", "/Config/CostOfLiving"),
        ("Critical threshold", "/Config/MinimumResourceThreshold"),
    ],
};
static ROLES: Summary = Summary {
    sources: &[
        ("IIGO config", "/Config/IIGOConfig"),
        ("Game states", "/GameStates"),
    ],
};

pub fn visualisation_for(sub_view: SubView) -> &'static dyn Visualisation {
    match sub_view {
        SubView::Game => &GAME,
        SubView::Iigo => &IIGO,
        SubView::Iito => &IITO,
        SubView::Iifo => &IIFO,
        SubView::Resources => &RESOURCES,
        SubView::Roles => &ROLES,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("{} entries", items.len()),
        Value::Object(fields) => format!("{} fields", fields.len()),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn game_summary_reads_config_and_states() {
        let artifact = Artifact::from_value(json!({
            "Config": { "MaxSeasons": 100, "MaxTurns": 50 },
            "GameStates": [{}, {}, {}],
        }));
        assert_eq!(
            visualisation_for(SubView::Game).render(&artifact),
            vec!["Seasons: 100", "Turns: 50", "Game states: 3 entries"]
        );
    }

    #[test]
    fn absent_sources_are_reported_not_fatal() {
        let artifact = Artifact::from_value(json!({ "GitInfo": { "Hash": "abc123" } }));
        for sub_view in SubView::ALL {
            let lines = visualisation_for(sub_view).render(&artifact);
            assert!(!lines.is_empty());
            assert!(lines.iter().all(|line| line.ends_with("not present")));
        }
    }
}
