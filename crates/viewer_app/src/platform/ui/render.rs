use viewer_core::{AppViewModel, Banner, SubView, View};

use super::constants::*;
use super::views::visualisation_for;

/// Text lines for one frame: loading line, navbar, banners, then the routed screen.
pub fn render(view: &AppViewModel, routed: View<'_>) -> Vec<String> {
    let mut lines = vec![RULE.to_string()];

    if let Some(text) = view.loading_text {
        lines.push(format!("... {text}"));
    }

    if view.show_navbar {
        lines.push(navbar(&view.location));
    }

    if let Some(banner) = &view.error {
        lines.extend(banner_lines("!!", banner));
    }
    if let Some(banner) = &view.warning {
        lines.extend(banner_lines("??", banner));
    }

    match routed {
        View::UploadPrompt => {
            lines.push(UPLOAD_PROMPT_TITLE.to_string());
            lines.push(UPLOAD_PROMPT_HINT.to_string());
            lines.push(format!("{BUILD_LABEL} {}", view.build_id));
        }
        View::Visualisation { sub_view, artifact } => {
            lines.push(format!(
                "{} (output from commit {})",
                sub_view.title(),
                artifact.build_id().unwrap_or("?")
            ));
            lines.extend(
                visualisation_for(sub_view)
                    .render(artifact)
                    .into_iter()
                    .map(|line| format!("  {line}")),
            );
        }
        View::NotFound => lines.push(NOT_FOUND_TEXT.to_string()),
    }

    lines
}

fn navbar(location: &str) -> String {
    let items: Vec<String> = SubView::ALL
        .into_iter()
        .map(|sub_view| {
            if sub_view.path() == location {
                format!("[{}]", sub_view.title())
            } else {
                sub_view.title().to_string()
            }
        })
        .collect();
    format!("{} | Reset", items.join(" | "))
}

fn banner_lines(marker: &str, banner: &Banner) -> [String; 2] {
    [
        format!("{marker} {}", banner.heading),
        format!("{marker} {}", banner.message),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use viewer_core::{update, AppState, Artifact, ControllerConfig, Msg, ROLES_VISUALISATION};

    fn populated() -> AppState {
        let state = AppState::with_config(ControllerConfig::with_build_id("def456"));
        let (state, _) = update(state, Msg::Activated);
        let artifact = Artifact::from_value(json!({ "GitInfo": { "Hash": "abc123" } }));
        let (state, _) = update(state, Msg::Recovered(Ok(Some(artifact))));
        state
    }

    #[test]
    fn empty_session_shows_upload_prompt_without_navbar() {
        let state = AppState::new();
        let lines = render(&state.view(), state.routed_view());
        assert!(lines.contains(&UPLOAD_PROMPT_HINT.to_string()));
        assert_eq!(
            lines.last(),
            Some(&format!("{BUILD_LABEL} {}", state.config().build_id))
        );
        assert!(!lines.iter().any(|line| line.contains("Reset")));
    }

    #[test]
    fn populated_session_marks_current_tab_and_warning() {
        let (state, _) = update(populated(), Msg::Navigate(ROLES_VISUALISATION.into()));
        let lines = render(&state.view(), state.routed_view());

        assert!(lines.iter().any(|line| line.contains("[Roles]") && line.ends_with("| Reset")));
        assert!(lines.iter().any(|line| line.starts_with("?? Rough seas ahead!")));
        assert!(lines.iter().any(|line| line.starts_with("Roles (output from commit abc123)")));
    }

    #[test]
    fn unknown_location_renders_not_found() {
        let (state, _) = update(populated(), Msg::Navigate("/visualisations/nope".into()));
        let lines = render(&state.view(), state.routed_view());
        assert_eq!(lines.last().map(String::as_str), Some(NOT_FOUND_TEXT));
    }
}
