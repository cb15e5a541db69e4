use crate::Artifact;

pub const VISUALISATIONS: &str = "/visualisations";
pub const GAME_VISUALISATION: &str = "/visualisations/game";
pub const IIGO_VISUALISATION: &str = "/visualisations/iigo";
pub const IITO_VISUALISATION: &str = "/visualisations/iito";
pub const IIFO_VISUALISATION: &str = "/visualisations/iifo";
pub const RESOURCES_VISUALISATION: &str = "/visualisations/resources";
pub const ROLES_VISUALISATION: &str = "/visualisations/roles";

/// The specialised visualisation screens reachable once an artifact is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubView {
    Game,
    Iigo,
    Iito,
    Iifo,
    Resources,
    Roles,
}

impl SubView {
    /// Navigation bar order.
    pub const ALL: [SubView; 6] = [
        SubView::Game,
        SubView::Iigo,
        SubView::Iito,
        SubView::Iifo,
        SubView::Resources,
        SubView::Roles,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SubView::Game => GAME_VISUALISATION,
            SubView::Iigo => IIGO_VISUALISATION,
            SubView::Iito => IITO_VISUALISATION,
            SubView::Iifo => IIFO_VISUALISATION,
            SubView::Resources => RESOURCES_VISUALISATION,
            SubView::Roles => ROLES_VISUALISATION,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SubView::Game => "Game",
            SubView::Iigo => "IIGO",
            SubView::Iito => "IITO",
            SubView::Iifo => "IIFO",
            SubView::Resources => "Resources",
            SubView::Roles => "Roles",
        }
    }

    /// Exact path match; no prefix or trailing-slash tolerance.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sub_view| sub_view.path() == path)
    }
}

/// What the viewer shows for a given location, before the artifact is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    UploadPrompt,
    SubView(SubView),
    NotFound,
}

/// Pure routing decision: without an artifact the path is ignored.
pub fn route(artifact_present: bool, path: &str) -> Screen {
    if !artifact_present {
        return Screen::UploadPrompt;
    }
    match SubView::from_path(path) {
        Some(sub_view) => Screen::SubView(sub_view),
        None => Screen::NotFound,
    }
}

/// A routed screen with the artifact it renders, borrowed from the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    UploadPrompt,
    Visualisation {
        sub_view: SubView,
        artifact: &'a Artifact,
    },
    NotFound,
}

impl<'a> View<'a> {
    pub(crate) fn resolve(artifact: Option<&'a Artifact>, path: &str) -> Self {
        match (route(artifact.is_some(), path), artifact) {
            (Screen::SubView(sub_view), Some(artifact)) => View::Visualisation { sub_view, artifact },
            (Screen::NotFound, _) => View::NotFound,
            _ => View::UploadPrompt,
        }
    }
}
