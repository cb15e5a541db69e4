use crate::{Screen, SessionPhase};

pub const ERROR_HEADING: &str = "Oh reeeeeeeeee!";
pub const WARNING_HEADING: &str = "Rough seas ahead!";

/// A dismissible alert shown above the routed screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub heading: &'static str,
    pub message: String,
}

impl Banner {
    pub(crate) fn error(message: String) -> Self {
        Self {
            heading: ERROR_HEADING,
            message,
        }
    }

    pub(crate) fn warning(message: String) -> Self {
        Self {
            heading: WARNING_HEADING,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: SessionPhase,
    pub location: String,
    pub screen: Screen,
    pub loading_text: Option<&'static str>,
    pub error: Option<Banner>,
    pub warning: Option<Banner>,
    /// The navigation bar (with Reset) is only shown while an artifact is loaded.
    pub show_navbar: bool,
    pub build_id: String,
    pub dirty: bool,
}
