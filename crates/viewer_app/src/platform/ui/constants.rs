pub const PROMPT: &str = "viewer> ";
pub const RULE: &str = "----------------------------------------";
pub const UPLOAD_PROMPT_TITLE: &str = "Visualisations";
pub const UPLOAD_PROMPT_HINT: &str = "Upload output JSON file: `upload <path>`";
pub const BUILD_LABEL: &str = "Viewer build:";
pub const NOT_FOUND_TEXT: &str = "404: nothing lives here. Pick a view from the bar above.";

pub const HELP_LINES: &[&str] = &[
    "upload <file>       load a simulation output (.json)",
    "go <view|path>      game, iigo, iito, iifo, resources, roles, or a raw path",
    "reset               forget the loaded output",
    "dismiss error       close the error banner",
    "dismiss warning     close the warning banner",
    "show                render the current view again",
    "quit                leave",
];
