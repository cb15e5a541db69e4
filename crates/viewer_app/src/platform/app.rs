use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use tokio::runtime::Runtime;
use viewer_core::{ControllerConfig, Msg};
use viewer_engine::{
    ArtifactController, ArtifactStore, FileArtifactStore, MemoryArtifactStore, ACCEPTED_EXTENSION,
};
use viewer_logging::{viewer_error, viewer_info, viewer_warn};

use super::input::{parse_command, Command};
use super::settings::{Cli, ViewerSettings};
use super::{logging, ui};

type Controller = ArtifactController<Box<dyn ArtifactStore>>;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = ViewerSettings::load(cli.config.as_deref())?.apply_cli(&cli);
    logging::initialize(settings.log_destination, &settings.log_file);

    let store: Box<dyn ArtifactStore> = if cli.ephemeral {
        Box::new(MemoryArtifactStore::new())
    } else {
        Box::new(FileArtifactStore::new(settings.store_settings()))
    };
    let config = ControllerConfig::default();
    viewer_info!(
        "Starting viewer build {} with storage {:?}",
        config.build_id,
        settings.storage_dir
    );

    let runtime = Runtime::new()?;
    let mut controller = ArtifactController::new(config, store);
    let mut out = io::stdout().lock();

    runtime.block_on(controller.activate());
    if cli.reset {
        runtime.block_on(controller.reset());
    }
    if let Some(path) = cli.upload.clone() {
        warn_on_extension(&path);
        runtime.block_on(controller.select_file(Some(path)));
    }
    if let Some(path) = cli.path.clone() {
        runtime.block_on(controller.navigate(path));
    }
    render_frame(&mut out, &mut controller)?;

    if cli.once {
        return Ok(());
    }

    write_lines(&mut out, ui::constants::HELP_LINES.iter().copied())?;
    prompt(&mut out)?;
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                viewer_error!("Failed to read from stdin: {}", err);
                break;
            }
        };

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => {
                write_lines(&mut out, ui::constants::HELP_LINES.iter().copied())?;
            }
            Ok(Some(Command::Show)) => force_render(&mut out, &mut controller)?,
            Ok(Some(command)) => {
                if let Command::Upload(Some(path)) = &command {
                    warn_on_extension(path);
                }
                if let Some(msg) = command.to_msg() {
                    dispatch(&runtime, &mut controller, msg);
                }
                render_frame(&mut out, &mut controller)?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        prompt(&mut out)?;
    }

    viewer_info!("Viewer session closed");
    Ok(())
}

fn dispatch(runtime: &Runtime, controller: &mut Controller, msg: Msg) {
    runtime.block_on(controller.dispatch(msg));
}

/// The picker only offers `.json` files; anything else is still attempted.
fn warn_on_extension(path: &Path) {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ACCEPTED_EXTENSION));
    if !is_json {
        viewer_warn!("Uploading {:?}, which is not a .{} file", path, ACCEPTED_EXTENSION);
    }
}

fn render_frame(out: &mut impl Write, controller: &mut Controller) -> io::Result<()> {
    match controller.take_render() {
        Some(view) => write_lines(out, ui::render::render(&view, controller.routed_view())),
        None => Ok(()),
    }
}

fn force_render(out: &mut impl Write, controller: &mut Controller) -> io::Result<()> {
    controller.take_render();
    write_lines(out, ui::render::render(&controller.view(), controller.routed_view()))
}

fn write_lines<I>(out: &mut impl Write, lines: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", ui::constants::PROMPT)?;
    out.flush()
}
