//! Preview application: renders a component from JSON props.
//!
//! Usage: `daisy-atoms <avatar|icon> [PROPS.json|-]`. Props are read from
//! the given file, or from stdin when the path is `-` or omitted. The HTML
//! fragment is written to stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use maud::Render;
use strum::{Display, EnumString};

use crate::config::Settings;
use crate::ui::components::{AvatarProps, IconProps};

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV: &str = "DAISY_ATOMS_SETTINGS";

/// Components the preview can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ComponentKind {
    Avatar,
    Icon,
}

/// Render a component from its JSON props.
///
/// An empty document renders the component with all defaults; icons still
/// need a non-empty `name`.
pub fn render_component(kind: ComponentKind, props: &str, settings: &Settings) -> Result<String> {
    let props = if props.trim().is_empty() { "{}" } else { props };

    let markup = match kind {
        ComponentKind::Avatar => {
            let props: AvatarProps =
                serde_json::from_str(props).context("Invalid avatar props")?;
            props.into_avatar(&settings.avatar).render()
        }
        ComponentKind::Icon => {
            let props: IconProps = serde_json::from_str(props).context("Invalid icon props")?;
            props
                .into_icon(&settings.icon)
                .context("Invalid icon props")?
                .render()
        }
    };

    Ok(markup.into_string())
}

/// Main application entry point
pub struct App;

impl App {
    /// Run the preview with the process arguments (without the program name).
    pub fn run(args: impl IntoIterator<Item = String>) -> Result<()> {
        let mut args = args.into_iter();

        let kind = match args.next() {
            Some(kind) => kind
                .parse::<ComponentKind>()
                .with_context(|| format!("Unknown component: {kind}"))?,
            None => bail!("Usage: daisy-atoms <avatar|icon> [PROPS.json|-]"),
        };
        let props = read_props(args.next())?;
        let settings = Self::load_settings()?;

        tracing::info!(component = %kind, "Rendering preview");
        let html = render_component(kind, &props, &settings)?;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{html}").context("Failed to write output")?;
        Ok(())
    }

    /// Load settings from `$DAISY_ATOMS_SETTINGS` or the platform config dir.
    fn load_settings() -> Result<Settings> {
        let path = match std::env::var_os(SETTINGS_ENV) {
            Some(path) => PathBuf::from(path),
            None => match Settings::default_path() {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!("{e}; using default settings");
                    return Ok(Settings::default());
                }
            },
        };

        Settings::load_or_default(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }
}

fn read_props(path: Option<String>) -> Result<String> {
    match path.as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read props from stdin")?;
            Ok(buffer)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read props from {path}"))
        }
    }
}
