// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, Result};
use crate::ui::notifications;
use crate::ui::viewer;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
    /// Escape pressed: dismisses the export menu, then the viewer.
    Escape,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Resource to open: a `data:` URL, an `http(s)` URL or a file path.
    pub resource: Option<String>,
    /// Display name of the resource.
    pub name: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `LENS_SHARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

impl Flags {
    /// Parses `[--lang <id>] [--name <title>] [--config-dir <dir>] <resource>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cli`] for malformed options, a missing resource or
    /// unexpected extra arguments.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let lang = args.opt_value_from_str("--lang")?;
        let name = args.opt_value_from_str("--name")?;
        let config_dir = args.opt_value_from_str("--config-dir")?;

        let mut free = args.finish().into_iter();
        let resource = free
            .next()
            .map(|arg| {
                arg.into_string()
                    .map_err(|_| Error::Cli("resource is not valid UTF-8".to_string()))
            })
            .transpose()?
            .ok_or_else(|| Error::Cli("missing resource argument".to_string()))?;

        if let Some(extra) = free.next() {
            return Err(Error::Cli(format!(
                "unexpected argument: {}",
                extra.to_string_lossy()
            )));
        }

        Ok(Self {
            lang,
            resource: Some(resource),
            name,
            config_dir,
        })
    }

    /// Display name, falling back to the last path segment of the resource.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.name.as_deref().filter(|name| !name.trim().is_empty()) {
            return Some(name.to_string());
        }

        let resource = self.resource.as_deref()?;
        if resource
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:"))
        {
            return None;
        }

        resource
            .split(['?', '#'])
            .next()
            .and_then(|path| path.trim_end_matches(['/', '\\']).rsplit(['/', '\\']).next())
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.rsplit_once('.') {
                Some((stem, _)) if !stem.is_empty() => stem.to_string(),
                _ => segment.to_string(),
            })
    }
}
