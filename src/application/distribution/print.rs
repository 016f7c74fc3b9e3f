// SPDX-License-Identifier: MPL-2.0
//! Print through a secondary rendering surface.

use super::Distributor;
use crate::domain::export::{ExportAction, ExportChannel, ExportError, ExportResult};
use crate::domain::resource::ResourceReference;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const PRINT_READY: &str = "notification-print-ready";

const PRINT_CSS: &str = "\
html,body{margin:0;padding:0;background:#fff}\
body{display:flex;justify-content:center;align-items:flex-start}\
img{max-width:100%;page-break-inside:avoid;break-inside:avoid}\
@media print{@page{margin:1cm}img{max-height:100vh}}";

/// Prints once the resource has loaded, then closes the surface.
const PRINT_TRIGGER: &str = "window.print(); window.close();";

/// Builds the document injected into the print surface.
///
/// The resource is rendered at natural size; attribute values are escaped.
#[must_use]
pub fn print_document(reference: &ResourceReference, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Print " (title) }
                style { (PreEscaped(PRINT_CSS)) }
            }
            body {
                img src=(reference.raw()) alt=(title) onload=(PRINT_TRIGGER);
            }
        }
    }
}

impl Distributor {
    /// Opens a print surface showing the resource.
    pub async fn print(&self, reference: &ResourceReference, title: &str) -> ExportResult {
        let Some(mut surface) = self.platform().print.open() else {
            tracing::warn!("print surface could not be opened");
            return unavailable();
        };

        let document = print_document(reference, title).into_string();
        if let Err(err) = surface.write_document(&document) {
            tracing::warn!(error = %err, "writing print document failed");
            return unavailable();
        }
        if let Err(err) = surface.close_document() {
            tracing::warn!(error = %err, "finishing print document failed");
            return unavailable();
        }

        ExportResult::succeeded(ExportAction::Print, ExportChannel::PrintSurface, PRINT_READY)
    }
}

fn unavailable() -> ExportResult {
    ExportResult::failed(
        ExportAction::Print,
        ExportChannel::None,
        ExportError::PrintUnavailable,
    )
}
