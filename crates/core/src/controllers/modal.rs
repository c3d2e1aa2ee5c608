use folio_protocol::contract::{css, ids};
use folio_protocol::{ChartConfig, PageCommand, Target};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::charts::bind_chart;
use crate::markup;

/// A chart draw the host performs only after mounting the modal markup.
/// Emitting these alongside the markup commands (instead of racing a
/// timer) is what guarantees every canvas exists before any chart draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeferredChart {
    pub canvas_id: String,
    pub config: ChartConfig,
}

/// Everything a successful modal open produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalRender {
    /// Markup injection, overlay activation, scroll lock — applied in order.
    pub commands: Vec<PageCommand>,
    /// Chart draws to perform after the commands are applied.
    pub charts: Vec<DeferredChart>,
    /// Whether the project renders the live IoT dashboard; the host starts
    /// the sensor simulation when true and stops it on close.
    pub sensor_sim: bool,
}

/// Which panel of a before/after toggle to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleSide {
    Before,
    After,
}

impl ToggleSide {
    fn panel_id(self, section_index: usize) -> String {
        match self {
            Self::Before => format!("before-{section_index}"),
            Self::After => format!("after-{section_index}"),
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
        }
    }
}

/// The project detail modal.
#[derive(Debug, Default)]
pub struct ModalController {
    open_key: Option<String>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open_key.is_some()
    }

    pub fn open_key(&self) -> Option<&str> {
        self.open_key.as_deref()
    }

    /// Open the modal on a catalog project.
    ///
    /// An unknown key is a no-op: no commands, no state change, the
    /// overlay stays hidden and page scroll stays live.
    pub fn open(&mut self, catalog: &Catalog, key: &str) -> Option<ModalRender> {
        let project = catalog.get(key)?;
        self.open_key = Some(key.to_string());

        let mut commands = vec![PageCommand::SetMarkup {
            target: Target::id(ids::MODAL_CONTENT),
            markup: markup::render_project(project),
        }];
        if let Some(url) = &project.paper_url {
            commands.push(PageCommand::AppendMarkup {
                target: Target::id(ids::MODAL_CONTENT),
                markup: markup::render_paper_link(url),
            });
        }
        commands.push(PageCommand::add_class(
            Target::id(ids::MODAL_OVERLAY),
            css::ACTIVE,
        ));
        commands.push(PageCommand::LockScroll);

        let charts = markup::chart_sections(project)
            .into_iter()
            .map(|(index, spec)| DeferredChart {
                canvas_id: markup::canvas_id(index),
                config: bind_chart(spec),
            })
            .collect();

        Some(ModalRender {
            commands,
            charts,
            sensor_sim: project.has_iot_dashboard(),
        })
    }

    /// Hide the overlay and restore page scroll. Idempotent; closing an
    /// already-closed modal re-emits the same harmless commands.
    pub fn close(&mut self) -> Vec<PageCommand> {
        self.open_key = None;
        vec![
            PageCommand::remove_class(Target::id(ids::MODAL_OVERLAY), css::ACTIVE),
            PageCommand::UnlockScroll,
        ]
    }

    /// A click landed on the overlay region. Only a click on the backdrop
    /// itself closes; clicks inside the content panel do nothing.
    pub fn on_overlay_click(&mut self, on_backdrop: bool) -> Vec<PageCommand> {
        if on_backdrop { self.close() } else { Vec::new() }
    }

    /// Escape closes the modal from anywhere.
    pub fn on_escape(&mut self) -> Vec<PageCommand> {
        self.close()
    }

    /// Show one panel of the toggle widget at `section_index`, hiding its
    /// sibling. Ids are scoped per section, so multiple toggles in one
    /// modal never interfere.
    pub fn toggle(&self, section_index: usize, side: ToggleSide) -> Vec<PageCommand> {
        let shown = side.panel_id(section_index);
        let hidden = side.other().panel_id(section_index);
        vec![
            PageCommand::remove_class(Target::attr("data-target", hidden.clone()), css::ACTIVE),
            PageCommand::add_class(Target::attr("data-target", shown.clone()), css::ACTIVE),
            PageCommand::remove_class(Target::id(hidden), css::ACTIVE),
            PageCommand::add_class(Target::id(shown), css::ACTIVE),
        ]
    }
}
