//! Browser bridge: the page-side glue calls these functions from its event
//! handlers, observers, and timers, applies the returned `PageCommand`
//! lists to the real DOM, and owns localStorage plus every timer.

use std::sync::Mutex;

use folio_core::catalog::Catalog;
use folio_core::controllers::{
    DownloadCounter, ModalController, NavController, ProjectFilter, ScrollReveal, SensorSim,
    ToggleSide, TypingAnimator,
    filter::CardInfo,
    nav::{self, SectionOffset},
    reveal, sensors, skills,
};
use folio_core::controllers::modal::DeferredChart;
use folio_core::storage::{CounterStore, MemoryStore};
use folio_protocol::PageCommand;
use folio_protocol::contract::DOWNLOAD_COUNT_KEY;
use serde::Serialize;
use wasm_bindgen::prelude::*;

struct Bridge {
    catalog: Catalog,
    nav: NavController,
    typing: TypingAnimator,
    reveal: ScrollReveal,
    filter: ProjectFilter,
    modal: ModalController,
    counter: DownloadCounter,
    store: MemoryStore,
    sensors: Option<SensorSim>,
}

static BRIDGE: Mutex<Option<Bridge>> = Mutex::new(None);

fn with_bridge<T>(f: impl FnOnce(&mut Bridge) -> Result<T, JsError>) -> Result<T, JsError> {
    let mut guard = BRIDGE
        .lock()
        .map_err(|_| JsError::new("bridge state poisoned"))?;
    let bridge = guard.as_mut().ok_or_else(|| JsError::new("init() not called"))?;
    f(bridge)
}

fn commands_json(commands: &[PageCommand]) -> Result<String, JsError> {
    serde_json::to_string(commands).map_err(|e| JsError::new(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Set up the controllers. With no argument the built-in catalog is used;
/// otherwise the argument is catalog JSON.
#[wasm_bindgen]
pub fn init(catalog_json: Option<String>) -> Result<(), JsError> {
    let catalog = match catalog_json {
        Some(json) => Catalog::from_json(json.as_bytes()).map_err(|e| JsError::new(&e.to_string()))?,
        None => Catalog::builtin(),
    };
    let mut guard = BRIDGE
        .lock()
        .map_err(|_| JsError::new("bridge state poisoned"))?;
    *guard = Some(Bridge {
        catalog,
        nav: NavController::new(),
        typing: TypingAnimator::default(),
        reveal: ScrollReveal::new(),
        filter: ProjectFilter::new(),
        modal: ModalController::new(),
        counter: DownloadCounter::default(),
        store: MemoryStore::new(),
        sensors: None,
    });
    Ok(())
}

/// Scroll handler. `sections_json` is the ordered section list as
/// `[{"id": "...", "top": ...}]`. Returns commands as JSON.
#[wasm_bindgen]
pub fn on_scroll(scroll_y: f64, sections_json: &str) -> Result<String, JsError> {
    let sections: Vec<SectionOffset> =
        serde_json::from_str(sections_json).map_err(|e| JsError::new(&e.to_string()))?;
    with_bridge(|bridge| commands_json(&bridge.nav.on_scroll(scroll_y, &sections)))
}

#[wasm_bindgen]
pub fn toggle_menu() -> Result<String, JsError> {
    with_bridge(|bridge| commands_json(&bridge.nav.toggle_menu()))
}

#[wasm_bindgen]
pub fn nav_link_clicked() -> Result<String, JsError> {
    with_bridge(|bridge| commands_json(&bridge.nav.on_link_activated()))
}

/// Click on any in-page anchor: smooth-scroll its target section.
#[wasm_bindgen]
pub fn anchor_clicked(fragment: &str) -> Result<String, JsError> {
    let commands: Vec<PageCommand> = nav::anchor_clicked(fragment).into_iter().collect();
    commands_json(&commands)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TypingOut {
    commands: Vec<PageCommand>,
    next_delay_ms: u64,
}

/// One typing-animator step. The host schedules the next call after
/// `nextDelayMs` — a single-shot timer per tick, never a fixed interval.
#[wasm_bindgen]
pub fn typing_tick() -> Result<String, JsError> {
    with_bridge(|bridge| {
        let tick = bridge.typing.tick();
        to_json(&TypingOut {
            next_delay_ms: tick.next_delay.as_millis() as u64,
            commands: vec![tick.command()],
        })
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ObserverConfig {
    threshold: f64,
    bottom_margin: f64,
    skill_threshold: f64,
}

/// Observer tuning for the host's IntersectionObserver registrations.
#[wasm_bindgen]
pub fn observer_config() -> Result<String, JsError> {
    to_json(&ObserverConfig {
        threshold: reveal::INTERSECT_THRESHOLD,
        bottom_margin: reveal::BOTTOM_MARGIN,
        skill_threshold: skills::INTERSECT_THRESHOLD,
    })
}

/// Tag all revealable cards with the base animation class.
#[wasm_bindgen]
pub fn prime_reveal() -> Result<String, JsError> {
    with_bridge(|bridge| commands_json(&bridge.reveal.prime()))
}

#[wasm_bindgen]
pub fn reveal_intersection(element_id: &str, intersecting: bool) -> Result<String, JsError> {
    with_bridge(|bridge| commands_json(&bridge.reveal.on_intersection(element_id, intersecting)))
}

#[wasm_bindgen]
pub fn skill_intersection(
    element_id: &str,
    progress_percent: f64,
    intersecting: bool,
) -> Result<String, JsError> {
    let commands: Vec<PageCommand> =
        skills::on_intersection(element_id, progress_percent, intersecting)
            .into_iter()
            .collect();
    commands_json(&commands)
}

/// Apply a project filter. `cards_json` is
/// `[{"id": "...", "categories": "..."}]`.
#[wasm_bindgen]
pub fn apply_filter(filter: &str, cards_json: &str) -> Result<String, JsError> {
    let cards: Vec<CardInfo> =
        serde_json::from_str(cards_json).map_err(|e| JsError::new(&e.to_string()))?;
    with_bridge(|bridge| commands_json(&bridge.filter.apply(filter, &cards)))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OpenOut {
    commands: Vec<PageCommand>,
    /// Drawn by the host after the commands are applied — the canvases
    /// are guaranteed to be mounted by then.
    charts: Vec<DeferredChart>,
    sensor_sim: bool,
    sensor_interval_ms: u64,
}

/// Open the project modal. Unknown keys return no commands at all.
/// `sensor_seed` seeds the simulation when the project carries the IoT
/// dashboard.
#[wasm_bindgen]
pub fn open_project(key: &str, sensor_seed: u32) -> Result<String, JsError> {
    with_bridge(|bridge| {
        let Some(render) = bridge.modal.open(&bridge.catalog, key) else {
            return to_json(&OpenOut {
                commands: Vec::new(),
                charts: Vec::new(),
                sensor_sim: false,
                sensor_interval_ms: 0,
            });
        };
        if render.sensor_sim {
            bridge.sensors = Some(SensorSim::new(u64::from(sensor_seed)));
        }
        to_json(&OpenOut {
            commands: render.commands,
            charts: render.charts,
            sensor_sim: render.sensor_sim,
            sensor_interval_ms: sensors::TICK_INTERVAL.as_millis() as u64,
        })
    })
}

/// Close the modal (close control, backdrop click, or Escape all land
/// here). Also stops the sensor simulation.
#[wasm_bindgen]
pub fn close_modal() -> Result<String, JsError> {
    with_bridge(|bridge| {
        bridge.sensors = None;
        commands_json(&bridge.modal.close())
    })
}

/// Click inside the overlay region; only backdrop clicks close.
#[wasm_bindgen]
pub fn overlay_clicked(on_backdrop: bool) -> Result<String, JsError> {
    with_bridge(|bridge| {
        if on_backdrop {
            bridge.sensors = None;
        }
        commands_json(&bridge.modal.on_overlay_click(on_backdrop))
    })
}

/// Flip a before/after toggle. `side` is `"before"` or `"after"`.
#[wasm_bindgen]
pub fn toggle_section(section_index: usize, side: &str) -> Result<String, JsError> {
    let side = match side {
        "before" => ToggleSide::Before,
        "after" => ToggleSide::After,
        other => return Err(JsError::new(&format!("unknown toggle side: {other}"))),
    };
    with_bridge(|bridge| commands_json(&bridge.modal.toggle(section_index, side)))
}

/// One sensor-simulation tick. Returns no commands when no dashboard is
/// live (the host may keep a stale interval running briefly).
#[wasm_bindgen]
pub fn sensor_tick() -> Result<String, JsError> {
    with_bridge(|bridge| match bridge.sensors.as_mut() {
        Some(sim) => commands_json(&sim.tick()),
        None => commands_json(&[]),
    })
}

/// Initialize the download counter from the host's persisted value
/// (localStorage read, or absent).
#[wasm_bindgen]
pub fn init_downloads(stored: Option<String>) -> Result<String, JsError> {
    with_bridge(|bridge| {
        if let Some(value) = stored {
            bridge.store.set(DOWNLOAD_COUNT_KEY, value);
        }
        commands_json(&bridge.counter.init(&bridge.store))
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DownloadOut {
    /// Value the host persists back under the counter key.
    persist: String,
    commands: Vec<PageCommand>,
    /// The host schedules `download_restore()` this many ms out; every
    /// click gets its own timer.
    restore_after_ms: u64,
}

#[wasm_bindgen]
pub fn record_download() -> Result<String, JsError> {
    with_bridge(|bridge| {
        let ack = bridge.counter.record(&mut bridge.store);
        to_json(&DownloadOut {
            persist: bridge
                .store
                .get(DOWNLOAD_COUNT_KEY)
                .unwrap_or_else(|| ack.count.to_string()),
            commands: ack.commands,
            restore_after_ms: ack.restore_after.as_millis() as u64,
        })
    })
}

/// An acknowledgment window expired: restore the trigger label and
/// re-display the current count.
#[wasm_bindgen]
pub fn download_restore() -> Result<String, JsError> {
    with_bridge(|bridge| commands_json(&bridge.counter.restore_commands()))
}
