use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::catalog::Catalog;
use folio_core::controllers::{
    DownloadCounter, ModalController, NavController, ProjectFilter, ScrollReveal, SensorSim,
    TypingAnimator, ToggleSide,
    filter::CardInfo,
    modal::DeferredChart,
    nav::SectionOffset,
    reveal, sensors, skills,
};
use folio_core::storage::MemoryStore;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::page::PageModel;
use crate::render;

/// One terminal row covers this many page units.
pub const ROW_UNITS: f64 = 20.0;
const SCROLL_STEP: f64 = 60.0;

/// The portfolio page: five sections at fixed offsets.
pub struct PageSection {
    pub id: &'static str,
    pub label: &'static str,
    pub top: f64,
    pub height: f64,
}

pub const SECTIONS: [PageSection; 5] = [
    PageSection { id: "home", label: "Home", top: 0.0, height: 600.0 },
    PageSection { id: "about", label: "About", top: 600.0, height: 600.0 },
    PageSection { id: "skills", label: "Skills", top: 1200.0, height: 600.0 },
    PageSection { id: "projects", label: "Projects", top: 1800.0, height: 600.0 },
    PageSection { id: "contact", label: "Contact", top: 2400.0, height: 600.0 },
];

pub const SKILL_BARS: [(&str, &str, f64); 4] = [
    ("skill-python", "Python", 90.0),
    ("skill-sql", "SQL", 85.0),
    ("skill-ml", "Machine Learning", 80.0),
    ("skill-viz", "Data Visualization", 88.0),
];

pub const FILTERS: [&str; 4] = ["all", "ml", "nlp", "iot"];

/// Category list each project card carries, keyed by project.
pub fn card_categories(key: &str) -> &'static str {
    match key {
        "sentiment" => "ml nlp",
        "pale" => "iot",
        "ecommerce" => "ml nlp data",
        _ => "ml",
    }
}

pub fn card_id(key: &str) -> String {
    format!("card-{key}")
}

/// A revealable element: lives in a section, observed for visibility.
struct Observed {
    id: String,
    top: f64,
    height: f64,
    skill_percent: Option<f64>,
}

pub struct App {
    pub catalog: Catalog,
    pub model: PageModel,
    pub scroll_y: f64,
    pub selected_card: usize,
    pub active_filter: usize,
    pub modal_charts: Vec<DeferredChart>,
    nav: NavController,
    typing: TypingAnimator,
    typing_due: Instant,
    reveal: ScrollReveal,
    filter: ProjectFilter,
    pub modal: ModalController,
    counter: DownloadCounter,
    store: MemoryStore,
    restore_due: Vec<Instant>,
    sensor_sim: Option<SensorSim>,
    sensor_due: Instant,
    observed: Vec<Observed>,
    viewport_units: f64,
    quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, now: Instant) -> Self {
        let mut observed: Vec<Observed> = SKILL_BARS
            .iter()
            .enumerate()
            .map(|(i, (id, _, percent))| Observed {
                id: (*id).to_string(),
                top: 1260.0 + i as f64 * 60.0,
                height: 40.0,
                skill_percent: Some(*percent),
            })
            .collect();
        for (i, project) in catalog.projects().iter().enumerate() {
            observed.push(Observed {
                id: card_id(&project.key),
                top: 1860.0 + i as f64 * 120.0,
                height: 100.0,
                skill_percent: None,
            });
        }

        Self {
            catalog,
            model: PageModel::default(),
            scroll_y: 0.0,
            selected_card: 0,
            active_filter: 0,
            modal_charts: Vec::new(),
            nav: NavController::new(),
            typing: TypingAnimator::default(),
            typing_due: now,
            reveal: ScrollReveal::new(),
            filter: ProjectFilter::new(),
            modal: ModalController::new(),
            counter: DownloadCounter::default(),
            store: MemoryStore::new(),
            restore_due: Vec::new(),
            sensor_sim: None,
            sensor_due: now,
            observed,
            viewport_units: 800.0,
            quit: false,
        }
    }

    /// Wire everything up the way the page does on document ready.
    pub fn startup(&mut self) {
        let commands = self.reveal.prime();
        self.model.apply_all(&commands);
        let commands = self.counter.init(&self.store);
        self.model.apply_all(&commands);
        let cards = self.cards();
        let commands = self.filter.apply("all", &cards);
        self.model.apply_all(&commands);
        self.on_scroll_changed();
    }

    pub fn download_count(&self) -> u64 {
        self.counter.count()
    }

    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_units = f64::from(rows) * ROW_UNITS;
    }

    fn cards(&self) -> Vec<CardInfo> {
        self.catalog
            .projects()
            .iter()
            .map(|p| CardInfo {
                id: card_id(&p.key),
                categories: card_categories(&p.key).to_string(),
            })
            .collect()
    }

    fn sections(&self) -> Vec<SectionOffset> {
        SECTIONS
            .iter()
            .map(|s| SectionOffset {
                id: s.id.to_string(),
                top: s.top,
            })
            .collect()
    }

    fn max_scroll(&self) -> f64 {
        let bottom = SECTIONS.last().map_or(0.0, |s| s.top + s.height);
        (bottom - self.viewport_units).max(0.0)
    }

    /// Re-run everything that hangs off a scroll event: navbar styling,
    /// active link, and the visibility observers.
    fn on_scroll_changed(&mut self) {
        let sections = self.sections();
        let commands = self.nav.on_scroll(self.scroll_y, &sections);
        self.model.apply_all(&commands);

        let view_top = self.scroll_y;
        let view_bottom = self.scroll_y + self.viewport_units - reveal::BOTTOM_MARGIN;
        let events: Vec<(String, bool, Option<f64>)> = self
            .observed
            .iter()
            .map(|el| {
                let intersecting = el.top < view_bottom && el.top + el.height > view_top;
                (el.id.clone(), intersecting, el.skill_percent)
            })
            .collect();
        for (id, intersecting, skill_percent) in events {
            match skill_percent {
                Some(percent) => {
                    if let Some(command) = skills::on_intersection(&id, percent, intersecting) {
                        self.model.apply(&command);
                    }
                }
                None => {
                    let commands = self.reveal.on_intersection(&id, intersecting);
                    self.model.apply_all(&commands);
                }
            }
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        if self.model.scroll_locked {
            return;
        }
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, self.max_scroll());
        self.on_scroll_changed();
    }

    fn jump_to_section(&mut self, id: &str) {
        if let Some(section) = SECTIONS.iter().find(|s| s.id == id) {
            self.scroll_y = section.top.min(self.max_scroll());
            self.on_scroll_changed();
        }
    }

    fn apply_filter(&mut self, index: usize) {
        self.active_filter = index % FILTERS.len();
        let cards = self.cards();
        let commands = self.filter.apply(FILTERS[self.active_filter], &cards);
        self.model.apply_all(&commands);
    }

    fn open_selected(&mut self, now: Instant) {
        let Some(project) = self.catalog.projects().get(self.selected_card) else {
            return;
        };
        let key = project.key.clone();
        if let Some(render) = self.modal.open(&self.catalog, &key) {
            self.model.apply_all(&render.commands);
            // Markup is applied above; charts draw from here on.
            self.modal_charts = render.charts;
            if render.sensor_sim {
                let seed = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map_or(0, |d| u64::from(d.subsec_nanos()));
                self.sensor_sim = Some(SensorSim::new(seed));
                self.sensor_due = now + sensors::TICK_INTERVAL;
            }
        }
    }

    fn close_modal(&mut self) {
        let commands = self.modal.close();
        self.model.apply_all(&commands);
        self.modal_charts.clear();
        // Dropping the simulation is its stop handle.
        self.sensor_sim = None;
    }

    pub fn toggle_side(&mut self, side: ToggleSide) {
        let Some(key) = self.modal.open_key() else {
            return;
        };
        let Some(project) = self.catalog.get(key) else {
            return;
        };
        let toggles: Vec<usize> = project
            .sections
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s.body, folio_core::SectionBody::Toggle { .. }))
            .map(|(i, _)| i)
            .collect();
        for index in toggles {
            let commands = self.modal.toggle(index, side);
            self.model.apply_all(&commands);
        }
    }

    pub fn on_key(&mut self, code: KeyCode, now: Instant) {
        if self.modal.is_open() {
            match code {
                KeyCode::Esc | KeyCode::Char('q') => self.close_modal(),
                KeyCode::Char('b') => self.toggle_side(ToggleSide::Before),
                KeyCode::Char('a') => self.toggle_side(ToggleSide::After),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up => self.scroll_by(-SCROLL_STEP),
            KeyCode::Down => self.scroll_by(SCROLL_STEP),
            KeyCode::PageUp => self.scroll_by(-self.viewport_units),
            KeyCode::PageDown => self.scroll_by(self.viewport_units),
            KeyCode::Char('m') => {
                let commands = self.nav.toggle_menu();
                self.model.apply_all(&commands);
            }
            KeyCode::Char('g') => {
                // Jump via nav link: closes the menu, smooth-scrolls home.
                let commands = self.nav.on_link_activated();
                self.model.apply_all(&commands);
                if let Some(command) = folio_core::controllers::nav::anchor_clicked("#home") {
                    self.model.apply(&command);
                }
            }
            KeyCode::Tab => self.apply_filter(self.active_filter + 1),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < FILTERS.len() {
                    self.apply_filter(index);
                }
            }
            KeyCode::Left => self.selected_card = self.selected_card.saturating_sub(1),
            KeyCode::Right => {
                let last = self.catalog.len().saturating_sub(1);
                self.selected_card = (self.selected_card + 1).min(last);
            }
            KeyCode::Enter => self.open_selected(now),
            KeyCode::Char('d') => {
                let ack = self.counter.record(&mut self.store);
                self.model.apply_all(&ack.commands);
                self.restore_due.push(now + ack.restore_after);
            }
            _ => {}
        }
    }

    /// Fire every timer that has come due.
    pub fn on_tick(&mut self, now: Instant) {
        if now >= self.typing_due {
            let tick = self.typing.tick();
            self.model.apply(&tick.command());
            self.typing_due = now + tick.next_delay;
        }

        if let Some(sim) = self.sensor_sim.as_mut() {
            if now >= self.sensor_due {
                let commands = sim.tick();
                self.model.apply_all(&commands);
                self.sensor_due = now + sensors::TICK_INTERVAL;
            }
        }

        let mut fired = false;
        self.restore_due.retain(|due| {
            if now >= *due {
                fired = true;
                false
            } else {
                true
            }
        });
        if fired {
            let commands = self.counter.restore_commands();
            self.model.apply_all(&commands);
        }

        if let Some(id) = self.model.scroll_request.take() {
            self.jump_to_section(&id);
        }
    }

    /// The nearest timer deadline, for the event-poll timeout.
    pub fn next_deadline(&self, now: Instant) -> Duration {
        let mut deadline = self.typing_due;
        if self.sensor_sim.is_some() {
            deadline = deadline.min(self.sensor_due);
        }
        if let Some(first) = self.restore_due.iter().min() {
            deadline = deadline.min(*first);
        }
        deadline.saturating_duration_since(now)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn card_visible(&self, key: &str) -> bool {
        !self.model.is_hidden(&card_id(key))
    }
}

pub fn run(catalog: Catalog) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, Instant::now());
    app.startup();

    loop {
        let size = terminal.size()?;
        app.set_viewport_rows(size.height.saturating_sub(2));

        terminal.draw(|frame| render::draw(frame, &app))?;

        let now = Instant::now();
        let timeout = app.next_deadline(now).min(Duration::from_millis(250));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code, Instant::now());
                }
            }
        }
        app.on_tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
