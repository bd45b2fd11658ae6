//! Session module - owns the complete session state and runs the frame logic
//!
//! A [`Session`] ties together the word list, spawner, match engine, collision
//! tracker and the mode transition table. It is driven from outside by three
//! calls per frame:
//!
//! 1. [`Session::handle_event`] for every queued input event, in arrival order
//! 2. [`Session::tick`] with the elapsed frame time
//! 3. rendering from the read-only accessors
//!
//! Persistence is passed into the calls that may need it and is never stored.

use crate::collision::{deadline_y, resolve_crossings};
use crate::controls::{interpret, Control};
use crate::dictionary::WordList;
use crate::entity::FallingWord;
use crate::error::GameError;
use crate::machine::{transition, Effect, Trigger};
use crate::matcher;
use crate::persist::Persistence;
use crate::scores::HighScores;
use crate::snapshot::{EntitySnapshot, SessionSnapshot};
use crate::spawner::Spawner;
use crate::types::{
    Action, FontFamily, InputEvent, Mode, ViewportSize, DEFAULT_FONT_SIZE, FONT_SIZE_MAX,
    FONT_SIZE_MIN, START_LIVES,
};

/// A completed mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
}

impl Transition {
    /// True when this transition (re)starts gameplay; the frame clock should restart.
    pub fn entered_playing(&self) -> bool {
        self.to == Mode::Playing && self.from != Mode::Playing
    }
}

/// What happened during one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub spawned: bool,
    pub missed: u32,
    pub transition: Option<Transition>,
}

/// Complete session state plus the controller logic that mutates it.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    score: u32,
    lives: u32,
    font: FontFamily,
    font_size: u8,
    /// Active entities in insertion order.
    entities: Vec<FallingWord>,
    input: String,
    viewport: ViewportSize,
    words: WordList,
    spawner: Spawner,
    high_scores: HighScores,
    quit_requested: bool,
    /// Set when a key press changed the mode; the text of that same press is dropped.
    swallow_text: bool,
}

impl Session {
    /// New session in `Menu`, seeded for spawning.
    pub fn new(words: WordList, high_scores: HighScores, seed: u32) -> Self {
        Self {
            mode: Mode::Menu,
            score: 0,
            lives: START_LIVES,
            font: FontFamily::default(),
            font_size: DEFAULT_FONT_SIZE,
            entities: Vec::new(),
            input: String::new(),
            viewport: ViewportSize::default(),
            words,
            spawner: Spawner::new(seed),
            high_scores,
            quit_requested: false,
            swallow_text: false,
        }
    }

    pub fn with_viewport(mut self, viewport: ViewportSize) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn font(&self) -> FontFamily {
        self.font
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn entities(&self) -> &[FallingWord] {
        &self.entities
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Y coordinate of the deadline line for the current viewport.
    pub fn deadline_y(&self) -> f32 {
        deadline_y(self.viewport.height)
    }

    /// Every active entity with its matched prefix length against the live input.
    pub fn highlights(&self) -> impl Iterator<Item = (&FallingWord, usize)> + '_ {
        self.entities
            .iter()
            .map(move |e| (e, e.matched_len(&self.input)))
    }

    /// Snapshot of the resumable part of the state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            score: self.score,
            lives: self.lives,
            font_size: self.font_size,
            font: self.font,
            entities: self.entities.iter().map(EntitySnapshot::from).collect(),
        }
    }

    pub fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    /// Ask the front end to stop after this frame.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Apply one input event.
    ///
    /// A key press arrives as `KeyDown` followed by its `TextInput`. When the
    /// key press changes the mode (a menu shortcut), the text half is dropped
    /// so it does not land in the freshly started game's input.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        store: &mut dyn Persistence,
    ) -> Option<Transition> {
        if std::mem::take(&mut self.swallow_text) && matches!(event, InputEvent::TextInput(_)) {
            return None;
        }

        match interpret(self.mode, event, self.viewport)? {
            Control::Action(action) => {
                let t = self.apply(action, store);
                self.swallow_text = t.is_some() && matches!(event, InputEvent::KeyDown(_));
                t
            }
            Control::Resize(viewport) => {
                self.resize(viewport);
                None
            }
            Control::Close => {
                self.request_quit();
                None
            }
        }
    }

    /// Apply one player intent. Intents that do not fit the current mode are ignored.
    pub fn apply(&mut self, action: Action, store: &mut dyn Persistence) -> Option<Transition> {
        if action.is_edit() {
            self.edit(action);
            return None;
        }
        self.fire(Trigger::Action(action), store)
    }

    /// Advance the simulation by `dt` seconds. Does nothing outside `Playing`.
    ///
    /// Order within a tick: spawn, move, then resolve deadline crossings.
    pub fn tick(&mut self, dt: f32, store: &mut dyn Persistence) -> TickReport {
        let mut report = TickReport::default();
        if self.mode != Mode::Playing {
            return report;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if let Some(entity) = self.spawner.maybe_spawn(
            &self.words,
            self.score,
            self.viewport.width,
            self.font_size,
        ) {
            self.entities.push(entity);
            report.spawned = true;
        }

        for entity in &mut self.entities {
            entity.advance(dt);
        }

        let deadline = self.deadline_y();
        let collisions = resolve_crossings(&mut self.entities, &mut self.lives, deadline);
        report.missed = collisions.missed;

        if collisions.exhausted {
            report.transition = self.fire(Trigger::LivesExhausted, store);
        }

        report
    }

    fn edit(&mut self, action: Action) {
        match (self.mode, action) {
            (Mode::Playing, Action::Type(c)) => {
                matcher::type_char(&mut self.input, c);
            }
            (Mode::Playing, Action::Backspace) => {
                matcher::backspace(&mut self.input);
            }
            (Mode::Playing, Action::Submit) => {
                if let Some(cleared) = matcher::submit(&mut self.entities, &mut self.input) {
                    self.score = self.score.saturating_add(cleared.points);
                    tracing::trace!(
                        word = cleared.entity.word(),
                        points = cleared.points,
                        score = self.score,
                        "word cleared"
                    );
                }
            }
            (Mode::Settings, Action::FontPrev | Action::FontNext) => {
                self.font = self.font.toggled();
            }
            (Mode::Settings, Action::FontSizeDown) => {
                self.set_font_size(self.font_size.saturating_sub(1));
            }
            (Mode::Settings, Action::FontSizeUp) => {
                self.set_font_size(self.font_size.saturating_add(1));
            }
            _ => {}
        }
    }

    fn set_font_size(&mut self, size: u8) {
        self.font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        for entity in &mut self.entities {
            entity.set_font_size(self.font_size);
        }
    }

    fn fire(&mut self, trigger: Trigger, store: &mut dyn Persistence) -> Option<Transition> {
        let step = transition(self.mode, trigger)?;
        if !self.run_effect(step.effect, store) {
            tracing::debug!(mode = self.mode.as_str(), ?trigger, "transition cancelled");
            return None;
        }

        let t = Transition {
            from: self.mode,
            to: step.to,
        };
        self.mode = step.to;
        tracing::debug!(from = t.from.as_str(), to = t.to.as_str(), "mode changed");
        Some(t)
    }

    /// Run a transition effect. Returns false to cancel the transition.
    fn run_effect(&mut self, effect: Effect, store: &mut dyn Persistence) -> bool {
        match effect {
            Effect::None => true,
            Effect::NewGame | Effect::Discard => {
                self.reset_game();
                true
            }
            Effect::Restore => match store.read_save() {
                Ok(Some(snapshot)) => {
                    self.restore(snapshot);
                    true
                }
                Ok(None) => {
                    tracing::debug!("no save to load");
                    false
                }
                Err(err) => {
                    tracing::warn!(%err, "ignoring unreadable save");
                    false
                }
            },
            Effect::AutoSave | Effect::Save => {
                self.write_save(store);
                true
            }
            Effect::Reload => {
                match store.read_save() {
                    Ok(Some(snapshot)) => self.restore(snapshot),
                    Ok(None) => tracing::warn!("save slot empty on resume; resuming paused state"),
                    Err(err) => {
                        tracing::warn!(%err, "save unreadable on resume; resuming paused state")
                    }
                }
                true
            }
            Effect::RecordGameOver => {
                self.record_game_over(store);
                true
            }
            Effect::Exit => {
                self.request_quit();
                true
            }
        }
    }

    fn reset_game(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.entities.clear();
        self.input.clear();
    }

    fn restore(&mut self, snapshot: SessionSnapshot) {
        self.score = snapshot.score;
        self.lives = snapshot.lives;
        self.font = snapshot.font;
        self.font_size = snapshot.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        let font_size = self.font_size;
        self.entities = snapshot
            .entities
            .into_iter()
            .map(|e| e.into_entity(font_size))
            .collect();
        self.input.clear();
    }

    fn write_save(&self, store: &mut dyn Persistence) {
        if let Err(err) = store.write_save(&self.snapshot()) {
            log_write_error(&err, "save failed");
        }
    }

    fn record_game_over(&mut self, store: &mut dyn Persistence) {
        tracing::info!(score = self.score, "game over");
        self.high_scores.push(self.score);
        if let Err(err) = store.write_scores(&self.high_scores) {
            log_write_error(&err, "could not record score");
        }
        if let Err(err) = store.clear_save() {
            log_write_error(&err, "could not clear save slot");
        }
    }
}

fn log_write_error(err: &GameError, what: &str) {
    tracing::warn!(%err, "{what}");
}
