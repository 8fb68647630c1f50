//! Scene state machine: menu, settings, upgrades and the game itself.
//!
//! Exactly one scene is active. Each frame the machine routes input to it,
//! lets it update, applies any transition it requests, and asks the (new)
//! active scene for a `Frame` to draw. All scenes share one engine.

mod game;
mod menu;
mod settings;
mod upgrades;

use std::collections::HashMap;

use chamber_core::commands::{InputEvent, InputFrame};
use chamber_core::enums::SceneId;
use chamber_core::state::{Frame, MenuView};

use crate::engine::SimulationEngine;

pub use game::GameScene;
pub use menu::{MenuItem, MenuScene};
pub use settings::SettingsScene;
pub use upgrades::UpgradesScene;

/// What a scene wants to happen after handling input or updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Goto(SceneId),
    Quit,
}

pub trait Scene {
    /// React to this frame's input.
    fn handle_events(&mut self, input: &InputFrame, engine: &mut SimulationEngine) -> Transition;

    /// Advance one frame.
    fn update(&mut self, engine: &mut SimulationEngine) -> Transition;

    /// Describe what to draw. Must not change any state.
    fn draw(&self, engine: &SimulationEngine) -> Frame;

    /// Called when the scene becomes active.
    fn on_enter(&mut self, _engine: &mut SimulationEngine) {}
}

pub struct SceneMachine {
    scenes: HashMap<SceneId, Box<dyn Scene>>,
    active: SceneId,
    engine: SimulationEngine,
    running: bool,
}

impl SceneMachine {
    /// Machine with the four standard scenes, starting at the menu.
    pub fn new(engine: SimulationEngine) -> Self {
        let mut scenes: HashMap<SceneId, Box<dyn Scene>> = HashMap::new();
        scenes.insert(SceneId::Menu, Box::new(MenuScene::default()));
        scenes.insert(SceneId::Settings, Box::new(SettingsScene::default()));
        scenes.insert(SceneId::Upgrades, Box::new(UpgradesScene::default()));
        scenes.insert(SceneId::Game, Box::new(GameScene));
        Self {
            scenes,
            active: SceneId::Menu,
            engine,
            running: true,
        }
    }

    pub fn active(&self) -> SceneId {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    /// Run one frame: input, update, transitions, draw.
    pub fn step(&mut self, input: &InputFrame) -> Frame {
        if input.events.iter().any(|e| matches!(e, InputEvent::Quit)) {
            self.apply(Transition::Quit);
            return self.draw();
        }

        if let Some(scene) = self.scenes.get_mut(&self.active) {
            let transition = scene.handle_events(input, &mut self.engine);
            self.apply(transition);
        }
        if self.running {
            if let Some(scene) = self.scenes.get_mut(&self.active) {
                let transition = scene.update(&mut self.engine);
                self.apply(transition);
            }
        }
        self.draw()
    }

    /// Frame for the active scene.
    pub fn draw(&self) -> Frame {
        match self.scenes.get(&self.active) {
            Some(scene) => scene.draw(&self.engine),
            None => Frame::Menu(MenuView::default()),
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Goto(next) => {
                if next != self.active {
                    tracing::debug!(from = ?self.active, to = ?next, "Scene change");
                    self.active = next;
                    if let Some(scene) = self.scenes.get_mut(&next) {
                        scene.on_enter(&mut self.engine);
                    }
                }
            }
            Transition::Quit => {
                tracing::info!("Quit requested");
                self.engine.abandon_session();
                self.running = false;
            }
        }
    }
}

/// Move a list cursor by one, wrapping at both ends.
pub(crate) fn wrap_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}
