use chamber_core::commands::{InputEvent, InputFrame, Key};
use chamber_core::enums::SceneId;
use chamber_core::layout::MAIN_MENU;
use chamber_core::state::{Frame, MenuView};

use super::{wrap_index, Scene, Transition};
use crate::engine::SimulationEngine;

pub const TITLE: &str = "One In The Chamber";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartGame,
    Upgrades,
    Settings,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::StartGame,
        MenuItem::Upgrades,
        MenuItem::Settings,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::Upgrades => "Upgrades",
            Self::Settings => "Settings",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Debug, Default)]
pub struct MenuScene {
    selected: usize,
}

impl MenuScene {
    fn select(&self, engine: &mut SimulationEngine) -> Transition {
        match MenuItem::ALL[self.selected] {
            MenuItem::StartGame => {
                engine.start_game();
                Transition::Goto(SceneId::Game)
            }
            MenuItem::Upgrades => Transition::Goto(SceneId::Upgrades),
            MenuItem::Settings => Transition::Goto(SceneId::Settings),
            MenuItem::Quit => Transition::Quit,
        }
    }
}

impl Scene for MenuScene {
    fn handle_events(&mut self, input: &InputFrame, engine: &mut SimulationEngine) -> Transition {
        let len = MenuItem::ALL.len();
        for event in &input.events {
            match *event {
                InputEvent::KeyDown(Key::Up) => self.selected = wrap_index(self.selected, len, false),
                InputEvent::KeyDown(Key::Down) => self.selected = wrap_index(self.selected, len, true),
                InputEvent::KeyDown(Key::Enter) => return self.select(engine),
                InputEvent::PointerDown { y, .. } => {
                    if let Some(row) = MAIN_MENU.row_at(y, len) {
                        self.selected = row;
                        return self.select(engine);
                    }
                }
                _ => {}
            }
        }
        Transition::Stay
    }

    fn update(&mut self, _engine: &mut SimulationEngine) -> Transition {
        Transition::Stay
    }

    fn draw(&self, _engine: &SimulationEngine) -> Frame {
        Frame::Menu(MenuView {
            title: TITLE.to_string(),
            items: MenuItem::ALL.iter().map(|i| i.label().to_string()).collect(),
            selected: self.selected,
        })
    }
}
