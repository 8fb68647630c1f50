use chamber_core::commands::{InputEvent, InputFrame, Key};
use chamber_core::enums::SceneId;
use chamber_core::layout::UPGRADES_MENU;
use chamber_core::state::{Frame, UpgradeRow, UpgradesView};

use super::{wrap_index, Scene, Transition};
use crate::engine::SimulationEngine;

#[derive(Debug, Default)]
pub struct UpgradesScene {
    selected: usize,
    message: Option<String>,
}

impl UpgradesScene {
    fn purchase(&mut self, engine: &mut SimulationEngine) {
        self.message = Some(match engine.purchase_upgrade(self.selected) {
            Ok(p) => match engine.upgrades().get(self.selected) {
                Some(u) => format!("Bought {} (level {})", u.name, p.new_level),
                None => "Bought".to_string(),
            },
            Err(e) => e.to_string(),
        });
    }
}

impl Scene for UpgradesScene {
    fn handle_events(&mut self, input: &InputFrame, engine: &mut SimulationEngine) -> Transition {
        let len = engine.upgrades().len();
        for event in &input.events {
            match *event {
                InputEvent::KeyDown(Key::Up) => self.selected = wrap_index(self.selected, len, false),
                InputEvent::KeyDown(Key::Down) => self.selected = wrap_index(self.selected, len, true),
                InputEvent::KeyDown(Key::Enter) => self.purchase(engine),
                InputEvent::KeyDown(Key::Escape) => return Transition::Goto(SceneId::Menu),
                // Clicking a row selects and buys it.
                InputEvent::PointerDown { y, .. } => {
                    if let Some(row) = UPGRADES_MENU.row_at(y, len) {
                        self.selected = row;
                        self.purchase(engine);
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

    fn draw(&self, engine: &SimulationEngine) -> Frame {
        Frame::Upgrades(UpgradesView {
            rows: engine
                .upgrades()
                .upgrades
                .iter()
                .map(|u| UpgradeRow {
                    name: u.name.clone(),
                    level: u.level,
                    category: u.category,
                    cost: u.cost(),
                })
                .collect(),
            selected: self.selected,
            coins: engine.score(),
            message: self.message.clone(),
        })
    }

    fn on_enter(&mut self, _engine: &mut SimulationEngine) {
        self.message = None;
    }
}
