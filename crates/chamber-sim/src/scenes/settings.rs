use chamber_core::commands::{InputFrame, Key};
use chamber_core::enums::SceneId;
use chamber_core::settings::SettingKey;
use chamber_core::state::{Frame, SettingsView};

use super::{wrap_index, Scene, Transition};
use crate::engine::SimulationEngine;

/// Left/Right steps the selected tunable within its range.
#[derive(Debug, Default)]
pub struct SettingsScene {
    selected: usize,
}

impl Scene for SettingsScene {
    fn handle_events(&mut self, input: &InputFrame, engine: &mut SimulationEngine) -> Transition {
        let len = SettingKey::ALL.len();
        for key in input.keys() {
            match key {
                Key::Up => self.selected = wrap_index(self.selected, len, false),
                Key::Down => self.selected = wrap_index(self.selected, len, true),
                Key::Left => engine.adjust_setting(SettingKey::ALL[self.selected], -1),
                Key::Right => engine.adjust_setting(SettingKey::ALL[self.selected], 1),
                Key::Escape | Key::Backspace => return Transition::Goto(SceneId::Menu),
                _ => {}
            }
        }
        Transition::Stay
    }

    fn update(&mut self, _engine: &mut SimulationEngine) -> Transition {
        Transition::Stay
    }

    fn draw(&self, engine: &SimulationEngine) -> Frame {
        let settings = engine.settings();
        Frame::Settings(SettingsView {
            rows: SettingKey::ALL
                .iter()
                .map(|k| (k.as_str().to_string(), settings.get(*k)))
                .collect(),
            selected: self.selected,
        })
    }
}
