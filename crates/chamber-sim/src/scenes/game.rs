use chamber_core::commands::{InputEvent, InputFrame, Key, PlayerCommand};
use chamber_core::constants::DEBUG_SPAWN_COUNT;
use chamber_core::enums::SceneId;
use chamber_core::state::Frame;

use super::{Scene, Transition};
use crate::engine::SimulationEngine;

/// Translates input into player commands and ticks the engine once per frame.
#[derive(Debug, Default)]
pub struct GameScene;

impl Scene for GameScene {
    fn handle_events(&mut self, input: &InputFrame, engine: &mut SimulationEngine) -> Transition {
        engine.queue_command(PlayerCommand::SetMovement {
            movement: input.held,
        });

        for event in &input.events {
            let command = match *event {
                InputEvent::PointerDown { x, y } => PlayerCommand::Fire {
                    target: engine.camera().screen_to_world(x, y),
                },
                InputEvent::KeyDown(Key::Escape) => {
                    engine.abandon_session();
                    return Transition::Goto(SceneId::Menu);
                }
                InputEvent::KeyDown(Key::Char(c)) => match c.to_ascii_lowercase() {
                    'r' => PlayerCommand::Reload,
                    'p' => PlayerCommand::TogglePause,
                    'f' => PlayerCommand::ActivateShield,
                    '2' => PlayerCommand::SpawnExtraEnemies {
                        count: DEBUG_SPAWN_COUNT,
                    },
                    _ => continue,
                },
                _ => continue,
            };
            engine.queue_command(command);
        }
        Transition::Stay
    }

    fn update(&mut self, engine: &mut SimulationEngine) -> Transition {
        let report = engine.tick();
        if report.player_died {
            Transition::Goto(SceneId::Menu)
        } else {
            Transition::Stay
        }
    }

    fn draw(&self, engine: &SimulationEngine) -> Frame {
        Frame::Game(Box::new(engine.snapshot()))
    }
}
