//! Frame loop: drain input, step the scene machine, render, then sleep to
//! hold the configured frame rate.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::Event;

use chamber_sim::SceneMachine;

use crate::input::InputCollector;
use crate::render::Renderer;

/// Nominal duration of one frame at `fps_limit`.
pub fn frame_duration(fps_limit: f64) -> Duration {
    Duration::from_secs_f64(1.0 / fps_limit.max(1.0))
}

/// Keeps frames on a fixed schedule without a catch-up spiral.
#[derive(Debug)]
pub struct FramePacer {
    next_frame: Instant,
}

impl FramePacer {
    pub fn new() -> Self {
        Self {
            next_frame: Instant::now(),
        }
    }

    /// Sleep until the next frame is due.
    pub fn wait(&mut self, frame: Duration) {
        self.next_frame += frame;
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        } else if now - self.next_frame > frame * 2 {
            // Too far behind, reset instead of running frames back to back.
            self.next_frame = now;
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run until the scene machine stops. Returns the number of frames drawn.
pub fn run<R: Renderer>(
    machine: &mut SceneMachine,
    input: &mut InputCollector,
    events: &mpsc::Receiver<Event>,
    renderer: &mut R,
) -> io::Result<u64> {
    let mut pacer = FramePacer::new();
    let mut frames = 0u64;
    renderer.render(&machine.draw())?;

    while machine.is_running() {
        let frame_input = input.collect(events, renderer.size());
        let frame = machine.step(&frame_input);
        renderer.render(&frame)?;
        frames += 1;

        let fps = machine.engine().settings().fps_limit;
        pacer.wait(frame_duration(fps));
    }

    tracing::info!(frames, score = machine.engine().score(), "Frame loop finished");
    Ok(frames)
}
