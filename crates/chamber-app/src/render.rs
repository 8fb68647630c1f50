//! Terminal rendering. Everything here reads a `Frame` and writes terminal
//! commands; no game state is touched.
//!
//! Layout: row 0 is the HUD, the remaining rows show the camera's viewport
//! scaled to the terminal.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use chamber_core::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use chamber_core::enums::{PickupKind, PowerUpKind, UpgradeCategory, UpgradeCost};
use chamber_core::layout::{ListLayout, MAIN_MENU, UPGRADES_MENU};
use chamber_core::state::{Frame, GameStateSnapshot, MenuView, SettingsView, UpgradesView};
use chamber_core::types::Position;

/// Rows reserved above the playfield.
pub const HUD_ROWS: u16 = 1;

const C_TITLE: Color = Color::Cyan;
const C_TEXT: Color = Color::White;
const C_SELECTED: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_OBSTACLE: Color = Color::DarkGrey;
const C_BULLET: Color = Color::White;
const C_DEAD: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Rgb { r: 0, g: 180, b: 216 };
const C_SHIELD: Color = Color::Cyan;

pub trait Renderer {
    /// Terminal size in cells (columns, rows).
    fn size(&self) -> (u16, u16);

    fn render(&mut self, frame: &Frame) -> io::Result<()>;
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Viewport coordinates to a terminal cell, if it lands in the playfield.
pub fn screen_to_cell(sx: f64, sy: f64, viewport: (f64, f64), term: (u16, u16)) -> Option<(u16, u16)> {
    let (cols, rows) = playfield(term)?;
    if sx < 0.0 || sy < 0.0 || sx >= viewport.0 || sy >= viewport.1 {
        return None;
    }
    let col = (sx / viewport.0 * f64::from(cols)).floor() as u16;
    let row = (sy / viewport.1 * f64::from(rows)).floor() as u16;
    Some((col.min(cols - 1), row.min(rows - 1) + HUD_ROWS))
}

/// Center of a terminal cell in viewport coordinates. HUD cells map to nothing.
pub fn cell_to_screen(col: u16, row: u16, viewport: (f64, f64), term: (u16, u16)) -> Option<(f64, f64)> {
    let (cols, rows) = playfield(term)?;
    if row < HUD_ROWS || col >= cols || row - HUD_ROWS >= rows {
        return None;
    }
    let x = (f64::from(col) + 0.5) * viewport.0 / f64::from(cols);
    let y = (f64::from(row - HUD_ROWS) + 0.5) * viewport.1 / f64::from(rows);
    Some((x, y))
}

fn playfield(term: (u16, u16)) -> Option<(u16, u16)> {
    let rows = term.1.checked_sub(HUD_ROWS)?;
    (term.0 > 0 && rows > 0).then_some((term.0, rows))
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb {
        r: c[0],
        g: c[1],
        b: c[2],
    }
}

// ── Playfield composition ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: C_TEXT,
};

/// Character buffer for the playfield rows.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl Grid {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; usize::from(cols) * usize::from(rows)],
        }
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        (col < self.cols && row < self.rows)
            .then(|| self.cells[usize::from(row) * usize::from(self.cols) + usize::from(col)])
    }

    fn put(&mut self, col: u16, row: u16, cell: Cell) {
        if col < self.cols && row < self.rows {
            self.cells[usize::from(row) * usize::from(self.cols) + usize::from(col)] = cell;
        }
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        let start = usize::from(row) * usize::from(self.cols);
        &self.cells[start..start + usize::from(self.cols)]
    }

    /// Position of the first cell holding `ch`, scanning rows top to bottom.
    pub fn find(&self, ch: char) -> Option<(u16, u16)> {
        let index = self.cells.iter().position(|c| c.ch == ch)?;
        let cols = usize::from(self.cols);
        Some(((index % cols) as u16, (index / cols) as u16))
    }
}

/// Rasterize the snapshot into playfield cells. Row 0 of the grid is the
/// first terminal row below the HUD.
pub fn compose_game(snapshot: &GameStateSnapshot, term: (u16, u16)) -> Grid {
    let Some((cols, rows)) = playfield(term) else {
        return Grid::new(0, 0);
    };
    let mut grid = Grid::new(cols, rows);
    let camera = snapshot.camera;
    let viewport = (camera.viewport_width, camera.viewport_height);

    let plot = |grid: &mut Grid, p: &Position, ch: char, color: Color| {
        let (sx, sy) = camera.world_to_screen(p);
        if let Some((col, row)) = screen_to_cell(sx, sy, viewport, term) {
            grid.put(col, row - HUD_ROWS, Cell { ch, color });
        }
    };

    for row in 0..rows {
        for col in 0..cols {
            let Some((sx, sy)) = cell_to_screen(col, row + HUD_ROWS, viewport, term) else {
                continue;
            };
            let world = camera.screen_to_world(sx, sy);
            if snapshot.obstacles.iter().any(|o| o.contains(&world)) {
                grid.put(
                    col,
                    row,
                    Cell {
                        ch: '#',
                        color: C_OBSTACLE,
                    },
                );
            }
        }
    }

    for particle in &snapshot.particles {
        plot(&mut grid, &particle.position, '·', rgb(particle.color));
    }
    for pickup in &snapshot.pickups {
        let (ch, color) = match pickup.kind {
            PickupKind::Coin => ('$', Color::Yellow),
            PickupKind::Ammo => ('=', Color::Blue),
            PickupKind::Health => ('+', Color::Green),
        };
        plot(&mut grid, &pickup.position, ch, color);
    }
    for power_up in &snapshot.power_ups {
        let ch = match power_up.kind {
            PowerUpKind::RapidFire => 'R',
            PowerUpKind::SpeedBoost => 'S',
            PowerUpKind::Invincibility => 'I',
        };
        plot(&mut grid, &power_up.position, ch, Color::Magenta);
    }
    for bullet in &snapshot.bullets {
        plot(&mut grid, bullet, '•', C_BULLET);
    }
    for enemy in &snapshot.enemies {
        if enemy.alive {
            plot(&mut grid, &enemy.position, 'e', rgb(enemy.color));
        } else {
            plot(&mut grid, &enemy.position, 'x', C_DEAD);
        }
    }

    let (ch, color) = if snapshot.player.shield > 0.0 {
        ('O', C_SHIELD)
    } else {
        ('@', C_PLAYER)
    };
    plot(&mut grid, &snapshot.player.position, ch, color);

    for popup in &snapshot.popups {
        let (sx, sy) = camera.world_to_screen(&popup.position);
        if let Some((col, row)) = screen_to_cell(sx, sy, viewport, term) {
            let color = rgb(popup.color);
            for (i, ch) in popup.text.chars().enumerate() {
                grid.put(col.saturating_add(i as u16), row - HUD_ROWS, Cell { ch, color });
            }
        }
    }

    grid
}

/// One-line status bar.
pub fn hud_line(snapshot: &GameStateSnapshot) -> String {
    let hud = &snapshot.hud;
    let player = &snapshot.player;
    let mut line = format!(
        "{}  Score {}  Wave {}/{}  HP {}/{}  Ammo {}/{}",
        snapshot.map_name,
        hud.score,
        hud.wave,
        hud.waves_total,
        player.hp,
        player.max_hp,
        player.ammo,
        player.max_ammo,
    );
    if let Some(progress) = hud.reload_progress {
        line.push_str(&format!(" (reloading {:.0}%)", progress * 100.0));
    }
    if player.shield > 0.0 {
        line.push_str("  Shield UP");
    } else if hud.shield_cooldown_secs > 0.0 {
        line.push_str(&format!("  Shield {:.1}s", hud.shield_cooldown_secs));
    } else {
        line.push_str("  Shield ready");
    }
    for (kind, secs) in &hud.active_power_ups {
        line.push_str(&format!("  {} {:.1}s", kind.as_str(), secs));
    }
    if hud.paused {
        line.push_str("  [PAUSED]");
    }
    line
}

// ── Terminal renderer ─────────────────────────────────────────────────────────

pub struct TerminalRenderer<W: Write> {
    out: W,
    size: (u16, u16),
    follow_terminal: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer sized to the current terminal, resized every frame.
    pub fn new(out: W) -> io::Result<Self> {
        Ok(Self {
            out,
            size: terminal::size()?,
            follow_terminal: true,
        })
    }

    /// Renderer with a fixed size.
    pub fn with_size(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            size: (cols, rows),
            follow_terminal: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn centered(&mut self, row: u16, text: &str, color: Color) -> io::Result<()> {
        let col = (self.size.0 / 2).saturating_sub(text.chars().count() as u16 / 2);
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn list_top(&self, len: usize) -> u16 {
        (self.size.1 / 2).saturating_sub(len as u16 / 2 + 2)
    }

    /// Terminal rows for a list's title and `len` entries. Rows follow the
    /// viewport layout so pointer clicks land on the entry drawn there. On
    /// very short terminals entries are pushed down to stay one row apart.
    fn list_rows(&self, layout: &ListLayout, len: usize) -> (u16, Vec<u16>) {
        let viewport = (VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let row_of = |y: f64| {
            screen_to_cell(viewport.0 / 2.0, y, viewport, self.size)
                .map_or(HUD_ROWS, |(_, row)| row)
        };
        let title = row_of(layout.title_y);
        let mut rows = Vec::with_capacity(len);
        let mut prev = title;
        for i in 0..len {
            let row = row_of(layout.row_y(i)).max(prev + 1);
            rows.push(row);
            prev = row;
        }
        (title, rows)
    }

    fn draw_menu(&mut self, view: &MenuView) -> io::Result<()> {
        let (title, rows) = self.list_rows(&MAIN_MENU, view.items.len());
        self.centered(title, &view.title, C_TITLE)?;
        for (i, (item, row)) in view.items.iter().zip(&rows).enumerate() {
            let (text, color) = if i == view.selected {
                (format!("> {item} <"), C_SELECTED)
            } else {
                (item.clone(), C_TEXT)
            };
            self.centered(*row, &text, color)?;
        }
        let hint_row = rows.last().copied().unwrap_or(title) + 2;
        self.centered(hint_row, "Up/Down select   Enter or click confirm", C_HINT)
    }

    fn draw_settings(&mut self, view: &SettingsView) -> io::Result<()> {
        let top = self.list_top(view.rows.len());
        self.centered(top, "Settings", C_TITLE)?;
        for (i, (name, value)) in view.rows.iter().enumerate() {
            let color = if i == view.selected { C_SELECTED } else { C_TEXT };
            self.centered(top + 2 + i as u16, &format!("{name:<14} {value:>6.2}"), color)?;
        }
        let hint_row = top + 3 + view.rows.len() as u16;
        self.centered(hint_row, "Left/Right adjust   Esc back", C_HINT)
    }

    fn draw_upgrades(&mut self, view: &UpgradesView) -> io::Result<()> {
        let (title, lines) = self.list_rows(&UPGRADES_MENU, view.rows.len());
        self.centered(title, &format!("Upgrades   coins: {}", view.coins), C_TITLE)?;
        for (i, (row, line)) in view.rows.iter().zip(&lines).enumerate() {
            let cost = match row.cost {
                UpgradeCost::Price(n) => n.to_string(),
                UpgradeCost::Unlocked => "unlocked".to_string(),
            };
            let level = match row.category {
                UpgradeCategory::Stat => format!("Lv {}", row.level),
                UpgradeCategory::PowerUp => String::new(),
            };
            let color = if i == view.selected { C_SELECTED } else { C_TEXT };
            self.centered(
                *line,
                &format!("{:<16} {:>5} {:>9}", row.name, level, cost),
                color,
            )?;
        }
        let mut row = lines.last().copied().unwrap_or(title) + 2;
        if let Some(message) = &view.message {
            self.centered(row, message, C_SELECTED)?;
            row += 1;
        }
        self.centered(row, "Enter or click buy   Esc back", C_HINT)
    }

    fn draw_game(&mut self, snapshot: &GameStateSnapshot) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(style::SetForegroundColor(C_TEXT))?;
        let hud: String = hud_line(snapshot).chars().take(usize::from(self.size.0)).collect();
        self.out.queue(Print(hud))?;

        let grid = compose_game(snapshot, self.size);
        for row in 0..grid.rows {
            self.out.queue(cursor::MoveTo(0, row + HUD_ROWS))?;
            let mut current = None;
            for cell in grid.row(row) {
                if current != Some(cell.color) {
                    self.out.queue(style::SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }

        if snapshot.hud.paused {
            let middle = self.size.1 / 2;
            self.centered(middle, " PAUSED - press P ", C_SELECTED)?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        if self.follow_terminal {
            self.size = terminal::size()?;
        }
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        match frame {
            Frame::Menu(view) => self.draw_menu(view)?,
            Frame::Settings(view) => self.draw_settings(view)?,
            Frame::Upgrades(view) => self.draw_upgrades(view)?,
            Frame::Game(snapshot) => self.draw_game(snapshot)?,
        }
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.size.1.saturating_sub(1)))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamber_core::state::{EnemyView, PlayerView};
    use chamber_core::types::{Camera, Rect};

    const VIEWPORT: (f64, f64) = (800.0, 480.0);
    const TERM: (u16, u16) = (80, 25);

    fn snapshot() -> GameStateSnapshot {
        let mut camera = Camera::new(VIEWPORT.0, VIEWPORT.1);
        camera.x = 800.0;
        camera.y = 560.0;
        GameStateSnapshot {
            camera,
            player: PlayerView {
                position: Position::new(1200.0, 800.0),
                hp: 5,
                max_hp: 5,
                ammo: 12,
                max_ammo: 12,
                shield: 0.0,
            },
            ..Default::default()
        }
    }

    #[test]
    fn cell_mapping_round_trips_through_cell_centers() {
        let (sx, sy) = cell_to_screen(10, 5, VIEWPORT, TERM).unwrap();
        assert_eq!(screen_to_cell(sx, sy, VIEWPORT, TERM), Some((10, 5)));
    }

    #[test]
    fn hud_row_and_outside_points_have_no_cell() {
        assert_eq!(cell_to_screen(3, 0, VIEWPORT, TERM), None);
        assert_eq!(screen_to_cell(-1.0, 10.0, VIEWPORT, TERM), None);
        assert_eq!(screen_to_cell(10.0, 480.0, VIEWPORT, TERM), None);
        assert_eq!(cell_to_screen(0, 1, VIEWPORT, (80, 1)), None);
    }

    #[test]
    fn player_is_drawn_at_the_viewport_center() {
        let grid = compose_game(&snapshot(), TERM);
        let (col, row) = grid.find('@').unwrap();
        assert_eq!(col, 40);
        assert_eq!(row, 12);
    }

    #[test]
    fn shield_changes_the_player_glyph() {
        let mut snap = snapshot();
        snap.player.shield = 0.5;
        let grid = compose_game(&snap, TERM);
        assert!(grid.find('@').is_none());
        assert!(grid.find('O').is_some());
    }

    #[test]
    fn obstacles_and_enemies_are_rasterized() {
        let mut snap = snapshot();
        snap.obstacles.push(Rect::new(800.0, 560.0, 100.0, 60.0));
        snap.enemies.push(EnemyView {
            position: Position::new(1400.0, 800.0),
            alive: true,
            death_progress: 0.0,
            color: [255, 127, 80],
        });
        let grid = compose_game(&snap, TERM);
        assert_eq!(grid.get(0, 0).unwrap().ch, '#');
        let (col, _) = grid.find('e').unwrap();
        assert_eq!(col, 60);
    }

    #[test]
    fn hud_line_reports_state() {
        let mut snap = snapshot();
        snap.map_name = "reef".into();
        snap.hud.wave = 2;
        snap.hud.waves_total = 3;
        snap.hud.paused = true;
        snap.hud.reload_progress = Some(0.5);
        let line = hud_line(&snap);
        assert!(line.starts_with("reef  Score 0  Wave 2/3"));
        assert!(line.contains("reloading 50%"));
        assert!(line.contains("Shield ready"));
        assert!(line.ends_with("[PAUSED]"));
    }

    #[test]
    fn clicking_a_drawn_list_row_hits_that_row() {
        let renderer = TerminalRenderer::with_size(Vec::new(), TERM.0, TERM.1);
        for (layout, len) in [(MAIN_MENU, 4), (UPGRADES_MENU, 8)] {
            let (title, rows) = renderer.list_rows(&layout, len);
            assert!(title < rows[0]);
            for (i, row) in rows.iter().enumerate() {
                let (_, y) = cell_to_screen(TERM.0 / 2, *row, VIEWPORT, TERM).unwrap();
                assert_eq!(layout.row_at(y, len), Some(i));
            }
        }
    }

    #[test]
    fn short_terminals_keep_list_rows_apart() {
        let renderer = TerminalRenderer::with_size(Vec::new(), 80, 8);
        let (title, rows) = renderer.list_rows(&UPGRADES_MENU, 8);
        let mut prev = title;
        for row in rows {
            assert!(row > prev);
            prev = row;
        }
    }

    #[test]
    fn renders_every_frame_kind() {
        let mut renderer = TerminalRenderer::with_size(Vec::new(), 80, 25);
        renderer
            .render(&Frame::Menu(MenuView {
                title: "One In The Chamber".into(),
                items: vec!["Start Game".into(), "Quit".into()],
                selected: 0,
            }))
            .unwrap();
        renderer.render(&Frame::Settings(SettingsView::default())).unwrap();
        renderer.render(&Frame::Upgrades(UpgradesView::default())).unwrap();
        renderer.render(&Frame::Game(Box::new(snapshot()))).unwrap();

        let bytes = renderer.into_inner();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("> Start Game <"));
        assert!(text.contains("Ammo 12/12"));
    }
}
