#[cfg(test)]
mod tests {
    use crate::commands::{InputEvent, InputFrame, Key, Movement, PlayerCommand};
    use crate::constants::*;
    use crate::enums::*;
    use crate::layout::{MAIN_MENU, UPGRADES_MENU};
    use crate::player::Player;
    use crate::state::{Frame, MenuView};
    use crate::types::{Camera, Position, Rect, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_within_is_inclusive() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(ENEMY_HIT_RADIUS + BULLET_RADIUS, 0.0);
        assert!(a.within(&b, ENEMY_HIT_RADIUS + BULLET_RADIUS));
        assert!(!a.within(&b.offset(0.01, 0.0), ENEMY_HIT_RADIUS + BULLET_RADIUS));
        // Coincident points always collide.
        assert!(a.within(&a, 0.0));
    }

    #[test]
    fn test_distance() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(4.0, 6.0);
        assert_eq!(a.distance_sq_to(&b), 25.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_clamped_to_world() {
        let p = Position::new(-5.0, WORLD_HEIGHT + 10.0).clamped(WORLD_WIDTH, WORLD_HEIGHT);
        assert_eq!(p, Position::new(0.0, WORLD_HEIGHT));
    }

    #[test]
    fn test_rect_overlap_excludes_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let inside = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_rect_centered() {
        let r = Rect::centered(Position::new(100.0, 50.0), 12.0);
        assert_eq!(r, Rect::new(94.0, 44.0, 12.0, 12.0));
    }

    #[test]
    fn test_camera_round_trip() {
        let mut cam = Camera::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        cam.x = 300.0;
        cam.y = 120.0;
        let world = cam.screen_to_world(40.0, 60.0);
        assert_eq!(world, Position::new(340.0, 180.0));
        assert_eq!(cam.world_to_screen(&world), (40.0, 60.0));
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..60 {
            t.advance(1.0 / 60.0);
        }
        assert_eq!(t.tick, 60);
        assert!((t.now() - 1.0).abs() < 1e-9);
    }

    // ---- Player invariants ----

    #[test]
    fn test_player_starts_centered_and_full() {
        let p = Player::new(12);
        assert_eq!(p.position, Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0));
        assert_eq!(p.hp, PLAYER_MAX_HP);
        assert_eq!(p.ammo, 12);
    }

    #[test]
    fn test_player_hp_stays_in_range() {
        let mut p = Player::new(12);
        for _ in 0..(PLAYER_MAX_HP + 3) {
            p.take_hit();
        }
        assert_eq!(p.hp, 0);
        assert!(p.is_dead());
        p.heal(100);
        assert_eq!(p.hp, p.max_hp);
    }

    #[test]
    fn test_player_ammo_stays_in_range() {
        let mut p = Player::new(12);
        p.ammo = 10;
        p.refill_ammo(6);
        assert_eq!(p.ammo, 12);
        p.set_max_ammo(8);
        assert_eq!(p.ammo, 8);
        assert_eq!(p.max_ammo, 8);
    }

    // ---- Menu layout ----

    #[test]
    fn test_list_rows_cover_half_a_spacing_each_side() {
        assert_eq!(MAIN_MENU.row_at(150.0, 4), Some(0));
        assert_eq!(MAIN_MENU.row_at(164.9, 4), Some(0));
        assert_eq!(MAIN_MENU.row_at(165.0, 4), Some(1));
        assert_eq!(MAIN_MENU.row_at(MAIN_MENU.row_y(3), 4), Some(3));
        assert_eq!(MAIN_MENU.row_at(134.9, 4), None);
        assert_eq!(MAIN_MENU.row_at(MAIN_MENU.row_y(4), 4), None);
        assert_eq!(UPGRADES_MENU.row_at(205.0, 7), Some(2));
    }

    // ---- Commands and input ----

    #[test]
    fn test_input_frame_keys_skip_pointer_events() {
        let frame = InputFrame::with_events([
            InputEvent::KeyDown(Key::Up),
            InputEvent::PointerDown { x: 1.0, y: 2.0 },
            InputEvent::KeyDown(Key::Char('r')),
        ]);
        let keys: Vec<Key> = frame.keys().collect();
        assert_eq!(keys, vec![Key::Up, Key::Char('r')]);
        assert_eq!(frame.held, Movement::default());
    }

    #[test]
    fn test_player_command_serde_is_tagged() {
        let cmd = PlayerCommand::Fire {
            target: Position::new(3.0, 4.0),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"Fire\""), "{json}");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }

    #[test]
    fn test_frame_serde_is_tagged_by_scene() {
        let frame = Frame::Menu(MenuView {
            title: "Chamber".into(),
            items: vec!["Start Game".into()],
            selected: 0,
        });
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"scene\":\"Menu\""), "{json}");
    }

    #[test]
    fn test_power_up_kinds_are_ordered_and_named() {
        let mut kinds = PowerUpKind::ALL.to_vec();
        kinds.sort();
        assert_eq!(kinds, PowerUpKind::ALL.to_vec());
        assert_eq!(PowerUpKind::SpeedBoost.as_str(), "speed_boost");
    }
}
