//! Simulation constants and tuning parameters.

// --- World ---

/// World width in world units.
pub const WORLD_WIDTH: f64 = 2400.0;

/// World height in world units.
pub const WORLD_HEIGHT: f64 = 1600.0;

/// Visible viewport width (world units at zoom 1).
pub const VIEWPORT_WIDTH: f64 = 800.0;

/// Visible viewport height.
pub const VIEWPORT_HEIGHT: f64 = 480.0;

/// Camera follow smoothing factor per tick.
pub const CAMERA_SMOOTHING: f64 = 0.1;

// --- Player ---

pub const PLAYER_MAX_HP: u32 = 5;

/// Side of the player's square collision box against obstacles.
pub const PLAYER_SIZE: f64 = 12.0;

/// Base delay between shots (seconds).
pub const SHOOT_DELAY: f64 = 0.2;

/// Time firing is blocked after a reload (seconds).
pub const RELOAD_TIME: f64 = 1.0;

/// Speed multiplier while `speed_boost` is active.
pub const SPEED_BOOST_FACTOR: f64 = 1.5;

/// Shoot delay divisor while `rapid_fire` is active.
pub const RAPID_FIRE_DIVISOR: f64 = 2.0;

// --- Collision radii ---

/// Enemy radius against bullets.
pub const ENEMY_HIT_RADIUS: f64 = 8.0;

pub const BULLET_RADIUS: f64 = 3.0;

/// Enemy body radius against the player.
pub const ENEMY_BODY_RADIUS: f64 = 10.0;

pub const PLAYER_RADIUS: f64 = 6.0;

/// Pickups are collected inside the same contact distance as enemies.
pub const PICKUP_COLLECT_RADIUS: f64 = ENEMY_BODY_RADIUS + PLAYER_RADIUS;

/// Power-ups are collected strictly inside this distance.
pub const POWER_UP_PICKUP_DISTANCE: f64 = 20.0;

// --- Enemies ---

/// Separation radius for enemy flocking.
pub const ENEMY_AVOID_RADIUS: f64 = 60.0;

/// Ticks an enemy lingers after death before removal.
pub const ENEMY_DEATH_DURATION: u32 = 12;

/// Outward push applied to an enemy touching a shielded player.
pub const SHIELD_PUSH_IMPULSE: f64 = 16.0;

/// Enemies spawn between these distances from the player.
pub const SPAWN_RADIUS_MIN: f64 = 200.0;
pub const SPAWN_RADIUS_MAX: f64 = 480.0;

/// Extra enemies spawned by the debug key.
pub const DEBUG_SPAWN_COUNT: u32 = 20;

// --- Scoring ---

pub const SCORE_PER_KILL: u32 = 5;
pub const SCORE_PER_COIN: u32 = 10;

// --- Loot ---

/// Primary roll below this drops a coin.
pub const LOOT_COIN_CHANCE: f64 = 0.35;

/// Primary roll below this (and above the coin band) drops ammo.
pub const LOOT_AMMO_CHANCE: f64 = 0.70;

/// Secondary roll below this drops a power-up (if any are unlocked).
pub const LOOT_POWER_UP_CHANCE: f64 = 0.10;

// --- Pickups ---

/// Pickup lifetime in ticks.
pub const PICKUP_TTL: u32 = 600;

pub const PICKUP_SIZE: f64 = 6.0;

/// Size lost per tick once picked.
pub const PICKUP_SHRINK_RATE: f64 = 0.35;

pub const MAGNET_RADIUS: f64 = 140.0;

/// Fraction of the remaining distance a pickup closes per tick inside the magnet.
pub const MAGNET_STRENGTH: f64 = 0.12;

/// Minimum ammo restored by an ammo pickup.
pub const AMMO_PICKUP_MIN: u32 = 3;

pub const HEALTH_PICKUP_AMOUNT: u32 = 2;

// --- Power-ups ---

/// Seconds an uncollected power-up stays in the world.
pub const POWER_UP_LIFESPAN: f64 = 10.0;

pub const RAPID_FIRE_DURATION: f64 = 8.0;
pub const SPEED_BOOST_DURATION: f64 = 8.0;
pub const INVINCIBILITY_DURATION: f64 = 5.0;

// --- Waves ---

/// Delay between a cleared wave and the next one (seconds).
pub const WAVE_DELAY: f64 = 2.5;

// --- Cosmetics ---

pub const PARTICLE_GRAVITY: f64 = 0.1;
pub const PARTICLE_MAX_SPEED: f64 = 1.5;
pub const PARTICLE_LIFE_MIN: u32 = 20;
pub const PARTICLE_LIFE_MAX: u32 = 40;

/// Bullets emit one trail particle every N ticks.
pub const BULLET_TRAIL_INTERVAL: u32 = 4;

pub const POPUP_LIFE: u32 = 60;
pub const POPUP_RISE_SPEED: f64 = -0.6;

/// Particles emitted when a bullet kills an enemy.
pub const KILL_BURST_PARTICLES: usize = 20;

/// Particles emitted when an enemy rams the player.
pub const CONTACT_BURST_PARTICLES: usize = 12;

/// Particles emitted when the shield repels an enemy.
pub const SHIELD_SPARK_PARTICLES: usize = 6;

/// Enemy tint palette.
pub const ENEMY_PALETTE: [[u8; 3]; 5] = [
    [255, 127, 80],
    [80, 255, 200],
    [0, 180, 216],
    [150, 200, 255],
    [100, 180, 200],
];

pub const FOAM: [u8; 3] = [220, 240, 255];
pub const ACCENT: [u8; 3] = [0, 180, 216];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const RED: [u8; 3] = [255, 0, 0];
