//! All game entity types — pure data, no logic.
//!
//! Positions are in logical playfield units (800×600, origin top-left);
//! the display layer scales them to whatever grid it draws on.

/// Held-key flags derived from the most recent press/release pairing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Audio cues raised during a frame.  Playback is fire-and-forget and owned
/// by the driver; the simulation only reports that a cue happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Player or enemy fired a laser.
    Shoot,
    /// An enemy or the player was destroyed (shared cue).
    Explosion,
    /// End-of-session theme, played once when the game-over screen appears.
    EndTheme,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A laser bolt.  Player lasers travel up, enemy lasers travel down; both
/// share this shape and the collections in `GameState` tell them apart.
#[derive(Clone, Debug)]
pub struct Laser {
    pub x: f32,
    pub y: f32,
    /// Marked during a tick, filtered out before the tick returns.
    pub dead: bool,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
}

/// One enemy ship.  `x`/`y` is the grid (base) position; the whole wave sways
/// around its base positions as a group, so the rendered position is base +
/// the shared offset from `compute::wave_offset`.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Seconds until this enemy fires.  Randomized at creation, fixed 10 s
    /// after every shot.
    pub cooldown: f32,
    pub dead: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire state of one session.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Seconds until the player may fire again.
    pub player_cooldown: f32,
    pub input: Input,
    /// Player lasers, travelling upward.
    pub lasers: Vec<Laser>,
    pub enemies: Vec<Enemy>,
    /// Enemy lasers, travelling downward.
    pub enemy_lasers: Vec<Laser>,
    /// One point per enemy destroyed; never decreases.
    pub score: u32,
    /// Score at which the next full enemy wave spawns (18, 36, 54, …).
    pub next_wave_at: u32,
    /// Session time in seconds; drives the shared enemy sway.
    pub elapsed: f32,
    pub status: GameStatus,
}
