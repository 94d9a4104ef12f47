//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG; audio cues
//! raised during a tick are returned alongside the new state so the driver
//! can forward them to whatever makes noise.

use rand::Rng;

use crate::entities::{Cue, Enemy, GameState, GameStatus, Input, Laser, Player};

// ── Playfield constants (logical units) ──────────────────────────────────────

pub const GAME_WIDTH: f32 = 800.0;
pub const GAME_HEIGHT: f32 = 600.0;

pub const PLAYER_WIDTH: f32 = 55.0;
pub const PLAYER_HEIGHT: f32 = 55.0;
pub const PLAYER_MAX_SPEED: f32 = 500.0;

pub const LASER_WIDTH: f32 = 10.0;
pub const LASER_HEIGHT: f32 = 40.0;
pub const LASER_MAX_SPEED: f32 = 600.0;
/// Seconds between player shots while fire is held.
pub const LASER_COOLDOWN: f32 = 0.15;

pub const ENEMY_WIDTH: f32 = 50.0;
pub const ENEMY_HEIGHT: f32 = 50.0;
pub const ENEMY_ROWS: usize = 3;
pub const ENEMIES_PER_ROW: usize = 8;
pub const ENEMY_HORIZONTAL_PADDING: f32 = 100.0;
pub const ENEMY_VERTICAL_PADDING: f32 = 70.0;
pub const ENEMY_VERTICAL_SPACING: f32 = 80.0;
/// Seconds between shots for a single enemy.  The first shot after creation
/// comes earlier: the initial cooldown is drawn from [0.6, 10).
pub const ENEMY_COOLDOWN: f32 = 10.0;
pub const ENEMY_MIN_INITIAL_COOLDOWN: f32 = 0.6;

/// Amplitude of the shared wave sway, horizontal / vertical.
pub const SWAY_X: f32 = 50.0;
pub const SWAY_Y: f32 = 10.0;

/// Kills between full wave respawns.
pub const WAVE_KILLS: u32 = 18;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.  Built around an entity's centre position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn centered(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            left: x - width / 2.0,
            top: y - height / 2.0,
            right: x + width / 2.0,
            bottom: y + height / 2.0,
        }
    }
}

/// Overlap test; rectangles that merely touch count as intersecting.
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    !(b.left > a.right || b.right < a.left || b.top > a.bottom || b.bottom < a.top)
}

/// Shared sway offset applied to every enemy's rendered position.
/// One sine/cosine pair for the whole wave — the grid moves as a block.
pub fn wave_offset(elapsed: f32) -> (f32, f32) {
    (elapsed.sin() * SWAY_X, elapsed.cos() * SWAY_Y)
}

fn player_rect(player: &Player) -> Rect {
    Rect::centered(player.x, player.y, PLAYER_WIDTH, PLAYER_HEIGHT)
}

fn laser_rect(laser: &Laser) -> Rect {
    Rect::centered(laser.x, laser.y, LASER_WIDTH, LASER_HEIGHT)
}

/// Collision box at the enemy's *rendered* (swayed) position.
fn enemy_rect(enemy: &Enemy, elapsed: f32) -> Rect {
    let (dx, dy) = wave_offset(elapsed);
    Rect::centered(enemy.x + dx, enemy.y + dy, ENEMY_WIDTH, ENEMY_HEIGHT)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Push one full wave onto `enemies` at the canonical grid positions.
/// Survivors from earlier waves are left untouched.
pub fn spawn_wave(enemies: &mut Vec<Enemy>, rng: &mut impl Rng) {
    let spacing =
        (GAME_WIDTH - ENEMY_HORIZONTAL_PADDING * 2.0) / (ENEMIES_PER_ROW - 1) as f32;
    for row in 0..ENEMY_ROWS {
        let y = ENEMY_VERTICAL_PADDING + row as f32 * ENEMY_VERTICAL_SPACING;
        for col in 0..ENEMIES_PER_ROW {
            enemies.push(Enemy {
                x: ENEMY_HORIZONTAL_PADDING + col as f32 * spacing,
                y,
                cooldown: rng.gen_range(ENEMY_MIN_INITIAL_COOLDOWN..ENEMY_COOLDOWN),
                dead: false,
            });
        }
    }
}

/// Build the state for a fresh session: player centred at the bottom,
/// one full enemy wave on the grid.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let mut enemies = Vec::new();
    spawn_wave(&mut enemies, rng);
    GameState {
        player: Player {
            x: GAME_WIDTH / 2.0,
            y: GAME_HEIGHT - 50.0,
        },
        player_cooldown: 0.0,
        input: Input::default(),
        lasers: Vec::new(),
        enemies,
        enemy_lasers: Vec::new(),
        score: 0,
        next_wave_at: WAVE_KILLS,
        elapsed: 0.0,
        status: GameStatus::Playing,
    }
}

// ── Input-driven state transition (pure) ─────────────────────────────────────

/// Replace the held-key flags.  The simulation only ever reads boolean
/// "currently held" state; edge detection lives in the driver.
pub fn set_input(state: &GameState, input: Input) -> GameState {
    GameState {
        input,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by `dt` seconds and return the new state plus the
/// audio cues raised during the frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Once `status` is `GameOver` the state is frozen: the same state comes
/// back, no cues are raised, and the driver is expected to stop ticking.
pub fn tick(state: &GameState, dt: f32, rng: &mut impl Rng) -> (GameState, Vec<Cue>) {
    if state.status == GameStatus::GameOver {
        return (state.clone(), Vec::new());
    }

    let mut cues = Vec::new();
    let elapsed = state.elapsed + dt;

    // ── 1. Wave respawn every 18 kills ───────────────────────────────────────
    // One wave per milestone, even if a multi-kill frame jumps the score past
    // it.  Survivors stay on the grid, so long sessions pile enemies up —
    // that escalation is the intended difficulty curve.
    let mut enemies = state.enemies.clone();
    let mut next_wave_at = state.next_wave_at;
    if state.score >= next_wave_at {
        spawn_wave(&mut enemies, rng);
        next_wave_at += WAVE_KILLS;
    }

    // ── 2. Player: movement, clamp, fire ─────────────────────────────────────
    let mut player = state.player.clone();
    if state.input.left {
        player.x -= dt * PLAYER_MAX_SPEED;
    }
    if state.input.right {
        player.x += dt * PLAYER_MAX_SPEED;
    }
    player.x = player.x.clamp(PLAYER_WIDTH, GAME_WIDTH - PLAYER_WIDTH);

    let mut lasers = state.lasers.clone();
    let mut player_cooldown = state.player_cooldown;
    // Fire check before the decrement: a cooldown that reached exactly 0
    // last frame fires this frame (the boundary is inclusive at 0).
    if state.input.fire && player_cooldown <= 0.0 {
        lasers.push(Laser {
            x: player.x,
            y: player.y,
            dead: false,
        });
        cues.push(Cue::Shoot);
        player_cooldown = LASER_COOLDOWN;
    }
    if player_cooldown > 0.0 {
        player_cooldown -= dt;
    }

    // ── 3. Player lasers: move, cull at the top, collide with enemies ────────
    let mut score = state.score;
    for laser in lasers.iter_mut() {
        laser.y -= dt * LASER_MAX_SPEED;
        if laser.y < 0.0 {
            laser.dead = true;
        }
        if laser.dead {
            continue;
        }
        let bolt = laser_rect(laser);
        // First intersecting enemy wins; one kill per laser per frame.
        for enemy in enemies.iter_mut() {
            if enemy.dead {
                continue;
            }
            if rects_intersect(&bolt, &enemy_rect(enemy, elapsed)) {
                enemy.dead = true;
                laser.dead = true;
                score += 1;
                cues.push(Cue::Explosion);
                break;
            }
        }
    }
    lasers.retain(|l| !l.dead);

    // ── 4. Enemies: shared sway, fire cooldowns ──────────────────────────────
    let (dx, dy) = wave_offset(elapsed);
    let mut enemy_lasers = state.enemy_lasers.clone();
    for enemy in enemies.iter_mut() {
        if enemy.dead {
            continue;
        }
        enemy.cooldown -= dt;
        if enemy.cooldown <= 0.0 {
            // Lasers leave from where the enemy is drawn, not its grid slot.
            enemy_lasers.push(Laser {
                x: enemy.x + dx,
                y: enemy.y + dy,
                dead: false,
            });
            cues.push(Cue::Shoot);
            enemy.cooldown = ENEMY_COOLDOWN;
        }
    }
    enemies.retain(|e| !e.dead);

    // ── 5. Enemy lasers: move, cull at the bottom, collide with the player ───
    let mut status = state.status;
    let ship = player_rect(&player);
    for laser in enemy_lasers.iter_mut() {
        laser.y += dt * LASER_MAX_SPEED;
        if laser.y > GAME_HEIGHT {
            laser.dead = true;
        }
        if laser.dead {
            continue;
        }
        if rects_intersect(&laser_rect(laser), &ship) {
            // One player-destroying hit per frame; remaining lasers keep
            // their positions until the (never-coming) next tick.
            laser.dead = true;
            status = GameStatus::GameOver;
            cues.push(Cue::Explosion);
            break;
        }
    }
    enemy_lasers.retain(|l| !l.dead);

    (
        GameState {
            player,
            player_cooldown,
            input: state.input,
            lasers,
            enemies,
            enemy_lasers,
            score,
            next_wave_at,
            elapsed,
            status,
        },
        cues,
    )
}
