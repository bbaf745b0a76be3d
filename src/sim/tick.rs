//! Fixed timestep simulation tick
//!
//! One call advances the session by one logical tick. Removals never happen
//! while a collection is being scanned: each pass marks what it consumes and
//! a single compaction runs afterwards.

use super::collision::CollisionPair;
use super::events::GameEvent;
use super::powerups::PowerupKind;
use super::spawn::maybe_spawn_enemy;
use super::state::{Bounds, SessionState};
use crate::consts::*;

/// Input snapshot for a single tick (level-triggered)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// What the session should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Lives exhausted this tick
    PlayerDefeated,
}

/// Advance the session by one tick
pub fn tick(state: &mut SessionState, input: &TickInput) -> TickOutcome {
    state.fx.clear_events();
    state.time_ticks += 1;

    state.starfield.advance(state.game_speed());

    update_entities(state, input);
    resolve_collisions(state);

    let stage = state.stage();
    if let Some(enemy) = maybe_spawn_enemy(&mut state.rng, stage, state.bounds.width) {
        state.enemies.push(enemy);
    }

    state.powerups.age();

    if let Some(stage) = state.difficulty.advance(state.score) {
        log::info!(
            "Stage {} reached at score {} (speed x{:.1})",
            stage,
            state.score,
            state.game_speed()
        );
        state.fx.emit(GameEvent::StageAdvanced(stage));
    }

    if state.vitals.is_depleted() {
        TickOutcome::PlayerDefeated
    } else {
        TickOutcome::Running
    }
}

/// Move everything, dropping each entity the moment it reports expired
fn update_entities(state: &mut SessionState, input: &TickInput) {
    let Bounds { width, height } = state.bounds;
    let game_speed = state.game_speed();

    state.player.update(
        input,
        state.time_ticks,
        width,
        height,
        &state.powerups,
        &mut state.bullets,
        &mut state.fx,
    );

    state.bullets.retain_mut(|bullet| {
        bullet.update();
        !bullet.is_expired(width, height)
    });

    let rng = &mut state.rng;
    let bullets = &mut state.bullets;
    state.enemies.retain_mut(|enemy| {
        if let Some(shot) = enemy.update(game_speed, rng) {
            // Shots fired below the kill line would outlive the tick
            if !shot.is_expired(width, height) {
                bullets.push(shot);
            }
        }
        !enemy.is_expired(height)
    });

    state.fx.particles.update();

    state.pickups.retain_mut(|pickup| {
        pickup.update();
        !pickup.is_expired(height)
    });
}

/// Combat resolution in fixed order. Anything consumed by one pass is
/// compacted away before the next pass runs.
fn resolve_collisions(state: &mut SessionState) {
    let shielded = state.powerups.is_active(PowerupKind::Shield);

    // Player bullets vs enemies: each bullet hits at most one enemy
    let mut spent = vec![false; state.bullets.len()];
    let mut destroyed = vec![false; state.enemies.len()];
    for (bi, bullet) in state.bullets.iter().enumerate() {
        if !bullet.is_player() {
            continue;
        }
        let target = state.enemies.iter().enumerate().position(|(ei, enemy)| {
            !destroyed[ei] && CollisionPair::PlayerBulletEnemy.test(bullet.pos, enemy.pos)
        });
        let Some(ei) = target else { continue };

        spent[bi] = true;
        if state.enemies[ei].take_damage(
            bullet.damage,
            &mut state.score,
            &mut state.pickups,
            &mut state.rng,
            &mut state.fx,
        ) {
            destroyed[ei] = true;
        }
    }
    sweep(&mut state.bullets, &spent);
    sweep(&mut state.enemies, &destroyed);

    // Enemy bullets vs player
    let mut spent = vec![false; state.bullets.len()];
    for (bi, bullet) in state.bullets.iter().enumerate() {
        if bullet.is_player()
            || !CollisionPair::EnemyBulletPlayer.test(bullet.pos, state.player.pos)
        {
            continue;
        }
        spent[bi] = true;
        if !shielded {
            state
                .player
                .take_damage(ENEMY_BULLET_DAMAGE, &mut state.vitals, &mut state.fx);
        }
    }
    sweep(&mut state.bullets, &spent);

    // Enemies ramming the player
    let mut rammed = vec![false; state.enemies.len()];
    for (ei, enemy) in state.enemies.iter().enumerate() {
        if !CollisionPair::EnemyPlayer.test(enemy.pos, state.player.pos) {
            continue;
        }
        rammed[ei] = true;
        if !shielded {
            state
                .player
                .take_damage(ENEMY_RAM_DAMAGE, &mut state.vitals, &mut state.fx);
        }
    }
    sweep(&mut state.enemies, &rammed);

    // Pickups
    let mut collected = vec![false; state.pickups.len()];
    for (pi, pickup) in state.pickups.iter().enumerate() {
        if CollisionPair::PickupPlayer.test(pickup.pos, state.player.pos) {
            pickup.collect(&mut state.powerups, &mut state.fx);
            collected[pi] = true;
        }
    }
    sweep(&mut state.pickups, &collected);
}

/// Drop every item whose flag is set, preserving order
fn sweep<T>(items: &mut Vec<T>, remove: &[bool]) {
    let mut flags = remove.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::character::CharacterKey;
    use crate::sim::autopilot::autopilot;
    use crate::sim::entities::{Bullet, BulletOwner, Enemy, EnemyKind, Pickup};
    use crate::sim::stage::stage_for_score;
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    /// Fresh session with the ship parked at a known spot
    fn quiet_state(character: CharacterKey) -> SessionState {
        let mut state = SessionState::new(character, 4242, &Settings::default());
        state.player.pos = Vec2::new(400.0, 500.0);
        state
    }

    fn player_bullet(pos: Vec2, damage: u32) -> Bullet {
        Bullet {
            pos,
            vel: Vec2::new(0.0, -BULLET_SPEED),
            damage,
            color: crate::Color::hex(0x00d4ff),
            owner: BulletOwner::Player,
        }
    }

    fn fire() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    /// Remove enemies spawned by the spawner (they enter above the canvas)
    fn drop_spawned(state: &mut SessionState) {
        state.enemies.retain(|e| e.pos.y > ENEMY_SPAWN_Y + 10.0);
    }

    #[test]
    fn test_sweep_removes_flagged_in_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        sweep(&mut items, &[false, true, false, true, true]);
        assert_eq!(items, vec![1, 3]);
    }

    #[test]
    fn test_basic_enemy_kill_scores_ten() {
        let mut state = quiet_state(CharacterKey::Nova);
        // Bullet will sit at y=300 after its update; enemy at y=282 after
        // descending 2, distance 18 < 25.
        state.bullets.push(player_bullet(Vec2::new(200.0, 308.0), 1));
        state.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(200.0, 280.0)));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 10);
        assert!(state.enemies.iter().all(|e| e.pos.x != 200.0));
        assert!(state.bullets.iter().all(|b| b.pos.x != 200.0 || !b.is_player()));
        assert!(state.fx.events().contains(&GameEvent::Explosion));
    }

    /// Seed whose second gameplay draw (after the lone enemy's fire roll)
    /// does or does not pass the drop roll
    fn drop_seed(drops: bool) -> u64 {
        (0u64..)
            .find(|&seed| {
                let mut rng = Pcg32::seed_from_u64(seed);
                let _fire = rng.random::<f32>();
                (rng.random::<f32>() < POWERUP_DROP_CHANCE) == drops
            })
            .unwrap()
    }

    #[test]
    fn test_kill_drops_pickup_on_successful_roll() {
        for drops in [true, false] {
            let mut state = quiet_state(CharacterKey::Nova);
            state.rng = Pcg32::seed_from_u64(drop_seed(drops));
            state.bullets.push(player_bullet(Vec2::new(200.0, 308.0), 1));
            state.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(200.0, 280.0)));

            tick(&mut state, &TickInput::default());

            assert_eq!(state.score, 10);
            if drops {
                assert_eq!(state.pickups.len(), 1);
                assert_eq!(state.pickups[0].pos, Vec2::new(200.0, 282.0));
            } else {
                assert!(state.pickups.is_empty());
            }
        }
    }

    #[test]
    fn test_bullet_kills_at_most_one_enemy() {
        let mut state = quiet_state(CharacterKey::Nova);
        state.bullets.push(player_bullet(Vec2::new(200.0, 308.0), 1));
        state.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(195.0, 280.0)));
        state.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(205.0, 280.0)));

        tick(&mut state, &TickInput::default());
        drop_spawned(&mut state);

        assert_eq!(state.score, 10);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].pos.x, 205.0);
    }

    #[test]
    fn test_two_bullets_one_enemy_second_survives() {
        let mut state = quiet_state(CharacterKey::Nova);
        state.bullets.push(player_bullet(Vec2::new(200.0, 308.0), 1));
        state.bullets.push(player_bullet(Vec2::new(202.0, 310.0), 1));
        state.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(200.0, 280.0)));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 10);
        // The destroyed enemy cannot absorb the second bullet
        assert_eq!(state.bullets.iter().filter(|b| b.is_player()).count(), 1);
    }

    #[test]
    fn test_heavy_takes_three_hits() {
        let mut state = quiet_state(CharacterKey::Nova);
        state.enemies.push(Enemy::new(EnemyKind::Heavy, Vec2::new(200.0, 100.0)));
        for hit in 1..=3 {
            let target = state.enemies.iter().find(|e| e.kind() == EnemyKind::Heavy).map(|e| e.pos);
            let Some(target) = target else { panic!("heavy gone after {} hits", hit - 1) };
            state.bullets.push(player_bullet(target + Vec2::new(0.0, 9.0), 1));
            tick(&mut state, &TickInput::default());
        }
        assert!(state.enemies.iter().all(|e| e.kind() != EnemyKind::Heavy));
        assert_eq!(state.score, 25);
    }

    #[test]
    fn test_enemy_bullet_hits_player() {
        let mut state = quiet_state(CharacterKey::Nova);
        state.bullets.push(Bullet::enemy_shot(Vec2::new(400.0, 490.0)));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.vitals.health, 80);
        assert!(state.player.invulnerable);
        assert!(state.bullets.iter().all(|b| b.is_player()));
        assert!(state.fx.events().contains(&GameEvent::PlayerHit));
    }

    #[test]
    fn test_five_bullet_hits_cost_one_life() {
        let mut state = quiet_state(CharacterKey::Nova);
        for _ in 0..5 {
            state.bullets.push(Bullet::enemy_shot(state.player.pos - Vec2::new(0.0, 4.0)));
            tick(&mut state, &TickInput::default());
            // Let the grace window run out
            for _ in 0..=INVULNERABLE_TICKS {
                drop_spawned(&mut state);
                state.bullets.retain(|b| b.is_player());
                tick(&mut state, &TickInput::default());
            }
        }
        assert_eq!(state.vitals.lives, 2);
        assert_eq!(state.vitals.health, 100);
    }

    #[test]
    fn test_ram_consumes_enemy() {
        let mut state = quiet_state(CharacterKey::Nova);
        // Offset so a same-tick shot from the enemy would miss
        state.enemies.push(Enemy::new(EnemyKind::Fast, Vec2::new(430.0, 470.0)));

        tick(&mut state, &TickInput::default());
        drop_spawned(&mut state);

        assert_eq!(state.vitals.health, 70);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_shield_absorbs_hits() {
        let mut state = quiet_state(CharacterKey::Nova);
        state.powerups.activate(PowerupKind::Shield);
        state.bullets.push(Bullet::enemy_shot(Vec2::new(400.0, 490.0)));
        state.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(410.0, 480.0)));

        tick(&mut state, &TickInput::default());
        drop_spawned(&mut state);

        assert_eq!(state.vitals.health, MAX_HEALTH);
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_pickup_collected_and_aged_same_tick() {
        let mut state = quiet_state(CharacterKey::Nova);
        state
            .pickups
            .push(Pickup::with_kind(Vec2::new(400.0, 480.0), PowerupKind::TripleShot));

        tick(&mut state, &TickInput::default());

        assert!(state.pickups.is_empty());
        assert_eq!(
            state.powerups.remaining(PowerupKind::TripleShot),
            Some(POWERUP_DURATION_TICKS - 1)
        );

        // Next volley is a spread
        tick(&mut state, &fire());
        assert_eq!(state.bullets.iter().filter(|b| b.is_player()).count(), 3);
    }

    #[test]
    fn test_preset_score_reaches_last_stage() {
        let mut state = quiet_state(CharacterKey::Nova);
        state.score = 1000;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.stage(), 3);
        assert!((state.game_speed() - 1.6).abs() < 1e-6);
        assert!(state.fx.events().contains(&GameEvent::StageAdvanced(3)));
    }

    #[test]
    fn test_viper_holding_fire_for_one_second() {
        let mut state = quiet_state(CharacterKey::Viper);
        let mut shots = 0;
        for _ in 0..TICK_RATE {
            tick(&mut state, &fire());
            shots += state.fx.events().iter().filter(|e| **e == GameEvent::Shoot).count();
        }
        assert_eq!(shots, 12);
    }

    #[test]
    fn test_invariants_hold_over_long_run() {
        let mut state = SessionState::new(CharacterKey::Blaze, 7, &Settings::default());
        let Bounds { width, height } = state.bounds;
        let mut last_stage = state.stage();
        let mut last_score = state.score;
        for t in 0..5000u64 {
            let input = TickInput {
                left: t % 240 < 120,
                right: t % 240 >= 120,
                fire: true,
                ..Default::default()
            };
            let outcome = tick(&mut state, &input);

            assert!((0..=MAX_HEALTH).contains(&state.vitals.health));
            assert!(state.vitals.lives <= START_LIVES);
            assert!(state.stage() >= last_stage && state.stage() <= MAX_STAGE);
            assert_eq!(state.stage(), stage_for_score(state.score));
            assert!(state.score >= last_score);
            assert!(state.bullets.iter().all(|b| !b.is_expired(width, height)));
            assert!(state.enemies.iter().all(|e| !e.is_expired(height)));
            assert!(state.pickups.iter().all(|p| !p.is_expired(height)));
            assert!(state.fx.particles.iter().all(|p| !p.is_expired()));
            assert!(state.powerups.kinds().all(|k| state.powerups.remaining(k) > Some(0)));

            last_stage = state.stage();
            last_score = state.score;
            if outcome == TickOutcome::PlayerDefeated {
                break;
            }
        }
    }

    #[test]
    fn test_autopilot_runs_keep_invariants_across_seeds() {
        for seed in 0..12u64 {
            let character = CharacterKey::ALL[seed as usize % 3];
            let mut state = SessionState::new(character, seed, &Settings::default());
            let Bounds { width, height } = state.bounds;
            for _ in 0..3000 {
                let input = autopilot(&state);
                let outcome = tick(&mut state, &input);

                assert!(state.bullets.iter().all(|b| !b.is_expired(width, height)));
                assert_eq!(state.stage(), stage_for_score(state.score));
                if outcome == TickOutcome::PlayerDefeated {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = SessionState::new(CharacterKey::Nova, 99999, &Settings::default());
        let mut state2 = SessionState::new(CharacterKey::Nova, 99999, &Settings::default());

        for t in 0..2000u64 {
            let input = TickInput {
                left: t % 90 < 45,
                right: t % 90 >= 45,
                fire: t % 3 == 0,
                ..Default::default()
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.vitals, state2.vitals);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.bullets.len(), state2.bullets.len());
        assert!((state1.player.pos - state2.player.pos).length() < 0.0001);
    }

    #[test]
    fn test_particle_settings_do_not_change_gameplay() {
        let quiet = Settings {
            particles: false,
            starfield: false,
            ..Settings::default()
        };
        let mut state1 = SessionState::new(CharacterKey::Viper, 31337, &Settings::default());
        let mut state2 = SessionState::new(CharacterKey::Viper, 31337, &quiet);
        for _ in 0..3000 {
            tick(&mut state1, &fire());
            tick(&mut state2, &fire());
        }
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert!(state2.fx.particles.is_empty());
    }
}
