//! Invariants that must hold for any input sequence

use man_with_a_gun::consts::*;
use man_with_a_gun::input::{Command, apply};
use man_with_a_gun::sim::{GameState, fire, tick};
use proptest::prelude::*;

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::Fire),
        Just(Command::NoOp),
    ]
}

/// Per-frame batches of commands
fn script() -> impl Strategy<Value = Vec<Vec<Command>>> {
    prop::collection::vec(prop::collection::vec(command(), 0..4), 1..300)
}

proptest! {
    #[test]
    fn player_stays_on_screen(commands in prop::collection::vec(command(), 0..500)) {
        let mut state = GameState::new(1);
        for command in commands {
            apply(&mut state, command);
            prop_assert!(state.player.pos.x >= 0);
            prop_assert!(state.player.pos.x <= SCREEN_WIDTH - PLAYER_WIDTH);
        }
    }

    #[test]
    fn frame_invariants(seed in any::<u64>(), frames in script()) {
        let mut state = GameState::new(seed);

        for batch in frames {
            for command in batch {
                apply(&mut state, command);
            }

            let before = state.clone();
            let hits = tick(&mut state);

            // Hit targets never move again
            for (old, new) in before.targets.iter().zip(&state.targets) {
                if old.hit {
                    prop_assert!(new.hit);
                    prop_assert_eq!(old.pos, new.pos);
                }
            }

            // Each hit pairs a distinct bullet with a distinct, newly hit target
            let newly_hit = before
                .targets
                .iter()
                .zip(&state.targets)
                .filter(|(old, new)| !old.hit && new.hit)
                .count();
            prop_assert_eq!(newly_hit, hits.len());
            for (i, a) in hits.iter().enumerate() {
                prop_assert!(!before.targets[a.target].hit);
                prop_assert!(!state.bullets.get(a.bullet).unwrap().active);
                for b in &hits[i + 1..] {
                    prop_assert_ne!(a.bullet, b.bullet);
                    prop_assert_ne!(a.target, b.target);
                }
            }

            // Bullets only climb, and only retire off the top or on a hit
            for (index, old) in before.bullets.active() {
                let new = state.bullets.get(index).unwrap();
                let expected_y = old.pos.y - old.speed;
                let was_hit = hits.iter().any(|h| h.bullet == index);
                if new.active {
                    prop_assert_eq!(new.pos.y, expected_y);
                    prop_assert!(new.pos.y <= old.pos.y);
                    prop_assert!(!was_hit);
                } else {
                    prop_assert!(expected_y < 0 || was_hit);
                }
                if expected_y < 0 {
                    prop_assert!(!new.active);
                }
            }

            // Moving targets stay within one step of the upper half
            for target in state.targets.iter().filter(|t| !t.hit) {
                prop_assert!(target.pos.y >= -MAX_TARGET_SPEED);
                prop_assert!(target.pos.y <= SCREEN_HEIGHT / 2 + MAX_TARGET_SPEED);
            }
        }
    }

    #[test]
    fn fire_on_full_pool_is_noop(seed in any::<u64>(), extra in 1usize..20) {
        let mut state = GameState::new(seed);
        for _ in 0..MAX_BULLETS {
            prop_assert!(fire(&mut state).is_some());
        }
        let full = state.clone();
        for _ in 0..extra {
            prop_assert_eq!(fire(&mut state), None);
        }
        prop_assert_eq!(&state, &full);
        prop_assert_eq!(state.bullets.active_count(), MAX_BULLETS);
    }
}
