//! Property tests over arbitrary command sequences.

use proptest::prelude::*;

use vd_engine::{Catalog, DiceEngine, EngineConfig, EngineState, MAX_DICE, Step};

/// One user action, with die and face picked by index so any sequence is valid input.
#[derive(Debug, Clone)]
enum Command {
    Adjust(usize, Step),
    Roll,
    Reroll(usize, usize),
    Reset,
}

const KEYS: [&str; 5] = ["blue", "yellow", "red", "purple", "green"];

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0..KEYS.len(), prop_oneof![Just(Step::Up), Just(Step::Down)])
            .prop_map(|(k, s)| Command::Adjust(k, s)),
        2 => Just(Command::Roll),
        4 => (0..KEYS.len(), 0..6usize).prop_map(|(k, i)| Command::Reroll(k, i)),
        1 => Just(Command::Reset),
    ]
}

fn apply(engine: &mut DiceEngine, cmd: &Command) {
    match *cmd {
        Command::Adjust(k, step) => {
            engine.adjust_count(KEYS[k], step);
        }
        Command::Roll => {
            engine.roll();
        }
        Command::Reroll(k, i) => {
            engine.reroll(KEYS[k], i);
        }
        Command::Reset => engine.reset(),
    }
}

fn engine(seed: u64) -> DiceEngine {
    DiceEngine::new(Catalog::default(), EngineConfig::default().with_seed(seed))
}

proptest! {
    #[test]
    fn counts_stay_in_range(seed in any::<u64>(), cmds in prop::collection::vec(command(), 0..64)) {
        let mut e = engine(seed);
        for cmd in &cmds {
            apply(&mut e, cmd);
            for (_, count) in e.state().counts() {
                prop_assert!(count <= MAX_DICE);
            }
        }
    }

    #[test]
    fn roll_matches_counts(seed in any::<u64>(), cmds in prop::collection::vec(command(), 0..64)) {
        let mut e = engine(seed);
        for cmd in &cmds {
            apply(&mut e, cmd);
        }
        if e.roll() {
            for (key, count) in e.state().counts() {
                prop_assert_eq!(e.state().results(key).len(), count as usize);
                prop_assert!(e.state().reroll_counts(key).iter().all(|r| *r == 0));
            }
            prop_assert!(e.state().is_rolled());
            prop_assert!(!e.state().has_changed_since_roll());
        }
    }

    #[test]
    fn results_and_rerolls_stay_parallel(seed in any::<u64>(), cmds in prop::collection::vec(command(), 0..64)) {
        let mut e = engine(seed);
        for cmd in &cmds {
            apply(&mut e, cmd);
            for die in e.catalog() {
                let s = e.state();
                prop_assert_eq!(s.results(&die.key).len(), s.reroll_counts(&die.key).len());
                prop_assert!(s.results(&die.key).iter().all(|f| (1..=6).contains(&f.value())));
            }
        }
    }

    #[test]
    fn reroll_bumps_exactly_one_slot(
        seed in any::<u64>(),
        counts in prop::array::uniform4(0..=MAX_DICE),
        picks in prop::collection::vec((0..4usize, 0..6usize), 1..32),
    ) {
        let mut e = engine(seed);
        for (k, n) in counts.iter().enumerate() {
            for _ in 0..*n {
                e.increment(KEYS[k]);
            }
        }
        e.roll();

        for (k, i) in picks {
            let before: Vec<Vec<u32>> = KEYS[..4].iter().map(|key| e.state().reroll_counts(key)).collect();
            let applied = e.reroll(KEYS[k], i).is_some();
            for (kk, key) in KEYS[..4].iter().enumerate() {
                let after = e.state().reroll_counts(key);
                for (ii, r) in after.iter().enumerate() {
                    let expected = if applied && kk == k && ii == i {
                        before[kk][ii] + 1
                    } else {
                        before[kk][ii]
                    };
                    prop_assert_eq!(*r, expected);
                }
            }
            prop_assert_eq!(applied, e.state().is_rolled() && i < counts[k] as usize);
        }
    }

    #[test]
    fn reset_returns_to_initial(seed in any::<u64>(), cmds in prop::collection::vec(command(), 0..64)) {
        let mut e = engine(seed);
        for cmd in &cmds {
            apply(&mut e, cmd);
        }
        let initial = EngineState::new(e.catalog());
        e.reset();
        prop_assert_eq!(e.state(), &initial);
        e.reset();
        prop_assert_eq!(e.state(), &initial);
    }
}
