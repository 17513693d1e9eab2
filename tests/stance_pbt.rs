use cadence_lib::model::catalog::Catalog;
use cadence_lib::model::config::{RegenPolicy, SimConfig};
use cadence_lib::model::data::Rotation;
use cadence_lib::model::fitness::FitnessEvaluator;
use cadence_lib::model::resources::ResourceState;
use cadence_lib::model::RotationLogic;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum Transition {
    RaiseFire,
    RaiseIce,
    Swap(u8),
    MaxFire,
    MaxIce,
}

fn arb_transition(cap: u8) -> impl Strategy<Value = Transition> {
    prop_oneof![
        Just(Transition::RaiseFire),
        Just(Transition::RaiseIce),
        (1..=cap).prop_map(Transition::Swap),
        Just(Transition::MaxFire),
        Just(Transition::MaxIce),
    ]
}

prop_compose! {
    fn arb_walk()(cap in 1u8..=3)(
        cap in Just(cap),
        steps in prop::collection::vec(arb_transition(cap), 0..64)
    ) -> (u8, Vec<Transition>) {
        (cap, steps)
    }
}

fn apply(state: &mut ResourceState, transition: Transition) {
    match transition {
        Transition::RaiseFire => state.raise_fire(),
        Transition::RaiseIce => state.raise_ice(),
        Transition::Swap(level) => state.swap(level),
        Transition::MaxFire => state.set_max_fire(),
        Transition::MaxIce => state.set_max_ice(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn stances_stay_exclusive_and_bounded((cap, steps) in arb_walk()) {
        let mut state = ResourceState::with_limits(2156, 100, cap);
        for step in steps {
            apply(&mut state, step);
            prop_assert!(state.fire() == 0 || state.ice() == 0, "{:?}", state);
            prop_assert!(state.fire_level().is_ok());
            prop_assert!(state.ice_level().is_ok());
        }
    }

    #[test]
    fn raise_saturates_at_cap(cap in 1u8..=3, extra in 1usize..5) {
        let mut state = ResourceState::with_limits(2156, 100, cap);
        for _ in 0..(usize::from(cap) + extra) {
            state.raise_fire();
        }
        prop_assert_eq!(state.fire(), cap);
        prop_assert_eq!(state.ice(), 0);
    }

    #[test]
    fn swap_on_neutral_is_noop(cap in 1u8..=3, level in 0u8..=3) {
        let mut state = ResourceState::with_limits(2156, 100, cap);
        let before = state.clone();
        state.swap(level);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn regen_never_exceeds_max(
        mana in 0u32..=2156,
        ice in 0u8..=3,
        legacy in any::<bool>()
    ) {
        let policy = if legacy { RegenPolicy::Legacy } else { RegenPolicy::SuppressWhileBurning };
        let mut state = ResourceState::with_limits(2156, 100, 3).with_mana(mana);
        for _ in 0..ice {
            state.raise_ice();
        }
        let gained = state.regen_tick(policy).unwrap();
        prop_assert!(state.mana() <= 2156);
        prop_assert_eq!(state.mana(), mana + gained);
    }

    #[test]
    fn preset_rotations_score_finite(seed in any::<u64>(), cap in 1u8..=3, extended in any::<bool>()) {
        let catalog = Arc::new(if extended { Catalog::extended() } else { Catalog::standard() });
        let config = SimConfig { max_stance_level: cap, ..Default::default() };
        let evaluator = FitnessEvaluator::new(Arc::clone(&catalog), config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let rotation = Rotation::new_random_with_rng(100, &catalog, &mut rng);

        let evaluation = evaluator.trace(&rotation).unwrap();
        prop_assert!(evaluation.score.is_finite() && evaluation.score >= 0.0);
        for entry in &evaluation.trace {
            let r = entry.resources;
            prop_assert!(r.fire == 0 || r.ice == 0);
            prop_assert!(r.fire <= cap && r.ice <= cap);
            prop_assert!(r.mana <= 2156);
        }
    }
}
