//! Decision engine integration tests
//!
//! Drive the planner round by round through the public API, the same way a
//! match host would.

use kumite::combat::{ActionCatalog, ActionType, Area, MoveSet, RoundContext};
use kumite::core::config::{load_named_config, EngineConfig};
use kumite::planner::{
    knapsack, DecisionEngine, Fighter, HistoryPolicy, PromotionPolicy, Promotions,
};

fn cumulative() -> DecisionEngine {
    DecisionEngine::new(&EngineConfig::default()).unwrap()
}

fn windowed() -> DecisionEngine {
    DecisionEngine::new(&EngineConfig::windowed()).unwrap()
}

/// Opening round: nothing is promoted, moves are chosen on base value alone
#[test]
fn test_opening_round_uses_base_values() {
    let mut engine = cumulative();
    let decision = engine.next_move(&RoundContext::opening(150, 150));

    assert_eq!(engine.promotions(), Promotions::none());
    assert!(engine.score_catalog().iter().all(|s| !s.promoted));
    assert!(!decision.is_empty());
    assert!(decision.energy(engine.catalog()) <= 12);
}

/// Three areas defended last round: the open one is promoted and thrown
#[test]
fn test_open_area_is_promoted_and_attacked() {
    let mut engine = cumulative();
    engine.next_move(&RoundContext::opening(150, 150));

    let opponent = MoveSet::from_parts(
        vec![],
        vec![Area::HookKick, Area::LowKick, Area::UppercutPunch],
    );
    let decision = engine.next_move(&RoundContext::after(opponent));

    assert_eq!(engine.round(), 2);
    assert_eq!(engine.promotions().attack, Some(Area::HookPunch));
    assert_eq!(engine.promotions().defense, None);

    // Hook punch: (2 - 0) * 2.0 * 3 * round 2 = 24 per copy
    let hook_punch = engine
        .score_catalog()
        .into_iter()
        .find(|s| s.action.is_attack() && s.action.area == Area::HookPunch)
        .unwrap();
    assert!(hook_punch.promoted);
    assert!((hook_punch.value - 24.0).abs() < 1e-9);

    assert_eq!(
        decision.attacks(),
        &[Area::HookPunch, Area::HookPunch, Area::UppercutPunch]
    );
    assert_eq!(decision.defenses(), &[Area::HookKick]);
}

/// No energy means no moves, whatever the history says
#[test]
fn test_zero_energy_empty_decision() {
    let mut engine = cumulative();
    let opponent = MoveSet::from_parts(vec![Area::HookKick], vec![Area::HookPunch]);

    let decision = engine.next_move_with_budget(&RoundContext::after(opponent), 0);
    assert!(decision.attacks().is_empty());
    assert!(decision.defenses().is_empty());
}

/// The top-valued attack fits twice and is taken twice
#[test]
fn test_top_attack_taken_at_full_quantity() {
    let mut engine = windowed();
    let decision = engine.next_move(&RoundContext::opening(150, 150));

    // Windowed opening values: hook kick 121, uppercut 38.5 per copy
    assert_eq!(decision.attack_count(Area::HookKick), 2);
    assert_eq!(
        decision.attacks(),
        &[
            Area::HookKick,
            Area::HookKick,
            Area::UppercutPunch,
            Area::UppercutPunch
        ]
    );
    assert!(decision.defenses().is_empty());
}

/// Repeated attacks on one area make the matching defense worth more
#[test]
fn test_repeated_attacks_raise_defense() {
    let mut engine = cumulative();
    engine.next_move(&RoundContext::opening(150, 150));

    let jab_heavy = MoveSet::from_parts(vec![Area::HookPunch, Area::HookPunch], vec![]);
    for _ in 0..4 {
        engine.next_move(&RoundContext::after(jab_heavy.clone()));
    }

    assert_eq!(engine.history().times_needed(Area::HookPunch), 8);
    assert_eq!(engine.promotions().defense, Some(Area::HookPunch));
    let decision = engine.next_move(&RoundContext::after(jab_heavy));
    assert!(decision.defends(Area::HookPunch));
}

/// Old rounds fall out of the window, cumulative history keeps them
#[test]
fn test_window_forgets_cumulative_remembers() {
    let config = EngineConfig {
        history: HistoryPolicy::Windowed { window: 3 },
        ..EngineConfig::windowed()
    };
    let mut short_memory = DecisionEngine::new(&config).unwrap();
    let mut long_memory = cumulative();

    let guard_hook_kick = MoveSet::from_parts(vec![], vec![Area::HookKick]);
    let guard_low_kick = MoveSet::from_parts(vec![], vec![Area::LowKick]);

    for engine in [&mut short_memory, &mut long_memory] {
        engine.next_move(&RoundContext::opening(150, 150));
        engine.next_move(&RoundContext::after(guard_hook_kick.clone()));
        for _ in 0..3 {
            engine.next_move(&RoundContext::after(guard_low_kick.clone()));
        }
    }

    assert_eq!(short_memory.history().times_countered(Area::HookKick), 0);
    assert_eq!(short_memory.history().times_countered(Area::LowKick), 3);
    assert_eq!(long_memory.history().times_countered(Area::HookKick), 1);
    assert_eq!(long_memory.history().times_countered(Area::LowKick), 3);
}

/// A new engine is a new match: nothing carries over
#[test]
fn test_new_engine_starts_fresh() {
    let mut first = cumulative();
    let opponent = MoveSet::from_parts(vec![Area::HookKick], vec![Area::HookKick]);
    for _ in 0..5 {
        first.next_move(&RoundContext::after(opponent.clone()));
    }

    let mut second = cumulative();
    let fresh = second.next_move(&RoundContext::opening(150, 150));
    assert_eq!(second.round(), 1);
    assert_eq!(second.history().times_countered(Area::HookKick), 0);
    assert_eq!(fresh.attacks(), &[Area::HookKick, Area::HookKick]);
    assert_eq!(fresh.defenses(), &[Area::HookKick]);
}

/// Every decision fits the budget and respects repeat limits
#[test]
fn test_decisions_stay_within_limits() {
    let mut engine = windowed();
    let rotations = [
        MoveSet::from_parts(vec![Area::HookKick], vec![Area::HookPunch]),
        MoveSet::from_parts(vec![Area::LowKick, Area::LowKick], vec![Area::HookKick]),
        MoveSet::from_parts(vec![], Area::all().to_vec()),
        MoveSet::new(),
    ];

    engine.next_move(&RoundContext::opening(150, 150));
    for round in 0..30 {
        let opponent = rotations[round % rotations.len()].clone();
        let decision = engine.next_move(&RoundContext::after(opponent));

        assert!(decision.energy(engine.catalog()) <= engine.energy_per_round());
        for area in Area::all() {
            assert!(decision.attack_count(area) <= 2);
            assert!(decision.defenses().iter().filter(|&&a| a == area).count() <= 1);
        }
    }
}

/// Decision equals the solver's pick over the scored catalog
#[test]
fn test_decision_matches_solver_selection() {
    let mut engine = cumulative();
    engine.next_move(&RoundContext::opening(150, 150));
    let opponent = MoveSet::from_parts(vec![Area::UppercutPunch], vec![Area::HookKick]);
    let decision = engine.next_move(&RoundContext::after(opponent));

    let scored = engine.score_catalog();
    let picks = knapsack::solve(&scored, engine.energy_per_round());
    let mut expected = MoveSet::new();
    for pick in picks {
        expected.add(pick.action.kind, pick.action.area);
    }
    assert_eq!(decision, expected);
}

/// Engines built from the shipped config files behave like the presets
#[test]
fn test_named_configs_match_presets() {
    for (name, preset) in [
        ("cumulative", EngineConfig::default()),
        ("windowed", EngineConfig::windowed()),
    ] {
        let mut from_file = DecisionEngine::new(&load_named_config(name).unwrap()).unwrap();
        let mut from_preset = DecisionEngine::new(&preset).unwrap();

        let opponent = MoveSet::from_parts(vec![Area::HookPunch], vec![Area::LowKick]);
        assert_eq!(
            from_file.next_move(&RoundContext::opening(150, 150)),
            from_preset.next_move(&RoundContext::opening(150, 150))
        );
        assert_eq!(
            from_file.next_move(&RoundContext::after(opponent.clone())),
            from_preset.next_move(&RoundContext::after(opponent))
        );
    }
}

/// Fixed promotion doubles value regardless of the round
#[test]
fn test_fixed_promotion_policy() {
    let config = EngineConfig {
        promotion: PromotionPolicy::Fixed { multiplier: 2.0 },
        ..EngineConfig::default()
    };
    let mut engine = DecisionEngine::new(&config).unwrap();
    for _ in 0..5 {
        engine.next_move(&RoundContext::after(MoveSet::new()));
    }

    let hook_kick = engine
        .score_catalog()
        .into_iter()
        .find(|s| s.action.kind == ActionType::Attack && s.action.area == Area::HookKick)
        .unwrap();
    // (5 - 0) * 2.75 * 4 * 2
    assert!(hook_kick.promoted);
    assert!((hook_kick.value - 110.0).abs() < 1e-9);
}

/// The engine is usable behind the Fighter trait
#[test]
fn test_engine_as_fighter() {
    let mut fighter: Box<dyn Fighter> = Box::new(cumulative());
    let catalog = ActionCatalog::from_config(&EngineConfig::default()).unwrap();

    assert_eq!(fighter.name(), "cumulative");
    let decision = fighter.next_move(&RoundContext::opening(150, 150));
    assert!(decision.energy(&catalog) <= 12);
}
