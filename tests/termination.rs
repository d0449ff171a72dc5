//! Termination once no pawn can find a target.

use rochambeau::{Arena, PawnType, SimulationConfig, TickOutcome};
use rstest::rstest;
use test_utils::ArenaFixture;

#[rstest]
#[case::rocks(PawnType::Rock)]
#[case::papers(PawnType::Paper)]
#[case::scissors(PawnType::Scissors)]
fn spread_out_monochrome_population_finishes_immediately(#[case] kind: PawnType) {
    let placements: Vec<_> = (0..4_u8)
        .flat_map(|row| {
            (0..4_u8).map(move |col| (kind, f32::from(col) * 60.0, f32::from(row) * 60.0))
        })
        .collect();
    let mut fixture = ArenaFixture::new(400.0, 400.0, &placements);
    let before: Vec<_> = (0..placements.len())
        .map(|slot| fixture.position(slot))
        .collect();

    assert_eq!(fixture.arena.tick(), TickOutcome::Finished);

    let after: Vec<_> = (0..placements.len())
        .map(|slot| fixture.position(slot))
        .collect();
    assert_eq!(before, after);
    assert_eq!(fixture.arena.ticks(), 1);
}

#[rstest]
fn crowded_monochrome_population_keeps_fleeing() {
    let mut fixture = ArenaFixture::new(
        400.0,
        400.0,
        &[(PawnType::Paper, 100.0, 100.0), (PawnType::Paper, 120.0, 100.0)],
    );

    assert!(matches!(fixture.arena.tick(), TickOutcome::Continuing(_)));
    assert!(fixture.position(0).x < 100.0);
    assert!(fixture.position(1).x > 120.0);
}

#[rstest]
fn finished_arena_ignores_further_ticks() {
    let mut fixture = ArenaFixture::new(200.0, 200.0, &[(PawnType::Rock, 10.0, 10.0)]);
    assert_eq!(fixture.arena.tick(), TickOutcome::Finished);
    assert_eq!(fixture.arena.tick(), TickOutcome::Finished);
    assert_eq!(fixture.arena.ticks(), 1);
}

#[rstest]
fn seeded_run_never_loses_pawns() {
    let config = SimulationConfig {
        width: 200.0,
        height: 200.0,
        population: 30,
        seed: Some(2024),
        ..SimulationConfig::default()
    };
    let mut arena = Arena::new(&config).expect("valid config");
    for _ in 0..5_000 {
        let outcome = arena.tick();
        let total: usize = arena.census().values().sum();
        assert_eq!(total, 30);
        if outcome == TickOutcome::Finished {
            break;
        }
    }
}
