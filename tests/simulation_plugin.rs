//! Drives small arenas through the Bevy plugin until they finish.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use rochambeau::{Arena, PawnType, SimulationConfig, SimulationFinished, SimulationPlugin};
use static_assertions::assert_impl_all;
use test_utils::arena_of;

assert_impl_all!(Arena: Resource, Send, Sync, Clone);
assert_impl_all!(SimulationPlugin: Plugin);

#[derive(Resource, Default, Debug)]
struct Completions(Vec<u64>);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must take On<T> by value."
)]
fn record_completion(event: On<SimulationFinished>, mut completions: ResMut<Completions>) {
    completions.0.push(event.event().ticks);
}

fn app_with_population(placements: &[(PawnType, f32, f32)]) -> App {
    let config = SimulationConfig {
        width: 100.0,
        height: 100.0,
        ..SimulationConfig::default()
    };
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<Completions>()
        .add_observer(record_completion)
        .add_plugins(SimulationPlugin::new(config))
        .insert_resource(arena_of(100.0, 100.0, placements));
    app
}

fn update_until_finished(app: &mut App, limit: u64) -> u64 {
    let population = app.world().resource::<Arena>().pawns().len();
    let mut updates = 0_u64;
    while !app.world().resource::<Arena>().is_finished() {
        assert!(updates < limit, "run did not finish within {limit} updates");
        app.update();
        updates += 1;
        let total: usize = app.world().resource::<Arena>().census().values().sum();
        assert_eq!(total, population);
    }
    updates
}

#[test]
fn app_ticks_the_duel_until_it_finishes() {
    let mut app =
        app_with_population(&[(PawnType::Rock, 0.0, 0.0), (PawnType::Scissors, 5.0, 5.0)]);

    let updates = update_until_finished(&mut app, 1_000);

    assert_eq!(updates, 10);
    assert_eq!(app.world().resource::<Arena>().ticks(), 10);
    assert_eq!(app.world().resource::<Completions>().0, vec![10]);
}

#[test]
fn completion_is_reported_once_across_later_updates() {
    let mut app = app_with_population(&[
        (PawnType::Paper, 10.0, 10.0),
        (PawnType::Paper, 80.0, 10.0),
        (PawnType::Paper, 10.0, 80.0),
    ]);

    assert_eq!(update_until_finished(&mut app, 10), 1);
    for _ in 0..5 {
        app.update();
    }

    assert_eq!(app.world().resource::<Completions>().0, vec![1]);
    assert_eq!(app.world().resource::<Arena>().ticks(), 1);
}
