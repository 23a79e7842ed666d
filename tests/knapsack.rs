mod common;

use bnb::{solve, Config, Direction, Status, Strategy};
use rstest::rstest;

use common::Knapsack;

fn maximize(strategy: Strategy) -> Config<f64> {
    Config::default()
        .with_direction(Direction::Maximize)
        .with_strategy(strategy)
}

#[rstest]
#[case(Strategy::DepthFirst)]
#[case(Strategy::BreadthFirst)]
#[case(Strategy::BestFirst)]
fn four_item_instance_is_solved_to_optimality(#[case] strategy: Strategy) {
    let knapsack = Knapsack::new(vec![2., 3., 4., 5.], vec![3., 4., 5., 6.], 5.);
    let result = solve(&knapsack, knapsack.root(), &maximize(strategy)).unwrap();

    assert_eq!(result.status, Status::Optimal);
    assert!(result.proved_optimal());
    assert_eq!(result.objective, Some(7.));
    assert!(result.reason.is_proof());
    assert_eq!(result.abs_gap, 0.);
    assert_eq!(result.rel_gap, 0.);

    // the optimum packs the items of weight 2 and 3
    let selection = result.solution.unwrap();
    assert_eq!(selection.weight, 5.);
    assert_eq!(selection.value, 7.);
    assert_eq!(selection.taken.count_ones(..), 2);
}

#[rstest]
#[case(Strategy::DepthFirst)]
#[case(Strategy::BreadthFirst)]
#[case(Strategy::BestFirst)]
fn matches_exhaustive_enumeration_on_random_instances(#[case] strategy: Strategy) {
    for seed in 0..20 {
        let knapsack = Knapsack::random(seed, 8);
        let expected = knapsack.brute_force();

        let result = solve(&knapsack, knapsack.root(), &maximize(strategy)).unwrap();

        assert_eq!(result.status, Status::Optimal, "seed {seed}");
        assert_eq!(result.objective, Some(expected), "seed {seed}");
    }
}

#[test]
fn single_worker_runs_are_idempotent() {
    let knapsack = Knapsack::random(42, 10);
    let config = maximize(Strategy::BestFirst);

    let first = solve(&knapsack, knapsack.root(), &config).unwrap();
    let second = solve(&knapsack, knapsack.root(), &config).unwrap();

    assert_eq!(first.objective, second.objective);
    assert_eq!(first.status, second.status);
    assert_eq!(first.stats.explored, second.stats.explored);
}

#[test]
fn every_explored_node_is_accounted_for() {
    let knapsack = Knapsack::random(7, 10);
    let result = solve(&knapsack, knapsack.root(), &maximize(Strategy::DepthFirst)).unwrap();

    // the model never reports infeasible subtrees, so every popped node was
    // either branched, completed or pruned against the incumbent
    let stats = &result.stats;
    assert_eq!(stats.pruned_infeasible, 0);
    assert_eq!(
        stats.explored,
        stats.branched + stats.completed + stats.pruned_bound
    );
    assert!(stats.peak_frontier >= 1);
}

#[test]
fn admissible_bound_makes_pruning_safe_and_effective() {
    let knapsack = Knapsack::random(3, 12);
    let expected = knapsack.brute_force();
    let result = solve(&knapsack, knapsack.root(), &maximize(Strategy::DepthFirst)).unwrap();

    // pruning kicked in, yet the proven optimum survived it
    assert!(result.stats.pruned() > 0);
    assert_eq!(result.objective, Some(expected));
    assert!(result.proved_optimal());
}
