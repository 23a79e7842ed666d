mod common;

use bnb::{solve, Config, Direction, Status, Strategy};
use rstest::rstest;

use common::Knapsack;

fn maximize(strategy: Strategy, workers: usize) -> Config<f64> {
    Config::default()
        .with_direction(Direction::Maximize)
        .with_strategy(strategy)
        .with_workers(workers)
}

#[rstest]
#[case(Strategy::DepthFirst, 2)]
#[case(Strategy::DepthFirst, 4)]
#[case(Strategy::BreadthFirst, 4)]
#[case(Strategy::BestFirst, 2)]
#[case(Strategy::BestFirst, 4)]
fn parallel_objective_matches_sequential(#[case] strategy: Strategy, #[case] workers: usize) {
    let knapsack = Knapsack::random(7, 10);
    let sequential = solve(&knapsack, knapsack.root(), &maximize(strategy, 1)).unwrap();
    let parallel = solve(&knapsack, knapsack.root(), &maximize(strategy, workers)).unwrap();

    assert_eq!(sequential.status, Status::Optimal);
    assert_eq!(parallel.status, Status::Optimal);
    assert_eq!(parallel.objective, sequential.objective);
    assert!(parallel.warnings.is_empty());
}

#[test]
fn parallel_run_respects_the_node_budget() {
    // explored is counted under the frontier lock, so even a pool much wider
    // than the budget cannot overshoot it
    for seed in 0..10 {
        let knapsack = Knapsack::random(seed, 12);
        let config = maximize(Strategy::BestFirst, 8).with_max_nodes(7);
        let result = solve(&knapsack, knapsack.root(), &config).unwrap();
        assert!(result.stats.explored <= 7, "seed {seed}");
    }
}

#[test]
fn wide_pool_matches_brute_force_across_seeds() {
    for seed in 0..30 {
        let knapsack = Knapsack::random(seed, 9);
        let config = maximize(Strategy::BestFirst, 8);
        let result = solve(&knapsack, knapsack.root(), &config).unwrap();

        assert_eq!(result.status, Status::Optimal, "seed {seed}");
        assert_eq!(result.objective, Some(knapsack.brute_force()), "seed {seed}");
    }
}

#[test]
fn pool_larger_than_the_tree_terminates() {
    // more workers than the tree has nodes exercises quiescence detection
    // with mostly idle workers
    let knapsack = Knapsack::new(vec![2., 3., 4., 5.], vec![3., 4., 5., 6.], 5.);
    let config = maximize(Strategy::BestFirst, 8);
    let result = solve(&knapsack, knapsack.root(), &config).unwrap();

    assert_eq!(result.status, Status::Optimal);
    assert_eq!(result.objective, Some(7.));
}

#[test]
fn complete_root_is_optimal_even_in_parallel() {
    let knapsack = Knapsack::new(Vec::new(), Vec::new(), 0.);
    let config = maximize(Strategy::DepthFirst, 4);
    let result = solve(&knapsack, knapsack.root(), &config).unwrap();

    assert_eq!(result.status, Status::Optimal);
    assert_eq!(result.objective, Some(0.));
    assert_eq!(result.stats.explored, 1);
    assert_eq!(result.stats.completed, 1);
}

#[test]
fn concurrent_independent_searches_do_not_interfere() {
    // each solve call owns an isolated frontier and incumbent
    let a = Knapsack::random(13, 10);
    let b = Knapsack::random(14, 10);
    let (result_a, result_b) = std::thread::scope(|scope| {
        let handle_a = scope.spawn(|| solve(&a, a.root(), &maximize(Strategy::BestFirst, 2)));
        let handle_b = scope.spawn(|| solve(&b, b.root(), &maximize(Strategy::BestFirst, 2)));
        (handle_a.join().unwrap(), handle_b.join().unwrap())
    });

    assert_eq!(result_a.unwrap().objective, Some(a.brute_force()));
    assert_eq!(result_b.unwrap().objective, Some(b.brute_force()));
}
