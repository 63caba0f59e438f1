//! End-to-end experiment run from a JSON config file.

use std::fs;

use tileswap_harness::config::RunConfig;
use tileswap_harness::corpus::read_corpus;
use tileswap_harness::report::report_paths;
use tileswap_harness::runner::{read_summary, run};
use tileswap_search::search::Strategy;

#[test]
fn config_file_drives_a_full_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let config_path = root.join("run.json");
    let config_json = serde_json::json!({
        "puzzles": 4,
        "size": 2,
        "seed": 5,
        "corpus": root.join("puzzles.txt"),
        "out_dir": root.join("out"),
        "time_limit_secs": 60.0,
        "strategies": ["A_Star_manhattan", "A_Star_hamming", "DFS", "Iter_Deepening"],
    });
    fs::write(&config_path, config_json.to_string()).unwrap();

    let config = RunConfig::load(&config_path).unwrap();
    let summary = run(&config).unwrap();
    assert_eq!(summary.puzzles, 4);
    assert_eq!(summary.strategies.len(), 4);
    for stats in &summary.strategies {
        assert_eq!(stats.solved, 4, "{}", stats.strategy);
        assert_eq!(stats.timeouts, 0);
    }

    let boards = read_corpus(&config.corpus).unwrap();
    assert_eq!(boards.len(), 4);

    let strategy: Strategy = "A_Star_manhattan".parse().unwrap();
    for (i, start) in boards.iter().enumerate() {
        let (search, solution) = report_paths(&config.out_dir, strategy, i + 1);
        let solution = fs::read_to_string(solution).unwrap();
        let first = solution.lines().next().unwrap();
        assert_eq!(first, format!("{start} 0"));
        let search = fs::read_to_string(search).unwrap();
        assert!(search.lines().last().unwrap().starts_with("elapsed: "));
    }

    let read_back = read_summary(&config.out_dir).unwrap();
    assert_eq!(read_back.puzzles, 4);
    assert_eq!(read_back.goal, "((1, 2), (3, 4))");
}

#[test]
fn same_seed_same_corpus_and_same_solutions() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let config = |root: &std::path::Path| RunConfig {
        puzzles: 3,
        size: 2,
        seed: Some(77),
        corpus: root.join("puzzles.txt"),
        out_dir: root.join("out"),
        strategies: vec!["A_Star_sum_permutation".into()],
        ..RunConfig::default()
    };
    let (ca, cb) = (config(a.path()), config(b.path()));
    let sa = run(&ca).unwrap();
    let sb = run(&cb).unwrap();
    assert_eq!(
        fs::read_to_string(&ca.corpus).unwrap(),
        fs::read_to_string(&cb.corpus).unwrap()
    );
    assert_eq!(
        sa.strategies[0].solution_length,
        sb.strategies[0].solution_length
    );
    assert_eq!(sa.strategies[0].search_cost, sb.strategies[0].search_cost);
}
