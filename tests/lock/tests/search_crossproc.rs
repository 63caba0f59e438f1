//! Cross-process determinism: spawns the `search_fixture` binary under
//! several environment variants and asserts identical output.

use std::path::Path;
use std::process::Command;

use tileswap_kernel::hash::ContentHash;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

/// Every `trace_digest=` value in `output`, parsed and checked as a
/// well-formed SHA-256 content hash.
fn trace_digests(output: &str) -> Vec<ContentHash> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("trace_digest="))
        .map(|value| {
            let hash = ContentHash::parse(value)
                .unwrap_or_else(|| panic!("malformed trace digest {value:?}"));
            assert_eq!(hash.algorithm(), "sha256", "{value}");
            assert_eq!(hash.hex_digest().len(), 64, "{value}");
            assert!(
                hash.hex_digest()
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)),
                "{value}"
            );
            hash
        })
        .collect()
}

#[test]
fn fixture_output_identical_across_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert_eq!(baseline.matches("run=").count(), 6);
    assert_eq!(baseline.matches("outcome=solved").count(), 6);
    assert_eq!(trace_digests(&baseline).len(), 6);
    assert!(baseline.contains("run=A_Star_manhattan"));
    assert!(baseline.contains("run=Iter_Deepening"));

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(
        baseline,
        run_variant(alt_cwd, &[]),
        "output differs when cwd changes from {root} to {alt_cwd}"
    );
    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );
    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("TILESWAP_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("RUST_LOG", "trace"),
            ],
        ),
        "output differs with spurious env vars"
    );
}

#[test]
fn fixture_digests_match_in_process_search() {
    use std::time::Duration;
    use tileswap_kernel::codec::parse_board;
    use tileswap_search::heuristic::Heuristic;
    use tileswap_search::policy::SearchPolicy;
    use tileswap_search::search::{solve, Strategy};

    let start = parse_board("((2, 1, 3), (9, 6, 4), (7, 8, 5))").unwrap();
    let policy = SearchPolicy {
        time_limit: Duration::from_secs(600),
        ..SearchPolicy::default()
    };
    let outcome = solve(
        &start,
        &tileswap_kernel::board::Board::ordered(3),
        Strategy::AStar(Heuristic::AdjustedManhattan),
        &policy,
    )
    .unwrap();
    let digest = outcome.trace().unwrap().digest().unwrap();

    let output = run_variant(&workspace_root(), &[]);
    assert!(
        trace_digests(&output).contains(&digest),
        "in-process digest {digest} not found in fixture output"
    );
}
