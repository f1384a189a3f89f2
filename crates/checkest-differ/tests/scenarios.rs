//! End-to-end scenarios for the stream differ and acceptance test
//!
//! These run whole documents through `check` and assert on the combined
//! report, the way the judging pipeline consumes it.

use checkest_differ::{check, DiffConfig, DiffKind, Judgment, Report, Side};
use checkest_domain::{Decision, Tally, TestParameters};
use proptest::prelude::*;

fn run_with(submission: &str, reference: &str, parameters: TestParameters) -> anyhow::Result<Report> {
    Ok(check(
        submission.as_bytes(),
        reference.as_bytes(),
        &DiffConfig::default(),
        &parameters,
    )?)
}

fn run(submission: &str, reference: &str) -> anyhow::Result<Report> {
    run_with(submission, reference, TestParameters::default())
}

#[test]
fn test_two_cases_inside_accept() -> anyhow::Result<()> {
    let report = run("1.00\n1.00\n", "0.90 1.10\n0.95 1.05\n")?;

    assert_eq!(report.verdict.tally, Tally::from_counts(2, 2));
    assert_eq!(report.verdict.decision, Decision::Accept);
    assert!(report.diff.is_clean());
    assert_eq!(report.judgment(), Judgment::Accepted);
    Ok(())
}

#[test]
fn test_always_outside_rejects_without_diagnostics() -> anyhow::Result<()> {
    let reference = "0 100\n".repeat(100);
    let submission = "-1\n".repeat(100);
    let report = run(&submission, &reference)?;

    assert_eq!(report.verdict.tally, Tally::from_counts(0, 100));
    assert_eq!(report.verdict.decision, Decision::Reject);
    assert_eq!(report.diff.differences(), 0);
    assert_eq!(report.judgment(), Judgment::RejectedStatistically);
    Ok(())
}

#[test]
fn test_missing_trailing_line() -> anyhow::Result<()> {
    let report = run("1.0\n1.0\n", "0 2\n0 2\n0 2\n")?;

    assert_eq!(report.diff.records.len(), 1);
    assert_eq!(
        report.diff.records[0].kind,
        DiffKind::StreamLength {
            ended: Side::Submission
        }
    );
    assert!(report.diff.halted);
    assert_eq!(report.judgment(), Judgment::RejectedStructurally);
    Ok(())
}

#[test]
fn test_occasional_misses_are_tolerated() -> anyhow::Result<()> {
    // 97 of 100 inside at p0 = 0.95
    let reference = "0 1\n".repeat(100);
    let submission = format!("{}{}", "0.5\n".repeat(97), "2\n".repeat(3));
    let report = run(&submission, &reference)?;

    assert_eq!(report.verdict.tally, Tally::from_counts(97, 100));
    assert!(report.is_accepted());
    Ok(())
}

#[test]
fn test_systematic_bias_is_rejected() -> anyhow::Result<()> {
    // 80 of 100 inside at p0 = 0.95
    let reference = "0 1\n".repeat(100);
    let submission = format!("{}{}", "0.5\n".repeat(80), "1.5\n".repeat(20));
    let report = run(&submission, &reference)?;

    assert_eq!(report.judgment(), Judgment::RejectedStatistically);
    Ok(())
}

#[test]
fn test_lower_probability_accepts_more() -> anyhow::Result<()> {
    let reference = "0 1\n".repeat(100);
    let submission = format!("{}{}", "0.5\n".repeat(80), "1.5\n".repeat(20));
    let report = run_with(&submission, &reference, TestParameters::new(0.05, 0.8)?)?;

    assert!(report.is_accepted());
    Ok(())
}

#[test]
fn test_cases_before_fatal_difference_are_reported() -> anyhow::Result<()> {
    let report = run("0.5\n0.5\noops\n0.5\n", "0 1\n0 1\n0 1\n0 1\n")?;

    assert_eq!(report.verdict.tally, Tally::from_counts(2, 2));
    assert_eq!(report.diff.records.len(), 1);
    assert_eq!(report.diff.records[0].line, 3);
    assert!(matches!(
        report.diff.records[0].kind,
        DiffKind::NotANumber {
            side: Side::Submission,
            ..
        }
    ));
    assert_eq!(report.judgment(), Judgment::RejectedStructurally);
    Ok(())
}

#[test]
fn test_mixed_document() -> anyhow::Result<()> {
    let reference = "3\nCase #1: 0.1 0.2\nCase #2: 10 20\nCase #3: -inf 0\n";
    let submission = "3\nCase #1: 0.15\nCase #2: 25\nCase #3: -7\n";
    let report = run(submission, reference)?;

    assert!(report.diff.is_clean());
    assert_eq!(report.verdict.tally, Tally::from_counts(2, 3));
    Ok(())
}

#[test]
fn test_nan_observation_is_outside() -> anyhow::Result<()> {
    let report = run("nan\n", "0 1\n")?;

    assert!(report.diff.is_clean());
    assert_eq!(report.verdict.tally, Tally::from_counts(0, 1));
    Ok(())
}

#[test]
fn test_distinct_non_utf8_tokens_are_rejected() -> anyhow::Result<()> {
    let report = check(
        &b"caf\xe8\n"[..],
        &b"caf\xe9\n"[..],
        &DiffConfig::default(),
        &TestParameters::default(),
    )?;

    assert_eq!(report.diff.records.len(), 1);
    assert_eq!(report.judgment(), Judgment::RejectedStructurally);
    Ok(())
}

#[test]
fn test_whitespace_differences_are_advisory() -> anyhow::Result<()> {
    let report = run("0.5\r\n 0.5\n", "0 1\n0 1\n")?;

    assert!(report.diff.is_clean());
    assert_eq!(report.diff.whitespace_mismatches, 2);
    assert_eq!(report.diff.advisories.len(), 2);
    assert_eq!(report.judgment(), Judgment::Accepted);
    Ok(())
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z#:]{1,8}",
        any::<f64>().prop_map(|v| v.to_string()),
        (-1000i64..1000).prop_map(|v| v.to_string()),
        Just("nan".to_string()),
        Just("-inf".to_string()),
    ]
}

fn document() -> impl Strategy<Value = String> {
    let line = (
        "[ \t]{0,2}",
        proptest::collection::vec((token(), "[ \t]{1,3}"), 0..6),
        prop_oneof![Just("\n"), Just("\r\n")],
    )
        .prop_map(|(leading, tokens, end)| {
            let mut line = leading;
            for (i, (token, space)) in tokens.iter().enumerate() {
                if i > 0 {
                    line.push_str(space);
                }
                line.push_str(token);
            }
            line.push_str(end);
            line
        });
    proptest::collection::vec(line, 0..20).prop_map(|lines| lines.concat())
}

proptest! {
    #[test]
    fn prop_identical_streams_fully_accept(
        text in document(),
        alpha in 0.001f64..0.5,
        probability in 0.0f64..=1.0,
    ) {
        let parameters = TestParameters::new(alpha, probability).unwrap();
        let report = run_with(&text, &text, parameters).unwrap();
        prop_assert!(report.diff.is_clean());
        prop_assert_eq!(report.diff.whitespace_mismatches, 0);
        prop_assert!(report.diff.advisories.is_empty());
        prop_assert_eq!(report.judgment(), Judgment::Accepted);
    }

    #[test]
    fn prop_values_inside_intervals_count_as_successes(
        cases in proptest::collection::vec((-1e6f64..1e6, 0.0f64..1e3, 0.0f64..=1.0), 1..50),
    ) {
        let mut reference = String::new();
        let mut submission = String::new();
        for (lower, width, t) in &cases {
            let upper = lower + width;
            let x = (lower + t * width).clamp(*lower, upper);
            reference.push_str(&format!("{} {}\n", lower, upper));
            submission.push_str(&format!("{}\n", x));
        }

        let report = run(&submission, &reference).unwrap();
        prop_assert!(report.diff.is_clean());
        prop_assert_eq!(report.verdict.tally, Tally::from_counts(cases.len() as u64, cases.len() as u64));
        prop_assert!(report.is_accepted());
    }
}
