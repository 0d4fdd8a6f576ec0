//! End-to-end runs over the full pipeline

use polistat::clean::RawTable;
use polistat::{analyze_table, run_file, Error, TestKind, TestOutcome};
use std::path::PathBuf;

const SAMPLE_CSV: &str = "\
age,sex,bmi,children,smoker,region,charges
19,female,27.9,0,yes,southwest,16884.92
18,male,33.77,1,no,southeast,1725.55
28,male,33.0,3,no,southeast,4449.46
33,male,22.705,0,no,northwest,21984.47
32,male,28.88,0,no,northwest,3866.86
31,female,25.74,0,no,southeast,3756.62
46,female,33.44,1,no,southeast,8240.59
37,female,27.74,3,no,northwest,7281.51
60,female,25.84,0,no,northwest,28923.14
62,female,26.29,0,yes,southeast,27808.73
23,male,34.4,0,no,southwest,1826.84
56,female,39.82,0,no,southeast,11090.72
27,male,42.13,0,yes,southeast,39611.76
19,male,24.6,1,no,southwest,1837.24
52,female,30.78,1,no,northeast,10797.34
23,male,23.845,0,no,northeast,2395.17
56,male,40.3,0,no,southwest,10602.38
30,male,35.3,0,yes,southwest,36837.47
60,female,36.005,0,no,northeast,13228.85
25,male,28.88,0,no,northeast,3766.88
19,female,27.9,0,yes,southwest,16884.92
31,female,,2,no,northeast,4500.00
17,male,25.0,0,no,northwest,1200.00
";

fn sample_table() -> RawTable {
    RawTable::from_csv_reader(SAMPLE_CSV.as_bytes()).unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("polistat-e2e-{}-{name}", std::process::id()))
}

#[test]
fn full_run_counters_and_retention() {
    let artifacts = analyze_table(&sample_table()).unwrap();
    let c = artifacts.dataset.counters();
    assert_eq!(c.initial_count, 23);
    assert_eq!(c.duplicates_removed, 1);
    assert_eq!(c.missing_removed, 1);
    assert_eq!(c.range_removed, 1);
    assert_eq!(c.final_count, 20);
    assert!(c.is_consistent());
    assert!((0.0..=1.0).contains(&c.retention_rate()));
}

#[test]
fn full_run_computes_every_test() {
    let artifacts = analyze_table(&sample_table()).unwrap();
    assert_eq!(artifacts.outcomes.len(), 4);
    for (kind, outcome) in &artifacts.outcomes {
        match outcome {
            TestOutcome::Computed(result) => {
                assert!(result.statistic.is_finite());
                assert!((0.0..=1.0).contains(&result.p_value));
                assert!(result.effect_size.is_finite());
            }
            TestOutcome::NotComputable { reason } => {
                panic!("{kind} unexpectedly not computable: {reason}")
            }
        }
    }
}

#[test]
fn smoking_effect_dominates_sample() {
    let artifacts = analyze_table(&sample_table()).unwrap();
    let (kind, outcome) = &artifacts.outcomes[0];
    assert_eq!(*kind, TestKind::SmokingEffect);
    let TestOutcome::Computed(result) = outcome else {
        panic!("smoking effect not computed");
    };
    // Smokers in the sample pay several times more on average.
    assert!(result.effect_size > 2.0);
    assert!(result.statistic > 0.0);
}

#[test]
fn features_align_with_dataset() {
    let artifacts = analyze_table(&sample_table()).unwrap();
    assert_eq!(artifacts.features.len(), artifacts.dataset.len());
    for (record, features) in artifacts
        .dataset
        .records()
        .iter()
        .zip(&artifacts.features)
    {
        assert!(features.risk_score >= 0.0);
        if record.smoker == polistat::core::Smoker::No {
            assert!(features.risk_score <= 1.0);
        }
    }
}

#[test]
fn report_has_fixed_sections() {
    let artifacts = analyze_table(&sample_table()).unwrap();
    let report = &artifacts.report;
    let order = [
        "Cleaning Summary",
        "Descriptive Statistics",
        "Derived Risk Features",
        "Hypothesis Tests",
        "[Smoking effect]",
        "[Age correlation]",
        "[BMI correlation]",
        "[Regional variance]",
    ];
    let mut last = 0;
    for marker in order {
        let at = report
            .find(marker)
            .unwrap_or_else(|| panic!("missing section {marker}"));
        assert!(at >= last, "section {marker} out of order");
        last = at;
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let a = analyze_table(&sample_table()).unwrap();
    let b = analyze_table(&sample_table()).unwrap();
    assert_eq!(a.report, b.report);
    assert_eq!(a.dataset.records(), b.dataset.records());
}

#[test]
fn file_run_writes_both_artifacts_deterministically() {
    let input = temp_path("input.csv");
    std::fs::write(&input, SAMPLE_CSV).unwrap();

    let cleaned_a = temp_path("cleaned-a.csv");
    let report_a = temp_path("report-a.txt");
    let cleaned_b = temp_path("cleaned-b.csv");
    let report_b = temp_path("report-b.txt");

    run_file(&input, &cleaned_a, &report_a).unwrap();
    run_file(&input, &cleaned_b, &report_b).unwrap();

    let cleaned_bytes_a = std::fs::read(&cleaned_a).unwrap();
    let cleaned_bytes_b = std::fs::read(&cleaned_b).unwrap();
    let report_bytes_a = std::fs::read(&report_a).unwrap();
    let report_bytes_b = std::fs::read(&report_b).unwrap();

    for path in [&input, &cleaned_a, &report_a, &cleaned_b, &report_b] {
        std::fs::remove_file(path).ok();
    }

    assert_eq!(cleaned_bytes_a, cleaned_bytes_b);
    assert_eq!(report_bytes_a, report_bytes_b);

    // Cleaned export has a header plus one line per surviving record and
    // none of the derived feature columns.
    let cleaned = String::from_utf8(cleaned_bytes_a).unwrap();
    assert_eq!(cleaned.lines().count(), 21);
    assert!(cleaned
        .lines()
        .next()
        .unwrap()
        .eq("age,sex,bmi,children,smoker,region,charges"));
    assert!(!cleaned.contains("risk"));
}

#[test]
fn negative_age_row_is_cleaned_not_fatal() {
    let csv = "age,sex,bmi,children,smoker,region,charges\n\
               -3,male,25.0,0,no,northwest,1200.00\n\
               45,female,31.2,3,no,southeast,9800.50\n\
               19,female,27.9,0,yes,southwest,16884.92\n\
               62,female,26.29,0,yes,southeast,27808.73\n";
    let table = RawTable::from_csv_reader(csv.as_bytes()).unwrap();
    let artifacts = analyze_table(&table).unwrap();
    let c = artifacts.dataset.counters();
    assert_eq!(c.range_removed, 1);
    assert_eq!(c.final_count, 3);
    assert!(artifacts.dataset.records().iter().all(|r| r.age >= 18));
}

#[test]
fn schema_failure_reports_all_columns_before_cleaning() {
    let csv = "age,sex,children,smoker\n19,female,0,yes\n";
    let table = RawTable::from_csv_reader(csv.as_bytes()).unwrap();
    let err = analyze_table(&table).unwrap_err();
    match err {
        Error::Schema { missing, mistyped } => {
            assert_eq!(missing, vec!["bmi", "region", "charges"]);
            assert!(mistyped.is_empty());
        }
        other => panic!("expected schema error, got {other}"),
    }
}

#[test]
fn missing_source_writes_nothing() {
    let cleaned = temp_path("never-cleaned.csv");
    let report = temp_path("never-report.txt");
    let err = run_file(&temp_path("does-not-exist.csv"), &cleaned, &report).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound { .. }));
    assert!(!cleaned.exists());
    assert!(!report.exists());
}

#[test]
fn empty_input_produces_summary_only_report() {
    let csv = "age,sex,bmi,children,smoker,region,charges\n";
    let table = RawTable::from_csv_reader(csv.as_bytes()).unwrap();
    let artifacts = analyze_table(&table).unwrap();
    assert!(artifacts.dataset.is_empty());
    assert_eq!(artifacts.dataset.counters().retention_rate(), 0.0);
    assert!(artifacts
        .report
        .contains("no statistical analysis could be performed"));
    assert!(!artifacts.report.contains("[Smoking effect]"));
}
