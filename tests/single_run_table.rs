use perf_report::core::{BenchmarkDocument, supports_memory_usage};
use perf_report::report::{create_single_run_table, indent, single_run_rows};
use perf_report::RepositoryConfig;

fn make_document() -> BenchmarkDocument {
    serde_json::from_str(include_str!("fixtures/document.json")).unwrap()
}

fn find_row<'a>(rows: &'a [Vec<String>], title: &str) -> Option<&'a Vec<String>> {
    rows.iter().find(|row| row.first().map(String::as_str) == Some(title))
}

#[test]
fn single_run_rows_have_two_columns() {
    let doc = make_document();
    let rows = single_run_rows(&doc, &RepositoryConfig::default());

    assert_eq!(rows[0], vec!["**Batch compilation**"]);
    assert!(rows.iter().all(|r| r.len() <= 2));
    assert_eq!(find_row(&rows, "Type count").unwrap(), &vec!["Type count", "100"]);
    assert_eq!(find_row(&rows, "Assignability cache size").unwrap(), &vec!["Assignability cache size", "2500"]);
    assert_eq!(find_row(&rows, "Samples taken").unwrap(), &vec!["Samples taken", "6"]);
    assert_eq!(find_row(&rows, "Identifiers in tests").unwrap(), &vec!["Identifiers in tests", "1024"]);
    assert!(find_row(&rows, "**Language service measurements**").is_some());
}

#[test]
fn single_run_never_shows_memory_usage() {
    let doc = make_document();
    assert!(supports_memory_usage(&doc));
    let rows = single_run_rows(&doc, &RepositoryConfig::default());
    assert!(find_row(&rows, "Memory usage (MiB)").is_none());
}

#[test]
fn single_run_always_shows_system_information() {
    let doc = make_document();
    let rows = single_run_rows(&doc, &RepositoryConfig::default());

    assert!(find_row(&rows, "**System information**").is_some());
    assert_eq!(find_row(&rows, "CPU model").unwrap()[1], "Intel(R) Xeon(R) Platinum 8171M CPU @ 2.60GHz");
    assert_eq!(find_row(&rows, "CPU Architecture").unwrap(), &vec!["CPU Architecture", "x64"]);
    assert_eq!(find_row(&rows, "Release").unwrap(), &vec!["Release", "5.0.0-1032-azure"]);
    assert_eq!(rows.len(), 27);
}

#[test]
fn single_run_worst_identifiers() {
    let doc = make_document();
    let rows = single_run_rows(&doc, &RepositoryConfig::default());
    let title = indent("Worst identifier", 1);
    let worst: Vec<&Vec<String>> = rows.iter().filter(|r| r.first() == Some(&title)).collect();
    assert_eq!(worst.len(), 2);
    assert_eq!(
        worst[0][1],
        "[useReducer](/microsoft/DefinitelyTyped/blob/8ab3ee3b1a5a5a9c1b4b1d2e3f4a5b6c7d8e9f00/types/react/test/hooks.tsx#L42)"
    );

    let cv = find_row(&rows, &indent("Mean CV", 1)).unwrap();
    assert_eq!(cv, &vec![indent("Mean CV", 1), "5.0%".to_string()]);
}

#[test]
fn single_run_table_renders_without_diff_column() {
    let doc = make_document();
    let repo = RepositoryConfig::default();
    let md = create_single_run_table(&doc, &repo);
    assert_eq!(md, create_single_run_table(&doc, &repo));

    let lines: Vec<&str> = md.lines().collect();
    assert_eq!(lines.len(), 28);
    assert!(lines[0].starts_with("| **Batch compilation** "));
    assert!(!md.contains("diff"));
    assert!(lines.iter().all(|l| l.matches(" | ").count() == 1));
}
