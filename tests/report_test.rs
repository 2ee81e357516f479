use envreport::probe::NOT_INSTALLED;
use envreport::{Report, Resolution};

const MISSING: &str = "no-such-tool-envreport-test";

#[test]
fn additional_not_installed_keeps_sentinel() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .additional([MISSING])
        .build();
    let entry = report
        .packages
        .iter()
        .find(|e| e.name == MISSING)
        .expect("additional entry stays in the report");
    assert_eq!(entry.version, Resolution::NotInstalled);
}

#[test]
fn optional_not_installed_is_omitted() {
    let report = Report::builder().optional([MISSING]).build();
    assert!(report.packages.iter().all(|e| e.name != MISSING));
}

#[test]
fn duplicate_names_are_probed_once() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .core([MISSING])
        .additional([MISSING])
        .build();
    let count = report.packages.iter().filter(|e| e.name == MISSING).count();
    assert_eq!(count, 1);
}

#[test]
fn additional_entries_precede_core_entries() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .core(["core-missing-tool"])
        .additional(["extra-missing-tool"])
        .build();
    let names: Vec<&str> = report.packages.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["extra-missing-tool", "core-missing-tool"]);
}

#[test]
fn sort_orders_case_insensitively() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .additional(["zz-missing-tool", "AA-missing-tool"])
        .sort(true)
        .build();
    let names: Vec<&str> = report.packages.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["AA-missing-tool", "zz-missing-tool"]);
}

#[test]
fn text_render_has_rule_date_and_rows() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .additional([MISSING])
        .text_width(72)
        .build();
    let text = report.to_string();
    assert!(text.contains(&"-".repeat(72)));
    assert!(text.contains("  Date: "));
    assert!(text.contains("OS : "));
    assert!(text.contains("Machine : "));
    assert!(text.contains(MISSING));
    assert!(text.contains(NOT_INSTALLED));
}

#[test]
fn tiny_text_width_does_not_panic() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .additional([MISSING])
        .text_width(1)
        .build();
    let text = report.to_string();
    // Fact and package rows are never wrapped, only the date and runtime
    // lines are.
    assert!(text.contains("OS : "));
    assert!(text.contains(MISSING));
}

#[test]
fn text_render_handles_empty_package_list() {
    let report = Report::builder().optional(Vec::<String>::new()).build();
    assert!(report.packages.is_empty());
    let text = report.to_string();
    assert!(text.contains("Architecture : "));
}

#[test]
fn extra_meta_appears_in_both_renderers() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .extra_meta("Server", "staging-2")
        .build();
    assert!(report.to_string().contains("Server : staging-2"));

    let html = report.to_html();
    assert!(html.contains(">Server</td>"));
    assert!(html.contains(">staging-2</td>"));
}

#[test]
fn html_fills_the_last_package_row() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .additional([MISSING])
        .ncol(3)
        .build();
    let html = report.to_html();
    assert!(html.starts_with("<table"));
    assert!(html.ends_with("</table>"));
    // One package in a three-pair row leaves two empty pairs (four cells).
    let empty_cell = "<td style= border: 2px solid #fff;'></td>";
    assert_eq!(html.matches(empty_cell).count(), 4);
}

#[test]
fn json_uses_sentinel_strings() {
    let report = Report::builder()
        .optional(Vec::<String>::new())
        .additional([MISSING])
        .build();
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["packages"][0]["name"], MISSING);
    assert_eq!(value["packages"][0]["version"], NOT_INSTALLED);
    assert!(value["host"]["os"].is_string());
}
