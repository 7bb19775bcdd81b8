use wargcv::report::Report;
use wargcv::source::Source;

#[cfg(not(windows))]
#[test]
fn process_command_line_splits_back_into_args() {
    let line = wargcv::source::process_command_line();
    let expected: Vec<String> = std::env::args().collect();
    assert_eq!(line.arguments().unwrap(), expected);
}

#[test]
fn process_command_line_starts_with_program() {
    let line = Source::Process.read();
    let args = line.arguments().unwrap();
    assert!(!args.is_empty());
    assert_eq!(line.tail(0).unwrap(), line.as_str());
}

#[test]
fn given_source_is_used_verbatim() {
    let line = Source::Given("  x  \"y z\"  ".to_string()).read();
    assert_eq!(line.as_str(), "  x  \"y z\"  ");
    let report = Report::build(&line, 1).unwrap();
    assert_eq!(report.arguments, vec!["x", "y z"]);
    assert_eq!(report.tail, "\"y z\"  ");
}

#[test]
fn json_report_carries_all_fields() {
    let line = Source::Given("prog a b".to_string()).read();
    let report = Report::build(&line, 2).unwrap();
    let json = report.render(wargcv::config::OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["command_line"], "prog a b");
    assert_eq!(value["arguments"], serde_json::json!(["prog", "a", "b"]));
    assert_eq!(value["tail_index"], 2);
    assert_eq!(value["tail"], "b");
}
