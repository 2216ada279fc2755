/// Library-level integration tests for the full repair pipeline
mod common;

use std::fs;

use serde_json::json;

use jsonl_repair::{
    FileOutcome, RepairOutcome, repair_directory, repair_file, repair_line, strip_thinking,
};

use common::{ProjectsDirBuilder, assistant_line_with_thinking, user_line};

#[test]
fn test_repair_then_sanitize_pipeline_on_one_line() {
    // A truncated assistant record carrying reasoning content
    let line = r#"{"thinking":"...","message":{"content":[{"type":"thinking","thinking":"x"},{"type":"text","text":"y"}]},"uuid":"abc"#;

    let mut record = match repair_line(line) {
        RepairOutcome::Fixed(record) => record,
        other => panic!("expected Fixed, got {:?}", other),
    };

    assert!(strip_thinking(&mut record));
    assert_eq!(
        record,
        json!({
            "message": {"content": [{"type": "text", "text": "y"}]},
            "uuid": "abc"
        })
    );
}

#[test]
fn test_full_project_directory_pass() {
    let corrupted = format!(
        "{}\n{}\n{{\"partial\": \"valu\n\u{0000}binary junk\u{0000}\n",
        assistant_line_with_thinking("final answer"),
        user_line("a question")
    );
    let builder =
        ProjectsDirBuilder::new().with_project("-Users%2Fdemo", &[("agent.jsonl", &corrupted)]);
    let project_dir = builder.projects_dir().join("-Users%2Fdemo");

    let results = repair_directory(&project_dir).unwrap();
    assert_eq!(results.len(), 1);

    let FileOutcome::Rewritten(summary) = results[0].1 else {
        panic!("expected Rewritten, got {:?}", results[0].1);
    };
    assert_eq!(summary.fixed_lines, 1);
    assert_eq!(summary.removed_lines, 1);
    assert_eq!(summary.thinking_stripped, 1);
    assert!(summary.bytes_saved > 0);

    let repaired = fs::read_to_string(project_dir.join("agent.jsonl")).unwrap();
    let lines: Vec<&str> = repaired.lines().collect();
    assert_eq!(lines.len(), 3);
    // Every surviving line is valid JSON
    for line in &lines {
        serde_json::from_str::<serde_json::Value>(line).unwrap();
    }
    // Reasoning content is gone, the answer text survives
    assert!(!repaired.contains("Analyzing"));
    assert!(repaired.contains("final answer"));
}

#[test]
fn test_missing_and_empty_files_are_statuses() {
    let builder = ProjectsDirBuilder::new().with_project("-Users%2Fempty", &[("empty.jsonl", "")]);
    let project_dir = builder.projects_dir().join("-Users%2Fempty");

    assert_eq!(
        repair_file(&project_dir.join("missing.jsonl")).unwrap(),
        FileOutcome::NotFound
    );
    assert_eq!(repair_file(&project_dir.join("empty.jsonl")).unwrap(), FileOutcome::EmptyFile);
}

#[test]
fn test_repair_is_idempotent_across_runs() {
    let corrupted = "{\"a\": 1, \"b\": 2,}\n{\"c\":3}{\"d\":4}\n";
    let builder =
        ProjectsDirBuilder::new().with_project("-Users%2Fstable", &[("s.jsonl", corrupted)]);
    let file = builder.projects_dir().join("-Users%2Fstable").join("s.jsonl");

    let FileOutcome::Rewritten(first) = repair_file(&file).unwrap() else {
        panic!("expected Rewritten");
    };
    assert_eq!(first.fixed_lines, 2);
    let after_first = fs::read_to_string(&file).unwrap();
    assert_eq!(after_first, "{\"a\":1,\"b\":2}\n{\"c\":3}\n");

    let FileOutcome::Rewritten(second) = repair_file(&file).unwrap() else {
        panic!("expected Rewritten");
    };
    assert!(!second.changed());
    assert_eq!(fs::read_to_string(&file).unwrap(), after_first);
}
