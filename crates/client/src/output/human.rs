//! Human-readable summary formatting.
//!
//! List commands emit a count line followed by one line per record in a
//! resource-specific compact form. Formatting is deterministic: the same
//! input always renders the same text.

use sbmctl_core::messaging::{BatchOutcome, BatchResult, Message, MessageSet, Schedule, WriteOp};

use super::csv;

/// Count line emitted before list results.
pub fn found_results(count: usize) -> String {
    format!("Found {count} results")
}

/// Formats one schedule as
/// `id: minute hour day_of_week day_of_month month_of_year (m/h/d/dM/MY)`.
pub fn schedule_line(schedule: &Schedule) -> String {
    format!(
        "{}: {} {} {} {} {} (m/h/d/dM/MY)",
        field(&schedule.id),
        field(&schedule.minute),
        field(&schedule.hour),
        field(&schedule.day_of_week),
        field(&schedule.day_of_month),
        field(&schedule.month_of_year),
    )
}

/// Formats a schedule list.
pub fn format_schedules(schedules: &[Schedule]) -> String {
    let mut output = found_results(schedules.len());
    for schedule in schedules {
        output.push('\n');
        output.push_str(&schedule_line(schedule));
    }
    output
}

/// Formats a messageset list as CSV rows.
pub fn format_messagesets(messagesets: &[MessageSet]) -> String {
    let mut output = found_results(messagesets.len());
    for messageset in messagesets {
        output.push('\n');
        output.push_str(&csv::messageset_row(messageset));
    }
    output
}

/// Formats a message list as CSV rows.
pub fn format_messages(messages: &[Message]) -> String {
    let mut output = found_results(messages.len());
    for message in messages {
        output.push('\n');
        output.push_str(&csv::message_row(message));
    }
    output
}

/// Past-tense verb for a write operation, used in batch summaries.
pub fn write_verb(op: WriteOp) -> &'static str {
    match op {
        WriteOp::Create => "imported",
        WriteOp::Update => "updated",
    }
}

/// Formats a batch outcome: one line per record, then the aggregate
/// count line.
pub fn format_batch(result: &BatchResult, verb: &str) -> String {
    let mut output = String::new();
    for entry in result.entries() {
        let line = match &entry.outcome {
            BatchOutcome::Success(Some(message)) => match &message.id {
                Some(id) => format!("{}: {verb} message {id}", entry.ident),
                None => format!("{}: {verb}", entry.ident),
            },
            BatchOutcome::Success(None) => format!("{}: {verb}", entry.ident),
            BatchOutcome::Failure(detail) => format!("{}: failed ({detail})", entry.ident),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str(&format_batch_counts(result, verb));
    output
}

/// Aggregate count line only, for `--quiet` runs.
pub fn format_batch_counts(result: &BatchResult, verb: &str) -> String {
    format!(
        "{} record(s) {verb}, {} failed",
        result.successes(),
        result.failures()
    )
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> Schedule {
        serde_json::from_str(
            r#"{
                "id": "1",
                "minute": "2",
                "hour": "3",
                "day_of_week": "4",
                "day_of_month": "5",
                "month_of_year": "6"
            }"#,
        )
        .unwrap()
    }

    fn messages() -> Vec<Message> {
        serde_json::from_str(
            r#"[
                {
                    "id": "1",
                    "messageset": "2",
                    "sequence_number": "3",
                    "lang": "eng_ZA",
                    "text_content": "test message",
                    "binary_content": "binary"
                },
                {
                    "id": "2",
                    "messageset": "2",
                    "sequence_number": "3",
                    "lang": "eng_ZA",
                    "text_content": "test msg two",
                    "binary_content": "binary"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_schedule_summary() {
        let output = format_schedules(&[schedule()]);
        assert_eq!(output, "Found 1 results\n1: 2 3 4 5 6 (m/h/d/dM/MY)");
    }

    #[test]
    fn test_message_summary_has_count_and_fixed_columns() {
        let output = format_messages(&messages());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Found 2 results");
        assert_eq!(lines[1], "1,2,3,eng_ZA,\"test message\",binary");
        assert_eq!(lines[2], "2,2,3,eng_ZA,\"test msg two\",binary");
    }

    #[test]
    fn test_messageset_summary() {
        let messagesets: Vec<MessageSet> = serde_json::from_str(
            r#"[{
                "id": "1",
                "short_name": "test_set",
                "content_type": "text",
                "next_set": "4",
                "default_schedule": "5",
                "notes": "good set"
            }]"#,
        )
        .unwrap();
        let output = format_messagesets(&messagesets);
        assert_eq!(output, "Found 1 results\n1,test_set,text,4,5,good set");
    }

    #[test]
    fn test_empty_list_still_has_a_count_line() {
        assert_eq!(format_messages(&[]), "Found 0 results");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let messages = messages();
        assert_eq!(format_messages(&messages), format_messages(&messages));
        let schedules = [schedule()];
        assert_eq!(format_schedules(&schedules), format_schedules(&schedules));
    }

    #[test]
    fn test_write_verbs() {
        assert_eq!(write_verb(WriteOp::Create), "imported");
        assert_eq!(write_verb(WriteOp::Update), "updated");
    }

    #[test]
    fn test_batch_output_lists_outcomes_in_order() {
        let mut result = BatchResult::default();
        result.push_success(
            "row 1".to_string(),
            Some(serde_json::from_str(r#"{"id": "10"}"#).unwrap()),
        );
        result.push_failure("row 2".to_string(), "Server returned 400: bad".to_string());
        result.push_success("row 3".to_string(), None);

        let output = format_batch(&result, "imported");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "row 1: imported message 10");
        assert_eq!(lines[1], "row 2: failed (Server returned 400: bad)");
        assert_eq!(lines[2], "row 3: imported");
        assert_eq!(lines[3], "2 record(s) imported, 1 failed");
        // Formatting the same result twice yields identical text.
        assert_eq!(output, format_batch(&result, "imported"));
    }

    #[test]
    fn test_quiet_batch_output_is_counts_only() {
        let mut result = BatchResult::default();
        result.push_success("1".to_string(), None);
        assert_eq!(
            format_batch_counts(&result, "deleted"),
            "1 record(s) deleted, 0 failed"
        );
    }
}
