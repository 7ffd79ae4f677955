//! Output formatting utilities

use crate::domain::Entry;
use chrono::Local;

/// Format a list of entries for display, one line each
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let date = entry.created_at.with_timezone(&Local);
        output.push_str(&format!(
            "{}  {} {}",
            date.format("%d-%m-%Y %H:%M"),
            entry.emoji,
            entry.title
        ));
        if !entry.tags.is_empty() {
            output.push_str(&format!("  [{}]", entry.tags.join(", ")));
        }
        output.push_str(&format!("  ({})\n", entry.id));
    }
    output
}

/// Format a single entry with all of its fields
pub fn format_entry(entry: &Entry) -> String {
    let mut output = format!("{} {}\n", entry.emoji, entry.title);
    output.push_str(&format!("id:             {}\n", entry.id));
    output.push_str(&format!(
        "created:        {}\n",
        crate::domain::timestamp::format(&entry.created_at)
    ));
    if entry.updated_at != entry.created_at {
        output.push_str(&format!(
            "updated:        {}\n",
            crate::domain::timestamp::format(&entry.updated_at)
        ));
    }
    if !entry.tags.is_empty() {
        output.push_str(&format!("tags:           {}\n", entry.tags.join(", ")));
    }

    let fields = [
        ("Location", &entry.location),
        ("Witnesses", &entry.witnesses),
        ("Circumstances", &entry.circumstances),
        ("Trigger", &entry.trigger),
        ("Thoughts", &entry.thoughts),
        ("Body feelings", &entry.body_feelings),
        ("Actions", &entry.actions),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            output.push_str(&format!("\n{}:\n{}\n", label, value));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, title: &str, tags: &[&str]) -> Entry {
        let at = Utc.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap();
        Entry {
            id: id.to_string(),
            location: title.to_string(),
            witnesses: String::new(),
            circumstances: String::new(),
            trigger: String::new(),
            thoughts: "Thinking about it".to_string(),
            body_feelings: String::new(),
            actions: String::new(),
            emoji: "🤔".to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            entry("2-b", "Office", &["Work", "Stress"]),
            entry("1-a", "Home", &[]),
        ];

        let output = format_entry_list(&entries);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("🤔 Office  [Work, Stress]  (2-b)"));
        assert!(lines[1].contains("🤔 Home  (1-a)"));
    }

    #[test]
    fn test_format_entry_skips_empty_fields() {
        let output = format_entry(&entry("1-a", "Home", &["At home"]));
        assert!(output.starts_with("🤔 Home\n"));
        assert!(output.contains("created:        2025-01-17T12:00:00.000Z"));
        assert!(!output.contains("updated:"));
        assert!(output.contains("tags:           At home"));
        assert!(output.contains("Thoughts:\nThinking about it"));
        assert!(!output.contains("Witnesses:"));
    }
}
