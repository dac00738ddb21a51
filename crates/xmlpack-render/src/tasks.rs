//! Effort table and task derivation for the task packet template.

use xmlpack_types::{Priority, Task};

/// Section-derived tasks after the bootstrap ones.
pub const MAX_SECTION_TASKS: usize = 5;
const TITLE_CHARS: usize = 50;

pub fn estimate_effort(complexity_score: u64) -> &'static str {
    match complexity_score {
        0..=5 => "Low (1-2 days)",
        6..=10 => "Medium (3-5 days)",
        11..=15 => "High (1-2 weeks)",
        _ => "Very High (2+ weeks)",
    }
}

/// Three fixed tasks, then one per leading section.
pub fn build_tasks(sections: &[String], complexity_score: u64) -> Vec<Task> {
    let mut tasks = vec![
        task("Analysis and Planning", Priority::High, 4),
        task("Implementation", Priority::Medium, 8),
        task("Testing and Review", Priority::Medium, 4),
    ];

    let hours = u32::try_from((complexity_score / 3).max(2)).unwrap_or(u32::MAX);
    tasks.extend(sections.iter().take(MAX_SECTION_TASKS).map(|section| {
        let head: String = section.chars().take(TITLE_CHARS).collect();
        task(format!("Process: {head}"), Priority::Medium, hours)
    }));
    tasks
}

fn task(title: impl Into<String>, priority: Priority, estimated_hours: u32) -> Task {
    Task {
        title: title.into(),
        priority,
        estimated_hours,
    }
}
