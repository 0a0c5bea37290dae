//! Pretty output formatting.

use picker_core::contest::{Outcomes, RankedMember, Timestamp, WeekPicks};

fn format_timestamp(timestamp: &Timestamp) -> String {
    match timestamp {
        Timestamp::Epoch(millis) => chrono::DateTime::from_timestamp_millis(*millis)
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| millis.to_string()),
        Timestamp::Number(number) => number.to_string(),
        Timestamp::Text(text) => text.clone(),
    }
}

fn format_outcomes(outcomes: &Outcomes) -> String {
    let mut output = String::new();
    for (game, outcome) in outcomes {
        let outcome = if outcome.is_empty() { "-" } else { outcome };
        output.push_str(&format!("\n  {}: {}", game, outcome));
    }
    output
}

/// Format every member's picks for a week.
pub fn format_week_picks(week: &str, picks: &WeekPicks) -> String {
    if picks.is_empty() {
        return format!("No picks found for week {}.", week);
    }
    let mut output = format!("WEEK {} PICKS ({} members)\n", week, picks.len());
    output.push_str(&"-".repeat(40));
    for (member, entry) in picks {
        output.push_str(&format!("\n{}", member));
        if let Some(timestamp) = &entry.timestamp {
            output.push_str(&format!(" (saved {})", format_timestamp(timestamp)));
        }
        output.push_str(&format_outcomes(&entry.picks));
        output.push('\n');
    }
    output
}

/// Format the outcomes for a week.
pub fn format_results(week: &str, results: &Outcomes) -> String {
    if results.is_empty() {
        return format!("No results found for week {}.", week);
    }
    let mut output = format!("WEEK {} RESULTS ({} games)\n", week, results.len());
    output.push_str(&"-".repeat(40));
    output.push_str(&format_outcomes(results));
    output
}

/// Format a ranked leaderboard as a table.
pub fn format_leaderboard(rows: &[RankedMember]) -> String {
    if rows.is_empty() {
        return "No standings yet.".to_string();
    }
    let width = rows
        .iter()
        .map(|row| row.member.chars().count())
        .max()
        .unwrap_or(0)
        .max("MEMBER".len());

    let mut output = format!(
        "{:>4}  {:<width$}  {:>7}  {:>5}  {:>8}\n",
        "RANK", "MEMBER", "CORRECT", "TOTAL", "ACCURACY"
    );
    output.push_str(&"-".repeat(4 + 2 + width + 2 + 7 + 2 + 5 + 2 + 8));
    for row in rows {
        output.push_str(&format!(
            "\n{:>4}  {:<width$}  {:>7}  {:>5}  {:>7.1}%",
            row.rank,
            row.member,
            row.score.correct,
            row.score.total,
            row.score.accuracy() * 100.0
        ));
    }
    output
}
