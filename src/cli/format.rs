//! Output formatting for CLI display.

use crate::model::{Badge, Outcome, UnitStatus};
use crate::progress::{Completion, Summary};

pub(super) fn format_status(status: UnitStatus) -> &'static str {
    match status {
        UnitStatus::Completed => "done",
        UnitStatus::Unlocked => "current",
        UnitStatus::Locked => "locked",
    }
}

pub(super) fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Pass => format!("PASS  {}", outcome.message()),
        Outcome::Fail { .. } => format!("FAIL  {}", outcome.message()),
    }
}

pub(super) fn format_badges(badges: &[Badge]) -> String {
    if badges.is_empty() {
        return "none".to_string();
    }
    badges
        .iter()
        .map(|b| b.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Streak with its unit, pluralized.
pub(super) fn format_streak(streak: u32) -> String {
    if streak == 1 {
        "1 day".to_string()
    } else {
        format!("{streak} days")
    }
}

pub(super) fn format_summary(learner: &str, summary: &Summary) -> String {
    let mut lines = vec![
        format!("Learner:     {learner}"),
        format!(
            "Progress:    {}/{} units ({}%)",
            summary.completed, summary.total, summary.percent
        ),
        format!("XP:          {}", summary.xp),
        format!("Streak:      {}", format_streak(summary.streak)),
        format!("Badges:      {}", format_badges(&summary.badges)),
    ];
    if summary.certificate_eligible {
        lines.push("Certificate: ready (run `codetrail certificate`)".to_string());
    } else {
        lines.push(format!("Resume at:   {}", summary.resume));
    }
    lines.join("\n")
}

pub(super) fn format_completion(key: &str, completion: &Completion) -> String {
    let mut lines = vec![format!("Completed {key}")];

    let bonus = if completion.bonus_applied {
        " (incl. bonus)"
    } else {
        ""
    };
    lines.push(format!(
        "  +{} XP{bonus}, {} total",
        completion.xp_gained, completion.record.xp
    ));
    lines.push(format!(
        "  streak: {}",
        format_streak(completion.record.streak)
    ));
    for badge in &completion.new_badges {
        lines.push(format!("  badge earned: {badge}"));
    }
    match completion.next_unit {
        Some(next) => lines.push(format!("  next: {next}")),
        None => lines.push("  that was the last unit".to_string()),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::ProgressRecord;

    #[test]
    fn badges_list_or_none() {
        assert_eq!(format_badges(&[]), "none");
        assert_eq!(
            format_badges(&[Badge::HtmlNovice, Badge::CssStylist]),
            "HTML Novice, CSS Stylist"
        );
    }

    #[test]
    fn outcome_lines() {
        assert_eq!(
            format_outcome(&Outcome::Pass),
            "PASS  Great job! Output is correct."
        );
        assert_eq!(
            format_outcome(&Outcome::fail("Missing <h1> tag.")),
            "FAIL  Missing <h1> tag."
        );
    }

    #[test]
    fn completion_mentions_badges_and_next() {
        let mut record = ProgressRecord::new("css-syntax");
        record.xp = 125;
        record.streak = 2;
        let completion = Completion {
            record,
            xp_gained: 75,
            bonus_applied: true,
            new_badges: vec![Badge::HtmlNovice],
            next_unit: Some("css-syntax"),
        };

        let text = format_completion("html-lists", &completion);
        assert!(text.contains("+75 XP (incl. bonus), 125 total"));
        assert!(text.contains("streak: 2 days"));
        assert!(text.contains("badge earned: HTML Novice"));
        assert!(text.contains("next: css-syntax"));
    }

    #[test]
    fn summary_shows_resume_until_eligible() {
        let mut summary = Summary {
            completed: 1,
            total: 40,
            percent: 3,
            xp: 75,
            streak: 1,
            badges: vec![],
            resume: "html-headings",
            certificate_eligible: false,
        };
        let text = format_summary("kim", &summary);
        assert!(text.contains("1/40 units (3%)"));
        assert!(text.contains("Streak:      1 day"));
        assert!(text.contains("Resume at:   html-headings"));

        summary.certificate_eligible = true;
        assert!(format_summary("kim", &summary).contains("Certificate: ready"));
    }
}
