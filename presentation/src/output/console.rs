//! Console output formatter for flow sessions

use chrono::TimeDelta;
use colored::Colorize;
use flow_application::{ProjectSummary, SessionStatusOutput, SessionsReport};
use flow_domain::{Session, TimeRange};

/// Formats sessions, projects and reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format_started(session: &Session) -> String {
        format!(
            "{} {}{} at {}",
            "Started flowing on".green().bold(),
            session.project.cyan().bold(),
            Self::tag_suffix(&session.tags),
            session.formatted_start_time()
        )
    }

    pub fn format_stopped(session: &Session) -> String {
        format!(
            "{} {} after {}",
            "Stopped session on".yellow().bold(),
            session.project.cyan().bold(),
            format_duration(session.duration()).bold()
        )
    }

    pub fn format_status(status: &SessionStatusOutput) -> String {
        match status {
            SessionStatusOutput::Idle => {
                format!("{}", "No session recorded yet. Run `flow start <project>`.".dimmed())
            }
            SessionStatusOutput::Flowing { session, elapsed } => format!(
                "{} {}{} for {} (since {})",
                session.status().to_string().green().bold(),
                session.project.cyan().bold(),
                Self::tag_suffix(&session.tags),
                format_duration(*elapsed).bold(),
                session.formatted_start_time()
            ),
            SessionStatusOutput::Ended { session } => format!(
                "{} last session on {}{} lasted {} ({} -> {})",
                session.status().to_string().yellow().bold(),
                session.project.cyan().bold(),
                Self::tag_suffix(&session.tags),
                format_duration(session.duration()).bold(),
                session.formatted_start_time(),
                session.formatted_end_time()
            ),
        }
    }

    pub fn format_projects(projects: &[ProjectSummary]) -> String {
        if projects.is_empty() {
            return format!("{}", "No projects yet.".dimmed());
        }

        let mut output = String::new();
        output.push_str(&Self::header("Projects"));
        for project in projects {
            output.push_str(&format!("  {}", project.name.cyan().bold()));
            if !project.tags.is_empty() {
                output.push_str(&format!("  {}", project.tags.join(", ").dimmed()));
            }
            output.push('\n');
        }
        output
    }

    pub fn format_report(report: &SessionsReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!(
            "Report {}",
            Self::describe_range(&report.range)
        )));

        if report.is_empty() {
            output.push_str(&format!("  {}\n", "No sessions in this range.".dimmed()));
            return output;
        }

        output.push_str(&Self::section_header("Sessions"));
        for session in &report.sessions {
            output.push_str(&format!(
                "  {}  {:<19}  {:>11}  {}{}\n",
                session.formatted_start_time(),
                session.formatted_end_time(),
                format_duration(session.duration()),
                session.project.cyan(),
                Self::tag_suffix(&session.tags)
            ));
        }

        output.push_str(&Self::section_header("Projects"));
        for project in &report.projects {
            output.push_str(&format!(
                "  {}  {} ({} {})\n",
                project.name.cyan().bold(),
                format_duration(project.total).bold(),
                project.session_count,
                if project.session_count == 1 {
                    "session"
                } else {
                    "sessions"
                }
            ));
            for tag in &project.tags {
                output.push_str(&format!(
                    "    {} {}\n",
                    format!("#{}", tag.name).dimmed(),
                    format_duration(tag.total)
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Total:".bold(),
            format_duration(report.total).bold()
        ));
        output
    }

    fn tag_suffix(tags: &[String]) -> String {
        if tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", tags.join(", "))
        }
    }

    fn describe_range(range: &TimeRange) -> String {
        let fmt = |instant: chrono::DateTime<chrono::Utc>| {
            instant
                .with_timezone(&chrono::Local)
                .format(flow_domain::DATE_TIME_FORMAT)
                .to_string()
        };
        match (range.since, range.until) {
            (None, None) => "(all time)".to_string(),
            (Some(since), None) => format!("(since {})", fmt(since)),
            (None, Some(until)) => format!("(until {})", fmt(until)),
            (Some(since), Some(until)) => format!("({} -> {})", fmt(since), fmt(until)),
        }
    }

    fn header(title: &str) -> String {
        format!("{}\n", title.bold().underline())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", title.yellow().bold())
    }
}

/// Render a duration as `1h 02m 03s`, `4m 05s` or `7s`.
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}{}h {:02}m {:02}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m {:02}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use flow_application::{ProjectReport, TagReport};

    fn plain() {
        colored::control::set_override(false);
    }

    fn session(id: &str, project: &str, tags: &[&str]) -> Session {
        Session::start(
            id,
            Utc.with_ymd_and_hms(2024, 4, 17, 19, 0, 0).unwrap(),
            project,
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::zero()), "0s");
        assert_eq!(format_duration(TimeDelta::seconds(7)), "7s");
        assert_eq!(format_duration(TimeDelta::seconds(245)), "4m 05s");
        assert_eq!(format_duration(TimeDelta::seconds(3723)), "1h 02m 03s");
        assert_eq!(format_duration(TimeDelta::hours(27)), "27h 00m 00s");
        assert_eq!(format_duration(TimeDelta::seconds(-65)), "-1m 05s");
    }

    #[test]
    fn test_format_started_includes_project_and_tags() {
        plain();
        let output = ConsoleFormatter::format_started(&session("1", "Flow", &["tests", "cli"]));
        assert!(output.starts_with("Started flowing on Flow [tests, cli] at "));
    }

    #[test]
    fn test_format_stopped_includes_duration() {
        plain();
        let start = Utc.with_ymd_and_hms(2024, 4, 17, 19, 0, 0).unwrap();
        let ended = session("1", "Flow", &[]).ended_at(start + TimeDelta::seconds(3723));
        assert_eq!(
            ConsoleFormatter::format_stopped(&ended),
            "Stopped session on Flow after 1h 02m 03s"
        );
    }

    #[test]
    fn test_format_status_variants() {
        plain();
        assert!(ConsoleFormatter::format_status(&SessionStatusOutput::Idle).contains("No session"));

        let flowing = SessionStatusOutput::Flowing {
            session: session("1", "Flow", &["tests"]),
            elapsed: TimeDelta::minutes(5),
        };
        let output = ConsoleFormatter::format_status(&flowing);
        assert!(output.starts_with("FLOWING Flow [tests] for 5m 00s"));

        let start = Utc.with_ymd_and_hms(2024, 4, 17, 19, 0, 0).unwrap();
        let ended = SessionStatusOutput::Ended {
            session: session("1", "Flow", &[]).ended_at(start + TimeDelta::hours(1)),
        };
        let output = ConsoleFormatter::format_status(&ended);
        assert!(output.starts_with("ENDED last session on Flow lasted 1h 00m 00s"));
    }

    #[test]
    fn test_format_projects() {
        plain();
        let output = ConsoleFormatter::format_projects(&[
            ProjectSummary {
                name: "Flow".to_string(),
                tags: vec!["tests".to_string(), "integration".to_string()],
            },
            ProjectSummary {
                name: "MyTodo".to_string(),
                tags: vec![],
            },
        ]);
        assert!(output.contains("  Flow  tests, integration\n"));
        assert!(output.contains("  MyTodo\n"));

        assert_eq!(ConsoleFormatter::format_projects(&[]), "No projects yet.");
    }

    #[test]
    fn test_format_report() {
        plain();
        let start = Utc.with_ymd_and_hms(2024, 4, 17, 19, 0, 0).unwrap();
        let report = SessionsReport {
            range: TimeRange::unbounded(),
            sessions: vec![session("1", "Flow", &["tests"]).ended_at(start + TimeDelta::hours(2))],
            projects: vec![ProjectReport {
                name: "Flow".to_string(),
                session_count: 1,
                total: TimeDelta::hours(2),
                tags: vec![TagReport {
                    name: "tests".to_string(),
                    total: TimeDelta::hours(2),
                }],
            }],
            total: TimeDelta::hours(2),
        };

        let output = ConsoleFormatter::format_report(&report);
        assert!(output.starts_with("Report (all time)\n"));
        assert!(output.contains("  Flow  2h 00m 00s (1 session)\n"));
        assert!(output.contains("    #tests 2h 00m 00s\n"));
        assert!(output.contains("Total: 2h 00m 00s"));
    }

    #[test]
    fn test_format_empty_report() {
        plain();
        let report = SessionsReport {
            range: TimeRange::unbounded(),
            sessions: vec![],
            projects: vec![],
            total: TimeDelta::zero(),
        };
        assert!(ConsoleFormatter::format_report(&report).contains("No sessions in this range."));
    }
}
