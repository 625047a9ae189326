use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use skilltrack_core::{
    AssessmentState, FragmentReport, PointSummary, Repair, TextField, TitleCatalog, TitleResolver,
    encode,
};

/// Decoded assessment plus everything derived from it.
#[derive(Debug, Serialize)]
pub struct StateReport {
    pub state: AssessmentState,
    pub fragment: String,
    pub eligible_titles: Vec<String>,
    pub summary: PointSummary,
}

impl StateReport {
    pub fn new(state: AssessmentState, catalog: &TitleCatalog) -> Self {
        Self {
            fragment: encode(&state),
            eligible_titles: catalog.eligible_titles(&state.milestone_by_track),
            summary: catalog.summarize(&state.milestone_by_track),
            state,
        }
    }
}

/// Result of validating a fragment without adopting it.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub input: String,
    /// Input has the digits-then-two-text-fields layout.
    pub shape_matches: bool,
    /// Input re-encodes to itself.
    pub canonical: bool,
    /// `None` for empty input.
    pub decode: Option<FragmentReport>,
    pub normalized: Option<String>,
}

pub fn generate_json_report<T: Serialize>(out: &mut dyn Write, report: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_state_console(out: &mut dyn Write, report: &StateReport) -> Result<()> {
    let state = &report.state;
    writeln!(out, "{}", "📋 Assessment".bright_cyan().bold())?;
    writeln!(out, "{}", "=============".cyan())?;
    writeln!(out, "Name:  {}", display_text(&state.name))?;
    writeln!(out, "Title: {}", display_text(&state.title))?;
    writeln!(out)?;

    for (track, milestone) in state.milestone_by_track.iter() {
        let level = milestone.get();
        let bar = format!(
            "{}{}",
            "●".repeat(usize::from(level)),
            "○".repeat(usize::from(5 - level))
        );
        let line = format!("{:<26} {level} {bar}", track.display_name());
        if track == state.focused_track {
            writeln!(out, "▶ {}", line.bold())?;
        } else if level == 0 {
            writeln!(out, "  {}", line.dimmed())?;
        } else {
            writeln!(out, "  {line}")?;
        }
    }
    writeln!(out)?;
    write_summary(out, &report.summary)?;
    writeln!(out, "Fragment: #{}", report.fragment)?;
    Ok(())
}

pub fn generate_titles_console(out: &mut dyn Write, report: &StateReport) -> Result<()> {
    writeln!(out, "{}", "🏷️  Eligible titles".bright_cyan().bold())?;
    writeln!(out, "{}", "===================".cyan())?;
    if report.eligible_titles.is_empty() {
        writeln!(out, "{}", "No title is eligible".yellow())?;
    }
    for title in &report.eligible_titles {
        if *title == report.state.title {
            writeln!(out, "• {} {}", title.green().bold(), "(current)".green())?;
        } else {
            writeln!(out, "• {title}")?;
        }
    }
    writeln!(out)?;
    write_summary(out, &report.summary)
}

pub fn generate_check_console(out: &mut dyn Write, report: &CheckReport) -> Result<()> {
    let Some(decode) = &report.decode else {
        writeln!(out, "{}", "∅ Empty fragment: nothing to decode".yellow())?;
        return Ok(());
    };

    if report.canonical {
        writeln!(out, "{}", "✅ Canonical fragment".green().bold())?;
    } else {
        writeln!(out, "{}", "⚠️  Fragment needs repair".yellow().bold())?;
    }
    writeln!(
        out,
        "Fields: {} | Layout: {}",
        decode.field_count,
        if report.shape_matches {
            "ok".green()
        } else {
            "irregular".red()
        }
    )?;
    for repair in &decode.repairs {
        writeln!(out, "  • {}", describe_repair(repair))?;
    }
    if let Some(normalized) = &report.normalized
        && !report.canonical
    {
        writeln!(out, "Normalized: #{normalized}")?;
    }
    Ok(())
}

fn write_summary(out: &mut dyn Write, summary: &PointSummary) -> Result<()> {
    writeln!(out, "{}", "⚡ Points".bright_yellow().bold())?;
    for (category, points) in &summary.by_category {
        writeln!(out, "  {:<14} {points}", category.label())?;
    }
    writeln!(out, "  {:<14} {}", "Total", summary.total.to_string().bold())?;
    match summary.points_to_next {
        Some(next) => writeln!(out, "  {next} to next title")?,
        None => writeln!(out, "  Top title reached")?,
    }
    Ok(())
}

fn display_text(text: &str) -> String {
    if text.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        text.to_string()
    }
}

const fn field_label(field: TextField) -> &'static str {
    match field {
        TextField::Name => "name",
        TextField::Title => "title",
    }
}

fn describe_repair(repair: &Repair) -> String {
    match repair {
        Repair::Milestone { track, raw, value } => match raw {
            Some(raw) => format!("{track}: '{raw}' read as {value}"),
            None => format!("{track}: missing, read as {value}"),
        },
        Repair::MissingText { field } => format!("{}: missing, read as empty", field_label(*field)),
        Repair::Unescaped { field, raw } => {
            format!("{}: '{raw}' is not canonically escaped", field_label(*field))
        }
        Repair::ExtraFields { count } => format!("{count} trailing field(s) ignored"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltrack_core::{Track, inspect};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn state_console_lists_every_track_and_fragment() {
        let report = StateReport::new(AssessmentState::illustrative(), TitleCatalog::bundled());
        let text = render(|out| generate_state_console(out, &report));
        for track in Track::ALL {
            assert!(text.contains(track.display_name()));
        }
        assert!(text.contains("Name:  Don Norman"));
        assert!(text.contains("▶ UX Leadership"));
        assert!(text.contains(&format!("Fragment: #{}", report.fragment)));
        assert!(text.contains("18 to next title"));
    }

    #[test]
    fn titles_console_marks_current() {
        let mut state = AssessmentState::illustrative();
        state.title = "Design Manager".to_string();
        let report = StateReport::new(state, TitleCatalog::bundled());
        let text = render(|out| generate_titles_console(out, &report));
        assert!(text.contains("• Lead Designer\n"));
        assert!(text.contains("• Design Manager (current)"));
    }

    #[test]
    fn check_console_explains_repairs() {
        let decode = inspect("1,x");
        let report = CheckReport {
            input: "1,x".to_string(),
            shape_matches: false,
            canonical: false,
            decode,
            normalized: Some("1,0".to_string()),
        };
        let text = render(|out| generate_check_console(out, &report));
        assert!(text.contains("Fragment needs repair"));
        assert!(text.contains("'x' read as 0"));
        assert!(text.contains("name: missing"));
        assert!(text.contains("Normalized: #1,0"));
    }

    #[test]
    fn json_report_is_parseable() {
        let report = StateReport::new(AssessmentState::empty(), TitleCatalog::bundled());
        let text = render(|out| generate_json_report(out, &report));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["summary"]["total"], 0);
        assert_eq!(value["eligible_titles"][0], "Junior Designer");
        assert_eq!(value["state"]["milestone_by_track"]["AGILE"], 0);
    }
}
