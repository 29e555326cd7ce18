//! Text output formatters for an evaluation: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::engine::Evaluation;
use crate::error::{GrowthIntelError, Result};
use crate::output::report::{Report, NOT_AVAILABLE};
use crate::scoring::ReadinessBand;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering one evaluation pass together with its report header
pub trait OutputFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation, report: &Report) -> Result<String>;
}

/// Console formatter with colored metric cards
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the text formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Future Growth Intelligence Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            color: #1e293b;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8fafc;
        }
        .card {
            background: white;
            padding: 20px;
            border-radius: 15px;
            box-shadow: 0 4px 20px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        .metric {
            background: linear-gradient(135deg,#2563eb,#7c3aed);
            padding: 25px;
            border-radius: 18px;
            text-align: center;
            color: white;
            font-size: 22px;
            font-weight: bold;
        }
        .metric span { font-size: 40px; }
        .strong { color: #15803d; }
        .moderate { color: #b45309; }
        .gap { color: #b91c1c; }
        table { width: 100%; border-collapse: collapse; }
        td { padding: 6px 0; border-bottom: 1px solid #e2e8f0; }
    </style>
    {% endif %}
</head>
<body>
    <h1>FUTURE GROWTH INTELLIGENCE SYSTEM</h1>
    <p>User ID: {{ user_id }} | Date: {{ generated_at }}</p>

    <div class="card">
        <h2>Lifestyle Growth Intelligence</h2>
        <div class="metric">
            Lifestyle Growth Probability<br><span>{{ lifestyle_percent }}%</span>
        </div>
    </div>

    <div class="card">
        <h2>Career Readiness Analyzer</h2>
        {% if has_career %}
        <p>Dream profession: {{ dream_profession }}</p>
        <p><strong>Career Achievement Probability: {{ career_percent }}</strong></p>
        <p class="{{ career_class }}">{{ career_message }}</p>
        {% else %}
        <p>Career Readiness: {{ career_percent }}</p>
        {% endif %}
    </div>

    <div class="card">
        <h2>Real Skill Gap Engine</h2>
        {% if has_skill_gap %}
        <p>Target field: {{ target_profession }}</p>
        <p><strong>Skill Match Percentage: {{ skill_percent }}</strong></p>
        <p>{{ skill_feedback }}</p>
        {% else %}
        <p>Skill Match: {{ skill_percent }}</p>
        {% endif %}
    </div>

    {% if has_ranking %}
    <div class="card">
        <h2>Intelligent Profession Ranking</h2>
        <table>
            {% for row in ranking_rows %}
            <tr><td>{{ row.title }}</td><td>{{ row.percent }}% match</td></tr>
            {% endfor %}
        </table>
    </div>
    {% endif %}
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    user_id: String,
    generated_at: String,
    lifestyle_percent: u8,
    has_career: bool,
    dream_profession: String,
    career_percent: String,
    career_class: String,
    career_message: String,
    has_skill_gap: bool,
    target_profession: String,
    skill_percent: String,
    skill_feedback: String,
    has_ranking: bool,
    ranking_rows: Vec<HtmlRankingRow>,
}

#[derive(Debug, Clone)]
struct HtmlRankingRow {
    title: String,
    percent: u8,
}

fn percent_or_na(value: Option<u8>) -> String {
    value
        .map(|v| format!("{}%", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Fixed-width bar for a value out of `max`.
/// Cards without a readiness band.
const METRIC_COLOR: Color = Color::Blue;

fn text_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max <= 0.0 {
        0
    } else {
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Magenta,
            _ => Color::Cyan,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn band_color(band: ReadinessBand) -> Color {
        match band {
            ReadinessBand::Strong => Color::Green,
            ReadinessBand::Moderate => Color::Yellow,
            ReadinessBand::GapDetected => Color::Red,
        }
    }

    /// Only career readiness has bands, and those come from the unrounded
    /// score, so callers pick the color.
    fn format_metric_card(&self, label: &str, percent: u8, color: Color) -> String {
        let value = format!("{}%", percent);
        let value = if self.use_colors {
            value.color(color).bold().to_string()
        } else {
            value
        };
        format!(
            "{}: {} {}\n",
            label,
            value,
            text_bar(f64::from(percent), 100.0, 20)
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("FUTURE GROWTH INTELLIGENCE SYSTEM", 1));
        output.push_str("Strategic Lifestyle • Career • Skill Intelligence Engine\n");
        let user = if report.user_id.is_empty() {
            "-"
        } else {
            report.user_id.as_str()
        };
        output.push_str(&format!("User ID: {} | Date: {}\n", user, report.timestamp()));

        // Lifestyle
        output.push_str(&self.format_header("Lifestyle Growth Intelligence", 2));
        output.push_str(&self.format_metric_card(
            "Lifestyle Growth Probability",
            evaluation.lifestyle.percent,
            METRIC_COLOR,
        ));

        if self.detailed {
            output.push_str(&self.format_header("Growth Balance Overview", 3));
            for (label, value) in evaluation.lifestyle.inputs.balance_profile() {
                output.push_str(&format!(
                    "  {:<12} {} {}/10\n",
                    label,
                    text_bar(f64::from(value), 10.0, 10),
                    value
                ));
            }

            output.push_str(&self.format_header("Growth Distribution", 3));
            for (label, share) in evaluation.lifestyle.inputs.distribution() {
                output.push_str(&format!("  {:<12} {:>5.1}%\n", label, share));
            }
        }

        // Career
        output.push_str(&self.format_header("Career Readiness Analyzer", 2));
        match &evaluation.career {
            Some(career) => {
                output.push_str(&format!("Dream Profession: {}\n", career.dream_profession));
                output.push_str(&self.format_metric_card(
                    "Career Achievement Probability",
                    career.percent,
                    Self::band_color(career.band),
                ));
                output.push_str(&format!(
                    "{}\n",
                    self.colorize(career.band.message(), Self::band_color(career.band))
                ));
            }
            None => {
                output.push_str(&format!(
                    "Career Readiness: {} (no dream profession given)\n",
                    NOT_AVAILABLE
                ));
            }
        }

        // Skill gap
        output.push_str(&self.format_header("Real Skill Gap Engine", 2));
        match &evaluation.skill_gap {
            Some(gap) => {
                output.push_str(&format!("Target Field: {}\n", gap.profession));
                output.push_str(&self.format_metric_card(
                    "Skill Match Percentage",
                    gap.match_percent,
                    METRIC_COLOR,
                ));
                let color = if gap.is_complete() {
                    Color::Green
                } else {
                    Color::Yellow
                };
                output.push_str(&format!("{}\n", self.colorize(&gap.feedback(), color)));
            }
            None => {
                output.push_str(&format!("Skill Match: {} (no skills given)\n", NOT_AVAILABLE));
            }
        }

        // Ranking
        if let Some(ranking) = &evaluation.ranking {
            output.push_str(&self.format_header("Intelligent Profession Ranking", 2));
            for (i, entry) in ranking.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {:<20} {:>3}% match {}\n",
                    i + 1,
                    entry.profession.title(),
                    entry.percent,
                    text_bar(f64::from(entry.percent), 100.0, 10)
                ));
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation, report: &Report) -> Result<String> {
        let value = serde_json::json!({
            "report": report,
            "evaluation": evaluation,
        });
        if self.pretty {
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(serde_json::to_string(&value)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Future Growth Intelligence Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**User ID:** {} | **Date:** {}\n\n",
                report.user_id,
                report.timestamp()
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Lifestyle Score | {}% |\n", report.lifestyle_score));
        output.push_str(&format!(
            "| Career Readiness | {} |\n",
            percent_or_na(report.career_readiness)
        ));
        output.push_str(&format!(
            "| Skill Match | {} |\n\n",
            percent_or_na(report.skill_match)
        ));

        output.push_str("## Lifestyle Balance\n\n");
        output.push_str("| Axis | Value |\n");
        output.push_str("|------|-------|\n");
        for (label, value) in evaluation.lifestyle.inputs.balance_profile() {
            output.push_str(&format!("| {} | {}/10 |\n", label, value));
        }
        output.push('\n');

        if let Some(career) = &evaluation.career {
            output.push_str("## Career Readiness\n\n");
            output.push_str(&format!("**Dream Profession:** {}\n\n", career.dream_profession));
            output.push_str(&format!("**Band:** {} ({})\n\n", career.band, career.band.message()));
        }

        if let Some(gap) = &evaluation.skill_gap {
            output.push_str("## Skill Gap\n\n");
            output.push_str(&format!("**Target Field:** {}\n\n", gap.profession));
            if gap.is_complete() {
                output.push_str(&format!("{}\n\n", gap.feedback()));
            } else {
                output.push_str("**Missing Skills:**\n\n");
                for skill in &gap.missing {
                    output.push_str(&format!("- {}\n", skill));
                }
                output.push('\n');
            }
        }

        if let Some(ranking) = &evaluation.ranking {
            output.push_str("## Profession Ranking\n\n");
            for (i, entry) in ranking.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {}: {}% match\n",
                    i + 1,
                    entry.profession,
                    entry.percent
                ));
            }
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, evaluation: &Evaluation, report: &Report) -> HtmlTemplate {
        let (career_class, career_message, dream_profession) = match &evaluation.career {
            Some(career) => {
                let class = match career.band {
                    ReadinessBand::Strong => "strong",
                    ReadinessBand::Moderate => "moderate",
                    ReadinessBand::GapDetected => "gap",
                };
                (
                    class.to_string(),
                    career.band.message().to_string(),
                    career.dream_profession.clone(),
                )
            }
            None => (String::new(), String::new(), String::new()),
        };

        let ranking_rows = evaluation
            .ranking
            .as_ref()
            .map(|ranking| {
                ranking
                    .iter()
                    .map(|entry| HtmlRankingRow {
                        title: entry.profession.title().to_string(),
                        percent: entry.percent,
                    })
                    .collect()
            })
            .unwrap_or_default();

        HtmlTemplate {
            include_styles: self.include_styles,
            user_id: report.user_id.clone(),
            generated_at: report.timestamp(),
            lifestyle_percent: report.lifestyle_score,
            has_career: evaluation.career.is_some(),
            dream_profession,
            career_percent: percent_or_na(report.career_readiness),
            career_class,
            career_message,
            has_skill_gap: evaluation.skill_gap.is_some(),
            target_profession: evaluation
                .skill_gap
                .as_ref()
                .map(|gap| gap.profession.title().to_string())
                .unwrap_or_default(),
            skill_percent: percent_or_na(report.skill_match),
            skill_feedback: evaluation
                .skill_gap
                .as_ref()
                .map(|gap| gap.feedback())
                .unwrap_or_default(),
            has_ranking: evaluation.ranking.is_some(),
            ranking_rows,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation, report: &Report) -> Result<String> {
        let template_data = self.create_template_data(evaluation, report);
        template_data
            .render()
            .map_err(|e| GrowthIntelError::OutputFormatting(e.to_string()))
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate(
        &self,
        evaluation: &Evaluation,
        report: &Report,
        format: OutputFormat,
    ) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        formatter.format_evaluation(evaluation, report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, user_id: &str) -> String {
    let base_name = if user_id.trim().is_empty() {
        "growth"
    } else {
        user_id.trim()
    };

    match format {
        OutputFormat::Console => format!("{}_evaluation.txt", base_name),
        OutputFormat::Json => format!("{}_evaluation.json", base_name),
        OutputFormat::Markdown => format!("{}_evaluation.md", base_name),
        OutputFormat::Html => format!("{}_evaluation.html", base_name),
    }
}
