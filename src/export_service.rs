use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::log;

use crate::LogResult;
use crate::locale;
use crate::models::{ExportFormat, ReportKind};
use crate::models_api::export::{FixtureExport, MatchInfo, OpponentExport, TacticalReport, TacticalReportExport};
use crate::models_external::fixture::Fixture;
use crate::models_external::opponent::{OpponentProfile, RecentForm, TacticalPlan};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone)]
pub struct ClubInfo {
    pub name: String,
    pub home_venue: String,
    pub platform_name: String,
}

/// A finished report, ready to be handed to the client as a download.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFile {
    pub file_name: String,
    pub format: ExportFormat,
    pub body: String,
}

impl ReportFile {
    fn new(subject: &str, kind: ReportKind, format: ExportFormat, now: &DateTime<Utc>, body: String) -> ReportFile {
        let file_name = format!("{}_{}_{}.{}",
            underscore_whitespace(subject),
            kind.slug(),
            locale::iso_date(now),
            format.extension(),
        );
        ReportFile { file_name, format, body }
    }

    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// Every run of whitespace becomes a single `_`.
pub fn underscore_whitespace(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }
    result
}

/// The subject of a report, if there is a usable one.
pub fn subject_name(name: Option<&str>) -> Option<&str> {
    name.filter(|e| !e.trim().is_empty())
}

/// Empty text counts as missing.
fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|e| e.to_string())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn percent<T: ToString>(value: Option<T>) -> String {
    match or_na(value) {
        e if e == NOT_AVAILABLE => e,
        e => format!("{e}%"),
    }
}

struct ReportWriter {
    txt: String,
    width: usize,
}

impl ReportWriter {
    fn new(title: &str, kind: ReportKind) -> ReportWriter {
        let width = kind.rule_width();
        let mut writer = ReportWriter { txt: String::new(), width };
        writer.line(title);
        writer.rule('=');
        writer.blank();
        writer
    }

    fn line(&mut self, s: &str) {
        self.txt.push_str(s);
        self.txt.push('\n');
    }

    fn blank(&mut self) {
        self.txt.push('\n');
    }

    fn rule(&mut self, c: char) {
        let rule = c.to_string().repeat(self.width);
        self.line(&rule);
    }

    fn section(&mut self, header: &str) {
        self.line(header);
        self.rule('-');
    }

    fn bullets(&mut self, header: &str, items: Option<&Vec<String>>) {
        if let Some(items) = items.filter(|e| !e.is_empty()) {
            self.line(&format!("{header}:"));
            for item in items {
                self.line(&format!("  • {item}"));
            }
            self.blank();
        }
    }

    fn numbered(&mut self, header: &str, items: &[String]) {
        self.line(&format!("{header}:"));
        for (i, item) in items.iter().enumerate() {
            self.line(&format!("  {}. {item}", i + 1));
        }
        self.blank();
    }

    fn paragraph(&mut self, header: &str, text: Option<&String>) {
        if let Some(text) = text.filter(|e| !e.is_empty()) {
            self.line(&format!("{header}:"));
            self.line(&format!("  {text}"));
            self.blank();
        }
    }

    fn json(&mut self, value: &Value) {
        if let Some(pretty) = serde_json::to_string_pretty(value).ok_log("[EXPORT] Could not render JSON block") {
            self.line(&pretty);
            self.blank();
        }
    }

    fn finish(self) -> String {
        self.txt
    }
}

pub struct ExportService {
    club: ClubInfo,
}

impl ExportService {
    pub fn new(club: ClubInfo) -> ExportService {
        ExportService { club }
    }

    pub fn club(&self) -> &ClubInfo {
        &self.club
    }

    /// Report for an upcoming fixture. Without a fixture (or with a fixture
    /// lacking an opponent name) nothing is produced.
    pub fn export_fixture_analysis(
        &self,
        fixture: Option<&Fixture>,
        statistics: Option<&Value>,
        tactical_plan: Option<&TacticalPlan>,
        format: ExportFormat,
        now: DateTime<Utc>,
    ) -> Option<ReportFile> {
        let fixture = fixture?;
        let opponent = subject_name(Some(fixture.opponent_name.as_str()))?;
        let kind = ReportKind::FixtureAnalysis;

        let body = match format {
            ExportFormat::Json => {
                let data = FixtureExport {
                    match_info: MatchInfo {
                        opponent,
                        date: &fixture.date,
                        venue: if fixture.is_home { "Home" } else { "Away" },
                        competition: fixture.competition.as_deref(),
                    },
                    statistics,
                    tactical_plan,
                    export_date: locale::iso_timestamp(&now),
                };
                to_pretty_json(&data)?
            },
            ExportFormat::Text => self.fixture_text(fixture, opponent, statistics, tactical_plan, &now),
        };

        log::info!("[EXPORT] {} {} report for {}", kind.slug(), format.extension(), opponent);
        Some(ReportFile::new(opponent, kind, format, &now, body))
    }

    fn fixture_text(
        &self,
        fixture: &Fixture,
        opponent: &str,
        statistics: Option<&Value>,
        tactical_plan: Option<&TacticalPlan>,
        now: &DateTime<Utc>,
    ) -> String {
        let mut w = ReportWriter::new("TACTICAL ANALYSIS REPORT", ReportKind::FixtureAnalysis);
        w.line(&format!("Match: {} vs {}", self.club.name, opponent));
        w.line(&format!("Date: {}", or_na(Some(locale::pt_match_date(&fixture.date)))));
        if fixture.is_home {
            w.line(&format!("Venue: Home ({})", self.club.home_venue));
        } else {
            w.line("Venue: Away");
        }
        w.line(&format!("Competition: {}", or_na(fixture.competition.as_ref())));
        w.blank();

        if let Some(statistics) = statistics.and_then(read_profile) {
            w.section("OPPONENT STATISTICS");
            w.line(&format!("Team: {}", statistics.team_name.as_deref().unwrap_or(opponent)));
            w.line(&format!("Formation: {}", or_na(statistics.formation.as_ref())));
            w.line(&format!("Style: {}", or_na(statistics.playing_style.as_ref())));
            w.blank();

            if let Some(last) = &statistics.last_match {
                w.line("Last Match Performance:");
                w.line(&format!("  Result: {}", or_na(last.result.as_ref())));
                w.line(&format!("  Score: {}", or_na(last.score.as_ref())));
                w.line(&format!("  Goals: {}-{}", or_na(last.goals_scored.as_ref()), or_na(last.goals_conceded.as_ref())));
                w.line(&format!("  Possession: {}", percent(last.possession.as_ref())));
                w.line(&format!("  Shots: {} ({} on target)", or_na(last.shots.as_ref()), or_na(last.shots_on_target.as_ref())));
                w.blank();
            }

            w.bullets("Strengths", statistics.strengths.as_ref());
            w.bullets("Weaknesses", statistics.weaknesses.as_ref());
        }

        if let Some(plan) = tactical_plan {
            w.section("TACTICAL PLAN");
            w.line(&format!("Recommended Formation: {}", or_na(plan.recommended_formation.as_ref())));
            w.blank();
            if let Some(items) = plan.key_recommendations.as_ref().filter(|e| !e.is_empty()) {
                w.numbered("Key Recommendations", items);
            }
            w.paragraph("Defensive Approach", plan.defensive_approach.as_ref());
            w.paragraph("Attacking Approach", plan.attacking_approach.as_ref());
            w.paragraph("Set Pieces", plan.set_pieces.as_ref());
        }

        self.short_footer(&mut w, now);
        w.finish()
    }

    /// Report on a single opponent. An empty or missing name is a no-op.
    pub fn export_opponent_analysis(
        &self,
        opponent_name: Option<&str>,
        tactical_profile: Option<&Value>,
        recent_form: Option<&RecentForm>,
        advanced_statistics: Option<&Value>,
        format: ExportFormat,
        now: DateTime<Utc>,
    ) -> Option<ReportFile> {
        let opponent = subject_name(opponent_name)?;
        let kind = ReportKind::OpponentAnalysis;

        let body = match format {
            ExportFormat::Json => {
                let data = OpponentExport {
                    opponent,
                    tactical_profile,
                    recent_form,
                    advanced_statistics,
                    export_date: locale::iso_timestamp(&now),
                };
                to_pretty_json(&data)?
            },
            ExportFormat::Text => self.opponent_text(opponent, tactical_profile, recent_form, advanced_statistics, &now),
        };

        log::info!("[EXPORT] {} {} report for {}", kind.slug(), format.extension(), opponent);
        Some(ReportFile::new(opponent, kind, format, &now, body))
    }

    fn opponent_text(
        &self,
        opponent: &str,
        tactical_profile: Option<&Value>,
        recent_form: Option<&RecentForm>,
        advanced_statistics: Option<&Value>,
        now: &DateTime<Utc>,
    ) -> String {
        let mut w = ReportWriter::new("OPPONENT ANALYSIS REPORT", ReportKind::OpponentAnalysis);
        w.line(&format!("Team: {opponent}"));
        w.line(&format!("Analysis Date: {}", locale::pt_date(&now.with_timezone(&Local))));
        w.blank();

        if let Some(profile) = tactical_profile.and_then(read_profile) {
            w.section("TACTICAL PROFILE");
            w.line(&format!("Formation: {}", or_na(profile.formation.as_ref())));
            w.line(&format!("Playing Style: {}", or_na(profile.playing_style.as_ref())));
            w.line(&format!("Possession: {}", percent(profile.avg_possession.as_ref())));
            w.line(&format!("Goals per Game: {}", or_na(profile.avg_goals.as_ref())));
            w.blank();

            w.bullets("Strengths", profile.strengths.as_ref());
            w.bullets("Weaknesses", profile.weaknesses.as_ref());
        }

        if let Some(form) = recent_form.filter(|e| !e.recent_matches.is_empty()) {
            w.section("RECENT FORM");
            for (i, m) in form.recent_matches.iter().enumerate() {
                w.line(&format!("Match {}: {} ({}-{})",
                    i + 1,
                    or_na(m.result.as_ref()),
                    or_na(m.goals_scored.as_ref()),
                    or_na(m.goals_conceded.as_ref()),
                ));
            }
            w.blank();
        }

        if let Some(advanced) = advanced_statistics {
            w.section("ADVANCED STATISTICS");
            w.json(advanced);
        }

        self.short_footer(&mut w, now);
        w.finish()
    }

    /// Generic tactical report, wider layout. The report's opponent is the
    /// subject; without one nothing is produced.
    pub fn export_tactical_report(&self, report: &TacticalReport, format: ExportFormat, now: DateTime<Utc>) -> Option<ReportFile> {
        let opponent = subject_name(report.opponent.as_deref())?;
        let kind = ReportKind::TacticalReport;

        let body = match format {
            ExportFormat::Json => to_pretty_json(&TacticalReportExport {
                report,
                export_date: locale::iso_timestamp(&now),
            })?,
            ExportFormat::Text => self.tactical_report_text(opponent, report, &now),
        };

        log::info!("[EXPORT] {} {} report for {}", kind.slug(), format.extension(), opponent);
        Some(ReportFile::new(opponent, kind, format, &now, body))
    }

    fn tactical_report_text(&self, opponent: &str, report: &TacticalReport, now: &DateTime<Utc>) -> String {
        let mut w = ReportWriter::new("TACTICAL ANALYSIS REPORT", ReportKind::TacticalReport);
        w.line(&format!("Team: {opponent}"));
        w.line(&format!("Generated: {}", locale::pt_date_time(&now.with_timezone(&Local))));
        w.blank();

        if let Some(statistics) = &report.statistics {
            w.section("STATISTICS");
            w.json(statistics);
        }

        if let Some(plan) = &report.tactical_plan {
            w.section("TACTICAL PLAN");
            if let Some(formation) = plan.recommended_formation.as_ref().filter(|e| !e.is_empty()) {
                w.line(&format!("Recommended Formation: {formation}"));
                w.blank();
            }
            // A present but empty list still gets its header here.
            if let Some(items) = &plan.key_recommendations {
                w.numbered("Key Recommendations", items);
            }
            w.paragraph("Defensive Approach", plan.defensive_approach.as_ref());
            w.paragraph("Attacking Approach", plan.attacking_approach.as_ref());
        }

        if let Some(matches) = report.recent_matches.as_ref().filter(|e| !e.is_empty()) {
            w.section("RECENT MATCHES");
            for (i, m) in matches.iter().enumerate() {
                w.line(&format!("Match {}: {} - {}", i + 1, or_na(m.result.as_ref()), or_na(m.score.as_ref())));
            }
            w.blank();
        }

        w.blank();
        w.rule('=');
        w.line(&format!("{} - {}", self.club.name, self.club.platform_name));
        w.finish()
    }

    fn short_footer(&self, w: &mut ReportWriter, now: &DateTime<Utc>) {
        w.blank();
        w.rule('-');
        w.line(&format!("Report generated: {}", locale::pt_date_time(&now.with_timezone(&Local))));
        w.line(&format!("{} {}", self.club.name, self.club.platform_name));
    }
}

/// Typed view of a statistics document for the text layouts. The JSON
/// exports use the document as received.
fn read_profile(value: &Value) -> Option<OpponentProfile> {
    OpponentProfile::deserialize(value).ok_log("[EXPORT] Unreadable opponent statistics")
}

fn to_pretty_json<T: Serialize>(data: &T) -> Option<String> {
    serde_json::to_string_pretty(data).ok_log("[EXPORT] Could not serialize report")
}
