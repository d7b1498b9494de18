//! iCalendar exporter for datasets

use super::context::ExportContext;
use super::exporter::Exporter;
use crate::dataset::YearlyDataset;
use crate::error::Result;
use crate::types::PresetKey;
use chrono::NaiveDate;
use md5::{Digest, Md5};

/// iCalendar exporter
///
/// Every (date, label) pair becomes an all-day public, transparent event.
pub struct IcsExporter;

impl IcsExporter {
    /// Create a new iCalendar exporter
    pub fn new() -> Self {
        Self
    }

    /// Render the VCALENDAR header
    fn render_header(&self, ctx: &ExportContext) -> String {
        let mut header = String::new();
        header.push_str("BEGIN:VCALENDAR\n");
        header.push_str("VERSION:2.0\n");
        header.push_str(&format!("PRODID:{}\n", ctx.calendar.product_id));
        header.push_str(&format!("X-WR-CALNAME:{}\n", ctx.calendar_name));
        header.push_str(&format!("X-WR-TIMEZONE:{}\n", ctx.calendar.timezone));
        header.push_str(&format!("X-WR-CALDESC:{}\n", ctx.calendar.description));
        header
    }

    /// Render every event of a dataset
    fn render_events(&self, output: &mut String, ctx: &ExportContext, dataset: &YearlyDataset) {
        let dtstamp = ctx.stamp.to_ics();
        for (date, label) in dataset.pairs() {
            let day = ics_date(date);
            output.push_str("BEGIN:VEVENT\n");
            output.push_str(&format!("DTSTART;VALUE=DATE:{}\n", day));
            output.push_str(&format!("DTSTAMP:{}\n", dtstamp));
            output.push_str(&format!("UID:{}\n", event_uid(date, label)));
            output.push_str(&format!("SUMMARY:{}\n", label));
            output.push_str("CLASS:PUBLIC\n");
            output.push_str("TRANSP:TRANSPARENT\n");
            output.push_str("END:VEVENT\n");
        }
    }
}

impl Default for IcsExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for IcsExporter {
    fn export_year(&self, ctx: &ExportContext, dataset: &YearlyDataset) -> Result<Vec<u8>> {
        let mut output = self.render_header(ctx);
        self.render_events(&mut output, ctx, dataset);
        output.push_str("END:VCALENDAR\n");
        Ok(output.into_bytes())
    }

    fn export_all(
        &self,
        ctx: &ExportContext,
        presets: &[(PresetKey, &YearlyDataset)],
    ) -> Result<Option<Vec<u8>>> {
        let mut output = self.render_header(ctx);
        for (_, dataset) in presets {
            self.render_events(&mut output, ctx, dataset);
        }
        output.push_str("END:VCALENDAR\n");
        Ok(Some(output.into_bytes()))
    }

    fn format_name(&self) -> &str {
        "ics"
    }

    fn file_extension(&self) -> &str {
        "ics"
    }
}

/// iCalendar DATE value, e.g. `20240101`
pub fn ics_date(date: &NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Stable event UID: the date plus the MD5 of the label
///
/// Calendar clients match updates by UID, so the same pair must map to the
/// same value in every run.
pub fn event_uid(date: &NaiveDate, label: &str) -> String {
    let hash = Md5::digest(label.as_bytes());
    format!("{}-{}", ics_date(date), hex::encode(hash))
}
