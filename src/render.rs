//! Output rendering for probe results.
//!
//! The prober only produces records; everything that turns them into text
//! lives here.

use std::io::{self, Write};

use serde::Serialize;

use crate::camera::{known, DeviceIdentity, ProbeEvent, ProbeOutcome, ProbeRecord};

/// Line printed before an index is opened.
pub fn progress_line(index: u32) -> String {
    format!("VideoCapture({}) ...", index)
}

/// Line printed for an opened device.
pub fn report_line(index: u32, identity: DeviceIdentity) -> String {
    format!("camera id {}: {}", index, identity)
}

/// Write the text line(s) for one live probe event.
pub fn write_event<W: Write>(out: &mut W, event: &ProbeEvent<'_>) -> io::Result<()> {
    match event {
        ProbeEvent::Attempt(index) => writeln!(out, "{}", progress_line(*index)),
        ProbeEvent::Finished(record) => match record.outcome {
            ProbeOutcome::Reported(identity) => {
                writeln!(out, "{}", report_line(record.index, identity))
            }
            ProbeOutcome::Skipped | ProbeOutcome::Failed(_) => Ok(()),
        },
    }
}

/// Full text transcript for a finished probe.
pub fn render_text(records: &[ProbeRecord]) -> String {
    let mut lines = Vec::new();
    for record in records {
        lines.push(progress_line(record.index));
        if let Some(identity) = record.outcome.identity() {
            lines.push(report_line(record.index, identity));
        }
    }
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Reported,
    Skipped,
    Failed,
}

#[derive(Debug, Serialize)]
struct JsonRecord {
    index: u32,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    known_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stereo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&ProbeRecord> for JsonRecord {
    fn from(record: &ProbeRecord) -> Self {
        let mut json = JsonRecord {
            index: record.index,
            status: Status::Skipped,
            vendor_id: None,
            product_id: None,
            known_name: None,
            stereo: None,
            error: None,
        };
        match &record.outcome {
            ProbeOutcome::Reported(identity) => {
                json.status = Status::Reported;
                json.vendor_id = Some(format!("0x{:04x}", identity.vendor_id));
                json.product_id = Some(format!("0x{:04x}", identity.product_id));
                if let Some(device) = known::lookup(*identity) {
                    json.known_name = Some(device.name);
                    json.stereo = Some(device.stereo);
                }
            }
            ProbeOutcome::Skipped => {}
            ProbeOutcome::Failed(e) => {
                json.status = Status::Failed;
                json.error = Some(e.to_string());
            }
        }
        json
    }
}

/// Probe results as a pretty-printed JSON array.
pub fn render_json(records: &[ProbeRecord]) -> serde_json::Result<String> {
    let json: Vec<JsonRecord> = records.iter().map(JsonRecord::from).collect();
    serde_json::to_string_pretty(&json)
}
