//! Subcommand handlers for scan, list and config actions.

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::Path;

use thiserror::Error;

use super::args::ConfigAction;
use crate::camera::{known, CameraBackend, ProbeRecord, Prober, UvcBackend, UvcDeviceInfo};
use crate::config::{Config, OutputFormat};
use crate::indices::CandidateIndices;
use crate::render;

/// Errors that can occur while writing scan output.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Probe `indices` through `backend` and write the results to `out`.
///
/// Text output is written live, one line per event, and the first write error
/// stops the scan. JSON output is written once the whole probe has finished.
pub fn scan<B, W>(
    backend: B,
    indices: &CandidateIndices,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<ProbeRecord>, ScanError>
where
    B: CameraBackend,
    W: Write,
{
    let prober = Prober::new(backend);

    match format {
        OutputFormat::Text => {
            let mut write_error = None;
            let records = prober.probe_with(indices, |event| {
                match render::write_event(out, &event).and_then(|_| out.flush()) {
                    Ok(()) => ControlFlow::Continue(()),
                    Err(e) => {
                        write_error = Some(e);
                        ControlFlow::Break(())
                    }
                }
            });
            match write_error {
                Some(e) => Err(e.into()),
                None => Ok(records),
            }
        }
        OutputFormat::Json => {
            let records = prober.probe(indices);
            writeln!(out, "{}", render::render_json(&records)?)?;
            Ok(records)
        }
    }
}

/// One `list` line for an enumerated device.
fn describe_device(device: &UvcDeviceInfo) -> String {
    match known::lookup(device.identity) {
        Some(model) if model.stereo => format!("  {} {} (stereo)", device, model.name),
        Some(model) => format!("  {} {}", device, model.name),
        None => format!("  {}", device),
    }
}

/// List attached UVC cameras and print them to stdout.
pub fn list_cameras(backend: &UvcBackend) {
    match backend.enumerate() {
        Ok(devices) => {
            if devices.is_empty() {
                println!("No UVC cameras found.");
                println!();
                println!("Make sure your camera is connected and you have access to its USB device.");
            } else {
                println!("Available cameras:");
                for device in &devices {
                    println!("{}", describe_device(device));
                }
                println!();
                println!("Use --indices <N> to probe a specific camera.");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: &Path, config: &Config) {
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            match toml::to_string_pretty(config) {
                Ok(text) => {
                    for line in text.lines() {
                        println!("  {}", line);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if let Err(e) = Config::init(config_path) {
                eprintln!("Error: {}", e);
                eprintln!("Use 'uvc-scan config show' to view current settings.");
                std::process::exit(1);
            }
            println!("Created config file: {}", config_path.display());
        }
    }
}
