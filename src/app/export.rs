//! Export actions
//!
//! User actions that leave the app:
//! - Save the selected emoji as an SVG favicon in the output directory
//! - Copy the selected emoji to the clipboard via an external command
//!
//! Failures are reported with an error toast and logged; nothing is retried.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::App;

impl App {
    pub(crate) fn export_selected(&mut self) {
        let Some(record) = self.model.browser.selected_record().cloned() else {
            return;
        };

        match emojifav::export::export_record(&record, &self.output_dir) {
            Ok(path) => {
                log::info!("Exported {} to {}", record.symbol, path.display());
                self.model.show_toast(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Export of {} failed: {:#}", record.symbol, e);
                self.model.show_toast(format!("Error: {:#}", e));
            }
        }
    }

    pub(crate) fn copy_selected_to_clipboard(&mut self) {
        let Some(symbol) = self
            .model
            .browser
            .selected_record()
            .map(|r| r.symbol.clone())
        else {
            return;
        };

        let Some(clipboard_cmd) = self.clipboard_command.clone() else {
            log::warn!("No clipboard_command configured - set clipboard_command in config.yaml");
            self.model
                .show_toast("Error: clipboard_command not configured".to_string());
            return;
        };

        // Text goes in on stdin; closing stdin signals EOF
        let result = Command::new(&clipboard_cmd)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .and_then(|mut child| {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(symbol.as_bytes())?;
                }
                child.wait()
            });

        match result {
            Ok(status) if status.success() => {
                log::debug!("Copied to clipboard via {}: {}", clipboard_cmd, symbol);
                self.model.show_toast(format!("Copied {}", symbol));
            }
            Ok(status) => {
                log::error!("Clipboard command '{}' exited with {}", clipboard_cmd, status);
                self.model
                    .show_toast(format!("Error: '{}' exited with {}", clipboard_cmd, status));
            }
            Err(e) => {
                log::error!("Failed to execute clipboard command '{}': {}", clipboard_cmd, e);
                self.model
                    .show_toast(format!("Error: Failed to copy with '{}'", clipboard_cmd));
            }
        }
    }
}
