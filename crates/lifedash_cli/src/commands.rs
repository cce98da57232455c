use chrono::NaiveDateTime;
use lifedash_core::{LayoutConfig, LayoutService};
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub config: Option<PathBuf>,
    pub pretty: bool,
}

impl OutputOptions {
    fn service(&self) -> Result<LayoutService, Box<dyn Error>> {
        let config = match &self.config {
            Some(path) => LayoutConfig::from_path(path)?,
            None => LayoutConfig::default(),
        };
        Ok(LayoutService::new(config)?)
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, Box<dyn Error>> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

pub fn bubble(
    options: &OutputOptions,
    snapshot: &Path,
    now: NaiveDateTime,
) -> Result<String, Box<dyn Error>> {
    let service = options.service()?;
    let snapshot = service.load_snapshot(snapshot)?;
    options.render(&service.bubble_map(&snapshot, now))
}

pub fn ribbon(
    options: &OutputOptions,
    snapshot: &Path,
    now: NaiveDateTime,
) -> Result<String, Box<dyn Error>> {
    let service = options.service()?;
    let snapshot = service.load_snapshot(snapshot)?;
    options.render(&service.ribbon(&snapshot, now))
}

pub fn gridlines(options: &OutputOptions) -> Result<String, Box<dyn Error>> {
    let service = options.service()?;
    options.render(&service.gridlines())
}
