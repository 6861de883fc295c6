//! Implementation of the `envfile export` command.

use crate::cli::{ExportArgs, ExportFormat};
use envfile::error::{EnvError, Result};
use envfile::{Entry, fs};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Execute the `envfile export` command.
pub fn cmd_export(args: ExportArgs) -> Result<()> {
    let entries = fs::read_entries(&args.file)?;
    let rendered = render(&entries, args.format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Entries collapsed to one value per key, keeping first-seen key order.
struct Exported<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Exported<'a> {
    fn new(entries: &'a [Entry]) -> Self {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        for entry in entries {
            match pairs.iter_mut().find(|(key, _)| *key == entry.key) {
                Some(pair) => pair.1 = entry.value.as_str(),
                None => pairs.push((entry.key.as_str(), entry.value.as_str())),
            }
        }
        Self { pairs }
    }
}

impl Serialize for Exported<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn render(entries: &[Entry], format: ExportFormat) -> Result<String> {
    let exported = Exported::new(entries);
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(&exported)
            .map_err(|e| EnvError::Usage(format!("failed to render JSON: {}", e))),
        ExportFormat::Yaml => serde_yaml::to_string(&exported)
            .map_err(|e| EnvError::Usage(format!("failed to render YAML: {}", e))),
    }
}
