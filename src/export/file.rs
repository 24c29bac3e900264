use crate::config::{ExportConfig, ExportFormat};
use crate::core::report::{JsonReport, ScoreReport, render_text};
use crate::export::Exporter;
use crate::utils::fs::{next_free_path, slugify};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct FileExporter {
    dir: PathBuf,
    format: ExportFormat,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    pub fn from_config(cfg: &ExportConfig) -> Self {
        Self::new(cfg.dir.clone(), cfg.format)
    }
}

impl Exporter for FileExporter {
    fn name(&self) -> &'static str {
        "file"
    }

    fn export(&self, report: &ScoreReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed creating export dir {}", self.dir.display()))?;

        let stem = report
            .startup
            .name
            .as_deref()
            .map(slugify)
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| "viability".to_string());
        let path = next_free_path(&self.dir, &stem, self.format.extension());

        let content = match self.format {
            ExportFormat::Text => render_text(report),
            ExportFormat::Json => serde_json::to_string_pretty(&JsonReport::from(report))
                .context("failed to serialize report")?,
        };

        fs::write(&path, content).with_context(|| format!("failed writing {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Calculator;
    use crate::core::catalog::catalog;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "viability-export-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_text_snapshot_named_after_the_startup() {
        let dir = scratch_dir("text");
        let mut calculator = Calculator::new(catalog());
        calculator.set_name("Acme Hosting");
        calculator.populate_example("wp-engine").unwrap();

        let exporter = FileExporter::new(&dir, ExportFormat::Text);
        let first = exporter.export(&calculator.report(Default::default())).unwrap();
        let second = exporter.export(&calculator.report(Default::default())).unwrap();

        assert_eq!(first, dir.join("acme-hosting.txt"));
        assert_eq!(second, dir.join("acme-hosting-2.txt"));
        let content = fs::read_to_string(&first).unwrap();
        assert!(content.contains("Result: Not viable"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn writes_json_snapshot() {
        let dir = scratch_dir("json");
        let calculator = Calculator::new(catalog());

        let exporter = FileExporter::new(&dir, ExportFormat::Json);
        let path = exporter.export(&calculator.report(Default::default())).unwrap();

        assert_eq!(path, dir.join("viability.json"));
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["label"], "TBD");
        assert_eq!(value["color"], "stone-200");
        let _ = fs::remove_dir_all(&dir);
    }
}
