//! Export stage: turns one master image into every file in the manifest.
//!
//! Entries are written in manifest order. The first failure aborts the run;
//! files already written stay on disk.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::Result;
use crate::layout::Layout;
use crate::output::{display_path, plural, Printer};
use crate::render::{compose_splash, resize_square, write_png};
use crate::types::{manifest, Artifact, Destination, ExportEntry, Pipeline};

/// A file the export stage wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFile {
    pub entry: ExportEntry,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Everything written by one export run.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub files: Vec<WrittenFile>,
}

impl ExportReport {
    /// Number of files written under a destination.
    pub fn count(&self, destination: Destination) -> usize {
        self.files
            .iter()
            .filter(|f| f.entry.destination == destination)
            .count()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Output path of an entry under `root`.
///
/// Source entries land on the layout's source path whatever its file name.
pub fn entry_path(root: &Path, layout: &Layout, entry: &ExportEntry) -> PathBuf {
    match entry.destination {
        Destination::Source => root.join(&layout.source),
        destination => root.join(layout.dir(destination)).join(entry.file_name),
    }
}

/// Render the image for a single entry.
pub fn render_entry<'a>(
    master: &'a RgbaImage,
    entry: &ExportEntry,
    pipeline: Pipeline,
) -> Cow<'a, RgbaImage> {
    match entry.artifact {
        Artifact::Master => Cow::Borrowed(master),
        Artifact::Square(size) => Cow::Owned(resize_square(master, size)),
        Artifact::Splash => Cow::Owned(compose_splash(master, pipeline.splash_icon_size())),
    }
}

/// Write every manifest entry for `pipeline`, derived from `master`.
pub fn export_all(
    master: &RgbaImage,
    root: &Path,
    layout: &Layout,
    pipeline: Pipeline,
    printer: &Printer,
) -> Result<ExportReport> {
    let mut report = ExportReport::default();

    for entry in manifest(pipeline) {
        let path = entry_path(root, layout, &entry);
        let img = render_entry(master, &entry, pipeline);

        write_png(&img, &path)?;

        let (width, height) = img.dimensions();
        let size = printer.dim(&format!("({}x{})", width, height));
        printer.status("Writing", &format!("{} {}", display_path(&path, root), size));

        report.files.push(WrittenFile {
            entry,
            path,
            width,
            height,
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} ({} mobile in {}, {} web in {})",
            plural(report.len(), "icon", "icons"),
            report.count(Destination::Source) + report.count(Destination::Mobile),
            layout.mobile_dir.display(),
            report.count(Destination::Web),
            layout.web_dir.display(),
        ),
    );

    Ok(report)
}
