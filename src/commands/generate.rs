use std::fmt;
use std::path::{Path, PathBuf};

use crate::render::{self, GlyphOutcome};

/// The two manifest sizes and their fixed file names.
const TARGETS: &[(u32, &str)] = &[(192, "icon-192.png"), (512, "icon-512.png")];

/// One icon written to disk.
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    pub outcome: GlyphOutcome,
}

#[derive(Debug)]
pub enum GenerateError {
    /// PNG encode or write failed for a file.
    Save { path: PathBuf, source: image::ImageError },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Save { path, source } => {
                write!(f, "failed to save '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Save { source, .. } => Some(source),
        }
    }
}

/// Render and write both manifest icons into `out_dir`.
///
/// Files are written in size order and overwritten unconditionally. The
/// first save failure aborts the run; files already written stay on disk.
pub fn run(out_dir: &Path) -> Result<Vec<GeneratedIcon>, GenerateError> {
    let mut written = Vec::with_capacity(TARGETS.len());
    for &(size, name) in TARGETS {
        let path = out_dir.join(name);
        let (img, outcome) = render::render_icon(size);
        img.save(&path)
            .map_err(|source| GenerateError::Save { path: path.clone(), source })?;
        println!("Created {} ({}x{})", name, size, size);
        written.push(GeneratedIcon { path, size, outcome });
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageReader;
    use tempfile::tempdir;

    #[test]
    fn writes_both_manifest_icons() {
        let dir = tempdir().unwrap();

        let icons = run(dir.path()).unwrap();

        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].size, 192);
        assert_eq!(icons[1].size, 512);
        assert!(dir.path().join("icon-192.png").exists());
        assert!(dir.path().join("icon-512.png").exists());
    }

    #[test]
    fn written_files_decode_as_square_pngs() {
        let dir = tempdir().unwrap();

        let icons = run(dir.path()).unwrap();

        for icon in &icons {
            let img = ImageReader::open(&icon.path).unwrap().decode().unwrap();
            assert_eq!(img.width(), icon.size);
            assert_eq!(img.height(), icon.size);
        }
    }

    #[test]
    fn rerun_overwrites_existing_files() {
        let dir = tempdir().unwrap();

        run(dir.path()).unwrap();
        let icons = run(dir.path()).unwrap();

        assert_eq!(icons.len(), 2);
        let img = ImageReader::open(&icons[0].path).unwrap().decode().unwrap();
        assert_eq!(img.width(), 192);
    }

    #[test]
    fn missing_output_directory_reports_save_error() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");

        let result = run(&gone);

        match result {
            Err(GenerateError::Save { path, .. }) => {
                assert!(path.ends_with("icon-192.png"));
            }
            Ok(_) => panic!("expected a save error"),
        }
    }
}
