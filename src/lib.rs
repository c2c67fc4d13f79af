//! A crate for creating the app icons, web logos, favicons and splash screens
//! of an app from a single source logo.
//!
//! The source is decoded once, recolored into a white and a black variant that
//! share its alpha mask, and then rendered into a fixed set of outputs (see [`PLAN`])
//! below three folders: `icons/`, `logos/` and `splash/`.
//!
//! ## Examples
//! ### Basic
//! Reads `assets/logo1.png` and writes `assets/icons/icon-48x48.png`,
//! `assets/logos/favicon.ico`, `assets/splash/splash.png`, ...
//!
//! ```no_run
//! # use logo_variants::LogoBuilder;
//! LogoBuilder::default()
//!     .output_dir("assets")
//!     .source_file("assets/logo1.png")
//!     .build()?;
//! # Ok::<(), logo_variants::Error>(())
//! ```
//!
//! ### Single outputs
//! The building blocks are public as well:
//!
//! ```no_run
//! # use logo_variants::{monochrome, write_ico, IconSizes};
//! # use std::path::Path;
//! let logo = image::open("logo1.png")?.into_rgba8();
//! let white = monochrome(&logo, [255, 255, 255]);
//! write_ico(&white, &IconSizes::FAVICON, Path::new("favicon-white.ico"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use image::ImageReader;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

mod error;
mod ico;
mod plan;
mod render;
mod variant;

pub use error::{Error, Result};
pub use ico::{write_ico, IconSizes, MAX_ICO_SIZE};
pub use plan::{
    Folder, Group, LogoScale, OutputSpec, Render, DARK_BACKGROUND, DESKTOP_ICO_SIZES,
    FAVICON_SIZES, PLAN,
};
pub use render::{centered_on_canvas, resize_premultiplied};
pub use variant::{monochrome, Variant, Variants};

use error::IoResultExt;

/// Name of the source logo inside the assets directory.
pub const DEFAULT_SOURCE_FILE: &str = "logo1.png";

/// Edge length below which a source logo gets visibly blurry when upscaled.
pub const RECOMMENDED_SOURCE_SIZE: u32 = 1024;

/// Generates every output in [`PLAN`] from one source logo.
#[derive(Debug)]
pub struct LogoBuilder {
    source_file: PathBuf,
    output_dir: PathBuf,
}

impl Default for LogoBuilder {
    fn default() -> Self {
        LogoBuilder {
            source_file: PathBuf::from(DEFAULT_SOURCE_FILE),
            output_dir: PathBuf::from("."),
        }
    }
}

impl LogoBuilder {
    /// Reads `logo1.png` from `dir` and writes the outputs next to it.
    pub fn for_assets_dir(dir: impl AsRef<Path>) -> LogoBuilder {
        let dir = dir.as_ref();
        LogoBuilder {
            source_file: dir.join(DEFAULT_SOURCE_FILE),
            output_dir: dir.to_owned(),
        }
    }

    /// Sets the source logo. PNG is always supported, other formats need the
    /// matching crate feature (`jpeg`, `gif`, `tiff`).
    pub fn source_file(&mut self, source_file: impl AsRef<Path>) -> &mut LogoBuilder {
        self.source_file = source_file.as_ref().to_owned();
        self
    }

    /// Sets the directory that receives the `icons`, `logos` and `splash` folders.
    pub fn output_dir(&mut self, output_dir: impl AsRef<Path>) -> &mut LogoBuilder {
        self.output_dir = output_dir.as_ref().to_owned();
        self
    }

    /// Path of a planned output below the output directory.
    pub fn output_path(&self, spec: &OutputSpec) -> PathBuf {
        self.output_dir
            .join(spec.folder.dir_name())
            .join(spec.file_name)
    }

    /// Writes all outputs and returns their paths in the order they were written.
    ///
    /// Fails with [`Error::MissingSource`] before touching the filesystem if
    /// the source logo does not exist. Files written before a later failure
    /// are left in place.
    pub fn build(&self) -> Result<Vec<PathBuf>> {
        if !self.source_file.exists() {
            return Err(Error::MissingSource {
                path: self.source_file.clone(),
            });
        }

        for folder in Folder::ALL {
            let dir = self.output_dir.join(folder.dir_name());
            fs::create_dir_all(&dir).with_path(dir)?;
        }

        let variants = Variants::new(self.decode_source()?);

        let mut written = Vec::with_capacity(PLAN.len());
        let mut group = None;
        for spec in PLAN {
            if group != Some(spec.group) {
                info!("Creating {}...", spec.group);
                group = Some(spec.group);
            }
            let path = self.output_path(spec);
            render::render(spec, &variants, &path)?;
            debug!(
                "Wrote {} ({}x{})",
                path.display(),
                spec.width,
                spec.height
            );
            written.push(path);
        }

        info!(
            "All {} logo variants created in {}",
            written.len(),
            self.output_dir.display()
        );
        Ok(written)
    }

    fn decode_source(&self) -> Result<image::RgbaImage> {
        let source = ImageReader::open(&self.source_file)
            .with_path(&self.source_file)?
            .with_guessed_format()
            .with_path(&self.source_file)?
            .decode()?
            .into_rgba8();

        let (width, height) = source.dimensions();
        if width < RECOMMENDED_SOURCE_SIZE || height < RECOMMENDED_SOURCE_SIZE {
            warn!(
                "{} is only {width}x{height}, outputs will be upscaled (recommended: at least {RECOMMENDED_SOURCE_SIZE}x{RECOMMENDED_SOURCE_SIZE})",
                self.source_file.display()
            );
        }
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let error = LogoBuilder::for_assets_dir(dir.path()).build().unwrap_err();

        assert!(matches!(error, Error::MissingSource { path } if path == dir.path().join("logo1.png")));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn undecodable_source_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("logo1.png"), b"definitely not a png").unwrap();

        let error = LogoBuilder::for_assets_dir(dir.path()).build().unwrap_err();
        assert!(matches!(error, Error::Image(_)), "{error:?}");
    }

    #[test]
    fn output_paths() {
        let mut builder = LogoBuilder::default();
        builder.output_dir("assets");
        let favicon = PLAN
            .iter()
            .find(|spec| spec.file_name == "favicon.ico")
            .unwrap();
        assert_eq!(
            builder.output_path(favicon),
            Path::new("assets/logos/favicon.ico")
        );
    }
}
