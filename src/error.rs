use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The source logo does not exist. Nothing has been written yet.
    #[error("Source logo not found at {}", path.display())]
    MissingSource { path: PathBuf },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// None of the requested icon sizes fit into an ICO file (max. 256px).
    #[error("No icon size <= 256px requested for {}", path.display())]
    EmptyIco { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) trait IoResultExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_name_the_path() {
        let error = Err::<(), _>(io::Error::from(io::ErrorKind::PermissionDenied))
            .with_path("icons/icon.ico")
            .unwrap_err();
        let message = error.to_string();
        assert!(message.starts_with("icons/icon.ico: "), "{message}");
    }

    #[test]
    fn missing_source_message() {
        let error = Error::MissingSource {
            path: PathBuf::from("assets/logo1.png"),
        };
        assert_eq!(
            error.to_string(),
            "Source logo not found at assets/logo1.png"
        );
    }
}
