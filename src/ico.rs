use crate::error::{Error, IoResultExt, Result};
use crate::plan::{DESKTOP_ICO_SIZES, FAVICON_SIZES};
use crate::render::resize_premultiplied;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use log::debug;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// The largest edge length an ICO entry can have.
pub const MAX_ICO_SIZE: u32 = 256;

/// A list of icon sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSizes(Cow<'static, [u32]>);

impl IconSizes {
    /// Windows desktop icon. 512 does not fit into an ICO and is skipped.
    pub const DESKTOP: Self = Self::new(DESKTOP_ICO_SIZES);

    pub const FAVICON: Self = Self::new(FAVICON_SIZES);

    pub const fn new(sizes: &'static [u32]) -> IconSizes {
        Self(Cow::Borrowed(sizes))
    }

    /// The sizes that end up in the ICO file.
    pub fn packed(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied().filter(|&size| size <= MAX_ICO_SIZE)
    }
}

impl<'a, I> From<I> for IconSizes
where
    I: IntoIterator<Item = &'a u32>,
{
    fn from(value: I) -> Self {
        IconSizes(value.into_iter().copied().collect::<Vec<_>>().into())
    }
}

/// Resizes `image` to every packable size and writes them as one ICO file.
/// Returns the sizes that were packed.
pub fn write_ico(image: &RgbaImage, sizes: &IconSizes, path: &Path) -> Result<Vec<u32>> {
    for skipped in sizes.0.iter().filter(|&&size| size > MAX_ICO_SIZE) {
        debug!("Skipping {skipped}px entry for {}", path.display());
    }

    let packed: Vec<_> = sizes.packed().collect();
    if packed.is_empty() {
        return Err(Error::EmptyIco {
            path: path.to_owned(),
        });
    }

    let frames: Vec<_> = packed
        .iter()
        .map(|&size| create_ico_frame(image, size))
        .collect::<Result<_>>()?;

    let mut file = BufWriter::new(File::create(path).with_path(path)?);
    IcoEncoder::new(&mut file).encode_images(&frames)?;
    file.flush().with_path(path)?;

    Ok(packed)
}

fn create_ico_frame(image: &RgbaImage, size: u32) -> Result<IcoFrame<'static>> {
    let resized = resize_premultiplied(image, size, size);
    encode_ico_frame(resized.as_raw(), size)
}

fn encode_ico_frame(buf: &[u8], size: u32) -> Result<IcoFrame<'static>> {
    let color_type = ExtendedColorType::Rgba8;
    let mut encoded = Vec::new();
    PngEncoder::new(Cursor::new(&mut encoded)).write_image(buf, size, size, color_type)?;
    Ok(IcoFrame::with_encoded(encoded, size, size, color_type)?)
}
