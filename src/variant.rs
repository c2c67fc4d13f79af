use image::{Rgba, RgbaImage};

/// A recolored copy of the source logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The source logo as-is.
    Color,
    White,
    Black,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Color, Variant::White, Variant::Black];

    /// The solid color of a monochrome variant, `None` for [`Variant::Color`].
    pub fn fill(self) -> Option<[u8; 3]> {
        match self {
            Variant::Color => None,
            Variant::White => Some([255, 255, 255]),
            Variant::Black => Some([0, 0, 0]),
        }
    }
}

/// All variants of one source logo, derived once up front.
#[derive(Debug)]
pub struct Variants {
    color: RgbaImage,
    white: RgbaImage,
    black: RgbaImage,
}

impl Variants {
    pub fn new(source: RgbaImage) -> Variants {
        let white = monochrome(&source, [255, 255, 255]);
        let black = monochrome(&source, [0, 0, 0]);
        Variants {
            color: source,
            white,
            black,
        }
    }

    pub fn get(&self, variant: Variant) -> &RgbaImage {
        match variant {
            Variant::Color => &self.color,
            Variant::White => &self.white,
            Variant::Black => &self.black,
        }
    }
}

/// Replaces the chroma of every pixel with `color` while keeping the alpha mask.
pub fn monochrome(image: &RgbaImage, [r, g, b]: [u8; 3]) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        Rgba([r, g, b, image.get_pixel(x, y)[3]])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(size: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, y| {
            Rgba([x as u8, y as u8, 0x88, (x * 7 + y * 3) as u8])
        })
    }

    #[test]
    fn monochrome_keeps_alpha_and_flattens_chroma() {
        let source = gradient(64);
        let mono = monochrome(&source, [0x10, 0x20, 0x30]);

        assert_eq!(mono.dimensions(), source.dimensions());
        for (src, dst) in source.pixels().zip(mono.pixels()) {
            assert_eq!(dst[3], src[3]);
            assert_eq!(&dst.0[..3], &[0x10, 0x20, 0x30]);
        }
    }

    #[test]
    fn variants_match_their_fill() {
        let source = gradient(16);
        let variants = Variants::new(source.clone());

        assert_eq!(variants.get(Variant::Color), &source);
        for variant in Variant::ALL {
            let Some(fill) = variant.fill() else { continue };
            assert!(variants
                .get(variant)
                .pixels()
                .all(|p| p.0[..3] == fill[..]));
        }
    }
}
