use crate::error::{IoResultExt, Result};
use crate::ico::{write_ico, IconSizes};
use crate::plan::{LogoScale, OutputSpec, Render};
use crate::variant::{Variant, Variants};
use image::imageops::{overlay, resize, FilterType};
use image::{ImageFormat, Rgba, Rgba32FImage, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders one planned output and writes it to `path`.
pub fn render(spec: &OutputSpec, variants: &Variants, path: &Path) -> Result<()> {
    match spec.render {
        Render::Resize(variant) => {
            let image = resize_premultiplied(variants.get(variant), spec.width, spec.height);
            save_png(&image, path)
        }
        Render::Canvas {
            variant,
            background,
            logo,
        } => {
            let image = centered_on_canvas(
                variants.get(variant),
                spec.width,
                spec.height,
                background,
                logo,
            );
            save_png(&image, path)
        }
        Render::Ico(sizes) => {
            write_ico(
                variants.get(Variant::Color),
                &IconSizes::new(sizes),
                path,
            )?;
            Ok(())
        }
    }
}

/// Lanczos3 resize on premultiplied alpha, so the color of fully transparent
/// pixels does not bleed into anti-aliased edges.
pub fn resize_premultiplied(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });
    let resized = resize(&premultiplied, width, height, FilterType::Lanczos3);

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        let a = a.clamp(0.0, 1.0);
        let straight = |c: f32| if a > 0.0 { (c / a).clamp(0.0, 1.0) } else { 0.0 };
        Rgba([
            to_u8(straight(r)),
            to_u8(straight(g)),
            to_u8(straight(b)),
            to_u8(a),
        ])
    })
}

fn to_u8(c: f32) -> u8 {
    (c * 255.0).round() as u8
}

/// Scales `logo` to a square and alpha-composites it onto the middle of an
/// opaque `width` × `height` canvas. A logo larger than the canvas is clipped.
///
/// The canvas stays fully opaque, including below the logo's translucent
/// edges. A masked paste would lower the canvas alpha there instead.
pub fn centered_on_canvas(
    logo: &RgbaImage,
    width: u32,
    height: u32,
    [r, g, b]: [u8; 3],
    scale: LogoScale,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));
    let edge = scale.edge(width, height);
    let logo = resize_premultiplied(logo, edge, edge);
    let x = (i64::from(width) - i64::from(edge)) / 2;
    let y = (i64::from(height) - i64::from(edge)) / 2;
    overlay(&mut canvas, &logo, x, y);
    // Float blending can round the composited alpha down to 254.
    for pixel in canvas.pixels_mut() {
        pixel[3] = 255;
    }
    canvas
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(File::create(path).with_path(path)?);
    image.write_to(&mut file, ImageFormat::Png)?;
    file.flush().with_path(path)
}
