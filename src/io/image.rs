//! PNG rendering of composed rangoli and edited designs

use crate::design::canvas::Design;
use crate::io::configuration::{GUIDE_GRID_SPACING, STROKE_WIDTH};
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::synthesis::rangoli::Rangoli;
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GUIDE: Rgba<u8> = Rgba([240, 240, 240, 255]);

/// Parse `#RGB` or `#RRGGBB` into an opaque color
///
/// # Errors
///
/// Returns an error if the string is not a hex color
pub fn parse_hex_color(color: &str) -> Result<Rgba<u8>> {
    let invalid = || invalid_parameter("color", &color, &"expected #RGB or #RRGGBB");
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_e| invalid());
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return Err(invalid()),
    };

    let r = channel(expanded.get(0..2).ok_or_else(invalid)?)?;
    let g = channel(expanded.get(2..4).ok_or_else(invalid)?)?;
    let b = channel(expanded.get(4..6).ok_or_else(invalid)?)?;
    Ok(Rgba([r, g, b, 255]))
}

/// Raster canvas with the primitive shapes designs are drawn from
struct Painter {
    image: RgbaImage,
}

impl Painter {
    fn new(width: u32, height: u32) -> Self {
        let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

        for x in (0..width).step_by(GUIDE_GRID_SPACING as usize) {
            for y in 0..height {
                image.put_pixel(x, y, GUIDE);
            }
        }
        for y in (0..height).step_by(GUIDE_GRID_SPACING as usize) {
            for x in 0..width {
                image.put_pixel(x, y, GUIDE);
            }
        }

        Self { image }
    }

    fn plot(&mut self, x: f64, y: f64, color: Rgba<u8>) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        if let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = color;
        }
    }

    fn disc(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
        let r = radius.max(0.5);
        let steps = r.ceil() as i64;
        for dy in -steps..=steps {
            for dx in -steps..=steps {
                let (fx, fy) = (dx as f64, dy as f64);
                if fx.hypot(fy) <= r {
                    self.plot(cx + fx, cy + fy, color);
                }
            }
        }
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba<u8>) {
        let length = (to.0 - from.0).hypot(to.1 - from.1);
        let steps = (length * 2.0).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = f64::from(i) / f64::from(steps);
            self.disc(
                t.mul_add(to.0 - from.0, from.0),
                t.mul_add(to.1 - from.1, from.1),
                width / 2.0,
                color,
            );
        }
    }

    fn ring(&mut self, center: (f64, f64), radius: f64, width: f64, color: Rgba<u8>) {
        let steps = (radius * std::f64::consts::TAU * 2.0).ceil().max(8.0) as u32;
        for i in 0..steps {
            let angle = f64::from(i) / f64::from(steps) * std::f64::consts::TAU;
            self.disc(
                radius.mul_add(angle.cos(), center.0),
                radius.mul_add(angle.sin(), center.1),
                width / 2.0,
                color,
            );
        }
    }
}

/// Rasterize a rangoli: guide grid, connections, then dots
///
/// Each connection takes the color of the palette entry at its own index.
///
/// # Errors
///
/// Returns an error if a dot or palette color is not a valid hex color
pub fn render_rangoli(rangoli: &Rangoli) -> Result<RgbaImage> {
    let mut painter = Painter::new(rangoli.width, rangoli.height);

    let palette = rangoli
        .colors
        .iter()
        .map(String::as_str)
        .map(parse_hex_color)
        .collect::<Result<Vec<_>>>()?;

    for (segment, color) in rangoli.connections.iter().zip(palette.iter().cycle()) {
        painter.line(
            (segment.from.x, segment.from.y),
            (segment.to.x, segment.to.y),
            STROKE_WIDTH,
            *color,
        );
    }

    for dot in &rangoli.dots {
        let color = parse_hex_color(&dot.color)?;
        painter.disc(dot.point.x, dot.point.y, dot.radius, color);
    }

    Ok(painter.image)
}

/// Rasterize an edited design: guide grid, circles, lines, then dots
///
/// # Errors
///
/// Returns an error if any element carries an invalid hex color
pub fn render_design(design: &Design) -> Result<RgbaImage> {
    let mut painter = Painter::new(design.width, design.height);

    for circle in &design.circles {
        let color = parse_hex_color(&circle.color)?;
        painter.ring(circle.center, circle.radius, circle.width, color);
    }

    for line in &design.lines {
        let color = parse_hex_color(&line.color)?;
        painter.line(line.start, line.end, line.width, color);
    }

    for dot in &design.dots {
        let color = parse_hex_color(&dot.color)?;
        painter.disc(dot.x, dot.y, dot.size, color);
    }

    Ok(painter.image)
}

/// Save a rendered image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(rendered: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| KolamError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    rendered
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| KolamError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
