use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use rusttype::{Font, Scale, point};
use thiserror::Error;

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 630;

const REGULAR_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");
const BOLD_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans-Bold.ttf");

const BACKGROUND: Rgba<u8> = Rgba([252, 250, 245, 255]);
const INK: Rgba<u8> = Rgba([33, 37, 41, 255]);
const ACCENT: Rgba<u8> = Rgba([30, 87, 153, 255]);
const MUTED: Rgba<u8> = Rgba([108, 117, 125, 255]);

const FRAME_INSET: u32 = 24;
const FRAME_THICKNESS: u32 = 4;

const HEADING_TEXT: &str = "CERTIFICATE OF ACHIEVEMENT";
const HEADING_SIZE: f32 = 38.0;
const HEADING_BASELINE: f32 = 150.0;

const STUDENT_SIZE: f32 = 68.0;
const STUDENT_BASELINE: f32 = 300.0;

const RULE_Y: u32 = 330;
const RULE_HEIGHT: u32 = 3;
const RULE_HALF_WIDTH: u32 = 160;

const COURSE_SIZE: f32 = 42.0;
const COURSE_BASELINE: f32 = 430.0;

const DATE_SIZE: f32 = 30.0;
const DATE_BASELINE: f32 = 520.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("embedded font could not be loaded")]
    InvalidFont,
    #[error("PNG encoding failed: `{0}`")]
    PngEncoding(#[from] image::ImageError),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateData {
    pub student_name: String,
    pub course_name: String,
    pub date: String,
}

/// Rasterizes certificate data into image bytes. Rendering is CPU-bound;
/// callers offload it from the async runtime.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait CertificateRenderer: Send + Sync {
    fn render(&self, certificate: &CertificateData) -> Result<Vec<u8>, RenderError>;
}

/// The one fixed layout: a 1200×630 canvas with a frame and three centered
/// text regions. Nothing about it is configurable per call.
pub struct FixedLayoutRenderer {
    regular: Font<'static>,
    bold: Font<'static>,
}

impl FixedLayoutRenderer {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            regular: Font::try_from_bytes(REGULAR_FONT).ok_or(RenderError::InvalidFont)?,
            bold: Font::try_from_bytes(BOLD_FONT).ok_or(RenderError::InvalidFont)?,
        })
    }
}

type Canvas = ImageBuffer<Rgba<u8>, Vec<u8>>;

impl CertificateRenderer for FixedLayoutRenderer {
    fn render(&self, certificate: &CertificateData) -> Result<Vec<u8>, RenderError> {
        let mut canvas = Canvas::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

        draw_frame(&mut canvas);
        draw_rule(&mut canvas);

        draw_text_centered(
            &mut canvas,
            &self.regular,
            HEADING_SIZE,
            HEADING_BASELINE,
            ACCENT,
            HEADING_TEXT,
        );
        draw_text_centered(
            &mut canvas,
            &self.bold,
            STUDENT_SIZE,
            STUDENT_BASELINE,
            INK,
            &certificate.student_name,
        );
        draw_text_centered(
            &mut canvas,
            &self.regular,
            COURSE_SIZE,
            COURSE_BASELINE,
            INK,
            &certificate.course_name,
        );
        draw_text_centered(
            &mut canvas,
            &self.regular,
            DATE_SIZE,
            DATE_BASELINE,
            MUTED,
            &certificate.date,
        );

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(canvas).write_to(&mut buffer, ImageFormat::Png)?;

        Ok(buffer.into_inner())
    }
}

fn draw_frame(canvas: &mut Canvas) {
    let left = FRAME_INSET;
    let top = FRAME_INSET;
    let right = CANVAS_WIDTH - FRAME_INSET;
    let bottom = CANVAS_HEIGHT - FRAME_INSET;

    for y in top..bottom {
        for x in left..right {
            let on_edge = x < left + FRAME_THICKNESS
                || x >= right - FRAME_THICKNESS
                || y < top + FRAME_THICKNESS
                || y >= bottom - FRAME_THICKNESS;
            if on_edge {
                canvas.put_pixel(x, y, ACCENT);
            }
        }
    }
}

fn draw_rule(canvas: &mut Canvas) {
    let center = CANVAS_WIDTH / 2;
    for y in RULE_Y..RULE_Y + RULE_HEIGHT {
        for x in center - RULE_HALF_WIDTH..center + RULE_HALF_WIDTH {
            canvas.put_pixel(x, y, ACCENT);
        }
    }
}

fn text_width(font: &Font<'_>, size: f32, text: &str) -> f32 {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);

    let mut width = 0f32;
    for glyph in font.layout(text, scale, point(0.0, v_metrics.ascent)) {
        if let Some(bounding_box) = glyph.pixel_bounding_box() {
            width = width.max(bounding_box.max.x as f32);
        }
    }
    width
}

fn draw_text_centered(
    canvas: &mut Canvas,
    font: &Font<'_>,
    size: f32,
    baseline: f32,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(size);
    let start_x = (CANVAS_WIDTH as f32 - text_width(font, size, text)) / 2.0;

    for glyph in font.layout(text, scale, point(start_x, baseline)) {
        if let Some(bounding_box) = glyph.pixel_bounding_box() {
            glyph.draw(|glyph_x, glyph_y, coverage| {
                let x = glyph_x as i32 + bounding_box.min.x;
                let y = glyph_y as i32 + bounding_box.min.y;
                blend_pixel(canvas, x, y, color, coverage);
            });
        }
    }
}

fn blend_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    if coverage <= 0.0 {
        return;
    }

    let alpha = coverage.min(1.0);
    let inverse = 1.0 - alpha;
    let pixel = canvas.get_pixel_mut(x, y);
    pixel.0[0] = (color.0[0] as f32 * alpha + pixel.0[0] as f32 * inverse) as u8;
    pixel.0[1] = (color.0[1] as f32 * alpha + pixel.0[1] as f32 * inverse) as u8;
    pixel.0[2] = (color.0[2] as f32 * alpha + pixel.0[2] as f32 * inverse) as u8;
    pixel.0[3] = 255;
}

#[cfg(test)]
mod test {
    use image::GenericImageView;

    use super::*;

    fn generic_certificate() -> CertificateData {
        CertificateData {
            student_name: "Ana Pérez".to_string(),
            course_name: "Seguridad Web".to_string(),
            date: "2024-05-01".to_string(),
        }
    }

    fn render(certificate: &CertificateData) -> Vec<u8> {
        FixedLayoutRenderer::new()
            .unwrap()
            .render(certificate)
            .unwrap()
    }

    #[test]
    fn test_render_produces_fixed_dimensions() {
        let png = render(&generic_certificate());

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn test_render_dimensions_do_not_depend_on_input_length() {
        let certificate = CertificateData {
            student_name: "A".repeat(500),
            course_name: "B".repeat(500),
            date: "C".repeat(500),
        };

        let png = render(&certificate);

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn test_render_is_deterministic() {
        let certificate = generic_certificate();

        assert_eq!(render(&certificate), render(&certificate));
    }

    #[test]
    fn test_render_draws_the_input_fields() {
        let baseline = render(&generic_certificate());

        for changed in [
            CertificateData {
                student_name: "Juan López".to_string(),
                ..generic_certificate()
            },
            CertificateData {
                course_name: "Criptografía".to_string(),
                ..generic_certificate()
            },
            CertificateData {
                date: "2025-01-01".to_string(),
                ..generic_certificate()
            },
        ] {
            assert_ne!(baseline, render(&changed));
        }
    }
}
