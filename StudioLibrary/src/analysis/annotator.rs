use std::io::Cursor;
use tokio::fs;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::rect::Rect;
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use ab_glyph::{FontVec, PxScale};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::utils::config::Config;
use crate::analysis::utils::detected_object::DetectedObject;

#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    #[error("Unable to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Unable to read font file {path}: {source}")]
    FontRead { path: String, source: std::io::Error },
    #[error("Unable to parse font data")]
    FontParse,
    #[error("Unable to encode annotated image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Decode an uploaded buffer into pixels. The buffer itself is left untouched
/// so the same bytes can still be sent to the remote service.
pub fn decode(image_bytes: &[u8]) -> Result<RgbImage, AnnotateError> {
    let image = image::load_from_memory(image_bytes).map_err(AnnotateError::Decode)?;
    Ok(image.to_rgb8())
}

pub async fn load_font(config: &Config) -> Result<FontVec, AnnotateError> {
    let font_data = fs::read(&config.font_path).await
        .map_err(|err| AnnotateError::FontRead { path: config.font_path.clone(), source: err })?;
    FontVec::try_from_vec(font_data).map_err(|_| AnnotateError::FontParse)
}

/// Draw one rectangle and one label per detected object over a copy of the
/// original image. Coordinates are taken verbatim from the result; boxes that
/// grow past the image edge clip.
pub fn annotate(mut image: RgbImage, objects: &[DetectedObject], config: &Config, font: &FontVec) -> RgbImage {
    let border_color = Rgb(config.border_color);
    let text_color = Rgb(config.text_color);
    let scale = PxScale::from(config.font_size);
    for object in objects {
        draw_object_border(&mut image, object, config.border_width, border_color);
        let position_x = object.rectangle.x as i32;
        let position_y = object.rectangle.y as i32;
        draw_text_mut(&mut image, text_color, position_x, position_y, scale, font, &object.label);
    }
    image
}

fn draw_object_border(image: &mut RgbImage, object: &DetectedObject, border_width: u32, color: Rgb<u8>) {
    let rectangle = &object.rectangle;
    //Rect rejects zero sizes, degenerate boxes become a single pixel line.
    let base_rectangle = Rect::at(rectangle.x as i32, rectangle.y as i32)
        .of_size(rectangle.w.max(1), rectangle.h.max(1));
    for i in 0..border_width {
        let offset_rectangle = Rect::at(base_rectangle.left() - i as i32, base_rectangle.top() - i as i32)
            .of_size(base_rectangle.width() + 2 * i, base_rectangle.height() + 2 * i);
        draw_hollow_rect_mut(image, offset_rectangle, color);
    }
}

pub fn to_data_url(image: &RgbImage) -> Result<String, AnnotateError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).map_err(AnnotateError::Encode)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(buffer.into_inner())))
}
