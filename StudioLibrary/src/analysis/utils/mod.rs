pub mod analysis_result;
pub mod bounding_rectangle;
pub mod caption;
pub mod detected_object;
pub mod media_format;
pub mod tag;
pub mod uploaded_image;
