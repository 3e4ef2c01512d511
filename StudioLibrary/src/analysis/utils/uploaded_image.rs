use crate::analysis::utils::media_format::MediaFormat;

//One upload, one buffer. The same bytes feed local decoding and the remote call.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub format: MediaFormat,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(filename: String, format: MediaFormat, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            format,
            bytes,
        }
    }
}
