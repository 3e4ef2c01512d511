use uuid::Uuid;
use crate::utils::config::Config;
use crate::analysis::annotator::{self, AnnotateError};
use crate::analysis::report::AnalysisReport;
use crate::analysis::utils::uploaded_image::UploadedImage;
use crate::analysis::vision_client::{VisionClient, VisionClientError};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Vision(#[from] VisionClientError),
    #[error(transparent)]
    Annotate(#[from] AnnotateError),
}

/// One render pass: decode the upload, submit it to the vision service and
/// build the report, annotating a copy of the image when objects came back.
/// Any failure aborts the rest of the pass.
pub async fn analyze(client: Option<&VisionClient>, uuid: Uuid, upload: UploadedImage) -> Result<AnalysisReport, AnalysisError> {
    let client = client.ok_or(VisionClientError::ConfigurationMissing)?;
    let config = Config::now().await;
    let original = annotator::decode(&upload.bytes)?;
    let result = client.analyze(&upload.bytes).await?;
    let annotated_image = if result.objects.is_empty() {
        None
    } else {
        let font = annotator::load_font(&config).await?;
        let annotated = annotator::annotate(original, &result.objects, &config, &font);
        Some(annotator::to_data_url(&annotated)?)
    };
    Ok(AnalysisReport::new(uuid, upload.filename, &result, annotated_image))
}
