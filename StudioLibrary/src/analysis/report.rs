use uuid::Uuid;
use serde::Serialize;
use crate::analysis::utils::analysis_result::AnalysisResult;
use crate::analysis::utils::caption::Caption;
use crate::analysis::utils::detected_object::DetectedObject;
use crate::analysis::utils::tag::Tag;

pub const NO_OBJECTS_WARNING: &str = "No objects were detected.";

//What the page script renders: formatted lines, not raw result data.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub uuid: Uuid,
    pub filename: String,
    pub captions: Vec<String>,
    pub tags: Option<String>,
    pub objects: Vec<String>,
    pub annotated_image: Option<String>,
    pub warning: Option<String>,
}

impl AnalysisReport {
    pub fn new(uuid: Uuid, filename: String, result: &AnalysisResult, annotated_image: Option<String>) -> Self {
        let warning = result.objects.is_empty().then(|| NO_OBJECTS_WARNING.to_string());
        Self {
            uuid,
            filename,
            captions: result.captions.iter().map(caption_line).collect(),
            tags: tag_line(&result.tags),
            objects: result.objects.iter().map(object_line).collect(),
            annotated_image,
            warning,
        }
    }
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub fn caption_line(caption: &Caption) -> String {
    format!("{text} ({confidence})", text = caption.text, confidence = format_confidence(caption.confidence))
}

pub fn tag_line(tags: &[Tag]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let segments = tags.iter()
        .map(|tag| format!("{name} ({confidence})", name = tag.name, confidence = format_confidence(tag.confidence)))
        .collect::<Vec<_>>();
    Some(segments.join(", "))
}

pub fn object_line(object: &DetectedObject) -> String {
    format!("→ {label} ({confidence})", label = object.label, confidence = format_confidence(object.confidence))
}
