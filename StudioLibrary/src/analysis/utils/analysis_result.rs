use serde::Deserialize;
use crate::analysis::utils::caption::Caption;
use crate::analysis::utils::detected_object::DetectedObject;
use crate::analysis::utils::tag::Tag;

//Wire shape of the remote analyze operation. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeResponse {
    pub description: Option<DescriptionBlock>,
    pub tags: Option<Vec<Tag>>,
    pub objects: Option<Vec<DetectedObject>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DescriptionBlock {
    #[serde(default)]
    pub captions: Vec<Caption>,
}

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub captions: Vec<Caption>,
    pub tags: Vec<Tag>,
    pub objects: Vec<DetectedObject>,
}

impl From<AnalyzeResponse> for AnalysisResult {
    fn from(response: AnalyzeResponse) -> Self {
        Self {
            captions: response.description.map(|description| description.captions).unwrap_or_default(),
            tags: response.tags.unwrap_or_default(),
            objects: response.objects.unwrap_or_default(),
        }
    }
}
