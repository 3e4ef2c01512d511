use serde::{Serialize, Deserialize};
use crate::analysis::utils::bounding_rectangle::BoundingRectangle;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DetectedObject {
    #[serde(rename = "object")]
    pub label: String,
    pub confidence: f64,
    pub rectangle: BoundingRectangle,
}
