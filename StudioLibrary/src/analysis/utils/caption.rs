use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Caption {
    pub text: String,
    pub confidence: f64,
}
