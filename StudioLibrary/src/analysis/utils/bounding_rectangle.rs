use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoundingRectangle {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}
