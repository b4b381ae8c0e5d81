pub mod bbox;
pub mod iou;
