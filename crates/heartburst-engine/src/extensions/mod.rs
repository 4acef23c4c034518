// extensions/mod.rs
//
// Optional helpers a host may use around the burst engine.

pub mod dodge;

pub use dodge::{pick_position, within_reach, DodgeConfig, Rect};
