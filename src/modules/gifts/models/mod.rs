pub mod gift;

pub use gift::{Gift, GiftDto};
