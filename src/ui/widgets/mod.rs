pub mod primitives;
pub mod sparkline;

pub use primitives::{badge, card, chip, key_hint, muted, share_line};
pub use sparkline::MiniSparkline;
