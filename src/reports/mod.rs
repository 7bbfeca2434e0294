mod tables;

pub use self::tables::{items as print_items, presets as print_presets, result as print_result};
pub use self::tables::stats as print_stats;
