//! Presentational Leptos primitives shared across the site.

mod icons;
mod primitives;

pub use icons::{Icon, IconName, IconSize};
pub use primitives::{SectionHeader, TagBadge};
