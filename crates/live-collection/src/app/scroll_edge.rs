// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::collection::models::{DisplayOrder, ScrollMetrics};

/// Decides whether a scroll gesture coming to rest at `metrics.target_offset` reached the edge
/// of the list past which more items should be loaded.
///
/// Forward lists grow at the bottom, so the bottom edge of the viewport needs to reach the end of
/// the content. Reversed lists are anchored at the bottom and grow at the top.
pub fn should_load_more(display_order: DisplayOrder, metrics: &ScrollMetrics) -> bool {
    match display_order {
        DisplayOrder::Forward => {
            metrics.target_offset + metrics.viewport_height >= metrics.content_height
        }
        DisplayOrder::Reversed => metrics.target_offset <= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(target_offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            content_height: 1000.0,
            viewport_height: 400.0,
            target_offset,
        }
    }

    #[test]
    fn test_forward_loads_at_bottom() {
        assert!(!should_load_more(DisplayOrder::Forward, &metrics(0.0)));
        assert!(!should_load_more(DisplayOrder::Forward, &metrics(599.0)));
        assert!(should_load_more(DisplayOrder::Forward, &metrics(600.0)));
        assert!(should_load_more(DisplayOrder::Forward, &metrics(650.0)));
    }

    #[test]
    fn test_reversed_loads_at_top() {
        assert!(should_load_more(DisplayOrder::Reversed, &metrics(0.0)));
        assert!(should_load_more(DisplayOrder::Reversed, &metrics(-20.0)));
        assert!(!should_load_more(DisplayOrder::Reversed, &metrics(1.0)));
        assert!(!should_load_more(DisplayOrder::Reversed, &metrics(600.0)));
    }

    #[test]
    fn test_content_smaller_than_viewport_loads_forward() {
        let metrics = ScrollMetrics {
            content_height: 100.0,
            viewport_height: 400.0,
            target_offset: 0.0,
        };
        assert!(should_load_more(DisplayOrder::Forward, &metrics));
    }
}
