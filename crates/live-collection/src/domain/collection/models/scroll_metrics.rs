// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Geometry of a list at the end of a scroll gesture, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Total height of the scrollable content.
    pub content_height: f64,
    /// Height of the visible area.
    pub viewport_height: f64,
    /// Offset of the top of the visible area at which the gesture will come to rest.
    pub target_offset: f64,
}
