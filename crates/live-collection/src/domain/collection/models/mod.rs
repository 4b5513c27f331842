// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use display_order::DisplayOrder;
pub use loading_status::LoadingStatus;
pub use page::{Page, PageRequest};
pub use page_direction::PageDirection;
pub use scroll_metrics::ScrollMetrics;
pub use subscription_token::{SubscriptionToken, SubscriptionTokenGenerator};

mod display_order;
mod loading_status;
mod page;
mod page_direction;
mod scroll_metrics;
mod subscription_token;
