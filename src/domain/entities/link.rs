//! Link entity representing a shortened URL and its click statistics.

use chrono::{DateTime, Utc};

use super::click::ClickEvent;

/// A shortened URL with owner metadata and embedded click history.
///
/// `short_url`, `original_url`, `user_name` and `link_type` never change after
/// creation. `click_count` and `clicks` only grow, one event per redirect.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_url: String,
    pub original_url: String,
    pub user_name: String,
    pub link_type: String,
    pub click_count: i64,
    pub clicks: Vec<ClickEvent>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a link with no recorded clicks.
    pub fn new(id: i64, new_link: NewLink, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_url: new_link.short_url,
            original_url: new_link.original_url,
            user_name: new_link.user_name,
            link_type: new_link.link_type,
            click_count: 0,
            clicks: Vec::new(),
            created_at,
        }
    }

    /// Appends a click and bumps the counter.
    pub fn push_click(&mut self, click: ClickEvent) {
        self.clicks.push(click);
        self.click_count += 1;
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_url: String,
    pub original_url: String,
    pub user_name: String,
    pub link_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link() -> NewLink {
        NewLink {
            short_url: "alice-promo-abc".to_string(),
            original_url: "https://example.com".to_string(),
            user_name: "alice".to_string(),
            link_type: "promo".to_string(),
        }
    }

    #[test]
    fn test_link_starts_without_clicks() {
        let now = Utc::now();
        let link = Link::new(1, new_link(), now);

        assert_eq!(link.id, 1);
        assert_eq!(link.short_url, "alice-promo-abc");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.user_name, "alice");
        assert_eq!(link.link_type, "promo");
        assert_eq!(link.click_count, 0);
        assert!(link.clicks.is_empty());
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_push_click_keeps_count_in_sync() {
        let mut link = Link::new(1, new_link(), Utc::now());

        link.push_click(ClickEvent::now(Some("10.0.0.1".to_string())));
        link.push_click(ClickEvent::now(None));

        assert_eq!(link.click_count, 2);
        assert_eq!(link.clicks.len(), 2);
        assert_eq!(link.clicks[0].ip.as_deref(), Some("10.0.0.1"));
        assert!(link.clicks[1].ip.is_none());
    }
}
