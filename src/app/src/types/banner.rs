use serde::{Deserialize, Serialize};

/// Visual kind of the status banner
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BannerKind {
    #[default]
    Neutral,
    Error,
    Success,
}

/// Status banner state
///
/// Every `show` bumps the generation; only the expiry timer of the latest
/// message is allowed to reset the kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    text: String,
    kind: BannerKind,
    active: bool,
    generation: u64,
}

impl Banner {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> BannerKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace text and kind; returns the generation the expiry timer must carry
    pub fn show(&mut self, text: impl Into<String>, kind: BannerKind) -> u64 {
        self.text = text.into();
        self.kind = kind;
        self.active = true;
        self.generation += 1;
        self.generation
    }

    /// Revert to neutral if `generation` is still the latest message
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.active {
            return false;
        }
        self.kind = BannerKind::Neutral;
        self.active = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_reverts_kind() {
        let mut banner = Banner::default();
        let generation = banner.show("bad password", BannerKind::Error);

        assert!(banner.expire(generation));
        assert_eq!(banner.kind(), BannerKind::Neutral);
        assert!(!banner.is_active());
        assert_eq!(banner.text(), "bad password");
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut banner = Banner::default();
        let first = banner.show("Scan failed", BannerKind::Error);
        let second = banner.show("Connected!", BannerKind::Success);

        assert!(!banner.expire(first));
        assert_eq!(banner.kind(), BannerKind::Success);
        assert!(banner.expire(second));
        assert_eq!(banner.kind(), BannerKind::Neutral);
    }
}
