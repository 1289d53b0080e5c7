//! Home screen view state and presentation-only card data.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::errors::TabError;
use super::video::VideoRecord;

/// Horizontal drag distance (points) a swipe must exceed to change tabs.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Range the synthesized view count is drawn from.
pub const VIEW_COUNT_RANGE: std::ops::RangeInclusive<u32> = 1000..=10000;

/// Content sections along the top of the home screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HomeTab {
    Live,
    #[default]
    Recommended,
    Hot,
    Anime,
    Movies,
}

impl HomeTab {
    pub const ALL: [HomeTab; 5] = [
        HomeTab::Live,
        HomeTab::Recommended,
        HomeTab::Hot,
        HomeTab::Anime,
        HomeTab::Movies,
    ];

    pub fn index(self) -> usize {
        match self {
            HomeTab::Live => 0,
            HomeTab::Recommended => 1,
            HomeTab::Hot => 2,
            HomeTab::Anime => 3,
            HomeTab::Movies => 4,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, TabError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(TabError::InvalidIndex(index))
    }

    pub fn label(self) -> &'static str {
        match self {
            HomeTab::Live => "直播",
            HomeTab::Recommended => "推荐",
            HomeTab::Hot => "热门",
            HomeTab::Anime => "动画",
            HomeTab::Movies => "影视",
        }
    }

    fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Explicit home screen state: which tab is selected and the live drag offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HomeViewState {
    pub selected_tab: HomeTab,
    pub drag_offset: f64,
}

impl HomeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, tab: HomeTab) {
        self.selected_tab = tab;
    }

    pub fn select_index(&mut self, index: usize) -> Result<(), TabError> {
        self.selected_tab = HomeTab::from_index(index)?;
        Ok(())
    }

    /// Tracks the content offset while a drag is in progress.
    pub fn drag_changed(&mut self, translation: f64) {
        self.drag_offset = translation;
    }

    /// Settles a drag: a swipe left past the threshold moves to the next tab,
    /// a swipe right moves to the previous one. The offset always snaps back.
    pub fn drag_ended(&mut self, translation: f64) {
        if translation < -SWIPE_THRESHOLD {
            if let Some(next) = self.selected_tab.next() {
                self.selected_tab = next;
            }
        } else if translation > SWIPE_THRESHOLD {
            if let Some(prev) = self.selected_tab.previous() {
                self.selected_tab = prev;
            }
        }
        self.drag_offset = 0.0;
    }
}

/// Card shown in the recommended feed. Author and view count are synthesized
/// at render time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub video_id: i64,
    pub title: String,
    pub author: String,
    pub views: String,
    pub cover_image: String,
}

impl VideoCard {
    pub fn from_record<R: Rng + ?Sized>(record: &VideoRecord, rng: &mut R) -> Self {
        let views = rng.random_range(VIEW_COUNT_RANGE);
        Self {
            video_id: record.id,
            title: record.name.clone(),
            author: author_label(record.id),
            views: format!("{}观看", views),
            cover_image: record.cover_image.clone(),
        }
    }
}

/// Uploader label derived from a video id.
pub fn author_label(video_id: i64) -> String {
    format!("UP主 {}", video_id)
}
