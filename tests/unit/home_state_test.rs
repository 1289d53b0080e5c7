//! Tests for home screen tab selection, swipe handling and card decoration.

use bilihome::types::errors::TabError;
use bilihome::types::home::{HomeTab, HomeViewState, VideoCard, VIEW_COUNT_RANGE};
use bilihome::types::video::VideoRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

#[test]
fn test_default_tab_is_recommended() {
    let state = HomeViewState::new();
    assert_eq!(state.selected_tab, HomeTab::Recommended);
    assert_eq!(state.drag_offset, 0.0);
}

#[rstest]
#[case(HomeTab::Live, "直播")]
#[case(HomeTab::Recommended, "推荐")]
#[case(HomeTab::Hot, "热门")]
#[case(HomeTab::Anime, "动画")]
#[case(HomeTab::Movies, "影视")]
fn test_tab_labels(#[case] tab: HomeTab, #[case] label: &str) {
    assert_eq!(tab.label(), label);
}

#[rstest]
#[case(HomeTab::Recommended, -150.0, HomeTab::Hot)]
#[case(HomeTab::Recommended, 150.0, HomeTab::Live)]
#[case(HomeTab::Recommended, -100.0, HomeTab::Recommended)]
#[case(HomeTab::Recommended, 100.0, HomeTab::Recommended)]
#[case(HomeTab::Recommended, 40.0, HomeTab::Recommended)]
#[case(HomeTab::Movies, -300.0, HomeTab::Movies)]
#[case(HomeTab::Live, 300.0, HomeTab::Live)]
#[case(HomeTab::Anime, -101.0, HomeTab::Movies)]
fn test_drag_ended_moves_between_tabs(
    #[case] start: HomeTab,
    #[case] translation: f64,
    #[case] expected: HomeTab,
) {
    let mut state = HomeViewState::new();
    state.select(start);
    state.drag_changed(translation);
    assert_eq!(state.drag_offset, translation);

    state.drag_ended(translation);
    assert_eq!(state.selected_tab, expected);
    assert_eq!(state.drag_offset, 0.0);
}

#[test]
fn test_select_index_bounds() {
    let mut state = HomeViewState::new();
    state.select_index(4).unwrap();
    assert_eq!(state.selected_tab, HomeTab::Movies);

    let result = state.select_index(5);
    assert!(matches!(result, Err(TabError::InvalidIndex(5))));
    assert_eq!(state.selected_tab, HomeTab::Movies);
}

#[test]
fn test_video_card_labels() {
    let record = VideoRecord {
        id: 13,
        name: "SQLite数据库使用".to_string(),
        cover_image: "database".to_string(),
    };
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let card = VideoCard::from_record(&record, &mut rng);
        assert_eq!(card.author, "UP主 13");
        assert_eq!(card.title, record.name);
        assert_eq!(card.cover_image, "database");

        let count: u32 = card
            .views
            .strip_suffix("观看")
            .expect("views label ends with 观看")
            .parse()
            .unwrap();
        assert!(VIEW_COUNT_RANGE.contains(&count), "out of range: {}", count);
    }
}
