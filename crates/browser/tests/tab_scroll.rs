use browser::pages::showcase_page;
use browser::{NavError, PageAction, Tab, ViewportConfig};
use html::Id;
use html::traverse::find_node_by_id;
use smooth_scroll::{HistoryMode, ScrollConfig};

const HOME: &str = "https://example.com/";

fn tab() -> Tab {
    Tab::new(1, HOME, showcase_page(), ViewportConfig::default()).unwrap()
}

fn mounted_tab() -> Tab {
    let mut tab = tab();
    tab.mount_smooth_scroll(ScrollConfig::default());
    tab
}

fn link_id(tab: &Tab, href: &str) -> Id {
    tab.link_by_href(href)
        .unwrap_or_else(|| panic!("no link with href {href}"))
}

/// First child (the text node) of a link.
fn label_id(tab: &Tab, link: Id) -> Id {
    find_node_by_id(tab.document(), link).unwrap().children()[0].id()
}

#[test]
fn showcase_layout_matches_declared_heights() {
    let tab = tab();
    assert_eq!(tab.layout().content_height(), 2580.0);
    assert_eq!(tab.viewport().max_scroll(), 1812.0);
}

#[test]
fn nav_link_glides_to_section_below_offset() {
    let mut tab = mounted_tab();
    let link = link_id(&tab, "#features");

    assert_eq!(tab.click(link), None);
    assert!(tab.viewport().is_animating());
    assert_eq!(tab.viewport().scroll_target(), 400.0);
    assert_eq!(tab.url().as_str(), "https://example.com/#features");
    assert_eq!(tab.history().len(), 1);

    while tab.tick(16.0) {}
    assert_eq!(tab.scroll_y(), 400.0);
}

#[test]
fn scroll_target_accounts_for_current_position() {
    let mut tab = mounted_tab();
    tab.scroll_by(500.0);

    tab.click(link_id(&tab, "#pricing"));
    tab.settle();

    assert_eq!(tab.scroll_y(), 1800.0);
}

#[test]
fn target_above_document_top_is_clamped_by_viewport() {
    let mut tab = mounted_tab();
    tab.scroll_by(900.0);

    tab.click(link_id(&tab, "#top"));
    tab.settle();

    assert_eq!(tab.scroll_y(), 0.0);
    assert_eq!(tab.url().fragment(), Some("top"));
}

#[test]
fn missing_section_swallows_click() {
    let mut tab = mounted_tab();
    tab.scroll_by(300.0);

    assert_eq!(tab.click(link_id(&tab, "#missing-plan")), None);
    assert!(!tab.viewport().is_animating());
    assert_eq!(tab.scroll_y(), 300.0);
    assert_eq!(tab.url().as_str(), HOME);
}

#[test]
fn cross_page_links_navigate_normally() {
    let mut tab = mounted_tab();

    assert_eq!(
        tab.click(link_id(&tab, "/docs")),
        Some(PageAction::Navigate("https://example.com/docs".to_string()))
    );
    assert_eq!(
        tab.click(link_id(&tab, "https://github.com/glidepath/glidepath")),
        Some(PageAction::Navigate(
            "https://github.com/glidepath/glidepath".to_string()
        ))
    );
    assert_eq!(tab.scroll_y(), 0.0);
}

#[test]
fn without_session_fragment_links_jump_and_push_history() {
    let mut tab = tab();

    assert_eq!(tab.click(link_id(&tab, "#features")), None);
    assert!(!tab.viewport().is_animating());
    assert_eq!(tab.scroll_y(), 480.0);
    assert_eq!(tab.history().len(), 2);

    assert_eq!(tab.go_back(), None);
    assert_eq!(tab.scroll_y(), 0.0);
    assert_eq!(tab.url().as_str(), HOME);
}

#[test]
fn push_mode_adds_history_entries() {
    let mut tab = tab();
    tab.mount_smooth_scroll(ScrollConfig::default().with_history(HistoryMode::Push));

    tab.click(link_id(&tab, "#features"));
    tab.click(link_id(&tab, "#pricing"));
    tab.settle();

    assert_eq!(tab.history().len(), 3);
    assert_eq!(tab.go_back(), None);
    assert_eq!(tab.url().fragment(), Some("features"));
    assert_eq!(tab.scroll_y(), 480.0);
}

#[test]
fn remount_with_new_config_keeps_single_listener() {
    let mut tab = mounted_tab();
    tab.mount_smooth_scroll(ScrollConfig::default().with_offset(0.0));
    assert_eq!(tab.listener_count(), 1);

    tab.click(link_id(&tab, "#features"));
    tab.settle();
    assert_eq!(tab.scroll_y(), 480.0);
}

#[test]
fn unmount_restores_default_behavior() {
    let mut tab = mounted_tab();
    tab.unmount_smooth_scroll();
    tab.unmount_smooth_scroll();
    assert_eq!(tab.listener_count(), 0);
    assert!(tab.smooth_scroll().is_none());

    tab.click(link_id(&tab, "#showcase"));
    assert!(!tab.viewport().is_animating());
    assert_eq!(tab.scroll_y(), 1080.0);
}

#[test]
fn load_detaches_session_and_honors_initial_fragment() {
    let mut tab = mounted_tab();
    tab.load("https://example.com/#pricing", showcase_page()).unwrap();

    assert_eq!(tab.listener_count(), 0);
    // Instant jump to the section top, clamped to the scrollable range.
    assert_eq!(tab.scroll_y(), 1812.0);
    assert_eq!(tab.history().len(), 2);
}

#[test]
fn load_rejects_bad_urls() {
    let mut tab = tab();
    assert!(matches!(tab.load("   ", showcase_page()), Err(NavError::Empty)));
    assert!(matches!(
        tab.load("not a url", showcase_page()),
        Err(NavError::InvalidUrl { .. })
    ));
    assert_eq!(tab.history().len(), 1);
}

#[test]
fn click_at_targets_enclosing_link() {
    let mut tab = mounted_tab();

    // Inside the first nav link's label text.
    assert_eq!(tab.click_at(10.0, 75.0), None);
    tab.settle();
    assert_eq!(tab.scroll_y(), 400.0);
}

#[test]
fn reconfigure_swaps_only_a_mounted_session() {
    let mut tab = tab();
    assert!(!tab.reconfigure_smooth_scroll(ScrollConfig::default().with_offset(0.0)));
    assert_eq!(tab.listener_count(), 0);

    tab.mount_smooth_scroll(ScrollConfig::default());
    let first = tab.smooth_scroll().and_then(|s| s.listener_id());
    assert!(!tab.reconfigure_smooth_scroll(ScrollConfig::default()));
    assert!(tab.reconfigure_smooth_scroll(ScrollConfig::default().with_offset(0.0)));
    assert_eq!(tab.listener_count(), 1);
    assert_ne!(tab.smooth_scroll().and_then(|s| s.listener_id()), first);

    tab.click(link_id(&tab, "#pricing"));
    tab.settle();
    assert_eq!(tab.scroll_y(), 1812.0);
}

#[test]
fn clicking_link_label_without_session_follows_the_link() {
    let mut tab = tab();
    let link = link_id(&tab, "#showcase");
    let label = label_id(&tab, link);
    assert_eq!(tab.link_text(link).as_deref(), Some("Showcase"));

    assert_eq!(tab.click(label), None);
    assert_eq!(tab.scroll_y(), 1080.0);
    assert_eq!(tab.url().fragment(), Some("showcase"));

    let docs_label = label_id(&tab, link_id(&tab, "/docs"));
    assert_eq!(
        tab.click(docs_label),
        Some(PageAction::Navigate("https://example.com/docs".to_string()))
    );
}
