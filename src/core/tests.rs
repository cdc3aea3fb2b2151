#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::core::content::{FEATURES, TEAM};
    use crate::core::{HeaderState, MenuState, RevealState, SectionId, SectionScroller};

    /// Fake page with every section present, recording scroll requests.
    #[derive(Default)]
    struct FakePage {
        scrolled: RefCell<Vec<SectionId>>,
    }

    impl SectionScroller for FakePage {
        fn scroll_to(&self, section: SectionId) -> bool {
            self.scrolled.borrow_mut().push(section);
            true
        }
    }

    #[test]
    fn test_header_follows_scroll_back_and_forth() {
        let seen: Vec<HeaderState> = [0.0, 50.0, 0.0]
            .into_iter()
            .map(HeaderState::from_offset)
            .collect();
        assert_eq!(
            seen,
            vec![HeaderState::Top, HeaderState::Scrolled, HeaderState::Top]
        );
        assert!(!seen[2].is_scrolled());
    }

    #[test]
    fn test_open_menu_then_select_team() {
        let page = FakePage::default();
        let mut menu = MenuState::default();

        menu.toggle();
        assert!(menu.is_open());

        assert!(menu.select(SectionId::Team, &page));
        assert!(!menu.is_open());
        assert_eq!(*page.scrolled.borrow(), vec![SectionId::Team]);
    }

    #[test]
    fn test_every_nav_item_closes_menu() {
        let page = FakePage::default();
        for section in SectionId::ALL {
            let mut menu = MenuState::Open;
            menu.select(section, &page);
            assert_eq!(menu, MenuState::Closed, "{section}");
        }
        assert_eq!(*page.scrolled.borrow(), SectionId::ALL.to_vec());
    }

    #[test]
    fn test_sections_reveal_independently() {
        let mut sections = [RevealState::default(); 5];
        sections[0].observe(1.0);
        sections[2].observe(0.4);
        sections[2].observe(0.0);

        let visible: Vec<bool> = sections.iter().map(RevealState::is_visible).collect();
        assert_eq!(visible, vec![true, false, true, false, false]);
    }

    #[test]
    fn test_feature_and_team_order_is_fixed() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Diverse Problem Set",
                "Real-time Feedback",
                "Competitive Contests",
                "Learning Resources"
            ]
        );
        assert_eq!(TEAM.first().map(|m| m.name), Some("Nguyen Tuan Vu"));
        assert_eq!(TEAM.last().map(|m| m.name), Some("Khuat Dung An"));
    }
}
