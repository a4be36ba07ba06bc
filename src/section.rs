/// Scroll offset in pixels past which the back-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// The named anchors on the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Services,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(300.5));
        assert!(scroll_top_visible(2400.0));
    }

    #[test]
    fn test_anchors_unique() {
        let anchors = Section::ALL
            .iter()
            .map(|s| s.anchor())
            .collect::<HashSet<_>>();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn test_href() {
        assert_eq!(Section::Contact.href(), "#contact");
        assert_eq!(Section::Home.label(), "Home");
    }
}
