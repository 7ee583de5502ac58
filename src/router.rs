/// Main-area pages reachable from the sidebar. The enum is the whole page
/// universe; string ids only exist at the rendering boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
    Modules,
    AiChat,
    EvacuationMap,
    Sos,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Dashboard,
        Page::Modules,
        Page::AiChat,
        Page::EvacuationMap,
        Page::Sos,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dashboard => "dashboard",
            Page::Modules => "modules",
            Page::AiChat => "ai-chat",
            Page::EvacuationMap => "evacuation-map",
            Page::Sos => "sos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Modules => "Learning Modules",
            Page::AiChat => "AI Assistant",
            Page::EvacuationMap => "Evacuation Map",
            Page::Sos => "Emergency SOS",
        }
    }

    /// Unrecognized ids normalize to `Home` rather than being an error.
    pub fn from_id(id: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .unwrap_or(Page::Home)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: Page,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn select(&mut self, page: Page) {
        self.current = page;
    }

    /// Selects by string id, falling back to `Home` for unknown ids so the
    /// router state stays consistent with what gets rendered.
    pub fn select_id(&mut self, id: &str) {
        self.current = Page::from_id(id);
    }

    pub fn reset(&mut self) {
        self.current = Page::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips_through_its_id() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), page);
        }
    }

    #[test]
    fn unknown_id_falls_back_to_home() {
        let mut router = ViewRouter::new();
        router.select(Page::Sos);
        router.select_id("teacher-lounge");
        assert_eq!(router.current(), Page::Home);
    }

    #[test]
    fn any_page_reachable_from_any_page() {
        let mut router = ViewRouter::new();
        for from in Page::ALL {
            router.select(from);
            for to in Page::ALL {
                router.select(to);
                assert_eq!(router.current(), to);
                router.select(from);
            }
        }
    }

    #[test]
    fn starts_at_home_and_resets_to_home() {
        let mut router = ViewRouter::new();
        assert_eq!(router.current(), Page::Home);
        router.select(Page::Dashboard);
        router.reset();
        assert_eq!(router.current(), Page::Home);
    }
}
