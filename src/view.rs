#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Deck,
    Stats,
    Upload,
}

/// The two overlay toggles, kept mutually exclusive: opening one closes the
/// other, so at most one overlay covers the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    stats: bool,
    upload: bool,
}

impl Overlays {
    pub fn stats_open(&self) -> bool {
        self.stats
    }

    pub fn upload_open(&self) -> bool {
        self.upload
    }

    pub fn toggle_stats(&mut self) {
        self.stats = !self.stats;
        if self.stats {
            self.upload = false;
        }
    }

    pub fn open_upload(&mut self) {
        self.upload = true;
        self.stats = false;
    }

    pub fn close_upload(&mut self) {
        self.upload = false;
    }

    pub fn close_stats(&mut self) {
        self.stats = false;
    }
}

/// Overlays win over the deck; a missing identity wins over everything.
pub fn resolve(logged_in: bool, overlays: Overlays) -> Screen {
    if !logged_in {
        Screen::Login
    } else if overlays.stats {
        Screen::Stats
    } else if overlays.upload {
        Screen::Upload
    } else {
        Screen::Deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_always_routes_to_login() {
        let mut overlays = Overlays::default();
        overlays.toggle_stats();
        assert_eq!(resolve(false, overlays), Screen::Login);
    }

    #[test]
    fn default_route_is_the_deck() {
        assert_eq!(resolve(true, Overlays::default()), Screen::Deck);
    }

    #[test]
    fn overlays_take_precedence_over_the_deck() {
        let mut overlays = Overlays::default();
        overlays.toggle_stats();
        assert_eq!(resolve(true, overlays), Screen::Stats);
        overlays.open_upload();
        assert_eq!(resolve(true, overlays), Screen::Upload);
    }

    #[test]
    fn opening_one_overlay_closes_the_other() {
        let mut overlays = Overlays::default();
        overlays.open_upload();
        overlays.toggle_stats();
        assert!(overlays.stats_open());
        assert!(!overlays.upload_open());
        overlays.open_upload();
        assert!(!overlays.stats_open());
        assert!(overlays.upload_open());
    }

    #[test]
    fn stats_button_toggles() {
        let mut overlays = Overlays::default();
        overlays.toggle_stats();
        assert!(overlays.stats_open());
        overlays.toggle_stats();
        assert!(!overlays.stats_open());
        assert_eq!(resolve(true, overlays), Screen::Deck);
    }
}
