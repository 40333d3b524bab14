//! Scroll-driven active-section tracking and mobile menu state.
//!
//! [`SectionTracker`] is a plain state object: every transition is a method
//! call and the platform is reached only through the [`Viewport`] and
//! [`SmoothScroll`] traits, so it can be driven by the browser or by a fake in
//! tests.

use std::{fmt, sync::Arc};

use thiserror::Error;

/// Height compensation for the fixed navigation bar.
pub const FIXED_HEADER_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(Arc<str>);

impl SectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical extent of a rendered section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGeometry {
    pub offset_top: i32,
    pub offset_height: i32,
}

impl SectionGeometry {
    pub fn new(offset_top: i32, offset_height: i32) -> Self {
        Self {
            offset_top,
            offset_height,
        }
    }

    /// Half-open containment: `[offset_top, offset_top + offset_height)`.
    pub fn contains(&self, probe: f64) -> bool {
        let top = f64::from(self.offset_top);
        let bottom = top + f64::from(self.offset_height);
        probe >= top && probe < bottom
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section registry must contain at least one section")]
    Empty,
    #[error("section '{0}' is registered more than once")]
    Duplicate(SectionId),
}

/// Ordered list of navigable sections, top to bottom.
///
/// Order is priority: when regions overlap, the earlier section wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<SectionId>,
}

impl SectionRegistry {
    pub fn new<I, S>(ids: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<SectionId>,
    {
        let mut sections: Vec<SectionId> = Vec::new();
        for id in ids {
            let id = id.into();
            if sections.contains(&id) {
                return Err(RegistryError::Duplicate(id));
            }
            sections.push(id);
        }
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { sections })
    }

    pub fn first(&self) -> &SectionId {
        // non-empty by construction
        &self.sections[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false: [`SectionRegistry::new`] rejects an empty id list.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    #[error("no element for section '{0}'")]
    SectionNotFound(SectionId),
    #[error("viewport unavailable: {0}")]
    Unavailable(String),
}

/// Read-only view of the rendered document.
pub trait Viewport {
    fn scroll_y(&self) -> Result<f64, ViewportError>;
    fn section_geometry(&self, id: &SectionId) -> Result<SectionGeometry, ViewportError>;
}

/// Animated scrolling, fire and forget.
pub trait SmoothScroll {
    fn scroll_into_view(&self, id: &SectionId) -> Result<(), ViewportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    pub loaded: bool,
    pub active_section: SectionId,
    pub menu_open: bool,
}

#[derive(Debug, Clone)]
pub struct SectionTracker {
    registry: SectionRegistry,
    header_offset: f64,
    state: TrackerState,
}

impl SectionTracker {
    pub fn new(registry: SectionRegistry) -> Self {
        let state = TrackerState {
            loaded: false,
            active_section: registry.first().clone(),
            menu_open: false,
        };
        Self {
            registry,
            header_offset: FIXED_HEADER_OFFSET,
            state,
        }
    }

    pub fn with_header_offset(mut self, header_offset: f64) -> Self {
        self.header_offset = header_offset;
        self
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn menu(&self) -> MenuState {
        if self.state.menu_open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn load(&self) -> LoadState {
        if self.state.loaded {
            LoadState::Loaded
        } else {
            LoadState::Pending
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.state.active_section == id
    }

    /// Marks the first render as done so entrance animations can run.
    pub fn initialize(&mut self) {
        if !self.state.loaded {
            log::debug!("section tracker loaded");
            self.state.loaded = true;
        }
    }

    /// First registered section whose extent contains `scroll_y` plus the
    /// header offset. Sections the viewport cannot measure are skipped.
    pub fn active_at<V: Viewport>(&self, scroll_y: f64, viewport: &V) -> Option<&SectionId> {
        let probe = scroll_y + self.header_offset;
        self.registry.iter().find(|id| {
            viewport
                .section_geometry(id)
                .is_ok_and(|geometry| geometry.contains(probe))
        })
    }

    /// Recomputes the active section from absolute geometry. Returns whether
    /// it changed; with no match the previous value is kept.
    pub fn on_scroll<V: Viewport>(&mut self, scroll_y: f64, viewport: &V) -> bool {
        let Some(found) = self.active_at(scroll_y, viewport) else {
            return false;
        };
        if *found == self.state.active_section {
            return false;
        }
        let found = found.clone();
        log::debug!("active section: {} -> {}", self.state.active_section, found);
        self.state.active_section = found;
        true
    }

    /// Starts a smooth scroll to `id` and closes the menu.
    ///
    /// A section the scroller cannot find is ignored. The active section is
    /// not touched here; it follows from the scroll events the animation
    /// produces.
    pub fn navigate_to<S: SmoothScroll>(&mut self, id: &SectionId, scroller: &S) {
        let _ = scroller.scroll_into_view(id);
        self.state.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    struct FakeViewport {
        scroll_y: f64,
        geometry: HashMap<String, SectionGeometry>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn with(mut self, id: &str, top: i32, height: i32) -> Self {
            self.geometry
                .insert(id.to_string(), SectionGeometry::new(top, height));
            self
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> Result<f64, ViewportError> {
            Ok(self.scroll_y)
        }

        fn section_geometry(&self, id: &SectionId) -> Result<SectionGeometry, ViewportError> {
            self.geometry
                .get(id.as_str())
                .copied()
                .ok_or_else(|| ViewportError::SectionNotFound(id.clone()))
        }
    }

    impl SmoothScroll for FakeViewport {
        fn scroll_into_view(&self, id: &SectionId) -> Result<(), ViewportError> {
            if !self.geometry.contains_key(id.as_str()) {
                return Err(ViewportError::SectionNotFound(id.clone()));
            }
            self.scrolled_to.borrow_mut().push(id.to_string());
            Ok(())
        }
    }

    fn page() -> (SectionTracker, FakeViewport) {
        let registry = SectionRegistry::new(["home", "about", "experience"]).unwrap();
        let viewport = FakeViewport::default()
            .with("home", 0, 500)
            .with("about", 500, 600)
            .with("experience", 1100, 700);
        (SectionTracker::new(registry), viewport)
    }

    #[test]
    fn test_initial_state() {
        let (tracker, _) = page();
        assert_eq!(tracker.state().active_section, "home");
        assert!(!tracker.state().loaded);
        assert!(!tracker.state().menu_open);
        assert_eq!(tracker.menu(), MenuState::Closed);
        assert_eq!(tracker.load(), LoadState::Pending);
    }

    #[test]
    fn test_registry_rejects_empty_and_duplicates() {
        let empty: [&str; 0] = [];
        assert_eq!(SectionRegistry::new(empty), Err(RegistryError::Empty));
        assert_eq!(
            SectionRegistry::new(["home", "about", "home"]),
            Err(RegistryError::Duplicate("home".into()))
        );
        let registry = SectionRegistry::new(["home", "about"]).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.contains("about"));
        assert!(!registry.contains("contact"));
    }

    #[test]
    fn test_scroll_into_middle_section() {
        let (mut tracker, viewport) = page();
        assert!(tracker.on_scroll(450.0, &viewport));
        assert_eq!(tracker.state().active_section, "about");
        assert!(tracker.is_active("about"));
    }

    #[test]
    fn test_scroll_past_last_section_keeps_previous() {
        let (mut tracker, viewport) = page();
        tracker.on_scroll(450.0, &viewport);
        tracker.on_scroll(50.0, &viewport);
        assert_eq!(tracker.state().active_section, "home");

        assert!(!tracker.on_scroll(5000.0, &viewport));
        assert_eq!(tracker.state().active_section, "home");
    }

    #[test]
    fn test_interval_is_half_open() {
        let (mut tracker, viewport) = page();
        // probe == 500 is the first pixel of about, not the last of home
        tracker.on_scroll(400.0, &viewport);
        assert_eq!(tracker.state().active_section, "about");
        tracker.on_scroll(399.5, &viewport);
        assert_eq!(tracker.state().active_section, "home");
    }

    #[test]
    fn test_overlapping_sections_first_match_wins() {
        let registry = SectionRegistry::new(["hero", "banner"]).unwrap();
        let viewport = FakeViewport::default()
            .with("hero", 0, 800)
            .with("banner", 200, 800);
        let mut tracker = SectionTracker::new(registry);
        tracker.on_scroll(300.0, &viewport);
        assert_eq!(tracker.state().active_section, "hero");
        tracker.on_scroll(750.0, &viewport);
        assert_eq!(tracker.state().active_section, "banner");
    }

    #[test]
    fn test_unmeasurable_sections_are_skipped() {
        let registry = SectionRegistry::new(["home", "ghost", "about"]).unwrap();
        let viewport = FakeViewport::default()
            .with("home", 0, 500)
            .with("about", 500, 600);
        let mut tracker = SectionTracker::new(registry);
        tracker.on_scroll(450.0, &viewport);
        assert_eq!(tracker.state().active_section, "about");
    }

    #[test]
    fn test_on_scroll_is_idempotent() {
        let (mut tracker, viewport) = page();
        assert!(tracker.on_scroll(1200.0, &viewport));
        let once = tracker.state().clone();
        assert!(!tracker.on_scroll(1200.0, &viewport));
        assert_eq!(tracker.state(), &once);
        assert_eq!(once.active_section, "experience");
    }

    #[test]
    fn test_custom_header_offset() {
        let (tracker, viewport) = page();
        let tracker = tracker.with_header_offset(0.0);
        assert_eq!(tracker.active_at(450.0, &viewport).unwrap(), &"home");
        assert_eq!(tracker.active_at(500.0, &viewport).unwrap(), &"about");
    }

    #[test]
    fn test_toggle_menu() {
        let (mut tracker, _) = page();
        tracker.toggle_menu();
        assert_eq!(tracker.menu(), MenuState::Open);
        tracker.toggle_menu();
        assert_eq!(tracker.menu(), MenuState::Closed);
    }

    #[test]
    fn test_navigate_closes_menu_and_scrolls() {
        let (mut tracker, viewport) = page();
        tracker.toggle_menu();
        tracker.navigate_to(&"experience".into(), &viewport);
        assert!(!tracker.state().menu_open);
        assert_eq!(*viewport.scrolled_to.borrow(), vec!["experience".to_string()]);
        // highlighting waits for the resulting scroll events
        assert_eq!(tracker.state().active_section, "home");
    }

    #[test]
    fn test_navigate_to_missing_section_still_closes_menu() {
        let (mut tracker, viewport) = page();
        tracker.toggle_menu();
        tracker.navigate_to(&"contact".into(), &viewport);
        assert!(!tracker.state().menu_open);
        assert!(viewport.scrolled_to.borrow().is_empty());

        // closed stays closed
        tracker.navigate_to(&"contact".into(), &viewport);
        assert_eq!(tracker.menu(), MenuState::Closed);
    }

    #[test]
    fn test_initialize_is_one_way() {
        let (mut tracker, viewport) = page();
        tracker.initialize();
        tracker.initialize();
        tracker.toggle_menu();
        tracker.on_scroll(450.0, &viewport);
        tracker.navigate_to(&"home".into(), &viewport);
        assert_eq!(tracker.load(), LoadState::Loaded);
    }
}
