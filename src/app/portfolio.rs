use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use crate::tracker::{SectionId, SectionRegistry, SectionTracker, Viewport};

use super::{
    content::{ROLE, SECTIONS},
    hero::Hero,
    nav::NavBar,
    sections::{About, Contact, Education, Experience, Footer, Skills},
    viewport::DomViewport,
};

/// Reactive handle on the page's section tracker, shared through context.
///
/// Scroll events that leave the active section unchanged do not notify
/// subscribers; the memos only fire on real transitions.
#[derive(Clone, Copy)]
pub struct PageState {
    tracker: RwSignal<SectionTracker>,
    pub active: Memo<SectionId>,
    pub menu_open: Memo<bool>,
    pub loaded: Memo<bool>,
}

impl PageState {
    pub fn new() -> Self {
        let registry = SectionRegistry::new(SECTIONS.iter().map(|(id, _)| *id))
            .expect("section ids should be unique");
        let tracker = RwSignal::new(SectionTracker::new(registry));
        Self {
            tracker,
            active: Memo::new(move |_| tracker.with(|t| t.state().active_section.clone())),
            menu_open: Memo::new(move |_| tracker.with(|t| t.state().menu_open)),
            loaded: Memo::new(move |_| tracker.with(|t| t.state().loaded)),
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.with(|active| active == id)
    }

    pub fn initialize(&self) {
        self.tracker.update(SectionTracker::initialize);
    }

    pub fn sync_scroll(&self) {
        let viewport = DomViewport;
        if let Ok(scroll_y) = viewport.scroll_y() {
            self.tracker.maybe_update(|t| t.on_scroll(scroll_y, &viewport));
        }
    }

    pub fn navigate(&self, id: &str) {
        let id = SectionId::from(id);
        self.tracker.update(|t| t.navigate_to(&id, &DomViewport));
    }

    pub fn toggle_menu(&self) {
        self.tracker.update(SectionTracker::toggle_menu);
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscribes `handler` to window scroll events for the lifetime of the
/// current reactive owner. The returned closure detaches it early.
pub fn on_window_scroll(handler: impl Fn() + 'static) -> impl Fn() + Clone + Send + Sync {
    use_event_listener(use_window(), ev::scroll, move |_| handler())
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let page = PageState::new();
    provide_context(page);

    // effects only run in the browser, after the first render
    Effect::new(move |_| page.initialize());

    let _ = on_window_scroll(move || page.sync_scroll());

    view! {
        <Title text=ROLE />
        <div class="min-h-screen bg-gray-50">
            <NavBar />
            <Hero />
            <About />
            <Experience />
            <Education />
            <Skills />
            <Contact />
            <Footer />
        </div>
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use leptos::task::Executor;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_scroll() {
        let event = web_sys::Event::new("scroll").unwrap();
        window().dispatch_event(&event).unwrap();
    }

    fn counting_listener(owner: &Owner) -> (Arc<AtomicUsize>, impl Fn() + Clone) {
        let calls = Arc::new(AtomicUsize::new(0));
        let stop = owner.with(|| {
            let calls = Arc::clone(&calls);
            on_window_scroll(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        });
        (calls, stop)
    }

    #[wasm_bindgen_test]
    async fn test_scroll_listener_released_with_owner() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        let (calls, _stop) = counting_listener(&owner);
        Executor::tick().await;

        dispatch_scroll();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        owner.cleanup();
        dispatch_scroll();
        dispatch_scroll();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[wasm_bindgen_test]
    async fn test_scroll_listener_stops_early() {
        let _ = Executor::init_wasm_bindgen();
        let owner = Owner::new();
        let (calls, stop) = counting_listener(&owner);
        Executor::tick().await;

        dispatch_scroll();
        stop();
        dispatch_scroll();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[wasm_bindgen_test]
    async fn test_remount_keeps_a_single_listener() {
        let _ = Executor::init_wasm_bindgen();
        let first = Owner::new();
        let (first_calls, _) = counting_listener(&first);
        Executor::tick().await;
        first.cleanup();

        let second = Owner::new();
        let (second_calls, _) = counting_listener(&second);
        Executor::tick().await;

        dispatch_scroll();
        assert_eq!(first_calls.load(Ordering::SeqCst), 0);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        second.cleanup();
    }
}
