use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::tracker::{SectionGeometry, SectionId, SmoothScroll, Viewport, ViewportError};

/// The browser window, with sections looked up by element id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl DomViewport {
    fn element(&self, id: &SectionId) -> Result<HtmlElement, ViewportError> {
        document()
            .get_element_by_id(id.as_str())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| ViewportError::SectionNotFound(id.clone()))
    }
}

impl Viewport for DomViewport {
    fn scroll_y(&self) -> Result<f64, ViewportError> {
        window()
            .scroll_y()
            .map_err(|e| ViewportError::Unavailable(format!("{e:?}")))
    }

    fn section_geometry(&self, id: &SectionId) -> Result<SectionGeometry, ViewportError> {
        let el = self.element(id)?;
        Ok(SectionGeometry::new(el.offset_top(), el.offset_height()))
    }
}

impl SmoothScroll for DomViewport {
    fn scroll_into_view(&self, id: &SectionId) -> Result<(), ViewportError> {
        let el = self.element(id)?;
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}
