use crate::constants::{GLOW_ELEMENT_ID, GLOW_Z_INDEX};
use crate::dom;
use crate::effects::glow::{glow_style, glow_transform};
use glam::Vec2;
use web_sys as web;

/// Soft light that follows the raw pointer, unthrottled.
#[derive(Clone)]
pub struct AmbientGlow {
    el: web::HtmlElement,
    created: bool,
}

impl AmbientGlow {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let (el, created) = dom::ensure_element(document, GLOW_ELEMENT_ID, "div")?;
        _ = el.set_attribute("style", &glow_style(GLOW_Z_INDEX));
        Ok(Self { el, created })
    }

    pub fn follow(&self, pos: Vec2) {
        if let Some(transform) = glow_transform(pos) {
            _ = self.el.style().set_property("transform", &transform);
        }
    }

    /// Remove the element if this glow put it on the page.
    pub fn unmount(&self) {
        if self.created {
            self.el.remove();
        }
    }
}
