use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Collapse;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
    fn new(element: &Element) -> Result<Collapse, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn show(this: &Collapse) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn hide(this: &Collapse) -> Result<(), JsValue>;
}

/// Something that can be opened and closed, like the mobile navigation drawer.
pub trait CollapsiblePanel {
    fn is_shown(&self) -> bool;
    fn show(&self);
    fn hide(&self);
}

/// A `.collapse` element driven through Bootstrap's `Collapse` plugin.
pub struct BootstrapPanel {
    element: Element,
}

impl BootstrapPanel {
    pub fn from_element(element: Element) -> Self {
        Self { element }
    }

    fn plugin(&self) -> Option<Collapse> {
        match Collapse::new(&self.element) {
            Ok(collapse) => Some(collapse),
            Err(e) => {
                warn!("Bootstrap Collapse unavailable: {:?}", e);
                None
            }
        }
    }
}

impl CollapsiblePanel for BootstrapPanel {
    fn is_shown(&self) -> bool {
        self.element.class_list().contains("show")
    }

    fn show(&self) {
        match self.plugin() {
            Some(collapse) => {
                if let Err(e) = collapse.show() {
                    warn!("Failed to open panel: {:?}", e);
                }
            }
            None => {
                let _ = self.element.class_list().add_1("show");
            }
        }
    }

    fn hide(&self) {
        match self.plugin() {
            Some(collapse) => {
                if let Err(e) = collapse.hide() {
                    warn!("Failed to close panel: {:?}", e);
                }
            }
            None => {
                let _ = self.element.class_list().remove_1("show");
            }
        }
    }
}

/// Hides the panel if it is open. Returns whether anything was closed.
pub fn close_if_open(panel: &impl CollapsiblePanel) -> bool {
    if panel.is_shown() {
        panel.hide();
        true
    } else {
        false
    }
}

/// Closes the mobile navigation drawer after a nav link was used.
pub fn close_mobile_nav() {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(".navbar-collapse").ok().flatten())
    else {
        return;
    };
    close_if_open(&BootstrapPanel::from_element(element));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct FakePanel {
        open: Cell<bool>,
        hides: Cell<u32>,
    }

    impl FakePanel {
        fn new(open: bool) -> Self {
            Self { open: Cell::new(open), hides: Cell::new(0) }
        }
    }

    impl CollapsiblePanel for FakePanel {
        fn is_shown(&self) -> bool {
            self.open.get()
        }

        fn show(&self) {
            self.open.set(true);
        }

        fn hide(&self) {
            self.hides.set(self.hides.get() + 1);
            self.open.set(false);
        }
    }

    #[test]
    fn open_panel_is_hidden() {
        let panel = FakePanel::new(true);
        assert!(close_if_open(&panel));
        assert!(!panel.is_shown());
        assert_eq!(panel.hides.get(), 1);
    }

    #[test]
    fn closed_panel_is_left_alone() {
        let panel = FakePanel::new(false);
        assert!(!close_if_open(&panel));
        assert_eq!(panel.hides.get(), 0);

        panel.show();
        assert!(close_if_open(&panel));
    }
}
