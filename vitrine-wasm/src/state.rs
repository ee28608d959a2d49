use vitrine_core::{ParticleField, UploadSelector};
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    Window,
};

use crate::upload::BrowserFile;

/// Background animation state shared between the frame loop and the resize
/// listener through an `Rc<RefCell<_>>`.
pub struct Background {
    pub window: Window,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub field: ParticleField,
}

/// Upload widget state shared across its DOM callbacks.
pub struct UploadWidget {
    pub window: Window,
    pub document: Document,
    pub area: HtmlElement,
    pub input: HtmlInputElement,
    pub preview: HtmlElement,
    pub grid: HtmlElement,
    pub send_button: HtmlElement,
    /// Label the send button returns to after the sent feedback.
    pub send_label: String,
    pub selector: UploadSelector<BrowserFile>,
    /// Object URLs backing the current thumbnails; revoked on rebuild.
    pub preview_urls: Vec<String>,
}
