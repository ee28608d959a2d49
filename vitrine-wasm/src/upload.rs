use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::{FileMeta, Phase, SelectionView, Transient, UploadConfig, UploadSelector};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, DragEvent, Element, Event, File, FileList, HtmlElement, HtmlImageElement,
    HtmlInputElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, Url, Window,
};

use crate::constants::*;
use crate::state::UploadWidget;
use crate::utils::{element_by_id, log, set_display};

/// A browser `File` with its name and type read once up front.
pub struct BrowserFile {
    pub file: File,
    name: String,
    media_type: String,
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        BrowserFile {
            name: file.name(),
            media_type: file.type_(),
            file,
        }
    }
}

impl FileMeta for BrowserFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }
}

fn file_list(list: Option<FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(BrowserFile::from)
        .collect()
}

/// `setTimeout` delay for an offset, saturating instead of wrapping.
fn timeout_delay(at: u32) -> i32 {
    i32::try_from(at).unwrap_or(i32::MAX)
}

/// Run `apply` at each phase boundary of `t`. Boundaries at 0ms run inline.
fn run_transient(window: &Window, t: Transient, apply: Rc<dyn Fn(Phase)>) {
    for (at, phase) in t.schedule() {
        if at == 0 {
            apply(phase);
            continue;
        }
        let apply = apply.clone();
        let cb = Closure::once_into_js(move || apply(phase));
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), timeout_delay(at))
            .is_err()
        {
            log("setTimeout failed; notification left in place");
        }
    }
}

fn show_remove_toast(window: &Window, document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    let toast = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    toast.style().set_css_text(TOAST_CSS);
    toast.set_inner_html(REMOVED_LABEL);
    body.append_child(&toast)?;
    let apply: Rc<dyn Fn(Phase)> = Rc::new(move |phase| match phase {
        Phase::Visible => {
            let _ = toast.style().set_property("transform", "translateX(0)");
        }
        Phase::Leaving => {
            let _ = toast.style().set_property("transform", "translateX(100%)");
        }
        Phase::Done => toast.remove(),
        Phase::Pending => {}
    });
    run_transient(window, Transient::removal_toast(), apply);
    Ok(())
}

/// Flash the sent state on `button`, then restore `label`.
fn show_sent_feedback(window: &Window, button: &HtmlElement, label: &str, cfg: &UploadConfig) {
    let button = button.clone();
    let original = label.to_string();
    let apply: Rc<dyn Fn(Phase)> = Rc::new(move |phase| match phase {
        Phase::Visible => {
            button.set_inner_html(SENT_LABEL);
            let _ = button.style().set_property("background", SENT_BACKGROUND);
        }
        Phase::Done => {
            button.set_inner_html(&original);
            let _ = button.style().set_property("background", SEND_BACKGROUND);
        }
        Phase::Pending | Phase::Leaving => {}
    });
    run_transient(window, Transient::button_feedback(cfg.sent_feedback_ms), apply);
}

impl UploadWidget {
    fn alert(&self, msg: &str) {
        let _ = self.window.alert_with_message(msg);
    }

    /// Rebuild the thumbnail grid from the current selection.
    fn render_preview(&mut self) -> Result<(), JsValue> {
        for url in self.preview_urls.drain(..) {
            let _ = Url::revoke_object_url(&url);
        }
        self.grid.set_inner_html("");
        for index in 0..self.selector.len() {
            let file = self.selector.files()[index].file.clone();
            let item = self.document.create_element("div")?;
            item.set_class_name(PREVIEW_ITEM_CLASS);
            item.set_attribute("data-index", &index.to_string())?;

            let img = self
                .document
                .create_element("img")?
                .dyn_into::<HtmlImageElement>()?;
            let url = Url::create_object_url_with_blob(&file)?;
            img.set_src(&url);
            self.preview_urls.push(url);
            img.set_alt(&file.name());
            item.append_child(&img)?;

            let remove = self
                .document
                .create_element("button")?
                .dyn_into::<HtmlElement>()?;
            remove.set_class_name(REMOVE_BTN_CLASS);
            remove.set_inner_html("×");
            remove.set_title("Remover imagem");
            remove.set_attribute("data-index", &index.to_string())?;
            item.append_child(&remove)?;

            self.grid.append_child(&item)?;
        }
        if self.selector.is_empty() {
            set_display(&self.preview, "none");
        }
        Ok(())
    }

    fn show_preview(&self) {
        set_display(&self.preview, "block");
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        self.preview
            .scroll_into_view_with_scroll_into_view_options(&opts);
    }

    pub fn select_files(&mut self, candidates: Vec<BrowserFile>) -> Result<(), JsValue> {
        match self.selector.select_files(candidates) {
            Ok(n) => {
                log(&format!("{n} image(s) selected"));
                self.render_preview()?;
                self.show_preview();
            }
            Err(e) => {
                log(&format!("selection rejected: {e}"));
                self.alert(&e.to_string());
            }
        }
        Ok(())
    }

    pub fn remove_file(&mut self, index: usize) -> Result<(), JsValue> {
        match self.selector.remove_file(index) {
            Ok(removed) => {
                match self.selector.view() {
                    SelectionView::Empty => log(&format!("removed {}; selection empty", removed.name())),
                    SelectionView::HasFiles(n) => log(&format!("removed {}; {n} left", removed.name())),
                }
                self.render_preview()?;
                // Lets the same file be picked again.
                self.input.set_value("");
                show_remove_toast(&self.window, &self.document)?;
            }
            Err(e) => log(&format!("remove ignored: {e}")),
        }
        Ok(())
    }

    pub fn submit(&self) -> Result<(), JsValue> {
        let url = match self.selector.submit_url() {
            Ok(url) => url,
            Err(e) => {
                self.alert(&e.to_string());
                return Ok(());
            }
        };
        self.window.open_with_url_and_target(&url, "_blank")?;
        show_sent_feedback(
            &self.window,
            &self.send_button,
            &self.send_label,
            self.selector.config(),
        );
        Ok(())
    }
}

fn on_drag<F>(target: &HtmlElement, kind: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(DragEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| handler(e)));
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        log(&format!("upload widget error: {e:?}"));
    }
}

/// Wires the drag-and-drop area, file input, preview grid and send button.
pub fn attach_upload(state: Rc<RefCell<UploadWidget>>) -> Result<(), JsValue> {
    let (area, input, grid, button) = {
        let s = state.borrow();
        (
            s.area.clone(),
            s.input.clone(),
            s.grid.clone(),
            s.send_button.clone(),
        )
    };

    {
        let area2 = area.clone();
        on_drag(&area, "dragover", move |e| {
            e.prevent_default();
            let _ = area2.class_list().add_1(DRAGOVER_CLASS);
        })?;
    }
    {
        let area2 = area.clone();
        on_drag(&area, "dragleave", move |e| {
            e.prevent_default();
            let _ = area2.class_list().remove_1(DRAGOVER_CLASS);
        })?;
    }
    {
        let area2 = area.clone();
        let st = state.clone();
        on_drag(&area, "drop", move |e| {
            e.prevent_default();
            let _ = area2.class_list().remove_1(DRAGOVER_CLASS);
            let files = file_list(e.data_transfer().and_then(|dt| dt.files()));
            report(st.borrow_mut().select_files(files));
        })?;
    }

    {
        let st = state.clone();
        let input2 = input.clone();
        let onchange = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            let files = file_list(input2.files());
            report(st.borrow_mut().select_files(files));
        }));
        input.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    // One delegated listener serves every remove button the grid ever holds.
    {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(btn)) = target.closest(&format!(".{REMOVE_BTN_CLASS}")) else {
                return;
            };
            let Some(index) = btn
                .get_attribute("data-index")
                .and_then(|v| v.parse::<usize>().ok())
            else {
                log("remove button without a data-index");
                return;
            };
            report(st.borrow_mut().remove_file(index));
        }));
        grid.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            report(st.borrow().submit());
        }));
        button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

/// Build the widget from the page's elements. Returns `None` on pages that
/// do not carry the upload section.
pub fn start_upload(
    window: &Window,
    document: &Document,
    cfg: UploadConfig,
) -> Result<Option<Rc<RefCell<UploadWidget>>>, JsValue> {
    let Some(area) = element_by_id::<HtmlElement>(document, UPLOAD_AREA_ID) else {
        return Ok(None);
    };
    let input = element_by_id::<HtmlInputElement>(document, FILE_INPUT_ID)
        .ok_or_else(|| JsValue::from_str("#fileInput missing"))?;
    let preview = element_by_id::<HtmlElement>(document, UPLOAD_PREVIEW_ID)
        .ok_or_else(|| JsValue::from_str("#uploadPreview missing"))?;
    let grid = element_by_id::<HtmlElement>(document, PREVIEW_GRID_ID)
        .ok_or_else(|| JsValue::from_str("#previewGrid missing"))?;
    let send_button = element_by_id::<HtmlElement>(document, SEND_BUTTON_ID)
        .ok_or_else(|| JsValue::from_str("#sendToWhatsApp missing"))?;
    let send_label = send_button.inner_html();

    let state = Rc::new(RefCell::new(UploadWidget {
        window: window.clone(),
        document: document.clone(),
        area,
        input,
        preview,
        grid,
        send_button,
        send_label,
        selector: UploadSelector::new(cfg),
        preview_urls: Vec::new(),
    }));
    attach_upload(state.clone())?;
    Ok(Some(state))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn html(document: &Document, tag: &str) -> HtmlElement {
        document.create_element(tag).unwrap().dyn_into().unwrap()
    }

    fn widget(cfg: UploadConfig) -> UploadWidget {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let body = document.body().unwrap();
        let preview = html(&document, "section");
        let grid = html(&document, "div");
        preview.append_child(&grid).unwrap();
        body.append_child(&preview).unwrap();
        let send_button = html(&document, "button");
        send_button.set_inner_html("Enviar");
        let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
        input.set_value("fotos.jpg");
        UploadWidget {
            area: html(&document, "div"),
            input,
            preview,
            grid,
            send_label: send_button.inner_html(),
            send_button,
            selector: UploadSelector::new(cfg),
            preview_urls: Vec::new(),
            window,
            document,
        }
    }

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    fn preview_rebuilds_after_each_removal() {
        let mut w = widget(UploadConfig::default());
        w.select_files(vec![file("image1.jpg", "image/jpeg"), file("image2.jpg", "image/jpeg")])
            .unwrap();
        assert_eq!(w.grid.child_element_count(), 2);
        assert_eq!(w.preview.style().get_property_value("display").unwrap(), "block");
        assert_eq!(w.preview_urls.len(), 2);

        w.remove_file(0).unwrap();
        assert_eq!(w.grid.child_element_count(), 1);
        let item = w.grid.first_element_child().unwrap();
        assert_eq!(item.class_name(), PREVIEW_ITEM_CLASS);
        assert_eq!(item.get_attribute("data-index").as_deref(), Some("0"));
        let img = item.query_selector("img").unwrap().unwrap();
        assert_eq!(img.get_attribute("alt").as_deref(), Some("image2.jpg"));
        assert_eq!(w.input.value(), "");
        assert_eq!(w.preview_urls.len(), 1);

        w.remove_file(0).unwrap();
        assert_eq!(w.grid.child_element_count(), 0);
        assert_eq!(w.preview.style().get_property_value("display").unwrap(), "none");
        assert!(w.preview_urls.is_empty());
    }

    #[wasm_bindgen_test]
    fn stale_remove_index_changes_nothing() {
        let mut w = widget(UploadConfig::default());
        w.select_files(vec![file("a.png", "image/png")]).unwrap();
        w.remove_file(3).unwrap();
        assert_eq!(w.grid.child_element_count(), 1);
        assert_eq!(w.input.value(), "fotos.jpg");
    }

    #[wasm_bindgen_test]
    async fn sent_feedback_restores_label_after_repeat_clicks() {
        let w = widget(UploadConfig {
            sent_feedback_ms: 30,
            ..UploadConfig::default()
        });
        show_sent_feedback(&w.window, &w.send_button, &w.send_label, w.selector.config());
        assert_eq!(w.send_button.inner_html(), SENT_LABEL);
        show_sent_feedback(&w.window, &w.send_button, &w.send_label, w.selector.config());
        assert_eq!(w.send_button.inner_html(), SENT_LABEL);
        sleep(80).await;
        assert_eq!(w.send_button.inner_html(), "Enviar");
    }

    #[wasm_bindgen_test]
    fn oversized_delays_saturate() {
        assert_eq!(timeout_delay(3000), 3000);
        assert_eq!(timeout_delay(u32::MAX), i32::MAX);
    }

    fn file(name: &str, ty: &str) -> BrowserFile {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str("x"));
        let opts = FilePropertyBag::new();
        opts.set_type(ty);
        File::new_with_str_sequence_and_options(&parts, name, &opts)
            .unwrap()
            .into()
    }

    #[wasm_bindgen_test]
    fn browser_files_expose_metadata() {
        let f = file("a.png", "image/png");
        assert_eq!(f.name(), "a.png");
        assert_eq!(f.media_type(), "image/png");
        assert_eq!(f.file.name(), "a.png");
    }

    #[wasm_bindgen_test]
    fn selection_keeps_handles_of_images_only() {
        let mut sel: UploadSelector<BrowserFile> = UploadSelector::default();
        let n = sel
            .select_files(vec![file("doc.pdf", "application/pdf"), file("b.jpg", "image/jpeg")])
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(sel.files()[0].file.name(), "b.jpg");
    }

    #[wasm_bindgen_test]
    fn missing_file_list_is_empty() {
        assert!(file_list(None).is_empty());
    }
}
