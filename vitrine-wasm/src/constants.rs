/// Element ids and class names the host page provides or receives.
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";
pub const BODY_PARTICLES_CLASS: &str = "has-particles";

pub const UPLOAD_AREA_ID: &str = "uploadArea";
pub const FILE_INPUT_ID: &str = "fileInput";
pub const UPLOAD_PREVIEW_ID: &str = "uploadPreview";
pub const PREVIEW_GRID_ID: &str = "previewGrid";
pub const SEND_BUTTON_ID: &str = "sendToWhatsApp";

pub const DRAGOVER_CLASS: &str = "dragover";
pub const PREVIEW_ITEM_CLASS: &str = "preview-item";
pub const REMOVE_BTN_CLASS: &str = "remove-btn";

pub const SENT_LABEL: &str = "✅ Enviado!";
pub const SENT_BACKGROUND: &str = "linear-gradient(135deg, #22c55e, #16a34a)";
pub const SEND_BACKGROUND: &str = "linear-gradient(135deg, #25D366, #128C7E)";
pub const REMOVED_LABEL: &str = "🗑️ Imagem removida";
pub const TOAST_CSS: &str = "position: fixed; top: 20px; right: 20px; \
    background: linear-gradient(135deg, #ef4444, #dc2626); color: white; \
    padding: 1rem 1.5rem; border-radius: 10px; font-weight: 600; z-index: 9999; \
    box-shadow: 0 4px 15px rgba(239, 68, 68, 0.3); transform: translateX(100%); \
    transition: transform 0.3s ease;";
