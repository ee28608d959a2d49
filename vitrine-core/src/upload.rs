use thiserror::Error;

use crate::config::UploadConfig;
use crate::message::{full_message, whatsapp_url};

/// Rejected upload actions. The display text is shown to the user as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Por favor, selecione apenas arquivos de imagem (JPG, PNG, etc.)")]
    NoImages,
    #[error("Nenhum arquivo selecionado!")]
    NothingSelected,
    #[error("índice {index} fora da seleção de {len} arquivo(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Name and declared media type of a candidate file.
///
/// The browser binding wraps its file handles in a type implementing this so
/// the selection can carry them alongside the metadata.
pub trait FileMeta {
    fn name(&self) -> &str;
    fn media_type(&self) -> &str;

    fn is_image(&self, prefix: &str) -> bool {
        self.media_type().starts_with(prefix)
    }
}

/// Plain file metadata with no handle attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        SelectedFile {
            name: name.into(),
            media_type: media_type.into(),
        }
    }
}

impl FileMeta for SelectedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionView {
    Empty,
    HasFiles(usize),
}

/// Ordered image selection backing the upload widget.
///
/// A new selection replaces the old one; duplicates are kept.
#[derive(Clone, Debug)]
pub struct UploadSelector<F = SelectedFile> {
    files: Vec<F>,
    cfg: UploadConfig,
}

impl<F: FileMeta> Default for UploadSelector<F> {
    fn default() -> Self {
        UploadSelector::new(UploadConfig::default())
    }
}

impl<F: FileMeta> UploadSelector<F> {
    pub fn new(cfg: UploadConfig) -> Self {
        UploadSelector {
            files: Vec::new(),
            cfg,
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.cfg
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn view(&self) -> SelectionView {
        match self.files.len() {
            0 => SelectionView::Empty,
            n => SelectionView::HasFiles(n),
        }
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name()).collect()
    }

    /// Keep only images from `candidates` and make them the selection.
    /// Returns the new selection size; on error nothing changes.
    pub fn select_files<I>(&mut self, candidates: I) -> Result<usize, UploadError>
    where
        I: IntoIterator<Item = F>,
    {
        let prefix = self.cfg.image_prefix.as_str();
        let images: Vec<F> = candidates
            .into_iter()
            .filter(|f| f.is_image(prefix))
            .collect();
        if images.is_empty() {
            return Err(UploadError::NoImages);
        }
        self.files = images;
        Ok(self.files.len())
    }

    pub fn remove_file(&mut self, index: usize) -> Result<F, UploadError> {
        if index >= self.files.len() {
            return Err(UploadError::IndexOutOfRange {
                index,
                len: self.files.len(),
            });
        }
        Ok(self.files.remove(index))
    }

    /// Message text for the current selection, file list included.
    pub fn compose_submission(&self) -> Result<String, UploadError> {
        if self.files.is_empty() {
            return Err(UploadError::NothingSelected);
        }
        Ok(full_message(&self.file_names()))
    }

    pub fn submit_url(&self) -> Result<String, UploadError> {
        let text = self.compose_submission()?;
        Ok(whatsapp_url(&self.cfg.whatsapp_number, &text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/jpeg")
    }

    fn selector() -> UploadSelector {
        UploadSelector::default()
    }

    #[test]
    fn empty_candidates_are_rejected() {
        let mut s = selector();
        assert_eq!(s.select_files(Vec::new()), Err(UploadError::NoImages));
        assert_eq!(s.view(), SelectionView::Empty);
    }

    #[test]
    fn non_images_leave_selection_alone() {
        let mut s = selector();
        s.select_files(vec![img("a.jpg")]).unwrap();
        let err = s
            .select_files(vec![SelectedFile::new("notes.pdf", "application/pdf")])
            .unwrap_err();
        assert_eq!(err, UploadError::NoImages);
        assert_eq!(s.file_names(), vec!["a.jpg"]);
    }

    #[test]
    fn mixed_input_keeps_images_in_order() {
        let mut s = selector();
        let n = s
            .select_files(vec![
                img("b.jpg"),
                SelectedFile::new("x.txt", "text/plain"),
                SelectedFile::new("a.png", "image/png"),
                img("b.jpg"),
            ])
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(s.file_names(), vec!["b.jpg", "a.png", "b.jpg"]);
    }

    #[test]
    fn second_selection_replaces() {
        let mut s = selector();
        s.select_files(vec![img("a.jpg"), img("b.jpg")]).unwrap();
        s.select_files(vec![img("c.jpg")]).unwrap();
        assert_eq!(s.file_names(), vec!["c.jpg"]);
    }

    #[test]
    fn remove_out_of_range() {
        let mut s = selector();
        s.select_files(vec![img("a.jpg")]).unwrap();
        assert_eq!(
            s.remove_file(1),
            Err(UploadError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn submit_requires_files() {
        let s = selector();
        assert_eq!(s.submit_url(), Err(UploadError::NothingSelected));
        assert_eq!(
            UploadError::NothingSelected.to_string(),
            "Nenhum arquivo selecionado!"
        );
    }
}
