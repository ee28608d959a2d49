use vitrine_core::{
    SelectedFile, SelectionView, UploadConfig, UploadError, UploadSelector, compose_message,
};

fn img(name: &str, ty: &str) -> SelectedFile {
    SelectedFile::new(name, ty)
}

#[test]
fn remove_first_of_two() {
    let mut sel: UploadSelector = UploadSelector::new(UploadConfig::default());
    sel.select_files(vec![img("image1.jpg", "image/jpeg"), img("image2.jpg", "image/jpeg")])
        .unwrap();
    let removed = sel.remove_file(0).unwrap();
    assert_eq!(removed.name, "image1.jpg");
    assert_eq!(sel.file_names(), vec!["image2.jpg"]);
    assert_eq!(sel.view(), SelectionView::HasFiles(1));

    sel.remove_file(0).unwrap();
    assert_eq!(sel.view(), SelectionView::Empty);
    assert_eq!(sel.submit_url(), Err(UploadError::NothingSelected));
}

#[test]
fn submit_link_carries_encoded_message_and_names() {
    let mut sel: UploadSelector = UploadSelector::new(UploadConfig::default());
    sel.select_files(vec![img("a.jpg", "image/jpeg"), img("b.png", "image/png")])
        .unwrap();
    let url = sel.submit_url().unwrap();
    assert!(url.starts_with("https://wa.me/556198574343?text="));
    assert!(url.ends_with("%0A%0AArquivos%20selecionados%3A%20a.jpg%2C%20b.png"));
    assert!(url.contains("Tenho%202%20imagens"));
}

#[test]
fn configured_number_is_used() {
    let cfg = UploadConfig {
        whatsapp_number: "5511999990000".to_string(),
        ..UploadConfig::default()
    };
    let mut sel: UploadSelector = UploadSelector::new(cfg);
    sel.select_files(vec![img("x.webp", "image/webp")]).unwrap();
    let url = sel.submit_url().unwrap();
    assert!(url.starts_with("https://wa.me/5511999990000?text="));
}

#[test]
fn message_text_tracks_selection_size() {
    let mut sel: UploadSelector = UploadSelector::new(UploadConfig::default());
    let files: Vec<_> = (0..7).map(|i| img(&format!("{i}.jpg"), "image/jpeg")).collect();
    sel.select_files(files).unwrap();
    let text = sel.compose_submission().unwrap();
    assert!(text.starts_with(&compose_message(7)));
    assert!(text.ends_with("Arquivos selecionados: 0.jpg, 1.jpg, 2.jpg, 3.jpg, 4.jpg, 5.jpg, 6.jpg"));
}
