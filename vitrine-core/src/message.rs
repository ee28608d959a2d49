use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone, so links match what a
/// browser would produce.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Quote request text for `count` images. Package counts get fixed copy;
/// counts between packages nudge toward the next one up.
pub fn compose_message(count: usize) -> String {
    match count {
        1 => "Olá! Gostaria de solicitar a edição de 1 imagem. Poderia me enviar um orçamento? 📸".to_string(),
        2 => "Olá! Tenho 2 imagens que precisam de edição profissional. Qual seria o valor? 📸📸".to_string(),
        3 => "Olá! Preciso editar 3 imagens. Poderia me passar um orçamento detalhado? 📸📸📸".to_string(),
        4 => "Olá! Tenho 4 imagens para edição. Qual seria o melhor plano para mim? 📸📸📸📸".to_string(),
        5 => "Olá! Tenho 5 imagens para editar. Gostaria do Pacote Básico (R$ 50). Podemos fechar? 📸📸📸📸📸".to_string(),
        6..=9 => format!(
            "Olá! Tenho {count} imagens para editar. Qual seria o melhor pacote para essa quantidade? Talvez o Profissional? 📸✨"
        ),
        10 => "Olá! Tenho 10 imagens para editar. Gostaria do Pacote Profissional (R$ 100 + 2 de brinde). Vamos fechar? 📸✨".to_string(),
        11..=14 => format!(
            "Olá! Tenho {count} imagens para editar. Estou pensando no Pacote Premium. Podemos conversar sobre o valor? 📸✨"
        ),
        15 => "Olá! Tenho 15 imagens para editar. Gostaria do Pacote Premium (R$ 150 + 3 de brinde). Podemos conversar? 📸✨".to_string(),
        _ => format!(
            "Olá! Tenho {count} imagens para edição profissional. Poderia me enviar um orçamento especial baseado nos seus pacotes? 📸✨"
        ),
    }
}

/// Template for `names.len()` files followed by the file list.
pub fn full_message<S: AsRef<str>>(names: &[S]) -> String {
    let list = names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
    format!(
        "{}\n\nArquivos selecionados: {}",
        compose_message(names.len()),
        list
    )
}

pub fn whatsapp_url(number: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_package_copy() {
        assert_eq!(
            compose_message(5),
            "Olá! Tenho 5 imagens para editar. Gostaria do Pacote Básico (R$ 50). Podemos fechar? 📸📸📸📸📸"
        );
        assert!(compose_message(10).contains("Pacote Profissional (R$ 100 + 2 de brinde)"));
        assert!(compose_message(15).contains("Pacote Premium (R$ 150 + 3 de brinde)"));
    }

    #[test]
    fn ranges_mention_count() {
        let m = compose_message(7);
        assert!(m.contains("Tenho 7 imagens"));
        assert!(m.contains("Talvez o Profissional?"));
        let m = compose_message(12);
        assert!(m.contains("Tenho 12 imagens"));
        assert!(m.contains("Estou pensando no Pacote Premium"));
        let m = compose_message(20);
        assert!(m.contains("Tenho 20 imagens"));
        assert!(m.contains("orçamento especial"));
    }

    #[test]
    fn zero_falls_through_to_generic() {
        assert!(compose_message(0).contains("Tenho 0 imagens para edição profissional"));
    }

    #[test]
    fn file_list_is_appended() {
        let m = full_message(&["a.jpg", "b.png"]);
        assert!(m.starts_with("Olá! Tenho 2 imagens"));
        assert!(m.ends_with("\n\nArquivos selecionados: a.jpg, b.png"));
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        let url = whatsapp_url("556198574343", "Olá! (R$ 50)\n*ok*~a'b");
        assert_eq!(
            url,
            "https://wa.me/556198574343?text=Ol%C3%A1!%20(R%24%2050)%0A*ok*~a'b"
        );
        let url = whatsapp_url("1", "a&b=c/d?e#f+g");
        assert_eq!(url, "https://wa.me/1?text=a%26b%3Dc%2Fd%3Fe%23f%2Bg");
    }
}
