//! Help and support screen: FAQ and the contact form

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notice::Notice;
use crate::validation::{require, require_email};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn faq() -> Vec<FaqItem> {
    vec![
        FaqItem {
            question: "Como faço para redefinir minha senha?",
            answer: "Para redefinir sua senha, clique em 'Esqueci minha senha' na tela de login e siga as instruções enviadas para seu e-mail cadastrado.",
        },
        FaqItem {
            question: "Como funcionam os simuladores de investimento?",
            answer: "Nossos simuladores permitem que você teste diferentes cenários de investimento inserindo valores como aporte inicial, tempo e taxa de rendimento para visualizar possíveis resultados.",
        },
        FaqItem {
            question: "Posso excluir minha conta?",
            answer: "Sim, você pode excluir sua conta acessando seu perfil e clicando em 'Remover Conta'. Esta ação é irreversível e todos os seus dados serão permanentemente removidos.",
        },
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Send the contact form and clear it
pub fn send_contact(request: &mut ContactRequest) -> Result<Notice> {
    require("name", &request.name, "Nome é obrigatório")?;
    let email = require_email("email", &request.email)?;
    require("message", &request.message, "Mensagem é obrigatória")?;

    log::info!("Support request received from {}", email);
    *request = ContactRequest::default();
    Ok(Notice::success(
        "Sua solicitação foi enviada com sucesso",
        "Nossa equipe entrará em contato em breve.",
    ))
}
