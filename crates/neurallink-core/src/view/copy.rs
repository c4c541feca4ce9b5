//! Product copy shown on the surface.

use crate::core::Mode;

pub const BOOT_LINES: [&str; 3] = [
    "> INICIALIZANDO LINK_NEURAL_V4.0",
    "> CARREGANDO MÓDULOS CENTRAIS...",
    "> ESTABELECENDO PROTOCOLO SEGURO",
];

pub const PANEL_HEADER: &str = "INTERFACE NEURAL";
pub const NODE_ID: &str = "ID_NÓ: 0x7F2A90";
pub const INTEGRITY_LABEL: &str = "INTEGRIDADE DO SISTEMA";
pub const INTEGRITY_VALUE: &str = "99.9%";
pub const FOOTER_LAYER: &str = "CAMADA_SEGURA_V2";
pub const FOOTER_COPYRIGHT: &str = "© 2026 LUMINA_CORP";

pub const LINKS_CAPTION: &str = "LINKS EXTERNOS";
pub const EXTERNAL_LINKS: [&str; 2] = ["Chave_Priv", "Sinc_Rápida"];
pub const PULL_HINT: &str = "PUXE A CORDINHA NO TOPO PARA ALTERNAR";
pub const BUSY_LABEL: &str = "PROCESSANDO...";

pub fn title(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "ACESSO_RESTRITO",
        Mode::SignUp => "NOVA_ENTIDADE",
    }
}

pub fn description(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => {
            "Por favor, forneça sua assinatura neural para acessar a rede central restrita."
        }
        Mode::SignUp => "Registre uma nova identidade dentro do coletivo neural descentralizado.",
    }
}

pub fn protocol(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "PROTOCOLO: VERIFICAÇÃO",
        Mode::SignUp => "PROTOCOLO: REGISTRO",
    }
}

pub fn heading(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "PORTAL DE ACESSO",
        Mode::SignUp => "CRIAÇÃO DE IDENTIDADE",
    }
}

pub fn action(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "INICIAR_SESSÃO",
        Mode::SignUp => "REGISTRAR_IDENTIDADE",
    }
}

pub fn toggle_link(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "[ Solicitar_Novo_Acesso ]",
        Mode::SignUp => "[ Retornar_ao_Portal ]",
    }
}

/// Tooltip on the pull handle: names the mode a pull switches to.
pub fn pull_tooltip(mode: Mode) -> &'static str {
    match mode {
        Mode::Login => "PUXE PARA CADASTRAR",
        Mode::SignUp => "PUXE PARA ENTRAR",
    }
}
