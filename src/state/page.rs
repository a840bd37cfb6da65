use std::fmt;

/// Páginas del dashboard. El despacho página -> loader es un `match` exhaustivo.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Page {
    Dashboard,
    Doacoes,
    NovaDoacao,
    Rotas,
    Estoque,
    Doadores,
    Receptores,
    Historico,
    Finalizadas,
    Mapa,
}

impl Page {
    /// Orden de los links en la navegación
    pub const ALL: [Page; 10] = [
        Page::Dashboard,
        Page::Doacoes,
        Page::NovaDoacao,
        Page::Rotas,
        Page::Estoque,
        Page::Doadores,
        Page::Receptores,
        Page::Historico,
        Page::Finalizadas,
        Page::Mapa,
    ];

    /// Valor del atributo `data-page`
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Doacoes => "doacoes",
            Page::NovaDoacao => "nova-doacao",
            Page::Rotas => "rotas",
            Page::Estoque => "estoque",
            Page::Doadores => "doadores",
            Page::Receptores => "receptores",
            Page::Historico => "historico",
            Page::Finalizadas => "finalizadas",
            Page::Mapa => "mapa",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Painel",
            Page::Doacoes => "Doações",
            Page::NovaDoacao => "Nova doação",
            Page::Rotas => "Rotas",
            Page::Estoque => "Estoque",
            Page::Doadores => "Doadores",
            Page::Receptores => "Receptores",
            Page::Historico => "Histórico",
            Page::Finalizadas => "Finalizadas",
            Page::Mapa => "Mapa",
        }
    }

    /// ID de la `<section>` de la página
    pub fn section_id(&self) -> String {
        format!("page-{}", self.slug())
    }

    /// ID del contenedor donde el loader escribe su contenido
    pub fn container_id(&self) -> String {
        format!("{}-list", self.slug())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_slug() {
        assert_eq!(Page::NovaDoacao.section_id(), "page-nova-doacao");
        assert_eq!(Page::Doacoes.container_id(), "doacoes-list");
        let mut slugs: Vec<_> = Page::ALL.iter().map(|p| p.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), Page::ALL.len());
    }
}
