//! Static catalog of feature modules shown on the dashboard.
//!
//! DESIGN
//! ======
//! Only the production analyzer is implemented. The other entries exist so
//! the grid can advertise the roadmap; selecting one produces a notice
//! instead of a navigation.

#[cfg(test)]
#[path = "modules_test.rs"]
mod modules_test;

use super::notice::NoticeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleStatus {
    Available,
    Development,
    Planned,
}

impl ModuleStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponível",
            Self::Development => "Em Desenvolvimento",
            Self::Planned => "Planejado",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Available => "module-card__status--available",
            Self::Development => "module-card__status--development",
            Self::Planned => "module-card__status--planned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: ModuleStatus,
    pub route: &'static str,
}

pub const MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        id: "production-analyzer",
        title: "Análise de Produção",
        description: "Monitore e analise indicadores de produção em tempo real. OEE, disponibilidade, performance e qualidade.",
        status: ModuleStatus::Available,
        route: "/modules/production-analyzer",
    },
    ModuleInfo {
        id: "maintenance",
        title: "Manutenção",
        description: "Gestão completa de manutenção preventiva, preditiva e corretiva. Controle de ativos e histórico.",
        status: ModuleStatus::Development,
        route: "/modules/maintenance",
    },
    ModuleInfo {
        id: "inventory",
        title: "Estoque",
        description: "Controle inteligente de estoque com alertas automáticos, rastreabilidade e otimização de compras.",
        status: ModuleStatus::Planned,
        route: "/modules/inventory",
    },
    ModuleInfo {
        id: "quality",
        title: "Qualidade",
        description: "Sistema de gestão da qualidade com controle estatístico, não-conformidades e melhorias contínuas.",
        status: ModuleStatus::Planned,
        route: "/modules/quality",
    },
    ModuleInfo {
        id: "integrations",
        title: "Integrações",
        description: "Conecte sistemas ERP, MES, SCADA e outras ferramentas. APIs robustas e sincronização em tempo real.",
        status: ModuleStatus::Development,
        route: "/modules/integrations",
    },
    ModuleInfo {
        id: "analytics",
        title: "Analytics & BI",
        description: "Dashboards avançados, relatórios personalizáveis e inteligência artificial para insights estratégicos.",
        status: ModuleStatus::Planned,
        route: "/modules/analytics",
    },
];

/// Look up a module by its route id.
pub fn find_module(id: &str) -> Option<&'static ModuleInfo> {
    MODULES.iter().find(|m| m.id == id)
}

/// Result of selecting a module card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSelection {
    /// Route to open, only for available modules.
    pub navigate_to: Option<&'static str>,
    pub notice: (NoticeKind, String),
}

pub fn select_module(module: &ModuleInfo) -> ModuleSelection {
    match module.status {
        ModuleStatus::Available => ModuleSelection {
            navigate_to: Some(module.route),
            notice: (NoticeKind::Success, format!("Módulo {} carregado!", module.title)),
        },
        ModuleStatus::Development => ModuleSelection {
            navigate_to: None,
            notice: (NoticeKind::Warning, "Módulo em desenvolvimento".to_owned()),
        },
        ModuleStatus::Planned => ModuleSelection {
            navigate_to: None,
            notice: (NoticeKind::Info, "Módulo em planejamento".to_owned()),
        },
    }
}
