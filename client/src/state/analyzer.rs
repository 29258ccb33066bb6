//! Production analyzer view state and its static demo dataset.
//!
//! DESIGN
//! ======
//! The analyzer has no data source yet. Everything it renders comes from the
//! constants below; the only mutable state is which tab and screen is open.

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod analyzer_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalyzerTab {
    #[default]
    Data,
    Dashboard,
    Executive,
}

impl AnalyzerTab {
    pub const ALL: [Self; 3] = [Self::Data, Self::Dashboard, Self::Executive];

    pub fn label(self) -> &'static str {
        match self {
            Self::Data => "Entrada de Dados",
            Self::Dashboard => "Dashboard",
            Self::Executive => "Análise Executiva",
        }
    }
}

/// Full-page screen inside the analyzer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalyzerScreen {
    /// Tabbed overview.
    #[default]
    Main,
    /// Spreadsheet import screen reached from the CSV/Excel data source.
    CsvImport,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyzerState {
    pub tab: AnalyzerTab,
    pub screen: AnalyzerScreen,
    pub import: ImportSettings,
}

impl AnalyzerState {
    /// Switch tabs; always lands on the main screen.
    pub fn select_tab(&mut self, tab: AnalyzerTab) {
        self.tab = tab;
        self.screen = AnalyzerScreen::Main;
    }

    /// Act on a data-source card. Only spreadsheet import has a screen.
    pub fn open_source(&mut self, source: &DataSource) {
        if source.kind == SourceKind::Spreadsheet {
            self.screen = AnalyzerScreen::CsvImport;
        }
    }

    pub fn back_to_main(&mut self) {
        self.screen = AnalyzerScreen::Main;
    }
}

// =============================================================================
// SPREADSHEET IMPORT
// =============================================================================

/// One choice in an import settings dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const COLUMN_SEPARATORS: &[ImportOption] = &[
    ImportOption { value: ",", label: "Vírgula (,)" },
    ImportOption { value: ";", label: "Ponto e vírgula (;)" },
    ImportOption { value: "\t", label: "Tabulação" },
];

pub const ENCODINGS: &[ImportOption] = &[
    ImportOption { value: "utf-8", label: "UTF-8" },
    ImportOption { value: "latin1", label: "Latin-1" },
    ImportOption { value: "cp1252", label: "Windows-1252" },
];

pub const SUPPORTED_EXTENSIONS: &str = ".csv,.xlsx,.xls";
pub const MAX_IMPORT_SIZE_MB: u32 = 10;

/// Parsing options chosen on the import screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportSettings {
    pub separator: &'static str,
    pub encoding: &'static str,
    pub header_row: bool,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self { separator: COLUMN_SEPARATORS[0].value, encoding: ENCODINGS[0].value, header_row: false }
    }
}

impl ImportSettings {
    /// Pick a separator by value; unknown values leave the setting unchanged.
    pub fn select_separator(&mut self, value: &str) {
        if let Some(option) = find_option(COLUMN_SEPARATORS, value) {
            self.separator = option.value;
        }
    }

    /// Pick an encoding by value; unknown values leave the setting unchanged.
    pub fn select_encoding(&mut self, value: &str) {
        if let Some(option) = find_option(ENCODINGS, value) {
            self.encoding = option.value;
        }
    }
}

fn find_option(options: &'static [ImportOption], value: &str) -> Option<&'static ImportOption> {
    options.iter().find(|o| o.value == value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportStatus {
    Processed,
    Processing,
}

impl ImportStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Processed => "Processado",
            Self::Processing => "Processando",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Processed => "import-status--processed",
            Self::Processing => "import-status--processing",
        }
    }
}

/// A spreadsheet already uploaded through the import screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportedFile {
    pub name: &'static str,
    pub size: &'static str,
    pub imported_on: &'static str,
    pub status: ImportStatus,
}

impl ImportedFile {
    /// Downloads are offered once processing has finished.
    pub fn can_download(&self) -> bool {
        self.status == ImportStatus::Processed
    }
}

pub const IMPORTED_FILES: &[ImportedFile] = &[
    ImportedFile {
        name: "producao_janeiro.csv",
        size: "2.3 MB",
        imported_on: "15/01/2024",
        status: ImportStatus::Processed,
    },
    ImportedFile {
        name: "oee_fevereiro.xlsx",
        size: "1.8 MB",
        imported_on: "10/02/2024",
        status: ImportStatus::Processing,
    },
];

// =============================================================================
// DATASET
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    InProgress,
    Planned,
    Late,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Concluída",
            Self::InProgress => "Em Andamento",
            Self::Planned => "Planejada",
            Self::Late => "Atrasada",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Completed => "order-status--completed",
            Self::InProgress => "order-status--in-progress",
            Self::Planned => "order-status--planned",
            Self::Late => "order-status--late",
        }
    }
}

/// A production order (OP) with its OEE breakdown in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductionOrder {
    pub id: &'static str,
    pub product: &'static str,
    pub status: OrderStatus,
    pub oee: u8,
    pub availability: u8,
    pub performance: u8,
    pub quality: u8,
}

impl ProductionOrder {
    /// Labelled OEE components in display order.
    pub fn metrics(&self) -> [(&'static str, u8); 4] {
        [
            ("OEE Geral", self.oee),
            ("Disponibilidade", self.availability),
            ("Performance", self.performance),
            ("Qualidade", self.quality),
        ]
    }

    /// Late orders carry an alert marker on their executive card.
    pub fn needs_attention(&self) -> bool {
        self.status == OrderStatus::Late
    }
}

pub const PRODUCTION_ORDERS: &[ProductionOrder] = &[
    ProductionOrder {
        id: "OP-001",
        product: "Produto A",
        status: OrderStatus::Completed,
        oee: 87,
        availability: 92,
        performance: 89,
        quality: 95,
    },
    ProductionOrder {
        id: "OP-002",
        product: "Produto B",
        status: OrderStatus::InProgress,
        oee: 73,
        availability: 88,
        performance: 82,
        quality: 91,
    },
    ProductionOrder {
        id: "OP-003",
        product: "Produto C",
        status: OrderStatus::Planned,
        oee: 0,
        availability: 0,
        performance: 0,
        quality: 0,
    },
    ProductionOrder {
        id: "OP-004",
        product: "Produto D",
        status: OrderStatus::Late,
        oee: 65,
        availability: 78,
        performance: 84,
        quality: 87,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Database,
    Spreadsheet,
    ExternalApi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceStatus {
    Connected,
    Ready,
    Pending,
}

impl SourceStatus {
    pub fn class(self) -> &'static str {
        match self {
            Self::Connected => "source-status--connected",
            Self::Ready => "source-status--ready",
            Self::Pending => "source-status--pending",
        }
    }

    /// Call to action on the source card.
    pub fn action(self) -> &'static str {
        match self {
            Self::Connected => "Configurar",
            Self::Ready | Self::Pending => "Conectar",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataSource {
    pub kind: SourceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub status: SourceStatus,
}

pub const DATA_SOURCES: &[DataSource] = &[
    DataSource {
        kind: SourceKind::Database,
        title: "Banco de Dados",
        description: "Conectar com PostgreSQL/MySQL",
        status: SourceStatus::Connected,
    },
    DataSource {
        kind: SourceKind::Spreadsheet,
        title: "Arquivos CSV/Excel",
        description: "Importar planilhas de produção",
        status: SourceStatus::Ready,
    },
    DataSource {
        kind: SourceKind::ExternalApi,
        title: "API Externa",
        description: "Integração com sistemas MES",
        status: SourceStatus::Pending,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

impl Kpi {
    pub fn is_improvement(&self) -> bool {
        self.change.starts_with('+')
    }
}

pub const KPIS: &[Kpi] = &[
    Kpi { title: "OEE Médio", value: "78.5%", change: "+5.2%" },
    Kpi { title: "Disponibilidade", value: "92.1%", change: "+2.1%" },
    Kpi { title: "Performance", value: "85.3%", change: "-1.3%" },
    Kpi { title: "Qualidade", value: "94.7%", change: "+3.8%" },
];

/// Order count per status, with its share of the total in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusShare {
    pub label: &'static str,
    pub count: u32,
    pub percentage: u8,
}

pub const STATUS_BREAKDOWN: &[StatusShare] = &[
    StatusShare { label: "Concluídas", count: 23, percentage: 45 },
    StatusShare { label: "Em Andamento", count: 12, percentage: 25 },
    StatusShare { label: "Planejadas", count: 8, percentage: 20 },
    StatusShare { label: "Atrasadas", count: 5, percentage: 10 },
];

/// Monthly OEE samples for the trend chart.
pub const OEE_TREND: [u8; 12] = [65, 72, 68, 78, 82, 75, 85, 88, 92, 87, 90, 85];

const TREND_CHART_HEIGHT_PX: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

pub const INSIGHTS: &[Insight] = &[
    Insight {
        title: "Oportunidade de Melhoria",
        description: "OPs com OEE < 75% representam 30% da produção",
        action: "Analisar Causas",
    },
    Insight {
        title: "Performance Crítica",
        description: "OP-004 apresenta baixa performance por 3 dias consecutivos",
        action: "Investigar Urgente",
    },
    Insight {
        title: "Destaque do Período",
        description: "OP-001 superou meta de qualidade em 5%",
        action: "Replicar Processo",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OeeRating {
    High,
    Medium,
    Low,
}

impl OeeRating {
    pub fn class(self) -> &'static str {
        match self {
            Self::High => "oee-bar--high",
            Self::Medium => "oee-bar--medium",
            Self::Low => "oee-bar--low",
        }
    }
}

pub fn oee_rating(oee: u8) -> OeeRating {
    match oee {
        81.. => OeeRating::High,
        61..=80 => OeeRating::Medium,
        _ => OeeRating::Low,
    }
}

/// Bar height in pixels for a trend sample.
pub fn trend_bar_height(value: u8) -> f64 {
    f64::from(value.min(100)) / 100.0 * TREND_CHART_HEIGHT_PX
}
