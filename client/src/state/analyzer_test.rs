use super::*;

fn source(kind: SourceKind) -> &'static DataSource {
    DATA_SOURCES.iter().find(|s| s.kind == kind).unwrap()
}

// =============================================================
// AnalyzerState
// =============================================================

#[test]
fn analyzer_state_default_is_data_tab_main_screen() {
    let state = AnalyzerState::default();
    assert_eq!(state.tab, AnalyzerTab::Data);
    assert_eq!(state.screen, AnalyzerScreen::Main);
}

#[test]
fn spreadsheet_source_opens_import_screen() {
    let mut state = AnalyzerState::default();
    state.open_source(source(SourceKind::Spreadsheet));
    assert_eq!(state.screen, AnalyzerScreen::CsvImport);
    state.back_to_main();
    assert_eq!(state.screen, AnalyzerScreen::Main);
}

#[test]
fn other_sources_stay_on_main_screen() {
    let mut state = AnalyzerState::default();
    state.open_source(source(SourceKind::Database));
    state.open_source(source(SourceKind::ExternalApi));
    assert_eq!(state.screen, AnalyzerScreen::Main);
}

#[test]
fn select_tab_leaves_import_screen() {
    let mut state = AnalyzerState::default();
    state.open_source(source(SourceKind::Spreadsheet));
    state.select_tab(AnalyzerTab::Executive);
    assert_eq!(state.tab, AnalyzerTab::Executive);
    assert_eq!(state.screen, AnalyzerScreen::Main);
}

#[test]
fn tab_labels_in_display_order() {
    let labels = AnalyzerTab::ALL.map(AnalyzerTab::label);
    assert_eq!(labels, ["Entrada de Dados", "Dashboard", "Análise Executiva"]);
}

// =============================================================
// Dataset helpers
// =============================================================

#[test]
fn oee_rating_thresholds() {
    assert_eq!(oee_rating(100), OeeRating::High);
    assert_eq!(oee_rating(81), OeeRating::High);
    assert_eq!(oee_rating(80), OeeRating::Medium);
    assert_eq!(oee_rating(61), OeeRating::Medium);
    assert_eq!(oee_rating(60), OeeRating::Low);
    assert_eq!(oee_rating(0), OeeRating::Low);
}

#[test]
fn trend_bar_height_scales_to_chart() {
    assert!((trend_bar_height(50) - 100.0).abs() < f64::EPSILON);
    assert!((trend_bar_height(100) - 200.0).abs() < f64::EPSILON);
    assert!((trend_bar_height(250) - 200.0).abs() < f64::EPSILON);
}

#[test]
fn kpi_improvement_follows_sign() {
    let improving: Vec<_> = KPIS.iter().filter(|k| k.is_improvement()).map(|k| k.title).collect();
    assert_eq!(improving, ["OEE Médio", "Disponibilidade", "Qualidade"]);
}

#[test]
fn status_breakdown_percentages_sum_to_100() {
    let total: u32 = STATUS_BREAKDOWN.iter().map(|s| u32::from(s.percentage)).sum();
    assert_eq!(total, 100);
}

#[test]
fn order_metrics_are_labelled_in_order() {
    let metrics = PRODUCTION_ORDERS[0].metrics();
    assert_eq!(metrics[0], ("OEE Geral", 87));
    assert_eq!(metrics[3], ("Qualidade", 95));
}

#[test]
fn connected_source_offers_configuration() {
    assert_eq!(SourceStatus::Connected.action(), "Configurar");
    assert_eq!(SourceStatus::Pending.action(), "Conectar");
}

// =============================================================
// Spreadsheet import
// =============================================================

#[test]
fn import_settings_default_to_first_options_without_header() {
    let settings = ImportSettings::default();
    assert_eq!(settings.separator, ",");
    assert_eq!(settings.encoding, "utf-8");
    assert!(!settings.header_row);
}

#[test]
fn import_settings_accept_listed_values_only() {
    let mut settings = ImportSettings::default();
    settings.select_separator(";");
    settings.select_encoding("cp1252");
    assert_eq!(settings.separator, ";");
    assert_eq!(settings.encoding, "cp1252");

    settings.select_separator("|");
    settings.select_encoding("ebcdic");
    assert_eq!(settings.separator, ";");
    assert_eq!(settings.encoding, "cp1252");
}

#[test]
fn import_settings_survive_leaving_the_import_screen() {
    let mut state = AnalyzerState::default();
    state.open_source(source(SourceKind::Spreadsheet));
    state.import.select_encoding("latin1");
    state.back_to_main();
    state.open_source(source(SourceKind::Spreadsheet));
    assert_eq!(state.import.encoding, "latin1");
}

#[test]
fn import_dropdowns_list_three_choices_each() {
    assert_eq!(COLUMN_SEPARATORS.iter().map(|o| o.label).collect::<Vec<_>>(), [
        "Vírgula (,)",
        "Ponto e vírgula (;)",
        "Tabulação"
    ]);
    assert_eq!(ENCODINGS.iter().map(|o| o.label).collect::<Vec<_>>(), ["UTF-8", "Latin-1", "Windows-1252"]);
}

#[test]
fn only_processed_files_can_be_downloaded() {
    let [processed, processing] = [IMPORTED_FILES[0], IMPORTED_FILES[1]];
    assert_eq!(processed.status.label(), "Processado");
    assert!(processed.can_download());
    assert_eq!(processing.status.label(), "Processando");
    assert!(!processing.can_download());
}

#[test]
fn only_late_orders_need_attention() {
    let flagged: Vec<_> = PRODUCTION_ORDERS.iter().filter(|o| o.needs_attention()).map(|o| o.id).collect();
    assert_eq!(flagged, ["OP-004"]);
}
