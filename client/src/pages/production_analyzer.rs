//! Production analyzer module page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational page over the static dataset in `state::analyzer`. The
//! only interactive state is the selected tab, the CSV import screen and its
//! parsing options, all held in a page-local `AnalyzerState` signal.

#[cfg(test)]
#[path = "production_analyzer_test.rs"]
mod production_analyzer_test;

use leptos::prelude::*;

use crate::components::header::AppHeader;
use crate::config::DASHBOARD_PATH;
use crate::state::analyzer::{
    AnalyzerScreen, AnalyzerState, AnalyzerTab, COLUMN_SEPARATORS, DATA_SOURCES, DataSource, ENCODINGS,
    IMPORTED_FILES, INSIGHTS, KPIS, Kpi, MAX_IMPORT_SIZE_MB, OEE_TREND, PRODUCTION_ORDERS, ProductionOrder,
    STATUS_BREAKDOWN, SUPPORTED_EXTENSIONS, oee_rating, trend_bar_height,
};

const MONTHS: [&str; 12] = ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"];

fn kpi_change_class(kpi: &Kpi) -> &'static str {
    if kpi.is_improvement() { "kpi-card__change--positive" } else { "kpi-card__change--negative" }
}

fn percent_width(value: u8) -> String {
    format!("width: {}%", value.min(100))
}

#[component]
pub fn ProductionAnalyzerPage() -> impl IntoView {
    let analyzer = RwSignal::new(AnalyzerState::default());

    view! {
        <div class="analyzer-page">
            <AppHeader/>
            <div class="analyzer-page__top">
                <a class="btn" href=DASHBOARD_PATH>
                    "Voltar"
                </a>
                <h1>"Análise de Produção"</h1>
            </div>
            {move || match analyzer.get().screen {
                AnalyzerScreen::Main => view! { <AnalyzerMain analyzer=analyzer/> }.into_any(),
                AnalyzerScreen::CsvImport => view! { <CsvImportScreen analyzer=analyzer/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AnalyzerMain(analyzer: RwSignal<AnalyzerState>) -> impl IntoView {
    view! {
        <nav class="analyzer-tabs">
            {AnalyzerTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="analyzer-tabs__tab"
                            class=("analyzer-tabs__tab--active", move || analyzer.get().tab == tab)
                            on:click=move |_| analyzer.update(|a| a.select_tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
        <section class="analyzer-content">
            {move || match analyzer.get().tab {
                AnalyzerTab::Data => view! { <DataTab analyzer=analyzer/> }.into_any(),
                AnalyzerTab::Dashboard => view! { <DashboardTab/> }.into_any(),
                AnalyzerTab::Executive => view! { <ExecutiveTab/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn DataTab(analyzer: RwSignal<AnalyzerState>) -> impl IntoView {
    let source_card = move |source: &'static DataSource| {
        view! {
            <div class="source-card">
                <h3>{source.title}</h3>
                <p>{source.description}</p>
                <span class=format!("source-card__status {}", source.status.class())></span>
                <button class="btn" on:click=move |_| analyzer.update(|a| a.open_source(source))>
                    {source.status.action()}
                </button>
            </div>
        }
    };

    view! {
        <h2>"Fontes de Dados"</h2>
        <div class="source-grid">{DATA_SOURCES.iter().map(source_card).collect_view()}</div>
    }
}

#[component]
fn DashboardTab() -> impl IntoView {
    view! {
        <div class="kpi-grid">
            {KPIS
                .iter()
                .map(|kpi| {
                    view! {
                        <div class="kpi-card">
                            <span class="kpi-card__title">{kpi.title}</span>
                            <span class="kpi-card__value">{kpi.value}</span>
                            <span class=format!("kpi-card__change {}", kpi_change_class(kpi))>{kpi.change}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <h2>"Ordens de Produção"</h2>
        <table class="orders-table">
            <thead>
                <tr>
                    <th>"OP"</th>
                    <th>"Produto"</th>
                    <th>"Status"</th>
                    <th>"OEE"</th>
                    <th>"Disponibilidade"</th>
                    <th>"Performance"</th>
                    <th>"Qualidade"</th>
                </tr>
            </thead>
            <tbody>
                {PRODUCTION_ORDERS
                    .iter()
                    .map(|order| {
                        view! {
                            <tr>
                                <td>{order.id}</td>
                                <td>{order.product}</td>
                                <td>
                                    <span class=format!("order-status {}", order.status.class())>
                                        {order.status.label()}
                                    </span>
                                </td>
                                <td>
                                    <div class="oee-bar">
                                        <div
                                            class=format!("oee-bar__fill {}", oee_rating(order.oee).class())
                                            style=percent_width(order.oee)
                                        ></div>
                                        <span>{format!("{}%", order.oee)}</span>
                                    </div>
                                </td>
                                <td>{format!("{}%", order.availability)}</td>
                                <td>{format!("{}%", order.performance)}</td>
                                <td>{format!("{}%", order.quality)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>

        <div class="analyzer-charts">
            <div class="chart-card">
                <h3>"Distribuição por Status"</h3>
                {STATUS_BREAKDOWN
                    .iter()
                    .map(|share| {
                        view! {
                            <div class="status-bar">
                                <span class="status-bar__label">{share.label}</span>
                                <div class="status-bar__track">
                                    <div class="status-bar__fill" style=percent_width(share.percentage)></div>
                                </div>
                                <span class="status-bar__count">{share.count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="chart-card">
                <h3>"Tendência OEE (12 meses)"</h3>
                <div class="trend-chart">
                    {OEE_TREND
                        .iter()
                        .zip(MONTHS)
                        .map(|(value, month)| {
                            view! {
                                <div class="trend-chart__column" title=format!("{month}: {value}%")>
                                    <div
                                        class="trend-chart__bar"
                                        style=format!("height: {}px", trend_bar_height(*value))
                                    ></div>
                                    <span class="trend-chart__label">{month}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExecutiveTab() -> impl IntoView {
    view! {
        <h2>"Análise Executiva"</h2>
        <div class="order-card-grid">
            {PRODUCTION_ORDERS.iter().map(|order| view! { <OrderCard order=order/> }).collect_view()}
        </div>
        <h2>"Insights Executivos"</h2>
        <div class="insight-grid">
            {INSIGHTS
                .iter()
                .map(|insight| {
                    view! {
                        <div class="insight-card">
                            <h3>{insight.title}</h3>
                            <p>{insight.description}</p>
                            <button class="btn">{insight.action}</button>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn OrderCard(order: &'static ProductionOrder) -> impl IntoView {
    view! {
        <div class="order-card">
            <div class="order-card__header">
                <div>
                    <h3>{order.id}</h3>
                    <p>{order.product}</p>
                </div>
                <span class=format!("order-status {}", order.status.class())>{order.status.label()}</span>
            </div>
            {order
                .metrics()
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="metric-bar">
                            <div class="metric-bar__heading">
                                <span>{label}</span>
                                <span>{format!("{value}%")}</span>
                            </div>
                            <div class="status-bar__track">
                                <div
                                    class=format!("status-bar__fill {}", oee_rating(value).class())
                                    style=percent_width(value)
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <div class="order-card__footer">
                <span class="order-card__live">"Live"</span>
                {order.needs_attention().then(|| view! { <span class="order-card__alert">"Alerta"</span> })}
                <button class="btn order-card__details">"Detalhes"</button>
            </div>
        </div>
    }
}

#[component]
fn CsvImportScreen(analyzer: RwSignal<AnalyzerState>) -> impl IntoView {
    let import = move || analyzer.with(|a| a.import);

    view! {
        <section class="csv-import">
            <div class="csv-import__header">
                <button class="btn" on:click=move |_| analyzer.update(AnalyzerState::back_to_main)>
                    "Voltar às Fontes de Dados"
                </button>
                <div>
                    <h2>"Arquivos CSV/Excel"</h2>
                    <p>"Importe e gerencie planilhas de produção"</p>
                </div>
            </div>

            <div class="csv-import__panels">
                <div class="chart-card">
                    <h3>"Importar Arquivo"</h3>
                    <div class="csv-import__dropzone">
                        <input type="file" accept=SUPPORTED_EXTENSIONS/>
                        <p>"Arraste e solte arquivos CSV ou Excel aqui"</p>
                        <span>"ou clique para selecionar"</span>
                    </div>
                    <p class="csv-import__hint">"Formatos suportados: " {SUPPORTED_EXTENSIONS.replace(',', ", ")}</p>
                    <p class="csv-import__hint">{format!("Tamanho máximo: {MAX_IMPORT_SIZE_MB}MB")}</p>
                </div>

                <div class="chart-card">
                    <h3>"Configurações"</h3>
                    <label class="csv-import__field">
                        "Separador de Colunas"
                        <select on:change=move |ev| {
                            analyzer.update(|a| a.import.select_separator(&event_target_value(&ev)));
                        }>
                            {COLUMN_SEPARATORS
                                .iter()
                                .map(|option| {
                                    view! {
                                        <option
                                            value=option.value
                                            selected=move || import().separator == option.value
                                        >
                                            {option.label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="csv-import__field">
                        "Codificação"
                        <select on:change=move |ev| {
                            analyzer.update(|a| a.import.select_encoding(&event_target_value(&ev)));
                        }>
                            {ENCODINGS
                                .iter()
                                .map(|option| {
                                    view! {
                                        <option value=option.value selected=move || import().encoding == option.value>
                                            {option.label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="csv-import__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || import().header_row
                            on:change=move |ev| {
                                analyzer.update(|a| a.import.header_row = event_target_checked(&ev));
                            }
                        />
                        "Primeira linha como cabeçalho"
                    </label>
                </div>
            </div>

            <h3>"Arquivos Importados"</h3>
            <table class="orders-table">
                <thead>
                    <tr>
                        <th>"Nome do Arquivo"</th>
                        <th>"Tamanho"</th>
                        <th>"Data Importação"</th>
                        <th>"Status"</th>
                        <th>"Ações"</th>
                    </tr>
                </thead>
                <tbody>
                    {IMPORTED_FILES
                        .iter()
                        .map(|file| {
                            view! {
                                <tr>
                                    <td>{file.name}</td>
                                    <td>{file.size}</td>
                                    <td>{file.imported_on}</td>
                                    <td>
                                        <span class=format!("import-status {}", file.status.class())>
                                            {file.status.label()}
                                        </span>
                                    </td>
                                    <td class="import-actions">
                                        <button class="btn" title="Visualizar">"Ver"</button>
                                        <button class="btn" title="Baixar" disabled=!file.can_download()>
                                            "Baixar"
                                        </button>
                                        <button class="btn" title="Excluir">"Excluir"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
