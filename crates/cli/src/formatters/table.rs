//! Table formatter implementation.
//!
//! Responsibilities:
//! - Render every resource as an aligned, human-readable table in pt-BR.
//! - Show pagination position below paginated lists.
//!
//! Does NOT handle:
//! - Colors; badge and threshold styles are rendered as their text labels.

use std::str::FromStr;

use anyhow::Result;
use lap_client::charts::{average, price_series};
use lap_client::format::{
    ellipsize, format_brl, format_decimal, format_int, format_opt_brl, format_opt_date,
    format_percent,
};
use lap_client::levels::{GovernanceLevel, RiskLevel};
use lap_client::models::{
    Alerta, Anomalia, AnomaliaResumo, AnomaliaStatus, CnpjCheck, EmpresaImpedida,
    GOVERNANCA_PESOS, HistoricoPrecos, Licitacao, Municipio, RankingGovernanca, Relatorio,
};

use crate::formatters::common::{MISSING, or_missing, render_table};
use crate::formatters::{
    CnpjCheckOutput, DashboardOutput, Formatter, FornecedoresOutput, PageOutput,
};

const OBJETO_MAX_CHARS: usize = 50;
const TEXTO_MAX_CHARS: usize = 40;

pub struct TableFormatter;

fn sim_nao(value: bool) -> String {
    if value { "Sim" } else { "Não" }.to_string()
}

fn anomalia_status_label(raw: &str) -> String {
    AnomaliaStatus::from_str(raw).map_or_else(|_| raw.to_string(), |s| s.label().to_string())
}

fn with_pager<T>(table: String, page: &PageOutput<T>) -> String {
    format!("{table}\n{}\n", page.pager_label())
}

impl Formatter for TableFormatter {
    fn format_dashboard(&self, dashboard: &DashboardOutput) -> Result<String> {
        let kpis = &dashboard.kpis;
        let indicadores = vec![
            vec!["Total de licitações".to_string(), format_int(kpis.total_licitacoes)],
            vec!["Licitações abertas".to_string(), format_int(kpis.licitacoes_abertas)],
            vec!["Valor estimado".to_string(), format_brl(kpis.valor_total_estimado)],
            vec!["Valor homologado".to_string(), format_brl(kpis.valor_total_homologado)],
            vec![
                "Economia gerada".to_string(),
                format!(
                    "{} ({})",
                    format_brl(kpis.economia_gerada.valor),
                    format_percent(kpis.economia_gerada.percentual)
                ),
            ],
            vec!["Alertas pendentes".to_string(), format_int(kpis.alertas_pendentes)],
            vec!["Anomalias detectadas".to_string(), format_int(kpis.anomalias_detectadas)],
        ];
        let mut output = render_table(&["Indicador", "Valor"], &indicadores);

        output.push('\n');
        if dashboard.por_mes.is_empty() {
            output.push_str("Sem dados mensais.\n");
        } else {
            let meses: Vec<Vec<String>> = dashboard
                .por_mes
                .iter()
                .map(|p| {
                    vec![
                        p.periodo.clone(),
                        format_int(p.total),
                        format_brl(p.valor_total),
                    ]
                })
                .collect();
            output.push_str(&render_table(&["Mês", "Licitações", "Valor total"], &meses));
        }
        Ok(output)
    }

    fn format_licitacoes(&self, page: &PageOutput<Licitacao>) -> Result<String> {
        if page.items.is_empty() {
            return Ok("Nenhuma licitação encontrada.\n".to_string());
        }
        let rows: Vec<Vec<String>> = page
            .items
            .iter()
            .map(|l| {
                vec![
                    l.numero_compra.clone().unwrap_or_else(|| l.id.clone()),
                    ellipsize(l.objeto_compra.as_deref().unwrap_or(MISSING), OBJETO_MAX_CHARS),
                    or_missing(l.modalidade_nome.as_deref()),
                    l.situacao().to_string(),
                    format_brl(l.valor_total_estimado),
                    format_opt_date(l.data_publicacao_pncp.as_deref()),
                ]
            })
            .collect();
        let table = render_table(
            &["Número", "Objeto", "Modalidade", "Situação", "Valor estimado", "Publicação"],
            &rows,
        );
        Ok(with_pager(table, page))
    }

    fn format_anomalias(&self, page: &PageOutput<Anomalia>) -> Result<String> {
        if page.items.is_empty() {
            return Ok("Nenhuma anomalia encontrada.\n".to_string());
        }
        let rows: Vec<Vec<String>> = page
            .items
            .iter()
            .map(|a| {
                vec![
                    a.id.clone(),
                    a.tipo.clone(),
                    format_decimal(a.score_risco),
                    RiskLevel::from_score(a.score_risco).label().to_string(),
                    anomalia_status_label(&a.status),
                    or_missing(a.licitacao_id.as_deref()),
                    format_opt_brl(a.valor_detectado),
                    format_opt_date(a.created_at.as_deref()),
                ]
            })
            .collect();
        let table = render_table(
            &["ID", "Tipo", "Score", "Risco", "Status", "Licitação", "Valor", "Detectada em"],
            &rows,
        );
        Ok(with_pager(table, page))
    }

    fn format_anomalias_resumo(&self, resumo: &AnomaliaResumo) -> Result<String> {
        let mut output = format!(
            "Total de anomalias: {}\nScore de risco médio: {}\n\n",
            format_int(resumo.total),
            format_decimal(resumo.score_risco_medio)
        );
        let por_status: Vec<Vec<String>> = AnomaliaStatus::ALL
            .iter()
            .map(|s| vec![s.label().to_string(), format_int(resumo.count_for_status(*s))])
            .collect();
        output.push_str(&render_table(&["Status", "Quantidade"], &por_status));

        if !resumo.por_tipo.is_empty() {
            output.push('\n');
            let por_tipo: Vec<Vec<String>> = resumo
                .por_tipo
                .iter()
                .map(|(tipo, count)| vec![tipo.clone(), format_int(*count)])
                .collect();
            output.push_str(&render_table(&["Tipo", "Quantidade"], &por_tipo));
        }
        Ok(output)
    }

    fn format_fornecedores(&self, output: &FornecedoresOutput) -> Result<String> {
        if output.fornecedores.is_empty() {
            return Ok("Nenhum fornecedor encontrado.\n".to_string());
        }
        let mut text = format!(
            "Fornecedores: {} | Valor total: {} | ME/EPP: {}\n\n",
            format_int(output.total as u64),
            format_brl(output.valor_total),
            format_percent(output.percentual_meepp)
        );
        let rows: Vec<Vec<String>> = output
            .fornecedores
            .iter()
            .enumerate()
            .map(|(i, f)| {
                vec![
                    (i + 1).to_string(),
                    ellipsize(&f.razao_social, TEXTO_MAX_CHARS),
                    or_missing(f.cnpj.as_deref()),
                    f.porte_class().as_str().to_string(),
                    format_int(f.total_vitorias),
                    format_brl(f.valor_total_ganho),
                    sim_nao(f.impedida),
                ]
            })
            .collect();
        text.push_str(&render_table(
            &["#", "Razão social", "CNPJ", "Porte", "Vitórias", "Valor ganho", "Impedida"],
            &rows,
        ));
        Ok(text)
    }

    fn format_municipios(&self, municipios: &[Municipio]) -> Result<String> {
        if municipios.is_empty() {
            return Ok("Nenhum município encontrado.\n".to_string());
        }
        let rows: Vec<Vec<String>> = municipios
            .iter()
            .map(|m| {
                vec![
                    m.nome.clone(),
                    m.uf.clone(),
                    m.distancia_km
                        .map_or_else(|| MISSING.to_string(), |d| format!("{} km", format_decimal(d))),
                    format_int(m.total_licitacoes),
                    format_brl(m.valor_total),
                ]
            })
            .collect();
        Ok(render_table(
            &["Município", "UF", "Distância", "Licitações", "Valor total"],
            &rows,
        ))
    }

    fn format_historico_precos(&self, historico: &HistoricoPrecos) -> Result<String> {
        if historico.historico.is_empty() {
            return Ok(format!(
                "Nenhum registro de preço encontrado para '{}'.\n",
                historico.descricao
            ));
        }
        let mut output = format!(
            "Item: {} ({} meses, {} registros)\n\n",
            historico.descricao,
            historico.periodo_meses,
            format_int(historico.total_registros)
        );
        let rows: Vec<Vec<String>> = historico
            .historico
            .iter()
            .map(|p| {
                vec![
                    p.periodo.clone(),
                    format_brl(p.preco_medio),
                    format_opt_brl(p.preco_minimo),
                    format_opt_brl(p.preco_maximo),
                    format_int(p.quantidade),
                    or_missing(p.numero_compra.as_deref()),
                ]
            })
            .collect();
        output.push_str(&render_table(
            &["Período", "Preço médio", "Mínimo", "Máximo", "Qtd.", "Compra"],
            &rows,
        ));
        if let Some(media) = average(&price_series(historico)) {
            output.push_str(&format!("\nMédia do período: {}\n", format_brl(media)));
        }
        Ok(output)
    }

    fn format_alertas(&self, alertas: &[Alerta]) -> Result<String> {
        if alertas.is_empty() {
            return Ok("Nenhum alerta cadastrado.\n".to_string());
        }
        let rows: Vec<Vec<String>> = alertas
            .iter()
            .map(|a| {
                let palavras = if a.palavras_chave.is_empty() {
                    MISSING.to_string()
                } else {
                    ellipsize(&a.palavras_chave.join(", "), TEXTO_MAX_CHARS)
                };
                vec![
                    a.id.clone(),
                    a.nome.clone(),
                    a.tipo.clone(),
                    a.canal.clone(),
                    or_missing(a.destinatario.as_deref()),
                    palavras,
                    format_opt_brl(a.valor_minimo),
                    sim_nao(a.ativo),
                ]
            })
            .collect();
        Ok(render_table(
            &[
                "ID",
                "Nome",
                "Tipo",
                "Canal",
                "Destinatário",
                "Palavras-chave",
                "Valor mínimo",
                "Ativo",
            ],
            &rows,
        ))
    }

    fn format_empresas_impedidas(&self, empresas: &[EmpresaImpedida]) -> Result<String> {
        if empresas.is_empty() {
            return Ok("Nenhuma empresa impedida encontrada.\n".to_string());
        }
        let rows: Vec<Vec<String>> = empresas
            .iter()
            .map(|e| {
                vec![
                    e.cnpj.clone(),
                    ellipsize(&e.razao_social, TEXTO_MAX_CHARS),
                    e.fonte.clone(),
                    or_missing(e.uf.as_deref()),
                    ellipsize(e.motivo.as_deref().unwrap_or(MISSING), TEXTO_MAX_CHARS),
                    format_opt_date(e.data_inicio.as_deref()),
                ]
            })
            .collect();
        Ok(render_table(
            &["CNPJ", "Razão social", "Fonte", "UF", "Motivo", "Início"],
            &rows,
        ))
    }

    fn format_cnpj_check(&self, output: &CnpjCheckOutput) -> Result<String> {
        let mut text = format!("CNPJ: {}\nResultado: {}\n", output.cnpj, output.check.label());
        match &output.check {
            CnpjCheck::Clear => {}
            CnpjCheck::Impedida { fonte, motivo } => {
                text.push_str(&format!("Fonte: {}\n", or_missing(fonte.as_deref())));
                text.push_str(&format!("Motivo: {}\n", or_missing(motivo.as_deref())));
            }
            CnpjCheck::CheckFailed { reason } => {
                text.push_str(&format!("Detalhe: {reason}\n"));
            }
        }
        Ok(text)
    }

    fn format_ranking_governanca(&self, ranking: &[RankingGovernanca]) -> Result<String> {
        if ranking.is_empty() {
            return Ok("Nenhum município no ranking.\n".to_string());
        }
        let rows: Vec<Vec<String>> = ranking
            .iter()
            .enumerate()
            .map(|(i, r)| {
                vec![
                    (i + 1).to_string(),
                    r.municipio.clone(),
                    r.uf.clone(),
                    format_decimal(r.score_governanca),
                    GovernanceLevel::from_score(r.score_governanca)
                        .label()
                        .to_string(),
                    format_decimal(r.indice_transparencia),
                    format_percent(r.taxa_sucesso),
                    format_percent(r.participacao_meepp),
                    format_percent(r.economia_media),
                ]
            })
            .collect();
        let mut output = render_table(
            &[
                "#",
                "Município",
                "UF",
                "Score",
                "Nível",
                "Transparência",
                "Sucesso",
                "ME/EPP",
                "Economia",
            ],
            &rows,
        );
        let pesos: Vec<String> = GOVERNANCA_PESOS
            .iter()
            .map(|(nome, peso)| format!("{nome} {peso}%"))
            .collect();
        output.push_str(&format!("\nPesos: {}\n", pesos.join(", ")));
        Ok(output)
    }

    fn format_relatorios(&self, relatorios: &[Relatorio]) -> Result<String> {
        if relatorios.is_empty() {
            return Ok("Nenhum relatório gerado.\n".to_string());
        }
        let rows: Vec<Vec<String>> = relatorios
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.tipo.clone(),
                    r.formato.clone(),
                    r.status.clone(),
                    format_opt_date(r.created_at.as_deref()),
                    or_missing(r.download_url.as_deref()),
                ]
            })
            .collect();
        Ok(render_table(
            &["ID", "Tipo", "Formato", "Status", "Criado em", "Download"],
            &rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::fixtures;

    #[test]
    fn licitacoes_table_with_pager() {
        let output = TableFormatter
            .format_licitacoes(&fixtures::licitacoes_page())
            .unwrap();
        insta::assert_snapshot!(output, @r"
        Número   Objeto                      Modalidade           Situação           Valor estimado  Publicação
        -------  --------------------------  -------------------  -----------------  --------------  ----------
        41/2024  Material de limpeza         Pregão - Eletrônico  Divulgada no PNCP  R$ 154.320,50   14/05/2024
        42/2024  Manutenção predial, lote 2  Pregão - Eletrônico  Homologada         R$ 98.000,00    14/05/2024

        Página 2 de 2 (22 registros)
        ");
    }

    #[test]
    fn empty_list_prints_message() {
        let page = PageOutput::<Licitacao> {
            items: vec![],
            total: 0,
            page: 1,
            pages: 1,
        };
        let output = TableFormatter.format_licitacoes(&page).unwrap();
        assert_eq!(output, "Nenhuma licitação encontrada.\n");
    }

    #[test]
    fn dashboard_lists_kpis_and_months() {
        let output = TableFormatter.format_dashboard(&fixtures::dashboard()).unwrap();
        insta::assert_snapshot!(output, @r"
        Indicador             Valor
        --------------------  -----------------------
        Total de licitações   1.523
        Licitações abertas    87
        Valor estimado        R$ 254.300.000,75
        Valor homologado      R$ 231.000.000,00
        Economia gerada       R$ 23.300.000,75 (9,2%)
        Alertas pendentes     4
        Anomalias detectadas  12

        Mês      Licitações  Valor total
        -------  ----------  ----------------
        2024-04  134         R$ 17.250.000,50
        2024-05  98          R$ 11.000.000,00
        ");
    }

    #[test]
    fn anomalias_show_risk_level_and_status_label() {
        let page = PageOutput {
            items: vec![
                fixtures::anomalia("a1", 82.5, "pendente"),
                fixtures::anomalia("a2", 55.0, "analisada"),
                fixtures::anomalia("a3", 10.0, "investigando"),
            ],
            total: 3,
            page: 1,
            pages: 1,
        };
        let output = TableFormatter.format_anomalias(&page).unwrap();
        assert!(output.contains("82,5   Alto"));
        assert!(output.contains("55,0   Médio"));
        assert!(output.contains("Baixo  investigando"));
        assert!(output.contains("Pendente"));
        assert!(output.ends_with("Página 1 de 1 (3 registros)\n"));
    }

    #[test]
    fn cnpj_check_outcomes() {
        let impedida = CnpjCheckOutput::new(
            "12345678000190".to_string(),
            CnpjCheck::Impedida {
                fonte: Some("CEIS".to_string()),
                motivo: None,
            },
        );
        insta::assert_snapshot!(TableFormatter.format_cnpj_check(&impedida).unwrap(), @r"
        CNPJ: 12345678000190
        Resultado: empresa impedida
        Fonte: CEIS
        Motivo: -
        ");

        let failed = CnpjCheckOutput::new(
            "12345678000190".to_string(),
            CnpjCheck::CheckFailed {
                reason: "A API não respondeu a tempo".to_string(),
            },
        );
        let output = TableFormatter.format_cnpj_check(&failed).unwrap();
        assert!(output.contains("Resultado: verificação falhou"));
        assert!(output.contains("Detalhe: A API não respondeu a tempo"));
    }

    #[test]
    fn fornecedores_header_summarizes_stats() {
        let output = TableFormatter
            .format_fornecedores(&FornecedoresOutput::new(vec![
                fixtures::fornecedor("Alfa", "ME", 1000.0),
                fixtures::fornecedor("Beta", "EPP", 500.0),
                fixtures::fornecedor("Gama", "Demais", 2500.0),
                fixtures::fornecedor("Delta", "Demais", 1000.0),
            ]))
            .unwrap();
        assert!(output.starts_with("Fornecedores: 4 | Valor total: R$ 5.000,00 | ME/EPP: 50,0%\n"));
        assert!(output.contains("Demais"));
    }

    #[test]
    fn municipios_without_distance_show_placeholder() {
        let output = TableFormatter
            .format_municipios(&[
                fixtures::municipio("Goiânia", Some(0.0)),
                fixtures::municipio("Brasília", None),
            ])
            .unwrap();
        assert!(output.contains("0,0 km"));
        let brasilia = output.lines().find(|l| l.starts_with("Brasília")).unwrap();
        assert!(brasilia.contains("  -  "));
    }

    #[test]
    fn alertas_join_keywords() {
        let output = TableFormatter
            .format_alertas(&[fixtures::alerta("7", false)])
            .unwrap();
        assert!(output.contains("limpeza, higiene"));
        assert!(output.contains("R$ 10.000,00"));
        assert!(output.trim_end().ends_with("Não"));
    }

    #[test]
    fn governanca_lists_weights() {
        let ranking = vec![RankingGovernanca {
            municipio_id: None,
            municipio: "Goiânia".to_string(),
            uf: "GO".to_string(),
            score_governanca: 72.0,
            indice_transparencia: 80.0,
            taxa_sucesso: 65.0,
            participacao_meepp: 30.0,
            economia_media: 8.5,
        }];
        let output = TableFormatter.format_ranking_governanca(&ranking).unwrap();
        assert!(output.contains("72,0   Bom"));
        assert!(output.ends_with(
            "Pesos: Transparência 30%, Taxa de sucesso 25%, Concentração de mercado 20%, Participação ME/EPP 15%, Economia 10%\n"
        ));
    }
}
