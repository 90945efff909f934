//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format every resource as RFC 4180 CSV through the `csv` crate.
//!
//! Does NOT handle:
//! - Export files (see `lap_client::export`, which keeps the dashboard's quoting rules).
//!
//! Invariants:
//! - Empty lists produce the header row only.
//! - Amounts are raw numbers with `.` decimals so spreadsheets can parse them.

use anyhow::{Context, Result};
use lap_client::models::{
    Alerta, Anomalia, AnomaliaResumo, CnpjCheck, EmpresaImpedida, HistoricoPrecos, Licitacao,
    Municipio, RankingGovernanca, Relatorio,
};

use crate::formatters::{
    CnpjCheckOutput, DashboardOutput, Formatter, FornecedoresOutput, PageOutput,
};

pub struct CsvFormatter;

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_csv<I>(headers: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut buffer = Vec::new();
    {
        let mut w = csv::Writer::from_writer(&mut buffer);
        w.write_record(headers)
            .context("Failed to write CSV headers")?;
        for row in rows {
            w.write_record(&row).context("Failed to write CSV record")?;
        }
        w.flush().context("Failed to flush CSV writer")?;
    }
    String::from_utf8(buffer).context("CSV output is not valid UTF-8")
}

impl Formatter for CsvFormatter {
    fn format_dashboard(&self, dashboard: &DashboardOutput) -> Result<String> {
        let k = &dashboard.kpis;
        let mut rows = vec![
            vec!["total_licitacoes".to_string(), k.total_licitacoes.to_string()],
            vec!["licitacoes_abertas".to_string(), k.licitacoes_abertas.to_string()],
            vec!["valor_total_estimado".to_string(), k.valor_total_estimado.to_string()],
            vec!["valor_total_homologado".to_string(), k.valor_total_homologado.to_string()],
            vec!["economia_gerada".to_string(), k.economia_gerada.valor.to_string()],
            vec![
                "economia_percentual".to_string(),
                k.economia_gerada.percentual.to_string(),
            ],
            vec!["alertas_pendentes".to_string(), k.alertas_pendentes.to_string()],
            vec!["anomalias_detectadas".to_string(), k.anomalias_detectadas.to_string()],
        ];
        rows.extend(dashboard.por_mes.iter().map(|p| {
            vec![format!("licitacoes_{}", p.periodo), p.total.to_string()]
        }));
        write_csv(&["indicador", "valor"], rows)
    }

    fn format_licitacoes(&self, page: &PageOutput<Licitacao>) -> Result<String> {
        write_csv(
            &[
                "id",
                "numero_compra",
                "objeto_compra",
                "modalidade_nome",
                "situacao_compra_nome",
                "valor_total_estimado",
                "valor_total_homologado",
                "data_publicacao_pncp",
            ],
            page.items.iter().map(|l| {
                vec![
                    l.id.clone(),
                    opt(l.numero_compra.as_deref()),
                    opt(l.objeto_compra.as_deref()),
                    opt(l.modalidade_nome.as_deref()),
                    opt(l.situacao_compra_nome.as_deref()),
                    l.valor_total_estimado.to_string(),
                    opt(l.valor_total_homologado),
                    opt(l.data_publicacao_pncp.as_deref()),
                ]
            }),
        )
    }

    fn format_anomalias(&self, page: &PageOutput<Anomalia>) -> Result<String> {
        write_csv(
            &[
                "id",
                "licitacao_id",
                "tipo",
                "score_risco",
                "status",
                "valor_detectado",
                "valor_referencia",
                "percentual_desvio",
                "created_at",
            ],
            page.items.iter().map(|a| {
                vec![
                    a.id.clone(),
                    opt(a.licitacao_id.as_deref()),
                    a.tipo.clone(),
                    a.score_risco.to_string(),
                    a.status.clone(),
                    opt(a.valor_detectado),
                    opt(a.valor_referencia),
                    opt(a.percentual_desvio),
                    opt(a.created_at.as_deref()),
                ]
            }),
        )
    }

    fn format_anomalias_resumo(&self, resumo: &AnomaliaResumo) -> Result<String> {
        let mut rows = vec![
            vec!["total".to_string(), String::new(), resumo.total.to_string()],
            vec![
                "score_risco_medio".to_string(),
                String::new(),
                resumo.score_risco_medio.to_string(),
            ],
        ];
        rows.extend(
            resumo
                .por_status
                .iter()
                .map(|(k, v)| vec!["status".to_string(), k.clone(), v.to_string()]),
        );
        rows.extend(
            resumo
                .por_tipo
                .iter()
                .map(|(k, v)| vec!["tipo".to_string(), k.clone(), v.to_string()]),
        );
        write_csv(&["metrica", "chave", "valor"], rows)
    }

    fn format_fornecedores(&self, output: &FornecedoresOutput) -> Result<String> {
        write_csv(
            &[
                "id",
                "razao_social",
                "cnpj",
                "porte",
                "total_vitorias",
                "valor_total_ganho",
                "impedida",
            ],
            output.fornecedores.iter().map(|f| {
                vec![
                    f.id.clone(),
                    f.razao_social.clone(),
                    opt(f.cnpj.as_deref()),
                    f.porte_class().as_str().to_string(),
                    f.total_vitorias.to_string(),
                    f.valor_total_ganho.to_string(),
                    f.impedida.to_string(),
                ]
            }),
        )
    }

    fn format_municipios(&self, municipios: &[Municipio]) -> Result<String> {
        write_csv(
            &[
                "nome",
                "uf",
                "codigo_ibge",
                "distancia_km",
                "latitude",
                "longitude",
                "total_licitacoes",
                "valor_total",
            ],
            municipios.iter().map(|m| {
                vec![
                    m.nome.clone(),
                    m.uf.clone(),
                    opt(m.codigo_ibge.as_deref()),
                    opt(m.distancia_km),
                    opt(m.latitude),
                    opt(m.longitude),
                    m.total_licitacoes.to_string(),
                    m.valor_total.to_string(),
                ]
            }),
        )
    }

    fn format_historico_precos(&self, historico: &HistoricoPrecos) -> Result<String> {
        write_csv(
            &[
                "periodo",
                "preco_medio",
                "preco_minimo",
                "preco_maximo",
                "quantidade",
                "numero_compra",
            ],
            historico.historico.iter().map(|p| {
                vec![
                    p.periodo.clone(),
                    p.preco_medio.to_string(),
                    opt(p.preco_minimo),
                    opt(p.preco_maximo),
                    p.quantidade.to_string(),
                    opt(p.numero_compra.as_deref()),
                ]
            }),
        )
    }

    fn format_alertas(&self, alertas: &[Alerta]) -> Result<String> {
        write_csv(
            &[
                "id",
                "nome",
                "tipo",
                "canal",
                "destinatario",
                "palavras_chave",
                "valor_minimo",
                "ativo",
            ],
            alertas.iter().map(|a| {
                vec![
                    a.id.clone(),
                    a.nome.clone(),
                    a.tipo.clone(),
                    a.canal.clone(),
                    opt(a.destinatario.as_deref()),
                    a.palavras_chave.join(","),
                    opt(a.valor_minimo),
                    a.ativo.to_string(),
                ]
            }),
        )
    }

    fn format_empresas_impedidas(&self, empresas: &[EmpresaImpedida]) -> Result<String> {
        write_csv(
            &["cnpj", "razao_social", "fonte", "uf", "motivo", "data_inicio"],
            empresas.iter().map(|e| {
                vec![
                    e.cnpj.clone(),
                    e.razao_social.clone(),
                    e.fonte.clone(),
                    opt(e.uf.as_deref()),
                    opt(e.motivo.as_deref()),
                    opt(e.data_inicio.as_deref()),
                ]
            }),
        )
    }

    fn format_cnpj_check(&self, output: &CnpjCheckOutput) -> Result<String> {
        let (resultado, fonte, detalhe) = match &output.check {
            CnpjCheck::Clear => ("clear", String::new(), String::new()),
            CnpjCheck::Impedida { fonte, motivo } => (
                "impedida",
                opt(fonte.as_deref()),
                opt(motivo.as_deref()),
            ),
            CnpjCheck::CheckFailed { reason } => ("check_failed", String::new(), reason.clone()),
        };
        write_csv(
            &["cnpj", "impedida", "resultado", "fonte", "detalhe"],
            [vec![
                output.cnpj.clone(),
                output.impedida.to_string(),
                resultado.to_string(),
                fonte,
                detalhe,
            ]],
        )
    }

    fn format_ranking_governanca(&self, ranking: &[RankingGovernanca]) -> Result<String> {
        write_csv(
            &[
                "municipio",
                "uf",
                "score_governanca",
                "indice_transparencia",
                "taxa_sucesso",
                "participacao_meepp",
                "economia_media",
            ],
            ranking.iter().map(|r| {
                vec![
                    r.municipio.clone(),
                    r.uf.clone(),
                    r.score_governanca.to_string(),
                    r.indice_transparencia.to_string(),
                    r.taxa_sucesso.to_string(),
                    r.participacao_meepp.to_string(),
                    r.economia_media.to_string(),
                ]
            }),
        )
    }

    fn format_relatorios(&self, relatorios: &[Relatorio]) -> Result<String> {
        write_csv(
            &["id", "tipo", "formato", "status", "created_at", "download_url"],
            relatorios.iter().map(|r| {
                vec![
                    r.id.clone(),
                    r.tipo.clone(),
                    r.formato.clone(),
                    r.status.clone(),
                    opt(r.created_at.as_deref()),
                    opt(r.download_url.as_deref()),
                ]
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::fixtures;

    #[test]
    fn licitacoes_csv_quotes_commas() {
        let output = CsvFormatter
            .format_licitacoes(&fixtures::licitacoes_page())
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,numero_compra,objeto_compra"));
        assert!(lines[2].contains("\"Manutenção predial, lote 2\""));
        assert!(lines[2].contains(",98000,"));
    }

    #[test]
    fn empty_list_yields_header_only() {
        let output = CsvFormatter.format_alertas(&[]).unwrap();
        assert_eq!(output.lines().collect::<Vec<_>>(), vec![
            "id,nome,tipo,canal,destinatario,palavras_chave,valor_minimo,ativo"
        ]);
    }

    #[test]
    fn keywords_are_one_quoted_cell() {
        let output = CsvFormatter
            .format_alertas(&[fixtures::alerta("7", true)])
            .unwrap();
        let row = output.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "7,Limpeza,licitacao,email,compras@example.com,\"limpeza,higiene\",10000,true"
        );
    }

    #[test]
    fn cnpj_check_failure_keeps_reason() {
        let output = CsvFormatter
            .format_cnpj_check(&CnpjCheckOutput::new(
                "123".to_string(),
                CnpjCheck::CheckFailed {
                    reason: "timeout".to_string(),
                },
            ))
            .unwrap();
        assert_eq!(output.lines().nth(1), Some("123,false,check_failed,,timeout"));
    }
}
