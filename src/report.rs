//! Printable plain-text reports.
//!
//! One renderer per simulation type, mirroring the on-screen breakdown:
//! a header with the report title and generation date, the result fields
//! rendered with the [`format`](crate::format) helpers, and an advisory
//! footer.

use chrono::{Local, NaiveDate};

use crate::format::{format_currency, format_date, format_percent};
use crate::models::{
    Gender, PensionProjection, RetirementEstimate, SeveranceStatement, TerminationType,
};

const REPORT_TITLE: &str = "Meu Futuro Financeiro";
const FOOTER: &str = "Este relatório contém estimativas baseadas na legislação vigente. \
Consulte um especialista para orientações específicas.";

fn header(title: &str, generated_on: NaiveDate) -> String {
    format!(
        "{}\n{}\n{}\nGerado em: {}\n",
        REPORT_TITLE,
        "=".repeat(REPORT_TITLE.len()),
        title,
        format_date(generated_on)
    )
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders a retirement estimate as a printable report.
pub fn render_retirement_report(estimate: &RetirementEstimate) -> String {
    let mut out = header("Simulação de Aposentadoria INSS", today());
    let profile = &estimate.profile;

    out.push_str("\nDados pessoais\n");
    out.push_str(&format!("  Nome: {}\n", profile.name));
    out.push_str(&format!("  Idade atual: {} anos\n", profile.age));
    out.push_str(&format!(
        "  Gênero: {}\n",
        match profile.gender {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
        }
    ));
    out.push_str(&format!(
        "  Tempo de contribuição: {} anos\n",
        profile.contribution_years
    ));
    out.push_str(&format!(
        "  Salário médio: {}\n",
        format_currency(profile.average_wage)
    ));

    out.push_str("\nResultado\n");
    out.push_str(&format!(
        "  Benefício estimado: {}\n",
        format_currency(estimate.estimated_benefit)
    ));
    out.push_str(&format!(
        "  Tempo restante: {} {}\n",
        estimate.remaining_years,
        if estimate.remaining_years == 1 {
            "ano"
        } else {
            "anos"
        }
    ));
    out.push_str(&format!(
        "  Idade na aposentadoria: {} anos\n",
        estimate.retirement_age
    ));
    out.push_str(&format!(
        "  Data estimada: {}\n",
        format_date(estimate.retirement_date)
    ));
    out.push_str(&format!("  Regra aplicada: {}\n", estimate.rule_name));

    out.push_str(&format!("\n{}\n", FOOTER));
    out
}

/// Renders a pension projection as a printable report.
///
/// Lists every projection year so the report mirrors the on-screen chart.
pub fn render_pension_report(projection: &PensionProjection) -> String {
    let mut out = header("Simulação de Previdência Privada", today());

    out.push_str("\nParâmetros\n");
    out.push_str(&format!(
        "  Investimento mensal: {}\n",
        format_currency(projection.monthly_contribution)
    ));
    out.push_str(&format!(
        "  Tempo de contribuição: {} anos\n",
        projection.duration_years
    ));
    out.push_str(&format!(
        "  Taxa de rentabilidade: {} ao ano\n",
        format_percent(projection.annual_rate, 1)
    ));

    out.push_str("\nResultado\n");
    out.push_str(&format!(
        "  Saldo final projetado: {}\n",
        format_currency(projection.final_balance)
    ));

    out.push_str("\nProjeção ano a ano\n");
    for entry in &projection.projection {
        out.push_str(&format!(
            "  {} anos: saldo {} (aportes {}, rendimento {})\n",
            entry.year,
            format_currency(entry.balance),
            format_currency(entry.cumulative_contribution),
            format_currency(entry.cumulative_yield)
        ));
    }

    out.push_str(&format!("\n{}\n", FOOTER));
    out
}

/// Renders a severance statement as a printable report.
pub fn render_severance_report(statement: &SeveranceStatement) -> String {
    let mut out = header("Simulação de Rescisão Trabalhista", today());

    out.push_str("\nDados do contrato\n");
    out.push_str(&format!(
        "  Salário atual: {}\n",
        format_currency(statement.wage)
    ));
    out.push_str(&format!(
        "  Tempo de empresa: {} meses\n",
        statement.tenure_months
    ));
    out.push_str(&format!(
        "  Férias vencidas: {} dias\n",
        statement.unused_vacation_days
    ));
    out.push_str(&format!(
        "  Tipo de rescisão: {}\n",
        match statement.termination_type {
            TerminationType::WithoutCause => "Demissão sem justa causa",
            TerminationType::Resignation => "Pedido de demissão",
            TerminationType::JustCause => "Demissão por justa causa",
            TerminationType::MutualAgreement => "Acordo entre as partes",
        }
    ));

    let amounts = &statement.amounts;
    out.push_str("\nVerbas rescisórias\n");
    out.push_str(&format!(
        "  Aviso prévio: {}\n",
        format_currency(amounts.notice)
    ));
    out.push_str(&format!(
        "  Férias vencidas: {}\n",
        format_currency(amounts.vacation_due)
    ));
    out.push_str(&format!(
        "  Férias proporcionais: {}\n",
        format_currency(amounts.vacation_pro_rata)
    ));
    out.push_str(&format!(
        "  13º proporcional: {}\n",
        format_currency(amounts.thirteenth_pro_rata)
    ));
    out.push_str(&format!(
        "  FGTS: {}\n",
        format_currency(amounts.severance_fund)
    ));
    out.push_str(&format!(
        "  Multa FGTS: {}\n",
        format_currency(amounts.fund_penalty)
    ));
    out.push_str(&format!("  TOTAL: {}\n", format_currency(amounts.total)));

    out.push_str(&format!("\n{}\n", FOOTER));
    out
}
