//! CSV export of ledgers and sweep results
//!
//! Column headers come from the serde names of the row types
//! (`Month`, `Year`, `Down_Payment`, ...).

use std::io::Write;

use serde::Serialize;

use crate::engine::Comparison;
use crate::ledger::{BuyRow, InvestmentRow, RentRow};
use crate::sensitivity::SweepPoint;

fn write_rows<W: Write, R: Serialize>(writer: W, rows: &[R]) -> csv::Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_buy_ledger_csv<W: Write>(writer: W, rows: &[BuyRow]) -> csv::Result<()> {
    write_rows(writer, rows)
}

pub fn write_rent_ledger_csv<W: Write>(writer: W, rows: &[RentRow]) -> csv::Result<()> {
    write_rows(writer, rows)
}

pub fn write_investment_ledger_csv<W: Write>(writer: W, rows: &[InvestmentRow]) -> csv::Result<()> {
    write_rows(writer, rows)
}

pub fn write_sweep_csv<W: Write>(writer: W, points: &[SweepPoint]) -> csv::Result<()> {
    write_rows(writer, points)
}

/// Two-column text table of the per-column sums, one block per scenario
pub fn summary_table(comparison: &Comparison) -> String {
    let b = &comparison.buy_totals;
    let r = &comparison.rent_totals;
    let mut out = String::new();

    out.push_str("Buy\n");
    for (name, value) in [
        ("Down_Payment", b.down_payment),
        ("Legal_Fees", b.legal_fees),
        ("Mortgage", b.mortgage),
        ("Maintenance", b.maintenance),
        ("Sale", b.sale),
        ("Investment", b.investment),
        ("Investment_Capital", b.investment_capital),
        ("Total", b.total),
    ] {
        out.push_str(&format!("  {:<20}{:>14.0}\n", name, value));
    }

    out.push_str("Rent\n");
    for (name, value) in [
        ("Deposit", r.deposit),
        ("Rent", r.rent),
        ("Investment", r.investment),
        ("Investment_Capital", r.investment_capital),
        ("Total", r.total),
    ] {
        out.push_str(&format!("  {:<20}{:>14.0}\n", name, value));
    }

    out
}
