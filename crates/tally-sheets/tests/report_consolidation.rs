//! End-to-end report consolidation scenarios

use pretty_assertions::assert_eq;
use tally_sheets::prelude::*;

/// Build a one-sheet branch report: units sold, price, and a formula total.
fn branch_report(units: f64, price: f64) -> Workbook {
    let mut sheet = Sheet::new("Branch");

    let mut header = Row::new();
    let mut title = Cell::with_value("TITLE", "Branch sales");
    title.set_col_span(3);
    header.push_cell(title);
    header.set_height_in_points(Some(18.0));
    sheet.add_row(header);

    let mut data = Row::new();
    data.push_cell(Cell::with_value("UNITS", units));
    data.push_cell(Cell::with_value("PRICE", price));
    let mut total = Cell::new("TOTAL");
    total.set_formula("#UNITS# * #PRICE#");
    data.push_cell(total);
    sheet.add_row(data);

    sheet.set_column_width(0, 3000);

    let mut workbook = Workbook::new();
    workbook.add_sheet(sheet);
    workbook.add_print_area(PrintArea::bounded(0, 0, 2, 0, 1));
    workbook
}

fn number_at(workbook: &Workbook, row: usize, col: usize) -> Option<f64> {
    workbook
        .sheet(0)
        .and_then(|s| s.cell(row, col))
        .and_then(|c| c.value().as_number())
}

#[test]
fn consolidate_two_branches() {
    let mut region = branch_report(10.0, 2.5);
    let madrid = branch_report(4.0, 2.5);

    region.totalize(&madrid);

    assert_eq!(number_at(&region, 1, 0), Some(14.0));
    // The title row is text and stays untouched
    let title = region.sheet(0).unwrap().cell(0, 0).unwrap();
    assert_eq!(title.value().as_text(), Some("Branch sales"));
    // The source is unmodified
    assert_eq!(number_at(&madrid, 1, 0), Some(4.0));
}

#[test]
fn repeated_totalize_keeps_adding() {
    let mut region = branch_report(10.0, 2.5);
    let branch = branch_report(4.0, 2.5);

    region.totalize(&branch);
    region.totalize(&branch);

    assert_eq!(number_at(&region, 1, 0), Some(18.0));
}

#[test]
fn targeted_totalize_only_touches_the_id() {
    let mut region = branch_report(10.0, 2.5);
    let branch = branch_report(4.0, 9.0);

    region.totalize_by_id(&branch, "UNITS");

    assert_eq!(number_at(&region, 1, 0), Some(14.0));
    // PRICE was not the target and keeps its value
    assert_eq!(number_at(&region, 1, 1), Some(2.5));
}

#[test]
fn formulas_resolve_after_position_assignment() {
    let mut report = branch_report(10.0, 2.5);
    report.assign_positions().unwrap();

    let template = report
        .sheet(0)
        .unwrap()
        .cell(1, 2)
        .unwrap()
        .formula()
        .unwrap()
        .to_string();
    let resolved = resolve_formula(&report, &template).unwrap();

    assert_eq!(resolved, "A2 * B2");
}

#[test]
fn writer_enumeration_is_lossless() {
    let mut report = branch_report(10.0, 2.5);
    let style = report.create_style(Style::default());
    report
        .sheet_mut(0)
        .unwrap()
        .row_mut(0)
        .unwrap()
        .get_mut(0)
        .unwrap()
        .set_style(Some(style));
    report.assign_positions().unwrap();

    let sheet = report.sheet(0).unwrap();
    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.column_width(0), Some(3000));
    assert_eq!(report.print_areas().len(), 1);
    assert!(report.print_areas()[0].is_complete());

    let title = sheet.cell(0, 0).unwrap();
    assert_eq!(title.col_span(), 3);
    assert!(title.style().is_some());
    assert_eq!(title.position(), Some(&Address::new(1, "A")));
    assert_eq!(sheet.row(0).unwrap().height_in_points(), Some(18.0));
}

#[test]
fn cloned_report_is_independent() {
    let original = branch_report(10.0, 2.5);
    let mut copy = original.clone();

    copy.sheet_mut(0)
        .unwrap()
        .row_mut(1)
        .unwrap()
        .get_mut(0)
        .unwrap()
        .set_value(99.0);

    assert_eq!(number_at(&original, 1, 0), Some(10.0));
    assert_eq!(number_at(&copy, 1, 0), Some(99.0));
}
