//! 端末向けの表示
//!
//! 詳細カードとグリッド表を文字列として組み立てる（出力は呼び出し側）

use chrono::NaiveDateTime;
use rental_viewer_common::{
    empty_message, DetailStatus, FlattenedRow, GridView, PageCursor, RentalDate, VehicleRecord, GRID_COLUMNS,
};

const NOT_AVAILABLE: &str = "N/A";

/// chronoの `%x`。実行環境のロケールは見ず、常に `月/日/年下2桁`（例: `01/10/24`）
const DATE_FORMAT: &str = "%x";

fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATE_FORMAT).to_string()
}

/// 詳細カード用の日付表示（`01/10/24` 形式固定）
pub fn locale_date(date: &RentalDate) -> String {
    format_datetime(date.as_datetime())
}

fn optional_date(date: Option<&RentalDate>) -> String {
    date.map(locale_date).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<15}{}\n", label, value));
}

fn render_record(record: &VehicleRecord, cursor: PageCursor) -> String {
    let mut out = String::from("Vehicle Details\n");
    push_field(&mut out, "ID", &record.id.to_string());
    push_field(&mut out, "License Plate", &record.license_plate);
    push_field(&mut out, "Brand", &record.brand);
    push_field(&mut out, "Model", &record.model);

    if let Some(contract) = &record.rental_contract {
        out.push_str("\nRental Contract Details\n");
        let contract_id = contract
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        push_field(&mut out, "Contract ID", &contract_id);
        push_field(&mut out, "Customer Name", &contract.customer_name);
        push_field(&mut out, "Start Date", &optional_date(contract.start_date.as_ref()));
        push_field(&mut out, "End Date", &optional_date(contract.end_date.as_ref()));
    }

    out.push('\n');
    out.push_str(&navigation_line(cursor));
    out
}

/// "< Prev  Page 2 of 3  Next >"（押せない側は "-"）
pub fn navigation_line(cursor: PageCursor) -> String {
    let previous = if cursor.has_previous() { "< Prev" } else { "     -" };
    let next = if cursor.has_next() { "Next >" } else { "-     " };
    format!("{}  {}  {}", previous, cursor.indicator(), next)
}

/// 詳細ビューの表示
pub fn render_detail(status: &DetailStatus<'_>) -> String {
    match status {
        DetailStatus::Loading => "Loading...".to_string(),
        DetailStatus::Error(message) => message.to_string(),
        DetailStatus::Empty { identifier } => empty_message(*identifier),
        DetailStatus::Record { record, cursor } => render_record(record, *cursor),
    }
}

fn grid_cells(row: &FlattenedRow) -> [String; 8] {
    [
        row.id.to_string(),
        row.license_plate.clone(),
        row.brand.clone(),
        row.model.clone(),
        row.rental_id.map(|id| id.to_string()).unwrap_or_default(),
        row.customer_name.clone(),
        row.start_date.map(|d| d.to_string()).unwrap_or_default(),
        row.end_date.map(|d| d.to_string()).unwrap_or_default(),
    ]
}

/// グリッドの現在ページを表形式で表示
pub fn render_grid(grid: &GridView) -> String {
    if grid.is_loading() {
        return "Loading...".to_string();
    }
    if let Some(error) = grid.error() {
        return error.to_string();
    }

    let body: Vec<[String; 8]> = grid.visible_rows().iter().map(grid_cells).collect();
    let mut widths: Vec<usize> = GRID_COLUMNS.iter().map(|(_, label)| label.chars().count()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(GRID_COLUMNS.iter().map(|(_, label)| *label).collect())];
    if body.is_empty() {
        lines.push("No rows".to_string());
    }
    for cells in &body {
        lines.push(format_line(cells.iter().map(String::as_str).collect()));
    }

    let pager = grid.pager();
    lines.push(String::new());
    lines.push(format!(
        "Rows per page: {}    {}    Page {} of {}",
        pager.page_size(),
        grid.range_label(),
        pager.page() + 1,
        pager.page_count(grid.filtered_rows().len()),
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_viewer_common::{decode_vehicles, ContractId, DetailView, FetchError, FilterField};

    const COROLLA: &str = r#"{"id":42,"licensePlate":"ABC-123","brand":"Toyota","model":"Corolla","rentalContract":null}"#;
    const CIVIC: &str = r#"{"id":7,"licensePlate":"XYZ-789","brand":"Honda","model":"Civic",
        "rentalContract":{"id":101,"customerName":"Jane Doe","startDate":"2024-01-10","endDate":null}}"#;

    fn detail_with(body: &str) -> DetailView {
        let mut view = DetailView::new();
        let ticket = view.begin_fetch(Some(ContractId(42)));
        view.complete(ticket, Ok(decode_vehicles(body).unwrap()));
        view
    }

    #[test]
    fn test_detail_without_contract_has_no_contract_section() {
        let view = detail_with(COROLLA);
        let text = render_detail(&view.status());
        assert!(text.contains("ABC-123"));
        assert!(text.contains("Toyota"));
        assert!(!text.contains("Rental Contract Details"));
        assert!(text.contains("Page 1 of 1"));
        assert!(!text.contains("< Prev"));
        assert!(!text.contains("Next >"));
    }

    #[test]
    fn test_detail_with_contract_renders_missing_date_as_na() {
        let view = detail_with(CIVIC);
        let text = render_detail(&view.status());
        assert!(text.contains("Rental Contract Details"));
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("01/10/24"));
        assert!(text.contains(NOT_AVAILABLE));
    }

    #[test]
    fn test_locale_date_is_fixed_format() {
        let date = RentalDate::parse("2024-12-31T23:59:00").unwrap();
        assert_eq!(locale_date(&date), "12/31/24");
        assert_eq!(format_datetime(date.as_datetime()), "12/31/24");
    }

    #[test]
    fn test_detail_messages() {
        let mut view = DetailView::new();
        let ticket = view.begin_fetch(Some(ContractId(5)));
        assert_eq!(render_detail(&view.status()), "Loading...");

        view.complete(ticket, Ok(Vec::new()));
        assert_eq!(render_detail(&view.status()), "No data found for contract ID: 5");

        let ticket = view.begin_fetch(None);
        view.complete(ticket, Err(FetchError::Status(500)));
        assert_eq!(render_detail(&view.status()), FetchError::USER_MESSAGE);
    }

    #[test]
    fn test_navigation_line_marks_available_directions() {
        let mut cursor = PageCursor::new(3);
        cursor.next();
        assert_eq!(navigation_line(cursor), "< Prev  Page 2 of 3  Next >");
    }

    #[test]
    fn test_grid_table_and_footer() {
        let mut grid = GridView::new();
        let ticket = grid.begin_load();
        let body = format!("[{},{}]", COROLLA, CIVIC);
        grid.complete_load(ticket, Ok(decode_vehicles(&body).unwrap()));

        let text = render_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("Customer Name"));
        assert!(lines[1].starts_with("42"));
        assert!(lines[2].contains("2024-01-10"));
        assert!(text.contains("Rows per page: 10"));
        assert!(text.contains("1-2 of 2"));
    }

    #[test]
    fn test_grid_no_rows_after_filter() {
        let mut grid = GridView::new();
        let ticket = grid.begin_load();
        grid.complete_load(ticket, Ok(decode_vehicles(COROLLA).unwrap()));
        grid.set_input(FilterField::CustomerName, "nobody");
        grid.search().unwrap();
        let text = render_grid(&grid);
        assert!(text.contains("No rows"));
        assert!(text.contains("0-0 of 0"));
    }
}
