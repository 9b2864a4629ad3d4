use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    DefaultTerminal, Frame,
};

use crate::fmt;
use crate::models::{AssetTotal, Commitment};
use crate::tui::{self, FOOTER_STYLE, HEADER_STYLE, SELECTED_STYLE};

const PAGE_SIZE: usize = 15;

enum BrowseMode {
    Normal,
    GotoPage(String),
}

pub enum BrowseAction {
    Continue,
    Close,
}

/// Interactive pager over one investor's commitments, filterable by asset
/// class. The filter strip mirrors the asset-class rollups returned by the
/// API; totals always come from the server-side aggregates, not from
/// re-summing visible rows.
pub struct CommitmentBrowser {
    investor: String,
    commitments: Vec<Commitment>,
    asset_totals: Vec<AssetTotal>,
    total_amount: f64,
    /// Index into `asset_totals`; None shows every commitment.
    filter: Option<usize>,
    /// Indices into `commitments` matching the active filter.
    visible: Vec<usize>,
    offset: usize,
    selected: usize,
    mode: BrowseMode,
    status_message: Option<String>,
    table_state: TableState,
}

impl CommitmentBrowser {
    pub fn new(
        investor: String,
        commitments: Vec<Commitment>,
        asset_totals: Vec<AssetTotal>,
        total_amount: f64,
    ) -> Self {
        let visible = (0..commitments.len()).collect();
        Self {
            investor,
            commitments,
            asset_totals,
            total_amount,
            filter: None,
            visible,
            offset: 0,
            selected: 0,
            mode: BrowseMode::Normal,
            status_message: None,
            table_state: TableState::default(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        if self.commitments.is_empty() {
            println!("No commitments found for {}.", self.investor);
            return Ok(());
        }

        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            ratatui::restore();
            hook(info);
        }));

        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw_frame(frame))?;

            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event::read()?
            {
                if kind != KeyEventKind::Press {
                    continue;
                }
                if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                    break;
                }
                if let BrowseAction::Close = self.handle_key_event(code) {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Draw the browser into the given frame.
    pub fn draw_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let strip = self.filter_strip();
        let (wrapped_strip, strip_lines) = tui::wrap_text(&strip, area.width.max(20) as usize - 2);

        let areas = Layout::vertical([
            Constraint::Length(1),               // title
            Constraint::Length(strip_lines + 1), // asset-class filter strip
            Constraint::Fill(1),                 // table
            Constraint::Length(1),               // status
            Constraint::Length(1),               // keys
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(format!("Commitments for {}", self.investor)).style(HEADER_STYLE),
            areas[0],
        );
        frame.render_widget(Paragraph::new(wrapped_strip), areas[1]);

        let page: Vec<Row> = self
            .visible
            .iter()
            .skip(self.offset)
            .take(PAGE_SIZE)
            .map(|&i| {
                let c = &self.commitments[i];
                Row::new(vec![
                    Cell::from(c.asset_class.clone()),
                    Cell::from(fmt::short_date(&c.date_added)),
                    Cell::from(fmt::short_date(&c.last_updated)),
                    Cell::from(tui::amount_span(c.amount)),
                ])
            })
            .collect();

        let widths = vec![
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(16),
        ];
        let header = vec!["Asset Class", "Date Added", "Last Updated", "Amount (£)"];

        self.table_state.select(Some(self.selected));
        let table = Table::new(page, widths)
            .header(Row::new(header).style(HEADER_STYLE).bottom_margin(1))
            .column_spacing(1)
            .row_highlight_style(SELECTED_STYLE);
        frame.render_stateful_widget(table, areas[2], &mut self.table_state);

        let end_row = (self.offset + PAGE_SIZE).min(self.visible.len());
        let mut status = format!(
            "Rows {}-{} of {} | Page {} of {} | Total: {}",
            self.offset + 1,
            end_row,
            self.visible.len(),
            self.current_page() + 1,
            self.page_count(),
            fmt::amount(self.filtered_total()),
        );
        if let Some(ref msg) = self.status_message {
            status.push_str(" | ");
            status.push_str(msg);
        }
        frame.render_widget(Paragraph::new(status).style(FOOTER_STYLE), areas[3]);

        let keys = match &self.mode {
            BrowseMode::Normal => Paragraph::new(
                "\u{2191}/\u{2193}:select  n/\u{2192}:next  p/\u{2190}:prev  g:page  f:filter  0-9:asset class  q:quit",
            )
            .style(FOOTER_STYLE),
            BrowseMode::GotoPage(input) => Paragraph::new(format!("Go to page: {input}\u{2588}")),
        };
        frame.render_widget(keys, areas[4]);
    }

    /// Handle a key event. Returns Close when the browser should exit.
    pub fn handle_key_event(&mut self, code: KeyCode) -> BrowseAction {
        self.status_message = None;

        match &self.mode {
            BrowseMode::Normal => match code {
                KeyCode::Char('q') | KeyCode::Esc => return BrowseAction::Close,
                KeyCode::Down => {
                    let on_page = self.visible.len().saturating_sub(self.offset).min(PAGE_SIZE);
                    if self.selected + 1 < on_page {
                        self.selected += 1;
                    }
                }
                KeyCode::Up => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
                    self.next_page();
                }
                KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
                    self.prev_page();
                }
                KeyCode::Home => {
                    self.offset = 0;
                    self.selected = 0;
                }
                KeyCode::End => {
                    self.last_page();
                }
                KeyCode::Char('g') => {
                    self.mode = BrowseMode::GotoPage(String::new());
                }
                KeyCode::Char('f') => {
                    self.cycle_filter();
                }
                KeyCode::Char('0') => {
                    self.set_filter(None);
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let idx = c as usize - '1' as usize;
                    if idx < self.asset_totals.len() {
                        self.set_filter(Some(idx));
                    }
                }
                _ => {}
            },
            BrowseMode::GotoPage(_) => match code {
                KeyCode::Esc => self.mode = BrowseMode::Normal,
                KeyCode::Enter => self.submit_goto_page(),
                KeyCode::Backspace => {
                    if let BrowseMode::GotoPage(s) = &mut self.mode {
                        s.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let BrowseMode::GotoPage(s) = &mut self.mode {
                        s.push(c);
                    }
                }
                _ => {}
            },
        }
        BrowseAction::Continue
    }

    /// Restrict the view to one asset class, or show everything.
    pub fn set_filter(&mut self, filter: Option<usize>) {
        self.filter = filter;
        self.visible = match self.filter {
            Some(idx) => {
                let class = &self.asset_totals[idx].asset_class;
                self.commitments
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| &c.asset_class == class)
                    .map(|(i, _)| i)
                    .collect()
            }
            None => (0..self.commitments.len()).collect(),
        };
        self.offset = 0;
        self.selected = 0;
    }

    fn cycle_filter(&mut self) {
        if self.asset_totals.is_empty() {
            return;
        }
        let next = match self.filter {
            None => Some(0),
            Some(i) if i + 1 < self.asset_totals.len() => Some(i + 1),
            Some(_) => None,
        };
        self.set_filter(next);
    }

    /// Total for the active filter, from the API's own aggregates.
    pub fn filtered_total(&self) -> f64 {
        match self.filter {
            Some(idx) => self.asset_totals[idx].total_amount,
            None => self.total_amount,
        }
    }

    fn filter_strip(&self) -> String {
        let mut chips = Vec::with_capacity(self.asset_totals.len() + 1);
        let all = format!("All {}", fmt::amount(self.total_amount));
        chips.push(if self.filter.is_none() {
            format!("[{all}]")
        } else {
            all
        });
        for (i, t) in self.asset_totals.iter().enumerate() {
            let chip = format!(
                "{}. {} {}",
                i + 1,
                t.asset_class,
                fmt::amount(t.total_amount)
            );
            chips.push(if self.filter == Some(i) {
                format!("[{chip}]")
            } else {
                chip
            });
        }
        chips.join("  ")
    }

    fn current_page(&self) -> usize {
        self.offset / PAGE_SIZE
    }

    fn page_count(&self) -> usize {
        self.visible.len().div_ceil(PAGE_SIZE).max(1)
    }

    fn next_page(&mut self) {
        let new_offset = self.offset + PAGE_SIZE;
        if new_offset < self.visible.len() {
            self.offset = new_offset;
            self.selected = 0;
        }
    }

    fn prev_page(&mut self) {
        self.offset = self.offset.saturating_sub(PAGE_SIZE);
        self.selected = 0;
    }

    fn last_page(&mut self) {
        self.offset = (self.page_count() - 1) * PAGE_SIZE;
        self.selected = 0;
    }

    fn submit_goto_page(&mut self) {
        let mode = std::mem::replace(&mut self.mode, BrowseMode::Normal);
        if let BrowseMode::GotoPage(input) = mode {
            match input.trim().parse::<usize>() {
                Ok(page) if page >= 1 && page <= self.page_count() => {
                    self.offset = (page - 1) * PAGE_SIZE;
                    self.selected = 0;
                }
                Ok(page) => {
                    self.status_message = Some(format!("No page {page}"));
                }
                Err(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commitments(n: usize) -> Vec<Commitment> {
        (0..n)
            .map(|i| Commitment {
                amount: 1_000_000.0 + i as f64,
                asset_class: if i % 2 == 0 {
                    "Infrastructure".to_string()
                } else {
                    "Private Equity".to_string()
                },
                date_added: format!("2020-01-{:02}", (i % 28) + 1),
                last_updated: "2024-02-21".to_string(),
            })
            .collect()
    }

    fn make_totals() -> Vec<AssetTotal> {
        vec![
            AssetTotal {
                asset_class: "Infrastructure".to_string(),
                total_amount: 25_000_000.0,
                number_of_commitments: 25,
            },
            AssetTotal {
                asset_class: "Private Equity".to_string(),
                total_amount: 25_000_025.0,
                number_of_commitments: 25,
            },
        ]
    }

    fn make_browser(n: usize) -> CommitmentBrowser {
        CommitmentBrowser::new(
            "Test Fund".to_string(),
            make_commitments(n),
            make_totals(),
            50_000_025.0,
        )
    }

    #[test]
    fn test_next_page() {
        let mut browser = make_browser(50);
        assert_eq!(browser.offset, 0);
        browser.next_page();
        assert_eq!(browser.offset, PAGE_SIZE);
        browser.next_page();
        assert_eq!(browser.offset, PAGE_SIZE * 2);
    }

    #[test]
    fn test_next_page_stops_at_end() {
        let mut browser = make_browser(10);
        browser.next_page();
        assert_eq!(browser.offset, 0);
    }

    #[test]
    fn test_prev_page_saturates() {
        let mut browser = make_browser(50);
        browser.offset = PAGE_SIZE * 2;
        browser.prev_page();
        assert_eq!(browser.offset, PAGE_SIZE);
        browser.prev_page();
        assert_eq!(browser.offset, 0);
        browser.prev_page();
        assert_eq!(browser.offset, 0);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(make_browser(1).page_count(), 1);
        assert_eq!(make_browser(15).page_count(), 1);
        assert_eq!(make_browser(16).page_count(), 2);
        assert_eq!(make_browser(45).page_count(), 3);
    }

    #[test]
    fn test_goto_page() {
        let mut browser = make_browser(50);
        browser.mode = BrowseMode::GotoPage("3".to_string());
        browser.submit_goto_page();
        assert_eq!(browser.offset, 2 * PAGE_SIZE);
    }

    #[test]
    fn test_goto_page_out_of_range() {
        let mut browser = make_browser(20);
        browser.mode = BrowseMode::GotoPage("9".to_string());
        browser.submit_goto_page();
        assert_eq!(browser.offset, 0);
        assert!(browser.status_message.is_some());
    }

    #[test]
    fn test_filter_restricts_rows() {
        let mut browser = make_browser(50);
        assert_eq!(browser.visible.len(), 50);
        browser.set_filter(Some(0));
        assert_eq!(browser.visible.len(), 25);
        assert!(browser
            .visible
            .iter()
            .all(|&i| browser.commitments[i].asset_class == "Infrastructure"));
        browser.set_filter(None);
        assert_eq!(browser.visible.len(), 50);
    }

    #[test]
    fn test_filter_resets_pagination() {
        let mut browser = make_browser(50);
        browser.next_page();
        browser.selected = 3;
        browser.set_filter(Some(1));
        assert_eq!(browser.offset, 0);
        assert_eq!(browser.selected, 0);
    }

    #[test]
    fn test_cycle_filter_wraps_back_to_all() {
        let mut browser = make_browser(10);
        browser.cycle_filter();
        assert_eq!(browser.filter, Some(0));
        browser.cycle_filter();
        assert_eq!(browser.filter, Some(1));
        browser.cycle_filter();
        assert_eq!(browser.filter, None);
    }

    #[test]
    fn test_digit_keys_select_asset_class() {
        let mut browser = make_browser(10);
        browser.handle_key_event(KeyCode::Char('2'));
        assert_eq!(browser.filter, Some(1));
        browser.handle_key_event(KeyCode::Char('0'));
        assert_eq!(browser.filter, None);
        // Out-of-range digit is ignored
        browser.handle_key_event(KeyCode::Char('7'));
        assert_eq!(browser.filter, None);
    }

    #[test]
    fn test_filtered_total_uses_api_aggregates() {
        let mut browser = make_browser(10);
        assert_eq!(browser.filtered_total(), 50_000_025.0);
        browser.set_filter(Some(0));
        assert_eq!(browser.filtered_total(), 25_000_000.0);
    }

    #[test]
    fn test_close_on_q_and_esc() {
        let mut browser = make_browser(5);
        assert!(matches!(
            browser.handle_key_event(KeyCode::Char('q')),
            BrowseAction::Close
        ));
        assert!(matches!(
            browser.handle_key_event(KeyCode::Esc),
            BrowseAction::Close
        ));
    }

    #[test]
    fn test_selection_stays_on_page() {
        let mut browser = make_browser(20);
        for _ in 0..20 {
            browser.handle_key_event(KeyCode::Down);
        }
        assert_eq!(browser.selected, PAGE_SIZE - 1);
        browser.handle_key_event(KeyCode::Up);
        assert_eq!(browser.selected, PAGE_SIZE - 2);
    }

    #[test]
    fn test_filter_strip_marks_active_chip() {
        let mut browser = make_browser(10);
        assert!(browser.filter_strip().starts_with("[All "));
        browser.set_filter(Some(0));
        let strip = browser.filter_strip();
        assert!(strip.contains("[1. Infrastructure"));
        assert!(!strip.starts_with("[All "));
    }
}
