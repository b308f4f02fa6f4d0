//! Dashboard state and key handling.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::cli::types::{Year, YearRange};
use crate::commands::common::SelectorDomains;
use crate::data::{Dataset, OverallRecord, StyleRecord};
use crate::filters::{self, Selection};
use crate::metrics::{self, Kpis};


/// Which sidebar control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Batsman,
    Years,
    Style,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Batsman => Focus::Years,
            Focus::Years => Focus::Style,
            Focus::Style => Focus::Table,
            Focus::Table => Focus::Batsman,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Batsman => Focus::Table,
            Focus::Years => Focus::Batsman,
            Focus::Style => Focus::Years,
            Focus::Table => Focus::Style,
        }
    }
}

/// Fresh filtered views for one frame.
pub struct ViewModel {
    pub overall: Vec<OverallRecord>,
    pub style: Vec<StyleRecord>,
    pub kpis: Option<Kpis>,
}

/// Dashboard state: the current selection plus focus and scroll positions.
pub struct App {
    pub dataset: &'static Dataset,
    pub domains: SelectorDomains,
    pub batsman_index: usize,
    /// `None` when the style domain is empty.
    pub style_index: Option<usize>,
    pub year_start: Year,
    pub year_end: Year,
    pub focus: Focus,
    pub table_open: bool,
    pub table_offset: usize,
}

impl App {
    pub fn new(dataset: &'static Dataset, domains: SelectorDomains) -> Self {
        let year_start = domains.years.start;
        let year_end = domains.years.end;
        let style_index = if domains.styles.is_empty() {
            None
        } else {
            Some(0)
        };
        Self {
            dataset,
            domains,
            batsman_index: 0,
            style_index,
            year_start,
            year_end,
            focus: Focus::Batsman,
            table_open: false,
            table_offset: 0,
        }
    }

    pub fn batsman(&self) -> &str {
        &self.domains.batsmen[self.batsman_index]
    }

    pub fn style(&self) -> Option<&crate::cli::types::BowlingStyle> {
        self.style_index.map(|i| &self.domains.styles[i])
    }

    pub fn selection(&self) -> Selection {
        Selection {
            batsman: self.batsman().to_string(),
            years: YearRange {
                start: self.year_start,
                end: self.year_end,
            },
            bowling_style: self.style().cloned().unwrap_or_default(),
        }
    }

    /// One full recompute pass over the immutable relations.
    pub fn view(&self) -> ViewModel {
        let selection = self.selection();
        let overall = filters::filter_overall(&self.dataset.overall, &selection);
        let style = filters::filter_style(&self.dataset.style_features, &selection);
        let kpis = metrics::summarize(&overall);
        ViewModel {
            overall,
            style,
            kpis,
        }
    }

    /// Apply one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Char('e') => self.table_open = !self.table_open,
            KeyCode::Up | KeyCode::Char('k') => self.select_up(),
            KeyCode::Down | KeyCode::Char('j') => self.select_down(),
            KeyCode::Left | KeyCode::Char('h') => self.year_left(modifiers),
            KeyCode::Right | KeyCode::Char('l') => self.year_right(modifiers),
            _ => {}
        }
        false
    }

    fn select_up(&mut self) {
        match self.focus {
            Focus::Batsman => {
                self.batsman_index = self.batsman_index.saturating_sub(1);
                self.table_offset = 0;
            }
            Focus::Style => {
                if let Some(i) = self.style_index {
                    self.style_index = Some(i.saturating_sub(1));
                }
            }
            Focus::Table => self.table_offset = self.table_offset.saturating_sub(1),
            Focus::Years => {}
        }
    }

    fn select_down(&mut self) {
        match self.focus {
            Focus::Batsman => {
                let last = self.domains.batsmen.len() - 1;
                self.batsman_index = (self.batsman_index + 1).min(last);
                self.table_offset = 0;
            }
            Focus::Style => {
                if let Some(i) = self.style_index {
                    let last = self.domains.styles.len() - 1;
                    self.style_index = Some((i + 1).min(last));
                }
            }
            Focus::Table => self.table_offset += 1,
            Focus::Years => {}
        }
    }

    /// Plain arrows move the lower year handle, shift moves the upper one.
    /// Handles clamp to the domain bounds and never cross each other.
    fn year_left(&mut self, modifiers: KeyModifiers) {
        if self.focus != Focus::Years {
            return;
        }
        if modifiers.contains(KeyModifiers::SHIFT) {
            if self.year_end > self.year_start {
                self.year_end = Year::new(self.year_end.as_u16() - 1);
            }
        } else if self.year_start > self.domains.years.start {
            self.year_start = Year::new(self.year_start.as_u16() - 1);
        }
        self.table_offset = 0;
    }

    fn year_right(&mut self, modifiers: KeyModifiers) {
        if self.focus != Focus::Years {
            return;
        }
        if modifiers.contains(KeyModifiers::SHIFT) {
            if self.year_end < self.domains.years.end {
                self.year_end = Year::new(self.year_end.as_u16() + 1);
            }
        } else if self.year_start < self.year_end {
            self.year_start = Year::new(self.year_start.as_u16() + 1);
        }
        self.table_offset = 0;
    }
}
