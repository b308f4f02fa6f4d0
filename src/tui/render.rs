//! Frame rendering for the dashboard.
//!
//! Pure view code: everything drawn here comes from the `App` selection
//! state and the per-frame `ViewModel`; nothing is mutated.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset as ChartDataset, GraphType,
        List, ListItem, ListState, Paragraph, Row, Table, Wrap,
    },
    Frame,
};

use super::app::{App, Focus, ViewModel};

/// One color per year, cycled, standing in for a continuous color scale.
const YEAR_PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

pub fn draw(frame: &mut Frame, app: &App, view: &ViewModel) {
    let outer = Layout::horizontal([Constraint::Length(30), Constraint::Min(40)])
        .split(frame.area());

    draw_sidebar(frame, outer[0], app);
    draw_main(frame, outer[1], app, view);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(4),
        Constraint::Min(4),
        Constraint::Length(5),
    ])
    .split(area);

    // Batsman selector
    let items: Vec<ListItem> = app
        .domains
        .batsmen
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();
    let mut state = ListState::default().with_selected(Some(app.batsman_index));
    let list = List::new(items)
        .block(focus_block("Batsman", app.focus == Focus::Batsman))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[0], &mut state);

    // Year range selector
    let years = vec![
        Line::from(format!("{} to {}", app.year_start, app.year_end)),
        Line::from(Span::styled(
            format!("data {}", app.domains.years),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let years = Paragraph::new(years)
        .block(focus_block("Year Range", app.focus == Focus::Years))
        .alignment(Alignment::Center);
    frame.render_widget(years, chunks[1]);

    // Bowling style selector
    let items: Vec<ListItem> = app
        .domains
        .styles
        .iter()
        .map(|style| ListItem::new(style.as_str()))
        .collect();
    let mut state = ListState::default().with_selected(app.style_index);
    let list = List::new(items)
        .block(focus_block("Bowling Style", app.focus == Focus::Style))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[2], &mut state);

    let help = Paragraph::new(vec![
        Line::from("Tab focus   Up/Down select"),
        Line::from("Left/Right year start"),
        Line::from("Shift+arrows year end"),
        Line::from("e raw table   q quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    frame.render_widget(help, chunks[3]);
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let constraints = if app.table_open {
        vec![
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Min(8),
        ]
    } else {
        vec![
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Percentage(45),
            Constraint::Min(10),
        ]
    };
    let chunks = Layout::vertical(constraints).split(area);

    let title = Paragraph::new("Batsmen Performance Analytics")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_kpis(frame, chunks[1], view);
    draw_line_chart(frame, chunks[2], app, view);
    draw_bar_chart(frame, chunks[3], app, view);

    if app.table_open {
        draw_raw_table(frame, chunks[4], app, view);
    }
}

fn draw_kpis(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let Some(kpis) = view.kpis else {
        let warning = Paragraph::new("No data available for selected filters.")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Key Performance Indicators"),
            );
        frame.render_widget(warning, area);
        return;
    };

    let cells = Layout::horizontal([
        Constraint::Percentage(34),
        Constraint::Percentage(33),
        Constraint::Percentage(33),
    ])
    .split(area);

    let metrics = [
        ("Total Runs", kpis.total_runs.to_string()),
        ("Average", format!("{:.2}", kpis.average)),
        ("Strike Rate", format!("{:.2}", kpis.strike_rate)),
    ];
    for (cell, (label, value)) in cells.iter().zip(metrics) {
        let metric = Paragraph::new(value)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(metric, *cell);
    }
}

fn draw_line_chart(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let title = format!("{}'s Runs Over the Years", app.batsman());

    let mut points: Vec<(f64, f64)> = view
        .overall
        .iter()
        .filter_map(|r| r.year.map(|y| (f64::from(y), r.runs)))
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    if points.is_empty() {
        frame.render_widget(notice("No year-wise data to show.", &title), area);
        return;
    }

    let (mut x_min, mut x_max) = (points[0].0, points[points.len() - 1].0);
    if x_min == x_max {
        // A single season still deserves a visible axis.
        x_min -= 1.0;
        x_max += 1.0;
    }
    let y_max = points.iter().map(|p| p.1).fold(1.0_f64, f64::max);

    let dataset = ChartDataset::default()
        .name(app.batsman().to_string())
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(axis_labels(x_min, x_max)),
        )
        .y_axis(
            Axis::default()
                .title("Runs")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(axis_labels(0.0, y_max)),
        );
    frame.render_widget(chart, area);
}

fn draw_bar_chart(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let style_name = app
        .style()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let title = format!("{} vs {} Bowlers", app.batsman(), style_name);

    let mut rows: Vec<(u16, u64)> = view
        .style
        .iter()
        .filter_map(|r| r.year.map(|y| (y, r.runs_scored.round().max(0.0) as u64)))
        .collect();
    rows.sort_by_key(|(year, _)| *year);

    if rows.is_empty() {
        frame.render_widget(notice("No style-wise data to display.", &title), area);
        return;
    }

    let bars: Vec<Bar> = rows
        .iter()
        .map(|(year, runs)| {
            Bar::default()
                .label(Line::from(year.to_string()))
                .value(*runs)
                .style(Style::default().fg(YEAR_PALETTE[*year as usize % YEAR_PALETTE.len()]))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(6)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Collapsible raw view of the filtered overall rows, positionally
/// re-indexed from zero.
fn draw_raw_table(frame: &mut Frame, area: Rect, app: &App, view: &ViewModel) {
    let header = Row::new(["#", "batter", "year", "runs", "avg", "sr"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let offset = app
        .table_offset
        .min(view.overall.len().saturating_sub(1));
    let rows = view.overall.iter().enumerate().skip(offset).map(|(i, r)| {
        Row::new(vec![
            i.to_string(),
            r.batter.clone(),
            r.year.map(|y| y.to_string()).unwrap_or_default(),
            format!("{:.0}", r.runs),
            r.avg.map(|v| format!("{v:.2}")).unwrap_or_default(),
            r.sr.map(|v| format!("{v:.2}")).unwrap_or_default(),
        ])
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Min(16),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(focus_block("Raw Filtered Data", app.focus == Focus::Table));
    frame.render_widget(table, area);
}

fn notice(message: &str, title: &str) -> Paragraph<'static> {
    Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        )
}

fn focus_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

fn axis_labels(min: f64, max: f64) -> Vec<Span<'static>> {
    let mid = (min + max) / 2.0;
    [min, mid, max]
        .iter()
        .map(|v| Span::raw(format!("{v:.0}")))
        .collect()
}
