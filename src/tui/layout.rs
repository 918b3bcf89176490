//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // chart
            Constraint::Length(4), // status panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: preset name, interpolation law, wind step.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " POWER-CURVE ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {} │ step {:.2} m/s ",
            app.params.interpolation,
            app.wind_step(),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Power curve with the current operating point highlighted.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let curve_data: Vec<(f64, f64)> = app
        .curve
        .iter()
        .map(|p| (p.wind_speed_ms, p.power_mw))
        .collect();

    let marker_data: Vec<(f64, f64)> = app
        .power()
        .map(|p| vec![(app.wind_speed, p)])
        .unwrap_or_default();

    let y_bounds = style::auto_bounds_y(&curve_data);
    let x_hi = app.max_wind_speed();

    let datasets = vec![
        Dataset::default()
            .name("Power")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::CURVE_COLOR))
            .data(&curve_data),
        Dataset::default()
            .name("Now")
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(style::MARKER_COLOR))
            .data(&marker_data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Power Curve ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("m/s")
                .bounds([0.0, x_hi])
                .labels(vec!["0".to_string(), format!("{x_hi:.0}")]),
        )
        .y_axis(
            Axis::default()
                .title("MW")
                .bounds(y_bounds)
                .labels(vec![
                    format!("{:.1}", y_bounds[0]),
                    format!("{:.1}", y_bounds[1]),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Status panel with the evaluated power or the evaluator's error.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.params;
    let turbine = Line::from(format!(
        "  cut-in={:.2}  rated={:.2}  cut-out={:.2} m/s  rated power={:.2} MW",
        p.cut_in, p.rated_speed, p.cut_out, p.rated_power,
    ));
    let reading = match app.power() {
        Ok(power) => Line::from(format!(
            "  u={:>6.2} m/s  →  P={:>7.3} MW",
            app.wind_speed, power
        )),
        Err(e) => Line::from(Span::styled(
            format!("  {e}"),
            Style::default().fg(style::ERROR_FG),
        )),
    };

    let block = Block::default().title(" Status ").borders(Borders::ALL);
    let paragraph = Paragraph::new(vec![turbine, reading]).block(block);
    frame.render_widget(paragraph, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ←/→:Wind  +/-:Step  i:Linear/Cubic  1/2/3:Preset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
