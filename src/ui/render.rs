use crate::control::{Dropdown, Modal};
use crate::ui::app::{App, GalleryItem};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    // Header + Body + Event log + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(crate::ui::app::EVENT_LOG_LIMIT as u16 + 2),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);
    render_gallery(frame, app, main_chunks[1]);
    render_events(frame, app, main_chunks[2]);
    render_footer(frame, app, main_chunks[3]);

    if app.modal.is_open() {
        render_modal(frame, app, &app.modal);
    }
}

fn primary(app: &App) -> Color {
    app.variant.primary_color()
}

fn border_style(app: &App, item: GalleryItem) -> Style {
    if app.focused() != item {
        return Style::default().fg(Color::Gray);
    }
    let style = Style::default().fg(primary(app));
    if app.glow_lit() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn item_block(app: &App, item: GalleryItem) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(item.title())
        .border_style(border_style(app, item))
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let motion = if app.motion.reduced_motion_preferred() {
        "reduced motion"
    } else {
        "animated"
    };
    let header_text = vec![Line::from(vec![
        Span::styled(
            "  NEONKIT  ",
            Style::default()
                .fg(app.variant.on_primary_color())
                .bg(primary(app))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  variant: {}  |  {}", app.variant.label, motion)),
    ])];

    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(primary(app))),
    );

    frame.render_widget(header, area);
}

fn dropdown_height(dropdown: &Dropdown) -> u16 {
    if dropdown.is_open() {
        dropdown.options().len() as u16 + 3
    } else {
        3
    }
}

fn item_height(app: &App, item: GalleryItem) -> u16 {
    match item {
        GalleryItem::Input | GalleryItem::Switch | GalleryItem::ModalTrigger => 3,
        GalleryItem::Textarea => app.textarea.rows() + 2,
        GalleryItem::Radio => app.radio.options().len() as u16 + 2,
        GalleryItem::Dropdown => dropdown_height(&app.dropdown),
        GalleryItem::MultiDropdown => dropdown_height(&app.tags),
    }
}

fn render_gallery(frame: &mut Frame, app: &App, area: Rect) {
    let mut constraints: Vec<Constraint> = GalleryItem::ALL
        .iter()
        .map(|item| Constraint::Length(item_height(app, *item)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (item, chunk) in GalleryItem::ALL.iter().zip(chunks.iter()) {
        match item {
            GalleryItem::Input | GalleryItem::Textarea => render_text(frame, app, *item, *chunk),
            GalleryItem::Switch => render_switch(frame, app, *chunk),
            GalleryItem::Radio => render_radio(frame, app, *chunk),
            GalleryItem::Dropdown => render_dropdown(frame, app, &app.dropdown, *item, *chunk),
            GalleryItem::MultiDropdown => render_dropdown(frame, app, &app.tags, *item, *chunk),
            GalleryItem::ModalTrigger => render_modal_trigger(frame, app, *chunk),
        }
    }
}

fn render_text(frame: &mut Frame, app: &App, item: GalleryItem, area: Rect) {
    let input = match item {
        GalleryItem::Textarea => app.textarea.input(),
        _ => &app.input,
    };

    let paragraph = if input.value().is_empty() {
        Paragraph::new(input.placeholder().to_string()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(input.value().to_string()).style(Style::default().fg(Color::White))
    };
    frame.render_widget(paragraph.block(item_block(app, item)), area);

    if app.focused() == item && !app.modal.is_open() {
        let (line, col) = match item {
            GalleryItem::Textarea => app.textarea.cursor_position(),
            _ => (0, input.cursor()),
        };
        let x = area.x.saturating_add(1).saturating_add(col as u16);
        let y = area.y.saturating_add(1).saturating_add(line as u16);
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            frame.set_cursor_position((x, y));
        }
    }
}

fn render_switch(frame: &mut Frame, app: &App, area: Rect) {
    let checked = app.switch.is_checked();
    let (track, state) = if checked {
        ("[ ━━● ]", "On")
    } else {
        ("[ ●━━ ]", "Off")
    };
    let track_style = if checked {
        Style::default().fg(primary(app)).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled(track, track_style),
        Span::raw(format!(" {} ({})", app.switch.label(), state)),
    ]);
    let paragraph = Paragraph::new(line).block(item_block(app, GalleryItem::Switch));
    frame.render_widget(paragraph, area);
}

fn render_radio(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused() == GalleryItem::Radio;
    let lines: Vec<Line> = app
        .radio
        .options()
        .iter()
        .enumerate()
        .map(|(i, (value, label))| {
            let marker = if app.radio.is_selected(value) { "(●)" } else { "( )" };
            let style = if focused && i == app.radio.highlighted() {
                Style::default().fg(primary(app)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::styled(format!("{} {}", marker, label), style)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(item_block(app, GalleryItem::Radio));
    frame.render_widget(paragraph, area);
}

fn render_dropdown(frame: &mut Frame, app: &App, dropdown: &Dropdown, item: GalleryItem, area: Rect) {
    let arrow = if dropdown.is_open() { "▲" } else { "▼" };
    let mut lines = vec![Line::from(vec![
        Span::styled(dropdown.summary(), Style::default().fg(Color::White)),
        Span::styled(format!(" {}", arrow), Style::default().fg(primary(app))),
    ])];

    if dropdown.is_open() {
        for (i, option) in dropdown.options().iter().enumerate() {
            let check = if dropdown.is_selected(&option.value) { "✓" } else { " " };
            let style = if option.disabled {
                Style::default().fg(Color::DarkGray)
            } else if i == dropdown.highlighted() {
                Style::default()
                    .fg(app.variant.on_primary_color())
                    .bg(primary(app))
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::styled(format!(" {} {}", check, option.label), style));
        }
    }

    let paragraph = Paragraph::new(lines).block(item_block(app, item));
    frame.render_widget(paragraph, area);
}

fn render_modal_trigger(frame: &mut Frame, app: &App, area: Rect) {
    let button = Line::from(Span::styled(
        " Open modal ",
        Style::default()
            .fg(app.variant.on_primary_color())
            .bg(primary(app))
            .add_modifier(Modifier::BOLD),
    ));
    let paragraph = Paragraph::new(button).block(item_block(app, GalleryItem::ModalTrigger));
    frame.render_widget(paragraph, area);
}

fn render_events(frame: &mut Frame, app: &App, area: Rect) {
    let events = app.events();
    let lines: Vec<Line> = if events.is_empty() {
        vec![Line::styled(
            "No changes yet",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        events.into_iter().map(Line::from).collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("onChange")
            .border_style(Style::default().fg(Color::Gray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help = if app.modal.is_open() {
        " Enter/Esc: Close modal | Ctrl+C: Quit"
    } else {
        " Tab/Shift+Tab: Focus | Space/Enter: Activate | ↑↓: Move | Esc/q: Quit"
    };
    let footer = Paragraph::new(help).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn render_modal(frame: &mut Frame, app: &App, modal: &Modal) {
    let area = centered(frame.area(), 48, 8);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(modal.body().to_string()),
        Line::from(""),
        Line::styled(
            "[Enter/Esc] Close",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    modal.title().to_string(),
                    Style::default().fg(primary(app)).add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(primary(app))),
        );
    frame.render_widget(paragraph, area);
}
