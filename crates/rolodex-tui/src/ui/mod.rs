use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use rolodex_config::Theme;
use rolodex_core::dto::or_not_available;
use rolodex_core::features;

use crate::app::{App, ConfirmState, ContactForm, Mode};

#[derive(Debug, Clone, Copy)]
struct Palette {
    fg: Color,
    bg: Color,
    muted: Color,
    accent: Color,
    highlight_fg: Color,
    highlight_bg: Color,
    ok: Color,
    error: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Blue,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
                ok: Color::Green,
                error: Color::Red,
            },
            Theme::Dark => Self {
                fg: Color::Gray,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight_fg: Color::Black,
                highlight_bg: Color::LightGreen,
                ok: Color::LightGreen,
                error: Color::LightRed,
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    fn block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(self.base())
            .border_style(Style::default().fg(self.muted))
    }
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = Palette::for_theme(app.theme);
    let size = frame.area();
    frame.render_widget(Block::default().style(palette.base()), size);

    if app.loading {
        render_loading(frame, size, &palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(size);

    render_header(frame, chunks[0], app, &palette);

    match &app.mode {
        Mode::Detail(_) => render_detail(frame, chunks[1], app, &palette),
        _ => render_list(frame, chunks[1], app, &palette),
    }

    render_footer(frame, chunks[2], app, &palette);

    if app.show_help {
        render_help(frame, size, &palette);
    }

    match &app.mode {
        Mode::ModalAddContact(form) => {
            render_contact_form(frame, size, "Add Contact", form, &palette)
        }
        Mode::ModalEditContact(form) => {
            render_contact_form(frame, size, "Edit Contact", form, &palette)
        }
        Mode::Confirm(state) => render_confirm(frame, size, state, &palette),
        Mode::Features => render_features(frame, size, &palette),
        _ => {}
    }
}

fn render_loading(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let modal = centered_rect(50, 30, area);
    let mut lines = vec![Line::from(Span::styled(
        "Loading contacts...",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for width in [24, 18, 21] {
        lines.push(Line::from(Span::styled(
            "░".repeat(width),
            Style::default().fg(palette.muted),
        )));
    }
    let paragraph = Paragraph::new(lines)
        .block(palette.block("rolodex"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, modal);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let search_display = if app.search_input.is_empty() {
        "(none)".to_string()
    } else {
        app.search_input.clone()
    };
    let mut spans = vec![
        Span::styled(
            "rolodex",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  contacts: {}  search: {}",
            app.contact_count(),
            search_display
        )),
    ];
    if matches!(app.mode, Mode::SearchEditing) {
        spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
    }
    if app.search_pending() {
        spans.push(Span::styled(
            "  searching...",
            Style::default().fg(palette.muted),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(palette.block("Search"));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let hint = match app.mode {
        Mode::List => "j/k move  enter open  / search  c clear  a add  e edit  d delete  y/Y copy  f features  T theme  ? help  q quit",
        Mode::SearchEditing => "type to search  enter apply  esc done",
        Mode::Detail(_) => "esc back  m email  c call  s message  w website  y/Y copy  e edit  d delete  T theme",
        Mode::Features => "esc close",
        Mode::ModalAddContact(_) | Mode::ModalEditContact(_) => {
            "tab next  shift+tab prev  left/right code  enter select  esc cancel"
        }
        Mode::Confirm(_) => "y confirm  n cancel",
    };

    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(palette.muted),
    ))];

    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(palette.ok),
        )));
    }
    if let Some(err) = &app.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(palette.error),
        )));
    }

    let paragraph = Paragraph::new(lines).block(palette.block(""));
    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    if app.groups.is_empty() {
        let paragraph = Paragraph::new(app.empty_hint())
            .block(palette.block("Contacts"))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut items = Vec::new();
    let mut selected_row = None;
    let mut position = 0;
    for group in &app.groups {
        items.push(ListItem::new(Line::from(Span::styled(
            group.key.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))));
        for contact in &group.contacts {
            if position == app.selected {
                selected_row = Some(items.len());
            }
            position += 1;
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    contact.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(contact.email.clone(), Style::default().fg(palette.muted)),
                Span::raw("  "),
                Span::styled(contact.phone.clone(), Style::default().fg(palette.muted)),
            ])));
        }
    }

    let mut state = ListState::default();
    state.select(selected_row);

    let list = List::new(items)
        .block(palette.block("Contacts"))
        .highlight_style(
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, app: &App, palette: &Palette) {
    let Some(detail) = &app.detail else {
        let paragraph = Paragraph::new("Loading...").block(palette.block("Contact"));
        frame.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(4)])
        .split(area);

    let company = match (&detail.company, &detail.catch_phrase) {
        (Some(name), Some(phrase)) => format!("{name} \"{phrase}\""),
        (Some(name), None) => name.clone(),
        (None, _) => or_not_available(None).to_string(),
    };
    let info_lines = vec![
        Line::from(vec![Span::styled(
            detail.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        info_line("Email", &detail.email, palette),
        info_line("Phone", &detail.phone, palette),
        info_line("Company", &company, palette),
        info_line(
            "Address",
            or_not_available(detail.address.as_deref()),
            palette,
        ),
        info_line(
            "Website",
            or_not_available(detail.website.as_deref()),
            palette,
        ),
    ];
    let info = Paragraph::new(info_lines)
        .block(palette.block("Contact"))
        .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let links = &detail.links;
    let link_lines = vec![
        link_line("m", "Email", links.email.as_deref(), palette),
        link_line("c", "Call", links.call.as_deref(), palette),
        link_line("s", "Message", links.message.as_deref(), palette),
        link_line("w", "Website", links.website.as_deref(), palette),
    ];
    let actions = Paragraph::new(Text::from(link_lines)).block(palette.block("Actions"));
    frame.render_widget(actions, chunks[1]);
}

fn info_line(label: &str, value: &str, palette: &Palette) -> Line<'static> {
    let value = if value.trim().is_empty() {
        or_not_available(None)
    } else {
        value
    };
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(palette.muted)),
        Span::raw(value.to_string()),
    ])
}

fn link_line(key: &str, label: &str, uri: Option<&str>, palette: &Palette) -> Line<'static> {
    let key_span = Span::styled(
        format!("[{key}] "),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );
    match uri {
        Some(uri) => Line::from(vec![
            key_span,
            Span::raw(format!("{label}  ")),
            Span::styled(uri.to_string(), Style::default().fg(palette.muted)),
        ]),
        None => Line::from(vec![
            key_span,
            Span::styled(label.to_string(), Style::default().fg(palette.muted)),
        ]),
    }
}

fn render_contact_form(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    form: &ContactForm,
    palette: &Palette,
) {
    let modal = centered_rect(70, 80, area);
    frame.render_widget(Clear, modal);

    let focus = form.focus;
    let mut lines = vec![field_line("Name", &form.name, focus == ContactForm::NAME, palette)];
    push_field_error(&mut lines, form.errors.name, palette);
    lines.push(field_line(
        "Email",
        &form.email,
        focus == ContactForm::EMAIL,
        palette,
    ));
    push_field_error(&mut lines, form.errors.email, palette);
    lines.push(field_line(
        "Code",
        &format!("< {} >", form.code_label()),
        focus == ContactForm::CODE,
        palette,
    ));
    lines.push(field_line(
        "Phone",
        &form.number,
        focus == ContactForm::NUMBER,
        palette,
    ));
    push_field_error(&mut lines, form.errors.phone, palette);
    lines.push(field_line(
        "Company",
        &form.company,
        focus == ContactForm::COMPANY,
        palette,
    ));
    lines.push(field_line(
        "Street",
        &form.street,
        focus == ContactForm::STREET,
        palette,
    ));
    lines.push(field_line(
        "City",
        &form.city,
        focus == ContactForm::CITY,
        palette,
    ));
    lines.push(field_line(
        "Website",
        &form.website,
        focus == ContactForm::WEBSITE,
        palette,
    ));
    lines.push(Line::from(""));

    let save_style = if form.is_save_focus() {
        Style::default().fg(palette.highlight_fg).bg(palette.ok)
    } else {
        Style::default().fg(palette.ok)
    };
    let cancel_style = if form.is_cancel_focus() {
        Style::default().fg(palette.highlight_fg).bg(palette.error)
    } else {
        Style::default().fg(palette.error)
    };

    lines.push(Line::from(vec![
        Span::styled("[Save]", save_style),
        Span::raw("  "),
        Span::styled("[Cancel]", cancel_style),
    ]));

    let paragraph = Paragraph::new(lines).block(palette.block(title));
    frame.render_widget(paragraph, modal);
}

fn push_field_error(lines: &mut Vec<Line<'static>>, error: Option<&'static str>, palette: &Palette) {
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(palette.error),
        )));
    }
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect, state: &ConfirmState, palette: &Palette) {
    let modal = centered_rect(50, 30, area);
    frame.render_widget(Clear, modal);
    let paragraph = Paragraph::new(state.message.clone())
        .block(palette.block("Confirm"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn render_features(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let modal = centered_rect(80, 80, area);
    frame.render_widget(Clear, modal);

    let lines: Vec<Line> = features()
        .iter()
        .map(|feature| {
            Line::from(vec![
                Span::styled(
                    format!("• {}: ", feature.title),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(feature.description),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(palette.block("Features"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn render_help(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let modal = centered_rect(70, 60, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: q quit, Ctrl+C quit, ? help, T toggle theme"),
        Line::from("List: j/k move, enter open, / search, c clear search, a add, e edit, d delete, y copy email, Y copy phone, f features"),
        Line::from("Search: type to filter by name, enter apply now, esc done"),
        Line::from("Detail: esc back, m email, c call, s message, w website, y/Y copy, e edit, d delete"),
        Line::from("Form: tab/shift+tab move, left/right pick dialing code, enter activate, esc cancel"),
    ];

    let paragraph = Paragraph::new(text)
        .block(palette.block("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn field_line(label: &str, value: &str, focused: bool, palette: &Palette) -> Line<'static> {
    let style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), style),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
