use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, ViewMode};
use crate::internal::models::{DetailStatus, Item};
use crate::utils::{datetime, html};

pub fn draw(app: &mut App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_top_bar(app, f, chunks[0]);

    match app.view_mode {
        ViewMode::Home => render_home(app, f, chunks[1]),
        ViewMode::List => render_list(app, f, chunks[1]),
        ViewMode::Detail => render_detail(app, f, chunks[1]),
    }

    render_status_bar(app, f, chunks[2]);
}

fn render_top_bar(app: &App, f: &mut Frame, area: Rect) {
    let text = match app.view_mode {
        ViewMode::List => format!("refresh in {}s", app.refresh.remaining_secs()),
        _ => String::new(),
    };

    let p = Paragraph::new(text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(p, area);
}

fn render_home(app: &App, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Hacker News Pager v{}", app.app_version),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("The current top stories, thirty to a page."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to open page 1",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Welcome"));
    f.render_widget(p, area);
}

fn render_list(app: &mut App, f: &mut Frame, area: Rect) {
    let title = format!(
        "Hacker News Top - page {} - sort: {}",
        app.page, app.sort
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    if app.loading && app.items.is_empty() {
        let p = Paragraph::new("Loading...").block(block);
        f.render_widget(p, area);
        return;
    }

    if let Some(message) = &app.list_error {
        let p = Paragraph::new(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(p, area);
        return;
    }

    let displayed = app.displayed_items();
    if displayed.is_empty() {
        let p = Paragraph::new("No stories on this page.").block(block);
        f.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = displayed
        .iter()
        .enumerate()
        .map(|(i, item)| list_row(i + 1, item))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn list_row(rank: usize, item: &Item) -> ListItem<'static> {
    // Untitled items never reach the list; the fallback is belt-and-braces.
    let title = item.title.as_deref().unwrap_or("(untitled)").to_string();
    let by = item.by.as_deref().unwrap_or("unknown").to_string();
    let score = item.score.unwrap_or(0);
    let age = datetime::relative_age(item.time);

    ListItem::new(Line::from(vec![
        Span::styled(format!("{:>3}. ", rank), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{} ", score), Style::default().fg(Color::Yellow)),
        Span::raw(title),
        Span::styled(
            format!("  by {} | {}", by, age),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn render_detail(app: &App, f: &mut Frame, area: Rect) {
    match &app.detail {
        DetailStatus::Idle | DetailStatus::Loading => {
            let p = Paragraph::new("Loading...")
                .block(Block::default().borders(Borders::ALL).title("Story"));
            f.render_widget(p, area);
        }
        DetailStatus::NotFound => {
            let p = Paragraph::new("Story not found.")
                .block(Block::default().borders(Borders::ALL).title("Story"));
            f.render_widget(p, area);
        }
        DetailStatus::Failed(message) => {
            let p = Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))
            .block(Block::default().borders(Borders::ALL).title("Story"));
            f.render_widget(p, area);
        }
        DetailStatus::Ready(item) => render_story(app, item, f, area),
    }
}

fn render_story(app: &App, item: &Item, f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let mut meta = vec![
        Line::from(Span::styled(
            item.title.as_deref().unwrap_or("(untitled)").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "by {} | {} | {} points",
            item.by.as_deref().unwrap_or("unknown"),
            datetime::relative_age(item.time),
            item.score.unwrap_or(0)
        )),
    ];
    if let Some(url) = &item.url {
        meta.push(Line::from(Span::styled(
            url.clone(),
            Style::default().fg(Color::Cyan),
        )));
    }
    if let Some(text) = &item.text {
        meta.push(Line::from(html::comment_text(text)));
    }

    let p = Paragraph::new(meta)
        .block(Block::default().borders(Borders::ALL).title("Story"))
        .wrap(Wrap { trim: true });
    f.render_widget(p, chunks[0]);

    if !app.show_comments {
        let hint = format!("c: show comments ({})", app.comments.len());
        let p = Paragraph::new(hint)
            .block(Block::default().borders(Borders::ALL).title("Comments"));
        f.render_widget(p, chunks[1]);
        return;
    }

    if app.comments.is_empty() {
        let p = Paragraph::new("No comments on this story.")
            .block(Block::default().borders(Borders::ALL).title("Comments"));
        f.render_widget(p, chunks[1]);
        return;
    }

    let rows: Vec<ListItem> = app.comments.iter().map(comment_row).collect();
    let list = List::new(rows).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Comments ({})", app.comments.len())),
    );
    f.render_widget(list, chunks[1]);
}

fn comment_row(comment: &Item) -> ListItem<'static> {
    let author = comment.by.as_deref().unwrap_or("unknown").to_string();
    let age = datetime::relative_age(comment.time);
    let body = comment
        .text
        .as_deref()
        .map(html::comment_text)
        .unwrap_or_else(|| "[deleted]".to_string());

    let mut lines = vec![Line::from(vec![
        Span::styled(author, Style::default().fg(Color::Green)),
        Span::styled(format!(" ({})", age), Style::default().fg(Color::DarkGray)),
    ])];
    for line in body.lines() {
        lines.push(Line::from(line.to_string()));
    }
    lines.push(Line::from(Span::styled(
        "---",
        Style::default().fg(Color::DarkGray),
    )));

    ListItem::new(lines)
}

fn render_status_bar(app: &App, f: &mut Frame, area: Rect) {
    let status = match app.view_mode {
        ViewMode::Home => "Enter: Top stories | q: Quit".to_string(),
        ViewMode::List => {
            let prev = if app.page > 1 { "p: Prev" } else { "p: -" };
            format!(
                "j/k: Nav | Enter: Open | n: Next | {} | r: Refresh | s: Sort | o: Browser | q: Quit",
                prev
            )
        }
        ViewMode::Detail => "c: Comments | o: Browser | Esc/q: Back".to_string(),
    };

    let p = Paragraph::new(status).style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_widget(p, area);
}
