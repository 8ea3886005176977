//! Frame rendering.
//!
//! The window is drawn into its own buffer at frame size and then copied
//! onto the screen, so a window dragged past an edge is clipped cell by cell
//! instead of being squeezed.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect as Area};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use ratatui::Frame;
use termfolio_common::types::Rect;
use termfolio_window::geometry::HEADER_HEIGHT;
use termfolio_window::{WindowControl, WindowGeometry};

use super::core::TermfolioApp;
use super::layout::{tab_label, WindowLayout};
use super::types::{ACTIVE_DOT, BACK_LABEL, DOCK_LABEL, PROMPT_ICON};

pub(super) fn draw(frame: &mut Frame, app: &TermfolioApp) {
    let area = frame.area();
    let screen = Rect::new(0, 0, area.width, area.height);
    let layout = app.layout_in(screen);
    let buf = frame.buffer_mut();

    if let Some(window) = &layout.window {
        let mut canvas = Buffer::empty(Area::new(0, 0, window.frame.width, window.frame.height));
        render_window(app, window, &mut canvas);
        blit(&canvas, window.frame, buf);
    }

    let dock = layout.dock.intersection(&screen);
    if let Some(dock) = to_area(dock) {
        render_dock(app, dock, buf);
    }
}

fn render_window(app: &TermfolioApp, layout: &WindowLayout, buf: &mut Buffer) {
    let palette = &app.palette;
    let width = layout.frame.width;
    if width == 0 || layout.frame.height == 0 {
        return;
    }

    // Title bar
    let chrome = Style::default().bg(palette.chrome);
    buf.set_style(Area::new(0, 0, width, HEADER_HEIGHT), chrome);
    buf.set_stringn(
        1,
        0,
        PROMPT_ICON,
        usize::from(width.saturating_sub(1)),
        chrome.fg(palette.text),
    );
    let title = app.config.window.title.as_str();
    let title_width = u16::try_from(title.chars().count()).unwrap_or(u16::MAX);
    let title_x = width.saturating_sub(title_width) / 2;
    buf.set_stringn(
        title_x,
        0,
        title,
        usize::from(width - title_x),
        chrome.fg(palette.muted).add_modifier(Modifier::BOLD),
    );
    for (control, rect) in WindowGeometry::controls(layout.frame) {
        let Ok(x) = u16::try_from(rect.x - layout.frame.x) else {
            continue;
        };
        let color = match control {
            WindowControl::Minimize => Color::Yellow,
            WindowControl::Maximize => Color::Green,
        };
        buf.set_stringn(
            x,
            0,
            control.glyph(),
            usize::from(width.saturating_sub(x)),
            chrome.fg(color),
        );
    }

    if app.window.state().is_minimized || layout.frame.height <= HEADER_HEIGHT {
        return;
    }

    let body = Area::new(0, HEADER_HEIGHT, width, layout.frame.height - HEADER_HEIGHT);
    Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(Color::Black))
        .render(body, buf);

    render_tabs(app, layout, buf);

    if let (Some(area), Some(image)) = (layout.image, app.navigation.section().image()) {
        Paragraph::new(image.caption())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted))
            .block(Block::bordered().border_style(Style::default().fg(palette.border)))
            .render(area, buf);
    }

    render_text(app, layout.text, buf);

    for (index, (post, area)) in layout.links.iter().enumerate() {
        let mut style = Style::default().fg(palette.link);
        if index == app.link_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        buf.set_stringn(area.x, area.y, post.link_label(), usize::from(area.width), style);
    }
    if let Some(area) = layout.back {
        buf.set_stringn(
            area.x,
            area.y,
            BACK_LABEL,
            usize::from(area.width),
            Style::default().fg(palette.link),
        );
    }
}

fn render_tabs(app: &TermfolioApp, layout: &WindowLayout, buf: &mut Buffer) {
    let palette = &app.palette;
    let strip = Style::default().bg(palette.chrome);
    buf.set_style(layout.tab_strip, strip);

    let active = app.navigation.active_tab();
    for (tab, area) in &layout.tabs {
        let style = if *tab == active {
            strip
                .fg(palette.text)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            strip.fg(palette.muted)
        };
        buf.set_stringn(area.x, area.y, tab_label(*tab), usize::from(area.width), style);
    }
}

/// Typed output with the blinking cursor after its last char. Scrolls to
/// keep the cursor in view.
fn render_text(app: &TermfolioApp, area: Area, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let typist = app.typewriter.typist();
    let style = Style::default().fg(app.palette.text);
    let output = typist.current_output();

    let mut lines: Vec<Line> = output
        .split('\n')
        .map(|line| Line::from(Span::styled(line, style)))
        .collect();
    if typist.cursor_visible() {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(app.config.typing.cursor_glyph.as_str(), style));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let rows = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
    paragraph
        .scroll((rows.saturating_sub(area.height), 0))
        .render(area, buf);
}

fn render_dock(app: &TermfolioApp, area: Area, buf: &mut Buffer) {
    let palette = &app.palette;
    let active = app.window.state().is_visible;
    let border = if active { palette.text } else { palette.border };

    Clear.render(area, buf);
    Paragraph::new(Line::from(vec![
        Span::styled(PROMPT_ICON, Style::default().fg(palette.text)),
        Span::raw(" "),
        Span::styled(DOCK_LABEL, Style::default().fg(palette.muted)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(Style::default().fg(border)))
    .render(area, buf);

    if active && area.height >= 2 {
        buf.set_string(
            area.x + area.width / 2,
            area.bottom() - 1,
            ACTIVE_DOT,
            Style::default().fg(palette.text),
        );
    }
}

/// Copy `src` onto `dst` with its top-left corner at `origin`, dropping
/// cells that land off screen.
fn blit(src: &Buffer, origin: Rect, dst: &mut Buffer) {
    for y in 0..src.area.height {
        for x in 0..src.area.width {
            let target_x = origin.x + i32::from(x);
            let target_y = origin.y + i32::from(y);
            let (Ok(target_x), Ok(target_y)) = (u16::try_from(target_x), u16::try_from(target_y))
            else {
                continue;
            };
            if let (Some(cell), Some(target)) = (src.cell((x, y)), dst.cell_mut((target_x, target_y))) {
                *target = cell.clone();
            }
        }
    }
}

fn to_area(rect: Rect) -> Option<Area> {
    if rect.is_empty() {
        return None;
    }
    let x = u16::try_from(rect.x).ok()?;
    let y = u16::try_from(rect.y).ok()?;
    Some(Area::new(x, y, rect.width, rect.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::actions::Action;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use termfolio_config::schema::TermfolioConfig;
    use termfolio_content::Tab;
    use termfolio_common::types::Point;
    use termfolio_common::Event;
    use termfolio_window::{PressOrigin, WindowCommand};
    use tokio::sync::mpsc;

    fn app(tab: Tab) -> TermfolioApp {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = TermfolioApp::new(TermfolioConfig::default(), tab, tx);
        app.resize(100, 40);
        app
    }

    fn rendered(app: &TermfolioApp, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect()
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn draws_title_controls_and_tabs() {
        let app = app(Tab::Home);
        let rows = rendered(&app, 100, 40);
        assert!(rows[6].contains("Ibrahim Zaman - Terminal Web"));
        assert!(rows[6].contains("[-] [+]"));
        assert!(rows[6].contains(">_"));
        assert!(rows[7].contains(" home "));
        assert!(rows[7].contains(" contact "));
    }

    #[tokio::test(start_paused = true)]
    async fn draws_typed_prefix_and_cursor() {
        let mut app = app(Tab::Home);
        let session = app.typewriter.typist().session_id();
        for _ in 0..3 {
            app.handle_timer_event(Event::RevealTick(session));
        }
        let rows = rendered(&app, 100, 40);
        assert!(rows[9].contains("Wel▋"));
    }

    #[tokio::test(start_paused = true)]
    async fn hidden_window_leaves_only_dock() {
        let mut app = app(Tab::Home);
        app.window_command(WindowCommand::ToggleVisible);
        let rows = rendered(&app, 100, 40);
        assert!(rows.iter().all(|row| !row.contains("Terminal Web")));
        assert!(rows[38].contains(">_ Terminal"));
        assert!(!rows[39].contains(ACTIVE_DOT));
    }

    #[tokio::test(start_paused = true)]
    async fn active_dock_shows_dot() {
        let app = app(Tab::Home);
        let rows = rendered(&app, 100, 40);
        assert!(rows[39].contains(ACTIVE_DOT));
    }

    #[tokio::test(start_paused = true)]
    async fn minimized_window_draws_only_title_bar() {
        let mut app = app(Tab::Home);
        app.window_command(WindowCommand::Minimize);
        let rows = rendered(&app, 100, 40);
        assert!(rows[6].contains("Terminal Web"));
        assert!(!rows[7].contains(" home "));
    }

    #[tokio::test(start_paused = true)]
    async fn blog_listing_draws_links() {
        let mut app = app(Tab::Blog);
        app.dispatch(Action::SkipTyping);
        let rows = rendered(&app, 100, 40);
        let joined = rows.join("\n");
        assert!(joined.contains("→ react-hooks-guide.md"));
        assert!(joined.contains("ls -la blog/"));
    }

    #[tokio::test(start_paused = true)]
    async fn about_draws_image_placeholder() {
        let app = app(Tab::About);
        let rows = rendered(&app, 100, 40);
        assert!(rows.join("\n").contains("[Profile 150x150]"));
    }

    #[tokio::test(start_paused = true)]
    async fn window_dragged_off_screen_is_clipped() {
        let mut app = app(Tab::Home);
        app.window.start_drag(Point::new(30, 6), PressOrigin::Header);
        app.window.drag_to(Point::new(-30, 6));
        let rows = rendered(&app, 100, 40);
        // Frame now starts at x = -50; its right border lands at x = 29.
        assert_eq!(rows[10].chars().nth(29), Some('│'));
    }

    #[tokio::test(start_paused = true)]
    async fn tiny_terminal_does_not_panic() {
        let app = app(Tab::Blog);
        rendered(&app, 3, 2);
        rendered(&app, 1, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn narrow_window_scrolls_cursor_into_view() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut config = TermfolioConfig::default();
        config.window.width = 24;
        config.window.height = 10;
        let mut app = TermfolioApp::new(config, Tab::About, tx);
        app.resize(100, 40);
        app.dispatch(Action::SkipTyping);
        assert!(app.typewriter.typist().cursor_visible());

        let rows = rendered(&app, 100, 40);
        // Word wrap at 20 columns pushes the last line well past the body.
        let cursor_rows: Vec<&String> = rows.iter().filter(|row| row.contains('▋')).collect();
        assert_eq!(cursor_rows.len(), 1);
        assert!(cursor_rows[0].contains("Finance▋"));
    }
}
