//! Rendering of the tracker state, and dispatch of key presses and clicks to tracker operations

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::traits::{Clock, KeyValueStorage};
use crate::tracker::Tracker;
use crate::task::TaskId;
use crate::clock::DateDisplay;
use crate::config;

const AMBER: Color = Color::Rgb(245, 158, 11);
const PLACEHOLDER: &str = "Add a new task...";
const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Add some tasks to get started!";

/// Which part of the task panel receives key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// What the event loop should do after an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Where the clickable controls were drawn on the last frame
#[derive(Clone, Debug, Default)]
struct HitAreas {
    input: Rect,
    add_button: Rect,
    rows: Vec<RowArea>,
}

#[derive(Clone, Copy, Debug)]
struct RowArea {
    /// Index of the task in the list
    index: usize,
    row: Rect,
    checkbox: Rect,
    delete: Option<Rect>,
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// UI state that is not worth persisting
#[derive(Clone, Debug)]
pub struct ViewState {
    input: String,
    focus: Focus,
    selected: usize,
    status: Option<String>,

    areas: HitAreas,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Input,
            selected: 0,
            status: None,
            areas: HitAreas::default(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str { &self.input }
    pub fn focus(&self) -> Focus { self.focus }
    pub fn selected(&self) -> usize { self.selected }
    pub fn status(&self) -> Option<&str> { self.status.as_deref() }

    pub fn handle_key<S, C>(&mut self, tracker: &mut Tracker<S, C>, key: KeyEvent) -> Outcome
    where
        S: KeyValueStorage,
        C: Clock,
    {
        if key.kind != KeyEventKind::Press {
            return Outcome::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Outcome::Quit;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(tracker, key),
            Focus::List => self.handle_list_key(tracker, key),
        }
    }

    /// React to a click on one of the controls drawn on the last frame
    pub fn handle_mouse<S, C>(&mut self, tracker: &mut Tracker<S, C>, mouse: MouseEvent) -> Outcome
    where
        S: KeyValueStorage,
        C: Clock,
    {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Outcome::Continue;
        }
        let (column, row) = (mouse.column, mouse.row);

        if hit(self.areas.add_button, column, row) {
            self.focus = Focus::Input;
            self.submit(tracker);
            return Outcome::Continue;
        }
        if hit(self.areas.input, column, row) {
            self.focus = Focus::Input;
            return Outcome::Continue;
        }

        let clicked = self.areas.rows.iter().find(|area| hit(area.row, column, row)).copied();
        if let Some(area) = clicked {
            let id = match tracker.tasks().get(area.index) {
                Some(task) => task.id(),
                None => return Outcome::Continue,
            };
            if area.delete.map_or(false, |delete| hit(delete, column, row)) {
                self.delete_task(tracker, id);
                return Outcome::Continue;
            }

            self.selected = area.index;
            self.focus = Focus::List;
            if hit(area.checkbox, column, row) {
                let result = tracker.toggle(id);
                self.report(result);
            }
        }
        Outcome::Continue
    }

    fn handle_input_key<S, C>(&mut self, tracker: &mut Tracker<S, C>, key: KeyEvent) -> Outcome
    where
        S: KeyValueStorage,
        C: Clock,
    {
        match key.code {
            KeyCode::Esc => return Outcome::Quit,
            KeyCode::Enter => self.submit(tracker),
            KeyCode::Backspace => { self.input.pop(); },
            KeyCode::Tab | KeyCode::Down => {
                if tracker.tasks().is_empty() == false {
                    self.focus = Focus::List;
                    self.clamp_selection(tracker.tasks().len());
                }
            },
            KeyCode::Char(c) => {
                if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) == false {
                    self.input.push(c);
                }
            },
            _ => {},
        }
        Outcome::Continue
    }

    fn handle_list_key<S, C>(&mut self, tracker: &mut Tracker<S, C>, key: KeyEvent) -> Outcome
    where
        S: KeyValueStorage,
        C: Clock,
    {
        let selected_id = tracker.tasks().get(self.selected).map(|t| t.id());

        match key.code {
            KeyCode::Char('q') => return Outcome::Quit,
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') => self.focus = Focus::Input,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected == 0 {
                    self.focus = Focus::Input;
                } else {
                    self.selected -= 1;
                }
            },
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < tracker.tasks().len() {
                    self.selected += 1;
                }
            },
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = selected_id {
                    let result = tracker.toggle(id);
                    self.report(result);
                }
            },
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = selected_id {
                    self.delete_task(tracker, id);
                }
            },
            _ => {},
        }
        Outcome::Continue
    }

    fn submit<S, C>(&mut self, tracker: &mut Tracker<S, C>)
    where
        S: KeyValueStorage,
        C: Clock,
    {
        match tracker.add(&self.input) {
            Ok(false) => {},
            // An error means the task is in the list, but could not be saved
            result => {
                self.input.clear();
                self.report(result);
            }
        }
    }

    fn delete_task<S, C>(&mut self, tracker: &mut Tracker<S, C>, id: TaskId)
    where
        S: KeyValueStorage,
        C: Clock,
    {
        let result = tracker.delete(id);
        self.report(result);
        if tracker.tasks().is_empty() {
            self.focus = Focus::Input;
        }
        self.clamp_selection(tracker.tasks().len());
    }

    fn report(&mut self, result: Result<bool, Box<dyn std::error::Error>>) {
        self.status = match result {
            Ok(_) => None,
            Err(err) => Some(format!("Unable to save tasks: {}", err)),
        };
    }

    fn clamp_selection(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}


/// Draw the whole screen, and remember where its controls are
pub fn draw<S, C>(frame: &mut Frame<'_>, tracker: &Tracker<S, C>, view: &mut ViewState)
where
    S: KeyValueStorage,
    C: Clock,
{
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
        .split(rows[0]);

    draw_day(frame, columns[0], &tracker.clock_state().display());
    draw_tasks(frame, columns[1], tracker, view);
    draw_status(frame, rows[1], view);
}

fn draw_day(frame: &mut Frame<'_>, area: Rect, date: &DateDisplay) {
    let mut lines: Vec<Line> = big_digits(date.day)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(AMBER).add_modifier(Modifier::BOLD))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(date.weekday.clone(), Style::default().add_modifier(Modifier::BOLD))));
    lines.push(Line::from(Span::styled(date.month.clone(), Style::default().fg(Color::Gray))));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_tasks<S, C>(frame: &mut Frame<'_>, area: Rect, tracker: &Tracker<S, C>, view: &mut ViewState)
where
    S: KeyValueStorage,
    C: Clock,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(config::current(&config::HEADING), Style::default().add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
        .split(inner);

    draw_input(frame, parts[0], view);
    draw_list(frame, parts[1], tracker, view);
    draw_footer(frame, parts[2]);
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, view: &mut ViewState) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(9)])
        .split(area);
    view.areas.input = parts[0];
    view.areas.add_button = parts[1];

    let focused = view.focus == Focus::Input;
    let border_style = if focused { Style::default().fg(AMBER) } else { Style::default() };

    // Scroll horizontally so that the end of the text (and the cursor) stays visible
    let inner_width = parts[0].width.saturating_sub(2);
    let typed = to_u16(Span::raw(view.input.as_str()).width());
    let scroll = typed.saturating_sub(inner_width.saturating_sub(1));

    let content = if view.input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(view.input.as_str())
    };
    let input = Paragraph::new(Line::from(content))
        .block(Block::default().borders(Borders::ALL).border_style(border_style))
        .scroll((0, scroll));
    frame.render_widget(input, parts[0]);

    let button = Paragraph::new(Line::from(Span::styled(" Add ", Style::default().fg(Color::Black).bg(AMBER).add_modifier(Modifier::BOLD))))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(button, parts[1]);

    if focused {
        let x = parts[0].x.saturating_add(1).saturating_add(typed - scroll);
        frame.set_cursor_position((x, parts[0].y.saturating_add(1)));
    }
}

fn to_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}

fn draw_list<S, C>(frame: &mut Frame<'_>, area: Rect, tracker: &Tracker<S, C>, view: &mut ViewState)
where
    S: KeyValueStorage,
    C: Clock,
{
    let tasks = tracker.tasks();
    view.areas.rows.clear();
    if tasks.is_empty() {
        let empty = Paragraph::new(Span::styled(EMPTY_LIST_MESSAGE, Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    let list_focused = view.focus == Focus::List;
    let items: Vec<ListItem> = tasks.iter().enumerate()
        .map(|(index, task)| {
            let checkbox = if task.completed() { "[x] " } else { "[ ] " };
            let text_style = if task.completed() {
                Style::default().fg(Color::Gray).add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
            } else {
                Style::default()
            };
            let mut spans = vec![
                Span::styled(checkbox, Style::default().fg(AMBER)),
                Span::styled(task.text(), text_style),
            ];
            // The delete control only shows up on the focused row
            if list_focused && index == view.selected {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("Delete", Style::default().fg(Color::Red)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let highlight = if list_focused { Style::default().bg(Color::DarkGray) } else { Style::default() };
    let list = List::new(items).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(view.selected.min(tasks.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);

    // Every row is one line high, starting at the first visible task
    for (line, index) in (state.offset()..tasks.len()).enumerate() {
        if line >= area.height as usize {
            break;
        }
        let y = area.y + line as u16;
        let row = Rect::new(area.x, y, area.width, 1);
        let checkbox = Rect::new(area.x, y, area.width.min(3), 1);
        let delete = if list_focused && index == view.selected {
            let text_width = to_u16(Span::raw(tasks[index].text()).width());
            let x = area.x.saturating_add(6).saturating_add(text_width);
            if x < area.right() {
                Some(Rect::new(x, y, (area.right() - x).min(6), 1))
            } else {
                None
            }
        } else {
            None
        };
        view.areas.rows.push(RowArea { index, row, checkbox, delete });
    }
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(config::current(&config::FOOTER_TITLE), Style::default().fg(AMBER).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(config::current(&config::FOOTER_MESSAGE), Style::default().fg(Color::Gray))),
    ];
    let footer = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

fn draw_status(frame: &mut Frame<'_>, area: Rect, view: &ViewState) {
    let line = match (&view.status, view.focus) {
        (Some(status), _) => Line::from(Span::styled(status.as_str(), Style::default().fg(Color::Red))),
        (None, Focus::Input) => Line::from(Span::styled("Enter: add  Tab: tasks  Esc: quit", Style::default().fg(Color::DarkGray))),
        (None, Focus::List) => Line::from(Span::styled("Space: toggle  d: delete  Tab: input  q: quit", Style::default().fg(Color::DarkGray))),
    };
    frame.render_widget(Paragraph::new(line), area);
}


/// Render a number with 3x5 block glyphs
pub fn big_digits(number: u32) -> Vec<String> {
    const GLYPHS: [[&str; 5]; 10] = [
        ["███", "█ █", "█ █", "█ █", "███"],
        ["  █", "  █", "  █", "  █", "  █"],
        ["███", "  █", "███", "█  ", "███"],
        ["███", "  █", "███", "  █", "███"],
        ["█ █", "█ █", "███", "  █", "  █"],
        ["███", "█  ", "███", "  █", "███"],
        ["███", "█  ", "███", "█ █", "███"],
        ["███", "  █", "  █", "  █", "  █"],
        ["███", "█ █", "███", "█ █", "███"],
        ["███", "█ █", "███", "  █", "███"],
    ];

    let digits: Vec<usize> = number.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();

    (0..5)
        .map(|row| {
            digits.iter()
                .map(|&d| GLYPHS[d][row])
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    use crate::clock::FixedClock;
    use crate::storage::MemoryStorage;

    fn tracker() -> Tracker<MemoryStorage, FixedClock> {
        let clock = FixedClock::new(Local.with_ymd_and_hms(2024, 3, 7, 9, 30, 0).unwrap());
        Tracker::open(MemoryStorage::new(), clock)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(view: &mut ViewState, tracker: &mut Tracker<MemoryStorage, FixedClock>, text: &str) {
        for c in text.chars() {
            view.handle_key(tracker, press(KeyCode::Char(c)));
        }
    }

    fn render(tracker: &Tracker<MemoryStorage, FixedClock>, view: &mut ViewState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, tracker, view)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer.content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    /// Position of the first cell showing `text`
    fn locate(buffer: &Buffer, text: &str) -> (u16, u16) {
        rows(buffer).iter().enumerate()
            .find_map(|(y, row)| row.find(text).map(|byte_x| (row[..byte_x].chars().count() as u16, y as u16)))
            .unwrap()
    }

    fn click(view: &mut ViewState, tracker: &mut Tracker<MemoryStorage, FixedClock>, (column, row): (u16, u16)) {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(view.handle_mouse(tracker, event), Outcome::Continue);
    }

    #[test]
    fn add_button_submits_on_click() {
        let mut tracker = tracker();
        let mut view = ViewState::new();
        type_text(&mut view, &mut tracker, "Buy milk");

        let buffer = render(&tracker, &mut view);
        click(&mut view, &mut tracker, locate(&buffer, " Add "));
        assert_eq!(view.input(), "");
        assert_eq!(tracker.tasks().len(), 1);
        assert_eq!(tracker.tasks()[0].text(), "Buy milk");

        // Clicking again with an empty input adds nothing
        let buffer = render(&tracker, &mut view);
        click(&mut view, &mut tracker, locate(&buffer, " Add "));
        assert_eq!(tracker.tasks().len(), 1);
    }

    #[test]
    fn checkbox_and_delete_respond_to_clicks() {
        let mut tracker = tracker();
        tracker.add("Buy milk").unwrap();
        tracker.add("Call Alice").unwrap();
        let mut view = ViewState::new();

        let buffer = render(&tracker, &mut view);
        click(&mut view, &mut tracker, locate(&buffer, "[ ] Call Alice"));
        assert!(tracker.tasks()[1].completed());
        assert!(tracker.tasks()[0].completed() == false);
        assert_eq!(view.focus(), Focus::List);
        assert_eq!(view.selected(), 1);

        // Clicking the text only focuses the row, which reveals its delete control
        let buffer = render(&tracker, &mut view);
        click(&mut view, &mut tracker, locate(&buffer, "Buy milk"));
        assert_eq!(view.selected(), 0);
        assert!(tracker.tasks()[0].completed() == false);

        let buffer = render(&tracker, &mut view);
        let (x, y) = locate(&buffer, "Delete");
        assert_eq!(y, locate(&buffer, "Buy milk").1);
        click(&mut view, &mut tracker, (x + 2, y));
        let texts: Vec<&str> = tracker.tasks().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["Call Alice"]);

        // Back to the input
        let buffer = render(&tracker, &mut view);
        click(&mut view, &mut tracker, locate(&buffer, "Add a new task..."));
        assert_eq!(view.focus(), Focus::Input);
    }

    #[test]
    fn long_input_scrolls_to_its_end() {
        let mut tracker = tracker();
        let mut view = ViewState::new();
        let long_text = format!("{}END", "a".repeat(150));
        type_text(&mut view, &mut tracker, &long_text);

        let buffer = render(&tracker, &mut view);
        let (_, y) = locate(&buffer, "END");
        assert_eq!(y, locate(&buffer, " Add ").1);
        assert!(rows(&buffer).iter().any(|row| row.contains(&long_text)) == false);
    }

    #[test]
    fn enter_adds_and_clears_input() {
        let mut tracker = tracker();
        let mut view = ViewState::new();

        type_text(&mut view, &mut tracker, "Buy milk");
        assert_eq!(view.input(), "Buy milk");
        view.handle_key(&mut tracker, press(KeyCode::Enter));
        assert_eq!(view.input(), "");
        assert_eq!(tracker.tasks().len(), 1);
        assert_eq!(tracker.tasks()[0].text(), "Buy milk");

        type_text(&mut view, &mut tracker, "   ");
        view.handle_key(&mut tracker, press(KeyCode::Enter));
        assert_eq!(view.input(), "   ");
        assert_eq!(tracker.tasks().len(), 1);
    }

    #[test]
    fn list_navigation_toggle_and_delete() {
        let mut tracker = tracker();
        let mut view = ViewState::new();
        for text in &["one", "two", "three"] {
            type_text(&mut view, &mut tracker, text);
            view.handle_key(&mut tracker, press(KeyCode::Enter));
        }

        view.handle_key(&mut tracker, press(KeyCode::Tab));
        assert_eq!(view.focus(), Focus::List);
        view.handle_key(&mut tracker, press(KeyCode::Down));
        view.handle_key(&mut tracker, press(KeyCode::Char(' ')));
        assert!(tracker.tasks()[1].completed());

        view.handle_key(&mut tracker, press(KeyCode::Down));
        view.handle_key(&mut tracker, press(KeyCode::Char('d')));
        let texts: Vec<&str> = tracker.tasks().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(view.selected(), 1);

        view.handle_key(&mut tracker, press(KeyCode::Delete));
        view.handle_key(&mut tracker, press(KeyCode::Delete));
        assert!(tracker.tasks().is_empty());
        assert_eq!(view.focus(), Focus::Input);
    }

    #[test]
    fn quit_keys() {
        let mut tracker = tracker();
        let mut view = ViewState::new();
        // 'q' is a regular character while typing
        assert_eq!(view.handle_key(&mut tracker, press(KeyCode::Char('q'))), Outcome::Continue);
        assert_eq!(view.handle_key(&mut tracker, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Outcome::Quit);
        assert_eq!(view.handle_key(&mut tracker, press(KeyCode::Esc)), Outcome::Quit);
    }

    #[test]
    fn renders_date_and_empty_state() {
        let tracker = tracker();
        let mut view = ViewState::new();
        let screen = rows(&render(&tracker, &mut view)).join("\n");

        assert!(screen.contains("Thursday"));
        assert!(screen.contains("March"));
        assert!(screen.contains(&big_digits(7)[0]));
        assert!(screen.contains("Important Tasks"));
        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains(EMPTY_LIST_MESSAGE));
        assert!(screen.contains("Special message"));
        assert!(screen.contains("Make today count!"));
    }

    #[test]
    fn completed_tasks_are_crossed_out() {
        let mut tracker = tracker();
        tracker.add("Buy milk").unwrap();
        tracker.add("Call Alice").unwrap();
        let first = tracker.tasks()[0].id();
        tracker.toggle(first).unwrap();

        let mut view = ViewState::new();
        let buffer = render(&tracker, &mut view);
        let rows = rows(&buffer);
        let width = buffer.area.width as usize;

        let find = |text: &str| {
            rows.iter().enumerate()
                .find_map(|(y, row)| row.find(text).map(|byte_x| (y, row[..byte_x].chars().count())))
                .unwrap()
        };

        let (y, x) = find("Buy milk");
        assert!(buffer.content[y * width + x].modifier.contains(Modifier::CROSSED_OUT));
        let (y, x) = find("Call Alice");
        assert!(buffer.content[y * width + x].modifier.contains(Modifier::CROSSED_OUT) == false);

        assert!(rows.iter().any(|row| row.contains("[x] Buy milk")));
        // Delete controls are only shown on the focused row of the list
        assert!(rows.iter().any(|row| row.contains("Delete")) == false);
    }

    #[test]
    fn big_digit_rows() {
        assert_eq!(big_digits(7), vec!["███", "  █", "  █", "  █", "  █"]);
        assert_eq!(big_digits(31)[0], "███   █");
    }
}
