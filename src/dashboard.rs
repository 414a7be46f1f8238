use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame, Terminal,
};
use tracing::warn;

use crate::catalog::{CareerDetail, College};
use crate::engine::Recommender;
use crate::error::Result;
use crate::profile::UserProfile;
use crate::ranker::ScoredCareer;
use crate::resume::{read_log, ResumeRecord};
use crate::utils::percent;

const TAB_TITLES: [&str; 4] = ["Overview", "Details", "Analytics", "Resumes"];

/// Everything one recommendation row shows, resolved up front.
struct CareerView {
    career: String,
    score: f32,
    detail: CareerDetail,
    roadmap: Vec<String>,
    colleges: &'static [College],
}

pub struct DashboardApp {
    careers: Vec<CareerView>,
    resumes: Vec<ResumeRecord>,
    tab: usize,
    table_state: TableState,
}

impl DashboardApp {
    pub fn new(
        recommender: &Recommender,
        profile: &UserProfile,
        recommendations: &[ScoredCareer],
        resumes: Vec<ResumeRecord>,
    ) -> Self {
        let careers = recommendations
            .iter()
            .map(|rec| CareerView {
                career: rec.career.clone(),
                score: rec.score,
                detail: recommender.detail(&rec.career).into_owned(),
                roadmap: recommender.roadmap(&rec.career, profile),
                colleges: recommender.colleges(&rec.career),
            })
            .collect::<Vec<_>>();

        let mut table_state = TableState::default();
        if !careers.is_empty() {
            table_state.select(Some(0)); // Select the first row by default
        }
        DashboardApp {
            careers,
            resumes,
            tab: 0,
            table_state,
        }
    }

    pub fn tab(&self) -> usize {
        self.tab
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    fn row_count(&self) -> usize {
        if self.tab == 3 {
            self.resumes.len()
        } else {
            self.careers.len()
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = (self.tab + 1) % TAB_TITLES.len();
        self.reset_selection();
    }

    pub fn previous_tab(&mut self) {
        self.tab = (self.tab + TAB_TITLES.len() - 1) % TAB_TITLES.len();
        self.reset_selection();
    }

    // Every tab switch starts over at the first row.
    fn reset_selection(&mut self) {
        let first = (self.row_count() > 0).then_some(0);
        self.table_state.select(first);
    }

    pub fn next_row(&mut self) {
        let len = self.row_count();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.row_count();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Returns false when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab | KeyCode::Right => self.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.previous_tab(),
            KeyCode::Down => self.next_row(),
            KeyCode::Up => self.previous_row(),
            _ => {}
        }
        true
    }
}

pub fn run_dashboard(
    recommender: &Recommender,
    profile: &UserProfile,
    recommendations: &[ScoredCareer],
    log_path: &Path,
) -> Result<()> {
    let resumes = read_log(log_path).unwrap_or_else(|e| {
        warn!("Could not read {}: {}", log_path.display(), e);
        Vec::new()
    });
    let mut app = DashboardApp::new(recommender, profile, recommendations, resumes);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut DashboardApp) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

pub fn ui(f: &mut Frame, app: &mut DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .margin(1)
        .split(f.size());

    let tabs = Tabs::new(TAB_TITLES.to_vec())
        .block(Block::default().borders(Borders::ALL).title("Career Matcher"))
        .select(app.tab)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    match app.tab {
        0 => draw_overview(f, app, chunks[1]),
        1 => draw_details(f, app, chunks[1]),
        2 => draw_analytics(f, app, chunks[1]),
        _ => draw_resumes(f, app, chunks[1]),
    }

    let help = Paragraph::new("Tab/←/→ switch tabs  ↑/↓ select  q quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    let cells = titles
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
    Row::new(cells).height(1).bottom_margin(1)
}

fn selected_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED).fg(Color::Yellow)
}

fn draw_overview(f: &mut Frame, app: &mut DashboardApp, area: Rect) {
    let rows = app.careers.iter().enumerate().map(|(i, view)| {
        Row::new(vec![
            Cell::from((i + 1).to_string()),
            Cell::from(view.career.clone()),
            Cell::from(percent(view.score)),
            Cell::from(view.detail.salary.clone()),
            Cell::from(view.detail.market.clone()),
        ])
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Min(28),
        Constraint::Length(7),
        Constraint::Min(20),
        Constraint::Min(30),
    ];
    let table = Table::new(rows, widths)
        .header(header_row(&["#", "Career", "Match", "Salary", "Market"]))
        .block(Block::default().borders(Borders::ALL).title("Recommendations"))
        .highlight_style(selected_style())
        .highlight_symbol(">> ");
    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn bullet_lines(title: &str, items: &[String]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(items.iter().map(|item| Line::from(format!("  • {item}"))));
    lines.push(Line::from(""));
    lines
}

fn draw_details(f: &mut Frame, app: &mut DashboardApp, area: Rect) {
    let Some(view) = app.selected().and_then(|i| app.careers.get(i)) else {
        let empty = Paragraph::new("No recommendations.")
            .block(Block::default().borders(Borders::ALL).title("Details"));
        f.render_widget(empty, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut left = vec![
        Line::from(Span::styled(
            view.detail.description.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    let numbered: Vec<String> = view
        .roadmap
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();
    left.extend(bullet_lines("Roadmap", &numbered));
    for (name, steps) in &view.detail.sub_specialty_steps {
        left.extend(bullet_lines(&format!("Path to {name}"), steps));
    }
    left.extend(bullet_lines("Education", &view.detail.education));
    left.extend(bullet_lines("Skills", &view.detail.skills));

    let mut right = bullet_lines("Pros", &view.detail.pros);
    right.extend(bullet_lines("Cons", &view.detail.cons));
    let paths: Vec<String> = view
        .detail
        .paths
        .iter()
        .map(|p| format!("{}: {}", p.title, p.description))
        .collect();
    if !paths.is_empty() {
        right.extend(bullet_lines("Career paths", &paths));
    }
    let colleges: Vec<String> = view
        .colleges
        .iter()
        .map(|c| format!("{} ({}): {}", c.name, c.exam, c.highlights))
        .collect();
    right.extend(bullet_lines("Top colleges", &colleges));

    let title = format!("{} ({})", view.career, percent(view.score));
    f.render_widget(
        Paragraph::new(left)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title)),
        columns[0],
    );
    f.render_widget(
        Paragraph::new(right)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Outlook")),
        columns[1],
    );
}

fn draw_analytics(f: &mut Frame, app: &mut DashboardApp, area: Rect) {
    let labels: Vec<(String, u64)> = app
        .careers
        .iter()
        .map(|view| {
            let short: String = view.career.chars().take(12).collect();
            (short, (view.score * 100.0).round() as u64)
        })
        .collect();
    let data: Vec<(&str, u64)> = labels.iter().map(|(l, v)| (l.as_str(), *v)).collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Match score (%)"))
        .data(&data)
        .bar_width(12)
        .bar_gap(2)
        .max(100)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    f.render_widget(chart, area);
}

fn draw_resumes(f: &mut Frame, app: &mut DashboardApp, area: Rect) {
    let rows = app.resumes.iter().map(|record| {
        Row::new(vec![
            Cell::from(record.tracking_number.clone()),
            Cell::from(record.name.clone()),
            Cell::from(record.top_career.clone()),
            Cell::from(record.generated_at.clone()),
            Cell::from(record.pdf_path.clone()),
        ])
    });

    let widths = [
        Constraint::Min(15), // Tracking
        Constraint::Min(16), // Name
        Constraint::Min(20), // Career
        Constraint::Min(19), // Date
        Constraint::Min(20), // PDF
    ];
    let table = Table::new(rows, widths)
        .header(header_row(&["Tracking #", "Name", "Career", "Generated", "PDF"]))
        .block(Block::default().borders(Borders::ALL).title("Resumes"))
        .highlight_style(selected_style())
        .highlight_symbol(">> ");
    f.render_stateful_widget(table, area, &mut app.table_state);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::taxonomy::Stream;

    fn app() -> DashboardApp {
        let recommender = Recommender::offline().unwrap();
        let profile = UserProfile::new(Stream::Commerce);
        let recs = vec![
            ScoredCareer::new("Chartered Accountant (CA)", 0.92),
            ScoredCareer::new("Company Secretary (CS)", 0.81),
        ];
        DashboardApp::new(&recommender, &profile, &recs, Vec::new())
    }

    fn screen(app: &mut DashboardApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn selection_wraps_around() {
        let mut app = app();
        assert_eq!(app.selected(), Some(0));
        app.previous_row();
        assert_eq!(app.selected(), Some(1));
        app.next_row();
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn tabs_cycle_and_empty_resume_tab_clears_selection() {
        let mut app = app();
        app.previous_tab();
        assert_eq!(app.tab(), 3);
        assert_eq!(app.selected(), None);
        assert!(app.handle_key(KeyCode::Tab));
        assert_eq!(app.tab(), 0);
        assert_eq!(app.selected(), Some(0));
        assert!(!app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn switching_tabs_returns_to_first_row() {
        let mut app = app();
        app.next_row();
        assert_eq!(app.selected(), Some(1));
        app.next_tab();
        assert_eq!(app.selected(), Some(0));
        app.next_row();
        app.previous_tab();
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn overview_lists_careers() {
        let mut app = app();
        let text = screen(&mut app);
        assert!(text.contains("Chartered Accountant (CA)"));
        assert!(text.contains("92%"));
    }

    #[test]
    fn details_show_roadmap() {
        let mut app = app();
        app.next_tab();
        let text = screen(&mut app);
        assert!(text.contains("Roadmap"));
        assert!(text.contains("Pros"));
    }
}
