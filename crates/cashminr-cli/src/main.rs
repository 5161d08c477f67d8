use anyhow::Result;
use cashminr_config::Config;
use cashminr_engine::models::{Article, ArticleCatalog, CATEGORIES};
use cashminr_engine::rendering::{self, ContentBlock, ParagraphBreak, RenderOptions, html};
use cashminr_engine::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    catalog: ArticleCatalog,
    options: RenderOptions,
    // Per-session view state: the search term and category filter belong
    // to this browser instance, never to the engine.
    search_term: String,
    search_mode: bool,
    category_index: usize, // 0 = all, 1.. indexes into CATEGORIES
    visible_slugs: Vec<String>,
    article_list_state: ListState,
    current_title: String,
    current_content: Vec<String>,
}

impl App {
    fn new(catalog: ArticleCatalog, options: RenderOptions, default_category: Option<&str>) -> Self {
        let category_index = default_category
            .and_then(|wanted| CATEGORIES.iter().position(|c| *c == wanted))
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut app = Self {
            catalog,
            options,
            search_term: String::new(),
            search_mode: false,
            category_index,
            visible_slugs: Vec::new(),
            article_list_state: ListState::default(),
            current_title: String::new(),
            current_content: Vec::new(),
        };
        app.apply_filters();
        app
    }

    fn selected_category(&self) -> Option<&'static str> {
        match self.category_index {
            0 => None,
            i => Some(CATEGORIES[i - 1]),
        }
    }

    fn category_label(&self) -> &'static str {
        self.selected_category().unwrap_or("all")
    }

    /// Recompute the visible article list from the current search term and
    /// category, keeping the selection in range.
    fn apply_filters(&mut self) {
        self.visible_slugs = self
            .catalog
            .filtered(&self.search_term, self.selected_category())
            .iter()
            .map(|article| article.slug.clone())
            .collect();

        if self.visible_slugs.is_empty() {
            self.article_list_state.select(None);
        } else {
            let index = self
                .article_list_state
                .selected()
                .unwrap_or(0)
                .min(self.visible_slugs.len() - 1);
            self.article_list_state.select(Some(index));
        }
        self.update_content_for_selection();
    }

    fn next_article(&mut self) {
        if self.visible_slugs.is_empty() {
            return;
        }
        let i = match self.article_list_state.selected() {
            Some(i) => (i + 1) % self.visible_slugs.len(),
            None => 0,
        };
        self.article_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_article(&mut self) {
        if self.visible_slugs.is_empty() {
            return;
        }
        let i = match self.article_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.visible_slugs.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.article_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn cycle_category(&mut self) {
        self.category_index = (self.category_index + 1) % (CATEGORIES.len() + 1);
        self.apply_filters();
    }

    fn selected_article(&self) -> Option<&Article> {
        let index = self.article_list_state.selected()?;
        let slug = self.visible_slugs.get(index)?;
        self.catalog.by_slug(slug)
    }

    fn update_content_for_selection(&mut self) {
        match self.selected_article() {
            Some(article) => {
                let title = article.title.clone();
                let content = render_article_lines(article, self.options);
                self.current_title = title;
                self.current_content = content;
            }
            None => {
                self.current_title = String::new();
                self.current_content = Vec::new();
            }
        }
    }
}

/// Flatten an article's block sequence into display lines for the
/// content panel.
fn render_article_lines(article: &Article, options: RenderOptions) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{} · {} min read",
            article.category,
            article.read_time_minutes()
        ),
        String::new(),
    ];

    for block in rendering::render_with(&article.content, options) {
        match block {
            ContentBlock::Heading { level, text } => {
                let prefix = "#".repeat(level as usize);
                lines.push(format!("{prefix} {text}"));
                lines.push(String::new());
            }
            ContentBlock::Paragraph { text } => {
                lines.extend(text.lines().map(str::to_string));
                lines.push(String::new());
            }
            ContentBlock::OrderedList { items } => {
                for (i, item) in items.iter().enumerate() {
                    lines.push(format!("{}. {item}", i + 1));
                }
                lines.push(String::new());
            }
            ContentBlock::UnorderedList { items } => {
                for item in &items {
                    lines.push(format!("• {item}"));
                }
                lines.push(String::new());
            }
        }
    }

    lines
}

fn render_options_from(config: &Config) -> RenderOptions {
    RenderOptions {
        paragraph_break: if config.strict_paragraph_breaks {
            ParagraphBreak::EmptyLine
        } else {
            ParagraphBreak::BlankRun
        },
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    // Determine content path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let content_path;
    let mut options = RenderOptions::default();
    let mut default_category: Option<String> = None;
    let mut dump_slug: Option<String> = None;
    let from_config;

    match args.len() {
        2 => {
            // CLI argument provided - use it
            content_path = PathBuf::from(&args[1]);
            from_config = false;
        }
        3 => {
            // Content path plus a slug: print that article as HTML and exit
            content_path = PathBuf::from(&args[1]);
            dump_slug = Some(args[2].clone());
            from_config = false;
        }
        1 => {
            // No CLI argument - try config file
            match Config::load() {
                Ok(Some(config)) => {
                    options = render_options_from(&config);
                    default_category = config.default_category;
                    content_path = config.content_path;
                    from_config = true;
                }
                Ok(None) => {
                    eprintln!("Error: No content path provided and no config file found");
                    eprintln!("Usage: {} [content-folder-path] [article-slug]", args[0]);
                    eprintln!("Or create a config file at {}", config_path.display());
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: Failed to load config file: {e}");
                    eprintln!("Usage: {} [content-folder-path] [article-slug]", args[0]);
                    process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("Usage: {} [content-folder-path] [article-slug]", args[0]);
            process::exit(1);
        }
    }

    // Validate content directory using engine
    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content path '{}'{} is invalid: {e}",
            content_path.display(),
            source
        );
        process::exit(1);
    }

    let catalog = io::load_catalog(&content_path)?;
    log::info!(
        "Loaded {} articles from {}",
        catalog.len(),
        content_path.display()
    );

    // Dump mode: render one article to stdout, no TUI
    if let Some(slug) = dump_slug {
        match catalog.by_slug(&slug) {
            Some(article) => {
                let blocks = rendering::render_with(&article.content, options);
                print!("{}", html::to_html(&blocks));
                return Ok(());
            }
            None => {
                eprintln!("Error: No article with slug '{slug}'");
                process::exit(1);
            }
        }
    }

    if catalog.is_empty() {
        log::warn!("Content directory holds no articles");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(catalog, options, default_category.as_deref());

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.search_mode {
                match key.code {
                    KeyCode::Esc => {
                        app.search_mode = false;
                        app.search_term.clear();
                        app.apply_filters();
                    }
                    KeyCode::Enter => app.search_mode = false,
                    KeyCode::Backspace => {
                        app.search_term.pop();
                        app.apply_filters();
                    }
                    KeyCode::Char(c) => {
                        app.search_term.push(c);
                        app.apply_filters();
                    }
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next_article(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_article(),
                    KeyCode::Char('/') => app.search_mode = true,
                    KeyCode::Char('c') => app.cycle_category(),
                    _ => {}
                }
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(outer[0]);

    // Article list panel
    let items: Vec<ListItem> = app
        .visible_slugs
        .iter()
        .filter_map(|slug| app.catalog.by_slug(slug))
        .map(|article| {
            let display_text = format!("[{}] {}", article.category, article.title);
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let list_title = format!(
        "Articles ({}/{}) · category: {}",
        app.visible_slugs.len(),
        app.catalog.len(),
        app.category_label()
    );
    let article_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(article_list, panels[0], &mut app.article_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("No article selected")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let content_title = if app.current_title.is_empty() {
        "Content".to_string()
    } else {
        app.current_title.clone()
    };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(content_title))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, panels[1]);

    // Help / search line
    let help_text = if app.search_mode {
        Line::from(format!("Search: {}▌  (Enter: keep | Esc: clear)", app.search_term))
    } else if app.search_term.is_empty() {
        Line::from("q: Quit | ↑/k ↓/j: Select | /: Search | c: Cycle category")
    } else {
        Line::from(format!(
            "q: Quit | ↑/k ↓/j: Select | /: Search ('{}') | c: Cycle category",
            app.search_term
        ))
    };

    f.render_widget(Paragraph::new(vec![help_text]), outer[1]);
}
