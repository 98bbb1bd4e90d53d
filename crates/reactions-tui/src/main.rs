use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use reaction_store::{AppConfig, JsonFileStore};
use reaction_viewer::{
    DefaultTheme, FileReactions, FileViewer, FooterHint, IdentityProvider, ReactionStoreAdapter,
    ReactionViewerState, SourceFile, SourceHighlighter, ViewerEvent,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

mod identity;
mod keymap;

use identity::EnvIdentity;

/// View a source file with per-line emoji reactions.
#[derive(Debug, Parser)]
#[command(name = "reactions-tui", version, about)]
struct Args {
    /// File to view
    file: PathBuf,

    /// Syntect theme name (overrides the config file)
    #[arg(long)]
    theme: Option<String>,
}

/// Results of the two one-shot initialization requests, in arrival order.
enum InitMsg {
    User(String),
    Reactions(FileReactions),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging()?;

    let args = Args::parse();
    let config = AppConfig::load();

    log::info!("Starting reactions-tui for {:?}", args.file);

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {:?}", args.file))?;
    let path = args.file.to_string_lossy().to_string();

    let store = JsonFileStore::open(reaction_store::reactions_path()?)?;
    let adapter = ReactionStoreAdapter::new(Arc::new(store));
    let identity = EnvIdentity::new(config.username.clone());

    let theme_name = args.theme.unwrap_or(config.theme);
    let mut highlighter = SourceHighlighter::with_theme_name(&theme_name);
    highlighter.prehighlight(&path, content.lines());

    let mut state = ReactionViewerState::new(SourceFile::new(path.clone(), &content));

    // Runtime for the host's asynchronous collaborators.
    let runtime = Runtime::new().context("Failed to start async runtime")?;

    // Kick off the two one-shot initialization requests. They may resolve in
    // either order; results land on the channel and a send after teardown is
    // silently dropped.
    let (tx, mut rx) = mpsc::unbounded_channel();
    {
        let tx = tx.clone();
        runtime.spawn(async move {
            match identity.current_user().await {
                Ok(user) => {
                    let _ = tx.send(InitMsg::User(user));
                }
                Err(e) => log::warn!("Identity request failed: {}", e),
            }
        });
    }
    {
        let tx = tx.clone();
        let adapter = adapter.clone();
        let path = path.clone();
        runtime.spawn(async move {
            let reactions = adapter.load(&path).await;
            let _ = tx.send(InitMsg::Reactions(reactions));
        });
    }
    drop(tx);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &mut state,
        &mut highlighter,
        &adapter,
        &runtime,
        &mut rx,
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting reactions-tui");
    result
}

/// Route env_logger output to a file while the TUI owns the terminal.
fn init_logging() -> Result<()> {
    let log_path = std::env::temp_dir().join("reactions-tui.log");
    let file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {:?}", log_path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ReactionViewerState,
    highlighter: &mut SourceHighlighter,
    adapter: &ReactionStoreAdapter,
    runtime: &Runtime,
    init: &mut mpsc::UnboundedReceiver<InitMsg>,
) -> Result<()> {
    let theme = DefaultTheme;
    let hints = footer_hints();

    loop {
        // Apply initialization results in whatever order they arrived.
        while let Ok(msg) = init.try_recv() {
            match msg {
                InitMsg::User(user) => state.set_username(user),
                InitMsg::Reactions(reactions) => state.set_reactions(reactions),
            }
        }

        terminal.draw(|frame| {
            let widget = FileViewer::new(highlighter, &theme).with_footer_hints(hints.clone());
            frame.render_stateful_widget(widget, frame.area(), state);
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = keymap::map_key(key) else {
            continue;
        };

        for viewer_event in state.handle_action(action) {
            match viewer_event {
                ViewerEvent::ReactionsChanged { path, reactions } => {
                    // Fire-and-forget; the adapter logs failures. Two rapid
                    // toggles produce two independent saves, each carrying
                    // the full map at its call time.
                    let adapter = adapter.clone();
                    runtime.spawn(async move { adapter.save(&path, &reactions).await });
                }
                ViewerEvent::SelectionChanged { .. } => {}
                ViewerEvent::Close => return Ok(()),
            }
        }
    }
}

fn footer_hints() -> Vec<FooterHint> {
    vec![
        FooterHint::new("h/l", "Pick"),
        FooterHint::new("Space", "React"),
        FooterHint::new("1-5", "React"),
        FooterHint::new("q", "Quit"),
    ]
}
