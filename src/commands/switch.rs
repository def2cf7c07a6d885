use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::selector::{SelectEvent, Selector, Transition};

const TITLE: &str = "AWS Profile Switcher";
const KEY_HINTS: &str = "(up/down or j/k to move, enter to select, q to quit)";

pub fn run(ctx: &AppContext) -> AppResult<()> {
    if ctx.verbose > 0 {
        eprintln!(
            "scanning {} and {}",
            ctx.paths.config_file().display(),
            ctx.paths.credentials_file().display(),
        );
    }

    let profiles = config::discover_profiles(&ctx.paths);
    let current = config::current_profile();
    let mut selector = Selector::new(profiles, current);

    // The picker draws on stderr so stdout stays clean for the export line;
    // the caller is expected to run `eval "$(aps)"`.
    let mut stderr = io::stderr();
    let outcome = {
        let _guard = TerminalGuard::enter(&mut stderr)?;
        event_loop(&mut selector, &mut stderr, event::read)
    };

    match outcome? {
        Some(profile) => {
            println!("{}", export_line(&profile));
            eprintln!("Switched to profile: {profile}");
        }
        None => {
            eprintln!("No profile selected");
        }
    }

    Ok(())
}

/// Raw mode plus the stderr alternate screen, restored on drop no matter
/// how the event loop exits. Restoration is best-effort: a failing restore
/// must not swallow the selection outcome.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> AppResult<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// The line evaluated by the caller's shell. Exact format matters: stdout
/// carries this and nothing else on a successful selection.
fn export_line(profile: &str) -> String {
    format!("export AWS_PROFILE={profile}")
}

fn event_loop(
    selector: &mut Selector,
    out: &mut impl Write,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> AppResult<Option<String>> {
    loop {
        draw(selector, out)?;

        let Event::Key(key) = next_event()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(select_event) = map_key(key) else {
            continue;
        };

        match selector.apply(select_event) {
            Transition::Continue => {}
            Transition::Selected(profile) => return Ok(Some(profile)),
            Transition::Aborted => return Ok(None),
        }
    }
}

fn draw(selector: &Selector, out: &mut impl Write) -> AppResult<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    write!(out, "{TITLE}\r\n")?;
    for line in selector.render_lines() {
        write!(out, "{line}\r\n")?;
    }
    write!(out, "\r\n{KEY_HINTS}\r\n")?;
    out.flush()?;
    Ok(())
}

fn map_key(key: KeyEvent) -> Option<SelectEvent> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SelectEvent::Cancel)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(SelectEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectEvent::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(SelectEvent::Confirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(SelectEvent::Cancel),
        _ => None,
    }
}
