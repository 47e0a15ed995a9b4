use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use descent::build_info;
use descent::game::{Session, PLAY_HEIGHT, PLAY_WIDTH};
use descent::input::{map_key, FlightAction, HeldKeys};
use descent::ui;

/// Target frame interval (~60 FPS).
const FRAME_INTERVAL_MS: u64 = 16;

/// Longest time slice handed to a single step. Keeps a lag spike or a
/// suspended terminal from teleporting the craft.
const MAX_FRAME_SECONDS: f64 = 0.1;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    let mut seed: Option<u64> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => match args.get(i + 1).and_then(|v| v.parse().ok()) {
                Some(value) => {
                    seed = Some(value);
                    i += 1;
                }
                None => {
                    eprintln!("--seed requires an integer value");
                    std::process::exit(1);
                }
            },
            "--version" | "-v" => {
                println!(
                    "descent {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Descent - Terminal Lunar Lander\n");
                println!("Usage: descent [options]\n");
                println!("Options:");
                println!("  --seed N   Generate terrain from a fixed seed");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'descent --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // The default play field is a compile-time constant, so this cannot
    // fail.
    let mut session =
        Session::new(PLAY_WIDTH, PLAY_HEIGHT, &mut rng).expect("default play field is valid");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game_loop(&mut terminal, &mut session, &mut rng);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run_game_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut held = HeldKeys::new();
    let mut last_step = Instant::now();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        terminal.draw(|frame| ui::draw(frame, session))?;

        if event::poll(frame_interval)? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event.code) {
                    Some(FlightAction::Quit) => return Ok(()),
                    Some(FlightAction::Restart) => {
                        if session.lander().is_down() {
                            session.reset(rng);
                            held.clear();
                            last_step = Instant::now();
                        }
                    }
                    Some(action) => held.press(action),
                    None => {}
                }
            }
        }

        // Step once per frame interval no matter how fast events arrive,
        // so a repeating key cannot speed the flight up.
        let now = Instant::now();
        if now.duration_since(last_step) >= frame_interval {
            let dt = now
                .duration_since(last_step)
                .as_secs_f64()
                .min(MAX_FRAME_SECONDS);
            last_step = now;

            session.step(dt, held.state());
            held.tick();
        }
    }
}
