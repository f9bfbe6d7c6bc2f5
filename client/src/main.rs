mod controls;
mod render;

use controls::Controls;
use game::constants::GAME_LOOP_TIMESTEP_SECONDS;
use game::{FrameInput, Game, GameEvent, Settings};
use raylib::init;
use render::Renderer;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// A stalled frame is not worth more simulation than this.
const MAX_TICKS_PER_FRAME: u32 = 5;

fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = Settings::load()?;
    info!(
        "Starting Breakout at {}x{}, {} fps",
        settings.window.width, settings.window.height, settings.window.fps
    );

    start_game_loop(&settings);

    info!("Bye!");
    Ok(())
}

fn start_game_loop(settings: &Settings) {
    let (mut handle, thread) = init()
        .size(settings.window.width as i32, settings.window.height as i32)
        .title("Breakout")
        .build();
    handle.set_target_fps(settings.window.fps);

    let mut game = Game::new(settings.gameplay.seed, settings.gameplay.lives);
    let mut controls = Controls::new(settings.window.width);
    let renderer = Renderer::new(settings.window.width, settings.window.height);
    let mut accumulated_seconds = 0.0;
    let mut unprocessed: Option<FrameInput> = None;

    while !game.is_finished() {
        if handle.window_should_close() {
            log_events(&game.quit());
            break;
        }

        let mut input = controls.poll(&handle);
        if let Some(earlier) = unprocessed.take() {
            input.carry_presses(&earlier);
        }

        accumulated_seconds += handle.get_frame_time();
        let mut ticks = 0;
        while accumulated_seconds >= GAME_LOOP_TIMESTEP_SECONDS && ticks < MAX_TICKS_PER_FRAME {
            // Presses count once, on the first tick of the frame.
            let tick_input = if ticks == 0 {
                input.clone()
            } else {
                input.held_only()
            };
            log_events(&game.update(&tick_input));

            accumulated_seconds -= GAME_LOOP_TIMESTEP_SECONDS;
            ticks += 1;
        }

        if ticks == 0 {
            unprocessed = Some(input);
        } else if ticks == MAX_TICKS_PER_FRAME {
            accumulated_seconds = 0.0;
        }

        let mut draw_handle = handle.begin_drawing(&thread);
        renderer.draw(&mut draw_handle, &game);
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::PhaseChanged { from, to } => info!("Phase changed: {:?} -> {:?}", from, to),
            GameEvent::LifeLost { lives_left } => info!("Life lost, {} left", lives_left),
            GameEvent::PowerupCollected(kind) => info!("Collected {:?}", kind),
            other => debug!("{:?}", other),
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(env_filter)
        .init();
}
