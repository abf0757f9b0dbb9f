//! Sticksurfer - headless run of the wave-riding avoidance game
//!
//! Rides a scripted surfer over the procedural water surface until it hits
//! a rock or the frame budget runs out.

use clap::Parser;

use sticksurfer::cli::Args;
use sticksurfer::game::{Session, TickOutcome};

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match args.build_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(2);
        }
    };

    let mut session = match Session::with_grid(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    println!("Sticksurfer - headless wave run");
    println!(
        "Steering: {:?}, {} frames at {} fps\n",
        args.steer, args.frames, args.fps
    );

    let dt = args.dt();
    for frame in 1..=args.frames {
        let time_s = session.timer().elapsed_s();
        let outcome = session.tick(args.steer.input_at(time_s), dt);

        if args.report_every > 0 && frame % args.report_every == 0 {
            let surfer = session.surfer();
            let pos = surfer.position();
            log::info!(
                "frame {:>6}  t={:>7.2}s  pos=({:>6.2}, {:>6.3}, {:>6.2})  surface={:>6.3}  rocks={}",
                frame,
                session.timer().elapsed_s(),
                pos.x,
                pos.y,
                pos.z,
                surfer.surface_height(),
                session.rocks().len()
            );
        }

        if let TickOutcome::GameOver { survived_s } = outcome {
            println!("Game over after {:.2}s (frame {})", survived_s, frame);
            return;
        }
    }

    println!(
        "Survived {}s with {} rocks on the water",
        session.timer().whole_seconds(),
        session.rocks().len()
    );
}
