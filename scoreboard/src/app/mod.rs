use crate::config::Config;
use crate::match_controller::MatchController;
use futsal_common::{
    side::Side,
    snapshot::{MatchSnapshot, TEAM_COLOR_PALETTE, TeamSnapshot, secs_to_time_string},
};
use log::*;
use std::sync::{Arc, Mutex};
use tokio::{
    io::{AsyncBufReadExt, BufReader, stdin},
    sync::watch,
};

pub mod ticker;
use ticker::ClockTicker;

const HELP_TEXT: &str = "\
Commands (sides are 'l' or 'r'):
  start | pause | clock          start, pause, or toggle the match clock
  time <MM:SS | MM>              set the clock manually
  reset-time                     reset the clock to the configured duration
  score <side> <delta>           adjust a score, e.g. 'score l +1'
  foul <side> <slot>             toggle a foul slot, numbered 1-5
  timeout <side>                 toggle a team's timeout marker
  name <side> <text>             rename a team
  color <side> <value>           set a team color, e.g. '#22c55e'
  logo <side> [reference]        set or clear a team logo reference
  period + | period -            advance or rewind the period
  reset-team <side>              restore one team to its defaults
  reset-all                      reset the whole board (asks to confirm)
  palette                        list the predefined team colors
  help | quit";

enum Flow {
    Continue,
    ConfirmReset,
    Quit,
}

/// Runs the console scoreboard until EOF or `quit`.
pub async fn run(config: Config) -> std::io::Result<()> {
    let controller = Arc::new(Mutex::new(MatchController::new(config.game)));
    let initial = controller.lock().unwrap().snapshot();
    let (snapshot_tx, mut snapshot_rx) = watch::channel(initial);
    let ticker = ClockTicker::spawn(controller.clone(), snapshot_tx.clone());

    println!("{HELP_TEXT}\n");
    render(&snapshot_rx.borrow_and_update());

    let mut lines = BufReader::new(stdin()).lines();
    let mut awaiting_reset_confirmation = false;

    loop {
        tokio::select! {
            changed = snapshot_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                render(&snapshot_rx.borrow_and_update());
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                if awaiting_reset_confirmation {
                    awaiting_reset_confirmation = false;
                    if input.eq_ignore_ascii_case("yes") {
                        controller.lock().unwrap().reset_all();
                    } else {
                        info!("Full reset abandoned");
                        println!("Reset abandoned");
                    }
                } else {
                    match handle_command(input, &controller) {
                        Flow::Continue => {}
                        Flow::ConfirmReset => {
                            awaiting_reset_confirmation = true;
                            println!("Reset EVERYTHING (scores, fouls, and clock)? Type 'yes' to confirm");
                            continue;
                        }
                        Flow::Quit => break,
                    }
                }

                let snapshot = controller.lock().unwrap().snapshot();
                snapshot_tx.send(snapshot).unwrap();
            }
        }
    }

    ticker.stop();
    Ok(())
}

fn handle_command(input: &str, controller: &Arc<Mutex<MatchController>>) -> Flow {
    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default().to_lowercase();
    let mut controller = controller.lock().unwrap();

    match command.as_str() {
        "start" => controller.start_clock(),
        "pause" => controller.pause_clock(),
        "clock" => controller.toggle_clock(),
        "time" => match words.next() {
            Some(text) => controller.set_clock_from_text(text),
            None => println!("Usage: time <MM:SS | MM>"),
        },
        "reset-time" => controller.reset_clock(),
        "score" => match (parse_side(words.next()), words.next().map(str::parse)) {
            (Some(side), Some(Ok(delta))) => controller.add_score(side, delta),
            _ => println!("Usage: score <l|r> <delta>"),
        },
        "foul" => match (parse_side(words.next()), words.next().map(str::parse)) {
            (Some(side), Some(Ok(slot))) => match usize::checked_sub(slot, 1) {
                Some(index) => {
                    if let Err(e) = controller.toggle_foul(side, index) {
                        println!("{e}");
                    }
                }
                None => println!("Foul slots are numbered 1-5"),
            },
            _ => println!("Usage: foul <l|r> <1-5>"),
        },
        "timeout" => match parse_side(words.next()) {
            Some(side) => controller.toggle_timeout(side),
            None => println!("Usage: timeout <l|r>"),
        },
        "name" => match parse_side(words.next()) {
            Some(side) => controller.set_team_name(side, &words.collect::<Vec<_>>().join(" ")),
            None => println!("Usage: name <l|r> <text>"),
        },
        "color" => match (parse_side(words.next()), words.next()) {
            (Some(side), Some(value)) => controller.set_team_color(side, value.to_string()),
            _ => println!("Usage: color <l|r> <value>"),
        },
        "logo" => match parse_side(words.next()) {
            Some(side) => controller.set_team_logo(side, words.next().map(str::to_string)),
            None => println!("Usage: logo <l|r> [reference]"),
        },
        "period" => match words.next() {
            Some("+") => controller.next_period(),
            Some("-") => controller.previous_period(),
            _ => println!("Usage: period <+|->"),
        },
        "reset-team" => match parse_side(words.next()) {
            Some(side) => controller.reset_team(side),
            None => println!("Usage: reset-team <l|r>"),
        },
        "reset-all" => return Flow::ConfirmReset,
        "palette" => println!("Predefined colors: {}", TEAM_COLOR_PALETTE.join(" ")),
        "help" => println!("{HELP_TEXT}"),
        "quit" | "exit" => return Flow::Quit,
        other => println!("Unknown command {other:?}, try 'help'"),
    }

    Flow::Continue
}

fn parse_side(word: Option<&str>) -> Option<Side> {
    match word?.to_lowercase().as_str() {
        "l" | "left" => Some(Side::Left),
        "r" | "right" => Some(Side::Right),
        _ => None,
    }
}

fn render(snapshot: &MatchSnapshot) {
    println!(
        "P{} | {} | {} {} | {}",
        snapshot.period,
        team_summary(&snapshot.teams.left),
        secs_to_time_string(snapshot.secs_remaining),
        if snapshot.clock_running { "RUN " } else { "STOP" },
        team_summary(&snapshot.teams.right),
    );
}

fn team_summary(team: &TeamSnapshot) -> String {
    let fouls: String = team
        .fouls
        .iter()
        .map(|&f| if f { 'X' } else { '-' })
        .collect();
    format!(
        "{} {} F:{} TO:{}",
        team.name,
        team.score,
        fouls,
        if team.timeout_used { "used" } else { "ok" },
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use futsal_common::config::Game as GameConfig;

    fn new_controller() -> Arc<Mutex<MatchController>> {
        Arc::new(Mutex::new(MatchController::new(GameConfig::default())))
    }

    #[test]
    fn test_name_command_keeps_full_text() {
        let controller = new_controller();

        handle_command("name l sporting club", &controller);
        assert_eq!(
            controller.lock().unwrap().snapshot().teams.left.name,
            "SPORTING CLUB"
        );

        handle_command("name r  atletico   mineiro ", &controller);
        assert_eq!(
            controller.lock().unwrap().snapshot().teams.right.name,
            "ATLETICO MINEIRO"
        );

        // A name command with no text is a blank edit and must be discarded
        handle_command("name l", &controller);
        assert_eq!(
            controller.lock().unwrap().snapshot().teams.left.name,
            "SPORTING CLUB"
        );
    }

    #[test]
    fn test_command_side_and_clock_routing() {
        let controller = new_controller();

        handle_command("score r +2", &controller);
        handle_command("time 03:30", &controller);
        let snapshot = controller.lock().unwrap().snapshot();
        assert_eq!(snapshot.teams.right.score, 2);
        assert_eq!(snapshot.teams.left.score, 0);
        assert_eq!(snapshot.secs_remaining, 210);
    }
}
