//! Console session driver: menu, room sequence, terminal I/O.
//!
//! Everything here is presentation: raw input parsing, screen control,
//! pacing, and narration. The engine only ever sees validated choices and
//! reports back deltas.

use chrono::Utc;
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use hallow::audio::AudioCue;
use hallow::character::Player;
use hallow::combat::{
    random_enemy, resolve_turn, shadow_king, CombatAction, CombatEvent, CombatOutcome, Enemy,
};
use hallow::encounters::{
    resolve_encounter, EncounterEvent, EncounterKind, GhostChoice,
};
use hallow::input::InputProvider;
use hallow::items::Item;
use hallow::save_manager::{PlayerRecord, SaveData, SaveManager};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Five haunted rooms, then the boss hall.
const TOTAL_ROOMS: u32 = 6;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let save_manager = SaveManager::new()?;
    let mut input = ConsoleInput::new();

    clear_screen();
    println!("🎃 The Mansion of the Dark Amulet 🎃");
    println!();

    let (player, room, has_amulet) = start_menu(&save_manager, &mut input);
    run_session(&save_manager, player, room, has_amulet, &mut input);
    Ok(())
}

fn start_menu(save_manager: &SaveManager, input: &mut ConsoleInput) -> (Player, u32, bool) {
    if let Some(data) = save_manager.load() {
        loop {
            match input
                .prompt("(c) Continue your night  (n) Start a new one\n> ")
                .as_deref()
            {
                Some("c") | None => {
                    let player = data.player.clone().restore();
                    println!("\nWelcome back, {}.", player.name);
                    return (player, data.room, data.has_amulet);
                }
                Some("n") => return new_game(input),
                _ => println!("Invalid option, try again."),
            }
        }
    } else {
        new_game(input)
    }
}

fn new_game(input: &mut ConsoleInput) -> (Player, u32, bool) {
    let name = match input.prompt_raw("What is your name, brave soul? ") {
        Some(name) if !name.is_empty() => name,
        _ => "Wanderer".to_string(),
    };
    println!("\nThe mansion gate creaks open for you, {name}...");
    (Player::new(name), 0, false)
}

fn run_session(
    save_manager: &SaveManager,
    mut player: Player,
    mut room: u32,
    mut has_amulet: bool,
    input: &mut ConsoleInput,
) {
    let bell = TerminalBell;
    let mut rng = rand::thread_rng();

    while room < TOTAL_ROOMS {
        pause(900);
        clear_screen();
        print_status(&player, room);

        if room == TOTAL_ROOMS - 1 {
            println!("🕯️  The last hall. Something ancient waits in the dark.");
            let mut boss = shadow_king();
            println!(
                "⚔️  You face {} — {} (HP {}).",
                boss.name, boss.flavor_text, boss.hp
            );
            match drive_combat(&mut player, &mut boss, input, &bell, &mut rng) {
                CombatOutcome::Victory => {
                    has_amulet = true;
                    room += 1;
                    checkpoint(save_manager, &player, room, has_amulet);
                    println!("\n✨ The Dark Amulet is yours. Dawn breaks over the mansion. ✨");
                    return;
                }
                CombatOutcome::Defeat => {
                    game_over();
                    return;
                }
                CombatOutcome::Fled => {
                    println!("You slip back into the corridor. The amulet still waits.");
                }
            }
        } else {
            explore_room(&mut player, input, &bell, &mut rng);
            if player.is_dead() {
                game_over();
                return;
            }
            room += 1;
            checkpoint(save_manager, &player, room, has_amulet);
        }
    }
}

/// One haunted room: a random encounter or a fight.
fn explore_room(
    player: &mut Player,
    input: &mut ConsoleInput,
    bell: &TerminalBell,
    rng: &mut impl Rng,
) {
    match rng.gen_range(0..5) {
        0 => run_encounter(EncounterKind::Door, player, input, bell, rng),
        1 => run_encounter(EncounterKind::Puzzle, player, input, bell, rng),
        2 => run_encounter(EncounterKind::Path, player, input, bell, rng),
        3 => run_encounter(EncounterKind::Ghost, player, input, bell, rng),
        _ => {
            let mut enemy = random_enemy(rng);
            println!(
                "⚔️  You face {} — {} (HP {}).",
                enemy.name, enemy.flavor_text, enemy.hp
            );
            drive_combat(player, &mut enemy, input, bell, rng);
        }
    }
}

fn run_encounter(
    kind: EncounterKind,
    player: &mut Player,
    input: &mut ConsoleInput,
    bell: &TerminalBell,
    rng: &mut impl Rng,
) {
    match kind {
        EncounterKind::Door => {
            println!("🎃 You enter a room of decorated doors. Trick-or-treat night!")
        }
        EncounterKind::Puzzle => println!("🔮 A mirror glows — a riddle swirls across the glass."),
        EncounterKind::Path => println!("🕯️  You follow a path of lit pumpkins..."),
        EncounterKind::Ghost => println!("👻 A ghost whispers in your ear..."),
    }

    match resolve_encounter(kind, player, input, bell, rng) {
        Ok(result) => narrate_encounter_events(&result.events),
        // The console only ever offers narrative choices, so this is a
        // programming error worth surfacing, not a player-visible state.
        Err(e) => warn!(error = %e, "encounter rejected a choice"),
    }
}

/// Runs a combat turn by turn so each delta is narrated as it happens.
fn drive_combat(
    player: &mut Player,
    enemy: &mut Enemy,
    input: &mut ConsoleInput,
    bell: &TerminalBell,
    rng: &mut impl Rng,
) -> CombatOutcome {
    loop {
        let action = input.combat_action(player, enemy);
        let (events, outcome) = resolve_turn(player, enemy, action, input, bell, rng);
        narrate_combat_events(&events);
        pause(700);
        if let Some(outcome) = outcome {
            return outcome;
        }
    }
}

fn narrate_combat_events(events: &[CombatEvent]) {
    for event in events {
        match event {
            CombatEvent::PlayerAttack { damage } => {
                println!("➡️  You strike for {damage} damage.");
            }
            CombatEvent::EnemyDefeated {
                xp_gained,
                leveled_up,
                new_level,
                candies_gained,
            } => {
                println!("🎉 The enemy falls! You gain {xp_gained} XP and {candies_gained} candies.");
                if *leveled_up {
                    println!("✨ You reach level {new_level}! HP and attack rise.");
                }
            }
            CombatEvent::InventoryEmpty => println!("Your bag is empty."),
            CombatEvent::UseCancelled => println!("You keep your bag closed."),
            CombatEvent::ItemUsed(report) => {
                println!("You use {}.", report.item.name);
                if report.hp_restored > 0 {
                    println!("   Restored {} HP.", report.hp_restored);
                }
                if report.power_gained > 0 {
                    println!("   Attack up by {}.", report.power_gained);
                }
                if report.candies_gained > 0 {
                    println!("   Candies up by {}.", report.candies_gained);
                }
                if report.scare_reduced > 0 {
                    println!("   The light steadies you: scare down {}.", report.scare_reduced);
                }
            }
            CombatEvent::FleeSucceeded => println!("You slip away into the dark!"),
            CombatEvent::FleeFailed {
                damage_taken,
                scared,
            } => {
                println!("❗ You stumble — the enemy counters for {damage_taken} damage.");
                if *scared {
                    println!("   The fright lingers: scare +1.");
                }
            }
            CombatEvent::PlayerDefeated => println!("☠️  You fall in the mansion..."),
        }
    }
}

fn narrate_encounter_events(events: &[EncounterEvent]) {
    for event in events {
        match event {
            EncounterEvent::NothingFound => {
                println!("Nothing behind this one. Try another door and surprise yourself!");
            }
            EncounterEvent::ItemFound { item, stored } => {
                println!("🎁 You find an item: {} — {}", item.name, item.description);
                if *stored {
                    println!("Tucked into your bag.");
                } else {
                    println!("Your bag is full — you leave it on the floor.");
                }
            }
            EncounterEvent::Trapped { scare_gained } => {
                println!("⚠️  It was a prank! The fright raises your scare meter by {scare_gained}.");
            }
            EncounterEvent::PuzzleSolved {
                candies_gained,
                item,
                stored,
            } => {
                println!("✨ The mirror smiles! +{candies_gained} candies.");
                if *stored {
                    println!("It also yields {} — {}", item.name, item.description);
                } else {
                    println!("It offers {}, but your bag is full.", item.name);
                }
            }
            EncounterEvent::PuzzleFailed { scare_gained } => {
                println!("🔒 The mirror goes silent. Scare +{scare_gained}.");
            }
            EncounterEvent::PathDeclined => {
                println!("You walk on carefully and nothing happens.");
            }
            EncounterEvent::CandyStash { candies_gained } => {
                println!("🍭 You find a bag of sweets: +{candies_gained} candies!");
            }
            EncounterEvent::HiddenRamp {
                hp_lost,
                scare_gained,
            } => {
                println!("👻 A hidden ramp! You lose {hp_lost} HP and scare climbs by {scare_gained}.");
            }
            EncounterEvent::CandiesOffered { candies_lost } => {
                println!("\"Thanks for the sweets...\" The ghost takes {candies_lost} candies.");
            }
            EncounterEvent::PowerDrained { power_lost } => {
                println!("The ghost claws at you as you run — attack power down {power_lost}.");
            }
        }
    }
}

fn print_status(player: &Player, room: u32) {
    println!(
        "Room {}/{} — {} | HP {}/{} | Attack {} | Level {} ({} XP) | Candies {} | Scare {}",
        room + 1,
        TOTAL_ROOMS,
        player.name,
        player.hp,
        player.max_hp,
        player.attack_power(),
        player.level,
        player.xp,
        player.candies,
        player.scare_meter
    );
    println!();
}

fn checkpoint(save_manager: &SaveManager, player: &Player, room: u32, has_amulet: bool) {
    let data = SaveData {
        player: PlayerRecord::from_player(player),
        room,
        has_amulet,
        last_save_time: Utc::now().timestamp(),
    };
    match save_manager.save(&data) {
        Ok(()) => println!("💾 Progress saved."),
        Err(e) => warn!(error = %e, "could not write save file"),
    }
}

fn game_over() {
    println!("\n☠️  The mansion claims you. Your last checkpoint remains.");
}

fn clear_screen() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0));
}

fn pause(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

/// Terminal bell, the cross-platform stand-in for tone-based cues.
struct TerminalBell;

impl TerminalBell {
    fn ring(&self) {
        print!("\x07");
        let _ = io::stdout().flush();
    }
}

impl AudioCue for TerminalBell {
    fn reward(&self) {
        self.ring();
    }

    fn failure(&self) {
        self.ring();
    }

    fn level_up(&self) {
        self.ring();
    }
}

/// Line-based console provider. Invalid input re-prompts locally; the
/// engine never sees it. EOF on stdin degrades to safe defaults so a piped
/// session cannot wedge a prompt loop.
struct ConsoleInput {
    stdin: io::Stdin,
}

impl ConsoleInput {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    /// Reads one trimmed, lowercased line; `None` on EOF.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        let _ = io::stdout().flush();
        self.read_line()
    }

    /// Reads a raw (case-preserving) line for free-text answers.
    fn prompt_raw(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl InputProvider for ConsoleInput {
    fn combat_action(&mut self, player: &Player, enemy: &Enemy) -> CombatAction {
        println!(
            "\nYour HP: {}/{}  |  Attack: {}  |  Candies: {}  |  Scare: {}",
            player.hp,
            player.max_hp,
            player.attack_power(),
            player.candies,
            player.scare_meter
        );
        println!("{}: HP {}", enemy.name, enemy.hp.max(0));
        println!("Options: (a) Attack  (u) Use item  (f) Flee");
        loop {
            match self.prompt("> ").as_deref() {
                Some("a") | None => return CombatAction::Attack,
                Some("u") => return CombatAction::UseItem,
                Some("f") => return CombatAction::Flee,
                _ => println!("Invalid option, try again."),
            }
        }
    }

    fn inventory_slot(&mut self, items: &[Item]) -> Option<usize> {
        for (idx, item) in items.iter().enumerate() {
            println!("{}. {} — {}", idx + 1, item.name, item.description);
        }
        let answer = self.prompt("Pick an item number (or ENTER to cancel): ")?;
        // Anything non-numeric (including zero) cancels, like closing the bag.
        answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
    }

    fn puzzle_guess(&mut self, scrambled: &str) -> String {
        println!("Letters: {scrambled}");
        self.prompt_raw("Write the right word: ").unwrap_or_default()
    }

    fn take_risk(&mut self) -> bool {
        loop {
            match self
                .prompt("Risk the darker path for more candies? (y/n): ")
                .as_deref()
            {
                Some("y") => return true,
                Some("n") | None => return false,
                _ => println!("Invalid option, try again."),
            }
        }
    }

    fn ghost_choice(&mut self, offered: &[GhostChoice]) -> GhostChoice {
        let labels: Vec<&str> = offered.iter().map(|c| ghost_label(*c)).collect();
        println!("What do you do? ({})", labels.join("/"));
        loop {
            match self.prompt("> ") {
                Some(answer) => {
                    if let Some(choice) = offered
                        .iter()
                        .find(|c| ghost_label(**c) == answer)
                    {
                        return *choice;
                    }
                    println!("Invalid option, try again.");
                }
                None => return *offered.last().expect("ghost choices are never empty"),
            }
        }
    }
}

fn ghost_label(choice: GhostChoice) -> &'static str {
    match choice {
        GhostChoice::Talk => "talk",
        GhostChoice::Offer => "offer",
        GhostChoice::Flee => "flee",
    }
}
