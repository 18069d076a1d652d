use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use wordbattle::character::classes::{get_character_class, get_character_classes, AbilityKind};
use wordbattle::character::progression::BattleReport;
use wordbattle::combat::{BattleEvent, BattleStatus, DefeatReason};
use wordbattle::core::constants::DATA_DIR_ENV;
use wordbattle::items::catalog::get_shop_items;
use wordbattle::items::ledger::{sell_price, EquipOutcome};
use wordbattle::items::types::ItemCategory;
use wordbattle::session::{BattleTurn, GameSession, SessionError};
use wordbattle::utils::persistence::JsonFileStore;
use wordbattle::world::enemies::get_all_enemies;

type Session = GameSession<JsonFileStore>;

fn print_help() {
    println!("Wordbattle - word-guessing RPG\n");
    println!("Usage: wordbattle [--data-dir <path>]\n");
    println!("Options:");
    println!("  --data-dir <path>  Store saves in <path> (or set {})", DATA_DIR_ENV);
    println!("  --version          Show version information");
    println!("  --help             Show this help message");
}

fn print_commands() {
    println!("Commands:");
    println!("  create <name> <class>   new character (warrior, mage, rogue)");
    println!("  classes                 list character classes");
    println!("  status                  character sheet");
    println!("  map                     list enemies");
    println!("  fight <enemy>           start a battle");
    println!("  <letter> | guess <l>    guess a letter");
    println!("  hint                    reveal a letter (needs 3 intelligence)");
    println!("  ability <id>            use a class ability once per battle");
    println!("  leave                   leave the battle");
    println!("  shop                    list shop items");
    println!("  buy|sell|equip|unequip <item>");
    println!("  reset                   delete the character");
    println!("  quit");
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut data_dir: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("wordbattle {}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            "--help" | "-h" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            "--data-dir" => match args.next() {
                Some(path) => data_dir = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--data-dir needs a path");
                    return ExitCode::FAILURE;
                }
            },
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'wordbattle --help' for usage.");
                return ExitCode::FAILURE;
            }
        }
    }

    let store = match data_dir {
        Some(dir) => JsonFileStore::open(dir),
        None => JsonFileStore::open_default(),
    };
    let session = store
        .map_err(SessionError::from)
        .and_then(GameSession::load);
    let mut session = match session {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to load game: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match session.player() {
        Some(p) => println!("Welcome back, {} (level {}).", p.name, p.level),
        None => println!("No character yet. Try: create <name> warrior"),
    }
    print_commands();

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = words.split_first() else {
            continue;
        };
        if command == "quit" || command == "exit" {
            break;
        }
        if let Err(e) = run_command(&mut session, command, rest) {
            eprintln!("{}", e);
        }
    }

    println!("Goodbye!");
    ExitCode::SUCCESS
}

fn run_command(session: &mut Session, command: &str, rest: &[&str]) -> Result<(), SessionError> {
    let arg = rest.first().copied().unwrap_or("");
    match command {
        "help" => print_commands(),
        "classes" => show_classes(),
        "create" => {
            let class_id = rest.last().copied().unwrap_or("");
            let name = rest[..rest.len().saturating_sub(1)].join(" ");
            let player = session.create_player(&name, class_id)?;
            println!("{} the {} is ready.", player.name, player.class_id);
        }
        "status" => show_status(session),
        "map" => show_map(session),
        "shop" => show_shop(session),
        "reset" => {
            session.reset_player()?;
            println!("Character deleted.");
        }
        "fight" => {
            let turn = session.start_encounter(arg)?;
            if let Some(e) = session.encounter() {
                println!("{}", e.enemy.name);
                println!("{}", e.enemy.word_prompt);
            }
            show_turn(session, &turn);
        }
        "guess" => guess(session, arg)?,
        "hint" => {
            let turn = session.request_hint()?;
            show_turn(session, &turn);
        }
        "ability" => {
            let Some(kind) = AbilityKind::from_id(arg) else {
                eprintln!("Unknown ability: {}", arg);
                return Ok(());
            };
            if session.encounter().is_some_and(|e| !e.can_use_ability()) {
                println!("No ability left to use in this battle.");
                return Ok(());
            }
            let turn = session.use_ability(kind)?;
            show_turn(session, &turn);
        }
        "leave" => {
            session.leave_encounter();
            println!("Back to the map.");
        }
        "buy" => {
            session.buy_item(arg)?;
            println!("Bought {}.", arg);
        }
        "sell" => {
            let refund = session.sell_item(arg)?;
            println!("Sold {} for {} gold.", arg, refund);
        }
        "equip" => match session.equip_item(arg)? {
            EquipOutcome::Consumed(effect) => println!("Drank {} ({:?}).", arg, effect),
            EquipOutcome::Equipped { replaced } if replaced.is_empty() => {
                println!("Equipped {}.", arg)
            }
            EquipOutcome::Equipped { replaced } => {
                println!("Equipped {} (replaced {}).", arg, replaced.join(", "))
            }
        },
        "unequip" => {
            session.unequip_item(arg)?;
            println!("Unequipped {}.", arg);
        }
        // A single letter is a guess.
        other if other.chars().count() == 1 => guess(session, other)?,
        other => eprintln!("Unknown command: {} (try 'help')", other),
    }
    Ok(())
}

fn guess(session: &mut Session, arg: &str) -> Result<(), SessionError> {
    let Some(letter) = arg.chars().next() else {
        eprintln!("Which letter?");
        return Ok(());
    };
    let turn = session.guess_letter(letter)?;
    if turn.events.is_empty() {
        println!("Already guessed.");
    }
    show_turn(session, &turn);
    Ok(())
}

fn show_turn(session: &Session, turn: &BattleTurn) {
    for event in &turn.events {
        println!("{}", describe(event));
    }
    if let Some(e) = session.encounter() {
        if e.status == BattleStatus::Active {
            println!();
            println!("  {}", e.round.masked_word());
            println!(
                "  You {}/{}  {} {:.1}/{:.0}  attempts left {}",
                e.player_health,
                e.player_max_health,
                e.enemy.name,
                e.enemy_health,
                e.enemy_max_health,
                e.remaining_attempts()
            );
        }
    }
    if let Some(report) = &turn.report {
        show_report(report);
    }
}

fn describe(event: &BattleEvent) -> String {
    match event {
        BattleEvent::CorrectGuess { letter } => format!("'{}' is in the word!", letter),
        BattleEvent::WrongGuess { letter, damage } => {
            format!("No '{}'. The enemy hits you for {}.", letter, damage)
        }
        BattleEvent::LetterRevealed { letter } => format!("Revealed '{}'.", letter),
        BattleEvent::WordSolved { word, damage } => {
            format!("Solved {}! You deal {:.1} damage.", word, damage)
        }
        BattleEvent::NewWord => "A new word appears.".to_string(),
        BattleEvent::AbilityUsed { ability } => format!("You use {}.", ability.id()),
        BattleEvent::EnemyStruck { damage } => format!("The enemy takes {:.1} damage.", damage),
        BattleEvent::PlayerHealed { amount } => format!("You recover {} health.", amount),
        BattleEvent::WrongGuessLimitRaised { by } => format!("You can afford {} more misses.", by),
        BattleEvent::PickpocketArmed => "You eye the enemy's purse.".to_string(),
        BattleEvent::Victory { bonus_gold: 0 } => "Victory!".to_string(),
        BattleEvent::Victory { bonus_gold } => format!("Victory! You pickpocket {} gold.", bonus_gold),
        BattleEvent::Defeat {
            reason: DefeatReason::HealthDepleted,
        } => "Defeat: your health ran out.".to_string(),
        BattleEvent::Defeat {
            reason: DefeatReason::GallowsComplete,
        } => "Defeat: too many wrong guesses.".to_string(),
    }
}

fn show_report(report: &BattleReport) {
    if report.victory {
        println!(
            "+{} XP, +{} gold, {} word(s) solved",
            report.exp_gained, report.gold_gained, report.words_solved
        );
        if report.level_up {
            println!("Level up!");
        }
    } else {
        println!("You lose {} health.", report.health_lost);
    }
}

fn show_classes() {
    for class in get_character_classes() {
        println!(
            "{:<8} {} - hp {} atk {} def {} int {}",
            class.id,
            class.name,
            class.base_health,
            class.base_attack,
            class.base_defense,
            class.base_intelligence
        );
        for ability in &class.abilities {
            println!("         {} ({}): {}", ability.name, ability.kind.id(), ability.description);
        }
    }
}

fn show_status(session: &Session) {
    let Some(p) = session.player() else {
        println!("No character.");
        return;
    };
    let class_name = get_character_class(&p.class_id)
        .map(|c| c.name)
        .unwrap_or("?");
    let stats = p.effective_stats();
    println!("{} - {} level {}", p.name, class_name, p.level);
    println!("  XP {}/{}  gold {}", p.experience, p.xp_for_next_level(), p.gold);
    if stats.max_health > p.max_health {
        println!(
            "  health {}/{} (equipment max {}, not used in battle)",
            p.health, p.max_health, stats.max_health
        );
    } else {
        println!("  health {}/{}", p.health, p.max_health);
    }
    println!(
        "  attack {} defense {} intelligence {} (with equipment)",
        stats.attack, stats.defense, stats.intelligence
    );
    println!(
        "  won {} lost {} words {} hints {}",
        p.stats.battles_won, p.stats.battles_lost, p.stats.words_guessed, p.stats.hints_used
    );
    for category in ItemCategory::ALL {
        let items = p.items_of_category(category);
        if items.is_empty() {
            continue;
        }
        println!("  {}:", category.name());
        for item in items {
            let mark = if p.is_equipped(&item.id) { "*" } else { " " };
            println!("    {} {:<18} {}", mark, item.id, item.name);
        }
    }
}

fn show_map(session: &Session) {
    for enemy in get_all_enemies() {
        let lock = if session.is_location_locked(enemy.id) {
            format!("locked until level {}", enemy.required_level)
        } else {
            "open".to_string()
        };
        println!(
            "{:<9} {:<20} hp {:<4} {}",
            enemy.id, enemy.name, enemy.health, lock
        );
    }
}

fn show_shop(session: &Session) {
    for item in get_shop_items() {
        let afford = if session.can_afford(item.id.as_str()) { " " } else { "$" };
        println!(
            "{} {:<20} {:<5} sells {:<4} {}  {}",
            afford,
            item.id,
            item.price,
            sell_price(&item),
            item.name,
            item.effects.join(", ")
        );
    }
}
