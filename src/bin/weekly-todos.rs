//! A line-based front-end to a remote to-do store.
//!
//! The store URL is read from the `WEEKLY_TODOS_API_URL` environment variable.
//! You can also set the RUST_LOG environment variable to display more info about the calls.

use tokio::io::{AsyncBufReadExt, BufReader};

use weekly_todos::client::Client;
use weekly_todos::utils::print_state;
use weekly_todos::{Config, Day, TodoSyncController};

const HELP: &str = "Commands: day <mon..sun>, today, add <text>, toggle <n>, rm <n>, refresh, list, help, quit";

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            std::process::exit(1);
        },
    };
    println!("Using the store at {}", config.api_url());
    println!("{}", HELP);

    let controller = TodoSyncController::new(Client::new(&config));
    controller.initialize().await;
    print_state(&controller.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Unable to read from stdin: {}", err);
                break;
            },
        };

        let line = line.trim();
        let (command, argument) = match line.find(' ') {
            Some(pos) => (&line[..pos], line[pos..].trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            },
            "list" => {},
            "refresh" => { controller.refresh().await; },
            "today" => { controller.load_day(Day::today()).await; },
            "day" => match argument.parse::<Day>() {
                Ok(day) => { controller.load_day(day).await; },
                Err(err) => println!("{}", err),
            },
            "add" => {
                controller.set_pending_input(argument);
                if controller.submit().await == false {
                    println!("The task has not been added");
                }
            },
            "toggle" | "rm" => {
                let task_id = argument.parse::<usize>().ok()
                    .and_then(|position| position.checked_sub(1))
                    .and_then(|index| controller.state().tasks().get(index).map(|task| task.id().clone()));
                let task_id = match task_id {
                    None => {
                        println!("No such task: {:?}", argument);
                        continue;
                    },
                    Some(id) => id,
                };
                if command == "toggle" {
                    controller.toggle(&task_id).await;
                } else {
                    controller.delete_task(&task_id).await;
                }
            },
            other => {
                println!("Unknown command {:?}. {}", other, HELP);
                continue;
            },
        }
        print_state(&controller.state());
    }
}
