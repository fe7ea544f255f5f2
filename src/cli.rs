//! Interactive terminal front end.
//!
//! Typed commands are turned into the same [`UiEvent`]s a page would emit,
//! so the controller cannot tell a keyboard session from a click.

use std::io::{self, BufRead, Write};

use crate::backend::MenuBackend;
use crate::controller::{Control, Controller, Dispatch, Prompter, UiEvent};
use crate::render::MenuView;

pub const HELP: &str = "\
commands:
  add <name>       add a menu item to the current category
  edit <row>       rename the item at <row>
  rm <row>         delete the item at <row>
  soldout <row>    toggle sold-out on the item at <row>
  cat <category>   switch category (espresso, frappuccino, blended, teavana, desert)
  list             show the current category
  help             show this help
  quit             exit";

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Events(Vec<UiEvent>),
    List,
    Help,
    Quit,
}

/// Parse one input line. Rows are 1-based, as printed by the text renderer.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let click = |control: Control| UiEvent::ListClick {
        class: control.class().to_string(),
        row: rest
            .parse::<usize>()
            .ok()
            .and_then(|row| row.checked_sub(1)),
    };

    let command = match word {
        "add" => Command::Events(vec![UiEvent::Input(rest.to_string()), UiEvent::Submit]),
        "edit" => Command::Events(vec![click(Control::Edit)]),
        "rm" => Command::Events(vec![click(Control::Remove)]),
        "soldout" => Command::Events(vec![click(Control::SoldOut)]),
        "cat" => Command::Events(vec![UiEvent::NavClick {
            category: (!rest.is_empty()).then(|| rest.to_string()),
        }]),
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// [`Prompter`] reading answers from stdin.
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(message: &str) -> Option<String> {
        print!("{} ", message);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        let answer = Self::read_line(&format!("{} [{}]:", message, default))?;
        if answer.is_empty() {
            Some(default.to_string())
        } else {
            Some(answer)
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        matches!(
            Self::read_line(&format!("{} (y/N)", message)).as_deref(),
            Some("y" | "Y" | "yes")
        )
    }

    fn alert(&mut self, message: &str) {
        println!("! {}", message);
    }
}

/// Print a view as text, and as markup when `html` is set.
pub fn print_view(view: &MenuView, html: bool) {
    println!("{}", view.category.title());
    print!("{}", view.text());
    if html {
        println!("{}", view.html);
    }
}

/// Run the read-eval-render loop until `quit` or end of input.
pub async fn run_repl<B: MenuBackend>(
    controller: &mut Controller<B, TerminalPrompter>,
    html: bool,
) -> anyhow::Result<()> {
    if controller.start().await == Dispatch::Rendered {
        print_view(controller.view(), html);
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(Command::Events(events)) => {
                let mut rendered = false;
                for event in events {
                    rendered |= controller.handle(event).await == Dispatch::Rendered;
                }
                if rendered {
                    print_view(controller.view(), html);
                }
            }
            Some(Command::List) => print_view(controller.view(), html),
            Some(Command::Help) => println!("{}", HELP),
            Some(Command::Quit) => break,
            None => println!("unknown command, try `help`"),
        }
    }

    Ok(())
}
