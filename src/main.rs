use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

mod assistant;
mod gui;
mod profile;
mod router;
mod session;
mod settings;
mod shell;
mod theme;

use profile::ProfileField;
use router::Page;
use session::{AuthScreen, Credentials, Registration};
use settings::{default_base_path, ensure_base_folders, load_or_init_settings, save_settings};
use shell::AppShell;

#[derive(Parser, Debug)]
#[command(
    name = "suraksha-kavach",
    version,
    about = "Suraksha Kavach school-safety shell (local-only, no backend)"
)]
struct CliArgs {
    /// Choose GUI (default) or CLI mode
    #[arg(long, value_enum, default_value = "gui")]
    mode: RunMode,
    /// Override data base path (defaults to ./data next to the exe)
    #[arg(long)]
    base_path: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RunMode {
    Gui,
    Cli,
}

fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    let base_path = args.base_path.unwrap_or_else(default_base_path);

    if let Err(e) = ensure_base_folders(&base_path) {
        log::error!("failed to create base folders at {}: {e}", base_path.display());
        return;
    }

    let mut settings = match load_or_init_settings(&base_path) {
        Ok(s) => s,
        Err(e) => {
            log::error!("failed to load settings: {e}");
            return;
        }
    };
    settings.base_path = base_path.to_string_lossy().to_string();
    if let Err(e) = save_settings(&settings, &base_path) {
        log::warn!("could not save settings: {e}");
    }

    match args.mode {
        RunMode::Gui => {
            if let Err(e) = gui::launch_gui(base_path, settings) {
                log::error!("failed to start GUI: {e}");
            }
        }
        RunMode::Cli => run_cli(),
    }
}

/// Line-based front end over the same AppShell the GUI renders. Handy for
/// poking at the session/profile/router state without a window.
fn run_cli() {
    println!("Suraksha Kavach CLI");
    println!("Type 'help' for commands, 'exit' to quit.\n");

    let mut shell = AppShell::new();

    loop {
        print_status(&shell);
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            println!("Error reading input. Exiting.");
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            println!("Goodbye");
            break;
        }
        handle_command(&mut shell, line);
    }
}

fn print_status(shell: &AppShell) {
    if let Some(profile) = shell.profile() {
        println!(
            "[{} | {} | page: {}]",
            profile.name,
            profile.school,
            shell.current_page().label()
        );
    } else {
        println!("[signed out | screen: {:?}]", shell.auth_screen());
    }
}

fn handle_command(shell: &mut AppShell, line: &str) {
    let (cmd, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match cmd {
        "help" => {
            println!("  login <email>            sign in (placeholder auth)");
            println!("  register <name>;<email>;<school>");
            println!("  logout");
            println!("  go <page-id>             pages: home dashboard modules ai-chat evacuation-map sos");
            println!("  pages                    list page ids");
            println!("  profile                  show the committed profile");
            println!("  edit                     start editing the profile");
            println!("  set name|email|school <value>");
            println!("  save / cancel            finish editing");
            println!("  ask <question>           AI assistant placeholder");
        }
        "login" => {
            if rest.is_empty() {
                println!("Usage: login <email>");
                return;
            }
            let credentials = Credentials {
                email: rest.to_string(),
                password: String::new(),
            };
            match shell.login(&credentials) {
                Ok(()) => println!("Signed in as {rest}."),
                Err(e) => println!("Login failed: {e}"),
            }
        }
        "register" => {
            let parts: Vec<&str> = rest.split(';').map(str::trim).collect();
            if parts.len() != 3 {
                println!("Usage: register <name>;<email>;<school>");
                return;
            }
            shell.show_auth_screen(AuthScreen::Register);
            let registration = Registration {
                name: parts[0].to_string(),
                email: parts[1].to_string(),
                school: parts[2].to_string(),
                password: String::new(),
            };
            match shell.register(&registration) {
                Ok(()) => println!("Account created for {}.", parts[0]),
                Err(e) => println!("Registration failed: {e}"),
            }
        }
        "logout" => {
            shell.logout();
            println!("Signed out.");
        }
        "pages" => {
            for page in Page::ALL {
                println!("  {:<15} {}", page.id(), page.label());
            }
        }
        "go" => {
            if !shell.is_authenticated() {
                println!("Sign in first.");
                return;
            }
            shell.go_id(rest);
            println!("Now on: {}", shell.current_page().label());
        }
        "profile" => match shell.profile() {
            Some(p) => println!("{} <{}> at {}", p.name, p.email, p.school),
            None => println!("Signed out."),
        },
        "edit" => match shell.editor_mut() {
            Some(editor) => {
                editor.begin_edit();
                println!("Editing. Use 'set', then 'save' or 'cancel'.");
            }
            None => println!("Sign in first."),
        },
        "set" => {
            let Some(editor) = shell.editor_mut() else {
                println!("Sign in first.");
                return;
            };
            if !editor.is_editing() {
                println!("Not editing. Run 'edit' first.");
                return;
            }
            let (field, value) = match rest.split_once(' ') {
                Some((f, v)) => (f, v.trim()),
                None => {
                    println!("Usage: set name|email|school <value>");
                    return;
                }
            };
            let field = match field {
                "name" => ProfileField::Name,
                "email" => ProfileField::Email,
                "school" => ProfileField::School,
                other => {
                    println!("Unknown field '{other}'.");
                    return;
                }
            };
            editor.set_field(field, value);
            println!("Draft updated.");
        }
        "save" => match shell.editor_mut() {
            Some(editor) if editor.is_editing() => {
                editor.save();
                println!("Profile saved.");
            }
            _ => println!("Nothing to save."),
        },
        "cancel" => match shell.editor_mut() {
            Some(editor) if editor.is_editing() => {
                editor.cancel();
                println!("Edit discarded.");
            }
            _ => println!("Nothing to cancel."),
        },
        "ask" => {
            if rest.is_empty() {
                println!("Usage: ask <question>");
            } else {
                println!("Kavach: {}\n", assistant::placeholder_reply(rest));
            }
        }
        _ => println!("Unknown command. Type 'help'."),
    }
}
