use super::custom_rom::download_custom_rom;
use super::directory::change_directory;
use super::download::download_item;
use super::group::{download_all, download_magisk_group};
use super::Context;
use crate::error::{Result, SeleneError};
use std::str::FromStr;

const RULE_WIDTH: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ChangeDirectory,
    /// A single catalog entry, by key.
    Item(&'static str),
    CustomRom,
    MagiskGroup,
    All,
}

impl FromStr for MenuChoice {
    type Err = SeleneError;

    fn from_str(s: &str) -> Result<Self> {
        let choice = match s.trim() {
            "0" => MenuChoice::Exit,
            "00" => MenuChoice::ChangeDirectory,
            "1" => MenuChoice::Item("twrp"),
            "2" => MenuChoice::Item("firmware_12"),
            "3" => MenuChoice::Item("firmware_14"),
            "4" => MenuChoice::CustomRom,
            "5" => MenuChoice::Item("mtkclient"),
            "6" => MenuChoice::Item("payload_dumper"),
            "7" => MenuChoice::Item("adb"),
            "8" => MenuChoice::MagiskGroup,
            "9" => MenuChoice::All,
            other => {
                return Err(SeleneError::InvalidChoice {
                    input: other.to_string(),
                })
            }
        };
        Ok(choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

fn print_header() {
    println!("╔{}╗", "═".repeat(50));
    println!("║{}SELENE DOWNLOAD MANAGER{}║", " ".repeat(14), " ".repeat(13));
    println!("╚{}╝", "═".repeat(50));
    println!();
}

fn print_menu(ctx: &Context) {
    println!("Current directory: {}", ctx.session.download_dir().display());
    println!();
    println!("{}", "─".repeat(RULE_WIDTH));
    println!("       Choose download:");
    println!("{}", "─".repeat(RULE_WIDTH));
    println!(" 1. TWRP Recovery");
    println!(" 2. Stock Firmware 12.5");
    println!(" 3. Stock Firmware 14");
    println!(" 4. Custom ROMs (external link)");
    println!(" 5. MTKClient");
    println!(" 6. Payload Dumper");
    println!(" 7. ADB Platform Tools");
    println!(" 8. Magisk and Anti-Bootloop");
    println!(" 9. :::ALL::: (except Custom ROM)");
    println!();
    println!("00. Change directory");
    println!(" 0. Exit");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Runs one menu action. Every download action ends with a pause.
pub fn dispatch(ctx: &mut Context, choice: MenuChoice) -> Result<Flow> {
    match choice {
        MenuChoice::Exit => return Ok(Flow::Exit),
        MenuChoice::ChangeDirectory => {
            change_directory(ctx)?;
            return Ok(Flow::Continue);
        }
        MenuChoice::Item(key) => {
            download_item(ctx, key)?;
        }
        MenuChoice::CustomRom => {
            download_custom_rom(ctx)?;
        }
        MenuChoice::MagiskGroup => {
            download_magisk_group(ctx)?;
        }
        MenuChoice::All => {
            download_all(ctx)?;
        }
    }

    ctx.console.wait_for_enter()?;
    Ok(Flow::Continue)
}

/// Renders the menu, reads one choice and handles it.
pub fn step(ctx: &mut Context) -> Result<Flow> {
    ctx.console.clear_screen();
    print_header();
    print_menu(ctx);

    println!();
    let input = ctx.console.read_line("Enter your choice")?;
    match input.parse::<MenuChoice>() {
        Ok(choice) => dispatch(ctx, choice),
        Err(e) => {
            log::debug!("{e}");
            println!("\nInvalid choice. Please try again.");
            std::thread::sleep(ctx.invalid_choice_pause);
            Ok(Flow::Continue)
        }
    }
}

/// Main loop. Returns once the user picks Exit.
pub fn run(ctx: &mut Context) -> Result<()> {
    while step(ctx)? == Flow::Continue {}
    println!("\nExiting... Goodbye!");
    Ok(())
}
