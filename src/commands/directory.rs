use super::Context;
use crate::error::Result;
use crate::utils::fs;

/// Prompts for a new download directory and creates it. The session keeps
/// the previous directory if the input is blank or creation fails.
pub fn change_directory(ctx: &mut Context) -> Result<bool> {
    let current = ctx.session.download_dir().to_path_buf();

    println!("\nCurrent directory: {}", current.display());
    let input = ctx.console.read_line("Please paste new directory here")?;
    let input = input.trim();
    if input.is_empty() {
        return Ok(false);
    }

    let new_dir = fs::expand_home(input);
    let changed = match fs::ensure_dir_exists(&new_dir) {
        Ok(()) => {
            println!(
                "Changed directory from '{}' to '{}'",
                current.display(),
                new_dir.display()
            );
            println!("All files will be downloaded to this folder");
            ctx.session.set_download_dir(new_dir);
            true
        }
        Err(e) => {
            log::warn!("Keeping {current:?}: {e}");
            println!("Error creating directory: {e}");
            false
        }
    };

    ctx.console.wait_for_enter()?;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;
    use crate::utils::console::tests::ScriptedConsole;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_change_to_new_directory() {
        let mut h = Harness::new(&[]);
        let target = h.temp.path().join("roms").join("selene");
        h.console = ScriptedConsole::new(&[target.to_str().unwrap()]);

        let mut ctx = h.context();
        assert!(change_directory(&mut ctx).unwrap());
        assert_eq!(ctx.session.download_dir(), target.as_path());
        assert!(target.is_dir());
    }

    #[test]
    fn test_uncreatable_directory_keeps_previous() {
        let mut h = Harness::new(&[]);
        let blocker = h.temp.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();
        h.console = ScriptedConsole::new(&[blocker.join("sub").to_str().unwrap()]);

        let before = h.download_dir();
        let mut ctx = h.context();
        assert!(!change_directory(&mut ctx).unwrap());
        assert_eq!(ctx.session.download_dir(), before.as_path());
    }

    #[test]
    fn test_blank_input_keeps_previous() {
        let mut h = Harness::new(&["   "]);
        let before = h.download_dir();
        let mut ctx = h.context();
        assert!(!change_directory(&mut ctx).unwrap());
        assert_eq!(ctx.session.download_dir(), before.as_path());
    }
}
