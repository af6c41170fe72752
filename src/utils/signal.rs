use crate::error::Result;
use tokio::runtime::Runtime;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};
#[cfg(windows)]
use tokio::signal::windows::{ctrl_c, CtrlC};

pub const INTERRUPT_MESSAGE: &str = "Interrupted by user. Exiting...";

/// Prints the farewell and ends the process successfully.
pub fn exit_interrupted() -> ! {
    println!("\n\n{INTERRUPT_MESSAGE}");
    std::process::exit(0);
}

/// A Ctrl-C listener that is already registered with the OS. Interrupts
/// arriving after [`register_interrupt`] returns are queued for [`wait`](Self::wait).
pub struct InterruptWatch {
    runtime: Runtime,
    #[cfg(unix)]
    listener: Signal,
    #[cfg(windows)]
    listener: CtrlC,
}

pub fn register_interrupt() -> Result<InterruptWatch> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let listener = {
        let _guard = runtime.enter();
        #[cfg(unix)]
        let listener = signal(SignalKind::interrupt())?;
        #[cfg(windows)]
        let listener = ctrl_c()?;
        listener
    };

    Ok(InterruptWatch { runtime, listener })
}

impl InterruptWatch {
    /// Blocks until Ctrl-C. Returns false if the listener shut down instead.
    pub fn wait(self) -> bool {
        let InterruptWatch {
            runtime,
            mut listener,
        } = self;
        runtime.block_on(listener.recv()).is_some()
    }
}

/// Watches for Ctrl-C on a background thread so that an interrupt during a
/// blocking transfer still ends the whole program cleanly. The handler is in
/// place by the time this returns.
pub fn install_interrupt_handler() -> Result<()> {
    let watch = register_interrupt()?;

    std::thread::Builder::new()
        .name("interrupt".to_string())
        .spawn(move || {
            if watch.wait() {
                exit_interrupted();
            }
            log::warn!("Interrupt listener stopped");
        })?;

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_is_caught_once_registered() {
        let watch = register_interrupt().unwrap();

        let status = std::process::Command::new("kill")
            .arg("-INT")
            .arg(std::process::id().to_string())
            .status()
            .unwrap();
        assert!(status.success());

        assert!(watch.wait());
    }
}
