use std::io::Write;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use tambola_core::{Announcement, Announcer};

/// Announcer that hands every announcement to a background thread, so the game never waits on output.
#[derive(Debug, Default)]
pub struct Speaker {
    sender: Option<Sender<Announcement>>,
    worker: Option<JoinHandle<()>>,
}

impl Speaker {
    pub fn spawn<W: Write + Send + 'static>(mut out: W) -> Self {
        let (sender, receiver) = mpsc::channel::<Announcement>();
        let worker = thread::spawn(move || {
            for announcement in receiver {
                let voice = announcement.voice();
                log::trace!(
                    "speaking at rate {} volume {} pitch {}",
                    voice.rate,
                    voice.volume,
                    voice.pitch
                );
                // one write per line, a shared stream never sees half an announcement
                let line = format!("🔊 {announcement}\n");
                if let Err(err) = out.write_all(line.as_bytes()).and_then(|()| out.flush()) {
                    log::warn!("Could not voice announcement: {}", err);
                    break;
                }
            }
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    pub fn muted() -> Self {
        Self::default()
    }

    /// Waits until everything announced so far has been voiced.
    pub fn finish(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Announcement thread panicked");
            }
        }
    }
}

impl Announcer for Speaker {
    fn announce(&mut self, announcement: &Announcement) {
        let Some(sender) = &self.sender else {
            log::debug!("muted: {}", announcement);
            return;
        };
        if sender.send(announcement.clone()).is_err() {
            log::debug!("announcement dropped, voice is gone: {}", announcement);
        }
    }
}

impl Drop for Speaker {
    fn drop(&mut self) {
        self.finish();
    }
}
