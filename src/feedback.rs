//! Audio cues for list actions, gated by the mute flag.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::model::config::SoundConfig;

/// A named sound cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// An item was checked off
    Tick,
    /// Any other successful action
    Click,
    /// The popup opened
    Chimes,
}

impl Sound {
    pub const ALL: [Sound; 3] = [Sound::Tick, Sound::Click, Sound::Chimes];

    pub fn name(self) -> &'static str {
        match self {
            Sound::Tick => "tick",
            Sound::Click => "click",
            Sound::Chimes => "chimes",
        }
    }

    pub fn from_name(name: &str) -> Option<Sound> {
        Sound::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Error type for sound playback
#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    #[error("no file configured for cue '{0}'")]
    NoFile(&'static str),
    #[error("could not run '{player}': {source}")]
    Spawn { player: String, source: io::Error },
    #[error("could not ring bell: {0}")]
    Bell(#[from] io::Error),
}

/// Something that can play a cue
pub trait SoundSink {
    fn play(&mut self, sound: Sound) -> Result<(), SoundError>;
}

/// Plays nothing
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _sound: Sound) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Rings the terminal bell for every cue
pub struct BellSink<W: Write> {
    out: W,
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        BellSink { out }
    }
}

impl<W: Write> SoundSink for BellSink<W> {
    fn play(&mut self, _sound: Sound) -> Result<(), SoundError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Spawns an external player (`<player> <file>`) per cue without waiting on it
pub struct CommandSink {
    player: String,
    files: HashMap<Sound, PathBuf>,
}

impl CommandSink {
    /// Relative file paths are resolved against `base_dir`. Unknown cue names are ignored.
    pub fn new(player: impl Into<String>, files: &HashMap<String, String>, base_dir: &Path) -> Self {
        let files = files
            .iter()
            .filter_map(|(name, file)| {
                let sound = Sound::from_name(name)?;
                Some((sound, base_dir.join(file)))
            })
            .collect();
        CommandSink {
            player: player.into(),
            files,
        }
    }
}

impl SoundSink for CommandSink {
    fn play(&mut self, sound: Sound) -> Result<(), SoundError> {
        let file = self.files.get(&sound).ok_or(SoundError::NoFile(sound.name()))?;
        let mut child = Command::new(&self.player)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SoundError::Spawn {
                player: self.player.clone(),
                source: e,
            })?;
        // Reap in the background so the event loop never waits on playback
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Build the sink described by `[sound]` in config.toml
pub fn sink_from_config(config: &SoundConfig, base_dir: &Path) -> Box<dyn SoundSink> {
    match &config.player {
        Some(player) => Box::new(CommandSink::new(player.clone(), &config.files, base_dir)),
        None if config.bell => Box::new(BellSink::new(io::stdout())),
        None => Box::new(NullSink),
    }
}

/// Routes cues to a sink unless muted. Playback errors never escape.
pub struct Feedback {
    sink: Box<dyn SoundSink>,
    muted: bool,
}

impl Feedback {
    pub fn new(sink: Box<dyn SoundSink>, muted: bool) -> Self {
        Feedback { sink, muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn play(&mut self, sound: Sound) {
        if self.muted {
            return;
        }
        if let Err(e) = self.sink.play(sound) {
            tracing::debug!(cue = sound.name(), error = %e, "sound playback failed");
        }
    }
}
