//! rodio output backend
//!
//! One output stream with a single sink. The track is decoded and appended
//! as an infinitely repeating source the first time playback starts, so the
//! sink never holds more than one copy of it.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::AudioError;
use super::player::Playback;

pub struct RodioPlayback {
    _stream: OutputStream,
    sink: Sink,
    track: PathBuf,
    loaded: bool,
}

impl RodioPlayback {
    /// Open the default output device for `track`
    ///
    /// The file itself is only opened on the first `play`.
    pub fn open(track: &Path) -> Result<Self, AudioError> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Output(e.to_string()))?;
        let sink = Sink::connect_new(stream.mixer());
        sink.pause();

        tracing::info!("Opened audio output for {}", track.display());
        Ok(Self {
            _stream: stream,
            sink,
            track: track.to_path_buf(),
            loaded: false,
        })
    }

    fn load(&mut self) -> Result<(), AudioError> {
        if self.loaded {
            return Ok(());
        }

        let file = File::open(&self.track).map_err(|source| AudioError::Open {
            path: self.track.clone(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| AudioError::Decode(e.to_string()))?;

        self.sink.append(source.repeat_infinite());
        self.loaded = true;
        Ok(())
    }
}

impl Playback for RodioPlayback {
    fn play(&mut self) -> Result<(), AudioError> {
        self.load()?;
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn stop(&mut self) {
        self.sink.stop();
        self.loaded = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn volume(&self) -> f32 {
        self.sink.volume()
    }

    fn is_playing(&self) -> bool {
        !self.sink.is_paused() && !self.sink.empty() && self.sink.get_pos() > Duration::ZERO
    }
}
