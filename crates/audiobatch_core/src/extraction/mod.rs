//! Audio extraction via the external ffmpeg binary.

mod ffmpeg;

pub use ffmpeg::extract_audio;
