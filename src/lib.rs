//  ______    _______   _______   _______  _________  _______
// (  ___ \  (  ____ \ (  ____ \ (  ____ ) \__   __/ (  ____ \
// | (   ) ) | (    \/ | (    \/ | (    )|    ) (    | (    \/
// | (__/ /  | (__     | (__     | (____)|    | |    | (__
// |  __ (   |  __)    |  __)    |  _____)    | |    |  __)
// | (  \ \  | (       | (       | (          | |    | (
// | )___) ) | (____/\ | (____/\ | )       ___) (___ | (____/\
// |/ \___/  (_______/ (_______/ |/        \_______/ (_______/

pub mod error;
pub mod tones;
pub mod parser;
pub mod render;
pub mod output;
pub mod waveform;
pub mod preview;

pub use error::BeepError;
pub use parser::{NoteEvent, NoteSequence, parse, is_sharp, count_spaces};
pub use render::{OutputFormat, render};
pub use output::{Destination, sanitize_filename};
pub use waveform::WaveformType;
pub use preview::PreviewOptions;
