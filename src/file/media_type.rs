//! Accepted media types and filename helpers.

use std::fmt;
use std::str::FromStr;

/// Media types accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// MPEG audio.
    Mp3,
    /// MPEG-4 video.
    Mp4,
}

impl MediaType {
    /// All accepted media types.
    pub const ALL: [MediaType; 2] = [MediaType::Mp3, MediaType::Mp4];

    /// Lowercase extension, as stored in `songs.file_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Mp3 => "mp3",
            MediaType::Mp4 => "mp4",
        }
    }

    /// Resolve the media type of an uploaded filename.
    ///
    /// Returns `None` when the extension is missing or not accepted.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = split_extension(filename);
        ext.parse().ok()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mp3" => Ok(MediaType::Mp3),
            "mp4" => Ok(MediaType::Mp4),
            _ => Err(format!("unsupported media type: {s}")),
        }
    }
}

/// Split a filename into its stem and extension (without the dot).
///
/// Only the final path component is searched, and leading dots do not
/// start an extension: `".mp3"` has no extension, `"a.b.mp3"` has `"mp3"`.
pub fn split_extension(filename: &str) -> (&str, &str) {
    let base_start = filename
        .rfind(|c| c == '/' || c == '\\')
        .map_or(0, |i| i + 1);
    let base = &filename[base_start..];

    match base.rfind('.') {
        Some(dot) if base[..dot].chars().any(|c| c != '.') => {
            let idx = base_start + dot;
            (&filename[..idx], &filename[idx + 1..])
        }
        _ => (filename, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename_accepted() {
        assert_eq!(MediaType::from_filename("song.mp3"), Some(MediaType::Mp3));
        assert_eq!(MediaType::from_filename("clip.mp4"), Some(MediaType::Mp4));
        assert_eq!(MediaType::from_filename("LOUD.MP3"), Some(MediaType::Mp3));
        assert_eq!(MediaType::from_filename("live.set.Mp4"), Some(MediaType::Mp4));
    }

    #[test]
    fn test_from_filename_rejected() {
        assert_eq!(MediaType::from_filename("song.wav"), None);
        assert_eq!(MediaType::from_filename("song"), None);
        assert_eq!(MediaType::from_filename(".mp3"), None);
        assert_eq!(MediaType::from_filename("song.mp3.txt"), None);
        assert_eq!(MediaType::from_filename(""), None);
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for media_type in MediaType::ALL {
            assert_eq!(media_type.as_str().parse::<MediaType>(), Ok(media_type));
        }
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("song.mp3"), ("song", "mp3"));
        assert_eq!(split_extension("my.song.mp3"), ("my.song", "mp3"));
        assert_eq!(split_extension("song"), ("song", ""));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("..mp3"), ("..mp3", ""));
        assert_eq!(split_extension("trailing."), ("trailing", ""));
        assert_eq!(split_extension("dir.v2/track"), ("dir.v2/track", ""));
        assert_eq!(split_extension("dir/track.mp4"), ("dir/track", "mp4"));
    }
}
