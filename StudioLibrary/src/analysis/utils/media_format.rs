use std::str::FromStr;
use std::fmt::Display;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaFormat {
    Jpg,
    Jpeg,
    Png,
}

impl FromStr for MediaFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jpg" => Ok(MediaFormat::Jpg),
            "jpeg" => Ok(MediaFormat::Jpeg),
            "png" => Ok(MediaFormat::Png),
            _ => Err(()),
        }
    }
}

impl Display for MediaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            MediaFormat::Jpg => "jpg",
            MediaFormat::Jpeg => "jpeg",
            MediaFormat::Png => "png",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_extensions() {
        assert_eq!(MediaFormat::from_str("jpg"), Ok(MediaFormat::Jpg));
        assert_eq!(MediaFormat::from_str("jpeg"), Ok(MediaFormat::Jpeg));
        assert_eq!(MediaFormat::from_str("png"), Ok(MediaFormat::Png));
    }

    #[test]
    fn rejects_unsupported_extensions() {
        assert!(MediaFormat::from_str("gif").is_err());
        assert!(MediaFormat::from_str("mp4").is_err());
        assert!(MediaFormat::from_str("").is_err());
        assert!(MediaFormat::from_str("JPG").is_err());
    }

    #[test]
    fn displays_lowercase_extension() {
        assert_eq!(MediaFormat::Jpeg.to_string(), "jpeg");
    }
}
