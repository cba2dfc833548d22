//! Output platforms and the enabled-platform set.

use serde::{Deserialize, Serialize};
use snippetstream_error::{InputError, InputErrorKind};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// One of the three output targets.
///
/// Parsing accepts the canonical names plus the names of the social networks
/// each target was designed for.
///
/// # Examples
///
/// ```
/// use snippetstream_core::Platform;
///
/// assert_eq!("thread".parse::<Platform>().unwrap(), Platform::Thread);
/// assert_eq!("linkedin".parse::<Platform>().unwrap(), Platform::Post);
/// assert_eq!("X".parse::<Platform>().unwrap(), Platform::Thread);
/// assert!("myspace".parse::<Platform>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Numbered micro-post thread
    #[display("thread")]
    Thread,
    /// Single long-form professional post
    #[display("post")]
    Post,
    /// Image-carousel script
    #[display("carousel")]
    Carousel,
}

impl Platform {
    /// All platforms in response order.
    pub fn all() -> Vec<Platform> {
        Platform::iter().collect()
    }
}

impl FromStr for Platform {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thread" | "twitter" | "x" => Ok(Platform::Thread),
            "post" | "linkedin" => Ok(Platform::Post),
            "carousel" | "instagram" => Ok(Platform::Carousel),
            other => Err(InputError::new(InputErrorKind::UnknownPlatform(
                other.to_string(),
            ))),
        }
    }
}

/// Deduplicated, ordered set of platforms a request asked for.
///
/// # Examples
///
/// ```
/// use snippetstream_core::{EnabledPlatforms, Platform};
///
/// let enabled = EnabledPlatforms::parse(&["x", "twitter", "instagram"]).unwrap();
/// assert_eq!(enabled.len(), 2);
/// assert!(enabled.contains(Platform::Thread));
/// assert!(!enabled.contains(Platform::Post));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnabledPlatforms(Vec<Platform>);

impl EnabledPlatforms {
    /// Every platform enabled.
    pub fn all() -> Self {
        Self(Platform::all())
    }

    /// Build from already-parsed platforms.
    pub fn from_platforms(platforms: impl IntoIterator<Item = Platform>) -> Self {
        let mut list: Vec<Platform> = platforms.into_iter().collect();
        list.sort();
        list.dedup();
        Self(list)
    }

    /// Parse raw identifiers. Unknown identifiers are rejected.
    ///
    /// An empty input yields an empty set; rejecting that is the
    /// orchestrator's call.
    pub fn parse<S: AsRef<str>>(identifiers: &[S]) -> Result<Self, InputError> {
        let parsed = identifiers
            .iter()
            .map(|id| id.as_ref().parse::<Platform>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_platforms(parsed))
    }

    /// Whether `platform` is enabled.
    pub fn contains(&self, platform: Platform) -> bool {
        self.0.contains(&platform)
    }

    /// Number of enabled platforms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no platform is enabled.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate enabled platforms in response order.
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.0.iter().copied()
    }
}

impl Default for EnabledPlatforms {
    fn default() -> Self {
        Self::all()
    }
}
