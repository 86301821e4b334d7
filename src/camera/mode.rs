//! Camera interaction modes and projection kinds.
//!
//! Both are closed sum types; the only place an out-of-range value can
//! appear is at a conversion boundary (`u8`, strings, TOML), and each of
//! those rejects it with a [`CameraError`].

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// How input drives the camera pose.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Six degrees of freedom fly-through with mouse look.
    #[default]
    Free,
    /// Ground-plane walking with mouse look, no vertical movement.
    FirstPerson,
    /// Trails a target at the orbit radius, facing along the view direction.
    ThirdPerson,
    /// Circles a target on a sphere of the orbit radius.
    Orbit,
    /// Stationary; input is ignored.
    Fixed,
}

impl CameraMode {
    /// Every mode in cycling order.
    pub const ALL: [Self; 5] = [
        Self::Free,
        Self::FirstPerson,
        Self::ThirdPerson,
        Self::Orbit,
        Self::Fixed,
    ];

    /// The mode after this one in [`CameraMode::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Free => Self::FirstPerson,
            Self::FirstPerson => Self::ThirdPerson,
            Self::ThirdPerson => Self::Orbit,
            Self::Orbit => Self::Fixed,
            Self::Fixed => Self::Free,
        }
    }

    /// Whether orientation comes from incremental yaw/pitch/roll.
    #[must_use]
    pub fn uses_euler_look(self) -> bool {
        matches!(self, Self::Free | Self::FirstPerson | Self::ThirdPerson)
    }

    /// Whether position is derived from the target and orbit radius.
    #[must_use]
    pub fn follows_target(self) -> bool {
        matches!(self, Self::ThirdPerson | Self::Orbit)
    }

    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::FirstPerson => "first_person",
            Self::ThirdPerson => "third_person",
            Self::Orbit => "orbit",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraMode {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CameraError::InvalidMode(s.to_owned()))
    }
}

impl TryFrom<u8> for CameraMode {
    type Error = CameraError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| CameraError::InvalidMode(value.to_string()))
    }
}

/// Which projection matrix the camera builds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Perspective frustum driven by the vertical field of view.
    #[default]
    Perspective,
    /// Parallel projection with half-height `zoom`.
    Orthographic,
}

impl ProjectionKind {
    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Perspective => "perspective",
            Self::Orthographic => "orthographic",
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionKind {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perspective" => Ok(Self::Perspective),
            "orthographic" => Ok(Self::Orthographic),
            _ => Err(CameraError::InvalidProjection(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for ProjectionKind {
    type Error = CameraError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Perspective),
            1 => Ok(Self::Orthographic),
            _ => Err(CameraError::InvalidProjection(value.to_string())),
        }
    }
}
