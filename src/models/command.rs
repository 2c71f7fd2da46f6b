//! Set-command construction for the backlight control utility.

use crate::models::{ColorValue, Zone};

/// A single color-setting request, realized as one utility invocation.
///
/// Constructed from one inbound HTTP call and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetCommand {
    /// Set the left, center, and right zones to one color. The reserved
    /// extra slot has no flag in the whole-keyboard case and is left
    /// untouched.
    All(ColorValue),
    /// Set a single zone to a color.
    Zone(Zone, ColorValue),
}

impl SetCommand {
    /// Builds the argument list for the control utility.
    ///
    /// Arguments are discrete tokens handed to the process as an argv
    /// list. They are never joined into a shell string, so a validated
    /// color is the only client-derived data that can appear here.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::All(color) => [Zone::Left, Zone::Center, Zone::Right]
                .iter()
                .flat_map(|zone| [zone.flag().to_string(), color.as_str().to_string()])
                .collect(),
            Self::Zone(zone, color) => {
                vec![zone.flag().to_string(), color.as_str().to_string()]
            }
        }
    }
}
