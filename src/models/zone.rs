//! Backlight zones and the per-zone state snapshot.

use std::fmt;

use serde::Serialize;

/// One addressable region of the keyboard backlight.
///
/// The order of the variants is significant: it matches the fixed line
/// order the control utility prints when queried with no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Left third of the keyboard.
    Left,
    /// Center third of the keyboard.
    Center,
    /// Right third of the keyboard.
    Right,
    /// Reserved trailing slot; device-specific, reported but never set
    /// through the HTTP surface.
    Extra,
}

impl Zone {
    /// All zones in device output order.
    pub const OUTPUT_ORDER: [Self; 4] = [Self::Left, Self::Center, Self::Right, Self::Extra];

    /// Returns the zone name as used in URLs and JSON keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Extra => "extra",
        }
    }

    /// Returns the control utility flag for this zone, derived from the
    /// first letter of its name.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Left => "-l",
            Self::Center => "-c",
            Self::Right => "-r",
            Self::Extra => "-e",
        }
    }

    /// Parses a region path parameter into a settable zone.
    ///
    /// Only `left`, `center`, and `right` are accepted; the reserved
    /// `extra` slot is not independently settable.
    #[must_use]
    pub fn from_param(region: &str) -> Option<Self> {
        match region {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the backlight state as of one query.
///
/// Built fresh from the control utility's output every time; never cached.
/// A zone the utility did not report is absent and omitted from the
/// serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardState {
    /// Color of the left zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Color of the center zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
    /// Color of the right zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    /// Color of the reserved extra slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl KeyboardState {
    /// Builds a snapshot from the captured stdout of a no-argument
    /// invocation of the control utility.
    ///
    /// Mapping is strictly positional: line 0 is `left`, line 1 `center`,
    /// line 2 `right`, line 3 `extra`. A missing line leaves that zone
    /// absent; short output is not an error.
    #[must_use]
    pub fn from_output(stdout: &str) -> Self {
        let mut lines = stdout.lines();
        Self {
            left: lines.next().map(str::to_string),
            center: lines.next().map(str::to_string),
            right: lines.next().map(str::to_string),
            extra: lines.next().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_names() {
        let names: Vec<&str> = Zone::OUTPUT_ORDER.iter().map(|z| z.name()).collect();
        assert_eq!(names, vec!["left", "center", "right", "extra"]);
    }

    #[test]
    fn test_zone_flags_match_first_letter() {
        for zone in Zone::OUTPUT_ORDER {
            let first = zone.name().chars().next().unwrap();
            assert_eq!(zone.flag(), format!("-{first}"));
        }
    }

    #[test]
    fn test_from_param_settable_zones() {
        assert_eq!(Zone::from_param("left"), Some(Zone::Left));
        assert_eq!(Zone::from_param("center"), Some(Zone::Center));
        assert_eq!(Zone::from_param("right"), Some(Zone::Right));
    }

    #[test]
    fn test_from_param_rejects_extra() {
        assert_eq!(Zone::from_param("extra"), None);
    }

    #[test]
    fn test_from_param_rejects_unknown() {
        assert_eq!(Zone::from_param("top"), None);
        assert_eq!(Zone::from_param("LEFT"), None);
        assert_eq!(Zone::from_param(""), None);
    }

    #[test]
    fn test_from_output_full() {
        let state = KeyboardState::from_output("ff0000\n00ff00\n0000ff\nffffff\n");
        assert_eq!(state.left.as_deref(), Some("ff0000"));
        assert_eq!(state.center.as_deref(), Some("00ff00"));
        assert_eq!(state.right.as_deref(), Some("0000ff"));
        assert_eq!(state.extra.as_deref(), Some("ffffff"));
    }

    #[test]
    fn test_from_output_three_lines_leaves_extra_absent() {
        let state = KeyboardState::from_output("ff0000\n00ff00\n0000ff\n");
        assert_eq!(state.left.as_deref(), Some("ff0000"));
        assert_eq!(state.center.as_deref(), Some("00ff00"));
        assert_eq!(state.right.as_deref(), Some("0000ff"));
        assert_eq!(state.extra, None);
    }

    #[test]
    fn test_from_output_two_lines() {
        let state = KeyboardState::from_output("ff0000\n00ff00\n");
        assert_eq!(state.left.as_deref(), Some("ff0000"));
        assert_eq!(state.center.as_deref(), Some("00ff00"));
        assert_eq!(state.right, None);
        assert_eq!(state.extra, None);
    }

    #[test]
    fn test_from_output_empty() {
        let state = KeyboardState::from_output("");
        assert_eq!(state.left, None);
        assert_eq!(state.center, None);
        assert_eq!(state.right, None);
        assert_eq!(state.extra, None);
    }

    #[test]
    fn test_absent_zones_omitted_from_json() {
        let state = KeyboardState::from_output("ff0000\n00ff00\n");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["left"], "ff0000");
        assert_eq!(json["center"], "00ff00");
        assert!(json.get("right").is_none());
        assert!(json.get("extra").is_none());
    }
}
