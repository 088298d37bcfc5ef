use serde::{Deserialize, Serialize};

/// Optional features a notification server advertises through `GetCapabilities`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerCapabilities {
    pub actions: bool,
    pub action_icons: bool,
    pub body: bool,
    pub body_hyperlinks: bool,
    pub body_images: bool,
    pub body_markup: bool,
    pub icon_multi: bool,
    pub icon_static: bool,
    pub persistence: bool,
    pub sound: bool,
    /// Vendor specific capabilities, prefixed with `x-`.
    pub extensions: Vec<String>,
}

impl ServerCapabilities {
    pub fn parse<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut caps = Self::default();
        for name in names {
            match name.as_ref() {
                "actions" => caps.actions = true,
                "action-icons" => caps.action_icons = true,
                "body" => caps.body = true,
                "body-hyperlinks" => caps.body_hyperlinks = true,
                "body-images" => caps.body_images = true,
                "body-markup" => caps.body_markup = true,
                "icon-multi" => caps.icon_multi = true,
                "icon-static" => caps.icon_static = true,
                "persistence" => caps.persistence = true,
                "sound" => caps.sound = true,
                other => caps.extensions.push(other.to_string()),
            }
        }
        caps
    }

    pub fn names(&self) -> Vec<String> {
        let flags = [
            (self.actions, "actions"),
            (self.action_icons, "action-icons"),
            (self.body, "body"),
            (self.body_hyperlinks, "body-hyperlinks"),
            (self.body_images, "body-images"),
            (self.body_markup, "body-markup"),
            (self.icon_multi, "icon-multi"),
            (self.icon_static, "icon-static"),
            (self.persistence, "persistence"),
            (self.sound, "sound"),
        ];
        flags
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, name)| name.to_string())
            .chain(self.extensions.iter().cloned())
            .collect()
    }

    /// What most desktop servers support; used when nothing better is known.
    pub fn basic() -> Self {
        Self {
            actions: true,
            body: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInformation {
    pub name: String,
    pub vendor: String,
    pub version: String,
    pub spec_version: String,
}

/// Properties of the notification platform itself rather than of one server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    /// Whether the platform hands correlation data for a notification back to
    /// the application after it restarts. When false, applications that need
    /// action data after a restart must store it themselves.
    pub persists_correlation_data: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_capabilities() {
        let caps = ServerCapabilities::parse(["actions", "body", "body-markup", "sound"]);
        assert!(caps.actions);
        assert!(caps.body);
        assert!(caps.body_markup);
        assert!(caps.sound);
        assert!(!caps.persistence);
        assert!(caps.extensions.is_empty());
    }

    #[test]
    fn test_parse_keeps_vendor_extensions() {
        let caps = ServerCapabilities::parse(vec!["x-gnome-icon-buttons".to_string()]);
        assert_eq!(caps.extensions, vec!["x-gnome-icon-buttons".to_string()]);
    }

    #[test]
    fn test_names_round_trip_order() {
        let caps = ServerCapabilities::parse(["sound", "actions", "x-vendor"]);
        assert_eq!(caps.names(), vec!["actions", "sound", "x-vendor"]);
    }

    #[test]
    fn test_platform_capabilities_default_is_not_persistent() {
        assert!(!PlatformCapabilities::default().persists_correlation_data);
    }
}
