//! Command vocabulary registry.
//!
//! The IP-control protocol only accepts values drawn from closed, enumerated
//! sets. The tables below mirror the vendor vocabulary; request validation
//! rejects anything outside them before any device interaction is attempted.

/// Launchable applications: public name paired with the webOS application id.
pub const APPS: &[(&str, &str)] = &[
    ("amazon", "amazon"),
    ("appleTV", "com.apple.appletv"),
    ("browser", "com.webos.app.browser"),
    ("disneyPlus", "com.disney.disneyplus-prod"),
    ("lgChannels", "com.webos.app.lgchannels"),
    ("liveTV", "com.webos.app.livetv"),
    ("mediaPlayer", "com.webos.app.mediadiscovery"),
    ("netflix", "netflix"),
    ("youTube", "youtube.leanback.v4"),
];

/// Selectable inputs.
pub const INPUTS: &[&str] = &[
    "dtv", "atv", "cadtv", "catv", "av", "component", "hdmi1", "hdmi2", "hdmi3", "hdmi4",
];

/// Remote-control keys accepted by the key-action command.
pub const KEYS: &[&str] = &[
    "arrowDown",
    "arrowLeft",
    "arrowRight",
    "arrowUp",
    "aspectRatio",
    "audioMode",
    "back",
    "blueButton",
    "captionSubtitle",
    "channelDown",
    "channelList",
    "channelUp",
    "deviceInput",
    "energySaving",
    "exit",
    "fastForward",
    "greenButton",
    "home",
    "info",
    "liveTV",
    "menu",
    "number0",
    "number1",
    "number2",
    "number3",
    "number4",
    "number5",
    "number6",
    "number7",
    "number8",
    "number9",
    "ok",
    "pause",
    "play",
    "previousChannel",
    "programGuide",
    "record",
    "redButton",
    "rewind",
    "screenRemote",
    "settings",
    "sleepTimer",
    "stop",
    "teletext",
    "teletextOption",
    "volumeDown",
    "volumeMute",
    "volumeUp",
    "yellowButton",
];

/// Energy-saving levels.
pub const ENERGY_SAVING_LEVELS: &[&str] =
    &["auto", "screenOff", "maximum", "medium", "minimum", "off"];

/// Picture modes.
pub const PICTURE_MODES: &[&str] = &[
    "vivid", "standard", "eco", "cinema", "sports", "game", "filmmaker", "expert1", "expert2",
];

/// Public names of the launchable applications.
#[must_use]
pub fn app_names() -> Vec<&'static str> {
    APPS.iter().map(|(name, _)| *name).collect()
}

/// webOS application id for a public app name.
#[must_use]
pub fn app_id(name: &str) -> Option<&'static str> {
    APPS.iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, id)| *id)
}

/// Whether `value` names a selectable input.
#[must_use]
pub fn is_input(value: &str) -> bool {
    INPUTS.contains(&value)
}

/// Whether `value` names a remote-control key.
#[must_use]
pub fn is_key(value: &str) -> bool {
    KEYS.contains(&value)
}

/// Whether `value` names an energy-saving level.
#[must_use]
pub fn is_energy_saving_level(value: &str) -> bool {
    ENERGY_SAVING_LEVELS.contains(&value)
}

/// Whether `value` names a picture mode.
#[must_use]
pub fn is_picture_mode(value: &str) -> bool {
    PICTURE_MODES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_registered_values() {
        assert!(is_input("hdmi2"));
        assert!(is_key("volumeUp"));
        assert!(is_energy_saving_level("screenOff"));
        assert!(is_picture_mode("filmmaker"));
    }

    #[test]
    fn should_reject_unregistered_values() {
        assert!(!is_input("hdmi5"));
        assert!(!is_input("HDMI1"));
        assert!(!is_key("powerToggle"));
        assert!(!is_energy_saving_level("ultra"));
        assert!(!is_picture_mode("dynamic"));
    }

    #[test]
    fn should_resolve_app_ids_by_name() {
        assert_eq!(app_id("liveTV"), Some("com.webos.app.livetv"));
        assert_eq!(app_id("netflix"), Some("netflix"));
        assert_eq!(app_id("vimeo"), None);
    }

    #[test]
    fn should_list_app_names() {
        let names = app_names();
        assert!(names.contains(&"youTube"));
        assert_eq!(names.len(), APPS.len());
    }
}
