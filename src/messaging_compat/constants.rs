pub const MESSAGING_COMPAT_COMPONENT_NAME: &str = "messaging-compat";
