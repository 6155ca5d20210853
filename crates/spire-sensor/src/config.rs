use std::collections::HashMap;

/// Key resolving the button reported for the tilt sensor's pause channel.
pub const JOYSTICK_BUTTON_START: &str = "joystick_button_start";

/// Integer configuration lookup provided by the host application.
pub trait ConfigLookup {
    fn get_int(&self, key: &str) -> i32;
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for &T {
    fn get_int(&self, key: &str) -> i32 {
        (**self).get_int(key)
    }
}

impl ConfigLookup for HashMap<String, i32> {
    fn get_int(&self, key: &str) -> i32 {
        self.get(key).copied().unwrap_or(0)
    }
}
