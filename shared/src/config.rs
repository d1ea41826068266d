/// Id of the admin form's image upload input.
pub const INPUT_ID: &str = "id_image";

/// Image already rendered for the stored upload, reused as the preview.
pub const TARGET_SELECTOR: &str = "img[src*='hero']";

/// Console log level: read lifecycle details in debug builds only.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_hero_image_field() {
        assert_eq!(INPUT_ID, "id_image");
        assert_eq!(TARGET_SELECTOR, "img[src*='hero']");
    }

    #[test]
    fn debug_builds_log_read_lifecycle() {
        assert_eq!(log_level() == log::Level::Debug, cfg!(debug_assertions));
    }
}
